//! handlers/material_etiquetado_handler.rs

use actix_web::web;

use crate::handlers::imagen::reemplazar_imagen;
use crate::handlers::respuesta::{creado, mensaje, ok, Respuesta};
use crate::models::comun_model::{CambioEstatus, ImagenPayload, PaginacionQuery};
use crate::models::material_etiquetado_model::{
    MaterialEtiquetadoFiltros, MaterialEtiquetadoForm,
};
use crate::models::permiso_model::PERMISO_MATERIALES_ETIQUETADO;
use crate::models::sesion_model::SesionUsuario;
use crate::services::material_etiquetado_service::MaterialEtiquetadoService;
use crate::services::storage_service::StorageService;

/// GET /api/materialesetiquetado
pub async fn listar_materiales_endpoint(
    sesion: SesionUsuario,
    service: web::Data<MaterialEtiquetadoService>,
    filtros: web::Query<MaterialEtiquetadoFiltros>,
    paginacion: web::Query<PaginacionQuery>,
) -> Respuesta {
    sesion.requiere_permiso(PERMISO_MATERIALES_ETIQUETADO)?;
    Ok(ok(service.listar(&filtros, &paginacion).await?))
}

/// GET /api/materialesetiquetado/dropdown
pub async fn dropdown_materiales_endpoint(
    _sesion: SesionUsuario,
    service: web::Data<MaterialEtiquetadoService>,
) -> Respuesta {
    Ok(ok(service.dropdown().await?))
}

/// GET /api/materialesetiquetado/{id}
pub async fn obtener_material_endpoint(
    sesion: SesionUsuario,
    service: web::Data<MaterialEtiquetadoService>,
    path: web::Path<i64>,
) -> Respuesta {
    sesion.requiere_permiso(PERMISO_MATERIALES_ETIQUETADO)?;
    Ok(ok(service.obtener(path.into_inner()).await?))
}

/// POST /api/materialesetiquetado
pub async fn crear_material_endpoint(
    sesion: SesionUsuario,
    service: web::Data<MaterialEtiquetadoService>,
    req_body: web::Json<MaterialEtiquetadoForm>,
) -> Respuesta {
    sesion.requiere_permiso(PERMISO_MATERIALES_ETIQUETADO)?;
    let id = service.crear(req_body.into_inner()).await?;
    Ok(creado(id, "Material de etiquetado creado"))
}

/// PUT /api/materialesetiquetado/{id}
pub async fn actualizar_material_endpoint(
    sesion: SesionUsuario,
    service: web::Data<MaterialEtiquetadoService>,
    path: web::Path<i64>,
    req_body: web::Json<MaterialEtiquetadoForm>,
) -> Respuesta {
    sesion.requiere_permiso(PERMISO_MATERIALES_ETIQUETADO)?;
    service
        .actualizar(path.into_inner(), req_body.into_inner())
        .await?;
    Ok(mensaje("Material de etiquetado actualizado"))
}

/// PATCH /api/materialesetiquetado/{id}/estatus
pub async fn estatus_material_endpoint(
    sesion: SesionUsuario,
    service: web::Data<MaterialEtiquetadoService>,
    path: web::Path<i64>,
    req_body: web::Json<CambioEstatus>,
) -> Respuesta {
    sesion.requiere_permiso(PERMISO_MATERIALES_ETIQUETADO)?;
    service
        .cambiar_estatus(path.into_inner(), req_body.activo)
        .await?;
    Ok(mensaje("Estatus actualizado"))
}

/// DELETE /api/materialesetiquetado/{id}
pub async fn eliminar_material_endpoint(
    sesion: SesionUsuario,
    service: web::Data<MaterialEtiquetadoService>,
    path: web::Path<i64>,
) -> Respuesta {
    sesion.requiere_permiso(PERMISO_MATERIALES_ETIQUETADO)?;
    service.eliminar(path.into_inner()).await?;
    Ok(mensaje("Material de etiquetado eliminado"))
}

/// POST /api/materialesetiquetado/{id}/imagen
pub async fn imagen_material_endpoint(
    sesion: SesionUsuario,
    service: web::Data<MaterialEtiquetadoService>,
    storage: web::Data<StorageService>,
    path: web::Path<i64>,
    req_body: web::Json<ImagenPayload>,
) -> Respuesta {
    sesion.requiere_permiso(PERMISO_MATERIALES_ETIQUETADO)?;
    let id = path.into_inner();
    service.obtener(id).await?;
    reemplazar_imagen(&storage, "materialesetiquetado", &req_body, |url| async move {
        service.actualizar_imagen(id, &url).await
    })
    .await
}
