//! handlers/materia_prima_handler.rs

use actix_web::web;

use crate::handlers::respuesta::{creado, mensaje, ok, Respuesta};
use crate::models::comun_model::{CambioEstatus, PaginacionQuery};
use crate::models::materia_prima_model::{MateriaPrimaFiltros, MateriaPrimaForm};
use crate::models::permiso_model::PERMISO_MATERIA_PRIMA;
use crate::models::sesion_model::SesionUsuario;
use crate::services::materia_prima_service::MateriaPrimaService;

/// GET /api/materiaprima
pub async fn listar_materia_prima_endpoint(
    sesion: SesionUsuario,
    service: web::Data<MateriaPrimaService>,
    filtros: web::Query<MateriaPrimaFiltros>,
    paginacion: web::Query<PaginacionQuery>,
) -> Respuesta {
    sesion.requiere_permiso(PERMISO_MATERIA_PRIMA)?;
    Ok(ok(service.listar(&filtros, &paginacion).await?))
}

/// GET /api/materiaprima/dropdown
pub async fn dropdown_materia_prima_endpoint(
    _sesion: SesionUsuario,
    service: web::Data<MateriaPrimaService>,
) -> Respuesta {
    Ok(ok(service.dropdown().await?))
}

/// GET /api/materiaprima/{id}
pub async fn obtener_materia_prima_endpoint(
    sesion: SesionUsuario,
    service: web::Data<MateriaPrimaService>,
    path: web::Path<i64>,
) -> Respuesta {
    sesion.requiere_permiso(PERMISO_MATERIA_PRIMA)?;
    Ok(ok(service.obtener(path.into_inner()).await?))
}

/// POST /api/materiaprima
/// `costoconfactor` se calcula, no se recibe.
pub async fn crear_materia_prima_endpoint(
    sesion: SesionUsuario,
    service: web::Data<MateriaPrimaService>,
    req_body: web::Json<MateriaPrimaForm>,
) -> Respuesta {
    sesion.requiere_permiso(PERMISO_MATERIA_PRIMA)?;
    let id = service.crear(req_body.into_inner()).await?;
    Ok(creado(id, "Materia prima creada"))
}

/// PUT /api/materiaprima/{id}
pub async fn actualizar_materia_prima_endpoint(
    sesion: SesionUsuario,
    service: web::Data<MateriaPrimaService>,
    path: web::Path<i64>,
    req_body: web::Json<MateriaPrimaForm>,
) -> Respuesta {
    sesion.requiere_permiso(PERMISO_MATERIA_PRIMA)?;
    service
        .actualizar(path.into_inner(), req_body.into_inner())
        .await?;
    Ok(mensaje("Materia prima actualizada"))
}

/// PATCH /api/materiaprima/{id}/estatus
pub async fn estatus_materia_prima_endpoint(
    sesion: SesionUsuario,
    service: web::Data<MateriaPrimaService>,
    path: web::Path<i64>,
    req_body: web::Json<CambioEstatus>,
) -> Respuesta {
    sesion.requiere_permiso(PERMISO_MATERIA_PRIMA)?;
    service
        .cambiar_estatus(path.into_inner(), req_body.activo)
        .await?;
    Ok(mensaje("Estatus actualizado"))
}

/// DELETE /api/materiaprima/{id}
pub async fn eliminar_materia_prima_endpoint(
    sesion: SesionUsuario,
    service: web::Data<MateriaPrimaService>,
    path: web::Path<i64>,
) -> Respuesta {
    sesion.requiere_permiso(PERMISO_MATERIA_PRIMA)?;
    service.eliminar(path.into_inner()).await?;
    Ok(mensaje("Materia prima eliminada"))
}
