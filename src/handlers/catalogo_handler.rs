//! handlers/catalogo_handler.rs
//! Catálogos por cliente y los productos que contienen.

use actix_web::web;

use crate::handlers::imagen::reemplazar_imagen;
use crate::handlers::respuesta::{creado, mensaje, ok, ApiError, Respuesta};
use crate::models::catalogo_model::{
    Catalogo, CatalogoFiltros, CatalogoForm, PrecioCatalogoForm, ProductoCatalogoForm,
};
use crate::models::comun_model::{CambioEstatus, ImagenPayload, PaginacionQuery};
use crate::models::permiso_model::PERMISO_CATALOGOS;
use crate::models::sesion_model::SesionUsuario;
use crate::services::catalogo_service::CatalogoService;
use crate::services::storage_service::StorageService;

/// Carga el catálogo y valida que la sesión pueda tocarlo
async fn catalogo_de_sesion(
    sesion: &SesionUsuario,
    service: &CatalogoService,
    id: i64,
) -> Result<Catalogo, ApiError> {
    sesion.requiere_permiso(PERMISO_CATALOGOS)?;
    let catalogo = service.obtener(id).await?;
    sesion.verificar_cliente(Some(catalogo.clienteid))?;
    Ok(catalogo)
}

/// GET /api/catalogos
pub async fn listar_catalogos_endpoint(
    sesion: SesionUsuario,
    service: web::Data<CatalogoService>,
    filtros: web::Query<CatalogoFiltros>,
    paginacion: web::Query<PaginacionQuery>,
) -> Respuesta {
    sesion.requiere_permiso(PERMISO_CATALOGOS)?;
    let mut filtros = filtros.into_inner();
    filtros.clienteid = sesion.alcance_cliente(filtros.clienteid);
    Ok(ok(service.listar(&filtros, &paginacion).await?))
}

/// GET /api/catalogos/dropdown?clienteid=
pub async fn dropdown_catalogos_endpoint(
    sesion: SesionUsuario,
    service: web::Data<CatalogoService>,
    filtros: web::Query<CatalogoFiltros>,
) -> Respuesta {
    let alcance = sesion.alcance_cliente(filtros.clienteid);
    Ok(ok(service.dropdown(alcance).await?))
}

/// GET /api/catalogos/{id}
pub async fn obtener_catalogo_endpoint(
    sesion: SesionUsuario,
    service: web::Data<CatalogoService>,
    path: web::Path<i64>,
) -> Respuesta {
    let catalogo = catalogo_de_sesion(&sesion, &service, path.into_inner()).await?;
    Ok(ok(catalogo))
}

/// POST /api/catalogos
pub async fn crear_catalogo_endpoint(
    sesion: SesionUsuario,
    service: web::Data<CatalogoService>,
    req_body: web::Json<CatalogoForm>,
) -> Respuesta {
    sesion.requiere_permiso(PERMISO_CATALOGOS)?;
    sesion.verificar_cliente(Some(req_body.clienteid))?;
    let id = service.crear(req_body.into_inner()).await?;
    Ok(creado(id, "Catálogo creado"))
}

/// PUT /api/catalogos/{id}
pub async fn actualizar_catalogo_endpoint(
    sesion: SesionUsuario,
    service: web::Data<CatalogoService>,
    path: web::Path<i64>,
    req_body: web::Json<CatalogoForm>,
) -> Respuesta {
    let id = path.into_inner();
    catalogo_de_sesion(&sesion, &service, id).await?;
    // Tampoco se puede mover a otro cliente
    sesion.verificar_cliente(Some(req_body.clienteid))?;
    service.actualizar(id, req_body.into_inner()).await?;
    Ok(mensaje("Catálogo actualizado"))
}

/// PATCH /api/catalogos/{id}/estatus
pub async fn estatus_catalogo_endpoint(
    sesion: SesionUsuario,
    service: web::Data<CatalogoService>,
    path: web::Path<i64>,
    req_body: web::Json<CambioEstatus>,
) -> Respuesta {
    let id = path.into_inner();
    catalogo_de_sesion(&sesion, &service, id).await?;
    service.cambiar_estatus(id, req_body.activo).await?;
    Ok(mensaje("Estatus actualizado"))
}

/// DELETE /api/catalogos/{id}
pub async fn eliminar_catalogo_endpoint(
    sesion: SesionUsuario,
    service: web::Data<CatalogoService>,
    path: web::Path<i64>,
) -> Respuesta {
    let id = path.into_inner();
    catalogo_de_sesion(&sesion, &service, id).await?;
    service.eliminar(id).await?;
    Ok(mensaje("Catálogo eliminado"))
}

/// POST /api/catalogos/{id}/imagen
pub async fn imagen_catalogo_endpoint(
    sesion: SesionUsuario,
    service: web::Data<CatalogoService>,
    storage: web::Data<StorageService>,
    path: web::Path<i64>,
    req_body: web::Json<ImagenPayload>,
) -> Respuesta {
    let id = path.into_inner();
    catalogo_de_sesion(&sesion, &service, id).await?;
    reemplazar_imagen(&storage, "catalogos", &req_body, |url| async move {
        service.actualizar_imagen(id, &url).await
    })
    .await
}

/// GET /api/catalogos/{id}/productos
pub async fn productos_catalogo_endpoint(
    sesion: SesionUsuario,
    service: web::Data<CatalogoService>,
    path: web::Path<i64>,
) -> Respuesta {
    let id = path.into_inner();
    catalogo_de_sesion(&sesion, &service, id).await?;
    Ok(ok(service.productos(id).await?))
}

/// POST /api/catalogos/{id}/productos
pub async fn agregar_producto_endpoint(
    sesion: SesionUsuario,
    service: web::Data<CatalogoService>,
    path: web::Path<i64>,
    req_body: web::Json<ProductoCatalogoForm>,
) -> Respuesta {
    let id = path.into_inner();
    catalogo_de_sesion(&sesion, &service, id).await?;
    let nuevo = service.agregar_producto(id, req_body.into_inner()).await?;
    Ok(creado(nuevo, "Producto agregado al catálogo"))
}

/// PUT /api/catalogos/{id}/productos/{productoid}
pub async fn precio_producto_endpoint(
    sesion: SesionUsuario,
    service: web::Data<CatalogoService>,
    path: web::Path<(i64, i64)>,
    req_body: web::Json<PrecioCatalogoForm>,
) -> Respuesta {
    let (id, productoid) = path.into_inner();
    catalogo_de_sesion(&sesion, &service, id).await?;
    service
        .actualizar_precio(id, productoid, req_body.into_inner())
        .await?;
    Ok(mensaje("Precio actualizado"))
}

/// DELETE /api/catalogos/{id}/productos/{productoid}
pub async fn quitar_producto_endpoint(
    sesion: SesionUsuario,
    service: web::Data<CatalogoService>,
    path: web::Path<(i64, i64)>,
) -> Respuesta {
    let (id, productoid) = path.into_inner();
    catalogo_de_sesion(&sesion, &service, id).await?;
    service.quitar_producto(id, productoid).await?;
    Ok(mensaje("Producto removido del catálogo"))
}
