//! handlers/zona_handler.rs

use actix_web::web;

use crate::handlers::respuesta::{creado, mensaje, ok, Respuesta};
use crate::models::comun_model::{CambioEstatus, PaginacionQuery};
use crate::models::permiso_model::PERMISO_ZONAS;
use crate::models::sesion_model::SesionUsuario;
use crate::models::zona_model::{ZonaFiltros, ZonaForm};
use crate::services::zona_service::ZonaService;

/// GET /api/zonas
pub async fn listar_zonas_endpoint(
    sesion: SesionUsuario,
    service: web::Data<ZonaService>,
    filtros: web::Query<ZonaFiltros>,
    paginacion: web::Query<PaginacionQuery>,
) -> Respuesta {
    sesion.requiere_permiso(PERMISO_ZONAS)?;
    Ok(ok(service.listar(&filtros, &paginacion).await?))
}

/// GET /api/zonas/dropdown
/// Con `?clienteid=` regresa sólo las zonas asignadas a ese cliente.
pub async fn dropdown_zonas_endpoint(
    sesion: SesionUsuario,
    service: web::Data<ZonaService>,
    query: web::Query<DropdownZonasQuery>,
) -> Respuesta {
    let opciones = match sesion.alcance_cliente(query.clienteid) {
        Some(clienteid) => service.dropdown_por_cliente(clienteid).await?,
        None => service.dropdown().await?,
    };
    Ok(ok(opciones))
}

#[derive(Debug, serde::Deserialize)]
pub struct DropdownZonasQuery {
    pub clienteid: Option<i64>,
}

/// GET /api/zonas/{id}
pub async fn obtener_zona_endpoint(
    sesion: SesionUsuario,
    service: web::Data<ZonaService>,
    path: web::Path<i64>,
) -> Respuesta {
    sesion.requiere_permiso(PERMISO_ZONAS)?;
    Ok(ok(service.obtener(path.into_inner()).await?))
}

/// POST /api/zonas
pub async fn crear_zona_endpoint(
    sesion: SesionUsuario,
    service: web::Data<ZonaService>,
    req_body: web::Json<ZonaForm>,
) -> Respuesta {
    sesion.requiere_permiso(PERMISO_ZONAS)?;
    let id = service.crear(req_body.into_inner()).await?;
    Ok(creado(id, "Zona creada"))
}

/// PUT /api/zonas/{id}
pub async fn actualizar_zona_endpoint(
    sesion: SesionUsuario,
    service: web::Data<ZonaService>,
    path: web::Path<i64>,
    req_body: web::Json<ZonaForm>,
) -> Respuesta {
    sesion.requiere_permiso(PERMISO_ZONAS)?;
    service
        .actualizar(path.into_inner(), req_body.into_inner())
        .await?;
    Ok(mensaje("Zona actualizada"))
}

/// PATCH /api/zonas/{id}/estatus
pub async fn estatus_zona_endpoint(
    sesion: SesionUsuario,
    service: web::Data<ZonaService>,
    path: web::Path<i64>,
    req_body: web::Json<CambioEstatus>,
) -> Respuesta {
    sesion.requiere_permiso(PERMISO_ZONAS)?;
    service
        .cambiar_estatus(path.into_inner(), req_body.activo)
        .await?;
    Ok(mensaje("Estatus actualizado"))
}

/// DELETE /api/zonas/{id}
pub async fn eliminar_zona_endpoint(
    sesion: SesionUsuario,
    service: web::Data<ZonaService>,
    path: web::Path<i64>,
) -> Respuesta {
    sesion.requiere_permiso(PERMISO_ZONAS)?;
    service.eliminar(path.into_inner()).await?;
    Ok(mensaje("Zona eliminada"))
}
