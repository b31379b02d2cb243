//! handlers/configuracion_handler.rs
//! Parámetros globales del costeo (clave, valor texto y valor numérico).

use actix_web::web;

use crate::handlers::respuesta::{creado, mensaje, ok, Respuesta};
use crate::models::comun_model::{CambioEstatus, PaginacionQuery};
use crate::models::configuracion_model::{ConfiguracionFiltros, ConfiguracionForm};
use crate::models::permiso_model::PERMISO_CONFIGURACIONES;
use crate::models::sesion_model::SesionUsuario;
use crate::services::configuracion_service::ConfiguracionService;

/// GET /api/configuraciones
pub async fn listar_configuraciones_endpoint(
    sesion: SesionUsuario,
    service: web::Data<ConfiguracionService>,
    filtros: web::Query<ConfiguracionFiltros>,
    paginacion: web::Query<PaginacionQuery>,
) -> Respuesta {
    sesion.requiere_permiso(PERMISO_CONFIGURACIONES)?;
    Ok(ok(service.listar(&filtros, &paginacion).await?))
}

/// GET /api/configuraciones/clave/{clave}
/// Lectura abierta a cualquier sesión: los formularios la usan para defaults.
pub async fn obtener_por_clave_endpoint(
    _sesion: SesionUsuario,
    service: web::Data<ConfiguracionService>,
    path: web::Path<String>,
) -> Respuesta {
    Ok(ok(service.obtener_por_clave(&path).await?))
}

/// GET /api/configuraciones/{id}
pub async fn obtener_configuracion_endpoint(
    sesion: SesionUsuario,
    service: web::Data<ConfiguracionService>,
    path: web::Path<i64>,
) -> Respuesta {
    sesion.requiere_permiso(PERMISO_CONFIGURACIONES)?;
    Ok(ok(service.obtener(path.into_inner()).await?))
}

/// POST /api/configuraciones
pub async fn crear_configuracion_endpoint(
    sesion: SesionUsuario,
    service: web::Data<ConfiguracionService>,
    req_body: web::Json<ConfiguracionForm>,
) -> Respuesta {
    sesion.requiere_permiso(PERMISO_CONFIGURACIONES)?;
    let id = service.crear(req_body.into_inner()).await?;
    Ok(creado(id, "Configuración creada"))
}

/// PUT /api/configuraciones/{id}
pub async fn actualizar_configuracion_endpoint(
    sesion: SesionUsuario,
    service: web::Data<ConfiguracionService>,
    path: web::Path<i64>,
    req_body: web::Json<ConfiguracionForm>,
) -> Respuesta {
    sesion.requiere_permiso(PERMISO_CONFIGURACIONES)?;
    service
        .actualizar(path.into_inner(), req_body.into_inner())
        .await?;
    Ok(mensaje("Configuración actualizada"))
}

/// PATCH /api/configuraciones/{id}/estatus
pub async fn estatus_configuracion_endpoint(
    sesion: SesionUsuario,
    service: web::Data<ConfiguracionService>,
    path: web::Path<i64>,
    req_body: web::Json<CambioEstatus>,
) -> Respuesta {
    sesion.requiere_permiso(PERMISO_CONFIGURACIONES)?;
    service
        .cambiar_estatus(path.into_inner(), req_body.activo)
        .await?;
    Ok(mensaje("Estatus actualizado"))
}
