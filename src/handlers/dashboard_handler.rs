//! handlers/dashboard_handler.rs

use actix_web::web;

use crate::handlers::respuesta::{ok, Respuesta};
use crate::models::permiso_model::PERMISO_DASHBOARD;
use crate::models::sesion_model::SesionUsuario;
use crate::services::dashboard_service::DashboardService;

/// GET /api/dashboard
/// Conteos de registros activos, limitados al cliente de la sesión.
pub async fn resumen_endpoint(
    sesion: SesionUsuario,
    service: web::Data<DashboardService>,
) -> Respuesta {
    sesion.requiere_permiso(PERMISO_DASHBOARD)?;
    let resumen = service.resumen(sesion.alcance_cliente(None)).await?;
    Ok(ok(resumen))
}
