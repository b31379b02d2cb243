//! handlers/permiso_handler.rs
//! Permisos y su asignación a roles.

use actix_web::web;

use crate::handlers::respuesta::{mensaje, ok, Respuesta};
use crate::models::permiso_model::{AsignarPermisoRequest, PERMISO_USUARIOS};
use crate::models::sesion_model::SesionUsuario;
use crate::services::permiso_service::PermisoService;

/// GET /api/permisos
pub async fn listar_permisos_endpoint(
    sesion: SesionUsuario,
    service: web::Data<PermisoService>,
) -> Respuesta {
    sesion.requiere_permiso(PERMISO_USUARIOS)?;
    Ok(ok(service.listar().await?))
}

/// GET /api/permisos/rol/{rolid}
pub async fn permisos_rol_endpoint(
    sesion: SesionUsuario,
    service: web::Data<PermisoService>,
    path: web::Path<i64>,
) -> Respuesta {
    sesion.requiere_permiso(PERMISO_USUARIOS)?;
    Ok(ok(service.por_rol(path.into_inner()).await?))
}

/// POST /api/permisos/rol/{rolid}
/// Aplica en el siguiente login de los usuarios del rol.
pub async fn asignar_permiso_endpoint(
    sesion: SesionUsuario,
    service: web::Data<PermisoService>,
    path: web::Path<i64>,
    req_body: web::Json<AsignarPermisoRequest>,
) -> Respuesta {
    sesion.requiere_administrador()?;
    service
        .asignar(path.into_inner(), req_body.permisoid)
        .await?;
    Ok(mensaje("Permiso asignado"))
}

/// DELETE /api/permisos/rol/{rolid}/{permisoid}
pub async fn quitar_permiso_endpoint(
    sesion: SesionUsuario,
    service: web::Data<PermisoService>,
    path: web::Path<(i64, i64)>,
) -> Respuesta {
    sesion.requiere_administrador()?;
    let (rolid, permisoid) = path.into_inner();
    service.quitar(rolid, permisoid).await?;
    Ok(mensaje("Permiso removido"))
}
