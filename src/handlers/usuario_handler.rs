//! handlers/usuario_handler.rs
//! Usuarios del panel. Un usuario no administrador sólo administra
//! usuarios de su propio cliente y nunca crea ni toca administradores.

use actix_web::web;

use crate::handlers::imagen::reemplazar_imagen;
use crate::handlers::respuesta::{creado, mensaje, ok, ApiError, Respuesta};
use crate::models::comun_model::{CambioEstatus, ImagenPayload, PaginacionQuery};
use crate::models::permiso_model::{PERMISO_USUARIOS, ROL_ADMINISTRADOR};
use crate::models::sesion_model::SesionUsuario;
use crate::models::usuario_model::{
    ActualizarUsuarioForm, NuevoUsuarioForm, Usuario, UsuarioFiltros,
};
use crate::services::storage_service::StorageService;
use crate::services::usuario_service::UsuarioService;

async fn usuario_de_sesion(
    sesion: &SesionUsuario,
    service: &UsuarioService,
    id: i64,
) -> Result<Usuario, ApiError> {
    sesion.requiere_permiso(PERMISO_USUARIOS)?;
    let usuario = service.obtener(id).await?;
    sesion.verificar_cliente(usuario.clienteid)?;
    if usuario.rolid == ROL_ADMINISTRADOR {
        sesion.requiere_administrador()?;
    }
    Ok(usuario)
}

fn validar_asignacion(
    sesion: &SesionUsuario,
    rolid: i64,
    clienteid: Option<i64>,
) -> Result<(), ApiError> {
    if rolid == ROL_ADMINISTRADOR {
        sesion.requiere_administrador()?;
    }
    sesion.verificar_cliente(clienteid)?;
    Ok(())
}

/// GET /api/usuarios
pub async fn listar_usuarios_endpoint(
    sesion: SesionUsuario,
    service: web::Data<UsuarioService>,
    filtros: web::Query<UsuarioFiltros>,
    paginacion: web::Query<PaginacionQuery>,
) -> Respuesta {
    sesion.requiere_permiso(PERMISO_USUARIOS)?;
    let mut filtros = filtros.into_inner();
    filtros.clienteid = sesion.alcance_cliente(filtros.clienteid);
    Ok(ok(service.listar(&filtros, &paginacion).await?))
}

/// GET /api/usuarios/roles
pub async fn roles_dropdown_endpoint(
    sesion: SesionUsuario,
    service: web::Data<UsuarioService>,
) -> Respuesta {
    sesion.requiere_permiso(PERMISO_USUARIOS)?;
    Ok(ok(service.dropdown_roles().await?))
}

/// GET /api/usuarios/{id}
pub async fn obtener_usuario_endpoint(
    sesion: SesionUsuario,
    service: web::Data<UsuarioService>,
    path: web::Path<i64>,
) -> Respuesta {
    let usuario = usuario_de_sesion(&sesion, &service, path.into_inner()).await?;
    Ok(ok(usuario))
}

/// POST /api/usuarios
pub async fn crear_usuario_endpoint(
    sesion: SesionUsuario,
    service: web::Data<UsuarioService>,
    req_body: web::Json<NuevoUsuarioForm>,
) -> Respuesta {
    sesion.requiere_permiso(PERMISO_USUARIOS)?;
    validar_asignacion(&sesion, req_body.rolid, req_body.clienteid)?;
    let id = service.crear(req_body.into_inner()).await?;
    Ok(creado(id, "Usuario creado"))
}

/// PUT /api/usuarios/{id}
/// `password` vacío o ausente conserva el actual.
pub async fn actualizar_usuario_endpoint(
    sesion: SesionUsuario,
    service: web::Data<UsuarioService>,
    path: web::Path<i64>,
    req_body: web::Json<ActualizarUsuarioForm>,
) -> Respuesta {
    let id = path.into_inner();
    usuario_de_sesion(&sesion, &service, id).await?;
    validar_asignacion(&sesion, req_body.rolid, req_body.clienteid)?;
    service.actualizar(id, req_body.into_inner()).await?;
    Ok(mensaje("Usuario actualizado"))
}

/// PATCH /api/usuarios/{id}/estatus
pub async fn estatus_usuario_endpoint(
    sesion: SesionUsuario,
    service: web::Data<UsuarioService>,
    path: web::Path<i64>,
    req_body: web::Json<CambioEstatus>,
) -> Respuesta {
    let id = path.into_inner();
    usuario_de_sesion(&sesion, &service, id).await?;
    service.cambiar_estatus(id, req_body.activo).await?;
    Ok(mensaje("Estatus actualizado"))
}

/// DELETE /api/usuarios/{id}
pub async fn eliminar_usuario_endpoint(
    sesion: SesionUsuario,
    service: web::Data<UsuarioService>,
    path: web::Path<i64>,
) -> Respuesta {
    let id = path.into_inner();
    usuario_de_sesion(&sesion, &service, id).await?;
    if id == sesion.usuarioid {
        return Err(crate::errors::CosteoError::Validacion(
            "No puedes eliminar tu propio usuario".to_string(),
        )
        .into());
    }
    service.eliminar(id).await?;
    Ok(mensaje("Usuario eliminado"))
}

/// POST /api/usuarios/{id}/imagen
pub async fn imagen_usuario_endpoint(
    sesion: SesionUsuario,
    service: web::Data<UsuarioService>,
    storage: web::Data<StorageService>,
    path: web::Path<i64>,
    req_body: web::Json<ImagenPayload>,
) -> Respuesta {
    let id = path.into_inner();
    // El propio usuario puede cambiar su foto sin permiso de usuarios
    if id != sesion.usuarioid {
        usuario_de_sesion(&sesion, &service, id).await?;
    }
    reemplazar_imagen(&storage, "usuarios", &req_body, |url| async move {
        service.actualizar_imagen(id, &url).await
    })
    .await
}
