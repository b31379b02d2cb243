//! handlers/cliente_handler.rs
//! Endpoints de clientes y su relación con zonas.

use actix_web::web;

use crate::handlers::imagen::reemplazar_imagen;
use crate::handlers::respuesta::{creado, mensaje, ok, Respuesta};
use crate::models::cliente_model::{AsignarZonaRequest, ClienteFiltros, ClienteForm};
use crate::models::comun_model::{CambioEstatus, ImagenPayload, PaginacionQuery};
use crate::models::permiso_model::PERMISO_CLIENTES;
use crate::models::sesion_model::SesionUsuario;
use crate::services::cliente_service::ClienteService;
use crate::services::storage_service::StorageService;

/// GET /api/clientes
/// Un usuario de cliente sólo ve su propio registro.
pub async fn listar_clientes_endpoint(
    sesion: SesionUsuario,
    service: web::Data<ClienteService>,
    filtros: web::Query<ClienteFiltros>,
    paginacion: web::Query<PaginacionQuery>,
) -> Respuesta {
    sesion.requiere_permiso(PERMISO_CLIENTES)?;
    let listado = service
        .listar(&filtros, &paginacion, sesion.alcance_cliente(None))
        .await?;
    Ok(ok(listado))
}

/// GET /api/clientes/dropdown
pub async fn dropdown_clientes_endpoint(
    sesion: SesionUsuario,
    service: web::Data<ClienteService>,
) -> Respuesta {
    Ok(ok(service.dropdown(sesion.alcance_cliente(None)).await?))
}

/// GET /api/clientes/{id}
pub async fn obtener_cliente_endpoint(
    sesion: SesionUsuario,
    service: web::Data<ClienteService>,
    path: web::Path<i64>,
) -> Respuesta {
    sesion.requiere_permiso(PERMISO_CLIENTES)?;
    let id = path.into_inner();
    sesion.verificar_cliente(Some(id))?;
    Ok(ok(service.obtener(id).await?))
}

/// POST /api/clientes
pub async fn crear_cliente_endpoint(
    sesion: SesionUsuario,
    service: web::Data<ClienteService>,
    req_body: web::Json<ClienteForm>,
) -> Respuesta {
    sesion.requiere_permiso(PERMISO_CLIENTES)?;
    sesion.requiere_administrador()?;
    let id = service.crear(req_body.into_inner()).await?;
    Ok(creado(id, "Cliente creado"))
}

/// PUT /api/clientes/{id}
pub async fn actualizar_cliente_endpoint(
    sesion: SesionUsuario,
    service: web::Data<ClienteService>,
    path: web::Path<i64>,
    req_body: web::Json<ClienteForm>,
) -> Respuesta {
    sesion.requiere_permiso(PERMISO_CLIENTES)?;
    let id = path.into_inner();
    sesion.verificar_cliente(Some(id))?;
    service.actualizar(id, req_body.into_inner()).await?;
    Ok(mensaje("Cliente actualizado"))
}

/// PATCH /api/clientes/{id}/estatus
pub async fn estatus_cliente_endpoint(
    sesion: SesionUsuario,
    service: web::Data<ClienteService>,
    path: web::Path<i64>,
    req_body: web::Json<CambioEstatus>,
) -> Respuesta {
    sesion.requiere_permiso(PERMISO_CLIENTES)?;
    sesion.requiere_administrador()?;
    service
        .cambiar_estatus(path.into_inner(), req_body.activo)
        .await?;
    Ok(mensaje("Estatus actualizado"))
}

/// DELETE /api/clientes/{id}
pub async fn eliminar_cliente_endpoint(
    sesion: SesionUsuario,
    service: web::Data<ClienteService>,
    path: web::Path<i64>,
) -> Respuesta {
    sesion.requiere_permiso(PERMISO_CLIENTES)?;
    sesion.requiere_administrador()?;
    service.eliminar(path.into_inner()).await?;
    Ok(mensaje("Cliente eliminado"))
}

/// POST /api/clientes/{id}/imagen
pub async fn imagen_cliente_endpoint(
    sesion: SesionUsuario,
    service: web::Data<ClienteService>,
    storage: web::Data<StorageService>,
    path: web::Path<i64>,
    req_body: web::Json<ImagenPayload>,
) -> Respuesta {
    sesion.requiere_permiso(PERMISO_CLIENTES)?;
    let id = path.into_inner();
    sesion.verificar_cliente(Some(id))?;
    service.obtener(id).await?;
    reemplazar_imagen(&storage, "clientes", &req_body, |url| async move {
        service.actualizar_imagen(id, &url).await
    })
    .await
}

/// GET /api/clientes/{id}/zonas
pub async fn zonas_cliente_endpoint(
    sesion: SesionUsuario,
    service: web::Data<ClienteService>,
    path: web::Path<i64>,
) -> Respuesta {
    let id = path.into_inner();
    sesion.verificar_cliente(Some(id))?;
    Ok(ok(service.zonas(id).await?))
}

/// POST /api/clientes/{id}/zonas
pub async fn asignar_zona_endpoint(
    sesion: SesionUsuario,
    service: web::Data<ClienteService>,
    path: web::Path<i64>,
    req_body: web::Json<AsignarZonaRequest>,
) -> Respuesta {
    sesion.requiere_permiso(PERMISO_CLIENTES)?;
    sesion.requiere_administrador()?;
    service
        .asignar_zona(path.into_inner(), req_body.zonaid)
        .await?;
    Ok(mensaje("Zona asignada al cliente"))
}

/// DELETE /api/clientes/{id}/zonas/{zonaid}
pub async fn quitar_zona_endpoint(
    sesion: SesionUsuario,
    service: web::Data<ClienteService>,
    path: web::Path<(i64, i64)>,
) -> Respuesta {
    sesion.requiere_permiso(PERMISO_CLIENTES)?;
    sesion.requiere_administrador()?;
    let (clienteid, zonaid) = path.into_inner();
    service.quitar_zona(clienteid, zonaid).await?;
    Ok(mensaje("Zona removida del cliente"))
}
