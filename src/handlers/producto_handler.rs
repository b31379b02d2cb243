//! handlers/producto_handler.rs
//! Productos, su asignación a clientes y los óptimos de utilidad.

use actix_web::web;

use crate::handlers::imagen::reemplazar_imagen;
use crate::handlers::respuesta::{creado, mensaje, ok, ApiError, Respuesta};
use crate::models::comun_model::{CambioEstatus, ImagenPayload, PaginacionQuery};
use crate::models::permiso_model::PERMISO_PRODUCTOS;
use crate::models::producto_model::{
    AsignarClienteRequest, OptimosFiltros, Producto, ProductoFiltros, ProductoForm,
    ProductoOptimoForm,
};
use crate::models::sesion_model::SesionUsuario;
use crate::services::producto_service::ProductoService;
use crate::services::storage_service::StorageService;

/// Lectura: productos sin cliente son visibles para todos
async fn producto_visible(
    sesion: &SesionUsuario,
    service: &ProductoService,
    id: i64,
) -> Result<Producto, ApiError> {
    sesion.requiere_permiso(PERMISO_PRODUCTOS)?;
    let producto = service.obtener(id).await?;
    if producto.clienteid.is_some() {
        sesion.verificar_cliente(producto.clienteid)?;
    }
    Ok(producto)
}

/// Escritura: sólo el cliente dueño o el administrador
async fn producto_propio(
    sesion: &SesionUsuario,
    service: &ProductoService,
    id: i64,
) -> Result<Producto, ApiError> {
    sesion.requiere_permiso(PERMISO_PRODUCTOS)?;
    let producto = service.obtener(id).await?;
    sesion.verificar_cliente(producto.clienteid)?;
    Ok(producto)
}

/// GET /api/productos
pub async fn listar_productos_endpoint(
    sesion: SesionUsuario,
    service: web::Data<ProductoService>,
    filtros: web::Query<ProductoFiltros>,
    paginacion: web::Query<PaginacionQuery>,
) -> Respuesta {
    sesion.requiere_permiso(PERMISO_PRODUCTOS)?;
    let mut filtros = filtros.into_inner();
    filtros.clienteid = sesion.alcance_cliente(filtros.clienteid);
    filtros.incluir_globales = !sesion.es_administrador();
    Ok(ok(service.listar(&filtros, &paginacion).await?))
}

/// GET /api/productos/dropdown?clienteid=
pub async fn dropdown_productos_endpoint(
    sesion: SesionUsuario,
    service: web::Data<ProductoService>,
    filtros: web::Query<ProductoFiltros>,
) -> Respuesta {
    let alcance = sesion.alcance_cliente(filtros.clienteid);
    Ok(ok(service
        .dropdown(alcance, !sesion.es_administrador())
        .await?))
}

/// GET /api/productos/{id}
pub async fn obtener_producto_endpoint(
    sesion: SesionUsuario,
    service: web::Data<ProductoService>,
    path: web::Path<i64>,
) -> Respuesta {
    let producto = producto_visible(&sesion, &service, path.into_inner()).await?;
    Ok(ok(producto))
}

/// POST /api/productos
pub async fn crear_producto_endpoint(
    sesion: SesionUsuario,
    service: web::Data<ProductoService>,
    req_body: web::Json<ProductoForm>,
) -> Respuesta {
    sesion.requiere_permiso(PERMISO_PRODUCTOS)?;
    sesion.verificar_cliente(req_body.clienteid)?;
    let id = service.crear(req_body.into_inner()).await?;
    Ok(creado(id, "Producto creado"))
}

/// PUT /api/productos/{id}
pub async fn actualizar_producto_endpoint(
    sesion: SesionUsuario,
    service: web::Data<ProductoService>,
    path: web::Path<i64>,
    req_body: web::Json<ProductoForm>,
) -> Respuesta {
    let id = path.into_inner();
    producto_propio(&sesion, &service, id).await?;
    sesion.verificar_cliente(req_body.clienteid)?;
    service.actualizar(id, req_body.into_inner()).await?;
    Ok(mensaje("Producto actualizado"))
}

/// PATCH /api/productos/{id}/estatus
pub async fn estatus_producto_endpoint(
    sesion: SesionUsuario,
    service: web::Data<ProductoService>,
    path: web::Path<i64>,
    req_body: web::Json<CambioEstatus>,
) -> Respuesta {
    let id = path.into_inner();
    producto_propio(&sesion, &service, id).await?;
    service.cambiar_estatus(id, req_body.activo).await?;
    Ok(mensaje("Estatus actualizado"))
}

/// DELETE /api/productos/{id}
pub async fn eliminar_producto_endpoint(
    sesion: SesionUsuario,
    service: web::Data<ProductoService>,
    path: web::Path<i64>,
) -> Respuesta {
    let id = path.into_inner();
    producto_propio(&sesion, &service, id).await?;
    service.eliminar(id).await?;
    Ok(mensaje("Producto eliminado"))
}

/// POST /api/productos/{id}/imagen
pub async fn imagen_producto_endpoint(
    sesion: SesionUsuario,
    service: web::Data<ProductoService>,
    storage: web::Data<StorageService>,
    path: web::Path<i64>,
    req_body: web::Json<ImagenPayload>,
) -> Respuesta {
    let id = path.into_inner();
    producto_propio(&sesion, &service, id).await?;
    reemplazar_imagen(&storage, "productos", &req_body, |url| async move {
        service.actualizar_imagen(id, &url).await
    })
    .await
}

/// GET /api/productos/{id}/clientes
pub async fn clientes_producto_endpoint(
    sesion: SesionUsuario,
    service: web::Data<ProductoService>,
    path: web::Path<i64>,
) -> Respuesta {
    sesion.requiere_permiso(PERMISO_PRODUCTOS)?;
    sesion.requiere_administrador()?;
    Ok(ok(service.clientes(path.into_inner()).await?))
}

/// POST /api/productos/{id}/clientes
pub async fn asignar_cliente_endpoint(
    sesion: SesionUsuario,
    service: web::Data<ProductoService>,
    path: web::Path<i64>,
    req_body: web::Json<AsignarClienteRequest>,
) -> Respuesta {
    sesion.requiere_permiso(PERMISO_PRODUCTOS)?;
    sesion.requiere_administrador()?;
    service
        .asignar_cliente(path.into_inner(), req_body.clienteid)
        .await?;
    Ok(mensaje("Producto asignado al cliente"))
}

/// DELETE /api/productos/{id}/clientes/{clienteid}
pub async fn quitar_cliente_endpoint(
    sesion: SesionUsuario,
    service: web::Data<ProductoService>,
    path: web::Path<(i64, i64)>,
) -> Respuesta {
    sesion.requiere_permiso(PERMISO_PRODUCTOS)?;
    sesion.requiere_administrador()?;
    let (productoid, clienteid) = path.into_inner();
    service.quitar_cliente(productoid, clienteid).await?;
    Ok(mensaje("Producto removido del cliente"))
}

/// GET /api/productos/optimos?clienteid=&zonaid=
pub async fn optimos_endpoint(
    sesion: SesionUsuario,
    service: web::Data<ProductoService>,
    filtros: web::Query<OptimosFiltros>,
) -> Respuesta {
    sesion.requiere_permiso(PERMISO_PRODUCTOS)?;
    let mut filtros = filtros.into_inner();
    filtros.clienteid = sesion.alcance_cliente(filtros.clienteid);
    Ok(ok(service.optimos(&filtros).await?))
}

/// POST /api/productos/optimos
pub async fn registrar_optimo_endpoint(
    sesion: SesionUsuario,
    service: web::Data<ProductoService>,
    req_body: web::Json<ProductoOptimoForm>,
) -> Respuesta {
    sesion.requiere_permiso(PERMISO_PRODUCTOS)?;
    sesion.verificar_cliente(Some(req_body.clienteid))?;
    let id = service.registrar_optimo(req_body.into_inner()).await?;
    Ok(creado(id, "Óptimo registrado"))
}
