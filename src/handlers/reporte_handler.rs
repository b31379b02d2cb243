//! handlers/reporte_handler.rs
//! Reportes de costeo calculados por procedimientos remotos.

use actix_web::{web, HttpResponse};
use serde_json::Value;

use crate::handlers::respuesta::{ApiError, Respuesta};
use crate::models::permiso_model::PERMISO_REPORTES;
use crate::models::reporte_model::{
    ParametrosCalculo, ParametrosReporteCosteo, ParametrosSelUsuarios, ParametrosUtilidadActual,
    ReporteResponse, RPC_CONSULTAR_UTILIDAD_ACTUAL, RPC_REPORTE_CATALOGO_PRODUCTOS,
    RPC_REPORTE_COSTEO, RPC_REPORTE_COSTEO_CALCULO, RPC_SEL_USUARIOS,
};
use crate::models::sesion_model::SesionUsuario;
use crate::services::catalogo_service::CatalogoService;
use crate::services::producto_service::ProductoService;
use crate::services::reporte_service::ReporteService;

fn reporte(procedimiento: &str, data: Vec<Value>) -> HttpResponse {
    HttpResponse::Ok().json(ReporteResponse {
        success: true,
        procedimiento: procedimiento.to_string(),
        total: data.len(),
        data,
    })
}

/// Un producto de otro cliente no se puede costear; los globales sí
async fn verificar_producto(
    sesion: &SesionUsuario,
    productos: &ProductoService,
    productoid: Option<i64>,
) -> Result<(), ApiError> {
    let Some(productoid) = productoid.filter(|id| *id > 0) else {
        return Ok(());
    };
    let producto = productos.obtener(productoid).await?;
    if producto.clienteid.is_some() {
        sesion.verificar_cliente(producto.clienteid)?;
    }
    Ok(())
}

/// POST /api/reportes/costeo
pub async fn reporte_costeo_endpoint(
    sesion: SesionUsuario,
    service: web::Data<ReporteService>,
    productos: web::Data<ProductoService>,
    req_body: web::Json<ParametrosReporteCosteo>,
) -> Respuesta {
    sesion.requiere_permiso(PERMISO_REPORTES)?;
    verificar_producto(&sesion, &productos, req_body.productoid).await?;
    let mut params = req_body.into_inner();
    params.clienteid = sesion.alcance_cliente(params.clienteid);
    let data = service.reporte_costeo(&params).await?;
    Ok(reporte(RPC_REPORTE_COSTEO, data))
}

/// POST /api/reportes/costeo/calculo
/// Recalcula el costeo de un producto con la utilidad indicada.
pub async fn reporte_costeo_calculo_endpoint(
    sesion: SesionUsuario,
    service: web::Data<ReporteService>,
    productos: web::Data<ProductoService>,
    req_body: web::Json<ParametrosCalculo>,
) -> Respuesta {
    sesion.requiere_permiso(PERMISO_REPORTES)?;
    verificar_producto(&sesion, &productos, Some(req_body.productoid)).await?;
    let mut params = req_body.into_inner();
    params.clienteid = sesion.alcance_cliente(params.clienteid);
    let data = service.reporte_costeo_calculo(&params).await?;
    Ok(reporte(RPC_REPORTE_COSTEO_CALCULO, data))
}

/// GET /api/reportes/catalogo/{catalogoid}
pub async fn reporte_catalogo_endpoint(
    sesion: SesionUsuario,
    service: web::Data<ReporteService>,
    catalogos: web::Data<CatalogoService>,
    path: web::Path<i64>,
) -> Respuesta {
    sesion.requiere_permiso(PERMISO_REPORTES)?;
    let catalogoid = path.into_inner();
    let catalogo = catalogos.obtener(catalogoid).await?;
    sesion.verificar_cliente(Some(catalogo.clienteid))?;
    let data = service.reporte_catalogo_productos(catalogoid).await?;
    Ok(reporte(RPC_REPORTE_CATALOGO_PRODUCTOS, data))
}

/// POST /api/reportes/utilidad-actual
pub async fn utilidad_actual_endpoint(
    sesion: SesionUsuario,
    service: web::Data<ReporteService>,
    productos: web::Data<ProductoService>,
    req_body: web::Json<ParametrosUtilidadActual>,
) -> Respuesta {
    sesion.requiere_permiso(PERMISO_REPORTES)?;
    verificar_producto(&sesion, &productos, Some(req_body.productoid)).await?;
    let mut params = req_body.into_inner();
    params.clienteid = sesion.alcance_cliente(params.clienteid);
    let data = service.consultar_utilidad_actual(&params).await?;
    Ok(reporte(RPC_CONSULTAR_UTILIDAD_ACTUAL, data))
}

/// GET /api/reportes/usuarios?nombre=
pub async fn sel_usuarios_endpoint(
    sesion: SesionUsuario,
    service: web::Data<ReporteService>,
    query: web::Query<ParametrosSelUsuarios>,
) -> Respuesta {
    sesion.requiere_administrador()?;
    let data = service.sel_usuarios(&query).await?;
    Ok(reporte(RPC_SEL_USUARIOS, data))
}
