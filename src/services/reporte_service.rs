//! services/reporte_service.rs
//! Envoltorios tipados de los procedimientos de costeo.

use anyhow::Result;
use serde::Serialize;
use serde_json::{json, Value};

use crate::errors::CosteoError;
use crate::models::reporte_model::{
    ParametrosCalculo, ParametrosReporteCosteo, ParametrosSelUsuarios, ParametrosUtilidadActual,
    RPC_CONSULTAR_UTILIDAD_ACTUAL, RPC_REPORTE_CATALOGO_PRODUCTOS, RPC_REPORTE_COSTEO,
    RPC_REPORTE_COSTEO_CALCULO, RPC_SEL_USUARIOS,
};
use crate::services::rpc_service::RpcService;
use crate::services::validacion::id_requerido;

#[derive(Clone, Debug)]
pub struct ReporteService {
    rpc: RpcService,
}

/// Los procedimientos regresan un arreglo de filas, un objeto o nada
pub fn a_filas(valor: Value) -> Vec<Value> {
    match valor {
        Value::Array(filas) => filas,
        Value::Null => Vec::new(),
        otro => vec![otro],
    }
}

impl ReporteService {
    pub fn new(rpc: RpcService) -> Self {
        ReporteService { rpc }
    }

    async fn llamar<P: Serialize>(&self, nombre: &str, params: &P) -> Result<Vec<Value>> {
        let params = serde_json::to_value(params)?;
        let filas = a_filas(self.rpc.llamar(nombre, &params).await?);
        log::info!("(reportes) {} regresó {} filas", nombre, filas.len());
        Ok(filas)
    }

    pub async fn reporte_costeo(&self, params: &ParametrosReporteCosteo) -> Result<Vec<Value>> {
        self.llamar(RPC_REPORTE_COSTEO, params).await
    }

    pub async fn reporte_costeo_calculo(&self, params: &ParametrosCalculo) -> Result<Vec<Value>> {
        id_requerido("productoid", params.productoid)?;
        if !params.utilidad.is_finite() {
            return Err(CosteoError::validacion(
                "El campo 'utilidad' debe ser numérico",
            ));
        }
        self.llamar(RPC_REPORTE_COSTEO_CALCULO, params).await
    }

    pub async fn reporte_catalogo_productos(&self, catalogoid: i64) -> Result<Vec<Value>> {
        id_requerido("catalogoid", catalogoid)?;
        self.llamar(RPC_REPORTE_CATALOGO_PRODUCTOS, &json!({ "catalogoid": catalogoid }))
            .await
    }

    pub async fn consultar_utilidad_actual(
        &self,
        params: &ParametrosUtilidadActual,
    ) -> Result<Vec<Value>> {
        id_requerido("productoid", params.productoid)?;
        self.llamar(RPC_CONSULTAR_UTILIDAD_ACTUAL, params).await
    }

    pub async fn sel_usuarios(&self, params: &ParametrosSelUsuarios) -> Result<Vec<Value>> {
        self.llamar(RPC_SEL_USUARIOS, params).await
    }
}
