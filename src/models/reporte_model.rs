//! models/reporte_model.rs
//! Parámetros de los procedimientos remotos de costeo.

use serde::{Deserialize, Serialize};

pub const RPC_REPORTE_COSTEO: &str = "reportecosteo";
pub const RPC_REPORTE_COSTEO_CALCULO: &str = "reportecosteocalculo";
pub const RPC_REPORTE_CATALOGO_PRODUCTOS: &str = "reportecatalogoproductos";
pub const RPC_CONSULTAR_UTILIDAD_ACTUAL: &str = "consultarutilidadactual";
pub const RPC_SEL_USUARIOS: &str = "selusuarios";

/// Procedimientos que se permite invocar
pub const RPC_PERMITIDOS: [&str; 5] = [
    RPC_REPORTE_COSTEO,
    RPC_REPORTE_COSTEO_CALCULO,
    RPC_REPORTE_CATALOGO_PRODUCTOS,
    RPC_CONSULTAR_UTILIDAD_ACTUAL,
    RPC_SEL_USUARIOS,
];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParametrosReporteCosteo {
    pub clienteid: Option<i64>,
    pub zonaid: Option<i64>,
    pub productoid: Option<i64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParametrosCalculo {
    pub productoid: i64,
    pub clienteid: Option<i64>,
    pub zonaid: Option<i64>,
    /// Utilidad deseada en porcentaje
    pub utilidad: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParametrosUtilidadActual {
    pub productoid: i64,
    pub clienteid: Option<i64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ParametrosSelUsuarios {
    pub nombre: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ReporteResponse {
    pub success: bool,
    pub procedimiento: String,
    pub total: usize,
    pub data: Vec<serde_json::Value>,
}
