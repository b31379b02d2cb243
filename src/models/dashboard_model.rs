//! models/dashboard_model.rs

use serde::Serialize;

/// Conteos de registros activos mostrados en el tablero
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ResumenDashboard {
    pub clientes: i64,
    pub catalogos: i64,
    pub productos: i64,
    pub formulas: i64,
    pub materiasprimas: i64,
    pub materialesetiquetado: i64,
    pub zonas: i64,
    pub usuarios: i64,
}
