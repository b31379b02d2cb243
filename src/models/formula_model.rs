//! models/formula_model.rs

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Formula {
    pub id: i64,
    pub codigo: String,
    pub nombre: String,
    pub especificaciones: Option<String>,
    pub unidadmedida: Option<String>,
    pub rendimiento: f64,
    pub costo: f64,
    pub activo: bool,
    pub fechacreacion: String,
    pub fechaactualizacion: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct FormulaForm {
    pub codigo: String,
    pub nombre: String,
    pub especificaciones: Option<String>,
    pub unidadmedida: Option<String>,
    #[serde(default)]
    pub rendimiento: f64,
    #[serde(default)]
    pub costo: f64,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct FormulaFiltros {
    pub nombre: Option<String>,
    pub codigo: Option<String>,
    pub activo: Option<bool>,
}
