//! models/materia_prima_model.rs

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct MateriaPrima {
    pub id: i64,
    pub codigo: String,
    pub nombre: String,
    pub unidadmedida: Option<String>,
    pub costo: f64,
    pub factorimportacion: f64,
    /// costo * factorimportacion, calculado al guardar
    pub costoconfactor: f64,
    pub activo: bool,
    pub fechacreacion: String,
    pub fechaactualizacion: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MateriaPrimaForm {
    pub codigo: String,
    pub nombre: String,
    pub unidadmedida: Option<String>,
    #[serde(default)]
    pub costo: f64,
    pub factorimportacion: Option<f64>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct MateriaPrimaFiltros {
    pub nombre: Option<String>,
    pub codigo: Option<String>,
    pub activo: Option<bool>,
}
