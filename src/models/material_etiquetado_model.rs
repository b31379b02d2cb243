//! models/material_etiquetado_model.rs

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct MaterialEtiquetado {
    pub id: i64,
    pub codigo: String,
    pub nombre: String,
    pub tipo: Option<String>,
    pub unidadmedida: Option<String>,
    pub costo: f64,
    pub imgurl: Option<String>,
    pub activo: bool,
    pub fechacreacion: String,
    pub fechaactualizacion: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MaterialEtiquetadoForm {
    pub codigo: String,
    pub nombre: String,
    pub tipo: Option<String>,
    pub unidadmedida: Option<String>,
    #[serde(default)]
    pub costo: f64,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct MaterialEtiquetadoFiltros {
    pub nombre: Option<String>,
    pub codigo: Option<String>,
    pub tipo: Option<String>,
    pub activo: Option<bool>,
}
