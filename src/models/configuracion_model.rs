//! models/configuracion_model.rs

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Configuracion {
    pub id: i64,
    pub clave: String,
    pub descripcion: String,
    pub valor: Option<String>,
    pub valorfloat: Option<f64>,
    pub activo: bool,
    pub fechacreacion: String,
    pub fechaactualizacion: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ConfiguracionForm {
    pub clave: String,
    pub descripcion: String,
    pub valor: Option<String>,
    pub valorfloat: Option<f64>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ConfiguracionFiltros {
    pub descripcion: Option<String>,
    pub activo: Option<bool>,
}
