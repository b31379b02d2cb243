//! models/zona_model.rs

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Zona {
    pub id: i64,
    pub nombre: String,
    pub clave: String,
    pub descripcion: Option<String>,
    pub activo: bool,
    pub fechacreacion: String,
    pub fechaactualizacion: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ZonaForm {
    pub nombre: String,
    pub clave: String,
    pub descripcion: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ZonaFiltros {
    pub nombre: Option<String>,
    pub activo: Option<bool>,
}
