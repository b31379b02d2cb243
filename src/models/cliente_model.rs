//! models/cliente_model.rs
//! Clientes (tenants) y su relación con zonas.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Cliente {
    pub id: i64,
    pub nombre: String,
    pub clave: String,
    pub direccion: Option<String>,
    pub telefono: Option<String>,
    pub email: Option<String>,
    pub imgurl: Option<String>,
    pub activo: bool,
    pub fechacreacion: String,
    pub fechaactualizacion: String,
}

/// Campos del formulario de alta / edición de cliente
#[derive(Debug, Clone, Deserialize)]
pub struct ClienteForm {
    pub nombre: String,
    pub clave: String,
    pub direccion: Option<String>,
    pub telefono: Option<String>,
    pub email: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ClienteFiltros {
    pub nombre: Option<String>,
    pub clave: Option<String>,
    pub activo: Option<bool>,
}

/// Body de `POST /clientes/{id}/zonas`
#[derive(Debug, Clone, Deserialize)]
pub struct AsignarZonaRequest {
    pub zonaid: i64,
}
