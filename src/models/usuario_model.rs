//! models/usuario_model.rs
//! Usuarios del panel. El password nunca sale en las respuestas.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Usuario {
    pub id: i64,
    pub nombrecompleto: String,
    pub email: String,
    pub rolid: i64,
    pub clienteid: Option<i64>,
    pub imgurl: Option<String>,
    pub activo: bool,
    pub fechacreacion: String,
    pub fechaactualizacion: String,
}

/// Fila usada sólo en el login (incluye el password encriptado)
#[derive(Debug, Clone, FromRow)]
pub struct UsuarioCredenciales {
    pub id: i64,
    pub nombrecompleto: String,
    pub email: String,
    pub password: String,
    pub rolid: i64,
    pub clienteid: Option<i64>,
    pub activo: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct NuevoUsuarioForm {
    pub nombrecompleto: String,
    pub email: String,
    pub password: String,
    pub rolid: i64,
    pub clienteid: Option<i64>,
}

/// Edición; si `password` viene vacío se conserva el actual
#[derive(Debug, Clone, Deserialize)]
pub struct ActualizarUsuarioForm {
    pub nombrecompleto: String,
    pub email: String,
    pub password: Option<String>,
    pub rolid: i64,
    pub clienteid: Option<i64>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct UsuarioFiltros {
    pub nombrecompleto: Option<String>,
    pub email: Option<String>,
    pub rolid: Option<i64>,
    pub clienteid: Option<i64>,
    pub activo: Option<bool>,
}
