//! models/permiso_model.rs
//! Permisos, roles y su relación (permisosxrol).

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

pub const ROL_ADMINISTRADOR: i64 = 1;
pub const ROL_CLIENTE: i64 = 2;

pub const PERMISO_DASHBOARD: i64 = 1;
pub const PERMISO_CLIENTES: i64 = 2;
pub const PERMISO_CATALOGOS: i64 = 3;
pub const PERMISO_PRODUCTOS: i64 = 4;
pub const PERMISO_FORMULAS: i64 = 5;
pub const PERMISO_MATERIA_PRIMA: i64 = 6;
pub const PERMISO_MATERIALES_ETIQUETADO: i64 = 7;
pub const PERMISO_ZONAS: i64 = 8;
pub const PERMISO_USUARIOS: i64 = 9;
pub const PERMISO_CONFIGURACIONES: i64 = 10;
pub const PERMISO_REPORTES: i64 = 11;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Permiso {
    pub id: i64,
    pub nombre: String,
    pub descripcion: Option<String>,
    pub modulo: String,
    pub activo: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Rol {
    pub id: i64,
    pub nombre: String,
    pub descripcion: Option<String>,
    pub activo: bool,
}

/// Body de `POST /permisos/roles/{rolid}`
#[derive(Debug, Clone, Deserialize)]
pub struct AsignarPermisoRequest {
    pub permisoid: i64,
}
