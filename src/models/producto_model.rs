//! models/producto_model.rs

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Producto {
    pub id: i64,
    pub codigo: String,
    pub nombre: String,
    pub descripcion: Option<String>,
    pub presentacion: Option<String>,
    pub clienteid: Option<i64>,
    pub zonaid: Option<i64>,
    pub formulaid: Option<i64>,
    pub costo: f64,
    pub imgurl: Option<String>,
    pub activo: bool,
    pub fechacreacion: String,
    pub fechaactualizacion: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ProductoForm {
    pub codigo: String,
    pub nombre: String,
    pub descripcion: Option<String>,
    pub presentacion: Option<String>,
    pub clienteid: Option<i64>,
    pub zonaid: Option<i64>,
    pub formulaid: Option<i64>,
    #[serde(default)]
    pub costo: f64,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProductoFiltros {
    pub nombre: Option<String>,
    pub codigo: Option<String>,
    pub clienteid: Option<i64>,
    pub zonaid: Option<i64>,
    pub activo: Option<bool>,
    /// Con `clienteid`, incluye también los productos globales (sin cliente)
    #[serde(skip)]
    pub incluir_globales: bool,
}

/// Body de `POST /productos/{id}/clientes`
#[derive(Debug, Clone, Deserialize)]
pub struct AsignarClienteRequest {
    pub clienteid: i64,
}

/// Registro de productosxclienteoptimos
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct ProductoOptimo {
    pub id: i64,
    pub clienteid: i64,
    pub productoid: i64,
    pub zonaid: Option<i64>,
    pub codigo: String,
    pub nombre: String,
    pub utilidadoptima: f64,
    pub costoparticipacion: f64,
    pub fechacreacion: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ProductoOptimoForm {
    pub clienteid: i64,
    pub productoid: i64,
    pub zonaid: Option<i64>,
    pub utilidadoptima: f64,
    #[serde(default)]
    pub costoparticipacion: f64,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct OptimosFiltros {
    pub clienteid: Option<i64>,
    pub zonaid: Option<i64>,
}
