//! models/catalogo_model.rs
//! Catálogos de productos por cliente, con precio/margen propio por producto.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Catalogo {
    pub id: i64,
    pub nombre: String,
    pub descripcion: Option<String>,
    pub clienteid: i64,
    pub zonaid: Option<i64>,
    pub imgurl: Option<String>,
    pub activo: bool,
    pub fechacreacion: String,
    pub fechaactualizacion: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CatalogoForm {
    pub nombre: String,
    pub descripcion: Option<String>,
    pub clienteid: i64,
    pub zonaid: Option<i64>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct CatalogoFiltros {
    pub nombre: Option<String>,
    pub clienteid: Option<i64>,
    pub zonaid: Option<i64>,
    pub activo: Option<bool>,
}

/// Producto dentro de un catálogo (join productosxcatalogo + productos)
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct ProductoEnCatalogo {
    pub id: i64,
    pub catalogoid: i64,
    pub productoid: i64,
    pub codigo: String,
    pub nombre: String,
    pub costo: f64,
    pub precioventa: Option<f64>,
    pub margenutilidad: Option<f64>,
    pub imgurl: Option<String>,
    pub activo: bool,
}

/// Alta de producto en catálogo con override opcional de precio y margen
#[derive(Debug, Clone, Deserialize)]
pub struct ProductoCatalogoForm {
    pub productoid: i64,
    pub precioventa: Option<f64>,
    pub margenutilidad: Option<f64>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PrecioCatalogoForm {
    pub precioventa: Option<f64>,
    pub margenutilidad: Option<f64>,
}
