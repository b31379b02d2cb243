//! models/comun_model.rs
//! Estructuras compartidas por todos los módulos (paginación, listados,
//! dropdowns, cambio de estatus e imágenes).

use base64;
use serde::{Deserialize, Serialize};

/// Query de paginación y orden común a todos los listados:
/// `?pagina=1&por_pagina=20&orden=nombre&dir=asc`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PaginacionQuery {
    pub pagina: Option<i64>,
    pub por_pagina: Option<i64>,
    pub orden: Option<String>,
    pub dir: Option<String>,
}

/// Resultado paginado de un listado
#[derive(Debug, Clone, Serialize)]
pub struct Listado<T> {
    pub total: i64,
    pub pagina: i64,
    pub por_pagina: i64,
    pub items: Vec<T>,
}

/// Elemento de un `<select>` en los formularios
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct OpcionDropdown {
    pub id: i64,
    pub nombre: String,
}

/// Body de `PATCH /{id}/estatus`
#[derive(Debug, Clone, Deserialize)]
pub struct CambioEstatus {
    pub activo: bool,
}

/// Imagen recibida como base64 dentro del JSON
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImagenPayload {
    pub nombre_archivo: String,
    pub content_type: String,
    #[serde(
        serialize_with = "serialize_base64",
        deserialize_with = "deserialize_base64"
    )]
    pub data: Vec<u8>,
}

fn serialize_base64<S>(data: &[u8], serializer: S) -> Result<S::Ok, S::Error>
where
    S: serde::Serializer,
{
    serializer.serialize_str(&base64::encode(data))
}

fn deserialize_base64<'de, D>(deserializer: D) -> Result<Vec<u8>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    // Acepta también data URLs: "data:image/png;base64,...."
    let contenido = match s.split_once(";base64,") {
        Some((_, resto)) => resto,
        None => s.as_str(),
    };
    base64::decode(contenido.trim()).map_err(serde::de::Error::custom)
}

#[derive(Debug, Clone, Serialize)]
pub struct ImagenResponse {
    pub success: bool,
    pub imgurl: String,
}
