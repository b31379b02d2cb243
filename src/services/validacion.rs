//! services/validacion.rs
//! Mapeo de campos de formulario a columnas: recorte de espacios,
//! requeridos, opcionales vacíos como NULL y números no negativos.

use anyhow::Result;
use chrono::Utc;

use crate::errors::CosteoError;

/// Timestamp que se guarda en fechacreacion / fechaactualizacion
pub fn ahora() -> String {
    Utc::now().to_rfc3339()
}

pub fn requerido(campo: &str, valor: &str) -> Result<String> {
    let limpio = valor.trim();
    if limpio.is_empty() {
        return Err(CosteoError::validacion(format!(
            "El campo '{campo}' es requerido"
        )));
    }
    Ok(limpio.to_string())
}

/// Un texto vacío o sólo espacios se guarda como NULL
pub fn opcional(valor: Option<String>) -> Option<String> {
    valor
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

pub fn numero(campo: &str, valor: f64) -> Result<f64> {
    if !valor.is_finite() || valor < 0.0 {
        return Err(CosteoError::validacion(format!(
            "El campo '{campo}' debe ser un número mayor o igual a cero"
        )));
    }
    Ok(valor)
}

pub fn numero_opcional(campo: &str, valor: Option<f64>) -> Result<Option<f64>> {
    valor.map(|v| numero(campo, v)).transpose()
}

/// Ids de llaves foráneas: 0 o negativos se tratan como "sin valor"
pub fn id_opcional(valor: Option<i64>) -> Option<i64> {
    valor.filter(|v| *v > 0)
}

pub fn id_requerido(campo: &str, valor: i64) -> Result<i64> {
    if valor <= 0 {
        return Err(CosteoError::validacion(format!(
            "El campo '{campo}' es requerido"
        )));
    }
    Ok(valor)
}

pub fn email(valor: &str) -> Result<String> {
    let limpio = requerido("email", valor)?.to_lowercase();
    let valido = match limpio.split_once('@') {
        Some((usuario, dominio)) => {
            !usuario.is_empty() && dominio.contains('.') && !dominio.starts_with('.')
        }
        None => false,
    };
    if !valido {
        return Err(CosteoError::validacion(format!(
            "El email '{limpio}' no es válido"
        )));
    }
    Ok(limpio)
}
