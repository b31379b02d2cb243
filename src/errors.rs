//! errors.rs
//! Errores de dominio del servicio de costeo.
//!
//! Los servicios regresan `anyhow::Result`; cuando el fallo tiene un
//! significado para el cliente HTTP se levanta un `CosteoError`, que
//! `handlers::respuesta` recupera con `downcast_ref` para elegir el status.

use actix_web::http::StatusCode;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CosteoError {
    #[error("{0}")]
    Validacion(String),

    #[error("{0}")]
    NoAutorizado(String),

    #[error("{0}")]
    Prohibido(String),

    #[error("{0}")]
    NoEncontrado(String),

    #[error("{0}")]
    Conflicto(String),

    #[error("Error del servicio remoto ({status}): {mensaje}")]
    Remoto { status: u16, mensaje: String },
}

impl CosteoError {
    pub fn validacion(msg: impl Into<String>) -> anyhow::Error {
        CosteoError::Validacion(msg.into()).into()
    }

    pub fn no_encontrado(msg: impl Into<String>) -> anyhow::Error {
        CosteoError::NoEncontrado(msg.into()).into()
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            CosteoError::Validacion(_) => StatusCode::BAD_REQUEST,
            CosteoError::NoAutorizado(_) => StatusCode::UNAUTHORIZED,
            CosteoError::Prohibido(_) => StatusCode::FORBIDDEN,
            CosteoError::NoEncontrado(_) => StatusCode::NOT_FOUND,
            CosteoError::Conflicto(_) => StatusCode::CONFLICT,
            CosteoError::Remoto { .. } => StatusCode::BAD_GATEWAY,
        }
    }
}

/// Traduce errores de sqlx a errores de dominio cuando aplica.
/// `contexto` se usa para armar el mensaje (p.e. "cliente").
pub fn mapear_sqlx(err: sqlx::Error, contexto: &str) -> anyhow::Error {
    let (unica, referencia) = match &err {
        sqlx::Error::RowNotFound => {
            return CosteoError::NoEncontrado(format!("No se encontró {contexto}")).into();
        }
        sqlx::Error::Database(db_err) => {
            let msg = db_err.message();
            (
                db_err.is_unique_violation() || msg.contains("UNIQUE"),
                db_err.is_foreign_key_violation() || msg.contains("FOREIGN KEY"),
            )
        }
        _ => (false, false),
    };

    if unica {
        CosteoError::Conflicto(format!("Ya existe un registro de {contexto} con esos datos")).into()
    } else if referencia {
        CosteoError::Conflicto(format!(
            "Operación sobre {contexto} viola una referencia a otro registro"
        ))
        .into()
    } else {
        anyhow::Error::new(err).context(format!("Error de base de datos en {contexto}"))
    }
}
