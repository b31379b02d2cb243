//! handlers/respuesta.rs
//! Formato común de las respuestas JSON y traducción de errores a status HTTP.

use std::fmt;

use actix_web::error::InternalError;
use actix_web::http::StatusCode;
use actix_web::{HttpRequest, HttpResponse, ResponseError};
use serde::Serialize;
use serde_json::json;

use crate::errors::CosteoError;

/// Resultado de todos los endpoints protegidos
pub type Respuesta = Result<HttpResponse, ApiError>;

/// Envoltorio de `anyhow::Error` que actix sabe convertir en respuesta
pub struct ApiError(anyhow::Error);

impl ApiError {
    fn dominio(&self) -> Option<&CosteoError> {
        self.0.downcast_ref::<CosteoError>()
    }
}

impl From<anyhow::Error> for ApiError {
    fn from(err: anyhow::Error) -> Self {
        ApiError(err)
    }
}

impl From<CosteoError> for ApiError {
    fn from(err: CosteoError) -> Self {
        ApiError(err.into())
    }
}

impl fmt::Debug for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self.0)
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        self.dominio()
            .map(CosteoError::status_code)
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();
        // Los errores internos no exponen detalles de la base de datos
        let mensaje = match self.dominio() {
            Some(e) => e.to_string(),
            None => "Error interno del servidor".to_string(),
        };
        if status.is_server_error() {
            log::error!("Error {}: {:?}", status.as_u16(), self.0);
        } else {
            log::warn!("Error {}: {}", status.as_u16(), self.0);
        }
        fallo(status, &mensaje)
    }
}

pub fn fallo(status: StatusCode, mensaje: &str) -> HttpResponse {
    HttpResponse::build(status).json(json!({
        "success": false,
        "error": mensaje,
    }))
}

pub fn ok<T: Serialize>(data: T) -> HttpResponse {
    HttpResponse::Ok().json(json!({
        "success": true,
        "data": data,
    }))
}

pub fn creado(id: i64, mensaje: &str) -> HttpResponse {
    HttpResponse::Created().json(json!({
        "success": true,
        "id": id,
        "message": mensaje,
    }))
}

pub fn mensaje(mensaje: &str) -> HttpResponse {
    HttpResponse::Ok().json(json!({
        "success": true,
        "message": mensaje,
    }))
}

/// Errores de deserialización de JSON, query o path con el mismo formato que el resto
pub fn error_de_entrada<E: fmt::Display>(err: E, _req: &HttpRequest) -> actix_web::Error {
    let mensaje = format!("Petición inválida: {}", err);
    log::warn!("{}", mensaje);
    InternalError::from_response(
        mensaje.clone(),
        fallo(StatusCode::BAD_REQUEST, &mensaje),
    )
    .into()
}
