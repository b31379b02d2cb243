//! handlers/sesion.rs
//! Extractor de `SesionUsuario` a partir de las cookies de la petición.
//! Todo endpoint que recibe `sesion: SesionUsuario` queda protegido: sin
//! sesión válida responde 401 antes de llegar al handler.

use actix_web::cookie::{time, Cookie, SameSite};
use actix_web::dev::Payload;
use actix_web::error::InternalError;
use actix_web::http::StatusCode;
use actix_web::{web, FromRequest, HttpRequest};
use futures_util::future::{ready, Ready};

use crate::handlers::respuesta::{fallo, ApiError};
use crate::models::sesion_model::{SesionUsuario, COOKIES_SESION, DIAS_SESION};
use crate::services::auth_service::AuthService;

/// Los valores pueden traer espacios, acentos o `|`, se guardan url-encoded
pub fn codificar_cookie(valor: &str) -> String {
    urlencoding::encode(valor).into_owned()
}

/// Cookies escritas por otros clientes pueden venir sin codificar
pub fn decodificar_cookie(valor: &str) -> String {
    urlencoding::decode(valor)
        .map(|v| v.into_owned())
        .unwrap_or_else(|_| valor.to_string())
}

pub fn cookie_sesion(nombre: &'static str, valor: &str) -> Cookie<'static> {
    Cookie::build(nombre, codificar_cookie(valor))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .max_age(time::Duration::days(DIAS_SESION))
        .finish()
}

/// Cookies que expiran de inmediato las siete de la sesión
pub fn cookies_borradas() -> Vec<Cookie<'static>> {
    COOKIES_SESION
        .iter()
        .map(|nombre| {
            let mut cookie = Cookie::build(*nombre, "").path("/").finish();
            cookie.make_removal();
            cookie
        })
        .collect()
}

fn extraer(req: &HttpRequest) -> Result<SesionUsuario, actix_web::Error> {
    let Some(auth) = req.app_data::<web::Data<AuthService>>() else {
        log::error!("AuthService no registrado en la aplicación");
        let mensaje = "Servicio de autenticación no disponible";
        return Err(InternalError::from_response(
            mensaje,
            fallo(StatusCode::INTERNAL_SERVER_ERROR, mensaje),
        )
        .into());
    };

    auth.sesion_desde_cookies(|nombre| req.cookie(nombre).map(|c| decodificar_cookie(c.value())))
        .map_err(|e| ApiError::from(e).into())
}

impl FromRequest for SesionUsuario {
    type Error = actix_web::Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        ready(extraer(req))
    }
}
