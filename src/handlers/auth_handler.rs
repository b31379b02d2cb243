//! handlers/auth_handler.rs
//! Login, logout y consulta de la sesión actual.

use actix_web::{web, HttpResponse};
use serde_json::json;

use crate::handlers::respuesta::{ok, Respuesta};
use crate::handlers::sesion::{cookie_sesion, cookies_borradas};
use crate::models::sesion_model::{
    LoginRequest, SesionUsuario, COOKIE_CLIENTE_ID, COOKIE_EMAIL, COOKIE_NOMBRE_COMPLETO,
    COOKIE_PERMISOS, COOKIE_ROL_ID, COOKIE_SESION_ACTIVA, COOKIE_USUARIO_ID,
};
use crate::services::auth_service::AuthService;

/// POST /api/auth/login
/// Valida credenciales y deja la sesión en siete cookies.
pub async fn login_endpoint(
    auth_service: web::Data<AuthService>,
    req_body: web::Json<LoginRequest>,
) -> Respuesta {
    let sesion = auth_service.login(&req_body).await?;
    let token = auth_service.token_sesion(&sesion)?;

    let mut resp = HttpResponse::Ok();
    for cookie in [
        cookie_sesion(COOKIE_USUARIO_ID, &sesion.usuarioid.to_string()),
        cookie_sesion(COOKIE_EMAIL, &sesion.email),
        cookie_sesion(COOKIE_NOMBRE_COMPLETO, &sesion.nombrecompleto),
        cookie_sesion(COOKIE_CLIENTE_ID, &sesion.clienteid.to_string()),
        cookie_sesion(COOKIE_ROL_ID, &sesion.rolid.to_string()),
        cookie_sesion(COOKIE_PERMISOS, &sesion.permisos_blob()),
        cookie_sesion(COOKIE_SESION_ACTIVA, &token),
    ] {
        resp.cookie(cookie);
    }

    Ok(resp.json(json!({
        "success": true,
        "data": sesion,
    })))
}

/// POST /api/auth/logout
/// No requiere sesión válida; siempre limpia las cookies.
pub async fn logout_endpoint() -> HttpResponse {
    let mut resp = HttpResponse::Ok();
    for cookie in cookies_borradas() {
        resp.cookie(cookie);
    }
    resp.json(json!({
        "success": true,
        "message": "Sesión cerrada",
    }))
}

/// GET /api/auth/sesion
pub async fn sesion_endpoint(sesion: SesionUsuario) -> HttpResponse {
    ok(sesion)
}
