//! services/auth_service.rs
//! Login contra la tabla usuarios y validación de la sesión en cookies.

use anyhow::{Context, Result};
use chrono::{Duration, Utc};
use sqlx::{Pool, Sqlite};

use crate::errors::CosteoError;
use crate::models::sesion_model::{
    parsear_permisos, LoginRequest, SesionUsuario, TokenSesion, COOKIE_CLIENTE_ID, COOKIE_EMAIL,
    COOKIE_NOMBRE_COMPLETO, COOKIE_PERMISOS, COOKIE_ROL_ID, COOKIE_SESION_ACTIVA,
    COOKIE_USUARIO_ID, DIAS_SESION,
};
use crate::models::usuario_model::UsuarioCredenciales;
use crate::services::crypto_service::CryptoService;
use crate::services::permiso_service::PermisoService;

const CREDENCIALES_INVALIDAS: &str = "Email o password incorrectos";
const SESION_INVALIDA: &str = "Sesión inválida o expirada";

#[derive(Clone, Debug)]
pub struct AuthService {
    db_pool: Pool<Sqlite>,
    crypto: CryptoService,
    permisos: PermisoService,
}

impl AuthService {
    pub fn new(db_pool: Pool<Sqlite>, crypto: CryptoService) -> Self {
        AuthService {
            permisos: PermisoService::new(db_pool.clone()),
            db_pool,
            crypto,
        }
    }

    /// Valida credenciales y arma la sesión. Cualquier fallo regresa el
    /// mismo mensaje para no revelar si el email existe.
    pub async fn login(&self, req: &LoginRequest) -> Result<SesionUsuario> {
        let email = req.email.trim().to_lowercase();
        if email.is_empty() || req.password.is_empty() {
            return Err(CosteoError::NoAutorizado(CREDENCIALES_INVALIDAS.to_string()).into());
        }

        let usuario = sqlx::query_as::<_, UsuarioCredenciales>(
            r#"
            SELECT id, nombrecompleto, email, password, rolid, clienteid, activo
            FROM usuarios
            WHERE email = ?1
            "#,
        )
        .bind(&email)
        .fetch_optional(&self.db_pool)
        .await
        .context("Fallo al consultar usuario")?;

        let Some(usuario) = usuario else {
            log::warn!("Login fallido: {} no existe", email);
            return Err(CosteoError::NoAutorizado(CREDENCIALES_INVALIDAS.to_string()).into());
        };

        if !usuario.activo {
            log::warn!("Login fallido: usuario {} inactivo", usuario.id);
            return Err(CosteoError::NoAutorizado(CREDENCIALES_INVALIDAS.to_string()).into());
        }

        let guardado = match self.crypto.desencriptar(&usuario.password) {
            Ok(p) => p,
            Err(e) => {
                log::warn!("Password ilegible para usuario {}: {}", usuario.id, e);
                return Err(CosteoError::NoAutorizado(CREDENCIALES_INVALIDAS.to_string()).into());
            }
        };
        if !CryptoService::iguales(&guardado, &req.password) {
            log::warn!("Login fallido: password incorrecto para usuario {}", usuario.id);
            return Err(CosteoError::NoAutorizado(CREDENCIALES_INVALIDAS.to_string()).into());
        }

        let permisos = self.permisos.ids_por_rol(usuario.rolid).await?;
        log::info!("Login correcto: usuario {} (rol {})", usuario.id, usuario.rolid);

        Ok(SesionUsuario {
            usuarioid: usuario.id,
            email: usuario.email,
            nombrecompleto: usuario.nombrecompleto,
            clienteid: usuario.clienteid.unwrap_or(0),
            rolid: usuario.rolid,
            permisos,
        })
    }

    /// Valor encriptado de la cookie SesionActiva
    pub fn token_sesion(&self, sesion: &SesionUsuario) -> Result<String> {
        let token = TokenSesion {
            usuarioid: sesion.usuarioid,
            email: sesion.email.clone(),
            clienteid: sesion.clienteid,
            rolid: sesion.rolid,
            permisos: sesion.permisos.clone(),
            expira: (Utc::now() + Duration::days(DIAS_SESION)).timestamp(),
        };
        self.crypto.encriptar(&token.serializar()?)
    }

    /// Reconstruye la sesión desde las cookies. `cookie` regresa el valor
    /// ya decodificado de la cookie con ese nombre. Las cookies en claro
    /// deben coincidir con el token encriptado.
    pub fn sesion_desde_cookies<F>(&self, cookie: F) -> Result<SesionUsuario>
    where
        F: Fn(&str) -> Option<String>,
    {
        let invalida = || -> anyhow::Error {
            CosteoError::NoAutorizado(SESION_INVALIDA.to_string()).into()
        };

        let token_encriptado = cookie(COOKIE_SESION_ACTIVA).ok_or_else(invalida)?;
        let token = self
            .crypto
            .desencriptar(&token_encriptado)
            .ok()
            .and_then(|t| TokenSesion::parsear(&t))
            .ok_or_else(invalida)?;

        if token.expira < Utc::now().timestamp() {
            return Err(invalida());
        }

        let entero = |nombre: &str| cookie(nombre).and_then(|v| v.trim().parse::<i64>().ok());
        let coinciden = entero(COOKIE_USUARIO_ID) == Some(token.usuarioid)
            && cookie(COOKIE_EMAIL).as_deref() == Some(token.email.as_str())
            && entero(COOKIE_ROL_ID) == Some(token.rolid)
            && entero(COOKIE_CLIENTE_ID).unwrap_or(0) == token.clienteid
            && cookie(COOKIE_PERMISOS)
                .map(|p| parsear_permisos(&p))
                .unwrap_or_default()
                == token.permisos;
        if !coinciden {
            log::warn!("Cookies de sesión alteradas para usuario {}", token.usuarioid);
            return Err(invalida());
        }

        Ok(SesionUsuario {
            usuarioid: token.usuarioid,
            email: token.email,
            nombrecompleto: cookie(COOKIE_NOMBRE_COMPLETO).unwrap_or_default(),
            clienteid: token.clienteid,
            rolid: token.rolid,
            permisos: token.permisos,
        })
    }
}
