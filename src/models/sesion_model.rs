//! models/sesion_model.rs
//! Datos de sesión que viajan en cookies.

use serde::{Deserialize, Serialize};

use crate::errors::CosteoError;
use crate::models::permiso_model::ROL_ADMINISTRADOR;

pub const COOKIE_USUARIO_ID: &str = "UsuarioId";
pub const COOKIE_EMAIL: &str = "Email";
pub const COOKIE_NOMBRE_COMPLETO: &str = "NombreCompleto";
pub const COOKIE_CLIENTE_ID: &str = "ClienteId";
pub const COOKIE_ROL_ID: &str = "RolId";
pub const COOKIE_PERMISOS: &str = "Permisos";
pub const COOKIE_SESION_ACTIVA: &str = "SesionActiva";

pub const COOKIES_SESION: [&str; 7] = [
    COOKIE_USUARIO_ID,
    COOKIE_EMAIL,
    COOKIE_NOMBRE_COMPLETO,
    COOKIE_CLIENTE_ID,
    COOKIE_ROL_ID,
    COOKIE_PERMISOS,
    COOKIE_SESION_ACTIVA,
];

/// Vigencia de la sesión
pub const DIAS_SESION: i64 = 20;

#[derive(Debug, Clone, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SesionUsuario {
    pub usuarioid: i64,
    pub email: String,
    pub nombrecompleto: String,
    /// 0 cuando el usuario no pertenece a un cliente
    pub clienteid: i64,
    pub rolid: i64,
    pub permisos: Vec<i64>,
}

impl SesionUsuario {
    pub fn es_administrador(&self) -> bool {
        self.rolid == ROL_ADMINISTRADOR
    }

    pub fn tiene_permiso(&self, permisoid: i64) -> bool {
        self.permisos.contains(&permisoid)
    }

    /// Filtro de cliente efectivo. El administrador conserva el solicitado;
    /// cualquier otro rol queda limitado al cliente de su sesión.
    pub fn alcance_cliente(&self, solicitado: Option<i64>) -> Option<i64> {
        if self.es_administrador() {
            solicitado.filter(|c| *c > 0)
        } else {
            Some(self.clienteid)
        }
    }

    pub fn requiere_permiso(&self, permisoid: i64) -> anyhow::Result<()> {
        if !self.tiene_permiso(permisoid) {
            return Err(CosteoError::Prohibido(format!(
                "El usuario no tiene el permiso {permisoid}"
            ))
            .into());
        }
        Ok(())
    }

    pub fn requiere_administrador(&self) -> anyhow::Result<()> {
        if !self.es_administrador() {
            return Err(CosteoError::Prohibido(
                "Operación reservada al administrador".to_string(),
            )
            .into());
        }
        Ok(())
    }

    /// Un registro de otro cliente (o sin cliente) sólo lo toca el administrador
    pub fn verificar_cliente(&self, clienteid: Option<i64>) -> anyhow::Result<()> {
        if self.es_administrador() || clienteid == Some(self.clienteid) {
            return Ok(());
        }
        Err(CosteoError::Prohibido("El registro pertenece a otro cliente".to_string()).into())
    }

    /// `1|2|3`
    pub fn permisos_blob(&self) -> String {
        unir_permisos(&self.permisos)
    }
}

pub fn unir_permisos(permisos: &[i64]) -> String {
    permisos
        .iter()
        .map(|p| p.to_string())
        .collect::<Vec<_>>()
        .join("|")
}

/// Ignora segmentos vacíos o no numéricos
pub fn parsear_permisos(blob: &str) -> Vec<i64> {
    blob.split('|')
        .filter_map(|p| p.trim().parse::<i64>().ok())
        .collect()
}

/// Contenido (antes de encriptar) de la cookie SesionActiva. Lleva los
/// datos que deciden permisos, para detectar cookies en claro alteradas.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TokenSesion {
    pub usuarioid: i64,
    pub email: String,
    pub clienteid: i64,
    pub rolid: i64,
    pub permisos: Vec<i64>,
    /// epoch en segundos
    pub expira: i64,
}

impl TokenSesion {
    pub fn serializar(&self) -> anyhow::Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn parsear(texto: &str) -> Option<Self> {
        serde_json::from_str(texto).ok()
    }
}
