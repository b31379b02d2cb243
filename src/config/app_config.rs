//! config/app_config.rs
//! Configuración del servicio, leída del entorno (y de `.env` vía dotenv).

use std::{env, fmt::Display, ops::RangeInclusive, str::FromStr};

/// Clave usada sólo cuando no se define COSTEO_SECRET_KEY (desarrollo local).
const SECRET_KEY_DESARROLLO: &str = "costeo-dev-secret-cambiar";

/// Tamaño máximo por defecto de imágenes subidas (5 MiB)
const MAX_IMAGEN_BYTES_DEFAULT: usize = 5 * 1024 * 1024;

const RANGO_PORT: RangeInclusive<u16> = 1..=u16::MAX;
const RANGO_WORKERS: RangeInclusive<usize> = 1..=256;
const RANGO_RPC_TIMEOUT_SECS: RangeInclusive<u64> = 1..=600;
const RANGO_MAX_IMAGEN_BYTES: RangeInclusive<usize> = 1..=100 * 1024 * 1024;

/// Backend donde se guardan las imágenes
#[derive(Debug, Clone, PartialEq)]
pub enum StorageConfig {
    /// Directorio local servido por actix-files en `/storage`
    Local {
        dir: String,
        url_publica_base: String,
    },
    /// Bucket remoto con API estilo `storage/v1`
    Remoto {
        url: String,
        api_key: String,
    },
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub workers: usize,
    pub database_url: String,
    pub secret_key: String,
    pub rpc_url: Option<String>,
    pub rpc_key: Option<String>,
    pub rpc_timeout_secs: u64,
    pub storage: StorageConfig,
    pub storage_bucket: String,
    pub max_imagen_bytes: usize,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            host: "0.0.0.0".to_string(),
            port: 5022,
            workers: 2,
            database_url: "sqlite:./data/costeo.db".to_string(),
            secret_key: SECRET_KEY_DESARROLLO.to_string(),
            rpc_url: None,
            rpc_key: None,
            rpc_timeout_secs: 30,
            storage: StorageConfig::Local {
                dir: "./data/storage".to_string(),
                url_publica_base: "http://localhost:5022/storage".to_string(),
            },
            storage_bucket: "imagenes".to_string(),
            max_imagen_bytes: MAX_IMAGEN_BYTES_DEFAULT,
        }
    }
}

impl AppConfig {
    /// Límite del body JSON: una imagen en base64 más el resto del payload
    pub fn limite_json(&self) -> usize {
        (self.max_imagen_bytes / 3)
            .saturating_mul(4)
            .saturating_add(64 * 1024)
    }

    /// Lee la configuración desde variables de entorno.
    /// Valores inválidos se reportan con `warn!` y se usa el default.
    pub fn from_env() -> Self {
        let defaults = AppConfig::default();

        let secret_key = match opcional("COSTEO_SECRET_KEY") {
            Some(k) => k,
            None => {
                log::warn!("COSTEO_SECRET_KEY no definida; usando clave de desarrollo");
                defaults.secret_key.clone()
            }
        };

        let port = cargar_en_rango("COSTEO_PORT", defaults.port, &RANGO_PORT);
        let public_url = opcional("COSTEO_PUBLIC_URL")
            .unwrap_or_else(|| format!("http://localhost:{port}"));

        let storage = match (
            opcional("COSTEO_STORAGE_URL"),
            opcional("COSTEO_STORAGE_KEY"),
        ) {
            (Some(url), Some(api_key)) => StorageConfig::Remoto {
                url: url.trim_end_matches('/').to_string(),
                api_key,
            },
            (Some(_), None) => {
                log::warn!("COSTEO_STORAGE_URL sin COSTEO_STORAGE_KEY; usando storage local");
                storage_local(&public_url)
            }
            _ => storage_local(&public_url),
        };

        AppConfig {
            host: opcional("COSTEO_HOST").unwrap_or(defaults.host),
            port,
            workers: cargar_en_rango("COSTEO_WORKERS", defaults.workers, &RANGO_WORKERS),
            database_url: opcional("DATABASE_URL").unwrap_or(defaults.database_url),
            secret_key,
            rpc_url: opcional("COSTEO_RPC_URL").map(|u| u.trim_end_matches('/').to_string()),
            rpc_key: opcional("COSTEO_RPC_KEY"),
            rpc_timeout_secs: cargar_en_rango(
                "COSTEO_RPC_TIMEOUT_SECS",
                defaults.rpc_timeout_secs,
                &RANGO_RPC_TIMEOUT_SECS,
            ),
            storage,
            storage_bucket: opcional("COSTEO_STORAGE_BUCKET").unwrap_or(defaults.storage_bucket),
            max_imagen_bytes: cargar_en_rango(
                "COSTEO_MAX_IMAGEN_BYTES",
                defaults.max_imagen_bytes,
                &RANGO_MAX_IMAGEN_BYTES,
            ),
        }
    }
}

fn storage_local(public_url: &str) -> StorageConfig {
    StorageConfig::Local {
        dir: opcional("COSTEO_STORAGE_DIR").unwrap_or_else(|| "./data/storage".to_string()),
        url_publica_base: format!("{}/storage", public_url.trim_end_matches('/')),
    }
}

/// Variable de entorno no vacía
fn opcional(key: &str) -> Option<String> {
    env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn cargar<T>(key: &str, default: T) -> T
where
    T: FromStr + Display,
    T::Err: Display,
{
    match opcional(key) {
        None => default,
        Some(raw) => raw.parse().unwrap_or_else(|e| {
            log::warn!("Valor inválido para {key} ({raw}): {e}; usando {default}");
            default
        }),
    }
}

fn cargar_en_rango<T>(key: &str, default: T, rango: &RangeInclusive<T>) -> T
where
    T: FromStr + Display + PartialOrd + Copy,
    T::Err: Display,
{
    en_rango(key, cargar(key, default), default, rango)
}

/// `valor` si cae en `rango`; si no, `default` con un warning
pub fn en_rango<T>(key: &str, valor: T, default: T, rango: &RangeInclusive<T>) -> T
where
    T: Display + PartialOrd + Copy,
{
    if rango.contains(&valor) {
        valor
    } else {
        log::warn!(
            "{key}={valor} fuera de rango ({}..={}); usando {default}",
            rango.start(),
            rango.end()
        );
        default
    }
}
