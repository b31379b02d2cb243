//! services/rpc_service.rs
//! Invocación de procedimientos almacenados remotos (`POST /rest/v1/rpc/{nombre}`).
//! La aritmética del costeo vive en la base de datos remota; aquí sólo se
//! arma la llamada y se regresa el JSON tal cual.

use std::time::Duration;

use anyhow::{Context, Result};
use reqwest::Client;
use serde_json::Value;

use crate::config::app_config::AppConfig;
use crate::errors::CosteoError;
use crate::models::reporte_model::RPC_PERMITIDOS;

#[derive(Clone, Debug)]
pub struct RpcService {
    base_url: Option<String>,
    api_key: Option<String>,
    http_client: Client,
}

impl RpcService {
    pub fn new(config: &AppConfig) -> Result<Self> {
        let http_client = Client::builder()
            .timeout(Duration::from_secs(config.rpc_timeout_secs))
            .build()
            .context("No se pudo construir el cliente HTTP para RPC")?;

        if config.rpc_url.is_none() {
            log::warn!("COSTEO_RPC_URL no definida; los reportes no estarán disponibles");
        }

        Ok(RpcService {
            base_url: config.rpc_url.clone(),
            api_key: config.rpc_key.clone(),
            http_client,
        })
    }

    pub fn endpoint(&self, nombre: &str) -> Option<String> {
        self.base_url
            .as_ref()
            .map(|base| format!("{}/rest/v1/rpc/{}", base.trim_end_matches('/'), nombre))
    }

    /// Llama al procedimiento `nombre` con `params` como body JSON
    pub async fn llamar(&self, nombre: &str, params: &Value) -> Result<Value> {
        if !RPC_PERMITIDOS.contains(&nombre) {
            return Err(CosteoError::validacion(format!(
                "Procedimiento no permitido: {nombre}"
            )));
        }

        let endpoint = self.endpoint(nombre).ok_or_else(|| {
            anyhow::Error::from(CosteoError::Remoto {
                status: 503,
                mensaje: "El servicio de procedimientos remotos no está configurado".to_string(),
            })
        })?;

        log::info!("(rpc) Llamando {} con params={}", nombre, params);

        let mut peticion = self.http_client.post(&endpoint).json(params);
        if let Some(key) = &self.api_key {
            peticion = peticion.bearer_auth(key).header("apikey", key.as_str());
        }

        let resp = peticion
            .send()
            .await
            .with_context(|| format!("Fallo la llamada RPC {nombre}"))?;

        let status = resp.status();
        if !status.is_success() {
            let mensaje = resp.text().await.unwrap_or_default();
            log::error!("(rpc) {} respondió {}: {}", nombre, status, mensaje);
            return Err(CosteoError::Remoto {
                status: status.as_u16(),
                mensaje,
            }
            .into());
        }

        // Procedimientos "void" responden sin body
        let texto = resp
            .text()
            .await
            .with_context(|| format!("Respuesta ilegible de RPC {nombre}"))?;
        if texto.trim().is_empty() {
            return Ok(Value::Null);
        }
        serde_json::from_str(&texto).with_context(|| format!("JSON inválido de RPC {nombre}"))
    }
}
