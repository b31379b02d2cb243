//! services/storage_service.rs
//! Subida de imágenes a storage y obtención de su URL pública.
//!
//! Dos backends: directorio local (servido por actix-files en /storage)
//! o bucket remoto con API `storage/v1`.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use bytes::Bytes;
use reqwest::Client;
use uuid::Uuid;

use crate::config::app_config::{AppConfig, StorageConfig};
use crate::errors::CosteoError;
use crate::models::comun_model::ImagenPayload;

/// content-type -> extensión
const TIPOS_PERMITIDOS: [(&str, &str); 4] = [
    ("image/png", "png"),
    ("image/jpeg", "jpg"),
    ("image/webp", "webp"),
    ("image/gif", "gif"),
];

#[derive(Clone, Debug)]
pub struct StorageService {
    backend: StorageConfig,
    bucket: String,
    max_bytes: usize,
    http_client: Client,
}

impl StorageService {
    pub fn new(config: &AppConfig) -> Self {
        StorageService {
            backend: config.storage.clone(),
            bucket: config.storage_bucket.clone(),
            max_bytes: config.max_imagen_bytes,
            http_client: Client::new(),
        }
    }

    pub fn bucket(&self) -> &str {
        &self.bucket
    }

    /// Directorio raíz del bucket local (None con backend remoto)
    pub fn dir_local(&self) -> Option<PathBuf> {
        match &self.backend {
            StorageConfig::Local { dir, .. } => Some(Path::new(dir).join(&self.bucket)),
            StorageConfig::Remoto { .. } => None,
        }
    }

    /// Valida la imagen, la guarda en `<carpeta>/<uuid>.<ext>` y regresa la URL pública
    pub async fn subir_imagen(&self, carpeta: &str, imagen: &ImagenPayload) -> Result<String> {
        let extension = self.validar(imagen)?;
        let carpeta = limpiar_segmento(carpeta);
        let objeto = format!("{}/{}.{}", carpeta, Uuid::new_v4(), extension);

        log::info!(
            "Subiendo imagen '{}' ({} bytes) como {}",
            imagen.nombre_archivo,
            imagen.data.len(),
            objeto
        );

        match &self.backend {
            StorageConfig::Local {
                dir,
                url_publica_base,
            } => {
                let destino = Path::new(dir).join(&self.bucket).join(&objeto);
                if let Some(padre) = destino.parent() {
                    tokio::fs::create_dir_all(padre)
                        .await
                        .with_context(|| format!("No se pudo crear {:?}", padre))?;
                }
                tokio::fs::write(&destino, &imagen.data)
                    .await
                    .with_context(|| format!("No se pudo guardar imagen en {:?}", destino))?;

                Ok(format!(
                    "{}/{}/{}",
                    url_publica_base.trim_end_matches('/'),
                    self.bucket,
                    objeto
                ))
            }
            StorageConfig::Remoto { url, api_key } => {
                let endpoint = format!(
                    "{}/storage/v1/object/{}/{}",
                    url,
                    self.bucket,
                    codificar_ruta(&objeto)
                );
                let resp = self
                    .http_client
                    .post(&endpoint)
                    .bearer_auth(api_key)
                    .header("apikey", api_key.as_str())
                    .header("Content-Type", imagen.content_type.as_str())
                    .body(Bytes::copy_from_slice(&imagen.data))
                    .send()
                    .await
                    .context("Fallo al subir imagen al storage remoto")?;

                let status = resp.status();
                if !status.is_success() {
                    let mensaje = resp.text().await.unwrap_or_default();
                    return Err(CosteoError::Remoto {
                        status: status.as_u16(),
                        mensaje,
                    }
                    .into());
                }

                Ok(self.url_publica_remota(url, &objeto))
            }
        }
    }

    /// Borra una imagen a partir de su URL pública. URLs ajenas al bucket se ignoran.
    pub async fn eliminar_imagen(&self, url_publica: &str) -> Result<()> {
        let Some(objeto) = self.objeto_desde_url(url_publica) else {
            log::warn!("URL fuera del storage, no se borra: {}", url_publica);
            return Ok(());
        };

        match &self.backend {
            StorageConfig::Local { dir, .. } => {
                let ruta = Path::new(dir).join(&self.bucket).join(&objeto);
                match tokio::fs::remove_file(&ruta).await {
                    Ok(()) => Ok(()),
                    Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
                    Err(e) => Err(e).with_context(|| format!("No se pudo borrar {:?}", ruta)),
                }
            }
            StorageConfig::Remoto { url, api_key } => {
                let endpoint = format!(
                    "{}/storage/v1/object/{}/{}",
                    url,
                    self.bucket,
                    codificar_ruta(&objeto)
                );
                let resp = self
                    .http_client
                    .delete(&endpoint)
                    .bearer_auth(api_key)
                    .header("apikey", api_key.as_str())
                    .send()
                    .await
                    .context("Fallo al borrar imagen del storage remoto")?;
                if !resp.status().is_success() && resp.status().as_u16() != 404 {
                    return Err(CosteoError::Remoto {
                        status: resp.status().as_u16(),
                        mensaje: "No se pudo borrar la imagen".to_string(),
                    }
                    .into());
                }
                Ok(())
            }
        }
    }

    fn validar(&self, imagen: &ImagenPayload) -> Result<&'static str> {
        let tipo = imagen.content_type.trim().to_ascii_lowercase();
        let extension = TIPOS_PERMITIDOS
            .iter()
            .find(|(ct, _)| *ct == tipo)
            .map(|(_, ext)| *ext)
            .ok_or_else(|| {
                CosteoError::validacion(format!("Tipo de imagen no permitido: {tipo}"))
            })?;

        if imagen.data.is_empty() {
            return Err(CosteoError::validacion("La imagen está vacía"));
        }
        if imagen.data.len() > self.max_bytes {
            return Err(CosteoError::validacion(format!(
                "La imagen excede el tamaño máximo de {} bytes",
                self.max_bytes
            )));
        }
        Ok(extension)
    }

    fn url_publica_remota(&self, url: &str, objeto: &str) -> String {
        format!(
            "{}/storage/v1/object/public/{}/{}",
            url,
            self.bucket,
            codificar_ruta(objeto)
        )
    }

    /// Ruta del objeto dentro del bucket a partir de la URL pública
    fn objeto_desde_url(&self, url_publica: &str) -> Option<String> {
        let prefijo = match &self.backend {
            StorageConfig::Local {
                url_publica_base, ..
            } => format!("{}/{}/", url_publica_base.trim_end_matches('/'), self.bucket),
            StorageConfig::Remoto { url, .. } => {
                format!("{}/storage/v1/object/public/{}/", url, self.bucket)
            }
        };
        let resto = url_publica.strip_prefix(&prefijo)?;
        let objeto = urlencoding::decode(resto).ok()?.into_owned();
        if objeto.is_empty() || objeto.split('/').any(|s| s == ".." || s.is_empty()) {
            return None;
        }
        Some(objeto)
    }
}

/// Deja sólo [a-z0-9_-] para nombres de carpeta
fn limpiar_segmento(segmento: &str) -> String {
    let limpio: String = segmento
        .trim()
        .to_ascii_lowercase()
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || *c == '-' || *c == '_')
        .collect();
    if limpio.is_empty() {
        "general".to_string()
    } else {
        limpio
    }
}

fn codificar_ruta(objeto: &str) -> String {
    objeto
        .split('/')
        .map(|s| urlencoding::encode(s).into_owned())
        .collect::<Vec<_>>()
        .join("/")
}
