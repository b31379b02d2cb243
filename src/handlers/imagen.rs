//! handlers/imagen.rs
//! Flujo compartido de `POST /api/<entidad>/{id}/imagen`.

use std::future::Future;

use actix_web::HttpResponse;

use crate::handlers::respuesta::Respuesta;
use crate::models::comun_model::{ImagenPayload, ImagenResponse};
use crate::services::storage_service::StorageService;

/// Sube la imagen, guarda la URL con `guardar` y borra la imagen anterior.
/// Si guardar falla se intenta borrar la recién subida.
pub async fn reemplazar_imagen<F, Fut>(
    storage: &StorageService,
    carpeta: &str,
    imagen: &ImagenPayload,
    guardar: F,
) -> Respuesta
where
    F: FnOnce(String) -> Fut,
    Fut: Future<Output = anyhow::Result<Option<String>>>,
{
    let imgurl = storage.subir_imagen(carpeta, imagen).await?;

    let anterior = match guardar(imgurl.clone()).await {
        Ok(anterior) => anterior,
        Err(e) => {
            if let Err(e2) = storage.eliminar_imagen(&imgurl).await {
                log::warn!("No se pudo limpiar {}: {:?}", imgurl, e2);
            }
            return Err(e.into());
        }
    };

    if let Some(anterior) = anterior.filter(|a| !a.is_empty() && *a != imgurl) {
        if let Err(e) = storage.eliminar_imagen(&anterior).await {
            log::warn!("No se pudo borrar la imagen anterior {}: {:?}", anterior, e);
        }
    }

    Ok(HttpResponse::Ok().json(ImagenResponse {
        success: true,
        imgurl,
    }))
}
