//! handlers/storage_handler.rs
//! Sirve las imágenes del backend local de storage.

use std::path::{Component, PathBuf};

use actix_files::NamedFile;
use actix_web::web;

use crate::handlers::respuesta::fallo;
use crate::services::storage_service::StorageService;

/// GET /storage/{bucket}/{ruta..}
/// Ejemplo: http://localhost:5022/storage/imagenes/clientes/XXXX.png
pub async fn servir_imagen(
    storage: web::Data<StorageService>,
    path: web::Path<(String, String)>,
) -> Result<NamedFile, actix_web::Error> {
    let (bucket, ruta) = path.into_inner();
    let Some(dir) = storage.dir_local().filter(|_| bucket == storage.bucket()) else {
        return Err(no_encontrada());
    };

    let relativa = PathBuf::from(&ruta);
    // Sólo segmentos normales: nada de "..", raíz o prefijos
    if relativa
        .components()
        .any(|c| !matches!(c, Component::Normal(_)))
    {
        return Err(no_encontrada());
    }

    // NamedFile pone el Content-Type según la extensión
    NamedFile::open(dir.join(relativa)).map_err(|_| no_encontrada())
}

fn no_encontrada() -> actix_web::Error {
    actix_web::error::InternalError::from_response(
        "Imagen no encontrada",
        fallo(actix_web::http::StatusCode::NOT_FOUND, "Imagen no encontrada"),
    )
    .into()
}
