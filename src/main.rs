use std::str::FromStr;

use actix_web::{middleware, web, App, HttpServer};
use anyhow::Context;
use dotenv::dotenv;
use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions};
use sqlx::{Pool, Sqlite};

use crate::config::app_config::AppConfig;
use crate::logger::init_logger;
use crate::services::auth_service::AuthService;
use crate::services::catalogo_service::CatalogoService;
use crate::services::cliente_service::ClienteService;
use crate::services::configuracion_service::ConfiguracionService;
use crate::services::crypto_service::CryptoService;
use crate::services::dashboard_service::DashboardService;
use crate::services::formula_service::FormulaService;
use crate::services::material_etiquetado_service::MaterialEtiquetadoService;
use crate::services::materia_prima_service::MateriaPrimaService;
use crate::services::permiso_service::PermisoService;
use crate::services::producto_service::ProductoService;
use crate::services::reporte_service::ReporteService;
use crate::services::rpc_service::RpcService;
use crate::services::storage_service::StorageService;
use crate::services::usuario_service::UsuarioService;
use crate::services::zona_service::ZonaService;

mod app;
mod config;
mod errors;
mod handlers;
mod logger;
mod models;
mod services;

#[cfg(test)]
mod tests;

async fn setup_database(config: &AppConfig) -> anyhow::Result<Pool<Sqlite>> {
    let opciones = SqliteConnectOptions::from_str(&config.database_url)
        .with_context(|| format!("DATABASE_URL inválida: {}", config.database_url))?
        .create_if_missing(true)
        .journal_mode(SqliteJournalMode::Wal)
        .foreign_keys(true);

    // Crear la carpeta del archivo si no existe (p.e. ./data)
    let archivo = opciones.clone().get_filename();
    if let Some(padre) = archivo.parent() {
        if !padre.as_os_str().is_empty() {
            std::fs::create_dir_all(padre)
                .with_context(|| format!("No se pudo crear directorio {:?}", padre))?;
        }
    }

    log::info!("Conectando a SQLite en {}", config.database_url);
    let db_pool = SqlitePoolOptions::new()
        .max_connections(10)
        .connect_with(opciones)
        .await
        .context("No se pudo conectar a la base de datos SQLite")?;

    sqlx::migrate!("./migrations")
        .run(&db_pool)
        .await
        .context("Fallo en migraciones")?;

    Ok(db_pool)
}

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok(); // Cargar .env al inicio
    init_logger();

    let config = AppConfig::from_env();
    let db_pool = setup_database(&config).await?;

    let crypto = CryptoService::new(&config.secret_key);
    let auth_service = AuthService::new(db_pool.clone(), crypto.clone());
    let usuario_service = UsuarioService::new(db_pool.clone(), crypto);
    let permiso_service = PermisoService::new(db_pool.clone());
    let cliente_service = ClienteService::new(db_pool.clone());
    let zona_service = ZonaService::new(db_pool.clone());
    let catalogo_service = CatalogoService::new(db_pool.clone());
    let producto_service = ProductoService::new(db_pool.clone());
    let formula_service = FormulaService::new(db_pool.clone());
    let materia_prima_service = MateriaPrimaService::new(db_pool.clone());
    let material_service = MaterialEtiquetadoService::new(db_pool.clone());
    let configuracion_service = ConfiguracionService::new(db_pool.clone());
    let dashboard_service = DashboardService::new(db_pool.clone());
    let reporte_service = ReporteService::new(RpcService::new(&config)?);
    let storage_service = StorageService::new(&config);

    if let Some(dir) = storage_service.dir_local() {
        std::fs::create_dir_all(&dir)
            .with_context(|| format!("No se pudo crear directorio de storage {:?}", dir))?;
    }

    let limite_json = config.limite_json();

    // Levantar servidor
    log::info!(
        "Levantando servidor en {}:{} ({} workers)",
        config.host,
        config.port,
        config.workers
    );
    HttpServer::new(move || {
        App::new()
            .wrap(middleware::Logger::default())
            .app_data(web::Data::new(auth_service.clone()))
            .app_data(web::Data::new(usuario_service.clone()))
            .app_data(web::Data::new(permiso_service.clone()))
            .app_data(web::Data::new(cliente_service.clone()))
            .app_data(web::Data::new(zona_service.clone()))
            .app_data(web::Data::new(catalogo_service.clone()))
            .app_data(web::Data::new(producto_service.clone()))
            .app_data(web::Data::new(formula_service.clone()))
            .app_data(web::Data::new(materia_prima_service.clone()))
            .app_data(web::Data::new(material_service.clone()))
            .app_data(web::Data::new(configuracion_service.clone()))
            .app_data(web::Data::new(dashboard_service.clone()))
            .app_data(web::Data::new(reporte_service.clone()))
            .app_data(web::Data::new(storage_service.clone()))
            .configure(app::init_extractores(limite_json))
            .configure(app::init_app)
    })
    .workers(config.workers)
    .bind((config.host.as_str(), config.port))?
    .run()
    .await?;

    Ok(())
}
