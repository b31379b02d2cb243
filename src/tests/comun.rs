//! tests/comun.rs
//! Helpers compartidos: pool en memoria y datos de ejemplo.

use std::str::FromStr;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::{Pool, Sqlite};

use crate::models::cliente_model::ClienteForm;
use crate::models::producto_model::ProductoForm;
use crate::models::usuario_model::NuevoUsuarioForm;
use crate::services::cliente_service::ClienteService;
use crate::services::crypto_service::CryptoService;
use crate::services::producto_service::ProductoService;
use crate::services::usuario_service::UsuarioService;

pub const SECRETO_PRUEBAS: &str = "secreto-de-pruebas";

/// Una sola conexión que nunca se recicla: la base en memoria vive con ella
pub async fn pool_prueba() -> Pool<Sqlite> {
    let opciones = SqliteConnectOptions::from_str("sqlite::memory:")
        .expect("url sqlite")
        .foreign_keys(true);
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect_with(opciones)
        .await
        .expect("No se pudo abrir SQLite en memoria");
    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .expect("Fallo en migraciones");
    pool
}

pub fn crypto_prueba() -> CryptoService {
    CryptoService::new(SECRETO_PRUEBAS)
}

pub fn cliente_form(nombre: &str, clave: &str) -> ClienteForm {
    ClienteForm {
        nombre: nombre.to_string(),
        clave: clave.to_string(),
        direccion: None,
        telefono: None,
        email: None,
    }
}

pub async fn crear_cliente(pool: &Pool<Sqlite>, nombre: &str, clave: &str) -> i64 {
    ClienteService::new(pool.clone())
        .crear(cliente_form(nombre, clave))
        .await
        .expect("crear cliente")
}

pub fn producto_form(codigo: &str, clienteid: Option<i64>) -> ProductoForm {
    ProductoForm {
        codigo: codigo.to_string(),
        nombre: format!("Producto {codigo}"),
        descripcion: None,
        presentacion: Some("1 kg".to_string()),
        clienteid,
        zonaid: None,
        formulaid: None,
        costo: 10.0,
    }
}

pub async fn crear_producto(pool: &Pool<Sqlite>, codigo: &str, clienteid: Option<i64>) -> i64 {
    ProductoService::new(pool.clone())
        .crear(producto_form(codigo, clienteid))
        .await
        .expect("crear producto")
}

pub async fn crear_usuario(
    pool: &Pool<Sqlite>,
    email: &str,
    password: &str,
    rolid: i64,
    clienteid: Option<i64>,
) -> i64 {
    UsuarioService::new(pool.clone(), crypto_prueba())
        .crear(NuevoUsuarioForm {
            nombrecompleto: format!("Usuario {email}"),
            email: email.to_string(),
            password: password.to_string(),
            rolid,
            clienteid,
        })
        .await
        .expect("crear usuario")
}

/// Status HTTP que le corresponde a un error de servicio
pub fn status_de(err: &anyhow::Error) -> Option<u16> {
    err.downcast_ref::<crate::errors::CosteoError>()
        .map(|e| e.status_code().as_u16())
}
