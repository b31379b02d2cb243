//! tests/mod.rs
//! Pruebas del servicio; todas usan SQLite en memoria con las migraciones reales.

mod comun;
mod config_tests;
mod entidades_tests;
mod handler_tests;
