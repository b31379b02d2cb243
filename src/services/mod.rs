//! services/mod.rs
//! Módulo que agrupa los "servicios" o capas de negocio de la app.

pub mod auth_service;
pub mod catalogo_service;
pub mod cliente_service;
pub mod configuracion_service;
pub mod crud_service;
pub mod crypto_service;
pub mod dashboard_service;
pub mod formula_service;
pub mod material_etiquetado_service;
pub mod materia_prima_service;
pub mod permiso_service;
pub mod producto_service;
pub mod reporte_service;
pub mod rpc_service;
pub mod storage_service;
pub mod usuario_service;
pub mod validacion;
pub mod zona_service;
