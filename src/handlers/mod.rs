//! handlers/mod.rs
//! Módulo que agrupa los endpoints HTTP (auth, catálogos del costeo, reportes, etc.).
pub mod auth_handler;
pub mod catalogo_handler;
pub mod cliente_handler;
pub mod configuracion_handler;
pub mod dashboard_handler;
pub mod formula_handler;
pub mod imagen;
pub mod material_etiquetado_handler;
pub mod materia_prima_handler;
pub mod permiso_handler;
pub mod producto_handler;
pub mod reporte_handler;
pub mod respuesta;
pub mod sesion;
pub mod storage_handler;
pub mod usuario_handler;
pub mod zona_handler;
