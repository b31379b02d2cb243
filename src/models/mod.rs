//! models/mod.rs
//! Módulo raíz para modelos/estructuras compartidas.

pub mod catalogo_model;
pub mod cliente_model;
pub mod comun_model;
pub mod configuracion_model;
pub mod dashboard_model;
pub mod formula_model;
pub mod material_etiquetado_model;
pub mod materia_prima_model;
pub mod permiso_model;
pub mod producto_model;
pub mod reporte_model;
pub mod sesion_model;
pub mod usuario_model;
pub mod zona_model;
