//! tests/config_tests.rs
//! Límites de la configuración numérica.

use crate::config::app_config::{en_rango, AppConfig};

#[test]
fn valores_fuera_de_rango_usan_el_default() {
    assert_eq!(en_rango("COSTEO_WORKERS", 0usize, 2, &(1..=256)), 2);
    assert_eq!(en_rango("COSTEO_WORKERS", 8usize, 2, &(1..=256)), 8);
    assert_eq!(en_rango("COSTEO_RPC_TIMEOUT_SECS", 10_000u64, 30, &(1..=600)), 30);
}

#[test]
fn limite_json_no_desborda() {
    let config = AppConfig {
        max_imagen_bytes: usize::MAX,
        ..AppConfig::default()
    };
    assert_eq!(config.limite_json(), usize::MAX);

    let config = AppConfig::default();
    assert!(config.limite_json() > config.max_imagen_bytes);
}
