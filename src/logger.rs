//! logger.rs
//! Logger del servicio (env_logger). `RUST_LOG` manda; sin ella se usa
//! `info` para el crate y `warn` para sqlx, que loguea cada consulta.

use std::io::Write;

const FILTRO_DEFAULT: &str = "info,sqlx=warn,reqwest=warn";

pub fn init_logger() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(FILTRO_DEFAULT))
        .format(|buf, record| {
            writeln!(
                buf,
                "[{} {:<5} {}] {}",
                buf.timestamp_seconds(),
                record.level(),
                record.target(),
                record.args()
            )
        })
        .init();
}
