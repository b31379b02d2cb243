//! services/configuracion_service.rs
//! Parámetros generales (clave/valor) usados por el costeo.

use anyhow::{Context, Result};
use sqlx::{Pool, Sqlite};

use crate::errors::{mapear_sqlx, CosteoError};
use crate::models::comun_model::{Listado, PaginacionQuery};
use crate::models::configuracion_model::{Configuracion, ConfiguracionFiltros, ConfiguracionForm};
use crate::services::crud_service::{self, Filtro, Tabla};
use crate::services::validacion::{ahora, opcional, requerido};

impl Tabla for Configuracion {
    const TABLA: &'static str = "configuraciones";
    const COLUMNAS: &'static str =
        "id, clave, descripcion, valor, valorfloat, activo, fechacreacion, fechaactualizacion";
    const COLUMNA_NOMBRE: &'static str = "descripcion";
    const ORDENABLES: &'static [&'static str] = &["clave", "descripcion", "id"];
    const CONTEXTO: &'static str = "configuración";
}

struct ConfiguracionCampos {
    clave: String,
    descripcion: String,
    valor: Option<String>,
    valorfloat: Option<f64>,
}

impl ConfiguracionCampos {
    fn desde_form(form: ConfiguracionForm) -> Result<Self> {
        if let Some(v) = form.valorfloat {
            if !v.is_finite() {
                return Err(CosteoError::validacion(
                    "El campo 'valorfloat' debe ser numérico",
                ));
            }
        }
        Ok(ConfiguracionCampos {
            clave: requerido("clave", &form.clave)?.to_lowercase(),
            descripcion: requerido("descripcion", &form.descripcion)?,
            valor: opcional(form.valor),
            valorfloat: form.valorfloat,
        })
    }
}

#[derive(Clone, Debug)]
pub struct ConfiguracionService {
    db_pool: Pool<Sqlite>,
}

impl ConfiguracionService {
    pub fn new(db_pool: Pool<Sqlite>) -> Self {
        ConfiguracionService { db_pool }
    }

    pub async fn listar(
        &self,
        filtros: &ConfiguracionFiltros,
        query: &PaginacionQuery,
    ) -> Result<Listado<Configuracion>> {
        let (orden, paginacion) = crud_service::orden_y_pagina::<Configuracion>(query)?;
        let filtro = Filtro::nuevo()
            .ilike("descripcion", filtros.descripcion.as_deref())
            .eq_bool("activo", filtros.activo);
        crud_service::listar(&self.db_pool, &filtro, &orden, &paginacion).await
    }

    pub async fn obtener(&self, id: i64) -> Result<Configuracion> {
        crud_service::obtener(&self.db_pool, id).await
    }

    pub async fn obtener_por_clave(&self, clave: &str) -> Result<Configuracion> {
        let clave = requerido("clave", clave)?.to_lowercase();
        let sql = format!(
            "SELECT {} FROM configuraciones WHERE clave = ?1",
            Configuracion::COLUMNAS
        );
        sqlx::query_as::<_, Configuracion>(&sql)
            .bind(&clave)
            .fetch_optional(&self.db_pool)
            .await
            .context("Fallo al consultar configuración")?
            .ok_or_else(|| {
                CosteoError::no_encontrado(format!("No existe la configuración '{clave}'"))
            })
    }

    pub async fn crear(&self, form: ConfiguracionForm) -> Result<i64> {
        let c = ConfiguracionCampos::desde_form(form)?;
        let now = ahora();

        let id = sqlx::query(
            r#"
            INSERT INTO configuraciones (
                clave, descripcion, valor, valorfloat,
                activo, fechacreacion, fechaactualizacion
            )
            VALUES (?1, ?2, ?3, ?4, 1, ?5, ?5)
            "#,
        )
        .bind(&c.clave)
        .bind(&c.descripcion)
        .bind(&c.valor)
        .bind(c.valorfloat)
        .bind(&now)
        .execute(&self.db_pool)
        .await
        .map_err(|e| mapear_sqlx(e, "configuración"))?
        .last_insert_rowid();

        Ok(id)
    }

    pub async fn actualizar(&self, id: i64, form: ConfiguracionForm) -> Result<()> {
        let c = ConfiguracionCampos::desde_form(form)?;

        let res = sqlx::query(
            r#"
            UPDATE configuraciones
            SET clave = ?1,
                descripcion = ?2,
                valor = ?3,
                valorfloat = ?4,
                fechaactualizacion = ?5
            WHERE id = ?6
            "#,
        )
        .bind(&c.clave)
        .bind(&c.descripcion)
        .bind(&c.valor)
        .bind(c.valorfloat)
        .bind(ahora())
        .bind(id)
        .execute(&self.db_pool)
        .await
        .map_err(|e| mapear_sqlx(e, "configuración"))?;

        if res.rows_affected() == 0 {
            return Err(CosteoError::no_encontrado(format!(
                "No se encontró configuración con id {id}"
            )));
        }
        Ok(())
    }

    pub async fn cambiar_estatus(&self, id: i64, activo: bool) -> Result<()> {
        crud_service::cambiar_estatus::<Configuracion>(&self.db_pool, id, activo).await
    }
}
