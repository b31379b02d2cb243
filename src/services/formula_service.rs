//! services/formula_service.rs

use anyhow::Result;
use sqlx::{Pool, Sqlite};

use crate::errors::{mapear_sqlx, CosteoError};
use crate::models::comun_model::{Listado, OpcionDropdown, PaginacionQuery};
use crate::models::formula_model::{Formula, FormulaFiltros, FormulaForm};
use crate::services::crud_service::{self, Filtro, Tabla};
use crate::services::validacion::{ahora, numero, opcional, requerido};

impl Tabla for Formula {
    const TABLA: &'static str = "formulas";
    const COLUMNAS: &'static str = "id, codigo, nombre, especificaciones, unidadmedida, \
         rendimiento, costo, activo, fechacreacion, fechaactualizacion";
    const COLUMNA_NOMBRE: &'static str = "nombre";
    const ORDENABLES: &'static [&'static str] = &["nombre", "codigo", "costo", "id"];
    const CONTEXTO: &'static str = "fórmula";
}

struct FormulaCampos {
    codigo: String,
    nombre: String,
    especificaciones: Option<String>,
    unidadmedida: Option<String>,
    rendimiento: f64,
    costo: f64,
}

impl FormulaCampos {
    fn desde_form(form: FormulaForm) -> Result<Self> {
        Ok(FormulaCampos {
            codigo: requerido("codigo", &form.codigo)?.to_uppercase(),
            nombre: requerido("nombre", &form.nombre)?,
            especificaciones: opcional(form.especificaciones),
            unidadmedida: opcional(form.unidadmedida),
            rendimiento: numero("rendimiento", form.rendimiento)?,
            costo: numero("costo", form.costo)?,
        })
    }
}

#[derive(Clone, Debug)]
pub struct FormulaService {
    db_pool: Pool<Sqlite>,
}

impl FormulaService {
    pub fn new(db_pool: Pool<Sqlite>) -> Self {
        FormulaService { db_pool }
    }

    pub async fn listar(
        &self,
        filtros: &FormulaFiltros,
        query: &PaginacionQuery,
    ) -> Result<Listado<Formula>> {
        let (orden, paginacion) = crud_service::orden_y_pagina::<Formula>(query)?;
        let filtro = Filtro::nuevo()
            .ilike("nombre", filtros.nombre.as_deref())
            .ilike("codigo", filtros.codigo.as_deref())
            .eq_bool("activo", filtros.activo);
        crud_service::listar(&self.db_pool, &filtro, &orden, &paginacion).await
    }

    pub async fn obtener(&self, id: i64) -> Result<Formula> {
        crud_service::obtener(&self.db_pool, id).await
    }

    pub async fn crear(&self, form: FormulaForm) -> Result<i64> {
        let f = FormulaCampos::desde_form(form)?;
        let now = ahora();

        let id = sqlx::query(
            r#"
            INSERT INTO formulas (
                codigo, nombre, especificaciones, unidadmedida, rendimiento, costo,
                activo, fechacreacion, fechaactualizacion
            )
            VALUES (?1, ?2, ?3, ?4, ?5, ?6, 1, ?7, ?7)
            "#,
        )
        .bind(&f.codigo)
        .bind(&f.nombre)
        .bind(&f.especificaciones)
        .bind(&f.unidadmedida)
        .bind(f.rendimiento)
        .bind(f.costo)
        .bind(&now)
        .execute(&self.db_pool)
        .await
        .map_err(|e| mapear_sqlx(e, "fórmula"))?
        .last_insert_rowid();

        log::info!("Fórmula {} creada ({})", id, f.codigo);
        Ok(id)
    }

    pub async fn actualizar(&self, id: i64, form: FormulaForm) -> Result<()> {
        let f = FormulaCampos::desde_form(form)?;

        let res = sqlx::query(
            r#"
            UPDATE formulas
            SET codigo = ?1,
                nombre = ?2,
                especificaciones = ?3,
                unidadmedida = ?4,
                rendimiento = ?5,
                costo = ?6,
                fechaactualizacion = ?7
            WHERE id = ?8
            "#,
        )
        .bind(&f.codigo)
        .bind(&f.nombre)
        .bind(&f.especificaciones)
        .bind(&f.unidadmedida)
        .bind(f.rendimiento)
        .bind(f.costo)
        .bind(ahora())
        .bind(id)
        .execute(&self.db_pool)
        .await
        .map_err(|e| mapear_sqlx(e, "fórmula"))?;

        if res.rows_affected() == 0 {
            return Err(CosteoError::no_encontrado(format!(
                "No se encontró fórmula con id {id}"
            )));
        }
        Ok(())
    }

    pub async fn cambiar_estatus(&self, id: i64, activo: bool) -> Result<()> {
        crud_service::cambiar_estatus::<Formula>(&self.db_pool, id, activo).await
    }

    pub async fn eliminar(&self, id: i64) -> Result<()> {
        crud_service::eliminar::<Formula>(&self.db_pool, id).await
    }

    pub async fn dropdown(&self) -> Result<Vec<OpcionDropdown>> {
        crud_service::dropdown::<Formula>(&self.db_pool, &Filtro::nuevo()).await
    }
}
