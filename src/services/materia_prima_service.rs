//! services/materia_prima_service.rs
//! Materia prima; el costo con factor de importación se calcula al guardar.

use anyhow::Result;
use sqlx::{Pool, Sqlite};

use crate::errors::{mapear_sqlx, CosteoError};
use crate::models::comun_model::{Listado, OpcionDropdown, PaginacionQuery};
use crate::models::materia_prima_model::{MateriaPrima, MateriaPrimaFiltros, MateriaPrimaForm};
use crate::services::crud_service::{self, Filtro, Tabla};
use crate::services::validacion::{ahora, numero, opcional, requerido};

/// Factor usado cuando el formulario no lo trae
pub const FACTOR_IMPORTACION_DEFAULT: f64 = 1.0;

impl Tabla for MateriaPrima {
    const TABLA: &'static str = "materiaprima";
    const COLUMNAS: &'static str = "id, codigo, nombre, unidadmedida, costo, factorimportacion, \
         costoconfactor, activo, fechacreacion, fechaactualizacion";
    const COLUMNA_NOMBRE: &'static str = "nombre";
    const ORDENABLES: &'static [&'static str] =
        &["nombre", "codigo", "costo", "costoconfactor", "id"];
    const CONTEXTO: &'static str = "materia prima";
}

struct MateriaPrimaCampos {
    codigo: String,
    nombre: String,
    unidadmedida: Option<String>,
    costo: f64,
    factorimportacion: f64,
}

impl MateriaPrimaCampos {
    fn desde_form(form: MateriaPrimaForm) -> Result<Self> {
        Ok(MateriaPrimaCampos {
            codigo: requerido("codigo", &form.codigo)?.to_uppercase(),
            nombre: requerido("nombre", &form.nombre)?,
            unidadmedida: opcional(form.unidadmedida),
            costo: numero("costo", form.costo)?,
            factorimportacion: numero(
                "factorimportacion",
                form.factorimportacion.unwrap_or(FACTOR_IMPORTACION_DEFAULT),
            )?,
        })
    }

    fn costo_con_factor(&self) -> f64 {
        self.costo * self.factorimportacion
    }
}

#[derive(Clone, Debug)]
pub struct MateriaPrimaService {
    db_pool: Pool<Sqlite>,
}

impl MateriaPrimaService {
    pub fn new(db_pool: Pool<Sqlite>) -> Self {
        MateriaPrimaService { db_pool }
    }

    pub async fn listar(
        &self,
        filtros: &MateriaPrimaFiltros,
        query: &PaginacionQuery,
    ) -> Result<Listado<MateriaPrima>> {
        let (orden, paginacion) = crud_service::orden_y_pagina::<MateriaPrima>(query)?;
        let filtro = Filtro::nuevo()
            .ilike("nombre", filtros.nombre.as_deref())
            .ilike("codigo", filtros.codigo.as_deref())
            .eq_bool("activo", filtros.activo);
        crud_service::listar(&self.db_pool, &filtro, &orden, &paginacion).await
    }

    pub async fn obtener(&self, id: i64) -> Result<MateriaPrima> {
        crud_service::obtener(&self.db_pool, id).await
    }

    pub async fn crear(&self, form: MateriaPrimaForm) -> Result<i64> {
        let m = MateriaPrimaCampos::desde_form(form)?;
        let now = ahora();

        let id = sqlx::query(
            r#"
            INSERT INTO materiaprima (
                codigo, nombre, unidadmedida, costo, factorimportacion, costoconfactor,
                activo, fechacreacion, fechaactualizacion
            )
            VALUES (?1, ?2, ?3, ?4, ?5, ?6, 1, ?7, ?7)
            "#,
        )
        .bind(&m.codigo)
        .bind(&m.nombre)
        .bind(&m.unidadmedida)
        .bind(m.costo)
        .bind(m.factorimportacion)
        .bind(m.costo_con_factor())
        .bind(&now)
        .execute(&self.db_pool)
        .await
        .map_err(|e| mapear_sqlx(e, "materia prima"))?
        .last_insert_rowid();

        log::info!("Materia prima {} creada ({})", id, m.codigo);
        Ok(id)
    }

    pub async fn actualizar(&self, id: i64, form: MateriaPrimaForm) -> Result<()> {
        let m = MateriaPrimaCampos::desde_form(form)?;

        let res = sqlx::query(
            r#"
            UPDATE materiaprima
            SET codigo = ?1,
                nombre = ?2,
                unidadmedida = ?3,
                costo = ?4,
                factorimportacion = ?5,
                costoconfactor = ?6,
                fechaactualizacion = ?7
            WHERE id = ?8
            "#,
        )
        .bind(&m.codigo)
        .bind(&m.nombre)
        .bind(&m.unidadmedida)
        .bind(m.costo)
        .bind(m.factorimportacion)
        .bind(m.costo_con_factor())
        .bind(ahora())
        .bind(id)
        .execute(&self.db_pool)
        .await
        .map_err(|e| mapear_sqlx(e, "materia prima"))?;

        if res.rows_affected() == 0 {
            return Err(CosteoError::no_encontrado(format!(
                "No se encontró materia prima con id {id}"
            )));
        }
        Ok(())
    }

    pub async fn cambiar_estatus(&self, id: i64, activo: bool) -> Result<()> {
        crud_service::cambiar_estatus::<MateriaPrima>(&self.db_pool, id, activo).await
    }

    pub async fn eliminar(&self, id: i64) -> Result<()> {
        crud_service::eliminar::<MateriaPrima>(&self.db_pool, id).await
    }

    pub async fn dropdown(&self) -> Result<Vec<OpcionDropdown>> {
        crud_service::dropdown::<MateriaPrima>(&self.db_pool, &Filtro::nuevo()).await
    }
}
