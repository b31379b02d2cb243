//! services/material_etiquetado_service.rs

use anyhow::Result;
use sqlx::{Pool, Sqlite};

use crate::errors::{mapear_sqlx, CosteoError};
use crate::models::comun_model::{Listado, OpcionDropdown, PaginacionQuery};
use crate::models::material_etiquetado_model::{
    MaterialEtiquetado, MaterialEtiquetadoFiltros, MaterialEtiquetadoForm,
};
use crate::services::crud_service::{self, Filtro, Tabla};
use crate::services::validacion::{ahora, numero, opcional, requerido};

impl Tabla for MaterialEtiquetado {
    const TABLA: &'static str = "materialesetiquetado";
    const COLUMNAS: &'static str = "id, codigo, nombre, tipo, unidadmedida, costo, imgurl, \
         activo, fechacreacion, fechaactualizacion";
    const COLUMNA_NOMBRE: &'static str = "nombre";
    const ORDENABLES: &'static [&'static str] = &["nombre", "codigo", "tipo", "costo", "id"];
    const CONTEXTO: &'static str = "material de etiquetado";
}

struct MaterialCampos {
    codigo: String,
    nombre: String,
    tipo: Option<String>,
    unidadmedida: Option<String>,
    costo: f64,
}

impl MaterialCampos {
    fn desde_form(form: MaterialEtiquetadoForm) -> Result<Self> {
        Ok(MaterialCampos {
            codigo: requerido("codigo", &form.codigo)?.to_uppercase(),
            nombre: requerido("nombre", &form.nombre)?,
            tipo: opcional(form.tipo),
            unidadmedida: opcional(form.unidadmedida),
            costo: numero("costo", form.costo)?,
        })
    }
}

#[derive(Clone, Debug)]
pub struct MaterialEtiquetadoService {
    db_pool: Pool<Sqlite>,
}

impl MaterialEtiquetadoService {
    pub fn new(db_pool: Pool<Sqlite>) -> Self {
        MaterialEtiquetadoService { db_pool }
    }

    pub async fn listar(
        &self,
        filtros: &MaterialEtiquetadoFiltros,
        query: &PaginacionQuery,
    ) -> Result<Listado<MaterialEtiquetado>> {
        let (orden, paginacion) = crud_service::orden_y_pagina::<MaterialEtiquetado>(query)?;
        let filtro = Filtro::nuevo()
            .ilike("nombre", filtros.nombre.as_deref())
            .ilike("codigo", filtros.codigo.as_deref())
            .eq_texto("tipo", filtros.tipo.as_deref())
            .eq_bool("activo", filtros.activo);
        crud_service::listar(&self.db_pool, &filtro, &orden, &paginacion).await
    }

    pub async fn obtener(&self, id: i64) -> Result<MaterialEtiquetado> {
        crud_service::obtener(&self.db_pool, id).await
    }

    pub async fn crear(&self, form: MaterialEtiquetadoForm) -> Result<i64> {
        let m = MaterialCampos::desde_form(form)?;
        let now = ahora();

        let id = sqlx::query(
            r#"
            INSERT INTO materialesetiquetado (
                codigo, nombre, tipo, unidadmedida, costo,
                activo, fechacreacion, fechaactualizacion
            )
            VALUES (?1, ?2, ?3, ?4, ?5, 1, ?6, ?6)
            "#,
        )
        .bind(&m.codigo)
        .bind(&m.nombre)
        .bind(&m.tipo)
        .bind(&m.unidadmedida)
        .bind(m.costo)
        .bind(&now)
        .execute(&self.db_pool)
        .await
        .map_err(|e| mapear_sqlx(e, "material de etiquetado"))?
        .last_insert_rowid();

        Ok(id)
    }

    pub async fn actualizar(&self, id: i64, form: MaterialEtiquetadoForm) -> Result<()> {
        let m = MaterialCampos::desde_form(form)?;

        let res = sqlx::query(
            r#"
            UPDATE materialesetiquetado
            SET codigo = ?1,
                nombre = ?2,
                tipo = ?3,
                unidadmedida = ?4,
                costo = ?5,
                fechaactualizacion = ?6
            WHERE id = ?7
            "#,
        )
        .bind(&m.codigo)
        .bind(&m.nombre)
        .bind(&m.tipo)
        .bind(&m.unidadmedida)
        .bind(m.costo)
        .bind(ahora())
        .bind(id)
        .execute(&self.db_pool)
        .await
        .map_err(|e| mapear_sqlx(e, "material de etiquetado"))?;

        if res.rows_affected() == 0 {
            return Err(CosteoError::no_encontrado(format!(
                "No se encontró material de etiquetado con id {id}"
            )));
        }
        Ok(())
    }

    pub async fn cambiar_estatus(&self, id: i64, activo: bool) -> Result<()> {
        crud_service::cambiar_estatus::<MaterialEtiquetado>(&self.db_pool, id, activo).await
    }

    pub async fn eliminar(&self, id: i64) -> Result<()> {
        crud_service::eliminar::<MaterialEtiquetado>(&self.db_pool, id).await
    }

    pub async fn dropdown(&self) -> Result<Vec<OpcionDropdown>> {
        crud_service::dropdown::<MaterialEtiquetado>(&self.db_pool, &Filtro::nuevo()).await
    }

    pub async fn actualizar_imagen(&self, id: i64, imgurl: &str) -> Result<Option<String>> {
        crud_service::actualizar_imgurl::<MaterialEtiquetado>(&self.db_pool, id, imgurl).await
    }
}
