//! services/zona_service.rs

use anyhow::{Context, Result};
use sqlx::{Pool, Sqlite};

use crate::errors::{mapear_sqlx, CosteoError};
use crate::models::comun_model::{Listado, OpcionDropdown, PaginacionQuery};
use crate::models::zona_model::{Zona, ZonaFiltros, ZonaForm};
use crate::services::crud_service::{self, Filtro, Tabla};
use crate::services::validacion::{ahora, opcional, requerido};

impl Tabla for Zona {
    const TABLA: &'static str = "zonas";
    const COLUMNAS: &'static str =
        "id, nombre, clave, descripcion, activo, fechacreacion, fechaactualizacion";
    const COLUMNA_NOMBRE: &'static str = "nombre";
    const ORDENABLES: &'static [&'static str] = &["nombre", "clave", "id"];
    const CONTEXTO: &'static str = "zona";
}

#[derive(Clone, Debug)]
pub struct ZonaService {
    db_pool: Pool<Sqlite>,
}

impl ZonaService {
    pub fn new(db_pool: Pool<Sqlite>) -> Self {
        ZonaService { db_pool }
    }

    pub async fn listar(
        &self,
        filtros: &ZonaFiltros,
        query: &PaginacionQuery,
    ) -> Result<Listado<Zona>> {
        let (orden, paginacion) = crud_service::orden_y_pagina::<Zona>(query)?;
        let filtro = Filtro::nuevo()
            .ilike("nombre", filtros.nombre.as_deref())
            .eq_bool("activo", filtros.activo);
        crud_service::listar(&self.db_pool, &filtro, &orden, &paginacion).await
    }

    pub async fn obtener(&self, id: i64) -> Result<Zona> {
        crud_service::obtener(&self.db_pool, id).await
    }

    pub async fn crear(&self, form: ZonaForm) -> Result<i64> {
        let nombre = requerido("nombre", &form.nombre)?;
        let clave = requerido("clave", &form.clave)?.to_uppercase();
        let descripcion = opcional(form.descripcion);
        let now = ahora();

        let id = sqlx::query(
            r#"
            INSERT INTO zonas (nombre, clave, descripcion, activo, fechacreacion, fechaactualizacion)
            VALUES (?1, ?2, ?3, 1, ?4, ?4)
            "#,
        )
        .bind(&nombre)
        .bind(&clave)
        .bind(&descripcion)
        .bind(&now)
        .execute(&self.db_pool)
        .await
        .map_err(|e| mapear_sqlx(e, "zona"))?
        .last_insert_rowid();

        log::info!("Zona {} creada ({})", id, clave);
        Ok(id)
    }

    pub async fn actualizar(&self, id: i64, form: ZonaForm) -> Result<()> {
        let nombre = requerido("nombre", &form.nombre)?;
        let clave = requerido("clave", &form.clave)?.to_uppercase();
        let descripcion = opcional(form.descripcion);

        let res = sqlx::query(
            r#"
            UPDATE zonas
            SET nombre = ?1, clave = ?2, descripcion = ?3, fechaactualizacion = ?4
            WHERE id = ?5
            "#,
        )
        .bind(&nombre)
        .bind(&clave)
        .bind(&descripcion)
        .bind(ahora())
        .bind(id)
        .execute(&self.db_pool)
        .await
        .map_err(|e| mapear_sqlx(e, "zona"))?;

        if res.rows_affected() == 0 {
            return Err(CosteoError::no_encontrado(format!(
                "No se encontró zona con id {id}"
            )));
        }
        Ok(())
    }

    pub async fn cambiar_estatus(&self, id: i64, activo: bool) -> Result<()> {
        crud_service::cambiar_estatus::<Zona>(&self.db_pool, id, activo).await
    }

    pub async fn eliminar(&self, id: i64) -> Result<()> {
        crud_service::eliminar::<Zona>(&self.db_pool, id).await
    }

    pub async fn dropdown(&self) -> Result<Vec<OpcionDropdown>> {
        crud_service::dropdown::<Zona>(&self.db_pool, &Filtro::nuevo()).await
    }

    /// Zonas activas asignadas a un cliente, para el select de catálogos
    pub async fn dropdown_por_cliente(&self, clienteid: i64) -> Result<Vec<OpcionDropdown>> {
        let opciones = sqlx::query_as::<_, OpcionDropdown>(
            r#"
            SELECT z.id, z.nombre
            FROM zonas z
            INNER JOIN clientesxzona cz ON cz.zonaid = z.id
            WHERE cz.clienteid = ?1 AND z.activo = 1
            ORDER BY z.nombre ASC, z.id ASC
            "#,
        )
        .bind(clienteid)
        .fetch_all(&self.db_pool)
        .await
        .context("Fallo al consultar zonas del cliente")?;
        Ok(opciones)
    }
}
