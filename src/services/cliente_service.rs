//! services/cliente_service.rs

use anyhow::{Context, Result};
use sqlx::{Pool, Sqlite};

use crate::errors::{mapear_sqlx, CosteoError};
use crate::models::cliente_model::{Cliente, ClienteFiltros, ClienteForm};
use crate::models::comun_model::{Listado, OpcionDropdown, PaginacionQuery};
use crate::models::zona_model::Zona;
use crate::services::crud_service::{self, Filtro, Tabla};
use crate::services::validacion::{ahora, opcional, requerido};

impl Tabla for Cliente {
    const TABLA: &'static str = "clientes";
    const COLUMNAS: &'static str = "id, nombre, clave, direccion, telefono, email, imgurl, \
         activo, fechacreacion, fechaactualizacion";
    const COLUMNA_NOMBRE: &'static str = "nombre";
    const ORDENABLES: &'static [&'static str] = &["nombre", "clave", "id", "fechacreacion"];
    const CONTEXTO: &'static str = "cliente";
}

/// Columnas ya validadas de un ClienteForm
struct ClienteCampos {
    nombre: String,
    clave: String,
    direccion: Option<String>,
    telefono: Option<String>,
    email: Option<String>,
}

impl ClienteCampos {
    fn desde_form(form: ClienteForm) -> Result<Self> {
        Ok(ClienteCampos {
            nombre: requerido("nombre", &form.nombre)?,
            clave: requerido("clave", &form.clave)?.to_uppercase(),
            direccion: opcional(form.direccion),
            telefono: opcional(form.telefono),
            email: opcional(form.email).map(|e| e.to_lowercase()),
        })
    }
}

#[derive(Clone, Debug)]
pub struct ClienteService {
    db_pool: Pool<Sqlite>,
}

impl ClienteService {
    pub fn new(db_pool: Pool<Sqlite>) -> Self {
        ClienteService { db_pool }
    }

    /// `alcance` es el cliente al que está limitada la sesión (None = todos)
    pub async fn listar(
        &self,
        filtros: &ClienteFiltros,
        query: &PaginacionQuery,
        alcance: Option<i64>,
    ) -> Result<Listado<Cliente>> {
        let (orden, paginacion) = crud_service::orden_y_pagina::<Cliente>(query)?;
        let filtro = Filtro::nuevo()
            .ilike("nombre", filtros.nombre.as_deref())
            .ilike("clave", filtros.clave.as_deref())
            .eq_bool("activo", filtros.activo)
            .eq_entero("id", alcance);
        crud_service::listar(&self.db_pool, &filtro, &orden, &paginacion).await
    }

    pub async fn obtener(&self, id: i64) -> Result<Cliente> {
        crud_service::obtener(&self.db_pool, id).await
    }

    pub async fn crear(&self, form: ClienteForm) -> Result<i64> {
        let c = ClienteCampos::desde_form(form)?;
        let now = ahora();

        let id = sqlx::query(
            r#"
            INSERT INTO clientes (
                nombre, clave, direccion, telefono, email,
                activo, fechacreacion, fechaactualizacion
            )
            VALUES (?1, ?2, ?3, ?4, ?5, 1, ?6, ?6)
            "#,
        )
        .bind(&c.nombre)
        .bind(&c.clave)
        .bind(&c.direccion)
        .bind(&c.telefono)
        .bind(&c.email)
        .bind(&now)
        .execute(&self.db_pool)
        .await
        .map_err(|e| mapear_sqlx(e, "cliente"))?
        .last_insert_rowid();

        log::info!("Cliente {} creado (clave={})", id, c.clave);
        Ok(id)
    }

    pub async fn actualizar(&self, id: i64, form: ClienteForm) -> Result<()> {
        let c = ClienteCampos::desde_form(form)?;

        let res = sqlx::query(
            r#"
            UPDATE clientes
            SET nombre = ?1,
                clave = ?2,
                direccion = ?3,
                telefono = ?4,
                email = ?5,
                fechaactualizacion = ?6
            WHERE id = ?7
            "#,
        )
        .bind(&c.nombre)
        .bind(&c.clave)
        .bind(&c.direccion)
        .bind(&c.telefono)
        .bind(&c.email)
        .bind(ahora())
        .bind(id)
        .execute(&self.db_pool)
        .await
        .map_err(|e| mapear_sqlx(e, "cliente"))?;

        if res.rows_affected() == 0 {
            return Err(CosteoError::no_encontrado(format!(
                "No se encontró cliente con id {id}"
            )));
        }
        Ok(())
    }

    pub async fn cambiar_estatus(&self, id: i64, activo: bool) -> Result<()> {
        crud_service::cambiar_estatus::<Cliente>(&self.db_pool, id, activo).await
    }

    pub async fn eliminar(&self, id: i64) -> Result<()> {
        crud_service::eliminar::<Cliente>(&self.db_pool, id).await
    }

    pub async fn dropdown(&self, alcance: Option<i64>) -> Result<Vec<OpcionDropdown>> {
        let filtro = Filtro::nuevo().eq_entero("id", alcance);
        crud_service::dropdown::<Cliente>(&self.db_pool, &filtro).await
    }

    pub async fn actualizar_imagen(&self, id: i64, imgurl: &str) -> Result<Option<String>> {
        crud_service::actualizar_imgurl::<Cliente>(&self.db_pool, id, imgurl).await
    }

    // ---------------------------------------------------------------
    // Zonas del cliente (clientesxzona)
    // ---------------------------------------------------------------

    pub async fn asignar_zona(&self, clienteid: i64, zonaid: i64) -> Result<()> {
        crud_service::verificar_existe::<Cliente>(&self.db_pool, clienteid).await?;
        crud_service::verificar_existe::<Zona>(&self.db_pool, zonaid).await?;

        sqlx::query(
            r#"
            INSERT INTO clientesxzona (clienteid, zonaid, fechacreacion)
            VALUES (?1, ?2, ?3)
            "#,
        )
        .bind(clienteid)
        .bind(zonaid)
        .bind(ahora())
        .execute(&self.db_pool)
        .await
        .map_err(|e| mapear_sqlx(e, "zona del cliente"))?;
        Ok(())
    }

    pub async fn quitar_zona(&self, clienteid: i64, zonaid: i64) -> Result<()> {
        let res = sqlx::query("DELETE FROM clientesxzona WHERE clienteid = ?1 AND zonaid = ?2")
            .bind(clienteid)
            .bind(zonaid)
            .execute(&self.db_pool)
            .await
            .context("Fallo al quitar zona del cliente")?;
        if res.rows_affected() == 0 {
            return Err(CosteoError::no_encontrado(format!(
                "La zona {zonaid} no está asignada al cliente {clienteid}"
            )));
        }
        Ok(())
    }

    pub async fn zonas(&self, clienteid: i64) -> Result<Vec<Zona>> {
        let zonas = sqlx::query_as::<_, Zona>(
            r#"
            SELECT z.id, z.nombre, z.clave, z.descripcion, z.activo,
                   z.fechacreacion, z.fechaactualizacion
            FROM zonas z
            INNER JOIN clientesxzona cz ON cz.zonaid = z.id
            WHERE cz.clienteid = ?1
            ORDER BY z.nombre
            "#,
        )
        .bind(clienteid)
        .fetch_all(&self.db_pool)
        .await
        .context("Fallo al listar zonas del cliente")?;
        Ok(zonas)
    }
}
