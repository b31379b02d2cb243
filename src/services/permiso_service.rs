//! services/permiso_service.rs
//! Catálogo de permisos y su asignación a roles (permisosxrol).

use anyhow::{Context, Result};
use sqlx::{Pool, Sqlite};

use crate::errors::{mapear_sqlx, CosteoError};
use crate::models::permiso_model::{Permiso, Rol};
use crate::services::crud_service;

#[derive(Clone, Debug)]
pub struct PermisoService {
    db_pool: Pool<Sqlite>,
}

impl PermisoService {
    pub fn new(db_pool: Pool<Sqlite>) -> Self {
        PermisoService { db_pool }
    }

    pub async fn listar(&self) -> Result<Vec<Permiso>> {
        let permisos = sqlx::query_as::<_, Permiso>(
            "SELECT id, nombre, descripcion, modulo, activo FROM permisos ORDER BY id",
        )
        .fetch_all(&self.db_pool)
        .await
        .context("Fallo al listar permisos")?;
        Ok(permisos)
    }

    pub async fn por_rol(&self, rolid: i64) -> Result<Vec<Permiso>> {
        let permisos = sqlx::query_as::<_, Permiso>(
            r#"
            SELECT p.id, p.nombre, p.descripcion, p.modulo, p.activo
            FROM permisos p
            INNER JOIN permisosxrol pr ON pr.permisoid = p.id
            WHERE pr.rolid = ?1 AND p.activo = 1
            ORDER BY p.id
            "#,
        )
        .bind(rolid)
        .fetch_all(&self.db_pool)
        .await
        .context("Fallo al consultar permisos del rol")?;
        Ok(permisos)
    }

    /// Ids de permisos activos del rol, en orden ascendente
    pub async fn ids_por_rol(&self, rolid: i64) -> Result<Vec<i64>> {
        Ok(self.por_rol(rolid).await?.into_iter().map(|p| p.id).collect())
    }

    pub async fn asignar(&self, rolid: i64, permisoid: i64) -> Result<()> {
        crud_service::verificar_existe::<Rol>(&self.db_pool, rolid).await?;
        let existe: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM permisos WHERE id = ?1")
            .bind(permisoid)
            .fetch_one(&self.db_pool)
            .await?;
        if existe == 0 {
            return Err(CosteoError::no_encontrado(format!(
                "No se encontró permiso con id {permisoid}"
            )));
        }

        sqlx::query("INSERT INTO permisosxrol (rolid, permisoid) VALUES (?1, ?2)")
            .bind(rolid)
            .bind(permisoid)
            .execute(&self.db_pool)
            .await
            .map_err(|e| mapear_sqlx(e, "permiso del rol"))?;
        log::info!("Permiso {} asignado al rol {}", permisoid, rolid);
        Ok(())
    }

    pub async fn quitar(&self, rolid: i64, permisoid: i64) -> Result<()> {
        let res = sqlx::query("DELETE FROM permisosxrol WHERE rolid = ?1 AND permisoid = ?2")
            .bind(rolid)
            .bind(permisoid)
            .execute(&self.db_pool)
            .await
            .context("Fallo al quitar permiso del rol")?;
        if res.rows_affected() == 0 {
            return Err(CosteoError::no_encontrado(format!(
                "El rol {rolid} no tiene el permiso {permisoid}"
            )));
        }
        Ok(())
    }
}
