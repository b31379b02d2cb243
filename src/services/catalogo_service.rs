//! services/catalogo_service.rs
//! Catálogos y sus productos (productosxcatalogo).

use anyhow::{Context, Result};
use sqlx::{Pool, Sqlite};

use crate::errors::{mapear_sqlx, CosteoError};
use crate::models::catalogo_model::{
    Catalogo, CatalogoFiltros, CatalogoForm, PrecioCatalogoForm, ProductoCatalogoForm,
    ProductoEnCatalogo,
};
use crate::models::cliente_model::Cliente;
use crate::models::comun_model::{Listado, OpcionDropdown, PaginacionQuery};
use crate::models::producto_model::Producto;
use crate::models::zona_model::Zona;
use crate::services::crud_service::{self, Filtro, Tabla};
use crate::services::validacion::{
    ahora, id_opcional, id_requerido, numero_opcional, opcional, requerido,
};

impl Tabla for Catalogo {
    const TABLA: &'static str = "catalogos";
    const COLUMNAS: &'static str = "id, nombre, descripcion, clienteid, zonaid, imgurl, \
         activo, fechacreacion, fechaactualizacion";
    const COLUMNA_NOMBRE: &'static str = "nombre";
    const ORDENABLES: &'static [&'static str] = &["nombre", "id", "clienteid", "fechacreacion"];
    const CONTEXTO: &'static str = "catálogo";
}

struct CatalogoCampos {
    nombre: String,
    descripcion: Option<String>,
    clienteid: i64,
    zonaid: Option<i64>,
}

#[derive(Clone, Debug)]
pub struct CatalogoService {
    db_pool: Pool<Sqlite>,
}

impl CatalogoService {
    pub fn new(db_pool: Pool<Sqlite>) -> Self {
        CatalogoService { db_pool }
    }

    async fn campos(&self, form: CatalogoForm) -> Result<CatalogoCampos> {
        let campos = CatalogoCampos {
            nombre: requerido("nombre", &form.nombre)?,
            descripcion: opcional(form.descripcion),
            clienteid: id_requerido("clienteid", form.clienteid)?,
            zonaid: id_opcional(form.zonaid),
        };
        crud_service::verificar_existe::<Cliente>(&self.db_pool, campos.clienteid).await?;
        if let Some(zonaid) = campos.zonaid {
            crud_service::verificar_existe::<Zona>(&self.db_pool, zonaid).await?;
        }
        Ok(campos)
    }

    pub async fn listar(
        &self,
        filtros: &CatalogoFiltros,
        query: &PaginacionQuery,
    ) -> Result<Listado<Catalogo>> {
        let (orden, paginacion) = crud_service::orden_y_pagina::<Catalogo>(query)?;
        let filtro = Filtro::nuevo()
            .ilike("nombre", filtros.nombre.as_deref())
            .eq_entero("clienteid", filtros.clienteid)
            .eq_entero("zonaid", filtros.zonaid)
            .eq_bool("activo", filtros.activo);
        crud_service::listar(&self.db_pool, &filtro, &orden, &paginacion).await
    }

    pub async fn obtener(&self, id: i64) -> Result<Catalogo> {
        crud_service::obtener(&self.db_pool, id).await
    }

    pub async fn crear(&self, form: CatalogoForm) -> Result<i64> {
        let c = self.campos(form).await?;
        let now = ahora();

        let id = sqlx::query(
            r#"
            INSERT INTO catalogos (
                nombre, descripcion, clienteid, zonaid,
                activo, fechacreacion, fechaactualizacion
            )
            VALUES (?1, ?2, ?3, ?4, 1, ?5, ?5)
            "#,
        )
        .bind(&c.nombre)
        .bind(&c.descripcion)
        .bind(c.clienteid)
        .bind(c.zonaid)
        .bind(&now)
        .execute(&self.db_pool)
        .await
        .map_err(|e| mapear_sqlx(e, "catálogo"))?
        .last_insert_rowid();

        log::info!("Catálogo {} creado para cliente {}", id, c.clienteid);
        Ok(id)
    }

    pub async fn actualizar(&self, id: i64, form: CatalogoForm) -> Result<()> {
        let c = self.campos(form).await?;

        let res = sqlx::query(
            r#"
            UPDATE catalogos
            SET nombre = ?1,
                descripcion = ?2,
                clienteid = ?3,
                zonaid = ?4,
                fechaactualizacion = ?5
            WHERE id = ?6
            "#,
        )
        .bind(&c.nombre)
        .bind(&c.descripcion)
        .bind(c.clienteid)
        .bind(c.zonaid)
        .bind(ahora())
        .bind(id)
        .execute(&self.db_pool)
        .await
        .map_err(|e| mapear_sqlx(e, "catálogo"))?;

        if res.rows_affected() == 0 {
            return Err(CosteoError::no_encontrado(format!(
                "No se encontró catálogo con id {id}"
            )));
        }
        Ok(())
    }

    pub async fn cambiar_estatus(&self, id: i64, activo: bool) -> Result<()> {
        crud_service::cambiar_estatus::<Catalogo>(&self.db_pool, id, activo).await
    }

    /// Borra primero sus productos asignados
    pub async fn eliminar(&self, id: i64) -> Result<()> {
        let mut tx = self.db_pool.begin().await?;
        sqlx::query("DELETE FROM productosxcatalogo WHERE catalogoid = ?1")
            .bind(id)
            .execute(&mut *tx)
            .await
            .context("Fallo al borrar productos del catálogo")?;
        let res = sqlx::query("DELETE FROM catalogos WHERE id = ?1")
            .bind(id)
            .execute(&mut *tx)
            .await
            .map_err(|e| mapear_sqlx(e, "catálogo"))?;
        if res.rows_affected() == 0 {
            return Err(CosteoError::no_encontrado(format!(
                "No se encontró catálogo con id {id}"
            )));
        }
        tx.commit().await?;
        log::info!("Catálogo {} eliminado", id);
        Ok(())
    }

    pub async fn dropdown(&self, clienteid: Option<i64>) -> Result<Vec<OpcionDropdown>> {
        let filtro = Filtro::nuevo().eq_entero("clienteid", clienteid);
        crud_service::dropdown::<Catalogo>(&self.db_pool, &filtro).await
    }

    pub async fn actualizar_imagen(&self, id: i64, imgurl: &str) -> Result<Option<String>> {
        crud_service::actualizar_imgurl::<Catalogo>(&self.db_pool, id, imgurl).await
    }

    // ---------------------------------------------------------------
    // Productos del catálogo
    // ---------------------------------------------------------------

    pub async fn productos(&self, catalogoid: i64) -> Result<Vec<ProductoEnCatalogo>> {
        crud_service::verificar_existe::<Catalogo>(&self.db_pool, catalogoid).await?;

        let productos = sqlx::query_as::<_, ProductoEnCatalogo>(
            r#"
            SELECT pc.id, pc.catalogoid, pc.productoid,
                   p.codigo, p.nombre, p.costo,
                   pc.precioventa, pc.margenutilidad,
                   p.imgurl, p.activo
            FROM productosxcatalogo pc
            INNER JOIN productos p ON p.id = pc.productoid
            WHERE pc.catalogoid = ?1
            ORDER BY p.nombre ASC, p.id ASC
            "#,
        )
        .bind(catalogoid)
        .fetch_all(&self.db_pool)
        .await
        .context("Fallo al listar productos del catálogo")?;
        Ok(productos)
    }

    /// Un producto con cliente sólo puede entrar en catálogos de ese cliente
    pub async fn agregar_producto(
        &self,
        catalogoid: i64,
        form: ProductoCatalogoForm,
    ) -> Result<i64> {
        let catalogo = self.obtener(catalogoid).await?;
        let producto: Producto =
            crud_service::obtener(&self.db_pool, id_requerido("productoid", form.productoid)?)
                .await?;

        if let Some(dueno) = producto.clienteid {
            if dueno != catalogo.clienteid {
                return Err(CosteoError::validacion(format!(
                    "El producto {} pertenece a otro cliente",
                    producto.codigo
                )));
            }
        }

        let precioventa = numero_opcional("precioventa", form.precioventa)?;
        let margenutilidad = numero_opcional("margenutilidad", form.margenutilidad)?;
        let now = ahora();

        let id = sqlx::query(
            r#"
            INSERT INTO productosxcatalogo (
                catalogoid, productoid, precioventa, margenutilidad,
                fechacreacion, fechaactualizacion
            )
            VALUES (?1, ?2, ?3, ?4, ?5, ?5)
            "#,
        )
        .bind(catalogoid)
        .bind(producto.id)
        .bind(precioventa)
        .bind(margenutilidad)
        .bind(&now)
        .execute(&self.db_pool)
        .await
        .map_err(|e| mapear_sqlx(e, "producto del catálogo"))?
        .last_insert_rowid();

        Ok(id)
    }

    pub async fn actualizar_precio(
        &self,
        catalogoid: i64,
        productoid: i64,
        form: PrecioCatalogoForm,
    ) -> Result<()> {
        let precioventa = numero_opcional("precioventa", form.precioventa)?;
        let margenutilidad = numero_opcional("margenutilidad", form.margenutilidad)?;

        let res = sqlx::query(
            r#"
            UPDATE productosxcatalogo
            SET precioventa = ?1, margenutilidad = ?2, fechaactualizacion = ?3
            WHERE catalogoid = ?4 AND productoid = ?5
            "#,
        )
        .bind(precioventa)
        .bind(margenutilidad)
        .bind(ahora())
        .bind(catalogoid)
        .bind(productoid)
        .execute(&self.db_pool)
        .await
        .context("Fallo al actualizar precio del catálogo")?;

        if res.rows_affected() == 0 {
            return Err(CosteoError::no_encontrado(format!(
                "El producto {productoid} no está en el catálogo {catalogoid}"
            )));
        }
        Ok(())
    }

    pub async fn quitar_producto(&self, catalogoid: i64, productoid: i64) -> Result<()> {
        let res = sqlx::query(
            "DELETE FROM productosxcatalogo WHERE catalogoid = ?1 AND productoid = ?2",
        )
        .bind(catalogoid)
        .bind(productoid)
        .execute(&self.db_pool)
        .await
        .context("Fallo al quitar producto del catálogo")?;

        if res.rows_affected() == 0 {
            return Err(CosteoError::no_encontrado(format!(
                "El producto {productoid} no está en el catálogo {catalogoid}"
            )));
        }
        Ok(())
    }
}
