//! services/producto_service.rs
//! Productos, su asignación a clientes y los productos óptimos por cliente.

use anyhow::{Context, Result};
use sqlx::{Pool, QueryBuilder, Sqlite};

use crate::errors::{mapear_sqlx, CosteoError};
use crate::models::cliente_model::Cliente;
use crate::models::comun_model::{Listado, OpcionDropdown, PaginacionQuery};
use crate::models::formula_model::Formula;
use crate::models::producto_model::{
    OptimosFiltros, Producto, ProductoFiltros, ProductoForm, ProductoOptimo, ProductoOptimoForm,
};
use crate::models::zona_model::Zona;
use crate::services::crud_service::{self, Filtro, Tabla};
use crate::services::validacion::{
    ahora, id_opcional, id_requerido, numero, opcional, requerido,
};

impl Tabla for Producto {
    const TABLA: &'static str = "productos";
    const COLUMNAS: &'static str = "id, codigo, nombre, descripcion, presentacion, clienteid, \
         zonaid, formulaid, costo, imgurl, activo, fechacreacion, fechaactualizacion";
    const COLUMNA_NOMBRE: &'static str = "nombre";
    const ORDENABLES: &'static [&'static str] =
        &["nombre", "codigo", "costo", "id", "fechacreacion"];
    const CONTEXTO: &'static str = "producto";
}

struct ProductoCampos {
    codigo: String,
    nombre: String,
    descripcion: Option<String>,
    presentacion: Option<String>,
    clienteid: Option<i64>,
    zonaid: Option<i64>,
    formulaid: Option<i64>,
    costo: f64,
}

fn filtro_cliente(filtro: Filtro, clienteid: Option<i64>, incluir_globales: bool) -> Filtro {
    if incluir_globales {
        filtro.eq_entero_o_nulo("clienteid", clienteid)
    } else {
        filtro.eq_entero("clienteid", clienteid)
    }
}

#[derive(Clone, Debug)]
pub struct ProductoService {
    db_pool: Pool<Sqlite>,
}

impl ProductoService {
    pub fn new(db_pool: Pool<Sqlite>) -> Self {
        ProductoService { db_pool }
    }

    async fn campos(&self, form: ProductoForm) -> Result<ProductoCampos> {
        let campos = ProductoCampos {
            codigo: requerido("codigo", &form.codigo)?.to_uppercase(),
            nombre: requerido("nombre", &form.nombre)?,
            descripcion: opcional(form.descripcion),
            presentacion: opcional(form.presentacion),
            clienteid: id_opcional(form.clienteid),
            zonaid: id_opcional(form.zonaid),
            formulaid: id_opcional(form.formulaid),
            costo: numero("costo", form.costo)?,
        };
        if let Some(id) = campos.clienteid {
            crud_service::verificar_existe::<Cliente>(&self.db_pool, id).await?;
        }
        if let Some(id) = campos.zonaid {
            crud_service::verificar_existe::<Zona>(&self.db_pool, id).await?;
        }
        if let Some(id) = campos.formulaid {
            crud_service::verificar_existe::<Formula>(&self.db_pool, id).await?;
        }
        Ok(campos)
    }

    pub async fn listar(
        &self,
        filtros: &ProductoFiltros,
        query: &PaginacionQuery,
    ) -> Result<Listado<Producto>> {
        let (orden, paginacion) = crud_service::orden_y_pagina::<Producto>(query)?;
        let filtro = Filtro::nuevo()
            .ilike("nombre", filtros.nombre.as_deref())
            .ilike("codigo", filtros.codigo.as_deref());
        let filtro = filtro_cliente(filtro, filtros.clienteid, filtros.incluir_globales)
            .eq_entero("zonaid", filtros.zonaid)
            .eq_bool("activo", filtros.activo);
        crud_service::listar(&self.db_pool, &filtro, &orden, &paginacion).await
    }

    pub async fn obtener(&self, id: i64) -> Result<Producto> {
        crud_service::obtener(&self.db_pool, id).await
    }

    pub async fn crear(&self, form: ProductoForm) -> Result<i64> {
        let p = self.campos(form).await?;
        let now = ahora();

        let id = sqlx::query(
            r#"
            INSERT INTO productos (
                codigo, nombre, descripcion, presentacion,
                clienteid, zonaid, formulaid, costo,
                activo, fechacreacion, fechaactualizacion
            )
            VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, 1, ?9, ?9)
            "#,
        )
        .bind(&p.codigo)
        .bind(&p.nombre)
        .bind(&p.descripcion)
        .bind(&p.presentacion)
        .bind(p.clienteid)
        .bind(p.zonaid)
        .bind(p.formulaid)
        .bind(p.costo)
        .bind(&now)
        .execute(&self.db_pool)
        .await
        .map_err(|e| mapear_sqlx(e, "producto"))?
        .last_insert_rowid();

        log::info!("Producto {} creado ({})", id, p.codigo);
        Ok(id)
    }

    pub async fn actualizar(&self, id: i64, form: ProductoForm) -> Result<()> {
        let p = self.campos(form).await?;

        let res = sqlx::query(
            r#"
            UPDATE productos
            SET codigo = ?1,
                nombre = ?2,
                descripcion = ?3,
                presentacion = ?4,
                clienteid = ?5,
                zonaid = ?6,
                formulaid = ?7,
                costo = ?8,
                fechaactualizacion = ?9
            WHERE id = ?10
            "#,
        )
        .bind(&p.codigo)
        .bind(&p.nombre)
        .bind(&p.descripcion)
        .bind(&p.presentacion)
        .bind(p.clienteid)
        .bind(p.zonaid)
        .bind(p.formulaid)
        .bind(p.costo)
        .bind(ahora())
        .bind(id)
        .execute(&self.db_pool)
        .await
        .map_err(|e| mapear_sqlx(e, "producto"))?;

        if res.rows_affected() == 0 {
            return Err(CosteoError::no_encontrado(format!(
                "No se encontró producto con id {id}"
            )));
        }
        Ok(())
    }

    pub async fn cambiar_estatus(&self, id: i64, activo: bool) -> Result<()> {
        crud_service::cambiar_estatus::<Producto>(&self.db_pool, id, activo).await
    }

    pub async fn eliminar(&self, id: i64) -> Result<()> {
        crud_service::eliminar::<Producto>(&self.db_pool, id).await
    }

    pub async fn dropdown(
        &self,
        clienteid: Option<i64>,
        incluir_globales: bool,
    ) -> Result<Vec<OpcionDropdown>> {
        let filtro = filtro_cliente(Filtro::nuevo(), clienteid, incluir_globales);
        crud_service::dropdown::<Producto>(&self.db_pool, &filtro).await
    }

    pub async fn actualizar_imagen(&self, id: i64, imgurl: &str) -> Result<Option<String>> {
        crud_service::actualizar_imgurl::<Producto>(&self.db_pool, id, imgurl).await
    }

    // ---------------------------------------------------------------
    // productosxcliente
    // ---------------------------------------------------------------

    pub async fn asignar_cliente(&self, productoid: i64, clienteid: i64) -> Result<()> {
        crud_service::verificar_existe::<Producto>(&self.db_pool, productoid).await?;
        crud_service::verificar_existe::<Cliente>(&self.db_pool, clienteid).await?;

        sqlx::query(
            r#"
            INSERT INTO productosxcliente (clienteid, productoid, fechacreacion)
            VALUES (?1, ?2, ?3)
            "#,
        )
        .bind(clienteid)
        .bind(productoid)
        .bind(ahora())
        .execute(&self.db_pool)
        .await
        .map_err(|e| mapear_sqlx(e, "producto del cliente"))?;
        Ok(())
    }

    pub async fn quitar_cliente(&self, productoid: i64, clienteid: i64) -> Result<()> {
        let res =
            sqlx::query("DELETE FROM productosxcliente WHERE productoid = ?1 AND clienteid = ?2")
                .bind(productoid)
                .bind(clienteid)
                .execute(&self.db_pool)
                .await
                .context("Fallo al quitar cliente del producto")?;
        if res.rows_affected() == 0 {
            return Err(CosteoError::no_encontrado(format!(
                "El producto {productoid} no está asignado al cliente {clienteid}"
            )));
        }
        Ok(())
    }

    pub async fn clientes(&self, productoid: i64) -> Result<Vec<OpcionDropdown>> {
        let clientes = sqlx::query_as::<_, OpcionDropdown>(
            r#"
            SELECT c.id, c.nombre
            FROM clientes c
            INNER JOIN productosxcliente pc ON pc.clienteid = c.id
            WHERE pc.productoid = ?1
            ORDER BY c.nombre ASC, c.id ASC
            "#,
        )
        .bind(productoid)
        .fetch_all(&self.db_pool)
        .await
        .context("Fallo al listar clientes del producto")?;
        Ok(clientes)
    }

    // ---------------------------------------------------------------
    // productosxclienteoptimos
    // ---------------------------------------------------------------

    pub async fn optimos(&self, filtros: &OptimosFiltros) -> Result<Vec<ProductoOptimo>> {
        let mut qb = QueryBuilder::<Sqlite>::new(
            r#"
            SELECT o.id, o.clienteid, o.productoid, o.zonaid,
                   p.codigo, p.nombre, o.utilidadoptima, o.costoparticipacion,
                   o.fechacreacion
            FROM productosxclienteoptimos o
            INNER JOIN productos p ON p.id = o.productoid
            WHERE 1 = 1
            "#,
        );
        Filtro::nuevo()
            .eq_entero("o.clienteid", filtros.clienteid)
            .eq_entero("o.zonaid", filtros.zonaid)
            .aplicar(&mut qb);
        qb.push(" ORDER BY o.utilidadoptima DESC, o.id ASC");

        let optimos = qb
            .build_query_as::<ProductoOptimo>()
            .fetch_all(&self.db_pool)
            .await
            .context("Fallo al consultar productos óptimos")?;
        Ok(optimos)
    }

    /// Registra (o reemplaza) el óptimo de un producto para cliente/zona
    pub async fn registrar_optimo(&self, form: ProductoOptimoForm) -> Result<i64> {
        let clienteid = id_requerido("clienteid", form.clienteid)?;
        let productoid = id_requerido("productoid", form.productoid)?;
        let zonaid = id_opcional(form.zonaid);
        let utilidad = form.utilidadoptima;
        if !utilidad.is_finite() {
            return Err(CosteoError::validacion(
                "El campo 'utilidadoptima' debe ser numérico",
            ));
        }
        let participacion = numero("costoparticipacion", form.costoparticipacion)?;

        crud_service::verificar_existe::<Cliente>(&self.db_pool, clienteid).await?;
        let producto: Producto = crud_service::obtener(&self.db_pool, productoid).await?;
        if let Some(dueno) = producto.clienteid {
            if dueno != clienteid {
                return Err(CosteoError::validacion(format!(
                    "El producto {productoid} pertenece a otro cliente"
                )));
            }
        }
        if let Some(z) = zonaid {
            crud_service::verificar_existe::<Zona>(&self.db_pool, z).await?;
        }

        let mut tx = self.db_pool.begin().await?;
        sqlx::query(
            r#"
            DELETE FROM productosxclienteoptimos
            WHERE clienteid = ?1 AND productoid = ?2 AND zonaid IS ?3
            "#,
        )
        .bind(clienteid)
        .bind(productoid)
        .bind(zonaid)
        .execute(&mut *tx)
        .await
        .context("Fallo al reemplazar óptimo anterior")?;

        let id = sqlx::query(
            r#"
            INSERT INTO productosxclienteoptimos (
                clienteid, productoid, zonaid, utilidadoptima, costoparticipacion, fechacreacion
            )
            VALUES (?1, ?2, ?3, ?4, ?5, ?6)
            "#,
        )
        .bind(clienteid)
        .bind(productoid)
        .bind(zonaid)
        .bind(utilidad)
        .bind(participacion)
        .bind(ahora())
        .execute(&mut *tx)
        .await
        .map_err(|e| mapear_sqlx(e, "producto óptimo"))?
        .last_insert_rowid();
        tx.commit().await?;

        Ok(id)
    }
}
