//! services/crud_service.rs
//! Operaciones genéricas sobre tablas: listado filtrado y paginado,
//! obtener por id, cambio de estatus, eliminación, dropdowns y conteos.
//!
//! Cada entidad implementa `Tabla` con sus constantes; los filtros se
//! construyen con `Filtro` y se traducen a `QueryBuilder` con binds,
//! nunca concatenando valores del cliente en el SQL.

use anyhow::Result;
use sqlx::{sqlite::SqliteRow, FromRow, Pool, QueryBuilder, Sqlite};

use crate::errors::{mapear_sqlx, CosteoError};
use crate::models::comun_model::{Listado, OpcionDropdown, PaginacionQuery};
use crate::services::validacion::ahora;

pub const POR_PAGINA_DEFAULT: i64 = 20;
pub const POR_PAGINA_MAX: i64 = 500;

pub trait Tabla: for<'r> FromRow<'r, SqliteRow> + Send + Unpin {
    const TABLA: &'static str;
    /// Columnas del SELECT (nunca incluye datos sensibles)
    const COLUMNAS: &'static str;
    /// Expresión usada como `nombre` en los dropdowns
    const COLUMNA_NOMBRE: &'static str;
    /// Columnas por las que el cliente puede ordenar; la primera es el default
    const ORDENABLES: &'static [&'static str];
    /// Nombre legible para mensajes de error
    const CONTEXTO: &'static str;
}

#[derive(Debug, Clone, PartialEq)]
pub enum Valor {
    Texto(String),
    Entero(i64),
    Booleano(bool),
}

#[derive(Debug, Clone, PartialEq)]
pub enum Clausula {
    /// `columna LIKE %texto%`. SQLite sólo ignora mayúsculas en ASCII:
    /// `é` no coincide con `É`, los acentos se buscan tal como se escriben.
    Ilike(&'static str, String),
    Eq(&'static str, Valor),
    /// `(columna = v OR columna IS NULL)`: registros propios más los globales
    EqONulo(&'static str, i64),
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Filtro {
    clausulas: Vec<Clausula>,
}

impl Filtro {
    pub fn nuevo() -> Self {
        Self::default()
    }

    pub fn ilike(mut self, columna: &'static str, texto: Option<&str>) -> Self {
        if let Some(t) = texto.map(str::trim).filter(|t| !t.is_empty()) {
            self.clausulas.push(Clausula::Ilike(columna, t.to_string()));
        }
        self
    }

    pub fn eq_entero(mut self, columna: &'static str, valor: Option<i64>) -> Self {
        if let Some(v) = valor {
            self.clausulas.push(Clausula::Eq(columna, Valor::Entero(v)));
        }
        self
    }

    pub fn eq_bool(mut self, columna: &'static str, valor: Option<bool>) -> Self {
        if let Some(v) = valor {
            self.clausulas.push(Clausula::Eq(columna, Valor::Booleano(v)));
        }
        self
    }

    pub fn eq_entero_o_nulo(mut self, columna: &'static str, valor: Option<i64>) -> Self {
        if let Some(v) = valor {
            self.clausulas.push(Clausula::EqONulo(columna, v));
        }
        self
    }

    pub fn eq_texto(mut self, columna: &'static str, valor: Option<&str>) -> Self {
        if let Some(v) = valor.map(str::trim).filter(|v| !v.is_empty()) {
            self.clausulas
                .push(Clausula::Eq(columna, Valor::Texto(v.to_string())));
        }
        self
    }

    pub fn clausulas(&self) -> &[Clausula] {
        &self.clausulas
    }

    /// Agrega `AND ...` por cada cláusula. El SQL previo debe terminar en
    /// un WHERE válido (se usa `WHERE 1 = 1`).
    pub fn aplicar(&self, qb: &mut QueryBuilder<'_, Sqlite>) {
        for clausula in &self.clausulas {
            match clausula {
                Clausula::Ilike(col, texto) => {
                    qb.push(format!(" AND {col} LIKE "));
                    qb.push_bind(patron_like(texto));
                    qb.push(" ESCAPE '\\'");
                }
                Clausula::Eq(col, valor) => {
                    qb.push(format!(" AND {col} = "));
                    match valor {
                        Valor::Texto(t) => qb.push_bind(t.clone()),
                        Valor::Entero(i) => qb.push_bind(*i),
                        Valor::Booleano(b) => qb.push_bind(*b),
                    };
                }
                Clausula::EqONulo(col, valor) => {
                    qb.push(format!(" AND ({col} = "));
                    qb.push_bind(*valor);
                    qb.push(format!(" OR {col} IS NULL)"));
                }
            }
        }
    }
}

/// `%texto%` escapando los comodines del propio texto
pub fn patron_like(texto: &str) -> String {
    let mut patron = String::with_capacity(texto.len() + 2);
    patron.push('%');
    for c in texto.chars() {
        if matches!(c, '%' | '_' | '\\') {
            patron.push('\\');
        }
        patron.push(c);
    }
    patron.push('%');
    patron
}

#[derive(Debug, Clone, PartialEq)]
pub struct Orden {
    pub columna: &'static str,
    pub descendente: bool,
}

impl Orden {
    /// Valida la columna contra la lista permitida de la tabla
    pub fn para<T: Tabla>(columna: Option<&str>, dir: Option<&str>) -> Result<Self> {
        let columna = match columna.map(str::trim).filter(|c| !c.is_empty()) {
            None => T::ORDENABLES[0],
            Some(c) => T::ORDENABLES
                .iter()
                .copied()
                .find(|permitida| permitida.eq_ignore_ascii_case(c))
                .ok_or_else(|| {
                    CosteoError::validacion(format!(
                        "No se puede ordenar {} por '{c}'",
                        T::CONTEXTO
                    ))
                })?,
        };
        let descendente = match dir.map(|d| d.trim().to_ascii_lowercase()) {
            None => false,
            Some(d) if d.is_empty() || d == "asc" => false,
            Some(d) if d == "desc" => true,
            Some(d) => {
                return Err(CosteoError::validacion(format!(
                    "Dirección de orden inválida: '{d}'"
                )))
            }
        };
        Ok(Orden {
            columna,
            descendente,
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Paginacion {
    pub pagina: i64,
    pub por_pagina: i64,
}

impl Paginacion {
    /// Páginas tan grandes que el OFFSET no cabe en i64 son un error de entrada
    pub fn new(pagina: Option<i64>, por_pagina: Option<i64>) -> Result<Self> {
        let paginacion = Paginacion {
            pagina: pagina.unwrap_or(1).max(1),
            por_pagina: por_pagina
                .unwrap_or(POR_PAGINA_DEFAULT)
                .clamp(1, POR_PAGINA_MAX),
        };
        if paginacion.calcular_offset().is_none() {
            return Err(CosteoError::validacion(format!(
                "Página fuera de rango: {}",
                paginacion.pagina
            )));
        }
        Ok(paginacion)
    }

    fn calcular_offset(&self) -> Option<i64> {
        (self.pagina - 1).checked_mul(self.por_pagina)
    }

    pub fn offset(&self) -> i64 {
        self.calcular_offset().unwrap_or(i64::MAX)
    }
}

/// Convierte el query string común en (orden, paginación) para la tabla T
pub fn orden_y_pagina<T: Tabla>(query: &PaginacionQuery) -> Result<(Orden, Paginacion)> {
    let orden = Orden::para::<T>(query.orden.as_deref(), query.dir.as_deref())?;
    Ok((orden, Paginacion::new(query.pagina, query.por_pagina)?))
}

pub async fn listar<T: Tabla>(
    db_pool: &Pool<Sqlite>,
    filtro: &Filtro,
    orden: &Orden,
    paginacion: &Paginacion,
) -> Result<Listado<T>> {
    let total = contar::<T>(db_pool, filtro).await?;

    let mut qb = QueryBuilder::<Sqlite>::new(format!(
        "SELECT {} FROM {} WHERE 1 = 1",
        T::COLUMNAS,
        T::TABLA
    ));
    filtro.aplicar(&mut qb);
    qb.push(format!(
        " ORDER BY {} {}, id ASC LIMIT ",
        orden.columna,
        if orden.descendente { "DESC" } else { "ASC" }
    ));
    qb.push_bind(paginacion.por_pagina);
    qb.push(" OFFSET ");
    qb.push_bind(paginacion.offset());

    let items = qb
        .build_query_as::<T>()
        .fetch_all(db_pool)
        .await
        .map_err(|e| mapear_sqlx(e, T::CONTEXTO))?;

    Ok(Listado {
        total,
        pagina: paginacion.pagina,
        por_pagina: paginacion.por_pagina,
        items,
    })
}

pub async fn contar<T: Tabla>(db_pool: &Pool<Sqlite>, filtro: &Filtro) -> Result<i64> {
    let mut qb = QueryBuilder::<Sqlite>::new(format!(
        "SELECT COUNT(*) FROM {} WHERE 1 = 1",
        T::TABLA
    ));
    filtro.aplicar(&mut qb);
    let total: i64 = qb
        .build_query_scalar::<i64>()
        .fetch_one(db_pool)
        .await
        .map_err(|e| mapear_sqlx(e, T::CONTEXTO))?;
    Ok(total)
}

pub async fn obtener<T: Tabla>(db_pool: &Pool<Sqlite>, id: i64) -> Result<T> {
    let sql = format!("SELECT {} FROM {} WHERE id = ?1", T::COLUMNAS, T::TABLA);
    sqlx::query_as::<_, T>(&sql)
        .bind(id)
        .fetch_optional(db_pool)
        .await
        .map_err(|e| mapear_sqlx(e, T::CONTEXTO))?
        .ok_or_else(|| CosteoError::no_encontrado(format!("No se encontró {} con id {id}", T::CONTEXTO)))
}

/// Activa o inactiva un registro
pub async fn cambiar_estatus<T: Tabla>(db_pool: &Pool<Sqlite>, id: i64, activo: bool) -> Result<()> {
    let sql = format!(
        "UPDATE {} SET activo = ?1, fechaactualizacion = ?2 WHERE id = ?3",
        T::TABLA
    );
    let res = sqlx::query(&sql)
        .bind(activo)
        .bind(ahora())
        .bind(id)
        .execute(db_pool)
        .await
        .map_err(|e| mapear_sqlx(e, T::CONTEXTO))?;

    if res.rows_affected() == 0 {
        return Err(CosteoError::no_encontrado(format!(
            "No se encontró {} con id {id}",
            T::CONTEXTO
        )));
    }
    log::info!("{} {} -> activo={}", T::CONTEXTO, id, activo);
    Ok(())
}

pub async fn eliminar<T: Tabla>(db_pool: &Pool<Sqlite>, id: i64) -> Result<()> {
    let sql = format!("DELETE FROM {} WHERE id = ?1", T::TABLA);
    let res = sqlx::query(&sql)
        .bind(id)
        .execute(db_pool)
        .await
        .map_err(|e| mapear_sqlx(e, T::CONTEXTO))?;

    if res.rows_affected() == 0 {
        return Err(CosteoError::no_encontrado(format!(
            "No se encontró {} con id {id}",
            T::CONTEXTO
        )));
    }
    log::info!("{} {} eliminado", T::CONTEXTO, id);
    Ok(())
}

/// Registros activos como `{ id, nombre }`, ordenados por nombre
pub async fn dropdown<T: Tabla>(db_pool: &Pool<Sqlite>, filtro: &Filtro) -> Result<Vec<OpcionDropdown>> {
    let mut qb = QueryBuilder::<Sqlite>::new(format!(
        "SELECT id, {} AS nombre FROM {} WHERE activo = 1",
        T::COLUMNA_NOMBRE,
        T::TABLA
    ));
    filtro.aplicar(&mut qb);
    qb.push(" ORDER BY nombre ASC, id ASC");

    let opciones = qb
        .build_query_as::<OpcionDropdown>()
        .fetch_all(db_pool)
        .await
        .map_err(|e| mapear_sqlx(e, T::CONTEXTO))?;
    Ok(opciones)
}

/// Falla con NoEncontrado si no existe el id en la tabla T
pub async fn verificar_existe<T: Tabla>(db_pool: &Pool<Sqlite>, id: i64) -> Result<()> {
    let sql = format!("SELECT COUNT(*) FROM {} WHERE id = ?1", T::TABLA);
    let n: i64 = sqlx::query_scalar(&sql)
        .bind(id)
        .fetch_one(db_pool)
        .await
        .map_err(|e| mapear_sqlx(e, T::CONTEXTO))?;
    if n == 0 {
        return Err(CosteoError::no_encontrado(format!(
            "No se encontró {} con id {id}",
            T::CONTEXTO
        )));
    }
    Ok(())
}

/// Guarda la url pública de la imagen y regresa la anterior (si había)
/// para poder borrarla del storage.
pub async fn actualizar_imgurl<T: Tabla>(
    db_pool: &Pool<Sqlite>,
    id: i64,
    imgurl: &str,
) -> Result<Option<String>> {
    let sql = format!("SELECT imgurl FROM {} WHERE id = ?1", T::TABLA);
    let anterior: Option<Option<String>> = sqlx::query_scalar(&sql)
        .bind(id)
        .fetch_optional(db_pool)
        .await
        .map_err(|e| mapear_sqlx(e, T::CONTEXTO))?;

    let Some(anterior) = anterior else {
        return Err(CosteoError::no_encontrado(format!(
            "No se encontró {} con id {id}",
            T::CONTEXTO
        )));
    };

    let sql = format!(
        "UPDATE {} SET imgurl = ?1, fechaactualizacion = ?2 WHERE id = ?3",
        T::TABLA
    );
    sqlx::query(&sql)
        .bind(imgurl)
        .bind(ahora())
        .bind(id)
        .execute(db_pool)
        .await
        .map_err(|e| mapear_sqlx(e, T::CONTEXTO))?;

    Ok(anterior)
}
