//! services/usuario_service.rs
//! Usuarios del panel; el password se guarda encriptado con CryptoService.

use anyhow::Result;
use sqlx::{Pool, Sqlite};

use crate::errors::{mapear_sqlx, CosteoError};
use crate::models::cliente_model::Cliente;
use crate::models::comun_model::{Listado, OpcionDropdown, PaginacionQuery};
use crate::models::permiso_model::{Rol, ROL_ADMINISTRADOR};
use crate::models::usuario_model::{
    ActualizarUsuarioForm, NuevoUsuarioForm, Usuario, UsuarioFiltros,
};
use crate::services::crud_service::{self, Filtro, Tabla};
use crate::services::crypto_service::CryptoService;
use crate::services::validacion::{ahora, email, id_opcional, id_requerido, requerido};

pub const PASSWORD_MIN_LEN: usize = 6;

impl Tabla for Usuario {
    const TABLA: &'static str = "usuarios";
    const COLUMNAS: &'static str = "id, nombrecompleto, email, rolid, clienteid, imgurl, \
         activo, fechacreacion, fechaactualizacion";
    const COLUMNA_NOMBRE: &'static str = "nombrecompleto";
    const ORDENABLES: &'static [&'static str] = &["nombrecompleto", "email", "id", "rolid"];
    const CONTEXTO: &'static str = "usuario";
}

impl Tabla for Rol {
    const TABLA: &'static str = "roles";
    const COLUMNAS: &'static str = "id, nombre, descripcion, activo";
    const COLUMNA_NOMBRE: &'static str = "nombre";
    const ORDENABLES: &'static [&'static str] = &["nombre", "id"];
    const CONTEXTO: &'static str = "rol";
}

fn validar_password(password: &str) -> Result<()> {
    if password.chars().count() < PASSWORD_MIN_LEN {
        return Err(CosteoError::validacion(format!(
            "El password debe tener al menos {PASSWORD_MIN_LEN} caracteres"
        )));
    }
    Ok(())
}

#[derive(Clone, Debug)]
pub struct UsuarioService {
    db_pool: Pool<Sqlite>,
    crypto: CryptoService,
}

impl UsuarioService {
    pub fn new(db_pool: Pool<Sqlite>, crypto: CryptoService) -> Self {
        UsuarioService { db_pool, crypto }
    }

    /// Un usuario no administrador debe pertenecer a un cliente existente
    async fn validar_rol_cliente(&self, rolid: i64, clienteid: Option<i64>) -> Result<()> {
        crud_service::verificar_existe::<Rol>(&self.db_pool, rolid).await?;
        match clienteid {
            Some(id) => crud_service::verificar_existe::<Cliente>(&self.db_pool, id).await,
            None if rolid != ROL_ADMINISTRADOR => Err(CosteoError::validacion(
                "Los usuarios que no son administradores requieren un cliente",
            )),
            None => Ok(()),
        }
    }

    pub async fn listar(
        &self,
        filtros: &UsuarioFiltros,
        query: &PaginacionQuery,
    ) -> Result<Listado<Usuario>> {
        let (orden, paginacion) = crud_service::orden_y_pagina::<Usuario>(query)?;
        let filtro = Filtro::nuevo()
            .ilike("nombrecompleto", filtros.nombrecompleto.as_deref())
            .ilike("email", filtros.email.as_deref())
            .eq_entero("rolid", filtros.rolid)
            .eq_entero("clienteid", filtros.clienteid)
            .eq_bool("activo", filtros.activo);
        crud_service::listar(&self.db_pool, &filtro, &orden, &paginacion).await
    }

    pub async fn obtener(&self, id: i64) -> Result<Usuario> {
        crud_service::obtener(&self.db_pool, id).await
    }

    pub async fn crear(&self, form: NuevoUsuarioForm) -> Result<i64> {
        let nombrecompleto = requerido("nombrecompleto", &form.nombrecompleto)?;
        let email = email(&form.email)?;
        validar_password(&form.password)?;
        let rolid = id_requerido("rolid", form.rolid)?;
        let clienteid = id_opcional(form.clienteid);
        self.validar_rol_cliente(rolid, clienteid).await?;

        let password = self.crypto.encriptar(&form.password)?;
        let now = ahora();

        let id = sqlx::query(
            r#"
            INSERT INTO usuarios (
                nombrecompleto, email, password, rolid, clienteid,
                activo, fechacreacion, fechaactualizacion
            )
            VALUES (?1, ?2, ?3, ?4, ?5, 1, ?6, ?6)
            "#,
        )
        .bind(&nombrecompleto)
        .bind(&email)
        .bind(&password)
        .bind(rolid)
        .bind(clienteid)
        .bind(&now)
        .execute(&self.db_pool)
        .await
        .map_err(|e| mapear_sqlx(e, "usuario"))?
        .last_insert_rowid();

        log::info!("Usuario {} creado ({})", id, email);
        Ok(id)
    }

    pub async fn actualizar(&self, id: i64, form: ActualizarUsuarioForm) -> Result<()> {
        let nombrecompleto = requerido("nombrecompleto", &form.nombrecompleto)?;
        let email = email(&form.email)?;
        let rolid = id_requerido("rolid", form.rolid)?;
        let clienteid = id_opcional(form.clienteid);
        self.validar_rol_cliente(rolid, clienteid).await?;

        let password = match form.password.as_deref().filter(|p| !p.is_empty()) {
            Some(p) => {
                validar_password(p)?;
                Some(self.crypto.encriptar(p)?)
            }
            None => None,
        };

        let res = sqlx::query(
            r#"
            UPDATE usuarios
            SET nombrecompleto = ?1,
                email = ?2,
                rolid = ?3,
                clienteid = ?4,
                password = COALESCE(?5, password),
                fechaactualizacion = ?6
            WHERE id = ?7
            "#,
        )
        .bind(&nombrecompleto)
        .bind(&email)
        .bind(rolid)
        .bind(clienteid)
        .bind(&password)
        .bind(ahora())
        .bind(id)
        .execute(&self.db_pool)
        .await
        .map_err(|e| mapear_sqlx(e, "usuario"))?;

        if res.rows_affected() == 0 {
            return Err(CosteoError::no_encontrado(format!(
                "No se encontró usuario con id {id}"
            )));
        }
        Ok(())
    }

    pub async fn cambiar_estatus(&self, id: i64, activo: bool) -> Result<()> {
        crud_service::cambiar_estatus::<Usuario>(&self.db_pool, id, activo).await
    }

    pub async fn eliminar(&self, id: i64) -> Result<()> {
        crud_service::eliminar::<Usuario>(&self.db_pool, id).await
    }

    pub async fn dropdown_roles(&self) -> Result<Vec<OpcionDropdown>> {
        crud_service::dropdown::<Rol>(&self.db_pool, &Filtro::nuevo()).await
    }

    pub async fn actualizar_imagen(&self, id: i64, imgurl: &str) -> Result<Option<String>> {
        crud_service::actualizar_imgurl::<Usuario>(&self.db_pool, id, imgurl).await
    }
}
