//! handlers/formula_handler.rs

use actix_web::web;

use crate::handlers::respuesta::{creado, mensaje, ok, Respuesta};
use crate::models::comun_model::{CambioEstatus, PaginacionQuery};
use crate::models::formula_model::{FormulaFiltros, FormulaForm};
use crate::models::permiso_model::PERMISO_FORMULAS;
use crate::models::sesion_model::SesionUsuario;
use crate::services::formula_service::FormulaService;

/// GET /api/formulas
pub async fn listar_formulas_endpoint(
    sesion: SesionUsuario,
    service: web::Data<FormulaService>,
    filtros: web::Query<FormulaFiltros>,
    paginacion: web::Query<PaginacionQuery>,
) -> Respuesta {
    sesion.requiere_permiso(PERMISO_FORMULAS)?;
    Ok(ok(service.listar(&filtros, &paginacion).await?))
}

/// GET /api/formulas/dropdown
pub async fn dropdown_formulas_endpoint(
    _sesion: SesionUsuario,
    service: web::Data<FormulaService>,
) -> Respuesta {
    Ok(ok(service.dropdown().await?))
}

/// GET /api/formulas/{id}
pub async fn obtener_formula_endpoint(
    sesion: SesionUsuario,
    service: web::Data<FormulaService>,
    path: web::Path<i64>,
) -> Respuesta {
    sesion.requiere_permiso(PERMISO_FORMULAS)?;
    Ok(ok(service.obtener(path.into_inner()).await?))
}

/// POST /api/formulas
pub async fn crear_formula_endpoint(
    sesion: SesionUsuario,
    service: web::Data<FormulaService>,
    req_body: web::Json<FormulaForm>,
) -> Respuesta {
    sesion.requiere_permiso(PERMISO_FORMULAS)?;
    let id = service.crear(req_body.into_inner()).await?;
    Ok(creado(id, "Fórmula creada"))
}

/// PUT /api/formulas/{id}
pub async fn actualizar_formula_endpoint(
    sesion: SesionUsuario,
    service: web::Data<FormulaService>,
    path: web::Path<i64>,
    req_body: web::Json<FormulaForm>,
) -> Respuesta {
    sesion.requiere_permiso(PERMISO_FORMULAS)?;
    service
        .actualizar(path.into_inner(), req_body.into_inner())
        .await?;
    Ok(mensaje("Fórmula actualizada"))
}

/// PATCH /api/formulas/{id}/estatus
pub async fn estatus_formula_endpoint(
    sesion: SesionUsuario,
    service: web::Data<FormulaService>,
    path: web::Path<i64>,
    req_body: web::Json<CambioEstatus>,
) -> Respuesta {
    sesion.requiere_permiso(PERMISO_FORMULAS)?;
    service
        .cambiar_estatus(path.into_inner(), req_body.activo)
        .await?;
    Ok(mensaje("Estatus actualizado"))
}

/// DELETE /api/formulas/{id}
pub async fn eliminar_formula_endpoint(
    sesion: SesionUsuario,
    service: web::Data<FormulaService>,
    path: web::Path<i64>,
) -> Respuesta {
    sesion.requiere_permiso(PERMISO_FORMULAS)?;
    service.eliminar(path.into_inner()).await?;
    Ok(mensaje("Fórmula eliminada"))
}
