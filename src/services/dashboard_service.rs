//! services/dashboard_service.rs
//! Conteos del tablero; corren en paralelo contra el pool.

use anyhow::Result;
use sqlx::{Pool, Sqlite};

use crate::models::catalogo_model::Catalogo;
use crate::models::cliente_model::Cliente;
use crate::models::dashboard_model::ResumenDashboard;
use crate::models::formula_model::Formula;
use crate::models::material_etiquetado_model::MaterialEtiquetado;
use crate::models::materia_prima_model::MateriaPrima;
use crate::models::producto_model::Producto;
use crate::models::usuario_model::Usuario;
use crate::models::zona_model::Zona;
use crate::services::crud_service::{contar, Filtro};

#[derive(Clone, Debug)]
pub struct DashboardService {
    db_pool: Pool<Sqlite>,
}

impl DashboardService {
    pub fn new(db_pool: Pool<Sqlite>) -> Self {
        DashboardService { db_pool }
    }

    /// Registros activos; `alcance` limita a un cliente lo que tiene clienteid
    pub async fn resumen(&self, alcance: Option<i64>) -> Result<ResumenDashboard> {
        let activos = Filtro::nuevo().eq_bool("activo", Some(true));
        let del_cliente = activos.clone().eq_entero("clienteid", alcance);
        let filtro_clientes = activos.clone().eq_entero("id", alcance);
        // Los productos globales cuentan para todos los clientes
        let productos_visibles = activos.clone().eq_entero_o_nulo("clienteid", alcance);
        let pool = &self.db_pool;

        let (clientes, catalogos, productos, formulas, materiasprimas, materiales, zonas, usuarios) =
            futures::try_join!(
                contar::<Cliente>(pool, &filtro_clientes),
                contar::<Catalogo>(pool, &del_cliente),
                contar::<Producto>(pool, &productos_visibles),
                contar::<Formula>(pool, &activos),
                contar::<MateriaPrima>(pool, &activos),
                contar::<MaterialEtiquetado>(pool, &activos),
                contar::<Zona>(pool, &activos),
                contar::<Usuario>(pool, &del_cliente),
            )?;

        Ok(ResumenDashboard {
            clientes,
            catalogos,
            productos,
            formulas,
            materiasprimas,
            materialesetiquetado: materiales,
            zonas,
            usuarios,
        })
    }
}
