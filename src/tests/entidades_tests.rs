//! tests/entidades_tests.rs
//! Reglas de cada módulo: normalización, relaciones, conflictos y tenencia.

use crate::models::catalogo_model::{CatalogoForm, PrecioCatalogoForm, ProductoCatalogoForm};
use crate::models::cliente_model::ClienteFiltros;
use crate::models::comun_model::PaginacionQuery;
use crate::models::configuracion_model::ConfiguracionForm;
use crate::models::formula_model::{FormulaFiltros, FormulaForm};
use crate::models::material_etiquetado_model::{
    MaterialEtiquetadoFiltros, MaterialEtiquetadoForm,
};
use crate::models::materia_prima_model::MateriaPrimaForm;
use crate::models::permiso_model::{
    PERMISO_CATALOGOS, PERMISO_DASHBOARD, PERMISO_PRODUCTOS, PERMISO_REPORTES, PERMISO_USUARIOS,
    ROL_ADMINISTRADOR, ROL_CLIENTE,
};
use crate::models::producto_model::{OptimosFiltros, ProductoForm, ProductoOptimoForm};
use crate::models::usuario_model::{ActualizarUsuarioForm, NuevoUsuarioForm};
use crate::models::zona_model::{ZonaFiltros, ZonaForm};
use crate::services::catalogo_service::CatalogoService;
use crate::services::cliente_service::ClienteService;
use crate::services::configuracion_service::ConfiguracionService;
use crate::services::dashboard_service::DashboardService;
use crate::services::formula_service::FormulaService;
use crate::services::material_etiquetado_service::MaterialEtiquetadoService;
use crate::services::materia_prima_service::MateriaPrimaService;
use crate::services::permiso_service::PermisoService;
use crate::services::producto_service::ProductoService;
use crate::services::usuario_service::UsuarioService;
use crate::services::zona_service::ZonaService;
use crate::tests::comun::{
    cliente_form, crear_cliente, crear_producto, crear_usuario, crypto_prueba, pool_prueba,
    producto_form, status_de,
};

fn zona_form(clave: &str) -> ZonaForm {
    ZonaForm {
        nombre: format!("Zona {clave}"),
        clave: clave.to_string(),
        descripcion: None,
    }
}

fn catalogo_form(clienteid: i64) -> CatalogoForm {
    CatalogoForm {
        nombre: "Catálogo primavera".to_string(),
        descripcion: Some("  ".to_string()),
        clienteid,
        zonaid: None,
    }
}

#[actix_rt::test]
async fn cliente_normaliza_y_detecta_duplicados() {
    let pool = pool_prueba().await;
    let service = ClienteService::new(pool);

    let mut form = cliente_form("  Acme  ", "acm");
    form.email = Some(" Ventas@ACME.com ".to_string());
    form.telefono = Some("   ".to_string());
    let id = service.crear(form).await.unwrap();

    let cliente = service.obtener(id).await.unwrap();
    assert_eq!(cliente.nombre, "Acme");
    assert_eq!(cliente.clave, "ACM");
    assert_eq!(cliente.email.as_deref(), Some("ventas@acme.com"));
    assert_eq!(cliente.telefono, None);
    assert!(cliente.activo);

    let err = service.crear(cliente_form("Otro", "ACM")).await.unwrap_err();
    assert_eq!(status_de(&err), Some(409));

    let err = service.crear(cliente_form("   ", "XYZ")).await.unwrap_err();
    assert_eq!(status_de(&err), Some(400));

    let err = service
        .actualizar(999, cliente_form("Nadie", "NAD"))
        .await
        .unwrap_err();
    assert_eq!(status_de(&err), Some(404));
}

#[actix_rt::test]
async fn cliente_alcance_limita_listado() {
    let pool = pool_prueba().await;
    let a = crear_cliente(&pool, "Alfa", "ALF").await;
    crear_cliente(&pool, "Beta", "BET").await;
    let service = ClienteService::new(pool);

    let listado = service
        .listar(&ClienteFiltros::default(), &PaginacionQuery::default(), Some(a))
        .await
        .unwrap();
    assert_eq!(listado.total, 1);
    assert_eq!(listado.items[0].id, a);

    let opciones = service.dropdown(Some(a)).await.unwrap();
    assert_eq!(opciones.len(), 1);
}

#[actix_rt::test]
async fn zonas_del_cliente() {
    let pool = pool_prueba().await;
    let clienteid = crear_cliente(&pool, "Alfa", "ALF").await;
    let zonas = ZonaService::new(pool.clone());
    let norte = zonas.crear(zona_form("nte")).await.unwrap();
    let sur = zonas.crear(zona_form("sur")).await.unwrap();
    let clientes = ClienteService::new(pool);

    clientes.asignar_zona(clienteid, norte).await.unwrap();
    let err = clientes.asignar_zona(clienteid, norte).await.unwrap_err();
    assert_eq!(status_de(&err), Some(409));
    let err = clientes.asignar_zona(clienteid, 999).await.unwrap_err();
    assert_eq!(status_de(&err), Some(404));

    let asignadas = clientes.zonas(clienteid).await.unwrap();
    assert_eq!(asignadas.len(), 1);
    assert_eq!(asignadas[0].clave, "NTE");

    let dropdown = zonas.dropdown_por_cliente(clienteid).await.unwrap();
    assert_eq!(dropdown.len(), 1);
    assert_eq!(dropdown[0].id, norte);
    assert_eq!(zonas.dropdown().await.unwrap().len(), 2);

    let err = clientes.quitar_zona(clienteid, sur).await.unwrap_err();
    assert_eq!(status_de(&err), Some(404));
    clientes.quitar_zona(clienteid, norte).await.unwrap();
    assert!(clientes.zonas(clienteid).await.unwrap().is_empty());
}

#[actix_rt::test]
async fn cliente_con_referencias_no_se_elimina() {
    let pool = pool_prueba().await;
    let clienteid = crear_cliente(&pool, "Alfa", "ALF").await;
    CatalogoService::new(pool.clone())
        .crear(catalogo_form(clienteid))
        .await
        .unwrap();

    let err = ClienteService::new(pool)
        .eliminar(clienteid)
        .await
        .unwrap_err();
    assert_eq!(status_de(&err), Some(409));
}

#[actix_rt::test]
async fn materia_prima_calcula_costo_con_factor() {
    let pool = pool_prueba().await;
    let service = MateriaPrimaService::new(pool);

    let id = service
        .crear(MateriaPrimaForm {
            codigo: "mp-01".to_string(),
            nombre: "Harina".to_string(),
            unidadmedida: Some("kg".to_string()),
            costo: 12.5,
            factorimportacion: Some(1.2),
        })
        .await
        .unwrap();
    let mp = service.obtener(id).await.unwrap();
    assert_eq!(mp.codigo, "MP-01");
    assert!((mp.costoconfactor - 15.0).abs() < 1e-9);

    service
        .actualizar(
            id,
            MateriaPrimaForm {
                codigo: "MP-01".to_string(),
                nombre: "Harina".to_string(),
                unidadmedida: None,
                costo: 20.0,
                factorimportacion: None,
            },
        )
        .await
        .unwrap();
    let mp = service.obtener(id).await.unwrap();
    assert!((mp.factorimportacion - 1.0).abs() < 1e-9);
    assert!((mp.costoconfactor - 20.0).abs() < 1e-9);

    let err = service
        .crear(MateriaPrimaForm {
            codigo: "MP-02".to_string(),
            nombre: "Azúcar".to_string(),
            unidadmedida: None,
            costo: -1.0,
            factorimportacion: None,
        })
        .await
        .unwrap_err();
    assert_eq!(status_de(&err), Some(400));
}

#[actix_rt::test]
async fn catalogo_valida_cliente_y_productos() {
    let pool = pool_prueba().await;
    let alfa = crear_cliente(&pool, "Alfa", "ALF").await;
    let beta = crear_cliente(&pool, "Beta", "BET").await;
    let propio = crear_producto(&pool, "P-ALFA", Some(alfa)).await;
    let ajeno = crear_producto(&pool, "P-BETA", Some(beta)).await;
    let global = crear_producto(&pool, "P-GLOBAL", None).await;
    let service = CatalogoService::new(pool);

    let err = service.crear(catalogo_form(999)).await.unwrap_err();
    assert_eq!(status_de(&err), Some(404));

    let catalogoid = service.crear(catalogo_form(alfa)).await.unwrap();
    let catalogo = service.obtener(catalogoid).await.unwrap();
    assert_eq!(catalogo.descripcion, None);

    for productoid in [propio, global] {
        service
            .agregar_producto(
                catalogoid,
                ProductoCatalogoForm {
                    productoid,
                    precioventa: Some(15.0),
                    margenutilidad: None,
                },
            )
            .await
            .unwrap();
    }

    let err = service
        .agregar_producto(
            catalogoid,
            ProductoCatalogoForm {
                productoid: ajeno,
                precioventa: None,
                margenutilidad: None,
            },
        )
        .await
        .unwrap_err();
    assert_eq!(status_de(&err), Some(400));

    let err = service
        .agregar_producto(
            catalogoid,
            ProductoCatalogoForm {
                productoid: propio,
                precioventa: None,
                margenutilidad: None,
            },
        )
        .await
        .unwrap_err();
    assert_eq!(status_de(&err), Some(409));

    service
        .actualizar_precio(
            catalogoid,
            propio,
            PrecioCatalogoForm {
                precioventa: Some(18.0),
                margenutilidad: Some(30.0),
            },
        )
        .await
        .unwrap();

    let productos = service.productos(catalogoid).await.unwrap();
    assert_eq!(productos.len(), 2);
    let p = productos.iter().find(|p| p.productoid == propio).unwrap();
    assert_eq!(p.precioventa, Some(18.0));
    assert_eq!(p.margenutilidad, Some(30.0));

    service.quitar_producto(catalogoid, global).await.unwrap();
    let err = service.quitar_producto(catalogoid, global).await.unwrap_err();
    assert_eq!(status_de(&err), Some(404));

    // Eliminar el catálogo arrastra sus productos asignados
    service.eliminar(catalogoid).await.unwrap();
    let err = service.obtener(catalogoid).await.unwrap_err();
    assert_eq!(status_de(&err), Some(404));
}

#[actix_rt::test]
async fn producto_valida_referencias_y_clientes() {
    let pool = pool_prueba().await;
    let alfa = crear_cliente(&pool, "Alfa", "ALF").await;
    let service = ProductoService::new(pool.clone());

    let mut form = crate::tests::comun::producto_form("p-1", Some(alfa));
    form.formulaid = Some(77);
    let err = service.crear(form).await.unwrap_err();
    assert_eq!(status_de(&err), Some(404));

    let mut form = crate::tests::comun::producto_form("p-1", Some(0));
    form.costo = 3.5;
    let id = service.crear(form).await.unwrap();
    let producto = service.obtener(id).await.unwrap();
    assert_eq!(producto.codigo, "P-1");
    assert_eq!(producto.clienteid, None);

    service.asignar_cliente(id, alfa).await.unwrap();
    let err = service.asignar_cliente(id, alfa).await.unwrap_err();
    assert_eq!(status_de(&err), Some(409));
    let clientes = service.clientes(id).await.unwrap();
    assert_eq!(clientes.len(), 1);
    assert_eq!(clientes[0].id, alfa);
    service.quitar_cliente(id, alfa).await.unwrap();
    assert!(service.clientes(id).await.unwrap().is_empty());
}

#[actix_rt::test]
async fn optimo_se_reemplaza_por_cliente_producto_zona() {
    let pool = pool_prueba().await;
    let alfa = crear_cliente(&pool, "Alfa", "ALF").await;
    let p1 = crear_producto(&pool, "P-1", Some(alfa)).await;
    let p2 = crear_producto(&pool, "P-2", Some(alfa)).await;
    let service = ProductoService::new(pool);

    let optimo = |productoid: i64, utilidad: f64| ProductoOptimoForm {
        clienteid: alfa,
        productoid,
        zonaid: None,
        utilidadoptima: utilidad,
        costoparticipacion: 1.5,
    };

    service.registrar_optimo(optimo(p1, 10.0)).await.unwrap();
    service.registrar_optimo(optimo(p1, 25.0)).await.unwrap();
    service.registrar_optimo(optimo(p2, 12.0)).await.unwrap();

    let filtros = OptimosFiltros {
        clienteid: Some(alfa),
        zonaid: None,
    };
    let optimos = service.optimos(&filtros).await.unwrap();
    assert_eq!(optimos.len(), 2);
    assert_eq!(optimos[0].productoid, p1);
    assert_eq!(optimos[0].utilidadoptima, 25.0);
    assert_eq!(optimos[1].productoid, p2);

    let err = service
        .registrar_optimo(optimo(p1, f64::NAN))
        .await
        .unwrap_err();
    assert_eq!(status_de(&err), Some(400));
}

#[actix_rt::test]
async fn optimo_solo_de_productos_propios_o_globales() {
    let pool = pool_prueba().await;
    let alfa = crear_cliente(&pool, "Alfa", "ALF").await;
    let beta = crear_cliente(&pool, "Beta", "BET").await;
    let ajeno = crear_producto(&pool, "P-BETA", Some(beta)).await;
    let global = crear_producto(&pool, "P-GLOBAL", None).await;
    let service = ProductoService::new(pool);

    let optimo = |productoid: i64| ProductoOptimoForm {
        clienteid: alfa,
        productoid,
        zonaid: None,
        utilidadoptima: 20.0,
        costoparticipacion: 1.0,
    };

    let err = service.registrar_optimo(optimo(ajeno)).await.unwrap_err();
    assert_eq!(status_de(&err), Some(400));
    service.registrar_optimo(optimo(global)).await.unwrap();

    let filtros = OptimosFiltros {
        clienteid: Some(alfa),
        zonaid: None,
    };
    let optimos = service.optimos(&filtros).await.unwrap();
    assert_eq!(optimos.len(), 1);
    assert_eq!(optimos[0].productoid, global);
}

#[actix_rt::test]
async fn usuario_guarda_password_encriptado() {
    let pool = pool_prueba().await;
    let alfa = crear_cliente(&pool, "Alfa", "ALF").await;
    let id = crear_usuario(&pool, "Ana@Acme.com", "secreta1", ROL_CLIENTE, Some(alfa)).await;

    let guardado: String = sqlx::query_scalar("SELECT password FROM usuarios WHERE id = ?1")
        .bind(id)
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_ne!(guardado, "secreta1");
    assert_eq!(crypto_prueba().desencriptar(&guardado).unwrap(), "secreta1");

    let service = UsuarioService::new(pool.clone(), crypto_prueba());
    let usuario = service.obtener(id).await.unwrap();
    assert_eq!(usuario.email, "ana@acme.com");

    // Sin password conserva el anterior
    service
        .actualizar(
            id,
            ActualizarUsuarioForm {
                nombrecompleto: "Ana López".to_string(),
                email: "ana@acme.com".to_string(),
                password: Some(String::new()),
                rolid: ROL_CLIENTE,
                clienteid: Some(alfa),
            },
        )
        .await
        .unwrap();
    let despues: String = sqlx::query_scalar("SELECT password FROM usuarios WHERE id = ?1")
        .bind(id)
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(despues, guardado);
}

#[actix_rt::test]
async fn usuario_valida_rol_cliente_y_password() {
    let pool = pool_prueba().await;
    let service = UsuarioService::new(pool.clone(), crypto_prueba());

    let form = |email: &str, password: &str, rolid: i64, clienteid: Option<i64>| {
        NuevoUsuarioForm {
            nombrecompleto: "Prueba".to_string(),
            email: email.to_string(),
            password: password.to_string(),
            rolid,
            clienteid,
        }
    };

    let err = service
        .crear(form("a@b.com", "123456", ROL_CLIENTE, None))
        .await
        .unwrap_err();
    assert_eq!(status_de(&err), Some(400));

    let err = service
        .crear(form("a@b.com", "123", ROL_ADMINISTRADOR, None))
        .await
        .unwrap_err();
    assert_eq!(status_de(&err), Some(400));

    let err = service
        .crear(form("sin-arroba", "123456", ROL_ADMINISTRADOR, None))
        .await
        .unwrap_err();
    assert_eq!(status_de(&err), Some(400));

    let err = service
        .crear(form("a@b.com", "123456", 42, None))
        .await
        .unwrap_err();
    assert_eq!(status_de(&err), Some(404));

    service
        .crear(form("a@b.com", "123456", ROL_ADMINISTRADOR, None))
        .await
        .unwrap();
    let err = service
        .crear(form("A@B.com", "123456", ROL_ADMINISTRADOR, None))
        .await
        .unwrap_err();
    assert_eq!(status_de(&err), Some(409));

    let roles = service.dropdown_roles().await.unwrap();
    assert_eq!(roles.len(), 2);
}

#[actix_rt::test]
async fn configuracion_por_clave() {
    let pool = pool_prueba().await;
    let service = ConfiguracionService::new(pool);

    service
        .crear(ConfiguracionForm {
            clave: "IVA".to_string(),
            descripcion: "Tasa de IVA".to_string(),
            valor: None,
            valorfloat: Some(0.16),
        })
        .await
        .unwrap();

    let iva = service.obtener_por_clave(" iva ").await.unwrap();
    assert_eq!(iva.clave, "iva");
    assert_eq!(iva.valorfloat, Some(0.16));

    let err = service.obtener_por_clave("isr").await.unwrap_err();
    assert_eq!(status_de(&err), Some(404));
}

#[actix_rt::test]
async fn permisos_iniciales_por_rol() {
    let pool = pool_prueba().await;
    let service = PermisoService::new(pool);

    assert_eq!(service.listar().await.unwrap().len(), 11);
    assert_eq!(
        service.ids_por_rol(ROL_CLIENTE).await.unwrap(),
        vec![PERMISO_DASHBOARD, PERMISO_CATALOGOS, PERMISO_PRODUCTOS, PERMISO_REPORTES]
    );

    service.asignar(ROL_CLIENTE, PERMISO_USUARIOS).await.unwrap();
    let err = service.asignar(ROL_CLIENTE, PERMISO_USUARIOS).await.unwrap_err();
    assert_eq!(status_de(&err), Some(409));
    assert!(service
        .ids_por_rol(ROL_CLIENTE)
        .await
        .unwrap()
        .contains(&PERMISO_USUARIOS));

    service.quitar(ROL_CLIENTE, PERMISO_USUARIOS).await.unwrap();
    let err = service.quitar(ROL_CLIENTE, PERMISO_USUARIOS).await.unwrap_err();
    assert_eq!(status_de(&err), Some(404));
}

#[actix_rt::test]
async fn dashboard_cuenta_activos_por_alcance() {
    let pool = pool_prueba().await;
    let alfa = crear_cliente(&pool, "Alfa", "ALF").await;
    let beta = crear_cliente(&pool, "Beta", "BET").await;
    crear_producto(&pool, "P-1", Some(alfa)).await;
    crear_producto(&pool, "P-2", Some(beta)).await;
    let inactivo = crear_producto(&pool, "P-3", Some(alfa)).await;
    crear_producto(&pool, "G-1", None).await;
    ProductoService::new(pool.clone())
        .cambiar_estatus(inactivo, false)
        .await
        .unwrap();
    CatalogoService::new(pool.clone())
        .crear(catalogo_form(beta))
        .await
        .unwrap();

    let service = DashboardService::new(pool);
    let todo = service.resumen(None).await.unwrap();
    assert_eq!(todo.clientes, 2);
    assert_eq!(todo.productos, 3);
    assert_eq!(todo.catalogos, 1);
    assert_eq!(todo.zonas, 0);

    let solo_alfa = service.resumen(Some(alfa)).await.unwrap();
    assert_eq!(solo_alfa.clientes, 1);
    // El propio activo más el global
    assert_eq!(solo_alfa.productos, 2);
    assert_eq!(solo_alfa.catalogos, 0);
}

fn formula_form(codigo: &str) -> FormulaForm {
    FormulaForm {
        codigo: codigo.to_string(),
        nombre: format!("Fórmula {codigo}"),
        especificaciones: None,
        unidadmedida: Some("kg".to_string()),
        rendimiento: 0.95,
        costo: 42.5,
    }
}

#[actix_rt::test]
async fn crud_de_formulas() {
    let pool = pool_prueba().await;
    let service = FormulaService::new(pool.clone());

    let id = service.crear(formula_form(" f-01 ")).await.unwrap();
    let formula = service.obtener(id).await.unwrap();
    assert_eq!(formula.codigo, "F-01");
    assert_eq!(formula.rendimiento, 0.95);

    let err = service.crear(formula_form("F-01")).await.unwrap_err();
    assert_eq!(status_de(&err), Some(409));

    let mut negativo = formula_form("F-02");
    negativo.costo = -1.0;
    let err = service.crear(negativo).await.unwrap_err();
    assert_eq!(status_de(&err), Some(400));

    let mut cambio = formula_form("F-01");
    cambio.nombre = "Base cítrica".to_string();
    service.actualizar(id, cambio.clone()).await.unwrap();
    assert_eq!(service.obtener(id).await.unwrap().nombre, "Base cítrica");
    let err = service.actualizar(999, cambio).await.unwrap_err();
    assert_eq!(status_de(&err), Some(404));

    let filtros = FormulaFiltros {
        nombre: Some("cítrica".to_string()),
        ..Default::default()
    };
    let listado = service
        .listar(&filtros, &PaginacionQuery::default())
        .await
        .unwrap();
    assert_eq!(listado.total, 1);

    // Referenciada por un producto no se puede borrar
    ProductoService::new(pool.clone())
        .crear(ProductoForm {
            formulaid: Some(id),
            ..producto_form("P-1", None)
        })
        .await
        .unwrap();
    let err = service.eliminar(id).await.unwrap_err();
    assert_eq!(status_de(&err), Some(409));

    service.cambiar_estatus(id, false).await.unwrap();
    assert!(service.dropdown().await.unwrap().is_empty());
}

#[actix_rt::test]
async fn crud_de_materiales_de_etiquetado() {
    let pool = pool_prueba().await;
    let service = MaterialEtiquetadoService::new(pool);
    let form = |codigo: &str, tipo: &str| MaterialEtiquetadoForm {
        codigo: codigo.to_string(),
        nombre: format!("Material {codigo}"),
        tipo: Some(tipo.to_string()),
        unidadmedida: Some("pza".to_string()),
        costo: 0.8,
    };

    let etiqueta = service.crear(form("et-1", "etiqueta")).await.unwrap();
    service.crear(form("caja-1", "caja")).await.unwrap();
    assert_eq!(service.obtener(etiqueta).await.unwrap().codigo, "ET-1");

    let err = service.crear(form("ET-1", "etiqueta")).await.unwrap_err();
    assert_eq!(status_de(&err), Some(409));
    let err = service.crear(form("  ", "etiqueta")).await.unwrap_err();
    assert_eq!(status_de(&err), Some(400));

    let filtros = MaterialEtiquetadoFiltros {
        codigo: Some("caja".to_string()),
        ..Default::default()
    };
    let listado = service
        .listar(&filtros, &PaginacionQuery::default())
        .await
        .unwrap();
    assert_eq!(listado.total, 1);

    let mut cambio = form("ET-1", "etiqueta");
    cambio.costo = 1.25;
    service.actualizar(etiqueta, cambio).await.unwrap();
    assert_eq!(service.obtener(etiqueta).await.unwrap().costo, 1.25);

    let anterior = service
        .actualizar_imagen(etiqueta, "http://s/et.png")
        .await
        .unwrap();
    assert_eq!(anterior, None);

    service.eliminar(etiqueta).await.unwrap();
    let err = service.obtener(etiqueta).await.unwrap_err();
    assert_eq!(status_de(&err), Some(404));
    assert_eq!(service.dropdown().await.unwrap().len(), 1);
}

#[actix_rt::test]
async fn zona_se_actualiza_y_elimina() {
    let pool = pool_prueba().await;
    let service = ZonaService::new(pool.clone());
    let norte = service.crear(zona_form("nte")).await.unwrap();
    let sur = service.crear(zona_form("SUR")).await.unwrap();

    let cambio = ZonaForm {
        nombre: "Zona Norte".to_string(),
        ..zona_form("NTE")
    };
    service.actualizar(norte, cambio).await.unwrap();
    let zona = service.obtener(norte).await.unwrap();
    assert_eq!((zona.nombre.as_str(), zona.clave.as_str()), ("Zona Norte", "NTE"));

    let err = service.actualizar(sur, zona_form("nte")).await.unwrap_err();
    assert_eq!(status_de(&err), Some(409));

    service.cambiar_estatus(sur, false).await.unwrap();
    let filtros = ZonaFiltros {
        activo: Some(true),
        ..Default::default()
    };
    let listado = service
        .listar(&filtros, &PaginacionQuery::default())
        .await
        .unwrap();
    assert_eq!(listado.total, 1);

    service.eliminar(sur).await.unwrap();
    let err = service.eliminar(sur).await.unwrap_err();
    assert_eq!(status_de(&err), Some(404));
}

#[actix_rt::test]
async fn configuracion_se_actualiza() {
    let pool = pool_prueba().await;
    let service = ConfiguracionService::new(pool);
    let form = |clave: &str, valorfloat: f64| ConfiguracionForm {
        clave: clave.to_string(),
        descripcion: "Tasa".to_string(),
        valor: None,
        valorfloat: Some(valorfloat),
    };
    let iva = service.crear(form("iva", 0.16)).await.unwrap();
    service.crear(form("isr", 0.30)).await.unwrap();

    service.actualizar(iva, form("IVA", 0.08)).await.unwrap();
    let config = service.obtener_por_clave("iva").await.unwrap();
    assert_eq!(config.valorfloat, Some(0.08));

    let err = service.actualizar(iva, form("isr", 0.1)).await.unwrap_err();
    assert_eq!(status_de(&err), Some(409));
    let err = service.actualizar(iva, form("iva", f64::NAN)).await.unwrap_err();
    assert_eq!(status_de(&err), Some(400));
    let err = service.actualizar(999, form("otra", 1.0)).await.unwrap_err();
    assert_eq!(status_de(&err), Some(404));
}
