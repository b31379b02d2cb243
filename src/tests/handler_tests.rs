//! tests/handler_tests.rs
//! Endpoints completos con `actix_web::test`: cookies de sesión, status
//! de error, permisos por rol y subida de imágenes.

use actix_web::cookie::Cookie;
use actix_web::http::StatusCode;
use actix_web::{test, web, App};
use serde_json::{json, Value};
use sqlx::{Pool, Sqlite};
use tempfile::TempDir;

use crate::app;
use crate::config::app_config::{AppConfig, StorageConfig};
use crate::models::catalogo_model::CatalogoForm;
use crate::models::permiso_model::{PERMISO_USUARIOS, ROL_ADMINISTRADOR, ROL_CLIENTE};
use crate::models::sesion_model::{
    COOKIES_SESION, COOKIE_ROL_ID, COOKIE_SESION_ACTIVA, COOKIE_USUARIO_ID,
};
use crate::services::auth_service::AuthService;
use crate::services::catalogo_service::CatalogoService;
use crate::services::cliente_service::ClienteService;
use crate::services::configuracion_service::ConfiguracionService;
use crate::services::dashboard_service::DashboardService;
use crate::services::formula_service::FormulaService;
use crate::services::material_etiquetado_service::MaterialEtiquetadoService;
use crate::services::materia_prima_service::MateriaPrimaService;
use crate::services::permiso_service::PermisoService;
use crate::services::producto_service::ProductoService;
use crate::services::reporte_service::ReporteService;
use crate::services::rpc_service::RpcService;
use crate::services::storage_service::StorageService;
use crate::services::usuario_service::UsuarioService;
use crate::services::zona_service::ZonaService;
use crate::tests::comun::{
    crear_cliente, crear_producto, crear_usuario, crypto_prueba, pool_prueba,
};

const BASE_STORAGE: &str = "http://localhost:5022/storage";
const PNG_BASE64: &str = "iVBORw0KGgoAAAANSUhEUgAAAAEAAAABCAYAAAAfFcSJ";

fn config_prueba(dir: &TempDir) -> AppConfig {
    AppConfig {
        storage: StorageConfig::Local {
            dir: dir.path().to_string_lossy().to_string(),
            url_publica_base: BASE_STORAGE.to_string(),
        },
        ..AppConfig::default()
    }
}

/// App con todos los servicios sobre `pool`, igual que en main
macro_rules! app_prueba {
    ($pool:expr, $config:expr) => {{
        let pool: Pool<Sqlite> = $pool;
        let config: &AppConfig = $config;
        test::init_service(
            App::new()
                .app_data(web::Data::new(AuthService::new(pool.clone(), crypto_prueba())))
                .app_data(web::Data::new(UsuarioService::new(pool.clone(), crypto_prueba())))
                .app_data(web::Data::new(PermisoService::new(pool.clone())))
                .app_data(web::Data::new(ClienteService::new(pool.clone())))
                .app_data(web::Data::new(ZonaService::new(pool.clone())))
                .app_data(web::Data::new(CatalogoService::new(pool.clone())))
                .app_data(web::Data::new(ProductoService::new(pool.clone())))
                .app_data(web::Data::new(FormulaService::new(pool.clone())))
                .app_data(web::Data::new(MateriaPrimaService::new(pool.clone())))
                .app_data(web::Data::new(MaterialEtiquetadoService::new(pool.clone())))
                .app_data(web::Data::new(ConfiguracionService::new(pool.clone())))
                .app_data(web::Data::new(DashboardService::new(pool.clone())))
                .app_data(web::Data::new(ReporteService::new(
                    RpcService::new(config).unwrap(),
                )))
                .app_data(web::Data::new(StorageService::new(config)))
                .configure(app::init_extractores(config.limite_json()))
                .configure(app::init_app),
        )
        .await
    }};
}

/// POST /api/auth/login y regresa las cookies recibidas
macro_rules! login {
    ($app:expr, $email:expr, $password:expr) => {{
        let req = test::TestRequest::post()
            .uri("/api/auth/login")
            .set_json(json!({ "email": $email, "password": $password }))
            .to_request();
        let resp = test::call_service($app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
        let cookies: Vec<Cookie<'static>> =
            resp.response().cookies().map(|c| c.into_owned()).collect();
        cookies
    }};
}

fn con_cookies(mut req: test::TestRequest, cookies: &[Cookie<'static>]) -> test::TestRequest {
    for cookie in cookies {
        req = req.cookie(cookie.clone());
    }
    req
}

#[actix_rt::test]
async fn sin_sesion_responde_401_json() {
    let dir = TempDir::new().unwrap();
    let app = app_prueba!(pool_prueba().await, &config_prueba(&dir));

    let req = test::TestRequest::get().uri("/api/clientes").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["success"], false);
    assert!(body["error"].is_string());
}

#[actix_rt::test]
async fn login_invalido_responde_401() {
    let pool = pool_prueba().await;
    crear_usuario(&pool, "admin@acme.com", "secreta1", ROL_ADMINISTRADOR, None).await;
    let dir = TempDir::new().unwrap();
    let app = app_prueba!(pool, &config_prueba(&dir));

    let req = test::TestRequest::post()
        .uri("/api/auth/login")
        .set_json(json!({ "email": "admin@acme.com", "password": "incorrecto" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(resp.response().cookies().count(), 0);
}

#[actix_rt::test]
async fn login_deja_siete_cookies_y_logout_las_borra() {
    let pool = pool_prueba().await;
    crear_usuario(&pool, "admin@acme.com", "secreta1", ROL_ADMINISTRADOR, None).await;
    let dir = TempDir::new().unwrap();
    let app = app_prueba!(pool, &config_prueba(&dir));

    let cookies = login!(&app, "admin@acme.com", "secreta1");
    let mut nombres: Vec<&str> = cookies.iter().map(|c| c.name()).collect();
    nombres.sort_unstable();
    let mut esperados = COOKIES_SESION.to_vec();
    esperados.sort_unstable();
    assert_eq!(nombres, esperados);
    assert!(cookies.iter().all(|c| c.http_only() == Some(true)));

    let req = con_cookies(test::TestRequest::get().uri("/api/auth/sesion"), &cookies).to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["data"]["email"], "admin@acme.com");
    assert_eq!(body["data"]["nombrecompleto"], "Usuario admin@acme.com");

    let req = test::TestRequest::post().uri("/api/auth/logout").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let borradas: Vec<Cookie<'static>> =
        resp.response().cookies().map(|c| c.into_owned()).collect();
    assert_eq!(borradas.len(), COOKIES_SESION.len());
    assert!(borradas.iter().all(|c| c.value().is_empty()));
}

#[actix_rt::test]
async fn cookie_de_rol_alterada_invalida_la_sesion() {
    let pool = pool_prueba().await;
    let alfa = crear_cliente(&pool, "Alfa", "ALF").await;
    crear_usuario(&pool, "ana@acme.com", "secreta1", ROL_CLIENTE, Some(alfa)).await;
    let dir = TempDir::new().unwrap();
    let app = app_prueba!(pool, &config_prueba(&dir));

    let cookies: Vec<Cookie<'static>> = login!(&app, "ana@acme.com", "secreta1")
        .into_iter()
        .map(|c| {
            if c.name() == COOKIE_ROL_ID {
                Cookie::new(COOKIE_ROL_ID, ROL_ADMINISTRADOR.to_string())
            } else {
                c
            }
        })
        .collect();

    let req = con_cookies(test::TestRequest::get().uri("/api/dashboard"), &cookies).to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
}

#[actix_rt::test]
async fn crud_de_clientes_como_administrador() {
    let pool = pool_prueba().await;
    crear_usuario(&pool, "admin@acme.com", "secreta1", ROL_ADMINISTRADOR, None).await;
    let dir = TempDir::new().unwrap();
    let app = app_prueba!(pool, &config_prueba(&dir));
    let cookies = login!(&app, "admin@acme.com", "secreta1");

    let req = con_cookies(test::TestRequest::post().uri("/api/clientes"), &cookies)
        .set_json(json!({ "nombre": "Acme", "clave": "acm" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    let body: Value = test::read_body_json(resp).await;
    let id = body["id"].as_i64().unwrap();

    let req = con_cookies(test::TestRequest::post().uri("/api/clientes"), &cookies)
        .set_json(json!({ "nombre": "Otro", "clave": "ACM" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CONFLICT);

    let req = con_cookies(
        test::TestRequest::get().uri(&format!("/api/clientes/{id}")),
        &cookies,
    )
    .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["data"]["clave"], "ACM");

    let req = con_cookies(
        test::TestRequest::patch().uri(&format!("/api/clientes/{id}/estatus")),
        &cookies,
    )
    .set_json(json!({ "activo": false }))
    .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let req = con_cookies(
        test::TestRequest::get().uri("/api/clientes?activo=false&orden=clave&dir=desc"),
        &cookies,
    )
    .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["data"]["total"], 1);

    let req = con_cookies(test::TestRequest::get().uri("/api/clientes/999"), &cookies)
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    let req = con_cookies(
        test::TestRequest::get().uri("/api/clientes?orden=password"),
        &cookies,
    )
    .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let req = con_cookies(test::TestRequest::post().uri("/api/clientes"), &cookies)
        .insert_header(("Content-Type", "application/json"))
        .set_payload("{ no es json")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["success"], false);

    let req = con_cookies(
        test::TestRequest::delete().uri(&format!("/api/clientes/{id}")),
        &cookies,
    )
    .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
}

#[actix_rt::test]
async fn usuario_de_cliente_solo_ve_lo_suyo() {
    let pool = pool_prueba().await;
    let alfa = crear_cliente(&pool, "Alfa", "ALF").await;
    let beta = crear_cliente(&pool, "Beta", "BET").await;
    let catalogos = CatalogoService::new(pool.clone());
    let form = |clienteid: i64| CatalogoForm {
        nombre: format!("Catálogo {clienteid}"),
        descripcion: None,
        clienteid,
        zonaid: None,
    };
    let propio = catalogos.crear(form(alfa)).await.unwrap();
    let ajeno = catalogos.crear(form(beta)).await.unwrap();
    crear_usuario(&pool, "ana@acme.com", "secreta1", ROL_CLIENTE, Some(alfa)).await;
    let dir = TempDir::new().unwrap();
    let app = app_prueba!(pool, &config_prueba(&dir));
    let cookies = login!(&app, "ana@acme.com", "secreta1");

    // Sin permiso de clientes
    let req = con_cookies(test::TestRequest::get().uri("/api/clientes"), &cookies).to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::FORBIDDEN);

    // Pedir otro cliente no amplía el alcance
    let req = con_cookies(
        test::TestRequest::get().uri(&format!("/api/catalogos?clienteid={beta}")),
        &cookies,
    )
    .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["data"]["total"], 1);
    assert_eq!(body["data"]["items"][0]["id"], propio);

    let req = con_cookies(
        test::TestRequest::get().uri(&format!("/api/catalogos/{ajeno}")),
        &cookies,
    )
    .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::FORBIDDEN);

    let req = con_cookies(test::TestRequest::post().uri("/api/catalogos"), &cookies)
        .set_json(json!({ "nombre": "Intruso", "clienteid": beta }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::FORBIDDEN);

    let req = con_cookies(test::TestRequest::get().uri("/api/dashboard"), &cookies).to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["data"]["clientes"], 1);
    assert_eq!(body["data"]["catalogos"], 1);
}

#[actix_rt::test]
async fn subir_imagen_reemplaza_la_anterior() {
    let pool = pool_prueba().await;
    crear_usuario(&pool, "admin@acme.com", "secreta1", ROL_ADMINISTRADOR, None).await;
    let clienteid = crear_cliente(&pool, "Alfa", "ALF").await;
    let dir = TempDir::new().unwrap();
    let app = app_prueba!(pool, &config_prueba(&dir));
    let cookies = login!(&app, "admin@acme.com", "secreta1");

    let mut urls = Vec::new();
    for _ in 0..2 {
        let req = con_cookies(
            test::TestRequest::post().uri(&format!("/api/clientes/{clienteid}/imagen")),
            &cookies,
        )
        .set_json(json!({
            "nombre_archivo": "logo.png",
            "content_type": "image/png",
            "data": PNG_BASE64,
        }))
        .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["success"], true);
        urls.push(body["imgurl"].as_str().unwrap().to_string());
    }

    let ruta = |url: &str| {
        dir.path()
            .join("imagenes")
            .join(url.trim_start_matches(&format!("{BASE_STORAGE}/imagenes/")))
    };
    assert!(!ruta(&urls[0]).exists());
    assert!(ruta(&urls[1]).exists());

    // Servida por /storage
    let path = urls[1].trim_start_matches("http://localhost:5022");
    let req = test::TestRequest::get().uri(path).to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let req = test::TestRequest::get()
        .uri("/storage/imagenes/../secreto.txt")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_ne!(resp.status(), StatusCode::OK);

    let req = con_cookies(
        test::TestRequest::post().uri(&format!("/api/clientes/{clienteid}/imagen")),
        &cookies,
    )
    .set_json(json!({
        "nombre_archivo": "doc.pdf",
        "content_type": "application/pdf",
        "data": PNG_BASE64,
    }))
    .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[actix_rt::test]
async fn token_con_bytes_alterados_no_cambia_de_usuario() {
    let pool = pool_prueba().await;
    crear_usuario(&pool, "admin@acme.com", "secreta1", ROL_ADMINISTRADOR, None).await;
    let otro = crear_usuario(&pool, "otro@acme.com", "secreta1", ROL_ADMINISTRADOR, None).await;
    let dir = TempDir::new().unwrap();
    let app = app_prueba!(pool, &config_prueba(&dir));

    let cookies: Vec<Cookie<'static>> = login!(&app, "admin@acme.com", "secreta1")
        .into_iter()
        .map(|c| match c.name() {
            COOKIE_SESION_ACTIVA => {
                let b64 = urlencoding::decode(c.value()).unwrap().into_owned();
                let mut bytes = base64::decode(b64).unwrap();
                // Un byte dentro del texto cifrado
                bytes[13] ^= b'1' ^ b'2';
                let valor = urlencoding::encode(&base64::encode(&bytes)).into_owned();
                Cookie::new(COOKIE_SESION_ACTIVA, valor)
            }
            COOKIE_USUARIO_ID => Cookie::new(COOKIE_USUARIO_ID, otro.to_string()),
            _ => c,
        })
        .collect();

    let req = con_cookies(test::TestRequest::get().uri("/api/auth/sesion"), &cookies).to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
}

#[actix_rt::test]
async fn usuario_de_cliente_no_toca_administradores() {
    let pool = pool_prueba().await;
    let alfa = crear_cliente(&pool, "Alfa", "ALF").await;
    let admin = crear_usuario(&pool, "admin@acme.com", "secreta1", ROL_ADMINISTRADOR, Some(alfa)).await;
    let colega = crear_usuario(&pool, "luis@acme.com", "secreta1", ROL_CLIENTE, Some(alfa)).await;
    crear_usuario(&pool, "ana@acme.com", "secreta1", ROL_CLIENTE, Some(alfa)).await;
    PermisoService::new(pool.clone())
        .asignar(ROL_CLIENTE, PERMISO_USUARIOS)
        .await
        .unwrap();
    let dir = TempDir::new().unwrap();
    let app = app_prueba!(pool, &config_prueba(&dir));
    let cookies = login!(&app, "ana@acme.com", "secreta1");

    let cambio = |email: &str| {
        json!({
            "nombrecompleto": "Cambiado",
            "email": email,
            "password": "hackeado",
            "rolid": ROL_CLIENTE,
            "clienteid": alfa,
        })
    };

    let req = con_cookies(
        test::TestRequest::put().uri(&format!("/api/usuarios/{admin}")),
        &cookies,
    )
    .set_json(cambio("admin@acme.com"))
    .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::FORBIDDEN);

    for req in [
        test::TestRequest::get().uri(&format!("/api/usuarios/{admin}")),
        test::TestRequest::delete().uri(&format!("/api/usuarios/{admin}")),
    ] {
        let resp = test::call_service(&app, con_cookies(req, &cookies).to_request()).await;
        assert_eq!(resp.status(), StatusCode::FORBIDDEN);
    }

    // El administrador conserva su password
    let req = test::TestRequest::post()
        .uri("/api/auth/login")
        .set_json(json!({ "email": "admin@acme.com", "password": "hackeado" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    // Un colega del mismo cliente sí se administra
    let req = con_cookies(
        test::TestRequest::put().uri(&format!("/api/usuarios/{colega}")),
        &cookies,
    )
    .set_json(cambio("luis@acme.com"))
    .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
}

#[actix_rt::test]
async fn productos_globales_visibles_para_clientes() {
    let pool = pool_prueba().await;
    let alfa = crear_cliente(&pool, "Alfa", "ALF").await;
    let beta = crear_cliente(&pool, "Beta", "BET").await;
    let propio = crear_producto(&pool, "P-ALFA", Some(alfa)).await;
    crear_producto(&pool, "P-BETA", Some(beta)).await;
    let global = crear_producto(&pool, "P-GLOBAL", None).await;
    crear_usuario(&pool, "ana@acme.com", "secreta1", ROL_CLIENTE, Some(alfa)).await;
    let dir = TempDir::new().unwrap();
    let app = app_prueba!(pool, &config_prueba(&dir));
    let cookies = login!(&app, "ana@acme.com", "secreta1");

    let req = con_cookies(
        test::TestRequest::get().uri(&format!("/api/productos?clienteid={beta}&orden=id")),
        &cookies,
    )
    .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["data"]["total"], 2);
    let ids: Vec<i64> = body["data"]["items"]
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["id"].as_i64().unwrap())
        .collect();
    assert_eq!(ids, vec![propio, global]);

    let req = con_cookies(test::TestRequest::get().uri("/api/productos/dropdown"), &cookies)
        .to_request();
    let resp = test::call_service(&app, req).await;
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["data"].as_array().unwrap().len(), 2);
}

#[actix_rt::test]
async fn lecturas_requieren_el_permiso_del_modulo() {
    let pool = pool_prueba().await;
    let alfa = crear_cliente(&pool, "Alfa", "ALF").await;
    crear_usuario(&pool, "ana@acme.com", "secreta1", ROL_CLIENTE, Some(alfa)).await;
    let dir = TempDir::new().unwrap();
    let app = app_prueba!(pool, &config_prueba(&dir));
    let cookies = login!(&app, "ana@acme.com", "secreta1");

    let status = |uri: &'static str| {
        let req = con_cookies(test::TestRequest::get().uri(uri), &cookies).to_request();
        test::call_service(&app, req)
    };

    assert_eq!(status("/api/formulas").await.status(), StatusCode::FORBIDDEN);
    assert_eq!(status("/api/zonas").await.status(), StatusCode::FORBIDDEN);
    assert_eq!(status("/api/configuraciones").await.status(), StatusCode::FORBIDDEN);
    // Dropdowns sólo piden sesión
    assert_eq!(status("/api/formulas/dropdown").await.status(), StatusCode::OK);
    assert_eq!(status("/api/zonas/dropdown").await.status(), StatusCode::OK);
}

#[actix_rt::test]
async fn costeo_y_optimos_de_productos_ajenos_se_rechazan() {
    let pool = pool_prueba().await;
    let alfa = crear_cliente(&pool, "Alfa", "ALF").await;
    let beta = crear_cliente(&pool, "Beta", "BET").await;
    let ajeno = crear_producto(&pool, "P-BETA", Some(beta)).await;
    let global = crear_producto(&pool, "P-GLOBAL", None).await;
    crear_usuario(&pool, "ana@acme.com", "secreta1", ROL_CLIENTE, Some(alfa)).await;
    let dir = TempDir::new().unwrap();
    let app = app_prueba!(pool, &config_prueba(&dir));
    let cookies = login!(&app, "ana@acme.com", "secreta1");

    let calculo = |productoid: i64| {
        con_cookies(test::TestRequest::post().uri("/api/reportes/costeo/calculo"), &cookies)
            .set_json(json!({ "productoid": productoid, "utilidad": 30.0 }))
            .to_request()
    };
    let resp = test::call_service(&app, calculo(ajeno)).await;
    assert_eq!(resp.status(), StatusCode::FORBIDDEN);
    // El global pasa la validación y llega al RPC, que no está configurado
    let resp = test::call_service(&app, calculo(global)).await;
    assert_eq!(resp.status(), StatusCode::BAD_GATEWAY);

    let req = con_cookies(
        test::TestRequest::post().uri("/api/reportes/utilidad-actual"),
        &cookies,
    )
    .set_json(json!({ "productoid": ajeno }))
    .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::FORBIDDEN);

    let req = con_cookies(test::TestRequest::post().uri("/api/productos/optimos"), &cookies)
        .set_json(json!({
            "clienteid": alfa,
            "productoid": ajeno,
            "utilidadoptima": 25.0,
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}
