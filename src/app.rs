//! app.rs
use crate::handlers::{
    auth_handler, catalogo_handler, cliente_handler, configuracion_handler, dashboard_handler,
    formula_handler, material_etiquetado_handler, materia_prima_handler, permiso_handler,
    producto_handler, reporte_handler, storage_handler, usuario_handler, zona_handler,
};
use crate::handlers::respuesta::error_de_entrada;
use actix_web::web;

/// Errores de JSON, query y path con el formato `{success, error}`.
/// `limite_json` debe alcanzar para una imagen en base64.
pub fn init_extractores(limite_json: usize) -> impl FnOnce(&mut web::ServiceConfig) {
    move |cfg| {
        cfg.app_data(
            web::JsonConfig::default()
                .limit(limite_json)
                .error_handler(|err, req| error_de_entrada(err, req)),
        )
        .app_data(web::QueryConfig::default().error_handler(|err, req| error_de_entrada(err, req)))
        .app_data(web::PathConfig::default().error_handler(|err, req| error_de_entrada(err, req)));
    }
}

/// Rutas fijas (`/dropdown`, `/optimos`...) van antes de `/{id}`
pub fn init_app(cfg: &mut web::ServiceConfig) {
    cfg.route(
        "/storage/{bucket}/{ruta:.*}",
        web::get().to(storage_handler::servir_imagen),
    )
    .service(
        web::scope("/api")
            .service(
                web::scope("/auth")
                    .route("/login", web::post().to(auth_handler::login_endpoint))
                    .route("/logout", web::post().to(auth_handler::logout_endpoint))
                    .route("/sesion", web::get().to(auth_handler::sesion_endpoint)),
            )
            .route("/dashboard", web::get().to(dashboard_handler::resumen_endpoint))
            .service(
                web::scope("/clientes")
                    .route("", web::get().to(cliente_handler::listar_clientes_endpoint))
                    .route("", web::post().to(cliente_handler::crear_cliente_endpoint))
                    .route(
                        "/dropdown",
                        web::get().to(cliente_handler::dropdown_clientes_endpoint),
                    )
                    .route("/{id}", web::get().to(cliente_handler::obtener_cliente_endpoint))
                    .route(
                        "/{id}",
                        web::put().to(cliente_handler::actualizar_cliente_endpoint),
                    )
                    .route(
                        "/{id}",
                        web::delete().to(cliente_handler::eliminar_cliente_endpoint),
                    )
                    .route(
                        "/{id}/estatus",
                        web::patch().to(cliente_handler::estatus_cliente_endpoint),
                    )
                    .route(
                        "/{id}/imagen",
                        web::post().to(cliente_handler::imagen_cliente_endpoint),
                    )
                    .route(
                        "/{id}/zonas",
                        web::get().to(cliente_handler::zonas_cliente_endpoint),
                    )
                    .route(
                        "/{id}/zonas",
                        web::post().to(cliente_handler::asignar_zona_endpoint),
                    )
                    .route(
                        "/{id}/zonas/{zonaid}",
                        web::delete().to(cliente_handler::quitar_zona_endpoint),
                    ),
            )
            .service(
                web::scope("/zonas")
                    .route("", web::get().to(zona_handler::listar_zonas_endpoint))
                    .route("", web::post().to(zona_handler::crear_zona_endpoint))
                    .route(
                        "/dropdown",
                        web::get().to(zona_handler::dropdown_zonas_endpoint),
                    )
                    .route("/{id}", web::get().to(zona_handler::obtener_zona_endpoint))
                    .route("/{id}", web::put().to(zona_handler::actualizar_zona_endpoint))
                    .route(
                        "/{id}",
                        web::delete().to(zona_handler::eliminar_zona_endpoint),
                    )
                    .route(
                        "/{id}/estatus",
                        web::patch().to(zona_handler::estatus_zona_endpoint),
                    ),
            )
            .service(
                web::scope("/catalogos")
                    .route(
                        "",
                        web::get().to(catalogo_handler::listar_catalogos_endpoint),
                    )
                    .route(
                        "",
                        web::post().to(catalogo_handler::crear_catalogo_endpoint),
                    )
                    .route(
                        "/dropdown",
                        web::get().to(catalogo_handler::dropdown_catalogos_endpoint),
                    )
                    .route(
                        "/{id}",
                        web::get().to(catalogo_handler::obtener_catalogo_endpoint),
                    )
                    .route(
                        "/{id}",
                        web::put().to(catalogo_handler::actualizar_catalogo_endpoint),
                    )
                    .route(
                        "/{id}",
                        web::delete().to(catalogo_handler::eliminar_catalogo_endpoint),
                    )
                    .route(
                        "/{id}/estatus",
                        web::patch().to(catalogo_handler::estatus_catalogo_endpoint),
                    )
                    .route(
                        "/{id}/imagen",
                        web::post().to(catalogo_handler::imagen_catalogo_endpoint),
                    )
                    .route(
                        "/{id}/productos",
                        web::get().to(catalogo_handler::productos_catalogo_endpoint),
                    )
                    .route(
                        "/{id}/productos",
                        web::post().to(catalogo_handler::agregar_producto_endpoint),
                    )
                    .route(
                        "/{id}/productos/{productoid}",
                        web::put().to(catalogo_handler::precio_producto_endpoint),
                    )
                    .route(
                        "/{id}/productos/{productoid}",
                        web::delete().to(catalogo_handler::quitar_producto_endpoint),
                    ),
            )
            .service(
                web::scope("/productos")
                    .route(
                        "",
                        web::get().to(producto_handler::listar_productos_endpoint),
                    )
                    .route(
                        "",
                        web::post().to(producto_handler::crear_producto_endpoint),
                    )
                    .route(
                        "/dropdown",
                        web::get().to(producto_handler::dropdown_productos_endpoint),
                    )
                    .route(
                        "/optimos",
                        web::get().to(producto_handler::optimos_endpoint),
                    )
                    .route(
                        "/optimos",
                        web::post().to(producto_handler::registrar_optimo_endpoint),
                    )
                    .route(
                        "/{id}",
                        web::get().to(producto_handler::obtener_producto_endpoint),
                    )
                    .route(
                        "/{id}",
                        web::put().to(producto_handler::actualizar_producto_endpoint),
                    )
                    .route(
                        "/{id}",
                        web::delete().to(producto_handler::eliminar_producto_endpoint),
                    )
                    .route(
                        "/{id}/estatus",
                        web::patch().to(producto_handler::estatus_producto_endpoint),
                    )
                    .route(
                        "/{id}/imagen",
                        web::post().to(producto_handler::imagen_producto_endpoint),
                    )
                    .route(
                        "/{id}/clientes",
                        web::get().to(producto_handler::clientes_producto_endpoint),
                    )
                    .route(
                        "/{id}/clientes",
                        web::post().to(producto_handler::asignar_cliente_endpoint),
                    )
                    .route(
                        "/{id}/clientes/{clienteid}",
                        web::delete().to(producto_handler::quitar_cliente_endpoint),
                    ),
            )
            .service(
                web::scope("/formulas")
                    .route("", web::get().to(formula_handler::listar_formulas_endpoint))
                    .route("", web::post().to(formula_handler::crear_formula_endpoint))
                    .route(
                        "/dropdown",
                        web::get().to(formula_handler::dropdown_formulas_endpoint),
                    )
                    .route(
                        "/{id}",
                        web::get().to(formula_handler::obtener_formula_endpoint),
                    )
                    .route(
                        "/{id}",
                        web::put().to(formula_handler::actualizar_formula_endpoint),
                    )
                    .route(
                        "/{id}",
                        web::delete().to(formula_handler::eliminar_formula_endpoint),
                    )
                    .route(
                        "/{id}/estatus",
                        web::patch().to(formula_handler::estatus_formula_endpoint),
                    ),
            )
            .service(
                web::scope("/materiaprima")
                    .route(
                        "",
                        web::get().to(materia_prima_handler::listar_materia_prima_endpoint),
                    )
                    .route(
                        "",
                        web::post().to(materia_prima_handler::crear_materia_prima_endpoint),
                    )
                    .route(
                        "/dropdown",
                        web::get().to(materia_prima_handler::dropdown_materia_prima_endpoint),
                    )
                    .route(
                        "/{id}",
                        web::get().to(materia_prima_handler::obtener_materia_prima_endpoint),
                    )
                    .route(
                        "/{id}",
                        web::put().to(materia_prima_handler::actualizar_materia_prima_endpoint),
                    )
                    .route(
                        "/{id}",
                        web::delete().to(materia_prima_handler::eliminar_materia_prima_endpoint),
                    )
                    .route(
                        "/{id}/estatus",
                        web::patch().to(materia_prima_handler::estatus_materia_prima_endpoint),
                    ),
            )
            .service(
                web::scope("/materialesetiquetado")
                    .route(
                        "",
                        web::get().to(material_etiquetado_handler::listar_materiales_endpoint),
                    )
                    .route(
                        "",
                        web::post().to(material_etiquetado_handler::crear_material_endpoint),
                    )
                    .route(
                        "/dropdown",
                        web::get().to(material_etiquetado_handler::dropdown_materiales_endpoint),
                    )
                    .route(
                        "/{id}",
                        web::get().to(material_etiquetado_handler::obtener_material_endpoint),
                    )
                    .route(
                        "/{id}",
                        web::put().to(material_etiquetado_handler::actualizar_material_endpoint),
                    )
                    .route(
                        "/{id}",
                        web::delete().to(material_etiquetado_handler::eliminar_material_endpoint),
                    )
                    .route(
                        "/{id}/estatus",
                        web::patch().to(material_etiquetado_handler::estatus_material_endpoint),
                    )
                    .route(
                        "/{id}/imagen",
                        web::post().to(material_etiquetado_handler::imagen_material_endpoint),
                    ),
            )
            .service(
                web::scope("/usuarios")
                    .route("", web::get().to(usuario_handler::listar_usuarios_endpoint))
                    .route("", web::post().to(usuario_handler::crear_usuario_endpoint))
                    .route(
                        "/roles",
                        web::get().to(usuario_handler::roles_dropdown_endpoint),
                    )
                    .route(
                        "/{id}",
                        web::get().to(usuario_handler::obtener_usuario_endpoint),
                    )
                    .route(
                        "/{id}",
                        web::put().to(usuario_handler::actualizar_usuario_endpoint),
                    )
                    .route(
                        "/{id}",
                        web::delete().to(usuario_handler::eliminar_usuario_endpoint),
                    )
                    .route(
                        "/{id}/estatus",
                        web::patch().to(usuario_handler::estatus_usuario_endpoint),
                    )
                    .route(
                        "/{id}/imagen",
                        web::post().to(usuario_handler::imagen_usuario_endpoint),
                    ),
            )
            .service(
                web::scope("/permisos")
                    .route("", web::get().to(permiso_handler::listar_permisos_endpoint))
                    .route(
                        "/rol/{rolid}",
                        web::get().to(permiso_handler::permisos_rol_endpoint),
                    )
                    .route(
                        "/rol/{rolid}",
                        web::post().to(permiso_handler::asignar_permiso_endpoint),
                    )
                    .route(
                        "/rol/{rolid}/{permisoid}",
                        web::delete().to(permiso_handler::quitar_permiso_endpoint),
                    ),
            )
            .service(
                web::scope("/configuraciones")
                    .route(
                        "",
                        web::get().to(configuracion_handler::listar_configuraciones_endpoint),
                    )
                    .route(
                        "",
                        web::post().to(configuracion_handler::crear_configuracion_endpoint),
                    )
                    .route(
                        "/clave/{clave}",
                        web::get().to(configuracion_handler::obtener_por_clave_endpoint),
                    )
                    .route(
                        "/{id}",
                        web::get().to(configuracion_handler::obtener_configuracion_endpoint),
                    )
                    .route(
                        "/{id}",
                        web::put().to(configuracion_handler::actualizar_configuracion_endpoint),
                    )
                    .route(
                        "/{id}/estatus",
                        web::patch().to(configuracion_handler::estatus_configuracion_endpoint),
                    ),
            )
            .service(
                web::scope("/reportes")
                    .route(
                        "/costeo",
                        web::post().to(reporte_handler::reporte_costeo_endpoint),
                    )
                    .route(
                        "/costeo/calculo",
                        web::post().to(reporte_handler::reporte_costeo_calculo_endpoint),
                    )
                    .route(
                        "/catalogo/{catalogoid}",
                        web::get().to(reporte_handler::reporte_catalogo_endpoint),
                    )
                    .route(
                        "/utilidad-actual",
                        web::post().to(reporte_handler::utilidad_actual_endpoint),
                    )
                    .route(
                        "/usuarios",
                        web::get().to(reporte_handler::sel_usuarios_endpoint),
                    ),
            ),
    );
}
