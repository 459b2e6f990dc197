use crate::api::fichajes;
use actix_web::web;

/// Routes mounted under the `/api` scope.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/fichajes")
            // /api/fichajes
            .service(web::resource("").route(web::post().to(fichajes::registrar_fichaje)))
            // /api/fichajes/{empleado_id}
            .service(
                web::resource("/{empleado_id}").route(web::get().to(fichajes::obtener_fichajes)),
            ),
    );
}
