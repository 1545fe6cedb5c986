use actix_web::{web, Resource};
use crate::errors::{json_error_handler, method_not_allowed, not_found};
use crate::handlers;

fn resource(path: &str) -> Resource {
    web::resource(path).default_service(web::to(method_not_allowed))
}

/// Registers the `/api` routes. Callers provide `Data<dyn UserStore>` and `Data<Catalog>`.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().error_handler(json_error_handler))
        .service(
            web::scope("/api")
                .service(resource("/profile").route(web::post().to(handlers::profile::create_profile)))
                .service(resource("/profile/{user_id}").route(web::get().to(handlers::profile::get_profile)))
                .service(resource("/workout/complete").route(web::post().to(handlers::workout::complete_exercise)))
                .service(resource("/workout/day/complete").route(web::post().to(handlers::workout::complete_day)))
                .service(resource("/workout/time/update").route(web::post().to(handlers::workout::update_time)))
                .service(resource("/workout/{user_id}").route(web::get().to(handlers::workout::get_workout)))
                .service(resource("/nutrition/{user_id}").route(web::get().to(handlers::nutrition::get_nutrition)))
                .default_service(web::to(not_found)),
        );
}
