use actix_web::web;

use crate::handlers::{contact_me, home, projects, system};

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api")
            .service(home::api_root)
            .service(system::health_check)
            .service(
                web::resource("/projects")
                    .route(web::get().to(projects::list_projects))
                    .route(web::post().to(projects::create_project)),
            )
            .service(
                web::resource("/projects/{project_id}")
                    .route(web::put().to(projects::replace_project))
                    .route(web::delete().to(projects::delete_project)),
            )
            .service(
                web::resource("/contact")
                    .route(web::post().to(contact_me::submit_contact_message))
                    .route(web::get().to(contact_me::list_contact_messages)),
            ),
    );
}
