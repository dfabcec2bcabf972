use actix_web::{get, HttpResponse, Responder};

#[get("")]
pub async fn api_root() -> impl Responder {
    HttpResponse::Ok().json(serde_json::json!({
        "message": "Portfolio API is running",
        "status": "Ok",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}
