use std::time::Duration;

use actix_web::{web, HttpResponse, Responder};
use humantime::format_duration;
use tracing::instrument;

use crate::{
    entities::contact_me::NewContactMessage, errors::AppError,
    infrastructure::limiter::rate_limiter::Decision, AppState,
};

#[instrument(skip(state, form))]
pub async fn submit_contact_message(
    state: web::Data<AppState>,
    form: web::Json<NewContactMessage>,
) -> Result<impl Responder, AppError> {
    // One limiter slot per sender, case-insensitive
    let email_key = form.email.trim().to_lowercase();

    if let Decision::Limited { retry_after } = state.contact_limiter.check(&email_key) {
        let wait = Duration::from_secs(retry_after.as_secs().max(1));
        return Err(AppError::RateLimited(format!(
            "Too many messages from this email address. Please try again in {}.",
            format_duration(wait)
        )));
    }

    let stored = state
        .contact_handler
        .submit_message(form.into_inner())
        .await?;

    Ok(HttpResponse::Created().json(stored))
}

#[instrument(skip(state))]
pub async fn list_contact_messages(
    state: web::Data<AppState>,
) -> Result<impl Responder, AppError> {
    let messages = state.contact_handler.list_messages().await?;

    Ok(HttpResponse::Ok().json(messages))
}
