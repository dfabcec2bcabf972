use actix_web::{web, HttpResponse, Responder};
use serde::Deserialize;
use tracing::instrument;

use crate::{entities::project::NewProjectRequest, errors::AppError, AppState};

#[derive(Debug, Deserialize)]
pub struct ProjectListQuery {
    pub category: Option<String>,
}

#[instrument(skip(state))]
pub async fn list_projects(
    state: web::Data<AppState>,
    query: web::Query<ProjectListQuery>,
) -> Result<impl Responder, AppError> {
    let projects = state
        .project_handler
        .list_projects(query.category.as_deref())
        .await?;

    Ok(HttpResponse::Ok().json(projects))
}

#[instrument(skip(state, request))]
pub async fn create_project(
    state: web::Data<AppState>,
    request: web::Json<NewProjectRequest>,
) -> Result<impl Responder, AppError> {
    let project = state
        .project_handler
        .create_project(request.into_inner())
        .await?;

    Ok(HttpResponse::Created().json(project))
}

#[instrument(skip(state, request))]
pub async fn replace_project(
    state: web::Data<AppState>,
    project_id: web::Path<String>,
    request: web::Json<NewProjectRequest>,
) -> Result<impl Responder, AppError> {
    let project = state
        .project_handler
        .replace_project(&project_id, request.into_inner())
        .await?;

    Ok(HttpResponse::Ok().json(project))
}

#[instrument(skip(state))]
pub async fn delete_project(
    state: web::Data<AppState>,
    project_id: web::Path<String>,
) -> Result<impl Responder, AppError> {
    state.project_handler.delete_project(&project_id).await?;

    Ok(HttpResponse::NoContent().finish())
}
