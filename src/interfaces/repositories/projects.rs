use std::sync::Arc;

use async_trait::async_trait;

use crate::{
    entities::project::{Project, ProjectInsert},
    errors::AppError,
    repositories::sqlx_repo::SqlxProjectRepo,
};

const PROJECT_COLUMNS: &str = "id, title, description, category, technologies, \
     github_url, live_url, image_url, featured, created_at";

#[async_trait]
pub trait ProjectRepository: Send + Sync {
    /// Returns projects newest-first. `category` narrows the listing when
    /// present; resolution of the `"All"` pseudo-category happens in the
    /// use case layer, so repositories only ever see real categories.
    async fn list_projects(&self, category: Option<&str>) -> Result<Vec<Project>, AppError>;
    async fn create_project(&self, insert: &ProjectInsert) -> Result<Project, AppError>;
    async fn replace_project(
        &self,
        id: &str,
        changes: &ProjectInsert,
    ) -> Result<Project, AppError>;
    async fn delete_project(&self, id: &str) -> Result<(), AppError>;
    async fn check_connection(&self) -> Result<(), AppError>;
}

#[async_trait]
impl<R: ProjectRepository + ?Sized> ProjectRepository for Arc<R> {
    async fn list_projects(&self, category: Option<&str>) -> Result<Vec<Project>, AppError> {
        (**self).list_projects(category).await
    }

    async fn create_project(&self, insert: &ProjectInsert) -> Result<Project, AppError> {
        (**self).create_project(insert).await
    }

    async fn replace_project(
        &self,
        id: &str,
        changes: &ProjectInsert,
    ) -> Result<Project, AppError> {
        (**self).replace_project(id, changes).await
    }

    async fn delete_project(&self, id: &str) -> Result<(), AppError> {
        (**self).delete_project(id).await
    }

    async fn check_connection(&self) -> Result<(), AppError> {
        (**self).check_connection().await
    }
}

impl SqlxProjectRepo {
    pub fn new(pool: sqlx::PgPool) -> Self {
        SqlxProjectRepo { pool }
    }
}

#[async_trait]
impl ProjectRepository for SqlxProjectRepo {
    async fn list_projects(&self, category: Option<&str>) -> Result<Vec<Project>, AppError> {
        let projects = match category {
            Some(category) => {
                sqlx::query_as::<_, Project>(&format!(
                    "SELECT {PROJECT_COLUMNS} FROM projects \
                     WHERE category = $1 ORDER BY created_at DESC"
                ))
                .bind(category)
                .fetch_all(&self.pool)
                .await?
            }
            None => {
                sqlx::query_as::<_, Project>(&format!(
                    "SELECT {PROJECT_COLUMNS} FROM projects ORDER BY created_at DESC"
                ))
                .fetch_all(&self.pool)
                .await?
            }
        };

        Ok(projects)
    }

    async fn create_project(&self, insert: &ProjectInsert) -> Result<Project, AppError> {
        let project = sqlx::query_as::<_, Project>(&format!(
            "INSERT INTO projects \
             (id, title, description, category, technologies, github_url, \
              live_url, image_url, featured, created_at) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10) \
             RETURNING {PROJECT_COLUMNS}"
        ))
        .bind(ProjectInsert::fresh_id())
        .bind(&insert.title)
        .bind(&insert.description)
        .bind(&insert.category)
        .bind(&insert.technologies)
        .bind(&insert.github_url)
        .bind(&insert.live_url)
        .bind(&insert.image_url)
        .bind(insert.featured)
        .bind(insert.created_at)
        .fetch_one(&self.pool)
        .await?;

        Ok(project)
    }

    async fn replace_project(
        &self,
        id: &str,
        changes: &ProjectInsert,
    ) -> Result<Project, AppError> {
        // created_at stays as it was; a replace is not a re-publish.
        let project = sqlx::query_as::<_, Project>(&format!(
            "UPDATE projects SET \
             title = $1, description = $2, category = $3, technologies = $4, \
             github_url = $5, live_url = $6, image_url = $7, featured = $8 \
             WHERE id = $9 \
             RETURNING {PROJECT_COLUMNS}"
        ))
        .bind(&changes.title)
        .bind(&changes.description)
        .bind(&changes.category)
        .bind(&changes.technologies)
        .bind(&changes.github_url)
        .bind(&changes.live_url)
        .bind(&changes.image_url)
        .bind(changes.featured)
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| AppError::NotFound("Project not found".into()))?;

        Ok(project)
    }

    async fn delete_project(&self, id: &str) -> Result<(), AppError> {
        sqlx::query("DELETE FROM projects WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map(|result| {
                if result.rows_affected() == 0 {
                    Err(AppError::NotFound("Project not found".into()))
                } else {
                    Ok(())
                }
            })?
    }

    async fn check_connection(&self) -> Result<(), AppError> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}
