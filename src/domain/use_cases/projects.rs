use crate::{
    entities::project::{NewProjectRequest, Project, ProjectInsert, CATEGORY_ALL},
    errors::AppError,
    repositories::projects::ProjectRepository,
};

pub struct ProjectHandler<R>
where
    R: ProjectRepository,
{
    pub project_repo: R,
}

impl<R> ProjectHandler<R>
where
    R: ProjectRepository,
{
    pub fn new(project_repo: R) -> Self {
        ProjectHandler { project_repo }
    }

    /// Lists projects newest-first, optionally narrowed to one category.
    ///
    /// The `"All"` pseudo-category and blank values mean "no filter", so
    /// `?category=All` returns exactly what an unfiltered request does.
    pub async fn list_projects(&self, category: Option<&str>) -> Result<Vec<Project>, AppError> {
        let category = category
            .map(str::trim)
            .filter(|c| !c.is_empty() && *c != CATEGORY_ALL);

        self.project_repo.list_projects(category).await
    }

    /// Validates and stores a new project, returning the stored record.
    pub async fn create_project(&self, request: NewProjectRequest) -> Result<Project, AppError> {
        let insert = ProjectInsert::try_from(request)?;

        self.project_repo.create_project(&insert).await
    }

    /// Replaces every editable field of an existing project.
    pub async fn replace_project(
        &self,
        id: &str,
        request: NewProjectRequest,
    ) -> Result<Project, AppError> {
        let changes = ProjectInsert::try_from(request)?;

        self.project_repo.replace_project(id, &changes).await
    }

    /// Deletes a project by its ID
    pub async fn delete_project(&self, id: &str) -> Result<(), AppError> {
        self.project_repo.delete_project(id).await
    }
}
