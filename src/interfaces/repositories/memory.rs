use std::sync::Arc;

use async_trait::async_trait;
use chrono::{Duration, Utc};
use parking_lot::RwLock;

use crate::{
    entities::{
        contact_me::ContactMessage,
        project::{Project, ProjectInsert},
    },
    errors::AppError,
    repositories::{contact_me::ContactMessageRepository, projects::ProjectRepository},
};

/// Storage backend used when no database is configured, and by the
/// integration tests. Cloning shares the underlying data.
#[derive(Clone, Default)]
pub struct MemoryStore {
    inner: Arc<StoreInner>,
}

#[derive(Default)]
struct StoreInner {
    projects: RwLock<Vec<Project>>,
    messages: RwLock<Vec<ContactMessage>>,
}

impl MemoryStore {
    pub fn empty() -> Self {
        MemoryStore::default()
    }

    /// A store pre-loaded with the showcase projects the site launched with.
    pub fn seeded() -> Self {
        let store = MemoryStore::empty();
        *store.inner.projects.write() = starter_projects();
        store
    }
}

#[async_trait]
impl ProjectRepository for MemoryStore {
    async fn list_projects(&self, category: Option<&str>) -> Result<Vec<Project>, AppError> {
        let mut projects: Vec<Project> = self
            .inner
            .projects
            .read()
            .iter()
            .filter(|p| category.is_none_or(|c| p.category == c))
            .cloned()
            .collect();

        projects.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(projects)
    }

    async fn create_project(&self, insert: &ProjectInsert) -> Result<Project, AppError> {
        let project = Project {
            id: ProjectInsert::fresh_id(),
            title: insert.title.clone(),
            description: insert.description.clone(),
            category: insert.category.clone(),
            technologies: insert.technologies.clone(),
            github_url: insert.github_url.clone(),
            live_url: insert.live_url.clone(),
            image_url: insert.image_url.clone(),
            featured: insert.featured,
            created_at: insert.created_at,
        };

        self.inner.projects.write().push(project.clone());
        Ok(project)
    }

    async fn replace_project(
        &self,
        id: &str,
        changes: &ProjectInsert,
    ) -> Result<Project, AppError> {
        let mut projects = self.inner.projects.write();
        let project = projects
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or_else(|| AppError::NotFound("Project not found".into()))?;

        project.title = changes.title.clone();
        project.description = changes.description.clone();
        project.category = changes.category.clone();
        project.technologies = changes.technologies.clone();
        project.github_url = changes.github_url.clone();
        project.live_url = changes.live_url.clone();
        project.image_url = changes.image_url.clone();
        project.featured = changes.featured;

        Ok(project.clone())
    }

    async fn delete_project(&self, id: &str) -> Result<(), AppError> {
        let mut projects = self.inner.projects.write();
        let before = projects.len();
        projects.retain(|p| p.id != id);

        if projects.len() == before {
            Err(AppError::NotFound("Project not found".into()))
        } else {
            Ok(())
        }
    }

    async fn check_connection(&self) -> Result<(), AppError> {
        Ok(())
    }
}

#[async_trait]
impl ContactMessageRepository for MemoryStore {
    async fn create_contact_message(
        &self,
        message: &ContactMessage,
    ) -> Result<ContactMessage, AppError> {
        self.inner.messages.write().push(message.clone());
        Ok(message.clone())
    }

    async fn list_contact_messages(&self) -> Result<Vec<ContactMessage>, AppError> {
        let mut messages: Vec<ContactMessage> =
            self.inner.messages.read().iter().cloned().collect();
        messages.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(messages)
    }
}

/// The three projects the portfolio shipped with. Creation times are
/// staggered so the newest-first listing preserves this order.
fn starter_projects() -> Vec<Project> {
    let now = Utc::now();

    vec![
        Project {
            id: "1".to_string(),
            title: "Adaptive AI Tutor".to_string(),
            description: "Design a clean student dashboard for an Adaptive AI Tutor with \
                          intelligent learning paths and personalized content recommendations."
                .to_string(),
            category: "AI".to_string(),
            technologies: vec![
                "React".to_string(),
                "Python".to_string(),
                "TensorFlow".to_string(),
                "Node.js".to_string(),
            ],
            github_url: "https://github.com/santhoshkrishna-2004/Adaptive-Tutor".to_string(),
            live_url: None,
            image_url:
                "https://images.unsplash.com/photo-1522202176988-66273c2fd55f?w=400&h=250&fit=crop"
                    .to_string(),
            featured: true,
            created_at: now,
        },
        Project {
            id: "2".to_string(),
            title: "Sketch to Image".to_string(),
            description: "Converts hand-drawn sketches into realistic images using deep \
                          learning models and advanced computer vision techniques."
                .to_string(),
            category: "AI".to_string(),
            technologies: vec![
                "Python".to_string(),
                "PyTorch".to_string(),
                "OpenCV".to_string(),
                "Flask".to_string(),
            ],
            github_url: "https://github.com/santhoshkrishna-2004/Sketch-To-Image-Web-App"
                .to_string(),
            live_url: None,
            image_url:
                "https://images.unsplash.com/photo-1581291518857-4e27b48ff24e?w=400&h=250&fit=crop"
                    .to_string(),
            featured: true,
            created_at: now - Duration::seconds(1),
        },
        Project {
            id: "3".to_string(),
            title: "Blood Bank Management System".to_string(),
            description: "Django-based comprehensive application for managing blood donations, \
                          requests, donor authentication, and inventory tracking."
                .to_string(),
            category: "Web".to_string(),
            technologies: vec![
                "Django".to_string(),
                "Python".to_string(),
                "PostgreSQL".to_string(),
                "Bootstrap".to_string(),
            ],
            github_url: "https://github.com/santhoshkrishna-2004/RTP-Blood-Bank-Management"
                .to_string(),
            live_url: None,
            image_url:
                "https://images.unsplash.com/photo-1559757148-5c350d0d3c56?w=400&h=250&fit=crop"
                    .to_string(),
            featured: false,
            created_at: now - Duration::seconds(2),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn insert_for(category: &str, title: &str) -> ProjectInsert {
        ProjectInsert {
            title: title.to_string(),
            description: "A sufficiently descriptive project summary.".to_string(),
            category: category.to_string(),
            technologies: vec!["Rust".to_string()],
            github_url: "https://github.com/example/demo".to_string(),
            live_url: None,
            image_url: "https://images.example.com/demo.png".to_string(),
            featured: false,
            created_at: Utc::now(),
        }
    }

    #[tokio::test]
    async fn seeded_store_lists_newest_first() {
        let store = MemoryStore::seeded();
        let all = store.list_projects(None).await.unwrap();
        let titles: Vec<&str> = all.iter().map(|p| p.title.as_str()).collect();
        assert_eq!(
            titles,
            vec![
                "Adaptive AI Tutor",
                "Sketch to Image",
                "Blood Bank Management System"
            ]
        );
    }

    #[tokio::test]
    async fn category_filter_only_returns_matches() {
        let store = MemoryStore::seeded();
        let web = store.list_projects(Some("Web")).await.unwrap();
        assert_eq!(web.len(), 1);
        assert_eq!(web[0].title, "Blood Bank Management System");

        let none = store.list_projects(Some("Mobile")).await.unwrap();
        assert!(none.is_empty());
    }

    #[tokio::test]
    async fn created_projects_appear_in_listing() {
        let store = MemoryStore::empty();
        let created = store
            .create_project(&insert_for("Web", "Gallery CMS"))
            .await
            .unwrap();

        let all = store.list_projects(None).await.unwrap();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].id, created.id);
    }

    #[tokio::test]
    async fn replace_keeps_id_and_creation_time() {
        let store = MemoryStore::seeded();
        let changes = insert_for("Web", "Renamed Project");

        let updated = store.replace_project("3", &changes).await.unwrap();
        assert_eq!(updated.id, "3");
        assert_eq!(updated.title, "Renamed Project");

        let missing = store.replace_project("nope", &changes).await;
        assert!(matches!(missing, Err(AppError::NotFound(_))));
    }

    #[tokio::test]
    async fn delete_removes_the_project() {
        let store = MemoryStore::seeded();
        store.delete_project("2").await.unwrap();

        let all = store.list_projects(None).await.unwrap();
        assert_eq!(all.len(), 2);
        assert!(all.iter().all(|p| p.id != "2"));

        let missing = store.delete_project("2").await;
        assert!(matches!(missing, Err(AppError::NotFound(_))));
    }

    #[tokio::test]
    async fn contact_messages_round_trip() {
        let store = MemoryStore::empty();
        let message = ContactMessage {
            id: "m1".to_string(),
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            subject: "Hello".to_string(),
            message: "Nice portfolio!".to_string(),
            created_at: Utc::now(),
        };

        store.create_contact_message(&message).await.unwrap();
        let listed = store.list_contact_messages().await.unwrap();
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].email, "ada@example.com");
    }
}
