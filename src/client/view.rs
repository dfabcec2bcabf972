use serde::Serialize;

use crate::client::api::ProjectRecord;

/// Shown when a filter matches nothing.
pub const EMPTY_STATE_MESSAGE: &str = "No projects found for the selected filter.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CategoryIcon {
    Brain,
    Globe,
    Code,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BadgeTone {
    Purple,
    Blue,
    Green,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryBadge {
    pub label: String,
    pub icon: CategoryIcon,
    pub tone: BadgeTone,
}

/// Icon and color for a category label. Total on purpose: a category
/// added on the server before this client learns about it still gets a
/// sensible badge instead of breaking the page.
pub fn category_badge(category: &str) -> CategoryBadge {
    let (icon, tone) = match category {
        "AI" => (CategoryIcon::Brain, BadgeTone::Purple),
        "Web" => (CategoryIcon::Globe, BadgeTone::Blue),
        _ => (CategoryIcon::Code, BadgeTone::Green),
    };

    CategoryBadge {
        label: category.to_string(),
        icon,
        tone,
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LinkAction {
    pub label: &'static str,
    pub href: String,
}

/// Everything a project card displays, precomputed so the rendering
/// shell stays logic-free.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProjectCard {
    pub id: String,
    pub title: String,
    pub description: String,
    pub badge: CategoryBadge,
    pub technologies: Vec<String>,
    pub image_url: String,
    pub featured: bool,
    pub code_link: LinkAction,
    pub live_link: Option<LinkAction>,
}

impl From<&ProjectRecord> for ProjectCard {
    fn from(record: &ProjectRecord) -> Self {
        ProjectCard {
            id: record.id.clone(),
            title: record.title.clone(),
            description: record.description.clone(),
            badge: category_badge(&record.category),
            technologies: record.technologies.clone(),
            image_url: record.image_url.clone(),
            featured: record.featured,
            code_link: LinkAction {
                label: "Code",
                href: record.github_url.clone(),
            },
            live_link: record.live_url.as_ref().map(|href| LinkAction {
                label: "Live",
                href: href.clone(),
            }),
        }
    }
}

/// What the projects section shows at any moment. Serializes as a
/// `state` tag with the card list under a separate `projects` key.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "state", content = "projects", rename_all = "lowercase")]
pub enum GalleryView {
    /// Skeleton placeholders; covers both "fetch in flight" and
    /// "nothing fetched yet".
    Loading,
    Grid(Vec<ProjectCard>),
    /// The active filter matched nothing; render [`EMPTY_STATE_MESSAGE`].
    Empty,
}

pub fn render_gallery(loading: bool, projects: Option<&[ProjectRecord]>) -> GalleryView {
    if loading {
        return GalleryView::Loading;
    }

    match projects {
        None => GalleryView::Loading,
        Some([]) => GalleryView::Empty,
        Some(list) => GalleryView::Grid(list.iter().map(ProjectCard::from).collect()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record_with(category: &str, live_url: Option<&str>) -> ProjectRecord {
        ProjectRecord {
            id: "1".to_string(),
            title: "Adaptive AI Tutor".to_string(),
            description: "Personalized learning platform".to_string(),
            category: category.to_string(),
            technologies: vec!["Python".to_string()],
            github_url: "https://github.com/example/tutor".to_string(),
            live_url: live_url.map(str::to_string),
            image_url: "https://images.example.com/tutor.png".to_string(),
            featured: true,
        }
    }

    #[test]
    fn known_categories_get_their_own_badge() {
        let ai = category_badge("AI");
        assert_eq!(ai.icon, CategoryIcon::Brain);
        assert_eq!(ai.tone, BadgeTone::Purple);

        let web = category_badge("Web");
        assert_eq!(web.icon, CategoryIcon::Globe);
        assert_eq!(web.tone, BadgeTone::Blue);
    }

    #[test]
    fn unknown_category_falls_back_instead_of_failing() {
        let badge = category_badge("Robotics");
        assert_eq!(badge.label, "Robotics");
        assert_eq!(badge.icon, CategoryIcon::Code);
        assert_eq!(badge.tone, BadgeTone::Green);
    }

    #[test]
    fn card_links_depend_on_live_url() {
        let with_live = ProjectCard::from(&record_with("AI", Some("https://demo.example.com")));
        assert_eq!(with_live.code_link.label, "Code");
        assert_eq!(
            with_live.live_link.as_ref().unwrap().href,
            "https://demo.example.com"
        );

        let without_live = ProjectCard::from(&record_with("AI", None));
        assert!(without_live.live_link.is_none());
    }

    #[test]
    fn gallery_states_cover_loading_empty_and_grid() {
        assert_eq!(render_gallery(true, None), GalleryView::Loading);
        assert_eq!(render_gallery(false, None), GalleryView::Loading);
        assert_eq!(render_gallery(false, Some(&[])), GalleryView::Empty);

        let records = [record_with("AI", None)];
        match render_gallery(false, Some(&records)) {
            GalleryView::Grid(cards) => {
                assert_eq!(cards.len(), 1);
                assert!(cards[0].featured);
            }
            other => panic!("expected grid, got {other:?}"),
        }
    }

    #[test]
    fn every_gallery_state_serializes_for_the_shell() {
        let loading = serde_json::to_value(GalleryView::Loading).unwrap();
        assert_eq!(loading["state"], "loading");

        let records = [record_with("AI", None)];
        let grid = serde_json::to_value(render_gallery(false, Some(&records))).unwrap();
        assert_eq!(grid["state"], "grid");
        assert_eq!(grid["projects"][0]["title"], "Adaptive AI Tutor");
        assert_eq!(grid["projects"][0]["badge"]["icon"], "brain");

        let empty = serde_json::to_value(render_gallery(false, Some(&[]))).unwrap();
        assert_eq!(empty["state"], "empty");
    }
}
