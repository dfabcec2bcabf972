use crate::client::api::{ApiError, ProjectRecord};
use crate::client::notify::Toast;
use crate::client::view::{render_gallery, GalleryView};
use crate::entities::project::CATEGORY_ALL;

const FETCH_ERROR_TITLE: &str = "Error";
const FETCH_ERROR_DESCRIPTION: &str = "Failed to load projects. Please try again.";

/// The category filter shown above the project grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Filter {
    All,
    Ai,
    Web,
}

impl Filter {
    /// Every filter button, in display order.
    pub const ALL_FILTERS: [Filter; 3] = [Filter::All, Filter::Ai, Filter::Web];

    pub fn label(self) -> &'static str {
        match self {
            Filter::All => CATEGORY_ALL,
            Filter::Ai => "AI",
            Filter::Web => "Web",
        }
    }

    /// The `category` query parameter this filter translates to.
    /// `All` sends none at all.
    pub fn category(self) -> Option<&'static str> {
        match self {
            Filter::All => None,
            Filter::Ai => Some("AI"),
            Filter::Web => Some("Web"),
        }
    }
}

impl std::fmt::Display for Filter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Proof that a fetch was started. Exactly one settle call can consume
/// it, and only the most recently issued ticket still counts.
#[derive(Debug)]
pub struct FetchTicket {
    seq: u64,
    filter: Filter,
}

impl FetchTicket {
    pub fn filter(&self) -> Filter {
        self.filter
    }
}

/// State machine behind the projects page.
///
/// Filter changes while a fetch is in flight are allowed; each fetch
/// carries a sequence number and only the newest one may settle, so a
/// slow earlier response can never overwrite a later filter's results.
#[derive(Debug)]
pub struct ProjectBrowser {
    filter: Filter,
    loading: bool,
    projects: Option<Vec<ProjectRecord>>,
    issued: u64,
}

impl Default for ProjectBrowser {
    fn default() -> Self {
        ProjectBrowser::new()
    }
}

impl ProjectBrowser {
    pub fn new() -> Self {
        ProjectBrowser {
            filter: Filter::All,
            loading: false,
            projects: None,
            issued: 0,
        }
    }

    pub fn filter(&self) -> Filter {
        self.filter
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Projects from the last settled fetch. `None` until the first one
    /// lands.
    pub fn projects(&self) -> Option<&[ProjectRecord]> {
        self.projects.as_deref()
    }

    /// Starts the initial fetch when the page opens.
    pub fn open(&mut self) -> FetchTicket {
        self.begin(self.filter)
    }

    /// Switches the active filter and starts a fetch for it. Selecting
    /// the filter that is already active does nothing and returns `None`.
    pub fn select(&mut self, filter: Filter) -> Option<FetchTicket> {
        if filter == self.filter && self.issued > 0 {
            return None;
        }
        Some(self.begin(filter))
    }

    fn begin(&mut self, filter: Filter) -> FetchTicket {
        self.filter = filter;
        self.loading = true;
        self.issued += 1;
        FetchTicket {
            seq: self.issued,
            filter,
        }
    }

    /// Applies a finished fetch. Superseded tickets are discarded
    /// wholesale, success or failure, and leave every field untouched.
    /// A failed current fetch keeps the previous projects and yields
    /// exactly one error toast.
    pub fn settle(
        &mut self,
        ticket: FetchTicket,
        outcome: Result<Vec<ProjectRecord>, ApiError>,
    ) -> Option<Toast> {
        if ticket.seq != self.issued {
            return None;
        }

        self.loading = false;
        match outcome {
            Ok(projects) => {
                self.projects = Some(projects);
                None
            }
            Err(_) => Some(Toast::error(FETCH_ERROR_TITLE, FETCH_ERROR_DESCRIPTION)),
        }
    }

    /// What the projects section should show right now.
    pub fn view(&self) -> GalleryView {
        render_gallery(self.loading, self.projects.as_deref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(id: &str, category: &str) -> ProjectRecord {
        ProjectRecord {
            id: id.to_string(),
            title: format!("Project {id}"),
            description: "A description".to_string(),
            category: category.to_string(),
            technologies: vec!["Rust".to_string()],
            github_url: "https://github.com/example/p".to_string(),
            live_url: None,
            image_url: "https://images.example.com/p.png".to_string(),
            featured: false,
        }
    }

    #[test]
    fn only_all_maps_to_no_category_parameter() {
        assert_eq!(Filter::All.category(), None);
        assert_eq!(Filter::Ai.category(), Some("AI"));
        assert_eq!(Filter::Web.category(), Some("Web"));
    }

    #[test]
    fn filter_buttons_render_their_labels_in_order() {
        let labels: Vec<&str> = Filter::ALL_FILTERS.iter().map(|f| f.label()).collect();
        assert_eq!(labels, vec!["All", "AI", "Web"]);
        assert_eq!(Filter::Ai.to_string(), "AI");
    }

    #[test]
    fn starts_on_all_with_nothing_fetched() {
        let browser = ProjectBrowser::new();
        assert_eq!(browser.filter(), Filter::All);
        assert!(!browser.is_loading());
        assert!(browser.projects().is_none());
        assert_eq!(browser.view(), GalleryView::Loading);
    }

    #[test]
    fn open_then_success_shows_the_grid() {
        let mut browser = ProjectBrowser::new();
        let ticket = browser.open();
        assert!(browser.is_loading());
        assert_eq!(browser.view(), GalleryView::Loading);

        let toast = browser.settle(ticket, Ok(vec![record("1", "AI")]));
        assert!(toast.is_none());
        assert!(!browser.is_loading());
        assert_eq!(browser.projects().unwrap().len(), 1);
    }

    #[test]
    fn reselecting_the_active_filter_is_a_no_op() {
        let mut browser = ProjectBrowser::new();
        let ticket = browser.open();
        browser.settle(ticket, Ok(vec![]));

        assert!(browser.select(Filter::All).is_none());
        assert!(!browser.is_loading());
    }

    #[test]
    fn failure_keeps_previous_projects_and_emits_one_toast() {
        let mut browser = ProjectBrowser::new();
        let ticket = browser.open();
        browser.settle(ticket, Ok(vec![record("1", "AI")]));

        let ticket = browser.select(Filter::Web).unwrap();
        let toast = browser
            .settle(ticket, Err(ApiError::Status(500)))
            .expect("failure must produce a toast");
        assert_eq!(toast.title, "Error");
        assert_eq!(toast.description, "Failed to load projects. Please try again.");

        // Last good data stays; the view no longer shows a spinner.
        assert!(!browser.is_loading());
        assert_eq!(browser.projects().unwrap().len(), 1);
        assert_eq!(browser.filter(), Filter::Web);
    }

    #[test]
    fn stale_response_cannot_overwrite_a_newer_filter() {
        let mut browser = ProjectBrowser::new();
        let slow = browser.open();
        let fast = browser.select(Filter::Ai).unwrap();

        // The newer fetch lands first.
        assert!(browser.settle(fast, Ok(vec![record("2", "AI")])).is_none());
        assert!(!browser.is_loading());

        // The superseded one arrives late and is discarded.
        assert!(browser
            .settle(slow, Ok(vec![record("1", "AI"), record("3", "Web")]))
            .is_none());
        let projects = browser.projects().unwrap();
        assert_eq!(projects.len(), 1);
        assert_eq!(projects[0].id, "2");
    }

    #[test]
    fn stale_failure_is_discarded_without_a_toast() {
        let mut browser = ProjectBrowser::new();
        let slow = browser.open();
        let fast = browser.select(Filter::Web).unwrap();

        browser.settle(fast, Ok(vec![]));
        assert!(browser.settle(slow, Err(ApiError::Status(500))).is_none());
    }

    #[test]
    fn loading_stays_on_while_the_newest_fetch_is_outstanding() {
        let mut browser = ProjectBrowser::new();
        let slow = browser.open();
        let _pending = browser.select(Filter::Ai).unwrap();

        browser.settle(slow, Ok(vec![record("1", "AI")]));
        assert!(browser.is_loading(), "stale settle must not clear loading");
        assert_eq!(browser.view(), GalleryView::Loading);
    }

    #[test]
    fn empty_results_render_the_empty_state() {
        let mut browser = ProjectBrowser::new();
        let ticket = browser.open();
        browser.settle(ticket, Ok(vec![]));
        assert_eq!(browser.view(), GalleryView::Empty);
    }
}
