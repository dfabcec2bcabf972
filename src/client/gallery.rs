use crate::client::api::ProjectDirectory;
use crate::client::browser::{FetchTicket, Filter, ProjectBrowser};
use crate::client::notify::{Toast, ToastTray};
use crate::client::view::GalleryView;

/// Drives [`ProjectBrowser`] against a [`ProjectDirectory`], collecting
/// toasts for the rendering shell.
pub struct Gallery<D: ProjectDirectory> {
    browser: ProjectBrowser,
    directory: D,
    toasts: ToastTray,
}

impl<D: ProjectDirectory> Gallery<D> {
    pub fn new(directory: D) -> Self {
        Gallery {
            browser: ProjectBrowser::new(),
            directory,
            toasts: ToastTray::new(),
        }
    }

    /// Runs the initial fetch for the default filter.
    pub async fn open(&mut self) {
        let ticket = self.browser.open();
        self.run(ticket).await;
    }

    /// Switches filters and fetches. Returns `false` when the filter
    /// was already active and nothing happened.
    pub async fn select_filter(&mut self, filter: Filter) -> bool {
        match self.browser.select(filter) {
            Some(ticket) => {
                self.run(ticket).await;
                true
            }
            None => false,
        }
    }

    async fn run(&mut self, ticket: FetchTicket) {
        let outcome = self.directory.list_projects(ticket.filter()).await;
        if let Some(toast) = self.browser.settle(ticket, outcome) {
            self.toasts.push(toast);
        }
    }

    pub fn view(&self) -> GalleryView {
        self.browser.view()
    }

    pub fn browser(&self) -> &ProjectBrowser {
        &self.browser
    }

    pub fn toasts(&self) -> &[Toast] {
        self.toasts.as_slice()
    }

    pub fn toasts_mut(&mut self) -> &mut ToastTray {
        &mut self.toasts
    }
}
