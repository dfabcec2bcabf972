//! Headless client for the portfolio site.
//!
//! Holds the page state machines (project browser, contact form), the
//! typed view models a rendering shell consumes, and the HTTP client
//! they talk through. No rendering happens here; a UI layer maps
//! [`view::GalleryView`] and friends onto whatever widget toolkit it
//! uses.

pub mod api;
pub mod browser;
pub mod contact_form;
pub mod gallery;
pub mod notify;
pub mod view;
