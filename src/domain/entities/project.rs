use std::borrow::Cow;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::{Validate, ValidationError};

// ───── Constants ──────────────────────────────────────────────────────
const MIN_TITLE_LENGTH: u64 = 3;
const MAX_TITLE_LENGTH: u64 = 120;
const MIN_DESCRIPTION_LENGTH: u64 = 10;
const MAX_DESCRIPTION_LENGTH: u64 = 2000;
const MIN_CATEGORY_LENGTH: u64 = 2;
const MAX_CATEGORY_LENGTH: u64 = 40;
const MAX_TECHNOLOGIES: usize = 12;
const MAX_TECHNOLOGY_LENGTH: usize = 40;

/// Pseudo-category that turns category filtering off. Sent by clients as
/// `?category=All`, treated the same as omitting the parameter.
pub const CATEGORY_ALL: &str = "All";

// ───── Database Models ────────────────────────────────────────────────

/// A published portfolio project exactly as it is stored and served.
///
/// Ids are opaque strings on the wire. The API generates UUIDs for new
/// records but never requires callers to parse them back.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Project {
    pub id: String,
    pub title: String,
    pub description: String,
    pub category: String,
    pub technologies: Vec<String>,
    pub github_url: String,
    pub live_url: Option<String>,
    pub image_url: String,
    pub featured: bool,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug)]
pub struct ProjectInsert {
    pub title: String,
    pub description: String,
    pub category: String,
    pub technologies: Vec<String>,
    pub github_url: String,
    pub live_url: Option<String>,
    pub image_url: String,
    pub featured: bool,
    pub created_at: DateTime<Utc>,
}

impl ProjectInsert {
    pub fn into_project(self, id: String) -> Project {
        Project {
            id,
            title: self.title,
            description: self.description,
            category: self.category,
            technologies: self.technologies,
            github_url: self.github_url,
            live_url: self.live_url,
            image_url: self.image_url,
            featured: self.featured,
            created_at: self.created_at,
        }
    }

    pub fn fresh_id() -> String {
        Uuid::new_v4().to_string()
    }
}

// ───── API Request Models ─────────────────────────────────────────────

/// Payload for creating a project, and for replacing one via PUT.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct NewProjectRequest {
    #[validate(
        length(min = MIN_TITLE_LENGTH, max = MAX_TITLE_LENGTH),
        custom(function = "validate_title")
    )]
    pub title: String,

    #[validate(length(min = MIN_DESCRIPTION_LENGTH, max = MAX_DESCRIPTION_LENGTH))]
    pub description: String,

    #[validate(
        length(min = MIN_CATEGORY_LENGTH, max = MAX_CATEGORY_LENGTH),
        custom(function = "validate_category")
    )]
    pub category: String,

    #[validate(custom(function = "validate_technologies"))]
    pub technologies: Vec<String>,

    #[validate(custom(function = "validate_url"))]
    pub github_url: String,

    #[validate(custom(function = "validate_optional_url"))]
    pub live_url: Option<String>,

    #[validate(custom(function = "validate_url"))]
    pub image_url: String,

    #[serde(default)]
    pub featured: bool,
}

impl TryFrom<NewProjectRequest> for ProjectInsert {
    type Error = crate::errors::AppError;

    fn try_from(request: NewProjectRequest) -> Result<Self, Self::Error> {
        request.validate()?;

        Ok(ProjectInsert {
            title: request.title,
            description: request.description,
            category: request.category,
            technologies: request.technologies,
            github_url: request.github_url,
            live_url: request.live_url,
            image_url: request.image_url,
            featured: request.featured,
            created_at: Utc::now(),
        })
    }
}

// ───── Validators ─────────────────────────────────────────────────────

pub fn validate_title(title: &str) -> Result<(), ValidationError> {
    if title.trim().len() != title.len() {
        return Err(new_validation_error(
            "title_whitespace",
            "Title must not have leading or trailing whitespace",
        ));
    }
    Ok(())
}

pub fn validate_category(category: &str) -> Result<(), ValidationError> {
    if category == CATEGORY_ALL {
        return Err(new_validation_error(
            "reserved_category",
            "\"All\" is reserved for the unfiltered listing",
        ));
    }
    if category.trim().len() != category.len() {
        return Err(new_validation_error(
            "category_whitespace",
            "Category must not have leading or trailing whitespace",
        ));
    }
    Ok(())
}

pub fn validate_technologies(technologies: &[String]) -> Result<(), ValidationError> {
    if technologies.len() > MAX_TECHNOLOGIES {
        return Err(new_validation_error(
            "too_many_technologies",
            "Too many technologies provided",
        ));
    }
    for technology in technologies {
        if technology.is_empty() || technology.len() > MAX_TECHNOLOGY_LENGTH {
            return Err(new_validation_error(
                "invalid_technology_length",
                "Technology name length must be within allowed range",
            ));
        }
    }
    Ok(())
}

pub fn validate_url(url: &str) -> Result<(), ValidationError> {
    match url::Url::parse(url) {
        Ok(parsed) => {
            if parsed.scheme() == "http" || parsed.scheme() == "https" {
                Ok(())
            } else {
                Err(new_validation_error(
                    "invalid_url_scheme",
                    "URL must start with http:// or https://",
                ))
            }
        }
        Err(_) => Err(new_validation_error("invalid_url", "Invalid URL format")),
    }
}

pub fn validate_optional_url(url: &str) -> Result<(), ValidationError> {
    validate_url(url)
}

fn new_validation_error(code: &'static str, msg: &'static str) -> ValidationError {
    let mut err = ValidationError::new(code);
    err.message = Some(Cow::Borrowed(msg));
    err
}
