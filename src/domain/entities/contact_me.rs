use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

/// Visitor-submitted contact form payload.
///
/// `Serialize` is derived as well because the bundled API client posts
/// this exact shape to `/api/contact`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct NewContactMessage {
    #[validate(length(min = 2, max = 100))]
    pub name: String,

    #[validate(email)]
    pub email: String,

    #[validate(length(min = 2, max = 150))]
    pub subject: String,

    #[validate(length(min = 5, max = 2000))]
    pub message: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct ContactMessage {
    pub id: String,
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
    pub created_at: DateTime<Utc>,
}

impl NewContactMessage {
    pub fn into_message(self) -> ContactMessage {
        ContactMessage {
            id: Uuid::new_v4().to_string(),
            name: self.name,
            email: self.email,
            subject: self.subject,
            message: self.message,
            created_at: Utc::now(),
        }
    }
}
