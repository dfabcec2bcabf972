use chrono::{DateTime, Utc};
use once_cell::sync::Lazy;

/// Process start time, read by the health endpoint to report uptime.
pub static START_TIME: Lazy<DateTime<Utc>> = Lazy::new(Utc::now);
