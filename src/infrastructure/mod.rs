pub mod db;
pub mod limiter;
