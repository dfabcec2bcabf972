pub mod contact_me;
pub mod memory;
pub mod projects;
pub mod sqlx_repo;
