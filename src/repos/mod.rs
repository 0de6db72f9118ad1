pub mod brew_repo;
pub mod config_repo;
pub mod error;
pub mod faq_repo;
pub mod forum_repo;
pub mod notification_repo;
