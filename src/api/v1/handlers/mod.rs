pub mod brews;
pub mod faq;
pub mod forum;
pub mod health;
pub mod notifications;
