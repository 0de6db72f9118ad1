/*
 * Responsibility
 * - Crate surface: module wiring only
 * - Exposed as a library so integration tests can build routers directly
 */
pub mod api;
pub mod app;
pub mod config;
pub mod domain;
pub mod error;
pub mod middleware;
pub mod repos;
pub mod services;
pub mod state;
