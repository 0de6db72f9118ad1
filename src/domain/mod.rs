/*
 * Responsibility
 * - Pure domain logic: roles, content access policy, locale fallback,
 *   rating aggregation, nav path matching
 * - No axum/sqlx types in here; handlers and repos adapt at the edges
 */
pub mod access;
pub mod locale;
pub mod nav;
pub mod rating;
pub mod role;
