/**
 * Responsibility
 * - Bundle the extractors handlers are allowed to see
 */
mod locale;
mod session;

pub use locale::RequestLocale;
pub use session::{MaybeSession, Session};
