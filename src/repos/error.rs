/**
 * Responsibility
 * - The meaning a repo reports upward
 */
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RepoError {
    #[error("db error")]
    Db(#[from] sqlx::Error),
    #[error("corrupt row: {0}")]
    Corrupt(&'static str),
}
