use thiserror::Error;

/// Errors the router surfaces to its caller. "No viable trade" is not an
/// error — the facade returns `None` for that — so the only hard failure is
/// a query the caller should have rejected before invoking the router.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum RouterError {
    #[error("invalid query: {0}")]
    InvalidQuery(String),
}
