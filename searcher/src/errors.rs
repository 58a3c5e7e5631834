use thiserror::Error;

/// Error produced when a search fails.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SearchError {
    #[error("No goal reachable, search exhausted after expanding {expanded} states")]
    Exhausted { expanded: usize },
}

/// Result when a search method might fail.
pub type Result<T> = std::result::Result<T, SearchError>;
