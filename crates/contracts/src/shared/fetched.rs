//! Outcome of a fetch against the finance API
//!
//! Views never see transport errors directly: a request resolves to either
//! `Loaded` or `Failed`, and the view decides how to present the failure
//! (usually as an empty table or a missing filter entry).

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", content = "data", rename_all = "snake_case")]
pub enum Fetched<T> {
    Loaded(T),
    Failed(String),
}

impl<T> Fetched<T> {
    pub fn from_result<E: std::fmt::Display>(result: Result<T, E>) -> Self {
        match result {
            Ok(v) => Self::Loaded(v),
            Err(e) => Self::Failed(e.to_string()),
        }
    }

    pub fn loaded(self) -> Option<T> {
        match self {
            Self::Loaded(v) => Some(v),
            Self::Failed(_) => None,
        }
    }

    pub fn failure(&self) -> Option<&str> {
        match self {
            Self::Loaded(_) => None,
            Self::Failed(reason) => Some(reason),
        }
    }

    /// Value when loaded; otherwise log the failure and fall back to the default
    pub fn unwrap_or_default_logged(self, context: &str) -> T
    where
        T: Default,
    {
        match self {
            Self::Loaded(v) => v,
            Self::Failed(reason) => {
                log::warn!("{}: {}", context, reason);
                T::default()
            }
        }
    }

    /// Like `loaded`, logging the failure
    pub fn loaded_or_log(self, context: &str) -> Option<T> {
        match self {
            Self::Loaded(v) => Some(v),
            Self::Failed(reason) => {
                log::warn!("{}: {}", context, reason);
                None
            }
        }
    }
}

impl<T, E: std::fmt::Display> From<Result<T, E>> for Fetched<T> {
    fn from(result: Result<T, E>) -> Self {
        Self::from_result(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn failed_list_degrades_to_empty() {
        let fetched: Fetched<Vec<i32>> = Fetched::from_result(Err::<Vec<i32>, _>("HTTP error: 500"));
        assert_eq!(fetched.failure(), Some("HTTP error: 500"));
        assert!(fetched.unwrap_or_default_logged("records").is_empty());
    }

    #[test]
    fn failed_value_degrades_to_absent() {
        let fetched: Fetched<&str> = Err::<&str, _>("HTTP error: 404").into();
        assert_eq!(fetched.loaded_or_log("open period"), None);
    }

    #[test]
    fn loaded_passes_through() {
        let fetched = Fetched::<_>::from_result(Ok::<_, String>(vec![1, 2]));
        assert_eq!(fetched.failure(), None);
        assert_eq!(fetched.loaded(), Some(vec![1, 2]));
    }
}
