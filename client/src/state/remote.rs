//! Load state for data fetched on mount.

#[cfg(test)]
#[path = "remote_test.rs"]
mod remote_test;

/// A value that is being fetched, has arrived, or failed with a display message.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum Remote<T> {
    #[default]
    Loading,
    Ready(T),
    Failed(String),
}

impl<T> Remote<T> {
    pub fn ready(&self) -> Option<&T> {
        match self {
            Self::Ready(value) => Some(value),
            _ => None,
        }
    }

    /// Fold a background refresh into the current state. A failure keeps a
    /// value that already arrived; otherwise the result replaces it.
    #[must_use]
    pub fn refreshed<E: std::fmt::Display>(self, result: Result<T, E>) -> Self {
        match (self, result) {
            (previous @ Self::Ready(_), Err(_)) => previous,
            (_, result) => result.into(),
        }
    }
}

impl<T, E: std::fmt::Display> From<Result<T, E>> for Remote<T> {
    fn from(result: Result<T, E>) -> Self {
        match result {
            Ok(value) => Self::Ready(value),
            Err(e) => Self::Failed(e.to_string()),
        }
    }
}
