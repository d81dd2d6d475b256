use thiserror::Error;

/// The payload of a [`Result`](crate::Result) was requested while it holds
/// a failure.
///
/// Carries the stored error so the caller can still inspect it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
#[error("bad expected access")]
pub struct BadAccess<E> {
    error: E,
}

impl<E> BadAccess<E> {
    pub const fn new(error: E) -> Self {
        Self { error }
    }

    /// The error held by the result that was accessed.
    #[must_use]
    pub const fn error(&self) -> &E {
        &self.error
    }

    pub fn error_mut(&mut self) -> &mut E {
        &mut self.error
    }

    pub fn into_error(self) -> E {
        self.error
    }
}
