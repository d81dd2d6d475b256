use core::mem;

use crate::convert::ExplicitFrom;

/// A value tagged as being the error alternative of a [`Result`](crate::Result).
///
/// An `ErrorBox` always holds exactly one error. It has no behavior of its
/// own beyond storing the error, exposing it, and comparing or swapping it.
///
/// # Examples
///
/// ```
/// use fallible::ErrorBox;
///
/// let boxed = ErrorBox::new("disk full");
/// assert_eq!(*boxed.error(), "disk full");
/// ```
#[derive(Debug, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct ErrorBox<E>(E);

impl<E> ErrorBox<E> {
    /// Wraps `error`.
    pub const fn new(error: E) -> Self {
        Self(error)
    }

    /// Builds the error directly from its constructor arguments.
    ///
    /// A single argument is passed as is, several as a tuple. A slice in
    /// first position stands for a list-headed argument list.
    ///
    /// ```
    /// use fallible::ErrorBox;
    ///
    /// let boxed: ErrorBox<String> = ErrorBox::in_place("timeout");
    /// assert_eq!(boxed.error(), "timeout");
    /// ```
    pub fn in_place<A>(args: A) -> Self
    where
        E: From<A>,
    {
        Self(E::from(args))
    }

    /// Wraps an error of another type that converts implicitly into `E`.
    pub fn from_error<F>(error: F) -> Self
    where
        F: Into<E>,
    {
        Self(error.into())
    }

    /// Wraps an error of another type through an explicit conversion.
    pub fn from_error_explicit<F>(error: F) -> Self
    where
        E: ExplicitFrom<F>,
    {
        Self(E::explicit_from(error))
    }

    #[must_use]
    pub const fn error(&self) -> &E {
        &self.0
    }

    pub fn error_mut(&mut self) -> &mut E {
        &mut self.0
    }

    /// Unwraps the box, giving up ownership of the error.
    pub fn into_error(self) -> E {
        self.0
    }

    /// Converts the wrapped error, keeping it tagged as an error.
    pub fn map<F, O>(self, op: O) -> ErrorBox<F>
    where
        O: FnOnce(E) -> F,
    {
        ErrorBox(op(self.0))
    }

    /// Exchanges the stored errors of two boxes.
    pub fn swap(&mut self, other: &mut Self) {
        mem::swap(&mut self.0, &mut other.0);
    }
}

impl<E> From<E> for ErrorBox<E> {
    fn from(error: E) -> Self {
        Self(error)
    }
}

impl<E: Clone> Clone for ErrorBox<E> {
    fn clone(&self) -> Self {
        Self(self.0.clone())
    }

    fn clone_from(&mut self, source: &Self) {
        self.0.clone_from(&source.0);
    }
}

impl<E: Copy> Copy for ErrorBox<E> {}

impl<E, F> PartialEq<ErrorBox<F>> for ErrorBox<E>
where
    E: PartialEq<F>,
{
    fn eq(&self, other: &ErrorBox<F>) -> bool {
        self.0 == other.0
    }
}

impl<E: Eq> Eq for ErrorBox<E> {}
