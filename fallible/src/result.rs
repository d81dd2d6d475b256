use core::{
    hint, mem,
    ops::{Deref, DerefMut},
    result::Result as CoreResult,
};

pub use iter::{IntoIter, Iter, IterMut};

use crate::{convert::ExplicitFrom, error_box::ErrorBox, errors::BadAccess};

use self::Result::{Failure, Success};

mod iter;
#[cfg(feature = "nightly")]
mod try_ops;

/// Either a successfully computed value or the error explaining why there
/// is none.
///
/// Exactly one of the two is live at any time. `Result<(), E>` is the form
/// that carries no payload on success.
///
/// # Examples
///
/// ```
/// use fallible::Result;
///
/// let mut r: Result<i32, String> = Result::from_value(42);
/// assert!(r.has_value() && *r == 42);
///
/// r = Result::failure("boom");
/// assert!(!r.has_value());
/// assert_eq!(r.error(), "boom");
/// ```
#[must_use = "this `Result` may be a `Failure`, which should be handled"]
#[derive(Debug, Hash, PartialEq, Eq, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Result<T, E> {
    Success(T),
    Failure(ErrorBox<E>),
}

impl<T, E> Result<T, E> {
    /// A success holding `value`, converted implicitly into `T`.
    pub fn from_value<U>(value: U) -> Self
    where
        U: Into<T>,
    {
        Success(value.into())
    }

    /// A success holding `value`, converted through [`ExplicitFrom`].
    pub fn from_value_explicit<U>(value: U) -> Self
    where
        T: ExplicitFrom<U>,
    {
        Success(T::explicit_from(value))
    }

    /// A failure holding the boxed error, converted through [`ExplicitFrom`].
    ///
    /// The implicit counterpart is the `From<ErrorBox<F>>` impl.
    pub fn from_error_explicit<F>(error: ErrorBox<F>) -> Self
    where
        E: ExplicitFrom<F>,
    {
        Failure(ErrorBox::from_error_explicit(error.into_error()))
    }

    /// A success whose payload is built directly from `args`.
    ///
    /// A single argument is passed as is, several as a tuple. A slice in
    /// first position stands for a list-headed argument list.
    ///
    /// ```
    /// use fallible::Result;
    ///
    /// let r: Result<Vec<u8>, ()> = Result::in_place(&[1, 2, 3][..]);
    /// assert_eq!(r.value().unwrap().len(), 3);
    /// ```
    pub fn in_place<A>(args: A) -> Self
    where
        T: From<A>,
    {
        Success(T::from(args))
    }

    /// A failure whose error is built directly from `args`.
    pub fn failure<A>(args: A) -> Self
    where
        E: From<A>,
    {
        Failure(ErrorBox::in_place(args))
    }

    /// Converts into a result of other payload and error types, state for
    /// state. Both conversions must be implicit.
    ///
    /// ```
    /// use fallible::Result;
    ///
    /// let narrow: Result<i32, &str> = Result::failure("overflow");
    /// let wide: Result<i64, String> = narrow.convert();
    /// assert_eq!(wide.error(), "overflow");
    /// ```
    pub fn convert<U, F>(self) -> Result<U, F>
    where
        T: Into<U>,
        E: Into<F>,
    {
        match self {
            Success(value) => Success(value.into()),
            Failure(error) => Failure(error.map(Into::into)),
        }
    }

    /// Like [`convert`](Self::convert), for payload or error types that
    /// only convert explicitly.
    pub fn convert_explicit<U, F>(self) -> Result<U, F>
    where
        U: ExplicitFrom<T>,
        F: ExplicitFrom<E>,
    {
        match self {
            Success(value) => Success(U::explicit_from(value)),
            Failure(error) => Failure(error.map(F::explicit_from)),
        }
    }

    /// Returns `true` if the result holds a value.
    #[must_use]
    pub const fn has_value(&self) -> bool {
        matches!(self, Success(_))
    }

    /// Alias of [`has_value`](Self::has_value), named after the variant.
    #[must_use]
    pub const fn is_success(&self) -> bool {
        self.has_value()
    }

    #[must_use]
    pub const fn is_failure(&self) -> bool {
        !self.has_value()
    }

    /// Returns `true` if the result is a success holding a payload equal
    /// to `value`. A failure never compares equal.
    ///
    /// This is the payload half of equality. It is a method rather than a
    /// `PartialEq<T>` impl, which would overlap with
    /// `PartialEq<ErrorBox<F>>` for payloads that are themselves error
    /// boxes, and `value == result` cannot be written for a foreign `T`.
    ///
    /// ```
    /// use fallible::Result;
    ///
    /// let r: Result<i32, &str> = Result::Success(10);
    /// assert!(r.contains(&10));
    /// assert!(!r.contains(&11));
    /// ```
    #[must_use]
    pub fn contains<U>(&self, value: &U) -> bool
    where
        T: PartialEq<U>,
    {
        match self {
            Success(payload) => payload == value,
            Failure(_) => false,
        }
    }

    /// Returns a reference to the payload.
    ///
    /// # Errors
    ///
    /// Returns [`BadAccess`] carrying a copy of the stored error if the
    /// result is a failure.
    pub fn value(&self) -> CoreResult<&T, BadAccess<E>>
    where
        E: Clone,
    {
        match self {
            Success(value) => Ok(value),
            Failure(error) => Err(bad_access(error.error().clone())),
        }
    }

    /// Returns a mutable reference to the payload.
    ///
    /// # Errors
    ///
    /// Returns [`BadAccess`] carrying a copy of the stored error if the
    /// result is a failure.
    pub fn value_mut(&mut self) -> CoreResult<&mut T, BadAccess<E>>
    where
        E: Clone,
    {
        match self {
            Success(value) => Ok(value),
            Failure(error) => Err(bad_access(error.error().clone())),
        }
    }

    /// Takes the payload out of the result.
    ///
    /// # Errors
    ///
    /// Returns [`BadAccess`] holding the stored error, moved rather than
    /// copied, if the result is a failure.
    pub fn into_value(self) -> CoreResult<T, BadAccess<E>> {
        match self {
            Success(value) => Ok(value),
            Failure(error) => Err(bad_access(error.into_error())),
        }
    }

    /// Returns the payload without checking the state.
    ///
    /// # Safety
    ///
    /// The result must be a success. Calling this on a failure is
    /// undefined behavior.
    #[must_use]
    pub unsafe fn value_unchecked(&self) -> &T {
        match self {
            Success(value) => value,
            // SAFETY: the caller guarantees the result is a success.
            Failure(_) => unsafe { hint::unreachable_unchecked() },
        }
    }

    /// Returns a reference to the stored error.
    ///
    /// # Panics
    ///
    /// Panics if the result is a success. Check [`has_value`](Self::has_value)
    /// first.
    #[must_use]
    #[track_caller]
    pub fn error(&self) -> &E {
        match self {
            Failure(error) => error.error(),
            Success(_) => panic!("called `Result::error()` on a `Success` value"),
        }
    }

    /// # Panics
    ///
    /// Panics if the result is a success.
    #[track_caller]
    pub fn error_mut(&mut self) -> &mut E {
        match self {
            Failure(error) => error.error_mut(),
            Success(_) => panic!("called `Result::error_mut()` on a `Success` value"),
        }
    }

    /// Takes the stored error out of the result.
    ///
    /// # Panics
    ///
    /// Panics if the result is a success.
    #[track_caller]
    pub fn into_error(self) -> E {
        match self {
            Failure(error) => error.into_error(),
            Success(_) => panic!("called `Result::into_error()` on a `Success` value"),
        }
    }

    /// Returns the payload, or `alt` converted into `T` for a failure.
    pub fn value_or<U>(self, alt: U) -> T
    where
        U: Into<T>,
    {
        match self {
            Success(value) => value,
            Failure(_) => alt.into(),
        }
    }

    pub fn value_or_else<O>(self, op: O) -> T
    where
        O: FnOnce(E) -> T,
    {
        match self {
            Success(value) => value,
            Failure(error) => op(error.into_error()),
        }
    }

    pub fn value_or_default(self) -> T
    where
        T: Default,
    {
        match self {
            Success(value) => value,
            Failure(_) => T::default(),
        }
    }

    /// Converts into an `Option` of the payload, discarding any error.
    pub fn ok(self) -> Option<T> {
        match self {
            Success(value) => Some(value),
            Failure(_) => None,
        }
    }

    /// Converts into an `Option` of the error, discarding any payload.
    pub fn err(self) -> Option<E> {
        match self {
            Success(_) => None,
            Failure(error) => Some(error.into_error()),
        }
    }

    /// Borrows the contents, producing a result of references.
    ///
    /// This is how the combinators are used without consuming `self`.
    pub const fn as_ref(&self) -> Result<&T, &E> {
        match self {
            Success(value) => Success(value),
            Failure(error) => Failure(ErrorBox::new(error.error())),
        }
    }

    pub fn as_mut(&mut self) -> Result<&mut T, &mut E> {
        match self {
            Success(value) => Success(value),
            Failure(error) => Failure(ErrorBox::new(error.error_mut())),
        }
    }

    /// Iterates over the payload: one item for a success, none for a
    /// failure.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(self.as_ref().ok())
    }

    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        IterMut::new(self.as_mut().ok())
    }

    /// Chains a fallible step onto a success.
    ///
    /// On a success, calls `op` with the payload and returns its result. On
    /// a failure, returns the error converted into the step's error type
    /// without calling `op`.
    ///
    /// ```
    /// use fallible::Result;
    ///
    /// fn halve(n: u32) -> Result<u32, String> {
    ///     if n % 2 == 0 {
    ///         Result::from_value(n / 2)
    ///     } else {
    ///         Result::failure(format!("{n} is odd"))
    ///     }
    /// }
    ///
    /// let r = Result::<u32, String>::Success(12).and_then(halve).and_then(halve);
    /// assert_eq!(r, Result::Success(3));
    ///
    /// let r = Result::<u32, &str>::Success(6).and_then(halve).and_then(halve);
    /// assert_eq!(r.error(), "3 is odd");
    /// ```
    pub fn and_then<U, G, O>(self, op: O) -> Result<U, G>
    where
        O: FnOnce(T) -> Result<U, G>,
        G: From<E>,
    {
        match self {
            Success(value) => op(value),
            Failure(error) => Failure(error.map(G::from)),
        }
    }

    /// Recovers from a failure.
    ///
    /// On a failure, calls `op` with the error and returns its result. On a
    /// success, keeps the payload, converted into the recovery's payload
    /// type, without calling `op`.
    ///
    /// ```
    /// use fallible::Result;
    ///
    /// let r: Result<u8, &str> = Result::failure("none");
    /// let r: Result<u32, ()> = r.or_else(|_| Result::Success(u32::MAX));
    /// assert_eq!(*r, u32::MAX);
    /// ```
    pub fn or_else<U, G, O>(self, op: O) -> Result<U, G>
    where
        O: FnOnce(E) -> Result<U, G>,
        U: From<T>,
    {
        match self {
            Success(value) => Success(U::from(value)),
            Failure(error) => op(error.into_error()),
        }
    }

    /// Maps the payload of a success, passing a failure through unchanged.
    pub fn transform<U, O>(self, op: O) -> Result<U, E>
    where
        O: FnOnce(T) -> U,
    {
        match self {
            Success(value) => Success(op(value)),
            Failure(error) => Failure(error),
        }
    }

    /// Maps the error of a failure, passing a success through unchanged.
    pub fn transform_error<G, O>(self, op: O) -> Result<T, G>
    where
        O: FnOnce(E) -> G,
    {
        match self {
            Success(value) => Success(value),
            Failure(error) => Failure(error.map(op)),
        }
    }

    /// Replaces the contents with a payload built from `args`, whatever the
    /// current state, and returns a reference to it.
    ///
    /// The new payload is fully built before the old contents are dropped,
    /// so a panic while building it leaves `self` as it was.
    pub fn emplace<A>(&mut self, args: A) -> &mut T
    where
        T: From<A>,
    {
        let value = T::from(args);
        if self.is_failure() {
            tracing::trace!("emplace replaces a failure with a success");
        }
        *self = Success(value);
        let Success(value) = self else {
            unreachable!("emplace always leaves a success")
        };
        value
    }

    /// Exchanges state and contents with `other`.
    pub fn swap(&mut self, other: &mut Self) {
        mem::swap(self, other);
    }
}

impl<E> Result<(), E> {
    /// The success state of a result without payload.
    pub const fn empty() -> Self {
        Success(())
    }

    /// Switches to the success state, dropping any error.
    pub fn reset(&mut self) {
        self.emplace(());
    }

    /// Checks that the result is a success.
    ///
    /// # Errors
    ///
    /// Returns [`BadAccess`] carrying a copy of the stored error if the
    /// result is a failure.
    pub fn check(&self) -> CoreResult<(), BadAccess<E>>
    where
        E: Clone,
    {
        self.value().map(|&()| ())
    }
}

impl<T: Clone, E> Result<&T, E> {
    pub fn cloned(self) -> Result<T, E> {
        self.transform(|value| value.clone())
    }
}

impl<T: Clone, E> Result<&mut T, E> {
    pub fn cloned(self) -> Result<T, E> {
        self.transform(|value| value.clone())
    }
}

fn bad_access<E>(error: E) -> BadAccess<E> {
    tracing::debug!("payload requested from a failure result");
    BadAccess::new(error)
}

impl<T: Default, E> Default for Result<T, E> {
    fn default() -> Self {
        Success(T::default())
    }
}

impl<T: Clone, E: Clone> Clone for Result<T, E> {
    fn clone(&self) -> Self {
        match self {
            Success(value) => Success(value.clone()),
            Failure(error) => Failure(error.clone()),
        }
    }

    fn clone_from(&mut self, source: &Self) {
        match (self, source) {
            (Success(to), Success(from)) => to.clone_from(from),
            (Failure(to), Failure(from)) => to.clone_from(from),
            (to, from) => *to = from.clone(),
        }
    }
}

impl<T: Copy, E: Copy> Copy for Result<T, E> {}

impl<T, E, F> From<ErrorBox<F>> for Result<T, E>
where
    F: Into<E>,
{
    fn from(error: ErrorBox<F>) -> Self {
        Failure(error.map(Into::into))
    }
}

impl<T, E, F> PartialEq<ErrorBox<F>> for Result<T, E>
where
    E: PartialEq<F>,
{
    fn eq(&self, other: &ErrorBox<F>) -> bool {
        match self {
            Success(_) => false,
            Failure(error) => error == other,
        }
    }
}

impl<T, E, F> PartialEq<Result<T, E>> for ErrorBox<F>
where
    F: PartialEq<E>,
{
    fn eq(&self, other: &Result<T, E>) -> bool {
        match other {
            Success(_) => false,
            Failure(error) => self == error,
        }
    }
}

impl<T, E> From<CoreResult<T, E>> for Result<T, E> {
    fn from(result: CoreResult<T, E>) -> Self {
        match result {
            Ok(value) => Success(value),
            Err(error) => Failure(ErrorBox::new(error)),
        }
    }
}

impl<T, E> From<Result<T, E>> for CoreResult<T, E> {
    fn from(result: Result<T, E>) -> Self {
        match result {
            Success(value) => Ok(value),
            Failure(error) => Err(error.into_error()),
        }
    }
}

impl<T, E> Deref for Result<T, E> {
    type Target = T;

    /// # Panics
    ///
    /// Panics if the result is a failure.
    #[track_caller]
    fn deref(&self) -> &T {
        match self {
            Success(value) => value,
            Failure(_) => panic!("dereferenced a `Failure` result"),
        }
    }
}

impl<T, E> DerefMut for Result<T, E> {
    #[track_caller]
    fn deref_mut(&mut self) -> &mut T {
        match self {
            Success(value) => value,
            Failure(_) => panic!("dereferenced a `Failure` result"),
        }
    }
}

impl<T, E> IntoIterator for Result<T, E> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter::new(self.ok())
    }
}

impl<'a, T, E> IntoIterator for &'a Result<T, E> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T, E> IntoIterator for &'a mut Result<T, E> {
    type Item = &'a mut T;
    type IntoIter = IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}
