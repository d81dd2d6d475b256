/// A conversion that has to be asked for by name.
///
/// `From`/`Into` conversions are the implicit class: the `fallible` entry
/// points named without a suffix (`Result::from_value`, `Result::convert`)
/// accept them. Types that can be built from another type, but should not
/// be built from it silently, implement `ExplicitFrom` instead and are
/// accepted only by the `*_explicit` entry points.
///
/// Every `Into` conversion is also an explicit one.
///
/// # Examples
///
/// ```
/// use fallible::{ExplicitFrom, Result};
///
/// struct Meters(f64);
/// struct Feet(f64);
///
/// impl ExplicitFrom<Feet> for Meters {
///     fn explicit_from(feet: Feet) -> Self {
///         Meters(feet.0 * 0.3048)
///     }
/// }
///
/// let r: Result<Meters, ()> = Result::from_value_explicit(Feet(10.0));
/// assert!((r.value().unwrap().0 - 3.048).abs() < 1e-9);
/// ```
pub trait ExplicitFrom<U>: Sized {
    fn explicit_from(value: U) -> Self;
}

impl<T, U> ExplicitFrom<U> for T
where
    U: Into<T>,
{
    fn explicit_from(value: U) -> Self {
        value.into()
    }
}
