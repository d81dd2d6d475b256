//! A value-or-error sum type.
//!
//! [`Result`] holds either a successfully computed value or the error that
//! explains why there is none, and [`ErrorBox`] tags a value as being the
//! error when building one. Combinators such as [`Result::and_then`] and
//! [`Result::transform`] chain fallible steps without branching by hand.
//!
//! ```
//! use fallible::{ErrorBox, Result};
//!
//! fn parse_port(input: &str) -> Result<u16, String> {
//!     match input.parse() {
//!         Ok(port) => Result::Success(port),
//!         Err(_) => ErrorBox::new(format!("not a port: {input}")).into(),
//!     }
//! }
//!
//! let port = parse_port("8080").transform(|port| port + 1);
//! assert_eq!(*port, 8081);
//!
//! let bad = parse_port("http");
//! assert_eq!(bad.error(), "not a port: http");
//! ```
#![no_std]
#![warn(clippy::nursery, clippy::pedantic, clippy::all)]
#![cfg_attr(feature = "nightly", feature(try_trait_v2, try_trait_v2_residual))]

#[cfg(test)]
extern crate alloc;

pub mod convert;
pub mod error_box;
pub mod errors;
pub mod result;

pub use convert::ExplicitFrom;
pub use error_box::ErrorBox;
pub use errors::BadAccess;
pub use result::Result;
