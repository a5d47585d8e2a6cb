//! Algebraic container types.
//!
//! This module provides the two container types at the heart of the
//! library, along with their combinator operations:
//!
//! - [`Optional`]: presence (`Some`) or absence (`None`) of a value
//! - [`Outcome`]: success (`Ok`) or typed failure (`Error`)
//!
//! The two types are independent except for the bridging conversions:
//! [`Optional::ok_or`] attaches an error to absence, while
//! [`Outcome::ok`] and [`Outcome::error`] discard one side of an outcome.
//!
//! # Short-Circuiting
//!
//! Every combinator is total: a `None` or `Error` input simply passes
//! through without invoking the supplied closure. Closures are `FnOnce`
//! and run synchronously on the caller's stack, zero or one times.
//!
//! # Examples
//!
//! ## Chaining `Optional` transformations
//!
//! ```rust
//! use twofold::container::Optional;
//!
//! fn lookup(key: &str) -> Optional<i32> {
//!     match key {
//!         "answer" => Optional::Some(42),
//!         _ => Optional::None,
//!     }
//! }
//!
//! let doubled = lookup("answer").map(|value| value * 2);
//! assert_eq!(doubled, Optional::Some(84));
//!
//! let fallback = lookup("missing").or_else(|| Optional::Some(0));
//! assert_eq!(fallback, Optional::Some(0));
//! ```
//!
//! ## Recovering from an `Outcome` error
//!
//! ```rust
//! use twofold::container::Outcome;
//!
//! let failed: Outcome<i32, i32> = Outcome::Error(3);
//! let recovered = failed.or_else(|error| Outcome::<i32, i32>::Ok(error * error));
//! assert_eq!(recovered, Outcome::Ok(9));
//! ```
//!
//! ## Bridging between the two types
//!
//! ```rust
//! use twofold::container::{Optional, Outcome};
//!
//! let absent: Optional<i32> = Optional::None;
//! assert_eq!(absent.ok_or("no value"), Outcome::Error("no value"));
//!
//! let success: Outcome<i32, &str> = Outcome::Ok(2);
//! assert_eq!(success.ok(), Optional::Some(2));
//! ```

mod optional;
mod outcome;

pub use optional::Optional;
pub use optional::OptionalIntoIterator;
pub use optional::OptionalIterator;
pub use outcome::Outcome;
pub use outcome::OutcomeIntoIterator;
pub use outcome::OutcomeIterator;
