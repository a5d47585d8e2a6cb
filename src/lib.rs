//! # twofold
//!
//! A small functional library providing two algebraic container types,
//! an optional value and a success-or-error outcome, together with the
//! standard combinator vocabulary over both.
//!
//! ## Overview
//!
//! This library lets calling code represent "value or absence" and
//! "success or typed error" without sentinel values or panics for ordinary
//! control flow. It includes:
//!
//! - **[`Optional<T>`]**: presence (`Some`) or absence (`None`) of a value
//! - **[`Outcome<T, E>`]**: success (`Ok`) or typed failure (`Error`)
//! - **Combinators**: `map`, `and_then`, `or_else`, `unwrap_or`, etc. for
//!   chaining transformations without unwrapping
//! - **Bridges**: conversions between the two types (`ok_or`, `ok`,
//!   `error`) and with the standard library's `Option` and `Result`
//! - **Iteration**: every container is a finite, lazily-consumed sequence
//!   of zero or one elements
//!
//! Both types are immutable value types: no operation mutates an existing
//! instance, every transformation returns a new one, and instances whose
//! payloads are `Send + Sync` can be shared across threads freely.
//!
//! [`Optional<T>`]: container::Optional
//! [`Outcome<T, E>`]: container::Outcome
//!
//! ## Example
//!
//! ```rust
//! use twofold::prelude::*;
//!
//! fn parse_port(raw: &str) -> Outcome<u16, String> {
//!     Outcome::from(raw.parse::<u16>().map_err(|error| error.to_string()))
//!         .and_then(|port| {
//!             if port >= 1024 {
//!                 Outcome::Ok(port)
//!             } else {
//!                 Outcome::Error(String::from("reserved port"))
//!             }
//!         })
//! }
//!
//! assert_eq!(parse_port("8080"), Outcome::Ok(8080));
//! assert!(parse_port("80").is_error());
//! assert!(parse_port("not a number").is_error());
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
// Note: Disabling redundant_closure_for_method_calls due to clippy 0.1.92 panic bug
#![allow(clippy::redundant_closure_for_method_calls)]

/// Prelude module for convenient imports.
///
/// Re-exports the two container types.
///
/// # Usage
///
/// ```rust
/// use twofold::prelude::*;
///
/// let present: Optional<i32> = Optional::Some(42);
/// let success: Outcome<i32, String> = Outcome::Ok(42);
/// assert_eq!(present.ok_or(String::from("missing")), success);
/// ```
pub mod prelude {
    pub use crate::container::{Optional, Outcome};
}

pub mod container;
