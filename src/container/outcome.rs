//! Success-or-error container.
//!
//! This module provides the `Outcome<T, E>` type, which represents either
//! a successful value (`Ok`) or a typed error (`Error`). This is commonly
//! used in functional programming for:
//!
//! - Fallible computations whose failures carry data
//! - Railway-oriented pipelines that short-circuit on the first error
//! - Bridging into [`Optional`] when only one side matters
//!
//! # Examples
//!
//! ```rust
//! use twofold::container::Outcome;
//!
//! // Creating Outcome values
//! let success: Outcome<i32, String> = Outcome::Ok(42);
//! let failure: Outcome<usize, String> = Outcome::Error(String::from("boom"));
//!
//! // Pattern matching
//! match success {
//!     Outcome::Ok(value) => println!("Got value: {}", value),
//!     Outcome::Error(error) => println!("Got error: {}", error),
//! }
//!
//! // Chaining combinators
//! let recovered = failure.or_else(|error| Outcome::<usize, String>::Ok(error.len()));
//! assert_eq!(recovered, Outcome::Ok(4));
//! ```

use std::fmt;
use std::iter::FusedIterator;
use std::mem;

use super::optional::Optional;

/// A computation result that is either a success or a typed error.
///
/// `Outcome<T, E>` holds exactly one payload: a success value (`Ok`) or
/// an error value (`Error`). It is an immutable value type: every
/// combinator consumes the container and returns a new one, and the
/// untouched side passes through unchanged without invoking the supplied
/// closure.
///
/// # Type Parameters
///
/// * `T` - The type of the success value
/// * `E` - The type of the error value
///
/// # Examples
///
/// ```rust
/// use twofold::container::Outcome;
///
/// let success: Outcome<i32, String> = Outcome::Ok(42);
/// let doubled = success.map(|value| value * 2);
/// assert_eq!(doubled, Outcome::Ok(84));
///
/// let failure: Outcome<i32, String> = Outcome::Error(String::from("boom"));
/// assert_eq!(failure.unwrap_or(0), 0);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Outcome<T, E> {
    /// The success variant, holding the computed value.
    Ok(T),
    /// The error variant, holding the failure description.
    Error(E),
}

// Immutable value type: shareable across threads whenever the payloads are.
static_assertions::assert_impl_all!(Outcome<i32, String>: Send, Sync);
static_assertions::assert_impl_all!(Outcome<String, i32>: Send, Sync);

impl<T, E> Outcome<T, E> {
    // =========================================================================
    // Type Checking
    // =========================================================================

    /// Returns `true` if this is an `Ok` value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use twofold::container::Outcome;
    ///
    /// let success: Outcome<i32, &str> = Outcome::Ok(2);
    /// assert!(success.is_ok());
    ///
    /// let failure: Outcome<i32, &str> = Outcome::Error("boom");
    /// assert!(!failure.is_ok());
    /// ```
    #[inline]
    pub const fn is_ok(&self) -> bool {
        matches!(self, Self::Ok(_))
    }

    /// Returns `true` if this is an `Error` value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use twofold::container::Outcome;
    ///
    /// let failure: Outcome<i32, &str> = Outcome::Error("boom");
    /// assert!(failure.is_error());
    ///
    /// let success: Outcome<i32, &str> = Outcome::Ok(2);
    /// assert!(!success.is_error());
    /// ```
    #[inline]
    pub const fn is_error(&self) -> bool {
        matches!(self, Self::Error(_))
    }

    // =========================================================================
    // Value Extraction (Consuming)
    // =========================================================================

    /// Returns the success value, consuming the container.
    ///
    /// # Panics
    ///
    /// Panics with `message` if this is an `Error` value. Unlike
    /// [`unwrap`](Self::unwrap), the error payload is not rendered, so no
    /// `Debug` bound is required.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use twofold::container::Outcome;
    ///
    /// let success: Outcome<i32, &str> = Outcome::Ok(2);
    /// assert_eq!(success.expect("computation must succeed"), 2);
    /// ```
    #[inline]
    pub fn expect(self, message: &str) -> T {
        match self {
            Self::Ok(value) => value,
            Self::Error(_) => panic!("{message}"),
        }
    }

    /// Returns the success value, consuming the container.
    ///
    /// # Panics
    ///
    /// Panics if this is an `Error` value, with a message incorporating
    /// the debug-rendered error.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use twofold::container::Outcome;
    ///
    /// let success: Outcome<i32, &str> = Outcome::Ok(2);
    /// assert_eq!(success.unwrap(), 2);
    /// ```
    #[inline]
    pub fn unwrap(self) -> T
    where
        E: fmt::Debug,
    {
        match self {
            Self::Ok(value) => value,
            Self::Error(error) => {
                panic!("called `Outcome::unwrap()` on an `Error` value: {error:?}")
            }
        }
    }

    /// Returns the error value, consuming the container.
    ///
    /// # Panics
    ///
    /// Panics if this is an `Ok` value, with a message incorporating the
    /// debug-rendered success value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use twofold::container::Outcome;
    ///
    /// let failure: Outcome<i32, &str> = Outcome::Error("boom");
    /// assert_eq!(failure.unwrap_error(), "boom");
    /// ```
    #[inline]
    pub fn unwrap_error(self) -> E
    where
        T: fmt::Debug,
    {
        match self {
            Self::Ok(value) => {
                panic!("called `Outcome::unwrap_error()` on an `Ok` value: {value:?}")
            }
            Self::Error(error) => error,
        }
    }

    /// Returns the success value, or `default` if this is an `Error`.
    ///
    /// The default is evaluated eagerly; use
    /// [`unwrap_or_else`](Self::unwrap_or_else) when it is expensive to
    /// compute.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use twofold::container::Outcome;
    ///
    /// let success: Outcome<i32, &str> = Outcome::Ok(2);
    /// assert_eq!(success.unwrap_or(4), 2);
    ///
    /// let failure: Outcome<i32, &str> = Outcome::Error("boom");
    /// assert_eq!(failure.unwrap_or(4), 4);
    /// ```
    #[inline]
    pub fn unwrap_or(self, default: T) -> T {
        match self {
            Self::Ok(value) => value,
            Self::Error(_) => default,
        }
    }

    /// Returns the success value, or computes a default from the error if
    /// this is an `Error`.
    ///
    /// The closure receives the error payload and is invoked at most
    /// once, only on the `Error` path.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use twofold::container::Outcome;
    ///
    /// let success: Outcome<usize, &str> = Outcome::Ok(2);
    /// assert_eq!(success.unwrap_or_else(|error| error.len()), 2);
    ///
    /// let failure: Outcome<usize, &str> = Outcome::Error("foo");
    /// assert_eq!(failure.unwrap_or_else(|error| error.len()), 3);
    /// ```
    #[inline]
    pub fn unwrap_or_else<F>(self, default: F) -> T
    where
        F: FnOnce(E) -> T,
    {
        match self {
            Self::Ok(value) => value,
            Self::Error(error) => default(error),
        }
    }

    // =========================================================================
    // Reference Adapter (Non-consuming)
    // =========================================================================

    /// Converts from `&Outcome<T, E>` to `Outcome<&T, &E>`.
    ///
    /// This lets combinators run without giving up ownership of the
    /// original container.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use twofold::container::Outcome;
    ///
    /// let success: Outcome<String, String> = Outcome::Ok(String::from("hello"));
    /// let length = success.as_ref().map(|value| value.len());
    /// assert_eq!(length, Outcome::Ok(5));
    /// // `success` is still available here
    /// assert!(success.is_ok());
    /// ```
    #[inline]
    pub const fn as_ref(&self) -> Outcome<&T, &E> {
        match self {
            Self::Ok(value) => Outcome::Ok(value),
            Self::Error(error) => Outcome::Error(error),
        }
    }

    // =========================================================================
    // Mapping Operations
    // =========================================================================

    /// Applies a function to the success value, leaving an error
    /// untouched.
    ///
    /// If this is `Ok(value)`, returns `Ok(function(value))`.
    /// If this is `Error(error)`, returns `Error(error)` without invoking
    /// `function`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use twofold::container::Outcome;
    ///
    /// let success: Outcome<i32, &str> = Outcome::Ok(2);
    /// assert_eq!(success.map(|value| value * 2), Outcome::Ok(4));
    ///
    /// let failure: Outcome<i32, &str> = Outcome::Error("boom");
    /// assert_eq!(failure.map(|value| value * 2), Outcome::Error("boom"));
    /// ```
    #[inline]
    pub fn map<U, F>(self, function: F) -> Outcome<U, E>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Self::Ok(value) => Outcome::Ok(function(value)),
            Self::Error(error) => Outcome::Error(error),
        }
    }

    /// Applies a function to the error value, leaving a success
    /// untouched.
    ///
    /// If this is `Error(error)`, returns `Error(function(error))`.
    /// If this is `Ok(value)`, returns `Ok(value)` without invoking
    /// `function`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use twofold::container::Outcome;
    ///
    /// let failure: Outcome<i32, i32> = Outcome::Error(3);
    /// assert_eq!(failure.map_error(|error| error + 1), Outcome::Error(4));
    ///
    /// let success: Outcome<i32, i32> = Outcome::Ok(2);
    /// assert_eq!(success.map_error(|error| error + 1), Outcome::Ok(2));
    /// ```
    #[inline]
    pub fn map_error<E2, F>(self, function: F) -> Outcome<T, E2>
    where
        F: FnOnce(E) -> E2,
    {
        match self {
            Self::Ok(value) => Outcome::Ok(value),
            Self::Error(error) => Outcome::Error(function(error)),
        }
    }

    // =========================================================================
    // Optional Conversions
    // =========================================================================

    /// Converts to an [`Optional`] over the success value, discarding the
    /// error.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use twofold::container::{Optional, Outcome};
    ///
    /// let success: Outcome<i32, &str> = Outcome::Ok(2);
    /// assert_eq!(success.ok(), Optional::Some(2));
    ///
    /// let failure: Outcome<i32, &str> = Outcome::Error("boom");
    /// assert_eq!(failure.ok(), Optional::None);
    /// ```
    #[inline]
    pub fn ok(self) -> Optional<T> {
        match self {
            Self::Ok(value) => Optional::Some(value),
            Self::Error(_) => Optional::None,
        }
    }

    /// Converts to an [`Optional`] over the error value, discarding the
    /// success.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use twofold::container::{Optional, Outcome};
    ///
    /// let failure: Outcome<i32, &str> = Outcome::Error("boom");
    /// assert_eq!(failure.error(), Optional::Some("boom"));
    ///
    /// let success: Outcome<i32, &str> = Outcome::Ok(2);
    /// assert_eq!(success.error(), Optional::None);
    /// ```
    #[inline]
    pub fn error(self) -> Optional<E> {
        match self {
            Self::Ok(_) => Optional::None,
            Self::Error(error) => Optional::Some(error),
        }
    }

    // =========================================================================
    // Chaining Operations
    // =========================================================================

    /// Returns `other` if this is an `Ok`, otherwise propagates the
    /// error.
    ///
    /// The second container may hold a different success type; the error
    /// type stays fixed.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use twofold::container::Outcome;
    ///
    /// let first: Outcome<i32, &str> = Outcome::Ok(2);
    /// let second: Outcome<&str, &str> = Outcome::Ok("two");
    /// assert_eq!(first.and(second), Outcome::Ok("two"));
    ///
    /// let failure: Outcome<i32, &str> = Outcome::Error("boom");
    /// assert_eq!(failure.and(Outcome::Ok("two")), Outcome::Error("boom"));
    /// ```
    #[inline]
    pub fn and<U>(self, other: Outcome<U, E>) -> Outcome<U, E> {
        match self {
            Self::Ok(_) => other,
            Self::Error(error) => Outcome::Error(error),
        }
    }

    /// Calls `function` with the success value and returns the result, or
    /// propagates the error. (Flat map.)
    ///
    /// # Examples
    ///
    /// ```rust
    /// use twofold::container::Outcome;
    ///
    /// fn square(value: i32) -> Outcome<i32, i32> {
    ///     Outcome::Ok(value * value)
    /// }
    ///
    /// let chained = Outcome::Ok(2).and_then(square).and_then(square);
    /// assert_eq!(chained, Outcome::Ok(16));
    ///
    /// let failure: Outcome<i32, i32> = Outcome::Error(3);
    /// assert_eq!(failure.and_then(square), Outcome::Error(3));
    /// ```
    #[inline]
    pub fn and_then<U, F>(self, function: F) -> Outcome<U, E>
    where
        F: FnOnce(T) -> Outcome<U, E>,
    {
        match self {
            Self::Ok(value) => function(value),
            Self::Error(error) => Outcome::Error(error),
        }
    }

    // =========================================================================
    // Fallback Operations
    // =========================================================================

    /// Returns the container itself if it holds a success, otherwise
    /// `other`.
    ///
    /// The fallback may carry a different error type; the success type
    /// stays fixed.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use twofold::container::Outcome;
    ///
    /// let success: Outcome<i32, &str> = Outcome::Ok(2);
    /// let fallback: Outcome<i32, i32> = Outcome::Ok(100);
    /// assert_eq!(success.or(fallback), Outcome::Ok(2));
    ///
    /// let failure: Outcome<i32, &str> = Outcome::Error("boom");
    /// assert_eq!(failure.or(Outcome::<i32, i32>::Error(3)), Outcome::Error(3));
    /// ```
    #[inline]
    pub fn or<E2>(self, other: Outcome<T, E2>) -> Outcome<T, E2> {
        match self {
            Self::Ok(value) => Outcome::Ok(value),
            Self::Error(_) => other,
        }
    }

    /// Returns the container itself if it holds a success, otherwise
    /// calls `function` with the error and returns the result.
    ///
    /// The closure receives the error payload and is invoked at most
    /// once, only on the `Error` path.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use twofold::container::Outcome;
    ///
    /// fn square(error: i32) -> Outcome<i32, i32> {
    ///     Outcome::Ok(error * error)
    /// }
    ///
    /// let failure: Outcome<i32, i32> = Outcome::Error(3);
    /// assert_eq!(failure.or_else(square), Outcome::Ok(9));
    ///
    /// let success: Outcome<i32, i32> = Outcome::Ok(2);
    /// assert_eq!(success.or_else(square), Outcome::Ok(2));
    /// ```
    #[inline]
    pub fn or_else<E2, F>(self, function: F) -> Outcome<T, E2>
    where
        F: FnOnce(E) -> Outcome<T, E2>,
    {
        match self {
            Self::Ok(value) => Outcome::Ok(value),
            Self::Error(error) => function(error),
        }
    }

    // =========================================================================
    // Iteration
    // =========================================================================

    /// Returns an iterator over the success value.
    ///
    /// The iterator yields one `&T` if the container is `Ok`, nothing if
    /// it is `Error`. Every call produces a fresh, independent cursor.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use twofold::container::Outcome;
    ///
    /// let success: Outcome<i32, &str> = Outcome::Ok(10);
    /// let mut iterator = success.iter();
    /// assert_eq!(iterator.next(), Some(&10));
    /// assert_eq!(iterator.next(), None);
    ///
    /// let failure: Outcome<i32, &str> = Outcome::Error("boom");
    /// assert_eq!(failure.iter().next(), None);
    /// ```
    #[inline]
    pub const fn iter(&self) -> OutcomeIterator<'_, T> {
        OutcomeIterator {
            remaining: match self {
                Self::Ok(value) => Optional::Some(value),
                Self::Error(_) => Optional::None,
            },
        }
    }
}

// =============================================================================
// Debug and Display Implementations
// =============================================================================

impl<T: fmt::Debug, E: fmt::Debug> fmt::Debug for Outcome<T, E> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ok(value) => formatter.debug_tuple("Ok").field(value).finish(),
            Self::Error(error) => formatter.debug_tuple("Error").field(error).finish(),
        }
    }
}

impl<T: fmt::Display, E: fmt::Display> fmt::Display for Outcome<T, E> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ok(value) => write!(formatter, "Ok({value})"),
            Self::Error(error) => write!(formatter, "Error({error})"),
        }
    }
}

// =============================================================================
// From Implementations
// =============================================================================

impl<T, E> From<Result<T, E>> for Outcome<T, E> {
    /// Converts a standard-library `Result` to an `Outcome`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use twofold::container::Outcome;
    ///
    /// let success: Outcome<i32, String> = Ok(42).into();
    /// assert_eq!(success, Outcome::Ok(42));
    ///
    /// let failure: Outcome<i32, String> = Err(String::from("boom")).into();
    /// assert_eq!(failure, Outcome::Error(String::from("boom")));
    /// ```
    #[inline]
    fn from(result: Result<T, E>) -> Self {
        match result {
            Ok(value) => Self::Ok(value),
            Err(error) => Self::Error(error),
        }
    }
}

impl<T, E> From<Outcome<T, E>> for Result<T, E> {
    /// Converts an `Outcome` to a standard-library `Result`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use twofold::container::Outcome;
    ///
    /// let success: Result<i32, String> = Outcome::Ok(42).into();
    /// assert_eq!(success, Ok(42));
    ///
    /// let failure: Result<i32, String> = Outcome::Error(String::from("boom")).into();
    /// assert_eq!(failure, Err(String::from("boom")));
    /// ```
    #[inline]
    fn from(outcome: Outcome<T, E>) -> Self {
        match outcome {
            Outcome::Ok(value) => Ok(value),
            Outcome::Error(error) => Err(error),
        }
    }
}

// =============================================================================
// Iterators
// =============================================================================

/// A borrowing iterator over the success value of an [`Outcome`].
///
/// Yields one `&T` if the container is `Ok`, nothing if it is `Error`.
/// Created by [`Outcome::iter`]; each call produces a fresh cursor, and
/// an exhausted cursor keeps returning `None`.
pub struct OutcomeIterator<'a, T> {
    remaining: Optional<&'a T>,
}

impl<'a, T> Iterator for OutcomeIterator<'a, T> {
    type Item = &'a T;

    #[inline]
    fn next(&mut self) -> Option<&'a T> {
        match mem::replace(&mut self.remaining, Optional::None) {
            Optional::Some(value) => Some(value),
            Optional::None => None,
        }
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let length = self.len();
        (length, Some(length))
    }
}

impl<T> DoubleEndedIterator for OutcomeIterator<'_, T> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        self.next()
    }
}

impl<T> ExactSizeIterator for OutcomeIterator<'_, T> {
    #[inline]
    fn len(&self) -> usize {
        usize::from(self.remaining.is_some())
    }
}

impl<T> FusedIterator for OutcomeIterator<'_, T> {}

/// An owning iterator over the success value of an [`Outcome`].
///
/// Yields the success value once if the container is `Ok`, nothing if it
/// is `Error`. Created by the [`IntoIterator`] implementation; the error
/// payload is dropped on construction.
pub struct OutcomeIntoIterator<T> {
    remaining: Optional<T>,
}

impl<T> Iterator for OutcomeIntoIterator<T> {
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<T> {
        match mem::replace(&mut self.remaining, Optional::None) {
            Optional::Some(value) => Some(value),
            Optional::None => None,
        }
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let length = self.len();
        (length, Some(length))
    }
}

impl<T> DoubleEndedIterator for OutcomeIntoIterator<T> {
    #[inline]
    fn next_back(&mut self) -> Option<T> {
        self.next()
    }
}

impl<T> ExactSizeIterator for OutcomeIntoIterator<T> {
    #[inline]
    fn len(&self) -> usize {
        usize::from(self.remaining.is_some())
    }
}

impl<T> FusedIterator for OutcomeIntoIterator<T> {}

impl<T, E> IntoIterator for Outcome<T, E> {
    type Item = T;
    type IntoIter = OutcomeIntoIterator<T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        OutcomeIntoIterator {
            remaining: self.ok(),
        }
    }
}

impl<'a, T, E> IntoIterator for &'a Outcome<T, E> {
    type Item = &'a T;
    type IntoIter = OutcomeIterator<'a, T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
