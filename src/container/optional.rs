//! Optional value container.
//!
//! This module provides the `Optional<T>` type, which represents either
//! the presence (`Some`) or absence (`None`) of a value. This is commonly
//! used in functional programming for:
//!
//! - Partial functions and lookups that may find nothing
//! - Chaining transformations that can drop out midway
//! - Bridging into [`Outcome`] when absence should carry an error
//!
//! # Examples
//!
//! ```rust
//! use twofold::container::Optional;
//!
//! // Creating Optional values
//! let present: Optional<i32> = Optional::Some(42);
//! let absent: Optional<i32> = Optional::None;
//!
//! // Pattern matching
//! match present {
//!     Optional::Some(value) => println!("Got value: {}", value),
//!     Optional::None => println!("Got nothing"),
//! }
//!
//! // Chaining combinators
//! let result = absent.or(Optional::Some(7)).map(|value| value * 2);
//! assert_eq!(result, Optional::Some(14));
//! ```

use std::fmt;
use std::iter::FusedIterator;
use std::mem;

use super::outcome::Outcome;

/// A value that is either present or absent.
///
/// `Optional<T>` holds exactly one value (`Some`) or nothing (`None`).
/// It is an immutable value type: every combinator consumes the container
/// and returns a new one, and a `None` input short-circuits without
/// invoking the supplied closure.
///
/// # Type Parameters
///
/// * `T` - The type of the contained value
///
/// # Examples
///
/// ```rust
/// use twofold::container::Optional;
///
/// let present: Optional<i32> = Optional::Some(42);
/// let doubled = present.map(|value| value * 2);
/// assert_eq!(doubled, Optional::Some(84));
///
/// let absent: Optional<i32> = Optional::None;
/// assert_eq!(absent.unwrap_or(0), 0);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Optional<T> {
    /// The absent variant, holding nothing.
    None,
    /// The present variant, holding exactly one value.
    Some(T),
}

// Immutable value type: shareable across threads whenever the payload is.
static_assertions::assert_impl_all!(Optional<i32>: Send, Sync);
static_assertions::assert_impl_all!(Optional<String>: Send, Sync);

impl<T> Optional<T> {
    // =========================================================================
    // Type Checking
    // =========================================================================

    /// Returns `true` if this is a `Some` value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use twofold::container::Optional;
    ///
    /// let present: Optional<i32> = Optional::Some(2);
    /// assert!(present.is_some());
    ///
    /// let absent: Optional<i32> = Optional::None;
    /// assert!(!absent.is_some());
    /// ```
    #[inline]
    pub const fn is_some(&self) -> bool {
        matches!(self, Self::Some(_))
    }

    /// Returns `true` if this is a `None` value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use twofold::container::Optional;
    ///
    /// let absent: Optional<i32> = Optional::None;
    /// assert!(absent.is_none());
    ///
    /// let present: Optional<i32> = Optional::Some(2);
    /// assert!(!present.is_none());
    /// ```
    #[inline]
    pub const fn is_none(&self) -> bool {
        matches!(self, Self::None)
    }

    // =========================================================================
    // Value Extraction (Consuming)
    // =========================================================================

    /// Returns the contained value, consuming the container.
    ///
    /// # Panics
    ///
    /// Panics with `message` if this is a `None` value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use twofold::container::Optional;
    ///
    /// let present: Optional<i32> = Optional::Some(2);
    /// assert_eq!(present.expect("value must be configured"), 2);
    /// ```
    #[inline]
    pub fn expect(self, message: &str) -> T {
        match self {
            Self::Some(value) => value,
            Self::None => panic!("{message}"),
        }
    }

    /// Returns the contained value, consuming the container.
    ///
    /// Equivalent to [`expect`](Self::expect) with the fixed message
    /// `"Optional value is None"`.
    ///
    /// # Panics
    ///
    /// Panics if this is a `None` value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use twofold::container::Optional;
    ///
    /// let present: Optional<i32> = Optional::Some(2);
    /// assert_eq!(present.unwrap(), 2);
    /// ```
    #[inline]
    pub fn unwrap(self) -> T {
        self.expect("Optional value is None")
    }

    /// Returns the contained value, or `default` if this is a `None`.
    ///
    /// The default is evaluated eagerly; use
    /// [`unwrap_or_else`](Self::unwrap_or_else) when it is expensive to
    /// compute.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use twofold::container::Optional;
    ///
    /// let present: Optional<i32> = Optional::Some(2);
    /// assert_eq!(present.unwrap_or(4), 2);
    ///
    /// let absent: Optional<i32> = Optional::None;
    /// assert_eq!(absent.unwrap_or(4), 4);
    /// ```
    #[inline]
    pub fn unwrap_or(self, default: T) -> T {
        match self {
            Self::Some(value) => value,
            Self::None => default,
        }
    }

    /// Returns the contained value, or computes a default if this is a
    /// `None`.
    ///
    /// The closure is invoked at most once, and only on the `None` path.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use twofold::container::Optional;
    ///
    /// let present: Optional<i32> = Optional::Some(2);
    /// assert_eq!(present.unwrap_or_else(|| 14), 2);
    ///
    /// let absent: Optional<i32> = Optional::None;
    /// assert_eq!(absent.unwrap_or_else(|| 14), 14);
    /// ```
    #[inline]
    pub fn unwrap_or_else<F>(self, default: F) -> T
    where
        F: FnOnce() -> T,
    {
        match self {
            Self::Some(value) => value,
            Self::None => default(),
        }
    }

    // =========================================================================
    // Reference Adapter (Non-consuming)
    // =========================================================================

    /// Converts from `&Optional<T>` to `Optional<&T>`.
    ///
    /// This lets combinators run without giving up ownership of the
    /// original container.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use twofold::container::Optional;
    ///
    /// let text: Optional<String> = Optional::Some(String::from("hello"));
    /// let length = text.as_ref().map(|value| value.len());
    /// assert_eq!(length, Optional::Some(5));
    /// // `text` is still available here
    /// assert!(text.is_some());
    /// ```
    #[inline]
    pub const fn as_ref(&self) -> Optional<&T> {
        match self {
            Self::Some(value) => Optional::Some(value),
            Self::None => Optional::None,
        }
    }

    // =========================================================================
    // Mapping Operations
    // =========================================================================

    /// Applies a function to the contained value if present.
    ///
    /// If this is `Some(value)`, returns `Some(function(value))`.
    /// If this is `None`, returns `None` without invoking `function`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use twofold::container::Optional;
    ///
    /// let present: Optional<i32> = Optional::Some(2);
    /// assert_eq!(present.map(|value| value * 2), Optional::Some(4));
    ///
    /// let absent: Optional<i32> = Optional::None;
    /// assert_eq!(absent.map(|value| value * 2), Optional::None);
    /// ```
    #[inline]
    pub fn map<U, F>(self, function: F) -> Optional<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Self::Some(value) => Optional::Some(function(value)),
            Self::None => Optional::None,
        }
    }

    /// Transforms the contained value, or returns `default` if this is a
    /// `None`.
    ///
    /// Equivalent to `self.map(function).unwrap_or(default)`; the
    /// function is skipped on the `None` path.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use twofold::container::Optional;
    ///
    /// let present: Optional<i32> = Optional::Some(2);
    /// assert_eq!(present.map_or(10, |value| value * value), 4);
    ///
    /// let absent: Optional<i32> = Optional::None;
    /// assert_eq!(absent.map_or(10, |value| value * value), 10);
    /// ```
    #[inline]
    pub fn map_or<U, F>(self, default: U, function: F) -> U
    where
        F: FnOnce(T) -> U,
    {
        self.map(function).unwrap_or(default)
    }

    /// Transforms the contained value, or computes a default if this is a
    /// `None`.
    ///
    /// Equivalent to `self.map(function).unwrap_or_else(default)`; exactly
    /// one of the two closures runs.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use twofold::container::Optional;
    ///
    /// let present: Optional<i32> = Optional::Some(2);
    /// assert_eq!(present.map_or_else(|| 10, |value| value * value), 4);
    ///
    /// let absent: Optional<i32> = Optional::None;
    /// assert_eq!(absent.map_or_else(|| 10, |value| value * value), 10);
    /// ```
    #[inline]
    pub fn map_or_else<U, D, F>(self, default: D, function: F) -> U
    where
        D: FnOnce() -> U,
        F: FnOnce(T) -> U,
    {
        self.map(function).unwrap_or_else(default)
    }

    // =========================================================================
    // Outcome Conversions
    // =========================================================================

    /// Transforms the `Optional<T>` into an [`Outcome<T, E>`], mapping
    /// `Some(value)` to `Ok(value)` and `None` to `Error(error)`.
    ///
    /// The error is evaluated eagerly; use
    /// [`ok_or_else`](Self::ok_or_else) when it is expensive to build.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use twofold::container::{Optional, Outcome};
    ///
    /// let present: Optional<i32> = Optional::Some(2);
    /// assert_eq!(present.ok_or("no value"), Outcome::Ok(2));
    ///
    /// let absent: Optional<i32> = Optional::None;
    /// assert_eq!(absent.ok_or("no value"), Outcome::Error("no value"));
    /// ```
    #[inline]
    pub fn ok_or<E>(self, error: E) -> Outcome<T, E> {
        match self {
            Self::Some(value) => Outcome::Ok(value),
            Self::None => Outcome::Error(error),
        }
    }

    /// Transforms the `Optional<T>` into an [`Outcome<T, E>`], mapping
    /// `Some(value)` to `Ok(value)` and `None` to `Error(error())`.
    ///
    /// The closure is invoked at most once, and only on the `None` path.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use twofold::container::{Optional, Outcome};
    ///
    /// let present: Optional<i32> = Optional::Some(2);
    /// assert_eq!(present.ok_or_else(|| String::from("no value")), Outcome::Ok(2));
    ///
    /// let absent: Optional<i32> = Optional::None;
    /// assert_eq!(
    ///     absent.ok_or_else(|| String::from("no value")),
    ///     Outcome::Error(String::from("no value"))
    /// );
    /// ```
    #[inline]
    pub fn ok_or_else<E, F>(self, error: F) -> Outcome<T, E>
    where
        F: FnOnce() -> E,
    {
        match self {
            Self::Some(value) => Outcome::Ok(value),
            Self::None => Outcome::Error(error()),
        }
    }

    // =========================================================================
    // Chaining Operations
    // =========================================================================

    /// Returns `other` if this is a `Some`, otherwise `None`.
    ///
    /// The second container may hold a different payload type, matching
    /// the [`Outcome::and`] contract.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use twofold::container::Optional;
    ///
    /// let first: Optional<i32> = Optional::Some(2);
    /// assert_eq!(first.and(Optional::Some("two")), Optional::Some("two"));
    ///
    /// let absent: Optional<i32> = Optional::None;
    /// assert_eq!(absent.and(Optional::Some("two")), Optional::None);
    ///
    /// let second: Optional<&str> = Optional::None;
    /// assert_eq!(Optional::Some(2).and(second), Optional::None);
    /// ```
    #[inline]
    pub fn and<U>(self, other: Optional<U>) -> Optional<U> {
        match self {
            Self::Some(_) => other,
            Self::None => Optional::None,
        }
    }

    /// Calls `function` with the contained value and returns the result,
    /// or `None` if this is a `None`. (Flat map.)
    ///
    /// # Examples
    ///
    /// ```rust
    /// use twofold::container::Optional;
    ///
    /// fn square(value: i32) -> Optional<i32> {
    ///     Optional::Some(value * value)
    /// }
    ///
    /// let chained = Optional::Some(2).and_then(square).and_then(square);
    /// assert_eq!(chained, Optional::Some(16));
    ///
    /// let absent: Optional<i32> = Optional::None;
    /// assert_eq!(absent.and_then(square), Optional::None);
    /// ```
    #[inline]
    pub fn and_then<U, F>(self, function: F) -> Optional<U>
    where
        F: FnOnce(T) -> Optional<U>,
    {
        match self {
            Self::Some(value) => function(value),
            Self::None => Optional::None,
        }
    }

    // =========================================================================
    // Fallback Operations
    // =========================================================================

    /// Returns the container itself if it holds a value, otherwise
    /// `other`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use twofold::container::Optional;
    ///
    /// let present: Optional<i32> = Optional::Some(2);
    /// assert_eq!(present.or(Optional::Some(4)), Optional::Some(2));
    ///
    /// let absent: Optional<i32> = Optional::None;
    /// assert_eq!(absent.or(Optional::Some(4)), Optional::Some(4));
    /// ```
    #[inline]
    pub fn or(self, other: Self) -> Self {
        match self {
            Self::Some(value) => Self::Some(value),
            Self::None => other,
        }
    }

    /// Returns the container itself if it holds a value, otherwise calls
    /// `function` and returns the result.
    ///
    /// The closure is invoked at most once, and only on the `None` path.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use twofold::container::Optional;
    ///
    /// let present: Optional<&str> = Optional::Some("foo");
    /// assert_eq!(present.or_else(|| Optional::Some("bar")), Optional::Some("foo"));
    ///
    /// let absent: Optional<&str> = Optional::None;
    /// assert_eq!(absent.or_else(|| Optional::Some("bar")), Optional::Some("bar"));
    /// ```
    #[inline]
    pub fn or_else<F>(self, function: F) -> Self
    where
        F: FnOnce() -> Self,
    {
        match self {
            Self::Some(value) => Self::Some(value),
            Self::None => function(),
        }
    }

    // =========================================================================
    // Iteration
    // =========================================================================

    /// Returns an iterator over the contained value.
    ///
    /// The iterator yields one `&T` if the container is `Some`, nothing
    /// if it is `None`. Every call produces a fresh, independent cursor.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use twofold::container::Optional;
    ///
    /// let present: Optional<i32> = Optional::Some(10);
    /// let mut iterator = present.iter();
    /// assert_eq!(iterator.next(), Some(&10));
    /// assert_eq!(iterator.next(), None);
    ///
    /// let absent: Optional<i32> = Optional::None;
    /// assert_eq!(absent.iter().next(), None);
    /// ```
    #[inline]
    pub const fn iter(&self) -> OptionalIterator<'_, T> {
        OptionalIterator {
            remaining: self.as_ref(),
        }
    }
}

// =============================================================================
// Default Implementation
// =============================================================================

impl<T> Default for Optional<T> {
    /// Returns [`Optional::None`].
    #[inline]
    fn default() -> Self {
        Self::None
    }
}

// =============================================================================
// Debug and Display Implementations
// =============================================================================

impl<T: fmt::Debug> fmt::Debug for Optional<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Some(value) => formatter.debug_tuple("Some").field(value).finish(),
            Self::None => formatter.write_str("None"),
        }
    }
}

impl<T: fmt::Display> fmt::Display for Optional<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Some(value) => write!(formatter, "Some({value})"),
            Self::None => formatter.write_str("None"),
        }
    }
}

// =============================================================================
// From Implementations
// =============================================================================

impl<T> From<T> for Optional<T> {
    /// Lifts a plain value into `Some`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use twofold::container::Optional;
    ///
    /// let present: Optional<i32> = 42.into();
    /// assert_eq!(present, Optional::Some(42));
    /// ```
    #[inline]
    fn from(value: T) -> Self {
        Self::Some(value)
    }
}

impl<T> From<Option<T>> for Optional<T> {
    /// Converts a standard-library `Option` to an `Optional`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use twofold::container::Optional;
    ///
    /// let present: Optional<i32> = Some(42).into();
    /// assert_eq!(present, Optional::Some(42));
    ///
    /// let absent: Optional<i32> = None.into();
    /// assert_eq!(absent, Optional::None);
    /// ```
    #[inline]
    fn from(option: Option<T>) -> Self {
        match option {
            Some(value) => Self::Some(value),
            None => Self::None,
        }
    }
}

impl<T> From<Optional<T>> for Option<T> {
    /// Converts an `Optional` to a standard-library `Option`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use twofold::container::Optional;
    ///
    /// let present: Option<i32> = Optional::Some(42).into();
    /// assert_eq!(present, Some(42));
    ///
    /// let absent: Option<i32> = Optional::<i32>::None.into();
    /// assert_eq!(absent, None);
    /// ```
    #[inline]
    fn from(optional: Optional<T>) -> Self {
        match optional {
            Optional::Some(value) => Some(value),
            Optional::None => None,
        }
    }
}

// =============================================================================
// Iterators
// =============================================================================

/// A borrowing iterator over the value of an [`Optional`].
///
/// Yields one `&T` if the container is `Some`, nothing if it is `None`.
/// Created by [`Optional::iter`]; each call produces a fresh cursor, and
/// an exhausted cursor keeps returning `None`.
pub struct OptionalIterator<'a, T> {
    remaining: Optional<&'a T>,
}

impl<'a, T> Iterator for OptionalIterator<'a, T> {
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

impl<T> DoubleEndedIterator for OptionalIterator<'_, T> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        self.next()
    }
}

impl<T> ExactSizeIterator for OptionalIterator<'_, T> {
    #[inline]
    fn len(&self) -> usize {
        usize::from(self.remaining.is_some())
    }
}

impl<T> FusedIterator for OptionalIterator<'_, T> {}

/// An owning iterator over the value of an [`Optional`].
///
/// Yields the contained value once if the container is `Some`, nothing
/// if it is `None`. Created by the [`IntoIterator`] implementation.
pub struct OptionalIntoIterator<T> {
    remaining: Optional<T>,
}

impl<T> Iterator for OptionalIntoIterator<T> {
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

impl<T> DoubleEndedIterator for OptionalIntoIterator<T> {
    #[inline]
    fn next_back(&mut self) -> Option<T> {
        self.next()
    }
}

impl<T> ExactSizeIterator for OptionalIntoIterator<T> {
    #[inline]
    fn len(&self) -> usize {
        usize::from(self.remaining.is_some())
    }
}

impl<T> FusedIterator for OptionalIntoIterator<T> {}

impl<T> IntoIterator for Optional<T> {
    type Item = T;
    type IntoIter = OptionalIntoIterator<T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        OptionalIntoIterator { remaining: self }
    }
}

impl<'a, T> IntoIterator for &'a Optional<T> {
    type Item = &'a T;
    type IntoIter = OptionalIterator<'a, T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
