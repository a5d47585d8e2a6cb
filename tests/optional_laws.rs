//! Property-based tests for Optional<T> combinator laws.
//!
//! This module verifies the algebraic contract of the container:
//!
//! - **Functor laws** for `map`: identity and composition
//! - **Monad laws** for `and_then`: left identity, right identity,
//!   associativity
//! - Consistency between eager operations and their lazy `_else`
//!   counterparts, and between `map_or`/`map_or_else` and their defining
//!   compositions
//! - Round-trips through the Outcome and standard library bridges
//!
//! Using proptest, we generate random inputs to thoroughly verify these
//! laws across a wide range of values.

use proptest::prelude::*;
use twofold::container::{Optional, Outcome};

// =============================================================================
// Strategy Definitions
// =============================================================================

fn arb_optional_i32() -> impl Strategy<Value = Optional<i32>> {
    prop_oneof![
        Just(Optional::None),
        any::<i32>().prop_map(Optional::Some),
    ]
}

fn arb_optional_string() -> impl Strategy<Value = Optional<String>> {
    prop_oneof![
        Just(Optional::None),
        "[a-z]{1,10}".prop_map(Optional::Some),
    ]
}

// =============================================================================
// Functor Laws
// =============================================================================

proptest! {
    /// Identity Law: mapping with the identity function returns the original value
    #[test]
    fn prop_map_identity_law(value in arb_optional_i32()) {
        let result = value.map(|x| x);
        prop_assert_eq!(result, value);
    }

    /// Composition Law: mapping composed functions equals composing maps
    #[test]
    fn prop_map_composition_law(value in arb_optional_i32()) {
        let function1 = |n: i32| n.wrapping_add(1);
        let function2 = |n: i32| n.wrapping_mul(2);

        let left = value.map(function1).map(function2);
        let right = value.map(|x| function2(function1(x)));

        prop_assert_eq!(left, right);
    }

    /// Identity Law for Optional<String>
    #[test]
    fn prop_map_string_identity_law(value in arb_optional_string()) {
        let result = value.clone().map(|x| x);
        prop_assert_eq!(result, value);
    }

    /// Composition Law for Optional<String>: mapping length then doubling
    #[test]
    fn prop_map_string_composition_law(value in arb_optional_string()) {
        let function1 = |s: String| s.len();
        let function2 = |n: usize| n.wrapping_mul(2);

        let left = value.clone().map(function1).map(function2);
        let right = value.map(|x| function2(function1(x)));

        prop_assert_eq!(left, right);
    }
}

// =============================================================================
// Monad Laws
// =============================================================================

proptest! {
    /// Left Identity: Some(a).and_then(f) == f(a)
    #[test]
    fn prop_and_then_left_identity(value: i32) {
        let function = |x: i32| Optional::Some(x.wrapping_mul(2));
        prop_assert_eq!(Optional::Some(value).and_then(function), function(value));
    }

    /// Right Identity: m.and_then(Some) == m
    #[test]
    fn prop_and_then_right_identity(value in arb_optional_i32()) {
        prop_assert_eq!(value.and_then(Optional::Some), value);
    }

    /// Associativity: m.and_then(f).and_then(g) == m.and_then(|x| f(x).and_then(g))
    #[test]
    fn prop_and_then_associativity(value in arb_optional_i32()) {
        let first = |x: i32| Optional::Some(x.wrapping_add(1));
        let second = |x: i32| Optional::Some(x.wrapping_mul(2));

        let left = value.and_then(first).and_then(second);
        let right = value.and_then(|x| first(x).and_then(second));

        prop_assert_eq!(left, right);
    }
}

// =============================================================================
// Eager and Lazy Consistency
// =============================================================================

proptest! {
    /// map_or equals its defining composition map().unwrap_or()
    #[test]
    fn prop_map_or_matches_composition(value in arb_optional_i32(), default: i32) {
        let function = |x: i32| x.wrapping_mul(3);
        prop_assert_eq!(
            value.map_or(default, function),
            value.map(function).unwrap_or(default)
        );
    }

    /// map_or_else equals its defining composition map().unwrap_or_else()
    #[test]
    fn prop_map_or_else_matches_composition(value in arb_optional_i32(), default: i32) {
        let function = |x: i32| x.wrapping_mul(3);
        prop_assert_eq!(
            value.map_or_else(|| default, function),
            value.map(function).unwrap_or_else(|| default)
        );
    }

    /// unwrap_or agrees with unwrap_or_else for a constant default
    #[test]
    fn prop_unwrap_or_matches_unwrap_or_else(value in arb_optional_i32(), default: i32) {
        prop_assert_eq!(value.unwrap_or(default), value.unwrap_or_else(|| default));
    }

    /// ok_or agrees with ok_or_else for a constant error
    #[test]
    fn prop_ok_or_matches_ok_or_else(value in arb_optional_i32(), error in "[a-z]{1,10}") {
        prop_assert_eq!(value.ok_or(error.clone()), value.ok_or_else(|| error));
    }

    /// or agrees with or_else for a constant fallback
    #[test]
    fn prop_or_matches_or_else(first in arb_optional_i32(), second in arb_optional_i32()) {
        prop_assert_eq!(first.or(second), first.or_else(|| second));
    }

    /// and agrees with and_then for a constant second container
    #[test]
    fn prop_and_matches_and_then(first in arb_optional_i32(), second in arb_optional_i32()) {
        prop_assert_eq!(first.and(second), first.and_then(|_| second));
    }
}

// =============================================================================
// Identity and Absorption
// =============================================================================

proptest! {
    /// None is the identity of or on both sides
    #[test]
    fn prop_or_none_is_identity(value in arb_optional_i32()) {
        prop_assert_eq!(value.or(Optional::None), value);
        prop_assert_eq!(Optional::None.or(value), value);
    }

    /// None absorbs and regardless of the first container
    #[test]
    fn prop_and_none_absorbs(value in arb_optional_i32()) {
        prop_assert_eq!(value.and(Optional::<i32>::None), Optional::None);
    }

    /// Exactly one of the tag tests holds
    #[test]
    fn prop_tag_tests_are_exclusive(value in arb_optional_i32()) {
        prop_assert_ne!(value.is_some(), value.is_none());
    }
}

// =============================================================================
// Bridge Round-Trips
// =============================================================================

proptest! {
    /// ok_or followed by the ok projection recovers the original container
    #[test]
    fn prop_ok_or_then_ok_round_trips(value in arb_optional_i32(), error in "[a-z]{1,10}") {
        prop_assert_eq!(value.ok_or(error).ok(), value);
    }

    /// None always bridges to the given error
    #[test]
    fn prop_none_ok_or_yields_error(error in "[a-z]{1,10}") {
        let absent: Optional<i32> = Optional::None;
        prop_assert_eq!(absent.ok_or(error.clone()), Outcome::Error(error));
    }

    /// Conversion through the standard library Option is lossless
    #[test]
    fn prop_std_option_round_trip(value in any::<Option<i32>>()) {
        let converted: Optional<i32> = value.into();
        let back: Option<i32> = converted.into();
        prop_assert_eq!(back, value);
    }
}

// =============================================================================
// Ordering
// =============================================================================

proptest! {
    /// None is the minimum of the derived order
    #[test]
    fn prop_none_is_minimum(value in arb_optional_i32()) {
        prop_assert!(Optional::None <= value);
    }
}
