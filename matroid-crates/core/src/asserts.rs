//! Leveled assertions for internal invariants of the oracles and the search.
//!
//! The simple checks are always active; the more expensive ones are only compiled in when the
//! level is raised through the `debug-checks` feature.

#[cfg(not(feature = "debug-checks"))]
pub const MATROID_ASSERT_LEVEL_DEFINITION: u8 = MATROID_ASSERT_SIMPLE;

#[cfg(feature = "debug-checks")]
pub const MATROID_ASSERT_LEVEL_DEFINITION: u8 = MATROID_ASSERT_ADVANCED;

pub const MATROID_ASSERT_SIMPLE: u8 = 1;
pub const MATROID_ASSERT_MODERATE: u8 = 2;
pub const MATROID_ASSERT_ADVANCED: u8 = 3;

#[macro_export]
#[doc(hidden)]
macro_rules! matroid_assert_simple {
    ($($arg:tt)*) => {
        if $crate::asserts::MATROID_ASSERT_LEVEL_DEFINITION >= $crate::asserts::MATROID_ASSERT_SIMPLE {
            assert!($($arg)*);
        }
    };
}

#[macro_export]
#[doc(hidden)]
macro_rules! matroid_assert_eq_simple {
    ($($arg:tt)*) => {
        if $crate::asserts::MATROID_ASSERT_LEVEL_DEFINITION >= $crate::asserts::MATROID_ASSERT_SIMPLE {
            assert_eq!($($arg)*);
        }
    };
}

#[macro_export]
#[doc(hidden)]
macro_rules! matroid_assert_moderate {
    ($($arg:tt)*) => {
        if $crate::asserts::MATROID_ASSERT_LEVEL_DEFINITION >= $crate::asserts::MATROID_ASSERT_MODERATE {
            assert!($($arg)*);
        }
    };
}

#[macro_export]
#[doc(hidden)]
macro_rules! matroid_assert_advanced {
    ($($arg:tt)*) => {
        if $crate::asserts::MATROID_ASSERT_LEVEL_DEFINITION >= $crate::asserts::MATROID_ASSERT_ADVANCED {
            assert!($($arg)*);
        }
    };
}

pub use crate::matroid_assert_advanced;
pub use crate::matroid_assert_eq_simple;
pub use crate::matroid_assert_moderate;
pub use crate::matroid_assert_simple;
