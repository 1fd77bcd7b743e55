//! Structural invariant checks for values.
//!
//! Checks are always available through [`DebugInvariants::validate_invariants`];
//! the assertion form only fires in debug builds or with the
//! `check-invariants` / `strict-invariants` features.

use crate::inspect_error::InspectError;

/// Structural self-checks for values and their containers.
pub trait DebugInvariants {
    /// Panics on a broken invariant, if checks are compiled in.
    fn debug_assert_invariants(&self);
    /// Returns the first broken invariant as an error.
    fn validate_invariants(&self) -> Result<(), InspectError>;
}

/// Evaluates `$expr` (a `Result<(), InspectError>`) and panics with an
/// `[invariants] <ctx>` prefix if it fails. Expands to nothing unless
/// `debug_assertions`, `check-invariants` or `strict-invariants` is active.
#[macro_export]
macro_rules! debug_invariants {
    ($expr:expr, $($ctx:tt)*) => {
        #[cfg(any(debug_assertions, feature = "strict-invariants", feature = "check-invariants"))]
        if let Err(e) = $expr {
            panic!(concat!("[invariants] ", $($ctx)*, ": {}"), e);
        }
    };
}
