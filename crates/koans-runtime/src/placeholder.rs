//! Fill-in-the-blank placeholders.
//!
//! A koan marks every blank with `__()?` (a short value) or `___()?` (a longer
//! one). Both are generic over the value type, so the koan type-checks before
//! the student has answered; reaching either at run time means the koan is not
//! solved yet. The student replaces the whole call, `?` included, with a
//! literal.
//!
//! ```
//! use koans_runtime::prelude::*;
//!
//! fn test_addition() -> KoanResult {
//!     assert_equal(__()?, 2 + 2)
//! }
//!
//! assert!(matches!(test_addition(), Err(KoanError::Unsolved { .. })));
//! ```

use serde::{Deserialize, Serialize};

use crate::error::{KoanError, KoanResult};

/// The two placeholder spellings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlaceholderKind {
    /// `__`, for short answers.
    Short,
    /// `___`, for longer answers.
    Long,
}

impl PlaceholderKind {
    /// How the placeholder is spelled in koan source.
    #[must_use]
    pub const fn spelling(&self) -> &'static str {
        match self {
            Self::Short => "__",
            Self::Long => "___",
        }
    }
}

impl std::fmt::Display for PlaceholderKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.spelling())
    }
}

/// Short placeholder. Always unsolved.
#[allow(clippy::missing_const_for_fn)]
pub fn __<T>() -> KoanResult<T> {
    Err(KoanError::unsolved(PlaceholderKind::Short))
}

/// Long placeholder. Always unsolved.
#[allow(clippy::missing_const_for_fn)]
pub fn ___<T>() -> KoanResult<T> {
    Err(KoanError::unsolved(PlaceholderKind::Long))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_placeholder_is_unsolved() {
        assert_eq!(
            __::<i32>(),
            Err(KoanError::unsolved(PlaceholderKind::Short))
        );
        assert_eq!(
            __::<String>(),
            Err(KoanError::unsolved(PlaceholderKind::Short))
        );
    }

    #[test]
    fn test_long_placeholder_is_unsolved() {
        assert_eq!(
            ___::<Vec<u8>>(),
            Err(KoanError::unsolved(PlaceholderKind::Long))
        );
    }

    #[test]
    fn test_placeholder_spelling() {
        assert_eq!(PlaceholderKind::Short.to_string(), "__");
        assert_eq!(PlaceholderKind::Long.to_string(), "___");
    }

    #[test]
    fn test_placeholder_short_circuits_a_koan() {
        fn koan() -> KoanResult {
            let _answer: bool = ___()?;
            Err(KoanError::assertion("never reached"))
        }

        assert_eq!(koan(), Err(KoanError::unsolved(PlaceholderKind::Long)));
    }
}
