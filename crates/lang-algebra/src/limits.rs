//! Bounds that keep closure and complement computations finite.
//!
//! Kleene star over a non-empty language is infinite, and so is the
//! complement of any finite language over a non-empty alphabet. Both are
//! approximated by materialising strings up to these limits.

use crate::errors::EngineError;

/// Maximum number of symbols in a universe string when materialising
/// `Σ*` for complement.
pub const UNIVERSE_LIMIT: usize = 4;

/// Upper bound on how many powers of a language the closure operators union.
///
/// A requested limit above [`ClosureLimit::MAX`] is clamped rather than
/// rejected, keeping the worst-case cost of `L*` and `L+` bounded.
///
/// # Examples
/// ```
/// use lang_algebra::ClosureLimit;
/// assert_eq!(ClosureLimit::new(9), ClosureLimit::MAX);
/// assert_eq!(ClosureLimit::new(2).get(), 2);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct ClosureLimit(u32);

impl ClosureLimit {
    /// Largest permitted limit; higher requests clamp to this.
    pub const MAX: Self = Self(6);

    /// Fallback used when a limit input fails to parse.
    pub const DEFAULT: Self = Self(4);

    /// Build a limit, clamping to [`Self::MAX`].
    #[must_use]
    pub const fn new(limit: u32) -> Self {
        if limit > Self::MAX.0 {
            Self::MAX
        } else {
            Self(limit)
        }
    }

    /// Parse a limit from user text, clamping to [`Self::MAX`].
    ///
    /// # Errors
    /// Returns [`EngineError::InvalidClosureLimit`] when the text is not a
    /// non-negative integer; callers recover by falling back to
    /// [`Self::DEFAULT`].
    pub fn parse(raw: &str) -> Result<Self, EngineError> {
        raw.trim()
            .parse::<u32>()
            .map(Self::new)
            .map_err(|_| EngineError::InvalidClosureLimit(raw.trim().to_owned()))
    }

    /// The clamped numeric value.
    #[must_use]
    pub const fn get(self) -> u32 {
        self.0
    }
}

impl Default for ClosureLimit {
    fn default() -> Self {
        Self::DEFAULT
    }
}
