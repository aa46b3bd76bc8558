//! Fill level of one vessel or the carrier, as a tagged state.
//!
//! `Full` is its own variant, so a full-and-still-filling combination is
//! unrepresentable. Pausing keeps the partial fraction inside `Filling`
//! and only clears the `active` flag.

use thiserror::Error;

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum FillError {
    /// The target is already full; callers must stop advancing it.
    #[error("fill state is already full")]
    AlreadyFull,
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Fill {
    #[default]
    Empty,
    Filling { fraction: f32, active: bool },
    Full,
}

impl Fill {
    /// Observable fill fraction in `[0, 1]`.
    #[must_use]
    pub fn fraction(&self) -> f32 {
        match *self {
            Fill::Empty => 0.0,
            Fill::Filling { fraction, .. } => fraction.clamp(0.0, 1.0),
            Fill::Full => 1.0,
        }
    }

    #[must_use]
    pub fn is_full(&self) -> bool {
        matches!(self, Fill::Full)
    }

    /// True while a transfer is actively advancing this fill (paused
    /// partial fills report false).
    #[must_use]
    pub fn is_filling(&self) -> bool {
        matches!(self, Fill::Filling { active: true, .. })
    }

    /// Mark the fill as actively transferring. Retains any paused partial
    /// fraction.
    pub fn begin(&mut self) -> Result<(), FillError> {
        match *self {
            Fill::Full => Err(FillError::AlreadyFull),
            Fill::Empty => {
                *self = Fill::Filling {
                    fraction: 0.0,
                    active: true,
                };
                Ok(())
            }
            Fill::Filling { fraction, .. } => {
                *self = Fill::Filling {
                    fraction,
                    active: true,
                };
                Ok(())
            }
        }
    }

    /// Set the fraction to `target` (clamped to `[0, 1]`). Returns
    /// `Ok(true)` exactly once per fill cycle, on the call where the
    /// fraction first reaches 1. Calling this on a `Full` state is a
    /// caller error.
    pub fn advance(&mut self, target: f32) -> Result<bool, FillError> {
        if self.is_full() {
            return Err(FillError::AlreadyFull);
        }
        let fraction = target.clamp(0.0, 1.0);
        if fraction >= 1.0 {
            *self = Fill::Full;
            Ok(true)
        } else {
            *self = Fill::Filling {
                fraction,
                active: true,
            };
            Ok(false)
        }
    }

    /// Stop advancing without losing the partial fraction. No-op on
    /// `Empty` and `Full`.
    pub fn pause(&mut self) {
        if let Fill::Filling { fraction, .. } = *self {
            *self = Fill::Filling {
                fraction,
                active: false,
            };
        }
    }

    /// Back to `Empty` unconditionally.
    pub fn reset(&mut self) {
        *self = Fill::Empty;
    }
}
