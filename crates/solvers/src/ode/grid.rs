use thiserror::Error;

/// Relative slack used when counting whole intervals in `end / spacing`.
const INTERVAL_SLACK: f64 = 1e-9;

/// Largest number of intervals a grid may hold.
///
/// Every grid point is kept in the solution history, so this also bounds the
/// memory a single run can request.
pub const MAX_INTERVALS: usize = 100_000_000;

/// A uniform output grid on `[0, end]`.
///
/// The grid holds `intervals + 1` points at `end * k / intervals`, so the first
/// point is exactly zero and the last is exactly `end`. When `end` is not a
/// whole multiple of the requested spacing, the actual spacing is stretched
/// slightly so the grid still ends on `end`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Grid {
    end: f64,
    intervals: usize,
}

/// Errors that can occur when constructing a [`Grid`].
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum GridError {
    #[error("end must be finite and positive, got {0}")]
    End(f64),

    #[error("spacing must be finite and positive, got {0}")]
    Spacing(f64),

    #[error("spacing {spacing} exceeds end {end}")]
    SpacingExceedsEnd { spacing: f64, end: f64 },

    #[error("end {end} at spacing {spacing} needs more than {max} intervals", max = MAX_INTERVALS)]
    TooManyIntervals { end: f64, spacing: f64 },
}

impl Grid {
    /// Creates a grid from its end point and requested spacing.
    ///
    /// # Errors
    ///
    /// Returns an error if `end` or `spacing` is not finite and positive, if
    /// `spacing` is larger than `end`, or if the grid would hold more than
    /// [`MAX_INTERVALS`] intervals.
    pub fn new(end: f64, spacing: f64) -> Result<Self, GridError> {
        if !end.is_finite() || end <= 0.0 {
            return Err(GridError::End(end));
        }
        if !spacing.is_finite() || spacing <= 0.0 {
            return Err(GridError::Spacing(spacing));
        }
        if spacing > end {
            return Err(GridError::SpacingExceedsEnd { spacing, end });
        }

        let count = ((end / spacing) * (1.0 + INTERVAL_SLACK)).floor().max(1.0);
        #[allow(clippy::cast_precision_loss)]
        let max = MAX_INTERVALS as f64;
        if count > max {
            return Err(GridError::TooManyIntervals { end, spacing });
        }

        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let intervals = count as usize;

        Ok(Self { end, intervals })
    }

    /// Returns the last grid point.
    #[must_use]
    pub fn end(&self) -> f64 {
        self.end
    }

    /// Returns the number of intervals between grid points.
    #[must_use]
    pub fn intervals(&self) -> usize {
        self.intervals
    }

    /// Returns the actual spacing between grid points.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn spacing(&self) -> f64 {
        self.end / self.intervals as f64
    }

    /// Returns the `k`-th grid point.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn time(&self, k: usize) -> f64 {
        if k == self.intervals {
            self.end
        } else {
            self.end * k as f64 / self.intervals as f64
        }
    }
}
