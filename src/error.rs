//! Engine error type.

use thiserror::Error;

use crate::types::{ChannelNumber, Mhz};

/// Configuration and termination failures raised by the coordination engine.
///
/// Empty inputs and exhausted bands are not errors; these variants only
/// signal settings under which the search could not make progress.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CoordinationError {
    /// Scan step is zero, negative or not finite.
    #[error("scan step must be a positive finite value, got {0} MHz")]
    InvalidStep(Mhz),

    /// TV guard band is zero, negative or not finite.
    #[error("TV guard band must be a positive finite value, got {0} MHz")]
    InvalidGuardBand(Mhz),

    /// A minimum spacing is negative or not finite.
    #[error("minimum spacing must be a non-negative finite value, got {0} MHz")]
    NegativeSpacing(Mhz),

    /// IM safety margin is negative or not finite.
    #[error("IM safety margin must be a non-negative finite value, got {0} MHz")]
    NegativeMargin(Mhz),

    /// Band edge margin is negative or not finite.
    #[error("band edge margin must be a non-negative finite value, got {0} MHz")]
    InvalidEdgeMargin(Mhz),

    /// Iteration ceiling is zero.
    #[error("search iteration ceiling must be at least 1")]
    InvalidIterationLimit,

    /// Minimum spacing leaves no room inside the searched band.
    #[error("spacing {spacing} MHz does not fit in a {width} MHz band")]
    SpacingExceedsBand {
        /// Spacing for the requested kind.
        spacing: Mhz,
        /// Searched band width.
        width: Mhz,
    },

    /// Two regulatory channel blocks overlap.
    #[error("channel {first} overlaps channel {second}")]
    OverlappingChannels {
        /// Lower channel number.
        first: ChannelNumber,
        /// Higher channel number.
        second: ChannelNumber,
    },

    /// The greedy search hit its iteration ceiling.
    #[error("frequency search exceeded {limit} iterations")]
    IterationLimit {
        /// Configured ceiling.
        limit: usize,
    },
}
