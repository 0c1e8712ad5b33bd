//! Shared primitive aliases and coordination enums.

use serde::{Deserialize, Serialize};

/// Frequency in MHz.
pub type Mhz = f64;
/// US broadcast TV channel number.
pub type ChannelNumber = u8;
/// Monotonic assignment identifier inside a plan.
pub type AssignmentId = u64;

/// Wireless device family an assignment is coordinated for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeviceKind {
    /// Wireless microphone.
    Mic,
    /// In-ear-monitor receiver.
    Iem,
}

impl DeviceKind {
    /// Wire name (`mic` or `iem`).
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Mic => "mic",
            Self::Iem => "iem",
        }
    }

    /// Human prefix used when an assignment carries no label.
    pub fn display_prefix(self) -> &'static str {
        match self {
            Self::Mic => "Mic",
            Self::Iem => "IEM",
        }
    }
}

/// How an assignment came to hold its current value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Origin {
    /// Produced by the greedy search.
    #[default]
    Calculated,
    /// Value entered or edited by hand.
    Manual,
}

impl Origin {
    /// Wire name (`calculated` or `manual`).
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Calculated => "calculated",
            Self::Manual => "manual",
        }
    }
}

/// Diagnostic severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Must be resolved before the show.
    Error,
    /// Worth a second look.
    Warning,
}

/// Category of a coordination diagnostic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DiagnosticKind {
    /// Frequency sits inside an active TV channel.
    TvConflict,
    /// Frequency sits near an intermodulation product.
    ImConflict,
    /// Frequency is closer than the minimum spacing to another one.
    Spacing,
}

impl DiagnosticKind {
    /// Fixed severity for each category.
    pub fn severity(self) -> Severity {
        match self {
            Self::TvConflict => Severity::Error,
            Self::ImConflict | Self::Spacing => Severity::Warning,
        }
    }
}

/// Inclusive frequency range in MHz.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SubBand {
    /// Lower edge.
    pub min: Mhz,
    /// Upper edge.
    pub max: Mhz,
}

impl SubBand {
    /// Full US UHF coordination range, TV channels 14-36.
    pub const FULL_UHF: SubBand = SubBand::new(470.0, 608.0);

    /// Creates a range from its edges.
    pub const fn new(min: Mhz, max: Mhz) -> Self {
        Self { min, max }
    }

    /// Width in MHz; negative for inverted ranges.
    pub fn width(&self) -> Mhz {
        self.max - self.min
    }

    /// Inclusive containment test.
    pub fn contains(&self, freq: Mhz) -> bool {
        freq >= self.min && freq <= self.max
    }
}
