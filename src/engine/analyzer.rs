use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{
    assignment::Assignment,
    config::CoordinationConfig,
    types::{ChannelNumber, DiagnosticKind, Mhz, Severity},
};

use super::{
    intermod::{all_im_products, has_im_conflict},
    occupancy::OccupancyMap,
};

/// One finding about one frequency.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Diagnostic {
    /// Finding category.
    pub kind: DiagnosticKind,
    /// Frequency the finding is reported against.
    pub frequency: Mhz,
    /// Operator-facing text.
    pub message: String,
    /// Always derived from `kind`.
    pub severity: Severity,
}

impl Diagnostic {
    fn new(kind: DiagnosticKind, frequency: Mhz, message: String) -> Self {
        Self {
            kind,
            frequency,
            message,
            severity: kind.severity(),
        }
    }

    /// `frequency` sits inside active TV `channel`.
    pub fn tv_conflict(frequency: Mhz, channel: ChannelNumber) -> Self {
        Self::new(
            DiagnosticKind::TvConflict,
            frequency,
            format!("{frequency:.3} MHz conflicts with TV Ch {channel}"),
        )
    }

    /// `frequency` sits near an intermodulation product.
    pub fn im_conflict(frequency: Mhz) -> Self {
        Self::new(
            DiagnosticKind::ImConflict,
            frequency,
            format!("{frequency:.3} MHz near intermod product"),
        )
    }

    /// `frequency` is closer than the minimum spacing to `other`.
    pub fn spacing(frequency: Mhz, other: Mhz) -> Self {
        Self::new(
            DiagnosticKind::Spacing,
            frequency,
            format!("{frequency:.3} MHz too close to {other:.3} MHz"),
        )
    }
}

/// Result of validating a frequency set.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Analysis {
    /// Error-severity findings, in input order.
    pub issues: Vec<Diagnostic>,
    /// Warning-severity findings, in input order.
    pub warnings: Vec<Diagnostic>,
    /// IM products of the whole set.
    pub im_products: Vec<Mhz>,
}

impl Analysis {
    /// No issues and no warnings.
    pub fn is_clean(&self) -> bool {
        self.issues.is_empty() && self.warnings.is_empty()
    }

    /// Worst severity reported against `frequency`, if any.
    pub fn severity_for(&self, frequency: Mhz) -> Option<Severity> {
        if self.issues.iter().any(|d| d.frequency == frequency) {
            Some(Severity::Error)
        } else if self.warnings.iter().any(|d| d.frequency == frequency) {
            Some(Severity::Warning)
        } else {
            None
        }
    }

    /// Warnings of one category.
    pub fn warnings_of(&self, kind: DiagnosticKind) -> impl Iterator<Item = &Diagnostic> {
        self.warnings.iter().filter(move |d| d.kind == kind)
    }
}

/// Validates `frequencies` against active channels, IM products and spacing.
///
/// Each frequency is checked in input order for a TV conflict, then an IM
/// conflict, then spacing against every other entry. A pair that violates
/// spacing is reported once from each side.
pub fn analyze(
    frequencies: &[Assignment],
    occupancy: &OccupancyMap<'_>,
    config: &CoordinationConfig,
) -> Analysis {
    let values: Vec<Mhz> = frequencies.iter().map(|f| f.value).collect();
    let im_products = all_im_products(&values, &config.coordination_band);

    let mut issues = Vec::new();
    let mut warnings = Vec::new();

    for (idx, freq) in frequencies.iter().enumerate() {
        if let Some(channel) = occupancy.is_in_channel(freq.value) {
            issues.push(Diagnostic::tv_conflict(freq.value, channel.channel));
        }

        if has_im_conflict(freq.value, &im_products, config.im_margin) {
            warnings.push(Diagnostic::im_conflict(freq.value));
        }

        for (other_idx, other) in frequencies.iter().enumerate() {
            if idx == other_idx {
                continue;
            }
            let min_spacing = config.spacing_between(freq.kind, other.kind);
            if (freq.value - other.value).abs() < min_spacing {
                warnings.push(Diagnostic::spacing(freq.value, other.value));
            }
        }
    }

    debug!(
        frequencies = frequencies.len(),
        issues = issues.len(),
        warnings = warnings.len(),
        im_products = im_products.len(),
        "coordination analysed"
    );

    Analysis {
        issues,
        warnings,
        im_products,
    }
}
