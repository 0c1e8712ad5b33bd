//! Numeric coordination settings and plan sub-band layout.
//!
//! Every engine call receives a [`CoordinationConfig`] explicitly. Both
//! structs deserialize with per-field defaults, so a JSON document only needs
//! the values it overrides:
//!
//! ```
//! use rfscout::config::CoordinationConfig;
//!
//! let cfg = CoordinationConfig::from_json_str(r#"{ "min_spacing_iem": 0.4 }"#).unwrap();
//! assert_eq!(cfg.min_spacing_iem, 0.4);
//! assert_eq!(cfg.min_spacing_mic, 0.250);
//! ```

use serde::{Deserialize, Serialize};

use crate::{
    error::CoordinationError,
    types::{DeviceKind, Mhz, SubBand},
};

/// Spacing, margin and scan settings shared by search and analysis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CoordinationConfig {
    /// Minimum spacing between two mics.
    pub min_spacing_mic: Mhz,
    /// Minimum spacing involving an IEM.
    pub min_spacing_iem: Mhz,
    /// Separation kept between the mic and IEM groups by the sub-band layout.
    pub min_spacing_mic_to_iem: Mhz,
    /// Clearance added past an occupied TV channel's upper edge.
    pub tv_guard_band: Mhz,
    /// Scan step.
    pub step: Mhz,
    /// Distance below which a carrier conflicts with an IM product.
    pub im_margin: Mhz,
    /// Distance kept from both edges of a searched band.
    pub band_edge_margin: Mhz,
    /// Range IM products must fall in to be reported.
    pub coordination_band: SubBand,
    /// Hard ceiling on search loop iterations.
    pub max_search_iterations: usize,
}

impl Default for CoordinationConfig {
    fn default() -> Self {
        Self {
            min_spacing_mic: 0.250,
            min_spacing_iem: 0.350,
            min_spacing_mic_to_iem: 4.0,
            tv_guard_band: 0.5,
            step: 0.025,
            im_margin: 0.250,
            band_edge_margin: 0.5,
            coordination_band: SubBand::FULL_UHF,
            max_search_iterations: 1_000_000,
        }
    }
}

impl CoordinationConfig {
    /// Parses a (possibly partial) JSON override document.
    pub fn from_json_str(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Minimum spacing for carriers of a single kind.
    pub fn spacing_for(&self, kind: DeviceKind) -> Mhz {
        match kind {
            DeviceKind::Mic => self.min_spacing_mic,
            DeviceKind::Iem => self.min_spacing_iem,
        }
    }

    /// Minimum spacing for a pair; the IEM spacing wins if either is an IEM.
    pub fn spacing_between(&self, a: DeviceKind, b: DeviceKind) -> Mhz {
        if a == DeviceKind::Iem || b == DeviceKind::Iem {
            self.min_spacing_iem
        } else {
            self.min_spacing_mic
        }
    }

    /// Rejects settings under which the search cannot make progress.
    pub fn validate(&self) -> Result<(), CoordinationError> {
        if !(self.step.is_finite() && self.step > 0.0) {
            return Err(CoordinationError::InvalidStep(self.step));
        }
        if !(self.tv_guard_band.is_finite() && self.tv_guard_band > 0.0) {
            return Err(CoordinationError::InvalidGuardBand(self.tv_guard_band));
        }
        for spacing in [
            self.min_spacing_mic,
            self.min_spacing_iem,
            self.min_spacing_mic_to_iem,
        ] {
            if !(spacing.is_finite() && spacing >= 0.0) {
                return Err(CoordinationError::NegativeSpacing(spacing));
            }
        }
        if !(self.im_margin.is_finite() && self.im_margin >= 0.0) {
            return Err(CoordinationError::NegativeMargin(self.im_margin));
        }
        if !(self.band_edge_margin.is_finite() && self.band_edge_margin >= 0.0) {
            return Err(CoordinationError::InvalidEdgeMargin(self.band_edge_margin));
        }
        if self.max_search_iterations == 0 {
            return Err(CoordinationError::InvalidIterationLimit);
        }
        Ok(())
    }
}

/// Where a plan searches each device kind, and which manual values it accepts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlanConfig {
    /// Mic search range.
    pub mic_band: SubBand,
    /// IEM search range, kept above the mics by the mic-to-IEM separation.
    pub iem_band: SubBand,
    /// Accepted range for hand-entered values.
    pub manual_range: SubBand,
}

impl Default for PlanConfig {
    fn default() -> Self {
        Self {
            mic_band: SubBand::new(470.0, 550.0),
            iem_band: SubBand::new(560.0, 608.0),
            manual_range: SubBand::FULL_UHF,
        }
    }
}

impl PlanConfig {
    /// Parses a (possibly partial) JSON override document.
    pub fn from_json_str(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Search range for `kind`.
    pub fn band_for(&self, kind: DeviceKind) -> SubBand {
        match kind {
            DeviceKind::Mic => self.mic_band,
            DeviceKind::Iem => self.iem_band,
        }
    }
}
