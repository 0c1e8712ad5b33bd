//! Frequency assignment record and edit patch types.

use serde::{Deserialize, Serialize};

use crate::types::{DeviceKind, Mhz, Origin};

/// One coordinated operating frequency.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Assignment {
    /// Carrier frequency in MHz.
    pub value: Mhz,
    /// Device family.
    pub kind: DeviceKind,
    /// Optional operator-facing name ("Lead Vox", "Drum IEM").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    /// Search result or hand edit.
    #[serde(default)]
    pub origin: Origin,
}

impl Assignment {
    /// Assignment produced by the greedy search.
    pub fn calculated(value: Mhz, kind: DeviceKind) -> Self {
        Self {
            value,
            kind,
            label: None,
            origin: Origin::Calculated,
        }
    }

    /// Assignment entered by hand.
    pub fn manual(value: Mhz, kind: DeviceKind) -> Self {
        Self {
            value,
            kind,
            label: None,
            origin: Origin::Manual,
        }
    }

    /// Builder-style label setter.
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }
}

/// Sparse edit where each `Some` field overwrites the assignment value.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct AssignmentPatch {
    /// Replacement frequency; marks the assignment as manual.
    pub value: Option<Mhz>,
    /// Replacement label; `Some(None)` clears it.
    pub label: Option<Option<String>>,
}

impl AssignmentPatch {
    /// Returns true when no fields are set.
    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }

    /// Applies this patch in place to `rec`.
    pub fn apply_to(&self, rec: &mut Assignment) {
        if let Some(v) = self.value {
            rec.value = v;
            rec.origin = Origin::Manual;
        }
        if let Some(v) = &self.label {
            rec.label = v.clone();
        }
    }
}
