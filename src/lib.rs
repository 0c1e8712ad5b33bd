//! UHF wireless microphone and IEM frequency coordination.
//!
//! # Examples
//!
//! Searching for four mics and validating the result:
//! ```
//! use rfscout::{
//!     config::CoordinationConfig,
//!     engine::{analyzer::analyze, occupancy::{ChannelTable, OccupancyMap}, search::find},
//!     types::{DeviceKind, SubBand},
//! };
//!
//! let cfg = CoordinationConfig::default();
//! let table = ChannelTable::us_uhf();
//! let occupancy = OccupancyMap::new(&table, [24, 28, 32]);
//!
//! let mics = find(4, DeviceKind::Mic, &[], &occupancy, SubBand::new(470.0, 550.0), &cfg)
//!     .expect("valid config");
//! assert_eq!(mics.len(), 4);
//!
//! let analysis = analyze(&mics, &occupancy, &cfg);
//! assert!(analysis.issues.is_empty());
//! ```
//!
//! Editing a plan, which re-analyses after every change:
//! ```
//! use rfscout::{
//!     assignment::AssignmentPatch,
//!     config::{CoordinationConfig, PlanConfig},
//!     plan::store::CoordinationPlan,
//! };
//!
//! let mut plan = CoordinationPlan::new(CoordinationConfig::default(), PlanConfig::default());
//! plan.set_active_channels([20]);
//! let ids = plan.calculate(2, 2).expect("calculate");
//! plan.update(ids[0], AssignmentPatch { value: Some(508.0), ..AssignmentPatch::default() })
//!     .expect("update");
//! assert_eq!(plan.analysis().issues.len(), 1);
//! ```
#![deny(missing_docs)]

/// Frequency assignment record and edit patches.
pub mod assignment;
/// Numeric coordination settings and plan sub-bands.
pub mod config;
/// Pure search and analysis engine.
pub mod engine;
/// Engine error type.
pub mod error;
/// Frequency list and report renderers.
pub mod export;
/// Editable coordination plan.
pub mod plan;
/// Shared primitive types and enums.
pub mod types;
