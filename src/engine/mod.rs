//! Pure RF coordination engine.
//!
//! [`search::find`] generates a fresh assignment and [`analyzer::analyze`]
//! re-validates any set, generated or hand-edited. Neither keeps state
//! between calls.

/// Diagnostics over an existing frequency set.
pub mod analyzer;
/// Third- and fifth-order intermodulation products.
pub mod intermod;
/// Regulatory TV channel table and active-channel containment.
pub mod occupancy;
/// Greedy forward scan for new frequencies.
pub mod search;
