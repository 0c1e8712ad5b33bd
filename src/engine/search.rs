use tracing::{debug, trace, warn};

use crate::{
    assignment::Assignment,
    config::CoordinationConfig,
    error::CoordinationError,
    types::{DeviceKind, Mhz, SubBand},
};

use super::{
    intermod::{all_im_products, has_im_conflict},
    occupancy::OccupancyMap,
};

/// Greedy forward scan of `band` for up to `count` new `kind` frequencies.
///
/// The scan starts `band_edge_margin` above the lower edge and stops once it
/// reaches `band_edge_margin` below the upper edge. A candidate inside an
/// active channel jumps to the channel's upper edge plus the guard band. A
/// candidate closer than the kind's spacing to any existing or accepted
/// frequency, or one that lands within `im_margin` of an IM product of the
/// whole set including itself, advances by one step. Accepted candidates
/// advance by spacing plus one step.
///
/// The IM product set is rebuilt from scratch for every candidate so that
/// kHz rounding matches a full recomputation exactly.
///
/// Returning fewer than `count` frequencies means the band is exhausted; it
/// is not an error.
pub fn find(
    count: usize,
    kind: DeviceKind,
    existing: &[Assignment],
    occupancy: &OccupancyMap<'_>,
    band: SubBand,
    config: &CoordinationConfig,
) -> Result<Vec<Assignment>, CoordinationError> {
    config.validate()?;

    let spacing = config.spacing_for(kind);
    let width = band.width();
    if width > 0.0 && spacing >= width {
        return Err(CoordinationError::SpacingExceedsBand { spacing, width });
    }

    debug!(
        count,
        kind = kind.as_str(),
        existing = existing.len(),
        band_min = band.min,
        band_max = band.max,
        "searching for frequencies"
    );

    let mut accepted: Vec<Assignment> = Vec::new();
    // existing values followed by accepted values, in acceptance order
    let mut pool: Vec<Mhz> = existing.iter().map(|a| a.value).collect();

    let mut candidate = band.min + config.band_edge_margin;
    let stop = band.max - config.band_edge_margin;
    let mut iterations = 0usize;

    while accepted.len() < count && candidate < stop {
        iterations += 1;
        if iterations > config.max_search_iterations {
            warn!(
                limit = config.max_search_iterations,
                accepted = accepted.len(),
                "frequency search hit iteration ceiling"
            );
            return Err(CoordinationError::IterationLimit {
                limit: config.max_search_iterations,
            });
        }

        if let Some(channel) = occupancy.is_in_channel(candidate) {
            trace!(candidate, channel = channel.channel, "candidate inside active TV channel");
            candidate = channel.max + config.tv_guard_band;
            continue;
        }

        if pool.iter().any(|f| (candidate - f).abs() < spacing) {
            candidate += config.step;
            continue;
        }

        pool.push(candidate);
        let products = all_im_products(&pool, &config.coordination_band);
        if has_im_conflict(candidate, &products, config.im_margin) {
            trace!(candidate, "candidate near IM product");
            pool.pop();
            candidate += config.step;
            continue;
        }

        debug!(frequency = candidate, kind = kind.as_str(), "accepted frequency");
        accepted.push(Assignment::calculated(candidate, kind));
        candidate += spacing + config.step;
    }

    if accepted.len() < count {
        warn!(
            requested = count,
            found = accepted.len(),
            kind = kind.as_str(),
            "band exhausted before request was filled"
        );
    }

    Ok(accepted)
}
