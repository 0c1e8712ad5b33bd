use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use crate::{
    error::CoordinationError,
    types::{ChannelNumber, Mhz},
};

/// 6 MHz block occupied by one TV channel.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChannelBlock {
    /// Lower edge in MHz.
    pub min: Mhz,
    /// Upper edge in MHz.
    pub max: Mhz,
}

/// Channel number plus its block, as returned by a containment lookup.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChannelInfo {
    /// TV channel number.
    pub channel: ChannelNumber,
    /// Lower edge in MHz.
    pub min: Mhz,
    /// Upper edge in MHz.
    pub max: Mhz,
}

/// Regulatory channel-number to frequency-block mapping.
#[derive(Debug, Clone, PartialEq)]
pub struct ChannelTable {
    blocks: BTreeMap<ChannelNumber, ChannelBlock>,
}

impl ChannelTable {
    /// First UHF channel of the post-auction US TV band.
    pub const US_UHF_FIRST: ChannelNumber = 14;
    /// Last UHF channel of the post-auction US TV band.
    pub const US_UHF_LAST: ChannelNumber = 36;
    /// Block width of a US TV channel.
    pub const US_CHANNEL_WIDTH: Mhz = 6.0;

    /// US channels 14-36, contiguous 6 MHz blocks starting at 470 MHz.
    pub fn us_uhf() -> Self {
        let blocks = (Self::US_UHF_FIRST..=Self::US_UHF_LAST)
            .map(|ch| {
                let min = 470.0 + f64::from(ch - Self::US_UHF_FIRST) * Self::US_CHANNEL_WIDTH;
                (
                    ch,
                    ChannelBlock {
                        min,
                        max: min + Self::US_CHANNEL_WIDTH,
                    },
                )
            })
            .collect();
        Self { blocks }
    }

    /// Builds a table from arbitrary blocks.
    ///
    /// Blocks may touch at an edge but must not overlap.
    pub fn from_blocks(
        blocks: impl IntoIterator<Item = (ChannelNumber, ChannelBlock)>,
    ) -> Result<Self, CoordinationError> {
        let blocks: BTreeMap<_, _> = blocks.into_iter().collect();

        let mut by_edge: Vec<(ChannelNumber, ChannelBlock)> =
            blocks.iter().map(|(ch, b)| (*ch, *b)).collect();
        by_edge.sort_by(|a, b| a.1.min.total_cmp(&b.1.min));
        for pair in by_edge.windows(2) {
            let (lo, hi) = (pair[0], pair[1]);
            if hi.1.min < lo.1.max {
                return Err(CoordinationError::OverlappingChannels {
                    first: lo.0.min(hi.0),
                    second: lo.0.max(hi.0),
                });
            }
        }

        Ok(Self { blocks })
    }

    /// Block for `channel`, if the table knows it.
    pub fn get(&self, channel: ChannelNumber) -> Option<ChannelInfo> {
        self.blocks.get(&channel).map(|b| ChannelInfo {
            channel,
            min: b.min,
            max: b.max,
        })
    }

    /// All channels in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = ChannelInfo> + '_ {
        self.blocks.iter().map(|(ch, b)| ChannelInfo {
            channel: *ch,
            min: b.min,
            max: b.max,
        })
    }
}

/// Active subset of a [`ChannelTable`] for the duration of one engine call.
#[derive(Debug, Clone)]
pub struct OccupancyMap<'t> {
    table: &'t ChannelTable,
    active: BTreeSet<ChannelNumber>,
}

impl<'t> OccupancyMap<'t> {
    /// Selects `active` channels from `table`.
    pub fn new(table: &'t ChannelTable, active: impl IntoIterator<Item = ChannelNumber>) -> Self {
        Self {
            table,
            active: active.into_iter().collect(),
        }
    }

    /// Map with no active channels.
    pub fn empty(table: &'t ChannelTable) -> Self {
        Self::new(table, [])
    }

    /// Table the active channels refer to.
    pub fn table(&self) -> &ChannelTable {
        self.table
    }

    /// Active channel numbers, ascending.
    pub fn active(&self) -> impl Iterator<Item = ChannelNumber> + '_ {
        self.active.iter().copied()
    }

    /// First active channel, in ascending order, whose inclusive block holds
    /// `freq`.
    ///
    /// Raw channel edges are used; the guard band is not applied here.
    /// Channels unknown to the table are skipped.
    pub fn is_in_channel(&self, freq: Mhz) -> Option<ChannelInfo> {
        self.active
            .iter()
            .filter_map(|ch| self.table.get(*ch))
            .find(|info| freq >= info.min && freq <= info.max)
    }
}
