use std::collections::BTreeSet;

use hashbrown::HashMap;
use thiserror::Error;
use tracing::debug;

use crate::{
    assignment::{Assignment, AssignmentPatch},
    config::{CoordinationConfig, PlanConfig},
    engine::{
        analyzer::{analyze, Analysis},
        occupancy::{ChannelTable, OccupancyMap},
        search::find,
    },
    error::CoordinationError,
    types::{AssignmentId, ChannelNumber, DeviceKind, Mhz},
};

/// Failures raised by plan edits.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PlanError {
    /// No assignment carries this id.
    #[error("no assignment with id {0}")]
    MissingAssignment(AssignmentId),
    /// Hand-entered value lies outside the editable range.
    #[error("{0:.3} MHz is outside the editable range")]
    OutOfRange(Mhz),
    /// The engine rejected the search.
    #[error("coordination failed: {0}")]
    Coordination(#[from] CoordinationError),
}

/// Working frequency list for one show, re-analysed after every edit.
#[derive(Debug)]
pub struct CoordinationPlan {
    config: CoordinationConfig,
    plan_config: PlanConfig,
    table: ChannelTable,
    records: HashMap<AssignmentId, Assignment>,
    order: Vec<AssignmentId>,
    active: BTreeSet<ChannelNumber>,
    analysis: Analysis,
    next_id: AssignmentId,
}

impl CoordinationPlan {
    /// Empty plan over the US UHF channel table.
    pub fn new(config: CoordinationConfig, plan_config: PlanConfig) -> Self {
        Self::with_table(config, plan_config, ChannelTable::us_uhf())
    }

    /// Empty plan over a custom channel table.
    pub fn with_table(
        config: CoordinationConfig,
        plan_config: PlanConfig,
        table: ChannelTable,
    ) -> Self {
        Self {
            config,
            plan_config,
            table,
            records: HashMap::new(),
            order: Vec::new(),
            active: BTreeSet::new(),
            analysis: Analysis::default(),
            next_id: 1,
        }
    }

    /// Replaces every assignment with a fresh search: mics first, then IEMs
    /// searched against the new mics.
    pub fn calculate(
        &mut self,
        mic_count: usize,
        iem_count: usize,
    ) -> Result<Vec<AssignmentId>, PlanError> {
        let occupancy = OccupancyMap::new(&self.table, self.active.iter().copied());
        let mics = find(
            mic_count,
            DeviceKind::Mic,
            &[],
            &occupancy,
            self.plan_config.mic_band,
            &self.config,
        )?;
        let iems = find(
            iem_count,
            DeviceKind::Iem,
            &mics,
            &occupancy,
            self.plan_config.iem_band,
            &self.config,
        )?;

        self.records.clear();
        self.order.clear();
        let ids = mics
            .into_iter()
            .chain(iems)
            .map(|rec| self.push(rec))
            .collect();
        self.reanalyze();
        Ok(ids)
    }

    /// Searches one more `kind` frequency against everything in the plan.
    ///
    /// Returns `None` when the kind's band has no room left.
    pub fn add(&mut self, kind: DeviceKind) -> Result<Option<AssignmentId>, PlanError> {
        let existing = self.assignments();
        let occupancy = OccupancyMap::new(&self.table, self.active.iter().copied());
        let found = find(
            1,
            kind,
            &existing,
            &occupancy,
            self.plan_config.band_for(kind),
            &self.config,
        )?;

        let Some(rec) = found.into_iter().next() else {
            return Ok(None);
        };
        let id = self.push(rec);
        self.reanalyze();
        Ok(Some(id))
    }

    /// Appends a hand-entered assignment.
    pub fn insert_manual(
        &mut self,
        value: Mhz,
        kind: DeviceKind,
        label: Option<String>,
    ) -> Result<AssignmentId, PlanError> {
        self.check_range(value)?;
        let mut rec = Assignment::manual(value, kind);
        rec.label = label;
        let id = self.push(rec);
        self.reanalyze();
        Ok(id)
    }

    /// Applies a sparse edit to one assignment.
    pub fn update(&mut self, id: AssignmentId, patch: AssignmentPatch) -> Result<(), PlanError> {
        if let Some(value) = patch.value {
            self.check_range(value)?;
        }
        let rec = self
            .records
            .get_mut(&id)
            .ok_or(PlanError::MissingAssignment(id))?;
        if patch.is_empty() {
            return Ok(());
        }
        patch.apply_to(rec);
        self.reanalyze();
        Ok(())
    }

    /// Removes one assignment and returns it.
    pub fn remove(&mut self, id: AssignmentId) -> Result<Assignment, PlanError> {
        let rec = self
            .records
            .remove(&id)
            .ok_or(PlanError::MissingAssignment(id))?;
        if let Some(pos) = self.order.iter().position(|x| *x == id) {
            self.order.remove(pos);
        }
        self.reanalyze();
        Ok(rec)
    }

    /// Replaces the active TV channel selection.
    pub fn set_active_channels(&mut self, channels: impl IntoIterator<Item = ChannelNumber>) {
        self.active = channels.into_iter().collect();
        self.reanalyze();
    }

    /// Flips one channel; returns whether it is now active.
    pub fn toggle_channel(&mut self, channel: ChannelNumber) -> bool {
        let now_active = if self.active.remove(&channel) {
            false
        } else {
            self.active.insert(channel);
            true
        };
        self.reanalyze();
        now_active
    }

    /// Assignment with `id`, if present.
    pub fn get(&self, id: AssignmentId) -> Option<&Assignment> {
        self.records.get(&id)
    }

    /// Ids in plan order.
    pub fn ordered_ids(&self) -> &[AssignmentId] {
        &self.order
    }

    /// Assignments in plan order.
    pub fn assignments(&self) -> Vec<Assignment> {
        self.order
            .iter()
            .filter_map(|id| self.records.get(id).cloned())
            .collect()
    }

    /// Assignments of one kind, in plan order.
    pub fn by_kind(&self, kind: DeviceKind) -> Vec<&Assignment> {
        self.order
            .iter()
            .filter_map(|id| self.records.get(id))
            .filter(|rec| rec.kind == kind)
            .collect()
    }

    /// Active channels, ascending.
    pub fn active_channels(&self) -> Vec<ChannelNumber> {
        self.active.iter().copied().collect()
    }

    /// Result of the latest re-analysis.
    pub fn analysis(&self) -> &Analysis {
        &self.analysis
    }

    /// Channel table the plan searches against.
    pub fn table(&self) -> &ChannelTable {
        &self.table
    }

    /// Number of assignments.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// True when the plan holds no assignments.
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    fn push(&mut self, rec: Assignment) -> AssignmentId {
        let id = self.next_id;
        self.next_id += 1;
        self.records.insert(id, rec);
        self.order.push(id);
        id
    }

    fn check_range(&self, value: Mhz) -> Result<(), PlanError> {
        if self.plan_config.manual_range.contains(value) {
            Ok(())
        } else {
            Err(PlanError::OutOfRange(value))
        }
    }

    fn reanalyze(&mut self) {
        let assignments = self.assignments();
        let occupancy = OccupancyMap::new(&self.table, self.active.iter().copied());
        self.analysis = analyze(&assignments, &occupancy, &self.config);
        debug!(
            assignments = assignments.len(),
            active_channels = self.active.len(),
            issues = self.analysis.issues.len(),
            warnings = self.analysis.warnings.len(),
            "plan re-analysed"
        );
    }
}
