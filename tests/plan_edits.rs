use rfscout::{
    assignment::AssignmentPatch,
    config::{CoordinationConfig, PlanConfig},
    engine::intermod::round_mhz,
    error::CoordinationError,
    plan::store::{CoordinationPlan, PlanError},
    types::{DeviceKind, DiagnosticKind, Origin},
};

fn plan() -> CoordinationPlan {
    CoordinationPlan::new(CoordinationConfig::default(), PlanConfig::default())
}

fn values(plan: &CoordinationPlan, kind: DeviceKind) -> Vec<f64> {
    plan.by_kind(kind).iter().map(|a| round_mhz(a.value)).collect()
}

#[test]
fn calculate_places_mics_then_iems() {
    let mut plan = plan();
    let ids = plan.calculate(4, 4).unwrap();

    assert_eq!(ids, vec![1, 2, 3, 4, 5, 6, 7, 8]);
    assert_eq!(plan.ordered_ids(), ids.as_slice());
    assert_eq!(values(&plan, DeviceKind::Mic), vec![470.5, 470.775, 471.6, 471.875]);
    assert_eq!(values(&plan, DeviceKind::Iem), vec![560.5, 560.875, 561.9, 562.275]);
    assert!(plan.analysis().is_clean());
    assert_eq!(plan.analysis().im_products.len(), 35);
}

#[test]
fn recalculate_replaces_previous_assignments() {
    let mut plan = plan();
    plan.calculate(4, 4).unwrap();
    let ids = plan.calculate(1, 1).unwrap();

    assert_eq!(ids, vec![9, 10]);
    assert_eq!(plan.len(), 2);
    assert!(plan.get(1).is_none());
}

#[test]
fn add_extends_each_kind_in_its_band() {
    let mut plan = plan();
    plan.set_active_channels([20]);
    plan.calculate(2, 2).unwrap();

    let mic = plan.add(DeviceKind::Mic).unwrap().expect("room for a mic");
    let iem = plan.add(DeviceKind::Iem).unwrap().expect("room for an IEM");

    assert_eq!(round_mhz(plan.get(mic).unwrap().value), 471.6);
    assert_eq!(round_mhz(plan.get(iem).unwrap().value), 561.9);
    assert_eq!(plan.len(), 6);
}

#[test]
fn add_reports_full_band_as_none() {
    let cfg = PlanConfig {
        mic_band: rfscout::types::SubBand::new(470.0, 471.5),
        ..PlanConfig::default()
    };
    let mut plan = CoordinationPlan::new(CoordinationConfig::default(), cfg);
    plan.calculate(2, 0).unwrap();
    assert_eq!(plan.add(DeviceKind::Mic).unwrap(), None);
    assert_eq!(plan.len(), 2);
}

#[test]
fn manual_edit_into_active_channel_raises_tv_issue() {
    let mut plan = plan();
    plan.set_active_channels([20]);
    let ids = plan.calculate(2, 0).unwrap();
    assert!(plan.analysis().issues.is_empty());

    plan.update(
        ids[0],
        AssignmentPatch {
            value: Some(508.0),
            ..AssignmentPatch::default()
        },
    )
    .unwrap();

    let rec = plan.get(ids[0]).unwrap();
    assert_eq!(rec.value, 508.0);
    assert_eq!(rec.origin, Origin::Manual);
    assert_eq!(plan.analysis().issues.len(), 1);
    assert_eq!(plan.analysis().issues[0].kind, DiagnosticKind::TvConflict);
}

#[test]
fn toggling_channel_reanalyses() {
    let mut plan = plan();
    let id = plan.insert_manual(545.0, DeviceKind::Mic, Some("Spare".into())).unwrap();
    assert!(plan.analysis().is_clean());

    assert!(plan.toggle_channel(26));
    assert_eq!(plan.active_channels(), vec![26]);
    assert_eq!(plan.analysis().issues.len(), 1);

    assert!(!plan.toggle_channel(26));
    assert!(plan.active_channels().is_empty());
    assert!(plan.analysis().is_clean());
    assert_eq!(plan.get(id).unwrap().label.as_deref(), Some("Spare"));
}

#[test]
fn active_channels_stay_sorted() {
    let mut plan = plan();
    plan.toggle_channel(32);
    plan.toggle_channel(24);
    plan.toggle_channel(28);
    assert_eq!(plan.active_channels(), vec![24, 28, 32]);
}

#[test]
fn out_of_range_edits_are_rejected() {
    let mut plan = plan();
    let id = plan.insert_manual(500.0, DeviceKind::Mic, None).unwrap();

    let err = plan
        .update(
            id,
            AssignmentPatch {
                value: Some(650.0),
                ..AssignmentPatch::default()
            },
        )
        .unwrap_err();
    assert_eq!(err, PlanError::OutOfRange(650.0));
    assert_eq!(plan.get(id).unwrap().value, 500.0);

    assert_eq!(
        plan.insert_manual(469.9, DeviceKind::Iem, None).unwrap_err(),
        PlanError::OutOfRange(469.9)
    );
}

#[test]
fn remove_and_missing_ids() {
    let mut plan = plan();
    let a = plan.insert_manual(500.0, DeviceKind::Mic, None).unwrap();
    let b = plan.insert_manual(500.1, DeviceKind::Mic, None).unwrap();
    assert_eq!(plan.analysis().warnings_of(DiagnosticKind::Spacing).count(), 2);

    let removed = plan.remove(a).unwrap();
    assert_eq!(removed.value, 500.0);
    assert_eq!(plan.ordered_ids(), [b].as_slice());
    assert!(plan.analysis().is_clean());

    assert_eq!(plan.remove(a).unwrap_err(), PlanError::MissingAssignment(a));
    assert_eq!(
        plan.update(a, AssignmentPatch::default()).unwrap_err(),
        PlanError::MissingAssignment(a)
    );
}

#[test]
fn invalid_config_surfaces_as_plan_error() {
    let cfg = CoordinationConfig {
        step: 0.0,
        ..CoordinationConfig::default()
    };
    let mut plan = CoordinationPlan::new(cfg, PlanConfig::default());
    assert_eq!(
        plan.calculate(1, 1).unwrap_err(),
        PlanError::Coordination(CoordinationError::InvalidStep(0.0))
    );
    assert!(plan.is_empty());
}

#[test]
fn plan_state_feeds_detailed_report() {
    use rfscout::{
        engine::occupancy::OccupancyMap,
        export::{detailed_report, ReportContext},
    };

    let mut plan = plan();
    plan.set_active_channels([28, 24, 32]);
    plan.calculate(2, 1).unwrap();

    let occupancy = OccupancyMap::new(plan.table(), plan.active_channels());
    let out = detailed_report(
        &plan.assignments(),
        &occupancy,
        plan.analysis(),
        &ReportContext::default(),
    );
    assert!(out.contains("Ch 24: 530-536 MHz\nCh 28: 554-560 MHz\nCh 32: 578-584 MHz"));
    assert!(out.contains("  2. Mic 2: 470.775 MHz"));
    assert!(out.contains("Issues: 0"));
}

#[test]
fn plan_errors_render_and_wrap_engine_errors() {
    let err: PlanError = CoordinationError::InvalidIterationLimit.into();
    assert_eq!(err, PlanError::Coordination(CoordinationError::InvalidIterationLimit));
    assert_eq!(
        err.to_string(),
        "coordination failed: search iteration ceiling must be at least 1"
    );
    assert!(std::error::Error::source(&err).is_some());

    assert_eq!(
        PlanError::OutOfRange(650.0).to_string(),
        "650.000 MHz is outside the editable range"
    );
    assert_eq!(PlanError::MissingAssignment(7).to_string(), "no assignment with id 7");
}
