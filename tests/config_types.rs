use rfscout::{
    assignment::{Assignment, AssignmentPatch},
    config::{CoordinationConfig, PlanConfig},
    error::CoordinationError,
    types::{DeviceKind, DiagnosticKind, Origin, Severity, SubBand},
};

#[test]
fn severity_is_fixed_per_kind() {
    assert_eq!(DiagnosticKind::TvConflict.severity(), Severity::Error);
    assert_eq!(DiagnosticKind::ImConflict.severity(), Severity::Warning);
    assert_eq!(DiagnosticKind::Spacing.severity(), Severity::Warning);
}

#[test]
fn wire_names_match_serde() {
    assert_eq!(serde_json::to_string(&DeviceKind::Iem).unwrap(), "\"iem\"");
    assert_eq!(serde_json::to_string(&Origin::Manual).unwrap(), "\"manual\"");
    assert_eq!(
        serde_json::to_string(&DiagnosticKind::TvConflict).unwrap(),
        "\"tv_conflict\""
    );
}

#[test]
fn sub_band_edges_are_inclusive() {
    let band = SubBand::new(470.0, 550.0);
    assert!(band.contains(470.0));
    assert!(band.contains(550.0));
    assert!(!band.contains(550.001));
    assert_eq!(band.width(), 80.0);
}

#[test]
fn value_edit_marks_manual() {
    let mut rec = Assignment::calculated(470.5, DeviceKind::Mic);
    AssignmentPatch {
        value: Some(471.0),
        ..AssignmentPatch::default()
    }
    .apply_to(&mut rec);
    assert_eq!(rec.value, 471.0);
    assert_eq!(rec.origin, Origin::Manual);
}

#[test]
fn label_only_edit_keeps_origin() {
    let mut rec = Assignment::calculated(470.5, DeviceKind::Mic).with_label("Vox");
    AssignmentPatch {
        label: Some(Some("Lead Vox".to_string())),
        ..AssignmentPatch::default()
    }
    .apply_to(&mut rec);
    assert_eq!(rec.label.as_deref(), Some("Lead Vox"));
    assert_eq!(rec.origin, Origin::Calculated);

    AssignmentPatch {
        label: Some(None),
        ..AssignmentPatch::default()
    }
    .apply_to(&mut rec);
    assert_eq!(rec.label, None);
}

#[test]
fn empty_patch_is_detected() {
    assert!(AssignmentPatch::default().is_empty());
}

#[test]
fn defaults_validate() {
    assert_eq!(CoordinationConfig::default().validate(), Ok(()));
}

#[test]
fn zero_step_is_rejected() {
    let cfg = CoordinationConfig {
        step: 0.0,
        ..CoordinationConfig::default()
    };
    assert_eq!(cfg.validate(), Err(CoordinationError::InvalidStep(0.0)));
}

#[test]
fn nan_margin_is_rejected() {
    let cfg = CoordinationConfig {
        im_margin: f64::NAN,
        ..CoordinationConfig::default()
    };
    assert!(matches!(
        cfg.validate(),
        Err(CoordinationError::NegativeMargin(_))
    ));
}

#[test]
fn pair_spacing_prefers_iem() {
    let cfg = CoordinationConfig::default();
    assert_eq!(cfg.spacing_between(DeviceKind::Mic, DeviceKind::Mic), 0.250);
    assert_eq!(cfg.spacing_between(DeviceKind::Mic, DeviceKind::Iem), 0.350);
    assert_eq!(cfg.spacing_between(DeviceKind::Iem, DeviceKind::Mic), 0.350);
}

#[test]
fn plan_bands_keep_kinds_apart() {
    let plan = PlanConfig::default();
    let cfg = CoordinationConfig::default();
    assert!(plan.iem_band.min - plan.mic_band.max >= cfg.min_spacing_mic_to_iem);
}

#[test]
fn partial_plan_json_keeps_other_defaults() {
    let plan = PlanConfig::from_json_str(r#"{ "mic_band": { "min": 480.0, "max": 520.0 } }"#)
        .unwrap();
    assert_eq!(plan.mic_band, SubBand::new(480.0, 520.0));
    assert_eq!(plan.iem_band, PlanConfig::default().iem_band);
}
