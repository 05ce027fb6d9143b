//! Tests for the model types.

use odlens_model::{
    ApertureMode, ApertureState, FieldId, OpticalState, ParseError, Projection, RawInputs,
    SolveMode,
};

#[test]
fn test_derived_field_per_mode() {
    assert_eq!(SolveMode::Focal.derived_field(), FieldId::Focal);
    assert_eq!(SolveMode::FieldOfView.derived_field(), FieldId::Fov);
    assert_eq!(SolveMode::ImageSize.derived_field(), FieldId::Image);
    assert_eq!(ApertureMode::Pupil.derived_field(), FieldId::Pupil);
    assert_eq!(ApertureMode::FNumber.derived_field(), FieldId::FNumber);
}

#[test]
fn test_field_order_matches_summary_export() {
    assert_eq!(
        FieldId::all(),
        &[
            FieldId::Focal,
            FieldId::Fov,
            FieldId::Image,
            FieldId::Pupil,
            FieldId::FNumber,
        ]
    );
}

#[test]
fn test_raw_inputs_accessors() {
    let mut raw = RawInputs::default();
    assert!(raw.is_all_blank());

    *raw.get_mut(FieldId::Fov) = "46.8".to_string();
    assert_eq!(raw.get(FieldId::Fov), "46.8");
    assert!(!raw.is_all_blank());

    *raw.get_mut(FieldId::Fov) = "   ".to_string();
    assert!(raw.is_all_blank());
}

#[test]
fn test_parse_error_message_names_the_field() {
    let error = ParseError::InvalidNumber {
        field: FieldId::Pupil,
        value: "abc".to_string(),
    };
    assert_eq!(error.field(), FieldId::Pupil);
    assert_eq!(error.to_string(), "pupil diameter is not a number: \"abc\"");
}

#[test]
fn test_optical_state_serializes() {
    let state = OpticalState {
        f: Some(50.0),
        fov: None,
        image: Some(36.0),
        projection: Projection::Equidistant,
    };
    let json = serde_json::to_string(&state).expect("serialize state");
    let round: OpticalState = serde_json::from_str(&json).expect("deserialize state");
    assert_eq!(round, state);
}

#[test]
fn test_aperture_state_defaults_to_unknown() {
    let state = ApertureState::default();
    assert!(state.pupil.is_none());
    assert!(state.f_number.is_none());
}
