use tarot_copilot::personality::{
    axes_from_typed_code, code_from_axes, sanitize_code, Axis, PersonalityAxes,
};

#[test]
fn test_midpoint_resolves_to_low_poles() {
    let axes = PersonalityAxes::new(50.0, 50.0, 50.0, 50.0);
    assert_eq!(code_from_axes(&axes).as_str(), "ISTP", "Exactly 50 must resolve to the low letter on every axis");
}

#[test]
fn test_strictly_above_midpoint_flips_each_axis() {
    assert_eq!(code_from_axes(&PersonalityAxes::new(50.1, 50.0, 50.0, 50.0)).as_str(), "ESTP");
    assert_eq!(code_from_axes(&PersonalityAxes::new(50.0, 51.0, 50.0, 50.0)).as_str(), "INTP");
    assert_eq!(code_from_axes(&PersonalityAxes::new(50.0, 50.0, 51.0, 50.0)).as_str(), "ISFP");
    assert_eq!(code_from_axes(&PersonalityAxes::new(50.0, 50.0, 50.0, 51.0)).as_str(), "ISTJ");
    assert_eq!(code_from_axes(&PersonalityAxes::new(100.0, 100.0, 100.0, 100.0)).as_str(), "ENFJ");
    assert_eq!(code_from_axes(&PersonalityAxes::new(0.0, 0.0, 0.0, 0.0)).as_str(), "ISTP");
}

#[test]
fn test_unset_axes_read_as_midpoint() {
    let mut axes = PersonalityAxes::default();
    assert_eq!(code_from_axes(&axes).as_str(), "ISTP");

    axes.sensing_intuition = Some(80.0);
    let code = code_from_axes(&axes);
    assert_eq!(code.as_str(), "INTP");
    assert_eq!(code.letter(Axis::SensingIntuition), Some('N'));
}

#[test]
fn test_nan_resolves_low() {
    let axes = PersonalityAxes::new(f64::NAN, f64::NAN, f64::NAN, f64::NAN);
    assert_eq!(code_from_axes(&axes).as_str(), "ISTP");
}

#[test]
fn test_typed_code_strips_noise_and_keeps_order() {
    let typed = axes_from_typed_code("xyzINFJ123", &PersonalityAxes::default());
    assert_eq!(typed.code, "INFJ");
    assert_eq!(typed.axes, PersonalityAxes::new(0.0, 100.0, 100.0, 100.0));
}

#[test]
fn test_typed_code_is_a_filter_not_a_grammar() {
    assert_eq!(sanitize_code("iii"), "III");
    assert_eq!(sanitize_code("e-n t!p"), "ENTP");
    assert_eq!(sanitize_code("INFJP"), "INFJ", "At most four letters are kept");

    // Position 2 is not 'N', so the axis collapses to 0 regardless of the letter.
    let typed = axes_from_typed_code("III", &PersonalityAxes::default());
    assert_eq!(typed.axes.introversion_extraversion, Some(0.0));
    assert_eq!(typed.axes.sensing_intuition, Some(0.0));
    assert_eq!(typed.axes.thinking_feeling, Some(0.0));
    assert_eq!(typed.axes.judging_perceiving, None);
}

#[test]
fn test_typed_code_anchor_rules() {
    // Position 1 and 4 key off I and P; anything else there goes to 100.
    let typed = axes_from_typed_code("NSTJ", &PersonalityAxes::default());
    assert_eq!(typed.axes.introversion_extraversion, Some(100.0));
    assert_eq!(typed.axes.sensing_intuition, Some(0.0));
    assert_eq!(typed.axes.thinking_feeling, Some(0.0));
    assert_eq!(typed.axes.judging_perceiving, Some(100.0));

    let typed = axes_from_typed_code("esfp", &PersonalityAxes::default());
    assert_eq!(typed.code, "ESFP");
    assert_eq!(typed.axes, PersonalityAxes::new(100.0, 0.0, 100.0, 0.0));
}

#[test]
fn test_empty_input_leaves_axes_untouched() {
    let current = PersonalityAxes::new(12.0, 34.0, 56.0, 78.0);
    let typed = axes_from_typed_code("", &current);
    assert_eq!(typed.code, "");
    assert_eq!(typed.axes, current);

    let typed = axes_from_typed_code("123 !?", &current);
    assert_eq!(typed.code, "");
    assert_eq!(typed.axes, current);
}

#[test]
fn test_partial_code_only_touches_present_positions() {
    let current = PersonalityAxes::new(12.0, 34.0, 56.0, 78.0);
    let typed = axes_from_typed_code("EN", &current);
    assert_eq!(typed.code, "EN");
    assert_eq!(typed.axes, PersonalityAxes::new(100.0, 100.0, 56.0, 78.0));
}

#[test]
fn test_round_trip_collapses_to_extremes() {
    let inputs = [
        PersonalityAxes::new(50.0, 50.0, 50.0, 50.0),
        PersonalityAxes::new(73.0, 12.0, 51.0, 49.0),
        PersonalityAxes::new(0.0, 100.0, 33.3, 66.6),
    ];

    for axes in inputs {
        let code = code_from_axes(&axes);
        let typed = axes_from_typed_code(code.as_str(), &axes);
        assert_eq!(typed.code, code.as_str(), "A derived code survives sanitization unchanged");
        for axis in Axis::ORDER {
            let v = typed.axes.get(axis).expect("every axis set by a full code");
            assert!(v == 0.0 || v == 100.0, "{:?} must collapse to an extreme, got {}", axis, v);
        }
        assert_eq!(code_from_axes(&typed.axes), code, "Collapsed sliders map back to the same code");
    }
}

#[test]
fn test_clamped_for_display() {
    let mut axes = PersonalityAxes::new(-10.0, 150.0, f64::NAN, 42.0);
    axes.judging_perceiving = None;
    let clamped = axes.clamped();
    assert_eq!(clamped.introversion_extraversion, Some(0.0));
    assert_eq!(clamped.sensing_intuition, Some(100.0));
    assert_eq!(clamped.thinking_feeling, Some(50.0));
    assert_eq!(clamped.judging_perceiving, None, "Clamping never invents a value");
}
