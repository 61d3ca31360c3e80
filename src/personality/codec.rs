use super::types::{Axis, LetterAnchor, PersonalityAxes, PersonalityCode, TypedCode, AXIS_MIDPOINT};

/// Letters that survive filtering of typed input.
pub const CODE_ALPHABET: [char; 8] = ['I', 'N', 'F', 'J', 'E', 'S', 'T', 'P'];

/// Longest code the typed input keeps.
pub const CODE_LEN: usize = 4;

/// PURE FUNCTION: sliders -> code.
/// Each axis takes its high letter only when strictly above 50, so the
/// midpoint resolves to the low letter on every axis ("ISTP" for all-50).
/// Unset axes read as 50. NaN compares false and also resolves low.
pub fn code_from_axes(axes: &PersonalityAxes) -> PersonalityCode {
    let mut letters = ['?'; CODE_LEN];
    for (slot, axis) in letters.iter_mut().zip(Axis::ORDER) {
        let value = axes.get(axis).unwrap_or(AXIS_MIDPOINT);
        *slot = if value > 50.0 { axis.high_pole() } else { axis.low_pole() };
    }
    PersonalityCode::from_letters(letters)
}

/// Uppercase, drop everything outside `CODE_ALPHABET`, keep the first four.
/// This is a character filter, not a grammar check: "III" stays "III".
pub fn sanitize_code(raw: &str) -> String {
    raw.chars()
        .flat_map(char::to_uppercase)
        .filter(|c| CODE_ALPHABET.contains(c))
        .take(CODE_LEN)
        .collect()
}

/// PURE FUNCTION: typed text -> (filtered code, sliders).
/// Every position present pins its axis to 0 or 100; axes past the end of
/// the filtered text keep their `current` value.
pub fn axes_from_typed_code(raw: &str, current: &PersonalityAxes) -> TypedCode {
    let code = sanitize_code(raw);
    let mut axes = *current;

    for (letter, axis) in code.chars().zip(Axis::ORDER) {
        let value = match axis.anchor() {
            LetterAnchor::Low(c) => if letter == c { 0.0 } else { 100.0 },
            LetterAnchor::High(c) => if letter == c { 100.0 } else { 0.0 },
        };
        axes.set(axis, value);
    }

    TypedCode { code, axes }
}
