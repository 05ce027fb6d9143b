//! Plain-text export of the current field values.

use odlens_model::RawInputs;

/// Render the multi-line summary over the five field texts in fixed order,
/// skipping blank fields.
///
/// Returns `None` when every field is blank, so callers keep their previous
/// output untouched.
pub fn render_summary(raw: &RawInputs) -> Option<String> {
    if raw.is_all_blank() {
        return None;
    }
    let mut lines = Vec::new();
    let f = raw.f.trim();
    if !f.is_empty() {
        lines.push(format!("F = {f} mm"));
    }
    let fov = raw.fov.trim();
    if !fov.is_empty() {
        lines.push(format!("FOV = {fov}°"));
    }
    let image = raw.image.trim();
    if !image.is_empty() {
        lines.push(format!("Image = {image} mm"));
    }
    let pupil = raw.pupil.trim();
    if !pupil.is_empty() {
        lines.push(format!("Pupil = {pupil} mm"));
    }
    let f_number = raw.f_number.trim();
    if !f_number.is_empty() {
        lines.push(format!("f/{f_number}"));
    }
    Some(lines.join("\n"))
}
