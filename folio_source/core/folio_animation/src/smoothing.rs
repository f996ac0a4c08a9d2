use folio_structs::Vector3;

/// Smoothing factors outside `[0, 1]` would overshoot or diverge.
#[inline]
pub fn sanitize_factor(factor: f32) -> f32 {
    if factor.is_finite() {
        factor.clamp(0.0, 1.0)
    } else {
        0.0
    }
}

/// One frame of exponential interpolation: `scale += (target - scale) * factor`.
#[inline]
pub fn scale_toward_target(current: f32, target: f32, factor: f32) -> f32 {
    current + (target - current) * sanitize_factor(factor)
}

/// `position += (target - position) * factor`, per component.
#[inline]
pub fn smooth_follow(current: Vector3, target: Vector3, factor: f32) -> Vector3 {
    current + (target - current) * sanitize_factor(factor)
}
