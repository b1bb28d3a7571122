use std::time::Duration;

/// How long the confidence bar takes to grow to its value.
pub const BAR_ANIMATION: Duration = Duration::from_millis(800);

/// Number of frames drawn for the bar animation.
pub const BAR_FRAMES: usize = 16;

/// Cubic ease-out on `t` in `[0, 1]`.
pub fn ease_out(t: f64) -> f64 {
    let t = t.clamp(0.0, 1.0);
    1.0 - (1.0 - t).powi(3)
}

/// Fill fractions for each frame of a bar growing from empty to `target`.
///
/// The last frame always lands exactly on the (clamped) target.
pub fn bar_frames(target: f64, frames: usize) -> Vec<f64> {
    let target = clamp_fraction(target);
    if frames == 0 {
        return vec![target];
    }
    (1..=frames)
        .map(|i| target * ease_out(i as f64 / frames as f64))
        .collect()
}

/// Delay between two frames so that `frames` frames take `total`.
pub fn frame_delay(total: Duration, frames: usize) -> Duration {
    if frames == 0 {
        return Duration::ZERO;
    }
    total / frames as u32
}

/// Clamps a confidence value for drawing. NaN is drawn as empty.
pub fn clamp_fraction(value: f64) -> f64 {
    if value.is_nan() {
        0.0
    } else {
        value.clamp(0.0, 1.0)
    }
}
