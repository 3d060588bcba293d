//! Scalar mappings from gesture geometry to playback parameters.
//!
//! Two pitch conventions exist side by side. [`pitch_rate`] is the older exponential mapping of a
//! normalized vertical position onto [`LEGACY_PITCH_RANGE`]; [`pitch_from_y`] is the linear mapping
//! of an absolute coordinate onto [`PITCH_RANGE`] that pitch curves are built from. Callers pick one.

use std::ops::RangeInclusive;

/// Surface width assumed when the caller supplies a non-positive one.
pub const DEFAULT_SURFACE_WIDTH: f32 = 800.0;

/// Surface height assumed when the caller supplies a non-positive one.
pub const DEFAULT_SURFACE_HEIGHT: f32 = 600.0;

/// Output range of [`pitch_rate`].
pub const LEGACY_PITCH_RANGE: RangeInclusive<f32> = 0.25..=4.0;

/// Output range of [`pitch_from_y`]. The top of the surface maps to the end of the range.
pub const PITCH_RANGE: RangeInclusive<f32> = 1.0..=5.0;

/// Lower bound substituted by [`effective_playback_rate`] when the rate would not be playable.
pub const MIN_EFFECTIVE_PLAYBACK_RATE: f32 = 0.01;

pub fn surface_width_or_default(width: f32) -> f32 {
	if width <= 0.0 {
		tracing::warn!(width, "non-positive surface width, using default");
		DEFAULT_SURFACE_WIDTH
	} else {
		width
	}
}

pub fn surface_height_or_default(height: f32) -> f32 {
	if height <= 0.0 {
		tracing::warn!(height, "non-positive surface height, using default");
		DEFAULT_SURFACE_HEIGHT
	} else {
		height
	}
}

/// Multiplier on the source duration for a gesture of the given path length.
///
/// A stroke half as long as the surface is wide plays at the original length, a full-width stroke
/// plays twice as long. Unbounded above.
pub fn duration_rate(path_length: f32, surface_width: f32) -> f32 {
	let base_distance = surface_width_or_default(surface_width) / 2.0;
	path_length / base_distance
}

/// Exponential pitch mapping of a vertical position in `[-1, 1]`, two octaves each way.
///
/// `-1` gives `0.25`, `0` gives `1.0` and `1` gives `4.0`. Inputs outside `[-1, 1]` are clamped.
pub fn pitch_rate(normalized_y: f32) -> f32 {
	let clamped_y = normalized_y.clamp(-1.0, 1.0);
	let rate = 2f32.powf(clamped_y * 2.0);
	rate.clamp(*LEGACY_PITCH_RANGE.start(), *LEGACY_PITCH_RANGE.end())
}

/// Linear pitch mapping of a surface-local `y`: the top edge is the highest pitch, the bottom edge
/// the lowest. Positions off the surface are clamped to its edges.
pub fn pitch_from_y(y: f32, surface_height: f32) -> f32 {
	let height = surface_height_or_default(surface_height);
	let normalized = (y / height).clamp(0.0, 1.0);
	let (min_pitch, max_pitch) = (*PITCH_RANGE.start(), *PITCH_RANGE.end());
	max_pitch - normalized * (max_pitch - min_pitch)
}

/// Leftward gestures play the source backwards.
pub fn is_reverse_playback(x_delta: f32) -> bool {
	x_delta < 0.0
}

/// Resampling rate that realizes both a pitch and a duration multiplier on one source.
///
/// Stretching the duration slows playback while raising the pitch speeds it up. Anything that
/// isn't a finite positive rate becomes [`MIN_EFFECTIVE_PLAYBACK_RATE`].
pub fn effective_playback_rate(pitch_rate: f32, duration_rate: f32) -> f32 {
	let rate = pitch_rate / duration_rate;
	if rate.is_finite() && rate > 0.0 {
		rate
	} else {
		MIN_EFFECTIVE_PLAYBACK_RATE
	}
}
