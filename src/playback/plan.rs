use super::mapping::{duration_rate, effective_playback_rate};
use super::pitch_curve::{generate_pitch_curve, PitchCurve, DEFAULT_SAMPLE_COUNT};
use crate::gesture::GestureData;
use crate::util::PiecewiseLinear;
use glam::Vec2;
use std::time::Duration;

#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum PlanError {
	#[error("cannot play {source_duration:?} at duration rate {duration_rate}")]
	DurationOutOfRange {
		source_duration: Duration,
		duration_rate: f32,
	},
}

static_assertions::assert_impl_all!(PlanError: std::error::Error, Send, Sync);

/// Everything the audio engine needs to play one gesture: how much longer or shorter than the
/// source to play, and how the pitch moves while doing so.
#[derive(Clone, Debug, PartialEq)]
pub struct PlaybackPlan {
	duration_rate: f32,
	pitch_curve: PitchCurve,
	duration: Duration,
}

#[bon::bon]
impl PlaybackPlan {
	#[builder(finish_fn = plan)]
	pub fn new<'a>(
		gesture: &'a GestureData,
		// Width and height of the surface the gesture was drawn on.
		surface_size: Vec2,
		source_duration: Duration,
		#[builder(default = DEFAULT_SAMPLE_COUNT)] sample_count: usize,
	) -> Result<Self, PlanError> {
		let duration_rate = duration_rate(gesture.path_length(), surface_size.x);
		let duration = scaled_duration(source_duration, duration_rate)?;
		let pitch_curve = generate_pitch_curve(gesture.path(), surface_size.y, sample_count);
		tracing::debug!(duration_rate, ?duration, samples = pitch_curve.len(), "planned playback");
		Ok(Self {
			duration_rate,
			pitch_curve,
			duration,
		})
	}
}

impl PlaybackPlan {
	pub fn duration_rate(&self) -> f32 {
		self.duration_rate
	}

	pub fn pitch_curve(&self) -> &PitchCurve {
		&self.pitch_curve
	}

	/// Length of the playback, i.e. the source duration scaled by [`Self::duration_rate`].
	pub fn duration(&self) -> Duration {
		self.duration
	}

	/// Pitch as a function of seconds into playback. The curve's samples are spread evenly over
	/// [`Self::duration`]. `None` for an empty curve.
	pub fn pitch_timeline(&self) -> Option<PiecewiseLinear<f32>> {
		let intervals = self.pitch_curve.len().saturating_sub(1);
		let step = if intervals > 0 {
			self.duration.as_secs_f32() / intervals as f32
		} else {
			0.0
		};
		PiecewiseLinear::new(
			self
				.pitch_curve
				.iter()
				.enumerate()
				.map(|(i, &pitch)| (i as f32 * step, pitch)),
		)
	}

	/// Source resampling rate as a function of seconds into playback, combining the pitch at each
	/// moment with the overall duration rate.
	pub fn rate_curve(&self) -> Option<PiecewiseLinear<f32>> {
		let duration_rate = self.duration_rate;
		self
			.pitch_timeline()
			.map(|timeline| timeline.linear_map(|&pitch| effective_playback_rate(pitch, duration_rate)))
	}

	/// Evaluates [`Self::rate_curve`] once. Prefer holding on to the curve for repeated lookups.
	pub fn rate_at(&self, elapsed: Duration) -> Option<f32> {
		self
			.rate_curve()
			.map(|curve| curve.evaluate(elapsed.as_secs_f32()))
	}
}

#[tracing::instrument(err)]
fn scaled_duration(source_duration: Duration, duration_rate: f32) -> Result<Duration, PlanError> {
	Duration::try_from_secs_f32(source_duration.as_secs_f32() * duration_rate).map_err(|_| {
		PlanError::DurationOutOfRange {
			source_duration,
			duration_rate,
		}
	})
}
