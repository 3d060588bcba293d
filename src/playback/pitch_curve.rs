use super::mapping::{pitch_from_y, surface_height_or_default, PITCH_RANGE};
use crate::geom::Point;
use crate::gesture::calculate_path_metrics;
use bon::builder;

/// Number of control points in a pitch curve unless the caller asks otherwise.
pub const DEFAULT_SAMPLE_COUNT: usize = 100;

/// Pitch multipliers sampled at equal arc-length steps along a gesture, first point to last.
#[derive(Clone, Debug, PartialEq, derive_more::Deref)]
pub struct PitchCurve(Vec<f32>);

impl PitchCurve {
	pub fn samples(&self) -> &[f32] {
		&self.0
	}

	pub fn into_samples(self) -> Vec<f32> {
		self.0
	}
}

/// Resamples `path` into `sample_count` points spaced evenly by distance travelled and maps each
/// point's height on the surface to a pitch with [`pitch_from_y`].
///
/// An empty path yields the middle of [`PITCH_RANGE`] throughout, a single point yields its own
/// pitch throughout.
pub fn generate_pitch_curve(path: &[Point], surface_height: f32, sample_count: usize) -> PitchCurve {
	let height = surface_height_or_default(surface_height);
	let samples = match path {
		[] => {
			let midpoint = (PITCH_RANGE.start() + PITCH_RANGE.end()) / 2.0;
			vec![midpoint; sample_count]
		}
		[point] => vec![pitch_from_y(point.y, height); sample_count],
		_ => {
			let metrics = calculate_path_metrics(path);
			let steps = sample_count.saturating_sub(1).max(1) as f32;
			(0..sample_count)
				.map(|i| {
					let target = (i as f32 / steps) * metrics.path_length;
					let y = y_at_arc_length(path, &metrics.cumulative_distances, target);
					pitch_from_y(y, height)
				})
				.collect()
		}
	};
	PitchCurve(samples)
}

/// Same as [`generate_pitch_curve`], with `sample_count` defaulting to [`DEFAULT_SAMPLE_COUNT`].
#[builder(finish_fn = generate)]
pub fn pitch_curve<'a>(
	#[builder(start_fn)] path: &'a [Point],
	surface_height: f32,
	#[builder(default = DEFAULT_SAMPLE_COUNT)] sample_count: usize,
) -> PitchCurve {
	generate_pitch_curve(path, surface_height, sample_count)
}

/// Height of the point `target` along the path. At a knot the later segment is used; a zero-length
/// segment reports its start.
fn y_at_arc_length(path: &[Point], cumulative_distances: &[f32], target: f32) -> f32 {
	debug_assert!(path.len() >= 2);
	debug_assert_eq!(path.len(), cumulative_distances.len());

	let segment = cumulative_distances
		.partition_point(|&d| d <= target)
		.saturating_sub(1)
		.min(path.len() - 2);
	let (start, end) = (path[segment], path[segment + 1]);
	let (d0, d1) = (cumulative_distances[segment], cumulative_distances[segment + 1]);

	let length = d1 - d0;
	if length > 0.0 {
		let t = ((target - d0) / length).clamp(0.0, 1.0);
		start.y + (end.y - start.y) * t
	} else {
		start.y
	}
}
