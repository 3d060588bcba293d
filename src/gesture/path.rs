use crate::geom::Point;
use itertools::Itertools;

/// Arc-length measurements of a polyline.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PathMetrics {
	/// Sum of all segment lengths.
	pub path_length: f32,
	/// Distance along the path from the first point to each point. Same length as the path, starts
	/// at zero, ends at `path_length` and never decreases.
	pub cumulative_distances: Vec<f32>,
}

pub fn calculate_path_metrics(path: &[Point]) -> PathMetrics {
	if path.is_empty() {
		return PathMetrics::default();
	}

	let cumulative_distances: Vec<f32> = std::iter::once(0.0)
		.chain(
			path
				.iter()
				.tuple_windows()
				.scan(0.0, |total, (a, b)| {
					*total += a.distance(*b);
					Some(*total)
				}),
		)
		.collect();

	PathMetrics {
		path_length: cumulative_distances.last().copied().unwrap_or_default(),
		cumulative_distances,
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::test::*;
	use approx::assert_abs_diff_eq;
	use glam::vec2;

	#[test]
	fn empty_path() {
		let metrics = calculate_path_metrics(&[]);
		assert_eq!(metrics.path_length, 0.0);
		assert!(metrics.cumulative_distances.is_empty());
	}

	#[test]
	fn single_point() {
		let metrics = calculate_path_metrics(&[vec2(10.0, 20.0)]);
		assert_eq!(metrics.path_length, 0.0);
		assert_eq!(metrics.cumulative_distances, vec![0.0]);
	}

	#[test]
	fn two_points() {
		let metrics = calculate_path_metrics(&[vec2(0.0, 0.0), vec2(3.0, 4.0)]);
		assert_eq!(metrics.path_length, 5.0);
		assert_eq!(metrics.cumulative_distances, vec![0.0, 5.0]);
	}

	#[test]
	fn three_points() {
		let metrics =
			calculate_path_metrics(&[vec2(0.0, 0.0), vec2(30.0, 40.0), vec2(30.0, 140.0)]);
		assert_eq!(metrics.path_length, 150.0);
		assert_eq!(metrics.cumulative_distances, vec![0.0, 50.0, 150.0]);
	}

	#[test]
	fn repeated_points_add_nothing() {
		let metrics =
			calculate_path_metrics(&[vec2(1.0, 1.0), vec2(1.0, 1.0), vec2(4.0, 5.0), vec2(4.0, 5.0)]);
		assert_eq!(metrics.path_length, 5.0);
		assert_eq!(metrics.cumulative_distances, vec![0.0, 0.0, 5.0, 5.0]);
	}

	#[test]
	fn curved_path_is_longer_than_chord() {
		let path = [vec2(0.0, 0.0), vec2(50.0, 80.0), vec2(100.0, 0.0)];
		let metrics = calculate_path_metrics(&path);
		assert!(metrics.path_length > path[0].distance(path[2]));
	}

	#[test]
	fn collinear_path_matches_chord() {
		let path = straight_path(vec2(0.0, 0.0), vec2(300.0, 400.0), 7);
		let metrics = calculate_path_metrics(&path);
		assert_abs_diff_eq!(metrics.path_length, 500.0, epsilon = 1e-3);
	}

	#[test]
	fn random_paths_hold_invariants() {
		let mut rng = fastrand::Rng::with_seed(7);
		for _ in 0..32 {
			let count = rng.usize(2..40);
			let path = random_path(&mut rng, count, vec2(800.0, 600.0));
			let metrics = calculate_path_metrics(&path);
			let chord = path[0].distance(*path.last().unwrap());

			assert_eq!(metrics.cumulative_distances.len(), path.len());
			assert_eq!(metrics.cumulative_distances[0], 0.0);
			assert_eq!(*metrics.cumulative_distances.last().unwrap(), metrics.path_length);
			assert!(metrics.path_length + 1e-3 >= chord);
			assert!(is_non_decreasing(&metrics.cumulative_distances));
		}
	}
}
