use super::tracker::GestureData;
use crate::geom::Point;
use crate::playback::surface_height_or_default;

/// Coarse description of a gesture from its endpoints alone.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GestureParams {
	/// Straight-line distance from start to end.
	pub distance: f32,
	/// Whether the gesture ends at or to the right of where it started.
	pub is_rightward: bool,
	/// Vertical position of the start point: `-1` at the top edge, `0` at the center and `1` at the
	/// bottom edge. Not clamped, so points off the surface map outside `[-1, 1]`.
	pub normalized_y: f32,
}

impl GestureParams {
	pub fn between(start: Point, end: Point, surface_height: f32) -> Self {
		let center_y = surface_height_or_default(surface_height) / 2.0;
		Self {
			distance: start.distance(end),
			is_rightward: end.x - start.x >= 0.0,
			normalized_y: (start.y - center_y) / center_y,
		}
	}
}

impl GestureData {
	pub fn params(&self, surface_height: f32) -> GestureParams {
		GestureParams::between(self.start_point(), self.end_point(), surface_height)
	}
}
