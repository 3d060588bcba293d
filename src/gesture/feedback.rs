use crate::geom::Point;

/// Receives the incremental shape of a stroke while it is being drawn, e.g. to paint it.
///
/// Feedback is purely visual; nothing it does affects the gesture that is eventually reported.
pub trait StrokeFeedback {
	/// An accepted pointer went down at `at`.
	fn stroke_started(&mut self, at: Point) {
		let _ = at;
	}

	/// The active pointer moved from `from` to `to`.
	fn stroke_extended(&mut self, from: Point, to: Point) {
		let _ = (from, to);
	}

	/// The surface was cleared.
	fn cleared(&mut self) {}
}

impl StrokeFeedback for () {}

impl<F: StrokeFeedback + ?Sized> StrokeFeedback for &mut F {
	fn stroke_started(&mut self, at: Point) {
		(**self).stroke_started(at)
	}

	fn stroke_extended(&mut self, from: Point, to: Point) {
		(**self).stroke_extended(from, to)
	}

	fn cleared(&mut self) {
		(**self).cleared()
	}
}
