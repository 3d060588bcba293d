use super::feedback::StrokeFeedback;
use super::path::{calculate_path_metrics, PathMetrics};
use crate::geom::{Point, SurfaceGeometry};
use glam::Vec2;

/// Identifies one contact (mouse, pen or finger) for the duration of its press.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, derive_more::Display)]
#[display("pointer {_0}")]
pub struct PointerId(pub i32);

/// A pointer sample as delivered by the host, in client coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerEvent {
	pub pointer_id: PointerId,
	pub client: Vec2,
}

impl PointerEvent {
	pub fn new(pointer_id: PointerId, client: Vec2) -> Self {
		Self { pointer_id, client }
	}
}

/// A completed gesture. Produced once by [`GestureTracker`] and never modified afterwards.
#[derive(Clone, Debug, PartialEq)]
pub struct GestureData {
	path: Vec<Point>,
	distance: f32,
	metrics: PathMetrics,
}

static_assertions::assert_impl_all!(GestureData: Send, Sync);

impl GestureData {
	/// Returns `None` for an empty path.
	pub fn from_path(path: Vec<Point>) -> Option<Self> {
		let start = *path.first()?;
		let end = *path.last()?;
		let metrics = calculate_path_metrics(&path);
		Some(Self {
			distance: start.distance(end),
			path,
			metrics,
		})
	}

	pub fn start_point(&self) -> Point {
		self.path[0]
	}

	pub fn end_point(&self) -> Point {
		self.path[self.path.len() - 1]
	}

	/// Every sample in chronological order, including both endpoints.
	pub fn path(&self) -> &[Point] {
		&self.path
	}

	/// Straight-line distance between the endpoints.
	pub fn distance(&self) -> f32 {
		self.distance
	}

	/// Length travelled along the path. Never less than [`Self::distance`].
	pub fn path_length(&self) -> f32 {
		self.metrics.path_length
	}

	pub fn cumulative_distances(&self) -> &[f32] {
		&self.metrics.cumulative_distances
	}

	pub fn metrics(&self) -> &PathMetrics {
		&self.metrics
	}
}

#[derive(Clone, Debug, Default, PartialEq)]
pub enum TrackerState {
	#[default]
	Idle,
	Drawing {
		pointer: PointerId,
		path: Vec<Point>,
	},
}

/// Follows a single pointer across a drawing surface and reports the finished gesture.
///
/// Only the pointer that started the gesture may extend or finish it. Events from any other
/// pointer, and completion events while idle, are ignored. A gesture that is never completed stays
/// in progress until [`GestureTracker::clear`].
#[derive(Debug)]
pub struct GestureTracker<G, F = ()> {
	geometry: G,
	feedback: F,
	state: TrackerState,
}

impl<G: SurfaceGeometry> GestureTracker<G> {
	pub fn new(geometry: G) -> Self {
		Self::with_feedback(geometry, ())
	}
}

impl<G: SurfaceGeometry, F: StrokeFeedback> GestureTracker<G, F> {
	pub fn with_feedback(geometry: G, feedback: F) -> Self {
		Self {
			geometry,
			feedback,
			state: TrackerState::Idle,
		}
	}

	pub fn state(&self) -> &TrackerState {
		&self.state
	}

	pub fn is_drawing(&self) -> bool {
		matches!(self.state, TrackerState::Drawing { .. })
	}

	pub fn active_pointer(&self) -> Option<PointerId> {
		match &self.state {
			TrackerState::Idle => None,
			TrackerState::Drawing { pointer, .. } => Some(*pointer),
		}
	}

	pub fn current_path(&self) -> &[Point] {
		match &self.state {
			TrackerState::Idle => &[],
			TrackerState::Drawing { path, .. } => path,
		}
	}

	pub fn geometry(&self) -> &G {
		&self.geometry
	}

	pub fn geometry_mut(&mut self) -> &mut G {
		&mut self.geometry
	}

	pub fn feedback(&self) -> &F {
		&self.feedback
	}

	/// Starts a gesture unless one is already in progress. Returns whether the event was accepted.
	pub fn pointer_down(&mut self, event: PointerEvent) -> bool {
		if let TrackerState::Drawing { pointer, .. } = &self.state {
			tracing::debug!(active = %pointer, rejected = %event.pointer_id, "pointer down ignored");
			return false;
		}

		let point = self.geometry.to_local(event.client);
		tracing::trace!(pointer = %event.pointer_id, ?point, "stroke started");
		self.state = TrackerState::Drawing {
			pointer: event.pointer_id,
			path: vec![point],
		};
		self.feedback.stroke_started(point);
		true
	}

	/// Extends the gesture if `event` belongs to the active pointer. Returns whether it did.
	pub fn pointer_move(&mut self, event: PointerEvent) -> bool {
		let TrackerState::Drawing { pointer, path } = &mut self.state else {
			return false;
		};
		if *pointer != event.pointer_id {
			return false;
		}

		let point = self.geometry.to_local(event.client);
		if let Some(&previous) = path.last() {
			self.feedback.stroke_extended(previous, point);
		}
		path.push(point);
		true
	}

	/// Finishes the gesture at the event's position.
	pub fn pointer_up(&mut self, event: PointerEvent) -> Option<GestureData> {
		self.finish(event, false)
	}

	/// Finishes the gesture where the pointer left the surface. The final sample is clamped onto the
	/// surface bounds, so a stroke dragged off the edge ends on the edge.
	pub fn pointer_leave(&mut self, event: PointerEvent) -> Option<GestureData> {
		self.finish(event, true)
	}

	/// Abandons any gesture in progress and returns to idle. Safe to call at any time.
	pub fn clear(&mut self) {
		if let TrackerState::Drawing { pointer, path } = &self.state {
			tracing::trace!(%pointer, samples = path.len(), "stroke discarded");
		}
		self.state = TrackerState::Idle;
		self.feedback.cleared();
	}

	fn finish(&mut self, event: PointerEvent, clamp: bool) -> Option<GestureData> {
		let TrackerState::Drawing { pointer, path } = &mut self.state else {
			tracing::trace!(pointer = %event.pointer_id, "no stroke to finish");
			return None;
		};
		if *pointer != event.pointer_id {
			tracing::debug!(active = %pointer, rejected = %event.pointer_id, "pointer release ignored");
			return None;
		}

		let raw = self.geometry.to_local(event.client);
		let end = if clamp {
			self.geometry.bounds().clamp(raw)
		} else {
			raw
		};
		if end != raw {
			tracing::trace!(?raw, ?end, "stroke end clamped to surface");
		}

		path.push(end);
		let path = std::mem::take(path);
		self.state = TrackerState::Idle;

		let gesture = GestureData::from_path(path)?;
		tracing::debug!(
			samples = gesture.path().len(),
			distance = gesture.distance(),
			path_length = gesture.path_length(),
			"stroke finished"
		);
		Some(gesture)
	}
}
