use crate::geom::Point;
use crate::gesture::{PointerEvent, PointerId, StrokeFeedback};
use glam::{vec2, Vec2};
use itertools::Itertools;

pub fn event(pointer_id: i32, x: f32, y: f32) -> PointerEvent {
	PointerEvent::new(PointerId(pointer_id), vec2(x, y))
}

/// `count` evenly spaced points from `from` to `to`, both included.
pub fn straight_path(from: Point, to: Point, count: usize) -> Vec<Point> {
	assert!(count >= 2);
	(0..count)
		.map(|i| from.lerp(to, i as f32 / (count - 1) as f32))
		.collect()
}

/// A jittery stroke of `count` points wandering inside `[0, size]`.
pub fn random_path(rng: &mut fastrand::Rng, count: usize, size: Vec2) -> Vec<Point> {
	let mut point = vec2(rng.f32() * size.x, rng.f32() * size.y);
	(0..count)
		.map(|_| {
			let step = vec2(rng.f32() - 0.5, rng.f32() - 0.5) * 80.0;
			point = (point + step).clamp(Vec2::ZERO, size);
			point
		})
		.collect()
}

pub fn is_non_decreasing(values: &[f32]) -> bool {
	values.iter().tuple_windows().all(|(a, b)| a <= b)
}

pub fn is_strictly_increasing(values: &[f32]) -> bool {
	values.iter().tuple_windows().all(|(a, b)| a < b)
}

pub fn is_strictly_decreasing(values: &[f32]) -> bool {
	values.iter().tuple_windows().all(|(a, b)| a > b)
}

#[derive(Clone, Debug, PartialEq)]
pub enum FeedbackEvent {
	Started(Point),
	Extended(Point, Point),
	Cleared,
}

#[derive(Default, Debug)]
pub struct RecordingFeedback {
	pub events: Vec<FeedbackEvent>,
}

impl StrokeFeedback for RecordingFeedback {
	fn stroke_started(&mut self, at: Point) {
		self.events.push(FeedbackEvent::Started(at));
	}

	fn stroke_extended(&mut self, from: Point, to: Point) {
		self.events.push(FeedbackEvent::Extended(from, to));
	}

	fn cleared(&mut self) {
		self.events.push(FeedbackEvent::Cleared);
	}
}
