use ordered_float::OrderedFloat;
use std::ops::*;

pub trait Interpolable:
	Copy
	+ Default
	+ Add<Self, Output = Self>
	+ Sub<Self, Output = Self>
	+ Mul<f32, Output = Self>
	+ Div<f32, Output = Self>
{
}
impl<T> Interpolable for T where
	Self: Copy
		+ Default
		+ Add<Self, Output = Self>
		+ Sub<Self, Output = Self>
		+ Mul<f32, Output = Self>
		+ Div<f32, Output = Self>
{
}

#[derive(Clone, Debug)]
struct Knot<Y> {
	x: OrderedFloat<f32>,
	y: Y,
}

impl<Y> Ord for Knot<Y> {
	fn cmp(&self, other: &Self) -> std::cmp::Ordering {
		self.x.cmp(&other.x)
	}
}

impl<Y> PartialOrd for Knot<Y> {
	fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
		Some(self.cmp(other))
	}
}

impl<Y> PartialEq for Knot<Y> {
	fn eq(&self, other: &Self) -> bool {
		self.cmp(other) == std::cmp::Ordering::Equal
	}
}

impl<Y> Eq for Knot<Y> {}

impl<Y> From<(f32, Y)> for Knot<Y> {
	fn from((x, y): (f32, Y)) -> Self {
		Self {
			x: OrderedFloat::from(x),
			y,
		}
	}
}

#[derive(Clone, Copy, Debug)]
pub struct Linear<Y> {
	slope: Y,
	intercept: Y,
}

impl<Y: Interpolable> Linear<Y> {
	pub fn constant(y: Y) -> Self {
		Self {
			slope: Y::default(),
			intercept: y,
		}
	}

	/// The line through both points. Coincident `x` values give the constant midpoint.
	pub fn fit(x0: f32, y0: Y, x1: f32, y1: Y) -> Self {
		let diff = x1 - x0;
		let slope = if diff > 0.0 {
			(y1 - y0) * (1.0 / diff)
		} else {
			Y::default()
		};
		let intercept = ((y0 + y1) - slope * (x0 + x1)) * 0.5f32;
		Self { slope, intercept }
	}

	pub fn evaluate(&self, x: f32) -> Y {
		self.slope * x + self.intercept
	}
}

#[derive(Clone, Debug)]
pub struct LinearPiece<Y> {
	pub domain: Range<f32>,
	pub extension: Linear<Y>,
}

impl<Y: Interpolable> LinearPiece<Y> {
	fn new(prev: Option<&Knot<Y>>, next: Option<&Knot<Y>>) -> Option<Self> {
		match (prev, next) {
			(Some(prev), Some(next)) => Some(Self {
				domain: *prev.x..*next.x,
				extension: Linear::fit(*prev.x, prev.y, *next.x, next.y),
			}),
			(Some(prev), None) => Some(Self {
				domain: *prev.x..f32::INFINITY,
				extension: Linear::constant(prev.y),
			}),
			(None, Some(next)) => Some(Self {
				domain: f32::NEG_INFINITY..*next.x,
				extension: Linear::constant(next.y),
			}),
			(None, None) => None,
		}
	}

	pub fn evaluate(&self, x: f32) -> Y {
		self
			.extension
			.evaluate(x.clamp(self.domain.start, self.domain.end))
	}
}

/// A function interpolating linearly between knots and holding the outermost values beyond them.
#[derive(Clone, Debug)]
pub struct PiecewiseLinear<Y> {
	knots: Vec<Knot<Y>>,
}

impl<Y: Interpolable> PiecewiseLinear<Y> {
	/// Returns `None` without knots. Knots may be given in any order; knots sharing an `x` keep
	/// their relative order.
	pub fn new(knots: impl IntoIterator<Item = (f32, Y)>) -> Option<Self> {
		let mut knots: Vec<Knot<Y>> = knots.into_iter().map(Knot::from).collect();
		knots.sort();
		if knots.is_empty() {
			None
		} else {
			Some(Self { knots })
		}
	}

	pub fn len(&self) -> usize {
		self.knots.len()
	}

	pub fn domain(&self) -> RangeInclusive<f32> {
		let first = self.knots.first().map_or(0.0, |k| *k.x);
		let last = self.knots.last().map_or(0.0, |k| *k.x);
		first..=last
	}

	pub fn piece_at(&self, x: f32) -> Option<LinearPiece<Y>> {
		let next_index = self.knots.partition_point(|k| !(x < *k.x));
		let prev = next_index.checked_sub(1).and_then(|i| self.knots.get(i));
		let next = self.knots.get(next_index);
		LinearPiece::new(prev, next)
	}

	pub fn evaluate(&self, x: f32) -> Y {
		self
			.piece_at(x)
			.map(|piece| piece.extension.evaluate(x))
			.unwrap_or_default()
	}

	pub fn linear_map<Z: Interpolable>(&self, f: impl Fn(&Y) -> Z) -> PiecewiseLinear<Z> {
		PiecewiseLinear {
			knots: self
				.knots
				.iter()
				.map(|k| Knot { x: k.x, y: f(&k.y) })
				.collect(),
		}
	}
}
