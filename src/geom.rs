use glam::Vec2;

/// Surface-local pixel coordinates. `y` grows downward.
pub type Point = Vec2;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AABox {
	min: Vec2,
	max: Vec2,
}

impl AABox {
	pub fn new(min: Vec2, max: Vec2) -> Self {
		Self { min, max }
	}

	/// The box `[0, size.x] × [0, size.y]`.
	pub fn from_size(size: Vec2) -> Self {
		Self::new(Vec2::ZERO, size)
	}

	pub fn min(&self) -> Vec2 {
		self.min
	}

	pub fn max(&self) -> Vec2 {
		self.max
	}

	pub fn contains(&self, point: Vec2) -> bool {
		!(point.x > self.max.x)
			&& !(point.y > self.max.y)
			&& !(point.x < self.min.x)
			&& !(point.y < self.min.y)
	}

	/// Clamps each axis independently. Unlike `Vec2::clamp`, this tolerates an inverted box, in which
	/// case the lower bound wins.
	pub fn clamp(&self, point: Vec2) -> Vec2 {
		point.min(self.max).max(self.min)
	}
}

/// Where a drawing surface currently sits in client space, and how large it is.
///
/// Implementations are queried on every pointer event, so a surface that moves or resizes between
/// events is picked up without notifying anyone.
pub trait SurfaceGeometry {
	/// Client-space position of the surface's top-left corner.
	fn origin(&self) -> Vec2;

	fn size(&self) -> Vec2;

	fn to_local(&self, client: Vec2) -> Point {
		client - self.origin()
	}

	fn bounds(&self) -> AABox {
		AABox::from_size(self.size())
	}
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SurfaceRect {
	pub origin: Vec2,
	pub size: Vec2,
}

impl SurfaceRect {
	pub fn new(origin: Vec2, size: Vec2) -> Self {
		Self { origin, size }
	}

	pub fn at_origin(width: f32, height: f32) -> Self {
		Self::new(Vec2::ZERO, Vec2::new(width, height))
	}
}

impl SurfaceGeometry for SurfaceRect {
	fn origin(&self) -> Vec2 {
		self.origin
	}

	fn size(&self) -> Vec2 {
		self.size
	}
}

impl<G: SurfaceGeometry + ?Sized> SurfaceGeometry for &G {
	fn origin(&self) -> Vec2 {
		(**self).origin()
	}

	fn size(&self) -> Vec2 {
		(**self).size()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn clamp_inside_is_identity() {
		let bounds = AABox::from_size(Vec2::new(800.0, 400.0));
		assert_eq!(bounds.clamp(Vec2::new(12.0, 340.0)), Vec2::new(12.0, 340.0));
	}

	#[test]
	fn clamp_axes_independently() {
		let bounds = AABox::from_size(Vec2::new(800.0, 400.0));
		assert_eq!(bounds.clamp(Vec2::new(-5.0, 200.0)), Vec2::new(0.0, 200.0));
		assert_eq!(bounds.clamp(Vec2::new(900.0, -1.0)), Vec2::new(800.0, 0.0));
		assert_eq!(bounds.clamp(Vec2::new(900.0, 450.0)), Vec2::new(800.0, 400.0));
	}

	#[test]
	fn clamp_inverted_box() {
		let bounds = AABox::from_size(Vec2::new(-10.0, 100.0));
		assert_eq!(bounds.clamp(Vec2::new(5.0, 50.0)), Vec2::new(0.0, 50.0));
	}

	#[test]
	fn contains_is_closed() {
		let bounds = AABox::from_size(Vec2::new(800.0, 400.0));
		assert!(bounds.contains(Vec2::ZERO));
		assert!(bounds.contains(Vec2::new(800.0, 400.0)));
		assert!(!bounds.contains(Vec2::new(800.5, 10.0)));
		assert!(!bounds.contains(Vec2::new(10.0, -0.5)));
	}

	#[test]
	fn to_local_subtracts_origin() {
		let surface = SurfaceRect::new(Vec2::new(32.0, 64.0), Vec2::new(800.0, 400.0));
		assert_eq!(surface.to_local(Vec2::new(132.0, 164.0)), Vec2::new(100.0, 100.0));
		assert_eq!(surface.to_local(Vec2::new(0.0, 0.0)), Vec2::new(-32.0, -64.0));
		assert_eq!(surface.bounds(), AABox::from_size(Vec2::new(800.0, 400.0)));
	}
}
