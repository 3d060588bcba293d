//! Turns freehand strokes on a drawing surface into playback parameters for an audio source.
//!
//! A [`GestureTracker`] follows one pointer from press to release and reports the finished
//! [`GestureData`]. The stroke's length then scales the playback duration and its height along the
//! way becomes a pitch curve, both bundled in a [`PlaybackPlan`] for whatever engine plays the
//! audio.

pub(crate) mod util;
pub use util::{Interpolable, Linear, LinearPiece, PiecewiseLinear, ResultExt};

pub mod geom;
pub use geom::{AABox, Point, SurfaceGeometry, SurfaceRect};

pub mod gesture;
pub use gesture::*;

pub mod playback;
pub use playback::*;

#[cfg(test)]
pub mod test;
