mod mapping;
pub use mapping::*;

mod pitch_curve;
pub use pitch_curve::*;

mod plan;
pub use plan::*;
