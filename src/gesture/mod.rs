mod feedback;
pub use feedback::*;

mod params;
pub use params::*;

mod path;
pub use path::*;

mod tracker;
pub use tracker::*;
