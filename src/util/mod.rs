mod piecewise_linear;
pub use piecewise_linear::*;

mod result_ext;
pub use result_ext::*;
