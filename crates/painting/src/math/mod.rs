//! Vector and quadratic Bezier math kernel.
//!
//! Pure functions only. Every operation is total over finite input:
//! zero-length vectors and collapsed curves produce defined fallbacks
//! instead of NaN or infinity.

pub mod bezier;
pub mod vector;

pub use bezier::QuadBezier;
pub use vector::*;
