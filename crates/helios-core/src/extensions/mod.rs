// Extensions — decoupled helper systems with no Scene dependencies.

pub mod easing;

pub use easing::{lerp, lerp_vec3};
