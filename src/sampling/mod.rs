//! Image sampling module
//!
//! This module reduces images to small sequences of colors through a
//! nearest-neighbor grid, whole-image averages and bottom-band regions.

pub mod region;
pub mod sampler;

pub use region::BottomRegion;
pub use sampler::{scaled_dimensions, AverageMode, Sampler};
