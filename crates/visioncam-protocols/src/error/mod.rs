//! Error types for the VisionCam protocol layer.

mod provider;

pub use provider::*;
