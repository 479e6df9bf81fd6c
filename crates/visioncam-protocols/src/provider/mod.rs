//! Vision provider protocol definitions.
//!
//! Providers send a single image plus a text prompt to a remote vision model
//! and hand back the model's text.

mod kind;
mod result;
mod traits;

pub use kind::*;
pub use result::*;
pub use traits::*;
