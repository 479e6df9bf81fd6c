//! # VisionCam Core
//!
//! Pieces shared by every request handler.
//!
//! ## Components
//!
//! - [`ProviderFactory`] - Builds a fresh provider per request from its name
//! - [`ImageSession`] - The single-slot store holding the current image
//! - [`prompts`] - Fixed instruction text sent to the models

pub mod error;
pub mod factory;
pub mod prompts;
pub mod session;

pub use error::SessionError;
pub use factory::ProviderFactory;
pub use session::{ImageSession, StoredImage};
