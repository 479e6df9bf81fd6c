//! # VisionCam Protocols
//!
//! Core protocol definitions for the VisionCam service.
//! Contains only interface definitions - no implementations.
//!
//! ## Core Types
//!
//! - [`VisionProvider`] - Trait implemented by every vision backend
//! - [`ProviderKind`] - Closed set of supported backends
//! - [`ProviderError`] - Failures raised by providers and the factory

pub mod error;
pub mod provider;

pub use error::ProviderError;
pub use provider::{ConfigStatus, CredentialSource, ProviderKind, ProviderResult, VisionProvider};
