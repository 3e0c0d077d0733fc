//! Error types for the Galaxy3D RHI
//!
//! A single error enum covers backend failures, configuration errors
//! (out-of-range enum values), contract violations on descriptors, and
//! frame buffer compatibility failures.

use std::fmt;

/// Result type for Galaxy3D RHI operations
pub type Result<T> = std::result::Result<T, Error>;

/// Galaxy3D RHI errors
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Backend-specific error (Vulkan, OpenGL, Direct3D, etc.)
    BackendError(String),

    /// Out of GPU memory
    OutOfMemory,

    /// Invalid resource (texture view, frame buffer, etc.)
    InvalidResource(String),

    /// Initialization failed (engine, device, subsystems)
    InitializationFailed(String),

    /// A raw value does not name any member of a closed enumeration
    InvalidEnumValue(String),

    /// Operation not defined for this format (e.g. texel size of a
    /// block-compressed format)
    UnsupportedFormat(String),

    /// A descriptor breaks one of its structural invariants
    ContractViolation(String),

    /// Frame buffer attachments do not match the render pass attachments
    IncompatibleAttachments(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::BackendError(msg) => write!(f, "Backend error: {}", msg),
            Error::OutOfMemory => write!(f, "Out of GPU memory"),
            Error::InvalidResource(msg) => write!(f, "Invalid resource: {}", msg),
            Error::InitializationFailed(msg) => write!(f, "Initialization failed: {}", msg),
            Error::InvalidEnumValue(msg) => write!(f, "Invalid enum value: {}", msg),
            Error::UnsupportedFormat(msg) => write!(f, "Unsupported format: {}", msg),
            Error::ContractViolation(msg) => write!(f, "Contract violation: {}", msg),
            Error::IncompatibleAttachments(msg) => write!(f, "Incompatible attachments: {}", msg),
        }
    }
}

impl std::error::Error for Error {}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
