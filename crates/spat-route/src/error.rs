//! Error types for route-mode resolution.

use thiserror::Error;

use crate::device::DeviceRouteMask;

/// Errors that can occur while resolving a spatialization mode for a route.
///
/// All variants are ordinary return values; resolution never panics. The FFI
/// surface collapses them to status codes but keeps the distinction for
/// diagnostics.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteError {
    /// The caller's destination for the result is unusable (null out-pointer
    /// at the FFI boundary).
    #[error("result destination is unusable")]
    InvalidArgument,

    /// Neither the mask nor its lowest set bit names a known output device.
    #[error("no known output device in route mask {0}")]
    DeviceNotFound(DeviceRouteMask),

    /// The route resolves to a recognized device that has no assigned
    /// spatialization mode.
    #[error("no spatialization mode assigned for route mask {0}")]
    NoModeForDevice(DeviceRouteMask),
}

/// Convenience Result type for route-mode resolution.
pub type Result<T> = std::result::Result<T, RouteError>;
