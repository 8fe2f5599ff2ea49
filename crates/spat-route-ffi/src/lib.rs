//! C FFI bindings for route-mode resolution.
//!
//! Exposes the resolver to callers that expect a status-code-and-out-parameter
//! calling convention (platform audio services, C++ effect hosts).
//!
//! # Safety
//!
//! The entry points take raw pointers and are `unsafe` by nature of the C FFI.
//! Callers must pass either a valid, writable pointer or null; null is
//! rejected with [`SpatRouteResult::InvalidArgument`] before any lookup.
//! Nothing here panics or unwinds across the boundary.

use std::os::raw::c_char;

use spat_route::{mode_for_device_mask, DeviceRouteMask, RouteError};

/// Result codes returned by FFI functions.
#[repr(i32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpatRouteResult {
    /// Operation succeeded.
    Ok = 0,
    /// Null or otherwise unusable out-parameter.
    InvalidArgument = -1,
    /// No known output device in the route mask.
    DeviceNotFound = -2,
    /// Recognized device with no assigned spatialization mode.
    NoModeForDevice = -3,
}

/// Return the library version string.
///
/// The returned pointer is valid for the lifetime of the library.
/// Do NOT free the returned string.
#[no_mangle]
pub extern "C" fn spat_route_version() -> *const c_char {
    c"0.1.0".as_ptr()
}

/// Resolve the spatialization mode for a device-route mask.
///
/// On success writes the mode discriminant through `mode_out`
/// (0 = binaural, 1 = transaural) and returns [`SpatRouteResult::Ok`].
/// On failure nothing is written and a negative code is returned.
///
/// # Safety
///
/// `mode_out` must be null or a valid pointer to writable `i32` storage.
#[no_mangle]
pub unsafe extern "C" fn spat_route_mode_for_device_mask(
    device_mask: u32,
    mode_out: *mut i32,
) -> i32 {
    if mode_out.is_null() {
        return SpatRouteResult::InvalidArgument as i32;
    }
    match mode_for_device_mask(DeviceRouteMask(device_mask)) {
        Ok(mode) => {
            unsafe { *mode_out = mode as i32 };
            SpatRouteResult::Ok as i32
        }
        Err(RouteError::InvalidArgument) => SpatRouteResult::InvalidArgument as i32,
        Err(RouteError::DeviceNotFound(_)) => SpatRouteResult::DeviceNotFound as i32,
        Err(RouteError::NoModeForDevice(_)) => SpatRouteResult::NoModeForDevice as i32,
    }
}
