//! # spat-route
//!
//! Resolves which spatial-audio rendering mode (binaural vs. transaural)
//! applies to an audio output route, emulating the reference policy tables
//! owned by the higher-level audio framework.
//!
//! ## Architecture
//!
//! - **[`device`]**: the route bitmask type and the canonical output device
//!   taxonomy it maps onto.
//! - **[`mode`]**: the two spatialization rendering modes.
//! - **[`resolver`]**: the two static lookup tables and the resolution entry
//!   point, including the lowest-bit disambiguation for composite masks.
//! - **[`error`]**: error types for resolution failures.
//!
//! ## Quick Start
//!
//! ```rust
//! use spat_route::{mode_for_device_mask, DeviceRouteMask, SpatializationMode};
//!
//! // A single-device route resolves directly.
//! let mode = mode_for_device_mask(DeviceRouteMask::SPEAKER).unwrap();
//! assert_eq!(mode, SpatializationMode::Transaural);
//!
//! // A composite route falls back to its lowest set bit.
//! let route = DeviceRouteMask::WIRED_HEADPHONE | DeviceRouteMask::REMOTE_SUBMIX;
//! let mode = mode_for_device_mask(route).unwrap();
//! assert_eq!(mode, SpatializationMode::Binaural);
//! ```
//!
//! Resolution is a pure, stateless classification over tables built once and
//! never mutated; it is safe to call from any number of threads.

pub mod device;
pub mod error;
pub mod mode;
pub mod resolver;

pub use device::{CanonicalDeviceType, DeviceRouteMask};
pub use error::{Result, RouteError};
pub use mode::SpatializationMode;
pub use resolver::{canonical_device_for_mask, mode_for_device_mask};
