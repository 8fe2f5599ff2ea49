//! Spatialization rendering modes.

use std::fmt;

use serde::{Deserialize, Serialize};

/// The rendering mode a spatializer should use for an output route.
///
/// Exactly two modes exist; a device with no assigned mode is simply absent
/// from the policy table, which [`crate::mode_for_device_mask`] reports as
/// [`crate::RouteError::NoModeForDevice`].
///
/// Discriminants match the platform effect definition and are what the FFI
/// surface writes through its out-parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SpatializationMode {
    /// Headphone-style two-channel delivery.
    Binaural = 0,
    /// Loudspeaker delivery with crosstalk cancellation.
    Transaural = 1,
}

impl fmt::Display for SpatializationMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SpatializationMode::Binaural => write!(f, "binaural"),
            SpatializationMode::Transaural => write!(f, "transaural"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(SpatializationMode::Binaural.to_string(), "binaural");
        assert_eq!(SpatializationMode::Transaural.to_string(), "transaural");
    }

    #[test]
    fn test_serde_names_stable() {
        let json = serde_json::to_string(&SpatializationMode::Binaural).unwrap();
        assert_eq!(json, "\"Binaural\"");
        let back: SpatializationMode = serde_json::from_str("\"Transaural\"").unwrap();
        assert_eq!(back, SpatializationMode::Transaural);
    }

    #[test]
    fn test_discriminants() {
        assert_eq!(SpatializationMode::Binaural as i32, 0);
        assert_eq!(SpatializationMode::Transaural as i32, 1);
    }
}
