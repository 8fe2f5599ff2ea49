//! Two-stage resolution from a device-route mask to a spatialization mode.
//!
//! Stage 1 maps a route mask to a [`CanonicalDeviceType`]; stage 2 maps the
//! canonical type to a [`SpatializationMode`]. Both tables emulate reference
//! tables owned by the higher-level audio framework and must be kept entry-
//! for-entry in sync with them. Concatenating the two tables into one would
//! save a lookup but would lose the one-to-one auditability against their
//! upstream counterparts, so they stay separate.
//!
//! Both tables are built once behind a [`OnceLock`] and never mutated; after
//! first use, resolution is lock-free and safe from any number of threads.

use std::collections::HashMap;
use std::sync::OnceLock;

use log::warn;

use crate::device::{CanonicalDeviceType, DeviceRouteMask};
use crate::error::{Result, RouteError};
use crate::mode::SpatializationMode;

/// Stage-1 table: single-device route bits to canonical device types.
///
/// Keys are individual device bits, never combinations. Several bits collapse
/// onto one canonical type (SCO and A2DP transport variants). Must be kept in
/// sync with the platform device taxonomy.
fn device_table() -> &'static HashMap<DeviceRouteMask, CanonicalDeviceType> {
    static TABLE: OnceLock<HashMap<DeviceRouteMask, CanonicalDeviceType>> = OnceLock::new();
    TABLE.get_or_init(|| {
        use crate::device::CanonicalDeviceType::*;
        HashMap::from([
            (DeviceRouteMask::EARPIECE, BuiltinEarpiece),
            (DeviceRouteMask::SPEAKER, BuiltinSpeaker),
            (DeviceRouteMask::WIRED_HEADSET, WiredHeadset),
            (DeviceRouteMask::WIRED_HEADPHONE, WiredHeadphones),
            (DeviceRouteMask::BLUETOOTH_SCO, BluetoothSco),
            (DeviceRouteMask::BLUETOOTH_SCO_HEADSET, BluetoothSco),
            (DeviceRouteMask::BLUETOOTH_SCO_CARKIT, BluetoothSco),
            (DeviceRouteMask::BLUETOOTH_A2DP, BluetoothA2dp),
            (DeviceRouteMask::BLUETOOTH_A2DP_HEADPHONES, BluetoothA2dp),
            (DeviceRouteMask::BLUETOOTH_A2DP_SPEAKER, BluetoothA2dp),
            (DeviceRouteMask::HDMI, Hdmi),
            (DeviceRouteMask::ANLG_DOCK_HEADSET, DockAnalog),
            (DeviceRouteMask::DGTL_DOCK_HEADSET, Dock),
            (DeviceRouteMask::USB_ACCESSORY, UsbAccessory),
            (DeviceRouteMask::USB_DEVICE, UsbDevice),
            (DeviceRouteMask::USB_HEADSET, UsbHeadset),
            (DeviceRouteMask::TELEPHONY_TX, Telephony),
            (DeviceRouteMask::LINE, LineAnalog),
            (DeviceRouteMask::HDMI_ARC, HdmiArc),
            (DeviceRouteMask::HDMI_EARC, HdmiEarc),
            (DeviceRouteMask::SPDIF, LineDigital),
            (DeviceRouteMask::FM, Fm),
            (DeviceRouteMask::AUX_LINE, AuxLine),
            (DeviceRouteMask::IP, Ip),
            (DeviceRouteMask::BUS, Bus),
            (DeviceRouteMask::HEARING_AID, HearingAid),
            (DeviceRouteMask::SPEAKER_SAFE, BuiltinSpeakerSafe),
            (DeviceRouteMask::REMOTE_SUBMIX, RemoteSubmix),
            (DeviceRouteMask::BLE_HEADSET, BleHeadset),
            (DeviceRouteMask::BLE_SPEAKER, BleSpeaker),
            (DeviceRouteMask::BLE_BROADCAST, BleBroadcast),
        ])
    })
}

/// Stage-2 table: canonical device types to spatialization modes.
///
/// Intentionally partial: a recognized device type with no entry has no
/// assigned spatialization policy. Must be kept in sync with the platform
/// spatialization-assignment policy.
fn mode_table() -> &'static HashMap<CanonicalDeviceType, SpatializationMode> {
    static TABLE: OnceLock<HashMap<CanonicalDeviceType, SpatializationMode>> = OnceLock::new();
    TABLE.get_or_init(|| {
        use crate::device::CanonicalDeviceType::*;
        use crate::mode::SpatializationMode::{Binaural, Transaural};
        HashMap::from([
            (BuiltinSpeaker, Transaural),
            (WiredHeadset, Binaural),
            (WiredHeadphones, Binaural),
            // assumption for A2DP: mostly headsets
            (BluetoothA2dp, Binaural),
            (Dock, Transaural),
            (UsbAccessory, Transaural),
            (UsbDevice, Transaural),
            (UsbHeadset, Binaural),
            (LineAnalog, Transaural),
            (LineDigital, Transaural),
            (AuxLine, Transaural),
            (HearingAid, Binaural),
            (BleHeadset, Binaural),
            (BleSpeaker, Transaural),
            // assumption that BLE broadcast is mostly consumed on headsets
            (BleBroadcast, Binaural),
        ])
    })
}

/// Resolves the canonical device type for a route mask (stage 1).
///
/// An exact single-device match wins. On a miss the mask is assumed to hold
/// two or more ORed device bits and the lookup is retried with the lowest set
/// bit only. The lowest bit is an arbitrary but deterministic tie-break, kept
/// deliberately simple over alternatives such as nearest-match by populated-
/// bit distance; no other bit combination is ever attempted. Callers may
/// depend on this exact behavior.
///
/// # Errors
///
/// Returns [`RouteError::DeviceNotFound`] if neither lookup matches. An empty
/// mask always takes this path (its lowest bit is zero, never a table key).
pub fn canonical_device_for_mask(mask: DeviceRouteMask) -> Result<CanonicalDeviceType> {
    let devices = device_table();
    if let Some(&device) = devices.get(&mask) {
        return Ok(device);
    }
    warn!("route mask {mask} has more than one device, trying lowest bit");
    match devices.get(&mask.lowest_bit()) {
        Some(&device) => Ok(device),
        None => {
            warn!("route mask {mask} is invalid");
            Err(RouteError::DeviceNotFound(mask))
        }
    }
}

/// Resolves which spatialization mode applies to an output route.
///
/// Composes the two table stages: route mask → canonical device type →
/// spatialization mode. Pure apart from diagnostic warnings; never mutates
/// the tables and is safe to call concurrently without synchronization.
///
/// # Errors
///
/// Returns [`RouteError::DeviceNotFound`] if no device in the mask is known,
/// or [`RouteError::NoModeForDevice`] if the device is recognized but has no
/// assigned spatialization policy.
///
/// # Example
///
/// ```
/// use spat_route::{mode_for_device_mask, DeviceRouteMask, SpatializationMode};
///
/// let mode = mode_for_device_mask(DeviceRouteMask::WIRED_HEADSET).unwrap();
/// assert_eq!(mode, SpatializationMode::Binaural);
/// ```
pub fn mode_for_device_mask(mask: DeviceRouteMask) -> Result<SpatializationMode> {
    let device = canonical_device_for_mask(mask)?;
    match mode_table().get(&device) {
        Some(&mode) => Ok(mode),
        None => {
            warn!("no allowed spatialization mode for route mask {mask}");
            Err(RouteError::NoModeForDevice(mask))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_headset_binaural() {
        assert_eq!(
            mode_for_device_mask(DeviceRouteMask::WIRED_HEADSET),
            Ok(SpatializationMode::Binaural)
        );
    }

    #[test]
    fn test_headphone_binaural() {
        assert_eq!(
            mode_for_device_mask(DeviceRouteMask::WIRED_HEADPHONE),
            Ok(SpatializationMode::Binaural)
        );
    }

    #[test]
    fn test_speaker_transaural() {
        assert_eq!(
            mode_for_device_mask(DeviceRouteMask::SPEAKER),
            Ok(SpatializationMode::Transaural)
        );
    }

    #[test]
    fn test_composite_lowest_bit_wins_binaural() {
        // Lowest bit is the headphone; the submix bit alone has no mode.
        let mask = DeviceRouteMask::WIRED_HEADPHONE | DeviceRouteMask::REMOTE_SUBMIX;
        assert_eq!(mode_for_device_mask(mask), Ok(SpatializationMode::Binaural));
    }

    #[test]
    fn test_composite_lowest_bit_wins_transaural() {
        // Speaker and headphone both present, speaker bit is lower.
        let mask = DeviceRouteMask::SPEAKER | DeviceRouteMask::WIRED_HEADPHONE;
        assert_eq!(
            mode_for_device_mask(mask),
            Ok(SpatializationMode::Transaural)
        );
    }

    #[test]
    fn test_remote_submix_has_no_mode() {
        assert_eq!(
            mode_for_device_mask(DeviceRouteMask::REMOTE_SUBMIX),
            Err(RouteError::NoModeForDevice(DeviceRouteMask::REMOTE_SUBMIX))
        );
    }

    #[test]
    fn test_empty_mask_not_found() {
        let mask = DeviceRouteMask(0);
        assert_eq!(
            mode_for_device_mask(mask),
            Err(RouteError::DeviceNotFound(mask))
        );
    }

    #[test]
    fn test_unknown_bits_not_found() {
        // Bit 31 is unassigned; alone or combined it never resolves.
        let mask = DeviceRouteMask(1 << 31);
        assert_eq!(
            mode_for_device_mask(mask),
            Err(RouteError::DeviceNotFound(mask))
        );
    }

    #[test]
    fn test_sco_aliases_collapse() {
        for mask in [
            DeviceRouteMask::BLUETOOTH_SCO,
            DeviceRouteMask::BLUETOOTH_SCO_HEADSET,
            DeviceRouteMask::BLUETOOTH_SCO_CARKIT,
        ] {
            assert_eq!(
                canonical_device_for_mask(mask),
                Ok(CanonicalDeviceType::BluetoothSco)
            );
            // SCO has no assigned mode.
            assert_eq!(
                mode_for_device_mask(mask),
                Err(RouteError::NoModeForDevice(mask))
            );
        }
    }

    #[test]
    fn test_a2dp_aliases_collapse() {
        for mask in [
            DeviceRouteMask::BLUETOOTH_A2DP,
            DeviceRouteMask::BLUETOOTH_A2DP_HEADPHONES,
            DeviceRouteMask::BLUETOOTH_A2DP_SPEAKER,
        ] {
            assert_eq!(
                canonical_device_for_mask(mask),
                Ok(CanonicalDeviceType::BluetoothA2dp)
            );
            assert_eq!(mode_for_device_mask(mask), Ok(SpatializationMode::Binaural));
        }
    }

    #[test]
    fn test_device_table_keys_are_single_bits() {
        for mask in device_table().keys() {
            assert!(
                mask.is_single_device(),
                "device table key {mask} is not a single device bit"
            );
        }
    }

    #[test]
    fn test_mode_table_keys_reachable_from_device_table() {
        let reachable: Vec<_> = device_table().values().collect();
        for device in mode_table().keys() {
            assert!(
                reachable.contains(&device),
                "mode table entry {device:?} has no route bit mapping to it"
            );
        }
    }
}
