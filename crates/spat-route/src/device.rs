//! Output device identifiers: route bitmasks and the canonical device taxonomy.
//!
//! A route carries a [`DeviceRouteMask`] with one bit per physical output
//! device; several bits may be set at once when devices are aggregated onto
//! the same route. The platform-wide [`CanonicalDeviceType`] enumeration is
//! the join key between the route bit space and the spatialization policy
//! table in [`crate::resolver`].

use std::fmt;
use std::ops::BitOr;

use serde::{Deserialize, Serialize};

/// A bitmask identifying one or more physical audio output devices on a route.
///
/// Each bit position denotes one device; the assignments below must be kept
/// in sync with the platform HAL device-identifier space. Composite masks
/// (two or more bits) occur when a route aggregates devices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DeviceRouteMask(pub u32);

impl DeviceRouteMask {
    /// Builtin earpiece (handset receiver).
    pub const EARPIECE: DeviceRouteMask = DeviceRouteMask(1 << 0);
    /// Builtin loudspeaker.
    pub const SPEAKER: DeviceRouteMask = DeviceRouteMask(1 << 1);
    /// Wired headset (headphones with microphone).
    pub const WIRED_HEADSET: DeviceRouteMask = DeviceRouteMask(1 << 2);
    /// Wired headphones (no microphone).
    pub const WIRED_HEADPHONE: DeviceRouteMask = DeviceRouteMask(1 << 3);
    /// Bluetooth SCO link.
    pub const BLUETOOTH_SCO: DeviceRouteMask = DeviceRouteMask(1 << 4);
    /// Bluetooth SCO headset.
    pub const BLUETOOTH_SCO_HEADSET: DeviceRouteMask = DeviceRouteMask(1 << 5);
    /// Bluetooth SCO car kit.
    pub const BLUETOOTH_SCO_CARKIT: DeviceRouteMask = DeviceRouteMask(1 << 6);
    /// Bluetooth A2DP sink.
    pub const BLUETOOTH_A2DP: DeviceRouteMask = DeviceRouteMask(1 << 7);
    /// Bluetooth A2DP headphones.
    pub const BLUETOOTH_A2DP_HEADPHONES: DeviceRouteMask = DeviceRouteMask(1 << 8);
    /// Bluetooth A2DP speaker.
    pub const BLUETOOTH_A2DP_SPEAKER: DeviceRouteMask = DeviceRouteMask(1 << 9);
    /// HDMI output.
    pub const HDMI: DeviceRouteMask = DeviceRouteMask(1 << 10);
    /// Analog dock headset.
    pub const ANLG_DOCK_HEADSET: DeviceRouteMask = DeviceRouteMask(1 << 11);
    /// Digital dock headset.
    pub const DGTL_DOCK_HEADSET: DeviceRouteMask = DeviceRouteMask(1 << 12);
    /// USB accessory (device is the USB host).
    pub const USB_ACCESSORY: DeviceRouteMask = DeviceRouteMask(1 << 13);
    /// USB device (accessory is the USB host).
    pub const USB_DEVICE: DeviceRouteMask = DeviceRouteMask(1 << 14);
    /// Remote submix (re-routed mix, e.g. screen casting).
    pub const REMOTE_SUBMIX: DeviceRouteMask = DeviceRouteMask(1 << 15);
    /// Telephony transmit path.
    pub const TELEPHONY_TX: DeviceRouteMask = DeviceRouteMask(1 << 16);
    /// Analog line-level output.
    pub const LINE: DeviceRouteMask = DeviceRouteMask(1 << 17);
    /// HDMI Audio Return Channel.
    pub const HDMI_ARC: DeviceRouteMask = DeviceRouteMask(1 << 18);
    /// S/PDIF digital output.
    pub const SPDIF: DeviceRouteMask = DeviceRouteMask(1 << 19);
    /// FM transmitter.
    pub const FM: DeviceRouteMask = DeviceRouteMask(1 << 20);
    /// Auxiliary line out.
    pub const AUX_LINE: DeviceRouteMask = DeviceRouteMask(1 << 21);
    /// Thermally-limited safe speaker.
    pub const SPEAKER_SAFE: DeviceRouteMask = DeviceRouteMask(1 << 22);
    /// Audio-over-IP output.
    pub const IP: DeviceRouteMask = DeviceRouteMask(1 << 23);
    /// Bus output (automotive).
    pub const BUS: DeviceRouteMask = DeviceRouteMask(1 << 24);
    /// USB headset.
    pub const USB_HEADSET: DeviceRouteMask = DeviceRouteMask(1 << 25);
    /// Hearing aid.
    pub const HEARING_AID: DeviceRouteMask = DeviceRouteMask(1 << 26);
    /// Bluetooth LE headset.
    pub const BLE_HEADSET: DeviceRouteMask = DeviceRouteMask(1 << 27);
    /// Bluetooth LE speaker.
    pub const BLE_SPEAKER: DeviceRouteMask = DeviceRouteMask(1 << 28);
    /// Bluetooth LE broadcast.
    pub const BLE_BROADCAST: DeviceRouteMask = DeviceRouteMask(1 << 29);
    /// HDMI enhanced Audio Return Channel.
    pub const HDMI_EARC: DeviceRouteMask = DeviceRouteMask(1 << 30);

    /// Returns the raw bit value.
    pub fn bits(self) -> u32 {
        self.0
    }

    /// Returns `true` if no device bit is set.
    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Returns `true` if exactly one device bit is set.
    pub fn is_single_device(self) -> bool {
        self.0.count_ones() == 1
    }

    /// Returns `true` if every bit of `other` is also set in `self`.
    pub fn contains(self, other: DeviceRouteMask) -> bool {
        self.0 & other.0 == other.0
    }

    /// Isolates the least-significant set bit (`mask & -mask` in
    /// two's-complement arithmetic).
    ///
    /// For an empty mask the result is empty. This is the disambiguation
    /// primitive for composite masks: an arbitrary but deterministic pick of
    /// one device out of several ORed together.
    pub fn lowest_bit(self) -> DeviceRouteMask {
        DeviceRouteMask(self.0 & self.0.wrapping_neg())
    }
}

impl BitOr for DeviceRouteMask {
    type Output = DeviceRouteMask;

    fn bitor(self, rhs: DeviceRouteMask) -> DeviceRouteMask {
        DeviceRouteMask(self.0 | rhs.0)
    }
}

impl fmt::Display for DeviceRouteMask {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#x}", self.0)
    }
}

/// Platform-wide canonical output device categories.
///
/// This is the join key between the route bit space and the spatialization
/// policy: several route bits may collapse onto one canonical type (all three
/// SCO bits are [`CanonicalDeviceType::BluetoothSco`]). The variant list and
/// discriminants must be kept in sync with the platform device taxonomy owned
/// by the higher-level audio framework.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CanonicalDeviceType {
    /// Device category not recognized by the platform.
    Unknown = 0,
    /// Builtin earpiece.
    BuiltinEarpiece = 1,
    /// Builtin loudspeaker.
    BuiltinSpeaker = 2,
    /// Wired headset with microphone.
    WiredHeadset = 3,
    /// Wired headphones.
    WiredHeadphones = 4,
    /// Analog line-level output.
    LineAnalog = 5,
    /// Digital line output (S/PDIF).
    LineDigital = 6,
    /// Bluetooth SCO (any SCO transport).
    BluetoothSco = 7,
    /// Bluetooth A2DP (any A2DP transport).
    BluetoothA2dp = 8,
    /// HDMI output.
    Hdmi = 9,
    /// HDMI Audio Return Channel.
    HdmiArc = 10,
    /// USB device.
    UsbDevice = 11,
    /// USB accessory.
    UsbAccessory = 12,
    /// Digital dock.
    Dock = 13,
    /// FM transmitter.
    Fm = 14,
    /// Builtin microphone (input side, no output policy).
    BuiltinMic = 15,
    /// FM tuner (input side).
    FmTuner = 16,
    /// TV tuner (input side).
    TvTuner = 17,
    /// Telephony path.
    Telephony = 18,
    /// Auxiliary line out.
    AuxLine = 19,
    /// Audio-over-IP.
    Ip = 20,
    /// Bus output.
    Bus = 21,
    /// USB headset.
    UsbHeadset = 22,
    /// Hearing aid.
    HearingAid = 23,
    /// Thermally-limited safe speaker.
    BuiltinSpeakerSafe = 24,
    /// Remote submix.
    RemoteSubmix = 25,
    /// Bluetooth LE headset.
    BleHeadset = 26,
    /// Bluetooth LE speaker.
    BleSpeaker = 27,
    /// Echo reference (input side).
    EchoReference = 28,
    /// HDMI enhanced Audio Return Channel.
    HdmiEarc = 29,
    /// Bluetooth LE broadcast.
    BleBroadcast = 30,
    /// Analog dock.
    DockAnalog = 31,
}
