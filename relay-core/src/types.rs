//! Core Types für Status-LED und Relais
//!
//! Datenstrukturen ohne Hardware-Dependencies

use rgb::RGB8;

/// Matter Endpoint-ID
pub type EndpointId = u16;
/// Matter Cluster-ID
pub type ClusterId = u32;
/// Matter Attribut-ID
pub type AttributeId = u32;

/// OnOff Cluster (0x0006)
pub const ON_OFF_CLUSTER_ID: ClusterId = 0x0006;
/// OnOff Attribut innerhalb des OnOff Clusters
pub const ON_OFF_ATTRIBUTE_ID: AttributeId = 0x0000;

// ============================================================================
// Farben
// ============================================================================

pub const RED: RGB8 = RGB8 { r: 255, g: 0, b: 0 };
pub const GREEN: RGB8 = RGB8 { r: 0, g: 255, b: 0 };
pub const BLUE: RGB8 = RGB8 { r: 0, g: 0, b: 255 };
pub const OFF: RGB8 = RGB8 { r: 0, g: 0, b: 0 };

// ============================================================================
// Mode
// ============================================================================

/// Anzeige-Modus der Status-LED
///
/// Jeder Modus (außer `Off`) hat genau eine Animation in [`crate::modes`].
/// `Off` bedeutet: LED dunkel, kein laufender Worker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Mode {
    #[default]
    Off,
    /// Commissioning-Fenster offen: Rot blinkt (500 ms)
    RedBlink,
    /// Commissioning läuft: Rot → Grün → Blau (100 ms)
    CommissioningInProgress,
    /// Commissioning erfolgreich: dauerhaft Grün
    Success,
    /// Fail-Safe Timer abgelaufen: Rot blinkt schnell (300 ms)
    Fail,
    /// Rot/Grün im Wechsel (300 ms), nur direkt über `set_mode` erreichbar
    CycleRedGreen,
}

impl Mode {
    pub const ALL: [Mode; 6] = [
        Mode::Off,
        Mode::RedBlink,
        Mode::CommissioningInProgress,
        Mode::Success,
        Mode::Fail,
        Mode::CycleRedGreen,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Mode::Off => "off",
            Mode::RedBlink => "red-blink",
            Mode::CommissioningInProgress => "commissioning-in-progress",
            Mode::Success => "success",
            Mode::Fail => "fail",
            Mode::CycleRedGreen => "cycle-red-green",
        }
    }

    /// Single-Shot Modi beenden ihren Worker selbst
    pub fn is_single_shot(self) -> bool {
        matches!(self, Mode::Success)
    }
}

impl core::convert::TryFrom<&str> for Mode {
    type Error = ();

    fn try_from(name: &str) -> Result<Self, Self::Error> {
        Mode::ALL
            .into_iter()
            .find(|mode| mode.name() == name)
            .ok_or(())
    }
}

// ============================================================================
// Device Events (vom Matter Stack)
// ============================================================================

/// Lifecycle-Event des Matter Stacks
///
/// Wird vom Event Router genau einmal konsumiert. Unbekannte Event-Typen
/// landen in `Other` und werden nur geloggt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DeviceEvent {
    CommissioningWindowOpened,
    CommissioningWindowClosed,
    CommissioningSessionStarted,
    CommissioningSessionStopped,
    CommissioningComplete,
    FailSafeTimerExpired,
    BleDeinitialized,
    WiFiConnectivityChange,
    ThreadConnectivityChange,
    InternetConnectivityChange,
    ServiceConnectivityChange,
    ServiceProvisioningChange,
    TimeSyncChange,
    ChipoBleConnectionEstablished,
    ChipoBleConnectionClosed,
    CloseAllBleConnections,
    WiFiDeviceAvailable,
    OperationalNetworkStarted,
    ThreadStateChange,
    ThreadInterfaceStateChange,
    ChipoBleAdvertisingChange,
    InterfaceIpAddressChanged,
    OperationalNetworkEnabled,
    DnssdInitialized,
    DnssdRestartNeeded,
    BindingsChangedViaCluster,
    OtaStateChanged,
    FabricWillBeRemoved,
    FabricRemoved,
    FabricCommitted,
    FabricUpdated,
    /// Roher Event-Typ ohne eigene Variante
    Other(u16),
}

impl DeviceEvent {
    /// Status-LED Modus, den dieses Event auslöst (`None` = nur loggen)
    pub fn indicator_mode(self) -> Option<Mode> {
        match self {
            DeviceEvent::CommissioningWindowOpened => Some(Mode::RedBlink),
            DeviceEvent::CommissioningSessionStarted => Some(Mode::CommissioningInProgress),
            DeviceEvent::CommissioningComplete => Some(Mode::Success),
            DeviceEvent::FailSafeTimerExpired => Some(Mode::Fail),
            DeviceEvent::BleDeinitialized => Some(Mode::Off),
            _ => None,
        }
    }

    /// Lesbare Beschreibung für das Log
    pub fn describe(self) -> &'static str {
        match self {
            DeviceEvent::CommissioningWindowOpened => "Commissioning window opened",
            DeviceEvent::CommissioningWindowClosed => "Commissioning window closed",
            DeviceEvent::CommissioningSessionStarted => "Commissioning session started",
            DeviceEvent::CommissioningSessionStopped => "Commissioning session stopped",
            DeviceEvent::CommissioningComplete => "Commissioning complete",
            DeviceEvent::FailSafeTimerExpired => {
                "Commissioning failed, fail-safe timer expired"
            }
            DeviceEvent::BleDeinitialized => "BLE deinitialized",
            DeviceEvent::WiFiConnectivityChange => "Wi-Fi connectivity change",
            DeviceEvent::ThreadConnectivityChange => "Thread connectivity change",
            DeviceEvent::InternetConnectivityChange => "Internet connectivity change",
            DeviceEvent::ServiceConnectivityChange => "Service connectivity change",
            DeviceEvent::ServiceProvisioningChange => "Service provisioning change",
            DeviceEvent::TimeSyncChange => "Time synchronization change",
            DeviceEvent::ChipoBleConnectionEstablished => "BLE connection established",
            DeviceEvent::ChipoBleConnectionClosed => "BLE connection closed",
            DeviceEvent::CloseAllBleConnections => "Close all BLE connections requested",
            DeviceEvent::WiFiDeviceAvailable => "Wi-Fi device is available",
            DeviceEvent::OperationalNetworkStarted => "Operational network started",
            DeviceEvent::ThreadStateChange => "Thread state change",
            DeviceEvent::ThreadInterfaceStateChange => "Thread interface state change",
            DeviceEvent::ChipoBleAdvertisingChange => "CHIPoBLE advertising state change",
            DeviceEvent::InterfaceIpAddressChanged => "Interface IP address changed",
            DeviceEvent::OperationalNetworkEnabled => "Operational network enabled",
            DeviceEvent::DnssdInitialized => "DNS-SD initialized",
            DeviceEvent::DnssdRestartNeeded => "DNS-SD restart needed",
            DeviceEvent::BindingsChangedViaCluster => "Bindings updated via cluster",
            DeviceEvent::OtaStateChanged => "OTA state changed",
            DeviceEvent::FabricWillBeRemoved => "Fabric will be removed",
            DeviceEvent::FabricRemoved => "Fabric removed successfully",
            DeviceEvent::FabricCommitted => "Fabric committed to storage",
            DeviceEvent::FabricUpdated => "Fabric updated",
            DeviceEvent::Other(_) => "Unhandled Matter event type",
        }
    }
}

// ============================================================================
// Attribute Updates
// ============================================================================

/// Phase eines Attribut-Updates
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum UpdatePhase {
    /// Vor dem Speichern im Attribut-Store: Hardware wird hier gesetzt
    PreUpdate,
    /// Nach dem Speichern: nur Hook-Punkt
    PostUpdate,
}

/// Attribut-Wert wie ihn der Matter Stack übergibt
///
/// Nur `Boolean` wird vom Router interpretiert.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum AttributeValue {
    Null,
    Boolean(bool),
    Integer(i64),
    Unsigned(u64),
    Float(f32),
    Enum(u8),
    Bitmap(u32),
}

impl AttributeValue {
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            AttributeValue::Boolean(value) => Some(*value),
            _ => None,
        }
    }
}

/// Art des Identify-Callbacks
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum IdentifyKind {
    Start,
    Stop,
    Effect,
}
