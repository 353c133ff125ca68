// Hardware Abstraction Layer (HAL) Module
//
// Implementiert die Hardware-Traits aus relay-core für den ESP32-C6.

pub mod led_strip;

pub use led_strip::{RmtBuffer, RmtLedStrip, RmtStripFactory};

use esp_hal::gpio::Output;
use relay_core::PinRelay;

/// Relais am GPIO-Ausgang
pub type Relay = PinRelay<Output<'static>>;
