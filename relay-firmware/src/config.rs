// Projekt-Konfiguration: Konstanten und Hardware-Zuordnungen
#![allow(dead_code)]

// ============================================================================
// Status-LED Konfiguration
// ============================================================================

/// GPIO-Pin für die RGB Status-LED (WS2812 auf dem ESP32-C6 DevKit)
pub const LED_GPIO_PIN: u8 = 8;

/// RMT Taktfrequenz in MHz
/// 80 MHz ist optimal für WS2812 LED-Timing
pub const RMT_CLOCK_MHZ: u32 = 80;

/// Anzahl der LEDs im Strip
pub const LED_COUNT: usize = 1;

/// Wartezeit vor jedem Moduswechsel in Millisekunden
pub const SETTLE_DELAY_MS: u32 = relay_core::SETTLE_DELAY_MS;

// ============================================================================
// Relais Konfiguration
// ============================================================================

/// GPIO-Pin für das Relais (High = an)
pub const RELAY_GPIO_PIN: u8 = 22;

// ============================================================================
// Matter Konfiguration
// ============================================================================

/// Endpoint-ID des OnOff Endpoints (Endpoint 0 ist der Root Node)
pub const ON_OFF_ENDPOINT_ID: u16 = 1;
