//! Hardware Abstraction Traits
//!
//! Diese Traits definieren Schnittstellen für Hardware-Zugriff
//! ohne konkrete Implementierung.

use rgb::RGB8;

/// Fehler-Typ für LED-Operationen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LedError {
    /// Strip konnte nicht erstellt werden (fatal)
    CreateFailed,
    /// Pixel-Index außerhalb des Strips
    InvalidIndex,
    /// Übertragung an die LED fehlgeschlagen
    RefreshFailed,
}

/// Fehler-Typ für Relais-Operationen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum RelayError {
    ConfigFailed,
    SetLevelFailed,
}

/// Fehler, die an den Matter Stack zurückgemeldet werden
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum AttributeError {
    /// Attribut-Wert hat nicht den erwarteten Typ
    InvalidArgument,
}

/// Trait für adressierbare LED Strips (WS2812/Neopixel)
///
/// `set_pixel` schreibt nur in den Buffer, erst `refresh` überträgt.
///
/// # Implementierungen
/// - **Production:** RmtLedStrip (ESP32 RMT Peripheral)
/// - **Testing:** MockStrip (in-memory Mock)
pub trait LedStrip {
    fn set_pixel(&mut self, index: usize, color: RGB8) -> Result<(), LedError>;

    fn refresh(&mut self) -> Result<(), LedError>;
}

/// Erstellt den LED Strip beim ersten Gebrauch
///
/// Wird vom Indicator höchstens einmal erfolgreich aufgerufen.
pub trait StripFactory {
    type Strip: LedStrip;

    fn create(&mut self) -> Result<Self::Strip, LedError>;
}

/// Trait für das Relais am OnOff Endpoint
pub trait RelayDriver {
    /// Konfiguriert den Ausgang einmalig beim Start (Relais aus)
    fn init(&mut self) -> Result<(), RelayError>;

    /// Schaltet das Relais
    ///
    /// # Fehlerbehandlung
    /// Fehler werden vom Aufrufer nur geloggt, nie weitergereicht.
    fn set(&mut self, on: bool) -> Result<(), RelayError>;
}
