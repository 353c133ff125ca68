// LED Strip über das RMT Peripheral
//
// Implementiert die LedStrip/StripFactory Traits aus relay-core.
// Der Strip wird erst beim ersten Modus erstellt (StripFactory::create).

use esp_hal::Blocking;
use esp_hal::peripherals::{GPIO8, RMT};
use esp_hal::rmt::{PulseCode, Rmt};
use esp_hal::time::Rate;
use esp_hal_smartled::SmartLedsAdapter;
use relay_core::{LedError, LedStrip, StripFactory};
use rgb::RGB8;
use smart_leds_trait::SmartLedsWrite;

use crate::config::LED_COUNT;

// Buffer-Größe für 1 LED (3 Farben * 8 Bits + 1 Reset)
pub const LED_BUFFER_SIZE: usize = 25;

/// RMT-Buffer für den Strip (erstellt mit smart_led_buffer!(1) Macro)
pub type RmtBuffer = [PulseCode; LED_BUFFER_SIZE];

/// Real Hardware LED Strip
///
/// `set_pixel` schreibt in einen lokalen Pixel-Buffer, `refresh` überträgt
/// alle Pixel per RMT an die LED.
pub struct RmtLedStrip<'a> {
    led: SmartLedsAdapter<'a, LED_BUFFER_SIZE>,
    pixels: [RGB8; LED_COUNT],
}

impl LedStrip for RmtLedStrip<'_> {
    fn set_pixel(&mut self, index: usize, color: RGB8) -> Result<(), LedError> {
        let pixel = self.pixels.get_mut(index).ok_or(LedError::InvalidIndex)?;
        *pixel = color;
        Ok(())
    }

    fn refresh(&mut self) -> Result<(), LedError> {
        self.led
            .write(self.pixels.iter().copied())
            .map_err(|_| LedError::RefreshFailed)
    }
}

/// Hält GPIO8, RMT und Buffer bis zum ersten Gebrauch
pub struct RmtStripFactory<'a> {
    parts: Option<(GPIO8<'a>, RMT<'a>, &'a mut RmtBuffer)>,
    rmt_clock_mhz: u32,
}

impl<'a> RmtStripFactory<'a> {
    /// # Parameter
    /// - `gpio8`: GPIO8 Peripheral für LED-Datenleitung
    /// - `rmt_peripheral`: RMT Peripheral
    /// - `rmt_clock_mhz`: RMT Clock Frequenz in MHz (z.B. 80)
    /// - `buffer`: Buffer für LED-Daten
    pub fn new(
        gpio8: GPIO8<'a>,
        rmt_peripheral: RMT<'a>,
        rmt_clock_mhz: u32,
        buffer: &'a mut RmtBuffer,
    ) -> Self {
        Self {
            parts: Some((gpio8, rmt_peripheral, buffer)),
            rmt_clock_mhz,
        }
    }
}

impl<'a> StripFactory for RmtStripFactory<'a> {
    type Strip = RmtLedStrip<'a>;

    fn create(&mut self) -> Result<RmtLedStrip<'a>, LedError> {
        // Peripherals gibt es nur einmal
        let (gpio8, rmt_peripheral, buffer) = self.parts.take().ok_or(LedError::CreateFailed)?;

        let rmt: Rmt<'a, Blocking> = Rmt::new(rmt_peripheral, Rate::from_mhz(self.rmt_clock_mhz))
            .map_err(|_| LedError::CreateFailed)?;

        let led = SmartLedsAdapter::new(rmt.channel0, gpio8, buffer);

        Ok(RmtLedStrip {
            led,
            pixels: [RGB8::default(); LED_COUNT],
        })
    }
}
