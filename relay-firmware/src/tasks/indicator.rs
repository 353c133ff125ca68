// Indicator Task - Steuert die RGB Status-LED über RMT Peripheral
use defmt::info;
use embassy_time::Delay;
use esp_hal_smartled::smart_led_buffer;
use relay_core::Indicator;

use crate::IndicatorChannel;
use crate::config::{RMT_CLOCK_MHZ, SETTLE_DELAY_MS};
use crate::hal::RmtStripFactory;

/// Indicator Task - Embassy Task für parallele Ausführung
///
/// Übergibt GPIO8 und RMT an die Strip-Factory. Der Strip selbst wird erst
/// beim ersten Modus erstellt, bis dahin bleibt die LED unangetastet.
///
/// # Parameter
/// - `gpio8`: GPIO8 Peripheral für LED-Datenleitung
/// - `rmt_peripheral`: RMT Peripheral für präzises Timing
/// - `shared`: Modus-Queue und Snapshot (geteilt mit dem Event Router)
#[embassy_executor::task]
pub async fn indicator_task(
    gpio8: esp_hal::peripherals::GPIO8<'static>,
    rmt_peripheral: esp_hal::peripherals::RMT<'static>,
    shared: &'static IndicatorChannel,
) -> ! {
    // Buffer für SmartLED Daten erstellen (1 LED)
    let mut rmt_buffer = smart_led_buffer!(1);

    let factory = RmtStripFactory::new(gpio8, rmt_peripheral, RMT_CLOCK_MHZ, &mut rmt_buffer);

    info!("Indicator task started");

    // Zwei Delay-Instanzen: Settle-Zeit und Animations-Frames laufen parallel
    Indicator::new(shared, factory, Delay, Delay)
        .with_settle_delay_ms(SETTLE_DELAY_MS)
        .run()
        .await
}
