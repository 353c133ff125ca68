//! Animationen der Status-LED
//!
//! Jede Funktion malt ein Muster auf Pixel 0 des Strips. Die Endlos-Animationen
//! kehren nie zurück: der Indicator bricht sie ab, indem er die Future droppt.
//! Jedes `delay_ms(..).await` ist damit ein Abbruchpunkt pro Frame.

use embedded_hal_async::delay::DelayNs;
use rgb::RGB8;

use crate::traits::LedStrip;
use crate::types::{BLUE, GREEN, Mode, OFF, RED};

/// Halbe Periode von `RedBlink` in Millisekunden
pub const RED_BLINK_MS: u32 = 500;
/// Halbe Periode von `Fail` in Millisekunden
pub const FAIL_BLINK_MS: u32 = 300;
/// Dauer einer Farbe in `CommissioningInProgress`
pub const COMMISSIONING_STEP_MS: u32 = 100;
/// Dauer einer Farbe in `CycleRedGreen`
pub const CYCLE_STEP_MS: u32 = 300;

/// Setzt Pixel 0 und überträgt sofort
///
/// Fehler werden nur geloggt, die Animation läuft weiter.
pub fn paint<S: LedStrip>(strip: &mut S, color: RGB8) {
    if let Err(e) = strip.set_pixel(0, color) {
        warn!("LED set_pixel failed: {:?}", e);
        return;
    }
    if let Err(e) = strip.refresh() {
        warn!("LED refresh failed: {:?}", e);
    }
}

/// Spielt die Animation eines Modus ab
///
/// Kehrt nur für Single-Shot Modi (`Success`) und `Off` zurück.
pub async fn play<S: LedStrip, D: DelayNs>(mode: Mode, strip: &mut S, delay: &mut D) {
    match mode {
        Mode::Off => paint(strip, OFF),
        Mode::RedBlink => red_blink(strip, delay).await,
        Mode::CommissioningInProgress => commissioning_in_progress(strip, delay).await,
        Mode::Success => success(strip),
        Mode::Fail => fail(strip, delay).await,
        Mode::CycleRedGreen => cycle_red_green(strip, delay).await,
    }
}

/// Rot blinkt: Commissioning-Fenster ist offen
pub async fn red_blink<S: LedStrip, D: DelayNs>(strip: &mut S, delay: &mut D) -> ! {
    loop {
        paint(strip, RED);
        delay.delay_ms(RED_BLINK_MS).await;
        paint(strip, OFF);
        delay.delay_ms(RED_BLINK_MS).await;
    }
}

/// Dauerhaft Grün, danach ist der Worker fertig
pub fn success<S: LedStrip>(strip: &mut S) {
    paint(strip, GREEN);
}

/// Schnelles rotes Blinken: Fail-Safe Timer abgelaufen
pub async fn fail<S: LedStrip, D: DelayNs>(strip: &mut S, delay: &mut D) -> ! {
    loop {
        paint(strip, RED);
        delay.delay_ms(FAIL_BLINK_MS).await;
        paint(strip, OFF);
        delay.delay_ms(FAIL_BLINK_MS).await;
    }
}

/// Rot → Grün → Blau, solange die Commissioning-Session läuft
pub async fn commissioning_in_progress<S: LedStrip, D: DelayNs>(
    strip: &mut S,
    delay: &mut D,
) -> ! {
    loop {
        for color in [RED, GREEN, BLUE] {
            paint(strip, color);
            delay.delay_ms(COMMISSIONING_STEP_MS).await;
        }
    }
}

pub async fn cycle_red_green<S: LedStrip, D: DelayNs>(strip: &mut S, delay: &mut D) -> ! {
    loop {
        paint(strip, RED);
        delay.delay_ms(CYCLE_STEP_MS).await;
        paint(strip, GREEN);
        delay.delay_ms(CYCLE_STEP_MS).await;
    }
}
