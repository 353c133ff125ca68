// Keine Standard-Bibliothek verwenden (Embedded System)
#![no_std]
// Kein normaler main() Einstiegspunkt (wird von esp_rtos bereitgestellt)
#![no_main]
// Verbiete mem::forget - gefährlich bei ESP HAL Types mit DMA-Buffern
#![deny(
    clippy::mem_forget,
    reason = "mem::forget is generally not safe to do with esp_hal types, especially those \
    holding buffers for the duration of a data transfer."
)]
// Verbiete große Stack-Frames (Stack ist auf Embedded Systemen begrenzt)
#![deny(clippy::large_stack_frames)]

// Embassy Async Runtime
use embassy_executor::Spawner;
use embassy_time::{Duration, Timer};

// ESP32-C6 HAL
use esp_hal::clock::CpuClock;
use esp_hal::gpio::{Level, Output, OutputConfig};
use esp_hal::timer::timg::TimerGroup;

// Backtrace bei Panic und println!() Support
use {esp_backtrace as _, esp_println as _};

use defmt::{error, info};
use relay_core::{PinRelay, RelayDriver, create_on_off_endpoint};

// Projekt-Module und Konfiguration
use matter_relay::IndicatorChannel;
use matter_relay::config::ON_OFF_ENDPOINT_ID;
use matter_relay::matter;
use matter_relay::tasks::indicator_task;

// ESP-IDF App Descriptor - erforderlich für den Bootloader!
// Ohne diesen schlägt das Flashen mit "ESP-IDF App Descriptor missing" fehl
esp_bootloader_esp_idf::esp_app_desc!();

/// Main Entry Point
///
/// Initialisiert Hardware, Relais und Status-LED, installiert den Event
/// Router für die Matter Callbacks. Danach schläft main().
#[esp_rtos::main]
async fn main(spawner: Spawner) -> ! {
    // ESP32-C6 Konfiguration: CPU auf maximale Taktfrequenz (160 MHz)
    let config = esp_hal::Config::default().with_cpu_clock(CpuClock::max());
    let peripherals = esp_hal::init(config);

    // Embassy Runtime initialisieren (Timer + Software Interrupt)
    let timg0 = TimerGroup::new(peripherals.TIMG0);
    let sw_interrupt =
        esp_hal::interrupt::software::SoftwareInterruptControl::new(peripherals.SW_INTERRUPT);
    esp_rtos::start(timg0.timer0, sw_interrupt.software_interrupt0);

    // Relais an GPIO22 (startet aus)
    let mut relay = PinRelay::new(Output::new(
        peripherals.GPIO22,
        Level::Low,
        OutputConfig::default(),
    ));
    if let Err(e) = relay.init() {
        error!("Relay init failed: {:?}", e);
    }
    let binding = create_on_off_endpoint(ON_OFF_ENDPOINT_ID);

    // Modus-Queue der Status-LED muss 'static sein (Task + Callbacks)
    static INDICATOR: static_cell::StaticCell<IndicatorChannel> = static_cell::StaticCell::new();
    let indicator = &*INDICATOR.init(IndicatorChannel::new());

    // Spawn Indicator Task (besitzt GPIO8 + RMT)
    spawner
        .spawn(indicator_task(peripherals.GPIO8, peripherals.RMT, indicator))
        .unwrap();

    // Ab hier darf der Matter Stack Callbacks liefern
    matter::install(indicator.controller(), relay, binding);
    info!("Matter relay ready on endpoint {}", binding.endpoint_id());

    // Main-Loop: schläft (alle Arbeit läuft in Tasks und Callbacks)
    loop {
        Timer::after(Duration::from_secs(3600)).await;
    }
}
