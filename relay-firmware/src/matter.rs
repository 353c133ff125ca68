// Matter Callbacks: Einstiegspunkte für den Matter Stack
//
// Der Stack selbst (Node, Attribut-Store, Commissioning) ist nicht Teil
// dieser Firmware. Er ruft nur diese drei Funktionen auf:
// - device_event_callback: Lifecycle-Events → Status-LED
// - attribute_update_callback: OnOff Writes → Relais
// - identification_callback: Identify Cluster (nur Log)

use core::cell::RefCell;

use critical_section::Mutex;
use defmt::{error, warn};
use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use relay_core::{
    AttributeError, AttributeValue, DeviceEvent, EndpointBinding, EndpointId, EventRouter,
    IdentifyKind, UpdatePhase,
};

use crate::IndicatorController;
use crate::hal::Relay;

pub type Router = EventRouter<'static, CriticalSectionRawMutex, Relay>;

// Wird einmal in main() gesetzt
static ROUTER: Mutex<RefCell<Option<Router>>> = Mutex::new(RefCell::new(None));

/// Installiert den Router, danach werden Callbacks verarbeitet
pub fn install(indicator: IndicatorController, relay: Relay, binding: EndpointBinding) {
    let router = EventRouter::new(indicator, relay, binding);
    critical_section::with(|cs| {
        ROUTER.borrow_ref_mut(cs).replace(router);
    });
}

fn with_router<T>(f: impl FnOnce(&mut Router) -> T) -> Option<T> {
    critical_section::with(|cs| ROUTER.borrow_ref_mut(cs).as_mut().map(f))
}

pub fn device_event_callback(event: DeviceEvent) {
    if with_router(|router| router.on_device_event(event)).is_none() {
        warn!("Matter event {} before router install", event.describe());
    }
}

pub fn attribute_update_callback(
    phase: UpdatePhase,
    endpoint: EndpointId,
    cluster: u32,
    attribute: u32,
    value: &AttributeValue,
) -> Result<(), AttributeError> {
    with_router(|router| router.on_attribute_update(phase, endpoint, cluster, attribute, value))
        .unwrap_or_else(|| {
            error!("Attribute update before router install");
            Err(AttributeError::InvalidArgument)
        })
}

pub fn identification_callback(
    kind: IdentifyKind,
    endpoint: EndpointId,
    effect_id: u8,
    effect_variant: u8,
) -> Result<(), AttributeError> {
    with_router(|router| router.on_identify(kind, endpoint, effect_id, effect_variant))
        .unwrap_or(Ok(()))
}
