//! Event Router
//!
//! Übersetzt Matter Lifecycle-Events in Modus-Wünsche für die Status-LED
//! und Attribut-Updates in Relais-Schaltvorgänge.

use embassy_sync::blocking_mutex::raw::RawMutex;

use crate::endpoint::EndpointBinding;
use crate::indicator::ModeController;
use crate::traits::{AttributeError, RelayDriver};
use crate::types::{
    AttributeId, AttributeValue, ClusterId, DeviceEvent, EndpointId, IdentifyKind,
    ON_OFF_ATTRIBUTE_ID, ON_OFF_CLUSTER_ID, UpdatePhase,
};

pub struct EventRouter<'a, M: RawMutex, R: RelayDriver> {
    indicator: ModeController<'a, M>,
    relay: R,
    binding: EndpointBinding,
}

impl<'a, M: RawMutex, R: RelayDriver> EventRouter<'a, M, R> {
    pub fn new(indicator: ModeController<'a, M>, relay: R, binding: EndpointBinding) -> Self {
        Self {
            indicator,
            relay,
            binding,
        }
    }

    /// Verarbeitet ein Lifecycle-Event (total, nie ein Fehler)
    ///
    /// Der Modus-Wunsch wird nur eingereiht: der Event-Kontext des Matter
    /// Stacks wartet nie auf die Settle-Zeit des Indicators. Bei voller
    /// Queue gewinnt der neueste Wunsch.
    pub fn on_device_event(&self, event: DeviceEvent) {
        match event {
            DeviceEvent::Other(code) => info!("{}: {}", event.describe(), code),
            _ => info!("{}", event.describe()),
        }

        if let Some(mode) = event.indicator_mode()
            && let Some(dropped) = self.indicator.request_mode(mode)
        {
            warn!("Indicator queue full, dropped stale {:?}", dropped);
        }
    }

    /// Verarbeitet ein Attribut-Update vom Matter Stack
    ///
    /// # Fehlerbehandlung
    /// Gibt `AttributeError::InvalidArgument` zurück, wenn ein Pre-Update
    /// keinen Boolean-Wert trägt. Das Relais bleibt dann unverändert.
    pub fn on_attribute_update(
        &mut self,
        phase: UpdatePhase,
        endpoint: EndpointId,
        cluster: ClusterId,
        attribute: AttributeId,
        value: &AttributeValue,
    ) -> Result<(), AttributeError> {
        match phase {
            UpdatePhase::PreUpdate => {
                let Some(on) = value.as_bool() else {
                    error!("Invalid attribute value or type: {:?}", value);
                    return Err(AttributeError::InvalidArgument);
                };

                if endpoint != self.binding.endpoint_id()
                    || cluster != ON_OFF_CLUSTER_ID
                    || attribute != ON_OFF_ATTRIBUTE_ID
                {
                    debug!(
                        "Boolean write to endpoint {}, cluster {}, attribute {} drives relay",
                        endpoint, cluster, attribute
                    );
                }

                self.binding.update(&mut self.relay, on);
                Ok(())
            }
            UpdatePhase::PostUpdate => {
                info!(
                    "POST_UPDATE triggered for endpoint {}, cluster {}, attribute {}",
                    endpoint, cluster, attribute
                );
                Ok(())
            }
        }
    }

    /// Identify-Kommando: wird nur geloggt
    pub fn on_identify(
        &self,
        kind: IdentifyKind,
        endpoint: EndpointId,
        effect_id: u8,
        effect_variant: u8,
    ) -> Result<(), AttributeError> {
        info!(
            "Identification: type={:?}, endpoint_id={}, effect_id={}, effect_variant={}",
            kind, endpoint, effect_id, effect_variant
        );
        Ok(())
    }

    pub fn binding(&self) -> EndpointBinding {
        self.binding
    }

    pub fn relay(&self) -> &R {
        &self.relay
    }

    pub fn indicator(&self) -> ModeController<'a, M> {
        self.indicator
    }
}
