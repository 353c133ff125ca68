//! OnOff Endpoint Binding
//!
//! Verknüpft die Matter Endpoint-ID mit dem Zustand des Relais. Wird einmal
//! beim Start erstellt und lebt bis zum Reset.

use crate::traits::RelayDriver;
use crate::types::EndpointId;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct EndpointBinding {
    endpoint_id: EndpointId,
    on: bool,
}

/// Bindet das Relais an den OnOff Endpoint (Relais startet aus)
pub fn create_on_off_endpoint(endpoint_id: EndpointId) -> EndpointBinding {
    info!("Relay created with endpoint_id {}", endpoint_id);
    EndpointBinding {
        endpoint_id,
        on: false,
    }
}

impl EndpointBinding {
    pub fn endpoint_id(&self) -> EndpointId {
        self.endpoint_id
    }

    pub fn is_on(&self) -> bool {
        self.on
    }

    /// Schaltet das Relais und merkt sich den OnOff-Wert
    ///
    /// Hardware-Fehler werden nur geloggt, der Wert wird trotzdem übernommen.
    pub fn update<R: RelayDriver>(&mut self, relay: &mut R, on: bool) {
        if let Err(e) = relay.set(on) {
            warn!(
                "Endpoint {}: relay write failed: {:?}",
                self.endpoint_id, e
            );
        }
        self.on = on;
    }
}
