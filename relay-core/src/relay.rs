//! Relais-Treiber über einen GPIO-Ausgang
//!
//! Generisch über `embedded_hal::digital::OutputPin`, damit derselbe Code
//! mit esp-hal `Output` und mit Mock-Pins in Tests läuft.

use embedded_hal::digital::OutputPin;

use crate::traits::{RelayDriver, RelayError};

/// Relais an einem Ausgangs-Pin (High = an)
pub struct PinRelay<P: OutputPin> {
    pin: P,
    state: bool,
}

impl<P: OutputPin> PinRelay<P> {
    pub fn new(pin: P) -> Self {
        Self { pin, state: false }
    }

    /// Zuletzt erfolgreich geschalteter Zustand
    pub fn is_on(&self) -> bool {
        self.state
    }
}

impl<P: OutputPin> RelayDriver for PinRelay<P> {
    fn init(&mut self) -> Result<(), RelayError> {
        match self.pin.set_low() {
            Ok(()) => {
                self.state = false;
                info!("Relay: GPIO initialized successfully");
                Ok(())
            }
            Err(_) => {
                error!("Relay: GPIO configuration failed");
                Err(RelayError::ConfigFailed)
            }
        }
    }

    fn set(&mut self, on: bool) -> Result<(), RelayError> {
        let result = if on {
            self.pin.set_high()
        } else {
            self.pin.set_low()
        };

        match result {
            Ok(()) => {
                self.state = on;
                info!("Relay: state set to {}", on);
                Ok(())
            }
            Err(_) => {
                error!("Relay: failed to set state {}", on);
                Err(RelayError::SetLevelFailed)
            }
        }
    }
}
