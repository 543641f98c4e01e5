//! # Application State
//!
//! Shared state for the Axum application, passed to all route handlers via
//! the `State` extractor. Holds the assembled registry service; the
//! provider and ledger collaborators live inside it and are injected at
//! bootstrap, never reached for ambiently.

use std::sync::Arc;

use mreg_identity::IdentityProvider;
use mreg_ledger::MarriageLedger;
use mreg_registry::RegistryService;

/// Process configuration, assembled from the environment at startup.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// TCP port the server binds to.
    pub port: u16,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self { port: 8080 }
    }
}

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    /// Process configuration.
    pub config: Arc<AppConfig>,
    /// The registry operation surface.
    pub registry: Arc<RegistryService>,
}

impl AppState {
    /// Assemble state from configuration and collaborators.
    pub fn new(
        config: AppConfig,
        provider: Arc<dyn IdentityProvider>,
        ledger: Arc<dyn MarriageLedger>,
    ) -> Self {
        Self {
            config: Arc::new(config),
            registry: Arc::new(RegistryService::new(provider, ledger)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mreg_identity::StubIdentityProvider;
    use mreg_ledger::SimulatedLedger;

    #[test]
    fn state_is_cheaply_cloneable() {
        let state = AppState::new(
            AppConfig::default(),
            Arc::new(StubIdentityProvider::new("registry.example")),
            Arc::new(SimulatedLedger::new()),
        );
        let clone = state.clone();
        assert!(Arc::ptr_eq(&state.registry, &clone.registry));
        assert_eq!(clone.config.port, 8080);
    }
}
