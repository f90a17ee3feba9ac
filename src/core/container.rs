//! Dependency injection container for oigsolar.

use std::sync::Arc;

use super::config::Config;
use crate::entities::Language;
use crate::integration::{homeassistant, oigcloud};
use crate::services::{DataUpdateCoordinator, OigBridgeBackgroundService};

/// Container for application dependencies.
pub struct Container {
    config: Arc<Config>,
    oigcloud: Arc<oigcloud::Client>,
    homeassistant: Arc<homeassistant::Client>,
    coordinator: Arc<DataUpdateCoordinator>,
    oigbridge: Arc<OigBridgeBackgroundService>,
}

impl Container {
    /// Creates a new instance of the dependency injection container.
    pub fn new(config: Config) -> Self {
        let config = Arc::new(config);

        let oigcloud = Arc::new(oigcloud::Client::new(
            config.oigcloud_url.clone(),
            config.oigcloud_username.clone(),
            config.oigcloud_password.clone(),
        ));

        let homeassistant = Arc::new(homeassistant::Client::new(
            config.homeassistant_url.clone(),
            config.homeassistant_token.clone(),
        ));

        let coordinator = Arc::new(DataUpdateCoordinator::new(
            Arc::clone(&oigcloud),
            config.update_interval.into(),
        ));

        let oigbridge = Arc::new(OigBridgeBackgroundService::new(
            Arc::clone(&coordinator),
            Arc::clone(&homeassistant),
            Language::from(config.homeassistant_language.as_str()),
        ));

        Self {
            config,
            oigcloud,
            homeassistant,
            coordinator,
            oigbridge,
        }
    }

    /// Returns a reference to the application config.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Returns a reference to the OIG bridge service.
    pub fn oigbridge(&self) -> Arc<OigBridgeBackgroundService> {
        Arc::clone(&self.oigbridge)
    }

    /// Returns a reference to the data update coordinator.
    pub fn coordinator(&self) -> Arc<DataUpdateCoordinator> {
        Arc::clone(&self.coordinator)
    }

    /// Returns a reference to the OIG Cloud client.
    pub fn oigcloud_client(&self) -> Arc<oigcloud::Client> {
        Arc::clone(&self.oigcloud)
    }

    /// Returns a reference to the HomeAssistant client.
    pub fn homeassistant_client(&self) -> Arc<homeassistant::Client> {
        Arc::clone(&self.homeassistant)
    }

    /// Shutdown the container and clean up resources.
    pub async fn shutdown(&self) {
        if self.oigcloud.logout().await {
            log::debug!("OIG Cloud session dropped");
        }
    }
}
