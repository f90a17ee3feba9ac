//! OIG Bridge Background Service.
//! This service bridges OIG Cloud and Home Assistant. It creates the box entities once the
//! first snapshot is available, then renders and publishes their states after every
//! coordinator refresh.

use std::collections::HashMap;
use std::sync::Arc;
use tokio::time::sleep;
use tokio_util::sync::CancellationToken;

use super::coordinator::{DataUpdateCoordinator, Snapshot};
use crate::entities::{self, Entities, Entity, Language};
use crate::integration::homeassistant::{
    self, STATE_UNAVAILABLE, STATE_UNKNOWN, StateCreateOrUpdate,
};

/// States last accepted by Home Assistant, by entity id.
pub type PublishedStates = HashMap<String, StateCreateOrUpdate>;

pub struct OigBridgeBackgroundService {
    coordinator: Arc<DataUpdateCoordinator>,
    homeassistant: Arc<homeassistant::Client>,
    language: Language,
}

impl OigBridgeBackgroundService {
    /// Creates a new instance of `OigBridgeBackgroundService`.
    pub fn new(
        coordinator: Arc<DataUpdateCoordinator>,
        homeassistant: Arc<homeassistant::Client>,
        language: Language,
    ) -> Self {
        OigBridgeBackgroundService {
            coordinator,
            homeassistant,
            language,
        }
    }

    /// Run the background service until the token is cancelled.
    pub async fn run(&self, shutdown_token: CancellationToken) {
        tokio::select! {
            _ = shutdown_token.cancelled() => {}
            _ = self.run_until_ready_then_sync(shutdown_token.clone()) => {}
        }
    }

    async fn run_until_ready_then_sync(&self, shutdown_token: CancellationToken) {
        let entities = loop {
            match self.setup().await {
                Ok(entities) => break entities,
                Err(e) => {
                    log::error!("Error setting up OIG Cloud entities: {e}");
                    sleep(self.coordinator.update_interval()).await;
                }
            }
        };
        tokio::join!(
            self.coordinator.run(shutdown_token),
            self.sync_entities_task(&entities)
        );
    }

    /// Fetch the first snapshot and create the entities of the first box.
    pub async fn setup(&self) -> Result<Entities, anyhow::Error> {
        let stats = self.coordinator.first_refresh().await?;
        let entities = entities::setup_entities(&stats)?;
        log::info!(
            "Found {} ({}), exposing {} entities",
            entities.device.name,
            entities.device.manufacturer,
            entities.len()
        );
        Ok(entities)
    }

    /// Publish the entity states after every coordinator update.
    async fn sync_entities_task(&self, entities: &Entities) {
        let mut listener = self.coordinator.subscribe();
        let mut published = PublishedStates::new();
        loop {
            let snapshot = listener.borrow_and_update().clone();
            let updated = self.sync_entities(entities, &snapshot, &mut published).await;
            log::debug!("Published {updated} entity states to Home Assistant");
            if listener.changed().await.is_err() {
                break;
            }
        }
    }

    /// Render every entity for the snapshot and post its state.
    /// A successful snapshot reposts every state, so Home Assistant gets them back after
    /// a restart. Otherwise only the states that changed are posted.
    /// An entity that cannot be rendered is posted as unknown.
    /// Returns the number of states posted.
    pub async fn sync_entities(
        &self,
        entities: &Entities,
        snapshot: &Snapshot,
        published: &mut PublishedStates,
    ) -> usize {
        let mut updated = 0;
        for entity in entities.iter() {
            let state = Self::create_entity_state(entity, snapshot, self.language)
                .unwrap_or_else(|e| {
                    log::error!("Error rendering {}: {e}", entity.entity_id());
                    StateCreateOrUpdate {
                        state: STATE_UNKNOWN.to_string(),
                        attributes: Some(entity.attributes(self.language)),
                    }
                });
            if !snapshot.last_update_success
                && published.get(entity.entity_id()) == Some(&state)
            {
                continue;
            }
            match self.homeassistant.set_state(entity.entity_id(), &state).await {
                Ok(()) => {
                    published.insert(entity.entity_id().to_string(), state);
                    updated += 1;
                }
                Err(e) => log::error!(
                    "Failed to update {} in Home Assistant: {e}",
                    entity.entity_id()
                ),
            }
        }
        updated
    }

    /// Home Assistant state of an entity for a snapshot.
    pub fn create_entity_state(
        entity: &dyn Entity,
        snapshot: &Snapshot,
        language: Language,
    ) -> Result<StateCreateOrUpdate, entities::Error> {
        let state = if !snapshot.last_update_success {
            STATE_UNAVAILABLE.to_string()
        } else {
            entity
                .state_string(snapshot.data.as_deref())?
                .unwrap_or_else(|| STATE_UNKNOWN.to_string())
        };
        Ok(StateCreateOrUpdate {
            state,
            attributes: Some(entity.attributes(language)),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::{Sensor, sensor_type};
    use crate::integration::oigcloud::Stats;
    use rstest::rstest;
    use serde_json::json;

    fn snapshot(data: Option<serde_json::Value>, last_update_success: bool) -> Snapshot {
        Snapshot {
            data: data.and_then(Stats::from_value).map(Arc::new),
            last_update_success,
            last_updated: None,
        }
    }

    #[rstest]
    #[case(snapshot(Some(json!({ "1": { "box": { "temp": 21.5 } } })), true), "21.5")]
    #[case(snapshot(None, true), "unknown")]
    #[case(snapshot(None, false), "unavailable")]
    #[case(snapshot(Some(json!({ "1": { "box": { "temp": 21.5 } } })), false), "unavailable")]
    fn test_create_entity_state(#[case] snapshot: Snapshot, #[case] expected: &str) {
        let sensor = Sensor::new("1", sensor_type("box_temp").unwrap());

        let state =
            OigBridgeBackgroundService::create_entity_state(&sensor, &snapshot, Language::English)
                .unwrap();

        assert_eq!(state.state, expected);
        assert_eq!(
            state.attributes.unwrap().get("friendly_name").map(String::as_str),
            Some("Box Temperature")
        );
    }

    #[test]
    fn test_create_entity_state_missing_value() {
        let sensor = Sensor::new("1", sensor_type("box_temp").unwrap());
        let snapshot = snapshot(Some(json!({ "1": { "box": {} } })), true);

        let result =
            OigBridgeBackgroundService::create_entity_state(&sensor, &snapshot, Language::English);

        assert!(matches!(result, Err(entities::Error::MissingValue { .. })));
    }
}
