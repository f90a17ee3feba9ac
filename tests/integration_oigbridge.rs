//! Integration tests for the OIG bridge service.
use crate::mockserver_homeassistant::HomeAssistantMockServer;
use crate::mockserver_oigcloud::{BOX_ID, OigCloudMockServer, SESSION};
use oigsolar::entities::{BINARY_SENSOR_TYPES, Entity, Language, SENSOR_TYPES};
use oigsolar::integration::{homeassistant, oigcloud};
use oigsolar::services::oigbridge::PublishedStates;
use oigsolar::services::{DataUpdateCoordinator, OigBridgeBackgroundService};
use rstest::{fixture, rstest};
use serde_json::json;
use std::sync::Arc;
use tokio::time::{Duration, sleep, timeout};
use tokio_util::sync::CancellationToken;


struct Bridge {
    coordinator: Arc<DataUpdateCoordinator>,
    service: OigBridgeBackgroundService,
    oigcloud_server: OigCloudMockServer,
    homeassistant_server: HomeAssistantMockServer,
}

fn entity_count() -> usize {
    SENSOR_TYPES.len() + BINARY_SENSOR_TYPES.len()
}

async fn bridge(update_interval: Duration) -> Bridge {
    let _ = env_logger::builder()
        .is_test(true)
        .filter_level(log::LevelFilter::Debug)
        .try_init();
    let oigcloud_server = OigCloudMockServer::start().await;
    let homeassistant_server = HomeAssistantMockServer::start().await;
    let oigcloud = Arc::new(oigcloud::Client::new(
        oigcloud_server.url(),
        oigcloud_server.username(),
        oigcloud_server.password(),
    ));
    let homeassistant = Arc::new(homeassistant::Client::new(
        homeassistant_server.url(),
        homeassistant_server.token(),
    ));
    let coordinator = Arc::new(DataUpdateCoordinator::new(oigcloud, update_interval));
    let service = OigBridgeBackgroundService::new(
        Arc::clone(&coordinator),
        homeassistant,
        Language::English,
    );
    Bridge {
        coordinator,
        service,
        oigcloud_server,
        homeassistant_server,
    }
}

#[fixture]
async fn default_bridge() -> Bridge {
    bridge(Duration::from_secs(60)).await
}

#[rstest]
#[tokio::test]
async fn test_setup_creates_entities(#[future] default_bridge: Bridge) {
    let bridge = default_bridge.await;
    bridge.oigcloud_server.mock_login_ok(SESSION).await;
    bridge.oigcloud_server.mock_stats(SESSION).await;

    let entities = bridge.service.setup().await.expect("setup failed");

    assert_eq!(entities.box_id, BOX_ID);
    assert_eq!(entities.len(), entity_count());
    assert_eq!(entities.device.model, "ČEZ Battery Box Home");
    assert!(
        entities
            .iter()
            .any(|e| e.entity_id() == format!("sensor.oig_{BOX_ID}_ac_in_aci_wtotal"))
    );
    assert!(bridge.coordinator.data().is_some());
}

#[rstest]
#[tokio::test]
async fn test_setup_fails_without_box(#[future] default_bridge: Bridge) {
    let bridge = default_bridge.await;
    bridge.oigcloud_server.mock_login_ok(SESSION).await;
    bridge
        .oigcloud_server
        .server
        .mock_async(|when, then| {
            when.path("/cez/json.php");
            then.status(200)
                .header("content-type", "application/json")
                .json_body(json!({}));
        })
        .await;

    assert!(bridge.service.setup().await.is_err());
}

#[rstest]
#[tokio::test]
async fn test_sync_entities_reposts_after_successful_refresh(#[future] default_bridge: Bridge) {
    let bridge = default_bridge.await;
    bridge.oigcloud_server.mock_login_ok(SESSION).await;
    bridge.oigcloud_server.mock_stats(SESSION).await;
    let entities = bridge.service.setup().await.expect("setup failed");
    let mut mock = bridge.homeassistant_server.mock_set_any_state().await;
    let mut published = PublishedStates::new();

    let first = bridge
        .service
        .sync_entities(&entities, &bridge.coordinator.snapshot(), &mut published)
        .await;
    // Home Assistant restarted and lost every posted state
    mock.delete_async().await;
    let restarted_mock = bridge.homeassistant_server.mock_set_any_state().await;
    bridge.coordinator.refresh().await;
    let second = bridge
        .service
        .sync_entities(&entities, &bridge.coordinator.snapshot(), &mut published)
        .await;

    assert_eq!(first, entity_count());
    assert_eq!(second, entity_count(), "unchanged states are posted again");
    assert_eq!(restarted_mock.hits_async().await, entity_count());
}

#[rstest]
#[tokio::test]
async fn test_sync_entities_missing_value_is_unknown(#[future] default_bridge: Bridge) {
    let bridge = default_bridge.await;
    let mut stats = OigCloudMockServer::stats();
    stats[BOX_ID]["box"]
        .as_object_mut()
        .expect("box node")
        .remove("temp");
    bridge.oigcloud_server.mock_login_ok(SESSION).await;
    bridge
        .oigcloud_server
        .server
        .mock_async(|when, then| {
            when.path("/cez/json.php");
            then.status(200)
                .header("content-type", "application/json")
                .json_body(stats);
        })
        .await;
    let entities = bridge.service.setup().await.expect("setup failed");
    let mock = bridge
        .homeassistant_server
        .mock_set_state(
            &format!("sensor.oig_{BOX_ID}_box_temp"),
            "unknown",
            json!({
                "friendly_name": "Box Temperature",
                "unit_of_measurement": "°C",
                "device_class": "temperature",
                "state_class": "measurement"
            }),
        )
        .await;

    let updated = bridge
        .service
        .sync_entities(
            &entities,
            &bridge.coordinator.snapshot(),
            &mut PublishedStates::new(),
        )
        .await;

    mock.assert_async().await;
    assert_eq!(updated, 1, "only the mocked entity is accepted");
}

#[rstest]
#[tokio::test]
async fn test_sync_entities_grid_load_total(#[future] default_bridge: Bridge) {
    let bridge = default_bridge.await;
    bridge.oigcloud_server.mock_login_ok(SESSION).await;
    bridge.oigcloud_server.mock_stats(SESSION).await;
    let entities = bridge.service.setup().await.expect("setup failed");
    let mock = bridge
        .homeassistant_server
        .mock_set_state(
            &format!("sensor.oig_{BOX_ID}_ac_in_aci_wtotal"),
            "170",
            json!({
                "friendly_name": "Grid Load Total",
                "unit_of_measurement": "W",
                "device_class": "power",
                "state_class": "measurement"
            }),
        )
        .await;
    let mut published = PublishedStates::new();

    let updated = bridge
        .service
        .sync_entities(&entities, &bridge.coordinator.snapshot(), &mut published)
        .await;

    mock.assert_async().await;
    assert_eq!(updated, 1, "only the mocked entity is accepted");
    assert_eq!(published.len(), 1);
}

#[rstest]
#[tokio::test]
async fn test_sync_entities_unavailable_after_failed_refresh(#[future] default_bridge: Bridge) {
    let bridge = default_bridge.await;
    bridge.oigcloud_server.mock_login_ok(SESSION).await;
    let mut stats_mock = bridge.oigcloud_server.mock_stats(SESSION).await;
    let entities = bridge.service.setup().await.expect("setup failed");
    stats_mock.delete_async().await;
    bridge.oigcloud_server.mock_stats_with_server_error().await;

    bridge.coordinator.refresh().await;
    let snapshot = bridge.coordinator.snapshot();
    let mock = bridge
        .homeassistant_server
        .mock_set_any_state_with("unavailable")
        .await;
    let mut published = PublishedStates::new();
    let updated = bridge
        .service
        .sync_entities(&entities, &snapshot, &mut published)
        .await;
    let updated_again = bridge
        .service
        .sync_entities(&entities, &snapshot, &mut published)
        .await;

    assert!(!snapshot.last_update_success);
    assert!(snapshot.data.is_some(), "previous data is kept");
    assert_eq!(updated, entity_count());
    assert_eq!(updated_again, 0, "unchanged unavailable states are not posted again");
    assert_eq!(mock.hits_async().await, entity_count());
}

#[tokio::test]
async fn test_run_publishes_and_stops_on_cancel() {
    let bridge = bridge(Duration::from_secs(3600)).await;
    bridge.oigcloud_server.mock_login_ok(SESSION).await;
    let stats_mock = bridge.oigcloud_server.mock_stats(SESSION).await;
    let set_state_mock = bridge.homeassistant_server.mock_set_any_state().await;
    let token = CancellationToken::new();

    let stop = async {
        sleep(Duration::from_millis(300)).await;
        bridge.coordinator.request_refresh();
        sleep(Duration::from_millis(300)).await;
        token.cancel();
    };
    timeout(
        Duration::from_secs(5),
        async { tokio::join!(bridge.service.run(token.clone()), stop) },
    )
    .await
    .expect("service should stop when cancelled");

    assert_eq!(stats_mock.hits_async().await, 2, "first refresh then requested refresh");
    assert_eq!(
        set_state_mock.hits_async().await,
        2 * entity_count(),
        "every refresh posts every state"
    );
}
