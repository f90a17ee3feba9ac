//! Binary sensor types exposed for an OIG battery box.
use super::descriptors::BinarySensorDeviceClass::{BatteryCharging, Power, Problem};
use super::descriptors::BinarySensorType;
use super::descriptors::EntityCategory::Diagnostic;

pub static BINARY_SENSOR_TYPES: &[BinarySensorType] = &[
    BinarySensorType {
        key: "invertor_prms_to_grid",
        node_id: "invertor_prms",
        node_key: "to_grid",
        name: "Grid Delivery Enabled",
        name_cs: "Přetoky do sítě povoleny",
        device_class: Some(Power),
        entity_category: None,
    },
    BinarySensorType {
        key: "box_prms_bat_ac",
        node_id: "box_prms",
        node_key: "bat_ac",
        name: "Battery Charging From Grid",
        name_cs: "Nabíjení baterie ze sítě",
        device_class: Some(BatteryCharging),
        entity_category: None,
    },
    BinarySensorType {
        key: "box_prms_crct",
        node_id: "box_prms",
        node_key: "crct",
        name: "Distribution Grid Limit",
        name_cs: "Omezení distribuční sítě",
        device_class: None,
        entity_category: Some(Diagnostic),
    },
    BinarySensorType {
        key: "box_prms_fault",
        node_id: "box_prms",
        node_key: "fault",
        name: "Box Fault",
        name_cs: "Porucha boxu",
        device_class: Some(Problem),
        entity_category: Some(Diagnostic),
    },
];

/// Look up the descriptor of a binary sensor type.
pub fn binary_sensor_type(key: &str) -> Option<&'static BinarySensorType> {
    BINARY_SENSOR_TYPES
        .iter()
        .find(|sensor_type| sensor_type.key == key)
}
