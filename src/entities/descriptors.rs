//! Static entity descriptors.
//! A descriptor tells where an entity reads its value in the box telemetry and how
//! Home Assistant should present it.
use strum_macros::{Display, EnumString};

/// Classification of a sensor, as understood by Home Assistant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString)]
#[strum(serialize_all = "snake_case")]
pub enum SensorDeviceClass {
    Battery,
    Current,
    Energy,
    Frequency,
    Humidity,
    Power,
    Temperature,
    Voltage,
}

/// Classification of a binary sensor, as understood by Home Assistant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString)]
#[strum(serialize_all = "snake_case")]
pub enum BinarySensorDeviceClass {
    BatteryCharging,
    Power,
    Problem,
    Running,
}

/// How Home Assistant builds long-term statistics for a sensor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString)]
#[strum(serialize_all = "snake_case")]
pub enum StateClass {
    Measurement,
    Total,
    TotalIncreasing,
}

/// Classification of a non-primary entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString)]
#[strum(serialize_all = "snake_case")]
pub enum EntityCategory {
    Config,
    Diagnostic,
}

/// Descriptor of a sensor type.
#[derive(Debug, PartialEq)]
pub struct SensorType {
    pub key: &'static str,
    pub node_id: &'static str,
    pub node_key: &'static str,
    pub name: &'static str,
    pub name_cs: &'static str,
    pub unit: Option<&'static str>,
    pub device_class: Option<SensorDeviceClass>,
    pub state_class: Option<StateClass>,
    pub entity_category: Option<EntityCategory>,
}

/// Descriptor of a binary sensor type.
#[derive(Debug, PartialEq)]
pub struct BinarySensorType {
    pub key: &'static str,
    pub node_id: &'static str,
    pub node_key: &'static str,
    pub name: &'static str,
    pub name_cs: &'static str,
    pub device_class: Option<BinarySensorDeviceClass>,
    pub entity_category: Option<EntityCategory>,
}
