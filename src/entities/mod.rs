//! Entities derived from the box telemetry.
//! Every entity reads one value from the current snapshot and renders it the way Home
//! Assistant expects: a state string plus presentation attributes.
mod binary_sensor;
mod binary_sensor_types;
mod descriptors;
mod device;
mod error;
mod sensor;
mod sensor_types;

pub use binary_sensor::BinarySensor;
pub use binary_sensor_types::{BINARY_SENSOR_TYPES, binary_sensor_type};
pub use descriptors::{
    BinarySensorDeviceClass, BinarySensorType, EntityCategory, SensorDeviceClass, SensorType,
    StateClass,
};
pub use device::DeviceInfo;
pub use error::{Error, Result};
pub use sensor::{BoxMode, Sensor, SensorState};
pub use sensor_types::{GRID_LOAD_TOTAL, OPERATION_MODE, SENSOR_TYPES, sensor_type};

use crate::integration::oigcloud::{BoxData, Stats};
use std::collections::HashMap;
use strum_macros::Display;

/// Language used for entity names.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Display)]
pub enum Language {
    #[default]
    #[strum(serialize = "en")]
    English,
    #[strum(serialize = "cs")]
    Czech,
}

impl From<&str> for Language {
    /// Czech for `cs`, English for anything else.
    fn from(code: &str) -> Self {
        if code.trim().eq_ignore_ascii_case("cs") {
            Language::Czech
        } else {
            Language::English
        }
    }
}

/// An entity published to Home Assistant.
pub trait Entity: Send + Sync {
    /// Home Assistant entity id, e.g. `sensor.oig_2205232120_box_temp`.
    fn entity_id(&self) -> &str;

    /// Identifier stable across restarts.
    fn unique_id(&self) -> String;

    fn name(&self, language: Language) -> &'static str;

    fn entity_category(&self) -> Option<EntityCategory>;

    /// State as Home Assistant renders it. `None` means unknown.
    fn state_string(&self, data: Option<&Stats>) -> Result<Option<String>>;

    /// Presentation attributes (`friendly_name`, `unit_of_measurement`, ...).
    fn attributes(&self, language: Language) -> HashMap<String, String>;
}

/// All entities of one box.
pub struct Entities {
    pub box_id: String,
    pub device: DeviceInfo,
    pub sensors: Vec<Sensor>,
    pub binary_sensors: Vec<BinarySensor>,
}

impl Entities {
    /// Iterate over sensors, then binary sensors.
    pub fn iter(&self) -> impl Iterator<Item = &dyn Entity> {
        self.sensors
            .iter()
            .map(|s| s as &dyn Entity)
            .chain(self.binary_sensors.iter().map(|s| s as &dyn Entity))
    }

    pub fn len(&self) -> usize {
        self.sensors.len() + self.binary_sensors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Create one entity per sensor and binary sensor type for the first box of the snapshot.
pub fn setup_entities(stats: &Stats) -> Result<Entities> {
    let (box_id, box_data) = stats.first_box().ok_or(Error::NoBox)?;
    let sensors = SENSOR_TYPES
        .iter()
        .map(|sensor_type| Sensor::new(box_id, sensor_type))
        .collect();
    let binary_sensors = BINARY_SENSOR_TYPES
        .iter()
        .map(|sensor_type| BinarySensor::new(box_id, sensor_type))
        .collect();
    Ok(Entities {
        box_id: box_id.to_string(),
        device: DeviceInfo::new(box_id, &box_data),
        sensors,
        binary_sensors,
    })
}

/// Data of the first box, the only one entities read from.
fn first_box_data(data: &Stats) -> Result<BoxData<'_>> {
    data.first_box().map(|(_, box_data)| box_data).ok_or(Error::NoBox)
}
