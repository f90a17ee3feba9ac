//! Sensor entity.
use serde_json::Value;
use std::collections::HashMap;
use std::fmt;
use strum_macros::Display;

use super::descriptors::{EntityCategory, SensorDeviceClass, SensorType, StateClass};
use super::sensor_types::{GRID_LOAD_TOTAL, OPERATION_MODE};
use super::{Entity, Error, Language, Result, first_box_data};
use crate::integration::oigcloud::{BoxData, Stats};

const UNKNOWN_MODE: &str = "Unknown Mode";
const GRID_LOAD_PHASES: [&str; 3] = ["aci_wr", "aci_ws", "aci_wt"];

/// Operation mode of the box.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum BoxMode {
    #[strum(serialize = "Home 1")]
    Home1,
    #[strum(serialize = "Home 2")]
    Home2,
    #[strum(serialize = "Home 3")]
    Home3,
    #[strum(serialize = "Home UPS")]
    HomeUps,
}

impl BoxMode {
    /// Mode for a numeric mode code.
    /// Booleans count as 1 and 0.
    pub fn from_code(value: &Value) -> Option<Self> {
        let code = match value {
            Value::Bool(b) => f64::from(u8::from(*b)),
            _ => value.as_f64()?,
        };
        if code.fract() != 0.0 {
            return None;
        }
        match code as i64 {
            0 => Some(BoxMode::Home1),
            1 => Some(BoxMode::Home2),
            2 => Some(BoxMode::Home3),
            3 => Some(BoxMode::HomeUps),
            _ => None,
        }
    }

    /// Label for a numeric mode code, `Unknown Mode` if the code is not recognized.
    pub fn label(value: &Value) -> String {
        Self::from_code(value)
            .map(|mode| mode.to_string())
            .unwrap_or_else(|| UNKNOWN_MODE.to_string())
    }
}

/// State of a sensor.
#[derive(Debug, Clone, PartialEq)]
pub enum SensorState {
    Number(f64),
    Text(String),
}

impl SensorState {
    /// Numeric when the raw value reads as a number, text otherwise. `None` for null.
    pub fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::Null => None,
            Value::Bool(b) => Some(SensorState::Number(if *b { 1.0 } else { 0.0 })),
            Value::Number(n) => n.as_f64().map(SensorState::Number),
            Value::String(s) => Some(
                s.trim()
                    .parse::<f64>()
                    .map(SensorState::Number)
                    .unwrap_or_else(|_| SensorState::Text(s.clone())),
            ),
            other => Some(SensorState::Text(other.to_string())),
        }
    }
}

impl fmt::Display for SensorState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SensorState::Number(n) => write!(f, "{n}"),
            SensorState::Text(s) => f.write_str(s),
        }
    }
}

/// A sensor reading one field of the box telemetry.
#[derive(Debug, Clone)]
pub struct Sensor {
    sensor_type: &'static SensorType,
    entity_id: String,
}

impl Sensor {
    pub fn new(box_id: &str, sensor_type: &'static SensorType) -> Self {
        log::debug!("Created sensor {} for box {box_id}", sensor_type.key);
        Sensor {
            sensor_type,
            entity_id: format!("sensor.oig_{box_id}_{}", sensor_type.key),
        }
    }

    pub fn sensor_type(&self) -> &'static SensorType {
        self.sensor_type
    }

    pub fn unit(&self) -> Option<&'static str> {
        self.sensor_type.unit
    }

    pub fn device_class(&self) -> Option<SensorDeviceClass> {
        self.sensor_type.device_class
    }

    pub fn state_class(&self) -> Option<StateClass> {
        self.sensor_type.state_class
    }

    /// Current state of the sensor. `None` when there is no data yet.
    pub fn state(&self, data: Option<&Stats>) -> Result<Option<SensorState>> {
        let Some(data) = data else {
            return Ok(None);
        };
        let box_data = first_box_data(data)?;
        match self.sensor_type.key {
            GRID_LOAD_TOTAL => {
                let total = Self::grid_load_total(&box_data)?;
                Ok(Some(SensorState::Number(total)))
            }
            OPERATION_MODE => {
                let value = self.raw_value(&box_data)?;
                Ok(Some(SensorState::Text(BoxMode::label(value))))
            }
            _ => Ok(SensorState::from_value(self.raw_value(&box_data)?)),
        }
    }

    fn raw_value<'a>(&self, box_data: &BoxData<'a>) -> Result<&'a Value> {
        let node_id = self.sensor_type.node_id;
        let node_key = self.sensor_type.node_key;
        box_data
            .value(node_id, node_key)
            .ok_or(Error::MissingValue { node_id, node_key })
    }

    /// Sum of the grid load of the three phases in watts.
    fn grid_load_total(box_data: &BoxData<'_>) -> Result<f64> {
        GRID_LOAD_PHASES.iter().try_fold(0.0, |total, &node_key| -> Result<f64> {
            let value = box_data
                .value("ac_in", node_key)
                .ok_or(Error::MissingValue {
                    node_id: "ac_in",
                    node_key,
                })?;
            match SensorState::from_value(value) {
                Some(SensorState::Number(w)) => Ok(total + w),
                _ => Err(Error::InvalidValue {
                    node_id: "ac_in",
                    node_key,
                    value: value.to_string(),
                }),
            }
        })
    }
}

impl Entity for Sensor {
    fn entity_id(&self) -> &str {
        &self.entity_id
    }

    fn unique_id(&self) -> String {
        format!("oig_cloud_{}", self.sensor_type.key)
    }

    fn name(&self, language: Language) -> &'static str {
        match language {
            Language::Czech => self.sensor_type.name_cs,
            Language::English => self.sensor_type.name,
        }
    }

    fn entity_category(&self) -> Option<EntityCategory> {
        self.sensor_type.entity_category
    }

    fn state_string(&self, data: Option<&Stats>) -> Result<Option<String>> {
        Ok(self.state(data)?.map(|state| state.to_string()))
    }

    fn attributes(&self, language: Language) -> HashMap<String, String> {
        let mut attributes = HashMap::from([(
            "friendly_name".to_string(),
            self.name(language).to_string(),
        )]);
        if let Some(unit) = self.unit() {
            attributes.insert("unit_of_measurement".to_string(), unit.to_string());
        }
        if let Some(device_class) = self.device_class() {
            attributes.insert("device_class".to_string(), device_class.to_string());
        }
        if let Some(state_class) = self.state_class() {
            attributes.insert("state_class".to_string(), state_class.to_string());
        }
        attributes
    }
}
