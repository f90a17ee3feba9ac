//! Binary sensor entity.
use std::collections::HashMap;

use super::descriptors::{BinarySensorDeviceClass, BinarySensorType, EntityCategory};
use super::device::DeviceInfo;
use super::{Entity, Error, Language, Result, first_box_data};
use crate::integration::homeassistant::{STATE_OFF, STATE_ON};
use crate::integration::oigcloud::{Stats, is_truthy};

/// A binary sensor reading one field of the box telemetry.
#[derive(Debug, Clone)]
pub struct BinarySensor {
    sensor_type: &'static BinarySensorType,
    box_id: String,
    entity_id: String,
}

impl BinarySensor {
    pub fn new(box_id: &str, sensor_type: &'static BinarySensorType) -> Self {
        let entity_id = format!("binary_sensor.oig_{box_id}_{}", sensor_type.key);
        log::debug!("Created binary sensor {entity_id}");
        BinarySensor {
            sensor_type,
            box_id: box_id.to_string(),
            entity_id,
        }
    }

    pub fn sensor_type(&self) -> &'static BinarySensorType {
        self.sensor_type
    }

    pub fn device_class(&self) -> Option<BinarySensorDeviceClass> {
        self.sensor_type.device_class
    }

    /// Current state of the binary sensor. `None` when there is no data yet.
    pub fn state(&self, data: Option<&Stats>) -> Result<Option<bool>> {
        let Some(data) = data else {
            log::debug!("No data for {}", self.entity_id);
            return Ok(None);
        };
        let node_id = self.sensor_type.node_id;
        let node_key = self.sensor_type.node_key;
        let value = first_box_data(data)?
            .value(node_id, node_key)
            .ok_or(Error::MissingValue { node_id, node_key })?;
        Ok(Some(is_truthy(value)))
    }

    /// Device this binary sensor belongs to.
    pub fn device_info(&self, data: &Stats) -> Result<DeviceInfo> {
        Ok(DeviceInfo::new(&self.box_id, &first_box_data(data)?))
    }
}

impl Entity for BinarySensor {
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
        let state = self.state(data)?;
        Ok(state.map(|on| if on { STATE_ON } else { STATE_OFF }.to_string()))
    }

    fn attributes(&self, language: Language) -> HashMap<String, String> {
        let mut attributes = HashMap::from([(
            "friendly_name".to_string(),
            self.name(language).to_string(),
        )]);
        if let Some(device_class) = self.device_class() {
            attributes.insert("device_class".to_string(), device_class.to_string());
        }
        attributes
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::binary_sensor_type;
    use rstest::rstest;
    use serde_json::{Value, json};

    const BOX_ID: &str = "2205232120";

    fn binary_sensor(key: &str) -> BinarySensor {
        BinarySensor::new(BOX_ID, binary_sensor_type(key).unwrap())
    }

    #[rstest]
    #[case(json!(1), Some(true))]
    #[case(json!(0), Some(false))]
    #[case(json!(0.0), Some(false))]
    #[case(json!(2.5), Some(true))]
    #[case(json!(true), Some(true))]
    #[case(json!(false), Some(false))]
    #[case(json!(""), Some(false))]
    #[case(json!("0"), Some(true))]
    #[case(json!(null), Some(false))]
    #[case(json!([]), Some(false))]
    fn test_state(#[case] value: Value, #[case] expected: Option<bool>) {
        let stats = Stats::from_value(json!({ BOX_ID: { "box_prms": { "fault": value } } })).unwrap();
        assert_eq!(
            binary_sensor("box_prms_fault").state(Some(&stats)).unwrap(),
            expected
        );
    }

    #[test]
    fn test_state_without_data() {
        let sensor = binary_sensor("box_prms_fault");
        assert_eq!(sensor.state(None).unwrap(), None);
        assert_eq!(sensor.state_string(None).unwrap(), None);
    }

    #[test]
    fn test_state_missing_value() {
        let stats = Stats::from_value(json!({ BOX_ID: { "box_prms": {} } })).unwrap();
        assert!(matches!(
            binary_sensor("box_prms_fault").state(Some(&stats)),
            Err(Error::MissingValue { node_id: "box_prms", node_key: "fault" })
        ));
    }

    #[rstest]
    #[case(json!(1), "on")]
    #[case(json!(0), "off")]
    fn test_state_string(#[case] value: Value, #[case] expected: &str) {
        let stats =
            Stats::from_value(json!({ BOX_ID: { "invertor_prms": { "to_grid": value } } }))
                .unwrap();
        assert_eq!(
            binary_sensor("invertor_prms_to_grid")
                .state_string(Some(&stats))
                .unwrap(),
            Some(expected.to_string())
        );
    }

    #[test]
    fn test_identity_and_attributes() {
        let sensor = binary_sensor("box_prms_bat_ac");
        assert_eq!(
            sensor.entity_id(),
            "binary_sensor.oig_2205232120_box_prms_bat_ac"
        );
        assert_eq!(sensor.unique_id(), "oig_cloud_box_prms_bat_ac");
        assert_eq!(sensor.name(Language::Czech), "Nabíjení baterie ze sítě");
        assert_eq!(sensor.entity_category(), None);
        assert_eq!(
            sensor.attributes(Language::English),
            HashMap::from([
                (
                    "friendly_name".to_string(),
                    "Battery Charging From Grid".to_string()
                ),
                ("device_class".to_string(), "battery_charging".to_string()),
            ])
        );
    }

    #[test]
    fn test_attributes_without_device_class() {
        let sensor = binary_sensor("box_prms_crct");
        assert_eq!(sensor.entity_category(), Some(EntityCategory::Diagnostic));
        assert_eq!(
            sensor.attributes(Language::English),
            HashMap::from([(
                "friendly_name".to_string(),
                "Distribution Grid Limit".to_string()
            )])
        );
    }

    #[rstest]
    #[case(true, "ČEZ Battery Box Queen 2205232120")]
    #[case(false, "ČEZ Battery Box Home 2205232120")]
    fn test_device_info(#[case] queen: bool, #[case] expected_name: &str) {
        let stats = Stats::from_value(json!({ BOX_ID: { "queen": queen } })).unwrap();

        let device = binary_sensor("box_prms_fault").device_info(&stats).unwrap();

        assert_eq!(device.name, expected_name);
        assert_eq!(device.manufacturer, "OIG");
    }
}
