//! Sensor types exposed for an OIG battery box.
use super::descriptors::EntityCategory::Diagnostic;
use super::descriptors::SensorDeviceClass::{
    Battery, Energy, Frequency, Humidity, Power, Temperature, Voltage,
};
use super::descriptors::SensorType;
use super::descriptors::StateClass::{Measurement, TotalIncreasing};

/// Total grid load, computed from the three phases.
pub const GRID_LOAD_TOTAL: &str = "ac_in_aci_wtotal";
/// Operation mode of the box, reported as a numeric code.
pub const OPERATION_MODE: &str = "box_prms_mode";

pub static SENSOR_TYPES: &[SensorType] = &[
    SensorType {
        key: "ac_in_aci_wr",
        node_id: "ac_in",
        node_key: "aci_wr",
        name: "Grid Load Line 1",
        name_cs: "Síť - zátěž fáze 1",
        unit: Some("W"),
        device_class: Some(Power),
        state_class: Some(Measurement),
        entity_category: None,
    },
    SensorType {
        key: "ac_in_aci_ws",
        node_id: "ac_in",
        node_key: "aci_ws",
        name: "Grid Load Line 2",
        name_cs: "Síť - zátěž fáze 2",
        unit: Some("W"),
        device_class: Some(Power),
        state_class: Some(Measurement),
        entity_category: None,
    },
    SensorType {
        key: "ac_in_aci_wt",
        node_id: "ac_in",
        node_key: "aci_wt",
        name: "Grid Load Line 3",
        name_cs: "Síť - zátěž fáze 3",
        unit: Some("W"),
        device_class: Some(Power),
        state_class: Some(Measurement),
        entity_category: None,
    },
    SensorType {
        key: GRID_LOAD_TOTAL,
        node_id: "ac_in",
        node_key: "aci_wtotal",
        name: "Grid Load Total",
        name_cs: "Síť - zátěž celkem",
        unit: Some("W"),
        device_class: Some(Power),
        state_class: Some(Measurement),
        entity_category: None,
    },
    SensorType {
        key: "ac_in_aci_vr",
        node_id: "ac_in",
        node_key: "aci_vr",
        name: "Grid Voltage Line 1",
        name_cs: "Síť - napětí fáze 1",
        unit: Some("V"),
        device_class: Some(Voltage),
        state_class: Some(Measurement),
        entity_category: Some(Diagnostic),
    },
    SensorType {
        key: "ac_in_aci_vs",
        node_id: "ac_in",
        node_key: "aci_vs",
        name: "Grid Voltage Line 2",
        name_cs: "Síť - napětí fáze 2",
        unit: Some("V"),
        device_class: Some(Voltage),
        state_class: Some(Measurement),
        entity_category: Some(Diagnostic),
    },
    SensorType {
        key: "ac_in_aci_vt",
        node_id: "ac_in",
        node_key: "aci_vt",
        name: "Grid Voltage Line 3",
        name_cs: "Síť - napětí fáze 3",
        unit: Some("V"),
        device_class: Some(Voltage),
        state_class: Some(Measurement),
        entity_category: Some(Diagnostic),
    },
    SensorType {
        key: "ac_in_aci_f",
        node_id: "ac_in",
        node_key: "aci_f",
        name: "Grid Frequency",
        name_cs: "Síť - frekvence",
        unit: Some("Hz"),
        device_class: Some(Frequency),
        state_class: Some(Measurement),
        entity_category: Some(Diagnostic),
    },
    SensorType {
        key: "ac_in_ac_ad",
        node_id: "ac_in",
        node_key: "ac_ad",
        name: "Grid Consumption Today",
        name_cs: "Odběr ze sítě - dnes",
        unit: Some("Wh"),
        device_class: Some(Energy),
        state_class: Some(TotalIncreasing),
        entity_category: None,
    },
    SensorType {
        key: "ac_in_ac_pd",
        node_id: "ac_in",
        node_key: "ac_pd",
        name: "Grid Delivery Today",
        name_cs: "Dodávka do sítě - dnes",
        unit: Some("Wh"),
        device_class: Some(Energy),
        state_class: Some(TotalIncreasing),
        entity_category: None,
    },
    SensorType {
        key: "ac_out_aco_pr",
        node_id: "ac_out",
        node_key: "aco_pr",
        name: "Load Line 1",
        name_cs: "Spotřeba - fáze 1",
        unit: Some("W"),
        device_class: Some(Power),
        state_class: Some(Measurement),
        entity_category: None,
    },
    SensorType {
        key: "ac_out_aco_ps",
        node_id: "ac_out",
        node_key: "aco_ps",
        name: "Load Line 2",
        name_cs: "Spotřeba - fáze 2",
        unit: Some("W"),
        device_class: Some(Power),
        state_class: Some(Measurement),
        entity_category: None,
    },
    SensorType {
        key: "ac_out_aco_pt",
        node_id: "ac_out",
        node_key: "aco_pt",
        name: "Load Line 3",
        name_cs: "Spotřeba - fáze 3",
        unit: Some("W"),
        device_class: Some(Power),
        state_class: Some(Measurement),
        entity_category: None,
    },
    SensorType {
        key: "ac_out_aco_p",
        node_id: "ac_out",
        node_key: "aco_p",
        name: "Load Total",
        name_cs: "Spotřeba - celkem",
        unit: Some("W"),
        device_class: Some(Power),
        state_class: Some(Measurement),
        entity_category: None,
    },
    SensorType {
        key: "ac_out_en_day",
        node_id: "ac_out",
        node_key: "en_day",
        name: "Consumption Today",
        name_cs: "Spotřeba - dnes",
        unit: Some("Wh"),
        device_class: Some(Energy),
        state_class: Some(TotalIncreasing),
        entity_category: None,
    },
    SensorType {
        key: "actual_fv_p1",
        node_id: "actual",
        node_key: "fv_p1",
        name: "Panels Output String 1",
        name_cs: "Výkon panelů - string 1",
        unit: Some("W"),
        device_class: Some(Power),
        state_class: Some(Measurement),
        entity_category: None,
    },
    SensorType {
        key: "actual_fv_p2",
        node_id: "actual",
        node_key: "fv_p2",
        name: "Panels Output String 2",
        name_cs: "Výkon panelů - string 2",
        unit: Some("W"),
        device_class: Some(Power),
        state_class: Some(Measurement),
        entity_category: None,
    },
    SensorType {
        key: "dc_in_fv_ad",
        node_id: "dc_in",
        node_key: "fv_ad",
        name: "Panels Output Today",
        name_cs: "Výroba panelů - dnes",
        unit: Some("Wh"),
        device_class: Some(Energy),
        state_class: Some(TotalIncreasing),
        entity_category: None,
    },
    SensorType {
        key: "actual_bat_p",
        node_id: "actual",
        node_key: "bat_p",
        name: "Battery Power",
        name_cs: "Baterie - výkon",
        unit: Some("W"),
        device_class: Some(Power),
        state_class: Some(Measurement),
        entity_category: None,
    },
    SensorType {
        key: "actual_bat_c",
        node_id: "actual",
        node_key: "bat_c",
        name: "Battery Percent",
        name_cs: "Baterie - nabití",
        unit: Some("%"),
        device_class: Some(Battery),
        state_class: Some(Measurement),
        entity_category: None,
    },
    SensorType {
        key: "batt_bat_apd",
        node_id: "batt",
        node_key: "bat_apd",
        name: "Battery Charge Today",
        name_cs: "Baterie - nabíjení dnes",
        unit: Some("Wh"),
        device_class: Some(Energy),
        state_class: Some(TotalIncreasing),
        entity_category: None,
    },
    SensorType {
        key: "batt_bat_and",
        node_id: "batt",
        node_key: "bat_and",
        name: "Battery Discharge Today",
        name_cs: "Baterie - vybíjení dnes",
        unit: Some("Wh"),
        device_class: Some(Energy),
        state_class: Some(TotalIncreasing),
        entity_category: None,
    },
    SensorType {
        key: "box_temp",
        node_id: "box",
        node_key: "temp",
        name: "Box Temperature",
        name_cs: "Teplota boxu",
        unit: Some("°C"),
        device_class: Some(Temperature),
        state_class: Some(Measurement),
        entity_category: Some(Diagnostic),
    },
    SensorType {
        key: "box_humid",
        node_id: "box",
        node_key: "humid",
        name: "Box Humidity",
        name_cs: "Vlhkost boxu",
        unit: Some("%"),
        device_class: Some(Humidity),
        state_class: Some(Measurement),
        entity_category: Some(Diagnostic),
    },
    SensorType {
        key: OPERATION_MODE,
        node_id: "box_prms",
        node_key: "mode",
        name: "Operation Mode",
        name_cs: "Režim",
        unit: None,
        device_class: None,
        state_class: None,
        entity_category: None,
    },
    SensorType {
        key: "device_lastcall",
        node_id: "device",
        node_key: "lastcall",
        name: "Last Call",
        name_cs: "Poslední komunikace",
        unit: None,
        device_class: None,
        state_class: None,
        entity_category: Some(Diagnostic),
    },
];

/// Look up the descriptor of a sensor type.
pub fn sensor_type(key: &str) -> Option<&'static SensorType> {
    SENSOR_TYPES.iter().find(|sensor_type| sensor_type.key == key)
}
