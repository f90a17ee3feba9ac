//! Device the entities belong to.
use crate::integration::oigcloud::BoxData;

pub const DOMAIN: &str = "oig_cloud";
pub const DEFAULT_NAME: &str = "ČEZ Battery Box";
pub const MANUFACTURER: &str = "OIG";

#[derive(Debug, Clone, PartialEq)]
pub struct DeviceInfo {
    pub identifiers: (String, String),
    pub name: String,
    pub manufacturer: String,
    pub model: String,
}

impl DeviceInfo {
    pub fn new(box_id: &str, box_data: &BoxData<'_>) -> Self {
        let model = if box_data.is_queen() {
            format!("{DEFAULT_NAME} Queen")
        } else {
            format!("{DEFAULT_NAME} Home")
        };
        DeviceInfo {
            identifiers: (DOMAIN.to_string(), box_id.to_string()),
            name: format!("{model} {box_id}"),
            manufacturer: MANUFACTURER.to_string(),
            model,
        }
    }
}
