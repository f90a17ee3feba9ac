//! Error handling for entity state derivation.

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("No box in telemetry data")]
    NoBox,
    #[error("Missing value {node_id}.{node_key}")]
    MissingValue {
        node_id: &'static str,
        node_key: &'static str,
    },
    #[error("Invalid value {node_id}.{node_key}: {value}")]
    InvalidValue {
        node_id: &'static str,
        node_key: &'static str,
        value: String,
    },
}

pub type Result<T> = std::result::Result<T, Error>;
