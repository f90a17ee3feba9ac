//! Integrations with external systems.
pub mod homeassistant;
pub mod oigcloud;
