//! Background services.
pub mod coordinator;
pub mod oigbridge;

pub use coordinator::{DataUpdateCoordinator, Snapshot};
pub use oigbridge::OigBridgeBackgroundService;
