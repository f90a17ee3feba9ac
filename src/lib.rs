//! oigsolar - Sync OIG Cloud battery box telemetry to Home Assistant.
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]
pub mod core;
pub mod entities;
pub mod integration;
pub mod server;
pub mod services;
