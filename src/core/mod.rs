//! Core application wiring: configuration and dependency container.
pub mod config;
pub mod container;
