//! Infrastructure layer - External adapters and implementations
//!
//! This layer contains:
//! - Generators: vision and image provider clients
//! - Config: Application configuration
//! - Telemetry: tracing initialisation for the host process
//!
//! The blob store and document store have no adapter here: their drivers
//! belong to the host process, which implements the outbound ports.

pub mod config;
pub mod generators;
pub mod telemetry;
