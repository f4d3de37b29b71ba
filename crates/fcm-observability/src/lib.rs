//! # fcm-observability
//!
//! Structured tracing for the stability engine: subscriber setup driven by
//! `FCM_LOG` or [`ObservabilityConfig`](fcm_core::config::ObservabilityConfig),
//! span macros per operation, and event helpers for controller milestones.

pub mod tracing_setup;

pub use tracing_setup::{events, init_from_config, init_tracing};
