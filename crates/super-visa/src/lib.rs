//! Super Visa eligibility estimator and assistant bridge.
//!
//! The estimator classifies a sponsor's declared facts against the LICO-based
//! income table; the assistant relays free-text questions to a hosted model and
//! always answers with either the model's text or a fixed fallback.

pub mod agency;
pub mod config;
pub mod error;
pub mod i18n;
pub mod telemetry;
pub mod workflows;
