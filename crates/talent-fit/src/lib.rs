//! Behavioral assessment and job-fit scoring for candidate pipelines.

pub mod config;
pub mod error;
pub mod telemetry;
pub mod workflows;
