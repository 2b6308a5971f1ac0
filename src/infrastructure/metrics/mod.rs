//! Monitoring infrastructure

mod service;

pub use service::MetricsService;
