//! Infrastructure layer - Storage, services and operational plumbing

pub mod admin;
pub mod company;
pub mod logging;
pub mod metrics;
pub mod storage;
