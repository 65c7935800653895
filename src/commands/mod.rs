pub mod consistency;
pub mod fixtures;
pub mod metrics;
