//! Screen components.

pub mod browse;
