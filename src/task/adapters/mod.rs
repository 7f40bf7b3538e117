//! Adapter implementations for task and group ports.

pub mod memory;
pub mod postgres;
