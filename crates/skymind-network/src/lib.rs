//! Network capacity pool for the SkyMind mind-transplant engine.
//!
//! Tracks which network nodes currently provide slots and which agents
//! occupy them. Node hosts forward power and lifecycle events as
//! [`NodeSignal`]s; the pool never refuses a change.
//!
//! # Modules
//!
//! - [`node`] -- Network nodes, power dependency, lifecycle signals
//! - [`pool`] -- The [`CapacityPool`] registry and [`NetworkSummary`]

pub mod node;
pub mod pool;

pub use node::{NetworkNode, NodeSignal, Power};
pub use pool::{CapacityPool, NetworkSummary};
