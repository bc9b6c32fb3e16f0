//! Algorithms over multigraph topology.

pub mod kahn;

pub use kahn::{ZeroScan, kahn_order, scan_incident};
