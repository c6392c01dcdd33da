//! Errors raised while building an [`IndexManager`](crate::IndexManager).
//!
//! Every variant describes a malformed problem definition. None of them is
//! transient: the caller has to fix its input and build again.

use thiserror::Error;

use crate::{NodeIndex, VehicleIndex};

/// Which end of a vehicle route a node was supplied for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EndpointRole {
    /// The node the vehicle leaves from.
    Start,
    /// The node the vehicle returns to.
    End,
}

impl std::fmt::Display for EndpointRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Start => f.write_str("start"),
            Self::End => f.write_str("end"),
        }
    }
}

/// Errors returned by the [`IndexManager`](crate::IndexManager) constructors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IndexManagerError {
    /// `num_nodes` was zero.
    #[error("an index manager needs at least one node")]
    NoNodes,
    /// `num_vehicles` was zero.
    #[error("an index manager needs at least one vehicle")]
    NoVehicles,
    /// A per-vehicle input did not have exactly `num_vehicles` entries.
    #[error("expected {expected} {what}, got {actual}")]
    LengthMismatch {
        /// Name of the offending input, e.g. `"starts"`.
        what: &'static str,
        /// The declared vehicle count.
        expected: usize,
        /// The length actually supplied.
        actual: usize,
    },
    /// A start or end node lies outside `[0, num_nodes)`.
    #[error("{role} node {node} of {vehicle} is out of range for {num_nodes} nodes")]
    NodeOutOfRange {
        /// Vehicle whose endpoint is invalid.
        vehicle: VehicleIndex,
        /// Whether the start or the end was invalid.
        role: EndpointRole,
        /// The rejected node.
        node: NodeIndex,
        /// The declared node count.
        num_nodes: usize,
    },
}
