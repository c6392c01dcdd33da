//! Facade crate for the routing index manager.
//!
//! This crate re-exports the node/variable index translation types from
//! `routing-index-core`.

#![forbid(unsafe_code)]

pub use routing_index_core::{
    EndpointLayout, EndpointRole, IndexManager, IndexManagerConfig, IndexManagerError, NodeIndex,
    VariableIndex, VehicleIndex,
};
