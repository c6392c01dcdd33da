//! Index translation between routing problem nodes and solver variables.
//!
//! A routing solver assigns one decision variable per route position, but
//! callers describe problems in terms of nodes: stops, depots and other
//! locations that several vehicles may share. [`IndexManager`] builds the
//! mapping between the two spaces once per problem and answers lookups in
//! both directions for the rest of the solve.
//!
//! Constructors return `Result` to surface invalid problem definitions early.
//! Lookups with out-of-range arguments are caller bugs and panic; `try_*`
//! variants return `Option` instead.
//!
//! # Examples
//!
//! ```
//! use routing_index_core::{IndexManager, NodeIndex, VehicleIndex};
//!
//! # fn main() -> Result<(), routing_index_core::IndexManagerError> {
//! let manager = IndexManager::with_depot(5, 2, NodeIndex::new(0))?;
//! assert_eq!(manager.num_indices(), 5);
//! assert_eq!(
//!     manager.start_index(VehicleIndex::new(0)),
//!     manager.start_index(VehicleIndex::new(1)),
//! );
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod error;
pub mod index;
pub mod layout;
pub mod manager;

pub use error::{EndpointRole, IndexManagerError};
pub use index::{NodeIndex, VariableIndex, VehicleIndex};
pub use layout::{EndpointLayout, IndexManagerConfig};
pub use manager::IndexManager;
