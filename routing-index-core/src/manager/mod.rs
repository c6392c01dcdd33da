//! Node to variable index translation for a routing problem.
//!
//! The solver works on a dense range of variable indices, while callers
//! describe the problem in terms of nodes. A node may back several variable
//! indices when vehicles start or end there, so the mapping is one-to-one in
//! the index-to-node direction only. The node-to-index direction returns a
//! single canonical index per node.

mod build;

use log::debug;

use crate::{
    EndpointLayout, EndpointRole, IndexManagerConfig, IndexManagerError, NodeIndex, VariableIndex,
    VehicleIndex,
};

use build::{IndexTables, build_tables, count_unique_depots};

/// Immutable lookup tables between nodes and solver variable indices.
///
/// All tables are built once by a constructor and never change afterwards,
/// so a manager can be shared freely across threads.
///
/// # Examples
///
/// ```
/// use routing_index_core::{IndexManager, NodeIndex, VehicleIndex};
///
/// # fn main() -> Result<(), routing_index_core::IndexManagerError> {
/// let starts = [NodeIndex::new(0), NodeIndex::new(1)];
/// let ends = [NodeIndex::new(2), NodeIndex::new(3)];
/// let manager = IndexManager::with_starts_and_ends(4, 2, &starts, &ends)?;
///
/// let start = manager.start_index(VehicleIndex::new(1));
/// assert_eq!(manager.index_to_node(start), NodeIndex::new(1));
/// assert_eq!(manager.num_indices(), 4);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct IndexManager {
    index_to_node: Vec<NodeIndex>,
    node_to_index: Vec<VariableIndex>,
    vehicle_to_start: Vec<VariableIndex>,
    vehicle_to_end: Vec<VariableIndex>,
    num_unique_depots: usize,
    layout: EndpointLayout,
}

impl IndexManager {
    /// Build a manager where every vehicle starts and ends at `depot`.
    ///
    /// # Errors
    ///
    /// Returns [`IndexManagerError`] if either count is zero or `depot` is not
    /// a valid node.
    pub fn with_depot(
        num_nodes: usize,
        num_vehicles: usize,
        depot: NodeIndex,
    ) -> Result<Self, IndexManagerError> {
        let starts_ends = vec![(depot, depot); num_vehicles];
        Self::with_starts_ends(num_nodes, num_vehicles, &starts_ends)
    }

    /// Build a manager from per-vehicle start and end nodes, paired by
    /// position.
    ///
    /// # Errors
    ///
    /// Returns [`IndexManagerError::LengthMismatch`] unless both slices hold
    /// exactly `num_vehicles` nodes, and the errors of
    /// [`IndexManager::with_config`] otherwise.
    pub fn with_starts_and_ends(
        num_nodes: usize,
        num_vehicles: usize,
        starts: &[NodeIndex],
        ends: &[NodeIndex],
    ) -> Result<Self, IndexManagerError> {
        expect_len("starts", num_vehicles, starts.len())?;
        expect_len("ends", num_vehicles, ends.len())?;
        let starts_ends: Vec<_> = starts.iter().copied().zip(ends.iter().copied()).collect();
        Self::with_starts_ends(num_nodes, num_vehicles, &starts_ends)
    }

    /// Build a manager from one `(start, end)` pair per vehicle.
    ///
    /// # Errors
    ///
    /// See [`IndexManager::with_config`].
    pub fn with_starts_ends(
        num_nodes: usize,
        num_vehicles: usize,
        starts_ends: &[(NodeIndex, NodeIndex)],
    ) -> Result<Self, IndexManagerError> {
        Self::with_config(
            num_nodes,
            num_vehicles,
            starts_ends,
            IndexManagerConfig::default(),
        )
    }

    /// Build a manager with an explicit configuration.
    ///
    /// Slots are created for vehicle starts, then vehicle ends, then the
    /// remaining nodes in increasing order. The canonical index of a node is
    /// the last slot created for it.
    ///
    /// # Errors
    ///
    /// - [`IndexManagerError::NoNodes`] or [`IndexManagerError::NoVehicles`]
    ///   when a count is zero.
    /// - [`IndexManagerError::LengthMismatch`] when `starts_ends` does not
    ///   hold exactly `num_vehicles` pairs.
    /// - [`IndexManagerError::NodeOutOfRange`] when an endpoint is not below
    ///   `num_nodes`.
    pub fn with_config(
        num_nodes: usize,
        num_vehicles: usize,
        starts_ends: &[(NodeIndex, NodeIndex)],
        config: IndexManagerConfig,
    ) -> Result<Self, IndexManagerError> {
        validate(num_nodes, num_vehicles, starts_ends)?;

        let IndexTables {
            index_to_node,
            node_to_index,
            vehicle_to_start,
            vehicle_to_end,
        } = build_tables(num_nodes, starts_ends, config.layout);
        let manager = Self {
            index_to_node,
            node_to_index,
            vehicle_to_start,
            vehicle_to_end,
            num_unique_depots: count_unique_depots(num_nodes, starts_ends),
            layout: config.layout,
        };

        debug!(
            "index manager built: nodes={} vehicles={} indices={} unique_depots={} layout={}",
            manager.num_nodes(),
            manager.num_vehicles(),
            manager.num_indices(),
            manager.num_unique_depots,
            manager.layout
        );
        Ok(manager)
    }

    /// Number of problem nodes.
    #[must_use]
    pub const fn num_nodes(&self) -> usize {
        self.node_to_index.len()
    }

    /// Number of vehicles.
    #[must_use]
    pub const fn num_vehicles(&self) -> usize {
        self.vehicle_to_start.len()
    }

    /// Number of variable indices, never less than [`Self::num_nodes`].
    #[must_use]
    pub const fn num_indices(&self) -> usize {
        self.index_to_node.len()
    }

    /// Number of nodes used as a start or end by two or more vehicles.
    #[must_use]
    pub const fn num_unique_depots(&self) -> usize {
        self.num_unique_depots
    }

    /// Endpoint layout the tables were built with.
    #[must_use]
    pub const fn layout(&self) -> EndpointLayout {
        self.layout
    }

    /// Canonical variable index of `node`.
    ///
    /// # Panics
    ///
    /// Panics if `node` is not below [`Self::num_nodes`].
    #[must_use]
    #[track_caller]
    pub fn node_to_index(&self, node: NodeIndex) -> VariableIndex {
        let Some(index) = self.try_node_to_index(node) else {
            out_of_range(&node, self.num_nodes());
        };
        index
    }

    /// Canonical variable index of `node`, or `None` when out of range.
    #[must_use]
    pub fn try_node_to_index(&self, node: NodeIndex) -> Option<VariableIndex> {
        self.node_to_index.get(node.get()).copied()
    }

    /// Node stored in the slot `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index` is not below [`Self::num_indices`].
    #[must_use]
    #[track_caller]
    pub fn index_to_node(&self, index: VariableIndex) -> NodeIndex {
        let Some(node) = self.try_index_to_node(index) else {
            out_of_range(&index, self.num_indices());
        };
        node
    }

    /// Node stored in the slot `index`, or `None` when out of range.
    #[must_use]
    pub fn try_index_to_node(&self, index: VariableIndex) -> Option<NodeIndex> {
        self.index_to_node.get(index.get()).copied()
    }

    /// Apply [`Self::node_to_index`] to each node, preserving order.
    ///
    /// # Panics
    ///
    /// Panics if any node is not below [`Self::num_nodes`].
    #[must_use]
    #[track_caller]
    pub fn nodes_to_indices(&self, nodes: &[NodeIndex]) -> Vec<VariableIndex> {
        nodes.iter().map(|&node| self.node_to_index(node)).collect()
    }

    /// Apply [`Self::index_to_node`] to each index, preserving order.
    ///
    /// # Panics
    ///
    /// Panics if any index is not below [`Self::num_indices`].
    #[must_use]
    #[track_caller]
    pub fn indices_to_nodes(&self, indices: &[VariableIndex]) -> Vec<NodeIndex> {
        indices
            .iter()
            .map(|&index| self.index_to_node(index))
            .collect()
    }

    /// Variable index of the start of `vehicle`'s route.
    ///
    /// # Panics
    ///
    /// Panics if `vehicle` is not below [`Self::num_vehicles`].
    #[must_use]
    #[track_caller]
    pub fn start_index(&self, vehicle: VehicleIndex) -> VariableIndex {
        let Some(&index) = self.vehicle_to_start.get(vehicle.get()) else {
            out_of_range(&vehicle, self.num_vehicles());
        };
        index
    }

    /// Variable index of the end of `vehicle`'s route.
    ///
    /// # Panics
    ///
    /// Panics if `vehicle` is not below [`Self::num_vehicles`].
    #[must_use]
    #[track_caller]
    pub fn end_index(&self, vehicle: VehicleIndex) -> VariableIndex {
        let Some(&index) = self.vehicle_to_end.get(vehicle.get()) else {
            out_of_range(&vehicle, self.num_vehicles());
        };
        index
    }

    /// The full index-to-node table, one entry per variable index.
    #[must_use]
    pub fn index_to_node_map(&self) -> &[NodeIndex] {
        &self.index_to_node
    }

    /// The full node-to-canonical-index table, one entry per node.
    #[must_use]
    pub fn node_to_index_map(&self) -> &[VariableIndex] {
        &self.node_to_index
    }

    /// Start indices in vehicle order.
    #[must_use]
    pub fn vehicle_starts(&self) -> &[VariableIndex] {
        &self.vehicle_to_start
    }

    /// End indices in vehicle order.
    #[must_use]
    pub fn vehicle_ends(&self) -> &[VariableIndex] {
        &self.vehicle_to_end
    }
}

fn validate(
    num_nodes: usize,
    num_vehicles: usize,
    starts_ends: &[(NodeIndex, NodeIndex)],
) -> Result<(), IndexManagerError> {
    if num_nodes == 0 {
        return Err(IndexManagerError::NoNodes);
    }
    if num_vehicles == 0 {
        return Err(IndexManagerError::NoVehicles);
    }
    expect_len("start/end pairs", num_vehicles, starts_ends.len())?;
    for (vehicle, &(start, end)) in starts_ends.iter().enumerate() {
        let vehicle_index = VehicleIndex::new(vehicle);
        expect_node(vehicle_index, EndpointRole::Start, start, num_nodes)?;
        expect_node(vehicle_index, EndpointRole::End, end, num_nodes)?;
    }
    Ok(())
}

const fn expect_len(
    what: &'static str,
    expected: usize,
    actual: usize,
) -> Result<(), IndexManagerError> {
    if expected == actual {
        Ok(())
    } else {
        Err(IndexManagerError::LengthMismatch {
            what,
            expected,
            actual,
        })
    }
}

const fn expect_node(
    vehicle: VehicleIndex,
    role: EndpointRole,
    node: NodeIndex,
    num_nodes: usize,
) -> Result<(), IndexManagerError> {
    if node.get() < num_nodes {
        Ok(())
    } else {
        Err(IndexManagerError::NodeOutOfRange {
            vehicle,
            role,
            node,
            num_nodes,
        })
    }
}

#[cold]
#[track_caller]
fn out_of_range(value: &dyn std::fmt::Display, bound: usize) -> ! {
    panic!("{value} is out of range (bound {bound})");
}
