//! Slot assignment for both endpoint layouts.
//!
//! Inputs reaching this module have already been validated: `num_nodes` is
//! positive and every endpoint lies in `[0, num_nodes)`.

use crate::{EndpointLayout, NodeIndex, VariableIndex};

/// The four lookup tables, each at its final size.
pub(super) struct IndexTables {
    pub(super) index_to_node: Vec<NodeIndex>,
    pub(super) node_to_index: Vec<VariableIndex>,
    pub(super) vehicle_to_start: Vec<VariableIndex>,
    pub(super) vehicle_to_end: Vec<VariableIndex>,
}

pub(super) fn build_tables(
    num_nodes: usize,
    starts_ends: &[(NodeIndex, NodeIndex)],
    layout: EndpointLayout,
) -> IndexTables {
    match layout {
        EndpointLayout::Shared => shared_tables(num_nodes, starts_ends),
        EndpointLayout::PerVehicle => per_vehicle_tables(num_nodes, starts_ends),
    }
}

/// Count nodes used as an endpoint by at least two distinct vehicles.
pub(super) fn count_unique_depots(
    num_nodes: usize,
    starts_ends: &[(NodeIndex, NodeIndex)],
) -> usize {
    let mut users = vec![0_usize; num_nodes];
    for &(start, end) in starts_ends {
        bump(&mut users, start);
        // A round trip uses its depot once.
        if end != start {
            bump(&mut users, end);
        }
    }
    users.iter().filter(|&&count| count >= 2).count()
}

fn bump(users: &mut [usize], node: NodeIndex) {
    if let Some(count) = users.get_mut(node.get()) {
        *count += 1;
    }
}

fn endpoints(starts_ends: &[(NodeIndex, NodeIndex)]) -> impl Iterator<Item = NodeIndex> + '_ {
    starts_ends
        .iter()
        .map(|&(start, _)| start)
        .chain(starts_ends.iter().map(|&(_, end)| end))
}

fn shared_tables(num_nodes: usize, starts_ends: &[(NodeIndex, NodeIndex)]) -> IndexTables {
    let mut index_to_node = Vec::with_capacity(num_nodes);
    let mut placed = vec![false; num_nodes];
    let all_nodes = (0..num_nodes).map(NodeIndex::new);
    for node in endpoints(starts_ends).chain(all_nodes) {
        if let Some(flag) = placed.get_mut(node.get()).filter(|flag| !**flag) {
            *flag = true;
            index_to_node.push(node);
        }
    }
    debug_assert_eq!(index_to_node.len(), num_nodes, "every node owns one slot");

    let node_to_index = last_writer_slots(num_nodes, &index_to_node);
    let vehicle_to_start = starts_ends
        .iter()
        .map(|&(start, _)| canonical(&node_to_index, start))
        .collect();
    let vehicle_to_end = starts_ends
        .iter()
        .map(|&(_, end)| canonical(&node_to_index, end))
        .collect();

    IndexTables {
        index_to_node,
        node_to_index,
        vehicle_to_start,
        vehicle_to_end,
    }
}

fn per_vehicle_tables(num_nodes: usize, starts_ends: &[(NodeIndex, NodeIndex)]) -> IndexTables {
    let num_vehicles = starts_ends.len();
    let mut is_endpoint = vec![false; num_nodes];
    for node in endpoints(starts_ends) {
        if let Some(flag) = is_endpoint.get_mut(node.get()) {
            *flag = true;
        }
    }
    let distinct_endpoints = is_endpoint.iter().filter(|&&flag| flag).count();
    let num_indices = 2 * num_vehicles + num_nodes - distinct_endpoints;

    let mut index_to_node = Vec::with_capacity(num_indices);
    index_to_node.extend(endpoints(starts_ends));
    index_to_node.extend(
        is_endpoint
            .iter()
            .enumerate()
            .filter(|&(_, &flag)| !flag)
            .map(|(node, _)| NodeIndex::new(node)),
    );
    debug_assert_eq!(index_to_node.len(), num_indices);

    IndexTables {
        node_to_index: last_writer_slots(num_nodes, &index_to_node),
        index_to_node,
        vehicle_to_start: (0..num_vehicles).map(VariableIndex::new).collect(),
        vehicle_to_end: (num_vehicles..2 * num_vehicles)
            .map(VariableIndex::new)
            .collect(),
    }
}

/// Scan slots in creation order; a later slot replaces an earlier one.
fn last_writer_slots(num_nodes: usize, index_to_node: &[NodeIndex]) -> Vec<VariableIndex> {
    let mut slots = vec![None; num_nodes];
    for (index, node) in index_to_node.iter().enumerate() {
        if let Some(slot) = slots.get_mut(node.get()) {
            *slot = Some(VariableIndex::new(index));
        }
    }
    debug_assert!(slots.iter().all(Option::is_some), "every node has a slot");
    slots.into_iter().flatten().collect()
}

fn canonical(node_to_index: &[VariableIndex], node: NodeIndex) -> VariableIndex {
    let index = node_to_index.get(node.get()).copied();
    debug_assert!(index.is_some(), "validated endpoint {node} has no slot");
    index.unwrap_or_default()
}
