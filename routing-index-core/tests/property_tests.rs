//! Property-based tests for the index manager.
//!
//! These tests use `proptest` to assert invariants that must hold for every
//! valid problem definition and both endpoint layouts.
//!
//! # Invariants tested
//!
//! - **Round trip:** every node's canonical index maps back to the node.
//! - **Endpoint coverage:** start and end indices are valid and map back to
//!   the configured nodes.
//! - **Index count:** exact per layout, and always within
//!   `[num_nodes, num_nodes + 2 * vehicles - endpoint nodes]`.
//! - **Determinism:** identical inputs build identical tables.
//! - **Bulk lookup:** `nodes_to_indices` is the element-wise `node_to_index`.
//! - **Depot count:** nodes shared as endpoints by two or more vehicles.


use proptest::prelude::*;
use routing_index_core::{
    EndpointLayout, IndexManager, IndexManagerConfig, NodeIndex, VariableIndex, VehicleIndex,
};

use proptest_support::{Problem, layout_strategy, problem_strategy, problem_with_queries};

fn build(problem: &Problem, layout: EndpointLayout) -> IndexManager {
    IndexManager::with_config(
        problem.num_nodes,
        problem.num_vehicles(),
        &problem.starts_ends,
        IndexManagerConfig::with_layout(layout),
    )
    .expect("generated problems are valid")
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// Property: `index_to_node(node_to_index(n)) == n` for every node.
    #[test]
    fn canonical_index_round_trips(problem in problem_strategy(), layout in layout_strategy()) {
        let manager = build(&problem, layout);
        for raw in 0..problem.num_nodes {
            let node = NodeIndex::new(raw);
            prop_assert_eq!(manager.index_to_node(manager.node_to_index(node)), node);
        }
    }

    /// Property: every vehicle's endpoints are valid and map back to the
    /// configured nodes.
    #[test]
    fn endpoints_map_back_to_configured_nodes(
        problem in problem_strategy(),
        layout in layout_strategy(),
    ) {
        let manager = build(&problem, layout);
        for (raw, &(start, end)) in problem.starts_ends.iter().enumerate() {
            let vehicle = VehicleIndex::new(raw);
            let start_index = manager.start_index(vehicle);
            let end_index = manager.end_index(vehicle);
            prop_assert!(start_index.get() < manager.num_indices());
            prop_assert!(end_index.get() < manager.num_indices());
            prop_assert_eq!(manager.index_to_node(start_index), start);
            prop_assert_eq!(manager.index_to_node(end_index), end);
        }
    }

    /// Property: the index count matches the layout and stays within bounds.
    #[test]
    fn index_count_matches_layout(problem in problem_strategy(), layout in layout_strategy()) {
        let manager = build(&problem, layout);
        let upper = problem.num_nodes + 2 * problem.num_vehicles() - problem.endpoint_nodes().len();
        prop_assert!(manager.num_indices() >= problem.num_nodes);
        prop_assert!(manager.num_indices() <= upper);
        let expected = match layout {
            EndpointLayout::Shared => problem.num_nodes,
            EndpointLayout::PerVehicle => upper,
        };
        prop_assert_eq!(manager.num_indices(), expected);
    }

    /// Property: every node backs at least one slot.
    #[test]
    fn every_node_owns_a_slot(problem in problem_strategy(), layout in layout_strategy()) {
        let manager = build(&problem, layout);
        let mut seen = vec![false; problem.num_nodes];
        for node in manager.index_to_node_map() {
            if let Some(flag) = seen.get_mut(node.get()) {
                *flag = true;
            }
        }
        prop_assert!(seen.into_iter().all(|flag| flag));
    }

    /// Property: building twice from the same input yields identical tables.
    #[test]
    fn construction_is_deterministic(problem in problem_strategy(), layout in layout_strategy()) {
        let first = build(&problem, layout);
        let second = build(&problem, layout);
        prop_assert_eq!(first.index_to_node_map(), second.index_to_node_map());
        prop_assert_eq!(first.node_to_index_map(), second.node_to_index_map());
        prop_assert_eq!(first.vehicle_starts(), second.vehicle_starts());
        prop_assert_eq!(first.vehicle_ends(), second.vehicle_ends());
        prop_assert_eq!(first, second);
    }

    /// Property: bulk translation is the element-wise single lookup.
    #[test]
    fn nodes_to_indices_is_element_wise((problem, queries) in problem_with_queries()) {
        let manager = build(&problem, EndpointLayout::Shared);
        let bulk = manager.nodes_to_indices(&queries);
        let single: Vec<VariableIndex> =
            queries.iter().map(|&node| manager.node_to_index(node)).collect();
        prop_assert_eq!(&bulk, &single);
        prop_assert_eq!(manager.indices_to_nodes(&bulk), queries);
    }

    /// Property: unique depots are endpoints shared by two or more vehicles.
    #[test]
    fn unique_depots_count_shared_endpoints(
        problem in problem_strategy(),
        layout in layout_strategy(),
    ) {
        let manager = build(&problem, layout);
        prop_assert_eq!(manager.num_unique_depots(), problem.shared_depots());
    }

    /// Property: in the per-vehicle layout each vehicle owns its own slots.
    #[test]
    fn per_vehicle_slots_are_dedicated(problem in problem_strategy()) {
        let manager = build(&problem, EndpointLayout::PerVehicle);
        let vehicles = problem.num_vehicles();
        let starts: Vec<_> = (0..vehicles).map(VariableIndex::new).collect();
        let ends: Vec<_> = (vehicles..2 * vehicles).map(VariableIndex::new).collect();
        prop_assert_eq!(manager.vehicle_starts(), starts.as_slice());
        prop_assert_eq!(manager.vehicle_ends(), ends.as_slice());
    }
}
