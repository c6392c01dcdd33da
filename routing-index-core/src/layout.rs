//! Configuration for how vehicle endpoints are laid out in the index space.

/// Policy for assigning variable indices to vehicle starts and ends.
///
/// Both layouts create slots in the same fixed order (starts in vehicle
/// order, then ends in vehicle order, then every remaining node in
/// increasing order) so the resulting tables are reproducible.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum EndpointLayout {
    /// Each node owns exactly one slot.
    ///
    /// Vehicles sharing a depot resolve to the same start and end index, and
    /// `num_indices == num_nodes`.
    #[default]
    Shared,
    /// Each vehicle owns a dedicated start slot and a dedicated end slot.
    ///
    /// Slots `0..V` are the starts and `V..2V` the ends, even when the node
    /// behind them is shared or a vehicle returns to where it left from. The
    /// canonical index of an endpoint node is the last slot created for it.
    PerVehicle,
}

impl std::fmt::Display for EndpointLayout {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Shared => f.write_str("shared"),
            Self::PerVehicle => f.write_str("per-vehicle"),
        }
    }
}

/// Configuration for [`IndexManager::with_config`](crate::IndexManager::with_config).
///
/// # Examples
///
/// ```
/// use routing_index_core::{EndpointLayout, IndexManagerConfig};
///
/// let config = IndexManagerConfig::default();
/// assert_eq!(config.layout, EndpointLayout::Shared);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct IndexManagerConfig {
    /// How vehicle starts and ends map onto variable indices.
    pub layout: EndpointLayout,
}

impl IndexManagerConfig {
    /// Build a configuration with an explicit endpoint layout.
    #[must_use]
    pub const fn with_layout(layout: EndpointLayout) -> Self {
        Self { layout }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn default_layout_is_shared() {
        assert_eq!(IndexManagerConfig::default().layout, EndpointLayout::Shared);
    }

    #[rstest]
    #[case(EndpointLayout::Shared, "shared")]
    #[case(EndpointLayout::PerVehicle, "per-vehicle")]
    fn layout_display(#[case] layout: EndpointLayout, #[case] expected: &str) {
        assert_eq!(layout.to_string(), expected);
    }

    #[cfg(feature = "serde")]
    #[rstest]
    #[case("{}", EndpointLayout::Shared)]
    #[case(r#"{"layout":"per-vehicle"}"#, EndpointLayout::PerVehicle)]
    fn config_reads_from_json(#[case] json: &str, #[case] expected: EndpointLayout) {
        let parsed: Result<IndexManagerConfig, _> = serde_json::from_str(json);
        assert_eq!(parsed.ok(), Some(IndexManagerConfig::with_layout(expected)));
    }
}
