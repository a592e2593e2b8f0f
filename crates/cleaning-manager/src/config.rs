// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

use cleaning_dsa::{
    err::DsaConfigError,
    factory::DsaFactory,
    list::SequenceKind,
    map::{MapKind, SkipListConfig},
    sort::{ComparisonSortKind, NonComparisonSortKind},
};
use std::fmt::Display;

/// Which sorter orders the room array before grouping. Logs are always
/// ordered by the comparison sorter, since their order depends on two keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum RoomSortStrategy {
    #[default]
    Comparison,
    NonComparison,
}

impl Display for RoomSortStrategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RoomSortStrategy::Comparison => write!(f, "comparison"),
            RoomSortStrategy::NonComparison => write!(f, "non-comparison"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ManagerConfig {
    pub sequence: SequenceKind,
    pub map: MapKind,
    pub comparison_sort: ComparisonSortKind,
    pub non_comparison_sort: NonComparisonSortKind,
    pub skip_list: SkipListConfig,
    pub room_sort: RoomSortStrategy,
}

impl Default for ManagerConfig {
    fn default() -> Self {
        Self {
            sequence: SequenceKind::ArrayBased,
            map: MapKind::SkipList,
            comparison_sort: ComparisonSortKind::MergeSort,
            non_comparison_sort: NonComparisonSortKind::Quicksort,
            skip_list: SkipListConfig::default(),
            room_sort: RoomSortStrategy::Comparison,
        }
    }
}

impl ManagerConfig {
    /// Default configuration with a different map backend.
    pub fn with_map(map: MapKind) -> Self {
        Self {
            map,
            ..Self::default()
        }
    }

    pub fn factory(&self) -> Result<DsaFactory, DsaConfigError> {
        DsaFactory::builder()
            .sequence_kind(self.sequence)
            .map_kind(self.map)
            .comparison_sort(self.comparison_sort)
            .non_comparison_sort(self.non_comparison_sort)
            .skip_list(self.skip_list)
            .build()
    }
}

impl Display for ManagerConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "ManagerConfig {{ sequence: {}, map: {}, sort: {}/{}, rooms: {} }}",
            self.sequence, self.map, self.comparison_sort, self.non_comparison_sort, self.room_sort
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_reference_program() {
        let cfg = ManagerConfig::default();
        assert_eq!(cfg.sequence, SequenceKind::ArrayBased);
        assert_eq!(cfg.map, MapKind::SkipList);
        assert_eq!(cfg.comparison_sort, ComparisonSortKind::MergeSort);
        assert_eq!(cfg.non_comparison_sort, NonComparisonSortKind::Quicksort);
        assert_eq!(cfg.room_sort, RoomSortStrategy::Comparison);
    }

    #[test]
    fn test_factory_mirrors_config() {
        let cfg = ManagerConfig {
            sequence: SequenceKind::Linked,
            ..ManagerConfig::with_map(MapKind::UnorderedLinked)
        };
        let factory = cfg.factory().unwrap();
        assert_eq!(factory.sequence_kind(), SequenceKind::Linked);
        assert_eq!(factory.map_kind(), MapKind::UnorderedLinked);
    }

    #[test]
    fn test_factory_rejects_bad_skip_list_level() {
        let cfg = ManagerConfig {
            skip_list: SkipListConfig {
                max_level: 0,
                seed: 1,
            },
            ..ManagerConfig::default()
        };
        assert!(matches!(
            cfg.factory(),
            Err(DsaConfigError::InvalidSkipListLevel(_))
        ));
    }

    #[test]
    fn test_display() {
        assert_eq!(
            ManagerConfig::default().to_string(),
            "ManagerConfig { sequence: array-based, map: skip-list, sort: merge-sort/quicksort, rooms: comparison }"
        );
    }
}
