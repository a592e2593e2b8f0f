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

//! Configuration-time selection of container and sort implementations.
//!
//! A [`DsaFactory`] records one kind per capability (sequence, map,
//! comparison sort, non-comparison sort) and hands out fresh containers or
//! runs sorts with those kinds. Owners build one factory up front and keep it
//! for their whole lifetime; nothing switches backends mid-query.

use crate::{
    err::{DsaConfigError, InvalidSkipListLevelError, UnsupportedKindError},
    list::{Sequence, SequenceKind},
    map::{
        AnyMap, MapKind,
        skiplist::{SKIP_LIST_LEVEL_LIMIT, SkipListConfig},
    },
    sort::{ComparisonSortKind, NonComparisonSortKind, RadixKey},
};
use std::cmp::Ordering;
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct DsaFactory {
    sequence: SequenceKind,
    map: MapKind,
    comparison_sort: ComparisonSortKind,
    non_comparison_sort: NonComparisonSortKind,
    skip_list: SkipListConfig,
}

impl DsaFactory {
    /// A factory with the default kinds: array-based sequences, skip list
    /// maps, merge sort and radix quicksort.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn builder() -> DsaFactoryBuilder {
        DsaFactoryBuilder::new()
    }

    #[inline]
    pub fn select_sequence_kind(&mut self, kind: SequenceKind) {
        self.sequence = kind;
    }

    #[inline]
    pub fn select_map_kind(&mut self, kind: MapKind) {
        self.map = kind;
    }

    #[inline]
    pub fn select_comparison_sort(&mut self, kind: ComparisonSortKind) {
        self.comparison_sort = kind;
    }

    #[inline]
    pub fn select_non_comparison_sort(&mut self, kind: NonComparisonSortKind) {
        self.non_comparison_sort = kind;
    }

    /// Selects kinds by name, e.g. `"linked"` or `"SKIPLIST"`.
    pub fn select_by_name(
        &mut self,
        sequence: Option<&str>,
        map: Option<&str>,
        comparison_sort: Option<&str>,
        non_comparison_sort: Option<&str>,
    ) -> Result<(), UnsupportedKindError> {
        // Parse everything before touching `self` so a bad name leaves the
        // factory unchanged.
        let sequence = sequence.map(str::parse::<SequenceKind>).transpose()?;
        let map = map.map(str::parse::<MapKind>).transpose()?;
        let comparison_sort = comparison_sort
            .map(str::parse::<ComparisonSortKind>)
            .transpose()?;
        let non_comparison_sort = non_comparison_sort
            .map(str::parse::<NonComparisonSortKind>)
            .transpose()?;
        if let Some(k) = sequence {
            self.sequence = k;
        }
        if let Some(k) = map {
            self.map = k;
        }
        if let Some(k) = comparison_sort {
            self.comparison_sort = k;
        }
        if let Some(k) = non_comparison_sort {
            self.non_comparison_sort = k;
        }
        Ok(())
    }

    #[inline]
    pub fn sequence_kind(&self) -> SequenceKind {
        self.sequence
    }

    #[inline]
    pub fn map_kind(&self) -> MapKind {
        self.map
    }

    #[inline]
    pub fn comparison_sort_kind(&self) -> ComparisonSortKind {
        self.comparison_sort
    }

    #[inline]
    pub fn non_comparison_sort_kind(&self) -> NonComparisonSortKind {
        self.non_comparison_sort
    }

    #[inline]
    pub fn skip_list_config(&self) -> SkipListConfig {
        self.skip_list
    }

    #[inline]
    pub fn new_sequence<T>(&self) -> Sequence<T> {
        self.sequence.create()
    }

    /// Every skip list starts from the configured seed, so two maps filled
    /// with the same keys in the same order get identical towers.
    #[inline]
    pub fn new_map<K: Ord, V>(&self) -> AnyMap<K, V> {
        self.map.create(self.skip_list)
    }

    #[inline]
    pub fn sort_comparison<E, F>(&self, data: &mut [E], cmp: F)
    where
        F: FnMut(&E, &E) -> Ordering,
    {
        self.comparison_sort.sort_by(data, cmp);
    }

    #[inline]
    pub fn sort_non_comparison<E: RadixKey>(&self, data: &mut [E]) {
        self.non_comparison_sort.sort(data);
    }
}

#[derive(Debug, Clone, Default)]
pub struct DsaFactoryBuilder {
    sequence: Option<SequenceKind>,
    map: Option<MapKind>,
    comparison_sort: Option<ComparisonSortKind>,
    non_comparison_sort: Option<NonComparisonSortKind>,
    skip_list: SkipListConfig,
    // First naming error seen; reported by `build`.
    pending: Option<UnsupportedKindError>,
}

impl DsaFactoryBuilder {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn sequence_kind(mut self, kind: SequenceKind) -> Self {
        self.sequence = Some(kind);
        self
    }

    #[inline]
    pub fn map_kind(mut self, kind: MapKind) -> Self {
        self.map = Some(kind);
        self
    }

    #[inline]
    pub fn comparison_sort(mut self, kind: ComparisonSortKind) -> Self {
        self.comparison_sort = Some(kind);
        self
    }

    #[inline]
    pub fn non_comparison_sort(mut self, kind: NonComparisonSortKind) -> Self {
        self.non_comparison_sort = Some(kind);
        self
    }

    pub fn sequence_kind_named(mut self, name: &str) -> Self {
        match name.parse::<SequenceKind>() {
            Ok(k) => self.sequence = Some(k),
            Err(e) => self.remember(e),
        }
        self
    }

    pub fn map_kind_named(mut self, name: &str) -> Self {
        match name.parse::<MapKind>() {
            Ok(k) => self.map = Some(k),
            Err(e) => self.remember(e),
        }
        self
    }

    pub fn comparison_sort_named(mut self, name: &str) -> Self {
        match name.parse::<ComparisonSortKind>() {
            Ok(k) => self.comparison_sort = Some(k),
            Err(e) => self.remember(e),
        }
        self
    }

    pub fn non_comparison_sort_named(mut self, name: &str) -> Self {
        match name.parse::<NonComparisonSortKind>() {
            Ok(k) => self.non_comparison_sort = Some(k),
            Err(e) => self.remember(e),
        }
        self
    }

    #[inline]
    pub fn skip_list_max_level(mut self, max_level: usize) -> Self {
        self.skip_list.max_level = max_level;
        self
    }

    #[inline]
    pub fn skip_list_seed(mut self, seed: u64) -> Self {
        self.skip_list.seed = seed;
        self
    }

    #[inline]
    pub fn skip_list(mut self, config: SkipListConfig) -> Self {
        self.skip_list = config;
        self
    }

    #[inline]
    fn remember(&mut self, err: UnsupportedKindError) {
        if self.pending.is_none() {
            self.pending = Some(err);
        }
    }

    pub fn build(self) -> Result<DsaFactory, DsaConfigError> {
        if let Some(err) = self.pending {
            return Err(err.into());
        }
        let max_level = self.skip_list.max_level;
        if !(1..=SKIP_LIST_LEVEL_LIMIT).contains(&max_level) {
            return Err(InvalidSkipListLevelError::new(max_level, SKIP_LIST_LEVEL_LIMIT).into());
        }
        let factory = DsaFactory {
            sequence: self.sequence.unwrap_or_default(),
            map: self.map.unwrap_or_default(),
            comparison_sort: self.comparison_sort.unwrap_or_default(),
            non_comparison_sort: self.non_comparison_sort.unwrap_or_default(),
            skip_list: self.skip_list,
        };
        debug!(
            sequence = %factory.sequence,
            map = %factory.map,
            comparison_sort = %factory.comparison_sort,
            non_comparison_sort = %factory.non_comparison_sort,
            skip_list_max_level = max_level,
            "Assembled container factory"
        );
        Ok(factory)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{err::KindCategory, list::IndexedList, map::Map};

    #[test]
    fn test_defaults() {
        let f = DsaFactory::new();
        assert_eq!(f.sequence_kind(), SequenceKind::ArrayBased);
        assert_eq!(f.map_kind(), MapKind::SkipList);
        assert_eq!(f.comparison_sort_kind(), ComparisonSortKind::MergeSort);
        assert_eq!(f.non_comparison_sort_kind(), NonComparisonSortKind::Quicksort);
        assert_eq!(f.skip_list_config(), SkipListConfig::default());
    }

    #[test]
    fn test_products_follow_selection() {
        let mut f = DsaFactory::new();
        f.select_sequence_kind(SequenceKind::Linked);
        f.select_map_kind(MapKind::UnorderedLinked);

        let mut s = f.new_sequence();
        s.add_last(1);
        assert_eq!(s.kind(), SequenceKind::Linked);

        let mut m = f.new_map();
        m.put("k", 1);
        assert_eq!(m.kind(), MapKind::UnorderedLinked);
    }

    #[test]
    fn test_select_by_name_is_all_or_nothing() {
        let mut f = DsaFactory::new();
        let err = f
            .select_by_name(Some("linked"), Some("trie"), None, None)
            .unwrap_err();
        assert_eq!(err.category(), KindCategory::Map);
        assert_eq!(f, DsaFactory::new());

        f.select_by_name(Some("linked"), Some("search-table"), Some("insertion"), Some("radix"))
            .unwrap();
        assert_eq!(f.sequence_kind(), SequenceKind::Linked);
        assert_eq!(f.map_kind(), MapKind::SearchTable);
        assert_eq!(f.comparison_sort_kind(), ComparisonSortKind::InsertionSort);
        assert_eq!(f.non_comparison_sort_kind(), NonComparisonSortKind::Radix);
    }

    #[test]
    fn test_builder_reports_first_unsupported_name() {
        let err = DsaFactory::builder()
            .sequence_kind_named("rope")
            .map_kind_named("trie")
            .build()
            .unwrap_err();
        match err {
            DsaConfigError::UnsupportedKind(e) => {
                assert_eq!(e.category(), KindCategory::Sequence);
                assert_eq!(e.name(), "rope");
            }
            other => panic!("unexpected error {other:?}"),
        }
    }

    #[test]
    fn test_builder_rejects_bad_skip_list_level() {
        for level in [0, SKIP_LIST_LEVEL_LIMIT + 1] {
            let err = DsaFactory::builder()
                .skip_list_max_level(level)
                .build()
                .unwrap_err();
            assert_eq!(
                err,
                DsaConfigError::InvalidSkipListLevel(InvalidSkipListLevelError::new(
                    level,
                    SKIP_LIST_LEVEL_LIMIT
                ))
            );
        }
    }

    #[test]
    fn test_builder_accepts_names_and_config() {
        let f = DsaFactory::builder()
            .sequence_kind_named("ARRAYBASEDLIST")
            .map_kind_named("UNORDEREDLINKEDMAP")
            .comparison_sort_named("MERGESORT")
            .non_comparison_sort_named("QUICKSORT")
            .skip_list_max_level(8)
            .skip_list_seed(3)
            .build()
            .unwrap();
        assert_eq!(f.sequence_kind(), SequenceKind::ArrayBased);
        assert_eq!(f.map_kind(), MapKind::UnorderedLinked);
        assert_eq!(
            f.skip_list_config(),
            SkipListConfig {
                max_level: 8,
                seed: 3
            }
        );
    }

    #[test]
    fn test_sorts_dispatch_to_selected_kind() {
        let mut f = DsaFactory::new();
        for kind in ComparisonSortKind::ALL {
            f.select_comparison_sort(kind);
            let mut v = vec![3, 1, 2];
            f.sort_comparison(&mut v, |a, b| a.cmp(b));
            assert_eq!(v, vec![1, 2, 3], "{kind}");
        }
        for kind in NonComparisonSortKind::ALL {
            f.select_non_comparison_sort(kind);
            let mut v = vec!["Office", "Foyer", "Kitchen"];
            f.sort_non_comparison(&mut v);
            assert_eq!(v, vec!["Foyer", "Kitchen", "Office"], "{kind}");
        }
    }
}
