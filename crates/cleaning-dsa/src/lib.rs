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

//! # Cleaning DSA (`cleaning-dsa`)
//!
//! Abstract data types and algorithms the cleaning log engine is written
//! against, each available in several interchangeable implementations:
//!
//! - **Sequences** ([`list`]): array-based or doubly-linked, both behind
//!   [`list::IndexedList`].
//! - **Maps** ([`map`]): unordered association list, sorted search table or
//!   skip list, all behind [`map::Map`].
//! - **Sorts** ([`sort`]): stable comparison sorts (merge, insertion) and
//!   non-comparison sorts over byte keys (LSD radix, radix quicksort).
//!
//! A [`factory::DsaFactory`] picks one implementation per capability at
//! configuration time. Concrete choices are tagged enums ([`list::Sequence`],
//! [`map::AnyMap`]) that implement the capability traits, so callers are
//! written once and run unchanged against every backend.

pub mod err;
pub mod factory;
pub mod list;
pub mod map;
pub mod sort;

/// Lower-cases a kind name and drops separators, so `"Skip-List"`,
/// `"skip_list"` and `"SKIPLIST"` all read `"skiplist"`.
pub(crate) fn normalize_kind_name(name: &str) -> String {
    name.chars()
        .filter(|c| !matches!(c, '-' | '_' | ' '))
        .flat_map(char::to_lowercase)
        .collect()
}

pub mod prelude {
    pub use crate::err::{
        DsaConfigError, InvalidSkipListLevelError, KeyNotFoundError, KindCategory,
        UnsupportedKindError,
    };
    pub use crate::factory::{DsaFactory, DsaFactoryBuilder};
    pub use crate::list::{IndexedList, Sequence, SequenceKind};
    pub use crate::map::{AnyMap, Map, MapKind, SkipListConfig};
    pub use crate::sort::{ComparisonSortKind, NonComparisonSortKind, RadixKey};
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_kind_name() {
        assert_eq!(normalize_kind_name("Skip-List"), "skiplist");
        assert_eq!(normalize_kind_name("skip_list"), "skiplist");
        assert_eq!(normalize_kind_name("UNORDERED LINKED MAP"), "unorderedlinkedmap");
    }
}
