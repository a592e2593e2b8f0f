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

use std::fmt::{Debug, Display};

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct KeyNotFoundError<K> {
    key: K,
}

impl<K> KeyNotFoundError<K> {
    #[inline]
    pub fn new(key: K) -> Self {
        Self { key }
    }

    #[inline]
    pub fn key(&self) -> &K {
        &self.key
    }

    #[inline]
    pub fn into_key(self) -> K {
        self.key
    }
}

impl<K: Debug> Display for KeyNotFoundError<K> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Key {:?} not found in map", self.key)
    }
}

impl<K: Debug> std::error::Error for KeyNotFoundError<K> {}

/// The family of container or algorithm a kind name was meant to select.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KindCategory {
    Sequence,
    Map,
    ComparisonSort,
    NonComparisonSort,
}

impl Display for KindCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            KindCategory::Sequence => write!(f, "sequence"),
            KindCategory::Map => write!(f, "map"),
            KindCategory::ComparisonSort => write!(f, "comparison sort"),
            KindCategory::NonComparisonSort => write!(f, "non-comparison sort"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct UnsupportedKindError {
    category: KindCategory,
    name: String,
}

impl UnsupportedKindError {
    #[inline]
    pub fn new(category: KindCategory, name: impl Into<String>) -> Self {
        Self {
            category,
            name: name.into(),
        }
    }

    #[inline]
    pub fn category(&self) -> KindCategory {
        self.category
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl Display for UnsupportedKindError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Unsupported {} kind '{}'", self.category, self.name)
    }
}

impl std::error::Error for UnsupportedKindError {}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct InvalidSkipListLevelError {
    requested: usize,
    limit: usize,
}

impl InvalidSkipListLevelError {
    #[inline]
    pub fn new(requested: usize, limit: usize) -> Self {
        Self { requested, limit }
    }

    #[inline]
    pub fn requested(&self) -> usize {
        self.requested
    }

    #[inline]
    pub fn limit(&self) -> usize {
        self.limit
    }
}

impl Display for InvalidSkipListLevelError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Skip list max level {} is outside the supported range [1, {}]",
            self.requested, self.limit
        )
    }
}

impl std::error::Error for InvalidSkipListLevelError {}

/// Any configuration mistake detected while assembling a [`crate::factory::DsaFactory`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DsaConfigError {
    UnsupportedKind(UnsupportedKindError),
    InvalidSkipListLevel(InvalidSkipListLevelError),
}

impl From<UnsupportedKindError> for DsaConfigError {
    fn from(value: UnsupportedKindError) -> Self {
        DsaConfigError::UnsupportedKind(value)
    }
}

impl From<InvalidSkipListLevelError> for DsaConfigError {
    fn from(value: InvalidSkipListLevelError) -> Self {
        DsaConfigError::InvalidSkipListLevel(value)
    }
}

impl Display for DsaConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DsaConfigError::UnsupportedKind(e) => write!(f, "Configuration error: {}", e),
            DsaConfigError::InvalidSkipListLevel(e) => write!(f, "Configuration error: {}", e),
        }
    }
}

impl std::error::Error for DsaConfigError {}
