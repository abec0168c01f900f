// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Filtered point lookup inputs.
//!
//! Item ids reach the backend in several shapes: a single value, a
//! comma-delimited list, repeated `items` keys or bracketed `items[]` keys.
//! [`ItemIds::parse`] folds all of them into one ordered set.
//!
//! A point matches a [`PointFilter`] iff its city and uf are exactly equal
//! (case-sensitive, no normalization) and at least one of its linked items
//! is in the requested set.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::{
    error::{Error, Result},
    model::{ItemId, Point}
};

/// Ordered set of item ids.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemIds(BTreeSet<ItemId>);

impl ItemIds {
    /// Empty selection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse raw query or form values.
    ///
    /// Every value is split on commas; blank fragments are skipped.
    ///
    /// # Errors
    ///
    /// [`Error::Validation`] when a fragment is not an integer.
    ///
    /// # Example
    ///
    /// ```rust
    /// use ecoleta_core::ItemIds;
    ///
    /// let ids = ItemIds::parse(["1, 2", "3", ""]).unwrap();
    /// assert_eq!(ids.to_vec(), vec![1, 2, 3]);
    /// ```
    pub fn parse<I, S>(values: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>
    {
        let mut ids = BTreeSet::new();
        for value in values {
            for fragment in value.as_ref().split(',') {
                let fragment = fragment.trim();
                if fragment.is_empty() {
                    continue;
                }
                let id = fragment
                    .parse()
                    .map_err(|_| Error::validation(format!("invalid item id `{fragment}`")))?;
                ids.insert(id);
            }
        }
        Ok(Self(ids))
    }

    /// `true` when nothing is selected.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of selected ids.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether `id` is selected.
    pub fn contains(&self, id: ItemId) -> bool {
        self.0.contains(&id)
    }

    /// Ids in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = ItemId> + '_ {
        self.0.iter().copied()
    }

    /// Ids in ascending order as a vector.
    pub fn to_vec(&self) -> Vec<ItemId> {
        self.0.iter().copied().collect()
    }

    /// True if any of `linked` is in the set.
    pub fn intersects(&self, linked: &[ItemId]) -> bool {
        linked.iter().any(|id| self.0.contains(id))
    }

    /// Symmetric-difference toggle: remove `id` if present, insert otherwise.
    #[must_use]
    pub fn toggled(&self, id: ItemId) -> Self {
        let mut next = self.0.clone();
        if !next.remove(&id) {
            next.insert(id);
        }
        Self(next)
    }

    /// Comma-joined form used in query strings.
    pub fn to_query_value(&self) -> String {
        self.0
            .iter()
            .map(ItemId::to_string)
            .collect::<Vec<_>>()
            .join(",")
    }
}

impl FromIterator<ItemId> for ItemIds {
    fn from_iter<T: IntoIterator<Item = ItemId>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Raw `/points` query parameters before normalization.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PointQuery {
    /// Raw `city` parameter.
    pub city:  Option<String>,
    /// Raw `uf` parameter.
    pub uf:    Option<String>,
    /// Raw `items` values, possibly comma-joined.
    pub items: Vec<String>
}

impl PointQuery {
    /// Collect parameters from decoded key/value pairs.
    ///
    /// Accepts `items` and `items[]` keys, repeated or not. Unknown keys are
    /// ignored.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>
    {
        let mut query = Self::default();
        for (key, value) in pairs {
            match key.as_ref() {
                "city" => query.city = Some(value.into()),
                "uf" => query.uf = Some(value.into()),
                "items" | "items[]" => query.items.push(value.into()),
                _ => {}
            }
        }
        query
    }

    /// Normalize into a [`PointFilter`].
    ///
    /// # Errors
    ///
    /// [`Error::Validation`] when `city` or `uf` is missing or an item id is
    /// not an integer.
    pub fn into_filter(self) -> Result<PointFilter> {
        let city = self
            .city
            .ok_or_else(|| Error::validation("query parameter `city` is required"))?;
        let uf = self
            .uf
            .ok_or_else(|| Error::validation("query parameter `uf` is required"))?;
        let items = ItemIds::parse(&self.items)?;

        Ok(PointFilter {
            city,
            uf,
            items
        })
    }
}

/// Normalized filter for the point listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PointFilter {
    /// City, exact match.
    pub city:  String,
    /// State code, exact match.
    pub uf:    String,
    /// Accepted items; a point matches when it is linked to any.
    pub items: ItemIds
}

impl PointFilter {
    /// Build a filter from its parts.
    pub fn new(city: impl Into<String>, uf: impl Into<String>, items: ItemIds) -> Self {
        Self {
            city: city.into(),
            uf: uf.into(),
            items
        }
    }

    /// Apply the listing rule to one point and its linked item ids.
    pub fn matches(&self, point: &Point, linked: &[ItemId]) -> bool {
        point.city == self.city && point.uf == self.uf && self.items.intersects(linked)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn point(city: &str, uf: &str) -> Point {
        Point {
            id:        1,
            image:     "x.png".into(),
            name:      "P".into(),
            email:     "p@p.com".into(),
            whatsapp:  "11999999999".into(),
            latitude:  0.0,
            longitude: 0.0,
            city:      city.into(),
            uf:        uf.into()
        }
    }

    #[test]
    fn parse_single_value() {
        assert_eq!(ItemIds::parse(["4"]).unwrap().to_vec(), vec![4]);
    }

    #[test]
    fn parse_comma_list_with_spaces() {
        assert_eq!(ItemIds::parse(["3, 1,2"]).unwrap().to_vec(), vec![1, 2, 3]);
    }

    #[test]
    fn parse_deduplicates_repeated_values() {
        assert_eq!(ItemIds::parse(["1", "1,2", "2"]).unwrap().to_vec(), vec![1, 2]);
    }

    #[test]
    fn parse_rejects_garbage() {
        let err = ItemIds::parse(["1,x"]).unwrap_err();
        assert!(err.is_validation());
        assert!(err.to_string().contains("`x`"));
    }

    #[test]
    fn parse_nothing_is_empty() {
        assert!(ItemIds::parse(Vec::<String>::new()).unwrap().is_empty());
        assert!(ItemIds::parse([",,"]).unwrap().is_empty());
    }

    #[test]
    fn toggled_twice_restores() {
        let start: ItemIds = [1, 3].into_iter().collect();
        let once = start.toggled(2);
        assert!(once.contains(2));
        assert_eq!(once.toggled(2), start);
        assert!(!start.toggled(1).contains(1));
    }

    #[test]
    fn query_value_is_comma_joined() {
        let ids: ItemIds = [5, 1].into_iter().collect();
        assert_eq!(ids.to_query_value(), "1,5");
        assert_eq!(ItemIds::new().to_query_value(), "");
    }

    #[test]
    fn query_collects_bracket_keys() {
        let query = PointQuery::from_pairs([
            ("city", "Recife"),
            ("uf", "PE"),
            ("items[]", "1"),
            ("items[]", "2"),
            ("page", "9")
        ]);
        let filter = query.into_filter().unwrap();
        assert_eq!(filter.items.to_vec(), vec![1, 2]);
        assert_eq!(filter.city, "Recife");
    }

    #[test]
    fn query_requires_city_and_uf() {
        assert!(PointQuery::from_pairs([("uf", "SP")]).into_filter().is_err());
        assert!(PointQuery::from_pairs([("city", "Santos")]).into_filter().is_err());
    }

    #[test]
    fn matches_is_exact_and_case_sensitive() {
        let filter = PointFilter::new("São Paulo", "SP", [1].into_iter().collect());
        assert!(filter.matches(&point("São Paulo", "SP"), &[1, 2]));
        assert!(!filter.matches(&point("são paulo", "SP"), &[1]));
        assert!(!filter.matches(&point("São Paulo", "sp"), &[1]));
        assert!(!filter.matches(&point("São Paulo", "SP"), &[2, 3]));
        assert!(!filter.matches(&point("São Paulo", "SP"), &[]));
    }
}
