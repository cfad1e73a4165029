//! Flag validation and query-parameter construction.
//!
//! # Design
//! `FlagValues` holds the eight raw inputs exactly as the user gave them,
//! sentinels included. `validate` checks them in a fixed order, stopping at
//! the first violation, and produces `FilterParameters` containing only the
//! values that change what the service returns. Defaults (`access-min` 0,
//! `access-max` 1, ...) and sentinels (-1) are left out of the request.

use std::collections::BTreeMap;

use url::form_urlencoded;

use crate::config::keys;
use crate::error::ValidationError;
use crate::types::Category;

/// Reserved input value meaning "unset, let the service pick".
pub const UNSET: f64 = -1.0;

/// Integer form of `UNSET` for the participant count.
pub const UNSET_PARTICIPANTS: i64 = -1;

/// Raw filter inputs before validation.
#[derive(Debug, Clone, PartialEq)]
pub struct FlagValues {
    pub accessibility: f64,
    pub access_min: f64,
    pub access_max: f64,
    pub category: String,
    pub participants: i64,
    pub price: f64,
    pub price_min: f64,
    pub price_max: f64,
}

impl Default for FlagValues {
    fn default() -> Self {
        Self {
            accessibility: UNSET,
            access_min: 0.0,
            access_max: 1.0,
            category: String::new(),
            participants: UNSET_PARTICIPANTS,
            price: UNSET,
            price_min: 0.0,
            price_max: 1.0,
        }
    }
}

fn is_factor(value: f64) -> bool {
    (0.0..=1.0).contains(&value)
}

impl FlagValues {
    /// Check every rule in order and build the query parameters.
    ///
    /// A participant count of 0 is accepted but, like -1, not sent: the
    /// service treats a missing count and a zero count the same way.
    pub fn validate(&self) -> Result<FilterParameters, ValidationError> {
        let mut params = FilterParameters::default();

        if !is_factor(self.accessibility) && self.accessibility != UNSET {
            return Err(ValidationError::Accessibility(self.accessibility));
        }
        if is_factor(self.accessibility) {
            params.insert(keys::ACCESSIBILITY, format_factor(self.accessibility));
        }

        if self.access_min > self.access_max {
            return Err(ValidationError::AccessRangeOrder {
                min: self.access_min,
                max: self.access_max,
            });
        }
        if !is_factor(self.access_min) {
            return Err(ValidationError::AccessMin(self.access_min));
        }
        if self.access_min > 0.0 {
            params.insert(keys::ACCESS_MIN, format_factor(self.access_min));
        }
        if !is_factor(self.access_max) {
            return Err(ValidationError::AccessMax(self.access_max));
        }
        if self.access_max < 1.0 {
            params.insert(keys::ACCESS_MAX, format_factor(self.access_max));
        }

        if !self.category.is_empty() {
            let category: Category = self
                .category
                .parse()
                .map_err(ValidationError::Category)?;
            params.insert(keys::TYPE, category.to_string());
        }

        if self.participants != UNSET_PARTICIPANTS && self.participants < 0 {
            return Err(ValidationError::Participants(self.participants));
        }
        if self.participants > 0 {
            params.insert(keys::PARTICIPANTS, self.participants.to_string());
        }

        if !is_factor(self.price) && self.price != UNSET {
            return Err(ValidationError::Price(self.price));
        }
        if is_factor(self.price) {
            params.insert(keys::PRICE, format_factor(self.price));
        }

        if self.price_min > self.price_max {
            return Err(ValidationError::PriceRangeOrder {
                min: self.price_min,
                max: self.price_max,
            });
        }
        if !is_factor(self.price_min) {
            return Err(ValidationError::PriceMin(self.price_min));
        }
        if self.price_min > 0.0 {
            params.insert(keys::PRICE_MIN, format_factor(self.price_min));
        }
        if !is_factor(self.price_max) {
            return Err(ValidationError::PriceMax(self.price_max));
        }
        if self.price_max < 1.0 {
            params.insert(keys::PRICE_MAX, format_factor(self.price_max));
        }

        log::debug!("validated filter parameters: {params:?}");
        Ok(params)
    }
}

/// Shortest decimal form: `0.5`, `0.25`, `1`.
fn format_factor(value: f64) -> String {
    value.to_string()
}

/// Validated query parameters, keyed by their wire name.
///
/// Keys are kept sorted so the encoded query string is deterministic.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterParameters {
    entries: BTreeMap<String, String>,
}

impl FilterParameters {
    fn insert(&mut self, key: &str, value: String) {
        self.entries.insert(key.to_string(), value);
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Encode as `application/x-www-form-urlencoded`.
    pub fn to_query_string(&self) -> String {
        form_urlencoded::Serializer::new(String::new())
            .extend_pairs(self.iter())
            .finish()
    }

    /// Parse a query string back into parameters. A leading `?` is ignored;
    /// a repeated key keeps its last value.
    pub fn from_query_string(query: &str) -> Self {
        let query = query.strip_prefix('?').unwrap_or(query);
        let entries = form_urlencoded::parse(query.as_bytes())
            .map(|(k, v)| (k.into_owned(), v.into_owned()))
            .collect();
        Self { entries }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn flags() -> FlagValues {
        FlagValues::default()
    }

    #[test]
    fn defaults_produce_no_parameters() {
        let params = flags().validate().unwrap();
        assert!(params.is_empty());
        assert_eq!(params.to_query_string(), "");
    }

    #[test]
    fn exact_accessibility_is_emitted() {
        let params = FlagValues {
            accessibility: 0.5,
            ..flags()
        }
        .validate()
        .unwrap();
        assert_eq!(params.get(keys::ACCESSIBILITY), Some("0.5"));
    }

    #[test]
    fn accessibility_bounds_are_inclusive() {
        for value in [0.0, 1.0] {
            let params = FlagValues {
                accessibility: value,
                ..flags()
            }
            .validate()
            .unwrap();
            assert_eq!(params.get(keys::ACCESSIBILITY), Some(value.to_string().as_str()));
        }
    }

    #[test]
    fn accessibility_out_of_range_is_rejected() {
        for value in [-0.5, 1.1, -2.0] {
            let err = FlagValues {
                accessibility: value,
                ..flags()
            }
            .validate()
            .unwrap_err();
            assert_eq!(err, ValidationError::Accessibility(value));
        }
    }

    #[test]
    fn nan_is_never_a_valid_factor() {
        let err = FlagValues {
            price: f64::NAN,
            ..flags()
        }
        .validate()
        .unwrap_err();
        assert!(matches!(err, ValidationError::Price(v) if v.is_nan()));
    }

    #[test]
    fn ordered_access_range_inside_bounds_is_accepted() {
        let cases = [(0.0, 1.0), (0.2, 0.2), (0.1, 0.9), (0.0, 0.0), (1.0, 1.0)];
        for (min, max) in cases {
            assert!(
                FlagValues {
                    access_min: min,
                    access_max: max,
                    ..flags()
                }
                .validate()
                .is_ok(),
                "min {min}, max {max}"
            );
        }
    }

    #[test]
    fn inverted_access_range_is_rejected_before_bounds() {
        let err = FlagValues {
            access_min: 2.0,
            access_max: 1.5,
            ..flags()
        }
        .validate()
        .unwrap_err();
        assert_eq!(err, ValidationError::AccessRangeOrder { min: 2.0, max: 1.5 });
    }

    #[test]
    fn access_bounds_are_checked_individually() {
        let err = FlagValues {
            access_min: -0.1,
            ..flags()
        }
        .validate()
        .unwrap_err();
        assert_eq!(err, ValidationError::AccessMin(-0.1));

        let err = FlagValues {
            access_max: 1.2,
            ..flags()
        }
        .validate()
        .unwrap_err();
        assert_eq!(err, ValidationError::AccessMax(1.2));
    }

    #[test]
    fn access_range_defaults_are_omitted() {
        let params = FlagValues {
            access_min: 0.25,
            ..flags()
        }
        .validate()
        .unwrap();
        assert_eq!(params.get(keys::ACCESS_MIN), Some("0.25"));
        assert_eq!(params.get(keys::ACCESS_MAX), None);

        let params = FlagValues {
            access_max: 0.75,
            ..flags()
        }
        .validate()
        .unwrap();
        assert_eq!(params.get(keys::ACCESS_MIN), None);
        assert_eq!(params.get(keys::ACCESS_MAX), Some("0.75"));
    }

    #[test]
    fn known_categories_are_accepted() {
        for category in Category::ALL {
            let params = FlagValues {
                category: category.to_string(),
                ..flags()
            }
            .validate()
            .unwrap();
            assert_eq!(params.get(keys::TYPE), Some(category.as_str()));
        }
    }

    #[test]
    fn unknown_category_is_rejected() {
        let err = FlagValues {
            category: "sports".to_string(),
            ..flags()
        }
        .validate()
        .unwrap_err();
        assert_eq!(err, ValidationError::Category("sports".to_string()));
    }

    #[test]
    fn participant_sentinel_and_zero_are_not_emitted() {
        for count in [UNSET_PARTICIPANTS, 0] {
            let params = FlagValues {
                participants: count,
                ..flags()
            }
            .validate()
            .unwrap();
            assert_eq!(params.get(keys::PARTICIPANTS), None, "count {count}");
        }
    }

    #[test]
    fn positive_participants_are_emitted() {
        let params = FlagValues {
            participants: 5,
            ..flags()
        }
        .validate()
        .unwrap();
        assert_eq!(params.get(keys::PARTICIPANTS), Some("5"));
    }

    #[test]
    fn negative_participants_other_than_sentinel_are_rejected() {
        let err = FlagValues {
            participants: -3,
            ..flags()
        }
        .validate()
        .unwrap_err();
        assert_eq!(err, ValidationError::Participants(-3));
    }

    #[test]
    fn price_rules_mirror_accessibility_rules() {
        let params = FlagValues {
            price: 0.0,
            price_min: 0.1,
            price_max: 0.9,
            ..flags()
        }
        .validate()
        .unwrap();
        assert_eq!(params.get(keys::PRICE), Some("0"));
        assert_eq!(params.get(keys::PRICE_MIN), Some("0.1"));
        assert_eq!(params.get(keys::PRICE_MAX), Some("0.9"));

        let err = FlagValues {
            price_min: 0.8,
            price_max: 0.3,
            ..flags()
        }
        .validate()
        .unwrap_err();
        assert_eq!(err, ValidationError::PriceRangeOrder { min: 0.8, max: 0.3 });

        let err = FlagValues {
            price_min: -1.0,
            ..flags()
        }
        .validate()
        .unwrap_err();
        assert_eq!(err, ValidationError::PriceMin(-1.0));

        let err = FlagValues {
            price_max: 3.0,
            ..flags()
        }
        .validate()
        .unwrap_err();
        assert_eq!(err, ValidationError::PriceMax(3.0));
    }

    #[test]
    fn first_failing_rule_wins() {
        let err = FlagValues {
            accessibility: 4.0,
            category: "sports".to_string(),
            price: 9.0,
            ..flags()
        }
        .validate()
        .unwrap_err();
        assert_eq!(err, ValidationError::Accessibility(4.0));

        let err = FlagValues {
            category: "sports".to_string(),
            participants: -7,
            ..flags()
        }
        .validate()
        .unwrap_err();
        assert!(matches!(err, ValidationError::Category(_)));
    }

    #[test]
    fn query_string_is_sorted_by_key() {
        let params = FlagValues {
            category: "music".to_string(),
            participants: 2,
            access_min: 0.5,
            ..flags()
        }
        .validate()
        .unwrap();
        assert_eq!(
            params.to_query_string(),
            "access-min=0.5&participants=2&type=music"
        );
    }

    #[test]
    fn query_string_round_trips() {
        let params = FlagValues {
            accessibility: 0.3,
            access_min: 0.1,
            access_max: 0.9,
            category: "diy".to_string(),
            participants: 4,
            price: 0.05,
            price_min: 0.01,
            price_max: 0.6,
        }
        .validate()
        .unwrap();
        assert_eq!(params.len(), 8);

        let back = FilterParameters::from_query_string(&params.to_query_string());
        assert_eq!(back, params);
    }

    #[test]
    fn from_query_string_decodes_escapes_and_leading_question_mark() {
        let params = FilterParameters::from_query_string("?type=a%20b&price=0.5");
        assert_eq!(params.get("type"), Some("a b"));
        assert_eq!(params.get("price"), Some("0.5"));
    }
}
