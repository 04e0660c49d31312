//! Per-field defaulting rules applied while extracting records.
//!
//! Absent scalar fields are replaced with a configured default rather than failing the
//! upload. Defaults are set per value category and may be overridden for individual
//! fields; fields marked as required fail with a validation error instead. Fields are
//! identified by their index-free path, for example `info.city` or
//! `innings.overs.deliveries.runs.total`. Members of mappings keyed by data appear as `*`,
//! so the players of every team in `info.players` share the field `info.players.*`.

use std::collections::{BTreeSet, HashMap};

use crate::server::{error::ingest::IngestError, scorecard::node::Node};

/// Field that is required regardless of configuration.
pub const MATCH_DATES_FIELD: &str = "info.dates";

/// Defaults and required fields applied to scalar reads.
///
/// Only `info.dates` is required by default.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldRules {
    text_default: String,
    integer_default: i32,
    decimal_default: f64,
    text_overrides: HashMap<String, String>,
    integer_overrides: HashMap<String, i32>,
    decimal_overrides: HashMap<String, f64>,
    required: BTreeSet<String>,
}

impl Default for FieldRules {
    fn default() -> Self {
        Self {
            text_default: String::new(),
            integer_default: 0,
            decimal_default: 0.0,
            text_overrides: HashMap::new(),
            integer_overrides: HashMap::new(),
            decimal_overrides: HashMap::new(),
            required: BTreeSet::from([MATCH_DATES_FIELD.to_string()]),
        }
    }
}

impl FieldRules {
    /// Rules with category defaults and no overrides.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds rules with the given fields marked as required.
    pub fn with_required<I, S>(fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        fields
            .into_iter()
            .fold(Self::default(), |rules, field| rules.require(field))
    }

    /// Marks `field` as required.
    pub fn require(mut self, field: impl Into<String>) -> Self {
        self.required.insert(field.into());
        self
    }

    /// Overrides the text default of `field`.
    pub fn with_text_default(mut self, field: impl Into<String>, value: impl Into<String>) -> Self {
        self.text_overrides.insert(field.into(), value.into());
        self
    }

    /// Overrides the integer default of `field`.
    pub fn with_integer_default(mut self, field: impl Into<String>, value: i32) -> Self {
        self.integer_overrides.insert(field.into(), value);
        self
    }

    /// Overrides the decimal default of `field`.
    pub fn with_decimal_default(mut self, field: impl Into<String>, value: f64) -> Self {
        self.decimal_overrides.insert(field.into(), value);
        self
    }

    /// Whether `field` must be present.
    pub fn is_required(&self, field: &str) -> bool {
        self.required.contains(field)
    }

    /// Required fields in lexical order.
    pub fn required_fields(&self) -> impl Iterator<Item = &str> {
        self.required.iter().map(String::as_str)
    }

    /// Text value of `node`, or the default configured for its field.
    pub fn text(&self, node: &Node<'_>) -> Result<String, IngestError> {
        if let Some(value) = node.text() {
            return Ok(value);
        }

        let field = self.ensure_optional(node)?;

        Ok(self
            .text_overrides
            .get(field)
            .cloned()
            .unwrap_or_else(|| self.text_default.clone()))
    }

    /// Integer value of `node`, or the default configured for its field.
    pub fn integer(&self, node: &Node<'_>) -> Result<i32, IngestError> {
        if let Some(value) = node.integer() {
            return Ok(value);
        }

        let field = self.ensure_optional(node)?;

        Ok(self
            .integer_overrides
            .get(field)
            .copied()
            .unwrap_or(self.integer_default))
    }

    /// Decimal value of `node`, or the default configured for its field.
    pub fn decimal(&self, node: &Node<'_>) -> Result<f64, IngestError> {
        if let Some(value) = node.decimal() {
            return Ok(value);
        }

        let field = self.ensure_optional(node)?;

        Ok(self
            .decimal_overrides
            .get(field)
            .copied()
            .unwrap_or(self.decimal_default))
    }

    fn ensure_optional<'n>(&self, node: &'n Node<'_>) -> Result<&'n str, IngestError> {
        let field = node.field();

        if self.is_required(field) {
            let reason = if node.is_missing() {
                "required field is missing"
            } else {
                "required field is not a scalar value"
            };

            return Err(IngestError::validation(node.path(), reason));
        }

        Ok(field)
    }
}
