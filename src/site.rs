use crate::display;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;

/// A training-set occurrence of a motif, MEME style: the site sequence with
/// its flanking context in the source sequence and the site p-value.
///
/// Follows the same record contract as `Motif`: every declared field is
/// optional, absent fields are omitted on encode, and undeclared keys are
/// kept in `additional_properties`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SiteMeme {
    /// Identifier of the source sequence
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seq_id: Option<String>,

    /// Site start in the source sequence, 1-based
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start: Option<i64>,

    /// Site p-value
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pvalue: Option<f64>,

    /// Sequence immediately upstream of the site
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub left_flank: Option<String>,

    /// The site sequence itself
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub site: Option<String>,

    /// Sequence immediately downstream of the site
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub right_flank: Option<String>,

    /// Fields outside the declared schema, preserved round-trip
    #[serde(flatten)]
    pub additional_properties: Map<String, Value>,
}

impl SiteMeme {
    /// Creates an empty record with every field absent.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_seq_id(mut self, seq_id: impl Into<String>) -> Self {
        self.seq_id = Some(seq_id.into());
        self
    }

    pub fn with_start(mut self, start: i64) -> Self {
        self.start = Some(start);
        self
    }

    pub fn with_pvalue(mut self, pvalue: f64) -> Self {
        self.pvalue = Some(pvalue);
        self
    }

    pub fn with_left_flank(mut self, left_flank: impl Into<String>) -> Self {
        self.left_flank = Some(left_flank.into());
        self
    }

    pub fn with_site(mut self, site: impl Into<String>) -> Self {
        self.site = Some(site.into());
        self
    }

    pub fn with_right_flank(mut self, right_flank: impl Into<String>) -> Self {
        self.right_flank = Some(right_flank.into());
        self
    }

    /// Inserts or overwrites an entry in the additional-properties bag.
    pub fn set_additional_property(&mut self, name: impl Into<String>, value: impl Into<Value>) {
        self.additional_properties.insert(name.into(), value.into());
    }

    /// Fluent form of `set_additional_property`.
    pub fn with_additional_property(
        mut self,
        name: impl Into<String>,
        value: impl Into<Value>,
    ) -> Self {
        self.set_additional_property(name, value);
        self
    }
}

impl fmt::Display for SiteMeme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SiteMeme [seqId=")?;
        display::opt(f, &self.seq_id)?;
        write!(f, ", start=")?;
        display::opt(f, &self.start)?;
        write!(f, ", pvalue=")?;
        display::opt(f, &self.pvalue)?;
        write!(f, ", leftFlank=")?;
        display::opt(f, &self.left_flank)?;
        write!(f, ", site=")?;
        display::opt(f, &self.site)?;
        write!(f, ", rightFlank=")?;
        display::opt(f, &self.right_flank)?;
        write!(f, ", additionalProperties=")?;
        display::props(f, &self.additional_properties)?;
        write!(f, "]")
    }
}
