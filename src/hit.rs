use crate::display;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;

/// One occurrence of a motif found by scanning a target sequence, MAST
/// style: a strand-aware span with its score and position p-value.
///
/// Follows the same record contract as `Motif`: every declared field is
/// optional, absent fields are omitted on encode, and undeclared keys are
/// kept in `additional_properties`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MastHit {
    /// Identifier of the scanned sequence
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seq_id: Option<String>,

    /// Strand the match lies on, "+" or "-"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub strand: Option<String>,

    /// Match start, 1-based
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hit_start: Option<i64>,

    /// Match end, 1-based inclusive
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hit_end: Option<i64>,

    /// Match score against the motif PSSM
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub score: Option<f64>,

    /// Position p-value of the match
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hit_pvalue: Option<f64>,

    /// Fields outside the declared schema, preserved round-trip
    #[serde(flatten)]
    pub additional_properties: Map<String, Value>,
}

impl MastHit {
    /// Creates an empty record with every field absent.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_seq_id(mut self, seq_id: impl Into<String>) -> Self {
        self.seq_id = Some(seq_id.into());
        self
    }

    pub fn with_strand(mut self, strand: impl Into<String>) -> Self {
        self.strand = Some(strand.into());
        self
    }

    pub fn with_hit_start(mut self, hit_start: i64) -> Self {
        self.hit_start = Some(hit_start);
        self
    }

    pub fn with_hit_end(mut self, hit_end: i64) -> Self {
        self.hit_end = Some(hit_end);
        self
    }

    pub fn with_score(mut self, score: f64) -> Self {
        self.score = Some(score);
        self
    }

    pub fn with_hit_pvalue(mut self, hit_pvalue: f64) -> Self {
        self.hit_pvalue = Some(hit_pvalue);
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

impl fmt::Display for MastHit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "MastHit [seqId=")?;
        display::opt(f, &self.seq_id)?;
        write!(f, ", strand=")?;
        display::opt(f, &self.strand)?;
        write!(f, ", hitStart=")?;
        display::opt(f, &self.hit_start)?;
        write!(f, ", hitEnd=")?;
        display::opt(f, &self.hit_end)?;
        write!(f, ", score=")?;
        display::opt(f, &self.score)?;
        write!(f, ", hitPvalue=")?;
        display::opt(f, &self.hit_pvalue)?;
        write!(f, ", additionalProperties=")?;
        display::props(f, &self.additional_properties)?;
        write!(f, "]")
    }
}
