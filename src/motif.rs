use crate::display;
use crate::error::Result;
use crate::hit::MastHit;
use crate::pssm;
use crate::site::SiteMeme;
use crate::types::{Pssm, PssmRows};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;

/// A motif detected in a set of sequences, together with its scoring matrix,
/// the places it matches and the training sites the model was built from.
///
/// Every declared field is optional: records arrive as JSON produced by
/// heterogeneous pipeline stages and may carry any subset of the schema.
/// Absent fields are omitted from the encoded output rather than written as
/// null, and keys outside the schema are kept in `additional_properties`
/// instead of failing the decode.
///
/// # Example
/// ```
/// use motif_records_rs::motif::Motif;
///
/// let motif = Motif::new()
///     .with_id("motif_1")
///     .with_seq_type("upstream")
///     .with_evalue(1.3e-5);
/// assert_eq!(motif.id.as_deref(), Some("motif_1"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Motif {
    /// Motif identifier
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Category of sequence the motif was found in (e.g. "upstream")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seq_type: Option<String>,

    /// Numeric motif identifier
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pssm_id: Option<i64>,

    /// Motif e-value, lower is more significant
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub evalue: Option<f64>,

    /// Position-specific scoring matrix, row-major
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pssm_rows: Option<PssmRows>,

    /// Matches of the motif in scanned sequences
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hits: Option<Vec<MastHit>>,

    /// Training-set occurrences the model was built from
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sites: Option<Vec<SiteMeme>>,

    /// Fields outside the declared schema, preserved round-trip.
    /// Declared keys never land here: the decoder routes them to the typed
    /// fields above.
    #[serde(flatten)]
    pub additional_properties: Map<String, Value>,
}

impl Motif {
    /// Creates an empty record with every field absent.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn with_seq_type(mut self, seq_type: impl Into<String>) -> Self {
        self.seq_type = Some(seq_type.into());
        self
    }

    pub fn with_pssm_id(mut self, pssm_id: i64) -> Self {
        self.pssm_id = Some(pssm_id);
        self
    }

    pub fn with_evalue(mut self, evalue: f64) -> Self {
        self.evalue = Some(evalue);
        self
    }

    pub fn with_pssm_rows(mut self, pssm_rows: PssmRows) -> Self {
        self.pssm_rows = Some(pssm_rows);
        self
    }

    pub fn with_hits(mut self, hits: Vec<MastHit>) -> Self {
        self.hits = Some(hits);
        self
    }

    pub fn with_sites(mut self, sites: Vec<SiteMeme>) -> Self {
        self.sites = Some(sites);
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

    /// Typed matrix view of `pssm_rows`.
    ///
    /// Returns `Ok(None)` when the field is absent.
    ///
    /// # Errors
    /// * Returns `MotifError::RaggedPssm` if the stored rows are not rectangular
    pub fn pssm_matrix(&self) -> Result<Option<Pssm>> {
        match &self.pssm_rows {
            Some(rows) => Ok(Some(pssm::to_matrix(rows)?)),
            None => Ok(None),
        }
    }
}

impl fmt::Display for Motif {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Motif [id=")?;
        display::opt(f, &self.id)?;
        write!(f, ", seqType=")?;
        display::opt(f, &self.seq_type)?;
        write!(f, ", pssmId=")?;
        display::opt(f, &self.pssm_id)?;
        write!(f, ", evalue=")?;
        display::opt(f, &self.evalue)?;
        write!(f, ", pssmRows=")?;
        display::opt_rows(f, &self.pssm_rows)?;
        write!(f, ", hits=")?;
        display::opt_list(f, &self.hits)?;
        write!(f, ", sites=")?;
        display::opt_list(f, &self.sites)?;
        write!(f, ", additionalProperties=")?;
        display::props(f, &self.additional_properties)?;
        write!(f, "]")
    }
}
