//! Bulk concept patches and deletion payloads
//!
//! These structs only live for the duration of one request.

use serde::{Deserialize, Serialize};

/// What a concept patch does to the existing concepts of an input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PatchAction {
    /// Add new concepts and update the value of existing ones
    Merge,
    /// Detach the listed concepts
    Remove,
}

/// Body of `PATCH inputs`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PatchInputsPayload {
    /// Patch semantics
    pub action: PatchAction,
    /// Inputs to patch
    pub inputs: Vec<PatchInput>,
}

impl PatchInputsPayload {
    /// Create an empty patch.
    pub fn new(action: PatchAction) -> Self {
        Self {
            action,
            inputs: Vec::new(),
        }
    }

    /// Patch removing `concepts` from one input. Removal entries carry no value.
    pub fn remove_concepts<I, S>(input_id: impl Into<String>, concepts: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut input = PatchInput::new(input_id);
        input.data.concepts.extend(concepts.into_iter().map(PatchConcept::without_value));

        let mut payload = Self::new(PatchAction::Remove);
        payload.inputs.push(input);
        payload
    }

    /// Patch merging `(concept, flag)` pairs into one input, in iteration order.
    ///
    /// Each concept appears once. A repeated concept keeps the position of
    /// its first occurrence and takes the flag of its last one.
    pub fn merge_concepts<I, S>(input_id: impl Into<String>, concepts: I) -> Self
    where
        I: IntoIterator<Item = (S, bool)>,
        S: Into<String>,
    {
        let mut input = PatchInput::new(input_id);
        for (id, value) in concepts {
            let id = id.into();
            match input.data.concepts.iter_mut().find(|c| c.id == id) {
                Some(existing) => existing.value = Some(u8::from(value)),
                None => input.data.concepts.push(PatchConcept::with_flag(id, value)),
            }
        }

        let mut payload = Self::new(PatchAction::Merge);
        payload.inputs.push(input);
        payload
    }
}

/// One input inside a concept patch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PatchInput {
    /// Input identifier
    pub id: String,
    /// Concepts to apply
    pub data: PatchData,
}

impl PatchInput {
    /// Create a patch entry with no concepts yet.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            data: PatchData::default(),
        }
    }
}

/// The `data` object of a patch entry. `concepts` is always present, even empty.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PatchData {
    /// Concepts to merge or remove
    pub concepts: Vec<PatchConcept>,
}

/// A concept reference inside a patch.
///
/// `value` is omitted for removals and encoded as `1`/`0` for merges.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PatchConcept {
    /// Concept identifier
    pub id: String,
    /// `Some(1)` for a positive, `Some(0)` for a negative, `None` to omit
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<u8>,
}

impl PatchConcept {
    /// Concept reference without a value.
    pub fn without_value(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            value: None,
        }
    }

    /// Concept reference carrying a positive/negative flag.
    pub fn with_flag(id: impl Into<String>, value: bool) -> Self {
        Self {
            id: id.into(),
            value: Some(u8::from(value)),
        }
    }
}

/// Body of `DELETE inputs` when deleting by id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeleteInputsPayload {
    /// Identifiers to delete, in caller order
    pub ids: Vec<String>,
}

impl DeleteInputsPayload {
    /// Collect the identifiers to delete.
    pub fn new<I, S>(ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            ids: ids.into_iter().map(Into::into).collect(),
        }
    }
}
