//! Inputs: single records and capacity-bounded batches

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::{
    error::{ProtocolError, Result},
    image::{Concept, Image},
    status::ServiceStatus,
};

/// Maximum number of inputs accepted in a single batch.
pub const INPUT_LIMIT: usize = 128;

/// Identifier of Clarifai's public general model, the default for predictions.
pub const PUBLIC_MODEL_GENERAL: &str = "aaa03c23b3724a16a56b629203edc62c";

/// One image/metadata record stored by the remote API.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Input {
    /// Image and annotations
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<Image>,

    /// Caller-chosen or API-assigned identifier
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Creation time, set by the API
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,

    /// Processing status, set by the API
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<ServiceStatus>,
}

impl Input {
    /// Create an input around an image, without an id.
    pub fn new(image: Image) -> Self {
        Self {
            data: Some(image),
            ..Default::default()
        }
    }

    /// Attach a concept (`{"name": .., "value": ..}`) to this input.
    pub fn add_concept(&mut self, name: impl Into<String>, value: impl Into<Value>) -> &mut Self {
        self.data
            .get_or_insert_with(Image::default)
            .concepts
            .push(Concept::new(name, value));
        self
    }

    /// Replace the metadata stored under `data.metadata`.
    pub fn set_metadata(&mut self, metadata: impl Into<Value>) -> &mut Self {
        self.data.get_or_insert_with(Image::default).metadata = Some(metadata.into());
        self
    }

    /// Concepts attached so far.
    pub fn concepts(&self) -> &[Concept] {
        self.data
            .as_ref()
            .map(|data| data.concepts.as_slice())
            .unwrap_or_default()
    }
}

fn default_model() -> String {
    PUBLIC_MODEL_GENERAL.to_string()
}

/// An ordered batch of inputs, bounded by [`INPUT_LIMIT`].
///
/// Serializes as `{"inputs": [...]}`. The model identifier is only used to
/// build the prediction path and never appears in the body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Inputs {
    inputs: Vec<Input>,

    #[serde(skip, default = "default_model")]
    model_id: String,
}

impl Default for Inputs {
    fn default() -> Self {
        Self::new()
    }
}

impl Inputs {
    /// Create an empty batch targeting the public general model.
    pub fn new() -> Self {
        Self {
            inputs: Vec::new(),
            model_id: default_model(),
        }
    }

    /// Append an image to the batch.
    ///
    /// An empty `id` lets the API assign one. Returns the new input so
    /// concepts or metadata can be attached to it.
    ///
    /// # Errors
    ///
    /// Returns [`ProtocolError::InputLimitReached`] when the batch is full;
    /// the batch is left untouched.
    pub fn add_input(&mut self, image: Image, id: impl Into<String>) -> Result<&mut Input> {
        if self.inputs.len() >= INPUT_LIMIT {
            return Err(ProtocolError::InputLimitReached { limit: INPUT_LIMIT });
        }

        let id = id.into();
        let mut input = Input::new(image);
        if !id.is_empty() {
            input.id = Some(id);
        }

        self.inputs.push(input);
        let last = self.inputs.len() - 1;
        Ok(&mut self.inputs[last])
    }

    /// Set the model used by prediction requests.
    pub fn set_model(&mut self, model_id: impl Into<String>) {
        self.model_id = model_id.into();
    }

    /// Model used by prediction requests.
    pub fn model(&self) -> &str {
        &self.model_id
    }

    /// Number of inputs in the batch.
    pub fn len(&self) -> usize {
        self.inputs.len()
    }

    /// Whether the batch is empty.
    pub fn is_empty(&self) -> bool {
        self.inputs.is_empty()
    }

    /// Whether another input can still be added.
    pub fn is_full(&self) -> bool {
        self.inputs.len() >= INPUT_LIMIT
    }

    /// Inputs in insertion order.
    pub fn as_slice(&self) -> &[Input] {
        &self.inputs
    }

    /// Iterate over the inputs in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, Input> {
        self.inputs.iter()
    }

    /// Mutable access to an input by position.
    pub fn get_mut(&mut self, index: usize) -> Option<&mut Input> {
        self.inputs.get_mut(index)
    }

    /// Mutable access to the most recently added input.
    pub fn last_mut(&mut self) -> Option<&mut Input> {
        self.inputs.last_mut()
    }
}

impl<'a> IntoIterator for &'a Inputs {
    type Item = &'a Input;
    type IntoIter = std::slice::Iter<'a, Input>;

    fn into_iter(self) -> Self::IntoIter {
        self.inputs.iter()
    }
}
