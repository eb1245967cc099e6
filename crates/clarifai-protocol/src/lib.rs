//! Wire types for the Clarifai v2 inputs API
//!
//! This crate holds the JSON shapes exchanged with the remote recognition
//! service. It performs no I/O: the `clarifai` crate builds HTTP requests
//! around these types.
//!
//! # Type Organization
//!
//! - **Images**: [`image`] - Image sources, crops, concepts and metadata
//! - **Inputs**: [`input`] - Single inputs and capacity-bounded batches
//! - **Patches**: [`patch`] - Concept merge/remove and bulk delete payloads
//! - **Status**: [`status`] - Service status and the reply envelope
//! - **Errors**: [`error`] - The local batch error
//!
//! # Usage
//!
//! ```
//! use clarifai_protocol::{Image, Inputs};
//!
//! let mut batch = Inputs::new();
//! batch
//!     .add_input(Image::from_url("https://samples.clarifai.com/metro-north.jpg"), "train")
//!     .unwrap();
//!
//! let json = serde_json::to_value(&batch).unwrap();
//! assert_eq!(json["inputs"][0]["id"], "train");
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]

pub mod error;
pub mod image;
pub mod input;
pub mod patch;
pub mod status;

pub use error::{ProtocolError, Result};
pub use image::{Concept, Crop, Image, ImageSource};
pub use input::{INPUT_LIMIT, Input, Inputs, PUBLIC_MODEL_GENERAL};
pub use patch::{
    DeleteInputsPayload, PatchAction, PatchConcept, PatchData, PatchInput, PatchInputsPayload,
};
pub use status::{ApiResponse, ServiceStatus, codes};
