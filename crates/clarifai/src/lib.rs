//! # Clarifai
//!
//! Rust client for the Clarifai v2 image recognition API:
//! - Input management (add, list, fetch, statuses, delete)
//! - Concept tagging on stored inputs (merge and remove)
//! - Predictions against a model
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use clarifai::{ApiResponse, Image, Inputs, Session};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let session = Session::new("your-api-key");
//!
//!     let mut batch = Inputs::new();
//!     batch
//!         .add_input(Image::from_url("https://samples.clarifai.com/metro-north.jpg"), "metro")?
//!         .add_concept("train", true);
//!
//!     let reply: ApiResponse = session.inputs().add(&batch).send_json().await?;
//!     println!("{}", reply.status.description);
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![deny(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

pub use config::{SessionConfig, SessionConfigBuilder};
pub use error::{Error, Result};
pub use crate::http::{Request, Response};
pub use resources::{InputsApi, ModelsApi};
pub use session::{Session, SessionBuilder};

pub use clarifai_protocol::{
    ApiResponse, Concept, Crop, DeleteInputsPayload, INPUT_LIMIT, Image, ImageSource, Input,
    Inputs, PUBLIC_MODEL_GENERAL, PatchAction, PatchInputsPayload, ProtocolError, ServiceStatus,
    codes,
};

pub mod config;
pub mod error;
pub mod http;
pub mod observability;
pub mod resources;
pub mod session;

#[cfg(feature = "trace")]
#[cfg_attr(docsrs, doc(cfg(feature = "trace")))]
pub use observability::init_tracing;

/// Prelude module for common imports
///
/// # Examples
///
/// ```rust
/// use clarifai::prelude::*;
/// ```
pub mod prelude {
    pub use crate::{
        ApiResponse, Error, Image, Input, Inputs, Result, Session, SessionConfig,
    };
}

/// SDK version, automatically updated from Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Default API base URL
pub const DEFAULT_BASE_URL: &str = "https://api.clarifai.com/v2/";

/// User agent sent when none is configured
pub const USER_AGENT: &str = concat!("clarifai-rs/", env!("CARGO_PKG_VERSION"));
