//! Models API endpoint

use clarifai_protocol::Inputs;
use http::Method;

use crate::{error::Result, http::Request, session::Session};

/// Models API resource.
///
/// Runs predictions of a model over a batch of inputs. The model is the one
/// selected on the batch with [`Inputs::set_model`].
#[derive(Debug, Clone, Copy)]
pub struct ModelsApi<'a> {
    session: &'a Session,
}

impl<'a> ModelsApi<'a> {
    pub(crate) fn new(session: &'a Session) -> Self {
        Self { session }
    }

    /// `POST models/{model_id}/outputs` with the batch as payload.
    ///
    /// # Errors
    /// [`Error::InvalidPathSegment`](crate::Error::InvalidPathSegment) when the
    /// batch's model id is empty, `.` or `..`.
    pub fn predict(&self, inputs: &Inputs) -> Result<Request> {
        tracing::debug!(model = inputs.model(), count = inputs.len(), "Building predict request");
        Ok(self
            .session
            .request(Method::POST, "models")
            .segment(inputs.model())?
            .segment("outputs")?
            .payload(inputs.clone()))
    }
}
