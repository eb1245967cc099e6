//! Inputs API endpoints

use clarifai_protocol::{DeleteInputsPayload, Inputs, PatchInputsPayload};
use http::Method;

use crate::{error::Result, http::Request, session::Session};

/// Inputs API resource.
///
/// Builds requests for adding, listing, patching and deleting inputs.
///
/// # Example
///
/// ```rust,no_run
/// # use clarifai::{Image, Inputs, Session};
/// # async fn example(session: Session) -> clarifai::Result<()> {
/// let mut batch = Inputs::new();
/// batch
///     .add_input(Image::from_url("https://samples.clarifai.com/metro-north.jpg"), "train")?
///     .add_concept("train", true);
///
/// let reply: clarifai::ApiResponse = session.inputs().add(&batch).send_json().await?;
/// println!("status: {}", reply.status.description);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Copy)]
pub struct InputsApi<'a> {
    session: &'a Session,
}

impl<'a> InputsApi<'a> {
    pub(crate) fn new(session: &'a Session) -> Self {
        Self { session }
    }

    /// `POST inputs` with the batch as payload.
    pub fn add(&self, inputs: &Inputs) -> Request {
        tracing::debug!(count = inputs.len(), "Building add-inputs request");
        self.session
            .request(Method::POST, "inputs")
            .payload(inputs.clone())
    }

    /// `GET inputs`: list all inputs.
    pub fn list(&self) -> Request {
        self.session.request(Method::GET, "inputs")
    }

    /// `GET inputs/{id}`: fetch one input.
    ///
    /// # Errors
    /// [`Error::InvalidPathSegment`](crate::Error::InvalidPathSegment) for an
    /// empty id, `.` or `..`.
    pub fn get(&self, id: &str) -> Result<Request> {
        self.session.request(Method::GET, "inputs").segment(id)
    }

    /// `GET inputs/status`: processing counts for all inputs.
    pub fn statuses(&self) -> Request {
        self.session.request(Method::GET, "inputs/status")
    }

    /// `PATCH inputs` removing concepts already attached to an input.
    pub fn delete_concepts<I, S>(&self, id: &str, concepts: I) -> Request
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let payload = PatchInputsPayload::remove_concepts(id, concepts);
        tracing::debug!(
            input_id = %id,
            concepts = payload.inputs[0].data.concepts.len(),
            "Building remove-concepts request"
        );
        self.session.request(Method::PATCH, "inputs").payload(payload)
    }

    /// `PATCH inputs` adding or updating concepts of an input.
    ///
    /// Each pair is `(concept, positive)`; concepts are sent in iteration order.
    pub fn merge_concepts<I, S>(&self, id: &str, concepts: I) -> Request
    where
        I: IntoIterator<Item = (S, bool)>,
        S: Into<String>,
    {
        let payload = PatchInputsPayload::merge_concepts(id, concepts);
        tracing::debug!(
            input_id = %id,
            concepts = payload.inputs[0].data.concepts.len(),
            "Building merge-concepts request"
        );
        self.session.request(Method::PATCH, "inputs").payload(payload)
    }

    /// `DELETE inputs/{id}`: delete a single input.
    ///
    /// The id is escaped as one path segment, so no id can address
    /// `DELETE inputs` (which deletes everything).
    ///
    /// # Errors
    /// [`Error::InvalidPathSegment`](crate::Error::InvalidPathSegment) for an
    /// empty id, `.` or `..`.
    pub fn delete(&self, id: &str) -> Result<Request> {
        self.session.request(Method::DELETE, "inputs").segment(id)
    }

    /// `DELETE inputs` with `{"ids": [...]}`: delete several inputs.
    pub fn delete_many<I, S>(&self, ids: I) -> Request
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let payload = DeleteInputsPayload::new(ids);
        tracing::debug!(count = payload.ids.len(), "Building bulk delete request");
        self.session.request(Method::DELETE, "inputs").payload(payload)
    }

    /// `DELETE inputs` without a payload: delete every input of the app.
    pub fn delete_all(&self) -> Request {
        self.session.request(Method::DELETE, "inputs")
    }
}
