//! Presentation layer — the single-page web form.
//!
//! Three routes:
//! - `GET /` renders the form plus the session's current outputs
//! - `POST /submit` takes the multipart form (image or pseudocode text)
//! - `POST /validate` regenerates code from the edited pseudocode
//!
//! Each request blocks on its generation call; there is no background work
//! and no timeout handling. Generation failures surface as a 500 page.

pub mod session;
pub mod templates;

use std::sync::Arc;

use axum::extract::{Multipart, Query, State};
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Form, Router};
use serde::Deserialize;
use tracing::{error, warn};
use uuid::Uuid;

use crate::agent::{ImageFormat, ImageInput};
use crate::coordinator::{AgentReply, Coordinator};
use crate::fence::split_code_fences;
use crate::llm::LlmError;

pub use session::{Session, SessionStore};

/// Shared state handed to every handler.
#[derive(Clone)]
pub struct AppState {
    pub coordinator: Arc<Coordinator>,
    pub sessions: SessionStore,
}

impl AppState {
    pub fn new(coordinator: Coordinator) -> Self {
        Self {
            coordinator: Arc::new(coordinator),
            sessions: SessionStore::new(),
        }
    }
}

/// Build the application router.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/submit", post(submit))
        .route("/validate", post(validate))
        .with_state(state)
}

/// A handler failure rendered as an error page. Agent errors propagate
/// here unchanged; there is no retry or partial recovery.
struct WebError(String);

impl IntoResponse for WebError {
    fn into_response(self) -> Response {
        error!(error = %self.0, "request failed");
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Html(templates::render_error(&self.0)),
        )
            .into_response()
    }
}

impl From<LlmError> for WebError {
    fn from(e: LlmError) -> Self {
        WebError(e.to_string())
    }
}

impl From<axum::extract::multipart::MultipartError> for WebError {
    fn from(e: axum::extract::multipart::MultipartError) -> Self {
        WebError(format!("malformed form submission: {e}"))
    }
}

#[derive(Deserialize)]
struct IndexQuery {
    session: Option<Uuid>,
}

async fn index(State(state): State<AppState>, Query(query): Query<IndexQuery>) -> Html<String> {
    let id = query.session.unwrap_or_else(Uuid::new_v4);
    let session = state.sessions.get(id).await;
    Html(templates::render_page(id, &session))
}

/// One parsed `/submit` form.
#[derive(Default)]
struct SubmitForm {
    session: Option<Uuid>,
    pseudocode: String,
    image: Option<(String, Vec<u8>)>,
}

async fn read_submit_form(mut multipart: Multipart) -> Result<SubmitForm, WebError> {
    let mut form = SubmitForm::default();

    while let Some(field) = multipart.next_field().await? {
        // name() borrows the field, which text()/bytes() consume
        let name = field.name().map(str::to_string);
        match name.as_deref() {
            Some("session") => {
                form.session = Uuid::parse_str(field.text().await?.trim()).ok();
            }
            Some("pseudocode") => {
                form.pseudocode = field.text().await?;
            }
            Some("image") => {
                let name = field.file_name().unwrap_or_default().to_string();
                let bytes = field.bytes().await?;
                // A submit with no file chosen still sends an empty image field
                if !name.is_empty() && !bytes.is_empty() {
                    form.image = Some((name, bytes.to_vec()));
                }
            }
            _ => {}
        }
    }

    Ok(form)
}

async fn submit(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<Html<String>, WebError> {
    let form = read_submit_form(multipart).await?;
    let id = form.session.unwrap_or_else(Uuid::new_v4);

    let session = apply_submission(&state.coordinator, form.image, &form.pseudocode).await?;

    state.sessions.put(id, session.clone()).await;
    Ok(Html(templates::render_page(id, &session)))
}

/// Build the session state for one submission. Starts from an empty
/// session, so results of the previous submission are always dropped.
async fn apply_submission(
    coordinator: &Coordinator,
    image: Option<(String, Vec<u8>)>,
    pseudocode: &str,
) -> Result<Session, LlmError> {
    let mut session = Session::default();

    if let Some((filename, bytes)) = image {
        match image_from_upload(&filename, bytes) {
            Some(image) => {
                let reply = coordinator.handle_input(Some(image), "").await?;
                if let Some(AgentReply::Pseudocode(response)) = reply {
                    let split = split_code_fences(&response);
                    session.pseudocode = split.code;
                    session.pseudocode_prefix = split.prefix;
                    session.pseudocode_suffix = split.suffix;
                    session.image_name = Some(filename);
                }
            }
            None => {
                warn!(filename = %filename, "rejected upload with unsupported extension");
                session.warning =
                    Some("Unsupported image type: use a .png, .jpg or .jpeg file.".into());
            }
        }
    } else if !pseudocode.trim().is_empty() {
        let reply = coordinator.handle_input(None, pseudocode).await?;
        if let Some(AgentReply::Code(code)) = reply {
            session.code = code;
        }
    } else {
        session.warning = Some("Please upload an image or enter pseudocode.".into());
    }

    Ok(session)
}

#[derive(Deserialize)]
struct ValidateForm {
    session: Uuid,
    pseudocode: String,
}

async fn validate(
    State(state): State<AppState>,
    Form(form): Form<ValidateForm>,
) -> Result<Html<String>, WebError> {
    let mut session = state.sessions.get(form.session).await;

    // The textarea is the source of truth: user edits are written back
    // before regenerating.
    session.pseudocode = form.pseudocode;
    session.code = state.coordinator.generate_code(&session.pseudocode).await?;

    state.sessions.put(form.session, session.clone()).await;
    Ok(Html(templates::render_page(form.session, &session)))
}

/// Map an uploaded file to a Reader input, None for unsupported extensions.
/// A name without an extension is rejected outright.
fn image_from_upload(filename: &str, bytes: Vec<u8>) -> Option<ImageInput> {
    let ext = std::path::Path::new(filename).extension()?.to_str()?;
    let format = ImageFormat::from_extension(ext)?;
    Some(ImageInput::new(format, bytes))
}
