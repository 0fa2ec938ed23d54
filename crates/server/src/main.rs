// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all
)]
#![allow(clippy::multiple_crate_versions)]

mod session;

use axum::{
    Json, Router,
    extract::{Path, Query, State as AxumState},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::{delete, get, post},
};
use clap::Parser;
use serde::{Deserialize, Serialize};
use sig::{ApplyOutcome, Command, ConfigStore, CoreError, Progress, apply, validate_store};
use sig_assistant::{
    AssistantConfig, ChatHistory, ChatMessage, CompletionBackend, DEFAULT_ENDPOINT, DEFAULT_MODEL,
    RECENT_MESSAGES, ask, field_help_query, help_label, help_query, help_topics, tab_context,
};
use sig_domain::{CalloutReason, DomainError, SigTab};
use sig_export::{ExportError, export_csv, export_workbook};
use sig_persistence::{
    DEFAULT_CALLOUT_REASONS_FILE, DEFAULT_DESCRIPTIONS_FILE, FieldSpec, PersistenceError,
    TabDescriptions, load_callout_reasons, load_tab_descriptions, save_callout_reasons,
};
use std::path::PathBuf;
use std::sync::Arc;
use time::OffsetDateTime;
use time::format_description::BorrowedFormatItem;
use tokio::sync::{MappedMutexGuard, Mutex, MutexGuard};
use tracing::{error, info, warn};

use crate::session::{Session, SessionError, SessionRegistry, validate_session_name};

/// SIG Server - HTTP server for the ARCOS System Implementation Guide workbench
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Port to bind the server to
    #[arg(short, long, default_value_t = 3000)]
    port: u16,

    /// Callout reason catalog, read when a session opens and written on commit
    #[arg(short, long, default_value = DEFAULT_CALLOUT_REASONS_FILE)]
    reasons: PathBuf,

    /// Tab and field descriptions
    #[arg(short, long, default_value = DEFAULT_DESCRIPTIONS_FILE)]
    descriptions: PathBuf,

    /// Base URL of the chat completion API
    #[arg(long, default_value = DEFAULT_ENDPOINT)]
    endpoint: String,

    /// Completion model name
    #[arg(long, default_value = DEFAULT_MODEL)]
    model: String,

    /// API key for the completion endpoint. Without one the assistant gives a placeholder reply.
    #[arg(long, env = "OPENAI_API_KEY", hide_env_values = true)]
    api_key: Option<String>,
}

/// Application state shared across handlers.
///
/// Sessions live behind one mutex; everything else is read-only after
/// startup.
#[derive(Clone)]
struct AppState {
    /// Open form sessions.
    sessions: Arc<Mutex<SessionRegistry>>,
    /// Callout reason catalog file.
    reasons_path: Arc<PathBuf>,
    /// Tab and field descriptions.
    descriptions: Arc<TabDescriptions>,
    /// Completion client chosen at startup.
    assistant: Arc<CompletionBackend>,
}

impl AppState {
    /// Locks the named session, opening it on first use.
    ///
    /// The reason catalog for a new session is read on the blocking pool
    /// before the registry lock is taken.
    async fn open_session(&self, name: &str) -> Result<MappedMutexGuard<'_, Session>, HttpError> {
        validate_session_name(name)?;

        let known: bool = self.sessions.lock().await.contains(name);
        if !known {
            let path: PathBuf = self.reasons_path.as_ref().clone();
            let reasons: Vec<CalloutReason> =
                tokio::task::spawn_blocking(move || load_callout_reasons(&path)).await?;
            self.sessions
                .lock()
                .await
                .insert_if_absent(name, Session::seeded(reasons))?;
        }

        let sessions: MutexGuard<'_, SessionRegistry> = self.sessions.lock().await;
        MutexGuard::try_map(sessions, |registry| registry.get_mut(name))
            .map_err(|_| session_not_found(name))
    }
}

fn session_not_found(name: &str) -> HttpError {
    HttpError {
        status: StatusCode::NOT_FOUND,
        message: format!("Session '{name}' is not open"),
    }
}

/// One tab of the questionnaire.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct TabInfo {
    /// The tab title.
    name: String,
    /// Whether the tab has a structured editor rather than free-text fields.
    modeled: bool,
    /// Tab description.
    description: String,
    /// Free-text fields to render.
    fields: Vec<FieldSpec>,
    /// Help topics the assistant can explain.
    help_topics: Vec<String>,
}

/// API response for the tab list.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct TabsResponse {
    /// Tabs in questionnaire order.
    tabs: Vec<TabInfo>,
}

/// API response for a session snapshot.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct StateResponse {
    /// The full configuration.
    store: ConfigStore,
    /// Questionnaire completion.
    progress: Progress,
    /// Completion as a whole percentage.
    percent: usize,
}

/// API response for an applied command.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct CommandResponse {
    /// What the command produced.
    #[serde(flatten)]
    outcome: ApplyOutcome,
    /// Completion after the command.
    progress: Progress,
}

/// API response for store validation.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct ValidationResponse {
    /// Whether no issues were found.
    valid: bool,
    /// One message per issue.
    messages: Vec<String>,
}

/// API response for the hierarchy preview.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct PreviewResponse {
    /// The rendered tree.
    preview: String,
}

/// Query parameters for the callout reason list.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct ReasonFilterQuery {
    /// Case-insensitive text matched against ID and label.
    #[serde(default)]
    search: String,
    /// Only list reasons marked as used.
    #[serde(default)]
    selected_only: bool,
}

/// API response for the callout reason list.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct CalloutReasonsResponse {
    /// Matching reasons in catalog order.
    reasons: Vec<CalloutReason>,
    /// Size of the whole catalog.
    total: usize,
}

/// API response for a catalog commit.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct CommitResponse {
    /// Number of reasons written.
    saved: usize,
    /// Number of reasons marked as used.
    selected: usize,
}

/// API request for the assistant.
///
/// Either `prompt` is given, or `tab` together with `topic` or `field`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct AssistantApiRequest {
    /// A free-form question.
    #[serde(default)]
    prompt: Option<String>,
    /// The tab the user is viewing.
    #[serde(default)]
    tab: Option<String>,
    /// A help topic of the tab.
    #[serde(default)]
    topic: Option<String>,
    /// A described field of the tab.
    #[serde(default)]
    field: Option<String>,
}

/// API response for the assistant.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct AssistantApiResponse {
    /// The reply, or an `Error:` message.
    reply: String,
    /// The most recent chat messages, oldest first.
    messages: Vec<ChatMessage>,
}

/// API response for the chat history.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct ChatResponse {
    /// The most recent chat messages, oldest first.
    messages: Vec<ChatMessage>,
    /// Number of messages in the whole conversation.
    total: usize,
}

impl ChatResponse {
    fn from_history(chat: &ChatHistory) -> Self {
        Self {
            messages: chat.recent(RECENT_MESSAGES).to_vec(),
            total: chat.len(),
        }
    }
}

/// API response for a closed session.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct CloseResponse {
    /// The session name.
    session: String,
    /// Whether the session was open and is now closed.
    closed: bool,
}

/// Error response type.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct ErrorResponse {
    /// Error indicator.
    error: bool,
    /// Error message.
    message: String,
}

/// HTTP error wrapper that implements `IntoResponse`.
struct HttpError {
    /// The HTTP status code.
    status: StatusCode,
    /// The error message.
    message: String,
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let body: Json<ErrorResponse> = Json(ErrorResponse {
            error: true,
            message: self.message,
        });
        (self.status, body).into_response()
    }
}

impl From<CoreError> for HttpError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::IndexOutOfRange { .. }
            | CoreError::LocationNotFound(_)
            | CoreError::CalloutReasonNotFound(_) => Self {
                status: StatusCode::NOT_FOUND,
                message: err.to_string(),
            },
            CoreError::DomainViolation(_) => Self {
                status: StatusCode::UNPROCESSABLE_ENTITY,
                message: err.to_string(),
            },
        }
    }
}

impl From<DomainError> for HttpError {
    fn from(err: DomainError) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            message: err.to_string(),
        }
    }
}

impl From<SessionError> for HttpError {
    fn from(err: SessionError) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            message: err.to_string(),
        }
    }
}

impl From<PersistenceError> for HttpError {
    fn from(err: PersistenceError) -> Self {
        error!(error = %err, "Persistence error");
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            message: format!("Persistence error: {err}"),
        }
    }
}

impl From<ExportError> for HttpError {
    fn from(err: ExportError) -> Self {
        error!(error = %err, "Export error");
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            message: format!("Export error: {err}"),
        }
    }
}

impl From<tokio::task::JoinError> for HttpError {
    fn from(err: tokio::task::JoinError) -> Self {
        error!(error = %err, "Blocking task failed");
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            message: format!("Blocking task failed: {err}"),
        }
    }
}

impl From<time::error::Format> for HttpError {
    fn from(err: time::error::Format) -> Self {
        error!(error = %err, "Timestamp formatting error");
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            message: format!("Timestamp formatting error: {err}"),
        }
    }
}

/// `YYYYMMDD_HHMMSS`
const EXPORT_TIMESTAMP_FORMAT: &[BorrowedFormatItem<'static>] =
    time::macros::format_description!("[year][month][day]_[hour][minute][second]");

const CSV_CONTENT_TYPE: &str = "text/csv; charset=utf-8";
const WORKBOOK_CONTENT_TYPE: &str =
    "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet";

/// Builds the download name `arcos_sig_<timestamp>.<extension>`.
fn export_filename(extension: &str, at: OffsetDateTime) -> Result<String, time::error::Format> {
    let timestamp: String = at.format(EXPORT_TIMESTAMP_FORMAT)?;
    Ok(format!("arcos_sig_{timestamp}.{extension}"))
}

/// Wraps an export body as a file download.
fn download(content_type: &str, extension: &str, body: Vec<u8>) -> Result<Response, HttpError> {
    let filename: String = export_filename(extension, OffsetDateTime::now_utc())?;
    info!(filename = %filename, bytes = body.len(), "Serving export");
    let headers: [(header::HeaderName, String); 2] = [
        (header::CONTENT_TYPE, content_type.to_string()),
        (
            header::CONTENT_DISPOSITION,
            format!("attachment; filename=\"{filename}\""),
        ),
    ];
    Ok((headers, body).into_response())
}

/// Handler for GET `/tabs` endpoint.
#[allow(clippy::unused_async)]
async fn handle_list_tabs(AxumState(app_state): AxumState<AppState>) -> Json<TabsResponse> {
    let tabs: Vec<TabInfo> = SigTab::ALL
        .into_iter()
        .map(|tab| TabInfo {
            name: tab.as_str().to_string(),
            modeled: tab.is_modeled(),
            description: app_state.descriptions.summary(tab.as_str()),
            fields: app_state.descriptions.fields_for_tab(tab.as_str()),
            help_topics: help_topics(tab).iter().map(ToString::to_string).collect(),
        })
        .collect();
    Json(TabsResponse { tabs })
}

/// Handler for GET `/sessions/{session}/state` endpoint.
async fn handle_get_state(
    AxumState(app_state): AxumState<AppState>,
    Path(name): Path<String>,
) -> Result<Json<StateResponse>, HttpError> {
    let session: MappedMutexGuard<'_, Session> = app_state.open_session(&name).await?;

    let progress: Progress = session.store.progress();
    let response: StateResponse = StateResponse {
        store: session.store.clone(),
        progress,
        percent: progress.percent(),
    };
    drop(session);

    Ok(Json(response))
}

/// Handler for POST `/sessions/{session}/commands` endpoint.
///
/// Applies one command. A rejected command leaves the session unchanged.
async fn handle_apply_command(
    AxumState(app_state): AxumState<AppState>,
    Path(name): Path<String>,
    Json(command): Json<Command>,
) -> Result<Json<CommandResponse>, HttpError> {
    info!(session = %name, command = command.name(), "Handling command");

    let mut session: MappedMutexGuard<'_, Session> = app_state.open_session(&name).await?;

    let outcome: ApplyOutcome = apply(&mut session.store, command).inspect_err(|err| {
        warn!(session = %name, error = %err, "Command rejected");
    })?;
    let progress: Progress = session.store.progress();
    drop(session);

    Ok(Json(CommandResponse { outcome, progress }))
}

/// Handler for GET `/sessions/{session}/validation` endpoint.
async fn handle_validate(
    AxumState(app_state): AxumState<AppState>,
    Path(name): Path<String>,
) -> Result<Json<ValidationResponse>, HttpError> {
    let session: MappedMutexGuard<'_, Session> = app_state.open_session(&name).await?;

    let messages: Vec<String> = validate_store(&session.store)
        .iter()
        .map(ToString::to_string)
        .collect();
    drop(session);

    Ok(Json(ValidationResponse {
        valid: messages.is_empty(),
        messages,
    }))
}

/// Handler for GET `/sessions/{session}/preview` endpoint.
async fn handle_preview(
    AxumState(app_state): AxumState<AppState>,
    Path(name): Path<String>,
) -> Result<Json<PreviewResponse>, HttpError> {
    let session: MappedMutexGuard<'_, Session> = app_state.open_session(&name).await?;

    let preview: String = session.store.hierarchy_preview();
    drop(session);

    Ok(Json(PreviewResponse { preview }))
}

/// Handler for GET `/sessions/{session}/callout-reasons` endpoint.
async fn handle_list_callout_reasons(
    AxumState(app_state): AxumState<AppState>,
    Path(name): Path<String>,
    Query(query): Query<ReasonFilterQuery>,
) -> Result<Json<CalloutReasonsResponse>, HttpError> {
    let session: MappedMutexGuard<'_, Session> = app_state.open_session(&name).await?;

    let reasons: Vec<CalloutReason> = session
        .store
        .filter_callout_reasons(&query.search, query.selected_only)
        .into_iter()
        .cloned()
        .collect();
    let total: usize = session.store.callout_reasons().len();
    drop(session);

    Ok(Json(CalloutReasonsResponse { reasons, total }))
}

/// Handler for POST `/sessions/{session}/callout-reasons/commit` endpoint.
///
/// Writes the session's `Use?` and `Default?` flags back to the catalog file.
async fn handle_commit_callout_reasons(
    AxumState(app_state): AxumState<AppState>,
    Path(name): Path<String>,
) -> Result<Json<CommitResponse>, HttpError> {
    let session: MappedMutexGuard<'_, Session> = app_state.open_session(&name).await?;

    let reasons: Vec<CalloutReason> = session.store.callout_reasons().to_vec();
    let response: CommitResponse = CommitResponse {
        saved: reasons.len(),
        selected: session.store.selected_callout_reasons().count(),
    };
    drop(session);

    let path: PathBuf = app_state.reasons_path.as_ref().clone();
    tokio::task::spawn_blocking(move || save_callout_reasons(&path, &reasons)).await??;
    info!(session = %name, saved = response.saved, "Committed callout reasons");

    Ok(Json(response))
}

/// Handler for GET `/sessions/{session}/export/csv` endpoint.
async fn handle_export_csv(
    AxumState(app_state): AxumState<AppState>,
    Path(name): Path<String>,
) -> Result<Response, HttpError> {
    let session: MappedMutexGuard<'_, Session> = app_state.open_session(&name).await?;

    let csv: String = export_csv(&session.store)?;
    drop(session);

    download(CSV_CONTENT_TYPE, "csv", csv.into_bytes())
}

/// Handler for GET `/sessions/{session}/export/workbook` endpoint.
async fn handle_export_workbook(
    AxumState(app_state): AxumState<AppState>,
    Path(name): Path<String>,
) -> Result<Response, HttpError> {
    let session: MappedMutexGuard<'_, Session> = app_state.open_session(&name).await?;

    let workbook: Vec<u8> = export_workbook(&session.store)?;
    drop(session);

    download(WORKBOOK_CONTENT_TYPE, "xlsx", workbook)
}

/// A resolved assistant request.
struct Question {
    /// What the chat history shows for the user's turn.
    label: String,
    /// What is sent to the completion endpoint.
    prompt: String,
    /// Context sentence sent along with the prompt.
    context: String,
}

/// Turns an assistant request into the question to ask.
fn resolve_question(req: &AssistantApiRequest) -> Result<Question, HttpError> {
    let tab: Option<SigTab> = req.tab.as_deref().map(str::parse::<SigTab>).transpose()?;
    let context: String = tab.map(tab_context).unwrap_or_default();

    if let Some(prompt) = req.prompt.as_deref().map(str::trim).filter(|p| !p.is_empty()) {
        return Ok(Question {
            label: prompt.to_string(),
            prompt: prompt.to_string(),
            context,
        });
    }

    match (tab, req.topic.as_deref(), req.field.as_deref()) {
        (Some(tab), Some(topic), _) => Ok(Question {
            label: help_label(topic),
            prompt: help_query(tab, topic),
            context,
        }),
        (Some(tab), None, Some(field)) => Ok(Question {
            label: help_label(field),
            prompt: field_help_query(tab, field),
            context,
        }),
        _ => Err(HttpError {
            status: StatusCode::BAD_REQUEST,
            message: String::from("Provide a prompt, or a tab with a topic or field"),
        }),
    }
}

/// Handler for POST `/sessions/{session}/assistant` endpoint.
///
/// The session lock is released while the completion endpoint is asked, so
/// a slow reply never blocks other sessions.
async fn handle_ask_assistant(
    AxumState(app_state): AxumState<AppState>,
    Path(name): Path<String>,
    Json(req): Json<AssistantApiRequest>,
) -> Result<Json<AssistantApiResponse>, HttpError> {
    let question: Question = resolve_question(&req)?;
    info!(session = %name, label = %question.label, "Handling assistant request");

    drop(app_state.open_session(&name).await?);

    let reply: String = ask(
        app_state.assistant.as_ref(),
        &question.prompt,
        &question.context,
    )
    .await;

    let mut session: MappedMutexGuard<'_, Session> = app_state.open_session(&name).await?;
    session.chat.push_exchange(&question.label, &reply);
    let messages: Vec<ChatMessage> = session.chat.recent(RECENT_MESSAGES).to_vec();
    drop(session);

    Ok(Json(AssistantApiResponse { reply, messages }))
}

/// Handler for GET `/sessions/{session}/chat` endpoint.
async fn handle_get_chat(
    AxumState(app_state): AxumState<AppState>,
    Path(name): Path<String>,
) -> Result<Json<ChatResponse>, HttpError> {
    let session: MappedMutexGuard<'_, Session> = app_state.open_session(&name).await?;

    let response: ChatResponse = ChatResponse::from_history(&session.chat);
    drop(session);

    Ok(Json(response))
}

/// Handler for DELETE `/sessions/{session}/chat` endpoint.
async fn handle_clear_chat(
    AxumState(app_state): AxumState<AppState>,
    Path(name): Path<String>,
) -> Result<Json<ChatResponse>, HttpError> {
    let mut session: MappedMutexGuard<'_, Session> = app_state.open_session(&name).await?;

    session.chat.clear();
    info!(session = %name, "Cleared chat history");
    let response: ChatResponse = ChatResponse::from_history(&session.chat);
    drop(session);

    Ok(Json(response))
}

/// Handler for DELETE `/sessions/{session}` endpoint.
///
/// Discards the session's form and chat. The next request naming it opens a
/// fresh session.
async fn handle_close_session(
    AxumState(app_state): AxumState<AppState>,
    Path(name): Path<String>,
) -> Result<Json<CloseResponse>, HttpError> {
    validate_session_name(&name)?;

    let closed: Option<Session> = app_state.sessions.lock().await.remove(&name);
    if closed.is_none() {
        return Err(session_not_found(&name));
    }

    Ok(Json(CloseResponse {
        session: name,
        closed: true,
    }))
}

/// Builds the application router with all endpoints.
fn build_router(app_state: AppState) -> Router {
    Router::new()
        .route("/tabs", get(handle_list_tabs))
        .route("/sessions/{session}", delete(handle_close_session))
        .route("/sessions/{session}/state", get(handle_get_state))
        .route("/sessions/{session}/commands", post(handle_apply_command))
        .route("/sessions/{session}/validation", get(handle_validate))
        .route("/sessions/{session}/preview", get(handle_preview))
        .route(
            "/sessions/{session}/callout-reasons",
            get(handle_list_callout_reasons),
        )
        .route(
            "/sessions/{session}/callout-reasons/commit",
            post(handle_commit_callout_reasons),
        )
        .route("/sessions/{session}/export/csv", get(handle_export_csv))
        .route(
            "/sessions/{session}/export/workbook",
            get(handle_export_workbook),
        )
        .route("/sessions/{session}/assistant", post(handle_ask_assistant))
        .route(
            "/sessions/{session}/chat",
            get(handle_get_chat).delete(handle_clear_chat),
        )
        .with_state(app_state)
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Parse command-line arguments
    let args: Args = Args::parse();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    info!("Initializing SIG Server");

    let descriptions: TabDescriptions = match load_tab_descriptions(&args.descriptions) {
        Ok(descriptions) => descriptions,
        Err(err) => {
            warn!(
                path = %args.descriptions.display(),
                error = %err,
                "Failed to load tab descriptions, using generic descriptions"
            );
            TabDescriptions::new()
        }
    };

    let assistant: CompletionBackend = CompletionBackend::from_config(&AssistantConfig {
        endpoint: args.endpoint,
        model: args.model,
        api_key: args.api_key,
    });

    info!(path = %args.reasons.display(), "Using callout reason catalog");
    let app_state: AppState = AppState {
        sessions: Arc::new(Mutex::new(SessionRegistry::new())),
        reasons_path: Arc::new(args.reasons),
        descriptions: Arc::new(descriptions),
        assistant: Arc::new(assistant),
    };

    // Build router
    let app: Router = build_router(app_state);

    // Bind to address
    let addr: std::net::SocketAddr = format!("127.0.0.1:{}", args.port).parse()?;
    info!("Server listening on {}", addr);

    // Run server
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::Body,
        http::{Request, StatusCode as HttpStatusCode},
    };
    use serde_json::Value;
    use sig_assistant::{CANNED_REPLY, CannedClient, ChatRole};
    use sig_persistence::try_load_callout_reasons;
    use tempfile::TempDir;
    use tower::ServiceExt;

    const REASONS_JSON: &str = r#"[
  {
    "ID": "1008",
    "Callout Reason Drop-Down Label": "Odor",
    "Use?": "x",
    "Default?": "",
    "Verbiage": "Odor complaint"
  },
  {
    "ID": "1023",
    "Callout Reason Drop-Down Label": "Fire",
    "Use?": "",
    "Default?": "",
    "Verbiage": "Fire reported"
  },
  {
    "ID": "2000",
    "Callout Reason Drop-Down Label": "Flood"
  }
]"#;

    const DESCRIPTIONS_JSON: &str = r#"{
  "Trouble Locations": {
    "description": "Locations that need special handling.",
    "fields": {
      "Location List": {
        "description": "List each trouble location.",
        "example": "Substation 12"
      }
    }
  }
}"#;

    /// Helper to create test app state backed by a temporary reasons file.
    ///
    /// The directory guard must outlive the app state.
    fn create_test_app_state() -> (TempDir, AppState) {
        let dir: TempDir = tempfile::tempdir().expect("Failed to create temp dir");
        let reasons_path: PathBuf = dir.path().join(DEFAULT_CALLOUT_REASONS_FILE);
        std::fs::write(&reasons_path, REASONS_JSON).expect("Failed to write reasons file");
        let descriptions: TabDescriptions =
            serde_json::from_str(DESCRIPTIONS_JSON).expect("Failed to parse descriptions");

        let app_state: AppState = AppState {
            sessions: Arc::new(Mutex::new(SessionRegistry::new())),
            reasons_path: Arc::new(reasons_path),
            descriptions: Arc::new(descriptions),
            assistant: Arc::new(CompletionBackend::Canned(CannedClient::new())),
        };
        (dir, app_state)
    }

    async fn send(app: &Router, method: &str, uri: &str, body: Option<Value>) -> Response {
        let builder = Request::builder().method(method).uri(uri);
        let request: Request<Body> = match body {
            Some(json) => builder
                .header("content-type", "application/json")
                .body(Body::from(json.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };
        app.clone().oneshot(request).await.unwrap()
    }

    async fn body_bytes(response: Response) -> Vec<u8> {
        axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap()
            .to_vec()
    }

    async fn body_json(response: Response) -> Value {
        serde_json::from_slice(&body_bytes(response).await).unwrap()
    }

    async fn command(app: &Router, session: &str, body: Value) -> Response {
        send(
            app,
            "POST",
            &format!("/sessions/{session}/commands"),
            Some(body),
        )
        .await
    }

    /// Fills in all four levels of the first entry and one code.
    async fn complete_first_entry(app: &Router, session: &str) {
        for (level, name) in [(1, "Acme"), (2, "East"), (3, "Ops"), (4, "Plant1")] {
            let response: Response = command(
                app,
                session,
                serde_json::json!({
                    "command": "set_location_level",
                    "index": 0,
                    "level": level,
                    "name": name,
                }),
            )
            .await;
            assert_eq!(response.status(), HttpStatusCode::OK);
        }
        let response: Response = command(
            app,
            session,
            serde_json::json!({
                "command": "set_location_code",
                "index": 0,
                "slot": 0,
                "code": "A1",
            }),
        )
        .await;
        assert_eq!(response.status(), HttpStatusCode::OK);
    }

    #[tokio::test]
    async fn test_list_tabs_includes_descriptions_and_topics() {
        let (_dir, app_state): (TempDir, AppState) = create_test_app_state();
        let app: Router = build_router(app_state);

        let response: Response = send(&app, "GET", "/tabs", None).await;
        assert_eq!(response.status(), HttpStatusCode::OK);

        let tabs: TabsResponse = serde_json::from_slice(&body_bytes(response).await).unwrap();
        assert_eq!(tabs.tabs.len(), SigTab::ALL.len());
        assert_eq!(tabs.tabs[0].name, "Location Hierarchy");
        assert!(tabs.tabs[0].modeled);
        assert!(tabs.tabs[0].help_topics.contains(&String::from("Time Zones")));

        let trouble: &TabInfo = tabs
            .tabs
            .iter()
            .find(|tab| tab.name == "Trouble Locations")
            .unwrap();
        assert!(!trouble.modeled);
        assert_eq!(trouble.description, "Locations that need special handling.");
        assert_eq!(trouble.fields.len(), 1);
        assert_eq!(trouble.fields[0].name, "Location List");

        let additions: &TabInfo = tabs.tabs.iter().find(|tab| tab.name == "Additions").unwrap();
        assert_eq!(
            additions.description,
            "This tab allows you to configure Additions settings in ARCOS."
        );
        assert_eq!(additions.fields[0].name, "Details");
    }

    #[tokio::test]
    async fn test_new_session_is_seeded() {
        let (_dir, app_state): (TempDir, AppState) = create_test_app_state();
        let app: Router = build_router(app_state);

        let response: Response = send(&app, "GET", "/sessions/alpha/state", None).await;
        assert_eq!(response.status(), HttpStatusCode::OK);

        let state: StateResponse = serde_json::from_slice(&body_bytes(response).await).unwrap();
        assert_eq!(state.store.hierarchy().entries.len(), 1);
        assert_eq!(state.store.job_classifications().len(), 1);
        assert_eq!(state.store.callout_reasons().len(), 3);
        assert_eq!(state.progress.total, SigTab::ALL.len());
        // The catalog file already marks one reason as used.
        assert_eq!(state.progress.completed, 1);
        assert_eq!(state.percent, 9);
    }

    #[tokio::test]
    async fn test_invalid_session_name_is_rejected() {
        let (_dir, app_state): (TempDir, AppState) = create_test_app_state();
        let app: Router = build_router(app_state);

        let response: Response = send(&app, "GET", "/sessions/bad.name/state", None).await;
        assert_eq!(response.status(), HttpStatusCode::BAD_REQUEST);

        let body: Value = body_json(response).await;
        assert_eq!(body["error"], true);
        assert!(body["message"].as_str().unwrap().contains("bad.name"));
    }

    #[tokio::test]
    async fn test_command_updates_store_and_progress() {
        let (_dir, app_state): (TempDir, AppState) = create_test_app_state();
        let app: Router = build_router(app_state);

        let response: Response = command(
            &app,
            "alpha",
            serde_json::json!({
                "command": "set_location_level",
                "index": 0,
                "level": 1,
                "name": "Acme",
            }),
        )
        .await;
        assert_eq!(response.status(), HttpStatusCode::OK);

        let body: Value = body_json(response).await;
        assert_eq!(body["outcome"], "updated");
        assert_eq!(body["progress"]["completed"], 2);

        let response: Response = send(&app, "GET", "/sessions/alpha/state", None).await;
        let state: StateResponse = serde_json::from_slice(&body_bytes(response).await).unwrap();
        assert_eq!(state.store.hierarchy().entries[0].levels[0], "Acme");
    }

    #[tokio::test]
    async fn test_add_location_entry_reports_new_id() {
        let (_dir, app_state): (TempDir, AppState) = create_test_app_state();
        let app: Router = build_router(app_state);

        let response: Response = command(
            &app,
            "alpha",
            serde_json::json!({ "command": "add_location_entry" }),
        )
        .await;
        assert_eq!(response.status(), HttpStatusCode::OK);

        let body: Value = body_json(response).await;
        assert_eq!(body["outcome"], "location_added");
        assert_eq!(body["entry_id"], 2);
    }

    #[tokio::test]
    async fn test_out_of_range_command_returns_not_found() {
        let (_dir, app_state): (TempDir, AppState) = create_test_app_state();
        let app: Router = build_router(app_state);

        let response: Response = command(
            &app,
            "alpha",
            serde_json::json!({ "command": "remove_location_entry", "index": 5 }),
        )
        .await;
        assert_eq!(response.status(), HttpStatusCode::NOT_FOUND);

        let body: Value = body_json(response).await;
        assert_eq!(body["error"], true);

        let response: Response = send(&app, "GET", "/sessions/alpha/state", None).await;
        let state: StateResponse = serde_json::from_slice(&body_bytes(response).await).unwrap();
        assert_eq!(state.store.hierarchy().entries.len(), 1);
    }

    #[tokio::test]
    async fn test_matrix_cell_on_incomplete_entry_is_unprocessable() {
        let (_dir, app_state): (TempDir, AppState) = create_test_app_state();
        let app: Router = build_router(app_state);

        let response: Response = command(
            &app,
            "alpha",
            serde_json::json!({
                "command": "set_callout_type_enabled",
                "entry_id": 1,
                "callout_type": "Normal",
                "enabled": true,
            }),
        )
        .await;
        assert_eq!(response.status(), HttpStatusCode::UNPROCESSABLE_ENTITY);
    }

    #[tokio::test]
    async fn test_matrix_cell_on_complete_entry_succeeds() {
        let (_dir, app_state): (TempDir, AppState) = create_test_app_state();
        let app: Router = build_router(app_state);
        complete_first_entry(&app, "alpha").await;

        let response: Response = command(
            &app,
            "alpha",
            serde_json::json!({
                "command": "set_callout_type_enabled",
                "entry_id": 1,
                "callout_type": "Normal",
                "enabled": true,
            }),
        )
        .await;
        assert_eq!(response.status(), HttpStatusCode::OK);

        let response: Response = send(&app, "GET", "/sessions/alpha/state", None).await;
        let state: StateResponse = serde_json::from_slice(&body_bytes(response).await).unwrap();
        assert!(state.store.hierarchy().entries[0].callout_type_enabled("Normal"));
    }

    #[tokio::test]
    async fn test_unknown_default_reason_returns_not_found() {
        let (_dir, app_state): (TempDir, AppState) = create_test_app_state();
        let app: Router = build_router(app_state);

        let response: Response = command(
            &app,
            "alpha",
            serde_json::json!({ "command": "set_default_callout_reason", "id": "9999" }),
        )
        .await;
        assert_eq!(response.status(), HttpStatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_unknown_command_is_rejected() {
        let (_dir, app_state): (TempDir, AppState) = create_test_app_state();
        let app: Router = build_router(app_state);

        let response: Response = command(
            &app,
            "alpha",
            serde_json::json!({ "command": "launch_rockets" }),
        )
        .await;
        assert_eq!(response.status(), HttpStatusCode::UNPROCESSABLE_ENTITY);
    }

    #[tokio::test]
    async fn test_sessions_are_isolated() {
        let (_dir, app_state): (TempDir, AppState) = create_test_app_state();
        let app: Router = build_router(app_state);

        command(
            &app,
            "alpha",
            serde_json::json!({ "command": "add_location_entry" }),
        )
        .await;

        let response: Response = send(&app, "GET", "/sessions/alpha/state", None).await;
        let alpha: StateResponse = serde_json::from_slice(&body_bytes(response).await).unwrap();
        let response: Response = send(&app, "GET", "/sessions/beta/state", None).await;
        let beta: StateResponse = serde_json::from_slice(&body_bytes(response).await).unwrap();

        assert_eq!(alpha.store.hierarchy().entries.len(), 2);
        assert_eq!(beta.store.hierarchy().entries.len(), 1);
    }

    #[tokio::test]
    async fn test_validation_reports_job_without_title() {
        let (_dir, app_state): (TempDir, AppState) = create_test_app_state();
        let app: Router = build_router(app_state);

        let response: Response = send(&app, "GET", "/sessions/alpha/validation", None).await;
        let validation: ValidationResponse =
            serde_json::from_slice(&body_bytes(response).await).unwrap();
        assert!(validation.valid);
        assert!(validation.messages.is_empty());

        command(
            &app,
            "alpha",
            serde_json::json!({ "command": "set_job_id", "index": 0, "slot": 0, "id": "J1" }),
        )
        .await;

        let response: Response = send(&app, "GET", "/sessions/alpha/validation", None).await;
        let validation: ValidationResponse =
            serde_json::from_slice(&body_bytes(response).await).unwrap();
        assert!(!validation.valid);
        assert_eq!(
            validation.messages,
            vec![String::from(
                "Job classification IDs or recording entered without a title"
            )]
        );
    }

    #[tokio::test]
    async fn test_preview_renders_hierarchy() {
        let (_dir, app_state): (TempDir, AppState) = create_test_app_state();
        let app: Router = build_router(app_state);

        let response: Response = send(&app, "GET", "/sessions/alpha/preview", None).await;
        let preview: PreviewResponse = serde_json::from_slice(&body_bytes(response).await).unwrap();
        assert_eq!(preview.preview, sig::EMPTY_PREVIEW);

        complete_first_entry(&app, "alpha").await;

        let response: Response = send(&app, "GET", "/sessions/alpha/preview", None).await;
        let preview: PreviewResponse = serde_json::from_slice(&body_bytes(response).await).unwrap();
        assert_eq!(
            preview.preview,
            "\u{2022} Acme\n  \u{2022} East\n    \u{2022} Ops\n      \u{2022} Plant1\n        (Codes: A1)"
        );
    }

    #[tokio::test]
    async fn test_callout_reason_filter() {
        let (_dir, app_state): (TempDir, AppState) = create_test_app_state();
        let app: Router = build_router(app_state);

        let response: Response = send(
            &app,
            "GET",
            "/sessions/alpha/callout-reasons?search=fl",
            None,
        )
        .await;
        assert_eq!(response.status(), HttpStatusCode::OK);
        let listed: CalloutReasonsResponse =
            serde_json::from_slice(&body_bytes(response).await).unwrap();
        assert_eq!(listed.total, 3);
        assert_eq!(listed.reasons.len(), 1);
        assert_eq!(listed.reasons[0].label, "Flood");

        let response: Response = send(
            &app,
            "GET",
            "/sessions/alpha/callout-reasons?selected_only=true",
            None,
        )
        .await;
        let listed: CalloutReasonsResponse =
            serde_json::from_slice(&body_bytes(response).await).unwrap();
        assert_eq!(listed.reasons.len(), 1);
        assert_eq!(listed.reasons[0].id, "1008");
    }

    #[tokio::test]
    async fn test_commit_writes_reason_flags_to_file() {
        let (_dir, app_state): (TempDir, AppState) = create_test_app_state();
        let reasons_path: PathBuf = app_state.reasons_path.as_ref().clone();
        let app: Router = build_router(app_state);

        command(
            &app,
            "alpha",
            serde_json::json!({ "command": "set_default_callout_reason", "id": "2000" }),
        )
        .await;

        let response: Response = send(
            &app,
            "POST",
            "/sessions/alpha/callout-reasons/commit",
            None,
        )
        .await;
        assert_eq!(response.status(), HttpStatusCode::OK);
        let commit: CommitResponse = serde_json::from_slice(&body_bytes(response).await).unwrap();
        assert_eq!(commit.saved, 3);
        assert_eq!(commit.selected, 2);

        let saved: Vec<CalloutReason> = try_load_callout_reasons(&reasons_path).unwrap();
        let flood: &CalloutReason = saved.iter().find(|reason| reason.id == "2000").unwrap();
        assert!(flood.used);
        assert!(flood.default);

        // A session opened after the commit starts from the saved flags.
        let response: Response = send(&app, "GET", "/sessions/beta/state", None).await;
        let beta: StateResponse = serde_json::from_slice(&body_bytes(response).await).unwrap();
        assert_eq!(
            beta.store.default_callout_reason().map(|r| r.id.as_str()),
            Some("2000")
        );
    }

    #[tokio::test]
    async fn test_csv_export_is_a_download() {
        let (_dir, app_state): (TempDir, AppState) = create_test_app_state();
        let app: Router = build_router(app_state);
        complete_first_entry(&app, "alpha").await;

        let response: Response = send(&app, "GET", "/sessions/alpha/export/csv", None).await;
        assert_eq!(response.status(), HttpStatusCode::OK);
        assert_eq!(
            response.headers()[header::CONTENT_TYPE],
            "text/csv; charset=utf-8"
        );
        let disposition: String = response.headers()[header::CONTENT_DISPOSITION]
            .to_str()
            .unwrap()
            .to_string();
        assert!(disposition.starts_with("attachment; filename=\"arcos_sig_"));
        assert!(disposition.ends_with(".csv\""));

        let body: String = String::from_utf8(body_bytes(response).await).unwrap();
        assert!(body.starts_with("Tab,Section,Response"));
        assert!(body.contains("Location Entry #1"));
    }

    #[tokio::test]
    async fn test_workbook_export_is_a_download() {
        let (_dir, app_state): (TempDir, AppState) = create_test_app_state();
        let app: Router = build_router(app_state);
        complete_first_entry(&app, "alpha").await;

        let response: Response = send(&app, "GET", "/sessions/alpha/export/workbook", None).await;
        assert_eq!(response.status(), HttpStatusCode::OK);
        assert_eq!(
            response.headers()[header::CONTENT_TYPE],
            WORKBOOK_CONTENT_TYPE
        );
        let disposition: String = response.headers()[header::CONTENT_DISPOSITION]
            .to_str()
            .unwrap()
            .to_string();
        assert!(disposition.ends_with(".xlsx\""));

        let body: Vec<u8> = body_bytes(response).await;
        assert!(body.starts_with(b"PK"));
    }

    #[test]
    fn test_export_filename_uses_timestamp() {
        let at: OffsetDateTime = time::macros::datetime!(2026-03-01 14:05:09 UTC);
        assert_eq!(
            export_filename("csv", at).unwrap(),
            "arcos_sig_20260301_140509.csv"
        );
        assert_eq!(
            export_filename("xlsx", at).unwrap(),
            "arcos_sig_20260301_140509.xlsx"
        );
    }

    #[tokio::test]
    async fn test_assistant_prompt_is_recorded_in_chat() {
        let (_dir, app_state): (TempDir, AppState) = create_test_app_state();
        let app: Router = build_router(app_state);

        let response: Response = send(
            &app,
            "POST",
            "/sessions/alpha/assistant",
            Some(serde_json::json!({ "prompt": "What is a callout?", "tab": "Callout Reasons" })),
        )
        .await;
        assert_eq!(response.status(), HttpStatusCode::OK);
        let answer: AssistantApiResponse =
            serde_json::from_slice(&body_bytes(response).await).unwrap();
        assert_eq!(answer.reply, CANNED_REPLY);
        assert_eq!(answer.messages.len(), 2);
        assert_eq!(answer.messages[0].role, ChatRole::User);
        assert_eq!(answer.messages[0].content, "What is a callout?");
        assert_eq!(answer.messages[1].role, ChatRole::Assistant);

        let response: Response = send(&app, "GET", "/sessions/alpha/chat", None).await;
        let chat: ChatResponse = serde_json::from_slice(&body_bytes(response).await).unwrap();
        assert_eq!(chat.total, 2);

        let response: Response = send(&app, "DELETE", "/sessions/alpha/chat", None).await;
        assert_eq!(response.status(), HttpStatusCode::OK);
        let chat: ChatResponse = serde_json::from_slice(&body_bytes(response).await).unwrap();
        assert_eq!(chat.total, 0);
        assert!(chat.messages.is_empty());
    }

    #[tokio::test]
    async fn test_assistant_help_topic_uses_help_label() {
        let (_dir, app_state): (TempDir, AppState) = create_test_app_state();
        let app: Router = build_router(app_state);

        let response: Response = send(
            &app,
            "POST",
            "/sessions/alpha/assistant",
            Some(serde_json::json!({ "tab": "Location Hierarchy", "topic": "Time Zones" })),
        )
        .await;
        assert_eq!(response.status(), HttpStatusCode::OK);
        let answer: AssistantApiResponse =
            serde_json::from_slice(&body_bytes(response).await).unwrap();
        assert_eq!(answer.messages[0].content, "Help with Time Zones");
    }

    #[tokio::test]
    async fn test_assistant_chat_keeps_recent_messages() {
        let (_dir, app_state): (TempDir, AppState) = create_test_app_state();
        let app: Router = build_router(app_state);

        for n in 0..6 {
            send(
                &app,
                "POST",
                "/sessions/alpha/assistant",
                Some(serde_json::json!({ "prompt": format!("Question {n}") })),
            )
            .await;
        }

        let response: Response = send(&app, "GET", "/sessions/alpha/chat", None).await;
        let chat: ChatResponse = serde_json::from_slice(&body_bytes(response).await).unwrap();
        assert_eq!(chat.total, 12);
        assert_eq!(chat.messages.len(), RECENT_MESSAGES);
        assert_eq!(chat.messages[0].content, "Question 1");
    }

    #[tokio::test]
    async fn test_assistant_without_question_is_bad_request() {
        let (_dir, app_state): (TempDir, AppState) = create_test_app_state();
        let app: Router = build_router(app_state);

        let response: Response = send(
            &app,
            "POST",
            "/sessions/alpha/assistant",
            Some(serde_json::json!({ "prompt": "   " })),
        )
        .await;
        assert_eq!(response.status(), HttpStatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_assistant_unknown_tab_is_bad_request() {
        let (_dir, app_state): (TempDir, AppState) = create_test_app_state();
        let app: Router = build_router(app_state);

        let response: Response = send(
            &app,
            "POST",
            "/sessions/alpha/assistant",
            Some(serde_json::json!({ "tab": "Payroll", "topic": "Taxes" })),
        )
        .await;
        assert_eq!(response.status(), HttpStatusCode::BAD_REQUEST);

        let body: Value = body_json(response).await;
        assert_eq!(body["message"], "Unknown tab: 'Payroll'");
    }

    #[tokio::test]
    async fn test_close_session_discards_its_state() {
        let (_dir, app_state): (TempDir, AppState) = create_test_app_state();
        let app: Router = build_router(app_state);

        command(
            &app,
            "alpha",
            serde_json::json!({ "command": "add_location_entry" }),
        )
        .await;
        send(
            &app,
            "POST",
            "/sessions/alpha/assistant",
            Some(serde_json::json!({ "prompt": "What is a callout?" })),
        )
        .await;

        let response: Response = send(&app, "DELETE", "/sessions/alpha", None).await;
        assert_eq!(response.status(), HttpStatusCode::OK);
        let closed: CloseResponse = serde_json::from_slice(&body_bytes(response).await).unwrap();
        assert_eq!(closed.session, "alpha");
        assert!(closed.closed);

        let response: Response = send(&app, "GET", "/sessions/alpha/state", None).await;
        let state: StateResponse = serde_json::from_slice(&body_bytes(response).await).unwrap();
        assert_eq!(state.store.hierarchy().entries.len(), 1);

        let response: Response = send(&app, "GET", "/sessions/alpha/chat", None).await;
        let chat: ChatResponse = serde_json::from_slice(&body_bytes(response).await).unwrap();
        assert_eq!(chat.total, 0);
    }

    #[tokio::test]
    async fn test_close_leaves_other_sessions_open() {
        let (_dir, app_state): (TempDir, AppState) = create_test_app_state();
        let app: Router = build_router(app_state);

        for session in ["alpha", "beta"] {
            command(
                &app,
                session,
                serde_json::json!({ "command": "add_location_entry" }),
            )
            .await;
        }

        let response: Response = send(&app, "DELETE", "/sessions/alpha", None).await;
        assert_eq!(response.status(), HttpStatusCode::OK);

        let response: Response = send(&app, "GET", "/sessions/beta/state", None).await;
        let beta: StateResponse = serde_json::from_slice(&body_bytes(response).await).unwrap();
        assert_eq!(beta.store.hierarchy().entries.len(), 2);
    }

    #[tokio::test]
    async fn test_close_unknown_session_returns_not_found() {
        let (_dir, app_state): (TempDir, AppState) = create_test_app_state();
        let app: Router = build_router(app_state);

        let response: Response = send(&app, "DELETE", "/sessions/ghost", None).await;
        assert_eq!(response.status(), HttpStatusCode::NOT_FOUND);
        let body: Value = body_json(response).await;
        assert_eq!(body["error"], true);
        assert!(body["message"].as_str().unwrap().contains("ghost"));

        let response: Response = send(&app, "DELETE", "/sessions/bad.name", None).await;
        assert_eq!(response.status(), HttpStatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_reopened_session_reads_the_catalog_again() {
        let (_dir, app_state): (TempDir, AppState) = create_test_app_state();
        let reasons_path: PathBuf = app_state.reasons_path.as_ref().clone();
        let app: Router = build_router(app_state);

        let response: Response = send(&app, "GET", "/sessions/alpha/callout-reasons", None).await;
        let listed: CalloutReasonsResponse =
            serde_json::from_slice(&body_bytes(response).await).unwrap();
        assert_eq!(listed.total, 3);

        std::fs::write(
            &reasons_path,
            r#"[{"ID": "3000", "Callout Reason Drop-Down Label": "Storm", "Use?": "x"}]"#,
        )
        .unwrap();

        // An open session keeps the catalog it was seeded with.
        let response: Response = send(&app, "GET", "/sessions/alpha/callout-reasons", None).await;
        let listed: CalloutReasonsResponse =
            serde_json::from_slice(&body_bytes(response).await).unwrap();
        assert_eq!(listed.total, 3);

        send(&app, "DELETE", "/sessions/alpha", None).await;

        let response: Response = send(&app, "GET", "/sessions/alpha/callout-reasons", None).await;
        let listed: CalloutReasonsResponse =
            serde_json::from_slice(&body_bytes(response).await).unwrap();
        assert_eq!(listed.total, 1);
        assert_eq!(listed.reasons[0].label, "Storm");
    }

    #[tokio::test]
    async fn test_concurrent_first_requests_share_one_session() {
        let (_dir, app_state): (TempDir, AppState) = create_test_app_state();
        let app: Router = build_router(app_state);

        let (first, second): (Response, Response) = tokio::join!(
            command(
                &app,
                "alpha",
                serde_json::json!({ "command": "add_location_entry" }),
            ),
            command(
                &app,
                "alpha",
                serde_json::json!({ "command": "add_location_entry" }),
            ),
        );
        assert_eq!(first.status(), HttpStatusCode::OK);
        assert_eq!(second.status(), HttpStatusCode::OK);

        let response: Response = send(&app, "GET", "/sessions/alpha/state", None).await;
        let state: StateResponse = serde_json::from_slice(&body_bytes(response).await).unwrap();
        assert_eq!(state.store.hierarchy().entries.len(), 3);
    }
}
