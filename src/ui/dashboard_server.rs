use std::convert::Infallible;
use std::net::{IpAddr, SocketAddr};
use serde::Serialize;
use serde_json::json;
use tokio::sync::oneshot;
use warp::http::StatusCode;
use warp::reply::{Json, WithStatus};
use warp::{Filter, Rejection, Reply};
use crate::config::constants::{
    DEFAULT_SERVER_PORT_RANGE_END, DEFAULT_SERVER_PORT_RANGE_START, SERVER_SHUTDOWN_GRACE_PERIOD_MS,
};
use crate::errors::{CodeGuardError, CodeGuardResult};
use crate::services::analysis_dispatcher::DISPATCH_FAILURE_MESSAGE;
use crate::services::app_context::AppContext;
use crate::services::settings_store::SETTINGS_SAVED_MESSAGE;
use crate::structs::analysis_request::AnalysisRequest;
use crate::structs::analysis_settings::AnalysisSettings;
use crate::structs::api_response::ApiResponse;
use crate::structs::config::server_config::ServerConfig;
use crate::structs::repository_submission::RepositorySubmission;
use crate::structs::setting_toggle::SettingToggle;

const MAX_BODY_BYTES: u64 = 1024 * 1024;

/// JSON API over the shared session state.
pub struct DashboardServer {
    context: AppContext,
    host: String,
    port: Option<u16>,
    shutdown_tx: Option<oneshot::Sender<()>>,
}

impl DashboardServer {
    pub fn new(context: AppContext, config: &ServerConfig) -> Self {
        Self {
            context,
            host: config.host.clone(),
            port: config.port,
            shutdown_tx: None,
        }
    }

    /// Bind and serve in the background; returns the bound address.
    pub async fn start(&mut self) -> CodeGuardResult<SocketAddr> {
        let ip: IpAddr = self.host.parse().map_err(|_| {
            CodeGuardError::config_error(
                &format!("Invalid server host '{}'", self.host),
                Some("server.host"),
                Some("Use an IP address such as 127.0.0.1"),
            )
        })?;

        let port = match self.port {
            Some(port) => port,
            None => find_available_port(ip).await?,
        };

        let (shutdown_tx, shutdown_rx) = oneshot::channel();
        let (addr, server) = warp::serve(routes(self.context.clone()))
            .try_bind_with_graceful_shutdown(SocketAddr::new(ip, port), async {
                shutdown_rx.await.ok();
            })
            .map_err(|e| CodeGuardError::system_error("binding dashboard server", &e.to_string()))?;

        tokio::spawn(server);
        self.port = Some(addr.port());
        self.shutdown_tx = Some(shutdown_tx);

        log::info!("🌐 Dashboard API listening on http://{}", addr);
        Ok(addr)
    }

    pub async fn shutdown(&mut self) -> CodeGuardResult<()> {
        log::info!("🛑 Shutting down dashboard server...");

        if let Some(shutdown_tx) = self.shutdown_tx.take() {
            shutdown_tx
                .send(())
                .map_err(|_| CodeGuardError::system_error("shutdown", "Failed to send shutdown signal"))?;
        }

        tokio::time::sleep(std::time::Duration::from_millis(SERVER_SHUTDOWN_GRACE_PERIOD_MS)).await;
        log::info!("✅ Dashboard server shutdown complete");
        Ok(())
    }

    /// Serve until Ctrl-C, then shut down gracefully.
    pub async fn run_until_ctrl_c(mut self) -> CodeGuardResult<()> {
        self.start().await?;
        tokio::signal::ctrl_c().await?;
        self.shutdown().await
    }
}

async fn find_available_port(ip: IpAddr) -> CodeGuardResult<u16> {
    for port in DEFAULT_SERVER_PORT_RANGE_START..=DEFAULT_SERVER_PORT_RANGE_END {
        if let Ok(listener) = tokio::net::TcpListener::bind(SocketAddr::new(ip, port)).await {
            drop(listener);
            return Ok(port);
        }
    }
    Err(CodeGuardError::config_error(
        &format!(
            "No available ports between {} and {}",
            DEFAULT_SERVER_PORT_RANGE_START, DEFAULT_SERVER_PORT_RANGE_END
        ),
        Some("server.port"),
        Some("Set server.port to a free port"),
    ))
}

/// Every API route, with rejections recovered into the response envelope.
pub fn routes(context: AppContext) -> impl Filter<Extract = impl Reply, Error = Infallible> + Clone {
    let health = warp::path!("api" / "health")
        .and(warp::get())
        .and_then(health_handler);

    let analyze = warp::path!("api" / "analyze")
        .and(warp::post())
        .and(json_body::<AnalysisRequest>())
        .and(with_context(context.clone()))
        .and_then(analyze_handler);

    let list_repositories = warp::path!("api" / "repositories")
        .and(warp::get())
        .and(with_context(context.clone()))
        .and_then(list_repositories_handler);

    let get_repository = warp::path!("api" / "repositories" / String)
        .and(warp::get())
        .and(with_context(context.clone()))
        .and_then(get_repository_handler);

    let connect_repository = warp::path!("api" / "repositories")
        .and(warp::post())
        .and(json_body::<RepositorySubmission>())
        .and(with_context(context.clone()))
        .and_then(connect_repository_handler);

    let get_settings = warp::path!("api" / "settings")
        .and(warp::get())
        .and(with_context(context.clone()))
        .and_then(get_settings_handler);

    let save_settings = warp::path!("api" / "settings")
        .and(warp::put())
        .and(json_body::<AnalysisSettings>())
        .and(with_context(context.clone()))
        .and_then(save_settings_handler);

    let toggle_pillar = warp::path!("api" / "settings" / "pillars" / String)
        .and(warp::put())
        .and(json_body::<SettingToggle>())
        .and(with_context(context.clone()))
        .and_then(toggle_pillar_handler);

    let toggle_principle = warp::path!("api" / "settings" / "principles" / String)
        .and(warp::put())
        .and(json_body::<SettingToggle>())
        .and(with_context(context))
        .and_then(toggle_principle_handler);

    let api = health
        .or(analyze)
        .or(list_repositories)
        .or(get_repository)
        .or(connect_repository)
        .or(get_settings)
        .or(save_settings)
        .or(toggle_pillar)
        .or(toggle_principle);

    local_origin()
        .and(api)
        .with(
            warp::cors()
                .allow_any_origin()
                .allow_headers(vec!["content-type"])
                .allow_methods(vec!["GET", "POST", "PUT"]),
        )
        .with(warp::log("codeguard::api"))
        .recover(handle_rejection)
}

#[derive(Debug)]
struct ForeignOrigin;

impl warp::reject::Reject for ForeignOrigin {}

/// Browser callers must come from localhost or 127.0.0.1, on any port.
/// Requests without an `Origin` header (CLI tools) pass.
fn local_origin() -> impl Filter<Extract = (), Error = Rejection> + Clone {
    warp::header::optional::<String>("origin")
        .and_then(|origin: Option<String>| async move {
            match origin {
                Some(origin) if !is_local_origin(&origin) => Err(warp::reject::custom(ForeignOrigin)),
                _ => Ok(()),
            }
        })
        .untuple_one()
}

pub fn is_local_origin(origin: &str) -> bool {
    match reqwest::Url::parse(origin) {
        Ok(url) => {
            matches!(url.scheme(), "http" | "https")
                && matches!(url.host_str(), Some("localhost" | "127.0.0.1" | "[::1]"))
        }
        Err(_) => false,
    }
}

fn with_context(context: AppContext) -> impl Filter<Extract = (AppContext,), Error = Infallible> + Clone {
    warp::any().map(move || context.clone())
}

fn json_body<T>() -> impl Filter<Extract = (T,), Error = Rejection> + Clone
where
    T: serde::de::DeserializeOwned + Send,
{
    warp::body::content_length_limit(MAX_BODY_BYTES).and(warp::body::json())
}

fn respond<T: Serialize>(response: &ApiResponse<T>, status: StatusCode) -> WithStatus<Json> {
    warp::reply::with_status(warp::reply::json(response), status)
}

fn error_reply(error: &CodeGuardError) -> WithStatus<Json> {
    let status = match error {
        CodeGuardError::ValidationError { .. } => StatusCode::BAD_REQUEST,
        CodeGuardError::RepositoryNotFound { .. } => StatusCode::NOT_FOUND,
        _ => StatusCode::INTERNAL_SERVER_ERROR,
    };
    respond(&ApiResponse::<()>::error(error.to_string()), status)
}

async fn health_handler() -> Result<WithStatus<Json>, Infallible> {
    Ok(respond(
        &ApiResponse::ok(json!({ "status": "ok", "version": env!("CARGO_PKG_VERSION") }), "CodeGuard is running"),
        StatusCode::OK,
    ))
}

async fn analyze_handler(request: AnalysisRequest, context: AppContext) -> Result<WithStatus<Json>, Infallible> {
    match context.dispatcher.dispatch(&request.code).await {
        Ok(round) => {
            let message = round.warning.clone().unwrap_or_else(|| "Analysis complete.".to_string());
            Ok(respond(&ApiResponse::ok(round, message), StatusCode::OK))
        }
        Err(error) if error.is_validation() => Ok(error_reply(&error)),
        Err(error) => {
            log::error!("❌ Analysis dispatch failed: {}", error.technical_details());
            Ok(respond(
                &ApiResponse::<()>::error(DISPATCH_FAILURE_MESSAGE),
                StatusCode::INTERNAL_SERVER_ERROR,
            ))
        }
    }
}

async fn list_repositories_handler(context: AppContext) -> Result<WithStatus<Json>, Infallible> {
    let repositories = context.scanner.list().await;
    let message = format!("{} connected repositories", repositories.len());
    Ok(respond(&ApiResponse::ok(repositories, message), StatusCode::OK))
}

async fn get_repository_handler(id: String, context: AppContext) -> Result<WithStatus<Json>, Infallible> {
    match context.scanner.get(&id).await {
        Ok(repository) => {
            let message = repository.status.label().to_string();
            Ok(respond(&ApiResponse::ok(repository, message), StatusCode::OK))
        }
        Err(error) => Ok(error_reply(&error)),
    }
}

async fn connect_repository_handler(
    submission: RepositorySubmission,
    context: AppContext,
) -> Result<WithStatus<Json>, Infallible> {
    match context.scanner.submit(submission).await {
        Ok(repository) => {
            let message = format!("Repository '{}' connected. Scan in progress.", repository.name);
            Ok(respond(&ApiResponse::ok(repository, message), StatusCode::CREATED))
        }
        Err(error) => Ok(error_reply(&error)),
    }
}

async fn get_settings_handler(context: AppContext) -> Result<WithStatus<Json>, Infallible> {
    let settings = context.settings.snapshot().await;
    Ok(respond(&ApiResponse::ok(settings, "Current analysis preferences"), StatusCode::OK))
}

async fn save_settings_handler(settings: AnalysisSettings, context: AppContext) -> Result<WithStatus<Json>, Infallible> {
    let saved = context.settings.replace(settings).await;
    Ok(respond(&ApiResponse::ok(saved, SETTINGS_SAVED_MESSAGE), StatusCode::OK))
}

async fn toggle_pillar_handler(
    id: String,
    toggle: SettingToggle,
    context: AppContext,
) -> Result<WithStatus<Json>, Infallible> {
    match context.settings.set_pillar(&id, toggle.enabled).await {
        Ok(settings) => Ok(respond(&ApiResponse::ok(settings, SETTINGS_SAVED_MESSAGE), StatusCode::OK)),
        Err(error) => Ok(error_reply(&error)),
    }
}

async fn toggle_principle_handler(
    id: String,
    toggle: SettingToggle,
    context: AppContext,
) -> Result<WithStatus<Json>, Infallible> {
    match context.settings.set_principle(&id, toggle.enabled).await {
        Ok(settings) => Ok(respond(&ApiResponse::ok(settings, SETTINGS_SAVED_MESSAGE), StatusCode::OK)),
        Err(error) => Ok(error_reply(&error)),
    }
}

async fn handle_rejection(rejection: Rejection) -> Result<WithStatus<Json>, Infallible> {
    let (status, message) = if rejection.is_not_found() {
        (StatusCode::NOT_FOUND, "Route not found".to_string())
    } else if let Some(error) = rejection.find::<warp::filters::body::BodyDeserializeError>() {
        (StatusCode::BAD_REQUEST, format!("Invalid request body: {}", error))
    } else if rejection.find::<ForeignOrigin>().is_some() {
        (StatusCode::FORBIDDEN, "Origin not allowed".to_string())
    } else if let Some(error) = rejection.find::<warp::filters::cors::CorsForbidden>() {
        (StatusCode::FORBIDDEN, error.to_string())
    } else if rejection.find::<warp::reject::LengthRequired>().is_some() {
        (StatusCode::LENGTH_REQUIRED, "A content-length header is required".to_string())
    } else if rejection.find::<warp::reject::PayloadTooLarge>().is_some() {
        (StatusCode::PAYLOAD_TOO_LARGE, "Request body is too large".to_string())
    } else if rejection.find::<warp::reject::UnsupportedMediaType>().is_some() {
        (StatusCode::UNSUPPORTED_MEDIA_TYPE, "Expected a JSON request body".to_string())
    } else if rejection.find::<warp::reject::MethodNotAllowed>().is_some() {
        (StatusCode::METHOD_NOT_ALLOWED, "Method not allowed".to_string())
    } else {
        log::error!("Unhandled rejection: {:?}", rejection);
        (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error".to_string())
    };

    Ok(respond(&ApiResponse::<()>::error(message), status))
}
