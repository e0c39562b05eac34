#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;
use log::{error, info, warn};
use parking_lot::Mutex;
use serde::Serialize;
use tauri::{AppHandle, Builder, Emitter, Manager, State};
use tauri_plugin_opener::OpenerExt;

pub mod catalog;
pub mod pages;
pub mod router;
pub mod session;
pub mod storage;
pub mod validation;

use pages::assessment::{AssessmentAnswers, AssessmentPage, AssessmentSubmitResponse};
use pages::auth::{AuthResponse, LoginPayload, SignUpPayload, LOGIN_USERNAME};
use pages::career_detail::CareerDetailPage;
use pages::dashboard::DashboardPage;
use pages::home::HomePage;
use pages::recommendations::RecommendationsPage;
use router::RouteResolution;
use session::{SessionState, SessionStore, User};

pub fn run() -> Result<()> {
    info!("CareerPath starting up...");

    Builder::default()
        .plugin(tauri_plugin_opener::init())
        .invoke_handler(tauri::generate_handler![
            // Session / authentication commands
            load_session,
            login,
            sign_up,
            logout,
            get_nav_state,
            // Routing
            resolve_route,
            // Page data commands
            get_home_page,
            get_dashboard_page,
            get_assessment_page,
            submit_assessment,
            get_recommendations_page,
            get_career_detail_page,
            // External links
            open_learning_resource
        ])
        .manage(AppState::new())
        .setup(|app| {
            info!("CareerPath application starting up...");

            // Rehydrate the persisted session before the first page renders
            let state = app.state::<AppState>();
            let app_handle = app.handle().clone();
            match state.ensure_session_store(&app_handle) {
                Ok(()) => {
                    let guard = state.session.lock();
                    if let Some(store) = guard.as_ref() {
                        match store.current() {
                            SessionState::Authenticated { user, .. } => {
                                info!("✅ Session restored for {}", user.username)
                            }
                            SessionState::Unauthenticated => {
                                info!("No persisted session, starting unauthenticated")
                            }
                        }
                    }
                }
                Err(e) => warn!("Failed to open session store on startup: {}", e),
            }

            // Check if launched with a careerpath://navigate/<path> URL
            let args: Vec<String> = std::env::args().collect();
            if let Some(protocol_url) = args.iter().find(|arg| arg.starts_with("careerpath://")) {
                info!("Detected protocol launch: {}", protocol_url);

                // Handle the protocol launch with a slight delay to ensure the
                // webview is listening before the navigate event fires
                let url = protocol_url.clone();
                let launch_handle = app_handle.clone();
                tauri::async_runtime::spawn(async move {
                    tokio::time::sleep(tokio::time::Duration::from_millis(500)).await;
                    handle_protocol_launch(&url, &launch_handle);
                });
            }

            Ok(())
        })
        .run(tauri::generate_context!())
        .expect("Error while running tauri application");

    Ok(())
}

/// Resolve a `careerpath://navigate/<path>` launch URL through the router
/// and tell the webview where to land. Denied protected paths arrive as the
/// usual login redirect.
fn handle_protocol_launch(protocol_url: &str, app_handle: &AppHandle) {
    let Some(raw_path) = protocol_url.strip_prefix("careerpath://navigate") else {
        warn!("Unsupported protocol URL: {}", protocol_url);
        return;
    };

    let decoded = urlencoding::decode(raw_path)
        .map(|p| p.into_owned())
        .unwrap_or_else(|_| raw_path.to_string());
    let target = if decoded.is_empty() {
        router::HOME_PATH.to_string()
    } else {
        decoded
    };

    let resolution = {
        let state = app_handle.state::<AppState>();
        let guard = state.session.lock();
        let current = guard
            .as_ref()
            .map(|s| s.current().clone())
            .unwrap_or(SessionState::Unauthenticated);
        router::resolve(&target, &current)
    };

    info!("🧭 Protocol launch resolved {} -> {:?}", target, resolution);

    let payload = serde_json::json!({
        "requested": target,
        "resolution": resolution,
        "launched_at": chrono::Utc::now().to_rfc3339(),
    });
    if let Err(e) = app_handle.emit("navigate", payload) {
        error!("Failed to emit navigate event: {}", e);
    }
}

// Global application state

#[derive(Default)]
struct AppState {
    session: Arc<Mutex<Option<SessionStore>>>,
}

impl AppState {
    fn new() -> Self {
        Self::default()
    }

    /// Open the session store on first use, rehydrating from the app data
    /// directory (or `CAREERPATH_DATA_DIR` when set).
    fn ensure_session_store(&self, app_handle: &AppHandle) -> Result<(), String> {
        let mut guard = self.session.lock();
        if guard.is_none() {
            let dir = resolve_data_dir(app_handle)?;
            let store = SessionStore::open(&dir)
                .map_err(|e| format!("Failed to open session store: {}", e))?;
            *guard = Some(store);
        }
        Ok(())
    }
}

fn resolve_data_dir(app_handle: &AppHandle) -> Result<PathBuf, String> {
    if let Ok(dir) = std::env::var("CAREERPATH_DATA_DIR") {
        return Ok(PathBuf::from(dir));
    }
    app_handle
        .path()
        .app_data_dir()
        .map_err(|e| format!("Failed to resolve app data directory: {}", e))
}

/// Snapshot of the current session for the command layer.
fn current_session(
    state: &State<'_, AppState>,
    app_handle: &AppHandle,
) -> Result<SessionState, String> {
    state.ensure_session_store(app_handle)?;
    let guard = state.session.lock();
    let store = guard
        .as_ref()
        .ok_or_else(|| "Session store not initialized".to_string())?;
    Ok(store.current().clone())
}

/// Gate for protected page commands: the view model is never built without
/// an authenticated session.
fn require_user(
    state: &State<'_, AppState>,
    app_handle: &AppHandle,
) -> Result<User, String> {
    match current_session(state, app_handle)? {
        SessionState::Authenticated { user, .. } => Ok(user),
        SessionState::Unauthenticated => Err("Not authenticated".to_string()),
    }
}

fn emit_auth_changed(app_handle: &AppHandle, user: Option<&User>) {
    let payload = serde_json::json!({
        "authenticated": user.is_some(),
        "user": user,
        "changed_at": chrono::Utc::now().to_rfc3339(),
    });
    if let Err(e) = app_handle.emit("auth-changed", payload) {
        error!("Failed to emit auth-changed event: {}", e);
    }
}

// Session / authentication commands

#[tauri::command]
async fn load_session(
    state: State<'_, AppState>,
    app_handle: AppHandle,
) -> Result<SessionState, String> {
    state.ensure_session_store(&app_handle)?;
    let mut guard = state.session.lock();
    let store = guard
        .as_mut()
        .ok_or_else(|| "Session store not initialized".to_string())?;
    Ok(store.load())
}

#[tauri::command]
async fn login(
    payload: LoginPayload,
    state: State<'_, AppState>,
    app_handle: AppHandle,
) -> Result<AuthResponse, String> {
    info!("🔐 Login attempt for {}", payload.email);

    let errors = pages::auth::validate_login(&payload);
    if !errors.is_empty() {
        return Ok(AuthResponse::rejected(errors));
    }

    let (user, token) = pages::auth::issue_session(LOGIN_USERNAME, &payload.email);
    persist_session(&state, &app_handle, user.clone(), token)?;
    emit_auth_changed(&app_handle, Some(&user));

    Ok(AuthResponse::accepted(user, router::DASHBOARD_PATH))
}

#[tauri::command]
async fn sign_up(
    payload: SignUpPayload,
    state: State<'_, AppState>,
    app_handle: AppHandle,
) -> Result<AuthResponse, String> {
    info!("🆕 Signup attempt for {}", payload.email);

    let errors = pages::auth::validate_sign_up(&payload);
    if !errors.is_empty() {
        return Ok(AuthResponse::rejected(errors));
    }

    let (user, token) = pages::auth::issue_session(payload.username.trim(), &payload.email);
    persist_session(&state, &app_handle, user.clone(), token)?;
    emit_auth_changed(&app_handle, Some(&user));

    Ok(AuthResponse::accepted(user, router::DASHBOARD_PATH))
}

fn persist_session(
    state: &State<'_, AppState>,
    app_handle: &AppHandle,
    user: User,
    token: String,
) -> Result<(), String> {
    state.ensure_session_store(app_handle)?;
    let mut guard = state.session.lock();
    let store = guard
        .as_mut()
        .ok_or_else(|| "Session store not initialized".to_string())?;
    store
        .login(user, token)
        .map_err(|e| format!("Failed to persist session: {}", e))
}

#[tauri::command]
async fn logout(
    state: State<'_, AppState>,
    app_handle: AppHandle,
) -> Result<(), String> {
    state.ensure_session_store(&app_handle)?;
    {
        let mut guard = state.session.lock();
        let store = guard
            .as_mut()
            .ok_or_else(|| "Session store not initialized".to_string())?;
        store.logout();
    }
    emit_auth_changed(&app_handle, None);
    Ok(())
}

#[derive(Serialize)]
struct NavState {
    authenticated: bool,
    username: Option<String>,
}

#[tauri::command]
async fn get_nav_state(
    state: State<'_, AppState>,
    app_handle: AppHandle,
) -> Result<NavState, String> {
    let session = current_session(&state, &app_handle)?;
    Ok(NavState {
        authenticated: session.is_authenticated(),
        username: session.user().map(|u| u.username.clone()),
    })
}

// Routing

#[tauri::command]
async fn resolve_route(
    path: String,
    state: State<'_, AppState>,
    app_handle: AppHandle,
) -> Result<RouteResolution, String> {
    let session = current_session(&state, &app_handle)?;
    Ok(router::resolve(&path, &session))
}

// Page data commands

#[tauri::command]
async fn get_home_page() -> Result<HomePage, String> {
    Ok(pages::home::build())
}

#[tauri::command]
async fn get_dashboard_page(
    state: State<'_, AppState>,
    app_handle: AppHandle,
) -> Result<DashboardPage, String> {
    let user = require_user(&state, &app_handle)?;
    Ok(pages::dashboard::build(&user))
}

#[tauri::command]
async fn get_assessment_page(
    state: State<'_, AppState>,
    app_handle: AppHandle,
) -> Result<AssessmentPage, String> {
    require_user(&state, &app_handle)?;
    Ok(pages::assessment::build())
}

#[tauri::command]
async fn submit_assessment(
    answers: AssessmentAnswers,
    state: State<'_, AppState>,
    app_handle: AppHandle,
) -> Result<AssessmentSubmitResponse, String> {
    require_user(&state, &app_handle)?;
    Ok(pages::assessment::submit(&answers))
}

#[tauri::command]
async fn get_recommendations_page(
    state: State<'_, AppState>,
    app_handle: AppHandle,
) -> Result<RecommendationsPage, String> {
    require_user(&state, &app_handle)?;
    Ok(pages::recommendations::build())
}

#[tauri::command]
async fn get_career_detail_page(
    career_name: String,
    state: State<'_, AppState>,
    app_handle: AppHandle,
) -> Result<CareerDetailPage, String> {
    require_user(&state, &app_handle)?;
    pages::career_detail::build(&career_name)
        .ok_or_else(|| format!("Unknown career: {}", career_name))
}

// External links

#[tauri::command]
async fn open_learning_resource(
    url: String,
    app_handle: AppHandle,
) -> Result<(), String> {
    if !url.starts_with("https://") && !url.starts_with("http://") {
        return Err(format!("Refusing to open non-http URL: {}", url));
    }
    info!("🔗 Opening learning resource: {}", url);
    app_handle
        .opener()
        .open_url(&url, None::<&str>)
        .map_err(|e| format!("Failed to open {}: {}", url, e))
}
