use crate::actions::{apply_action, AppAction};
use crate::render::render_result;
use crate::state::AppState;
use crate::types::LastResponse;
use reqwest::header::{ACCEPT, CONTENT_TYPE};
use reqwest::Client;
use serde_json::Value;
use std::sync::{Arc, RwLock};
use std::time::Instant;
use thiserror::Error;
use tokio::task::JoinHandle;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProbeError {
    #[error("Please enter an API endpoint")]
    EmptyEndpoint,
}

/// Outcome of a single GET, before rendering
#[derive(Debug, Clone, PartialEq)]
pub enum ProbeResult {
    /// The server answered with a JSON body (any status)
    Reachable {
        status: u16,
        status_text: String,
        data: Value,
    },
    /// Transport failure, invalid URL or unparseable body
    Failed { message: String },
}

impl ProbeResult {
    pub fn to_last_response(&self) -> LastResponse {
        match self {
            ProbeResult::Reachable {
                status,
                status_text,
                data,
            } => LastResponse::Completed {
                status: *status,
                status_text: status_text.clone(),
                data: data.clone(),
            },
            ProbeResult::Failed { message } => LastResponse::Failed {
                error: message.clone(),
            },
        }
    }
}

/// Trim the endpoint and make sure it starts with a single leading `/`
pub fn normalize_endpoint(input: &str) -> Result<String, ProbeError> {
    let endpoint = input.trim();
    if endpoint.is_empty() {
        return Err(ProbeError::EmptyEndpoint);
    }

    if endpoint.starts_with('/') {
        Ok(endpoint.to_string())
    } else {
        Ok(format!("/{endpoint}"))
    }
}

/// Join an origin and a normalized endpoint. The result is not re-encoded.
pub fn resolve_url(origin: &str, endpoint: &str) -> String {
    format!("{}{}", origin.trim_end_matches('/'), endpoint)
}

/// Normalize user input and resolve it against the origin
pub fn endpoint_url(origin: &str, input: &str) -> Result<String, ProbeError> {
    let endpoint = normalize_endpoint(input)?;
    Ok(resolve_url(origin, &endpoint))
}

pub fn build_client() -> reqwest::Result<Client> {
    Client::builder()
        .user_agent(concat!("api-probe/", env!("CARGO_PKG_VERSION")))
        .build()
}

/// Show the loading placeholder, then run the probe in the background.
///
/// Completions are applied in arrival order; an older request that settles
/// late overwrites a newer one.
pub fn dispatch_probe(state: Arc<RwLock<AppState>>, client: Client, url: String) -> JoinHandle<()> {
    {
        let mut s = state.write().unwrap();
        apply_action(AppAction::BeginProbe, &mut s);
    }

    tracing::info!(%url, "dispatching probe");

    tokio::spawn(async move {
        let result = execute_probe(&client, &url).await;
        let output = render_result(&result, &url);

        let mut s = state.write().unwrap();
        apply_action(
            AppAction::CompleteProbe {
                output,
                last_response: result.to_last_response(),
            },
            &mut s,
        );
    })
}

/// Issue a JSON GET and classify what came back
pub async fn execute_probe(client: &Client, url: &str) -> ProbeResult {
    let start = Instant::now();

    let response = match client
        .get(url)
        .header(ACCEPT, "application/json")
        .header(CONTENT_TYPE, "application/json")
        .send()
        .await
    {
        Ok(response) => response,
        Err(e) => {
            tracing::warn!(%url, error = %e, "probe failed before a response arrived");
            return ProbeResult::Failed {
                message: e.to_string(),
            };
        }
    };

    let status = response.status();
    let status_text = status.canonical_reason().unwrap_or_default().to_string();

    match response.json::<Value>().await {
        Ok(data) => {
            tracing::info!(
                %url,
                status = status.as_u16(),
                elapsed_ms = start.elapsed().as_millis() as u64,
                "probe settled"
            );
            ProbeResult::Reachable {
                status: status.as_u16(),
                status_text,
                data,
            }
        }
        Err(e) => {
            tracing::warn!(%url, status = status.as_u16(), error = %e, "response body is not JSON");
            ProbeResult::Failed {
                message: format!("Failed to parse response body: {e}"),
            }
        }
    }
}
