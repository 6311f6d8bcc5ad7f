use anyhow::Context;
use reqwest::Client;
use serde::Deserialize;
use tokio::task::JoinHandle;

#[derive(Debug, Deserialize)]
struct CategoriesResponse {
    categories: Vec<String>,
}

/// Spawns a background task that logs the categories the API offers.
/// Failures are logged and never shown in the UI.
pub fn load_categories_background(client: Client, url: String) -> JoinHandle<()> {
    tokio::spawn(async move {
        match fetch_categories(&client, &url).await {
            Ok(Some(categories)) => {
                tracing::info!(?categories, "Available categories");
            }
            Ok(None) => {
                tracing::debug!(%url, "categories endpoint did not return 2xx");
            }
            Err(e) => {
                tracing::info!("Could not load categories: {e:#}");
            }
        }
    })
}

/// `Ok(None)` when the server answered with a non-2xx status
pub async fn fetch_categories(client: &Client, url: &str) -> anyhow::Result<Option<Vec<String>>> {
    let response = client
        .get(url)
        .send()
        .await
        .with_context(|| format!("request to {url} failed"))?;

    if !response.status().is_success() {
        return Ok(None);
    }

    let body: CategoriesResponse = response
        .json()
        .await
        .context("categories response is not the expected JSON")?;

    Ok(Some(body.categories))
}
