use crate::errors::LookupError;
use reqwest::Client;
use serde_json::Value;

#[cfg(feature = "tracing")]
use tracing::{debug, error, info, instrument};

#[cfg_attr(feature = "tracing", instrument(skip(client, headers)))]
pub async fn send_request(
    client: &Client,
    url: &str,
    query: &[(&str, &str)],
    headers: &[(&str, &str)],
) -> Result<Value, LookupError> {
    #[cfg(feature = "tracing")]
    debug!(%url, ?query, "Sending lookup request");

    let mut req = client.get(url).header("Accept", "application/json");
    if !query.is_empty() {
        req = req.query(query);
    }
    for (name, value) in headers {
        req = req.header(*name, *value);
    }

    let res = req.send().await?;

    let status = res.status();
    if !status.is_success() {
        let body = res
            .text()
            .await
            .unwrap_or_else(|_| "<could not read body>".into());
        #[cfg(feature = "tracing")]
        error!(status = ?status, body = %body, "Lookup API returned error");
        return Err(LookupError::ApiError { status, body });
    }

    let body = res.text().await?;
    #[cfg(feature = "tracing")]
    info!(status = ?status, bytes = body.len(), "Lookup request successful");

    Ok(serde_json::from_str(&body)?)
}
