use crate::error::FetchError;
use reqwest::Client;
use tracing::debug;
use url::Url;

/// Validate a source identifier as an http(s) URL.
pub fn parse_source(source: &str) -> Result<Url, FetchError> {
    let url = Url::parse(source).map_err(|e| FetchError::InvalidSource {
        source_id: source.to_string(),
        reason: e.to_string(),
    })?;
    match url.scheme() {
        "http" | "https" => Ok(url),
        other => Err(FetchError::InvalidSource {
            source_id: source.to_string(),
            reason: format!("unsupported scheme `{}`", other),
        }),
    }
}

/// One GET against `source`, returning the body text.
///
/// No retry; the client's default timeout applies.
pub async fn fetch_text(client: &Client, source: &str) -> Result<String, FetchError> {
    let url = parse_source(source)?;
    debug!("Fetching text from {}", url);

    let resp = client.get(url).send().await?;
    let status = resp.status();
    if !status.is_success() {
        return Err(FetchError::Status(status.as_u16()));
    }
    Ok(resp.text().await?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_non_http_sources() {
        assert!(matches!(
            parse_source("file:///etc/passwd"),
            Err(FetchError::InvalidSource { .. })
        ));
        assert!(matches!(
            parse_source("not a url"),
            Err(FetchError::InvalidSource { .. })
        ));
        assert!(parse_source("https://docs.google.com/spreadsheets/d/e/x/pub?output=csv").is_ok());
    }

    #[tokio::test]
    async fn invalid_source_fails_before_network() {
        let client = Client::new();
        let err = fetch_text(&client, "ftp://example.com/data.csv")
            .await
            .unwrap_err();
        assert!(matches!(err, FetchError::InvalidSource { .. }));
    }
}
