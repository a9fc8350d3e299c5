//! Data provisioning: resolve a remote CSV source to a dataset, falling back to
//! a hardcoded copy on any failure.

pub mod cache;
pub mod fetch;

use crate::dataset::{csv::parse_dataset, TabularDataset};
use crate::error::FetchError;
use reqwest::Client;
use serde::Serialize;
use std::sync::Arc;
use tracing::{debug, info, instrument, warn};

pub use cache::DatasetCache;

/// Where a resolved dataset came from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Origin {
    Remote,
    Fallback { reason: String },
}

impl Origin {
    pub fn is_fallback(&self) -> bool {
        matches!(self, Origin::Fallback { .. })
    }
}

/// A resolved dataset plus its origin.
#[derive(Debug, Clone)]
pub struct Resolution {
    pub dataset: Arc<TabularDataset>,
    pub origin: Origin,
}

/// A remote source paired with the dataset used whenever it cannot be loaded.
#[derive(Clone)]
pub struct FallbackPolicy {
    pub name: &'static str,
    pub source: String,
    pub fallback: fn() -> TabularDataset,
}

impl std::fmt::Debug for FallbackPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FallbackPolicy")
            .field("name", &self.name)
            .field("source", &self.source)
            .finish()
    }
}

/// Map a fetch result onto the final resolution.
///
/// The remote dataset wins only if it parsed, has rows, and carries every
/// column of the fallback's schema. Otherwise the fallback is authoritative.
pub fn settle<F>(
    source: &str,
    fetched: Result<TabularDataset, FetchError>,
    fallback: F,
) -> Resolution
where
    F: FnOnce() -> TabularDataset,
{
    let expected = fallback();
    let checked = fetched.and_then(|remote| {
        if remote.is_empty() {
            return Err(FetchError::Empty);
        }
        let missing = remote.missing_columns(&expected);
        if missing.is_empty() {
            Ok(remote)
        } else {
            Err(FetchError::SchemaMismatch { missing })
        }
    });

    match checked {
        Ok(remote) => {
            info!(source, rows = remote.row_count(), "loaded remote dataset");
            Resolution {
                dataset: Arc::new(remote),
                origin: Origin::Remote,
            }
        }
        Err(e) => {
            warn!(source, error = %e, "remote dataset unavailable; using fallback");
            Resolution {
                dataset: Arc::new(expected),
                origin: Origin::Fallback {
                    reason: e.to_string(),
                },
            }
        }
    }
}

/// Resolves datasets through a shared TTL cache.
#[derive(Clone)]
pub struct Provisioner {
    client: Client,
    cache: Arc<DatasetCache>,
}

impl Provisioner {
    pub fn new(client: Client, cache: Arc<DatasetCache>) -> Self {
        Self { client, cache }
    }

    pub fn cache(&self) -> &DatasetCache {
        &self.cache
    }

    /// Single fetch + parse attempt, with the failure kept explicit.
    pub async fn try_fetch(&self, source: &str) -> Result<TabularDataset, FetchError> {
        let body = fetch::fetch_text(&self.client, source).await?;
        parse_dataset(&body)
    }

    /// Resolve `source`, never failing; see [`settle`].
    pub async fn resolve<F>(&self, source: &str, fallback: F) -> Arc<TabularDataset>
    where
        F: FnOnce() -> TabularDataset,
    {
        self.resolve_traced(source, fallback).await.dataset
    }

    #[instrument(level = "debug", skip(self, fallback))]
    pub async fn resolve_traced<F>(&self, source: &str, fallback: F) -> Resolution
    where
        F: FnOnce() -> TabularDataset,
    {
        if let Some(hit) = self.cache.get(source) {
            debug!(source, fallback = hit.origin.is_fallback(), "cache hit");
            return hit;
        }

        let fetched = self.try_fetch(source).await;
        let resolution = settle(source, fetched, fallback);
        self.cache.insert(source, resolution.clone());
        resolution
    }

    pub async fn resolve_policy(&self, policy: &FallbackPolicy) -> Resolution {
        debug!(dataset = policy.name, "resolving");
        self.resolve_traced(&policy.source, policy.fallback).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog;
    use std::{
        net::SocketAddr,
        sync::atomic::{AtomicUsize, Ordering},
        time::Duration,
    };
    use warp::{http::StatusCode, Filter};

    fn provisioner() -> Provisioner {
        let _ = tracing_subscriber::fmt()
            .with_env_filter("careerboard=debug")
            .with_test_writer()
            .try_init();
        Provisioner::new(Client::new(), Arc::new(DatasetCache::new(Duration::from_secs(300))))
    }

    /// Serve `body` with `status` at `/data.csv`, counting hits.
    fn serve(body: &'static str, status: StatusCode) -> (SocketAddr, Arc<AtomicUsize>) {
        let hits = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&hits);
        let route = warp::path("data.csv").map(move || {
            counter.fetch_add(1, Ordering::SeqCst);
            warp::reply::with_status(body, status)
        });
        let (addr, server) = warp::serve(route).bind_ephemeral(([127, 0, 0, 1], 0));
        tokio::spawn(server);
        (addr, hits)
    }

    fn url(addr: SocketAddr) -> String {
        format!("http://{}/data.csv", addr)
    }

    const REMOTE_CERTS: &str = "\u{feff}\"Certification\",Issuer,Year,Domain,Domain\n\
        PMP,PMI,2027,PM,dup\n\
        Scrum Master,Scrum Alliance,2026,PM/Agile,dup\n";

    #[test]
    fn settle_error_uses_fallback() {
        let res = settle("src", Err(FetchError::Status(503)), catalog::sample_certifications);
        assert!(res.origin.is_fallback());
        assert_eq!(res.dataset.row_count(), 16);
        assert_eq!(res.dataset.columns(), catalog::sample_certifications().columns());
    }

    #[test]
    fn settle_empty_remote_uses_fallback() {
        let empty = TabularDataset::literal(&["Certification", "Issuer", "Year", "Domain"], vec![]);
        let res = settle("src", Ok(empty), catalog::sample_certifications);
        assert_eq!(
            res.origin,
            Origin::Fallback {
                reason: FetchError::Empty.to_string()
            }
        );
        assert!(!res.dataset.is_empty());
    }

    #[test]
    fn settle_schema_mismatch_uses_fallback() {
        let other = TabularDataset::literal(&["Name"], vec![vec!["x".into()]]);
        let res = settle("src", Ok(other), catalog::sample_core_pm);
        match res.origin {
            Origin::Fallback { reason } => assert!(reason.contains("Credential")),
            Origin::Remote => panic!("expected fallback"),
        }
        assert_eq!(res.dataset.row_count(), 6);
    }

    #[test]
    fn settle_valid_remote_wins() {
        let remote = parse_dataset(REMOTE_CERTS).unwrap();
        let res = settle("src", Ok(remote), catalog::sample_certifications);
        assert_eq!(res.origin, Origin::Remote);
        assert_eq!(res.dataset.row_count(), 2);
    }

    #[tokio::test]
    async fn resolves_remote_csv() {
        let (addr, _) = serve(REMOTE_CERTS, StatusCode::OK);
        let res = provisioner()
            .resolve_traced(&url(addr), catalog::sample_certifications)
            .await;
        assert_eq!(res.origin, Origin::Remote);
        assert_eq!(res.dataset.columns(), &["Certification", "Issuer", "Year", "Domain"]);
        assert_eq!(res.dataset.text(0, "Domain").as_deref(), Some("PM"));
    }

    #[tokio::test]
    async fn server_error_falls_back() {
        let (addr, _) = serve("oops", StatusCode::INTERNAL_SERVER_ERROR);
        let ds = provisioner()
            .resolve(&url(addr), catalog::sample_certifications)
            .await;
        assert_eq!(*ds, catalog::sample_certifications());
    }

    #[tokio::test]
    async fn header_only_body_falls_back() {
        let (addr, _) = serve("Certification,Issuer,Year,Domain\n", StatusCode::OK);
        let res = provisioner()
            .resolve_traced(&url(addr), catalog::sample_certifications)
            .await;
        assert!(res.origin.is_fallback());
        assert_eq!(res.dataset.row_count(), 16);
    }

    #[tokio::test]
    async fn unreachable_host_falls_back() {
        let port = {
            let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
            listener.local_addr().unwrap().port()
        };
        let source = format!("http://127.0.0.1:{}/data.csv", port);
        let p = provisioner();
        let err = p.try_fetch(&source).await.unwrap_err();
        assert!(matches!(err, FetchError::Transport(_)));

        let ds = p.resolve(&source, catalog::sample_core_pm).await;
        assert_eq!(*ds, catalog::sample_core_pm());
    }

    #[tokio::test]
    async fn cached_within_ttl() {
        let (addr, hits) = serve(REMOTE_CERTS, StatusCode::OK);
        let p = provisioner();
        let first = p.resolve(&url(addr), catalog::sample_certifications).await;
        let second = p.resolve(&url(addr), catalog::sample_certifications).await;
        assert_eq!(hits.load(Ordering::SeqCst), 1);
        assert!(Arc::ptr_eq(&first, &second));
    }

    #[tokio::test]
    async fn refetches_after_ttl() {
        let (addr, hits) = serve(REMOTE_CERTS, StatusCode::OK);
        let p = Provisioner::new(Client::new(), Arc::new(DatasetCache::new(Duration::from_millis(1))));
        let first = p.resolve(&url(addr), catalog::sample_certifications).await;
        tokio::time::sleep(Duration::from_millis(20)).await;
        let second = p.resolve(&url(addr), catalog::sample_certifications).await;
        assert_eq!(hits.load(Ordering::SeqCst), 2);
        assert!(!Arc::ptr_eq(&first, &second));
        assert_eq!(*first, *second);
    }

    #[tokio::test]
    async fn fallback_is_cached_too() {
        let (addr, hits) = serve("nope", StatusCode::NOT_FOUND);
        let p = provisioner();
        for _ in 0..3 {
            let res = p.resolve_traced(&url(addr), catalog::sample_certifications).await;
            assert!(res.origin.is_fallback());
        }
        assert_eq!(hits.load(Ordering::SeqCst), 1);
        assert_eq!(p.cache().len(), 1);
    }

    #[tokio::test]
    async fn policy_resolution_uses_policy_fallback() {
        let policy = FallbackPolicy {
            name: "Core PM Credentials",
            source: "not-a-url".to_string(),
            fallback: catalog::sample_core_pm,
        };
        let res = provisioner().resolve_policy(&policy).await;
        match res.origin {
            Origin::Fallback { reason } => assert!(reason.contains("not-a-url")),
            Origin::Remote => panic!("expected fallback"),
        }
        assert_eq!(res.dataset.row_count(), 6);
    }
}
