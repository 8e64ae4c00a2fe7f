//! Location of a day's INPE feed and, with the `api` feature, loading it.

#[cfg(feature = "api")]
use crate::{
    dataset::HotspotDataset,
    error::{FeedError, Result},
    selection::UserDateSelection,
};
#[cfg(feature = "api")]
use log::{debug, info};
#[cfg(feature = "api")]
use reqwest::{Client, StatusCode};
#[cfg(feature = "api")]
use std::path::PathBuf;

/// INPE open-data download endpoint for the 24 hour hotspot files.
pub const FEED_URL_PREFIX: &str = "https://queimadas.dgi.inpe.br/home/downloadfile?path=%2Fapp%2Fapi%2Fdata%2Fdados_abertos%2Ffocos%2FDiario%2F";

/// File name of the daily feed for a `YYYYMMDD` token.
pub fn feed_file_name(date_str: &str) -> String {
    format!("focos_abertos_24h_{}.csv", date_str)
}

/// Full download URL of the daily feed for a `YYYYMMDD` token.
pub fn feed_url(date_str: &str) -> String {
    feed_url_with_prefix(FEED_URL_PREFIX, date_str)
}

/// Download URL of the daily feed under another endpoint or mirror.
pub fn feed_url_with_prefix(prefix: &str, date_str: &str) -> String {
    format!("{}{}", prefix, feed_file_name(date_str))
}

/// Where daily feeds are read from.
#[cfg(feature = "api")]
#[derive(Debug, Clone)]
pub enum FeedSource {
    /// HTTP endpoint; file names are appended to `url_prefix`
    Remote { client: Client, url_prefix: String },
    /// A directory holding files named like the remote ones
    Directory(PathBuf),
}

#[cfg(feature = "api")]
impl FeedSource {
    /// Remote source with a default client. No timeout and no retry.
    pub fn remote() -> Self {
        FeedSource::remote_with_prefix(FEED_URL_PREFIX)
    }

    /// Remote source serving the same file names under `url_prefix`.
    pub fn remote_with_prefix(url_prefix: impl Into<String>) -> Self {
        FeedSource::Remote {
            client: Client::new(),
            url_prefix: url_prefix.into(),
        }
    }

    /// Fetch the raw CSV body for a `YYYYMMDD` token.
    pub async fn fetch(&self, date_str: &str) -> Result<String> {
        match self {
            FeedSource::Remote { client, url_prefix } => {
                let url = feed_url_with_prefix(url_prefix, date_str);
                debug!("GET {}", url);
                let response = client.get(&url).send().await?;
                if response.status() != StatusCode::OK {
                    return Err(FeedError::BadStatus {
                        status: response.status().as_u16(),
                        url,
                    });
                }
                Ok(response.text().await?)
            }
            FeedSource::Directory(dir) => {
                let path = dir.join(feed_file_name(date_str));
                debug!("Reading {}", path.display());
                tokio::fs::read_to_string(&path)
                    .await
                    .map_err(|source| FeedError::LocalFeed { path, source })
            }
        }
    }

    /// Load and filter the dataset for a selection.
    pub async fn load_dataset(&self, selection: &UserDateSelection) -> Result<HotspotDataset> {
        let (selected_date, date_str) = selection.resolve();
        info!("Loading hotspot feed {}", feed_file_name(&date_str));
        let body = self.fetch(&date_str).await?;
        HotspotDataset::from_feed(&body, selected_date)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_feed_url() {
        assert_eq!(
            feed_url("20240305"),
            "https://queimadas.dgi.inpe.br/home/downloadfile?path=%2Fapp%2Fapi%2Fdata%2Fdados_abertos%2Ffocos%2FDiario%2Ffocos_abertos_24h_20240305.csv"
        );
    }

    #[test]
    fn test_feed_url_with_prefix() {
        assert_eq!(
            feed_url_with_prefix("http://127.0.0.1:8080/feeds/", "20240305"),
            "http://127.0.0.1:8080/feeds/focos_abertos_24h_20240305.csv"
        );
    }

    #[test]
    fn test_feed_file_name() {
        assert_eq!(feed_file_name("20231231"), "focos_abertos_24h_20231231.csv");
    }

    #[cfg(feature = "api")]
    mod api {
        use super::super::*;
        use axum::{routing::get, Router};
        use chrono::NaiveDate;
        use std::path::PathBuf;

        static SAMPLE_FEED: &str = include_str!("../../fixtures/focos_abertos_24h_20240305.csv");

        fn fixtures_dir() -> PathBuf {
            PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../fixtures")
        }

        fn march_5() -> UserDateSelection {
            UserDateSelection::new(NaiveDate::from_ymd_opt(2024, 3, 5).unwrap())
        }

        /// Local HTTP server holding only the 2024-03-05 feed; other paths are 404.
        async fn local_feed_server() -> String {
            let app = Router::new().route(
                "/feeds/focos_abertos_24h_20240305.csv",
                get(|| async { SAMPLE_FEED }),
            );
            let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
            let addr = listener.local_addr().unwrap();
            tokio::spawn(async move {
                axum::serve(listener, app).await.unwrap();
            });
            format!("http://{}/feeds/", addr)
        }

        #[test]
        fn test_remote_uses_inpe_endpoint() {
            match FeedSource::remote() {
                FeedSource::Remote { url_prefix, .. } => assert_eq!(url_prefix, FEED_URL_PREFIX),
                other => panic!("expected remote source, got {:?}", other),
            }
        }

        #[tokio::test]
        async fn test_remote_source_loads_dataset() {
            let source = FeedSource::remote_with_prefix(local_feed_server().await);
            let dataset = source.load_dataset(&march_5()).await.unwrap();
            assert_eq!(dataset.len(), 6);
            assert_eq!(dataset.records()[0].municipality, "SORRISO");
        }

        #[tokio::test]
        async fn test_remote_missing_day_is_bad_status() {
            let prefix = local_feed_server().await;
            let source = FeedSource::remote_with_prefix(prefix.clone());
            let selection = UserDateSelection::new(NaiveDate::from_ymd_opt(2024, 3, 1).unwrap());
            match source.load_dataset(&selection).await {
                Err(FeedError::BadStatus { status, url }) => {
                    assert_eq!(status, 404);
                    assert_eq!(url, format!("{}focos_abertos_24h_20240301.csv", prefix));
                }
                other => panic!("expected bad status, got {:?}", other),
            }
        }

        #[tokio::test]
        async fn test_remote_unreachable_is_http_error() {
            let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
            let addr = listener.local_addr().unwrap();
            drop(listener);
            let source = FeedSource::remote_with_prefix(format!("http://{}/feeds/", addr));
            match source.fetch("20240305").await {
                Err(FeedError::HttpRequest(_)) => {}
                other => panic!("expected http error, got {:?}", other),
            }
        }

        #[tokio::test]
        async fn test_directory_source_loads_dataset() {
            let source = FeedSource::Directory(fixtures_dir());
            let selection = UserDateSelection::new(NaiveDate::from_ymd_opt(2024, 3, 5).unwrap());
            let dataset = source.load_dataset(&selection).await.unwrap();
            assert_eq!(dataset.len(), 6);
        }

        #[tokio::test]
        async fn test_directory_source_missing_day() {
            let source = FeedSource::Directory(fixtures_dir());
            let selection = UserDateSelection::new(NaiveDate::from_ymd_opt(1999, 1, 1).unwrap());
            match source.load_dataset(&selection).await {
                Err(FeedError::LocalFeed { path, .. }) => {
                    assert!(path.ends_with("focos_abertos_24h_19990101.csv"))
                }
                other => panic!("expected local feed error, got {:?}", other),
            }
        }
    }
}
