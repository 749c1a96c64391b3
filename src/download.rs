use crate::{extract, response::ResponseExt, Error};

use log::{debug, warn};
use reqwest::{Client, Response};
use std::path::Path;
use tempfile::NamedTempFile;
use tokio::{
    fs,
    time::{timeout, Duration},
};
use tokio_retry::strategy::{jitter, ExponentialBackoff};
use tokio_retry::Retry;
use url::Url;

pub const DEFAULT_WIKI: &str = "https://bulbapedia.bulbagarden.net/wiki/";
pub const DEFAULT_CDN: &str = "https://archives.bulbagarden.net/media/upload/";

pub struct Downloader {
    /// Base of the wiki's `File:` description pages.
    pub wiki: Url,
    /// Base the media fragments found on description pages are resolved against.
    pub cdn: Url,
    /// The HTTP(S) client used for both pages and media.
    pub client: Client,
    pub retries: usize,
    pub timeout: Duration,
}

impl Downloader {
    pub fn new(wiki: Url, cdn: Url, retries: usize, timeout: Duration) -> Result<Self, Error> {
        Ok(Downloader {
            wiki: directory(wiki)?,
            cdn: directory(cdn)?,
            // Bounds each request from connect to the end of the body.
            client: Client::builder()
                .timeout(timeout)
                .build()
                .map_err(Error::Client)?,
            retries,
            timeout,
        })
    }

    /// The CDN base as it appears in page markup, without a scheme.
    pub fn marker(&self) -> &str {
        let url = self.cdn.as_str();
        url.strip_prefix(self.cdn.scheme())
            .and_then(|rest| rest.strip_prefix(':'))
            .unwrap_or(url)
    }

    pub fn page_url(&self, title: &str) -> Result<Url, Error> {
        join(&self.wiki, &format!("File:{title}"))
    }

    /// An empty fragment resolves to the bare CDN base.
    pub fn asset_url(&self, fragment: &str) -> Result<Url, Error> {
        join(&self.cdn, fragment)
    }

    pub async fn fetch_raw_url(&self, url: &Url) -> Result<Response, Error> {
        let retry_strategy = ExponentialBackoff::from_millis(10)
            .map(jitter)
            .take(self.retries);

        let retry_future = Retry::start(retry_strategy, || async {
            self.client.get(url.clone()).send().await
        });
        timeout(self.timeout, retry_future)
            .await
            .map_err(|_| Error::Timeout {
                url: url.clone(),
                after: self.timeout,
            })?
            .map_err(|source| self.network_error(url, source))
    }

    fn network_error(&self, url: &Url, source: reqwest::Error) -> Error {
        if source.is_timeout() {
            Error::Timeout {
                url: url.clone(),
                after: self.timeout,
            }
        } else {
            Error::Network {
                url: url.clone(),
                source,
            }
        }
    }

    /// Fetches the `File:` page for `title` and returns the media fragment it links to.
    pub async fn scrape(&self, title: &str) -> Result<String, Error> {
        let url = self.page_url(title)?;
        let response = self.fetch_raw_url(&url).await?;
        let status = response.status();
        if !status.is_success() {
            warn!("{url} responded with status code {status}");
        }
        if !response.is_html() {
            debug!("{url} responded without content type text/html");
        }
        let text = response
            .text()
            .await
            .map_err(|source| self.network_error(&url, source))?;

        extract::fragment(&text, self.marker())
            .map(str::to_string)
            .map_err(|source| Error::Extract { url, source })
    }

    /// Fetches the media at `fragment`. The body is returned whatever the status or content type.
    pub async fn fetch_asset(&self, fragment: &str) -> Result<Vec<u8>, Error> {
        let url = self.asset_url(fragment)?;
        let response = self.fetch_raw_url(&url).await?;
        let status = response.status();
        if !status.is_success() {
            warn!("{url} responded with status code {status}");
        } else if !response.is_image() {
            warn!("{url} responded without an image content type");
        }
        let body = response
            .bytes()
            .await
            .map_err(|source| self.network_error(&url, source))?;
        Ok(body.to_vec())
    }
}

/// Writes the body to a file, replacing whatever was there.
///
/// The bytes go to a temporary sibling first and are renamed into place, so an
/// interrupted write never leaves a truncated file at `path`.
pub async fn write_bytes<P: AsRef<Path>>(path: P, body: &[u8]) -> Result<(), Error> {
    let path = path.as_ref();
    let write_error = |source| Error::Write {
        path: path.to_path_buf(),
        source,
    };

    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    // Removed on drop unless persisted.
    let partial = NamedTempFile::new_in(dir)
        .map_err(write_error)?
        .into_temp_path();
    fs::write(&partial, body).await.map_err(write_error)?;
    partial
        .persist(path)
        .map_err(|e| write_error(e.error))
}

/// Makes sure the URL path ends in a slash so hrefs land beneath it.
fn directory(mut url: Url) -> Result<Url, Error> {
    if url.cannot_be_a_base() {
        return Err(Error::Base(url));
    }
    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }
    Ok(url)
}

fn join(base: &Url, href: &str) -> Result<Url, Error> {
    let mut url = base.clone();
    // Merge the segments of the base with the segments in href.
    let segments: Vec<&str> = base
        .path_segments()
        .ok_or_else(|| Error::Base(base.clone()))?
        .filter(|segment| !segment.is_empty())
        .chain(href.split('/'))
        .collect();
    url.set_path(&segments.join("/"));
    Ok(url)
}
