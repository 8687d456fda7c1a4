//! Transports for background assets.

use std::future::Future;
use std::borrow::Cow;
use std::path::PathBuf;

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD as BASE64_STANDARD;
use url::Url;

use super::MediaError;

/// Loads the raw bytes behind a media URL.
///
/// Fetches are anonymous: no cookies or credentials are attached.
pub trait MediaFetcher {
    fn fetch(&self, url: &str) -> impl Future<Output = Result<Vec<u8>, MediaError>>;
}

impl<T: MediaFetcher> MediaFetcher for &T {
    fn fetch(&self, url: &str) -> impl Future<Output = Result<Vec<u8>, MediaError>> {
        (**self).fetch(url)
    }
}

/// Reads `file://` URLs and plain filesystem paths.
#[derive(Debug, Clone, Default)]
pub struct FsFetcher {
    /// Relative paths resolve against this directory when set.
    pub root: Option<PathBuf>,
}

impl FsFetcher {
    pub fn rooted(root: impl Into<PathBuf>) -> Self {
        Self { root: Some(root.into()) }
    }

    fn path_for(&self, url: &str) -> Result<PathBuf, MediaError> {
        let path = match Url::parse(url) {
            Ok(parsed) if parsed.scheme() == "file" => parsed
                .to_file_path()
                .map_err(|()| MediaError::Unsupported(url.to_string()))?,
            _ => PathBuf::from(url),
        };
        Ok(match &self.root {
            Some(root) if path.is_relative() => root.join(path),
            _ => path,
        })
    }
}

impl MediaFetcher for FsFetcher {
    async fn fetch(&self, url: &str) -> Result<Vec<u8>, MediaError> {
        let path = self.path_for(url)?;
        log::debug!("reading background from {}", path.display());
        tokio::fs::read(&path).await.map_err(|e| MediaError::fetch(url, e))
    }
}

/// Fetches `http://` and `https://` URLs.
#[cfg(feature = "http")]
#[derive(Debug, Clone, Default)]
pub struct HttpFetcher {
    client: reqwest::Client,
}

#[cfg(feature = "http")]
impl HttpFetcher {
    pub fn new(client: reqwest::Client) -> Self {
        Self { client }
    }
}

#[cfg(feature = "http")]
impl MediaFetcher for HttpFetcher {
    async fn fetch(&self, url: &str) -> Result<Vec<u8>, MediaError> {
        log::debug!("fetching background from {url}");
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| MediaError::fetch(url, e))?
            .error_for_status()
            .map_err(|e| MediaError::fetch(url, e))?;
        let bytes = response.bytes().await.map_err(|e| MediaError::fetch(url, e))?;
        Ok(bytes.to_vec())
    }
}

/// Decodes inline `data:` URLs. Only base64 payloads are accepted.
#[derive(Debug, Copy, Clone, Default)]
pub struct DataFetcher;

impl DataFetcher {
    fn payload(url: &str) -> Result<Vec<u8>, MediaError> {
        let rest = url
            .strip_prefix("data:")
            .ok_or_else(|| MediaError::Unsupported(url.to_string()))?;
        let (header, data) = rest
            .split_once(',')
            .ok_or_else(|| MediaError::decode(url, "missing `,` in data URL"))?;
        if !header.split(';').any(|param| param.eq_ignore_ascii_case("base64")) {
            return Err(MediaError::Unsupported(url.to_string()));
        }
        BASE64_STANDARD.decode(data.trim()).map_err(|e| MediaError::decode(url, e))
    }
}

impl MediaFetcher for DataFetcher {
    async fn fetch(&self, url: &str) -> Result<Vec<u8>, MediaError> {
        Self::payload(url)
    }
}

/// Where a URL should be loaded from.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
enum Route {
    File,
    Http,
    Data,
    Unsupported,
}

fn route(url: &str) -> Route {
    // Scheme-relative ("//cdn.example.com/bg.png") is remote, never a path.
    if url.starts_with("//") {
        return Route::Http;
    }
    match Url::parse(url) {
        Ok(parsed) => match parsed.scheme() {
            "http" | "https" => Route::Http,
            "file" => Route::File,
            "data" => Route::Data,
            // A drive letter ("C:\bg.png") parses as a one-letter scheme.
            s if s.len() == 1 => Route::File,
            _ => Route::Unsupported,
        },
        Err(_) => Route::File,
    }
}

/// Completes a scheme-relative URL with `https:`.
fn absolute(url: &str) -> Cow<'_, str> {
    if url.starts_with("//") {
        Cow::Owned(format!("https:{url}"))
    } else {
        Cow::Borrowed(url)
    }
}

/// Routes each URL to the filesystem, inline data or HTTP fetcher by scheme.
#[derive(Debug, Clone, Default)]
pub struct SourceFetcher {
    pub fs: FsFetcher,
    pub data: DataFetcher,
    #[cfg(feature = "http")]
    pub http: HttpFetcher,
}

impl SourceFetcher {
    pub fn new(fs: FsFetcher) -> Self {
        Self {
            fs,
            data: DataFetcher,
            #[cfg(feature = "http")]
            http: HttpFetcher::default(),
        }
    }
}

impl MediaFetcher for SourceFetcher {
    async fn fetch(&self, url: &str) -> Result<Vec<u8>, MediaError> {
        match route(url) {
            Route::File => self.fs.fetch(url).await,
            Route::Data => self.data.fetch(url).await,
            #[cfg(feature = "http")]
            Route::Http => self.http.fetch(&absolute(url)).await,
            #[cfg(not(feature = "http"))]
            Route::Http => Err(MediaError::Unsupported(absolute(url).into_owned())),
            Route::Unsupported => Err(MediaError::Unsupported(url.to_string())),
        }
    }
}
