//! Response handling: JSON parsing or streamed file output.

use exr_types::MediaType;
use futures::TryStreamExt;
use serde::de::DeserializeOwned;
use std::ffi::OsString;
use std::io;
use std::path::{Path, PathBuf};
use tempfile::{Builder, TempPath};
use tokio::io::AsyncWriteExt;
use tokio::{fs, task};
use tracing::{info, warn};

use crate::{Body, ExrError};

/// How a response body is consumed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResponseMode {
    /// Collect the body and parse it as JSON.
    Json,
    /// Stream the body to a file.
    Stream,
}

impl ResponseMode {
    /// Selects the mode for an `Accept` value.
    ///
    /// # Errors
    ///
    /// Returns [`ExrError::UnsupportedFormat`] for any value other than the
    /// four known MIME strings.
    pub fn for_accept(accept: &str) -> Result<Self, ExrError> {
        MediaType::from_mime(accept)
            .map(Self::for_media_type)
            .ok_or_else(|| ExrError::UnsupportedFormat(accept.to_string()))
    }

    /// Selects the mode for a media type.
    #[must_use]
    pub const fn for_media_type(media_type: MediaType) -> Self {
        if media_type.is_binary() {
            Self::Stream
        } else {
            Self::Json
        }
    }
}

/// Result of a rates request.
#[derive(Debug, Clone, PartialEq)]
pub enum Payload<T> {
    /// Parsed JSON envelope.
    Json(T),
    /// Binary body written to `path`.
    Saved {
        /// Destination file.
        path: PathBuf,
        /// Number of bytes written.
        bytes: u64,
    },
}

impl<T> Payload<T> {
    /// Returns the parsed envelope, if the response was JSON.
    #[must_use]
    pub fn into_json(self) -> Option<T> {
        match self {
            Self::Json(data) => Some(data),
            Self::Saved { .. } => None,
        }
    }

    /// Returns a reference to the parsed envelope, if the response was JSON.
    #[must_use]
    pub const fn as_json(&self) -> Option<&T> {
        match self {
            Self::Json(data) => Some(data),
            Self::Saved { .. } => None,
        }
    }

    /// Returns the destination file, if the body was saved.
    #[must_use]
    pub fn saved_path(&self) -> Option<&Path> {
        match self {
            Self::Json(_) => None,
            Self::Saved { path, .. } => Some(path),
        }
    }
}

/// Consumes `body` according to `mode`.
///
/// # Errors
///
/// Returns [`ExrError::MissingOutputPath`] in stream mode without a path, or
/// any error raised while reading, parsing or writing the body.
pub async fn handle<T: DeserializeOwned>(
    body: Body,
    mode: ResponseMode,
    path: Option<&Path>,
) -> Result<Payload<T>, ExrError> {
    match mode {
        ResponseMode::Json => read_json(body).await.map(Payload::Json),
        ResponseMode::Stream => {
            let path = path.ok_or(ExrError::MissingOutputPath)?;
            let bytes = save_to_file(body, path).await?;
            Ok(Payload::Saved {
                path: path.to_path_buf(),
                bytes,
            })
        }
    }
}

/// Collects `body` and parses it as JSON.
///
/// # Errors
///
/// Returns an error if the stream fails or the JSON does not match `T`.
pub async fn read_json<T: DeserializeOwned>(mut body: Body) -> Result<T, ExrError> {
    let mut buf = Vec::new();
    while let Some(chunk) = body.try_next().await? {
        buf.extend_from_slice(&chunk);
    }
    Ok(serde_json::from_slice(&buf)?)
}

/// Streams `body` into `path`, returning the number of bytes written.
///
/// Chunks go to a uniquely named `.part` file next to `path`, which is
/// synced and then renamed over `path` once the body is complete. On failure
/// the partial file is removed and `path` is left untouched.
///
/// # Errors
///
/// Returns an error if the stream fails or the file cannot be written.
pub async fn save_to_file(body: Body, path: &Path) -> Result<u64, ExrError> {
    let (file, part) = create_part(path).await?;

    let result = match write_part(body, file).await {
        Ok(bytes) => persist(part, path).await.map(|()| bytes),
        Err(e) => {
            if let Err(cleanup) = part.close() {
                warn!(error = %cleanup, "could not remove partial file");
            }
            Err(e)
        }
    };

    match result {
        Ok(bytes) => {
            info!(path = %path.display(), bytes, "saved response body");
            Ok(bytes)
        }
        Err(e) => {
            warn!(path = %path.display(), error = %e, "discarded partial response body");
            Err(e)
        }
    }
}

async fn create_part(path: &Path) -> Result<(fs::File, TempPath), ExrError> {
    let dir = path
        .parent()
        .filter(|dir| !dir.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."))
        .to_path_buf();
    let mut prefix = OsString::from(".");
    prefix.push(path.file_name().unwrap_or_default());
    prefix.push(".");

    let (file, part) = task::spawn_blocking(move || {
        Builder::new()
            .prefix(&prefix)
            .suffix(".part")
            .tempfile_in(dir)
    })
    .await
    .map_err(io::Error::other)??
    .into_parts();

    Ok((fs::File::from_std(file), part))
}

async fn write_part(mut body: Body, mut file: fs::File) -> Result<u64, ExrError> {
    let mut written = 0u64;
    while let Some(chunk) = body.try_next().await? {
        file.write_all(&chunk).await?;
        written += chunk.len() as u64;
    }
    file.flush().await?;
    file.sync_all().await?;
    Ok(written)
}

async fn persist(part: TempPath, path: &Path) -> Result<(), ExrError> {
    let path = path.to_path_buf();
    // A failed rename hands the part back; dropping it removes the file
    task::spawn_blocking(move || part.persist(path).map_err(|e| e.error))
        .await
        .map_err(io::Error::other)??;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use bytes::Bytes;
    use exr_types::LatestRates;
    use futures::stream;
    use tempfile::TempDir;

    fn body(chunks: Vec<Result<&'static str, ExrError>>) -> Body {
        Box::pin(stream::iter(
            chunks
                .into_iter()
                .map(|c| c.map(|s| Bytes::from_static(s.as_bytes()))),
        ))
    }

    const LATEST: &str = r#"{"resultsInfo":{"totalRecords":1,"timezoneReference":"CET"},
        "latestRates":[{"country":"UNITED STATES","currency":"US Dollar","isoCode":"USD",
        "uicCode":"001","eurRate":"1.1795","usdRate":"1","usdExchangeConvention":"",
        "usdExchangeConventionCode":"","referenceDate":"2020-10-22"}]}"#;

    #[test]
    fn test_mode_for_accept() {
        assert_eq!(
            ResponseMode::for_accept("application/json").unwrap(),
            ResponseMode::Json
        );
        for mime in ["text/csv", "application/pdf", "application/vnd.ms-excel"] {
            assert_eq!(ResponseMode::for_accept(mime).unwrap(), ResponseMode::Stream);
        }
        assert!(matches!(
            ResponseMode::for_accept("text/html"),
            Err(ExrError::UnsupportedFormat(f)) if f == "text/html"
        ));
    }

    fn entries(dir: &TempDir) -> Vec<PathBuf> {
        std::fs::read_dir(dir.path())
            .unwrap()
            .map(|entry| entry.unwrap().path())
            .collect()
    }

    #[tokio::test]
    async fn test_json_across_chunks() {
        let (head, tail) = LATEST.split_at(40);
        let payload: Payload<LatestRates> =
            handle(body(vec![Ok(head), Ok(tail)]), ResponseMode::Json, None)
                .await
                .unwrap();

        let rates = payload.into_json().unwrap();
        assert_eq!(rates.results_info.total_records, 1);
        approx::assert_relative_eq!(rates.latest_rates[0].eur_rate, 1.1795);
        approx::assert_relative_eq!(rates.latest_rates[0].usd_rate, 1.0);
    }

    #[tokio::test]
    async fn test_stream_needs_path() {
        let result: Result<Payload<LatestRates>, _> =
            handle(body(vec![Ok("a,b")]), ResponseMode::Stream, None).await;
        assert!(matches!(result, Err(ExrError::MissingOutputPath)));
    }

    #[tokio::test]
    async fn test_stream_writes_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("latest.csv");

        let payload: Payload<LatestRates> = handle(
            body(vec![Ok("iso,rate\n"), Ok("USD,1.1795\n")]),
            ResponseMode::Stream,
            Some(&path),
        )
        .await
        .unwrap();

        assert_eq!(payload.saved_path(), Some(path.as_path()));
        assert!(matches!(payload, Payload::Saved { bytes: 20, .. }));
        assert_eq!(
            std::fs::read_to_string(&path).unwrap(),
            "iso,rate\nUSD,1.1795\n"
        );
        assert_eq!(entries(&dir), [path.clone()]);
    }

    #[tokio::test]
    async fn test_failed_stream_leaves_nothing() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("latest.pdf");

        let result = save_to_file(
            body(vec![Ok("%PDF-1.4"), Err(ExrError::Status { status: 502 })]),
            &path,
        )
        .await;

        assert!(matches!(result, Err(ExrError::Status { status: 502 })));
        assert!(!path.exists());
        assert!(entries(&dir).is_empty());
    }

    #[tokio::test]
    async fn test_concurrent_saves_to_one_destination() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("latest.csv");

        let (first, second) = tokio::join!(
            save_to_file(body(vec![Ok("iso,rate\n"), Ok("USD,1.1795\n")]), &path),
            save_to_file(body(vec![Ok("iso,rate\n"), Ok("CHF,1.0733\n")]), &path),
        );

        assert_eq!(first.unwrap(), 20);
        assert_eq!(second.unwrap(), 20);
        let saved = std::fs::read_to_string(&path).unwrap();
        assert!(
            saved == "iso,rate\nUSD,1.1795\n" || saved == "iso,rate\nCHF,1.0733\n",
            "interleaved body: {saved:?}"
        );
        assert_eq!(entries(&dir), [path.clone()]);
    }

    #[tokio::test]
    async fn test_part_file_is_a_hidden_sibling() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("rates.xls");
        let (_, part) = create_part(&path).await.unwrap();
        assert_eq!(part.parent(), Some(dir.path()));
        let name = part.file_name().unwrap().to_string_lossy().into_owned();
        assert!(name.starts_with(".rates.xls.") && name.ends_with(".part"), "{name}");
    }

    #[tokio::test]
    async fn test_malformed_json() {
        let result: Result<LatestRates, _> = read_json(body(vec![Ok("{\"resultsInfo\":")])).await;
        assert!(matches!(result, Err(ExrError::Json(_))));
    }
}
