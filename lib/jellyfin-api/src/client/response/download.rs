use std::io;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use http::HeaderMap;
use http::header::CONTENT_DISPOSITION;
use regex::Regex;
use tempfile::{TempDir, TempPath};
use tokio::io::AsyncWriteExt;
use tracing::{debug, warn};

use crate::client::error::ApiClientError;
use crate::client::transport::ResponseBody;

/// Regular expression extracting the file name of a `Content-Disposition` header.
static FILENAME: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"filename=['"]?(?<name>[^'";\s]+)['"]?"#).expect("a valid regex")
});

const DIRECTORY_PREFIX: &str = "jellyfin-api-";
const FILE_PREFIX: &str = "download-";

/// A response body stored in a temporary location owned by the caller.
///
/// The file (and its directory, when the server named the file) is deleted when the handle
/// is dropped, unless [`keep`](Self::keep) or [`persist`](Self::persist) is called first.
#[derive(Debug)]
pub struct DownloadedFile {
    path: PathBuf,
    guard: TempGuard,
}

#[derive(Debug)]
enum TempGuard {
    Directory(TempDir),
    File(TempPath),
}

impl DownloadedFile {
    /// The location of the downloaded file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The file name: the one sent by the server, or a generated one.
    pub fn file_name(&self) -> Option<&str> {
        self.path.file_name().and_then(|name| name.to_str())
    }

    /// Reads the whole file.
    ///
    /// # Errors
    ///
    /// Fails when the file cannot be read.
    pub async fn read(&self) -> io::Result<Vec<u8>> {
        tokio::fs::read(&self.path).await
    }

    /// Disables the automatic cleanup and returns the file location.
    ///
    /// # Errors
    ///
    /// Fails when the temporary file cannot be detached from its guard.
    pub fn keep(self) -> io::Result<PathBuf> {
        let Self { path, guard } = self;
        match guard {
            TempGuard::Directory(dir) => {
                let _dir = dir.keep();
            }
            TempGuard::File(file) => {
                file.keep().map_err(|err| err.error)?;
            }
        }
        Ok(path)
    }

    /// Copies the file to `destination`, then removes the temporary copy.
    ///
    /// # Errors
    ///
    /// Fails when the copy fails; the temporary file is still removed.
    pub async fn persist(self, destination: impl AsRef<Path>) -> io::Result<PathBuf> {
        let destination = destination.as_ref().to_path_buf();
        tokio::fs::copy(&self.path, &destination).await?;
        Ok(destination)
    }
}

/// Extracts a safe file name from the `Content-Disposition` header.
///
/// Only the final path component is kept, so a server cannot escape the temporary directory.
pub(in crate::client) fn content_disposition_filename(headers: &HeaderMap) -> Option<String> {
    let header = headers.get(CONTENT_DISPOSITION)?.to_str().ok()?;
    let name = FILENAME.captures(header)?.name("name")?.as_str();

    let file_name = Path::new(name).file_name()?.to_str()?;
    if file_name != name {
        warn!(%name, %file_name, "ignoring the directories of the announced file name");
    }
    Some(file_name.to_string())
}

/// Streams the body into a fresh temporary file.
pub(in crate::client) async fn download(
    operation_id: &'static str,
    headers: &HeaderMap,
    mut body: ResponseBody,
) -> Result<DownloadedFile, ApiClientError> {
    let io_error = |source: io::Error| ApiClientError::DownloadFailure {
        operation_id,
        source,
    };

    let file = create_target(headers).map_err(io_error)?;
    let mut output = tokio::fs::File::create(&file.path)
        .await
        .map_err(io_error)?;

    let mut written = 0_usize;
    while let Some(chunk) = body
        .chunk()
        .await
        .map_err(|source| ApiClientError::transport(operation_id, source))?
    {
        output.write_all(&chunk).await.map_err(io_error)?;
        written += chunk.len();
    }
    output.flush().await.map_err(io_error)?;

    debug!(operation_id, path = %file.path.display(), written, "downloaded file");
    Ok(file)
}

fn create_target(headers: &HeaderMap) -> io::Result<DownloadedFile> {
    if let Some(name) = content_disposition_filename(headers) {
        let dir = tempfile::Builder::new()
            .prefix(DIRECTORY_PREFIX)
            .tempdir()?;
        let path = dir.path().join(name);
        Ok(DownloadedFile {
            path,
            guard: TempGuard::Directory(dir),
        })
    } else {
        let file = tempfile::Builder::new()
            .prefix(FILE_PREFIX)
            .tempfile()?
            .into_temp_path();
        Ok(DownloadedFile {
            path: file.to_path_buf(),
            guard: TempGuard::File(file),
        })
    }
}

#[cfg(test)]
mod tests {
    use http::HeaderValue;
    use rstest::rstest;

    use super::*;

    fn with_disposition(value: &'static str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_DISPOSITION, HeaderValue::from_static(value));
        headers
    }

    #[rstest]
    #[case::quoted(r#"attachment; filename="clip.ts""#, Some("clip.ts"))]
    #[case::single_quoted("attachment; filename='clip.ts'", Some("clip.ts"))]
    #[case::bare("attachment; filename=clip.ts", Some("clip.ts"))]
    #[case::followed_by_parameter("attachment; filename=clip.ts; size=3", Some("clip.ts"))]
    #[case::with_directories(r#"attachment; filename="../../etc/passwd""#, Some("passwd"))]
    #[case::parent_only(r#"attachment; filename="..""#, None)]
    #[case::inline("inline", None)]
    fn test_content_disposition_filename(#[case] header: &'static str, #[case] expected: Option<&str>) {
        let name = content_disposition_filename(&with_disposition(header));

        assert_eq!(name.as_deref(), expected);
    }

    #[test]
    fn test_no_header_no_filename() {
        assert_eq!(content_disposition_filename(&HeaderMap::new()), None);
    }

    #[tokio::test]
    async fn test_download_named_file_in_fresh_directory() {
        let headers = with_disposition(r#"attachment; filename="clip.ts""#);

        let file = download("getLiveStreamFile", &headers, ResponseBody::from_bytes("payload"))
            .await
            .expect("should download");

        assert_eq!(file.file_name(), Some("clip.ts"));
        let dir = file.path().parent().expect("has a parent").to_path_buf();
        assert!(
            dir.file_name()
                .and_then(|it| it.to_str())
                .is_some_and(|it| it.starts_with(DIRECTORY_PREFIX))
        );
        assert_eq!(file.read().await.expect("readable"), b"payload");

        drop(file);
        assert!(!dir.exists());
    }

    #[tokio::test]
    async fn test_download_generated_file() {
        let file = download("getLiveRecordingFile", &HeaderMap::new(), ResponseBody::from_bytes("data"))
            .await
            .expect("should download");

        assert!(file.file_name().is_some_and(|it| it.starts_with(FILE_PREFIX)));
        let path = file.path().to_path_buf();
        assert!(path.exists());

        drop(file);
        assert!(!path.exists());
    }

    #[tokio::test]
    async fn test_keep_disables_cleanup() {
        let file = download("getLiveRecordingFile", &HeaderMap::new(), ResponseBody::empty())
            .await
            .expect("should download");

        let path = file.keep().expect("should keep");

        assert!(path.exists());
        std::fs::remove_file(&path).expect("cleanup");
    }

    #[tokio::test]
    async fn test_persist_copies_and_cleans_up() {
        let target = tempfile::tempdir().expect("temp dir");
        let headers = with_disposition("attachment; filename=countries.json");
        let file = download("getSchedulesDirectCountries", &headers, ResponseBody::from_bytes("[]"))
            .await
            .expect("should download");
        let temporary = file.path().to_path_buf();

        let persisted = file
            .persist(target.path().join("countries.json"))
            .await
            .expect("should persist");

        assert_eq!(std::fs::read(&persisted).expect("readable"), b"[]");
        assert!(!temporary.exists());
    }
}
