mod fetcher;

use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use url::Url;

use fetcher::UReqFetcher;

#[derive(Debug)]
pub enum Response {
    Ok(Vec<u8>),
    Status(u16),
    InvalidBody,
    NetworkError,
}

impl Response {
    pub fn ok(body: Vec<u8>) -> Self {
        Self::Ok(body)
    }

    pub fn status(code: u16) -> Self {
        Self::Status(code)
    }

    pub fn invalid_body() -> Self {
        Self::InvalidBody
    }

    pub fn network_error() -> Self {
        Self::NetworkError
    }
}

pub trait FileFetcher {
    fn fetch(&self, url: &str) -> Response;
}

pub struct Downloader<T: FileFetcher> {
    fetcher: T,
    root: PathBuf,
}

#[derive(Debug, PartialEq)]
pub enum DownloadError {
    InvalidUrl,
    Status(u16),
    NetworkError,
    InvalidBody,
}

impl fmt::Display for DownloadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DownloadError::InvalidUrl => write!(f, "invalid URL"),
            DownloadError::Status(code) => write!(f, "HTTP status {}", code),
            DownloadError::NetworkError => write!(f, "network error"),
            DownloadError::InvalidBody => write!(f, "could not read response body"),
        }
    }
}

#[derive(Debug, PartialEq)]
pub struct Download {
    pub source: String,
    pub file: PathBuf,
    pub content: Vec<u8>,
}

impl Download {
    pub fn new(source: String, file: PathBuf, content: Vec<u8>) -> Self {
        Self {
            source,
            file,
            content,
        }
    }
}

impl<T> Downloader<T>
where
    T: FileFetcher,
{
    pub fn with_fetcher(root: &Path, fetcher: T) -> Self {
        Downloader {
            fetcher,
            root: root.to_path_buf(),
        }
    }

    /// Recreates `<root>/<name>` as an empty directory. Destructive and not
    /// atomic: whatever already sits at that path (file, directory, symlink)
    /// is removed first.
    pub fn prepare_dir(&self, name: &str) -> io::Result<PathBuf> {
        let dir = self.root.join(name);

        match fs::symlink_metadata(&dir) {
            Ok(meta) if meta.is_dir() => fs::remove_dir_all(&dir)?,
            Ok(_) => fs::remove_file(&dir)?,
            Err(err) if err.kind() == io::ErrorKind::NotFound => {}
            Err(err) => return Err(err),
        }

        fs::create_dir_all(&dir)?;

        Ok(dir)
    }

    /// Fetches `url` and writes the body to `dest` in one shot. The file is
    /// only created once the full body has been received, so a failed fetch
    /// leaves no partial file behind.
    pub fn download(&self, url: &str, dest: &Path) -> Result<Download, DownloadError> {
        let url = Url::parse(url).map_err(|_| DownloadError::InvalidUrl)?;

        let url = url.as_str();

        let response = self.fetcher.fetch(url);

        match response {
            Response::NetworkError => Err(DownloadError::NetworkError),
            Response::Status(code) => Err(DownloadError::Status(code)),
            Response::InvalidBody => Err(DownloadError::InvalidBody),

            Response::Ok(body) => {
                fs::write(dest, &body)
                    .unwrap_or_else(|_| panic!("Error saving file: {:?}", dest));

                Ok(Download::new(String::from(url), dest.to_path_buf(), body))
            }
        }
    }
}

impl Downloader<UReqFetcher> {
    pub fn new(root: &Path) -> Self {
        let fetcher = UReqFetcher::new();
        Downloader::with_fetcher(root, fetcher)
    }
}

#[cfg(test)]
use fetcher::MockFetcher;
