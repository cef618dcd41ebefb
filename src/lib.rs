mod downloader;
pub mod icons;

pub use downloader::{Download, DownloadError, Downloader, FileFetcher, Response};
