use crate::{FxtbError, Result};
use bzip2::read::BzDecoder;
use flate2::read::GzDecoder;
use std::io::{BufReader, Read};
use std::path::Path;
use std::time::{Duration, Instant};
use tar::Archive;
use tracing::debug;
use xz2::read::XzDecoder;

/// Retrieves the resource at a URL and extracts it as a directory tree.
pub trait ArchiveFetcher {
    fn fetch(&self, url: &str, destination: &Path) -> Result<()>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArchiveKind {
    TarGz,
    TarBz2,
    TarXz,
}

impl ArchiveKind {
    pub fn from_url(url: &str) -> Option<Self> {
        let path = url.split(['?', '#']).next().unwrap_or(url);

        if path.ends_with(".tar.gz") || path.ends_with(".tgz") {
            Some(ArchiveKind::TarGz)
        } else if path.ends_with(".tar.bz2") || path.ends_with(".tbz2") {
            Some(ArchiveKind::TarBz2)
        } else if path.ends_with(".tar.xz") || path.ends_with(".txz") {
            Some(ArchiveKind::TarXz)
        } else {
            None
        }
    }
}

pub fn extract_archive<R: Read>(reader: R, kind: ArchiveKind, destination: &Path) -> Result<()> {
    let reader = BufReader::new(reader);

    let unpacked = match kind {
        ArchiveKind::TarGz => Archive::new(GzDecoder::new(reader)).unpack(destination),
        ArchiveKind::TarBz2 => Archive::new(BzDecoder::new(reader)).unpack(destination),
        ArchiveKind::TarXz => Archive::new(XzDecoder::new(reader)).unpack(destination),
    };

    unpacked.map_err(|source| FxtbError::Archive {
        path: destination.to_path_buf(),
        source,
    })
}

pub struct HttpArchiveFetcher {
    client: reqwest::blocking::Client,
}

impl HttpArchiveFetcher {
    pub fn new() -> Result<Self> {
        let client = reqwest::blocking::Client::builder()
            .user_agent(concat!("fxtbenv/", env!("CARGO_PKG_VERSION")))
            .connect_timeout(Duration::from_secs(30))
            .timeout(None::<Duration>)
            .build()
            .map_err(|source| FxtbError::HttpClient { source })?;

        Ok(Self::from_client(client))
    }

    pub fn from_client(client: reqwest::blocking::Client) -> Self {
        Self { client }
    }

    fn get(&self, url: &str) -> Result<reqwest::blocking::Response> {
        debug!("GET {}", url);

        let response = self
            .client
            .get(url)
            .send()
            .map_err(|source| FxtbError::Http {
                url: url.to_string(),
                source,
            })?;

        if !response.status().is_success() {
            return Err(FxtbError::HttpStatus {
                url: url.to_string(),
                status: response.status(),
            });
        }

        Ok(response)
    }

    /// Fetches the releases index page. The body is returned verbatim.
    pub fn fetch_listing(&self, url: &str) -> Result<String> {
        self.get(url)?.text().map_err(|source| FxtbError::Http {
            url: url.to_string(),
            source,
        })
    }
}

impl ArchiveFetcher for HttpArchiveFetcher {
    fn fetch(&self, url: &str, destination: &Path) -> Result<()> {
        let kind = ArchiveKind::from_url(url).ok_or_else(|| FxtbError::UnsupportedArchive {
            url: url.to_string(),
        })?;

        let started = Instant::now();
        let response = self.get(url)?;
        if let Some(length) = response.content_length() {
            debug!("{} is {} bytes", url, length);
        }

        extract_archive(response, kind, destination)?;

        debug!(
            "fetched and unpacked {} in {:.3}s",
            url,
            started.elapsed().as_secs_f64()
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use flate2::Compression;
    use flate2::write::GzEncoder;
    use std::fs;
    use std::io::Write;
    use std::net::TcpListener;
    use std::thread;
    use tempfile::TempDir;

    /// Answers a single request on a loopback port with a canned response and
    /// returns the base URL.
    fn serve_once(status: &'static str, body: Vec<u8>) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let address = listener.local_addr().unwrap();

        thread::spawn(move || {
            let (mut stream, _) = listener.accept().unwrap();
            let mut request = Vec::new();
            let mut buffer = [0u8; 1024];
            while !request.windows(4).any(|w| w == b"\r\n\r\n") {
                let read = stream.read(&mut buffer).unwrap();
                if read == 0 {
                    break;
                }
                request.extend_from_slice(&buffer[..read]);
            }

            let head = format!(
                "HTTP/1.1 {}\r\nContent-Length: {}\r\nConnection: close\r\n\r\n",
                status,
                body.len()
            );
            stream.write_all(head.as_bytes()).unwrap();
            stream.write_all(&body).unwrap();
        });

        format!("http://{}", address)
    }

    fn local_fetcher() -> HttpArchiveFetcher {
        let client = reqwest::blocking::Client::builder()
            .no_proxy()
            .build()
            .unwrap();
        HttpArchiveFetcher::from_client(client)
    }

    fn build_tar_gz(entries: &[(&str, &str)]) -> Vec<u8> {
        let encoder = GzEncoder::new(Vec::new(), Compression::default());
        let mut builder = tar::Builder::new(encoder);

        for (path, contents) in entries {
            let mut header = tar::Header::new_gnu();
            header.set_size(contents.len() as u64);
            header.set_mode(0o644);
            header.set_cksum();
            builder
                .append_data(&mut header, path, contents.as_bytes())
                .unwrap();
        }

        builder.into_inner().unwrap().finish().unwrap()
    }

    #[test]
    fn test_archive_kind_from_url() {
        assert_eq!(
            ArchiveKind::from_url("https://x/firefox-57.0.tar.bz2"),
            Some(ArchiveKind::TarBz2)
        );
        assert_eq!(
            ArchiveKind::from_url("https://x/firefox-140.0.tar.xz?mirror=1"),
            Some(ArchiveKind::TarXz)
        );
        assert_eq!(
            ArchiveKind::from_url("file.tgz"),
            Some(ArchiveKind::TarGz)
        );
        assert_eq!(ArchiveKind::from_url("https://x/Firefox 57.0.dmg"), None);
    }

    #[test]
    fn test_extract_tar_gz() {
        let temp = TempDir::new().unwrap();
        let data = build_tar_gz(&[
            ("firefox/firefox", "#!/bin/sh\n"),
            ("firefox/defaults/pref/channel-prefs.js", "pref(\"app.update.channel\", \"release\");"),
        ]);

        extract_archive(data.as_slice(), ArchiveKind::TarGz, temp.path()).unwrap();

        assert!(temp.path().join("firefox/firefox").is_file());
        let prefs = fs::read_to_string(temp.path().join("firefox/defaults/pref/channel-prefs.js"))
            .unwrap();
        assert!(prefs.contains("app.update.channel"));
    }

    #[test]
    fn test_extract_corrupt_archive() {
        let temp = TempDir::new().unwrap();
        let result = extract_archive(
            b"definitely not bzip2".as_slice(),
            ArchiveKind::TarBz2,
            temp.path(),
        );
        assert!(matches!(result, Err(FxtbError::Archive { .. })));
    }

    #[test]
    fn test_http_fetch_unpacks_archive() {
        let temp = TempDir::new().unwrap();
        let data = build_tar_gz(&[("firefox/application.ini", "[App]\nVersion=57.0\n")]);
        let base = serve_once("200 OK", data);

        local_fetcher()
            .fetch(&format!("{}/firefox-57.0.tar.gz", base), temp.path())
            .unwrap();

        let ini = fs::read_to_string(temp.path().join("firefox/application.ini")).unwrap();
        assert!(ini.contains("Version=57.0"));
    }

    #[test]
    fn test_http_fetch_reports_status() {
        let temp = TempDir::new().unwrap();
        let base = serve_once("404 Not Found", b"missing".to_vec());

        let result = local_fetcher().fetch(&format!("{}/firefox-1.0.tar.bz2", base), temp.path());

        match result {
            Err(FxtbError::HttpStatus { status, .. }) => assert_eq!(status.as_u16(), 404),
            other => panic!("expected HttpStatus, got {:?}", other),
        }
        assert!(fs::read_dir(temp.path()).unwrap().next().is_none());
    }

    #[test]
    fn test_http_fetch_rejects_unknown_suffix() {
        let temp = TempDir::new().unwrap();

        let result = local_fetcher().fetch("http://127.0.0.1:9/Firefox%2057.0.dmg", temp.path());

        assert!(matches!(result, Err(FxtbError::UnsupportedArchive { .. })));
    }

    #[test]
    fn test_fetch_listing_returns_body_verbatim() {
        let html = "<html><body><a href=\"/pub/firefox/releases/57.0/\">57.0/</a></body></html>";
        let base = serve_once("200 OK", html.as_bytes().to_vec());

        let listing = local_fetcher()
            .fetch_listing(&format!("{}/firefox/releases/", base))
            .unwrap();

        assert_eq!(listing, html);
    }
}
