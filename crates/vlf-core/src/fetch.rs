//! Single blocking HTTP GET.
//!
//! Uses the curl crate (libcurl) with one easy handle per entry; the body
//! streams through a write callback into the entry's temp file. Errors are
//! typed so the runner can record a short per-entry reason.

use crate::config::VlfConfig;
use crate::storage::EntryWriter;
use std::io;
use thiserror::Error;

/// Error from one entry's transfer. Never crosses the per-entry boundary;
/// the runner converts it to a recorded failure reason.
#[derive(Debug, Error)]
pub enum FetchError {
    /// libcurl failure (DNS, connect, timeout, TLS, ...).
    #[error("{0}")]
    Network(#[from] curl::Error),
    /// Response had a non-2xx status.
    #[error("HTTP {0}")]
    Http(u32),
    /// Local write failed while the body was streaming.
    #[error("{0}")]
    Io(#[from] io::Error),
}

/// GET `url` and stream the body into `writer`. Follows redirects up to the
/// configured cap. Returns the number of body bytes handed to the writer.
pub fn fetch_to_writer(
    url: &str,
    writer: &mut EntryWriter,
    cfg: &VlfConfig,
) -> Result<u64, FetchError> {
    let mut easy = curl::easy::Easy::new();
    easy.url(url)?;
    easy.follow_location(true)?;
    easy.max_redirections(cfg.max_redirects)?;
    easy.connect_timeout(cfg.connect_timeout())?;
    if let Some(timeout) = cfg.transfer_timeout() {
        easy.timeout(timeout)?;
    }
    if let Some(ua) = &cfg.user_agent {
        easy.useragent(ua)?;
    }

    let mut bytes = 0u64;
    let mut write_err: Option<io::Error> = None;
    let perform_result = {
        let mut transfer = easy.transfer();
        transfer.write_function(|data| match writer.write_all(data) {
            Ok(()) => {
                bytes += data.len() as u64;
                Ok(data.len())
            }
            Err(err) => {
                write_err = Some(err);
                Ok(0) // abort transfer
            }
        })?;
        transfer.perform()
    };

    // A local write failure surfaces from curl as a write error; report the
    // underlying io::Error instead.
    if let Some(err) = write_err {
        return Err(FetchError::Io(err));
    }
    perform_result?;

    let code = easy.response_code()?;
    if !(200..300).contains(&code) {
        return Err(FetchError::Http(code));
    }

    Ok(bytes)
}
