// Download of the CSV export of a spreadsheet.

use std::io::Read;

use crate::dashboard::{io_common::*, *};

/// Fetches the CSV export of the document. There is no retry: a failed
/// download is reported immediately.
pub fn fetch_csv(host: &str, document_id: &str) -> DashboardResult<String> {
    let url = export_url(host, document_id);
    // The identifier is a secret: it is kept out of the logs and errors.
    let shown_url = redacted_export_url(host);
    info!("Fetching responses from {}", shown_url);
    // ureq errors quote the full address, so only their kind is kept.
    let response = match ureq::get(&url).call() {
        Ok(response) => response,
        Err(ureq::Error::Status(status, _)) => {
            return HttpStatusSnafu {
                status,
                url: shown_url,
            }
            .fail();
        }
        Err(ureq::Error::Transport(transport)) => {
            return FetchingRemoteSnafu {
                kind: transport.kind().to_string(),
                url: shown_url,
            }
            .fail();
        }
    };
    debug!(
        "fetch_csv: status {} content type {:?}",
        response.status(),
        response.content_type()
    );
    // into_string() stops at 10 MB; exports of large surveys exceed it.
    let text = read_body(response.into_reader(), &shown_url)?;
    if looks_like_html(&text) {
        // Private documents redirect to a sign-in page.
        return NotCsvSnafu { url: shown_url }.fail();
    }
    Ok(text)
}

fn read_body(mut reader: impl Read, shown_url: &str) -> DashboardResult<String> {
    let mut text = String::new();
    reader
        .read_to_string(&mut text)
        .context(ReadingRemoteSnafu { url: shown_url })?;
    Ok(text)
}

fn looks_like_html(text: &str) -> bool {
    let head = strip_bom(text).trim_start();
    let lower: String = head.chars().take(16).collect::<String>().to_lowercase();
    lower.starts_with("<!doctype html") || lower.starts_with("<html")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detect_sign_in_page() {
        assert!(looks_like_html("<!DOCTYPE html><html><head>"));
        assert!(looks_like_html("  <html lang=\"en\">"));
        assert!(!looks_like_html("What is your sex?,Age_grp\nFemale,18-35\n"));
        assert!(!looks_like_html(""));
    }

    #[test]
    fn large_body_is_read_in_full() {
        let size = 12 * 1024 * 1024;
        let body = std::io::repeat(b'a').take(size as u64);
        let text = read_body(body, "https://example.org").unwrap();
        assert_eq!(text.len(), size);
    }

    #[test]
    fn invalid_body_is_a_data_source_error() {
        let body: &[u8] = &[b'a', 0xff, b'\n'];
        let res = read_body(body, "https://example.org");
        assert!(matches!(res, Err(DashboardError::ReadingRemote { .. })));
        assert!(res.unwrap_err().is_data_source());
    }

    #[test]
    fn multibyte_header_is_csv() {
        // The first non-ASCII character straddles byte 64.
        let text = format!("{}\u{103},Age_grp\nx,y\n", "a".repeat(63));
        assert!(!looks_like_html(&text));
        assert!(!looks_like_html("Marc\u{103} temporal\u{103},Age_grp\n"));
        assert!(!looks_like_html("\u{feff}\u{41f}\u{43e}\u{43b},\u{412}\u{43e}\u{437}\u{440}\u{430}\u{441}\u{442}\n"));
        assert!(looks_like_html("\u{feff}<HTML>\u{103}"));
    }
}
