//! Response body decoding and line reassembly

use encoding_rs::{Encoding, UTF_8};
use reqwest::header::{HeaderMap, CONTENT_TYPE};

/// Pick the text encoding named by the `Content-Type` charset, defaulting to UTF-8
pub fn charset_from_headers(headers: &HeaderMap) -> &'static Encoding {
    headers
        .get(CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.parse::<mime::Mime>().ok())
        .and_then(|media| {
            media
                .get_param(mime::CHARSET)
                .and_then(|charset| Encoding::for_label(charset.as_str().as_bytes()))
        })
        .unwrap_or(UTF_8)
}

/// Decode raw body bytes; malformed sequences become U+FFFD
pub fn decode(bytes: &[u8], encoding: &'static Encoding) -> String {
    let (text, _, _) = encoding.decode(bytes);
    text.into_owned()
}

/// Rebuild text line by line, ending every line with a single `\n`.
///
/// `\n`, `\r\n` and a lone `\r` all terminate a line. A final line without
/// a terminator still gets one, so the result is a normalized copy rather
/// than the exact bytes received.
pub fn reassemble_lines(text: &str) -> String {
    let mut out = String::with_capacity(text.len() + 1);
    let mut rest = text;

    while !rest.is_empty() {
        match rest.find(['\r', '\n']) {
            Some(pos) => {
                out.push_str(&rest[..pos]);
                out.push('\n');
                let skip = if rest[pos..].starts_with("\r\n") { 2 } else { 1 };
                rest = &rest[pos + skip..];
            }
            None => {
                out.push_str(rest);
                out.push('\n');
                break;
            }
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::header::HeaderValue;

    #[test]
    fn test_reassemble_unix_lines() {
        assert_eq!(reassemble_lines("a\nb\nc\n"), "a\nb\nc\n");
    }

    #[test]
    fn test_reassemble_adds_trailing_newline() {
        assert_eq!(reassemble_lines("a\nb"), "a\nb\n");
        assert_eq!(reassemble_lines("single"), "single\n");
    }

    #[test]
    fn test_reassemble_crlf_and_cr() {
        assert_eq!(reassemble_lines("a\r\nb\rc\r\n"), "a\nb\nc\n");
    }

    #[test]
    fn test_reassemble_keeps_blank_lines() {
        assert_eq!(reassemble_lines("a\n\n\nb"), "a\n\n\nb\n");
        assert_eq!(reassemble_lines("\r\n\r\n"), "\n\n");
    }

    #[test]
    fn test_reassemble_empty() {
        assert_eq!(reassemble_lines(""), "");
    }

    #[test]
    fn test_charset_default_utf8() {
        let headers = HeaderMap::new();
        assert_eq!(charset_from_headers(&headers), UTF_8);
    }

    #[test]
    fn test_charset_from_content_type() {
        let mut headers = HeaderMap::new();
        headers.insert(
            CONTENT_TYPE,
            HeaderValue::from_static("text/plain; charset=ISO-8859-1"),
        );
        assert_eq!(charset_from_headers(&headers), encoding_rs::WINDOWS_1252);
    }

    #[test]
    fn test_charset_unknown_label_falls_back() {
        let mut headers = HeaderMap::new();
        headers.insert(
            CONTENT_TYPE,
            HeaderValue::from_static("text/plain; charset=not-a-charset"),
        );
        assert_eq!(charset_from_headers(&headers), UTF_8);
    }

    #[test]
    fn test_decode_latin1() {
        assert_eq!(decode(&[0x63, 0x61, 0x66, 0xE9], encoding_rs::WINDOWS_1252), "café");
    }

    #[test]
    fn test_decode_invalid_utf8_is_lossy() {
        assert_eq!(decode(&[b'o', b'k', 0xFF], UTF_8), "ok\u{FFFD}");
    }
}
