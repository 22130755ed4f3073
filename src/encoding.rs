//! Charset sniffing and decoding of raw document bytes.
//!
//! A byte-order mark wins, then a charset declared in the document head,
//! then UTF-8. Undecodable sequences become U+FFFD; decoding never fails.

use encoding_rs::{Encoding, UTF_8};

use crate::patterns::{CHARSET_META, CONTENT_TYPE_CHARSET};

/// Number of leading bytes searched for a charset declaration.
pub const SNIFF_WINDOW: usize = 1024;

/// Determine the encoding of a raw document.
#[must_use]
pub fn sniff_encoding(bytes: &[u8]) -> &'static Encoding {
    if let Some((encoding, _)) = Encoding::for_bom(bytes) {
        return encoding;
    }

    let head = String::from_utf8_lossy(&bytes[..bytes.len().min(SNIFF_WINDOW)]);
    declared_encoding(&head).unwrap_or(UTF_8)
}

/// Encoding named by a `<meta charset>` or `http-equiv` declaration, when
/// the label is one `encoding_rs` knows.
fn declared_encoding(head: &str) -> Option<&'static Encoding> {
    [&*CHARSET_META, &*CONTENT_TYPE_CHARSET]
        .into_iter()
        .filter_map(|pattern| pattern.captures(head)?.get(1))
        .find_map(|label| Encoding::for_label(label.as_str().as_bytes()))
}

/// Decode a raw document to UTF-8.
///
/// # Examples
///
/// ```
/// use page_outline::encoding::decode_document;
///
/// let bytes = b"<html><head><meta charset=\"ISO-8859-1\"></head><body>Caf\xE9</body></html>";
/// assert!(decode_document(bytes).contains("Café"));
/// ```
#[must_use]
pub fn decode_document(bytes: &[u8]) -> String {
    let encoding = sniff_encoding(bytes);
    let (decoded, used, had_errors) = encoding.decode(bytes);
    if had_errors {
        tracing::debug!(encoding = used.name(), "replaced undecodable byte sequences");
    }
    decoded.into_owned()
}
