//! Address normalization.
//!
//! Feeds often publish enclosure paths that are already partly escaped. The
//! path is fully decoded and escaped again so every address is requested in
//! the same canonical form, never double-escaped.

use std::borrow::Cow;

use url::Url;

/// Canonicalize the path escaping of an address.
///
/// Addresses that do not parse are returned unchanged; the transfer reports
/// the failure.
pub fn normalize_url(address: &str) -> String {
    let mut url = match Url::parse(address) {
        Ok(url) => url,
        Err(e) => {
            tracing::debug!("Not normalizing unparseable address {}: {}", address, e);
            return address.to_string();
        }
    };

    if url.cannot_be_a_base() {
        return url.into();
    }

    let decoded = urlencoding::decode_binary(url.path().as_bytes());
    let segments: Vec<Cow<str>> = decoded
        .split(|b| *b == b'/')
        .map(urlencoding::encode_binary)
        .collect();
    let path = segments.join("/");
    url.set_path(&path);

    url.into()
}
