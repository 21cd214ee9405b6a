use crate::{Entry, ProbeError};

/// Separator between pairs in the cookie header as the host serializes it.
pub const COOKIE_SEPARATOR: &str = "; ";

/// A source for the page's concatenated cookie header.
pub trait CookieSource {
    /// The raw header, e.g. `"a=1; b=2"`.
    fn raw(&self) -> Result<String, ProbeError>;
}

impl<T> CookieSource for std::sync::Arc<T>
where
    T: CookieSource + ?Sized,
{
    fn raw(&self) -> Result<String, ProbeError> {
        (**self).raw()
    }
}

/// Parse a cookie header into ordered entries.
///
/// A pair without `=` becomes a key with an empty value and is taken
/// verbatim. Otherwise the text before the first `=` is the key and the
/// rest is the value, each percent-decoded. Any malformed escape fails the
/// whole parse.
pub fn parse_cookies(raw: &str) -> Result<Vec<Entry>, ProbeError> {
    if raw.trim().is_empty() {
        return Ok(Vec::new());
    }

    raw.split(COOKIE_SEPARATOR)
        .map(|pair| match pair.split_once('=') {
            None => Ok(Entry::without_size(pair, "")),
            Some((key, value)) => Ok(Entry::without_size(decode(key)?, decode(value)?)),
        })
        .collect()
}

/// Parse a cookie header, substituting an empty snapshot when it is
/// malformed.
pub fn read_cookies(raw: &str) -> Vec<Entry> {
    match parse_cookies(raw) {
        Ok(entries) => {
            tracing::debug!(count = entries.len(), "Read cookie snapshot");
            entries
        }
        Err(error) => {
            tracing::warn!(%error, "Cookie header unreadable, showing empty snapshot");
            Vec::new()
        }
    }
}

/// Read and parse the cookie header from `source`.
pub fn read_cookie_source<C>(source: &C) -> Vec<Entry>
where
    C: CookieSource + ?Sized,
{
    match source.raw() {
        Ok(raw) => read_cookies(&raw),
        Err(error) => {
            tracing::warn!(%error, "Cookie header unavailable, showing empty snapshot");
            Vec::new()
        }
    }
}

fn decode(component: &str) -> Result<String, ProbeError> {
    validate_escapes(component)?;
    urlencoding::decode(component)
        .map(|decoded| decoded.into_owned())
        .map_err(|error| ProbeError::MalformedCookie(format!("{component:?}: {error}")))
}

/// `urlencoding` passes stray `%` through untouched; the host's decoder
/// rejects them, so we do too.
fn validate_escapes(component: &str) -> Result<(), ProbeError> {
    let bytes = component.as_bytes();
    let mut index = 0;

    while index < bytes.len() {
        if bytes[index] == b'%' {
            let escape = bytes.get(index + 1..index + 3);
            match escape {
                Some([high, low]) if high.is_ascii_hexdigit() && low.is_ascii_hexdigit() => {
                    index += 3;
                    continue;
                }
                _ => {
                    return Err(ProbeError::MalformedCookie(format!(
                        "{component:?}: invalid escape at byte {index}"
                    )));
                }
            }
        }
        index += 1;
    }

    Ok(())
}
