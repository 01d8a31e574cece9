use std::{fmt, ops::Deref, str::FromStr};

use serde::{Deserialize, Serialize};
use url::Url;

/// Why a string was not accepted as an [EndpointUrl].
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum UrlError {
    #[error(transparent)]
    Parse(#[from] url::ParseError),
    /// A character outside the RFC 3986 set, such as whitespace, `\` or `|`.
    #[error("invalid character {ch:?} at index {index}")]
    InvalidCharacter { ch: char, index: usize },
    #[error("malformed percent-encoding at index {index}")]
    InvalidPercentEncoding { index: usize },
    /// A URL with a host written without `//`, e.g. `https:host`.
    #[error("missing `//` before the authority")]
    MissingAuthority,
}

/// An absolute URL that remembers the exact text it was parsed from.
///
/// [Url] normalizes on parse (an empty path becomes `/`, for instance), so the
/// original text is kept for display and comparison while the parsed form is
/// available through [Deref].
///
/// The text must be a valid RFC 3986 URI as written; input the WHATWG parser
/// would silently repair is rejected.
#[derive(Debug, Clone, Hash, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct EndpointUrl {
    raw: String,
    url: Url,
}

impl EndpointUrl {
    /// The URL exactly as it was configured.
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// The parsed, normalized URL.
    pub fn as_url(&self) -> &Url {
        &self.url
    }
}

impl Deref for EndpointUrl {
    type Target = Url;

    fn deref(&self) -> &Url {
        &self.url
    }
}

impl TryFrom<String> for EndpointUrl {
    type Error = UrlError;

    fn try_from(raw: String) -> Result<Self, Self::Error> {
        // Url::parse has no base here, so relative references are rejected.
        let url = Url::parse(&raw)?;
        // The WHATWG parser repairs input that is not RFC 3986, but the raw text
        // is what gets exposed, so it must be valid as written.
        check_rfc3986(&raw)?;
        if url.host().is_some() && !raw[url.scheme().len() + 1..].starts_with("//") {
            return Err(UrlError::MissingAuthority);
        }
        Ok(Self { raw, url })
    }
}

impl FromStr for EndpointUrl {
    type Err = UrlError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::try_from(s.to_owned())
    }
}

impl From<EndpointUrl> for String {
    fn from(value: EndpointUrl) -> Self {
        value.raw
    }
}

impl From<EndpointUrl> for Url {
    fn from(value: EndpointUrl) -> Self {
        value.url
    }
}

impl fmt::Display for EndpointUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

impl PartialEq<str> for EndpointUrl {
    fn eq(&self, other: &str) -> bool {
        self.raw == other
    }
}

impl PartialEq<&str> for EndpointUrl {
    fn eq(&self, other: &&str) -> bool {
        self.raw == *other
    }
}

fn check_rfc3986(raw: &str) -> Result<(), UrlError> {
    let bytes = raw.as_bytes();
    for (index, ch) in raw.char_indices() {
        match ch {
            'A'..='Z' | 'a'..='z' | '0'..='9' => {}
            '-' | '.' | '_' | '~' => {}
            ':' | '/' | '?' | '#' | '[' | ']' | '@' => {}
            '!' | '$' | '&' | '\'' | '(' | ')' | '*' | '+' | ',' | ';' | '=' => {}
            '%' => {
                let hex = bytes.get(index + 1..index + 3);
                if !hex.is_some_and(|h| h.iter().all(u8::is_ascii_hexdigit)) {
                    return Err(UrlError::InvalidPercentEncoding { index });
                }
            }
            ch => return Err(UrlError::InvalidCharacter { ch, index }),
        }
    }
    Ok(())
}

/// Build an [http::Uri] for use with an HTTP client, from the normalized form.
impl TryFrom<&EndpointUrl> for http::Uri {
    type Error = http::uri::InvalidUri;

    fn try_from(value: &EndpointUrl) -> Result<Self, Self::Error> {
        value.url.as_str().parse()
    }
}
