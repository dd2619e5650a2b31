//! Origin identity for permission decisions.

use std::fmt;

use url::Url;

/// The trust-relevant identity of a URL.
///
/// An origin captures the facets of a URL that matter when deciding who
/// is asking for a capability: its scheme, its host, and whether it
/// denotes a local file. Path, query, and fragment carry no trust
/// information and are dropped. The URL parser has already lowercased
/// scheme and host, so two origins compare equal iff their normalized
/// (scheme, host) pairs do.
#[derive(Debug, Clone)]
pub struct Origin {
    scheme: String,
    host: Option<String>,
    local_file: bool,
}

impl Origin {
    /// Derive the origin of a parsed URL.
    pub fn from_url(url: &Url) -> Self {
        Self {
            scheme: url.scheme().to_string(),
            host: url.host_str().map(str::to_string),
            local_file: url.scheme() == "file",
        }
    }

    /// Lowercased scheme.
    pub fn scheme(&self) -> &str {
        &self.scheme
    }

    /// Lowercased host, if the URL has one.
    pub fn host(&self) -> Option<&str> {
        self.host.as_deref()
    }

    /// Whether this origin denotes a local-file resource.
    pub fn is_local_file(&self) -> bool {
        self.local_file
    }
}

impl PartialEq for Origin {
    fn eq(&self, other: &Self) -> bool {
        self.scheme == other.scheme && self.host == other.host
    }
}

impl Eq for Origin {}

impl fmt::Display for Origin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.host {
            Some(host) => write!(f, "{}://{}", self.scheme, host),
            None => write!(f, "{}:", self.scheme),
        }
    }
}
