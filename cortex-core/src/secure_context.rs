//! Secure-context classification for permission-requesting origins.
//!
//! Encodes the rule set deciding whether an origin may be *asked* to
//! grant a sensitive capability: HTTPS/WSS and local files qualify,
//! loopback HTTP qualifies for local development, and the opaque wrapper
//! schemes (`blob:`, `filesystem:`) inherit the verdict of the URL they
//! wrap. Everything else is refused.
//!
//! Classification is a pure function with no failure mode: input that
//! cannot be parsed or interpreted is insecure.

use url::{Host, Url};

/// Upper bound on nested-scheme unwrapping.
///
/// A hostile page can mint wrapper URLs whose payloads are themselves
/// wrapper URLs. The identity check in [`classify`] stops direct
/// self-reference; the depth cap stops cycles spelled through different
/// but equivalent encodings.
const MAX_UNWRAP_DEPTH: usize = 4;

/// Classify a parsed URL as a secure context for sensitive capabilities.
///
/// Returns `true` iff the origin is eligible to request capabilities
/// like geolocation. Malformed nested payloads and non-loopback hosts
/// fail closed to `false`.
///
/// # Example
///
/// ```rust
/// use cortex_core::secure_context::is_secure_context;
/// use url::Url;
///
/// let url = Url::parse("https://example.com").unwrap();
/// assert!(is_secure_context(&url));
///
/// let url = Url::parse("http://example.com").unwrap();
/// assert!(!is_secure_context(&url));
/// ```
pub fn is_secure_context(url: &Url) -> bool {
    classify(url, MAX_UNWRAP_DEPTH)
}

/// Classify a URL given as a string.
///
/// Input that does not parse at all (including `http://` with an empty
/// host, which the parser rejects) is insecure.
pub fn is_secure_context_str(input: &str) -> bool {
    Url::parse(input).map(|url| is_secure_context(&url)).unwrap_or(false)
}

fn classify(url: &Url, depth: usize) -> bool {
    // The parser has already lowercased the scheme.
    let scheme = url.scheme();

    if scheme == "file" {
        return true;
    }

    if scheme == "https" || scheme == "wss" {
        return true;
    }

    // Wrapper schemes carry the wrapped URL in their path component and
    // inherit its verdict.
    if scheme == "blob" || scheme == "filesystem" {
        if depth == 0 {
            return false;
        }
        return match Url::parse(url.path()) {
            Ok(inner) if inner != *url => classify(&inner, depth - 1),
            _ => false,
        };
    }

    if scheme == "http" {
        return match url.host() {
            Some(host) => is_loopback_host(host),
            None => false,
        };
    }

    false
}

/// Whether a host names the local machine.
///
/// `localhost` and its subdomains are trusted by name. IP literals are
/// trusted only when they designate a loopback address, including the
/// IPv4-mapped IPv6 forms such as `::ffff:127.0.0.1`.
fn is_loopback_host(host: Host<&str>) -> bool {
    match host {
        // The parser has already lowercased and IDNA-mapped the domain.
        Host::Domain(domain) => domain == "localhost" || domain.ends_with(".localhost"),
        Host::Ipv4(addr) => addr.is_loopback(),
        Host::Ipv6(addr) => {
            addr.is_loopback()
                || addr.to_ipv4_mapped().map_or(false, |mapped| mapped.is_loopback())
        }
    }
}
