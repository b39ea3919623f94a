//! SSRF guard for outbound requests
//!
//! A crawler following untrusted links must never be steered into internal
//! address space. The check here blocks localhost names and literal IPs in
//! loopback, private, and link-local ranges (which include the cloud
//! metadata endpoint). Hostnames that are not literal IPs are NOT resolved
//! via DNS: a public name that resolves to a private address at fetch time
//! is outside this boundary.

use std::net::{Ipv4Addr, Ipv6Addr};

use url::{Host, Url};

/// The cloud metadata endpoint, inside the link-local block.
const CLOUD_METADATA: Ipv4Addr = Ipv4Addr::new(169, 254, 169, 254);

/// Checks whether a URL is safe to fetch.
///
/// Returns `false` for:
/// - `localhost` / `localhost.localdomain` (case-insensitive)
/// - IPv4 loopback (127.0.0.0/8), RFC 1918 private ranges (10.0.0.0/8,
///   172.16.0.0/12, 192.168.0.0/16), and link-local (169.254.0.0/16,
///   covering 169.254.169.254)
/// - IPv6 loopback, unique-local (fc00::/7), link-local (fe80::/10), and
///   IPv4-mapped addresses whose embedded IPv4 is blocked
/// - anything that fails to parse, or has no host (fail-closed)
///
/// # Examples
///
/// ```
/// use kumo::url::is_safe_url;
///
/// assert!(is_safe_url("https://example.com/page"));
/// assert!(!is_safe_url("http://169.254.169.254/latest/meta-data/"));
/// ```
pub fn is_safe_url(url: &str) -> bool {
    let parsed = match Url::parse(url) {
        Ok(parsed) => parsed,
        Err(_) => return false,
    };

    match parsed.host() {
        Some(Host::Domain(name)) => {
            let name = name.to_ascii_lowercase();
            name != "localhost" && name != "localhost.localdomain"
        }
        Some(Host::Ipv4(addr)) => !is_blocked_v4(addr),
        Some(Host::Ipv6(addr)) => !is_blocked_v6(addr),
        None => false,
    }
}

fn is_blocked_v4(addr: Ipv4Addr) -> bool {
    addr.is_loopback() || addr.is_private() || addr.is_link_local() || addr == CLOUD_METADATA
}

fn is_blocked_v6(addr: Ipv6Addr) -> bool {
    if addr.is_loopback() {
        return true;
    }
    if let Some(mapped) = addr.to_ipv4_mapped() {
        return is_blocked_v4(mapped);
    }
    let head = addr.segments()[0];
    // fc00::/7 unique-local, fe80::/10 link-local
    head & 0xfe00 == 0xfc00 || head & 0xffc0 == 0xfe80
}
