use url::Url;

/// Normalizes a link into its canonical string form.
///
/// # Normalization Steps
///
/// 1. Resolve `href` against `base` per standard relative-reference
///    resolution (absolute inputs pass through resolution unchanged)
/// 2. Lowercase the scheme and host (done by the parser)
/// 3. Remove the fragment (everything after `#`)
/// 4. Preserve the path and query as given
///
/// The result is the canonical key used for visited-set membership, so two
/// spellings of the same page must normalize to the same string.
///
/// This is a pure function with no failure mode: input that cannot be
/// resolved is returned trimmed, best-effort.
///
/// # Examples
///
/// ```
/// use kumo::url::normalize_url;
/// use url::Url;
///
/// let base = Url::parse("https://example.com/a/page").unwrap();
/// assert_eq!(
///     normalize_url("../other#top", &base),
///     "https://example.com/other"
/// );
/// ```
pub fn normalize_url(href: &str, base: &Url) -> String {
    let href = href.trim();

    match base.join(href) {
        Ok(mut resolved) => {
            resolved.set_fragment(None);
            resolved.to_string()
        }
        Err(_) => href.to_string(),
    }
}
