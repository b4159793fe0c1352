//! Normalization of spoken field values.

/// Token the speech recognizer produces for a spoken "dot".
const SPOKEN_DOT: &str = " ponto ";
const SCHEME: &str = "https://";
const SITE_SUFFIX: &str = ".atlassian.net";

/// Turns a spoken company subdomain into a Jira Cloud site URL.
///
/// `"minha empresa ponto atlassian ponto net"` becomes
/// `"https://minhaempresa.atlassian.net"`. Spoken dots are replaced first,
/// then every remaining space is removed, then the scheme and the
/// `.atlassian.net` suffix are added when absent. The result is not
/// validated as a URL.
#[must_use]
pub fn normalize_domain(raw: &str) -> String {
    let compact = raw.replace(SPOKEN_DOT, ".").replace(' ', "");
    let with_scheme = if compact.starts_with(SCHEME) {
        compact
    } else {
        format!("{SCHEME}{compact}")
    };
    if with_scheme.ends_with(SITE_SUFFIX) {
        with_scheme
    } else {
        format!("{with_scheme}{SITE_SUFFIX}")
    }
}

/// Upper-cases a spoken project key.
#[must_use]
pub fn upper_case(raw: &str) -> String {
    raw.to_uppercase()
}
