//! Tests for spoken value normalization.

use crate::dialog::domain::{FieldTransform, normalize_domain, upper_case};
use rstest::rstest;

#[rstest]
#[case::spoken_site(
    "minha empresa ponto atlassian ponto net",
    "https://minhaempresa.atlassian.net"
)]
#[case::bare_subdomain("acme", "https://acme.atlassian.net")]
#[case::spoken_subdomain_with_spaces("acme corp", "https://acmecorp.atlassian.net")]
#[case::already_normalized("https://acme.atlassian.net", "https://acme.atlassian.net")]
#[case::scheme_without_suffix("https://acme", "https://acme.atlassian.net")]
fn normalize_domain_builds_site_url(#[case] raw: &str, #[case] expected: &str) {
    assert_eq!(normalize_domain(raw), expected);
}

#[rstest]
#[case("acme ponto atlassian ponto net")]
#[case("https://acme.atlassian.net")]
#[case("https://minha empresa.atlassian.net")]
fn normalize_domain_is_idempotent(#[case] raw: &str) {
    let once = normalize_domain(raw);
    assert_eq!(normalize_domain(&once), once);
}

#[rstest]
fn spoken_dot_needs_surrounding_spaces() {
    // "ponto" inside a word is not a spoken dot.
    assert_eq!(
        normalize_domain("apontoweb"),
        "https://apontoweb.atlassian.net"
    );
}

#[rstest]
#[case("dev", "DEV")]
#[case("Proj", "PROJ")]
#[case("OPS", "OPS")]
fn upper_case_normalizes_project_keys(#[case] raw: &str, #[case] expected: &str) {
    assert_eq!(upper_case(raw), expected);
}

#[rstest]
fn verbatim_fields_are_stored_as_spoken() {
    assert_eq!(
        FieldTransform::Verbatim.apply("NPE on save ponto"),
        "NPE on save ponto"
    );
}
