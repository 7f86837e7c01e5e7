use std::sync::OnceLock;

use regex::Regex;

/// Decides whether the dotted part of a bare-domain candidate is plausible
/// as a hostname.
///
/// The scanner treats this as an opaque collaborator: a rejected candidate
/// is skipped silently and scanning carries on after it.
pub trait DomainValidator {
    fn is_valid_domain(&self, domain: &str) -> bool;
}

/// Default validator enforcing DNS label syntax.
///
/// Accepts ASCII names of at least two labels where every label is
/// alphanumeric with interior hyphens and at most 63 bytes, the whole name
/// is at most 253 bytes, and the final label looks TLD-like (alphabetic,
/// two or more chars). ASCII-case-insensitive.
#[derive(Debug, Clone, Copy, Default)]
pub struct HostnameValidator;

static LABEL: OnceLock<Regex> = OnceLock::new();

fn label_pattern() -> &'static Regex {
    LABEL.get_or_init(|| Regex::new(r"^[a-z0-9]([a-z0-9-]{0,61}[a-z0-9])?$").unwrap())
}

impl DomainValidator for HostnameValidator {
    fn is_valid_domain(&self, domain: &str) -> bool {
        let domain = domain.to_ascii_lowercase();
        if domain.len() > 253 {
            return false;
        }

        let labels: Vec<&str> = domain.split('.').collect();
        if labels.len() < 2 {
            return false;
        }
        if !labels.iter().all(|l| label_pattern().is_match(l)) {
            return false;
        }

        let tld = labels[labels.len() - 1];
        tld.len() >= 2 && tld.bytes().all(|b| b.is_ascii_alphabetic())
    }
}
