use async_trait::async_trait;

use crate::port::IdentityVerifier;

/// Verifier backed by a fixed roster of known names.
///
/// Matching is case-insensitive and resolves to the roster's casing,
/// mirroring the real provider's canonicalization.
pub struct StaticVerifier {
    known: Vec<String>,
}

impl StaticVerifier {
    #[must_use]
    pub fn new(known: &[&str]) -> Self {
        Self {
            known: known.iter().map(|name| name.to_string()).collect(),
        }
    }
}

#[async_trait]
impl IdentityVerifier for StaticVerifier {
    async fn canonical_name(&self, name: &str) -> Option<String> {
        self.known
            .iter()
            .find(|known| known.eq_ignore_ascii_case(name))
            .cloned()
    }
}
