//! Identity verification port.

use async_trait::async_trait;

/// External identity lookup.
///
/// Implementations never surface transport errors: a lookup that cannot be
/// completed resolves to "not recognized" so an unverifiable name is never
/// silently accepted.
#[async_trait]
pub trait IdentityVerifier: Send + Sync {
    /// Resolve the provider's canonical casing of a recognized name.
    /// Returns `None` for unknown names and for failed lookups alike.
    async fn canonical_name(&self, name: &str) -> Option<String>;

    /// Returns true iff the provider recognizes the name.
    async fn verify(&self, name: &str) -> bool {
        self.canonical_name(name).await.is_some()
    }
}
