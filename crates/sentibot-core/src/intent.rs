//! Intent resolution seam.
//!
//! An intent resolver is an optional collaborator the responder consults
//! before falling back to sentiment-driven canned replies. The core only
//! defines the seam; concrete resolvers (e.g. a JSON intents file) live in
//! the infrastructure crate, and their presence or absence never changes
//! the scorer/aggregator/responder contracts.

/// Resolves a user message to a direct reply, if any intent matches.
///
/// Resolution is total: a resolver that cannot handle an input returns
/// `None`. Failures to construct a resolver (missing artifact, malformed
/// data) are the implementing crate's concern and surface at load time,
/// not here.
pub trait IntentResolver: Send + Sync {
    fn resolve(&self, text: &str) -> Option<String>;
}
