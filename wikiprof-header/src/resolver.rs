use crate::errors::Error;
use crate::store::IdentityStore;
use crate::types::UserIdentity;
use anyhow::{bail, Result};
use tracing::debug;
use wikiprof_syntax::title::{parse_title, Namespace};

/// Normalizes an arbitrary user-reference string into a canonical account
/// identity. A reference that parses as a non-subpage title in the user
/// namespace contributes its page-local name; anything else is looked up
/// verbatim. Read-only, no side effects.
#[derive(Clone, Copy)]
pub struct IdentityResolver<'a> {
    pub identities: &'a dyn IdentityStore,
}

impl<'a> IdentityResolver<'a> {
    pub fn new(identities: &'a dyn IdentityStore) -> Self {
        Self { identities }
    }

    /// The candidate account name a reference string stands for.
    pub fn candidate_name(reference: &str) -> Option<String> {
        match parse_title(reference) {
            Ok(title) if title.namespace == Namespace::User && !title.is_subpage() => {
                Some(title.page_name)
            }
            Ok(_) => Some(reference.to_string()),
            // Malformed references resolve the same as unknown names
            Err(err) => {
                debug!(reference, %err, "unparseable user reference");
                None
            }
        }
    }

    /// `Ok(None)` when no account exists under the candidate name. An
    /// anonymous (IP-based) identity returned by the store is a valid
    /// resolution, not a miss; callers decide what to do with it.
    pub fn resolve(&self, reference: &str) -> Result<Option<UserIdentity>> {
        let candidate = match Self::candidate_name(reference) {
            None => return Ok(None),
            Some(candidate) => candidate,
        };
        self.identities.lookup_name(&candidate)
    }

    pub fn ensure_resolve(&self, reference: &str) -> Result<UserIdentity> {
        match self.resolve(reference)? {
            None => bail!(Error::AccountNotFoundError(reference.to_string())),
            Some(identity) => Ok(identity),
        }
    }
}
