//! Collaborator seams. The host platform owns identity, content, avatar
//! storage, localization, and URL generation; this library only consumes
//! them. Lookups return `Ok(None)` for the expected miss and `Err` when the
//! backing store itself failed, so callers can degrade gracefully on the
//! latter without treating the former as a fault.

use crate::types::{Avatar, AvatarSize, Page, SpecialPage, UserIdentity};
use anyhow::Result;
use chrono::{DateTime, Utc};
use wikiprof_syntax::title::Title;

pub trait IdentityStore {
    /// Resolve a canonical user name to an account record.
    fn lookup_name(&self, name: &str) -> Result<Option<UserIdentity>>;
}

pub trait ContentStore {
    /// Fetch a page by title, including redirect target if the page is one.
    fn page(&self, title: &Title) -> Result<Option<Page>>;
}

pub trait AvatarStore {
    /// The avatar for an account at the given size; implementations fall
    /// back to the default image when no custom avatar was uploaded.
    fn avatar(&self, user_id: u64, size: AvatarSize) -> Result<Avatar>;

    /// The site default avatar. Infallible so degraded render paths always
    /// have an image to fall back on.
    fn default_avatar(&self, size: AvatarSize) -> Avatar;
}

pub trait Localizer {
    /// The localized text for a message key, or `None` when the key has no
    /// definition.
    fn message(&self, key: &str) -> Option<String>;

    /// Join already-rendered items with the locale's list separator.
    fn list_to_text(&self, items: &[String]) -> String;

    /// A human-readable date in the viewer's locale.
    fn format_date(&self, date: &DateTime<Utc>) -> String;

    /// Message text with the key itself as the fallback.
    fn text(&self, key: &str) -> String {
        self.message(key).unwrap_or_else(|| key.to_string())
    }
}

pub trait UrlBuilder {
    /// Absolute URL for a special-purpose destination, optionally
    /// parameterized with a target user name.
    fn special_page(&self, page: SpecialPage, target: Option<&str>) -> String;
}

/// The full set of collaborators a render call needs, borrowed for the
/// duration of one request.
#[derive(Clone, Copy)]
pub struct ProfileServices<'a> {
    pub identities: &'a dyn IdentityStore,
    pub content: &'a dyn ContentStore,
    pub avatars: &'a dyn AvatarStore,
    pub messages: &'a dyn Localizer,
    pub urls: &'a dyn UrlBuilder,
}
