use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use wikiprof_syntax::title::Title;

/// Snapshot of a resolved account, fetched fresh per request and never
/// persisted by this library.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct UserIdentity {
    pub name: String,
    /// 0 for anonymous or otherwise unresolved identities.
    pub id: u64,
    pub is_anonymous: bool,
    pub is_blocked: bool,
    pub groups: BTreeSet<String>,
    pub edit_count: u64,
    pub registration: Option<DateTime<Utc>>,
}

/// Whoever issued the current request, plus the one capability the header
/// cares about.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ViewerContext {
    pub identity: UserIdentity,
    pub can_remove_others_avatars: bool,
}

impl ViewerContext {
    pub fn is_owner(&self, owner: &UserIdentity) -> bool {
        self.identity.name == owner.name
    }
}

/// Site-wide rendering toggles, passed explicitly into every call.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RenderConfiguration {
    pub show_group_tags: bool,
    /// Which roles may produce a badge, in display precedence order.
    pub tag_groups_allowlist: Vec<String>,
    pub max_group_tags_shown: usize,
    pub show_edit_count: bool,
    pub allow_bio: bool,
    /// Experimental; at most one redirect hop is ever followed.
    pub follow_bio_redirects: bool,
    pub avatars_in_diffs: bool,
}

impl Default for RenderConfiguration {
    fn default() -> Self {
        Self {
            show_group_tags: true,
            tag_groups_allowlist: vec![
                "bureaucrat".to_string(),
                "bot".to_string(),
                "sysop".to_string(),
                "interface-admin".to_string(),
            ],
            max_group_tags_shown: 2,
            show_edit_count: true,
            allow_bio: true,
            follow_bio_redirects: false,
            avatars_in_diffs: false,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum AvatarSize {
    Small,
    Medium,
    MediumLarge,
    Large,
}

impl AvatarSize {
    pub fn code(&self) -> &'static str {
        match self {
            AvatarSize::Small => "s",
            AvatarSize::Medium => "m",
            AvatarSize::MediumLarge => "ml",
            AvatarSize::Large => "l",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Avatar {
    pub url: String,
    /// True when the owner never uploaded one and this is the site fallback.
    pub is_default: bool,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ContentModel {
    PlainText,
    Wikitext,
    Other(String),
}

impl ContentModel {
    /// Text-bearing models are the only ones a bio may render from.
    pub fn is_text(&self) -> bool {
        matches!(self, ContentModel::PlainText | ContentModel::Wikitext)
    }
}

/// A content page as reported by the content store.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Page {
    pub title: Title,
    pub model: ContentModel,
    pub text: String,
    pub redirect_target: Option<Title>,
}

impl Page {
    pub fn is_redirect(&self) -> bool {
        self.redirect_target.is_some()
    }
}

/// Special-purpose destinations the URL builder knows how to address.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum SpecialPage {
    Watchlist,
    Contributions,
    UploadAvatar,
    RemoveAvatar,
}

impl SpecialPage {
    pub fn canonical_name(&self) -> &'static str {
        match self {
            SpecialPage::Watchlist => "Watchlist",
            SpecialPage::Contributions => "Contributions",
            SpecialPage::UploadAvatar => "UploadAvatar",
            SpecialPage::RemoveAvatar => "RemoveAvatar",
        }
    }
}

/// Typed action-link descriptor. Rendering order is the order these appear
/// in the composed list; that order is a compatibility contract.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProfileAction {
    UploadAvatar,
    Watchlist,
    Contributions,
}

impl ProfileAction {
    pub fn message_key(&self) -> &'static str {
        match self {
            ProfileAction::UploadAvatar => "user-upload-avatar",
            ProfileAction::Watchlist => "user-watchlist",
            ProfileAction::Contributions => "user-contributions",
        }
    }

    pub fn special_page(&self) -> SpecialPage {
        match self {
            ProfileAction::UploadAvatar => SpecialPage::UploadAvatar,
            ProfileAction::Watchlist => SpecialPage::Watchlist,
            ProfileAction::Contributions => SpecialPage::Contributions,
        }
    }
}

/// The composed header: named HTML-safe blocks, built once per render.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ProfileHeaderFragment {
    pub avatar: String,
    pub remove_avatar_link: Option<String>,
    pub name_heading: String,
    pub group_tags: Option<String>,
    pub edit_count: Option<String>,
    pub bio: Option<String>,
    pub action_links: String,
}

impl ProfileHeaderFragment {
    /// Assembly order is fixed: avatar (+ removal link), name heading,
    /// group tags, edit count, bio, action links.
    pub fn to_html(&self) -> String {
        let mut out = String::new();
        out.push_str("<div id=\"profile-image\">");
        out.push_str(&self.avatar);
        if let Some(ref remove_link) = self.remove_avatar_link {
            out.push_str(remove_link);
        }
        out.push_str("</div>");
        out.push_str("<div id=\"profile-right\">");
        out.push_str("<div class=\"hgroup\">");
        out.push_str(&self.name_heading);
        if let Some(ref group_tags) = self.group_tags {
            out.push_str(group_tags);
        }
        if let Some(ref edit_count) = self.edit_count {
            out.push_str(edit_count);
        }
        if let Some(ref bio) = self.bio {
            out.push_str(bio);
        }
        out.push_str("<div class=\"visualClear\"></div></div>");
        out.push_str("<div class=\"profile-actions\">");
        out.push_str(&self.action_links);
        out.push_str("</div></div>");
        out
    }
}

/// Authorship of one side of a diff. `user_id` is `None` when the host
/// reports only a raw legacy identifier for the author.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RevisionAuthorship {
    pub name: String,
    pub user_id: Option<u64>,
}

/// Pre-rendered pieces the diff pipeline supplies for the old side.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct OldDiffHeaderParts {
    pub revision_header: String,
    pub user_tools: String,
    pub comment: String,
    pub minor_mark: String,
    pub deletion_link: String,
    pub prev_link: String,
}

/// Pre-rendered pieces the diff pipeline supplies for the new side.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct NewDiffHeaderParts {
    pub revision_header: String,
    pub revision_tools: Vec<String>,
    pub user_tools: String,
    pub rollback: String,
    pub comment: String,
    pub minor_mark: String,
    pub deletion_link: String,
    pub next_link: String,
    pub patrol_link: String,
}
