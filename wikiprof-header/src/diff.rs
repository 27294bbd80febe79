use crate::html;
use crate::store::ProfileServices;
use crate::types::{
    Avatar, AvatarSize, NewDiffHeaderParts, OldDiffHeaderParts, RenderConfiguration,
    RevisionAuthorship,
};
use tracing::warn;

/// Splices author avatars into diff headers. Strictly best-effort: diff
/// rendering must never break because an avatar could not be looked up, so
/// every failure path degrades to the default avatar.
#[derive(Clone, Copy)]
pub struct DiffAvatarDecorator<'a> {
    pub services: ProfileServices<'a>,
    pub config: &'a RenderConfiguration,
}

impl<'a> DiffAvatarDecorator<'a> {
    pub fn new(services: ProfileServices<'a>, config: &'a RenderConfiguration) -> Self {
        Self { services, config }
    }

    fn lookup_avatar(&self, author: &RevisionAuthorship) -> Avatar {
        let user_id = match author.user_id {
            // The host sometimes reports only a raw legacy identifier for
            // old revisions; render the default avatar for those
            None => return self.services.avatars.default_avatar(AvatarSize::Large),
            Some(user_id) => user_id,
        };
        match self.services.avatars.avatar(user_id, AvatarSize::Large) {
            Ok(avatar) => avatar,
            Err(err) => {
                warn!(author = %author.name, %err, "avatar lookup failed, using default");
                self.services.avatars.default_avatar(AvatarSize::Large)
            }
        }
    }

    /// The avatar image for one side of a diff, tagged with the author's
    /// display name and the styling marker the host stylesheet positions.
    pub fn decorate(&self, author: &RevisionAuthorship) -> String {
        let avatar = self.lookup_avatar(author);
        html::img(
            &avatar.url,
            &[
                ("alt", author.name.as_str()),
                ("title", author.name.as_str()),
                ("class", "diff-avatar"),
            ],
        )
    }

    /// Full replacement header for the old side of a diff, or `None` when
    /// diff avatars are disabled and the host header should stand.
    pub fn old_header(
        &self,
        parts: &OldDiffHeaderParts,
        author: &RevisionAuthorship,
    ) -> Option<String> {
        if !self.config.avatars_in_diffs {
            return None;
        }
        let avatar = self.decorate(author);
        Some(format!(
            "<div id=\"mw-diff-otitle1\"><h4>{}</h4></div>\
             <div id=\"mw-diff-otitle2\">{}<div id=\"mw-diff-oinfo\">{}{}</div></div>\
             <div id=\"mw-diff-otitle3\" class=\"rccomment\">{}{}</div>\
             <div id=\"mw-diff-otitle4\">{}</div>",
            parts.revision_header,
            avatar,
            parts.user_tools,
            parts.comment,
            parts.minor_mark,
            parts.deletion_link,
            parts.prev_link
        ))
    }

    /// Full replacement header for the new side of a diff.
    pub fn new_header(
        &self,
        parts: &NewDiffHeaderParts,
        author: &RevisionAuthorship,
    ) -> Option<String> {
        if !self.config.avatars_in_diffs {
            return None;
        }
        let avatar = self.decorate(author);
        let revision_header = if parts.revision_tools.is_empty() {
            parts.revision_header.clone()
        } else {
            format!("{} {}", parts.revision_header, parts.revision_tools.join(" "))
        };
        Some(format!(
            "<div id=\"mw-diff-ntitle1\"><h4>{}</h4></div>\
             <div id=\"mw-diff-ntitle2\">{}<div id=\"mw-diff-ninfo\">{} {} {}</div></div>\
             <div id=\"mw-diff-ntitle3\" class=\"rccomment\">{}{}</div>\
             <div id=\"mw-diff-ntitle4\">{}{}</div>",
            revision_header,
            avatar,
            parts.user_tools,
            parts.rollback,
            parts.comment,
            parts.minor_mark,
            parts.deletion_link,
            parts.next_link,
            parts.patrol_link
        ))
    }
}
