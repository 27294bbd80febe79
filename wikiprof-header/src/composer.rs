use crate::errors::Error;
use crate::html;
use crate::store::ProfileServices;
use crate::types::{
    AvatarSize, ProfileAction, ProfileHeaderFragment, RenderConfiguration, SpecialPage,
    UserIdentity, ViewerContext,
};
use anyhow::{bail, Result};
use tracing::debug;
use wikiprof_syntax::title::{Namespace, Title};

const BLOCKED_MESSAGE_KEY: &str = "user-profile-blocked";
const REMOVE_AVATAR_MESSAGE_KEY: &str = "user-profile-remove-avatar";
const EDIT_COUNT_LABEL_KEY: &str = "user-profile-editcount-label";

/// Composes the ordered profile-header fragments for one page view. Holds
/// no state across calls; every decision is a function of the owner, the
/// viewer, the configuration, and what the collaborators report.
#[derive(Clone, Copy)]
pub struct ProfileHeaderComposer<'a> {
    pub services: ProfileServices<'a>,
    pub config: &'a RenderConfiguration,
}

impl<'a> ProfileHeaderComposer<'a> {
    pub fn new(services: ProfileServices<'a>, config: &'a RenderConfiguration) -> Self {
        Self { services, config }
    }

    pub fn compose(
        &self,
        owner: &UserIdentity,
        viewer: &ViewerContext,
    ) -> Result<ProfileHeaderFragment> {
        // Anonymous owners take the host's default rendering path; landing
        // here with one is a caller bug.
        if owner.is_anonymous {
            bail!(Error::AnonymousOwnerError(owner.name.clone()));
        }
        debug!(owner = %owner.name, viewer = %viewer.identity.name, "composing profile header");

        let avatar = self.services.avatars.avatar(owner.id, AvatarSize::Large)?;
        let avatar_html = html::img(
            &avatar.url,
            &[("alt", owner.name.as_str()), ("class", "avatar")],
        );

        Ok(ProfileHeaderFragment {
            avatar: avatar_html,
            remove_avatar_link: self.remove_avatar_link(owner, viewer, avatar.is_default),
            name_heading: format!("<h1 itemprop=\"name\">{}</h1>", html::escape(&owner.name)),
            group_tags: self.group_tags(owner),
            edit_count: self.edit_count_block(owner),
            bio: self.bio_block(owner)?,
            action_links: self.action_links(owner, viewer),
        })
    }

    /// The removal link shows when the avatar is custom and the viewer may
    /// act on it. Privileged viewers get the link parameterized with the
    /// owner's name so the shared removal page targets *this* owner; an
    /// owner removing their own gets the unparameterized form, which the
    /// removal page scopes to the current account.
    fn remove_avatar_link(
        &self,
        owner: &UserIdentity,
        viewer: &ViewerContext,
        avatar_is_default: bool,
    ) -> Option<String> {
        if avatar_is_default {
            return None;
        }
        if !viewer.can_remove_others_avatars && !viewer.is_owner(owner) {
            return None;
        }
        let target = if viewer.can_remove_others_avatars {
            Some(owner.name.as_str())
        } else {
            None
        };
        let url = self
            .services
            .urls
            .special_page(SpecialPage::RemoveAvatar, target);
        let label = self.services.messages.text(REMOVE_AVATAR_MESSAGE_KEY);
        Some(format!(
            "<p>{}</p>",
            html::anchor(&url, &label, &[("rel", "nofollow")])
        ))
    }

    /// A blocked owner gets exactly one badge; otherwise badges follow the
    /// allowlist's precedence order up to the configured cap. Roles beyond
    /// the cap are counted but not rendered.
    fn group_tags(&self, owner: &UserIdentity) -> Option<String> {
        if !self.config.show_group_tags {
            return None;
        }
        if owner.is_blocked {
            let label = self.services.messages.text(BLOCKED_MESSAGE_KEY);
            return Some(format!(
                "<span class=\"tag tag-blocked\">{}</span>",
                html::escape(&label)
            ));
        }
        let mut shown: Vec<String> = Vec::new();
        let mut matched = 0usize;
        for role in &self.config.tag_groups_allowlist {
            if !owner.groups.contains(role) {
                continue;
            }
            matched += 1;
            if matched > self.config.max_group_tags_shown {
                continue;
            }
            let label = self
                .services
                .messages
                .message(&format!("group-{role}"))
                .unwrap_or_else(|| role.clone());
            shown.push(format!(
                "<span class=\"tag tag-{}\">{}</span>",
                html::escape(role),
                html::escape(&label)
            ));
        }
        if matched > shown.len() {
            debug!(owner = %owner.name, matched, rendered = shown.len(), "group tags over cap");
        }
        if shown.is_empty() {
            None
        } else {
            Some(shown.join(" "))
        }
    }

    /// Edit count and registration date as one link to the contributions
    /// page. An unknown registration date renders as empty text.
    fn edit_count_block(&self, owner: &UserIdentity) -> Option<String> {
        if !self.config.show_edit_count {
            return None;
        }
        let contribs_url = self
            .services
            .urls
            .special_page(SpecialPage::Contributions, Some(&owner.name));
        let label = self.services.messages.text(EDIT_COUNT_LABEL_KEY);
        let registration = owner
            .registration
            .as_ref()
            .map(|date| self.services.messages.format_date(date))
            .unwrap_or_default();
        Some(format!(
            "<br/> <div class=\"contributions-details tally\"><a href=\"{}\"><em>{}</em><span>{}<br>{}</span></a></div>",
            html::escape(&contribs_url),
            owner.edit_count,
            html::escape(&label),
            html::escape(&registration)
        ))
    }

    /// The bio lives at `User:<name>/bio` by convention. Missing page or a
    /// non-text content model yields no block. With redirect following
    /// enabled, exactly one hop is taken, and only to another page in the
    /// user namespace; a target that is itself a redirect yields no block.
    fn bio_block(&self, owner: &UserIdentity) -> Result<Option<String>> {
        if !self.config.allow_bio {
            return Ok(None);
        }
        let bio_title = Title::from_parts(Namespace::User, format!("{}/bio", owner.name));
        let mut page = match self.services.content.page(&bio_title)? {
            None => return Ok(None),
            Some(page) => page,
        };

        if page.is_redirect() {
            if !self.config.follow_bio_redirects {
                return Ok(None);
            }
            let target = match page.redirect_target.clone() {
                Some(target) if target.namespace == Namespace::User => target,
                _ => return Ok(None),
            };
            page = match self.services.content.page(&target)? {
                None => return Ok(None),
                Some(target_page) => target_page,
            };
            // One hop only; a redirect chain is never chased further
            if page.is_redirect() {
                debug!(owner = %owner.name, "bio redirect chain longer than one hop");
                return Ok(None);
            }
        }

        if !page.model.is_text() {
            return Ok(None);
        }
        Ok(Some(format!(
            "<div class=\"profile-bio\">{}</div>",
            html::escape(&page.text)
        )))
    }

    /// Contributions is always present; owners additionally get upload-
    /// avatar and watchlist links ahead of it. Joined with the locale list
    /// separator.
    fn action_links(&self, owner: &UserIdentity, viewer: &ViewerContext) -> String {
        let mut actions: Vec<ProfileAction> = Vec::new();
        if viewer.is_owner(owner) {
            actions.push(ProfileAction::UploadAvatar);
            actions.push(ProfileAction::Watchlist);
        }
        actions.push(ProfileAction::Contributions);

        let rendered: Vec<String> = actions
            .iter()
            .map(|action| {
                let target = match action {
                    ProfileAction::Contributions => Some(owner.name.as_str()),
                    _ => None,
                };
                let url = self.services.urls.special_page(action.special_page(), target);
                let label = self.services.messages.text(action.message_key());
                let attrs: &[(&str, &str)] = match action {
                    ProfileAction::Contributions => &[("rel", "nofollow")],
                    _ => &[],
                };
                html::anchor(&url, &label, attrs)
            })
            .collect();
        self.services.messages.list_to_text(&rendered)
    }
}
