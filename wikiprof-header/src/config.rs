//! Environment-variable loading for `RenderConfiguration`. The host
//! process owns reading any dotenv-style files; this module only consumes
//! the already-populated environment.

use crate::types::RenderConfiguration;
use std::env;

pub fn env_int(name: &str) -> Option<usize> {
    match env::var(name) {
        Ok(str) => match str.parse::<usize>() {
            Ok(int) => Some(int),
            _ => None,
        },
        _ => None,
    }
}

pub fn env_str(name: &str) -> Option<String> {
    match env::var(name) {
        Ok(str) => Some(str),
        _ => None,
    }
}

pub fn env_bool(name: &str) -> Option<bool> {
    match env::var(name) {
        Ok(str) if str == "true" || str == "1" => Some(true),
        Ok(str) if str == "false" || str == "0" => Some(false),
        _ => None,
    }
}

pub fn env_list(name: &str) -> Vec<String> {
    match env::var(name) {
        Ok(str) => str.split(',').map(|s| s.to_string()).collect(),
        _ => Vec::new(),
    }
}

pub fn env_to_cfg() -> RenderConfiguration {
    let defaults = RenderConfiguration::default();
    let tag_groups_allowlist = {
        let list = env_list("WIKIPROF_TAG_GROUPS");
        if list.is_empty() {
            defaults.tag_groups_allowlist
        } else {
            list
        }
    };
    RenderConfiguration {
        show_group_tags: env_bool("WIKIPROF_SHOW_GROUP_TAGS").unwrap_or(defaults.show_group_tags),
        tag_groups_allowlist,
        max_group_tags_shown: env_int("WIKIPROF_MAX_GROUP_TAGS")
            .unwrap_or(defaults.max_group_tags_shown),
        show_edit_count: env_bool("WIKIPROF_SHOW_EDIT_COUNT").unwrap_or(defaults.show_edit_count),
        allow_bio: env_bool("WIKIPROF_ALLOW_BIO").unwrap_or(defaults.allow_bio),
        follow_bio_redirects: env_bool("WIKIPROF_FOLLOW_BIO_REDIRECTS")
            .unwrap_or(defaults.follow_bio_redirects),
        avatars_in_diffs: env_bool("WIKIPROF_AVATARS_IN_DIFFS")
            .unwrap_or(defaults.avatars_in_diffs),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_without_env() {
        temp_env::with_vars_unset(
            [
                "WIKIPROF_SHOW_GROUP_TAGS",
                "WIKIPROF_TAG_GROUPS",
                "WIKIPROF_MAX_GROUP_TAGS",
                "WIKIPROF_SHOW_EDIT_COUNT",
                "WIKIPROF_ALLOW_BIO",
                "WIKIPROF_FOLLOW_BIO_REDIRECTS",
                "WIKIPROF_AVATARS_IN_DIFFS",
            ],
            || {
                assert_eq!(env_to_cfg(), RenderConfiguration::default());
            },
        );
    }

    #[test]
    fn test_env_overrides() {
        temp_env::with_vars(
            [
                ("WIKIPROF_SHOW_GROUP_TAGS", Some("false")),
                ("WIKIPROF_TAG_GROUPS", Some("sysop,steward")),
                ("WIKIPROF_MAX_GROUP_TAGS", Some("5")),
                ("WIKIPROF_FOLLOW_BIO_REDIRECTS", Some("1")),
            ],
            || {
                let cfg = env_to_cfg();
                assert!(!cfg.show_group_tags);
                assert_eq!(cfg.tag_groups_allowlist, vec!["sysop", "steward"]);
                assert_eq!(cfg.max_group_tags_shown, 5);
                assert!(cfg.follow_bio_redirects);
                assert!(cfg.allow_bio); // untouched default
            },
        );
    }

    #[test]
    fn test_env_bool_rejects_garbage() {
        temp_env::with_var("WIKIPROF_ALLOW_BIO", Some("yes please"), || {
            assert!(env_to_cfg().allow_bio); // falls back to default
        });
    }
}
