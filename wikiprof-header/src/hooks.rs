//! Dispatch decisions exposed to the host pipeline: when to substitute the
//! composed profile header for default article rendering, which titles to
//! report as known link targets, and which client asset bundles each
//! feature needs.

use crate::types::RenderConfiguration;
use wikiprof_syntax::ip::is_ip_address;
use wikiprof_syntax::title::{Namespace, Title};

pub const PROFILE_STYLE_MODULES: &[&str] = &["wikiprof.clearfix", "wikiprof.userprofile.styles"];
pub const PROFILE_SCRIPT_MODULES: &[&str] = &["wikiprof.userprofile.scripts"];
pub const DIFF_STYLE_MODULES: &[&str] = &["wikiprof.userprofile.diff"];

/// Profile pages are synthesized rather than stored, so every non-subpage
/// title in the user namespace is a known link target even when no page
/// content was ever saved.
pub fn title_is_always_known(title: &Title) -> bool {
    title.namespace == Namespace::User && !title.is_subpage()
}

/// Whether a request for this title gets the composed header instead of
/// default article rendering. Raw network-address names keep the default
/// path; those identities are anonymous, not accounts.
pub fn should_substitute_profile(title: &Title) -> bool {
    title.namespace == Namespace::User
        && !title.is_subpage()
        && !is_ip_address(&title.page_name)
}

/// What the host page pipeline must set up when substituting a profile.
#[derive(Clone, Debug, PartialEq)]
pub struct ProfileDispatch {
    pub style_modules: &'static [&'static str],
    pub script_modules: &'static [&'static str],
    /// Synthesized headers depend on per-viewer state, so the page must
    /// not be client- or parser-cached.
    pub disable_cache: bool,
}

/// `None` keeps default rendering for this title.
pub fn dispatch_for_title(title: &Title) -> Option<ProfileDispatch> {
    if !should_substitute_profile(title) {
        return None;
    }
    Some(ProfileDispatch {
        style_modules: PROFILE_STYLE_MODULES,
        script_modules: PROFILE_SCRIPT_MODULES,
        disable_cache: true,
    })
}

/// Style bundles the diff pipeline should load, given the configuration.
pub fn diff_style_modules(config: &RenderConfiguration) -> &'static [&'static str] {
    if config.avatars_in_diffs {
        DIFF_STYLE_MODULES
    } else {
        &[]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wikiprof_syntax::title::parse_title;

    #[test]
    fn test_user_titles_are_always_known() {
        assert!(title_is_always_known(&parse_title("User:Example").unwrap()));
        assert!(title_is_always_known(&parse_title("User:10.0.0.1").unwrap()));
        assert!(!title_is_always_known(&parse_title("User:Example/bio").unwrap()));
        assert!(!title_is_always_known(&parse_title("Example").unwrap()));
        assert!(!title_is_always_known(&parse_title("User talk:Example").unwrap()));
    }

    #[test]
    fn test_substitution_gate() {
        assert!(should_substitute_profile(&parse_title("User:Example").unwrap()));
        assert!(!should_substitute_profile(&parse_title("User:Example/bio").unwrap()));
        assert!(!should_substitute_profile(&parse_title("Example").unwrap()));
        assert!(!should_substitute_profile(&parse_title("User:10.0.0.1").unwrap()));
        assert!(!should_substitute_profile(&parse_title("User:2001:db8::1").unwrap()));
    }

    #[test]
    fn test_dispatch_for_title() {
        let dispatch = dispatch_for_title(&parse_title("User:Example").unwrap()).unwrap();
        assert!(dispatch.disable_cache);
        assert_eq!(dispatch.style_modules, PROFILE_STYLE_MODULES);
        assert!(dispatch_for_title(&parse_title("User:127.0.0.1").unwrap()).is_none());
    }

    #[test]
    fn test_diff_style_modules_follow_flag() {
        let mut config = RenderConfiguration::default();
        config.avatars_in_diffs = true;
        assert_eq!(diff_style_modules(&config), DIFF_STYLE_MODULES);
        config.avatars_in_diffs = false;
        assert!(diff_style_modules(&config).is_empty());
    }
}
