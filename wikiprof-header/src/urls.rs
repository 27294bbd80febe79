use crate::store::UrlBuilder;
use crate::types::SpecialPage;

/// Baseline `UrlBuilder` for hosts using the standard `index.php?title=`
/// entry point. Hosts with prettier routing supply their own impl.
#[derive(Clone, Debug, PartialEq)]
pub struct SiteUrls {
    pub script_url: String,
}

impl SiteUrls {
    pub fn new<S: Into<String>>(script_url: S) -> Self {
        Self {
            script_url: script_url.into(),
        }
    }
}

impl UrlBuilder for SiteUrls {
    fn special_page(&self, page: SpecialPage, target: Option<&str>) -> String {
        let title = match target {
            None => format!("Special:{}", page.canonical_name()),
            Some(target) => format!(
                "Special:{}/{}",
                page.canonical_name(),
                target.replace(' ', "_")
            ),
        };
        format!(
            "{}?title={}",
            self.script_url,
            urlencoding::encode(&title)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unparameterized_special_page() {
        let urls = SiteUrls::new("https://wiki.example.org/index.php");
        assert_eq!(
            urls.special_page(SpecialPage::Watchlist, None),
            "https://wiki.example.org/index.php?title=Special%3AWatchlist"
        );
    }

    #[test]
    fn test_target_user_is_encoded() {
        let urls = SiteUrls::new("https://wiki.example.org/index.php");
        assert_eq!(
            urls.special_page(SpecialPage::Contributions, Some("Foo bar")),
            "https://wiki.example.org/index.php?title=Special%3AContributions%2FFoo_bar"
        );
    }
}
