use lazy_static::lazy_static;
use regex::Regex;
use thiserror::Error;

pub const MAX_TITLE_BYTES: usize = 255;

lazy_static! {
    // Characters the host platform never allows in a page title
    static ref ILLEGAL_TITLE_CHARS_REGEX: Regex =
        Regex::new(r#"[\x00-\x1f#<>\[\]\{\}\|]"#).unwrap();

    // Runs of whitespace or underscores collapse to a single space
    static ref TITLE_WHITESPACE_REGEX: Regex = Regex::new(r"[\s_]+").unwrap();
}

#[derive(Error, Debug)]
pub enum TitleError {
    #[error("TitleError: Empty title")]
    EmptyTitle,
    #[error("TitleError: Illegal characters in title `{0}`")]
    IllegalCharacters(String),
    #[error("TitleError: Title is too long (255 bytes max): `{0}`")]
    TitleTooLong(String),
    #[error("TitleError: Relative path component in title `{0}`")]
    RelativePath(String),
}

/// Namespaces this library cares about. Anything else round-trips through
/// `Other` with its canonicalized prefix text.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Namespace {
    Main,
    User,
    UserTalk,
    Special,
    Other(String),
}

impl Namespace {
    fn from_prefix(prefix: &str) -> Option<Namespace> {
        match prefix.to_lowercase().as_str() {
            "user" => Some(Namespace::User),
            "user talk" => Some(Namespace::UserTalk),
            "special" => Some(Namespace::Special),
            _ => None,
        }
    }

    pub fn prefix(&self) -> Option<&str> {
        match self {
            Namespace::Main => None,
            Namespace::User => Some("User"),
            Namespace::UserTalk => Some("User talk"),
            Namespace::Special => Some("Special"),
            Namespace::Other(prefix) => Some(prefix),
        }
    }
}

/// A parsed, canonicalized page title: namespace plus page-local name.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Title {
    pub namespace: Namespace,
    pub page_name: String,
}

impl Title {
    pub fn from_parts<S: Into<String>>(namespace: Namespace, page_name: S) -> Self {
        Self {
            namespace,
            page_name: page_name.into(),
        }
    }

    /// Full prefixed form, e.g. `User:Example/bio`.
    pub fn full_name(&self) -> String {
        match self.namespace.prefix() {
            None => self.page_name.clone(),
            Some(prefix) => format!("{}:{}", prefix, self.page_name),
        }
    }

    /// Subpages hang off a base page with a slash, e.g. `Example/bio`.
    pub fn is_subpage(&self) -> bool {
        self.page_name.contains('/')
    }

    /// Everything before the last slash, or the whole name for non-subpages.
    pub fn base_name(&self) -> &str {
        match self.page_name.rfind('/') {
            None => &self.page_name,
            Some(idx) => &self.page_name[..idx],
        }
    }

    /// The component after the last slash, if this is a subpage.
    pub fn subpage_name(&self) -> Option<&str> {
        self.page_name.rfind('/').map(|idx| &self.page_name[idx + 1..])
    }
}

/// Uppercase the first character, the way the host platform canonicalizes
/// page names and user names.
pub fn ucfirst<S: Into<String>>(text: S) -> String {
    let text: String = text.into();
    let mut chars = text.chars();
    match chars.next() {
        None => text,
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
    }
}

/// Collapse underscores and whitespace runs to single spaces and trim.
pub fn normalize_title_text<S: Into<String>>(text: S) -> String {
    let text: String = text.into();
    TITLE_WHITESPACE_REGEX
        .replace_all(&text, " ")
        .trim()
        .to_string()
}

pub fn ensure_valid_title_text<S: Into<String>>(text: S) -> Result<(), TitleError> {
    let text: String = text.into();
    if text.is_empty() {
        return Err(TitleError::EmptyTitle);
    }
    if ILLEGAL_TITLE_CHARS_REGEX.is_match(&text) {
        return Err(TitleError::IllegalCharacters(text));
    }
    if text.len() > MAX_TITLE_BYTES {
        return Err(TitleError::TitleTooLong(text));
    }
    if text
        .split('/')
        .any(|component| component == "." || component == "..")
    {
        return Err(TitleError::RelativePath(text));
    }
    Ok(())
}

// Title constraints, in English:
//  - underscores are interchangeable with spaces; runs collapse to one space
//  - a leading colon forces the main namespace and is stripped
//  - the text before the first colon is a namespace prefix when it names a
//    known namespace (case-insensitive); otherwise the colon is part of a
//    main-namespace page name
//  - the page name's first letter is uppercased
//  - no control characters or #<>[]{}| anywhere
//  - at most 255 bytes after normalization
//  - "." and ".." path components are rejected
pub fn parse_title<S: Into<String>>(text: S) -> Result<Title, TitleError> {
    let mut text = normalize_title_text(text);

    let forced_main = text.starts_with(':');
    if forced_main {
        text = text[1..].trim_start().to_string();
    }
    ensure_valid_title_text(&text)?;

    if !forced_main {
        if let Some((prefix, rest)) = text.split_once(':') {
            if let Some(namespace) = Namespace::from_prefix(prefix.trim()) {
                let page_name = rest.trim_start();
                if page_name.is_empty() {
                    return Err(TitleError::EmptyTitle);
                }
                return Ok(Title::from_parts(namespace, ucfirst(page_name)));
            }
        }
    }

    Ok(Title::from_parts(Namespace::Main, ucfirst(text)))
}

pub fn is_valid_title<S: Into<String>>(text: S) -> bool {
    parse_title(text).is_ok()
}
