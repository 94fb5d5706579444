use std::{fmt::Display, str::FromStr};

use reqwest::Url;
use url::ParseError;

/// The placeholder in a url template that is replaced by the list name.
pub const LIST_NAME_PLACEHOLDER: &str = "*s";

/// The base url of a single mailing list's admin pages, for example
/// `http://lists.example.org/admin.cgi/examplelist`.
///
/// All endpoints are derived by appending a path to this url, which
/// is why a trailing slash is removed when parsing.
#[derive(Debug, PartialEq, Clone)]
pub struct ListUrl(Url);

impl ListUrl {
    pub fn parse(s: &str) -> Result<ListUrl, ParseError> {
        s.parse::<ListUrl>()
    }

    /// Substitutes the list name into the template and parses the
    /// result.
    pub fn from_template(template: &str, list_name: &str) -> Result<ListUrl, ParseError> {
        ListUrl::parse(&template.replace(LIST_NAME_PLACEHOLDER, list_name))
    }

    pub fn as_url(&self) -> &Url {
        let ListUrl(u) = self;
        u
    }

    pub fn as_str(&self) -> &str {
        self.as_url().as_str().trim_end_matches('/')
    }

    /// Appends `path` to the list url.
    pub fn endpoint(&self, path: &str) -> Result<Url, ParseError> {
        Url::parse(&format!("{}/{}", self.as_str(), path.trim_start_matches('/')))
    }

    /// The first member listing page.
    pub fn members_list(&self) -> Result<Url, ParseError> {
        self.endpoint("members/list?letter=0")
    }

    pub fn members_add(&self) -> Result<Url, ParseError> {
        self.endpoint("members/add")
    }

    pub fn members_remove(&self) -> Result<Url, ParseError> {
        self.endpoint("members/remove")
    }
}

impl Display for ListUrl {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ListUrl {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Url::parse(s.trim_end_matches('/')).map(ListUrl)
    }
}
