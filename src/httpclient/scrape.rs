//! Extracts data from the html pages of the list admin interface.
//!
//! All functions here are lenient: markup that does not look as
//! expected simply yields no results.

use super::data::{Member, StatusMessage};
use reqwest::Url;
use scraper::{ElementRef, Html, Selector};

/// The suffix of the input fields holding a member's display name.
/// The field name is the percent-encoded email followed by this
/// suffix.
pub const REALNAME_SUFFIX: &str = "_realname";

fn selector(css: &'static str) -> Selector {
    Selector::parse(css).expect("static selector")
}

/// All `href` targets of the page, resolved against `page_url`.
fn links(doc: &Html, page_url: &Url) -> Vec<Url> {
    let sel = selector("a[href]");
    doc.select(&sel)
        .filter_map(|a| a.value().attr("href"))
        .filter_map(|href| match page_url.join(href) {
            Ok(u) => Some(u),
            Err(e) => {
                log::debug!("Ignoring link '{}': {}", href, e);
                None
            }
        })
        .collect()
}

fn query_value(url: &Url, key: &str) -> Option<String> {
    url.query_pairs()
        .find(|(k, _)| k == key)
        .map(|(_, v)| v.into_owned())
}

/// Links to the "members by letter" pages, without duplicates and in
/// the order they appear.
pub fn letter_links(html: &str, page_url: &Url) -> Vec<Url> {
    let doc = Html::parse_document(html);
    let mut pages: Vec<Url> = Vec::new();
    for url in links(&doc, page_url) {
        let is_members = url
            .path_segments()
            .and_then(|mut s| s.next_back())
            .is_some_and(|last| last == "members");
        let is_letter = query_value(&url, "letter").is_some_and(|l| l.chars().count() == 1);
        let is_chunk = query_value(&url, "chunk").is_some();
        if is_members && is_letter && !is_chunk && !pages.contains(&url) {
            pages.push(url);
        }
    }
    pages
}

/// The highest chunk index referenced by any link on the page.
pub fn max_chunk(doc: &Html, page_url: &Url) -> Option<usize> {
    links(doc, page_url)
        .iter()
        .filter_map(|u| query_value(u, "chunk"))
        .filter_map(|c| c.parse::<usize>().ok())
        .max()
}

/// Members from the `<name>_realname` input fields of a listing page.
pub fn members(doc: &Html) -> Vec<Member> {
    let sel = selector("input[name]");
    doc.select(&sel)
        .filter_map(|input| {
            let name = input.value().attr("name")?;
            let encoded = name.strip_suffix(REALNAME_SUFFIX)?;
            Some(Member {
                email: decode_email(encoded),
                name: input.value().attr("value").unwrap_or_default().to_string(),
            })
        })
        .collect()
}

/// Percent-decodes an email address taken from a field name.
pub fn decode_email(encoded: &str) -> String {
    String::from_utf8_lossy(&urlencoding::decode_binary(encoded.as_bytes())).into_owned()
}

fn element_text(el: &ElementRef) -> String {
    el.text().collect::<String>().trim().to_string()
}

/// The `h5` status headings of a response, each with the items of
/// the `ul` that follows it.
pub fn status_messages(html: &str) -> Vec<StatusMessage> {
    let doc = Html::parse_document(html);
    let sel = selector("body h5");
    doc.select(&sel)
        .map(|h5| StatusMessage {
            heading: element_text(&h5),
            details: detail_list(&h5),
        })
        .collect()
}

fn detail_list(heading: &ElementRef) -> Option<Vec<String>> {
    let li = selector("li");
    heading
        .next_siblings()
        .filter_map(ElementRef::wrap)
        .take_while(|el| el.value().name() != "h5")
        .find(|el| el.value().name() == "ul")
        .map(|ul| {
            let items: Vec<String> = ul
                .select(&li)
                .map(|item| element_text(&item))
                .filter(|s| !s.is_empty())
                .collect();
            if items.is_empty() {
                vec![element_text(&ul)]
            } else {
                items
            }
        })
}
