//! A http client for the Mailman list admin pages
//!
//! Provides a client based on reqwest that submits the admin forms
//! and scrapes the returned html.
//!
//! # Usage
//!
//! ```rust
//! use mmadmin::data::list_url::ListUrl;
//! use mmadmin::httpclient;
//! let client = httpclient::Client::new(
//!    ListUrl::parse("http://lists.example.org/admin.cgi/examplelist").unwrap(),
//!    httpclient::proxy::ProxySetting::System,
//!    &None,
//!    false
//! ).unwrap();
//! let credentials = httpclient::data::Credentials::new("secret");
//! async {
//!   println!("{:?}", client.list_members(&credentials, false).await);
//! };
//! ```
//!
//! # Authentication
//!
//! There is no session: the admin password is sent with every
//! request as part of the form data.

pub mod data;
pub mod proxy;
pub mod scrape;

use self::data::*;
use crate::data::list_url::ListUrl;
use reqwest::Certificate;
use reqwest::ClientBuilder;
use reqwest::Url;
use scraper::Html;
use snafu::{ResultExt, Snafu};
use std::path::PathBuf;

const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

#[derive(Debug, Snafu)]
pub enum Error {
    #[snafu(display("An error was received from {}: {}", url, source))]
    Http { source: reqwest::Error, url: String },

    #[snafu(display("An error occurred creating the http client: {}", source))]
    ClientCreate { source: reqwest::Error },

    #[snafu(display("Error opening file '{}': {}", path.display(), source))]
    OpenFile {
        source: std::io::Error,
        path: PathBuf,
    },

    #[snafu(display("An error occured reading the response from {}: {}", url, source))]
    ReadBody { source: reqwest::Error, url: String },

    #[snafu(display("Unable to create the url for '{}': {}", path, source))]
    InvalidUrl {
        source: url::ParseError,
        path: String,
    },
}

/// The list admin http client.
///
/// This wraps a reqwest client with methods corresponding to the
/// membership management pages of one list.
pub struct Client {
    client: reqwest::Client,
    list_url: ListUrl,
}

impl Client {
    pub fn new(
        list_url: ListUrl,
        proxy: proxy::ProxySetting,
        trusted_certificate: &Option<PathBuf>,
        accept_invalid_certs: bool,
    ) -> Result<Client, Error> {
        log::debug!("Create list admin client for: {}", list_url);
        let mut client_builder = ClientBuilder::new().user_agent(USER_AGENT);
        client_builder = proxy.set(client_builder).context(ClientCreateSnafu)?;
        match trusted_certificate {
            Some(cert_file) => {
                log::debug!(
                    "Adding extra certificate from file: {}",
                    cert_file.display(),
                );
                let buf = std::fs::read(cert_file).context(OpenFileSnafu { path: cert_file })?;
                let cert = match Certificate::from_pem(&buf) {
                    Ok(c) => c,
                    Err(e) => {
                        log::debug!("Reading PEM format failed: {:?}. Try with DER", e);
                        Certificate::from_der(&buf).context(ClientCreateSnafu)?
                    }
                };
                client_builder = client_builder.add_root_certificate(cert);
            }
            None => {
                if accept_invalid_certs {
                    log::info!("NOTE: ignoring invalid certificates!");
                    client_builder = client_builder.danger_accept_invalid_certs(true);
                }
            }
        }

        let client = client_builder.build().context(ClientCreateSnafu)?;
        Ok(Client { client, list_url })
    }

    /// Runs a POST request with the given form data and returns the
    /// response body. Responses with a non-success status are turned
    /// into errors. When `debug` is true, the body is logged at debug
    /// level.
    async fn form_post(&self, url: &Url, form: &FormFields, debug: bool) -> Result<String, Error> {
        log::info!("POST {}", url);
        let resp = self
            .client
            .post(url.clone())
            .form(form)
            .send()
            .await
            .and_then(|r| r.error_for_status())
            .context(HttpSnafu { url: url.as_str() })?
            .text()
            .await
            .context(ReadBodySnafu { url: url.as_str() })?;
        if debug {
            log::debug!("POST {} -> {}", url, resp);
        }
        Ok(resp)
    }

    fn endpoint(
        &self,
        f: impl FnOnce(&ListUrl) -> Result<Url, url::ParseError>,
        path: &str,
    ) -> Result<Url, Error> {
        f(&self.list_url).context(InvalidUrlSnafu { path })
    }

    /// Fetches all members of the list.
    ///
    /// The first listing page may link to one page per initial
    /// letter; without such links it is the only page. Each letter
    /// page is fetched chunk by chunk, starting at 0, until the chunk
    /// index exceeds the highest chunk linked from any page seen so
    /// far for that letter.
    pub async fn list_members(
        &self,
        credentials: &Credentials,
        debug: bool,
    ) -> Result<MemberList, Error> {
        let form = credentials.form_fields();
        let list_url = self.endpoint(ListUrl::members_list, "members/list")?;
        let body = self.form_post(&list_url, &form, debug).await?;

        let mut pages = scrape::letter_links(&body, &list_url);
        if pages.is_empty() {
            log::debug!("No letter pages found, using {}", list_url);
            pages.push(list_url);
        }

        let mut members = MemberList::default();
        for page in pages.iter() {
            let mut chunk = 0;
            let mut max_chunk = 0;
            while chunk <= max_chunk {
                let url = chunk_url(page, chunk);
                let body = self.form_post(&url, &form, debug).await?;
                let doc = Html::parse_document(&body);
                let found = scrape::members(&doc);
                log::debug!("Found {} members on {}", found.len(), url);
                members.extend(found);
                max_chunk = max_chunk.max(scrape::max_chunk(&doc, &url).unwrap_or(0));
                chunk += 1;
            }
        }
        log::info!("Found {} members in total", members.len());
        Ok(members)
    }

    /// Subscribes (or invites) the given addresses in one request and
    /// returns the status messages of the response.
    pub async fn add_members(
        &self,
        credentials: &Credentials,
        req: &AddMembers,
        debug: bool,
    ) -> Result<StatusReport, Error> {
        let url = self.endpoint(ListUrl::members_add, "members/add")?;
        let body = self
            .form_post(&url, &req.form_fields(credentials), debug)
            .await?;
        Ok(StatusReport {
            messages: scrape::status_messages(&body),
        })
    }

    /// Unsubscribes the given addresses in one request and returns
    /// the status messages of the response.
    pub async fn remove_members(
        &self,
        credentials: &Credentials,
        req: &RemoveMembers,
        debug: bool,
    ) -> Result<StatusReport, Error> {
        let url = self.endpoint(ListUrl::members_remove, "members/remove")?;
        let body = self
            .form_post(&url, &req.form_fields(credentials), debug)
            .await?;
        Ok(StatusReport {
            messages: scrape::status_messages(&body),
        })
    }
}

fn chunk_url(page: &Url, chunk: usize) -> Url {
    let mut url = page.clone();
    url.query_pairs_mut()
        .append_pair("chunk", &chunk.to_string());
    url
}
