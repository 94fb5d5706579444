use super::Context;
use crate::cli::opts::Format;
use crate::cli::sink::Error as SinkError;
use crate::httpclient::Error as HttpError;
use clap::Parser;
use snafu::{ResultExt, Snafu};

/// Lists all members of the list.
///
/// Every member is printed as `Name <email>`, sorted by email. All
/// listing pages are visited, including those for each initial
/// letter and their sub pages.
#[derive(Parser, Debug, PartialEq)]
pub struct Input {
    /// Accepted like for the other commands, but not used.
    #[arg(value_name = "EMAIL", hide = true)]
    pub emails: Vec<String>,
}

#[derive(Debug, Snafu)]
pub enum Error {
    #[snafu(display("An http error occurred: {}", source))]
    HttpClient { source: HttpError },

    #[snafu(display("Error writing data: {}", source))]
    WriteResult { source: SinkError },
}

impl Input {
    pub async fn exec(&self, ctx: &Context) -> Result<(), Error> {
        if !self.emails.is_empty() {
            log::debug!("Ignoring {} addresses given to list", self.emails.len());
        }
        let members = ctx
            .client
            .list_members(&ctx.credentials, ctx.debug())
            .await
            .context(HttpClientSnafu)?;
        if members.is_empty() {
            log::warn!("No members found. Is the password correct?");
            if ctx.format() == Format::Default {
                return Ok(());
            }
        }
        ctx.write_result(&members).context(WriteResultSnafu)?;
        Ok(())
    }
}
