use super::Context;
use crate::cli::sink::Error as SinkError;
use crate::httpclient::data::AddMembers;
use crate::httpclient::Error as HttpError;
use clap::Parser;
use snafu::{ResultExt, Snafu};

/// Subscribes (or invites) members.
///
/// All addresses are sent in one request; the server checks them and
/// reports the outcome in its response, which is printed.
#[derive(Parser, Debug, PartialEq)]
pub struct Input {
    /// The email addresses to add.
    #[arg(value_name = "EMAIL")]
    pub emails: Vec<String>,

    /// Only invite the addresses instead of subscribing them.
    #[arg(long)]
    pub invite: bool,

    /// Additional text to include in the invitation.
    #[arg(long, default_value = "")]
    pub invitation: String,

    /// Send a welcome message to the new members.
    #[arg(long)]
    pub welcome: bool,

    /// Notify the list owner about the new members.
    #[arg(long)]
    pub notify_owner: bool,
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
        let req = AddMembers {
            emails: self.emails.clone(),
            invite: self.invite,
            invitation: self.invitation.clone(),
            welcome: self.welcome,
            notify_owner: self.notify_owner,
        };
        log::debug!("Adding {} addresses", req.emails.len());
        let report = ctx
            .client
            .add_members(&ctx.credentials, &req, ctx.debug())
            .await
            .context(HttpClientSnafu)?;
        super::write_report(ctx, &report).context(WriteResultSnafu)
    }
}
