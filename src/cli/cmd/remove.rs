use super::Context;
use crate::cli::sink::Error as SinkError;
use crate::httpclient::data::RemoveMembers;
use crate::httpclient::Error as HttpError;
use clap::Parser;
use snafu::{ResultExt, Snafu};

/// Unsubscribes members.
///
/// All addresses are sent in one request and the messages of the
/// server's response are printed.
#[derive(Parser, Debug, PartialEq)]
pub struct Input {
    /// The email addresses to remove.
    #[arg(value_name = "EMAIL")]
    pub emails: Vec<String>,

    /// Send an acknowledgement to the removed members.
    #[arg(long)]
    pub ack: bool,

    /// Notify the list owner about the removed members.
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
        let req = RemoveMembers {
            emails: self.emails.clone(),
            ack: self.ack,
            notify_owner: self.notify_owner,
        };
        let report = ctx
            .client
            .remove_members(&ctx.credentials, &req, ctx.debug())
            .await
            .context(HttpClientSnafu)?;
        super::write_report(ctx, &report).context(WriteResultSnafu)
    }
}
