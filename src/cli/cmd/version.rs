use crate::cli::opts::CommonOpts;
use crate::cli::sink::Error as SinkError;
use crate::cli::sink::Sink;
use crate::cli::BuildInfo;
use clap::Parser;
use snafu::{ResultExt, Snafu};

/// Prints version and build details about this client.
#[derive(Parser, Debug, PartialEq)]
pub struct Input {}

#[derive(Debug, Snafu)]
pub enum Error {
    #[snafu(display("Error writing data: {}", source))]
    WriteResult { source: SinkError },
}

impl Input {
    pub async fn exec(&self, opts: &CommonOpts) -> Result<(), Error> {
        let info = BuildInfo::default();
        Sink::write(&opts.format, &info).context(WriteResultSnafu)?;
        Ok(())
    }
}
