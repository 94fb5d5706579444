//! Global error types

use crate::cli::cmd;
use snafu::Snafu;

#[derive(Debug, Snafu)]
pub enum Error {
    #[snafu(display("{}", source))]
    Cmd { source: cmd::CmdError },
}

impl Error {
    /// The process exit code for this error: 2 for problems with the
    /// given options or config file, 1 for everything else.
    pub fn exit_code(&self) -> i32 {
        match self {
            Error::Cmd {
                source: cmd::CmdError::Config { .. },
            } => 2,
            Error::Cmd { source: _ } => 1,
        }
    }
}

pub type Result<A> = std::result::Result<A, Error>;

impl From<cmd::CmdError> for Error {
    fn from(e: cmd::CmdError) -> Error {
        Error::Cmd { source: e }
    }
}
