use crate::cli::opts::Format;
use crate::data::simple_message::SimpleMessage;
use crate::httpclient::data::*;
use serde::Serialize;
use snafu::Snafu;
use std::fmt::{self, Display};

use super::BuildInfo;

#[derive(Debug, Snafu)]
pub enum Error {
    #[snafu(display("Unable to write json: {}", source))]
    Json { source: serde_json::Error },
}

/// Writes values either human readable (via `Display`) or as json.
pub trait Sink
where
    Self: Serialize + Display,
{
    fn write(format: &Format, value: &Self) -> Result<(), Error> {
        match format {
            Format::Json => {
                serde_json::to_writer(std::io::stdout(), value)?;
                println!();
                Ok(())
            }
            Format::Default => {
                println!("{}", value);
                Ok(())
            }
        }
    }
    fn write_err(format: &Format, value: &Self) -> Result<(), Error> {
        match format {
            Format::Json => {
                serde_json::to_writer(std::io::stderr(), value)?;
                eprintln!();
                Ok(())
            }
            Format::Default => {
                eprintln!("{}", value);
                Ok(())
            }
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Error {
        Error::Json { source: e }
    }
}

impl Display for MemberList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let lines: Vec<String> = self
            .members
            .iter()
            .map(|(email, name)| format!("{} <{}>", name, email))
            .collect();
        write!(f, "{}", lines.join("\n"))
    }
}

impl Display for StatusMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.heading)?;
        for item in self.details.iter().flatten() {
            write!(f, "\n  {}", item)?;
        }
        Ok(())
    }
}

impl Display for StatusReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let lines: Vec<String> = self.messages.iter().map(|m| m.to_string()).collect();
        write!(f, "{}", lines.join("\n"))
    }
}

impl Sink for MemberList {}
impl Sink for StatusReport {}
impl Sink for SimpleMessage {}
impl Sink for BuildInfo {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn member_list_display() {
        let mut list = MemberList::default();
        list.extend([
            Member {
                email: "k@example.com".into(),
                name: "Kim".into(),
            },
            Member {
                email: "j@example.com".into(),
                name: "Jane Doe".into(),
            },
        ]);
        assert_eq!(
            list.to_string(),
            "Jane Doe <j@example.com>\nKim <k@example.com>"
        );
        assert_eq!(
            serde_json::to_string(&list).unwrap(),
            r#"{"j@example.com":"Jane Doe","k@example.com":"Kim"}"#
        );
    }

    #[test]
    fn status_report_display() {
        let report = StatusReport {
            messages: vec![
                StatusMessage {
                    heading: "Successfully Unsubscribed:".into(),
                    details: Some(vec!["a@x.com".into(), "b@x.com".into()]),
                },
                StatusMessage {
                    heading: "Cannot unsubscribe non-members:".into(),
                    details: None,
                },
            ],
        };
        assert_eq!(
            report.to_string(),
            "Successfully Unsubscribed:\n  a@x.com\n  b@x.com\nCannot unsubscribe non-members:"
        );
    }
}
