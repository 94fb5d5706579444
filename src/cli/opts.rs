use super::cmd::*;
use clap::{ArgAction, Parser, ValueEnum, ValueHint};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::str::FromStr;

/// Main options are available to all commands. They may appear
/// before or after the sub-command.
#[derive(Parser, Debug, Clone)]
#[command()]
pub struct CommonOpts {
    /// Be more verbose when logging. Verbosity increases with each
    /// occurence of that option.
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    /// How to format the output. The default is human readable which
    /// may choose to not show every detail for better readability.
    /// The json output format can be used to always show all details
    /// in a structured form.
    #[arg(short, long, global = true, value_enum, default_value_t = Format::Default)]
    pub format: Format,

    /// The base url to the admin pages of a list, for example
    /// `http://lists.example.org/admin.cgi/examplelist`. It can be
    /// given as environment variable MMADMIN_URL.
    #[arg(short, long, global = true, value_hint = ValueHint::Url, conflicts_with = "url_template")]
    pub url: Option<String>,

    /// A url to the admin pages where `*s` is replaced by the list
    /// name, for example `http://lists.example.org/admin.cgi/*s-example.org`.
    #[arg(long = "url_template", global = true, value_hint = ValueHint::Url)]
    pub url_template: Option<String>,

    /// The list name to use with the url template.
    #[arg(short, long = "list_name", global = true)]
    pub list_name: Option<String>,

    /// The list admin password. It can be given as environment
    /// variable MMADMIN_PASSWORD.
    #[arg(short, long, global = true)]
    pub password: Option<String>,

    /// A config file providing defaults for the options above. If not
    /// given, the file `mmadmin/mmadmin.conf` in the user's config
    /// directory is used when it exists.
    #[arg(short, long = "conf_file", global = true, value_hint = ValueHint::FilePath)]
    pub conf_file: Option<PathBuf>,

    /// The section of the config file to use in addition to the
    /// `Defaults` section.
    #[arg(short, long = "account_name", global = true)]
    pub account_name: Option<String>,

    /// Set a proxy to use for doing http requests. By default, the
    /// system proxy will be used. Can be either `none` or <url>. If
    /// `none`, the system proxy will be ignored; otherwise specify
    /// the proxy url, like `http://myproxy.com`.
    #[arg(long, global = true)]
    pub proxy: Option<ProxySetting>,

    /// The user to authenticate at the proxy.
    #[arg(long, global = true)]
    pub proxy_user: Option<String>,

    /// The password to authenticate at the proxy.
    #[arg(long, global = true)]
    pub proxy_password: Option<String>,

    /// An additional certificate (PEM or DER) to trust, for servers
    /// using a private certificate authority.
    #[arg(long, global = true, value_hint = ValueHint::FilePath)]
    pub trusted_certificate: Option<PathBuf>,

    /// Accept invalid (e.g. self-signed) server certificates.
    #[arg(long, global = true)]
    pub accept_invalid_certs: bool,
}

#[derive(Parser, Debug)]
pub enum SubCommand {
    #[command()]
    List(list::Input),

    #[command()]
    Add(add::Input),

    #[command()]
    Remove(remove::Input),

    #[command()]
    Version(version::Input),

    #[command()]
    ShellCompletion(shell_completion::Input),
}

/// This is a command line interface to the membership administration
/// pages of a Mailman mailing list. Main options are available to all
/// sub-commands and may appear before or after them. Each sub command has its
/// own set of flags/options and arguments.
///
/// Options can be given in a config file with a `Defaults` section
/// and further named sections, selected with `--account_name`.
/// Options on the command line take precedence.
#[derive(Parser, Debug)]
#[command(name = "mmadmin", version)]
pub struct MainOpts {
    #[clap(flatten)]
    pub common_opts: CommonOpts,

    #[clap(subcommand)]
    pub subcmd: SubCommand,
}

/// The format for presenting the results.
#[derive(ValueEnum, Debug, Copy, Clone, Serialize, Deserialize, PartialEq)]
pub enum Format {
    Json,
    Default,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ProxySetting {
    /// Don't use any proxy; this will also discard the system proxy.
    None,

    /// Use a custom defined proxy.
    Custom { url: String },
}

impl FromStr for ProxySetting {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("none") {
            Ok(ProxySetting::None)
        } else {
            Ok(ProxySetting::Custom { url: s.to_string() })
        }
    }
}
