pub mod add;
pub mod list;
pub mod remove;
pub mod shell_completion;
pub mod version;

use super::sink::{Error as SinkError, Sink};
use crate::cli::opts::{CommonOpts, Format, ProxySetting};
use crate::config::{AccountSection, ConfigError, ConfigFile, Settings};
use crate::data::simple_message::SimpleMessage;
use crate::httpclient::data::{Credentials, StatusReport};
use crate::httpclient::{self, proxy, Client};
use serde::Serialize;
use snafu::{ResultExt, Snafu};

const ENV_URL: &str = "MMADMIN_URL";
const ENV_PASSWORD: &str = "MMADMIN_PASSWORD";

/// Everything a command needs to talk to one list.
pub struct Context {
    pub opts: CommonOpts,
    pub client: Client,
    pub credentials: Credentials,
}

impl Context {
    /// Resolves the settings from config file, environment and
    /// options and creates the http client. No request is made.
    pub fn new(opts: &CommonOpts) -> Result<Context, CmdError> {
        let settings = resolve_settings(opts).context(ConfigSnafu)?;
        let client = Client::new(
            settings.list_url,
            proxy_settings(opts),
            &opts.trusted_certificate,
            opts.accept_invalid_certs,
        )
        .context(ContextCreateSnafu)?;
        Ok(Context {
            opts: opts.clone(),
            client,
            credentials: Credentials::new(settings.password),
        })
    }

    /// Whether response bodies should be logged.
    fn debug(&self) -> bool {
        self.opts.verbose > 1
    }

    /// A short hand for `Sink::write(self.format(), value)`
    fn write_result<A: Sink + Serialize>(&self, value: &A) -> Result<(), SinkError> {
        Sink::write(&self.opts.format, value)
    }

    /// A short hand for `Sink::write_err(self.format(), value)`
    fn write_err<A: Sink + Serialize>(&self, value: &A) -> Result<(), SinkError> {
        Sink::write_err(&self.opts.format, value)
    }

    fn format(&self) -> Format {
        self.opts.format
    }
}

/// Prints the status messages of an add or remove request. An empty
/// report gets a notice on stderr in the default format.
fn write_report(ctx: &Context, report: &StatusReport) -> Result<(), SinkError> {
    if report.messages.is_empty() && ctx.format() == Format::Default {
        return ctx.write_err(&SimpleMessage::new("The server returned no status messages."));
    }
    ctx.write_result(report)
}

fn resolve_settings(opts: &CommonOpts) -> Result<Settings, ConfigError> {
    let file = ConfigFile::find(opts.conf_file.as_deref())?;
    let env = AccountSection {
        url: std::env::var(ENV_URL).ok(),
        password: std::env::var(ENV_PASSWORD).ok(),
        ..AccountSection::default()
    };
    if env.url.is_some() {
        log::debug!("Found list url in env {}", ENV_URL);
    }
    let cli = AccountSection {
        url: opts.url.clone(),
        url_template: opts.url_template.clone(),
        list_name: opts.list_name.clone(),
        password: opts.password.clone(),
    };
    Settings::resolve(file.as_ref(), opts.account_name.as_deref(), env, cli)
}

fn proxy_settings(opts: &CommonOpts) -> proxy::ProxySetting {
    let user = opts.proxy_user.clone();
    let password = opts.proxy_password.clone();
    let prx = opts.proxy.clone();

    log::debug!("Using proxy: {:?} @ {:?}", user, prx);
    match prx {
        None => proxy::ProxySetting::System,
        Some(ProxySetting::None) => proxy::ProxySetting::None,
        Some(ProxySetting::Custom { url }) => proxy::ProxySetting::Custom {
            url,
            user,
            password,
        },
    }
}

#[derive(Debug, Snafu)]
pub enum CmdError {
    #[snafu(display("Configuration - {}", source))]
    Config { source: ConfigError },

    #[snafu(display("ContextCreate - {}", source))]
    ContextCreate { source: httpclient::Error },

    #[snafu(display("Version - {}", source))]
    Version { source: version::Error },

    #[snafu(display("List - {}", source))]
    List { source: list::Error },

    #[snafu(display("Add - {}", source))]
    Add { source: add::Error },

    #[snafu(display("Remove - {}", source))]
    Remove { source: remove::Error },
}

impl From<version::Error> for CmdError {
    fn from(source: version::Error) -> Self {
        CmdError::Version { source }
    }
}

impl From<list::Error> for CmdError {
    fn from(source: list::Error) -> Self {
        CmdError::List { source }
    }
}

impl From<add::Error> for CmdError {
    fn from(source: add::Error) -> Self {
        CmdError::Add { source }
    }
}

impl From<remove::Error> for CmdError {
    fn from(source: remove::Error) -> Self {
        CmdError::Remove { source }
    }
}
