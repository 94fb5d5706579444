//! Layered configuration
//!
//! Settings are collected from a config file (the `Defaults` section
//! and an optional named account section), the environment and the
//! command line. Later layers override earlier ones. The result is a
//! [`Settings`] value that has everything needed to talk to a list.

use crate::data::list_url::ListUrl;
use ini::{Ini, ParseOption};
use snafu::{ResultExt, Snafu};
use std::collections::BTreeMap;
use std::fmt;
use std::path::{Path, PathBuf};

/// The section that is always applied, if present.
pub const DEFAULTS_SECTION: &str = "Defaults";

#[derive(Debug, Snafu)]
pub enum ConfigError {
    #[snafu(display("Unable to read config file {}: {}", path.display(), source))]
    ReadFile {
        source: std::io::Error,
        path: PathBuf,
    },
    #[snafu(display("Unable to parse file {}: {}", path.display(), source))]
    ParseFile {
        source: ini::ParseError,
        path: PathBuf,
    },
    #[snafu(display("There is no section '{}' in the config file", account))]
    MissingAccount { account: String },

    #[snafu(display("Both url and url_template are given {}", layer))]
    ConflictingUrl { layer: Layer },

    #[snafu(display("A url_template requires a list name (--list_name)"))]
    MissingListName,

    #[snafu(display("No list url given; use --url or --url_template with --list_name"))]
    MissingUrl,

    #[snafu(display("No admin password given; use --password"))]
    MissingPassword,

    #[snafu(display("The list url '{}' is invalid: {}", url, source))]
    InvalidUrl {
        source: url::ParseError,
        url: String,
    },
}

/// Where a set of values came from. Used for error messages.
#[derive(Debug, Clone, PartialEq)]
pub enum Layer {
    Section(String),
    Environment,
    CommandLine,
}

impl fmt::Display for Layer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Layer::Section(name) => write!(f, "in config section '{}'", name),
            Layer::Environment => write!(f, "in the environment"),
            Layer::CommandLine => write!(f, "on the command line"),
        }
    }
}

/// A set of optional values, as given in one config file section,
/// the environment or on the command line.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct AccountSection {
    pub url: Option<String>,
    pub url_template: Option<String>,
    pub list_name: Option<String>,
    pub password: Option<String>,
}

impl AccountSection {
    fn has_url(&self) -> bool {
        self.url.is_some() || self.url_template.is_some()
    }

    /// Picks the known keys of an ini section; key names are matched
    /// case-insensitively and unknown keys are ignored.
    fn from_properties(props: &ini::Properties) -> AccountSection {
        let mut section = AccountSection::default();
        for (key, value) in props.iter() {
            let value = Some(value.to_string());
            match key.to_ascii_lowercase().as_str() {
                "url" => section.url = value,
                "url_template" => section.url_template = value,
                "list_name" => section.list_name = value,
                "password" => section.password = value,
                other => log::debug!("Ignoring config key '{}'", other),
            }
        }
        section
    }
}

/// The contents of an ini-style config file: named sections of
/// account values.
#[derive(Debug, Default, PartialEq)]
pub struct ConfigFile {
    pub sections: BTreeMap<String, AccountSection>,
}

impl ConfigFile {
    pub fn read(file: &Path) -> Result<ConfigFile, ConfigError> {
        let cnt = std::fs::read_to_string(file).context(ReadFileSnafu { path: file })?;
        ConfigFile::parse(&cnt, file)
    }

    /// Parses `key = value` or `key: value` lines below `[section]`
    /// headers. Values are taken verbatim, without quote or escape
    /// processing. Keys before the first header are ignored.
    fn parse(cnt: &str, file: &Path) -> Result<ConfigFile, ConfigError> {
        let opts = ParseOption {
            enabled_quote: false,
            enabled_escape: false,
            ..ParseOption::default()
        };
        let ini = Ini::load_from_str_opt(cnt, opts).context(ParseFileSnafu { path: file })?;
        let sections = ini
            .iter()
            .filter_map(|(name, props)| {
                name.map(|n| (n.to_string(), AccountSection::from_properties(props)))
            })
            .collect();
        Ok(ConfigFile { sections })
    }

    /// Reads the given file, or the default file if it exists.
    pub fn find(file: Option<&Path>) -> Result<Option<ConfigFile>, ConfigError> {
        match file {
            Some(f) => {
                log::debug!("Reading config file {}", f.display());
                ConfigFile::read(f).map(Some)
            }
            None => match default_file().filter(|f| f.exists()) {
                Some(f) => {
                    log::debug!("Reading default config file {}", f.display());
                    ConfigFile::read(&f).map(Some)
                }
                None => {
                    log::debug!("No config file found");
                    Ok(None)
                }
            },
        }
    }

    pub fn section(&self, name: &str) -> Option<&AccountSection> {
        self.sections.get(name)
    }
}

/// The per-user config file location, e.g.
/// `~/.config/mmadmin/mmadmin.conf` on linux.
pub fn default_file() -> Option<PathBuf> {
    directories::ProjectDirs::from("", "", "mmadmin").map(|d| d.config_dir().join("mmadmin.conf"))
}

/// Fully resolved settings for talking to one list.
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub list_url: ListUrl,
    pub password: String,
}

impl Settings {
    /// Merges the layers from lowest to highest precedence: the
    /// `Defaults` section, the named `account` section, the
    /// environment and the command line.
    pub fn resolve(
        file: Option<&ConfigFile>,
        account: Option<&str>,
        env: AccountSection,
        cli: AccountSection,
    ) -> Result<Settings, ConfigError> {
        let mut layers: Vec<(Layer, AccountSection)> = Vec::new();
        if let Some(defaults) = file.and_then(|f| f.section(DEFAULTS_SECTION)) {
            layers.push((Layer::Section(DEFAULTS_SECTION.into()), defaults.clone()));
        }
        if let Some(name) = account {
            let section = file
                .and_then(|f| f.section(name))
                .ok_or_else(|| ConfigError::MissingAccount {
                    account: name.to_string(),
                })?;
            layers.push((Layer::Section(name.to_string()), section.clone()));
        }
        layers.push((Layer::Environment, env));
        layers.push((Layer::CommandLine, cli));

        let mut list_name = None;
        let mut password = None;
        let mut url_source = None;
        for (layer, values) in layers.iter() {
            if values.url.is_some() && values.url_template.is_some() {
                return ConflictingUrlSnafu {
                    layer: layer.clone(),
                }
                .fail();
            }
            if values.has_url() {
                url_source = Some(values);
            }
            list_name = values.list_name.as_ref().or(list_name);
            password = values.password.as_ref().or(password);
        }

        let list_url = match url_source {
            Some(AccountSection { url: Some(u), .. }) => {
                ListUrl::parse(u).context(InvalidUrlSnafu { url: u })?
            }
            Some(AccountSection {
                url_template: Some(t),
                ..
            }) => {
                let name = list_name.ok_or(ConfigError::MissingListName)?;
                ListUrl::from_template(t, name).context(InvalidUrlSnafu { url: t })?
            }
            _ => return MissingUrlSnafu.fail(),
        };
        let password = password.ok_or(ConfigError::MissingPassword)?.clone();
        log::debug!("Using list url: {}", list_url);

        Ok(Settings { list_url, password })
    }
}
