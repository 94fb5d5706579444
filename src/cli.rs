pub mod cmd;
pub mod opts;
pub mod sink;

use self::cmd::{CmdError, Context};
use self::opts::{MainOpts, SubCommand};
use clap::CommandFactory;
use serde::Serialize;
use std::fmt;

pub async fn execute_cmd(opts: MainOpts) -> Result<(), CmdError> {
    log::info!("Running command: {:?}", opts.subcmd);
    match &opts.subcmd {
        SubCommand::Version(input) => input.exec(&opts.common_opts).await?,
        SubCommand::ShellCompletion(input) => {
            let mut app = MainOpts::command();
            input.print_completions(&mut app);
        }
        SubCommand::List(input) => {
            let ctx = Context::new(&opts.common_opts)?;
            input.exec(&ctx).await?
        }
        SubCommand::Add(input) => {
            let ctx = Context::new(&opts.common_opts)?;
            input.exec(&ctx).await?
        }
        SubCommand::Remove(input) => {
            let ctx = Context::new(&opts.common_opts)?;
            input.exec(&ctx).await?
        }
    };
    Ok(())
}

#[derive(Debug, Serialize)]
pub struct BuildInfo {
    pub build_date: &'static str,
    pub build_version: &'static str,
    pub rustc_host_triple: &'static str,
    pub rustc_version: &'static str,
    pub cargo_target_triple: &'static str,
}
impl Default for BuildInfo {
    fn default() -> Self {
        BuildInfo {
            build_date: env!("VERGEN_BUILD_TIMESTAMP"),
            build_version: env!("CARGO_PKG_VERSION"),
            rustc_host_triple: env!("VERGEN_RUSTC_HOST_TRIPLE"),
            rustc_version: env!("VERGEN_RUSTC_SEMVER"),
            cargo_target_triple: env!("VERGEN_CARGO_TARGET_TRIPLE"),
        }
    }
}
impl fmt::Display for BuildInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "mmadmin\n  Built at: {}\n  Version: {}\n  Rustc: {} ({})\n  Target: {}",
            self.build_date,
            self.build_version,
            self.rustc_version,
            self.rustc_host_triple,
            self.cargo_target_triple
        )
    }
}
