use mmadmin::error::Result;
use std::env;
use std::process;

const LOG_LEVEL: &str = "RUST_LOG";

#[tokio::main]
async fn main() {
    let error_style = console::Style::new().red().bright();
    let result = execute().await;
    if let Err(err) = result {
        eprintln!("{}", error_style.apply_to(&err));
        process::exit(err.exit_code());
    }
}

async fn execute() -> Result<()> {
    let opts = mmadmin::read_args();
    let remove_env = match opts.common_opts.verbose {
        0 => false,
        1 => set_log_level("info"),
        _ => set_log_level("debug"),
    };
    env_logger::init();

    let result = mmadmin::execute_cmd(opts).await;
    if remove_env {
        env::remove_var(LOG_LEVEL);
    }
    result?;
    Ok(())
}

fn set_log_level(level: &str) -> bool {
    let current = env::var_os(LOG_LEVEL);
    if current.is_none() {
        env::set_var(LOG_LEVEL, level);
        true
    } else {
        false
    }
}
