use assert_cmd::Command;
use tempfile::TempDir;

pub type Result<A> = std::result::Result<A, Box<dyn std::error::Error>>;

/// A command for the binary, isolated from the user's environment:
/// no default config file and no settings from env variables.
pub fn mk_cmd(config_home: &TempDir) -> Result<Command> {
    let mut cmd = Command::cargo_bin("mmadmin")?;
    cmd.env("XDG_CONFIG_HOME", config_home.path())
        .env("HOME", config_home.path())
        .env_remove("MMADMIN_URL")
        .env_remove("MMADMIN_PASSWORD")
        .env_remove("RUST_LOG");
    Ok(cmd)
}

/// A listing page with one `_realname` input per member.
pub fn member_page(members: &[(&str, &str)]) -> String {
    let inputs: String = members
        .iter()
        .map(|(email, name)| {
            format!(
                r#"<tr><td><input name="{}_realname" type="TEXT" value="{}" size="25"></td></tr>"#,
                email.replace('@', "%40"),
                name
            )
        })
        .collect();
    format!(
        "<html><body><form method=\"POST\"><table>{}</table></form></body></html>",
        inputs
    )
}
