mod common;
use crate::common::*;
use httpmock::prelude::*;
use predicates::prelude::*;

#[test]
fn help_lists_commands() -> Result<()> {
    let home = tempfile::tempdir()?;
    mk_cmd(&home)?
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("list"))
        .stdout(predicate::str::contains("remove"));
    Ok(())
}

#[test]
fn url_and_template_conflict() -> Result<()> {
    let home = tempfile::tempdir()?;
    mk_cmd(&home)?
        .args([
            "-u",
            "http://lists.example.org/admin.cgi/foo",
            "--url_template",
            "http://lists.example.org/admin.cgi/*s",
            "-p",
            "pw",
            "list",
        ])
        .assert()
        .failure();
    Ok(())
}

#[test]
fn missing_config_file_fails_early() -> Result<()> {
    let home = tempfile::tempdir()?;
    let absent = home.path().join("absent.conf");
    mk_cmd(&home)?
        .arg("-c")
        .arg(&absent)
        .arg("list")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Unable to read config file"));
    Ok(())
}

#[test]
fn missing_account_section_fails_early() -> Result<()> {
    let home = tempfile::tempdir()?;
    let conf = home.path().join("mmadmin.conf");
    std::fs::write(&conf, "[Defaults]\nurl = http://127.0.0.1:1/admin.cgi/foo\n")?;
    mk_cmd(&home)?
        .arg("-c")
        .arg(&conf)
        .args(["-a", "work", "-p", "pw", "list"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("no section 'work'"));
    Ok(())
}

#[test]
fn missing_url_fails_early() -> Result<()> {
    let home = tempfile::tempdir()?;
    mk_cmd(&home)?
        .args(["-p", "pw", "list"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("No list url given"));
    Ok(())
}

#[test]
fn list_members_with_template_from_config() -> Result<()> {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(POST)
            .path("/admin.cgi/staff-example.org/members/list")
            .query_param("letter", "0");
        then.status(200).body(member_page(&[
            ("j@example.com", "Jane Doe"),
            ("k@example.com", "Kim"),
        ]));
    });

    let home = tempfile::tempdir()?;
    let conf = home.path().join("mmadmin.conf");
    std::fs::write(
        &conf,
        format!(
            "[Defaults]\nurl_template = {}\npassword = secret\n\n[work]\nlist_name: staff\n",
            server.url("/admin.cgi/*s-example.org")
        ),
    )?;

    mk_cmd(&home)?
        .arg("-c")
        .arg(&conf)
        .args(["-a", "work", "list"])
        .assert()
        .success()
        .stdout("Jane Doe <j@example.com>\nKim <k@example.com>\n");
    mock.assert_hits(2);
    Ok(())
}

#[test]
fn list_members_json() -> Result<()> {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(POST).path("/admin.cgi/foo/members/list");
        then.status(200)
            .body(member_page(&[("j@example.com", "Jane Doe")]));
    });

    let home = tempfile::tempdir()?;
    let assert = mk_cmd(&home)?
        .args(["-f", "json", "-u", server.url("/admin.cgi/foo").as_str(), "-p", "pw", "list"])
        .assert()
        .success();
    let res = serde_json::from_slice::<serde_json::Value>(&assert.get_output().stdout)?;
    assert_eq!(res["j@example.com"], "Jane Doe");
    Ok(())
}

#[test]
fn remove_prints_status_messages() -> Result<()> {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(POST).path("/admin.cgi/foo/members/remove");
        then.status(200).body(
            "<html><body><h5>Successfully Unsubscribed:</h5>\
             <ul><li>a@x.com</li></ul>\
             <h5>Cannot unsubscribe non-members:</h5>\
             <ul><li>b@x.com</li></ul></body></html>",
        );
    });

    let home = tempfile::tempdir()?;
    mk_cmd(&home)?
        .env("MMADMIN_PASSWORD", "secret")
        .args(["-u", server.url("/admin.cgi/foo").as_str(), "remove", "a@x.com", "b@x.com"])
        .assert()
        .success()
        .stdout(
            "Successfully Unsubscribed:\n  a@x.com\nCannot unsubscribe non-members:\n  b@x.com\n",
        );
    mock.assert();
    Ok(())
}

#[test]
fn add_without_messages_prints_notice() -> Result<()> {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(POST).path("/admin.cgi/foo/members/add");
        then.status(200).body("<html><body></body></html>");
    });

    let home = tempfile::tempdir()?;
    mk_cmd(&home)?
        .args(["-u", server.url("/admin.cgi/foo").as_str(), "-p", "pw", "add", "a@x.com"])
        .assert()
        .success()
        .stderr(predicate::str::contains("no status messages"));
    Ok(())
}

#[test]
fn server_error_fails() -> Result<()> {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(POST).path("/admin.cgi/foo/members/add");
        then.status(500);
    });

    let home = tempfile::tempdir()?;
    mk_cmd(&home)?
        .args(["-u", server.url("/admin.cgi/foo").as_str(), "-p", "pw", "add", "a@x.com"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("An error was received from"));
    Ok(())
}

#[test]
fn options_after_command_and_ignored_emails() -> Result<()> {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(POST)
            .path("/admin.cgi/foo/members/list")
            .form_urlencoded_tuple("adminpw", "pw");
        then.status(200)
            .body(member_page(&[("j@example.com", "Jane Doe")]));
    });

    let home = tempfile::tempdir()?;
    mk_cmd(&home)?
        .args([
            "list",
            "-u",
            server.url("/admin.cgi/foo").as_str(),
            "-p",
            "pw",
            "someone@example.com",
        ])
        .assert()
        .success()
        .stdout("Jane Doe <j@example.com>\n");
    Ok(())
}

#[test]
fn empty_list_prints_nothing() -> Result<()> {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(POST).path("/admin.cgi/foo/members/list");
        then.status(200).body("<html><body><p>Authorization</p></body></html>");
    });

    let home = tempfile::tempdir()?;
    mk_cmd(&home)?
        .args(["-u", server.url("/admin.cgi/foo").as_str(), "-p", "pw", "list"])
        .assert()
        .success()
        .stdout("");
    Ok(())
}
