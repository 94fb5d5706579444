//! Defines data structures for requests and responses and their
//! `Serialize` instances.

use serde::Serialize;
use std::collections::BTreeMap;

/// The value of the `admlogin` field as sent by the login form.
pub const ADMIN_LOGIN: &str = "Let me in...";

/// The value of the submit button on the membership forms.
pub const SUBMIT_BUTTON: &str = "Submit Your Changes";

/// A flat list of form field names and values, as posted to the
/// server.
pub type FormFields = Vec<(&'static str, String)>;

/// Credentials that go with every request.
#[derive(Clone)]
pub struct Credentials {
    pub password: String,
}

impl Credentials {
    pub fn new<S: Into<String>>(password: S) -> Credentials {
        Credentials {
            password: password.into(),
        }
    }

    pub fn form_fields(&self) -> FormFields {
        vec![
            ("admlogin", ADMIN_LOGIN.to_string()),
            ("adminpw", self.password.clone()),
        ]
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("password", &"***")
            .finish()
    }
}

/// Checkboxes are sent as `1` or `0`.
fn flag(b: bool) -> String {
    u8::from(b).to_string()
}

/// A request to subscribe (or invite) a batch of addresses.
#[derive(Debug, Default, Clone)]
pub struct AddMembers {
    pub emails: Vec<String>,
    pub invite: bool,
    pub invitation: String,
    pub welcome: bool,
    pub notify_owner: bool,
}

impl AddMembers {
    pub fn form_fields(&self, credentials: &Credentials) -> FormFields {
        let mut fields = credentials.form_fields();
        fields.extend([
            ("subscribe_or_invite", flag(self.invite)),
            ("send_welcome_msg_to_this_batch", flag(self.welcome)),
            ("send_notifications_to_list_owner", flag(self.notify_owner)),
            ("subscribees", self.emails.join("\n")),
            ("invitation", self.invitation.clone()),
            ("subscribees_upload", String::new()),
            ("setmemberopts_btn", SUBMIT_BUTTON.to_string()),
        ]);
        fields
    }
}

/// A request to unsubscribe a batch of addresses.
#[derive(Debug, Default, Clone)]
pub struct RemoveMembers {
    pub emails: Vec<String>,
    pub ack: bool,
    pub notify_owner: bool,
}

impl RemoveMembers {
    pub fn form_fields(&self, credentials: &Credentials) -> FormFields {
        let mut fields = credentials.form_fields();
        fields.extend([
            ("send_unsub_ack_to_this_batch", flag(self.ack)),
            (
                "send_unsub_notifications_to_list_owner",
                flag(self.notify_owner),
            ),
            ("unsubscribees", self.emails.join("\n")),
            ("unsubscribees_upload", String::new()),
            ("setmemberopts_btn", SUBMIT_BUTTON.to_string()),
        ]);
        fields
    }
}

/// A list member as shown on the membership pages.
#[derive(Debug, Clone, PartialEq)]
pub struct Member {
    pub email: String,
    pub name: String,
}

/// All members of a list, mapping email to display name.
#[derive(Debug, Default, Serialize, PartialEq)]
#[serde(transparent)]
pub struct MemberList {
    pub members: BTreeMap<String, String>,
}

impl MemberList {
    /// Adds a member, replacing the name of an already known email.
    pub fn insert(&mut self, member: Member) {
        if let Some(prev) = self.members.insert(member.email, member.name) {
            log::debug!("Replacing previously seen member name '{}'", prev);
        }
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    pub fn get(&self, email: &str) -> Option<&str> {
        self.members.get(email).map(String::as_str)
    }
}

impl Extend<Member> for MemberList {
    fn extend<T: IntoIterator<Item = Member>>(&mut self, iter: T) {
        for m in iter {
            self.insert(m);
        }
    }
}

/// A status heading returned after a change, with the list items
/// following it (usually the affected addresses).
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct StatusMessage {
    pub heading: String,
    pub details: Option<Vec<String>>,
}

/// All status messages of one response, in document order.
#[derive(Debug, Default, Serialize, PartialEq)]
#[serde(transparent)]
pub struct StatusReport {
    pub messages: Vec<StatusMessage>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn field<'a>(fields: &'a FormFields, name: &str) -> Option<&'a str> {
        fields
            .iter()
            .find(|(n, _)| *n == name)
            .map(|(_, v)| v.as_str())
    }

    #[test]
    fn add_form_with_default_flags() {
        let req = AddMembers {
            emails: vec!["a@x.com".into(), "b@x.com".into()],
            ..AddMembers::default()
        };
        let fields = req.form_fields(&Credentials::new("secret"));
        assert_eq!(field(&fields, "subscribees"), Some("a@x.com\nb@x.com"));
        assert_eq!(field(&fields, "subscribe_or_invite"), Some("0"));
        assert_eq!(field(&fields, "send_welcome_msg_to_this_batch"), Some("0"));
        assert_eq!(field(&fields, "send_notifications_to_list_owner"), Some("0"));
        assert_eq!(field(&fields, "admlogin"), Some(ADMIN_LOGIN));
        assert_eq!(field(&fields, "adminpw"), Some("secret"));
        assert_eq!(field(&fields, "setmemberopts_btn"), Some(SUBMIT_BUTTON));
    }

    #[test]
    fn remove_form_with_flags() {
        let req = RemoveMembers {
            emails: vec!["not an address".into()],
            ack: true,
            notify_owner: false,
        };
        let fields = req.form_fields(&Credentials::new("secret"));
        assert_eq!(field(&fields, "unsubscribees"), Some("not an address"));
        assert_eq!(field(&fields, "send_unsub_ack_to_this_batch"), Some("1"));
        assert_eq!(
            field(&fields, "send_unsub_notifications_to_list_owner"),
            Some("0")
        );
        assert_eq!(field(&fields, "unsubscribees_upload"), Some(""));
    }

    #[test]
    fn later_members_win() {
        let mut list = MemberList::default();
        list.extend([
            Member {
                email: "j@example.com".into(),
                name: "J".into(),
            },
            Member {
                email: "j@example.com".into(),
                name: "Jane".into(),
            },
        ]);
        assert_eq!(list.len(), 1);
        assert_eq!(list.get("j@example.com"), Some("Jane"));
    }

    #[test]
    fn credentials_debug_hides_password() {
        let dbg = format!("{:?}", Credentials::new("secret"));
        assert!(!dbg.contains("secret"));
    }
}
