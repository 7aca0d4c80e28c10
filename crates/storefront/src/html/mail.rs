use serde::Serialize;

/// An address with an optional display name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Mailbox {
    pub email: String,
    pub name: Option<String>,
}

impl Mailbox {
    pub fn new(email: impl Into<String>, name: Option<&str>) -> Self {
        Self {
            email: email.into(),
            name: name.map(str::to_string),
        }
    }
}

/// The e-mail being assembled while a mail client tree renders.
///
/// Adding the same header or recipient twice keeps a single entry, so rendering a
/// header more than once does not duplicate anything.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct MailMessage {
    pub headers: Vec<(String, String)>,
    pub from: Vec<Mailbox>,
    pub to: Vec<Mailbox>,
    pub reply_to: Vec<Mailbox>,
    pub bcc: Vec<Mailbox>,
    pub subject: Option<String>,
    pub text_body: Option<String>,
    pub html_body: Option<String>,
}

impl MailMessage {
    pub fn set_header(&mut self, name: &str, value: &str) {
        match self.headers.iter_mut().find(|(n, _)| n.eq_ignore_ascii_case(name)) {
            Some(header) => header.1 = value.to_string(),
            None => self.headers.push((name.to_string(), value.to_string())),
        }
    }

    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(n, _)| n.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }

    pub fn add_from(&mut self, mailbox: Mailbox) {
        push_unique(&mut self.from, mailbox);
    }

    pub fn add_to(&mut self, mailbox: Mailbox) {
        push_unique(&mut self.to, mailbox);
    }

    pub fn add_reply_to(&mut self, mailbox: Mailbox) {
        push_unique(&mut self.reply_to, mailbox);
    }

    pub fn add_bcc(&mut self, mailbox: Mailbox) {
        push_unique(&mut self.bcc, mailbox);
    }
}

fn push_unique(list: &mut Vec<Mailbox>, mailbox: Mailbox) {
    if !list.contains(&mailbox) {
        list.push(mailbox);
    }
}
