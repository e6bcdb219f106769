//! Mailto-based contact form.
//!
//! Nothing is sent over the network. A valid submission is turned into a
//! `mailto:` URI and the browser hands it to the user's mail client.

use crate::config::ContactConfig;
use std::fmt;
use urlencoding::encode;

/// One of the three required form fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    Email,
    Message,
}

impl Field {
    pub const ALL: [Field; 3] = [Field::Name, Field::Email, Field::Message];

    /// The `name` attribute of the form control.
    pub fn form_name(self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Email => "email",
            Field::Message => "message",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.form_name())
    }
}

/// Trimmed values of a submitted form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Submission {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl Submission {
    /// Build a submission from raw form values, trimming whitespace.
    /// Absent values count as empty.
    pub fn from_fields(name: Option<&str>, email: Option<&str>, message: Option<&str>) -> Self {
        let clean = |value: Option<&str>| value.unwrap_or_default().trim().to_string();
        Self {
            name: clean(name),
            email: clean(email),
            message: clean(message),
        }
    }

    /// Read all fields through a lookup by form name.
    pub fn read(mut lookup: impl FnMut(&str) -> Option<String>) -> Self {
        let name = lookup(Field::Name.form_name());
        let email = lookup(Field::Email.form_name());
        let message = lookup(Field::Message.form_name());
        Self::from_fields(name.as_deref(), email.as_deref(), message.as_deref())
    }

    pub fn value(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Message => &self.message,
        }
    }

    /// Fields left blank, in form order.
    pub fn missing(&self) -> Vec<Field> {
        Field::ALL
            .into_iter()
            .filter(|field| self.value(*field).is_empty())
            .collect()
    }
}

/// What the page does with a submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Show a blocking message; nothing else happens.
    Rejected { message: String, missing: Vec<Field> },
    /// Navigate the browser to this `mailto:` URI.
    Navigate(String),
}

/// Validate a submission and build the mail link.
pub fn submit(submission: &Submission, config: &ContactConfig) -> Outcome {
    let missing = submission.missing();
    if !missing.is_empty() {
        return Outcome::Rejected {
            message: config.missing_fields.clone(),
            missing,
        };
    }
    Outcome::Navigate(mailto_uri(submission, config))
}

/// Subject line with the sender's name substituted.
pub fn subject(submission: &Submission, config: &ContactConfig) -> String {
    config.subject.replace("{name}", &submission.name)
}

/// Plain-text mail body with labeled fields.
pub fn body(submission: &Submission, config: &ContactConfig) -> String {
    let labels = &config.labels;
    format!(
        "{}: {}\n{}: {}\n\n{}:\n{}\n",
        labels.name,
        submission.name,
        labels.email,
        submission.email,
        labels.message,
        submission.message,
    )
}

/// `mailto:` URI with percent-encoded subject and body.
pub fn mailto_uri(submission: &Submission, config: &ContactConfig) -> String {
    format!(
        "mailto:{}?subject={}&body={}",
        config.recipient,
        encode(&subject(submission, config)),
        encode(&body(submission, config)),
    )
}
