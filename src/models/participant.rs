use serde::{Deserialize, Serialize};
use std::fmt;

/// A name/email pair attached to an activity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Participant {
    #[serde(alias = "nome")]
    pub name: String,
    #[serde(default)]
    pub email: String,
}

impl Participant {
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
        }
    }

    /// Parse the CLI form `Name <email>`.
    ///
    /// Text without `<` becomes a participant with an empty email, which
    /// validation rejects later on.
    pub fn parse(input: &str) -> Self {
        match input.split_once('<') {
            Some((name, rest)) => {
                let email = rest.trim().trim_end_matches('>').trim();
                Self::new(name.trim(), email)
            }
            None => Self::new(input.trim(), ""),
        }
    }

    pub fn is_complete(&self) -> bool {
        !self.name.is_empty() && !self.email.is_empty()
    }
}

impl fmt::Display for Participant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} <{}>", self.name, self.email)
    }
}

/// clap value parser for `--participant`.
pub fn parse_participant_arg(s: &str) -> Result<Participant, String> {
    Ok(Participant::parse(s))
}
