//! Sentinel tags shared with the model instructions.
//!
//! The assistant is instructed to wrap structured content in tags such as
//! `<¤§<STUDYPLAN>§¤>` ... `<¤§</STUDYPLAN>§¤>`. Both sides must agree on
//! these literals byte for byte, so they are only ever built here.

use std::{fmt, str::FromStr};

/// Opening wrapper of every tag.
pub const TAG_START: &str = "<¤§<";

/// Closing wrapper of every tag.
pub const TAG_END: &str = ">§¤>";

/// Names of the tags the model may emit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ModelTag {
    /// Plain conversational text
    Text,
    /// Code snippets
    Code,
    /// A structured studyplan payload
    Studyplan,
}

impl ModelTag {
    /// All known tags.
    pub const ALL: [ModelTag; 3] = [ModelTag::Text, ModelTag::Code, ModelTag::Studyplan];

    /// Upper case name used inside the tag literal.
    pub fn as_str(&self) -> &'static str {
        match self {
            ModelTag::Text => "TEXT",
            ModelTag::Code => "CODE",
            ModelTag::Studyplan => "STUDYPLAN",
        }
    }

    /// Opening marker, e.g. `<¤§<STUDYPLAN>§¤>`.
    pub fn open(&self) -> String {
        format!("{TAG_START}{}{TAG_END}", self.as_str())
    }

    /// Closing marker, e.g. `<¤§</STUDYPLAN>§¤>`.
    pub fn close(&self) -> String {
        format!("{TAG_START}/{}{TAG_END}", self.as_str())
    }

    /// Wraps `text` in this tag, each marker on its own line.
    pub fn wrap(&self, text: &str) -> String {
        format!("{}\n{text}\n{}", self.open(), self.close())
    }
}

impl fmt::Display for ModelTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ModelTag {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "TEXT" => Ok(ModelTag::Text),
            "CODE" => Ok(ModelTag::Code),
            "STUDYPLAN" => Ok(ModelTag::Studyplan),
            _ => Err(format!("Invalid model tag: {s}")),
        }
    }
}
