//! The closed set of section kinds.
//!
//! A section's kind decides which renderer applies and which group it
//! belongs to during reordering. The set is closed on purpose: the remote
//! API rejects unknown kinds, so deserialization here does too.

use crate::Error;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Discriminant tag for a resume section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SectionKind {
    Education,
    Experience,
    Skill,
    Certification,
    Project,
}

impl SectionKind {
    /// All kinds, in the default presentation order.
    pub const ALL: [SectionKind; 5] = [
        SectionKind::Education,
        SectionKind::Experience,
        SectionKind::Skill,
        SectionKind::Certification,
        SectionKind::Project,
    ];

    /// The wire/storage name of this kind.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            SectionKind::Education => "education",
            SectionKind::Experience => "experience",
            SectionKind::Skill => "skill",
            SectionKind::Certification => "certification",
            SectionKind::Project => "project",
        }
    }
}

impl fmt::Display for SectionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SectionKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "education" => Ok(SectionKind::Education),
            "experience" => Ok(SectionKind::Experience),
            "skill" => Ok(SectionKind::Skill),
            "certification" => Ok(SectionKind::Certification),
            "project" => Ok(SectionKind::Project),
            other => Err(Error::UnknownKind(other.to_string())),
        }
    }
}
