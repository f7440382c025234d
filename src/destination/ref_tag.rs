//! Referral (attribution) tags carried by project links.

use std::fmt;

use serde::{Serialize, Serializer};

/// Attribution token from a `ref_tag` query parameter.
///
/// Unknown tokens are preserved verbatim so attribution is never lost.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum RefTag {
    Activity,
    Category,
    CategoryFeatured,
    City,
    Dashboard,
    Discovery,
    DiscoveryPotd,
    MessageThread,
    Push,
    Recommended,
    Search,
    Social,
    Thanks,
    Update,
    Unrecognized(String),
}

impl RefTag {
    pub fn as_str(&self) -> &str {
        match self {
            RefTag::Activity => "activity",
            RefTag::Category => "category",
            RefTag::CategoryFeatured => "category_featured",
            RefTag::City => "city",
            RefTag::Dashboard => "dashboard",
            RefTag::Discovery => "discovery",
            RefTag::DiscoveryPotd => "discovery_potd",
            RefTag::MessageThread => "message_thread",
            RefTag::Push => "push",
            RefTag::Recommended => "recommended",
            RefTag::Search => "search",
            RefTag::Social => "social",
            RefTag::Thanks => "thanks",
            RefTag::Update => "update",
            RefTag::Unrecognized(code) => code,
        }
    }
}

impl From<&str> for RefTag {
    fn from(code: &str) -> Self {
        match code {
            "activity" => RefTag::Activity,
            "category" => RefTag::Category,
            "category_featured" => RefTag::CategoryFeatured,
            "city" => RefTag::City,
            "dashboard" => RefTag::Dashboard,
            "discovery" => RefTag::Discovery,
            "discovery_potd" => RefTag::DiscoveryPotd,
            "message_thread" => RefTag::MessageThread,
            "push" => RefTag::Push,
            "recommended" => RefTag::Recommended,
            "search" => RefTag::Search,
            "social" => RefTag::Social,
            "thanks" => RefTag::Thanks,
            "update" => RefTag::Update,
            other => RefTag::Unrecognized(other.to_string()),
        }
    }
}

impl fmt::Display for RefTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for RefTag {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}
