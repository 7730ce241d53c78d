//! Message thread records.

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

use super::common::Avatar;

/// A conversation thread from `/threads`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Thread {
    pub id: u64,
    #[serde(rename = "type")]
    pub kind: String,
    pub attributes: ThreadAttributes,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThreadAttributes {
    #[serde(default)]
    pub subject: Option<String>,
    #[serde(default)]
    pub updated_at: Option<DateTime<FixedOffset>>,
    #[serde(default)]
    pub messages_count: u32,
    #[serde(default)]
    pub is_unread: bool,
    #[serde(default)]
    pub participants: Option<ThreadParticipants>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThreadParticipants {
    #[serde(default)]
    pub from: Option<ThreadParticipant>,
    #[serde(default)]
    pub to: Option<ThreadParticipant>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThreadParticipant {
    pub id: u64,
    #[serde(rename = "type")]
    pub kind: String,
    pub login: String,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(default)]
    pub avatar: Option<Avatar>,
}
