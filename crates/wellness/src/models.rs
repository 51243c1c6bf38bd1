use std::fmt;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Entities whose row counts make up the platform statistics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Entity {
    User,
    Doctor,
    Reminder,
    EmergencyContact,
}

impl Entity {
    pub const ALL: [Entity; 4] = [
        Entity::User,
        Entity::Doctor,
        Entity::Reminder,
        Entity::EmergencyContact,
    ];

    pub fn table(&self) -> &'static str {
        match self {
            Entity::User => "users",
            Entity::Doctor => "doctors",
            Entity::Reminder => "reminders",
            Entity::EmergencyContact => "emergency_contacts",
        }
    }

    /// Aggregate query counting the entity's rows by primary key.
    pub fn count_query(&self) -> &'static str {
        match self {
            Entity::User => "SELECT COUNT(id) FROM users",
            Entity::Doctor => "SELECT COUNT(id) FROM doctors",
            Entity::Reminder => "SELECT COUNT(id) FROM reminders",
            Entity::EmergencyContact => "SELECT COUNT(id) FROM emergency_contacts",
        }
    }
}

impl fmt::Display for Entity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.table())
    }
}

/// Platform-wide statistics returned by `GET /api/stats`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Stats {
    pub users: i64,
    pub doctors: i64,
    pub reminders: i64,
    pub emergency_contacts: i64,
}

impl Stats {
    /// Placeholder served when the live counts cannot be computed.
    pub const FALLBACK: Stats = Stats {
        users: 1500,
        doctors: 75,
        reminders: 8400,
        emergency_contacts: 3200,
    };
}
