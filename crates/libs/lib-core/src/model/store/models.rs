use chrono::{DateTime, FixedOffset, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

// region: --- User

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "UPPERCASE")]
pub enum Role {
    Admin,
    Member,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "ADMIN",
            Role::Member => "MEMBER",
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Role {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "ADMIN" => Ok(Role::Admin),
            "MEMBER" => Ok(Role::Member),
            _ => Err(format!("Invalid role: {}", s)),
        }
    }
}

impl From<String> for Role {
    fn from(s: String) -> Self {
        use std::str::FromStr;
        // Unknown values from storage get the least privileged role.
        Role::from_str(&s).unwrap_or(Role::Member)
    }
}

/// User entity representing a complete user record from the database.
#[derive(Debug, Clone, FromRow, PartialEq)]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    pub password_hash: String,
    #[sqlx(try_from = "String")]
    pub role: Role,
    pub created_at: DateTime<Utc>,
}

/// Data structure for creating a new user.
///
/// Password should be hashed before creating.
#[derive(Debug, Clone)]
pub struct UserForCreate {
    pub name: String,
    pub email: String,
    pub password_hash: String,
    pub role: Role,
}

impl UserForCreate {
    /// A regular member; admins are only created by the `create-admin` tool.
    pub fn member(name: String, email: String, password_hash: String) -> Self {
        Self {
            name,
            email,
            password_hash,
            role: Role::Member,
        }
    }
}

// endregion: --- User

// region: --- Gym

#[derive(Debug, Clone, FromRow, Serialize, Deserialize, PartialEq)]
pub struct Gym {
    pub id: String,
    pub title: String,
    pub description: Option<String>,
    pub phone: Option<String>,
    pub latitude: f64,
    pub longitude: f64,
    pub created_at: DateTime<Utc>,
}

impl Gym {
    pub fn coordinate(&self) -> crate::geo::Coordinate {
        crate::geo::Coordinate {
            latitude: self.latitude,
            longitude: self.longitude,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct GymForCreate {
    pub title: String,
    pub description: Option<String>,
    pub phone: Option<String>,
    pub latitude: f64,
    pub longitude: f64,
}

// endregion: --- Gym

// region: --- CheckIn

#[derive(Debug, Clone, FromRow, Serialize, Deserialize, PartialEq)]
pub struct CheckIn {
    pub id: String,
    pub user_id: String,
    pub gym_id: String,
    pub created_at: DateTime<Utc>,
    pub validated_at: Option<DateTime<Utc>>,
}

impl CheckIn {
    pub fn is_validated(&self) -> bool {
        self.validated_at.is_some()
    }
}

/// Data structure for creating a check-in.
///
/// `created_at` keeps the offset the caller evaluated "today" in, so the
/// repository can store the matching calendar day alongside the instant.
#[derive(Debug, Clone)]
pub struct CheckInForCreate {
    pub gym_id: String,
    pub user_id: String,
    pub created_at: DateTime<FixedOffset>,
}

// endregion: --- CheckIn
