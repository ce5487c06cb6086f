use crate::shared::entity::{Entity, ID};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::{fmt::Display, str::FromStr};
use thiserror::Error;

/// A record in the `users` collection of the team panel. Everything except
/// `id` and `created_at` is owned by the client; those two fields are
/// assigned by the remote collection.
#[derive(Debug, Clone)]
pub struct User {
    pub id: ID,
    pub name: String,
    pub email: String,
    pub role: String,
    pub status: UserStatus,
    pub created_at: Option<DateTime<Utc>>,
}

impl Entity<ID> for User {
    fn id(&self) -> ID {
        self.id.clone()
    }
}

/// The collection stores status as the original Portuguese labels, so the
/// wire representation keeps them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum UserStatus {
    #[serde(rename = "ativo")]
    Active,
    #[serde(rename = "inativo")]
    Inactive,
}

impl UserStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Active => "ativo",
            Self::Inactive => "inativo",
        }
    }
}

impl Display for UserStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Error, Debug)]
pub enum InvalidUserStatusError {
    #[error("`{0}` is not a known user status")]
    Unknown(String),
}

impl FromStr for UserStatus {
    type Err = InvalidUserStatusError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ativo" => Ok(Self::Active),
            "inativo" => Ok(Self::Inactive),
            _ => Err(InvalidUserStatusError::Unknown(s.to_string())),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn it_parses_known_statuses() {
        assert_eq!("ativo".parse::<UserStatus>().unwrap(), UserStatus::Active);
        assert_eq!(
            "inativo".parse::<UserStatus>().unwrap(),
            UserStatus::Inactive
        );
    }

    #[test]
    fn it_rejects_unknown_statuses() {
        assert!("enabled".parse::<UserStatus>().is_err());
        assert!("".parse::<UserStatus>().is_err());
    }

    #[test]
    fn status_roundtrips_through_its_label() {
        for status in &[UserStatus::Active, UserStatus::Inactive] {
            assert_eq!(status.as_str().parse::<UserStatus>().unwrap(), *status);
        }
    }
}
