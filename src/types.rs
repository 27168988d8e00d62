//! Domain types used by the bank and hero callers.
//!
//! [`Account`] is also the record type produced by [`crate::ingestion`].

use serde::{Deserialize, Serialize};

/// Kind of bank account.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccountKind {
    /// Personal account.
    Personal,
    /// Business account.
    Business,
}

impl AccountKind {
    /// Parse an account kind from its lowercase name (case-insensitive).
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "personal" => Some(Self::Personal),
            "business" => Some(Self::Business),
            _ => None,
        }
    }
}

/// A named bank account with a balance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Account {
    /// Account holder name.
    pub name: String,
    /// Current balance.
    pub value: f64,
    /// Account kind. Serialized as `type`.
    #[serde(rename = "type")]
    pub kind: AccountKind,
}

impl Account {
    /// Create a new account.
    pub fn new(name: impl Into<String>, value: f64, kind: AccountKind) -> Self {
        Self {
            name: name.into(),
            value,
            kind,
        }
    }
}

/// Something a [`crate::hero::Hero`] can eat.
#[derive(Debug, Clone, PartialEq)]
pub struct Food {
    pub name: String,
    pub replenish_value: f64,
    /// Set once a [`Rat`] has touched it.
    pub poisonous: bool,
}

impl Food {
    pub fn new(name: impl Into<String>, replenish_value: f64) -> Self {
        Self {
            name: name.into(),
            replenish_value,
            poisonous: false,
        }
    }
}

/// Poisons any food it gets at.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Rat;

impl Rat {
    pub fn touch(&self, food: &mut Food) {
        food.poisonous = true;
    }
}

/// A task on a hero's list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    pub difficulty: u32,
    pub urgency: u32,
    pub reward: String,
    pub completed: bool,
}

impl Task {
    /// Create a new, not yet completed task.
    pub fn new(difficulty: u32, urgency: u32, reward: impl Into<String>) -> Self {
        Self {
            difficulty,
            urgency,
            reward: reward.into(),
            completed: false,
        }
    }
}

/// Field used to order tasks in [`crate::hero::Hero::sort_tasks`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskField {
    Difficulty,
    Urgency,
    Reward,
}
