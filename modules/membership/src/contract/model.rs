use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::contract::error::MembershipError;

/// Closed set of branch roles. The role value carries the whole
/// authorization story: management capability is a pure function of it,
/// there is no per-role behavior beyond that.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    Outsider,
    Volunteer,
    Head,
    Chairman,
}

impl Role {
    /// Factory keyed on the role strings accepted at signup.
    pub fn parse(s: &str) -> Result<Role, MembershipError> {
        match s.to_ascii_lowercase().as_str() {
            "outsider" => Ok(Role::Outsider),
            "volunteer" => Ok(Role::Volunteer),
            "head" => Ok(Role::Head),
            "chairman" => Ok(Role::Chairman),
            other => Err(MembershipError::invalid_role(other)),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Role::Outsider => "outsider",
            Role::Volunteer => "volunteer",
            Role::Head => "head",
            Role::Chairman => "chairman",
        }
    }

    /// Only Head and Chairman may create/edit/delete/publish events.
    pub fn can_manage(self) -> bool {
        matches!(self, Role::Head | Role::Chairman)
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One entry of a member's role-assignment history.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoleAssignment {
    pub role: Role,
    pub at: DateTime<Utc>,
}

/// Pure member model for inter-module use (no serde).
///
/// Members are never physically deleted; leaving the branch only sets
/// `left_at`, so the history stays auditable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Member {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub password_hash: String,
    pub role: Role,
    pub department: String,
    pub permissions: String,
    pub warnings: u32,
    pub enrolled_at: DateTime<Utc>,
    pub left_at: Option<DateTime<Utc>>,
    pub role_history: Vec<RoleAssignment>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MemberState {
    Active,
    Left,
}

impl Member {
    /// Derived state: active until a leave date is recorded.
    pub fn state(&self) -> MemberState {
        if self.left_at.is_some() {
            MemberState::Left
        } else {
            MemberState::Active
        }
    }
}

/// Signup input. The role arrives as a string and goes through
/// [`Role::parse`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewMember {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub password: String,
    pub role: String,
    pub department: String,
}
