use anyhow::Context;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::contract::model::{Member, Role, RoleAssignment};
use crate::infra::storage::entity::Model as MemberRow;

/// Serde shape of one role-history entry inside the JSON column.
#[derive(Debug, Serialize, Deserialize)]
struct StoredAssignment {
    role: String,
    at: DateTime<Utc>,
}

pub fn row_to_member(row: MemberRow) -> anyhow::Result<Member> {
    let stored: Vec<StoredAssignment> =
        serde_json::from_value(row.role_history).context("malformed role_history column")?;
    let mut role_history = Vec::with_capacity(stored.len());
    for s in stored {
        role_history.push(RoleAssignment {
            role: Role::parse(&s.role)
                .map_err(|e| anyhow::anyhow!("stored role invalid: {e}"))?,
            at: s.at,
        });
    }
    Ok(Member {
        id: row.id,
        name: row.name,
        email: row.email,
        phone: row.phone,
        password_hash: row.password_hash,
        role: Role::parse(&row.role).map_err(|e| anyhow::anyhow!("stored role invalid: {e}"))?,
        department: row.department,
        permissions: row.permissions,
        warnings: row.warnings.max(0) as u32,
        enrolled_at: row.enrolled_at,
        left_at: row.left_at,
        role_history,
    })
}

pub fn role_history_to_json(history: &[RoleAssignment]) -> serde_json::Value {
    let stored: Vec<StoredAssignment> = history
        .iter()
        .map(|a| StoredAssignment {
            role: a.role.as_str().to_string(),
            at: a.at,
        })
        .collect();
    serde_json::to_value(stored).unwrap_or(serde_json::Value::Array(Vec::new()))
}
