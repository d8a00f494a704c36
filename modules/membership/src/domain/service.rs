use std::sync::Arc;

use chrono::Utc;
use tracing::{debug, info, instrument, warn};
use uuid::Uuid;

use crate::auth::password;
use crate::auth::token::{Claims, TokenIssuer};
use crate::contract::error::MembershipError;
use crate::contract::model::{Member, NewMember, Role, RoleAssignment};
use crate::domain::repo::MembersRepository;

/// Result of a successful signup or login.
#[derive(Debug, Clone)]
pub struct Session {
    pub member: Member,
    pub token: String,
}

/// Domain service with the membership business rules.
/// Depends only on the repository port, not on infra types.
pub struct MembershipService {
    repo: Arc<dyn MembersRepository>,
    tokens: TokenIssuer,
}

impl MembershipService {
    pub fn new(repo: Arc<dyn MembersRepository>, tokens: TokenIssuer) -> Self {
        Self { repo, tokens }
    }

    #[instrument(
        name = "membership.service.signup",
        skip(self, new_member),
        fields(email = %new_member.email, role = %new_member.role)
    )]
    pub async fn signup(&self, new_member: NewMember) -> Result<Session, MembershipError> {
        info!("Signing up new member");

        self.validate_signup(&new_member)?;
        let role = Role::parse(&new_member.role)?;

        if self
            .repo
            .email_exists(&new_member.email)
            .await
            .map_err(|e| MembershipError::database(e.to_string()))?
        {
            return Err(MembershipError::email_already_exists(new_member.email));
        }

        let password_hash = password::hash(&new_member.password).map_err(|e| {
            warn!(error = %e, "password hashing failed");
            MembershipError::Internal
        })?;

        let now = Utc::now();
        let member = Member {
            id: Uuid::new_v4(),
            name: new_member.name,
            email: new_member.email,
            phone: new_member.phone,
            password_hash,
            role,
            department: new_member.department,
            permissions: String::new(),
            warnings: 0,
            enrolled_at: now,
            left_at: None,
            role_history: vec![RoleAssignment { role, at: now }],
        };

        self.repo
            .insert(member.clone())
            .await
            .map_err(|e| MembershipError::database(e.to_string()))?;

        let token = self.tokens.issue(&member)?;
        info!("Successfully signed up member with id={}", member.id);
        Ok(Session { member, token })
    }

    #[instrument(name = "membership.service.login", skip(self, password), fields(email = %email))]
    pub async fn login(&self, email: &str, password: &str) -> Result<Session, MembershipError> {
        debug!("Logging in member");

        let member = self
            .repo
            .find_by_email(email)
            .await
            .map_err(|e| MembershipError::database(e.to_string()))?
            .ok_or(MembershipError::InvalidCredentials)?;

        let ok = password::verify(password, &member.password_hash).map_err(|e| {
            warn!(error = %e, "password verification failed");
            MembershipError::Internal
        })?;
        if !ok {
            return Err(MembershipError::InvalidCredentials);
        }

        let token = self.tokens.issue(&member)?;
        debug!("Login succeeded for member {}", member.id);
        Ok(Session { member, token })
    }

    #[instrument(name = "membership.service.get_member", skip(self), fields(member_id = %id))]
    pub async fn get_member(&self, id: Uuid) -> Result<Member, MembershipError> {
        self.repo
            .find_by_id(id)
            .await
            .map_err(|e| MembershipError::database(e.to_string()))?
            .ok_or_else(|| MembershipError::not_found(id))
    }

    /// Change a member's role, appending to the role history.
    #[instrument(name = "membership.service.change_role", skip(self), fields(member_id = %id))]
    pub async fn change_role(&self, id: Uuid, new_role: Role) -> Result<Member, MembershipError> {
        let mut member = self.get_member(id).await?;
        if member.role == new_role {
            return Ok(member);
        }
        member.role = new_role;
        member.role_history.push(RoleAssignment {
            role: new_role,
            at: Utc::now(),
        });
        self.repo
            .update(member.clone())
            .await
            .map_err(|e| MembershipError::database(e.to_string()))?;
        info!("Changed role of member {} to {}", id, new_role);
        Ok(member)
    }

    /// Record that a member left the branch. Idempotent; the record is
    /// retained for history, never deleted.
    #[instrument(name = "membership.service.record_leave", skip(self), fields(member_id = %id))]
    pub async fn record_leave(&self, id: Uuid) -> Result<Member, MembershipError> {
        let mut member = self.get_member(id).await?;
        if member.left_at.is_none() {
            member.left_at = Some(Utc::now());
            self.repo
                .update(member.clone())
                .await
                .map_err(|e| MembershipError::database(e.to_string()))?;
        }
        Ok(member)
    }

    #[instrument(name = "membership.service.add_warning", skip(self), fields(member_id = %id))]
    pub async fn add_warning(&self, id: Uuid) -> Result<Member, MembershipError> {
        let mut member = self.get_member(id).await?;
        member.warnings += 1;
        self.repo
            .update(member.clone())
            .await
            .map_err(|e| MembershipError::database(e.to_string()))?;
        Ok(member)
    }

    /// Validate a session token and return its claims.
    pub fn verify_token(&self, token: &str) -> Result<Claims, MembershipError> {
        self.tokens.verify(token)
    }

    // --- validation helpers ---

    fn validate_signup(&self, new_member: &NewMember) -> Result<(), MembershipError> {
        if new_member.name.trim().is_empty() {
            return Err(MembershipError::validation("name cannot be empty"));
        }
        if new_member.email.is_empty()
            || !new_member.email.contains('@')
            || !new_member.email.contains('.')
        {
            return Err(MembershipError::validation(format!(
                "invalid email: '{}'",
                new_member.email
            )));
        }
        if new_member.password.len() < 8 {
            return Err(MembershipError::validation(
                "password must be at least 8 characters",
            ));
        }
        Ok(())
    }
}
