//! User service
//!
//! Plaintext passwords cross this seam exactly once: they are hashed
//! through the `PasswordHasher` collaborator before any store call, and
//! verified against the stored digest on authentication. Authentication
//! failures never reveal whether the account exists.

use std::sync::Arc;
use uuid::Uuid;

use crate::auth::PasswordHasher;
use crate::core::error::{DomainError, DomainResult};
use crate::core::page::{ListParams, PageInput, PaginatedResponse};
use crate::entities::user::{
    CreateUserInput, UpdateUserInput, User, UserDraft, UserOutput, UserPatch, UserStore,
};

const MIN_PASSWORD_LEN: usize = 8;

pub struct UserService {
    users: Arc<dyn UserStore>,
    hasher: Arc<dyn PasswordHasher>,
}

impl UserService {
    pub fn new(users: Arc<dyn UserStore>, hasher: Arc<dyn PasswordHasher>) -> Self {
        Self { users, hasher }
    }

    pub async fn create(&self, input: CreateUserInput) -> DomainResult<UserOutput> {
        validate_password(&input.password)?;
        let password_hash = self.hasher.hash(&input.password)?;

        let user = self
            .users
            .create(UserDraft {
                name: input.name,
                email: input.email,
                password_hash,
            })
            .await?;
        Ok(UserOutput::from(user))
    }

    pub async fn get(&self, id: Uuid) -> DomainResult<UserOutput> {
        let user = self
            .users
            .find_by_id(&id)
            .await?
            .ok_or_else(|| DomainError::not_found::<User>(id))?;
        Ok(UserOutput::from(user))
    }

    pub async fn list(&self, params: ListParams) -> DomainResult<PaginatedResponse<UserOutput>> {
        let input = PageInput::normalize(params);
        let page = self.users.list(&input).await?;
        Ok(PaginatedResponse::from_page(page, &input, UserOutput::from))
    }

    pub async fn update(&self, id: Uuid, input: UpdateUserInput) -> DomainResult<UserOutput> {
        let password_hash = match input.password.as_deref() {
            Some(password) => {
                validate_password(password)?;
                Some(self.hasher.hash(password)?)
            }
            None => None,
        };

        let user = self
            .users
            .update(
                &id,
                UserPatch {
                    name: input.name,
                    email: input.email,
                    password_hash,
                },
            )
            .await?;
        Ok(UserOutput::from(user))
    }

    pub async fn delete(&self, id: Uuid) -> DomainResult<()> {
        self.users.delete(&id).await
    }

    /// Verify an email/password pair against the stored digest.
    pub async fn authenticate(&self, email: &str, password: &str) -> DomainResult<UserOutput> {
        let user = self
            .users
            .find_by_email(email)
            .await?
            .ok_or(DomainError::InvalidCredentials)?;

        if !self.hasher.verify(password, &user.password_hash)? {
            tracing::debug!(email, "authentication rejected");
            return Err(DomainError::InvalidCredentials);
        }
        Ok(UserOutput::from(user))
    }
}

fn validate_password(password: &str) -> DomainResult<()> {
    if password.len() < MIN_PASSWORD_LEN {
        return Err(DomainError::InvalidPassword(format!(
            "must be at least {} characters",
            MIN_PASSWORD_LEN
        )));
    }
    Ok(())
}
