//! Employee directory - Registration and listing of employee profiles.

use async_trait::async_trait;
use std::sync::Arc;

use crate::domain::{Employee, EmployeeDetails, NewEmployee, SecretHash, UserRole};
use crate::errors::{AppError, AppResult};
use crate::infra::{TransactionContext, UnitOfWork};
use crate::with_transaction;

#[async_trait]
pub trait EmployeeService: Send + Sync {
    /// Create an account with role `user` and its employee profile.
    ///
    /// Both rows are written in one transaction. A taken email fails with a
    /// conflict and leaves nothing behind.
    async fn register(&self, employee: NewEmployee) -> AppResult<Employee>;

    /// Every employee profile, in registration order.
    async fn list_all(&self) -> AppResult<Vec<Employee>>;
}

/// Concrete implementation of EmployeeService using Unit of Work.
pub struct EmployeeDirectory<U: UnitOfWork> {
    uow: Arc<U>,
}

impl<U: UnitOfWork> EmployeeDirectory<U> {
    pub fn new(uow: Arc<U>) -> Self {
        Self { uow }
    }
}

/// Create account + profile on an open transaction. Shared with the seed command.
pub(crate) async fn create_account_with_profile(
    ctx: &TransactionContext<'_>,
    email: String,
    secret_hash: SecretHash,
    details: EmployeeDetails,
    role: UserRole,
) -> AppResult<Employee> {
    if ctx.accounts().find_by_email(&email).await?.is_some() {
        return Err(AppError::conflict("Email"));
    }

    let account = ctx
        .accounts()
        .create(email, secret_hash.into_string(), role)
        .await?;

    ctx.employees().create(account.id, details).await
}

#[async_trait]
impl<U: UnitOfWork> EmployeeService for EmployeeDirectory<U> {
    async fn register(&self, employee: NewEmployee) -> AppResult<Employee> {
        let NewEmployee {
            email,
            secret,
            details,
        } = employee;
        let secret_hash = SecretHash::hash(&secret)?;
        let account_email = email.clone();

        let profile = with_transaction!(self.uow, |ctx| {
            create_account_with_profile(&ctx, account_email, secret_hash, details, UserRole::User)
                .await
        })?;

        tracing::info!(
            account_id = profile.account_id,
            employee_id = profile.id,
            "Registered employee {}",
            email
        );
        Ok(profile)
    }

    async fn list_all(&self) -> AppResult<Vec<Employee>> {
        self.uow.employees().list().await
    }
}
