use chrono::{Datelike, NaiveDate};

use crate::domain::{
    error::DomainError,
    models::{client::Classification, registration::RegistrationInput, user::User},
    repositories::{client_repository::ClientRepository, user_repository::UserRepository},
    services::{clock::Clock, credit_service::CreditLimitProvider},
};

const MINIMUM_AGE: i32 = 21;
const MINIMUM_CREDIT_LIMIT: i64 = 500;

pub struct RegisterUserUsecase<
    C: ClientRepository,
    P: CreditLimitProvider,
    U: UserRepository,
    K: Clock,
> {
    client_repository: C,
    credit_service: P,
    user_repository: U,
    clock: K,
}

impl<C: ClientRepository, P: CreditLimitProvider, U: UserRepository, K: Clock>
    RegisterUserUsecase<C, P, U, K>
{
    pub fn new(client_repository: C, credit_service: P, user_repository: U, clock: K) -> Self {
        Self {
            client_repository,
            credit_service,
            user_repository,
            clock,
        }
    }

    /// The boolean contract: true when the user was registered, false on any
    /// rejection or collaborator fault.
    pub async fn register(&self, input: RegistrationInput) -> bool
    where
        C: Send + Sync,
        P: Send + Sync,
        U: Send + Sync,
        K: Send + Sync,
    {
        self.try_register(input).await.is_ok()
    }

    /// Runs the registration rules in order, short-circuiting at the first
    /// failure. The user is handed to the repository only when every rule
    /// has passed, so a rejected applicant is never externally visible.
    pub async fn try_register(&self, input: RegistrationInput) -> Result<User, DomainError>
    where
        C: Send + Sync,
        P: Send + Sync,
        U: Send + Sync,
        K: Send + Sync,
    {
        if input.first_name.is_empty() || input.last_name.is_empty() {
            return Err(DomainError::EmptyRequiredField);
        }

        // Legacy rule, kept verbatim: an address is rejected only when it is
        // missing both symbols, so "nick.chapsas" passes.
        if !input.email.contains('@') && !input.email.contains('.') {
            return Err(DomainError::InvalidEmailShape);
        }

        let today = self.clock.now().date_naive();
        if age_on(today, input.date_of_birth) < MINIMUM_AGE {
            return Err(DomainError::UnderageApplicant);
        }

        let client = self
            .client_repository
            .find_by_id(input.client_id)
            .await?
            .ok_or(DomainError::ClientNotFound)?;

        let credit_limit = match client.classification() {
            // Skip credit check
            Classification::VeryImportant => None,
            // Do credit check and double the limit
            Classification::Important => {
                let limit = self
                    .credit_service
                    .credit_limit(&input.first_name, &input.last_name, input.date_of_birth)
                    .await?;
                Some(limit * 2)
            }
            // Do credit check
            Classification::Regular => {
                let limit = self
                    .credit_service
                    .credit_limit(&input.first_name, &input.last_name, input.date_of_birth)
                    .await?;
                Some(limit)
            }
        };

        if let Some(limit) = credit_limit {
            if limit < MINIMUM_CREDIT_LIMIT {
                return Err(DomainError::CreditLimitTooLow);
            }
        }

        let user = User::new(
            input.first_name,
            input.last_name,
            input.email,
            input.date_of_birth,
            client,
            credit_limit,
        );

        self.user_repository.add_user(&user).await?;

        Ok(user)
    }
}

/// Whole years between the birth date and `today`, one less when the
/// birthday has not yet occurred this year.
fn age_on(today: NaiveDate, date_of_birth: NaiveDate) -> i32 {
    let mut age = today.year() - date_of_birth.year();
    if (today.month(), today.day()) < (date_of_birth.month(), date_of_birth.day()) {
        age -= 1;
    }
    age
}
