use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::models::client::Client;

/// A fully validated applicant, ready for persistence. Constructed only by
/// the registration usecase once every rule has passed.
///
/// `credit_limit: None` means no credit check applied (very important
/// clients); the limit can never be read for a user that has none.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    first_name: String,
    last_name: String,
    email: String,
    date_of_birth: NaiveDate,
    client: Client,
    credit_limit: Option<i64>,
}

impl User {
    pub fn new(
        first_name: String,
        last_name: String,
        email: String,
        date_of_birth: NaiveDate,
        client: Client,
        credit_limit: Option<i64>,
    ) -> Self {
        Self {
            first_name,
            last_name,
            email,
            date_of_birth,
            client,
            credit_limit,
        }
    }

    // getterのみ提供
    pub fn first_name(&self) -> &str {
        &self.first_name
    }
    pub fn last_name(&self) -> &str {
        &self.last_name
    }
    pub fn email(&self) -> &str {
        &self.email
    }
    pub fn date_of_birth(&self) -> NaiveDate {
        self.date_of_birth
    }
    pub fn client(&self) -> &Client {
        &self.client
    }
    pub fn has_credit_limit(&self) -> bool {
        self.credit_limit.is_some()
    }
    pub fn credit_limit(&self) -> Option<i64> {
        self.credit_limit
    }
}
