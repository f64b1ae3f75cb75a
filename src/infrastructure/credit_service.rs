use async_trait::async_trait;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::{error::DomainError, services::credit_service::CreditLimitProvider};

#[derive(Serialize)]
struct CreditLimitRequest<'a> {
    first_name: &'a str,
    last_name: &'a str,
    date_of_birth: NaiveDate,
}

#[derive(Deserialize)]
struct CreditLimitResponse {
    credit_limit: i64,
}

/// Credit score lookup over HTTP. The client is long-lived and shared; each
/// check is a single request with no state carried between calls.
#[derive(Clone)]
pub struct HttpCreditService {
    client: reqwest::Client,
    base_url: String,
}

impl HttpCreditService {
    pub fn new(base_url: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url,
        }
    }
}

#[async_trait]
impl CreditLimitProvider for HttpCreditService {
    async fn credit_limit(
        &self,
        first_name: &str,
        last_name: &str,
        date_of_birth: NaiveDate,
    ) -> Result<i64, DomainError> {
        let response = self
            .client
            .post(format!("{}/credit-limit", self.base_url))
            .json(&CreditLimitRequest {
                first_name,
                last_name,
                date_of_birth,
            })
            .send()
            .await
            .map_err(|e| DomainError::CreditServiceUnavailable(e.to_string()))?
            .error_for_status()
            .map_err(|e| DomainError::CreditServiceUnavailable(e.to_string()))?;

        let body: CreditLimitResponse = response
            .json()
            .await
            .map_err(|e| DomainError::CreditServiceUnavailable(e.to_string()))?;

        Ok(body.credit_limit)
    }
}
