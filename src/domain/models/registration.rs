use chrono::NaiveDate;

/// Raw applicant details as supplied by the caller. Not persisted; the
/// usecase validates it and builds a `User` from it.
#[derive(Debug, Clone)]
pub struct RegistrationInput {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub date_of_birth: NaiveDate,
    pub client_id: i32,
}
