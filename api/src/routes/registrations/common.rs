use db::models::registration::{NewRegistration, RegistrationData};
use serde::Deserialize;
use validator::Validate;

#[derive(Debug, Deserialize, Validate)]
pub struct RegistrationRequest {
    #[validate(email(message = "Invalid email format"))]
    pub email: String,
    #[validate(length(min = 1, message = "First name must not be empty"))]
    pub first_name: String,
    #[validate(length(min = 1, message = "Last name must not be empty"))]
    pub last_name: String,
    #[validate(length(min = 1, message = "Contact number must not be empty"))]
    pub contact_number: String,
    pub additional_info: Option<String>,
    pub marathon_id: i64,
}

impl From<RegistrationRequest> for NewRegistration {
    fn from(req: RegistrationRequest) -> Self {
        NewRegistration {
            email: req.email,
            first_name: req.first_name,
            last_name: req.last_name,
            contact_number: req.contact_number,
            additional_info: req.additional_info,
            marathon_id: req.marathon_id,
        }
    }
}

/// Editable fields only: the registrant email and marathon reference form
/// the uniqueness key and cannot be changed after submission.
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateRegistrationRequest {
    #[validate(length(min = 1, message = "First name must not be empty"))]
    pub first_name: String,
    #[validate(length(min = 1, message = "Last name must not be empty"))]
    pub last_name: String,
    #[validate(length(min = 1, message = "Contact number must not be empty"))]
    pub contact_number: String,
    pub additional_info: Option<String>,
}

impl From<UpdateRegistrationRequest> for RegistrationData {
    fn from(req: UpdateRegistrationRequest) -> Self {
        RegistrationData {
            first_name: req.first_name,
            last_name: req.last_name,
            contact_number: req.contact_number,
            additional_info: req.additional_info,
        }
    }
}
