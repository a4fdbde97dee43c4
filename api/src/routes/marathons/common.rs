use chrono::{DateTime, Utc};
use db::models::marathon::MarathonData;
use serde::Deserialize;
use validator::Validate;

#[derive(Debug, Deserialize, Validate)]
pub struct CreateMarathonRequest {
    #[validate(length(min = 1, message = "Title must not be empty"))]
    pub title: String,
    pub image: String,
    pub location: String,
    pub registration_start: DateTime<Utc>,
    pub registration_end: DateTime<Utc>,
    pub marathon_start_date: DateTime<Utc>,
    pub running_distance: String,
    pub description: String,
    #[validate(email(message = "Invalid creator email format"))]
    pub creator_email: String,
    pub creator_name: String,
}

impl CreateMarathonRequest {
    pub fn data(&self) -> MarathonData {
        MarathonData {
            title: self.title.clone(),
            image: self.image.clone(),
            location: self.location.clone(),
            registration_start: self.registration_start,
            registration_end: self.registration_end,
            marathon_start_date: self.marathon_start_date,
            running_distance: self.running_distance.clone(),
            description: self.description.clone(),
        }
    }
}

/// The full editable field set. Creator identity and the registration
/// counter are not updatable through the API.
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateMarathonRequest {
    #[validate(length(min = 1, message = "Title must not be empty"))]
    pub title: String,
    pub image: String,
    pub location: String,
    pub registration_start: DateTime<Utc>,
    pub registration_end: DateTime<Utc>,
    pub marathon_start_date: DateTime<Utc>,
    pub running_distance: String,
    pub description: String,
}

impl From<UpdateMarathonRequest> for MarathonData {
    fn from(req: UpdateMarathonRequest) -> Self {
        MarathonData {
            title: req.title,
            image: req.image,
            location: req.location,
            registration_start: req.registration_start,
            registration_end: req.registration_end,
            marathon_start_date: req.marathon_start_date,
            running_distance: req.running_distance,
            description: req.description,
        }
    }
}
