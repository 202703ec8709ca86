use db::models::employer::EmployerFields;
use serde::Deserialize;
use validator::Validate;

#[derive(Debug, Deserialize, Validate)]
pub struct EmployerRequest {
    #[validate(length(min = 1, message = "name is required"))]
    pub name: String,

    #[validate(range(min = 1, message = "student_id must be positive"))]
    pub student_id: Option<i64>,

    #[serde(default)]
    pub contact_number: String,
    #[serde(default)]
    pub address_line1: String,
    #[serde(default)]
    pub address_line2: String,
    #[serde(default)]
    pub address_line3: String,

    #[serde(default)]
    #[validate(range(min = -90.0, max = 90.0))]
    pub latitude: f64,
    #[serde(default)]
    #[validate(range(min = -180.0, max = 180.0))]
    pub longitude: f64,
}

impl From<EmployerRequest> for EmployerFields {
    fn from(req: EmployerRequest) -> Self {
        Self {
            name: req.name.trim().to_string(),
            student_id: req.student_id,
            contact_number: req.contact_number,
            address_line1: req.address_line1,
            address_line2: req.address_line2,
            address_line3: req.address_line3,
            latitude: req.latitude,
            longitude: req.longitude,
        }
    }
}
