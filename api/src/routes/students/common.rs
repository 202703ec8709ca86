use chrono::{NaiveDate, NaiveTime};
use common::dates::{deserialize_optional_date, deserialize_optional_time};
use db::models::student::StudentFields;
use serde::Deserialize;
use validator::Validate;

/// Body of `POST /students` and `PUT /students/{id}`.
///
/// Only the names are required. `dob` accepts `YYYY-MM-DD`, RFC 3339 or
/// `YYYY-MM-DD HH:MM:SS`; the shift times accept `HH:MM` or `HH:MM:SS`.
#[derive(Debug, Deserialize, Validate)]
pub struct StudentRequest {
    #[validate(length(min = 1, message = "first_name is required"))]
    pub first_name: String,

    #[validate(length(min = 1, message = "last_name is required"))]
    pub last_name: String,

    #[serde(default, deserialize_with = "deserialize_optional_date")]
    pub dob: Option<NaiveDate>,

    #[serde(default)]
    pub gender: String,
    #[serde(default)]
    pub address_line1: String,
    #[serde(default)]
    pub address_line2: String,
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub contact_number: String,
    #[serde(default)]
    pub contact_number_guardian: String,

    #[validate(range(min = 1, message = "supervisor_id must be positive"))]
    pub supervisor_id: Option<i64>,
    #[validate(range(min = 1, message = "employer_id must be positive"))]
    pub employer_id: Option<i64>,

    #[serde(default)]
    pub remarks: String,

    #[serde(default)]
    #[validate(range(min = -90.0, max = 90.0))]
    pub home_lat: f64,
    #[serde(default)]
    #[validate(range(min = -180.0, max = 180.0))]
    pub home_long: f64,

    #[serde(default, deserialize_with = "deserialize_optional_time")]
    pub check_in_time: Option<NaiveTime>,
    #[serde(default, deserialize_with = "deserialize_optional_time")]
    pub check_out_time: Option<NaiveTime>,
}

impl From<StudentRequest> for StudentFields {
    fn from(req: StudentRequest) -> Self {
        Self {
            first_name: req.first_name.trim().to_string(),
            last_name: req.last_name.trim().to_string(),
            dob: req.dob,
            gender: req.gender,
            address_line1: req.address_line1,
            address_line2: req.address_line2,
            city: req.city,
            contact_number: req.contact_number,
            contact_number_guardian: req.contact_number_guardian,
            supervisor_id: req.supervisor_id,
            employer_id: req.employer_id,
            remarks: req.remarks,
            home_lat: req.home_lat,
            home_long: req.home_long,
            check_in_time: req.check_in_time,
            check_out_time: req.check_out_time,
        }
    }
}
