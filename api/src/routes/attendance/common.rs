use serde::Deserialize;
use validator::Validate;

/// Body of `POST /attendance`. `check_in: false` means check-out. Coordinates
/// are stored as reported, without a range check.
#[derive(Debug, Deserialize, Validate)]
pub struct AttendanceRequest {
    pub check_in: bool,

    #[serde(alias = "check_in_lat", alias = "check_out_lat")]
    pub latitude: f64,

    #[serde(alias = "check_in_long", alias = "check_out_long")]
    pub longitude: f64,
}

#[derive(Debug, Default, Deserialize)]
pub struct RangeQuery {
    pub from: Option<String>,
    pub to: Option<String>,
}
