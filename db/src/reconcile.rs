//! Check-in / check-out reconciliation.
//!
//! Decides, without touching the database, what a check-in or check-out does to
//! a student's record for the current UTC day. `attendance::Model::record`
//! loads the record, asks [`reconcile`] for a [`Plan`] and applies it.
//!
//! Policy:
//! - check-in creates the day's record, or overwrites the check-in of an existing
//!   one (last write wins). A check-out that would now precede the check-in is
//!   cleared.
//! - check-out only ever targets today's record and is never earlier than the
//!   check-in.

use chrono::{DateTime, Utc};
use sea_orm::DbErr;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::attendance;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Action {
    CheckIn,
    CheckOut,
}

impl Action {
    pub fn from_check_in_flag(check_in: bool) -> Self {
        if check_in { Self::CheckIn } else { Self::CheckOut }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Location {
    pub latitude: f64,
    pub longitude: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Plan {
    /// No record exists today; create one carrying only the check-in.
    Insert {
        check_in_at: DateTime<Utc>,
        location: Location,
    },
    /// Overwrite today's record with this state.
    Update(attendance::Model),
}

#[derive(Debug, Error)]
pub enum AttendanceError {
    #[error("Invalid student id: {0}")]
    InvalidStudent(i64),

    #[error("Student {0} not found")]
    StudentNotFound(i64),

    #[error("No check-in found for today")]
    NoCheckInToday,

    #[error(transparent)]
    Db(#[from] DbErr),
}

pub fn reconcile(
    today: Option<&attendance::Model>,
    action: Action,
    now: DateTime<Utc>,
    location: Location,
) -> Result<Plan, AttendanceError> {
    match (action, today) {
        (Action::CheckIn, None) => Ok(Plan::Insert {
            check_in_at: now,
            location,
        }),
        (Action::CheckIn, Some(record)) => {
            let mut next = record.clone();
            next.check_in_at = Some(now);
            next.check_in_lat = Some(location.latitude);
            next.check_in_long = Some(location.longitude);
            if next.check_out_at.is_some_and(|out| out < now) {
                next.check_out_at = None;
                next.check_out_lat = None;
                next.check_out_long = None;
            }
            Ok(Plan::Update(next))
        }
        (Action::CheckOut, Some(record)) => {
            let mut next = record.clone();
            let out = match record.check_in_at {
                Some(check_in) if now < check_in => check_in,
                _ => now,
            };
            next.check_out_at = Some(out);
            next.check_out_lat = Some(location.latitude);
            next.check_out_long = Some(location.longitude);
            Ok(Plan::Update(next))
        }
        (Action::CheckOut, None) => Err(AttendanceError::NoCheckInToday),
    }
}
