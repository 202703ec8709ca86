//! Read-only aggregates served by the dashboard and profile endpoints.

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use sea_orm::entity::prelude::*;
use serde::Serialize;
use std::collections::HashMap;

use crate::models::{attendance, employer, mood, otp, student, supervisor};

/// One card on the dashboard.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardRow {
    pub student_id: i64,
    pub first_name: String,
    pub last_name: String,
    pub employer_name: Option<String>,
    pub check_in_at: Option<DateTime<Utc>>,
    pub check_out_at: Option<DateTime<Utc>>,
    pub emotion: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MoodEntry {
    pub emotion: String,
    pub recorded_at: DateTime<Utc>,
}

impl From<mood::Model> for MoodEntry {
    fn from(m: mood::Model) -> Self {
        Self {
            emotion: m.emotion,
            recorded_at: m.recorded_at,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StudentInfo {
    pub first_name: String,
    pub last_name: String,
    pub gender: String,
    pub contact_number: String,
    pub contact_number_guardian: String,
    pub remarks: String,
}

/// An attendance record next to the shift it was scheduled for.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProfileAttendance {
    pub attendance_date: NaiveDate,
    pub scheduled_check_in: Option<NaiveTime>,
    pub scheduled_check_out: Option<NaiveTime>,
    pub actual_check_in: Option<DateTime<Utc>>,
    pub actual_check_out: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TraineeProfile {
    pub student_info: StudentInfo,
    pub recent_moods: Vec<MoodEntry>,
    pub recent_attendance: Vec<ProfileAttendance>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SummaryAttendance {
    pub attendance_date: NaiveDate,
    pub check_in_at: Option<DateTime<Utc>>,
    pub check_out_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EmployeeSummary {
    pub attendances: Vec<SummaryAttendance>,
    pub remarks: String,
    pub moods: Vec<MoodEntry>,
}

/// One row of the management table: a student with their placement and the
/// newest one-time password issued to them.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ManagementRow {
    pub student_id: i64,
    pub student_name: String,
    pub student_contact: String,
    pub employer_id: Option<i64>,
    pub employer_name: Option<String>,
    pub employer_contact: Option<String>,
    pub employer_address: Option<String>,
    pub supervisor_id: Option<i64>,
    pub supervisor_name: Option<String>,
    pub latest_otp_code: Option<String>,
    pub expires_at: Option<DateTime<Utc>>,
}

/// An id with a display name, for pickers.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NamedId {
    pub id: i64,
    pub name: String,
}

fn full_name(first: &str, last: &str) -> String {
    format!("{first} {last}").trim().to_string()
}

fn employer_address(e: &employer::Model) -> String {
    [&e.address_line1, &e.address_line2, &e.address_line3]
        .into_iter()
        .map(|l| l.trim())
        .filter(|l| !l.is_empty())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Every student with their employer, latest attendance and latest mood.
///
/// The employer is the one referenced by `student.employer_id`, falling back to
/// an employer row pointing back at the student.
pub async fn dashboard<C: ConnectionTrait>(db: &C) -> Result<Vec<DashboardRow>, DbErr> {
    let students = student::Model::list(db).await?;
    let employers = employer::Model::list(db).await?;
    let latest_attendance = attendance::Model::latest_per_student(db).await?;

    let mut latest_mood: HashMap<i64, mood::Model> = HashMap::new();
    for m in mood::Model::list(db, None).await? {
        latest_mood.entry(m.student_id).or_insert(m);
    }

    let by_id: HashMap<i64, &employer::Model> = employers.iter().map(|e| (e.id, e)).collect();
    let by_student: HashMap<i64, &employer::Model> = employers
        .iter()
        .filter_map(|e| e.student_id.map(|sid| (sid, e)))
        .collect();

    let rows = students
        .into_iter()
        .map(|s| {
            let employer_name = s
                .employer_id
                .and_then(|id| by_id.get(&id))
                .or_else(|| by_student.get(&s.id))
                .map(|e| e.name.clone());
            let attendance = latest_attendance.get(&s.id);
            DashboardRow {
                student_id: s.id,
                employer_name,
                check_in_at: attendance.and_then(|a| a.check_in_at),
                check_out_at: attendance.and_then(|a| a.check_out_at),
                emotion: latest_mood.get(&s.id).map(|m| m.emotion.clone()),
                first_name: s.first_name,
                last_name: s.last_name,
            }
        })
        .collect();

    Ok(rows)
}

/// Every student with employer, supervisor and latest OTP.
///
/// Employer and supervisor resolve like the dashboard: the id on the student
/// first, then a row pointing back at the student.
pub async fn management<C: ConnectionTrait>(db: &C) -> Result<Vec<ManagementRow>, DbErr> {
    let students = student::Model::list(db).await?;
    let employers = employer::Model::list(db).await?;
    let supervisors = supervisor::Model::list(db).await?;
    let latest_otp = otp::Model::latest_per_student(db).await?;

    let employer_by_id: HashMap<i64, &employer::Model> =
        employers.iter().map(|e| (e.id, e)).collect();
    let employer_by_student: HashMap<i64, &employer::Model> = employers
        .iter()
        .filter_map(|e| e.student_id.map(|sid| (sid, e)))
        .collect();
    let supervisor_by_id: HashMap<i64, &supervisor::Model> =
        supervisors.iter().map(|s| (s.id, s)).collect();
    let supervisor_by_student: HashMap<i64, &supervisor::Model> = supervisors
        .iter()
        .filter_map(|s| s.student_id.map(|sid| (sid, s)))
        .collect();

    let rows = students
        .into_iter()
        .map(|s| {
            let employer = s
                .employer_id
                .and_then(|id| employer_by_id.get(&id))
                .or_else(|| employer_by_student.get(&s.id));
            let supervisor = s
                .supervisor_id
                .and_then(|id| supervisor_by_id.get(&id))
                .or_else(|| supervisor_by_student.get(&s.id));
            let otp = latest_otp.get(&s.id);

            ManagementRow {
                student_id: s.id,
                student_name: full_name(&s.first_name, &s.last_name),
                student_contact: s.contact_number,
                employer_id: employer.map(|e| e.id),
                employer_name: employer.map(|e| e.name.clone()),
                employer_contact: employer.map(|e| e.contact_number.clone()),
                employer_address: employer.map(|e| employer_address(e)),
                supervisor_id: supervisor.map(|v| v.id),
                supervisor_name: supervisor.map(|v| full_name(&v.first_name, &v.last_name)),
                latest_otp_code: otp.map(|o| o.otp_code.clone()),
                expires_at: otp.map(|o| o.expires_at),
            }
        })
        .collect();

    Ok(rows)
}

pub async fn employer_names<C: ConnectionTrait>(db: &C) -> Result<Vec<NamedId>, DbErr> {
    Ok(employer::Model::list(db)
        .await?
        .into_iter()
        .map(|e| NamedId { id: e.id, name: e.name })
        .collect())
}

pub async fn supervisor_names<C: ConnectionTrait>(db: &C) -> Result<Vec<NamedId>, DbErr> {
    Ok(supervisor::Model::list(db)
        .await?
        .into_iter()
        .map(|v| NamedId {
            id: v.id,
            name: full_name(&v.first_name, &v.last_name),
        })
        .collect())
}

/// `None` when the student does not exist.
pub async fn trainee_profile<C: ConnectionTrait>(
    db: &C,
    student_id: i64,
    limit: u64,
) -> Result<Option<TraineeProfile>, DbErr> {
    let Some(s) = student::Model::get_by_id(db, student_id).await? else {
        return Ok(None);
    };

    let recent_moods = mood::Model::recent_daily(db, student_id, limit)
        .await?
        .into_iter()
        .map(MoodEntry::from)
        .collect();

    let recent_attendance = attendance::Model::recent(db, student_id, limit)
        .await?
        .into_iter()
        .map(|a| ProfileAttendance {
            attendance_date: a.attendance_date,
            scheduled_check_in: s.check_in_time,
            scheduled_check_out: s.check_out_time,
            actual_check_in: a.check_in_at,
            actual_check_out: a.check_out_at,
        })
        .collect();

    Ok(Some(TraineeProfile {
        student_info: StudentInfo {
            first_name: s.first_name,
            last_name: s.last_name,
            gender: s.gender,
            contact_number: s.contact_number,
            contact_number_guardian: s.contact_number_guardian,
            remarks: s.remarks,
        },
        recent_moods,
        recent_attendance,
    }))
}

/// Attendance before `today`, remarks and recent daily moods. `None` when the
/// student does not exist.
pub async fn employee_summary<C: ConnectionTrait>(
    db: &C,
    student_id: i64,
    today: NaiveDate,
    limit: u64,
) -> Result<Option<EmployeeSummary>, DbErr> {
    let Some(s) = student::Model::get_by_id(db, student_id).await? else {
        return Ok(None);
    };

    let attendances = attendance::Model::recent_before(db, student_id, today, limit)
        .await?
        .into_iter()
        .map(|a| SummaryAttendance {
            attendance_date: a.attendance_date,
            check_in_at: a.check_in_at,
            check_out_at: a.check_out_at,
        })
        .collect();

    let moods = mood::Model::recent_daily(db, student_id, limit)
        .await?
        .into_iter()
        .map(MoodEntry::from)
        .collect();

    Ok(Some(EmployeeSummary {
        attendances,
        remarks: s.remarks,
        moods,
    }))
}
