use chrono::{DateTime, NaiveDate, Utc};
use sea_orm::ActiveValue::{Set, Unchanged};
use sea_orm::entity::prelude::*;
use sea_orm::sea_query::{Expr, OnConflict};
use sea_orm::{QueryOrder, QuerySelect, TransactionTrait};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::models::student;
use crate::reconcile::{Action, AttendanceError, Location, Plan, reconcile};

/// One student's attendance for one UTC calendar day.
///
/// `(student_id, attendance_date)` is unique; `check_out_at`, when set, is never
/// earlier than `check_in_at`.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "attendance")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub student_id: i64,
    pub attendance_date: NaiveDate,
    pub check_in_at: Option<DateTime<Utc>>,
    pub check_in_lat: Option<f64>,
    pub check_in_long: Option<f64>,
    pub check_out_at: Option<DateTime<Utc>>,
    pub check_out_lat: Option<f64>,
    pub check_out_long: Option<f64>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::student::Entity",
        from = "Column::StudentId",
        to = "super::student::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Student,
}

impl Related<super::student::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Student.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    /// Applies a check-in or check-out for `student_id` at `now`.
    ///
    /// The first statement of the transaction is a write, so the database write
    /// lock is held before the day's row is read. A check-in starts with an
    /// upsert on `(student_id, attendance_date)` and a check-out with a targeted
    /// `UPDATE`; [`reconcile`] then settles the row that was written. Concurrent
    /// first check-ins for the same day queue on the lock and collapse into a
    /// single row.
    pub async fn record(
        db: &DatabaseConnection,
        student_id: i64,
        action: Action,
        now: DateTime<Utc>,
        location: Location,
    ) -> Result<Model, AttendanceError> {
        if student_id <= 0 {
            return Err(AttendanceError::InvalidStudent(student_id));
        }

        if !student::Model::exists(db, student_id).await? {
            return Err(AttendanceError::StudentNotFound(student_id));
        }

        let day = now.date_naive();
        let txn = db.begin().await?;

        match action {
            Action::CheckIn => Self::upsert_check_in(&txn, student_id, day, now, location).await?,
            Action::CheckOut => {
                if !Self::stamp_check_out(&txn, student_id, day, now, location).await? {
                    return Err(AttendanceError::NoCheckInToday);
                }
            }
        }

        let current = Self::find_for_day(&txn, student_id, day).await?;

        let stored = match reconcile(current.as_ref(), action, now, location)? {
            Plan::Update(next) if current.as_ref() == Some(&next) => next,
            Plan::Update(next) => {
                ActiveModel {
                    id: Unchanged(next.id),
                    student_id: Unchanged(next.student_id),
                    attendance_date: Unchanged(next.attendance_date),
                    check_in_at: Set(next.check_in_at),
                    check_in_lat: Set(next.check_in_lat),
                    check_in_long: Set(next.check_in_long),
                    check_out_at: Set(next.check_out_at),
                    check_out_lat: Set(next.check_out_lat),
                    check_out_long: Set(next.check_out_long),
                }
                .update(&txn)
                .await?
            }
            Plan::Insert { .. } => {
                return Err(DbErr::RecordNotFound("Attendance upsert vanished".into()).into());
            }
        };

        txn.commit().await?;

        tracing::info!(
            student_id,
            action = ?action,
            record_id = stored.id,
            "Attendance recorded"
        );
        Ok(stored)
    }

    /// Inserts the day's row, or overwrites the check-in of an existing one.
    async fn upsert_check_in<C: ConnectionTrait>(
        db: &C,
        student_id: i64,
        day: NaiveDate,
        now: DateTime<Utc>,
        location: Location,
    ) -> Result<(), DbErr> {
        let active = ActiveModel {
            student_id: Set(student_id),
            attendance_date: Set(day),
            check_in_at: Set(Some(now)),
            check_in_lat: Set(Some(location.latitude)),
            check_in_long: Set(Some(location.longitude)),
            check_out_at: Set(None),
            check_out_lat: Set(None),
            check_out_long: Set(None),
            ..Default::default()
        };

        Entity::insert(active)
            .on_conflict(
                OnConflict::columns([Column::StudentId, Column::AttendanceDate])
                    .update_columns([Column::CheckInAt, Column::CheckInLat, Column::CheckInLong])
                    .to_owned(),
            )
            .exec_without_returning(db)
            .await?;
        Ok(())
    }

    /// Stamps the check-out on the day's row. `false` when there is no row.
    async fn stamp_check_out<C: ConnectionTrait>(
        db: &C,
        student_id: i64,
        day: NaiveDate,
        now: DateTime<Utc>,
        location: Location,
    ) -> Result<bool, DbErr> {
        let res = Entity::update_many()
            .col_expr(Column::CheckOutAt, Expr::value(now))
            .col_expr(Column::CheckOutLat, Expr::value(location.latitude))
            .col_expr(Column::CheckOutLong, Expr::value(location.longitude))
            .filter(Column::StudentId.eq(student_id))
            .filter(Column::AttendanceDate.eq(day))
            .exec(db)
            .await?;
        Ok(res.rows_affected > 0)
    }

    pub async fn find_for_day<C: ConnectionTrait>(
        db: &C,
        student_id: i64,
        day: NaiveDate,
    ) -> Result<Option<Model>, DbErr> {
        Entity::find()
            .filter(Column::StudentId.eq(student_id))
            .filter(Column::AttendanceDate.eq(day))
            .one(db)
            .await
    }

    /// Records between `from` and `to` inclusive, newest day first.
    pub async fn find_range<C: ConnectionTrait>(
        db: &C,
        student_id: i64,
        from: NaiveDate,
        to: NaiveDate,
    ) -> Result<Vec<Model>, DbErr> {
        Entity::find()
            .filter(Column::StudentId.eq(student_id))
            .filter(Column::AttendanceDate.gte(from))
            .filter(Column::AttendanceDate.lte(to))
            .order_by_desc(Column::AttendanceDate)
            .all(db)
            .await
    }

    /// The last `limit` records by check-in time.
    pub async fn recent<C: ConnectionTrait>(
        db: &C,
        student_id: i64,
        limit: u64,
    ) -> Result<Vec<Model>, DbErr> {
        Entity::find()
            .filter(Column::StudentId.eq(student_id))
            .order_by_desc(Column::CheckInAt)
            .order_by_desc(Column::Id)
            .limit(limit)
            .all(db)
            .await
    }

    /// Like [`Model::recent`], restricted to days strictly before `day`.
    pub async fn recent_before<C: ConnectionTrait>(
        db: &C,
        student_id: i64,
        day: NaiveDate,
        limit: u64,
    ) -> Result<Vec<Model>, DbErr> {
        Entity::find()
            .filter(Column::StudentId.eq(student_id))
            .filter(Column::AttendanceDate.lt(day))
            .order_by_desc(Column::CheckInAt)
            .order_by_desc(Column::Id)
            .limit(limit)
            .all(db)
            .await
    }

    /// Each student's record with the latest check-in.
    pub async fn latest_per_student<C: ConnectionTrait>(
        db: &C,
    ) -> Result<HashMap<i64, Model>, DbErr> {
        let rows = Entity::find()
            .order_by_desc(Column::CheckInAt)
            .order_by_desc(Column::Id)
            .all(db)
            .await?;

        let mut latest = HashMap::new();
        for row in rows {
            latest.entry(row.student_id).or_insert(row);
        }
        Ok(latest)
    }
}
