use chrono::{DateTime, Duration, Utc};
use rand::Rng;
use rand::rngs::OsRng;
use sea_orm::ActiveValue::Set;
use sea_orm::entity::prelude::*;
use sea_orm::sea_query::Expr;
use sea_orm::{QueryOrder, TransactionTrait};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use thiserror::Error;

use crate::models::{authorized_device, student};

/// Redraws allowed when a fresh code clashes with another student's active code.
const MAX_DRAWS: usize = 5;

/// A short numeric one-time password. Rows are never deleted; spent or
/// superseded codes are only flagged with `is_used`.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "otps")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub student_id: i64,
    pub otp_code: String,
    pub created_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
    pub is_used: bool,
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

#[derive(Debug, Error)]
pub enum OtpError {
    #[error("Student {0} not found")]
    StudentNotFound(i64),

    #[error(transparent)]
    Db(#[from] DbErr),
}

/// Width and lifetime of generated codes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OtpPolicy {
    pub digits: u32,
    pub ttl: Duration,
}

impl Default for OtpPolicy {
    fn default() -> Self {
        Self {
            digits: 4,
            ttl: Duration::minutes(30),
        }
    }
}

impl OtpPolicy {
    pub fn from_config() -> Self {
        Self {
            digits: util::config::otp_digits().clamp(1, 9),
            ttl: Duration::minutes(util::config::otp_expiry_minutes().max(1)),
        }
    }

    /// Uniform over `0..10^digits`, zero padded.
    fn draw(&self) -> String {
        let upper = 10u32.pow(self.digits);
        let n = OsRng.gen_range(0..upper);
        format!("{:0width$}", n, width = self.digits as usize)
    }
}

/// Outcome of checking a submitted code.
#[derive(Debug, Clone, PartialEq)]
pub enum OtpValidation {
    Valid {
        student_id: i64,
        /// Present when device pairing issued a new secret.
        secret_code: Option<String>,
    },
    Invalid,
    AlreadyUsed,
    Expired,
}

impl OtpValidation {
    pub fn message(&self) -> &'static str {
        match self {
            Self::Valid { .. } => "Authentication successful",
            Self::Invalid => "Invalid OTP",
            Self::AlreadyUsed => "OTP has already been used",
            Self::Expired => "OTP has expired",
        }
    }
}

impl Model {
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        now > self.expires_at
    }

    /// Issues a new code for `student_id` using the configured [`OtpPolicy`].
    pub async fn generate(
        db: &DatabaseConnection,
        student_id: i64,
        now: DateTime<Utc>,
    ) -> Result<Model, OtpError> {
        Self::generate_with(db, student_id, now, OtpPolicy::from_config()).await
    }

    /// Supersedes every unused code of the student and inserts a fresh one, in a
    /// single transaction. Afterwards the student holds exactly one unused,
    /// unexpired code.
    pub async fn generate_with(
        db: &DatabaseConnection,
        student_id: i64,
        now: DateTime<Utc>,
        policy: OtpPolicy,
    ) -> Result<Model, OtpError> {
        let txn = db.begin().await?;

        if !student::Model::exists(&txn, student_id).await? {
            return Err(OtpError::StudentNotFound(student_id));
        }

        Entity::update_many()
            .col_expr(Column::IsUsed, Expr::value(true))
            .filter(Column::StudentId.eq(student_id))
            .filter(Column::IsUsed.eq(false))
            .exec(&txn)
            .await?;

        let mut code = policy.draw();
        for _ in 1..MAX_DRAWS {
            let clash = Entity::find()
                .filter(Column::OtpCode.eq(code.as_str()))
                .filter(Column::IsUsed.eq(false))
                .filter(Column::ExpiresAt.gt(now))
                .one(&txn)
                .await?;
            if clash.is_none() {
                break;
            }
            code = policy.draw();
        }

        let otp = ActiveModel {
            student_id: Set(student_id),
            otp_code: Set(code),
            created_at: Set(now),
            expires_at: Set(now + policy.ttl),
            is_used: Set(false),
            ..Default::default()
        }
        .insert(&txn)
        .await?;

        txn.commit().await?;

        tracing::info!(student_id, otp_id = otp.id, "OTP generated");
        Ok(otp)
    }

    /// Checks `code` and spends it on success.
    ///
    /// Codes share one global namespace: unused rows are preferred, then the
    /// newest. Expiry is checked before use so an expired code always reports
    /// [`OtpValidation::Expired`].
    pub async fn validate(
        db: &DatabaseConnection,
        code: &str,
        now: DateTime<Utc>,
        pair_device: bool,
    ) -> Result<OtpValidation, DbErr> {
        let txn = db.begin().await?;

        let Some(otp) = Entity::find()
            .filter(Column::OtpCode.eq(code))
            .order_by_asc(Column::IsUsed)
            .order_by_desc(Column::Id)
            .one(&txn)
            .await?
        else {
            return Ok(OtpValidation::Invalid);
        };

        if otp.is_expired_at(now) {
            if !otp.is_used {
                Self::claim(&txn, otp.id).await?;
                txn.commit().await?;
            }
            return Ok(OtpValidation::Expired);
        }

        if otp.is_used || !Self::claim(&txn, otp.id).await? {
            return Ok(OtpValidation::AlreadyUsed);
        }

        let secret_code = if pair_device {
            let device = authorized_device::Model::create(&txn, otp.student_id, now).await?;
            Some(device.secret_code)
        } else {
            None
        };

        txn.commit().await?;

        tracing::info!(student_id = otp.student_id, paired = pair_device, "OTP validated");
        Ok(OtpValidation::Valid {
            student_id: otp.student_id,
            secret_code,
        })
    }

    /// Flips `is_used` only if it is still unset. Returns whether this call won.
    async fn claim<C: ConnectionTrait>(db: &C, id: i64) -> Result<bool, DbErr> {
        let res = Entity::update_many()
            .col_expr(Column::IsUsed, Expr::value(true))
            .filter(Column::Id.eq(id))
            .filter(Column::IsUsed.eq(false))
            .exec(db)
            .await?;
        Ok(res.rows_affected == 1)
    }

    /// Each student's most recently issued code, used or not.
    pub async fn latest_per_student<C: ConnectionTrait>(
        db: &C,
    ) -> Result<HashMap<i64, Model>, DbErr> {
        let rows = Entity::find().order_by_desc(Column::Id).all(db).await?;

        let mut latest = HashMap::new();
        for row in rows {
            latest.entry(row.student_id).or_insert(row);
        }
        Ok(latest)
    }

    /// Unused codes of `student_id` that have not yet expired.
    pub async fn active_for_student<C: ConnectionTrait>(
        db: &C,
        student_id: i64,
        now: DateTime<Utc>,
    ) -> Result<Vec<Model>, DbErr> {
        Entity::find()
            .filter(Column::StudentId.eq(student_id))
            .filter(Column::IsUsed.eq(false))
            .filter(Column::ExpiresAt.gt(now))
            .all(db)
            .await
    }
}
