use chrono::{DateTime, Utc};
use rand::RngCore;
use rand::rngs::OsRng;
use sea_orm::ActiveValue::Set;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Bytes of entropy behind each device secret (hex encoded on the wire).
const SECRET_BYTES: usize = 32;

/// A device paired to a student after a successful OTP validation.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "authorized_devices")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub student_id: i64,
    pub secret_code: String,
    pub created_at: DateTime<Utc>,
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
    pub async fn create<C: ConnectionTrait>(
        db: &C,
        student_id: i64,
        now: DateTime<Utc>,
    ) -> Result<Model, DbErr> {
        let mut bytes = [0u8; SECRET_BYTES];
        OsRng.fill_bytes(&mut bytes);

        ActiveModel {
            student_id: Set(student_id),
            secret_code: Set(hex::encode(bytes)),
            created_at: Set(now),
            ..Default::default()
        }
        .insert(db)
        .await
    }

    /// Whether `secret_code` was issued to `student_id`.
    pub async fn verify<C: ConnectionTrait>(
        db: &C,
        student_id: i64,
        secret_code: &str,
    ) -> Result<bool, DbErr> {
        if secret_code.is_empty() {
            return Ok(false);
        }
        let found = Entity::find()
            .filter(Column::StudentId.eq(student_id))
            .filter(Column::SecretCode.eq(secret_code))
            .one(db)
            .await?;
        Ok(found.is_some())
    }
}
