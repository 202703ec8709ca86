use chrono::{DateTime, Utc};
use sea_orm::ActiveValue::Set;
use sea_orm::entity::prelude::*;
use sea_orm::{QueryOrder, QuerySelect};
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "mood")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub student_id: i64,
    /// Server time at which the entry was logged.
    pub recorded_at: DateTime<Utc>,
    pub emotion: String,
    /// Daily check-in mood, as opposed to an ad hoc entry.
    pub is_daily: bool,
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
        emotion: &str,
        is_daily: bool,
        recorded_at: DateTime<Utc>,
    ) -> Result<Model, DbErr> {
        ActiveModel {
            student_id: Set(student_id),
            recorded_at: Set(recorded_at),
            emotion: Set(emotion.to_owned()),
            is_daily: Set(is_daily),
            ..Default::default()
        }
        .insert(db)
        .await
    }

    pub async fn get_by_id<C: ConnectionTrait>(db: &C, id: i64) -> Result<Option<Model>, DbErr> {
        Entity::find_by_id(id).one(db).await
    }

    /// Newest first, optionally narrowed to one student.
    pub async fn list<C: ConnectionTrait>(
        db: &C,
        student_id: Option<i64>,
    ) -> Result<Vec<Model>, DbErr> {
        let mut query = Entity::find();
        if let Some(id) = student_id {
            query = query.filter(Column::StudentId.eq(id));
        }
        query
            .order_by_desc(Column::RecordedAt)
            .order_by_desc(Column::Id)
            .all(db)
            .await
    }

    /// The last `limit` daily moods for a student, newest first.
    pub async fn recent_daily<C: ConnectionTrait>(
        db: &C,
        student_id: i64,
        limit: u64,
    ) -> Result<Vec<Model>, DbErr> {
        Entity::find()
            .filter(Column::StudentId.eq(student_id))
            .filter(Column::IsDaily.eq(true))
            .order_by_desc(Column::RecordedAt)
            .order_by_desc(Column::Id)
            .limit(limit)
            .all(db)
            .await
    }

    /// Replaces the student, emotion and daily flag; `recorded_at` is kept.
    pub async fn update<C: ConnectionTrait>(
        db: &C,
        id: i64,
        student_id: i64,
        emotion: &str,
        is_daily: bool,
    ) -> Result<Option<Model>, DbErr> {
        let Some(existing) = Entity::find_by_id(id).one(db).await? else {
            return Ok(None);
        };
        let mut active: ActiveModel = existing.into();
        active.student_id = Set(student_id);
        active.emotion = Set(emotion.to_owned());
        active.is_daily = Set(is_daily);
        active.update(db).await.map(Some)
    }

    pub async fn delete<C: ConnectionTrait>(db: &C, id: i64) -> Result<bool, DbErr> {
        let res = Entity::delete_by_id(id).exec(db).await?;
        Ok(res.rows_affected > 0)
    }
}
