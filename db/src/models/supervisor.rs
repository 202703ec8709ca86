use sea_orm::ActiveValue::Set;
use sea_orm::QueryOrder;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "supervisor")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub student_id: Option<i64>,
    pub first_name: String,
    pub last_name: String,
    #[sea_orm(unique)]
    pub email_address: String,
    pub contact_number: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct SupervisorFields {
    pub student_id: Option<i64>,
    pub first_name: String,
    pub last_name: String,
    pub email_address: String,
    pub contact_number: String,
}

impl SupervisorFields {
    fn apply(self, active: &mut ActiveModel) {
        active.student_id = Set(self.student_id);
        active.first_name = Set(self.first_name);
        active.last_name = Set(self.last_name);
        active.email_address = Set(self.email_address);
        active.contact_number = Set(self.contact_number);
    }
}

impl Model {
    pub async fn create<C: ConnectionTrait>(
        db: &C,
        fields: SupervisorFields,
    ) -> Result<Model, DbErr> {
        let mut active = <ActiveModel as Default>::default();
        fields.apply(&mut active);
        active.insert(db).await
    }

    pub async fn get_by_id<C: ConnectionTrait>(db: &C, id: i64) -> Result<Option<Model>, DbErr> {
        Entity::find_by_id(id).one(db).await
    }

    pub async fn list<C: ConnectionTrait>(db: &C) -> Result<Vec<Model>, DbErr> {
        Entity::find().order_by_asc(Column::Id).all(db).await
    }

    /// Whether `email` belongs to a supervisor other than `except_id`.
    pub async fn email_taken<C: ConnectionTrait>(
        db: &C,
        email: &str,
        except_id: Option<i64>,
    ) -> Result<bool, DbErr> {
        let mut query = Entity::find().filter(Column::EmailAddress.eq(email));
        if let Some(id) = except_id {
            query = query.filter(Column::Id.ne(id));
        }
        Ok(query.one(db).await?.is_some())
    }

    pub async fn update<C: ConnectionTrait>(
        db: &C,
        id: i64,
        fields: SupervisorFields,
    ) -> Result<Option<Model>, DbErr> {
        let Some(existing) = Entity::find_by_id(id).one(db).await? else {
            return Ok(None);
        };
        let mut active: ActiveModel = existing.into();
        fields.apply(&mut active);
        active.update(db).await.map(Some)
    }

    pub async fn delete<C: ConnectionTrait>(db: &C, id: i64) -> Result<bool, DbErr> {
        let res = Entity::delete_by_id(id).exec(db).await?;
        Ok(res.rows_affected > 0)
    }
}
