use sea_orm::ActiveValue::Set;
use sea_orm::QueryOrder;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "employer")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub name: String,
    /// Trainee placed with this employer, when the link is kept on this side.
    pub student_id: Option<i64>,
    pub contact_number: String,
    pub address_line1: String,
    pub address_line2: String,
    pub address_line3: String,
    pub latitude: f64,
    pub longitude: f64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct EmployerFields {
    pub name: String,
    pub student_id: Option<i64>,
    pub contact_number: String,
    pub address_line1: String,
    pub address_line2: String,
    pub address_line3: String,
    pub latitude: f64,
    pub longitude: f64,
}

impl EmployerFields {
    fn apply(self, active: &mut ActiveModel) {
        active.name = Set(self.name);
        active.student_id = Set(self.student_id);
        active.contact_number = Set(self.contact_number);
        active.address_line1 = Set(self.address_line1);
        active.address_line2 = Set(self.address_line2);
        active.address_line3 = Set(self.address_line3);
        active.latitude = Set(self.latitude);
        active.longitude = Set(self.longitude);
    }
}

impl Model {
    pub async fn create<C: ConnectionTrait>(db: &C, fields: EmployerFields) -> Result<Model, DbErr> {
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

    pub async fn update<C: ConnectionTrait>(
        db: &C,
        id: i64,
        fields: EmployerFields,
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
