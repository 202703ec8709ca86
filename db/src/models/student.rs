use chrono::{NaiveDate, NaiveTime};
use sea_orm::ActiveValue::Set;
use sea_orm::entity::prelude::*;
use sea_orm::{QueryOrder, QuerySelect};
use serde::{Deserialize, Serialize};

/// A trainee (or employee) whose attendance, moods and OTPs are tracked.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "student")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub dob: Option<NaiveDate>,
    pub gender: String,
    pub address_line1: String,
    pub address_line2: String,
    pub city: String,
    pub contact_number: String,
    pub contact_number_guardian: String,
    pub supervisor_id: Option<i64>,
    pub employer_id: Option<i64>,
    pub remarks: String,
    pub home_lat: f64,
    pub home_long: f64,
    /// Scheduled shift start.
    pub check_in_time: Option<NaiveTime>,
    /// Scheduled shift end.
    pub check_out_time: Option<NaiveTime>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::attendance::Entity")]
    Attendance,
    #[sea_orm(has_many = "super::mood::Entity")]
    Moods,
    #[sea_orm(has_many = "super::otp::Entity")]
    Otps,
    #[sea_orm(has_many = "super::authorized_device::Entity")]
    AuthorizedDevices,
}

impl Related<super::attendance::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Attendance.def()
    }
}

impl Related<super::mood::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Moods.def()
    }
}

impl Related<super::otp::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Otps.def()
    }
}

impl Related<super::authorized_device::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::AuthorizedDevices.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

/// The mutable columns of a student; `update` replaces all of them.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct StudentFields {
    pub first_name: String,
    pub last_name: String,
    pub dob: Option<NaiveDate>,
    pub gender: String,
    pub address_line1: String,
    pub address_line2: String,
    pub city: String,
    pub contact_number: String,
    pub contact_number_guardian: String,
    pub supervisor_id: Option<i64>,
    pub employer_id: Option<i64>,
    pub remarks: String,
    pub home_lat: f64,
    pub home_long: f64,
    pub check_in_time: Option<NaiveTime>,
    pub check_out_time: Option<NaiveTime>,
}

impl StudentFields {
    fn apply(self, active: &mut ActiveModel) {
        active.first_name = Set(self.first_name);
        active.last_name = Set(self.last_name);
        active.dob = Set(self.dob);
        active.gender = Set(self.gender);
        active.address_line1 = Set(self.address_line1);
        active.address_line2 = Set(self.address_line2);
        active.city = Set(self.city);
        active.contact_number = Set(self.contact_number);
        active.contact_number_guardian = Set(self.contact_number_guardian);
        active.supervisor_id = Set(self.supervisor_id);
        active.employer_id = Set(self.employer_id);
        active.remarks = Set(self.remarks);
        active.home_lat = Set(self.home_lat);
        active.home_long = Set(self.home_long);
        active.check_in_time = Set(self.check_in_time);
        active.check_out_time = Set(self.check_out_time);
    }
}

impl Model {
    pub async fn create<C: ConnectionTrait>(db: &C, fields: StudentFields) -> Result<Model, DbErr> {
        let mut active = <ActiveModel as Default>::default();
        fields.apply(&mut active);
        active.insert(db).await
    }

    pub async fn get_by_id<C: ConnectionTrait>(db: &C, id: i64) -> Result<Option<Model>, DbErr> {
        Entity::find_by_id(id).one(db).await
    }

    /// Existence check used before writing rows that reference a student.
    pub async fn exists<C: ConnectionTrait>(db: &C, id: i64) -> Result<bool, DbErr> {
        let found = Entity::find_by_id(id)
            .select_only()
            .column(Column::Id)
            .into_tuple::<i64>()
            .one(db)
            .await?;
        Ok(found.is_some())
    }

    pub async fn list<C: ConnectionTrait>(db: &C) -> Result<Vec<Model>, DbErr> {
        Entity::find().order_by_asc(Column::Id).all(db).await
    }

    /// Replaces every mutable column. Returns `None` when the student does not exist.
    pub async fn update<C: ConnectionTrait>(
        db: &C,
        id: i64,
        fields: StudentFields,
    ) -> Result<Option<Model>, DbErr> {
        let Some(existing) = Entity::find_by_id(id).one(db).await? else {
            return Ok(None);
        };
        let mut active: ActiveModel = existing.into();
        fields.apply(&mut active);
        active.update(db).await.map(Some)
    }

    /// Returns `false` when nothing was deleted.
    pub async fn delete<C: ConnectionTrait>(db: &C, id: i64) -> Result<bool, DbErr> {
        let res = Entity::delete_by_id(id).exec(db).await?;
        Ok(res.rows_affected > 0)
    }

    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}
