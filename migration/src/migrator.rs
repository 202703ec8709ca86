use sea_orm_migration::prelude::*;

use crate::migrations;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(migrations::m202410010001_create_students::Migration),
            Box::new(migrations::m202410010002_create_employers::Migration),
            Box::new(migrations::m202410010003_create_supervisors::Migration),
            Box::new(migrations::m202410010004_create_attendance::Migration),
            Box::new(migrations::m202410010005_create_otps::Migration),
            Box::new(migrations::m202410010006_create_authorized_devices::Migration),
            Box::new(migrations::m202410010007_create_moods::Migration),
        ]
    }
}
