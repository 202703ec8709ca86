use sea_orm_migration::prelude::*;

pub struct Migration;

impl MigrationName for Migration {
    fn name(&self) -> &str {
        "m202410010001_create_students"
    }
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Alias::new("student"))
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Alias::new("id"))
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Alias::new("first_name")).string_len(100).not_null())
                    .col(ColumnDef::new(Alias::new("last_name")).string_len(100).not_null())
                    .col(ColumnDef::new(Alias::new("dob")).date().null())
                    .col(
                        ColumnDef::new(Alias::new("gender"))
                            .string_len(10)
                            .not_null()
                            .default(""),
                    )
                    .col(
                        ColumnDef::new(Alias::new("address_line1"))
                            .string_len(255)
                            .not_null()
                            .default(""),
                    )
                    .col(
                        ColumnDef::new(Alias::new("address_line2"))
                            .string_len(255)
                            .not_null()
                            .default(""),
                    )
                    .col(
                        ColumnDef::new(Alias::new("city"))
                            .string_len(100)
                            .not_null()
                            .default(""),
                    )
                    .col(
                        ColumnDef::new(Alias::new("contact_number"))
                            .string_len(20)
                            .not_null()
                            .default(""),
                    )
                    .col(
                        ColumnDef::new(Alias::new("contact_number_guardian"))
                            .string_len(20)
                            .not_null()
                            .default(""),
                    )
                    .col(ColumnDef::new(Alias::new("supervisor_id")).big_integer().null())
                    .col(ColumnDef::new(Alias::new("employer_id")).big_integer().null())
                    .col(
                        ColumnDef::new(Alias::new("remarks"))
                            .string_len(500)
                            .not_null()
                            .default(""),
                    )
                    .col(
                        ColumnDef::new(Alias::new("home_lat"))
                            .double()
                            .not_null()
                            .default(0.0),
                    )
                    .col(
                        ColumnDef::new(Alias::new("home_long"))
                            .double()
                            .not_null()
                            .default(0.0),
                    )
                    .col(ColumnDef::new(Alias::new("check_in_time")).time().null())
                    .col(ColumnDef::new(Alias::new("check_out_time")).time().null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Alias::new("student")).to_owned())
            .await
    }
}
