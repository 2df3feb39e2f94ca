use sea_orm_migration::prelude::*;

pub struct Migration;

impl MigrationName for Migration {
    fn name(&self) -> &str {
        "m202510010003_create_submissions"
    }
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Alias::new("submissions"))
                    .if_not_exists()
                    // "{assignment_id}_{user_id}"
                    .col(
                        ColumnDef::new(Alias::new("id"))
                            .string()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Alias::new("assignment_id")).integer().not_null())
                    .col(ColumnDef::new(Alias::new("user_id")).integer().not_null())
                    .col(ColumnDef::new(Alias::new("student_name")).string().not_null())
                    .col(ColumnDef::new(Alias::new("student_email")).string().not_null())
                    .col(ColumnDef::new(Alias::new("batch_id")).string().null())
                    .col(ColumnDef::new(Alias::new("batch_name")).string().null())
                    .col(ColumnDef::new(Alias::new("assignment_title")).string().not_null())
                    .col(
                        ColumnDef::new(Alias::new("assignment_description"))
                            .text()
                            .not_null(),
                    )
                    .col(ColumnDef::new(Alias::new("language")).string().not_null())
                    .col(ColumnDef::new(Alias::new("code")).json().not_null())
                    .col(ColumnDef::new(Alias::new("submitted_at")).timestamp().not_null())
                    .col(
                        ColumnDef::new(Alias::new("status"))
                            .string()
                            .not_null()
                            .default("submitted"),
                    )
                    .col(ColumnDef::new(Alias::new("rating")).integer().null())
                    .col(ColumnDef::new(Alias::new("feedback")).text().null())
                    .col(ColumnDef::new(Alias::new("reviewed_at")).timestamp().null())
                    .col(ColumnDef::new(Alias::new("reviewed_by")).integer().null())
                    .col(
                        ColumnDef::new(Alias::new("version"))
                            .integer()
                            .not_null()
                            .default(1),
                    )
                    .col(
                        ColumnDef::new(Alias::new("is_latest"))
                            .boolean()
                            .not_null()
                            .default(true),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(Alias::new("submissions"), Alias::new("assignment_id"))
                            .to(Alias::new("assignments"), Alias::new("id"))
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(Alias::new("submissions"), Alias::new("user_id"))
                            .to(Alias::new("users"), Alias::new("id"))
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        for (name, column) in [
            ("idx_submissions_assignment_id", "assignment_id"),
            ("idx_submissions_user_id", "user_id"),
            ("idx_submissions_batch_id", "batch_id"),
        ] {
            manager
                .create_index(
                    Index::create()
                        .if_not_exists()
                        .name(name)
                        .table(Alias::new("submissions"))
                        .col(Alias::new(column))
                        .to_owned(),
                )
                .await?;
        }

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Alias::new("submissions")).to_owned())
            .await
    }
}
