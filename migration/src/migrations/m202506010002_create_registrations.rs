use sea_orm_migration::prelude::*;

pub struct Migration;

impl MigrationName for Migration {
    fn name(&self) -> &str {
        "m202506010002_create_registrations"
    }
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Alias::new("registrations"))
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Alias::new("id"))
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Alias::new("email")).text().not_null())
                    .col(ColumnDef::new(Alias::new("first_name")).text().not_null())
                    .col(ColumnDef::new(Alias::new("last_name")).text().not_null())
                    .col(
                        ColumnDef::new(Alias::new("contact_number"))
                            .text()
                            .not_null(),
                    )
                    .col(ColumnDef::new(Alias::new("additional_info")).text())
                    .col(
                        ColumnDef::new(Alias::new("marathon_id"))
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Alias::new("marathon_title"))
                            .text()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Alias::new("marathon_start_date"))
                            .timestamp()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Alias::new("created_at"))
                            .timestamp()
                            .not_null()
                            .default(Expr::cust("CURRENT_TIMESTAMP")),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(Alias::new("registrations"), Alias::new("marathon_id"))
                            .to(Alias::new("marathons"), Alias::new("id"))
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // One registration per (email, marathon) pair. The submit workflow
        // relies on this index to win races between concurrent submissions.
        manager
            .create_index(
                Index::create()
                    .name("uq_registrations_email_marathon")
                    .table(Alias::new("registrations"))
                    .col(Alias::new("email"))
                    .col(Alias::new("marathon_id"))
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Alias::new("registrations")).to_owned())
            .await
    }
}
