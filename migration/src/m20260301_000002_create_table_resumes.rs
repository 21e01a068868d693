use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Resumes::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Resumes::Id).text().not_null().primary_key())
                    .col(ColumnDef::new(Resumes::Title).text().not_null())
                    // Display label, e.g. "AI / Machine Learning"
                    .col(
                        ColumnDef::new(Resumes::Domain)
                            .text()
                            .not_null()
                            .default("General"),
                    )
                    .col(
                        ColumnDef::new(Resumes::Description)
                            .text()
                            .not_null()
                            .default(""),
                    )
                    .col(
                        ColumnDef::new(Resumes::SourceType)
                            .text()
                            .not_null()
                            .default("pdf"),
                    )
                    .col(ColumnDef::new(Resumes::FileUrl).text().not_null())
                    .col(ColumnDef::new(Resumes::FileName).text().not_null())
                    // Epoch milliseconds, stamped by the writer
                    .col(ColumnDef::new(Resumes::UpdatedAt).big_integer().not_null())
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_resumes_updated_at")
                    .table(Resumes::Table)
                    .col(Resumes::UpdatedAt)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .if_exists()
                    .name("idx_resumes_updated_at")
                    .table(Resumes::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Resumes::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Resumes {
    Table,
    Id,
    Title,
    Domain,
    Description,
    SourceType,
    FileUrl,
    FileName,
    UpdatedAt,
}
