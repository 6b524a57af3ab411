use sea_orm_migration::prelude::*;

pub struct Migration;

impl MigrationName for Migration {
    fn name(&self) -> &str {
        "m202505290003_create_member_categories"
    }
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Alias::new("member_categories"))
                    .if_not_exists()
                    // Surrogate id doubles as the membership order used by roster listings.
                    .col(
                        ColumnDef::new(Alias::new("id"))
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Alias::new("member_id")).big_integer().not_null())
                    .col(ColumnDef::new(Alias::new("category_id")).big_integer().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_member_cat_member")
                            .from(Alias::new("member_categories"), Alias::new("member_id"))
                            .to(Alias::new("members"), Alias::new("id"))
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_member_cat_category")
                            .from(Alias::new("member_categories"), Alias::new("category_id"))
                            .to(Alias::new("categories"), Alias::new("id"))
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("uq_member_categories_pair")
                    .table(Alias::new("member_categories"))
                    .col(Alias::new("member_id"))
                    .col(Alias::new("category_id"))
                    .unique()
                    .if_not_exists()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(
                Table::drop()
                    .table(Alias::new("member_categories"))
                    .to_owned(),
            )
            .await
    }
}
