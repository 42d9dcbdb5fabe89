use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20260801_000001_create_user_table::User, m20260801_000002_create_class_table::Class,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ClassStudent::Table)
                    .if_not_exists()
                    .col(integer(ClassStudent::ClassId))
                    .col(integer(ClassStudent::StudentId))
                    .col(
                        timestamp(ClassStudent::JoinedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .primary_key(
                        Index::create()
                            .col(ClassStudent::ClassId)
                            .col(ClassStudent::StudentId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_class_student_class_id")
                            .from(ClassStudent::Table, ClassStudent::ClassId)
                            .to(Class::Table, Class::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_class_student_student_id")
                            .from(ClassStudent::Table, ClassStudent::StudentId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(ClassStudent::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum ClassStudent {
    Table,
    ClassId,
    StudentId,
    JoinedAt,
}
