use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20260801_000001_create_user_table::User, m20260801_000006_create_question_table::Question,
    m20260801_000007_create_stage_table::Stage,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(QuestionAttempt::Table)
                    .if_not_exists()
                    .col(pk_auto(QuestionAttempt::Id))
                    .col(integer(QuestionAttempt::QuestionId))
                    .col(integer(QuestionAttempt::StudentId))
                    .col(small_integer(QuestionAttempt::ChosenIndex))
                    .col(boolean(QuestionAttempt::Correct))
                    .col(integer_null(QuestionAttempt::StageId))
                    .col(
                        timestamp(QuestionAttempt::AnsweredAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_question_attempt_question_id")
                            .from(QuestionAttempt::Table, QuestionAttempt::QuestionId)
                            .to(Question::Table, Question::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_question_attempt_student_id")
                            .from(QuestionAttempt::Table, QuestionAttempt::StudentId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_question_attempt_stage_id")
                            .from(QuestionAttempt::Table, QuestionAttempt::StageId)
                            .to(Stage::Table, Stage::Id)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(QuestionAttempt::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum QuestionAttempt {
    Table,
    Id,
    QuestionId,
    StudentId,
    ChosenIndex,
    Correct,
    StageId,
    AnsweredAt,
}
