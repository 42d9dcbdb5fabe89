use sea_orm::entity::prelude::*;

/// What a student must do to complete the task for the day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(20))")]
pub enum DailyTaskKind {
    #[sea_orm(string_value = "answer_questions")]
    AnswerQuestions,
    #[sea_orm(string_value = "clear_stage")]
    ClearStage,
    #[sea_orm(string_value = "login")]
    Login,
}

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "daily_task")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub kind: DailyTaskKind,
    pub target: i32,
    pub reward_gold: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
