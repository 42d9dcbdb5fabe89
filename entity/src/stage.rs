use sea_orm::entity::prelude::*;

/// Rule deciding when a stage becomes playable for a student.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(16))")]
pub enum UnlockRule {
    /// Unlocked once the previous stage (by sort order) is cleared.
    #[sea_orm(string_value = "sequential")]
    Sequential,
    /// Unlocked once the student reaches `min_level`.
    #[sea_orm(string_value = "min_level")]
    MinLevel,
    /// Unlocked once the stage referenced by `dependency_stage_id` is cleared.
    #[sea_orm(string_value = "dependency")]
    Dependency,
}

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "stage")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub class_id: i32,
    pub name: String,
    pub sort_order: i32,
    pub unlock_rule: UnlockRule,
    pub min_level: i32,
    pub dependency_stage_id: Option<i32>,
    pub pass_threshold: i16,
    pub question_count: i16,
    pub reward_gold: i32,
    pub reward_exp: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::class::Entity",
        from = "Column::ClassId",
        to = "super::class::Column::Id"
    )]
    Class,
}

impl Related<super::class::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Class.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
