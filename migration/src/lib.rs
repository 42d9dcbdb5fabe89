pub use sea_orm_migration::prelude::*;

mod m20260801_000001_create_user_table;
mod m20260801_000002_create_class_table;
mod m20260801_000003_create_class_student_table;
mod m20260801_000004_create_subject_table;
mod m20260801_000005_create_unit_table;
mod m20260801_000006_create_question_table;
mod m20260801_000007_create_stage_table;
mod m20260801_000008_create_stage_unit_table;
mod m20260801_000009_create_stage_progress_table;
mod m20260801_000010_create_question_attempt_table;
mod m20260801_000011_create_item_table;
mod m20260801_000012_create_player_item_table;
mod m20260801_000013_create_avatar_part_table;
mod m20260801_000014_create_avatar_equipment_table;
mod m20260801_000015_create_game_map_table;
mod m20260801_000016_create_map_object_table;
mod m20260801_000017_create_announcement_table;
mod m20260801_000018_create_daily_task_table;
mod m20260801_000019_create_daily_task_progress_table;
mod m20260801_000020_create_avatar_ownership_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260801_000001_create_user_table::Migration),
            Box::new(m20260801_000002_create_class_table::Migration),
            Box::new(m20260801_000003_create_class_student_table::Migration),
            Box::new(m20260801_000004_create_subject_table::Migration),
            Box::new(m20260801_000005_create_unit_table::Migration),
            Box::new(m20260801_000006_create_question_table::Migration),
            Box::new(m20260801_000007_create_stage_table::Migration),
            Box::new(m20260801_000008_create_stage_unit_table::Migration),
            Box::new(m20260801_000009_create_stage_progress_table::Migration),
            Box::new(m20260801_000010_create_question_attempt_table::Migration),
            Box::new(m20260801_000011_create_item_table::Migration),
            Box::new(m20260801_000012_create_player_item_table::Migration),
            Box::new(m20260801_000013_create_avatar_part_table::Migration),
            Box::new(m20260801_000014_create_avatar_equipment_table::Migration),
            Box::new(m20260801_000015_create_game_map_table::Migration),
            Box::new(m20260801_000016_create_map_object_table::Migration),
            Box::new(m20260801_000017_create_announcement_table::Migration),
            Box::new(m20260801_000018_create_daily_task_table::Migration),
            Box::new(m20260801_000019_create_daily_task_progress_table::Migration),
            Box::new(m20260801_000020_create_avatar_ownership_table::Migration),
        ]
    }
}
