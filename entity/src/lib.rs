//! SeaORM entity models for the questboard database schema.

pub mod prelude;

pub mod announcement;
pub mod avatar_equipment;
pub mod avatar_ownership;
pub mod avatar_part;
pub mod class;
pub mod class_student;
pub mod daily_task;
pub mod daily_task_progress;
pub mod game_map;
pub mod item;
pub mod map_object;
pub mod player_item;
pub mod question;
pub mod question_attempt;
pub mod stage;
pub mod stage_progress;
pub mod stage_unit;
pub mod subject;
pub mod unit;
pub mod user;
