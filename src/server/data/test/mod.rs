mod avatar_equipment;
mod class;
mod daily_task;
mod player_item;
mod stage_progress;
mod user;
