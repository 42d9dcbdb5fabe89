pub use super::announcement::Entity as Announcement;
pub use super::avatar_equipment::Entity as AvatarEquipment;
pub use super::avatar_ownership::Entity as AvatarOwnership;
pub use super::avatar_part::Entity as AvatarPart;
pub use super::class::Entity as Class;
pub use super::class_student::Entity as ClassStudent;
pub use super::daily_task::Entity as DailyTask;
pub use super::daily_task_progress::Entity as DailyTaskProgress;
pub use super::game_map::Entity as GameMap;
pub use super::item::Entity as Item;
pub use super::map_object::Entity as MapObject;
pub use super::player_item::Entity as PlayerItem;
pub use super::question::Entity as Question;
pub use super::question_attempt::Entity as QuestionAttempt;
pub use super::stage::Entity as Stage;
pub use super::stage_progress::Entity as StageProgress;
pub use super::stage_unit::Entity as StageUnit;
pub use super::subject::Entity as Subject;
pub use super::unit::Entity as Unit;
pub use super::user::Entity as User;
