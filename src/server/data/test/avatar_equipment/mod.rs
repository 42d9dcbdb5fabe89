use crate::server::data::avatar_equipment::AvatarEquipmentRepository;
use entity::avatar_part::AvatarSlot;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod equip;
