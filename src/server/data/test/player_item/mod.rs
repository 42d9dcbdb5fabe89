use crate::server::data::player_item::PlayerItemRepository;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod add_item;
mod get_inventory;
