//! Factory methods for creating test data.
//!
//! This module provides factory methods for creating test entities with sensible defaults,
//! reducing boilerplate in tests. Factories automatically handle dependencies and foreign
//! key relationships, making tests more concise and maintainable.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! #[tokio::test]
//! async fn test_example() -> Result<(), sea_orm::DbErr> {
//!     let db = /* ... */;
//!
//!     // Create with defaults
//!     let student = factory::user::create_student(&db).await?;
//!     let subject = factory::subject::create_subject(&db).await?;
//!
//!     // Create with dependencies
//!     let (teacher, class) = factory::helpers::create_class_with_teacher(&db).await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Customization
//!
//! Use the factory builders for custom values:
//!
//! ```rust,ignore
//! use test_utils::factory::user::UserFactory;
//! use entity::user::UserRole;
//!
//! let teacher = UserFactory::new(&db)
//!     .username("ms_frizzle")
//!     .role(UserRole::Teacher)
//!     .build()
//!     .await?;
//! ```
//!
//! # Available Factories
//!
//! - `user` - Create teacher and student accounts
//! - `class` - Create class entities
//! - `subject` / `unit` - Create curriculum entities
//! - `question` - Create multiple-choice questions
//! - `stage` - Create RPG stages
//! - `item` - Create shop items
//! - `avatar_part` - Create avatar catalogue parts
//! - `daily_task` - Create daily task definitions
//! - `helpers` - Convenience methods for creating entities with dependencies

pub mod avatar_part;
pub mod class;
pub mod daily_task;
pub mod helpers;
pub mod item;
pub mod question;
pub mod stage;
pub mod subject;
pub mod unit;
pub mod user;

// Re-export commonly used factory functions for concise usage
pub use avatar_part::create_part;
pub use class::create_class;
pub use daily_task::create_daily_task;
pub use item::create_item;
pub use question::create_question;
pub use stage::create_stage;
pub use subject::create_subject;
pub use unit::create_unit;
pub use user::{create_student, create_teacher};
