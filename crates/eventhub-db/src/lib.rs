//! # eventhub-db
//!
//! Database layer implementing repository traits with PostgreSQL via SQLx.
//!
//! ## Overview
//!
//! This crate provides PostgreSQL implementations for all repository traits
//! defined in `eventhub-core`. It handles:
//!
//! - Connection pool management (with a per-statement timeout)
//! - Schema migrations
//! - Database models with SQLx `FromRow` derives
//! - Entity ↔ Model mappers
//! - Repository implementations, including the transactional attendance ledger
//!
//! ## Usage
//!
//! ```rust,ignore
//! use eventhub_db::{create_pool, run_migrations, DatabaseConfig, PgEventRepository};
//! use eventhub_core::traits::EventRepository;
//!
//! async fn example() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = DatabaseConfig::from_env();
//!     let pool = create_pool(&config).await?;
//!     run_migrations(&pool).await?;
//!     let events = PgEventRepository::new(pool).find_all().await?;
//!     Ok(())
//! }
//! ```

pub mod mappers;
pub mod models;
pub mod pool;
pub mod repositories;

// Re-export commonly used types
pub use pool::{create_pool, create_pool_from_env, run_migrations, DatabaseConfig, PgPool};
pub use repositories::{PgAttendanceRepository, PgEventRepository, PgUserRepository};
