//! Rehearsal DB - Database abstractions
//!
//! SQLx-based storage for billing records. The billing webhook subsystem is
//! the only writer; everything here is read-only.
//!
//! # Example
//!
//! ```rust,ignore
//! use rehearsal_db::{create_pool, BillingRecordRepository, Repositories};
//!
//! let pool = create_pool("postgres://localhost/rehearsal").await?;
//! let repos = Repositories::new(pool);
//!
//! let record = repos.billing_records.find_by_user_id(&user_id).await?;
//! ```

pub mod error;
pub mod models;
pub mod pg;
pub mod pool;
pub mod repo;

pub use error::{DbError, DbResult};
pub use models::*;
pub use pg::Repositories;
pub use pool::{create_pool, create_pool_with_options, run_migrations, DbPool, PoolOptions};
pub use repo::*;
