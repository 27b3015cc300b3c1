// src/infrastructure/repositories/mod.rs
mod error;
mod listing;
mod sqlite_page;
mod sqlite_post;
mod sqlite_site_setup;
mod sqlite_slug_index;
mod sqlite_taxonomy;

pub use sqlite_page::SqlitePageRepository;
pub use sqlite_post::SqlitePostRepository;
pub use sqlite_site_setup::SqliteSiteSetupRepository;
pub use sqlite_slug_index::SqliteSlugIndex;
pub use sqlite_taxonomy::{SqliteCategoryRepository, SqliteTagRepository};

use crate::application::services::Repositories;
use sqlx::SqlitePool;
use std::sync::Arc;

/// Every repository backed by one SQLite pool.
pub fn sqlite_repositories(pool: &SqlitePool) -> Repositories {
    Repositories {
        tags: Arc::new(SqliteTagRepository::new(pool.clone())),
        categories: Arc::new(SqliteCategoryRepository::new(pool.clone())),
        pages: Arc::new(SqlitePageRepository::new(pool.clone())),
        posts: Arc::new(SqlitePostRepository::new(pool.clone())),
        slug_index: Arc::new(SqliteSlugIndex::new(pool.clone())),
        site_setups: Arc::new(SqliteSiteSetupRepository::new(pool.clone())),
    }
}
