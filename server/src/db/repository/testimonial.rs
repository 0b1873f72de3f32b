//! Testimonial Repository

use super::{BaseRepository, RepoError, RepoResult};
use crate::db::models::{Testimonial, TestimonialCreate};
use chrono::Utc;
use surrealdb::engine::local::Db;
use surrealdb::{RecordId, Surreal};

const TABLE: &str = "testimonial";

#[derive(Clone, Debug)]
pub struct TestimonialRepository {
    base: BaseRepository,
}

impl TestimonialRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    /// Approved testimonials, newest first (public view)
    pub async fn find_approved(&self) -> RepoResult<Vec<Testimonial>> {
        let rows: Vec<Testimonial> = self
            .base
            .db()
            .query("SELECT * FROM testimonial WHERE approved = true ORDER BY created_at DESC")
            .await?
            .take(0)?;
        Ok(rows)
    }

    /// All testimonials, newest first (admin view)
    pub async fn find_all(&self) -> RepoResult<Vec<Testimonial>> {
        let rows: Vec<Testimonial> = self
            .base
            .db()
            .query("SELECT * FROM testimonial ORDER BY created_at DESC")
            .await?
            .take(0)?;
        Ok(rows)
    }

    /// Create a new (unapproved) testimonial
    pub async fn create(&self, data: TestimonialCreate) -> RepoResult<Testimonial> {
        let row = Testimonial {
            id: None,
            name: data.name,
            rating: data.rating,
            comment: data.comment,
            approved: false,
            created_at: Utc::now().timestamp_millis(),
        };

        let created: Option<Testimonial> = self.base.db().create(TABLE).content(row).await?;
        created.ok_or_else(|| RepoError::Database("Failed to create testimonial".to_string()))
    }

    /// Mark a testimonial as approved. Idempotent.
    pub async fn approve(&self, id: &str) -> RepoResult<Testimonial> {
        let thing: RecordId = id
            .parse()
            .map_err(|_| RepoError::Validation(format!("Invalid ID: {}", id)))?;

        self.base
            .db()
            .query("UPDATE $thing SET approved = true")
            .bind(("thing", thing.clone()))
            .await?;

        let row: Option<Testimonial> = self.base.db().select(thing).await?;
        row.ok_or_else(|| RepoError::NotFound(format!("Testimonial {} not found", id)))
    }

    /// Hard delete a testimonial
    pub async fn delete(&self, id: &str) -> RepoResult<bool> {
        let thing: RecordId = id
            .parse()
            .map_err(|_| RepoError::Validation(format!("Invalid ID: {}", id)))?;
        self.base
            .db()
            .query("DELETE $thing")
            .bind(("thing", thing))
            .await?;
        Ok(true)
    }
}
