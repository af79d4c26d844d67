//! Repository for the `skills` table.

use sqlx::PgPool;
use workbridge_core::skills::SkillCategory;
use workbridge_core::types::DbId;

use crate::models::skill::{CreateSkill, Skill};

const COLUMNS: &str = "id, name, category, description, is_active, created_at, updated_at";

/// Provides CRUD operations for the skill catalogue.
pub struct SkillRepo;

impl SkillRepo {
    /// Insert a new skill, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateSkill) -> Result<Skill, sqlx::Error> {
        let query = format!(
            "INSERT INTO skills (name, category, description, is_active)
             VALUES ($1, $2, $3, COALESCE($4, true))
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Skill>(&query)
            .bind(&input.name)
            .bind(input.category)
            .bind(&input.description)
            .bind(input.is_active)
            .fetch_one(pool)
            .await
    }

    /// Return the skill named `name`, creating it from `defaults` if absent.
    ///
    /// The boolean is `true` when a new row was inserted.
    pub async fn create_or_get(
        pool: &PgPool,
        name: &str,
        defaults: impl FnOnce(&str) -> CreateSkill,
    ) -> Result<(Skill, bool), sqlx::Error> {
        if let Some(existing) = Self::find_by_name(pool, name).await? {
            return Ok((existing, false));
        }

        let input = defaults(name);
        let query = format!(
            "INSERT INTO skills (name, category, description, is_active)
             VALUES ($1, $2, $3, COALESCE($4, true))
             ON CONFLICT (name) DO NOTHING
             RETURNING {COLUMNS}"
        );
        let inserted = sqlx::query_as::<_, Skill>(&query)
            .bind(name)
            .bind(input.category)
            .bind(&input.description)
            .bind(input.is_active)
            .fetch_optional(pool)
            .await?;

        match inserted {
            Some(skill) => Ok((skill, true)),
            None => {
                let query = format!("SELECT {COLUMNS} FROM skills WHERE name = $1");
                let skill = sqlx::query_as::<_, Skill>(&query)
                    .bind(name)
                    .fetch_one(pool)
                    .await?;
                Ok((skill, false))
            }
        }
    }

    /// Find a skill by internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Skill>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM skills WHERE id = $1");
        sqlx::query_as::<_, Skill>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find a skill by its unique name.
    pub async fn find_by_name(pool: &PgPool, name: &str) -> Result<Option<Skill>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM skills WHERE name = $1");
        sqlx::query_as::<_, Skill>(&query)
            .bind(name)
            .fetch_optional(pool)
            .await
    }

    /// List active skills in a category, ordered by name.
    pub async fn list_by_category(
        pool: &PgPool,
        category: SkillCategory,
    ) -> Result<Vec<Skill>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM skills
             WHERE category = $1 AND is_active = true
             ORDER BY name"
        );
        sqlx::query_as::<_, Skill>(&query)
            .bind(category)
            .fetch_all(pool)
            .await
    }

    /// Count all skills.
    pub async fn count(pool: &PgPool) -> Result<i64, sqlx::Error> {
        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM skills")
            .fetch_one(pool)
            .await?;
        Ok(count)
    }
}
