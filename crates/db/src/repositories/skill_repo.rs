//! Repository for the `skills` table and the user association.

use skillswap_core::pagination::{clamp_limit, clamp_skip};
use skillswap_core::types::DbId;
use sqlx::PgPool;

use crate::models::skill::{CreateSkill, Skill, SkillListFilter, UpdateSkill};

/// SELECT list reused by every query below.
const COLUMNS: &str =
    "id, title, description, category, level, can_teach, want_learn, created_at, updated_at";

/// CRUD, filtered listing and match lookup for skills.
pub struct SkillRepo;

impl SkillRepo {
    /// Insert a new skill and associate it with its creator.
    ///
    /// Runs in a transaction: the skill row and the association either both
    /// land or neither does.
    pub async fn create_for_user(
        pool: &PgPool,
        user_id: DbId,
        input: &CreateSkill,
    ) -> Result<Skill, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let query = format!(
            "INSERT INTO skills (title, description, category, level, can_teach, want_learn)
             VALUES ($1, $2, $3, $4, $5, $6)
             RETURNING {COLUMNS}"
        );
        let skill = sqlx::query_as::<_, Skill>(&query)
            .bind(&input.title)
            .bind(&input.description)
            .bind(&input.category)
            .bind(&input.level)
            .bind(input.can_teach)
            .bind(input.want_learn)
            .fetch_one(&mut *tx)
            .await?;

        sqlx::query("INSERT INTO skill_user_association (user_id, skill_id) VALUES ($1, $2)")
            .bind(user_id)
            .bind(skill.id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(skill)
    }

    /// Look up a skill by id.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Skill>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM skills WHERE id = $1");
        sqlx::query_as::<_, Skill>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List skills matching the filter, most recently created first.
    pub async fn list(pool: &PgPool, filter: &SkillListFilter) -> Result<Vec<Skill>, sqlx::Error> {
        let limit = clamp_limit(filter.limit);
        let skip = clamp_skip(filter.skip);

        // Assemble the WHERE clause from whichever filters are set.
        let mut conditions = Vec::new();
        let mut bind_idx = 1u32;

        if filter.category.is_some() {
            conditions.push(format!("category = ${bind_idx}"));
            bind_idx += 1;
        }
        if filter.level.is_some() {
            conditions.push(format!("level = ${bind_idx}"));
            bind_idx += 1;
        }
        if filter.can_teach.is_some() {
            conditions.push(format!("can_teach = ${bind_idx}"));
            bind_idx += 1;
        }
        if filter.want_learn.is_some() {
            conditions.push(format!("want_learn = ${bind_idx}"));
            bind_idx += 1;
        }
        if filter.search.is_some() {
            conditions.push(format!(
                "(title ILIKE ${bind_idx} OR description ILIKE ${bind_idx})"
            ));
            bind_idx += 1;
        }

        let where_clause = if conditions.is_empty() {
            String::new()
        } else {
            format!("WHERE {}", conditions.join(" AND "))
        };

        let query = format!(
            "SELECT {COLUMNS} FROM skills \
             {where_clause} \
             ORDER BY created_at DESC, id DESC \
             LIMIT ${bind_idx} OFFSET ${next_idx}",
            next_idx = bind_idx + 1,
        );

        let mut q = sqlx::query_as::<_, Skill>(&query);

        // Binds must follow the order the clauses were pushed.
        if let Some(ref category) = filter.category {
            q = q.bind(category);
        }
        if let Some(ref level) = filter.level {
            q = q.bind(level);
        }
        if let Some(can_teach) = filter.can_teach {
            q = q.bind(can_teach);
        }
        if let Some(want_learn) = filter.want_learn {
            q = q.bind(want_learn);
        }
        if let Some(ref search) = filter.search {
            q = q.bind(format!("%{search}%"));
        }

        q = q.bind(limit).bind(skip);
        q.fetch_all(pool).await
    }

    /// Apply the non-`None` fields of `input` to a skill.
    ///
    /// `None` when no row with that id exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateSkill,
    ) -> Result<Option<Skill>, sqlx::Error> {
        let query = format!(
            "UPDATE skills SET
                title = COALESCE($2, title),
                description = COALESCE($3, description),
                category = COALESCE($4, category),
                level = COALESCE($5, level),
                can_teach = COALESCE($6, can_teach),
                want_learn = COALESCE($7, want_learn)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Skill>(&query)
            .bind(id)
            .bind(&input.title)
            .bind(&input.description)
            .bind(&input.category)
            .bind(&input.level)
            .bind(input.can_teach)
            .bind(input.want_learn)
            .fetch_optional(pool)
            .await
    }

    /// Delete a skill. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM skills WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Fetch the match candidates for a skill: same title (case-insensitive),
    /// same category, different row. Served by the `(LOWER(title), category)`
    /// index.
    pub async fn find_match_candidates(
        pool: &PgPool,
        title: &str,
        category: &str,
        exclude_id: DbId,
    ) -> Result<Vec<Skill>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM skills
             WHERE LOWER(title) = LOWER($1) AND category = $2 AND id <> $3
             ORDER BY id"
        );
        sqlx::query_as::<_, Skill>(&query)
            .bind(title)
            .bind(category)
            .bind(exclude_id)
            .fetch_all(pool)
            .await
    }
}
