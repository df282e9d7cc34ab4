//! Queries against the `users` table.

use skillswap_core::types::DbId;
use sqlx::PgPool;

use crate::models::skill::Skill;
use crate::models::user::{CreateUser, UpdateUser, User};

/// Shared SELECT list; every query returns full rows.
const COLUMNS: &str = "id, username, email, full_name, bio, avatar_url, \
                        phone, location, is_active, created_at, updated_at";

/// CRUD for user profiles.
pub struct UserRepo;

impl UserRepo {
    /// Insert a profile and return the stored row.
    pub async fn create(pool: &PgPool, input: &CreateUser) -> Result<User, sqlx::Error> {
        let query = format!(
            "INSERT INTO users (username, email, full_name, bio, avatar_url, phone, location)
             VALUES ($1, $2, $3, $4, $5, $6, $7)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, User>(&query)
            .bind(&input.username)
            .bind(&input.email)
            .bind(&input.full_name)
            .bind(&input.bio)
            .bind(&input.avatar_url)
            .bind(&input.phone)
            .bind(&input.location)
            .fetch_one(pool)
            .await
    }

    /// Look up a user by id.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<User>, sqlx::Error> {
        sqlx::query_as::<_, User>(&format!("SELECT {COLUMNS} FROM users WHERE id = $1"))
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Exact-match username lookup, backing the registration pre-check.
    pub async fn find_by_username(
        pool: &PgPool,
        username: &str,
    ) -> Result<Option<User>, sqlx::Error> {
        sqlx::query_as::<_, User>(&format!("SELECT {COLUMNS} FROM users WHERE username = $1"))
            .bind(username)
            .fetch_optional(pool)
            .await
    }

    /// Exact-match email lookup, backing the registration pre-check.
    pub async fn find_by_email(pool: &PgPool, email: &str) -> Result<Option<User>, sqlx::Error> {
        sqlx::query_as::<_, User>(&format!("SELECT {COLUMNS} FROM users WHERE email = $1"))
            .bind(email)
            .fetch_optional(pool)
            .await
    }

    /// Page through users, newest first. Ties on `created_at` break by id so
    /// pages never overlap.
    pub async fn list(pool: &PgPool, skip: i64, limit: i64) -> Result<Vec<User>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM users
             ORDER BY created_at DESC, id DESC
             LIMIT $1 OFFSET $2"
        );
        sqlx::query_as::<_, User>(&query)
            .bind(limit)
            .bind(skip)
            .fetch_all(pool)
            .await
    }

    /// Apply the non-`None` fields of `input` to a profile.
    ///
    /// `None` when no row with that id exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateUser,
    ) -> Result<Option<User>, sqlx::Error> {
        let query = format!(
            "UPDATE users SET
                full_name = COALESCE($2, full_name),
                bio = COALESCE($3, bio),
                avatar_url = COALESCE($4, avatar_url),
                phone = COALESCE($5, phone),
                location = COALESCE($6, location)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, User>(&query)
            .bind(id)
            .bind(&input.full_name)
            .bind(&input.bio)
            .bind(&input.avatar_url)
            .bind(&input.phone)
            .bind(&input.location)
            .fetch_optional(pool)
            .await
    }

    /// Skills attached to a user through the association table, newest first.
    pub async fn list_skills(pool: &PgPool, user_id: DbId) -> Result<Vec<Skill>, sqlx::Error> {
        sqlx::query_as::<_, Skill>(
            "SELECT s.id, s.title, s.description, s.category, s.level,
                    s.can_teach, s.want_learn, s.created_at, s.updated_at
             FROM skills s
             JOIN skill_user_association sua ON sua.skill_id = s.id
             WHERE sua.user_id = $1
             ORDER BY s.created_at DESC, s.id DESC",
        )
        .bind(user_id)
        .fetch_all(pool)
        .await
    }
}
