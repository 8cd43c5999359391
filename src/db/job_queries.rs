use sqlx::PgPool;

use crate::models::{CreateJob, Job, UpdateJob};

pub async fn fetch_all(pool: &PgPool) -> Result<Vec<Job>, sqlx::Error> {
    sqlx::query_as::<_, Job>(
        "SELECT id, title, description, experience, lastdate, applied, created
         FROM jobs
         ORDER BY id",
    )
    .fetch_all(pool)
    .await
}

pub async fn insert(pool: &PgPool, input: &CreateJob) -> Result<Job, sqlx::Error> {
    sqlx::query_as::<_, Job>(
        r#"
        INSERT INTO jobs (title, description, experience, lastdate, applied, created)
        VALUES ($1, $2, $3, $4, FALSE, NOW())
        RETURNING id, title, description, experience, lastdate, applied, created
        "#,
    )
    .bind(&input.title)
    .bind(&input.description)
    .bind(input.experience)
    .bind(input.lastdate)
    .fetch_one(pool)
    .await
}

// Shared by the update and apply operations; every write replaces the four
// mutable fields and forces `applied` to the given value.
pub async fn update_fields(
    pool: &PgPool,
    id: i32,
    input: &UpdateJob,
    applied: bool,
) -> Result<Option<Job>, sqlx::Error> {
    sqlx::query_as::<_, Job>(
        r#"
        UPDATE jobs
        SET title = $1, description = $2, experience = $3, lastdate = $4, applied = $5
        WHERE id = $6
        RETURNING id, title, description, experience, lastdate, applied, created
        "#,
    )
    .bind(&input.title)
    .bind(&input.description)
    .bind(input.experience)
    .bind(input.lastdate)
    .bind(applied)
    .bind(id)
    .fetch_optional(pool)
    .await
}

pub async fn delete(pool: &PgPool, id: i32) -> Result<u64, sqlx::Error> {
    let result = sqlx::query("DELETE FROM jobs WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await?;
    Ok(result.rows_affected())
}
