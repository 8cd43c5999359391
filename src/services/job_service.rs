use sqlx::PgPool;

use crate::db;
use crate::errors::AppError;
use crate::models::{CreateJob, Job, UpdateJob};

fn validate(title: &str, description: &str, experience: i32) -> Result<(), AppError> {
    if title.trim().is_empty() {
        return Err(AppError::Validation("Job title cannot be empty".into()));
    }
    if description.trim().is_empty() {
        return Err(AppError::Validation(
            "Job description cannot be empty".into(),
        ));
    }
    if experience < 0 {
        return Err(AppError::Validation("Experience must be >= 0".into()));
    }
    Ok(())
}

pub async fn create(pool: &PgPool, input: CreateJob) -> Result<Job, AppError> {
    validate(&input.title, &input.description, input.experience)?;
    let job = db::job_queries::insert(pool, &input).await?;
    Ok(job)
}

pub async fn fetch_all(pool: &PgPool) -> Result<Vec<Job>, AppError> {
    let jobs = db::job_queries::fetch_all(pool).await?;
    Ok(jobs)
}

// A generic update always clears the applied flag, even on a job that was
// already applied to.
pub async fn update(pool: &PgPool, id: i32, input: UpdateJob) -> Result<Job, AppError> {
    validate(&input.title, &input.description, input.experience)?;
    let job = db::job_queries::update_fields(pool, id, &input, false)
        .await?
        .ok_or(AppError::NotFound)?;
    Ok(job)
}

pub async fn apply(pool: &PgPool, id: i32, input: UpdateJob) -> Result<Job, AppError> {
    validate(&input.title, &input.description, input.experience)?;
    let job = db::job_queries::update_fields(pool, id, &input, true)
        .await?
        .ok_or(AppError::NotFound)?;
    Ok(job)
}

pub(crate) async fn delete(pool: &PgPool, id: i32) -> Result<u64, AppError> {
    match db::job_queries::delete(pool, id).await {
        Ok(0) => Err(AppError::NotFound),
        Ok(n) => Ok(n),
        Err(e) => Err(AppError::from(e)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_accepts_well_formed_input() {
        assert!(validate("Engineer", "Build things", 3).is_ok());
        assert!(validate("Engineer", "Build things", 0).is_ok());
    }

    #[test]
    fn test_validate_rejects_blank_title() {
        let err = validate("   ", "Build things", 3).unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }

    #[test]
    fn test_validate_rejects_blank_description() {
        let err = validate("Engineer", "", 3).unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }

    #[test]
    fn test_validate_rejects_negative_experience() {
        let err = validate("Engineer", "Build things", -1).unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }
}
