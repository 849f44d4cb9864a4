use sqlx::SqlitePool;
use storage::{
    dto::diet::DietRequest, error::Result, models::Diet, repository::diet::DietRepository,
};

/// List diet entries, optionally restricted to one date
pub async fn list_diets(pool: &SqlitePool, date: Option<&str>) -> Result<Vec<Diet>> {
    let repo = DietRepository::new(pool);
    repo.list(date).await
}

/// Get a diet entry by ID
pub async fn get_diet(pool: &SqlitePool, id: i64) -> Result<Diet> {
    let repo = DietRepository::new(pool);
    repo.find_by_id(id).await
}

/// Log a new diet entry
pub async fn create_diet(pool: &SqlitePool, request: &DietRequest) -> Result<Diet> {
    let repo = DietRepository::new(pool);
    let diet = repo.create(request).await?;

    tracing::info!(diet_id = diet.id, date = %diet.date, "Diet entry logged");

    Ok(diet)
}

/// Replace every field of a diet entry
pub async fn replace_diet(pool: &SqlitePool, id: i64, request: &DietRequest) -> Result<Diet> {
    let repo = DietRepository::new(pool);
    let diet = repo.replace(id, request).await?;

    tracing::info!(diet_id = id, "Diet entry replaced");

    Ok(diet)
}

/// Delete a diet entry
pub async fn delete_diet(pool: &SqlitePool, id: i64) -> Result<()> {
    let repo = DietRepository::new(pool);
    repo.delete(id).await?;

    tracing::info!(diet_id = id, "Diet entry deleted");

    Ok(())
}
