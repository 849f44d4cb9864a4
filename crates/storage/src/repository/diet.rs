use sqlx::SqlitePool;

use crate::dto::diet::DietRequest;
use crate::error::{Result, StorageError};
use crate::models::Diet;

pub struct DietRepository<'a> {
    pool: &'a SqlitePool,
}

impl<'a> DietRepository<'a> {
    pub fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    /// List diet entries in insertion order, optionally only those on `date`
    pub async fn list(&self, date: Option<&str>) -> Result<Vec<Diet>> {
        let diets = sqlx::query_as::<_, Diet>(
            r#"
            SELECT id, name, calories, date, protein, carbs, fats
            FROM diets
            WHERE ?1 IS NULL OR date = ?1
            ORDER BY id
            "#,
        )
        .bind(date)
        .fetch_all(self.pool)
        .await?;

        Ok(diets)
    }

    /// Find diet entry by ID
    pub async fn find_by_id(&self, id: i64) -> Result<Diet> {
        let diet = sqlx::query_as::<_, Diet>(
            r#"
            SELECT id, name, calories, date, protein, carbs, fats
            FROM diets
            WHERE id = ?1
            "#,
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await?
        .ok_or(StorageError::NotFound)?;

        Ok(diet)
    }

    /// Log a new diet entry
    pub async fn create(&self, req: &DietRequest) -> Result<Diet> {
        let diet = sqlx::query_as::<_, Diet>(
            r#"
            INSERT INTO diets (name, calories, date, protein, carbs, fats)
            VALUES (?1, ?2, ?3, ?4, ?5, ?6)
            RETURNING id, name, calories, date, protein, carbs, fats
            "#,
        )
        .bind(&req.name)
        .bind(req.calories)
        .bind(&req.date)
        .bind(req.protein)
        .bind(req.carbs)
        .bind(req.fats)
        .fetch_one(self.pool)
        .await?;

        Ok(diet)
    }

    /// Overwrite every column of an existing entry
    pub async fn replace(&self, id: i64, req: &DietRequest) -> Result<Diet> {
        let diet = sqlx::query_as::<_, Diet>(
            r#"
            UPDATE diets
            SET name = ?2,
                calories = ?3,
                date = ?4,
                protein = ?5,
                carbs = ?6,
                fats = ?7
            WHERE id = ?1
            RETURNING id, name, calories, date, protein, carbs, fats
            "#,
        )
        .bind(id)
        .bind(&req.name)
        .bind(req.calories)
        .bind(&req.date)
        .bind(req.protein)
        .bind(req.carbs)
        .bind(req.fats)
        .fetch_optional(self.pool)
        .await?
        .ok_or(StorageError::NotFound)?;

        Ok(diet)
    }

    /// Delete a diet entry by ID
    pub async fn delete(&self, id: i64) -> Result<()> {
        let result = sqlx::query("DELETE FROM diets WHERE id = ?1")
            .bind(id)
            .execute(self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(StorageError::NotFound);
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Database;

    fn diet(name: &str, date: &str, protein: Option<f64>) -> DietRequest {
        DietRequest {
            name: name.to_string(),
            calories: 250,
            date: date.to_string(),
            protein,
            carbs: Some(30.0),
            fats: None,
        }
    }

    #[tokio::test]
    async fn test_create_and_find_round_trip() {
        let db = Database::in_memory().await.unwrap();
        let repo = DietRepository::new(db.pool());

        let created = repo.create(&diet("Chicken", "2024-01-01", Some(20.5))).await.unwrap();
        let found = repo.find_by_id(created.id).await.unwrap();

        assert_eq!(found, created);
        assert_eq!(found.protein, Some(20.5));
        assert_eq!(found.fats, None);
    }

    #[tokio::test]
    async fn test_list_filters_by_exact_date() {
        let db = Database::in_memory().await.unwrap();
        let repo = DietRepository::new(db.pool());
        repo.create(&diet("Oats", "2024-01-01", None)).await.unwrap();
        repo.create(&diet("Rice", "2024-01-02", None)).await.unwrap();

        let listed = repo.list(Some("2024-01-02")).await.unwrap();
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].name, "Rice");
        assert_eq!(repo.list(None).await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_replace_clears_omitted_macros() {
        let db = Database::in_memory().await.unwrap();
        let repo = DietRepository::new(db.pool());
        let created = repo.create(&diet("Chicken", "2024-01-01", Some(20.5))).await.unwrap();

        let mut replacement = diet("Turkey", "2024-01-03", None);
        replacement.carbs = None;
        let replaced = repo.replace(created.id, &replacement).await.unwrap();

        assert_eq!(replaced.id, created.id);
        assert_eq!(replaced.name, "Turkey");
        assert_eq!(replaced.date, "2024-01-03");
        assert_eq!(replaced.protein, None);
        assert_eq!(replaced.carbs, None);
    }

    #[tokio::test]
    async fn test_missing_entries_are_not_found() {
        let db = Database::in_memory().await.unwrap();
        let repo = DietRepository::new(db.pool());

        assert!(matches!(repo.find_by_id(42).await, Err(StorageError::NotFound)));
        assert!(matches!(
            repo.replace(42, &diet("Rice", "2024-01-01", None)).await,
            Err(StorageError::NotFound)
        ));
        assert!(matches!(repo.delete(42).await, Err(StorageError::NotFound)));
    }

    #[tokio::test]
    async fn test_deleted_ids_are_not_reused() {
        let db = Database::in_memory().await.unwrap();
        let repo = DietRepository::new(db.pool());

        let first = repo.create(&diet("Oats", "2024-01-01", None)).await.unwrap();
        repo.delete(first.id).await.unwrap();
        assert!(matches!(repo.delete(first.id).await, Err(StorageError::NotFound)));

        let second = repo.create(&diet("Rice", "2024-01-01", None)).await.unwrap();
        assert!(second.id > first.id);
    }
}
