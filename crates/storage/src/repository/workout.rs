use sqlx::SqlitePool;

use crate::dto::workout::{CreateWorkoutRequest, SummaryWindow};
use crate::error::Result;
use crate::models::{Workout, WorkoutTotals};

pub struct WorkoutRepository<'a> {
    pool: &'a SqlitePool,
}

impl<'a> WorkoutRepository<'a> {
    pub fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    /// List workouts in insertion order, optionally only those on `date`
    pub async fn list(&self, date: Option<&str>) -> Result<Vec<Workout>> {
        let workouts = sqlx::query_as::<_, Workout>(
            r#"
            SELECT id, name, sets, reps, date
            FROM workouts
            WHERE ?1 IS NULL OR date = ?1
            ORDER BY id
            "#,
        )
        .bind(date)
        .fetch_all(self.pool)
        .await?;

        Ok(workouts)
    }

    /// Log a new workout
    pub async fn create(&self, req: &CreateWorkoutRequest) -> Result<Workout> {
        let workout = sqlx::query_as::<_, Workout>(
            r#"
            INSERT INTO workouts (name, sets, reps, date)
            VALUES (?1, ?2, ?3, ?4)
            RETURNING id, name, sets, reps, date
            "#,
        )
        .bind(&req.name)
        .bind(req.sets)
        .bind(req.reps)
        .bind(&req.date)
        .fetch_one(self.pool)
        .await?;

        Ok(workout)
    }

    /// Totals over every workout dated inside `window`, bounds included
    pub async fn totals_between(&self, window: &SummaryWindow) -> Result<WorkoutTotals> {
        let totals = sqlx::query_as::<_, WorkoutTotals>(
            r#"
            SELECT COALESCE(SUM(sets), 0) AS total_sets,
                   COALESCE(SUM(reps), 0) AS total_reps,
                   COUNT(DISTINCT name) AS unique_exercises
            FROM workouts
            WHERE date BETWEEN ?1 AND ?2
            "#,
        )
        .bind(window.start_str())
        .bind(window.end_str())
        .fetch_one(self.pool)
        .await?;

        Ok(totals)
    }

    /// Totals over every workout whose date starts with `"{month}-"`
    pub async fn totals_for_month(&self, month: &str) -> Result<WorkoutTotals> {
        // substr keeps the match literal; LIKE would treat `%` and `_` in the
        // month as wildcards and ignore case
        let totals = sqlx::query_as::<_, WorkoutTotals>(
            r#"
            SELECT COALESCE(SUM(sets), 0) AS total_sets,
                   COALESCE(SUM(reps), 0) AS total_reps,
                   COUNT(DISTINCT name) AS unique_exercises
            FROM workouts
            WHERE substr(date, 1, length(?1)) = ?1
            "#,
        )
        .bind(format!("{}-", month))
        .fetch_one(self.pool)
        .await?;

        Ok(totals)
    }
}
