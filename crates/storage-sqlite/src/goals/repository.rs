use fizen_core::errors::{DatabaseError, Error};
use fizen_core::goals::{Goal, GoalRepositoryTrait, NewGoal};
use fizen_core::Result;

use super::model::{GoalDB, GoalProgressDB, NewGoalDB};
use crate::db::{get_connection, WriteHandle};
use crate::errors::StorageError;
use crate::schema::{goal_progress, goals};
use async_trait::async_trait;
use diesel::prelude::*;
use diesel::r2d2::{self, Pool};
use diesel::SqliteConnection;
use log::debug;

use std::sync::Arc;
use uuid::Uuid;

pub struct GoalRepository {
    pool: Arc<Pool<r2d2::ConnectionManager<SqliteConnection>>>,
    writer: WriteHandle,
}

impl GoalRepository {
    pub fn new(
        pool: Arc<Pool<r2d2::ConnectionManager<SqliteConnection>>>,
        writer: WriteHandle,
    ) -> Self {
        GoalRepository { pool, writer }
    }

    pub fn load_goals_impl(&self, owner_id: &str) -> Result<Vec<Goal>> {
        let mut conn = get_connection(&self.pool)?;
        let rows = goals::table
            .left_join(goal_progress::table)
            .filter(goals::user_id.eq(owner_id))
            .order((goals::created_at.asc(), goals::id.asc()))
            .select((GoalDB::as_select(), goal_progress::amount_saved.nullable()))
            .load::<(GoalDB, Option<i64>)>(&mut conn)
            .map_err(StorageError::from)?;

        rows.into_iter()
            .map(|(goal_db, saved)| goal_db.into_domain(saved.unwrap_or(0)))
            .collect()
    }
}

#[async_trait]
impl GoalRepositoryTrait for GoalRepository {
    fn load_goals(&self, user_id: &str) -> Result<Vec<Goal>> {
        self.load_goals_impl(user_id)
    }

    async fn insert_new_goal(&self, new_goal: NewGoal) -> Result<Goal> {
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<Goal> {
                let goal_id = new_goal
                    .id
                    .clone()
                    .unwrap_or_else(|| Uuid::now_v7().to_string());
                let now = chrono::Utc::now().naive_utc();
                let new_goal_db = NewGoalDB::from_domain(new_goal, goal_id, now);

                let result_db = diesel::insert_into(goals::table)
                    .values(&new_goal_db)
                    .returning(GoalDB::as_returning())
                    .get_result(conn)
                    .map_err(StorageError::from)?;
                result_db.into_domain(0)
            })
            .await
    }

    async fn save_goal_progress(
        &self,
        user_id: &str,
        goal_id: &str,
        amount_saved: i64,
    ) -> Result<()> {
        let owner_id = user_id.to_string();
        let target_goal_id = goal_id.to_string();

        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<()> {
                let owned = goals::table
                    .filter(goals::id.eq(&target_goal_id))
                    .filter(goals::user_id.eq(&owner_id))
                    .count()
                    .get_result::<i64>(conn)
                    .map_err(StorageError::from)?;
                if owned == 0 {
                    return Err(Error::Database(DatabaseError::NotFound(format!(
                        "Goal {} for user {}",
                        target_goal_id, owner_id
                    ))));
                }

                let progress = GoalProgressDB {
                    goal_id: target_goal_id,
                    user_id: owner_id,
                    amount_saved,
                    updated_at: chrono::Utc::now().naive_utc(),
                };
                diesel::insert_into(goal_progress::table)
                    .values(&progress)
                    .on_conflict(goal_progress::goal_id)
                    .do_update()
                    .set(&progress)
                    .execute(conn)
                    .map_err(StorageError::from)?;

                debug!(
                    "Saved progress {} for goal {}",
                    progress.amount_saved, progress.goal_id
                );
                Ok(())
            })
            .await
    }

    async fn delete_goal(&self, user_id: &str, goal_id: &str) -> Result<usize> {
        let owner_id = user_id.to_string();
        let target_goal_id = goal_id.to_string();

        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<usize> {
                Ok(diesel::delete(
                    goals::table
                        .filter(goals::id.eq(target_goal_id))
                        .filter(goals::user_id.eq(owner_id)),
                )
                .execute(conn)
                .map_err(StorageError::from)?)
            })
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::{create_pool, run_migrations, spawn_writer};
    use fizen_core::goals::{GoalCategory, GoalService, GoalServiceTrait};
    use fizen_core::IncomeBracket;
    use tempfile::tempdir;

    /// Creates a test repository backed by a temp database.
    /// Returns the repository and the temp dir (to keep it alive).
    async fn create_test_repository() -> (GoalRepository, tempfile::TempDir) {
        let temp_dir = tempdir().expect("Failed to create temp directory");
        let db_path = temp_dir.path().join("test.db");
        let db_path_str = db_path.to_string_lossy().to_string();

        let pool = create_pool(&db_path_str).expect("Failed to create pool");
        run_migrations(&pool).expect("Failed to run migrations");

        // spawn_writer takes the pool by value
        let writer = spawn_writer((*pool).clone());

        (GoalRepository::new(Arc::clone(&pool), writer), temp_dir)
    }

    fn new_goal(user_id: &str, name: &str, base: i64, category: GoalCategory, city: &str) -> NewGoal {
        NewGoal {
            id: None,
            user_id: user_id.to_string(),
            name: name.to_string(),
            base_target_amount: base,
            category,
            city: city.to_string(),
        }
    }

    #[tokio::test]
    async fn inserted_goals_load_in_creation_order() {
        let (repo, _dir) = create_test_repository().await;

        let house = repo
            .insert_new_goal(new_goal("u1", "House", 3_000_000, GoalCategory::Property, "Mumbai"))
            .await
            .unwrap();
        let fund = repo
            .insert_new_goal(new_goal("u1", "Rainy day", 750_000, GoalCategory::Emergency, "Kochi"))
            .await
            .unwrap();
        repo.insert_new_goal(new_goal("u2", "Car", 900_000, GoalCategory::Other, "Delhi"))
            .await
            .unwrap();

        let loaded = repo.load_goals("u1").unwrap();
        assert_eq!(loaded, vec![house, fund]);
        assert!(loaded.iter().all(|g| g.amount_saved == 0));
        assert!(repo.load_goals("nobody").unwrap().is_empty());
    }

    #[tokio::test]
    async fn insert_keeps_caller_supplied_id() {
        let (repo, _dir) = create_test_repository().await;

        let mut input = new_goal("u1", "Retire early", 5_000_000, GoalCategory::Retirement, "Pune");
        input.id = Some("goal-fixed".to_string());
        let goal = repo.insert_new_goal(input).await.unwrap();
        assert_eq!(goal.id, "goal-fixed");
        assert_eq!(goal.category, GoalCategory::Retirement);
    }

    #[tokio::test]
    async fn progress_is_upserted() {
        let (repo, _dir) = create_test_repository().await;
        let goal = repo
            .insert_new_goal(new_goal("u1", "House", 3_000_000, GoalCategory::Property, "Mumbai"))
            .await
            .unwrap();

        repo.save_goal_progress("u1", &goal.id, 100_000).await.unwrap();
        assert_eq!(repo.load_goals("u1").unwrap()[0].amount_saved, 100_000);

        repo.save_goal_progress("u1", &goal.id, 250_000).await.unwrap();
        assert_eq!(repo.load_goals("u1").unwrap()[0].amount_saved, 250_000);
    }

    #[tokio::test]
    async fn progress_on_someone_elses_goal_is_not_found() {
        let (repo, _dir) = create_test_repository().await;
        let goal = repo
            .insert_new_goal(new_goal("u1", "House", 3_000_000, GoalCategory::Property, "Mumbai"))
            .await
            .unwrap();

        let err = repo
            .save_goal_progress("u2", &goal.id, 10)
            .await
            .unwrap_err();
        assert!(matches!(err, Error::Database(DatabaseError::NotFound(_))));

        let err = repo
            .save_goal_progress("u1", "missing", 10)
            .await
            .unwrap_err();
        assert!(matches!(err, Error::Database(DatabaseError::NotFound(_))));
    }

    #[tokio::test]
    async fn delete_cascades_progress_and_respects_owner() {
        let (repo, _dir) = create_test_repository().await;
        let goal = repo
            .insert_new_goal(new_goal("u1", "House", 3_000_000, GoalCategory::Property, "Mumbai"))
            .await
            .unwrap();
        repo.save_goal_progress("u1", &goal.id, 5_000).await.unwrap();

        assert_eq!(repo.delete_goal("u2", &goal.id).await.unwrap(), 0);
        assert_eq!(repo.delete_goal("u1", &goal.id).await.unwrap(), 1);
        assert!(repo.load_goals("u1").unwrap().is_empty());

        let mut conn = get_connection(&repo.pool).unwrap();
        let orphaned = goal_progress::table
            .count()
            .get_result::<i64>(&mut conn)
            .unwrap();
        assert_eq!(orphaned, 0);
    }

    #[tokio::test]
    async fn service_plans_stored_goals() {
        let (repo, _dir) = create_test_repository().await;
        let service = GoalService::new(Arc::new(repo));

        let goal = service
            .create_goal(new_goal("u1", "House", 3_000_000, GoalCategory::Property, "mumbai"))
            .await
            .unwrap();
        service
            .save_goal_progress("u1", &goal.id, 300_000)
            .await
            .unwrap();

        let plans = service.get_goal_plans("u1", IncomeBracket::Low).unwrap();
        assert_eq!(plans.len(), 1);
        assert_eq!(plans[0].adjusted_target_amount, 6_600_000);
        assert_eq!(plans[0].amount_saved, 300_000);
        assert_eq!(
            plans[0].next_milestone.as_ref().unwrap().target_amount,
            500_000
        );
    }
}
