//! Repository interfaces the handlers depend on, and their cozo-backed
//! implementation.
//!
//! Every cozo script runs on the blocking pool; a single script is committed
//! as one transaction. Creates are serialized so that two of them never read
//! the same highest id.

use crate::db::{self, q, Order};
use crate::trace::spawn_blocking_with_tracing;
use async_trait::async_trait;
use cozo::DbInstance;
use interfacing::{Article, Habit, NewArticle, NewHabit};
use std::sync::Arc;
use tokio::sync::Mutex;

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error(transparent)]
    Db(#[from] db::Error),

    #[error("Store task failed")]
    Join(#[from] tokio::task::JoinError),
}

pub type StoreResult<T> = Result<T, StoreError>;

#[async_trait]
pub trait ArticleRepository: Send + Sync {
    async fn list_all(&self, order: Order) -> StoreResult<Vec<Article>>;

    async fn get_by_id(&self, id: i64) -> StoreResult<Option<Article>>;

    async fn create(&self, article: NewArticle) -> StoreResult<Article>;
}

#[async_trait]
pub trait HabitRepository: Send + Sync {
    async fn list_all(&self, order: Order) -> StoreResult<Vec<Habit>>;

    async fn get_by_id(&self, id: i64) -> StoreResult<Option<Habit>>;

    /// Stores a new habit with `completed` unset.
    async fn create(&self, habit: NewHabit) -> StoreResult<Habit>;

    /// Overwrites the stored row with the same id.
    async fn update(&self, habit: &Habit) -> StoreResult<()>;
}

#[derive(Clone)]
pub struct CozoStore {
    db: DbInstance,
    inserts: Arc<Mutex<()>>,
}

impl CozoStore {
    pub fn new(db: DbInstance) -> Self {
        Self {
            db,
            inserts: Arc::default(),
        }
    }

    async fn insert<F, R>(&self, f: F) -> StoreResult<R>
    where
        F: FnOnce(&DbInstance) -> db::Result<R> + Send + 'static,
        R: Send + 'static,
    {
        let _guard = self.inserts.lock().await;
        self.run(f).await
    }

    async fn run<F, R>(&self, f: F) -> StoreResult<R>
    where
        F: FnOnce(&DbInstance) -> db::Result<R> + Send + 'static,
        R: Send + 'static,
    {
        let db = self.db.clone();
        Ok(spawn_blocking_with_tracing(move || f(&db)).await??)
    }
}

#[async_trait]
impl ArticleRepository for CozoStore {
    async fn list_all(&self, order: Order) -> StoreResult<Vec<Article>> {
        self.run(move |db| q::find_articles(db, order)).await
    }

    async fn get_by_id(&self, id: i64) -> StoreResult<Option<Article>> {
        self.run(move |db| q::find_article_by_id(db, id)).await
    }

    async fn create(&self, article: NewArticle) -> StoreResult<Article> {
        self.insert(move |db| q::put_article(db, article)).await
    }
}

#[async_trait]
impl HabitRepository for CozoStore {
    async fn list_all(&self, order: Order) -> StoreResult<Vec<Habit>> {
        self.run(move |db| q::find_habits(db, order)).await
    }

    async fn get_by_id(&self, id: i64) -> StoreResult<Option<Habit>> {
        self.run(move |db| q::find_habit_by_id(db, id)).await
    }

    async fn create(&self, habit: NewHabit) -> StoreResult<Habit> {
        self.insert(move |db| q::put_habit(db, habit)).await
    }

    async fn update(&self, habit: &Habit) -> StoreResult<()> {
        let habit = habit.clone();
        self.run(move |db| q::update_habit(db, &habit)).await
    }
}
