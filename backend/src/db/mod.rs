use crate::conf::DbConf;
use cozo::*;
pub mod q;

/// Opens the configured store and makes sure both relations exist.
#[tracing::instrument(name = "Start database", skip_all, fields(engine = ?conf.storage_engine))]
pub fn start_db(conf: &DbConf) -> Result<DbInstance> {
    let db = conf.db_instance().map_err(Error::EngineError)?;
    init(&db)?;
    Ok(db)
}

pub fn init(db: &DbInstance) -> OpResult {
    if q::ensure_articles_table(db).is_err() {
        q::create_articles_table(db)?;
        tracing::info!("Created articles table");
    }

    if q::ensure_habits_table(db).is_err() {
        q::create_habits_table(db)?;
        tracing::info!("Created habits table");
    }

    Ok(())
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Order {
    /// Ascending identifiers, which is insertion order.
    Stored,
    NewestFirst,
}

#[derive(Debug, thiserror::Error)]
pub enum Error {
    // most likely query syntax error
    #[error("Engine error: {0}")]
    EngineError(miette::ErrReport),
    // returned results don't cover expected cases
    #[error("Result error")]
    ResultError(NamedRows),
    #[error("Expected a single row, got {0}")]
    TooManyRows(usize),
}

pub type Result<T> = std::result::Result<T, Error>;

pub type OpResult = Result<()>;
