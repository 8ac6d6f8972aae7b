mod utils;

use imports::*;

mod imports {
    pub use super::utils::{Error, *};
    pub use cozo::*;
    pub use interfacing::{Article, Habit, NewArticle, NewHabit};
    pub use std::collections::BTreeMap;
}

const ARTICLE_HEADERS: &[&str] = &["id", "title", "content"];
const HABIT_HEADERS: &[&str] = &["id", "name", "description", "completed"];

fn article_row(row: &[DataValue]) -> Option<Article> {
    match row {
        [DataValue::Num(Num::Int(id)), DataValue::Str(title), DataValue::Str(content)] => {
            Some(Article {
                id: *id,
                title: title.to_string(),
                content: content.to_string(),
            })
        }
        _ => None,
    }
}

fn habit_row(row: &[DataValue]) -> Option<Habit> {
    let description = match row.get(2)? {
        DataValue::Str(description) => Some(description.to_string()),
        DataValue::Null => None,
        _ => return None,
    };

    match row {
        [DataValue::Num(Num::Int(id)), DataValue::Str(name), _, DataValue::Bool(completed)] => {
            Some(Habit {
                id: *id,
                name: name.to_string(),
                description,
                completed: *completed,
            })
        }
        _ => None,
    }
}

#[tracing::instrument(name = "Create articles table", skip_all)]
pub fn create_articles_table(db: &DbInstance) -> OpResult {
    let script = include_str!("articles/create_table.cozo");
    let result = db.run_script(script, Default::default(), ScriptMutability::Mutable);
    op_result(result)
}

#[tracing::instrument(name = "Ensure articles table", skip_all)]
pub fn ensure_articles_table(db: &DbInstance) -> OpResult {
    let script = include_str!("articles/ensure_table.cozo");
    db.run_script(script, Default::default(), ScriptMutability::Immutable)
        .map(|_| ())
        .map_err(Error::EngineError)
}

#[tracing::instrument(name = "Find articles", skip(db))]
pub fn find_articles(db: &DbInstance, order: Order) -> Result<Vec<Article>> {
    let script = match order {
        Order::Stored => include_str!("articles/find.cozo"),
        Order::NewestFirst => include_str!("articles/find_newest_first.cozo"),
    };
    let result = db.run_script(script, Default::default(), ScriptMutability::Immutable);
    rows_result(result, ARTICLE_HEADERS, article_row)
}

#[tracing::instrument(name = "Find article by id", skip(db))]
pub fn find_article_by_id(db: &DbInstance, id: i64) -> Result<Option<Article>> {
    let script = include_str!("articles/find_by_id.cozo");
    let params: BTreeMap<String, DataValue> = map_macro::btree_map! {
        "id".into() => id.into()
    };
    let result = db.run_script(script, params, ScriptMutability::Immutable);
    at_most_one(rows_result(result, ARTICLE_HEADERS, article_row)?)
}

#[tracing::instrument(name = "Put article", skip_all)]
pub fn put_article(db: &DbInstance, article: NewArticle) -> Result<Article> {
    let script = include_str!("articles/put.cozo");
    let params: BTreeMap<String, DataValue> = map_macro::btree_map! {
        "title".into() => article.title.into(),
        "content".into() => article.content.into(),
    };
    let result = db.run_script(script, params, ScriptMutability::Mutable);
    exactly_one(rows_result(result, ARTICLE_HEADERS, article_row)?)
}

#[tracing::instrument(name = "Create habits table", skip_all)]
pub fn create_habits_table(db: &DbInstance) -> OpResult {
    let script = include_str!("habits/create_table.cozo");
    let result = db.run_script(script, Default::default(), ScriptMutability::Mutable);
    op_result(result)
}

#[tracing::instrument(name = "Ensure habits table", skip_all)]
pub fn ensure_habits_table(db: &DbInstance) -> OpResult {
    let script = include_str!("habits/ensure_table.cozo");
    db.run_script(script, Default::default(), ScriptMutability::Immutable)
        .map(|_| ())
        .map_err(Error::EngineError)
}

#[tracing::instrument(name = "Find habits", skip(db))]
pub fn find_habits(db: &DbInstance, order: Order) -> Result<Vec<Habit>> {
    let script = match order {
        Order::Stored => include_str!("habits/find.cozo"),
        Order::NewestFirst => include_str!("habits/find_newest_first.cozo"),
    };
    let result = db.run_script(script, Default::default(), ScriptMutability::Immutable);
    rows_result(result, HABIT_HEADERS, habit_row)
}

#[tracing::instrument(name = "Find habit by id", skip(db))]
pub fn find_habit_by_id(db: &DbInstance, id: i64) -> Result<Option<Habit>> {
    let script = include_str!("habits/find_by_id.cozo");
    let params: BTreeMap<String, DataValue> = map_macro::btree_map! {
        "id".into() => id.into()
    };
    let result = db.run_script(script, params, ScriptMutability::Immutable);
    at_most_one(rows_result(result, HABIT_HEADERS, habit_row)?)
}

#[tracing::instrument(name = "Put habit", skip_all)]
pub fn put_habit(db: &DbInstance, habit: NewHabit) -> Result<Habit> {
    let script = include_str!("habits/put.cozo");
    let params: BTreeMap<String, DataValue> = map_macro::btree_map! {
        "name".into() => habit.name.into(),
        "description".into() => optional_str(habit.description),
    };
    let result = db.run_script(script, params, ScriptMutability::Mutable);
    exactly_one(rows_result(result, HABIT_HEADERS, habit_row)?)
}

#[tracing::instrument(name = "Update habit", skip(db))]
pub fn update_habit(db: &DbInstance, habit: &Habit) -> OpResult {
    let script = include_str!("habits/update.cozo");
    let params: BTreeMap<String, DataValue> = map_macro::btree_map! {
        "id".into() => habit.id.into(),
        "name".into() => habit.name.as_str().into(),
        "description".into() => optional_str(habit.description.clone()),
        "completed".into() => habit.completed.into(),
    };
    let result = db.run_script(script, params, ScriptMutability::Mutable);
    op_result(result)
}
