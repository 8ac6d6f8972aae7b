pub use crate::{
    db::Order,
    error::{ApiError, ApiResult},
    session::{reject_anonymous_users, AdminSession, AdminSessionMut},
    startup::AppState,
    static_routes,
    store::{ArticleRepository, HabitRepository, StoreResult},
    views::INCORRECT_PASSWORD,
};

pub use anyhow::Context;
pub use axum::{
    extract::{Form, Path, State},
    response::{Html, IntoResponse, Redirect, Response},
};
pub use axum_sessions::extractors::{ReadableSession, WritableSession};
pub use interfacing::{Article, ArticleForm, Habit, HabitForm, LoginForm};
