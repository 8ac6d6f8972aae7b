mod imports;

mod article;
mod habit;
mod login_form;

pub use article::{Article, ArticleForm, NewArticle};
pub use habit::{Habit, HabitForm, NewHabit};
pub use login_form::LoginForm;

/// Form fields count as provided only when present and non-empty.
fn provided(field: Option<String>) -> Option<String> {
    field.filter(|value| !value.is_empty())
}
