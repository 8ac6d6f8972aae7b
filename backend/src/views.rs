// Server-rendered pages
//

use axum::response::Html;
use interfacing::{Article, Habit};
use tera::{Context, Tera};

pub const INCORRECT_PASSWORD: &str = "incorrect password";

/// Templates are compiled once at startup from files embedded in the binary.
pub struct Views {
    tera: Tera,
}

impl Views {
    pub fn new() -> tera::Result<Self> {
        let mut tera = Tera::default();
        tera.add_raw_templates(vec![
            ("base.html", include_str!("../templates/base.html")),
            ("index.html", include_str!("../templates/index.html")),
            ("habit.html", include_str!("../templates/habit.html")),
            ("login.html", include_str!("../templates/login.html")),
            ("admin.html", include_str!("../templates/admin.html")),
        ])?;
        Ok(Self { tera })
    }

    pub fn home(&self, articles: &[Article]) -> tera::Result<Html<String>> {
        let mut context = Context::new();
        context.insert("articles", articles);
        self.render("index.html", &context)
    }

    pub fn habits(&self, habits: &[Habit]) -> tera::Result<Html<String>> {
        let mut context = Context::new();
        context.insert("habits", habits);
        self.render("habit.html", &context)
    }

    pub fn login(&self, error: Option<&str>) -> tera::Result<Html<String>> {
        let mut context = Context::new();
        context.insert("error", &error);
        self.render("login.html", &context)
    }

    pub fn dashboard(&self, habits: &[Habit], articles: &[Article]) -> tera::Result<Html<String>> {
        let mut context = Context::new();
        context.insert("habits", habits);
        context.insert("articles", articles);
        self.render("admin.html", &context)
    }

    fn render(&self, template: &str, context: &Context) -> tera::Result<Html<String>> {
        self.tera.render(template, context).map(Html)
    }
}
