use crate::imports::*;

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct Article {
    pub id: i64,
    pub title: String,
    pub content: String,
}

/// Fields of an article that is about to be stored.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NewArticle {
    pub title: String,
    pub content: String,
}

/// Body of `POST /admin/add_article`.
#[derive(Serialize, Deserialize, Clone, Debug, Default)]
pub struct ArticleForm {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub content: Option<String>,
}

impl ArticleForm {
    /// `None` when either required field is missing or empty.
    pub fn into_new_article(self) -> Option<NewArticle> {
        Some(NewArticle {
            title: crate::provided(self.title)?,
            content: crate::provided(self.content)?,
        })
    }
}
