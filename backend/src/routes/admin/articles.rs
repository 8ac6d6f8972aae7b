use crate::routes::imports::*;

#[tracing::instrument(name = "Admin new article", skip_all)]
#[axum_macros::debug_handler]
pub async fn add_article(
    State(state): State<AppState>,
    session: ReadableSession,
    Form(form): Form<ArticleForm>,
) -> ApiResult<Redirect> {
    reject_anonymous_users(&**session)?;

    create_article(state.articles.as_ref(), form).await?;
    Ok(Redirect::to(static_routes::ADMIN))
}

/// Stores the article described by `form` unless a field is missing.
pub(crate) async fn create_article(
    articles: &dyn ArticleRepository,
    form: ArticleForm,
) -> StoreResult<Option<Article>> {
    let Some(new_article) = form.into_new_article() else {
        tracing::info!("Incomplete article skipped");
        return Ok(None);
    };

    let article = articles.create(new_article).await?;
    tracing::info!(article_id = article.id, "Article created");
    Ok(Some(article))
}
