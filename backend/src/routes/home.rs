use crate::routes::imports::*;

#[tracing::instrument(name = "Home page", skip_all)]
pub async fn home(State(state): State<AppState>) -> ApiResult<Html<String>> {
    let articles = state.articles.list_all(Order::NewestFirst).await?;
    Ok(state.views.home(&articles)?)
}
