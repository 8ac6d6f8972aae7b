use crate::routes::imports::*;

#[tracing::instrument(name = "Admin page", skip_all, fields(authenticated = tracing::field::Empty))]
#[axum_macros::debug_handler]
pub async fn admin_page(
    State(state): State<AppState>,
    session: ReadableSession,
) -> ApiResult<Html<String>> {
    let authenticated = session.is_authenticated();
    tracing::Span::current().record("authenticated", authenticated);

    if authenticated {
        admin_dashboard(&state).await
    } else {
        Ok(state.views.login(None)?)
    }
}

#[tracing::instrument(name = "Admin login", skip_all)]
#[axum_macros::debug_handler]
pub async fn login(
    State(state): State<AppState>,
    mut session: WritableSession,
    Form(form): Form<LoginForm>,
) -> ApiResult<Response> {
    if session.is_authenticated() {
        return Ok(admin_dashboard(&state).await?.into_response());
    }

    if !form.matches(&state.conf.admin_password) {
        tracing::warn!("Admin login failed: incorrect password");
        return Ok(state.views.login(Some(INCORRECT_PASSWORD))?.into_response());
    }

    session.regenerate();
    session
        .sign_in()
        .context("Failed to register admin in a session")?;
    tracing::info!("Admin logged in");

    Ok(Redirect::to(static_routes::ADMIN).into_response())
}

async fn admin_dashboard(state: &AppState) -> ApiResult<Html<String>> {
    let habits = state.habits.list_all(Order::NewestFirst).await?;
    let articles = state.articles.list_all(Order::NewestFirst).await?;
    Ok(state.views.dashboard(&habits, &articles)?)
}
