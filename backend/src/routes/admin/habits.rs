use crate::routes::{habit::create_habit, imports::*};

#[tracing::instrument(name = "Admin new habit", skip_all)]
#[axum_macros::debug_handler]
pub async fn add_habit(
    State(state): State<AppState>,
    session: ReadableSession,
    Form(form): Form<HabitForm>,
) -> ApiResult<Redirect> {
    reject_anonymous_users(&**session)?;

    create_habit(state.habits.as_ref(), form).await?;
    Ok(Redirect::to(static_routes::ADMIN))
}
