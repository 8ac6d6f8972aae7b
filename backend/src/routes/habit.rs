use crate::routes::imports::*;
use axum::extract::rejection::PathRejection;

#[tracing::instrument(name = "Habit page", skip_all)]
pub async fn habit_page(State(state): State<AppState>) -> ApiResult<Html<String>> {
    let habits = state.habits.list_all(Order::Stored).await?;
    Ok(state.views.habits(&habits)?)
}

#[tracing::instrument(name = "New habit", skip_all)]
#[axum_macros::debug_handler]
pub async fn new_habit(
    State(state): State<AppState>,
    Form(form): Form<HabitForm>,
) -> ApiResult<Redirect> {
    create_habit(state.habits.as_ref(), form).await?;
    Ok(Redirect::to(static_routes::HABIT))
}

/// Ids that are not integers name no habit.
#[tracing::instrument(name = "Complete habit", skip_all, fields(id = tracing::field::Empty))]
#[axum_macros::debug_handler]
pub async fn complete_habit(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
) -> ApiResult<Redirect> {
    let Path(id) = id.map_err(|rejection| {
        tracing::info!(%rejection, "Habit id rejected");
        ApiError::EntryNotFound
    })?;
    tracing::Span::current().record("id", id);

    toggle_habit(state.habits.as_ref(), id).await?;
    Ok(Redirect::to(static_routes::HABIT))
}

/// Stores the habit described by `form`, or nothing when it has no name.
pub(crate) async fn create_habit(
    habits: &dyn HabitRepository,
    form: HabitForm,
) -> StoreResult<Option<Habit>> {
    let Some(new_habit) = form.into_new_habit() else {
        tracing::info!("Habit without a name skipped");
        return Ok(None);
    };

    let habit = habits.create(new_habit).await?;
    tracing::info!(habit_id = habit.id, "Habit created");
    Ok(Some(habit))
}

pub(crate) async fn toggle_habit(habits: &dyn HabitRepository, id: i64) -> ApiResult<Habit> {
    let habit = habits
        .get_by_id(id)
        .await?
        .ok_or(ApiError::EntryNotFound)?
        .toggled();

    habits.update(&habit).await?;
    Ok(habit)
}
