use crate::imports::*;

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct Habit {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    pub completed: bool,
}

impl Habit {
    pub fn toggled(mut self) -> Self {
        self.completed = !self.completed;
        self
    }
}

/// Fields of a habit that is about to be stored. New habits always start
/// uncompleted.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NewHabit {
    pub name: String,
    pub description: Option<String>,
}

/// Body of `POST /habit` and `POST /admin/add_habit`.
#[derive(Serialize, Deserialize, Clone, Debug, Default)]
pub struct HabitForm {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

impl HabitForm {
    /// `None` when the name is missing or empty. An empty description is
    /// stored as absent.
    pub fn into_new_habit(self) -> Option<NewHabit> {
        Some(NewHabit {
            name: crate::provided(self.name)?,
            description: crate::provided(self.description),
        })
    }
}
