use std::rc::Rc;

use gymbook_domain::{self as domain, RoutineService};
use gymbook_storage::KeyValueStore;

use crate::{
    Context, Navigator,
    screen::{Alert, IntoAlert},
};

/// Adds an exercise to a routine, or replaces an existing one.
pub struct ExerciseFormScreen<S> {
    context: Rc<Context<S>>,
    routine_id: domain::RoutineID,
    exercise_id: Option<domain::ExerciseID>,
    pub name: String,
    pub sets: String,
    pub reps: String,
    pub weight: String,
    pub youtube_link: String,
    pub alert: Option<Alert>,
}

impl<S: KeyValueStore> ExerciseFormScreen<S> {
    pub fn new(
        context: Rc<Context<S>>,
        routine_id: domain::RoutineID,
        exercise: Option<domain::Exercise>,
    ) -> Self {
        let mut screen = Self {
            context,
            routine_id,
            exercise_id: None,
            name: String::new(),
            sets: String::new(),
            reps: String::new(),
            weight: String::new(),
            youtube_link: String::new(),
            alert: None,
        };
        if let Some(exercise) = exercise {
            screen.exercise_id = Some(exercise.id);
            screen.name = exercise.name.into();
            screen.sets = count_input(exercise.sets.value());
            screen.reps = count_input(exercise.reps.value());
            screen.weight = exercise.weight.to_string();
            screen.youtube_link = exercise.youtube_link.unwrap_or_default();
        }
        screen
    }

    #[must_use]
    pub fn title(&self) -> &'static str {
        if self.exercise_id.is_some() {
            "Edit Exercise"
        } else {
            "New Exercise"
        }
    }

    #[must_use]
    pub fn button_label(&self) -> &'static str {
        if self.exercise_id.is_some() {
            "Update"
        } else {
            "Save"
        }
    }

    /// Returns to the previous screen if the exercise was saved.
    pub async fn save(&mut self, navigator: &mut Navigator) {
        let draft = match self.context.domain.validate_exercise(
            &self.name,
            &self.sets,
            &self.reps,
            &self.weight,
            &self.youtube_link,
        ) {
            Ok(draft) => draft,
            Err(err) => {
                self.alert = Some(err.into_alert("save exercise"));
                return;
            }
        };
        let result = match &self.exercise_id {
            Some(exercise_id) => self
                .context
                .domain
                .replace_exercise(&self.routine_id, exercise_id, draft)
                .await
                .map_err(|err| err.into_alert("save exercise")),
            None => self
                .context
                .domain
                .create_exercise(&self.routine_id, draft)
                .await
                .map_err(|err| err.into_alert("save exercise")),
        };
        match result {
            Ok(_) => {
                self.alert = None;
                navigator.go_back();
            }
            Err(alert) => self.alert = Some(alert),
        }
    }
}

/// Leaves the field empty for a count that is unknown in stored data.
fn count_input(count: Option<u32>) -> String {
    count.map(|count| count.to_string()).unwrap_or_default()
}
