use gymbook_domain as domain;

/// A screen together with the parameters it is opened with.
#[derive(Debug, Clone, PartialEq)]
pub enum Route {
    Home,
    Routines,
    RoutineDetail {
        routine_id: domain::RoutineID,
        routine_name: String,
    },
    ExerciseDetail {
        exercise_id: domain::ExerciseID,
        exercise_name: String,
        routine_id: domain::RoutineID,
    },
    /// Creates a routine, or renames the given one.
    AddRoutine { routine: Option<domain::Routine> },
    /// Creates an exercise, or replaces the given one.
    AddExercise {
        routine_id: domain::RoutineID,
        exercise: Option<domain::Exercise>,
    },
    Workout { routine: domain::Routine },
    WorkoutHistory,
}

impl Route {
    #[must_use]
    pub fn title(&self) -> &str {
        match self {
            Route::Home => "Gymbook",
            Route::Routines => "Routines",
            Route::RoutineDetail { routine_name, .. } => routine_name,
            Route::ExerciseDetail { exercise_name, .. } => exercise_name,
            Route::AddRoutine { routine: None } => "New Routine",
            Route::AddRoutine { routine: Some(_) } => "Edit Routine",
            Route::AddExercise { exercise: None, .. } => "New Exercise",
            Route::AddExercise {
                exercise: Some(_), ..
            } => "Edit Exercise",
            Route::Workout { routine } => routine.name.as_str(),
            Route::WorkoutHistory => "Workout History",
        }
    }
}

/// Stack of open screens. The root screen is never removed.
#[derive(Debug, Clone, PartialEq)]
pub struct Navigator {
    stack: Vec<Route>,
}

impl Default for Navigator {
    fn default() -> Self {
        Self::new(Route::Home)
    }
}

impl Navigator {
    #[must_use]
    pub fn new(root: Route) -> Self {
        Self { stack: vec![root] }
    }

    pub fn navigate(&mut self, route: Route) {
        self.stack.push(route);
    }

    /// Returns to the previous screen. Returns `false` if the current screen is the root.
    pub fn go_back(&mut self) -> bool {
        if self.stack.len() > 1 {
            self.stack.pop();
            true
        } else {
            false
        }
    }

    /// Replaces the whole stack by `route`.
    pub fn reset_to(&mut self, route: Route) {
        self.stack.clear();
        self.stack.push(route);
    }

    #[must_use]
    pub fn current(&self) -> &Route {
        &self.stack[self.stack.len() - 1]
    }

    #[must_use]
    pub fn depth(&self) -> usize {
        self.stack.len()
    }
}
