use std::rc::Rc;

use gymbook_domain::{self as domain, WorkoutService};
use gymbook_storage::KeyValueStore;

use crate::{
    Context,
    screen::{Alert, IntoAlert},
};

pub struct WorkoutHistoryScreen<S> {
    context: Rc<Context<S>>,
    /// Newest first.
    pub workouts: Vec<domain::Workout>,
    pub alert: Option<Alert>,
}

impl<S: KeyValueStore> WorkoutHistoryScreen<S> {
    pub fn new(context: Rc<Context<S>>) -> Self {
        Self {
            context,
            workouts: vec![],
            alert: None,
        }
    }

    pub async fn on_focus(&mut self) {
        match self.context.domain.get_workouts().await {
            Ok(mut workouts) => {
                workouts.sort_by(|a, b| b.date.cmp(&a.date));
                self.workouts = workouts;
            }
            Err(err) => self.alert = Some(err.into_alert("load workouts")),
        }
    }

    #[must_use]
    pub fn lines(&self) -> Vec<String> {
        self.workouts
            .iter()
            .map(|workout| {
                format!(
                    "{} {} ({})",
                    workout.date.format("%Y-%m-%d %H:%M"),
                    workout.routine.name,
                    domain::format_duration(workout.duration)
                )
            })
            .collect()
    }
}
