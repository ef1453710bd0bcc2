use std::rc::Rc;

use gymbook_domain::{self as domain, RoutineService};
use gymbook_storage::KeyValueStore;

use crate::{
    Context, Navigator, Route,
    screen::{Alert, Confirmation, Content, IntoAlert},
};

pub struct RoutineDetailScreen<S> {
    context: Rc<Context<S>>,
    routine_id: domain::RoutineID,
    pub title: String,
    pub routine: Content<domain::Routine>,
    pub alert: Option<Alert>,
    pub confirmation: Option<Confirmation<domain::ExerciseID>>,
}

impl<S: KeyValueStore> RoutineDetailScreen<S> {
    pub fn new(context: Rc<Context<S>>, routine_id: domain::RoutineID, routine_name: String) -> Self {
        Self {
            context,
            routine_id,
            title: routine_name,
            routine: Content::Loading,
            alert: None,
            confirmation: None,
        }
    }

    pub async fn on_focus(&mut self) {
        match self.context.domain.get_routine(&self.routine_id).await {
            Ok(routine) => {
                if let Some(routine) = &routine {
                    self.title = routine.name.to_string();
                }
                self.routine = routine.into();
            }
            Err(err) => self.alert = Some(err.into_alert("load routine")),
        }
    }

    pub fn open_exercise(&self, navigator: &mut Navigator, exercise: &domain::Exercise) {
        navigator.navigate(Route::ExerciseDetail {
            exercise_id: exercise.id.clone(),
            exercise_name: exercise.name.to_string(),
            routine_id: self.routine_id.clone(),
        });
    }

    pub fn add_exercise(&self, navigator: &mut Navigator) {
        navigator.navigate(Route::AddExercise {
            routine_id: self.routine_id.clone(),
            exercise: None,
        });
    }

    pub fn edit_exercise(&self, navigator: &mut Navigator, exercise: &domain::Exercise) {
        navigator.navigate(Route::AddExercise {
            routine_id: self.routine_id.clone(),
            exercise: Some(exercise.clone()),
        });
    }

    /// Does nothing until the routine has been loaded.
    pub fn start_workout(&self, navigator: &mut Navigator) {
        if let Some(routine) = self.routine.ready() {
            navigator.navigate(Route::Workout {
                routine: routine.clone(),
            });
        }
    }

    pub fn request_delete(&mut self, id: domain::ExerciseID) {
        self.confirmation = Some(Confirmation {
            title: "Delete Exercise",
            message: "Are you sure you want to delete this exercise?",
            target: id,
        });
    }

    pub fn cancel_delete(&mut self) {
        self.confirmation = None;
    }

    pub async fn confirm_delete(&mut self) {
        let Some(confirmation) = self.confirmation.take() else {
            return;
        };
        match self
            .context
            .domain
            .delete_exercise(&self.routine_id, &confirmation.target)
            .await
        {
            Ok(_) => self.on_focus().await,
            Err(err) => self.alert = Some(err.into_alert("delete exercise")),
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use crate::screen::tests::{context, push_day};

    use super::*;

    #[tokio::test]
    async fn test_on_focus() {
        let context = context();
        let routine = push_day(&context).await;
        let mut screen =
            RoutineDetailScreen::new(context, routine.id.clone(), "Push Day".to_string());
        assert_eq!(screen.routine, Content::Loading);
        screen.on_focus().await;
        assert_eq!(screen.routine, Content::Ready(routine));
        assert_eq!(screen.alert, None);
    }

    #[tokio::test]
    async fn test_on_focus_renamed() {
        let context = context();
        let routine = push_day(&context).await;
        let mut screen =
            RoutineDetailScreen::new(context.clone(), routine.id.clone(), "Push Day".to_string());
        context
            .domain
            .rename_routine(&routine.id, domain::Name::new("Chest Day").unwrap())
            .await
            .unwrap();
        screen.on_focus().await;
        assert_eq!(screen.title, "Chest Day");
    }

    #[tokio::test]
    async fn test_on_focus_not_found() {
        let mut screen = RoutineDetailScreen::new(context(), "1".into(), "Push Day".to_string());
        screen.on_focus().await;
        assert_eq!(screen.routine, Content::NotFound);
        assert_eq!(screen.alert, None);
    }

    #[tokio::test]
    async fn test_delete_exercise() {
        let context = context();
        let routine = push_day(&context).await;
        let mut screen =
            RoutineDetailScreen::new(context, routine.id.clone(), "Push Day".to_string());
        screen.on_focus().await;

        screen.request_delete(routine.exercises[0].id.clone());
        assert_eq!(
            screen.confirmation.as_ref().map(|c| c.message),
            Some("Are you sure you want to delete this exercise?")
        );
        screen.confirm_delete().await;
        assert_eq!(
            screen.routine,
            Content::Ready(domain::Routine {
                exercises: vec![],
                ..routine
            })
        );
    }

    #[tokio::test]
    async fn test_delete_exercise_of_deleted_routine() {
        let context = context();
        let routine = push_day(&context).await;
        let mut screen =
            RoutineDetailScreen::new(context.clone(), routine.id.clone(), "Push Day".to_string());
        screen.on_focus().await;
        context.domain.delete_routine(&routine.id).await.unwrap();

        screen.request_delete(routine.exercises[0].id.clone());
        screen.confirm_delete().await;
        assert_eq!(screen.alert, Some(Alert::error("Routine not found.")));
    }

    #[tokio::test]
    async fn test_navigation() {
        let context = context();
        let routine = push_day(&context).await;
        let exercise = routine.exercises[0].clone();
        let mut screen =
            RoutineDetailScreen::new(context, routine.id.clone(), "Push Day".to_string());
        let mut navigator = Navigator::new(Route::Routines);

        screen.start_workout(&mut navigator);
        assert_eq!(navigator.current(), &Route::Routines);

        screen.on_focus().await;
        screen.start_workout(&mut navigator);
        assert_eq!(
            navigator.current(),
            &Route::Workout {
                routine: routine.clone()
            }
        );
        navigator.go_back();

        screen.open_exercise(&mut navigator, &exercise);
        assert_eq!(
            navigator.current(),
            &Route::ExerciseDetail {
                exercise_id: exercise.id.clone(),
                exercise_name: "Bench Press".to_string(),
                routine_id: routine.id.clone(),
            }
        );
        navigator.go_back();

        screen.add_exercise(&mut navigator);
        assert_eq!(
            navigator.current(),
            &Route::AddExercise {
                routine_id: routine.id.clone(),
                exercise: None,
            }
        );
        navigator.go_back();

        screen.edit_exercise(&mut navigator, &exercise);
        assert_eq!(
            navigator.current(),
            &Route::AddExercise {
                routine_id: routine.id.clone(),
                exercise: Some(exercise.clone()),
            }
        );
    }
}
