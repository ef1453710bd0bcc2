use std::rc::Rc;

use gymbook_domain::{self as domain, RoutineService};
use gymbook_storage::KeyValueStore;

use crate::{
    Context, Navigator, Route,
    screen::{Alert, Confirmation, IntoAlert},
};

pub struct RoutinesScreen<S> {
    context: Rc<Context<S>>,
    pub routines: Vec<domain::Routine>,
    pub alert: Option<Alert>,
    pub confirmation: Option<Confirmation<domain::RoutineID>>,
}

impl<S: KeyValueStore> RoutinesScreen<S> {
    pub fn new(context: Rc<Context<S>>) -> Self {
        Self {
            context,
            routines: vec![],
            alert: None,
            confirmation: None,
        }
    }

    pub async fn on_focus(&mut self) {
        match self.context.domain.get_routines().await {
            Ok(routines) => self.routines = routines,
            Err(err) => self.alert = Some(err.into_alert("load routines")),
        }
    }

    pub fn open(&self, navigator: &mut Navigator, routine: &domain::Routine) {
        navigator.navigate(Route::RoutineDetail {
            routine_id: routine.id.clone(),
            routine_name: routine.name.to_string(),
        });
    }

    pub fn add(&self, navigator: &mut Navigator) {
        navigator.navigate(Route::AddRoutine { routine: None });
    }

    pub fn edit(&self, navigator: &mut Navigator, routine: &domain::Routine) {
        navigator.navigate(Route::AddRoutine {
            routine: Some(routine.clone()),
        });
    }

    pub fn start_workout(&self, navigator: &mut Navigator, routine: &domain::Routine) {
        navigator.navigate(Route::Workout {
            routine: routine.clone(),
        });
    }

    pub fn request_delete(&mut self, id: domain::RoutineID) {
        self.confirmation = Some(Confirmation {
            title: "Delete Routine",
            message: "Are you sure you want to delete this routine?",
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
            .delete_routine(&confirmation.target)
            .await
        {
            Ok(_) => self.on_focus().await,
            Err(err) => self.alert = Some(err.into_alert("delete routine")),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::rc::Rc;

    use pretty_assertions::assert_eq;

    use crate::screen::tests::{UnavailableStore, context, push_day};

    use super::*;

    #[tokio::test]
    async fn test_on_focus() {
        let context = context();
        let routine = push_day(&context).await;
        let mut screen = RoutinesScreen::new(context);
        screen.on_focus().await;
        assert_eq!(screen.routines, vec![routine]);
        assert_eq!(screen.alert, None);
    }

    #[tokio::test]
    async fn test_on_focus_unavailable() {
        let mut screen = RoutinesScreen::new(Rc::new(Context::new(UnavailableStore)));
        screen.on_focus().await;
        assert_eq!(screen.routines, vec![]);
        assert_eq!(
            screen.alert,
            Some(Alert::error(
                "Failed to load routines. storage unavailable"
            ))
        );
    }

    #[tokio::test]
    async fn test_delete() {
        let context = context();
        let routine = push_day(&context).await;
        let mut screen = RoutinesScreen::new(context);
        screen.on_focus().await;

        screen.request_delete(routine.id.clone());
        assert_eq!(
            screen.confirmation.as_ref().map(|c| c.title),
            Some("Delete Routine")
        );
        screen.cancel_delete();
        screen.confirm_delete().await;
        assert_eq!(screen.routines, vec![routine.clone()]);

        screen.request_delete(routine.id.clone());
        screen.confirm_delete().await;
        assert_eq!(screen.routines, vec![]);
        assert_eq!(screen.confirmation, None);
        assert_eq!(screen.alert, None);
    }

    #[tokio::test]
    async fn test_delete_removed_by_other_screen() {
        let context = context();
        let routine = push_day(&context).await;
        let mut screen = RoutinesScreen::new(context.clone());
        screen.on_focus().await;
        context.domain.delete_routine(&routine.id).await.unwrap();

        screen.request_delete(routine.id.clone());
        screen.confirm_delete().await;
        assert_eq!(screen.alert, Some(Alert::error("Routine not found.")));
    }

    #[tokio::test]
    async fn test_navigation() {
        let context = context();
        let routine = push_day(&context).await;
        let screen = RoutinesScreen::new(context);
        let mut navigator = Navigator::new(Route::Routines);

        screen.open(&mut navigator, &routine);
        assert_eq!(
            navigator.current(),
            &Route::RoutineDetail {
                routine_id: routine.id.clone(),
                routine_name: "Push Day".to_string(),
            }
        );
        navigator.go_back();

        screen.edit(&mut navigator, &routine);
        assert_eq!(
            navigator.current(),
            &Route::AddRoutine {
                routine: Some(routine.clone())
            }
        );
        navigator.go_back();

        screen.add(&mut navigator);
        assert_eq!(navigator.current(), &Route::AddRoutine { routine: None });
        navigator.go_back();

        screen.start_workout(&mut navigator, &routine);
        assert_eq!(
            navigator.current(),
            &Route::Workout {
                routine: routine.clone()
            }
        );
    }
}
