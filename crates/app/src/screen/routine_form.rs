use std::rc::Rc;

use gymbook_domain::{self as domain, RoutineService};
use gymbook_storage::KeyValueStore;

use crate::{
    Context, Navigator,
    screen::{Alert, IntoAlert},
};

/// Creates a routine, or renames an existing one.
pub struct RoutineFormScreen<S> {
    context: Rc<Context<S>>,
    routine_id: Option<domain::RoutineID>,
    pub name: String,
    pub alert: Option<Alert>,
}

impl<S: KeyValueStore> RoutineFormScreen<S> {
    pub fn new(context: Rc<Context<S>>, routine: Option<domain::Routine>) -> Self {
        let (routine_id, name) = match routine {
            Some(routine) => (Some(routine.id), routine.name.into()),
            None => (None, String::new()),
        };
        Self {
            context,
            routine_id,
            name,
            alert: None,
        }
    }

    #[must_use]
    pub fn title(&self) -> &'static str {
        if self.routine_id.is_some() {
            "Edit Routine"
        } else {
            "New Routine"
        }
    }

    #[must_use]
    pub fn button_label(&self) -> &'static str {
        if self.routine_id.is_some() {
            "Update"
        } else {
            "Save"
        }
    }

    /// Returns to the previous screen if the routine was saved.
    pub async fn save(&mut self, navigator: &mut Navigator) {
        let name = match self.context.domain.validate_routine_name(&self.name) {
            Ok(name) => name,
            Err(err) => {
                self.alert = Some(err.into_alert("save routine"));
                return;
            }
        };
        let result = match &self.routine_id {
            Some(id) => self
                .context
                .domain
                .rename_routine(id, name)
                .await
                .map_err(|err| err.into_alert("save routine")),
            None => self
                .context
                .domain
                .create_routine(name)
                .await
                .map_err(|err| err.into_alert("save routine")),
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

#[cfg(test)]
mod tests {
    use gymbook_domain::RoutineRepository;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use crate::{
        Route,
        screen::tests::{UnavailableStore, context, push_day},
    };

    use super::*;

    fn navigator() -> Navigator {
        let mut navigator = Navigator::new(Route::Routines);
        navigator.navigate(Route::AddRoutine { routine: None });
        navigator
    }

    #[tokio::test]
    async fn test_create() {
        let context = context();
        let mut screen = RoutineFormScreen::new(context.clone(), None);
        let mut navigator = navigator();
        assert_eq!(screen.title(), "New Routine");
        assert_eq!(screen.button_label(), "Save");

        screen.name = " Push Day ".to_string();
        screen.save(&mut navigator).await;

        assert_eq!(screen.alert, None);
        assert_eq!(navigator.current(), &Route::Routines);
        let routines = context.domain.repository().load_all().await.unwrap();
        assert_eq!(routines.len(), 1);
        assert_eq!(routines[0].name.as_str(), "Push Day");
        assert_eq!(routines[0].exercises, vec![]);
    }

    #[tokio::test]
    async fn test_rename() {
        let context = context();
        let routine = push_day(&context).await;
        let mut screen = RoutineFormScreen::new(context.clone(), Some(routine.clone()));
        let mut navigator = navigator();
        assert_eq!(screen.title(), "Edit Routine");
        assert_eq!(screen.button_label(), "Update");
        assert_eq!(screen.name, "Push Day");

        screen.name = "Chest Day".to_string();
        screen.save(&mut navigator).await;

        assert_eq!(navigator.current(), &Route::Routines);
        assert_eq!(
            context.domain.repository().load_all().await.unwrap(),
            vec![domain::Routine {
                name: domain::Name::new("Chest Day").unwrap(),
                ..routine
            }]
        );
    }

    #[rstest]
    #[case("")]
    #[case("   ")]
    #[tokio::test]
    async fn test_save_empty_name(#[case] name: &str) {
        let context = context();
        let mut screen = RoutineFormScreen::new(context.clone(), None);
        let mut navigator = navigator();
        screen.name = name.to_string();
        screen.save(&mut navigator).await;

        assert_eq!(screen.alert, Some(Alert::error("Name must not be empty.")));
        assert_eq!(navigator.current(), &Route::AddRoutine { routine: None });
        assert_eq!(context.domain.repository().load_all().await.unwrap(), vec![]);
    }

    #[tokio::test]
    async fn test_save_unavailable() {
        let mut screen = RoutineFormScreen::new(Rc::new(Context::new(UnavailableStore)), None);
        let mut navigator = navigator();
        screen.name = "Push Day".to_string();
        screen.save(&mut navigator).await;

        assert_eq!(
            screen.alert,
            Some(Alert::error("Failed to save routine. storage unavailable"))
        );
        assert_eq!(navigator.current(), &Route::AddRoutine { routine: None });
    }

    #[tokio::test]
    async fn test_rename_deleted() {
        let context = context();
        let routine = push_day(&context).await;
        let mut screen = RoutineFormScreen::new(context.clone(), Some(routine.clone()));
        let mut navigator = navigator();
        context.domain.delete_routine(&routine.id).await.unwrap();

        screen.save(&mut navigator).await;

        assert_eq!(screen.alert, Some(Alert::error("Routine not found.")));
        assert_eq!(context.domain.repository().load_all().await.unwrap(), vec![]);
    }
}
