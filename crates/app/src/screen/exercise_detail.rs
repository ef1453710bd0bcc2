use std::rc::Rc;

use gymbook_domain::{self as domain, RoutineService};
use gymbook_storage::KeyValueStore;

use crate::{
    Context, SettingsService,
    screen::{Alert, Content, IntoAlert},
};

pub struct ExerciseDetailScreen<S> {
    context: Rc<Context<S>>,
    routine_id: domain::RoutineID,
    exercise_id: domain::ExerciseID,
    pub title: String,
    pub exercise: Content<domain::Exercise>,
    pub autoplay: bool,
    pub alert: Option<Alert>,
}

impl<S: KeyValueStore> ExerciseDetailScreen<S> {
    pub fn new(
        context: Rc<Context<S>>,
        routine_id: domain::RoutineID,
        exercise_id: domain::ExerciseID,
        exercise_name: String,
    ) -> Self {
        Self {
            context,
            routine_id,
            exercise_id,
            title: exercise_name,
            exercise: Content::Loading,
            autoplay: false,
            alert: None,
        }
    }

    pub async fn on_focus(&mut self) {
        match self
            .context
            .domain
            .get_exercise(&self.routine_id, &self.exercise_id)
            .await
        {
            Ok(exercise) => self.exercise = exercise.into(),
            Err(err) => {
                self.alert = Some(err.into_alert("load exercise"));
                return;
            }
        }
        match self.context.app.get_settings().await {
            Ok(settings) => self.autoplay = settings.autoplay_video,
            Err(err) => self.alert = Some(err.into_alert("load settings")),
        }
    }

    /// The video to show in the player, if the exercise links to one.
    #[must_use]
    pub fn video_id(&self) -> Option<domain::VideoID> {
        self.exercise.ready().and_then(domain::Exercise::video_id)
    }

    /// Source of the embedded player, starting playback right away if autoplay is enabled.
    #[must_use]
    pub fn player_url(&self) -> Option<String> {
        self.video_id().map(|id| {
            if self.autoplay {
                format!("{}?autoplay=1", id.embed_url())
            } else {
                id.embed_url()
            }
        })
    }

    /// Link for opening the video outside the app.
    #[must_use]
    pub fn watch_url(&self) -> Option<String> {
        self.video_id().map(|id| id.watch_url())
    }

    #[must_use]
    pub fn details(&self) -> Vec<(&'static str, String)> {
        self.exercise
            .ready()
            .map(|exercise| {
                vec![
                    ("Sets", exercise.sets.to_string()),
                    ("Reps", exercise.reps.to_string()),
                    ("Weight", exercise.weight.to_string()),
                ]
            })
            .unwrap_or_default()
    }

    /// Called by the player if the video cannot be played.
    pub fn on_video_error(&mut self) {
        self.alert = Some(Alert::error("Failed to load video."));
    }
}
