use std::{
    rc::Rc,
    sync::{Arc, Mutex},
    time::Duration,
};

use chrono::{DateTime, Local};
use gymbook_domain::{self as domain, WorkoutService};
use gymbook_storage::KeyValueStore;
use log::debug;
use tokio::{
    sync::oneshot,
    time::{self, Instant},
};

use crate::{
    Context, Navigator, Route, SettingsService, WeightUnit,
    screen::{Alert, IntoAlert},
};

const TICK: Duration = Duration::from_secs(1);

/// An ongoing workout.
///
/// The stopwatch is advanced by a background task once per second until the workout is finished,
/// cancelled or the screen is dropped.
pub struct WorkoutScreen<S> {
    context: Rc<Context<S>>,
    pub routine: domain::Routine,
    pub start: DateTime<Local>,
    pub weight_unit: WeightUnit,
    pub alert: Option<Alert>,
    stopwatch: Arc<Mutex<domain::Stopwatch>>,
    stop: Option<oneshot::Sender<()>>,
}

impl<S: KeyValueStore> WorkoutScreen<S> {
    /// Must be called within a tokio runtime.
    pub fn new(context: Rc<Context<S>>, routine: domain::Routine) -> Self {
        let stopwatch = Arc::new(Mutex::new(domain::Stopwatch::new()));
        let stop = spawn_ticker(stopwatch.clone());
        Self {
            context,
            routine,
            start: Local::now(),
            weight_unit: WeightUnit::Kilogram,
            alert: None,
            stopwatch,
            stop: Some(stop),
        }
    }

    pub async fn on_focus(&mut self) {
        match self.context.app.get_settings().await {
            Ok(settings) => self.weight_unit = settings.weight_unit,
            Err(err) => self.alert = Some(err.into_alert("load settings")),
        }
    }

    #[must_use]
    pub fn stopwatch(&self) -> domain::Stopwatch {
        self.stopwatch
            .lock()
            .map(|stopwatch| *stopwatch)
            .unwrap_or_default()
    }

    /// Elapsed time as `MM:SS`.
    #[must_use]
    pub fn elapsed(&self) -> String {
        self.stopwatch().display()
    }

    pub fn pause(&self) {
        if let Ok(mut stopwatch) = self.stopwatch.lock() {
            stopwatch.pause();
        }
    }

    pub fn resume(&self) {
        if let Ok(mut stopwatch) = self.stopwatch.lock() {
            stopwatch.resume();
        }
    }

    #[must_use]
    pub fn exercise_lines(&self) -> Vec<String> {
        self.routine
            .exercises
            .iter()
            .map(|exercise| {
                format!(
                    "{}: {} sets x {} reps @ {} {}",
                    exercise.name,
                    exercise.sets,
                    exercise.reps,
                    exercise.weight,
                    self.weight_unit.symbol()
                )
            })
            .collect()
    }

    /// Records the workout and returns to the home screen.
    ///
    /// The stopwatch keeps running if the workout could not be recorded.
    pub async fn finish(&mut self, navigator: &mut Navigator) {
        let workout = domain::Workout::finish(self.routine.clone(), self.start, &self.stopwatch());
        match self.context.domain.record_workout(workout).await {
            Ok(workout) => {
                debug!(
                    "finished workout {} after {}",
                    workout.id,
                    self.elapsed()
                );
                self.stop_ticker();
                navigator.reset_to(Route::Home);
            }
            Err(err) => self.alert = Some(err.into_alert("save workout")),
        }
    }

    pub fn cancel(&mut self, navigator: &mut Navigator) {
        self.stop_ticker();
        navigator.go_back();
    }

    fn stop_ticker(&mut self) {
        if let Some(stop) = self.stop.take() {
            let _ = stop.send(());
        }
        self.pause();
    }
}

fn spawn_ticker(stopwatch: Arc<Mutex<domain::Stopwatch>>) -> oneshot::Sender<()> {
    let (stop, mut stopped) = oneshot::channel();
    tokio::spawn(async move {
        let mut interval = time::interval_at(Instant::now() + TICK, TICK);
        loop {
            tokio::select! {
                _ = &mut stopped => break,
                _ = interval.tick() => {
                    if let Ok(mut stopwatch) = stopwatch.lock() {
                        stopwatch.tick();
                    }
                }
            }
        }
    });
    stop
}
