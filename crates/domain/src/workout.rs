use chrono::{DateTime, Duration, Local};
use derive_more::{Deref, Display};
use uuid::Uuid;

use crate::{CreateError, ReadError, Routine};

#[allow(async_fn_in_trait)]
pub trait WorkoutService {
    async fn get_workouts(&self) -> Result<Vec<Workout>, ReadError>;
    async fn record_workout(&self, workout: Workout) -> Result<Workout, CreateError>;
}

#[allow(async_fn_in_trait)]
pub trait WorkoutRepository {
    async fn read_workouts(&self) -> Result<Vec<Workout>, ReadError>;
    async fn create_workout(&self, workout: Workout) -> Result<Workout, CreateError>;
}

/// A performed routine.
#[derive(Debug, Clone, PartialEq)]
pub struct Workout {
    pub id: WorkoutID,
    pub routine: Routine,
    pub date: DateTime<Local>,
    pub duration: Duration,
}

impl Workout {
    #[must_use]
    pub fn finish(routine: Routine, date: DateTime<Local>, stopwatch: &Stopwatch) -> Self {
        Self {
            id: WorkoutID::generate(),
            routine,
            date,
            duration: stopwatch.elapsed(),
        }
    }
}

#[derive(Deref, Display, Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct WorkoutID(String);

impl WorkoutID {
    #[must_use]
    pub fn generate() -> Self {
        Self(Uuid::now_v7().to_string())
    }
}

impl From<&str> for WorkoutID {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for WorkoutID {
    fn from(value: String) -> Self {
        Self(value)
    }
}

/// Elapsed time of an ongoing workout, advanced by one second per tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stopwatch {
    seconds: u32,
    active: bool,
}

impl Default for Stopwatch {
    fn default() -> Self {
        Self::new()
    }
}

impl Stopwatch {
    #[must_use]
    pub fn new() -> Self {
        Self {
            seconds: 0,
            active: true,
        }
    }

    pub fn tick(&mut self) {
        if self.active {
            self.seconds = self.seconds.saturating_add(1);
        }
    }

    pub fn pause(&mut self) {
        self.active = false;
    }

    pub fn resume(&mut self) {
        self.active = true;
    }

    #[must_use]
    pub fn is_active(&self) -> bool {
        self.active
    }

    #[must_use]
    pub fn seconds(&self) -> u32 {
        self.seconds
    }

    #[must_use]
    pub fn elapsed(&self) -> Duration {
        Duration::seconds(i64::from(self.seconds))
    }

    #[must_use]
    pub fn display(&self) -> String {
        format_duration(self.elapsed())
    }
}

/// `MM:SS`, minutes are not wrapped into hours. Negative durations count as zero.
#[must_use]
pub fn format_duration(duration: Duration) -> String {
    let seconds = duration.num_seconds().max(0);
    format!("{:02}:{:02}", seconds / 60, seconds % 60)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use crate::{Exercise, ExerciseID, Name, Reps, RoutineID, Sets, Weight};

    use super::*;

    fn stopwatch(seconds: u32) -> Stopwatch {
        Stopwatch {
            seconds,
            active: true,
        }
    }

    #[rstest]
    #[case(0, "00:00")]
    #[case(9, "00:09")]
    #[case(65, "01:05")]
    #[case(3599, "59:59")]
    #[case(6000, "100:00")]
    fn test_stopwatch_display(#[case] seconds: u32, #[case] expected: &str) {
        assert_eq!(stopwatch(seconds).display(), expected);
    }

    #[rstest]
    #[case(Duration::seconds(0), "00:00")]
    #[case(Duration::seconds(754), "12:34")]
    #[case(Duration::milliseconds(65_900), "01:05")]
    #[case(Duration::seconds(-5), "00:00")]
    fn test_format_duration(#[case] duration: Duration, #[case] expected: &str) {
        assert_eq!(format_duration(duration), expected);
    }

    #[test]
    fn test_stopwatch_tick() {
        let mut stopwatch = Stopwatch::new();
        assert!(stopwatch.is_active());
        stopwatch.tick();
        stopwatch.tick();
        stopwatch.pause();
        stopwatch.tick();
        assert_eq!(stopwatch.seconds(), 2);
        stopwatch.resume();
        stopwatch.tick();
        assert_eq!(stopwatch.elapsed(), Duration::seconds(3));
    }

    #[test]
    fn test_workout_finish() {
        let routine = Routine {
            id: RoutineID::from("1"),
            name: Name::new("Push Day").unwrap(),
            exercises: vec![
                Exercise {
                    id: ExerciseID::from("2"),
                    name: Name::new("Bench Press").unwrap(),
                    sets: Sets::new(3).unwrap(),
                    reps: Reps::new(10).unwrap(),
                    weight: Weight::new("60").unwrap(),
                    youtube_link: None,
                },
                Exercise {
                    id: ExerciseID::from("3"),
                    name: Name::new("Push-up").unwrap(),
                    sets: Sets::new(3).unwrap(),
                    reps: Reps::new(20).unwrap(),
                    weight: Weight::new("bodyweight").unwrap(),
                    youtube_link: None,
                },
            ],
        };
        let date = Local::now();
        let workout = Workout::finish(routine.clone(), date, &stopwatch(754));
        assert_eq!(workout.routine, routine);
        assert_eq!(workout.date, date);
        assert_eq!(workout.duration, Duration::seconds(754));
    }
}
