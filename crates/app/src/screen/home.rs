use crate::{Navigator, Route};

#[derive(Debug, Default)]
pub struct HomeScreen;

impl HomeScreen {
    pub fn open_routines(&self, navigator: &mut Navigator) {
        navigator.navigate(Route::Routines);
    }

    pub fn open_workout_history(&self, navigator: &mut Navigator) {
        navigator.navigate(Route::WorkoutHistory);
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_navigation() {
        let mut navigator = Navigator::default();
        HomeScreen.open_routines(&mut navigator);
        assert_eq!(navigator.current(), &Route::Routines);
        navigator.go_back();
        HomeScreen.open_workout_history(&mut navigator);
        assert_eq!(navigator.current(), &Route::WorkoutHistory);
    }
}
