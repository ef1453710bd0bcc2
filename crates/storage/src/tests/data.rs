use chrono::{Duration, Local, TimeZone};
use gymbook_domain as domain;

pub static ROUTINES: std::sync::LazyLock<Vec<domain::Routine>> =
    std::sync::LazyLock::new(|| vec![ROUTINE.clone(), ROUTINE_2.clone()]);

pub static ROUTINE: std::sync::LazyLock<domain::Routine> =
    std::sync::LazyLock::new(|| domain::Routine {
        id: "1697040000000".into(),
        name: domain::Name::new("Push Day").unwrap(),
        exercises: vec![EXERCISE.clone()],
    });

pub static ROUTINE_2: std::sync::LazyLock<domain::Routine> =
    std::sync::LazyLock::new(|| domain::Routine {
        id: "0190f5a4-3b1e-7c2a-9d4f-1a2b3c4d5e6f".into(),
        name: domain::Name::new("Pull Day").unwrap(),
        exercises: vec![EXERCISE_2.clone()],
    });

pub static EXERCISE: std::sync::LazyLock<domain::Exercise> =
    std::sync::LazyLock::new(|| domain::Exercise {
        id: "1697040000001".into(),
        name: domain::Name::new("Bench Press").unwrap(),
        sets: domain::Sets::new(3).unwrap(),
        reps: domain::Reps::new(10).unwrap(),
        weight: domain::Weight::new("60").unwrap(),
        youtube_link: Some("https://youtu.be/dQw4w9WgXcQ".to_string()),
    });

pub static EXERCISE_2: std::sync::LazyLock<domain::Exercise> =
    std::sync::LazyLock::new(|| domain::Exercise {
        id: "0190f5a4-3b1e-7c2a-9d4f-1a2b3c4d5e70".into(),
        name: domain::Name::new("Barbell Row").unwrap(),
        sets: domain::Sets::new(4).unwrap(),
        reps: domain::Reps::new(8).unwrap(),
        weight: domain::Weight::new("50-55 kg").unwrap(),
        youtube_link: None,
    });

pub static WORKOUT: std::sync::LazyLock<domain::Workout> =
    std::sync::LazyLock::new(|| domain::Workout {
        id: "0190f5a4-3b1e-7c2a-9d4f-1a2b3c4d5e71".into(),
        routine: ROUTINE.clone(),
        date: Local.with_ymd_and_hms(2024, 3, 1, 18, 30, 0).unwrap(),
        duration: Duration::seconds(2712),
    });
