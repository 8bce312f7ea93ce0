use serde::Serialize;

pub const DAY_COUNT: u8 = 5;

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct Exercise {
    pub name: &'static str,
    pub sets: &'static str,
    pub video: &'static str,
}

const fn exercise(name: &'static str, sets: &'static str, video: &'static str) -> Exercise {
    Exercise { name, sets, video }
}

const DAY_1: &[Exercise] = &[
    exercise("Sentadilla con barra", "4x8-10", "https://www.youtube.com/watch?v=Dy28eq2PjcM"),
    exercise("Peso muerto rumano", "4x10", "https://www.youtube.com/watch?v=2SHsk9AzdjA"),
    exercise("Hip thrust", "4x12", "https://www.youtube.com/watch?v=yM3lCdQBGmA"),
    exercise("Estocadas", "3x12 por pierna", "https://www.youtube.com/watch?v=QOVaHwm-Q6U"),
    exercise("Abducción en máquina", "3x15", "https://www.youtube.com/watch?v=YaZ3dWfUQcQ"),
];

const DAY_2: &[Exercise] = &[
    exercise(
        "Press banca plano con mancuernas",
        "4x8-10",
        "https://www.youtube.com/watch?v=VmB1G1K7v94",
    ),
    exercise("Press militar sentado", "4x10", "https://www.youtube.com/watch?v=B-aVuyhvLHU"),
    exercise("Extensión de tríceps", "3x12", "https://www.youtube.com/watch?v=YbX7Wd8jQ-Q"),
    exercise("Aperturas en banco inclinado", "3x12", "https://www.youtube.com/watch?v=eozdVDA78K0"),
    exercise("Plancha frontal", "3x40s", "https://www.youtube.com/watch?v=pSHjTRCQxIw"),
];

const DAY_3: &[Exercise] = &[
    exercise("Hack squat", "4x8-10", "https://www.youtube.com/watch?v=EdtaJRBqkls"),
    exercise("Prensa inclinada", "4x12", "https://www.youtube.com/watch?v=IZxyjW7MPJQ"),
    exercise("Búlgaras", "3x10 por pierna", "https://www.youtube.com/watch?v=2C-uNgKwPLE"),
    exercise("Extensiones de cuádriceps", "3x15", "https://www.youtube.com/watch?v=YyvSfVjQeL0"),
    exercise("Gemelos de pie en máquina", "4x15-20", "https://www.youtube.com/watch?v=3jgzM5cUzT8"),
];

const DAY_4: &[Exercise] = &[
    exercise("Jalón al pecho", "4x8-10", "https://www.youtube.com/watch?v=CAwf7n6Luuc"),
    exercise("Remo con polea", "4x10", "https://www.youtube.com/watch?v=UCXxvVItLoM"),
    exercise("Face pull", "3x15", "https://www.youtube.com/watch?v=rep-qVOkqgk"),
    exercise("Curl bíceps mancuernas", "3x12", "https://www.youtube.com/watch?v=ykJmrZ5v0Oo"),
    exercise("Superman en colchoneta", "3x15", "https://www.youtube.com/watch?v=cc6UVRS7PW4"),
];

const DAY_5: &[Exercise] = &[
    exercise("Peso muerto sumo", "4x6-8", "https://www.youtube.com/watch?v=LGIS9vs65Sk"),
    exercise("Hip thrust pesado", "4x8-10", "https://www.youtube.com/watch?v=yM3lCdQBGmA"),
    exercise("Step-ups en banco", "3x12 por pierna", "https://www.youtube.com/watch?v=dQqApCGd5Ss"),
    exercise("Abducción en polea", "3x15 cada uno", "https://www.youtube.com/watch?v=YaZ3dWfUQcQ"),
];

/// Exercises for a routine day (1-based). Unknown days have none.
pub fn day(day: u8) -> &'static [Exercise] {
    match day {
        1 => DAY_1,
        2 => DAY_2,
        3 => DAY_3,
        4 => DAY_4,
        5 => DAY_5,
        _ => &[],
    }
}

pub fn is_valid_day(day: u8) -> bool {
    (1..=DAY_COUNT).contains(&day)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn five_days_of_four_or_five_exercises() {
        for d in 1..=DAY_COUNT {
            let exercises = day(d);
            assert!(
                (4..=5).contains(&exercises.len()),
                "day {d} has {} exercises",
                exercises.len()
            );
        }
    }

    #[test]
    fn out_of_range_days_are_empty() {
        assert!(day(0).is_empty());
        assert!(day(6).is_empty());
        assert!(!is_valid_day(0));
        assert!(is_valid_day(5));
    }

    #[test]
    fn every_exercise_links_a_video() {
        for d in 1..=DAY_COUNT {
            for exercise in day(d) {
                assert!(exercise.video.starts_with("https://"));
                assert!(!exercise.sets.is_empty());
            }
        }
    }
}
