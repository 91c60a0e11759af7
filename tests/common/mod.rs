#![allow(dead_code)]
use chrono::{Datelike, NaiveDate, Weekday};
use permanence::{Person, Shift};

pub const NAMES: [&str; 20] = [
    "Ani", "Rene", "Anto", "Euge", "Cami", "Agus", "Aye", "Nay", "Loli", "Mari", "Maru", "Jose",
    "Ger", "Santi", "Juli", "Maca", "Flor", "Lucho", "Vicky", "Tomi",
];

pub fn d(y: i32, m: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, day).unwrap()
}

pub fn team(n: usize) -> Vec<Person> {
    NAMES.iter().take(n).map(|name| Person::new(name)).collect()
}

pub fn staffed(shifts: &[Shift], day: NaiveDate) -> usize {
    shifts.iter().filter(|s| s.date == day).count()
}

/// Vérification indépendante des invariants individuels.
pub fn assert_invariants(people: &[Person], shifts: &[Shift]) {
    for person in people {
        let mut dates: Vec<NaiveDate> = shifts
            .iter()
            .filter(|s| s.person == person.name)
            .map(|s| s.date)
            .collect();
        dates.sort();

        assert!(dates.len() <= 8, "{} has {} shifts", person.name, dates.len());
        for pair in dates.windows(2) {
            assert!(
                (pair[1] - pair[0]).num_days() > 2,
                "{} works {} and {}",
                person.name,
                pair[0],
                pair[1]
            );
        }
        for date in &dates {
            let monday = *date - chrono::Duration::days(i64::from(date.weekday().num_days_from_monday()));
            let same_week = dates
                .iter()
                .filter(|other| **other >= monday && (**other - monday).num_days() < 7)
                .count();
            assert!(same_week <= 2, "{} has {same_week} shifts in week of {monday}", person.name);
            assert!(!person.is_unavailable(*date), "{} scheduled while unavailable on {date}", person.name);
        }
        let weekends = dates
            .iter()
            .filter(|d| matches!(d.weekday(), Weekday::Sat | Weekday::Sun))
            .count();
        assert!(weekends <= 3, "{} has {weekends} weekend shifts", person.name);
    }
}
