//! Outils calendaires partagés : semaines du lundi au dimanche, week-end =
//! samedi + dimanche, vendredi hors des deux catégories.

use chrono::{Datelike, Duration, NaiveDate};

/// Classe d'un jour pour les plafonds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DayClass {
    /// Lundi à jeudi.
    Weekday,
    /// Ni semaine ni week-end.
    Friday,
    /// Samedi, dimanche : soumis au plafond week-end.
    Weekend,
}

/// Indexé par `num_days_from_monday()`.
const DAY_CLASSES: [DayClass; 7] = [
    DayClass::Weekday,
    DayClass::Weekday,
    DayClass::Weekday,
    DayClass::Weekday,
    DayClass::Friday,
    DayClass::Weekend,
    DayClass::Weekend,
];

pub fn classify(date: NaiveDate) -> DayClass {
    DAY_CLASSES[date.weekday().num_days_from_monday() as usize]
}

pub fn is_weekend(date: NaiveDate) -> bool {
    classify(date) == DayClass::Weekend
}

/// Semaine lundi → dimanche (bornes incluses).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WeekWindow {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl WeekWindow {
    pub fn containing(date: NaiveDate) -> Self {
        let offset = i64::from(date.weekday().num_days_from_monday());
        let start = date - Duration::days(offset);
        Self {
            start,
            end: start + Duration::days(6),
        }
    }

    pub fn previous(&self) -> Self {
        self.shifted(-7)
    }

    pub fn next(&self) -> Self {
        self.shifted(7)
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }

    fn shifted(&self, days: i64) -> Self {
        Self {
            start: self.start + Duration::days(days),
            end: self.end + Duration::days(days),
        }
    }
}

/// Tous les jours de `[start, end]`, dans l'ordre. Vide si `end < start`.
pub fn days_inclusive(start: NaiveDate, end: NaiveDate) -> Vec<NaiveDate> {
    let mut out = Vec::new();
    let mut current = start;
    while current <= end {
        out.push(current);
        match current.succ_opt() {
            Some(next) => current = next,
            None => break,
        }
    }
    out
}

/// Écart absolu en jours.
pub fn days_apart(a: NaiveDate, b: NaiveDate) -> i64 {
    (a - b).num_days().abs()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn week_window_starts_monday() {
        // 2024-07-07 est un dimanche
        let w = WeekWindow::containing(d(2024, 7, 7));
        assert_eq!(w.start, d(2024, 7, 1));
        assert_eq!(w.end, d(2024, 7, 7));
        assert_eq!(w.previous().start, d(2024, 6, 24));
        assert_eq!(w.next().end, d(2024, 7, 14));
        assert!(w.contains(d(2024, 7, 1)));
        assert!(!w.contains(d(2024, 7, 8)));
    }

    #[test]
    fn friday_is_not_weekend() {
        assert_eq!(classify(d(2024, 7, 4)), DayClass::Weekday);
        assert_eq!(classify(d(2024, 7, 5)), DayClass::Friday);
        assert!(is_weekend(d(2024, 7, 6)));
        assert!(is_weekend(d(2024, 7, 7)));
        assert!(!is_weekend(d(2024, 7, 5)));
    }

    #[test]
    fn inclusive_range() {
        assert_eq!(days_inclusive(d(2024, 2, 27), d(2024, 3, 1)).len(), 4);
        assert_eq!(days_inclusive(d(2024, 3, 1), d(2024, 3, 1)).len(), 1);
        assert!(days_inclusive(d(2024, 3, 2), d(2024, 3, 1)).is_empty());
        assert_eq!(days_apart(d(2024, 3, 1), d(2024, 2, 27)), 3);
    }
}
