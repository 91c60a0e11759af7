//! Filtre d'éligibilité unique, partagé par les deux stratégies.

use super::ScheduleOptions;
use crate::calendar::{self, WeekWindow};
use crate::model::{Person, Shift};
use chrono::NaiveDate;
use thiserror::Error;

/// Raison du rejet d'un candidat pour un jour donné.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Ineligibility {
    #[error("unavailable that day")]
    Unavailable,
    #[error("lifetime cap reached")]
    LifetimeCap,
    #[error("weekly cap reached")]
    WeeklyCap,
    #[error("worked the same weekend day a week apart")]
    ConsecutiveWeekend,
    #[error("weekend cap reached")]
    WeekendCap,
    #[error("too close to shift on {0}")]
    TooClose(NaiveDate),
    #[error("day already fully staffed")]
    DayFull,
}

/// Décompte des shifts d'une personne vus depuis `day`.
#[derive(Debug, Default)]
struct Tally {
    total: usize,
    in_week: usize,
    on_weekends: usize,
    week_apart: bool,
    nearest: Option<NaiveDate>,
    staffed_that_day: usize,
}

impl Tally {
    fn collect(person: &Person, day: NaiveDate, ledger: &[Shift], gap: i64) -> Self {
        let week = WeekWindow::containing(day);
        let mut tally = Self::default();
        for shift in ledger {
            if shift.date == day {
                tally.staffed_that_day += 1;
            }
            if !shift.is_for(&person.name) {
                continue;
            }
            let apart = calendar::days_apart(shift.date, day);
            tally.total += 1;
            if week.contains(shift.date) {
                tally.in_week += 1;
            }
            if calendar::is_weekend(shift.date) {
                tally.on_weekends += 1;
            }
            if apart == 7 {
                tally.week_apart = true;
            }
            if apart <= gap && tally.nearest.is_none() {
                tally.nearest = Some(shift.date);
            }
        }
        tally
    }
}

/// Vérifie qu'une personne peut être affectée à `day` compte tenu du
/// registre déjà engagé. Les tests suivent un ordre fixe et le premier
/// échec est renvoyé.
pub fn check(
    person: &Person,
    day: NaiveDate,
    ledger: &[Shift],
    opts: &ScheduleOptions,
) -> Result<(), Ineligibility> {
    if person.is_unavailable(day) {
        return Err(Ineligibility::Unavailable);
    }

    let limits = &opts.limits;
    let tally = Tally::collect(person, day, ledger, limits.min_gap_days);

    if tally.total >= limits.max_shifts_per_person {
        return Err(Ineligibility::LifetimeCap);
    }
    if tally.in_week >= limits.max_shifts_per_week {
        return Err(Ineligibility::WeeklyCap);
    }
    if calendar::is_weekend(day) {
        if tally.week_apart {
            return Err(Ineligibility::ConsecutiveWeekend);
        }
        if tally.on_weekends >= limits.max_weekend_shifts {
            return Err(Ineligibility::WeekendCap);
        }
    }
    if let Some(other) = tally.nearest {
        return Err(Ineligibility::TooClose(other));
    }
    if tally.staffed_that_day >= opts.max_per_day {
        return Err(Ineligibility::DayFull);
    }
    Ok(())
}

/// Candidats éligibles pour `day`, dans l'ordre du roster.
pub fn eligible_people<'a>(
    people: &'a [Person],
    day: NaiveDate,
    ledger: &[Shift],
    opts: &ScheduleOptions,
) -> Vec<&'a Person> {
    people
        .iter()
        .filter(|person| match check(person, day, ledger, opts) {
            Ok(()) => true,
            Err(_reason) => {
                #[cfg(feature = "logging")]
                tracing::trace!(person = %person.name, %day, reason = %_reason, "not eligible");
                false
            }
        })
        .collect()
}
