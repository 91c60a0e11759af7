use super::{SchedError, ScheduleOptions, Violation, ViolationKind};
use crate::calendar::{self, WeekWindow};
use crate::model::{Person, PersonName, Shift};
use chrono::NaiveDate;
use std::collections::BTreeMap;

/// Validation globale d'un planning terminé.
///
/// Les effectifs sont recomptés à partir du registre complet.
pub fn check_staffing(
    days: &[NaiveDate],
    ledger: &[Shift],
    opts: &ScheduleOptions,
) -> Result<(), SchedError> {
    let mut understaffed = 0usize;

    for &day in days {
        let assigned = ledger.iter().filter(|s| s.date == day).count();
        if assigned < opts.staffing_floor {
            return Err(SchedError::InsufficientStaffing {
                date: day,
                assigned,
                required: opts.staffing_floor,
            });
        }
        if assigned < opts.max_per_day {
            understaffed += 1;
        }
    }

    if understaffed > opts.max_understaffed_days {
        return Err(SchedError::TooManyUnderstaffedDays {
            count: understaffed,
            allowed: opts.max_understaffed_days,
        });
    }
    Ok(())
}

/// Détecte a posteriori les invariants individuels violés dans `ledger`.
pub fn audit(people: &[Person], ledger: &[Shift], opts: &ScheduleOptions) -> Vec<Violation> {
    let limits = &opts.limits;
    let mut by_person: BTreeMap<&PersonName, Vec<NaiveDate>> = BTreeMap::new();
    for shift in ledger {
        by_person.entry(&shift.person).or_default().push(shift.date);
    }

    let mut out = Vec::new();
    for (name, dates) in by_person.iter_mut() {
        dates.sort();
        let person = people.iter().find(|p| &p.name == *name);
        let mut flag = |date: NaiveDate, kind: ViolationKind| {
            out.push(Violation {
                person: (*name).clone(),
                date,
                kind,
            });
        };

        if let Some(person) = person {
            for &date in dates.iter().filter(|d| person.is_unavailable(**d)) {
                flag(date, ViolationKind::Unavailable);
            }
        }

        for &date in dates.iter().skip(limits.max_shifts_per_person) {
            flag(date, ViolationKind::LifetimeCap);
        }

        let mut per_week: BTreeMap<NaiveDate, usize> = BTreeMap::new();
        let mut weekends = 0usize;
        for (idx, &date) in dates.iter().enumerate() {
            let week = per_week.entry(WeekWindow::containing(date).start).or_default();
            *week += 1;
            if *week > limits.max_shifts_per_week {
                flag(date, ViolationKind::WeeklyCap);
            }

            if calendar::is_weekend(date) {
                weekends += 1;
                if weekends > limits.max_weekend_shifts {
                    flag(date, ViolationKind::WeekendCap);
                }
                if dates[..idx].iter().any(|d| calendar::days_apart(*d, date) == 7) {
                    flag(date, ViolationKind::ConsecutiveWeekend);
                }
            }

            if let Some(&prev) = idx.checked_sub(1).and_then(|i| dates.get(i)) {
                let gap = calendar::days_apart(prev, date);
                if gap == 0 {
                    flag(date, ViolationKind::DuplicateAssignment);
                } else if gap <= limits.min_gap_days {
                    flag(date, ViolationKind::TooClose);
                }
            }
        }
    }
    out
}
