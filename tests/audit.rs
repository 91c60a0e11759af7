#![forbid(unsafe_code)]
mod common;

use common::d;
use permanence::{audit, Person, ScheduleOptions, Shift, ViolationKind};

#[test]
fn audit_reports_each_broken_invariant() {
    let ani = Person::new("Ani").unavailable_on([d(2024, 7, 10)]);
    let bob = Person::new("Bob");
    let cami = Person::new("Cami");
    let dora = Person::new("Dora");
    let euge = Person::new("Euge");
    let flor = Person::new("Flor");

    let mut ledger = vec![
        Shift::new(d(2024, 7, 10), &ani),
        Shift::new(d(2024, 7, 1), &bob),
        Shift::new(d(2024, 7, 1), &bob),
        Shift::new(d(2024, 7, 7), &cami),
        Shift::new(d(2024, 7, 1), &cami),
        Shift::new(d(2024, 7, 4), &cami),
        Shift::new(d(2024, 6, 8), &dora),
        Shift::new(d(2024, 6, 16), &dora),
        Shift::new(d(2024, 6, 22), &dora),
        Shift::new(d(2024, 6, 30), &dora),
        Shift::new(d(2024, 6, 29), &euge),
        Shift::new(d(2024, 7, 6), &euge),
    ];
    ledger.extend((0..9).map(|k| Shift::new(d(2024, 6, 1) + chrono::Duration::days(4 * k), &flor)));

    let people = vec![ani, bob, cami, dora, euge, flor];
    let found: Vec<(String, _, ViolationKind)> = audit(&people, &ledger, &ScheduleOptions::default())
        .into_iter()
        .map(|v| (v.person.to_string(), v.date, v.kind))
        .collect();

    assert_eq!(
        found,
        vec![
            ("Ani".to_string(), d(2024, 7, 10), ViolationKind::Unavailable),
            ("Bob".to_string(), d(2024, 7, 1), ViolationKind::DuplicateAssignment),
            ("Cami".to_string(), d(2024, 7, 7), ViolationKind::WeeklyCap),
            ("Dora".to_string(), d(2024, 6, 30), ViolationKind::WeekendCap),
            ("Euge".to_string(), d(2024, 7, 6), ViolationKind::ConsecutiveWeekend),
            ("Flor".to_string(), d(2024, 7, 3), ViolationKind::LifetimeCap),
        ]
    );
}

#[test]
fn audit_flags_close_shifts() {
    let ani = Person::new("Ani");
    let ledger = vec![
        Shift::new(d(2024, 7, 1), &ani),
        Shift::new(d(2024, 7, 3), &ani),
    ];
    let found = audit(&[ani], &ledger, &ScheduleOptions::default());
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].kind, ViolationKind::TooClose);
    assert_eq!(found[0].date, d(2024, 7, 3));
    assert_eq!(found[0].kind.as_str(), "too-close");
}

#[test]
fn clean_ledger_has_no_violation() {
    let ani = Person::new("Ani");
    let ledger = vec![
        Shift::new(d(2024, 7, 1), &ani),
        Shift::new(d(2024, 7, 4), &ani),
        Shift::new(d(2024, 7, 8), &ani),
    ];
    assert!(audit(&[ani], &ledger, &ScheduleOptions::default()).is_empty());
}
