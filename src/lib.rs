#![forbid(unsafe_code)]
//! Permanence — génération de plannings de permanences quotidiennes.
//!
//! - Passe gloutonne jour par jour, sans retour arrière.
//! - Plafonds par personne (total, semaine, week-end) et écart minimal.
//! - Aléa injectable : même graine, même planning.
//! - Stockage fichiers (JSON/CSV), sans base de données.

pub mod calendar;
#[cfg(feature = "serde")]
pub mod io;
pub mod model;
pub mod rng;
pub mod scheduler;
#[cfg(feature = "serde")]
pub mod storage;

pub use model::{Condition, Person, PersonName, Roster, RosterError, Rule, Shift};
pub use scheduler::{
    audit, check_eligibility, schedule_range, schedule_range_with, schedule_until_feasible,
    select_for_day, select_for_person, DayByDay, Generated, Ineligibility, Limits,
    PersonByPerson, SchedError, ScheduleOptions, Scheduler, Strategy, StrategyKind, Violation,
    ViolationKind,
};
#[cfg(feature = "serde")]
pub use storage::{JsonStorage, Storage};
