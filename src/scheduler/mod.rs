mod day;
mod eligibility;
mod person;
mod types;
mod validate;

pub use day::{select_for_day, DayByDay};
pub use eligibility::{check as check_eligibility, eligible_people, Ineligibility};
pub use person::{select_for_person, PersonByPerson};
pub use types::{Limits, SchedError, ScheduleOptions, Violation, ViolationKind};
pub use validate::{audit, check_staffing};

use crate::calendar;
use crate::model::{Person, Roster, Shift};
use crate::rng;
use chrono::NaiveDate;
use rand::RngCore;
use std::fmt;
use std::str::FromStr;

/// Façon de remplir le registre sur une période. Les contraintes viennent
/// toutes de [`check_eligibility`].
pub trait Strategy: fmt::Debug {
    fn name(&self) -> &'static str;

    fn fill(
        &self,
        people: &[Person],
        days: &[NaiveDate],
        opts: &ScheduleOptions,
        rng: &mut dyn RngCore,
        ledger: &mut Vec<Shift>,
    ) -> Result<(), SchedError>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StrategyKind {
    #[default]
    DayByDay,
    PersonByPerson,
}

impl StrategyKind {
    pub fn build(self, min_shifts_per_person: usize) -> Box<dyn Strategy> {
        match self {
            Self::DayByDay => Box::new(DayByDay),
            Self::PersonByPerson => Box::new(PersonByPerson {
                min_shifts_per_person,
            }),
        }
    }
}

impl FromStr for StrategyKind {
    type Err = SchedError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "day" | "day-by-day" => Ok(Self::DayByDay),
            "person" | "person-by-person" => Ok(Self::PersonByPerson),
            other => Err(SchedError::UnknownStrategy(other.to_string())),
        }
    }
}

/// Planning de `[start, end]` avec la passe jour par jour et un tirage frais.
pub fn schedule_range(
    people: &[Person],
    start: NaiveDate,
    end: NaiveDate,
    opts: &ScheduleOptions,
) -> Result<Vec<Shift>, SchedError> {
    let mut rng = rng::from_entropy();
    schedule_range_with(people, start, end, opts, &DayByDay, &mut rng)
}

/// Une exécution complète : registre vide, remplissage, validation globale.
/// En cas d'échec, rien n'est conservé.
pub fn schedule_range_with<R: RngCore>(
    people: &[Person],
    start: NaiveDate,
    end: NaiveDate,
    opts: &ScheduleOptions,
    strategy: &dyn Strategy,
    rng: &mut R,
) -> Result<Vec<Shift>, SchedError> {
    opts.validate()?;
    if end < start {
        return Err(SchedError::InvalidRange { start, end });
    }

    let days = calendar::days_inclusive(start, end);
    let mut ledger = Vec::new();
    strategy.fill(people, &days, opts, rng, &mut ledger)?;
    check_staffing(&days, &ledger, opts)?;

    #[cfg(feature = "logging")]
    tracing::info!(
        strategy = strategy.name(),
        days = days.len(),
        shifts = ledger.len(),
        "schedule generated"
    );
    Ok(ledger)
}

/// Résultat d'une génération réussie.
#[derive(Debug, Clone)]
pub struct Generated {
    pub shifts: Vec<Shift>,
    pub attempts: usize,
}

/// Relance la période entière tant que le tirage est infaisable, dans la
/// limite de `max_attempts`. Les erreurs d'entrée sont renvoyées aussitôt.
pub fn schedule_until_feasible<R: RngCore>(
    people: &[Person],
    start: NaiveDate,
    end: NaiveDate,
    opts: &ScheduleOptions,
    strategy: &dyn Strategy,
    rng: &mut R,
    max_attempts: usize,
) -> Result<Generated, SchedError> {
    let max_attempts = max_attempts.max(1);
    let mut attempt = 1usize;
    loop {
        match schedule_range_with(people, start, end, opts, strategy, rng) {
            Ok(shifts) => {
                return Ok(Generated {
                    shifts,
                    attempts: attempt,
                })
            }
            Err(err) if err.is_infeasible() && attempt < max_attempts => {
                #[cfg(feature = "logging")]
                tracing::warn!(attempt, error = %err, "attempt failed, retrying");
                attempt += 1;
            }
            Err(err) => return Err(err),
        }
    }
}

/// Façade : options + stratégie + budget d'essais, appliqués à un roster.
#[derive(Debug)]
pub struct Scheduler {
    opts: ScheduleOptions,
    strategy: Box<dyn Strategy>,
    max_attempts: usize,
}

impl Default for Scheduler {
    fn default() -> Self {
        Self::new(ScheduleOptions::default())
    }
}

impl Scheduler {
    pub fn new(opts: ScheduleOptions) -> Self {
        Self {
            opts,
            strategy: Box::new(DayByDay),
            max_attempts: 1,
        }
    }

    pub fn with_strategy(mut self, strategy: Box<dyn Strategy>) -> Self {
        self.strategy = strategy;
        self
    }

    pub fn with_max_attempts(mut self, max_attempts: usize) -> Self {
        self.max_attempts = max_attempts.max(1);
        self
    }

    pub fn options(&self) -> &ScheduleOptions {
        &self.opts
    }

    pub fn strategy(&self) -> &dyn Strategy {
        self.strategy.as_ref()
    }

    /// Génère un planning à partir d'une copie de l'équipe du roster.
    pub fn generate<R: RngCore>(
        &self,
        roster: &Roster,
        start: NaiveDate,
        end: NaiveDate,
        rng: &mut R,
    ) -> Result<Generated, SchedError> {
        let people = roster.snapshot();
        schedule_until_feasible(
            &people,
            start,
            end,
            &self.opts,
            self.strategy.as_ref(),
            rng,
            self.max_attempts,
        )
    }

    pub fn audit(&self, roster: &Roster) -> Vec<Violation> {
        audit(&roster.people, &roster.shifts, &self.opts)
    }
}
