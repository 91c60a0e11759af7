use crate::model::PersonName;
use chrono::NaiveDate;
use thiserror::Error;

/// Plafonds par personne sur une exécution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Limits {
    pub max_shifts_per_person: usize,
    pub max_shifts_per_week: usize,
    pub max_weekend_shifts: usize,
    /// Rayon d'exclusion autour d'un shift existant, en jours.
    pub min_gap_days: i64,
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            max_shifts_per_person: 8,
            max_shifts_per_week: 2,
            max_weekend_shifts: 3,
            min_gap_days: 2,
        }
    }
}

/// Options de génération, passées à chaque appel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScheduleOptions {
    pub min_per_day: usize,
    pub max_per_day: usize,
    /// Effectif minimal exigé chaque jour à la validation finale.
    pub staffing_floor: usize,
    /// Nombre de jours tolérés sous `max_per_day`.
    pub max_understaffed_days: usize,
    pub limits: Limits,
}

impl Default for ScheduleOptions {
    fn default() -> Self {
        Self {
            min_per_day: 3,
            max_per_day: 4,
            staffing_floor: 3,
            max_understaffed_days: 1,
            limits: Limits::default(),
        }
    }
}

impl ScheduleOptions {
    pub fn with_staffing(mut self, min_per_day: usize, max_per_day: usize) -> Self {
        self.min_per_day = min_per_day;
        self.max_per_day = max_per_day;
        self
    }

    pub fn validate(&self) -> Result<(), SchedError> {
        if self.max_per_day == 0 || self.min_per_day > self.max_per_day {
            return Err(SchedError::InvalidStaffing {
                min: self.min_per_day,
                max: self.max_per_day,
            });
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViolationKind {
    LifetimeCap,
    WeeklyCap,
    WeekendCap,
    ConsecutiveWeekend,
    TooClose,
    Unavailable,
    DuplicateAssignment,
}

impl ViolationKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::LifetimeCap => "lifetime-cap",
            Self::WeeklyCap => "weekly-cap",
            Self::WeekendCap => "weekend-cap",
            Self::ConsecutiveWeekend => "consecutive-weekend",
            Self::TooClose => "too-close",
            Self::Unavailable => "unavailable",
            Self::DuplicateAssignment => "duplicate",
        }
    }
}

/// Invariant violé par une personne, repéré a posteriori.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violation {
    pub person: PersonName,
    pub date: NaiveDate,
    pub kind: ViolationKind,
}

#[derive(Error, Debug)]
pub enum SchedError {
    #[error("invalid date range: {end} is before {start}")]
    InvalidRange { start: NaiveDate, end: NaiveDate },
    #[error("invalid staffing bounds: min {min}, max {max}")]
    InvalidStaffing { min: usize, max: usize },
    #[error("not enough people on {date}: {assigned} assigned, {required} required")]
    InsufficientStaffing {
        date: NaiveDate,
        assigned: usize,
        required: usize,
    },
    #[error("too many understaffed days: {count} (at most {allowed} allowed)")]
    TooManyUnderstaffedDays { count: usize, allowed: usize },
    #[error("{person} only got {got} shift(s), {min} required")]
    PersonUnderloaded {
        person: PersonName,
        got: usize,
        min: usize,
    },
    #[error("unknown strategy: {0}")]
    UnknownStrategy(String),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl SchedError {
    /// Échec dû au tirage : un nouvel essai peut réussir.
    pub fn is_infeasible(&self) -> bool {
        matches!(
            self,
            Self::InsufficientStaffing { .. }
                | Self::TooManyUnderstaffedDays { .. }
                | Self::PersonUnderloaded { .. }
        )
    }
}
