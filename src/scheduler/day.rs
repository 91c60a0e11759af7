use super::{eligibility, SchedError, ScheduleOptions, Strategy};
use crate::model::{Person, Shift};
use chrono::NaiveDate;
use rand::seq::SliceRandom;
use rand::{Rng, RngCore};

/// Choisit jusqu'à `max_per_day` personnes pour `day`.
///
/// Les candidats éligibles sont mélangés uniformément puis tronqués. Un
/// vivier plus petit que `min_per_day` n'est pas une erreur ici : le jour
/// reste sous-doté et seule la validation globale tranche.
pub fn select_for_day<R: Rng + ?Sized>(
    people: &[Person],
    day: NaiveDate,
    opts: &ScheduleOptions,
    committed: &[Shift],
    rng: &mut R,
) -> Vec<Shift> {
    let mut pool = eligibility::eligible_people(people, day, committed, opts);

    if pool.len() < opts.min_per_day {
        #[cfg(feature = "logging")]
        tracing::warn!(
            %day,
            eligible = pool.len(),
            min = opts.min_per_day,
            "not enough eligible people"
        );
    }

    pool.shuffle(rng);
    pool.truncate(opts.max_per_day);
    pool.into_iter().map(|person| Shift::new(day, person)).collect()
}

/// Passe gloutonne jour par jour : chaque jour est figé avant le suivant.
#[derive(Debug, Clone, Copy, Default)]
pub struct DayByDay;

impl Strategy for DayByDay {
    fn name(&self) -> &'static str {
        "day"
    }

    fn fill(
        &self,
        people: &[Person],
        days: &[NaiveDate],
        opts: &ScheduleOptions,
        rng: &mut dyn RngCore,
        ledger: &mut Vec<Shift>,
    ) -> Result<(), SchedError> {
        for &day in days {
            let picked = select_for_day(people, day, opts, ledger, &mut *rng);
            #[cfg(feature = "logging")]
            tracing::debug!(%day, assigned = picked.len(), "day filled");
            ledger.extend(picked);
        }
        Ok(())
    }
}
