use super::{eligibility, SchedError, ScheduleOptions, Strategy};
use crate::model::{Person, Shift};
use chrono::NaiveDate;
use rand::seq::SliceRandom;
use rand::{Rng, RngCore};

/// Choisit les shifts d'une seule personne sur toute la période.
///
/// Les jours sont parcourus dans un ordre aléatoire ; chaque jour retenu
/// est ajouté au registre avant d'examiner le suivant.
pub fn select_for_person<R: Rng + ?Sized>(
    person: &Person,
    days: &[NaiveDate],
    opts: &ScheduleOptions,
    ledger: &mut Vec<Shift>,
    rng: &mut R,
) -> usize {
    let mut order = days.to_vec();
    order.shuffle(rng);

    let mut picked = 0usize;
    for day in order {
        if picked >= opts.limits.max_shifts_per_person {
            break;
        }
        if eligibility::check(person, day, ledger, opts).is_ok() {
            ledger.push(Shift::new(day, person));
            picked += 1;
        }
    }
    picked
}

/// Stratégie inverse : personne par personne, dans l'ordre du roster.
#[derive(Debug, Clone, Copy, Default)]
pub struct PersonByPerson {
    /// Échec si une personne obtient moins de shifts (0 = pas de plancher).
    pub min_shifts_per_person: usize,
}

impl Strategy for PersonByPerson {
    fn name(&self) -> &'static str {
        "person"
    }

    fn fill(
        &self,
        people: &[Person],
        days: &[NaiveDate],
        opts: &ScheduleOptions,
        rng: &mut dyn RngCore,
        ledger: &mut Vec<Shift>,
    ) -> Result<(), SchedError> {
        for person in people {
            let got = select_for_person(person, days, opts, ledger, &mut *rng);
            if got < self.min_shifts_per_person {
                return Err(SchedError::PersonUnderloaded {
                    person: person.name.clone(),
                    got,
                    min: self.min_shifts_per_person,
                });
            }
        }
        Ok(())
    }
}
