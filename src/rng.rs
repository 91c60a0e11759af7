//! Source d'aléa injectable.
//!
//! Le mélange des candidats est la seule source de hasard : toute exécution
//! reçoit son générateur en paramètre. Même graine, même planning.

use rand::SeedableRng;
use rand_pcg::Pcg64Mcg;

pub type ScheduleRng = Pcg64Mcg;

pub fn seeded(seed: u64) -> ScheduleRng {
    Pcg64Mcg::seed_from_u64(seed)
}

pub fn from_entropy() -> ScheduleRng {
    Pcg64Mcg::from_entropy()
}
