use chrono::NaiveDate;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Identifiant fort pour Person : le nom, unique dans le roster.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(transparent))]
pub struct PersonName(String);

impl PersonName {
    pub fn new<S: AsRef<str>>(s: S) -> Self {
        Self(s.as_ref().trim().to_owned())
    }
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PersonName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum Condition {
    Unavailable,
}

/// Contrainte ponctuelle : une date précise, pas de récurrence.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Rule {
    pub condition: Condition,
    pub date: NaiveDate,
}

impl Rule {
    pub fn unavailable(date: NaiveDate) -> Self {
        Self {
            condition: Condition::Unavailable,
            date,
        }
    }

    pub fn blocks(&self, day: NaiveDate) -> bool {
        self.condition == Condition::Unavailable && self.date == day
    }
}

/// Personne de la permanence
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Person {
    pub name: PersonName,
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Vec::is_empty"))]
    pub rules: Vec<Rule>,
    /// Couleur d'affichage, ignorée par l'ordonnanceur.
    #[cfg_attr(feature = "serde", serde(default))]
    pub color: String,
}

impl Person {
    pub fn new<N: AsRef<str>>(name: N) -> Self {
        Self {
            name: PersonName::new(name),
            rules: Vec::new(),
            color: String::new(),
        }
    }

    pub fn with_color<C: Into<String>>(mut self, color: C) -> Self {
        self.color = color.into();
        self
    }

    pub fn unavailable_on<I: IntoIterator<Item = NaiveDate>>(mut self, dates: I) -> Self {
        for date in dates {
            self.block(date);
        }
        self
    }

    /// Ajoute une indisponibilité ; renvoie `false` si elle existait déjà.
    pub fn block(&mut self, date: NaiveDate) -> bool {
        if self.is_unavailable(date) {
            return false;
        }
        self.rules.push(Rule::unavailable(date));
        true
    }

    pub fn is_unavailable(&self, day: NaiveDate) -> bool {
        self.rules.iter().any(|rule| rule.blocks(day))
    }
}

/// Une personne affectée à un jour.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Shift {
    pub date: NaiveDate,
    pub person: PersonName,
}

impl Shift {
    pub fn new(date: NaiveDate, person: &Person) -> Self {
        Self {
            date,
            person: person.name.clone(),
        }
    }

    pub fn is_for(&self, person: &PersonName) -> bool {
        &self.person == person
    }
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum RosterError {
    #[error("person name cannot be empty")]
    EmptyName,
    #[error("person already exists: {0}")]
    DuplicatePerson(String),
    #[error("unknown person: {0}")]
    UnknownPerson(String),
}

/// État applicatif : équipe + dernier planning généré.
///
/// Chaque mutation incrémente `version` ; l'ordonnanceur ne reçoit que des
/// copies (`snapshot`) et renvoie un nouveau planning.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Roster {
    #[cfg_attr(feature = "serde", serde(default))]
    pub version: u64,
    #[cfg_attr(feature = "serde", serde(default))]
    pub people: Vec<Person>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub shifts: Vec<Shift>,
}

impl Roster {
    pub fn find_person<'a>(&'a self, name: &str) -> Option<&'a Person> {
        self.people.iter().find(|p| p.name.as_str() == name.trim())
    }

    pub fn find_person_mut(&mut self, name: &str) -> Option<&mut Person> {
        self.people.iter_mut().find(|p| p.name.as_str() == name.trim())
    }

    pub fn add_person(&mut self, person: Person) -> Result<(), RosterError> {
        if person.name.as_str().is_empty() {
            return Err(RosterError::EmptyName);
        }
        if self.find_person(person.name.as_str()).is_some() {
            return Err(RosterError::DuplicatePerson(person.name.to_string()));
        }
        self.people.push(person);
        self.bump();
        Ok(())
    }

    /// Retire une personne et ses shifts du planning courant.
    pub fn remove_person(&mut self, name: &str) -> Result<Person, RosterError> {
        let pos = self
            .people
            .iter()
            .position(|p| p.name.as_str() == name.trim())
            .ok_or_else(|| RosterError::UnknownPerson(name.to_string()))?;
        let removed = self.people.remove(pos);
        self.shifts.retain(|s| !s.is_for(&removed.name));
        self.bump();
        Ok(removed)
    }

    pub fn block_date(&mut self, name: &str, date: NaiveDate) -> Result<bool, RosterError> {
        let person = self
            .find_person_mut(name)
            .ok_or_else(|| RosterError::UnknownPerson(name.to_string()))?;
        let added = person.block(date);
        if added {
            self.bump();
        }
        Ok(added)
    }

    pub fn replace_shifts(&mut self, shifts: Vec<Shift>) {
        self.shifts = shifts;
        self.bump();
    }

    /// Copie immuable de l'équipe, à passer à l'ordonnanceur.
    pub fn snapshot(&self) -> Vec<Person> {
        self.people.clone()
    }

    pub fn shifts_for<'a>(&'a self, name: &'a PersonName) -> impl Iterator<Item = &'a Shift> + 'a {
        self.shifts.iter().filter(move |s| s.is_for(name))
    }

    fn bump(&mut self) {
        self.version += 1;
    }
}
