use crate::calendar;
use crate::model::{Person, Roster, Shift};
use anyhow::{bail, Context};
use chrono::NaiveDate;
use csv::{ReaderBuilder, WriterBuilder};
use std::fs;
use std::path::Path;

/// Import de personnes depuis CSV: header `name[,color][,unavailable]`.
///
/// `unavailable` liste des dates `YYYY-MM-DD` séparées par `;`, ou des
/// intervalles `début..fin` (bornes incluses), dépliés jour par jour.
pub fn import_people_csv<P: AsRef<Path>>(path: P) -> anyhow::Result<Vec<Person>> {
    let mut rdr = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_path(path)?;
    let mut out: Vec<Person> = Vec::new();
    for rec in rdr.records() {
        let rec = rec?;
        let name = rec.get(0).context("missing name")?.trim();
        if name.is_empty() {
            bail!("invalid people row (empty name)");
        }
        if out.iter().any(|p| p.name.as_str() == name) {
            bail!("duplicate person in csv: {name}");
        }
        let mut person = Person::new(name);
        if let Some(color) = rec.get(1) {
            person.color = color.trim().to_string();
        }
        if let Some(raw) = rec.get(2) {
            let dates = parse_unavailable(raw.trim())
                .with_context(|| format!("invalid unavailable value for {name}"))?;
            person = person.unavailable_on(dates);
        }
        out.push(person);
    }
    Ok(out)
}

/// Dates d'indisponibilité, une entrée par jour.
pub fn parse_unavailable(raw: &str) -> anyhow::Result<Vec<NaiveDate>> {
    let mut out = Vec::new();
    for chunk in raw.split(';').map(str::trim).filter(|c| !c.is_empty()) {
        match chunk.split_once("..") {
            Some((start, end)) => {
                let start = parse_date(start.trim())?;
                let end = parse_date(end.trim())?;
                if end < start {
                    bail!("range end before start: {chunk}");
                }
                out.extend(calendar::days_inclusive(start, end));
            }
            None => out.push(parse_date(chunk)?),
        }
    }
    Ok(out)
}

fn parse_date(raw: &str) -> anyhow::Result<NaiveDate> {
    NaiveDate::parse_from_str(raw, "%Y-%m-%d").with_context(|| format!("invalid date: {raw}"))
}

/// Export JSON du roster (jolie mise en forme)
pub fn export_roster_json<P: AsRef<Path>>(path: P, roster: &Roster) -> anyhow::Result<()> {
    let s = serde_json::to_string_pretty(roster)?;
    fs::write(path, s)?;
    Ok(())
}

/// Shifts triés par date puis par nom.
pub fn sorted_shifts(shifts: &[Shift]) -> Vec<&Shift> {
    let mut sorted: Vec<&Shift> = shifts.iter().collect();
    sorted.sort_by(|a, b| a.date.cmp(&b.date).then_with(|| a.person.cmp(&b.person)));
    sorted
}

/// Export CSV du planning: header `date,weekday,person,color`
pub fn export_shifts_csv<P: AsRef<Path>>(path: P, roster: &Roster) -> anyhow::Result<()> {
    let mut w = WriterBuilder::new().has_headers(true).from_path(path)?;
    w.write_record(["date", "weekday", "person", "color"])?;
    for s in sorted_shifts(&roster.shifts) {
        let color = roster
            .find_person(s.person.as_str())
            .map(|p| p.color.as_str())
            .unwrap_or("");
        let date = s.date.format("%Y-%m-%d").to_string();
        let weekday = s.date.format("%a").to_string();
        w.write_record([
            date.as_str(),
            weekday.as_str(),
            s.person.as_str(),
            color,
        ])?;
    }
    w.flush()?;
    Ok(())
}
