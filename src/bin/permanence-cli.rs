#![forbid(unsafe_code)]
use anyhow::{bail, Context, Result};
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use permanence::{
    calendar, io,
    model::Person,
    rng,
    scheduler::{check_staffing, ScheduleOptions, Scheduler, StrategyKind},
    storage::{JsonStorage, Storage},
};
#[cfg(feature = "logging")]
use tracing_subscriber::{fmt::Subscriber, EnvFilter};

/// CLI de planification des permanences (sans base de données)
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Cli {
    /// Active les logs (feature `logging`)
    #[arg(long, global = true)]
    log: bool,

    /// Fichier JSON du roster
    #[arg(long, global = true, default_value = "roster.json")]
    roster: String,

    #[command(subcommand)]
    cmd: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Ajouter une personne
    AddPerson {
        #[arg(long)]
        name: String,
        #[arg(long, default_value = "")]
        color: String,
        /// Indisponibilités "2024-07-01;2024-07-10..2024-07-12"
        #[arg(long)]
        unavailable: Option<String>,
    },

    /// Retirer une personne (et ses shifts)
    RemovePerson {
        #[arg(long)]
        name: String,
    },

    /// Déclarer une indisponibilité
    Block {
        #[arg(long)]
        name: String,
        /// YYYY-MM-DD
        #[arg(long)]
        date: NaiveDate,
    },

    /// Importer des personnes depuis un CSV
    ImportPeople {
        #[arg(long)]
        csv: String,
    },

    /// Générer le planning d'une période
    Generate {
        /// YYYY-MM-DD
        #[arg(long)]
        start: NaiveDate,
        /// YYYY-MM-DD (inclus)
        #[arg(long)]
        end: NaiveDate,
        #[arg(long, default_value_t = 3)]
        min_per_day: usize,
        #[arg(long, default_value_t = 4)]
        max_per_day: usize,
        /// Graine du tirage (aléatoire si absente)
        #[arg(long)]
        seed: Option<u64>,
        /// Nombre maximal de tirages complets
        #[arg(long, default_value_t = 1)]
        attempts: usize,
        /// day | person
        #[arg(long, default_value = "day")]
        strategy: StrategyKind,
        /// Plancher par personne (stratégie person)
        #[arg(long, default_value_t = 0)]
        min_shifts_per_person: usize,
    },

    /// Lister et optionnellement exporter
    List {
        #[arg(long)]
        out_json: Option<String>,
        #[arg(long)]
        out_csv: Option<String>,
    },

    /// Vérifier le planning courant
    Check {
        #[arg(long, default_value_t = 3)]
        min_per_day: usize,
        #[arg(long, default_value_t = 4)]
        max_per_day: usize,
        /// Export CSV des violations (optionnel)
        #[arg(long)]
        report: Option<String>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    #[cfg(feature = "logging")]
    if cli.log {
        let _ = Subscriber::builder()
            .with_env_filter(EnvFilter::from_default_env())
            .try_init();
    }

    let storage = JsonStorage::open(&cli.roster);
    let mut roster = storage.load_or_default()?;

    let code = match cli.cmd {
        Commands::AddPerson {
            name,
            color,
            unavailable,
        } => {
            let mut person = Person::new(&name).with_color(color);
            if let Some(raw) = unavailable {
                person = person.unavailable_on(io::parse_unavailable(&raw)?);
            }
            roster.add_person(person)?;
            storage.save(&roster)?;
            0
        }
        Commands::RemovePerson { name } => {
            let removed = roster.remove_person(&name)?;
            storage.save(&roster)?;
            println!("removed {}", removed.name);
            0
        }
        Commands::Block { name, date } => {
            if !roster.block_date(&name, date)? {
                println!("{name} already unavailable on {date}");
            }
            storage.save(&roster)?;
            0
        }
        Commands::ImportPeople { csv } => {
            let people = io::import_people_csv(&csv)?;
            let count = people.len();
            for person in people {
                roster.add_person(person)?;
            }
            storage.save(&roster)?;
            println!("imported {count} person(s)");
            0
        }
        Commands::Generate {
            start,
            end,
            min_per_day,
            max_per_day,
            seed,
            attempts,
            strategy,
            min_shifts_per_person,
        } => {
            if roster.people.is_empty() {
                bail!("roster has no people");
            }
            let opts = ScheduleOptions::default().with_staffing(min_per_day, max_per_day);
            let scheduler = Scheduler::new(opts)
                .with_strategy(strategy.build(min_shifts_per_person))
                .with_max_attempts(attempts);
            let mut rng = match seed {
                Some(seed) => rng::seeded(seed),
                None => rng::from_entropy(),
            };
            let generated = scheduler
                .generate(&roster, start, end, &mut rng)
                .with_context(|| format!("no schedule found for {start}..{end}"))?;
            println!(
                "generated {} shift(s) in {} attempt(s)",
                generated.shifts.len(),
                generated.attempts
            );
            roster.replace_shifts(generated.shifts);
            storage.save(&roster)?;
            0
        }
        Commands::List { out_json, out_csv } => {
            if let Some(path) = out_json {
                io::export_roster_json(path, &roster)?;
            }
            if let Some(path) = out_csv {
                io::export_shifts_csv(path, &roster)?;
            }
            // impression compacte, une ligne par jour
            let sorted = io::sorted_shifts(&roster.shifts);
            for day in sorted.chunk_by(|a, b| a.date == b.date) {
                let names: Vec<&str> = day.iter().map(|s| s.person.as_str()).collect();
                println!(
                    "{} {} | {}",
                    day[0].date,
                    day[0].date.format("%a"),
                    names.join(", ")
                );
            }
            0
        }
        Commands::Check {
            min_per_day,
            max_per_day,
            report,
        } => {
            let opts = ScheduleOptions::default().with_staffing(min_per_day, max_per_day);
            let scheduler = Scheduler::new(opts);
            let violations = scheduler.audit(&roster);

            let mut days: Vec<NaiveDate> = roster.shifts.iter().map(|s| s.date).collect();
            days.sort();
            days.dedup();
            let staffing = match (days.first(), days.last()) {
                (Some(&first), Some(&last)) => check_staffing(
                    &calendar::days_inclusive(first, last),
                    &roster.shifts,
                    &opts,
                ),
                _ => Ok(()),
            };

            if let Err(err) = &staffing {
                eprintln!("staffing: {err}");
            }
            if violations.is_empty() && staffing.is_ok() {
                println!("OK: no violations");
                0
            } else {
                eprintln!("Found {} violation(s)", violations.len());
                if let Some(path) = report {
                    let mut w = csv::Writer::from_path(path)?;
                    w.write_record(["person", "date", "kind"])?;
                    for v in &violations {
                        let date = v.date.to_string();
                        w.write_record([v.person.as_str(), date.as_str(), v.kind.as_str()])?;
                    }
                    w.flush()?;
                }
                // Code 2 = WARNING/INCOMPLETE
                2
            }
        }
    };

    std::process::exit(code);
}
