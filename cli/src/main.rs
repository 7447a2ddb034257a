use abi::{
    BookingDraft, BookingError, BookingId, BookingStatus, Config, FacilityId, Selection, Slot,
    TimeOfDay, UserId,
};
use anyhow::Result;
use booking::{ApiClient, Session};
use chrono::{NaiveDate, Utc};
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "fbook", about = "Command-line client for the facility-booking service")]
struct Cli {
    /// Path to the YAML config file
    #[arg(long, default_value = "config.yml")]
    config: String,

    /// Emit JSON instead of human-readable output
    #[arg(long)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// List the facilities known to the service
    Facilities,

    /// List bookings, optionally narrowed by status or a search needle
    Bookings {
        #[arg(long)]
        status: Option<BookingStatus>,
        #[arg(long)]
        filter: Option<String>,
    },

    /// Show the half-hour slot grid for a facility and date
    Availability {
        facility: FacilityId,
        date: NaiveDate,
        /// First slot of a candidate range (start time, HH:MM)
        #[arg(long, requires = "until")]
        select: Option<TimeOfDay>,
        /// Last slot of a candidate range (start time, HH:MM)
        #[arg(long, requires = "select")]
        until: Option<TimeOfDay>,
    },

    /// Create a booking
    Book {
        facility: FacilityId,
        user: UserId,
        date: NaiveDate,
        start: TimeOfDay,
        end: TimeOfDay,
        #[arg(long)]
        purpose: Option<String>,
    },

    /// Rewrite the fields of an existing booking
    Update {
        id: BookingId,
        facility: FacilityId,
        user: UserId,
        date: NaiveDate,
        start: TimeOfDay,
        end: TimeOfDay,
        #[arg(long)]
        purpose: Option<String>,
    },

    /// Cancel a booking; it keeps its id but frees its slot range
    Cancel { id: BookingId },

    /// Remove a booking entirely
    Delete { id: BookingId },
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "booking=info,fbook=info".to_string().into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();
    let config = Config::load(&cli.config)?;
    let mut session = Session::new(ApiClient::new(config.api));

    if let Err(err) = run(&cli.command, cli.json, &mut session).await {
        eprintln!("{}", err.user_message());
        std::process::exit(1);
    }
    Ok(())
}

async fn run(
    command: &Command,
    json: bool,
    session: &mut Session<ApiClient>,
) -> Result<(), BookingError> {
    match command {
        Command::Facilities => {
            session.refresh().await?;
            if json {
                print_json(&session.facilities());
            } else if session.facilities().is_empty() {
                println!("No facilities yet.");
            } else {
                for f in session.facilities() {
                    println!("#{:<4} {:<28} {:<24} capacity {}", f.id, f.name, f.location, f.capacity);
                }
            }
        }

        Command::Bookings { status, filter } => {
            session.refresh_bookings().await?;
            let items = session.filtered_bookings(*status, filter.as_deref());
            if json {
                print_json(&items);
            } else if items.is_empty() {
                println!("No bookings found.");
            } else {
                for b in items {
                    println!(
                        "#{:<4} facility {:<4} user {:<4} {} {}-{} [{}]",
                        b.id, b.facility_id, b.user_id, b.date, b.start_time, b.end_time, b.status
                    );
                }
            }
        }

        Command::Availability { facility, date, select, until } => {
            session.refresh().await?;
            let kind = session
                .facility(*facility)
                .ok_or_else(|| BookingError::NotFound(format!("facility {}", facility)))?
                .kind();
            let slots = session.availability(*facility, *date, Utc::now());

            if json {
                print_json(&slots);
            } else {
                print_slots(&slots);
            }

            if let (Some(from), Some(to)) = (select, until) {
                let mut selection = Selection::default();
                selection.pick(slot_index(&slots, *from)?, &slots, kind)?;
                selection.pick(slot_index(&slots, *to)?, &slots, kind)?;
                if let Some((start, end)) = selection.window(&slots) {
                    println!("Selected range {}-{} is bookable.", start, end);
                }
            }
        }

        Command::Book { facility, user, date, start, end, purpose } => {
            let draft =
                BookingDraft::new_pending(*facility, *user, *date, *start, *end, purpose.clone());
            let created = session.create_booking(&draft).await?;
            if json {
                print_json(&created);
            } else {
                println!("Booking #{} created.", created.id);
            }
        }

        Command::Update { id, facility, user, date, start, end, purpose } => {
            let draft =
                BookingDraft::new_pending(*facility, *user, *date, *start, *end, purpose.clone());
            let updated = session.update_booking(*id, &draft).await?;
            if json {
                print_json(&updated);
            } else {
                println!("Booking #{} updated.", updated.id);
            }
        }

        Command::Cancel { id } => {
            session.cancel_booking(*id).await?;
            println!("Booking #{} cancelled.", id);
        }

        Command::Delete { id } => {
            session.delete_booking(*id).await?;
            println!("Booking #{} deleted.", id);
        }
    }

    Ok(())
}

fn slot_index(slots: &[Slot], start: TimeOfDay) -> Result<usize, BookingError> {
    slots
        .iter()
        .position(|s| s.start == start)
        .ok_or_else(|| BookingError::InvalidInput(format!("{} is not on the slot grid", start)))
}

fn print_slots(slots: &[Slot]) {
    for s in slots {
        println!("{}-{}  {}", s.start, s.end, if s.available { "free" } else { "busy" });
    }
}

fn print_json<T: serde::Serialize>(value: &T) {
    match serde_json::to_string_pretty(value) {
        Ok(json) => println!("{}", json),
        Err(e) => eprintln!("could not render JSON output: {}", e),
    }
}
