//! Trip Planner CLI
//!
//! Command-line interface to the trip API:
//! - Log in / sign up / log out
//! - Create a trip
//! - List trips and favorites
//! - Show a trip's itineraries
//! - Toggle the favorite flag

use anyhow::{bail, Context};
use clap::{Parser, Subcommand};
use std::io::{BufRead, Write};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use trip_planner::config::{generate_default_config, Config, LoggingConfig};
use trip_planner::error::WEAK_PASSWORD_MESSAGE;
use trip_planner::format::{days, money};
use trip_planner::trips::find_trip;
use trip_planner::{
    ClientError, FileSessionStore, FormError, LoginForm, MessageOrder, SessionStore, SignupForm,
    Trip, TripClient, TripForm, TripId, TripListKind,
};

#[derive(Parser)]
#[command(name = "trip-planner")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Plan trips and browse generated itineraries")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// API server URL (overrides config and TRIP_PLANNER_API_URL)
    #[arg(long, global = true)]
    pub api_url: Option<String>,

    /// Output format (table, json)
    #[arg(short, long, default_value = "table", global = true)]
    pub format: String,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Log in and store the session
    Login {
        email: String,
        /// Password (prompted when omitted)
        #[arg(long)]
        password: Option<String>,
    },

    /// Register a new account
    Signup {
        name: String,
        email: String,
        /// Password (prompted when omitted)
        #[arg(long)]
        password: Option<String>,
    },

    /// Forget the stored session
    Logout,

    /// Create a trip
    Create {
        /// Comma-separated destinations, e.g. "Delhi, Noida"
        #[arg(short, long)]
        destination: String,
        /// Budget as a whole number
        #[arg(short, long)]
        budget: String,
        /// Start date (YYYY-MM-DD)
        #[arg(short, long)]
        start_date: String,
        /// Duration in days
        #[arg(long)]
        duration: String,
        /// Comma-separated interests, e.g. "art, culture"
        #[arg(short, long, default_value = "")]
        interests: String,
    },

    /// List your trips
    List {
        /// Only favorite trips
        #[arg(long)]
        favorites: bool,
    },

    /// Show one trip with its itineraries
    Show { id: TripId },

    /// Mark a trip as favorite
    Favorite {
        id: TripId,
        /// Remove the favorite flag instead
        #[arg(long)]
        off: bool,
    },

    /// Generate default config file
    Config {
        /// Output path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config = Config::load_default();
    if let Some(url) = &cli.api_url {
        config.api.base_url = url.clone();
    }
    init_logging(&config.logging);

    let client = TripClient::new(&config.api)?;
    let store = FileSessionStore::new(&config.session.path);
    let json = cli.format == "json";

    match cli.command {
        Commands::Login { email, password } => {
            let password = match password {
                Some(p) => p,
                None => prompt("Password: ")?,
            };
            let request = LoginForm { email, password }.to_request()?;

            match client.login(&request).await {
                Ok(session) => {
                    store.save(&session)?;
                    println!("Logged in successfully.");
                }
                Err(e) => fail(
                    &e,
                    MessageOrder::MessageFirst,
                    "An error occurred while logging in.",
                ),
            }
        }

        Commands::Signup {
            name,
            email,
            password,
        } => {
            let password = match password {
                Some(p) => p,
                None => prompt("Password: ")?,
            };

            let request = match (SignupForm { name, email, password }).to_request() {
                Ok(r) => r,
                Err(FormError::WeakPassword(missing)) => {
                    eprintln!("{}", WEAK_PASSWORD_MESSAGE);
                    eprintln!("Missing: {}", missing.join(", "));
                    std::process::exit(1);
                }
                Err(e) => return Err(e.into()),
            };

            match client.signup(&request).await {
                Ok(()) => println!("Registered successfully. Please login to continue."),
                Err(e) => fail(
                    &e,
                    MessageOrder::DetailFirst,
                    "An error occurred while signing up.",
                ),
            }
        }

        Commands::Logout => {
            store.clear()?;
            println!("Logged out.");
        }

        Commands::Create {
            destination,
            budget,
            start_date,
            duration,
            interests,
        } => {
            let user_id = require_user(&store)?;
            let form = TripForm {
                destination,
                budget,
                start_date,
                duration,
                interests,
            };
            let new_trip = form.to_new_trip(&user_id)?;

            match client.create_trip(&new_trip).await {
                Ok(trip) => {
                    println!("Trip created successfully!");
                    println!();
                    print_trip(&trip, json)?;
                }
                Err(e) => fail(
                    &e,
                    MessageOrder::DetailFirst,
                    "Error creating trip. Please try again.",
                ),
            }
        }

        Commands::List { favorites } => {
            let user_id = require_user(&store)?;
            let kind = if favorites {
                TripListKind::Favorites
            } else {
                TripListKind::All
            };

            let trips = client.list_trips_or_empty(kind, &user_id).await;

            if json {
                println!("{}", serde_json::to_string_pretty(&trips)?);
            } else {
                print_table(kind, &trips);
            }
        }

        Commands::Show { id } => {
            let user_id = require_user(&store)?;
            let trips = client.list_trips(TripListKind::All, &user_id).await?;
            match find_trip(&trips, id) {
                Some(trip) => print_trip(trip, json)?,
                None => bail!("Trip not found."),
            }
        }

        Commands::Favorite { id, off } => {
            require_user(&store)?;
            let favorite = !off;
            match client.set_favorite(id, favorite).await {
                Ok(()) if favorite => println!("Trip {} added to favorites.", id),
                Ok(()) => println!("Trip {} removed from favorites.", id),
                Err(e) => fail(
                    &e,
                    MessageOrder::DetailFirst,
                    "An error occurred while updating favorite status.",
                ),
            }
        }

        Commands::Config { output } => {
            let config = generate_default_config();

            match output {
                Some(path) => {
                    if let Some(parent) = path.parent() {
                        std::fs::create_dir_all(parent)?;
                    }
                    std::fs::write(&path, &config)?;
                    println!("Config written to {:?}", path);
                }
                None => {
                    print!("{}", config);
                }
            }
        }
    }

    Ok(())
}

fn init_logging(logging: &LoggingConfig) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| format!("trip_planner={}", logging.level).into());

    let registry = tracing_subscriber::registry().with(filter);
    if logging.format == "json" {
        registry
            .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        registry
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init();
    }
}

fn require_user(store: &FileSessionStore) -> anyhow::Result<String> {
    store
        .user_id()
        .with_context(|| "Log in first: trip-planner login <email>")
}

/// Print the user-facing message for a failed call and exit
fn fail(err: &ClientError, order: MessageOrder, fallback: &str) -> ! {
    let message = match err {
        ClientError::Network(_) => "An error occurred. Please try again later.".to_string(),
        other => other.user_message_in(order, fallback),
    };
    eprintln!("{}", message);
    std::process::exit(1);
}

fn prompt(label: &str) -> anyhow::Result<String> {
    print!("{}", label);
    std::io::stdout().flush()?;
    let mut line = String::new();
    std::io::stdin().lock().read_line(&mut line)?;
    Ok(line.trim_end_matches(['\r', '\n']).to_string())
}

fn print_table(kind: TripListKind, trips: &[Trip]) {
    if trips.is_empty() {
        println!("{}", kind.empty_message());
        return;
    }

    println!("{}", kind.heading());
    println!();
    println!(
        "{:<6} {:<30} {:<12} {:>12} {:<8} {}",
        "ID", "Destinations", "Start", "Budget", "Days", "Fav"
    );
    println!("{}", "-".repeat(80));

    for trip in trips {
        println!(
            "{:<6} {:<30} {:<12} {:>12} {:<8} {}",
            trip.id,
            trip.destination.join(", "),
            trip.start_date,
            money(trip.budget),
            trip.duration,
            if trip.favorite { "♥" } else { "" }
        );
    }
}

fn print_trip(trip: &Trip, json: bool) -> anyhow::Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(trip)?);
        return Ok(());
    }

    println!("{}{}", trip.title(), if trip.favorite { " ♥" } else { "" });
    println!("  Budget:     {}", money(trip.budget));
    println!("  Duration:   {}", days(trip.duration));
    println!("  Start Date: {}", trip.start_date);
    println!("  Interests:  {}", trip.interests.join(", "));

    for itinerary in &trip.itineraries {
        println!();
        println!("Itinerary for {}", itinerary.destination);
        println!("  Budget: {}  Duration: {}", money(itinerary.budget), days(itinerary.duration));
        for day in &itinerary.itinerary {
            println!("  Day {}", day.day);
            for activity in &day.activities {
                println!("    - {} ({})", activity.name, money(activity.cost));
                if !activity.description.is_empty() {
                    println!("      {}", activity.description);
                }
            }
        }
    }

    Ok(())
}
