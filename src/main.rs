use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use color_eyre::eyre::{Result, eyre};
use dotenv::dotenv;
use salonbook_client::{
    api::SalonApi,
    auth::sign_in,
    booking::{BookingDraft, BookingFlow},
    config::ClientConfig,
    http::HttpSalonApi,
    new_session,
};
use salonbook_core::models::catalog::ServiceType;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

#[derive(Parser)]
#[command(name = "salonbook", about = "Browse and book salon appointments")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Show free slots for a stylist on a date
    Slots {
        #[arg(long)]
        stylist: i64,
        #[arg(long)]
        date: NaiveDate,
    },
    /// List services, optionally of one type (HAIRCUTS, COLORING, TREATMENTS)
    Services {
        #[arg(long = "type")]
        service_type: Option<ServiceType>,
    },
    /// List stylists
    Stylists,
    /// Book an appointment (signs in with SALON_EMAIL / SALON_PASSWORD)
    Book {
        #[arg(long)]
        service: i64,
        #[arg(long)]
        stylist: i64,
        #[arg(long)]
        date: NaiveDate,
        /// Slot label, e.g. "09:00 AM - 10:00 AM"
        #[arg(long)]
        slot: String,
        #[arg(long, default_value = "")]
        notes: String,
    },
    /// List your appointments (signs in with SALON_EMAIL / SALON_PASSWORD)
    Appointments,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize error handling
    color_eyre::install()?;

    // Load environment variables
    dotenv().ok();

    let cli = Cli::parse();
    let config = ClientConfig::from_env()?;

    // Initialize logging
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_level.as_str()));
    let subscriber = FmtSubscriber::builder().with_env_filter(filter).finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let session = new_session();
    let api = HttpSalonApi::new(&config, session.clone())?;
    info!(api_url = %config.api_url, "Using salon backend");

    match cli.command {
        Command::Slots { stylist, date } => {
            let flow = BookingFlow::new(api, session);
            let listing = flow.load_slots_now(stylist, date).await?;
            if let Some(error) = &listing.fetch_error {
                warn!("Existing bookings unavailable, some slots may already be taken: {}", error);
            }
            if listing.is_empty() {
                println!("No slots available on {}", date);
            }
            for label in listing.labels() {
                println!("{}", label);
            }
        }
        Command::Services { service_type } => {
            let services = match service_type {
                Some(service_type) => api.services_by_type(service_type).await?,
                None => api.services().await?,
            };
            for service in services {
                println!("{:>4}  {:<30} LKR {:.2}", service.service_id, service.name, service.price);
            }
        }
        Command::Stylists => {
            for employee in api.employees().await? {
                println!("{:>4}  {}", employee.employee_id, employee.name);
            }
        }
        Command::Book {
            service,
            stylist,
            date,
            slot,
            notes,
        } => {
            let (email, password) = credentials()?;
            sign_in(&api, &session, &email, &password).await?;

            let service = api
                .services()
                .await?
                .into_iter()
                .find(|s| s.service_id == service)
                .ok_or_else(|| eyre!("Service {} not found", service))?;

            let flow = BookingFlow::new(api, session);
            let draft = BookingDraft {
                service: Some(service.clone()),
                stylist_id: Some(stylist),
                date: Some(date),
                slot: Some(slot),
                notes,
            };
            let appointment_id = flow.confirm_booking(&draft).await?;
            println!("Booked appointment {}", appointment_id);
            println!("Pay at {}", flow.checkout_url(appointment_id, &service).await?);
        }
        Command::Appointments => {
            let (email, password) = credentials()?;
            sign_in(&api, &session, &email, &password).await?;

            let flow = BookingFlow::new(api, session);
            for appointment in flow.my_appointments().await? {
                println!(
                    "{:>4}  {}  {:<20} {:<10} {}",
                    appointment.appointment_id,
                    appointment.time_slot.format("%Y-%m-%d %I:%M %p"),
                    appointment.service.name,
                    appointment.status.as_str(),
                    appointment.employee.name,
                );
            }
        }
    }

    Ok(())
}

fn credentials() -> Result<(String, String)> {
    let email = std::env::var("SALON_EMAIL").map_err(|_| eyre!("SALON_EMAIL environment variable not set"))?;
    let password =
        std::env::var("SALON_PASSWORD").map_err(|_| eyre!("SALON_PASSWORD environment variable not set"))?;
    Ok((email, password))
}
