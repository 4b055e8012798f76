//! Terminal client for the HYGIA registry.
//!
//! Each invocation works on a fresh seeded registry, so state lives for one
//! command - the same lifetime the dashboard gives it for one page load.

use clap::{Parser, Subcommand};
use hygia_core::{
    demographics, navigation, patient_rows, NewPatient, NoteService, PatientDetail,
    PatientRecord, PatientRegistry,
};

#[derive(Parser)]
#[command(name = "hygia")]
#[command(about = "HYGIA clinical dashboard CLI")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// List all patients
    List,
    /// Search patients by name or national id
    Search {
        /// Free-text query
        query: String,
    },
    /// Admit a new patient
    Register {
        /// Patient display name
        name: String,
        /// National identity number
        national_id: String,
        /// Date of birth (YYYY-MM-DD)
        birthdate: String,
        /// Gender code
        gender: String,
        /// Contact phone number (optional)
        #[arg(long)]
        phone: Option<String>,
    },
    /// Show one patient's detail panel
    Show {
        /// Patient identifier (e.g. P001)
        patient_id: String,
    },
    /// Save a clinical note for a patient (simulated save)
    Note {
        /// Patient identifier (e.g. P001)
        patient_id: String,
        /// Note content
        content: String,
    },
    /// Show the sidebar menu for a role
    Menu {
        /// Role name (clinician, receptionist, pharmacist)
        role: String,
    },
}

fn print_rows(records: Vec<&PatientRecord>) {
    if records.is_empty() {
        println!("No patients found matching the search.");
        return;
    }
    for row in patient_rows(records) {
        println!(
            "ID: {}, Name: {}, National ID: {}, Phone: {}",
            row.id, row.name, row.national_id, row.phone
        );
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let mut registry = PatientRegistry::seeded();

    match cli.command {
        Some(Commands::List) => {
            print_rows(registry.list_all().iter().collect());
        }
        Some(Commands::Search { query }) => {
            print_rows(registry.search(&query));
        }
        Some(Commands::Register {
            name,
            national_id,
            birthdate,
            gender,
            phone,
        }) => {
            let record = registry.register(NewPatient {
                name,
                national_id,
                phone,
                birthdate,
                gender,
            });
            println!("Admitted patient {} with ID: {}", record.name, record.id);
        }
        Some(Commands::Show { patient_id }) => {
            match PatientDetail::resolve(&registry, Some(&patient_id), demographics::today()) {
                PatientDetail::Loaded {
                    id,
                    name,
                    age,
                    last_visit,
                } => {
                    println!("{name}");
                    println!("ID: {id} | Age: {age} | Last visit: {last_visit}");
                }
                PatientDetail::NotFound { requested_id } => {
                    println!("Requested ID: {requested_id}. Patient not found.");
                }
                PatientDetail::NotSelected => {
                    println!("ID: ---- | Age: -- | Last visit: ----");
                }
            }
        }
        Some(Commands::Note {
            patient_id,
            content,
        }) => {
            let patient = registry.find_by_id(&patient_id);
            match NoteService::new().save_note(patient, &content) {
                Ok(_) => {
                    let name = patient.map(|p| p.name.as_str()).unwrap_or(patient_id.as_str());
                    println!("Note for {name} saved successfully. (Simulation)");
                }
                Err(e) => eprintln!("Error saving note: {e}"),
            }
        }
        Some(Commands::Menu { role }) => {
            let items = navigation::menu_for_role_str(&role);
            if items.is_empty() {
                println!("No menu entries for role '{role}'.");
            } else {
                for item in items {
                    println!("{} -> {} [{}]", item.label, item.destination, item.icon);
                }
            }
        }
        None => {
            println!("Use 'hygia --help' for commands");
        }
    }

    Ok(())
}
