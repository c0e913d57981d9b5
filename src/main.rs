use clap::Parser;
use dentdoc::application::{open_registry, DocumentService, SessionCommand};
use dentdoc::cli::{
    format_counts, format_document, format_document_list, format_header, format_type_list, Cli,
    Commands,
};
use dentdoc::error::DentdocError;
use dentdoc::infrastructure::Config;
use std::io::{self, BufRead};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn main() {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("dentdoc=warn")))
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let cli = Cli::parse();

    match run(cli) {
        Ok(_) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {}", e.display_with_suggestions());
            std::process::exit(e.exit_code());
        }
    }
}

fn run(cli: Cli) -> Result<(), DentdocError> {
    let mut config = Config::load(cli.config.as_deref())?;
    if cli.no_seed {
        config.seed = false;
    }

    let mut service = DocumentService::new(open_registry(&config)?);

    match cli.command {
        Some(Commands::List { query }) => {
            print_list(&service, &config, query.as_deref().unwrap_or(""));
            Ok(())
        }
        Some(Commands::Stats) => {
            print!("{}", format_counts(&service.stats()));
            Ok(())
        }
        Some(Commands::Types) => {
            print!("{}", format_type_list());
            Ok(())
        }
        Some(Commands::Create {
            doc_type,
            patient,
            doctor,
        }) => {
            let created = service.create(&doc_type, &patient, &doctor)?;
            println!("Создан документ:");
            println!("{}", format_document(&created, &config.date_format));
            println!();
            print_list(&service, &config, "");
            Ok(())
        }
        Some(Commands::Session) => run_session(&mut service, &config, io::stdin().lock()),
        None => {
            print!("{}", format_header(&config.clinic));
            println!("Use --help for usage information");
            Ok(())
        }
    }
}

fn print_list(service: &DocumentService, config: &Config, query: &str) {
    print!("{}", format_header(&config.clinic));
    println!();
    let docs = service.search(query);
    print!("{}", format_document_list(&docs, &config.date_format));
    if docs.is_empty() {
        println!();
    }
}

/// Execute commands line by line. Rejected input is reported and the session goes on.
fn run_session(
    service: &mut DocumentService,
    config: &Config,
    input: impl BufRead,
) -> Result<(), DentdocError> {
    for line in input.lines() {
        let line = line?;
        let command = match SessionCommand::parse(&line) {
            Ok(Some(command)) => command,
            Ok(None) => continue,
            Err(e) => {
                eprintln!("Error: {}", e);
                continue;
            }
        };

        match command {
            SessionCommand::List { query } => {
                let docs = service.search(&query);
                print!("{}", format_document_list(&docs, &config.date_format));
                if docs.is_empty() {
                    println!();
                }
            }
            SessionCommand::Stats => print!("{}", format_counts(&service.stats())),
            SessionCommand::Types => print!("{}", format_type_list()),
            SessionCommand::Create {
                doc_type,
                patient_name,
                doctor,
            } => match service.create(&doc_type, &patient_name, &doctor) {
                Ok(created) => println!(
                    "Создан документ: {}",
                    format_document(&created, &config.date_format)
                ),
                Err(e) => eprintln!("Error: {}", e),
            },
            SessionCommand::Help => println!("{}", dentdoc::application::session::HELP),
            SessionCommand::Quit => break,
        }
    }

    Ok(())
}
