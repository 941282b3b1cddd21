use chapters::application::GenerateChaptersService;
use chapters::cli::{format_outcome, format_summary, Cli};
use chapters::error::ChaptersError;
use chapters::infrastructure::FileSystemRepository;
use clap::Parser;

fn main() {
    let cli = Cli::parse();

    env_logger::Builder::new()
        .filter_level(cli.log_level())
        .format_timestamp(None)
        .format_target(false)
        .init();

    let result = run(cli);

    match result {
        Ok(_) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {}", e.display_with_suggestions());
            std::process::exit(e.exit_code());
        }
    }
}

fn run(cli: Cli) -> Result<(), ChaptersError> {
    let repo = FileSystemRepository::open(cli.dir.clone())?;
    let service = GenerateChaptersService::new(repo);

    let report = service.execute(&cli.options())?;

    for (path, outcome) in &report.documents {
        if outcome.is_failure() {
            eprintln!("{}", format_outcome(path, outcome));
        } else if !cli.quiet {
            println!("{}", format_outcome(path, outcome));
        }
    }

    if !cli.quiet {
        println!("{}", format_summary(&report));
    }

    report.into_result().map(|_| ())
}
