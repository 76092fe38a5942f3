use clap::Parser;
use conv_dict::application::BuildService;
use conv_dict::cli::{format_build_report, Cli};
use conv_dict::domain::version;
use conv_dict::error::ConvDictError;
use conv_dict::infrastructure::BuildConfig;

fn main() {
    let cli = Cli::parse();

    let result = run(cli);

    match result {
        Ok(_) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(e.exit_code());
        }
    }
}

fn run(cli: Cli) -> Result<(), ConvDictError> {
    let config = match &cli.config {
        Some(path) => BuildConfig::load(path)?,
        None => BuildConfig::load_from_dir(&cli.dir)?,
    };

    let date_label = match &cli.date {
        Some(label) => version::parse_date_label(label)?,
        None => version::today_label(),
    };

    let service = BuildService::new(&cli.dir, config);
    let report = service.execute(&date_label)?;

    println!("{}", format_build_report(&report, cli.quiet));
    Ok(())
}
