use clap::Parser;
use dotenvy::dotenv;

use campus_wrapped::cli::{commands, Cli, Commands};
use campus_wrapped::config::AppConfig;
use campus_wrapped::system::logging::init_logging;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();

    let cli = Cli::parse();
    let config = AppConfig::from_env();
    let _guard = init_logging(&config);

    let result = match cli.command {
        Commands::Convert { input, output } => {
            commands::run_convert(&input, &output).map(|count| {
                println!("converted {} POI records", count);
            })
        }
        Commands::ReverseMap {
            short_links,
            output,
        } => commands::run_reverse_map(&short_links, &output).map(|count| {
            println!("derived {} short codes", count);
        }),
        Commands::Resolve { id, base_url } => commands::run_resolve(&id, base_url).await,
    };

    if let Err(e) = result {
        eprintln!("{}", e.format_colored());
        return Err(e.into());
    }

    Ok(())
}
