use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use inquire::CustomType;
use meteo_core::{Config, Coordinates, OpenMeteoProvider, WeatherProvider, format_report_now};

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "meteo", version, about = "Current weather report from Open-Meteo")]
pub struct Cli {
    /// Log request details to stderr.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Print the current weather report (the default).
    Show(LocationArgs),

    /// Store a default location in the config file.
    Configure,
}

#[derive(Debug, Default, Args)]
pub struct LocationArgs {
    /// Latitude in decimal degrees; overrides the configured location.
    #[arg(long, allow_negative_numbers = true)]
    pub latitude: Option<f64>,

    /// Longitude in decimal degrees; overrides the configured location.
    #[arg(long, allow_negative_numbers = true)]
    pub longitude: Option<f64>,
}

impl Cli {
    pub async fn run(self) -> anyhow::Result<()> {
        let config = Config::load()?;

        match self.command.unwrap_or(Command::Show(LocationArgs::default())) {
            Command::Show(location) => show(&config, location).await,
            Command::Configure => configure(config),
        }
    }
}

async fn show(config: &Config, location: LocationArgs) -> anyhow::Result<()> {
    let coordinates = config.resolve_coordinates(location.latitude, location.longitude);
    let provider = OpenMeteoProvider::new().with_endpoint(config.endpoint());

    tracing::info!(
        latitude = coordinates.latitude,
        longitude = coordinates.longitude,
        endpoint = provider.endpoint(),
        "fetching current conditions"
    );

    let payload = provider.current(coordinates).await?;
    println!("{}", format_report_now(&payload, coordinates));

    Ok(())
}

fn configure(mut config: Config) -> anyhow::Result<()> {
    let current = config.coordinates();

    let latitude = CustomType::<f64>::new("Latitude:")
        .with_default(current.latitude)
        .with_error_message("Please enter a number, e.g. 43.2833")
        .prompt()
        .context("Failed to read latitude")?;

    let longitude = CustomType::<f64>::new("Longitude:")
        .with_default(current.longitude)
        .with_error_message("Please enter a number, e.g. -2.1667")
        .prompt()
        .context("Failed to read longitude")?;

    config.set_location(Coordinates::new(latitude, longitude));
    let path = config.save()?;

    println!("Saved default location {latitude}, {longitude} to {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_subcommand_means_show() {
        let cli = Cli::try_parse_from(["meteo"]).expect("valid args");
        assert!(cli.command.is_none());
        assert!(!cli.verbose);
    }

    #[test]
    fn show_accepts_negative_coordinates() {
        let cli = Cli::try_parse_from(["meteo", "show", "--latitude", "40", "--longitude", "-3"])
            .expect("valid args");

        match cli.command {
            Some(Command::Show(location)) => {
                assert_eq!(location.latitude, Some(40.0));
                assert_eq!(location.longitude, Some(-3.0));
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn verbose_is_global() {
        let cli = Cli::try_parse_from(["meteo", "show", "-v"]).expect("valid args");
        assert!(cli.verbose);
    }

    #[test]
    fn rejects_non_numeric_latitude() {
        assert!(Cli::try_parse_from(["meteo", "show", "--latitude", "north"]).is_err());
    }

    #[test]
    fn configure_takes_no_arguments() {
        let cli = Cli::try_parse_from(["meteo", "configure"]).expect("valid args");
        assert!(matches!(cli.command, Some(Command::Configure)));
    }
}
