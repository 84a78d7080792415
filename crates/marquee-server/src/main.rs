use clap::Parser;

use marquee_core::{App, Config, logging};

#[derive(Parser)]
#[command(name = "marquee")]
#[command(about = "Admin pages for the movie-theater ticketing database")]
#[command(version)]
struct Cli {
    /// Run pending database migrations and exit
    #[arg(long)]
    migrate: bool,

    /// Override SERVER_HOST
    #[arg(long)]
    host: Option<String>,

    /// Override SERVER_PORT
    #[arg(long)]
    port: Option<u16>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let mut config = Config::from_env()?;
    if let Some(host) = cli.host {
        config.server_host = host;
    }
    if let Some(port) = cli.port {
        config.server_port = port;
    }

    logging::init_from_format(&config.log_format);

    let app = App::with_config(config).await?;

    if cli.migrate {
        app.run_migrations().await?;
        return Ok(());
    }

    app.run().await?;

    Ok(())
}
