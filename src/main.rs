use bubbletea_rs::Program;
use clap::Parser;
use egg_timer::config::{self, Config};
use egg_timer::{logging, App};

#[tokio::main]
async fn main() {
    let config = Config::parse();

    if let Err(e) = run(config).await {
        log::error!("{}", e);
        eprintln!("egg-timer: {}", e);
        std::process::exit(1);
    }
}

async fn run(config: Config) -> egg_timer::Result<()> {
    logging::init(config.log_file.as_deref())?;
    config::install(config);

    let program = Program::<App>::builder().alt_screen(true).build()?;
    let app = program.run().await?;
    app.into_result()?;

    log::info!("bye");
    Ok(())
}
