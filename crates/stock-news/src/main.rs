use std::process::ExitCode;

use anyhow::Result;
use colored::Colorize;
use config::Config;
use env_logger::Env;
use log::error;
use stock_news::App;

#[tokio::main]
async fn main() -> ExitCode {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    println!("{}", ">".repeat(app::LINE_LENGTH));
    let code = match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e:?}");
            println!("{:#^width$}", " Error ", width = app::LINE_LENGTH);
            eprintln!("{}", format!("{e:?}").red());
            ExitCode::FAILURE
        }
    };
    println!("{}", "<".repeat(app::LINE_LENGTH));

    code
}

async fn run() -> Result<()> {
    println!("{} {}", app::NAME, app::VERSION);

    let config = Config::load()?;
    let app = App::from_config(&config)?;

    app.run().await?;
    Ok(())
}
