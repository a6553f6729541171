use clap::Parser;
use routewise::app::rank::{RankApp, RankAppConfig, RankAppError, RankQuery};
use routewise_core::util::sampler::RandomSampler;
use std::fs::File;
use std::io::BufReader;

#[derive(Parser, Debug)]
#[command(
    name = "routewise",
    about = "score and rank commute route candidates by reliability and persona"
)]
struct CliArgs {
    /// JSON query file with endpoints, persona, and base router candidates
    query_file: String,
    /// optional TOML configuration naming the lookup table files
    #[arg(long)]
    config_file: Option<String>,
    /// pretty-print the JSON response
    #[arg(long)]
    pretty: bool,
}

fn main() {
    env_logger::init();

    let args = CliArgs::parse();
    match run(&args) {
        Ok(output) => println!("{output}"),
        Err(e) => {
            log::error!("{e}");
            std::process::exit(1);
        }
    }
}

fn run(args: &CliArgs) -> Result<String, RankAppError> {
    let config = match &args.config_file {
        Some(path) => RankAppConfig::from_toml_file(path)?,
        None => RankAppConfig::default(),
    };
    let app = RankApp::new(&config)?;

    let file = File::open(&args.query_file).map_err(|e| RankAppError::QueryError {
        path: args.query_file.clone(),
        message: e.to_string(),
    })?;
    let query: RankQuery =
        serde_json::from_reader(BufReader::new(file)).map_err(|e| RankAppError::QueryError {
            path: args.query_file.clone(),
            message: e.to_string(),
        })?;

    let mut sampler = RandomSampler::new();
    let response = app.run(&query, &mut sampler);
    let output = if args.pretty {
        serde_json::to_string_pretty(&response)
    } else {
        serde_json::to_string(&response)
    }
    .map_err(|e| RankAppError::QueryError {
        path: args.query_file.clone(),
        message: format!("while serializing response, {e}"),
    })?;
    Ok(output)
}
