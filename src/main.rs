use clap::{Arg, Command, ValueHint};
use log::LevelFilter;
use std::path::PathBuf;

use logistic::config::{load_config, ExperimentConfig};
use logistic::experiment;
use logistic::report::plot_error_curves;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::default()
        .filter_level(LevelFilter::Warn)
        .parse_env(env_logger::Env::default().filter_or("LOGISTIC_LOG", "info"))
        .init();

    let matches = Command::new("logistic")
        .version(clap::crate_version!())
        .about("Gradient-descent logistic regression on the breast cancer dataset")
        .arg(
            Arg::new("config")
                .short('c')
                .long("config")
                .help("Path to a JSON experiment configuration")
                .value_parser(clap::value_parser!(PathBuf))
                .value_hint(ValueHint::FilePath),
        )
        .arg(
            Arg::new("data")
                .short('d')
                .long("data")
                .help("Path to the dataset CSV. Overrides the configuration file.")
                .value_parser(clap::value_parser!(PathBuf))
                .value_hint(ValueHint::FilePath),
        )
        .arg(
            Arg::new("plot")
                .short('p')
                .long("plot")
                .help("Write the per-epoch error curves to this SVG file")
                .value_parser(clap::value_parser!(PathBuf))
                .value_hint(ValueHint::FilePath),
        )
        .get_matches();

    let mut config = match matches.get_one::<PathBuf>("config") {
        Some(path) => load_config(path)?,
        None => ExperimentConfig::default(),
    };
    if let Some(data_path) = matches.get_one::<PathBuf>("data") {
        config.data_path.clone_from(data_path);
    }

    let report = experiment::run(&config)?;

    if let Some(plot_path) = matches.get_one::<PathBuf>("plot") {
        plot_error_curves(plot_path, &report)?;
    }

    println!("{report}");

    Ok(())
}
