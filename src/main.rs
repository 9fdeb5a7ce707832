use ipnetwork_calc::functions::{dispatch, FUNCTIONS};
use ipnetwork_calc::output::{format_error, format_usage, format_value};
use log::LevelFilter;
use log4rs::append::console::{ConsoleAppender, Target};
use log4rs::config::{Appender, Config, Root};
use std::error::Error;
use std::process::ExitCode;

/// Load `log4rs.yml`, or log warnings to stderr when it is missing.
fn init_logging() -> Result<(), Box<dyn Error>> {
    if let Err(e) = log4rs::init_file("log4rs.yml", Default::default()) {
        let stderr = ConsoleAppender::builder().target(Target::Stderr).build();
        let config = Config::builder()
            .appender(Appender::builder().build("stderr", Box::new(stderr)))
            .build(Root::builder().appender("stderr").build(LevelFilter::Warn))?;
        log4rs::init_config(config)?;
        log::debug!("log4rs.yml not loaded: {e}");
    }
    Ok(())
}

fn main() -> ExitCode {
    // Do as little as possible in main.rs as it can't contain any tests
    dotenv::dotenv().ok();
    if let Err(e) = init_logging() {
        eprintln!("{}", format_error("init_logging", e.as_ref()));
    }
    log::info!("#Start main()");

    let mut args = std::env::args();
    let program = args.next().unwrap_or_else(|| "ipnetwork".to_string());
    let Some(function) = args.next() else {
        eprintln!("{}", format_usage(&program, &FUNCTIONS));
        return ExitCode::from(2);
    };
    if matches!(function.as_str(), "help" | "-h" | "--help") {
        println!("{}", format_usage(&program, &FUNCTIONS));
        return ExitCode::SUCCESS;
    }

    let args: Vec<String> = args.collect();
    match dispatch(&function, &args) {
        Ok(value) => {
            println!("{}", format_value(&value));
            ExitCode::SUCCESS
        }
        Err(e) => {
            log::info!("{function} failed: {e}");
            eprintln!("{}", format_error(&function, e.as_ref()));
            ExitCode::FAILURE
        }
    }
}
