use std::{env, process};

use argot::{Flag, Parser, RegisterError};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), RegisterError> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args = env::args().collect::<Vec<_>>();
    let argv = args.iter().map(String::as_str).collect::<Vec<_>>();

    let mut cli = Parser::new(argv.first().copied().unwrap_or("flag"), "Flag example: -v");
    let verbose = cli.add_flag(Flag::new("verbose").short('v').help("Enable verbose output"))?;

    let code = cli.run(&argv);
    if code != 0 {
        process::exit(code)
    }
    println!("verbose={}", cli.flag(verbose));
    Ok(())
}
