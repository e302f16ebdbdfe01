use std::env;

use argot::{Opt, Parser, RegisterError};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), RegisterError> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args = env::args().collect::<Vec<_>>();
    let argv = args.iter().map(String::as_str).collect::<Vec<_>>();

    let prog = argv.first().copied().unwrap_or("option");
    let mut cli = Parser::new(prog, "Option example: -o/--output");
    let output = cli.add_option(
        Opt::new("output")
            .short('o')
            .value_name("FILE")
            .help("Output file path")
            .default("default.txt"),
    )?;

    cli.parse_or_exit(&argv);
    println!("output={}", cli.value(output).unwrap_or_default());
    Ok(())
}
