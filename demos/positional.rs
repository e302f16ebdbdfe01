use std::env;

use argot::{Parser, Positional, RegisterError};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), RegisterError> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args = env::args().collect::<Vec<_>>();
    let argv = args.iter().map(String::as_str).collect::<Vec<_>>();

    let prog = argv.first().copied().unwrap_or("positional");
    let mut cli = Parser::new(prog, "Positional example");
    let file = cli.add_positional(Positional::new("FILE").help("Input file path").required())?;

    cli.parse_or_exit(&argv);
    println!("file={}", cli.positional(file).unwrap_or_default());
    Ok(())
}
