use std::env;

use argot::{EnumOpt, Parser, RegisterError};
use tracing_subscriber::EnvFilter;

const MODES: &[&str] = &["A", "B", "C"];

fn main() -> Result<(), RegisterError> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args = env::args().collect::<Vec<_>>();
    let argv = args.iter().map(String::as_str).collect::<Vec<_>>();

    let mut cli = Parser::new(argv.first().copied().unwrap_or("enum"), "Enum example: -m/--mode");
    let mode = cli.add_enum(
        EnumOpt::new("mode", MODES).short('m').value_name("MODE").help("Select mode").default(0),
    )?;

    cli.parse_or_exit(&argv);
    println!("mode={}", cli.choice_str(mode).unwrap_or_default());
    Ok(())
}
