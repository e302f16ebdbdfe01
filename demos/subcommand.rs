use std::{env, process};

use argot::{Outcome, Parser, Positional, RegisterError, Subcommand};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), RegisterError> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args = env::args().collect::<Vec<_>>();
    let argv = args.iter().map(String::as_str).collect::<Vec<_>>();

    let prog = argv.first().copied().unwrap_or("subcommand");
    let mut cli = Parser::new(prog, "Subcommand example");
    cli.add_subcommand(salute("greet", "Greet someone", "Print greeting", "Hello")?)?;
    cli.add_subcommand(salute("farewell", "Farewell someone", "Print farewell", "Goodbye")?)?;

    process::exit(cli.run(&argv))
}

fn salute<'a>(
    name: &'a str,
    desc: &'a str,
    help: &'a str,
    word: &'a str,
) -> Result<Subcommand<'a>, RegisterError> {
    let mut sub = Parser::new(name, desc);
    let who = sub.add_positional(Positional::new("NAME").help("Name to address").required())?;
    let cmd = Subcommand::new(name, sub).help(help).handler(move |p, args| match p.parse(args) {
        Ok(Outcome::Parsed) => {
            println!("{word}, {}!", p.positional(who).unwrap_or_default());
            0
        }
        res => p.report(res),
    });
    Ok(cmd)
}
