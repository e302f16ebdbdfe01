use std::process;

use crate::{Outcome, Parser, Result};

impl<'a> Parser<'a> {
    /// Parses `args` and prints whatever the caller would otherwise print:
    /// help to stdout, or the error followed by usage to stderr.
    ///
    /// Returns the status code of the parse: `0` on success, the error's
    /// code on failure, the handler's code after subcommand dispatch.
    pub fn run(&mut self, args: &[&'a str]) -> i32 {
        let res = self.parse(args);
        self.report(res)
    }

    /// Like [`Parser::run`], but exits the process unless the parse ended
    /// with [`Outcome::Parsed`].
    pub fn parse_or_exit(&mut self, args: &[&'a str]) {
        let code = match self.parse(args) {
            Ok(Outcome::Parsed) => return,
            res => self.report(res),
        };
        process::exit(code)
    }

    /// Prints the result of a [`Parser::parse`] call the way [`Parser::run`]
    /// does and returns its status code.
    pub fn report(&self, res: Result<Outcome<'a>>) -> i32 {
        match res {
            Ok(Outcome::Help(help)) => {
                print!("{help}");
                0
            }
            Ok(outcome) => outcome.code(),
            Err(err) => {
                tracing::warn!(prog = self.prog, code = err.code(), "{err}");
                eprintln!("{}: error: {err}", self.prog);
                eprint!("{}", self.help());
                err.code()
            }
        }
    }
}
