//! Descriptors accepted by the `Parser::add_*` registration calls.

use std::fmt;

use crate::Parser;

/// Whether the parse fails when an item is never set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Arity {
    #[default]
    Optional,
    Required,
}

/// Boolean switch, `-v` / `--verbose`.
#[derive(Debug, Clone)]
pub struct Flag<'a> {
    pub(crate) short: Option<char>,
    pub(crate) name: &'a str,
    pub(crate) help: &'a str,
    pub(crate) arity: Arity,
}

impl<'a> Flag<'a> {
    pub fn new(name: &'a str) -> Self {
        Flag { short: None, name, help: "", arity: Arity::Optional }
    }

    /// `-h` is taken by the help flag and cannot be registered.
    pub fn short(mut self, short: char) -> Self {
        self.short = Some(short);
        self
    }

    pub fn help(mut self, help: &'a str) -> Self {
        self.help = help;
        self
    }

    /// A required flag must be present on every command line.
    pub fn required(self) -> Self {
        self.arity(Arity::Required)
    }

    pub fn arity(mut self, arity: Arity) -> Self {
        self.arity = arity;
        self
    }
}

/// Option taking a free-form string value, `-o out.txt` / `--output=out.txt`.
#[derive(Debug, Clone)]
pub struct Opt<'a> {
    pub(crate) short: Option<char>,
    pub(crate) name: &'a str,
    pub(crate) value_name: Option<&'a str>,
    pub(crate) help: &'a str,
    pub(crate) default: Option<&'a str>,
    pub(crate) arity: Arity,
}

impl<'a> Opt<'a> {
    pub fn new(name: &'a str) -> Self {
        Opt { short: None, name, value_name: None, help: "", default: None, arity: Arity::Optional }
    }

    pub fn short(mut self, short: char) -> Self {
        self.short = Some(short);
        self
    }

    /// Placeholder shown in help, `--output <FILE>`.
    pub fn value_name(mut self, value_name: &'a str) -> Self {
        self.value_name = Some(value_name);
        self
    }

    pub fn help(mut self, help: &'a str) -> Self {
        self.help = help;
        self
    }

    /// Value the destination holds until the option is given.
    pub fn default(mut self, default: &'a str) -> Self {
        self.default = Some(default);
        self
    }

    pub fn required(self) -> Self {
        self.arity(Arity::Required)
    }

    pub fn arity(mut self, arity: Arity) -> Self {
        self.arity = arity;
        self
    }
}

/// Option whose value must be one of a fixed list of choices.
///
/// The destination holds the zero-based index of the matched choice.
/// Matching is exact and case-sensitive.
#[derive(Debug, Clone)]
pub struct EnumOpt<'a> {
    pub(crate) short: Option<char>,
    pub(crate) name: &'a str,
    pub(crate) value_name: Option<&'a str>,
    pub(crate) help: &'a str,
    pub(crate) choices: &'a [&'a str],
    pub(crate) default: Option<usize>,
    pub(crate) arity: Arity,
}

impl<'a> EnumOpt<'a> {
    pub fn new(name: &'a str, choices: &'a [&'a str]) -> Self {
        EnumOpt {
            short: None,
            name,
            value_name: None,
            help: "",
            choices,
            default: None,
            arity: Arity::Optional,
        }
    }

    pub fn short(mut self, short: char) -> Self {
        self.short = Some(short);
        self
    }

    pub fn value_name(mut self, value_name: &'a str) -> Self {
        self.value_name = Some(value_name);
        self
    }

    pub fn help(mut self, help: &'a str) -> Self {
        self.help = help;
        self
    }

    /// Index into the choices; must be in range at registration.
    pub fn default(mut self, index: usize) -> Self {
        self.default = Some(index);
        self
    }

    pub fn required(self) -> Self {
        self.arity(Arity::Required)
    }

    pub fn arity(mut self, arity: Arity) -> Self {
        self.arity = arity;
        self
    }
}

/// Argument identified by its position among the plain tokens.
#[derive(Debug, Clone)]
pub struct Positional<'a> {
    pub(crate) name: &'a str,
    pub(crate) help: &'a str,
    pub(crate) arity: Arity,
}

impl<'a> Positional<'a> {
    pub fn new(name: &'a str) -> Self {
        Positional { name, help: "", arity: Arity::Optional }
    }

    pub fn help(mut self, help: &'a str) -> Self {
        self.help = help;
        self
    }

    pub fn required(self) -> Self {
        self.arity(Arity::Required)
    }

    pub fn arity(mut self, arity: Arity) -> Self {
        self.arity = arity;
        self
    }
}

/// Runs a dispatched subcommand.
///
/// Receives the subcommand's own parser and the rest of the command line,
/// starting with the subcommand name itself in the program-name slot.
/// The returned status becomes the result of the outer parse.
pub type Handler<'a> = Box<dyn FnMut(&mut Parser<'a>, &[&'a str]) -> i32 + 'a>;

/// Named subcommand wrapping its own, independent parser.
pub struct Subcommand<'a> {
    pub(crate) name: &'a str,
    pub(crate) help: &'a str,
    pub(crate) parser: Parser<'a>,
    pub(crate) handler: Option<Handler<'a>>,
}

impl<'a> Subcommand<'a> {
    pub fn new(name: &'a str, parser: Parser<'a>) -> Self {
        Subcommand { name, help: "", parser, handler: None }
    }

    pub fn help(mut self, help: &'a str) -> Self {
        self.help = help;
        self
    }

    /// Without a handler, invoking the subcommand prints its help.
    pub fn handler<F>(mut self, handler: F) -> Self
    where
        F: FnMut(&mut Parser<'a>, &[&'a str]) -> i32 + 'a,
    {
        self.handler = Some(Box::new(handler));
        self
    }
}

impl fmt::Debug for Subcommand<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subcommand")
            .field("name", &self.name)
            .field("help", &self.help)
            .field("parser", &self.parser)
            .field("handler", &self.handler.is_some())
            .finish()
    }
}
