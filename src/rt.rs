use std::fmt;

use tracing::{debug, trace};

use crate::{item::Arity, item::Subcommand, Error, ErrorKind, Parser, Result};

macro_rules! format_err {
    ($kind:ident, $($tt:tt)*) => {
        Error { kind: ErrorKind::$kind, msg: format!($($tt)*) }
    };
}

macro_rules! bail {
    ($($tt:tt)*) => {
        return Err(format_err!($($tt)*))
    };
}

/// How a successful parse ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome<'a> {
    /// Every token was consumed and all required items are set.
    Parsed,
    /// `-h`/`--help` was seen, or a subcommand without a handler was
    /// invoked. Holds the rendered help of the relevant parser.
    Help(String),
    /// A subcommand handler ran; `code` is what it returned.
    Dispatched { command: &'a str, code: i32 },
}

impl Outcome<'_> {
    pub fn code(&self) -> i32 {
        match self {
            Outcome::Parsed | Outcome::Help(_) => 0,
            Outcome::Dispatched { code, .. } => *code,
        }
    }
}

/// What an option was spelled as on the command line.
#[derive(Debug, Clone, Copy)]
enum Key<'k> {
    Long(&'k str),
    Short(char),
}

impl Key<'_> {
    fn matches(self, short: Option<char>, name: &str) -> bool {
        match self {
            Key::Long(long) => long == name,
            Key::Short(c) => short == Some(c),
        }
    }

    /// `--name`, or `-n/--name` when given by alias.
    fn spell(self, name: &str) -> String {
        match self {
            Key::Long(long) => format!("--{long}"),
            Key::Short(c) => format!("-{c}/--{name}"),
        }
    }
}

impl fmt::Display for Key<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Key::Long(long) => write!(f, "--{long}"),
            Key::Short(c) => write!(f, "-{c}"),
        }
    }
}

impl<'a> Parser<'a> {
    /// Parses `args` into the registered destinations.
    ///
    /// `args[0]` is the program name and is skipped. Only destinations named
    /// by `args` are written, so values from an earlier parse survive unless
    /// overwritten; call [`Parser::reset`] first for a fresh pass. On error,
    /// values applied before the offending token are kept.
    pub fn parse(&mut self, args: &[&'a str]) -> Result<Outcome<'a>> {
        let mut pos = 0;
        let mut i = 1;
        while i < args.len() {
            let arg = args[i];
            trace!(arg, "token");

            if arg == "--" {
                for &rest in &args[i + 1..] {
                    match self.positionals.get_mut(pos) {
                        Some(slot) => slot.value = Some(rest),
                        None => break,
                    }
                    pos += 1;
                }
                break;
            }

            if arg == "-h" || arg == "--help" {
                debug!(prog = self.prog, "help requested");
                return Ok(Outcome::Help(self.help()));
            }

            if let Some(cmd) = self.subcommands.iter_mut().find(|it| it.name == arg) {
                return Ok(cmd.dispatch(&args[i..]));
            }

            if let Some(long) = arg.strip_prefix("--") {
                self.parse_long(long, args, &mut i)?;
            } else if arg.len() > 1 && arg.starts_with('-') {
                self.parse_short(&arg[1..], args, &mut i)?;
            } else {
                match self.positionals.get_mut(pos) {
                    Some(slot) => slot.value = Some(arg),
                    None => bail!(UnrecognizedOption, "unrecognized option: {arg}"),
                }
                pos += 1;
            }
            i += 1;
        }

        self.validate()?;
        Ok(Outcome::Parsed)
    }

    /// Convenience for owned argument lists such as `env::args().collect()`.
    pub fn parse_from<S: AsRef<str>>(&mut self, args: &'a [S]) -> Result<Outcome<'a>> {
        let args = args.iter().map(|it| it.as_ref()).collect::<Vec<&'a str>>();
        self.parse(&args)
    }

    // `body` is the token without its leading `--`.
    fn parse_long(&mut self, body: &'a str, args: &[&'a str], i: &mut usize) -> Result<()> {
        let (name, attached) = match body.split_once('=') {
            Some((name, value)) => (name, Some(value)),
            None => (body, None),
        };
        if name.len() >= self.limits.name_max {
            bail!(UnrecognizedOption, "unrecognized option: --{body}");
        }

        let value = match attached {
            Some(value) => Some(value),
            None if self.flags.iter().any(|it| it.item.name == name) => None,
            None => next_value(args, i),
        };
        self.apply(Key::Long(name), value)
    }

    // `cluster` is the token without its leading `-`.
    fn parse_short(&mut self, cluster: &'a str, args: &[&'a str], i: &mut usize) -> Result<()> {
        for (at, c) in cluster.char_indices() {
            if let Some(flag) = self.flags.iter_mut().find(|it| it.item.short == Some(c)) {
                trace!(short = %c, "flag");
                flag.value = true;
                continue;
            }

            // Anything after an option's alias is its value, never more flags.
            let rest = &cluster[at + c.len_utf8()..];
            let value = if rest.is_empty() { next_value(args, i) } else { Some(rest) };
            return self.apply(Key::Short(c), value);
        }
        Ok(())
    }

    fn apply(&mut self, key: Key<'_>, value: Option<&'a str>) -> Result<()> {
        if let Some(flag) = self.flags.iter_mut().find(|it| key.matches(it.item.short, it.item.name))
        {
            if value.is_some() {
                bail!(UnrecognizedOption, "flag {key} does not take a value");
            }
            flag.value = true;
            return Ok(());
        }

        if let Some(opt) =
            self.options.iter_mut().find(|it| key.matches(it.item.short, it.item.name))
        {
            let value = value.ok_or_else(|| {
                format_err!(MissingValue, "missing value for option: {}", key.spell(opt.item.name))
            })?;
            trace!(name = opt.item.name, value, "option");
            opt.value = Some(value);
            return Ok(());
        }

        if let Some(opt) = self.enums.iter_mut().find(|it| key.matches(it.item.short, it.item.name))
        {
            let value = value.ok_or_else(|| {
                format_err!(MissingValue, "missing value for option: {}", key.spell(opt.item.name))
            })?;
            match opt.item.choices.iter().position(|choice| *choice == value) {
                Some(idx) => {
                    trace!(name = opt.item.name, value, "enum option");
                    opt.value = Some(idx);
                }
                None => bail!(
                    InvalidValue,
                    "invalid value '{value}' for option: {}",
                    key.spell(opt.item.name)
                ),
            }
            return Ok(());
        }

        bail!(UnrecognizedOption, "unrecognized option: {key}")
    }

    /// Reports the first required item left unset, checking flags, options,
    /// enum options and positionals in that order.
    fn validate(&self) -> Result<()> {
        let required = |arity: Arity| arity == Arity::Required;

        let res = if let Some(flag) =
            self.flags.iter().find(|it| required(it.item.arity) && !it.value)
        {
            Err(format_err!(MissingRequired, "missing required flag: --{}", flag.item.name))
        } else if let Some(opt) =
            self.options.iter().find(|it| required(it.item.arity) && it.value.is_none())
        {
            Err(format_err!(MissingRequired, "missing required option: --{}", opt.item.name))
        } else if let Some(opt) =
            self.enums.iter().find(|it| required(it.item.arity) && it.value.is_none())
        {
            Err(format_err!(MissingRequired, "missing required option: --{}", opt.item.name))
        } else if let Some(pos) =
            self.positionals.iter().find(|it| required(it.item.arity) && it.value.is_none())
        {
            Err(format_err!(MissingRequired, "missing required argument: {}", pos.item.name))
        } else {
            Ok(())
        };

        if let Err(err) = &res {
            debug!(prog = self.prog, %err, "validation failed");
        }
        res
    }
}

impl<'a> Subcommand<'a> {
    /// `args[0]` is the subcommand name, which the nested parser skips like
    /// any program name.
    fn dispatch(&mut self, args: &[&'a str]) -> Outcome<'a> {
        debug!(command = self.name, "dispatching subcommand");
        match &mut self.handler {
            Some(handler) => {
                let code = handler(&mut self.parser, args);
                Outcome::Dispatched { command: self.name, code }
            }
            None => Outcome::Help(self.parser.help()),
        }
    }
}

fn next_value<'a>(args: &[&'a str], i: &mut usize) -> Option<&'a str> {
    *i += 1;
    args.get(*i).copied()
}
