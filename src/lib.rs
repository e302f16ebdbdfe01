//! Declarative command line arguments parser.
//!
//! Flags, options, enumerated options, positionals and subcommands are
//! registered on a [`Parser`], which then resolves an argument list in a
//! single left to right pass:
//!
//! ```
//! use argot::{Flag, Opt, Outcome, Parser, Positional};
//!
//! let mut p = Parser::new("cp", "Copy a file");
//! let verbose = p.add_flag(Flag::new("verbose").short('v')).unwrap();
//! let mode = p.add_option(Opt::new("mode").short('m').default("0644")).unwrap();
//! let src = p.add_positional(Positional::new("SRC").required()).unwrap();
//!
//! let outcome = p.parse(&["cp", "-vm", "0600", "a.txt"]).unwrap();
//! assert_eq!(outcome, Outcome::Parsed);
//! assert!(p.flag(verbose));
//! assert_eq!(p.value(mode), Some("0600"));
//! assert_eq!(p.positional(src), Some("a.txt"));
//! ```
//!
//! In `-vm 0600`, `v` is a flag and `m` is an option, which ends the short
//! cluster and takes the next token as its value.

mod config;
mod error;
mod help;
mod item;
mod registry;
mod report;
mod rt;

pub use crate::{
    config::Limits,
    error::{Error, ErrorKind, RegisterError, Result},
    item::{Arity, EnumOpt, Flag, Handler, Opt, Positional, Subcommand},
    registry::{EnumId, FlagId, OptId, Parser, PosId},
    rt::Outcome,
};
