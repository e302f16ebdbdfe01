use tracing::debug;

use crate::{
    item::{EnumOpt, Flag, Opt, Positional, Subcommand},
    Limits, RegisterError,
};

/// Handle to the destination of a registered [`Flag`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FlagId(usize);

/// Handle to the destination of a registered [`Opt`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct OptId(usize);

/// Handle to the destination of a registered [`EnumOpt`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EnumId(usize);

/// Handle to the destination of a registered [`Positional`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PosId(usize);

/// A registered item together with its destination.
#[derive(Debug)]
pub(crate) struct Slot<I, V> {
    pub(crate) item: I,
    pub(crate) value: V,
}

/// Command line parser for one command.
///
/// Items are registered up front with the `add_*` methods, each returning a
/// handle to a destination owned by the parser. After [`Parser::parse`] the
/// destinations are read back through [`Parser::flag`], [`Parser::value`],
/// [`Parser::choice`] and [`Parser::positional`]. Every destination holds its
/// default from the moment it is registered.
///
/// All strings, including parsed values, are borrowed for `'a`: values are
/// slices of the argument list handed to `parse`.
#[derive(Debug)]
pub struct Parser<'a> {
    pub(crate) prog: &'a str,
    pub(crate) desc: &'a str,
    pub(crate) limits: Limits,
    pub(crate) flags: Vec<Slot<Flag<'a>, bool>>,
    pub(crate) options: Vec<Slot<Opt<'a>, Option<&'a str>>>,
    pub(crate) enums: Vec<Slot<EnumOpt<'a>, Option<usize>>>,
    pub(crate) positionals: Vec<Slot<Positional<'a>, Option<&'a str>>>,
    pub(crate) subcommands: Vec<Subcommand<'a>>,
}

impl<'a> Parser<'a> {
    pub fn new(prog: &'a str, desc: &'a str) -> Self {
        Parser::with_limits(prog, desc, Limits::default())
    }

    pub fn with_limits(prog: &'a str, desc: &'a str, limits: Limits) -> Self {
        Parser {
            prog,
            desc,
            limits,
            flags: Vec::new(),
            options: Vec::new(),
            enums: Vec::new(),
            positionals: Vec::new(),
            subcommands: Vec::new(),
        }
    }

    pub fn add_flag(&mut self, flag: Flag<'a>) -> Result<FlagId, RegisterError> {
        check_capacity("flags", self.flags.len(), self.limits.max_flags)?;
        self.check_unique(flag.short, flag.name)?;
        debug!(name = flag.name, "registered flag");
        self.flags.push(Slot { item: flag, value: false });
        Ok(FlagId(self.flags.len() - 1))
    }

    pub fn add_option(&mut self, opt: Opt<'a>) -> Result<OptId, RegisterError> {
        check_capacity("options", self.options.len(), self.limits.max_options)?;
        self.check_unique(opt.short, opt.name)?;
        debug!(name = opt.name, "registered option");
        let value = opt.default;
        self.options.push(Slot { item: opt, value });
        Ok(OptId(self.options.len() - 1))
    }

    pub fn add_enum(&mut self, opt: EnumOpt<'a>) -> Result<EnumId, RegisterError> {
        check_capacity("enum options", self.enums.len(), self.limits.max_enums)?;
        if opt.choices.is_empty() {
            return Err(RegisterError::EmptyChoices { name: opt.name.to_string() });
        }
        if let Some(default) = opt.default {
            if default >= opt.choices.len() {
                return Err(RegisterError::DefaultOutOfRange {
                    name: opt.name.to_string(),
                    default,
                    len: opt.choices.len(),
                });
            }
        }
        self.check_unique(opt.short, opt.name)?;
        debug!(name = opt.name, choices = opt.choices.len(), "registered enum option");
        let value = opt.default;
        self.enums.push(Slot { item: opt, value });
        Ok(EnumId(self.enums.len() - 1))
    }

    pub fn add_positional(&mut self, pos: Positional<'a>) -> Result<PosId, RegisterError> {
        check_capacity("positionals", self.positionals.len(), self.limits.max_positionals)?;
        if self.positionals.iter().any(|it| it.item.name == pos.name) {
            return Err(RegisterError::DuplicateName { name: pos.name.to_string() });
        }
        debug!(name = pos.name, "registered positional");
        self.positionals.push(Slot { item: pos, value: None });
        Ok(PosId(self.positionals.len() - 1))
    }

    pub fn add_subcommand(&mut self, cmd: Subcommand<'a>) -> Result<(), RegisterError> {
        check_capacity("subcommands", self.subcommands.len(), self.limits.max_subcommands)?;
        if self.subcommands.iter().any(|it| it.name == cmd.name) {
            return Err(RegisterError::DuplicateName { name: cmd.name.to_string() });
        }
        debug!(name = cmd.name, "registered subcommand");
        self.subcommands.push(cmd);
        Ok(())
    }

    pub fn flag(&self, id: FlagId) -> bool {
        self.flags.get(id.0).map_or(false, |it| it.value)
    }

    pub fn value(&self, id: OptId) -> Option<&'a str> {
        self.options.get(id.0).and_then(|it| it.value)
    }

    pub fn choice(&self, id: EnumId) -> Option<usize> {
        self.enums.get(id.0).and_then(|it| it.value)
    }

    /// The matched choice itself rather than its index.
    pub fn choice_str(&self, id: EnumId) -> Option<&'a str> {
        let slot = self.enums.get(id.0)?;
        slot.value.and_then(|idx| slot.item.choices.get(idx).copied())
    }

    pub fn positional(&self, id: PosId) -> Option<&'a str> {
        self.positionals.get(id.0).and_then(|it| it.value)
    }

    pub fn prog(&self) -> &'a str {
        self.prog
    }

    pub fn len_flags(&self) -> usize {
        self.flags.len()
    }

    pub fn len_options(&self) -> usize {
        self.options.len()
    }

    pub fn len_enums(&self) -> usize {
        self.enums.len()
    }

    pub fn len_positionals(&self) -> usize {
        self.positionals.len()
    }

    pub fn len_subcommands(&self) -> usize {
        self.subcommands.len()
    }

    /// Puts every destination back to the value it got at registration.
    ///
    /// [`Parser::parse`] never does this on its own.
    pub fn reset(&mut self) {
        debug!(prog = self.prog, "reset");
        for flag in &mut self.flags {
            flag.value = false;
        }
        for opt in &mut self.options {
            opt.value = opt.item.default;
        }
        for opt in &mut self.enums {
            opt.value = opt.item.default;
        }
        for pos in &mut self.positionals {
            pos.value = None;
        }
    }

    // Flags, options and enum options share one namespace for both
    // short aliases and long names. `-h`/`--help` are always taken.
    fn check_unique(&self, short: Option<char>, name: &str) -> Result<(), RegisterError> {
        if name == "help" {
            return Err(RegisterError::DuplicateName { name: name.to_string() });
        }
        if short == Some('h') {
            return Err(RegisterError::DuplicateShort { short: 'h' });
        }
        let taken = self
            .flags
            .iter()
            .map(|it| (it.item.short, it.item.name))
            .chain(self.options.iter().map(|it| (it.item.short, it.item.name)))
            .chain(self.enums.iter().map(|it| (it.item.short, it.item.name)));
        for (other_short, other_name) in taken {
            if other_name == name {
                return Err(RegisterError::DuplicateName { name: name.to_string() });
            }
            if let (Some(short), Some(other)) = (short, other_short) {
                if short == other {
                    return Err(RegisterError::DuplicateShort { short });
                }
            }
        }
        Ok(())
    }
}

fn check_capacity(kind: &'static str, len: usize, max: usize) -> Result<(), RegisterError> {
    if len >= max {
        return Err(RegisterError::Capacity { kind, max });
    }
    Ok(())
}
