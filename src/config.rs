/// Upper bounds on the registries of a single [`Parser`](crate::Parser).
///
/// Nested subcommand parsers carry their own limits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Limits {
    pub max_flags: usize,
    pub max_options: usize,
    pub max_enums: usize,
    pub max_positionals: usize,
    pub max_subcommands: usize,
    /// Long option names of this many bytes or more are never recognized.
    pub name_max: usize,
}

impl Default for Limits {
    fn default() -> Self {
        Limits {
            max_flags: 32,
            max_options: 32,
            max_enums: 32,
            max_positionals: 32,
            max_subcommands: 16,
            name_max: 64,
        }
    }
}
