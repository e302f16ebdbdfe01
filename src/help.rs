use std::fmt::Write;

use crate::Parser;

macro_rules! w {
    ($($tt:tt)*) => {{
        let _ = write!($($tt)*);
    }};
}

impl Parser<'_> {
    /// Renders usage and the list of registered items, in registration order.
    pub fn help(&self) -> String {
        let mut buf = String::new();

        w!(buf, "usage: {}", self.prog);
        if !self.subcommands.is_empty() {
            w!(buf, " <command>");
        }
        if self.has_options() {
            w!(buf, " [options]");
        }
        for pos in &self.positionals {
            w!(buf, " <{}>", pos.item.name);
        }
        w!(buf, "\n");

        if !self.desc.is_empty() {
            blank_line(&mut buf);
            w!(buf, "{}\n", self.desc);
        }

        if !self.subcommands.is_empty() {
            blank_line(&mut buf);
            w!(buf, "commands:\n");
            let rows = self.subcommands.iter().map(|it| (it.name.to_string(), it.help.to_string()));
            write_rows(&mut buf, rows.collect());
        }

        blank_line(&mut buf);
        w!(buf, "options:\n");
        write_rows(&mut buf, self.option_rows());

        if !self.positionals.is_empty() {
            blank_line(&mut buf);
            w!(buf, "arguments:\n");
            let rows =
                self.positionals.iter().map(|it| (it.item.name.to_string(), it.item.help.to_string()));
            write_rows(&mut buf, rows.collect());
        }

        buf
    }

    fn has_options(&self) -> bool {
        !(self.flags.is_empty() && self.options.is_empty() && self.enums.is_empty())
    }

    fn option_rows(&self) -> Vec<(String, String)> {
        let mut rows = Vec::new();
        for flag in &self.flags {
            rows.push((head(flag.item.short, flag.item.name, None), flag.item.help.to_string()));
        }
        for opt in &self.options {
            let item = &opt.item;
            let value = value_name(item.value_name, item.name);
            let mut help = item.help.to_string();
            if let Some(default) = item.default {
                push_word(&mut help, &format!("(default: {default})"));
            }
            rows.push((head(item.short, item.name, Some(&value)), help));
        }
        for opt in &self.enums {
            let item = &opt.item;
            let value = value_name(item.value_name, item.name);
            let mut help = item.help.to_string();
            push_word(&mut help, &format!("[{}]", item.choices.join("|")));
            if let Some(default) = item.default.and_then(|idx| item.choices.get(idx)) {
                push_word(&mut help, &format!("(default: {default})"));
            }
            rows.push((head(item.short, item.name, Some(&value)), help));
        }
        rows.push((head(Some('h'), "help", None), "Print help information".to_string()));
        rows
    }
}

fn head(short: Option<char>, name: &str, value: Option<&str>) -> String {
    let mut buf = match short {
        Some(c) => format!("-{c}, "),
        None => "    ".to_string(),
    };
    w!(buf, "--{name}");
    if let Some(value) = value {
        w!(buf, " <{value}>");
    }
    buf
}

fn value_name(explicit: Option<&str>, name: &str) -> String {
    match explicit {
        Some(it) => it.to_string(),
        None => name.to_ascii_uppercase().replace('-', "_"),
    }
}

fn push_word(buf: &mut String, word: &str) {
    if !buf.is_empty() {
        buf.push(' ');
    }
    buf.push_str(word);
}

fn write_rows(buf: &mut String, rows: Vec<(String, String)>) {
    let width = rows.iter().map(|(head, _)| head.chars().count()).max().unwrap_or(0);
    for (head, help) in rows {
        let line = format!("  {head:<width$}  {help}");
        w!(buf, "{}\n", line.trim_end());
    }
}

fn blank_line(buf: &mut String) {
    w!(buf, "\n");
}
