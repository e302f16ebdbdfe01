
use argot::{
    EnumId, EnumOpt, ErrorKind, Flag, FlagId, Limits, Opt, OptId, Outcome, Parser, PosId,
    Positional,
};
use expect_test::{expect, Expect};

struct Tool<'a> {
    p: Parser<'a>,
    verbose: FlagId,
    force: FlagId,
    output: OptId,
    config: OptId,
    mode: EnumId,
    src: PosId,
    dst: PosId,
}

#[derive(Debug)]
#[allow(dead_code)]
struct Values<'a> {
    verbose: bool,
    force: bool,
    output: Option<&'a str>,
    config: Option<&'a str>,
    mode: Option<&'a str>,
    src: Option<&'a str>,
    dst: Option<&'a str>,
}

impl<'a> Tool<'a> {
    fn new() -> Tool<'a> {
        let mut p = Parser::new("tool", "Does things with files");
        let verbose =
            p.add_flag(Flag::new("verbose").short('v').help("Enable verbose output")).unwrap();
        let force = p.add_flag(Flag::new("force").short('f')).unwrap();
        let output =
            p.add_option(Opt::new("output").short('o').value_name("FILE").default("a.out")).unwrap();
        let config = p.add_option(Opt::new("config").short('c')).unwrap();
        let mode =
            p.add_enum(EnumOpt::new("mode", &["fast", "slow"]).short('m').default(0)).unwrap();
        let src = p.add_positional(Positional::new("SRC").required()).unwrap();
        let dst = p.add_positional(Positional::new("DST")).unwrap();
        Tool { p, verbose, force, output, config, mode, src, dst }
    }

    fn values(&self) -> Values<'a> {
        Values {
            verbose: self.p.flag(self.verbose),
            force: self.p.flag(self.force),
            output: self.p.value(self.output),
            config: self.p.value(self.config),
            mode: self.p.choice_str(self.mode),
            src: self.p.positional(self.src),
            dst: self.p.positional(self.dst),
        }
    }
}

fn argv(args: &'static str) -> Vec<&'static str> {
    std::iter::once("prog").chain(args.split_ascii_whitespace()).collect()
}

fn check(args: &'static str, expect: Expect) {
    let mut tool = Tool::new();
    let res = tool.p.parse(&argv(args));
    match res {
        Ok(Outcome::Parsed) => expect.assert_eq(&format!("{:?}", tool.values())),
        Ok(Outcome::Help(_)) => expect.assert_eq("help"),
        Ok(outcome) => expect.assert_eq(&format!("{outcome:?}")),
        Err(err) => expect.assert_eq(&format!("error {}: {err}", err.code())),
    }
}

#[test]
fn defaults() {
    check(
        "a",
        expect![[r#"Values { verbose: false, force: false, output: Some("a.out"), config: None, mode: Some("fast"), src: Some("a"), dst: None }"#]],
    );
}

#[test]
fn long_options() {
    check(
        "--verbose --output=x.txt --config cfg.toml --mode slow a b",
        expect![[r#"Values { verbose: true, force: false, output: Some("x.txt"), config: Some("cfg.toml"), mode: Some("slow"), src: Some("a"), dst: Some("b") }"#]],
    );
    check(
        "--output= a",
        expect![[r#"Values { verbose: false, force: false, output: Some(""), config: None, mode: Some("fast"), src: Some("a"), dst: None }"#]],
    );
    // The token after an option is its value, whatever it looks like.
    check(
        "--output -v a",
        expect![[r#"Values { verbose: false, force: false, output: Some("-v"), config: None, mode: Some("fast"), src: Some("a"), dst: None }"#]],
    );
    check("--verbose=1 a", expect!["error 3: flag --verbose does not take a value"]);
    check("--nope a", expect!["error 3: unrecognized option: --nope"]);
    check("a --output", expect!["error 2: missing value for option: --output"]);
}

#[test]
fn short_clusters() {
    check(
        "-vo out.txt a",
        expect![[r#"Values { verbose: true, force: false, output: Some("out.txt"), config: None, mode: Some("fast"), src: Some("a"), dst: None }"#]],
    );
    check(
        "-ovalue a",
        expect![[r#"Values { verbose: false, force: false, output: Some("value"), config: None, mode: Some("fast"), src: Some("a"), dst: None }"#]],
    );
    check(
        "-vf a",
        expect![[r#"Values { verbose: true, force: true, output: Some("a.out"), config: None, mode: Some("fast"), src: Some("a"), dst: None }"#]],
    );
    // Everything after an option alias is its value, even registered flags.
    check(
        "-vof a",
        expect![[r#"Values { verbose: true, force: false, output: Some("f"), config: None, mode: Some("fast"), src: Some("a"), dst: None }"#]],
    );
    check(
        "-ov a",
        expect![[r#"Values { verbose: false, force: false, output: Some("v"), config: None, mode: Some("fast"), src: Some("a"), dst: None }"#]],
    );
    check("a -vo", expect!["error 2: missing value for option: -o/--output"]);
    check("-z a", expect!["error 3: unrecognized option: -z"]);
    check("-vz a", expect!["error 3: unrecognized option: -z"]);
}

#[test]
fn enum_options() {
    check(
        "--mode=slow a",
        expect![[r#"Values { verbose: false, force: false, output: Some("a.out"), config: None, mode: Some("slow"), src: Some("a"), dst: None }"#]],
    );
    check(
        "-mslow a",
        expect![[r#"Values { verbose: false, force: false, output: Some("a.out"), config: None, mode: Some("slow"), src: Some("a"), dst: None }"#]],
    );
    check("--mode=Slow a", expect!["error 3: invalid value 'Slow' for option: --mode"]);
    check("-m turbo a", expect!["error 3: invalid value 'turbo' for option: -m/--mode"]);
    check("a --mode", expect!["error 2: missing value for option: --mode"]);
}

#[test]
fn positionals() {
    check("", expect!["error 1: missing required argument: SRC"]);
    check("a b c", expect!["error 3: unrecognized option: c"]);
    check(
        "- b",
        expect![[r#"Values { verbose: false, force: false, output: Some("a.out"), config: None, mode: Some("fast"), src: Some("-"), dst: Some("b") }"#]],
    );
}

#[test]
fn double_dash() {
    check(
        "-- -v y",
        expect![[r#"Values { verbose: false, force: false, output: Some("a.out"), config: None, mode: Some("fast"), src: Some("-v"), dst: Some("y") }"#]],
    );
    check(
        "x -- -v y",
        expect![[r#"Values { verbose: false, force: false, output: Some("a.out"), config: None, mode: Some("fast"), src: Some("x"), dst: Some("-v") }"#]],
    );
    check(
        "-v -- a b c --help",
        expect![[r#"Values { verbose: true, force: false, output: Some("a.out"), config: None, mode: Some("fast"), src: Some("a"), dst: Some("b") }"#]],
    );
    check("--", expect!["error 1: missing required argument: SRC"]);
}

#[test]
fn help_short_circuits() {
    check("--help", expect!["help"]);
    check("-v -h --nope", expect!["help"]);
    // `--help` here is the value of `--nope`.
    check("--nope --help", expect!["error 3: unrecognized option: --nope"]);
    check(
        "-o --help a",
        expect![[r#"Values { verbose: false, force: false, output: Some("--help"), config: None, mode: Some("fast"), src: Some("a"), dst: None }"#]],
    );
}

#[test]
fn flag_presence() {
    let mut tool = Tool::new();
    tool.p.parse(&["prog", "a"]).unwrap();
    assert!(!tool.p.flag(tool.verbose));

    tool.p.parse(&["prog", "--verbose", "a"]).unwrap();
    assert!(tool.p.flag(tool.verbose));

    tool.p.parse(&["prog", "-v", "a"]).unwrap();
    assert!(tool.p.flag(tool.verbose));
}

#[test]
fn errors_keep_earlier_values() {
    let mut tool = Tool::new();
    let err = tool.p.parse(&["prog", "-v", "--output", "x", "--nope"]).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::UnrecognizedOption);
    assert!(tool.p.flag(tool.verbose));
    assert_eq!(tool.p.value(tool.output), Some("x"));
}

#[test]
fn reparse_overwrites() {
    let first: Vec<String> =
        ["prog", "-v", "-m", "slow", "a", "b"].iter().map(|it| it.to_string()).collect();
    let second: Vec<String> = ["prog", "-o", "x", "c"].iter().map(|it| it.to_string()).collect();
    let mut tool = Tool::new();

    tool.p.parse_from(&first).unwrap();
    assert!(tool.p.flag(tool.verbose));
    assert_eq!(tool.p.choice(tool.mode), Some(1));
    assert_eq!(tool.p.positional(tool.dst), Some("b"));

    // Only what the second list names is written.
    tool.p.parse_from(&second).unwrap();
    assert_eq!(tool.p.value(tool.output), Some("x"));
    assert_eq!(tool.p.positional(tool.src), Some("c"));
    assert!(tool.p.flag(tool.verbose));
    assert_eq!(tool.p.choice(tool.mode), Some(1));
    assert_eq!(tool.p.positional(tool.dst), Some("b"));
}

#[test]
fn earlier_parse_satisfies_requirements() {
    let mut p = Parser::new("prog", "");
    let verbose = p.add_flag(Flag::new("verbose").short('v')).unwrap();
    let out = p.add_option(Opt::new("out").required()).unwrap();

    assert_eq!(p.parse(&["prog", "-v", "--out", "x"]).unwrap(), Outcome::Parsed);
    assert_eq!(p.parse(&["prog"]).unwrap(), Outcome::Parsed);
    assert!(p.flag(verbose));
    assert_eq!(p.value(out), Some("x"));

    // Help leaves destinations alone.
    assert!(matches!(p.parse(&["prog", "-h"]).unwrap(), Outcome::Help(_)));
    assert_eq!(p.value(out), Some("x"));

    p.reset();
    assert!(!p.flag(verbose));
    let err = p.parse(&["prog"]).unwrap_err();
    assert_eq!(err.code(), 1);
    assert_eq!(err.to_string(), "missing required option: --out");
}

#[test]
fn first_missing_required_wins() {
    let mut p = Parser::new("deploy", "");
    let force = p.add_flag(Flag::new("force").required()).unwrap();
    p.add_option(Opt::new("out").required()).unwrap();
    let level = p.add_enum(EnumOpt::new("level", &["lo", "hi"]).required()).unwrap();
    p.add_positional(Positional::new("FILE").required()).unwrap();

    let cases = [
        (&["deploy"][..], "missing required flag: --force"),
        (&["deploy", "--force"][..], "missing required option: --out"),
        (&["deploy", "--force", "--out", "x"][..], "missing required option: --level"),
        (
            &["deploy", "--force", "--out", "x", "--level", "hi"][..],
            "missing required argument: FILE",
        ),
    ];
    for (args, msg) in cases {
        let err = p.parse(args).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MissingRequired);
        assert_eq!(err.code(), 1);
        assert_eq!(err.to_string(), msg);
    }

    let outcome = p.parse(&["deploy", "--force", "--out", "x", "--level", "hi", "f"]).unwrap();
    assert_eq!(outcome, Outcome::Parsed);
    assert_eq!(outcome.code(), 0);
    assert!(p.flag(force));
    assert_eq!(p.choice(level), Some(1));
}

#[test]
fn optional_positional_may_stay_unset() {
    let mut p = Parser::new("cat", "");
    let file = p.add_positional(Positional::new("FILE")).unwrap();
    assert_eq!(p.parse(&["cat"]).unwrap(), Outcome::Parsed);
    assert_eq!(p.positional(file), None);
}

#[test]
fn long_names_are_bounded() {
    let mut p = Parser::with_limits("prog", "", Limits { name_max: 8, ..Limits::default() });
    let verbose = p.add_flag(Flag::new("verbose")).unwrap();
    p.parse(&["prog", "--verbose"]).unwrap();
    assert!(p.flag(verbose));

    let mut p = Parser::with_limits("prog", "", Limits { name_max: 7, ..Limits::default() });
    p.add_flag(Flag::new("verbose")).unwrap();
    let err = p.parse(&["prog", "--verbose"]).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::UnrecognizedOption);
    assert_eq!(err.to_string(), "unrecognized option: --verbose");
}

#[test]
fn duplicate_short_leaves_registry_unchanged() {
    let mut p = Parser::new("prog", "");
    p.add_flag(Flag::new("verbose").short('v')).unwrap();
    let before = p.len_flags();
    assert!(p.add_flag(Flag::new("version").short('v')).is_err());
    assert_eq!(p.len_flags(), before);
}
