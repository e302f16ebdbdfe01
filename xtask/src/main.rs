
use std::time::Instant;

use xshell::{cmd, Shell};

fn main() -> xshell::Result<()> {
    let sh = Shell::new()?;
    let _e = sh.push_env("RUSTUP_TOOLCHAIN", "stable");

    step("build", || {
        cmd!(sh, "cargo test --workspace --no-run").run()?;
        cmd!(sh, "cargo build --examples").run()
    })?;
    step("test", || cmd!(sh, "cargo test --workspace").run())?;
    step("publish", || publish(&sh))?;
    Ok(())
}

/// Tags and publishes `argot` when its version has no tag yet. Only runs on
/// `master`.
fn publish(sh: &Shell) -> xshell::Result<()> {
    if cmd!(sh, "git branch --show-current").read()? != "master" {
        return Ok(());
    }
    let pkgid = cmd!(sh, "cargo pkgid -p argot").read()?;
    let tag = match pkgid.rsplit_once(['#', '@']) {
        Some((_, version)) => format!("v{version}"),
        None => format!("v{pkgid}"),
    };
    if cmd!(sh, "git tag --list {tag}").read()?.trim() == tag {
        return Ok(());
    }
    cmd!(sh, "git tag {tag}").run()?;
    cmd!(sh, "cargo publish -p argot").run()?;
    cmd!(sh, "git push --tags").run()
}

fn step(name: &str, f: impl FnOnce() -> xshell::Result<()>) -> xshell::Result<()> {
    println!("::group::{name}");
    let start = Instant::now();
    let res = f();
    eprintln!("{name}: {:.2?}", start.elapsed());
    println!("::endgroup::");
    res
}
