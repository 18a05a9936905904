use crate::cli_err::CliErr;
use crate::config::Config;
use crate::demo::Demo;

#[macro_use]
mod print;
mod cli_err;
mod config;
mod demo;
mod parse;

fn main() {
    if let Err(e) = run() {
        e.termination();
    }
}

fn run() -> Result<(), CliErr> {
    let mut args = std::env::args().skip(1).peekable();
    let configs = parse::parse_configs(&mut args);
    if configs.contains(&Config::Help) {
        print_help();
        return Ok(());
    }
    if configs.contains(&Config::Version) {
        println!("{} {}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));
        return Ok(());
    }
    let demo = parse::parse(args)?;
    if configs.contains(&Config::Verbose) {
        println_notice!("Demo `{}`:", demo.name());
        println_notice!("    {:?}", demo);
        println_notice!("    {}", demo.help());
    }
    if !configs.contains(&Config::DryRun) { demo.run() } else { Ok(()) }
}

fn print_help() {
    println!("Usage: {} [-h] [-V] [-v] [-d] <demo> [<arg>...]", env!("CARGO_PKG_NAME"));
    println!();
    println!("Options:");
    println!("    -h    print help");
    println!("    -V    print version");
    println!("    -v    print the parsed demo before running it");
    println!("    -d    parse only, do not run");
    println!();
    println!("Demos:");
    for (_, help) in Demo::all_help() {
        println!("    {help}");
    }
}
