use crate::cli_err::CliErr;
use crate::config::Config;
use crate::demo::{DEFAULT_PRIME_LIMIT, Demo, Integer};
use crate::parse::token::{parse_count, parse_integer, parse_range_args, parse_whole};
use pyseq::Range;
use std::iter::Peekable;

pub(crate) fn parse_configs(args: &mut Peekable<impl Iterator<Item = String>>) -> Vec<Config> {
    let mut configs = Vec::new();
    while let Some(config) = parse_config(args.peek()) {
        args.next();
        configs.push(config);
    }
    configs
}

fn parse_config(arg: Option<&String>) -> Option<Config> {
    match arg {
        Some(arg) => match arg.as_str() {
            "-h" => Some(Config::Help),
            "-V" => Some(Config::Version),
            "-v" => Some(Config::Verbose),
            "-d" => Some(Config::DryRun),
            _ => None, // 遇到未知参数，停止解析（由调用者处理）
        },
        None => None,
    }
}

pub(crate) fn parse(mut args: Peekable<impl Iterator<Item = String>>) -> Result<Demo, CliErr> {
    let demo = parse_demo(&mut args)?;
    let remaining = args.collect::<Vec<_>>();
    if !remaining.is_empty() { Err(CliErr::UnknownArgs { args: remaining }) } else { Ok(demo) }
}

fn parse_demo(args: &mut Peekable<impl Iterator<Item = String>>) -> Result<Demo, CliErr> {
    let Some(name) = args.next() else {
        return Err(CliErr::MissingDemo { available: Demo::names().join(", ") });
    };
    match name.to_ascii_lowercase().as_str() {
        "primes" => parse_primes(args),
        "hist" => parse_hist(args),
        "range" => parse_range(args),
        _ => Err(CliErr::UnknownDemo(name)),
    }
}

fn parse_primes(args: &mut Peekable<impl Iterator<Item = String>>) -> Result<Demo, CliErr> {
    let limit = match args.next() {
        Some(value) => parse_arg("primes", "n", value, |v| parse_whole(v, parse_count))?,
        None => DEFAULT_PRIME_LIMIT,
    };
    Ok(Demo::Primes { limit })
}

fn parse_hist(args: &mut Peekable<impl Iterator<Item = String>>) -> Result<Demo, CliErr> {
    // 消耗剩余的全部参数
    let values = args
        .map(|value| parse_arg("hist", "int", value, |v| parse_whole(v, parse_integer)))
        .collect::<Result<Vec<Integer>, _>>()?;
    if values.is_empty() {
        Err(CliErr::ArgNotEnough { demo: "hist", arg: "int" })
    } else {
        Ok(Demo::Hist { values })
    }
}

fn parse_range(args: &mut Peekable<impl Iterator<Item = String>>) -> Result<Demo, CliErr> {
    match args.next() {
        Some(value) => {
            let range_args = parse_arg("range", "spec", value, |v| parse_whole(v, parse_range_args))?;
            Ok(Demo::Range { range: Range::try_from(range_args)? })
        }
        None => Err(CliErr::MissingArg { demo: "range", arg: "spec" }),
    }
}

fn parse_arg<T, P>(demo: &'static str, arg: &'static str, value: String, parser: P) -> Result<T, CliErr>
where
    P: FnOnce(&str) -> Result<T, String>,
{
    match parser(&value) {
        Ok(parsed) => Ok(parsed),
        Err(error) => Err(CliErr::ArgParseErr { demo, arg, arg_value: value, error }),
    }
}

#[cfg(test)]
fn build_args(args_line: &'static str) -> Peekable<impl Iterator<Item = String>> {
    args_line.split(' ').map(String::from).peekable()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pyseq::{SeqErr, range};

    #[test]
    fn test_parse_configs() {
        let mut args = build_args("-v -d primes 10");
        assert_eq!(parse_configs(&mut args), vec![Config::Verbose, Config::DryRun]);
        assert_eq!(args.next(), Some("primes".to_string()));

        let mut args = build_args("hist -v");
        assert!(parse_configs(&mut args).is_empty());
    }

    #[test]
    fn test_parse_primes() {
        assert_eq!(parse(build_args("primes 100")), Ok(Demo::Primes { limit: 100 }));
        assert_eq!(parse(build_args("primes")), Ok(Demo::Primes { limit: DEFAULT_PRIME_LIMIT }));
        assert_eq!(parse(build_args("PRIMES 7")), Ok(Demo::Primes { limit: 7 }));
        assert!(matches!(
            parse(build_args("primes -3")),
            Err(CliErr::ArgParseErr { demo: "primes", arg: "n", .. })
        ));
        assert_eq!(
            parse(build_args("primes 10 20")),
            Err(CliErr::UnknownArgs { args: vec!["20".to_string()] })
        );
    }

    #[test]
    fn test_parse_hist() {
        assert_eq!(parse(build_args("hist 1 2 -3 1")), Ok(Demo::Hist { values: vec![1, 2, -3, 1] }));
        assert_eq!(parse(build_args("hist")), Err(CliErr::ArgNotEnough { demo: "hist", arg: "int" }));
        assert!(matches!(
            parse(build_args("hist 1 two 3")),
            Err(CliErr::ArgParseErr { demo: "hist", arg: "int", arg_value, .. }) if arg_value == "two"
        ));
    }

    #[test]
    fn test_parse_range() {
        assert_eq!(parse(build_args("range 2,8")), Ok(Demo::Range { range: range((2, 8)) }));
        assert_eq!(parse(build_args("range 9,0,-3")), Ok(Demo::Range { range: range((9, 0, -3)) }));
        assert_eq!(parse(build_args("range")), Err(CliErr::MissingArg { demo: "range", arg: "spec" }));
        assert_eq!(parse(build_args("range 0,10,0")), Err(CliErr::Seq(SeqErr::ZeroStep)));
        assert!(matches!(parse(build_args("range 10,0")), Err(CliErr::Seq(SeqErr::Unreachable { .. }))));
        assert!(matches!(parse(build_args("range 1,x")), Err(CliErr::ArgParseErr { demo: "range", .. })));
    }

    #[test]
    fn test_parse_demo_name() {
        assert_eq!(parse(build_args("fib 10")), Err(CliErr::UnknownDemo("fib".to_string())));
        assert!(matches!(
            parse(std::iter::empty::<String>().peekable()),
            Err(CliErr::MissingDemo { available }) if available == "primes, hist, range"
        ));
    }
}
