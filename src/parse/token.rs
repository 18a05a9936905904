use crate::demo::Integer;
use nom::character::complete::{char, i64 as integer, usize};
use nom::combinator::{all_consuming, map, opt};
use nom::error::context;
use nom::sequence::preceded;
use nom::{IResult, Parser};
use nom_language::error::{VerboseError, convert_error};
use pyseq::RangeArgs;

pub(in crate::parse) type ParserError<'a> = VerboseError<&'a str>;

/// 完整解析单个参数，存在未解析的剩余内容也视为失败，失败时返回可读的错误信息。
pub(in crate::parse) fn parse_whole<'a, O, P>(input: &'a str, parser: P) -> Result<O, String>
where
    P: Parser<&'a str, Output = O, Error = ParserError<'a>>,
{
    match all_consuming(parser).parse(input) {
        Ok((_, output)) => Ok(output),
        Err(nom::Err::Error(e) | nom::Err::Failure(e)) => Err(convert_error(input, e)),
        Err(nom::Err::Incomplete(_)) => Err("incomplete input".to_string()),
    }
}

pub(in crate::parse) fn parse_integer(input: &str) -> IResult<&str, Integer, ParserError<'_>> {
    context("Integer", integer).parse(input)
}

pub(in crate::parse) fn parse_count(input: &str) -> IResult<&str, usize, ParserError<'_>> {
    context("Count", usize).parse(input)
}

/// 解析范围：
///  - `finish`：从0开始，步长为1；
///  - `start,finish`：步长为1；
///  - `start,finish,step`。
pub(in crate::parse) fn parse_range_args(input: &str) -> IResult<&str, RangeArgs<Integer>, ParserError<'_>> {
    context(
        "Range",
        map(
            (
                parse_integer,                           // 第一个值
                opt(preceded(char(','), parse_integer)), // 可选：结束值
                opt(preceded(char(','), parse_integer)), // 可选：步长
            ),
            |(first, finish, step)| match (finish, step) {
                (Some(finish), Some(step)) => RangeArgs::from((first, finish, step)),
                (Some(finish), None) => RangeArgs::from((first, finish)),
                (None, _) => RangeArgs::from(first),
            },
        ),
    )
    .parse(input)
}
