use crate::cli_err::CliErr;
use cmd_help::CmdHelp;
use itertools::Itertools;
use ordered_float::OrderedFloat;
use pyseq::{Range, SeqErr, Sequence, foreach, foreach_span, range};
use std::cmp::Reverse;
use std::collections::BTreeMap;

/// 整数类型
pub(crate) type Integer = i64;

pub(crate) const DEFAULT_PRIME_LIMIT: usize = 1000;

#[derive(Debug, PartialEq, CmdHelp)]
pub(crate) enum Demo {
    /// primes [<n>]            统计小于n的素数，n默认为1000。
    Primes { limit: usize },
    /// hist <int> [<int>...]   统计整数的直方图，并给出最大奇数与众数。
    Hist { values: Vec<Integer> },
    /// range <spec>            打印范围内的全部元素，spec为`finish`、`start,finish`或`start,finish,step`。
    Range { range: Range<Integer> },
}

impl Demo {
    pub(crate) fn run(&self) -> Result<(), CliErr> {
        match self {
            Demo::Primes { limit } => {
                let primes = primes(*limit);
                println_info!("{} primes below {}", primes.len(), limit);
                if let Ok(largest) = pyseq::max(&primes) {
                    println!("largest: {largest}");
                }
            }
            Demo::Hist { values } => {
                let histogram = histogram(values);
                for (value, share) in shares(&histogram) {
                    println!("{value:>8}: {:>4} ({:.1}%)", histogram[&value], share * 100.0);
                }
                match max_odd(values) {
                    Ok(odd) => println_info!("max odd: {odd}"),
                    Err(SeqErr::EmptySequence { .. }) => println_info!("max odd: none"),
                    Err(err) => return Err(err.into()),
                }
                let (value, count) = mode(&histogram)?;
                println_info!("mode: {value} ({count} times)");
            }
            Demo::Range { range } => {
                println_info!("{} elements", range.len());
                println!("{}", range.stream().join(" "));
            }
        }
        Ok(())
    }
}

/// 埃拉托斯特尼筛法：对每个素数`i`，从`i * i`开始以`i`为步长标记合数。
pub(crate) fn primes(limit: usize) -> Vec<usize> {
    let mut composite = vec![false; limit];
    let candidates = range((2usize, limit.max(2))).filter(|i| i.checked_mul(*i).is_some_and(|square| square < limit));
    for i in candidates {
        if !composite[i] {
            foreach_span(&mut composite, i * i..limit, |c| *c = true, |pos| pos + i);
        }
    }
    range((2usize, limit.max(2))).filter(|i| !composite[*i]).collect()
}

/// 每个值出现的次数，按值升序。
pub(crate) fn histogram(values: &[Integer]) -> BTreeMap<Integer, usize> {
    let mut histogram = BTreeMap::new();
    foreach(values, |value| *histogram.entry(*value).or_insert(0) += 1);
    histogram
}

/// 每个值的占比，按占比降序，占比相同时保持值的升序。
pub(crate) fn shares(histogram: &BTreeMap<Integer, usize>) -> Vec<(Integer, f64)> {
    let total = histogram.values().sum::<usize>() as f64;
    histogram
        .transform(|(value, count)| (*value, *count as f64 / total))
        .sorted_by_key(|(_, share)| Reverse(OrderedFloat(*share)))
}

pub(crate) fn max_odd(values: &[Integer]) -> Result<Integer, SeqErr> {
    values.filter(|value| **value % 2 != 0).max().copied()
}

/// 出现次数最多的值，次数相同时取较小的值。
pub(crate) fn mode(histogram: &BTreeMap<Integer, usize>) -> Result<(Integer, usize), SeqErr> {
    histogram.max_by_key(|(_, count)| **count).map(|(value, count)| (*value, *count))
}
