//! 归约：一次性消费整个序列，产出单个汇总值。

use crate::cursor::Cursor;
use crate::err::SeqErr;
use crate::sequence::Sequence;
use std::cmp::Ordering;

/// 逐个计数。
pub(crate) fn count<C: Cursor>(mut cursor: C) -> usize {
    let mut count = 0;
    while cursor.take().is_some() {
        count += 1;
    }
    count
}

/// 从第一个元素开始扫描，仅当后续元素与当前最优元素的比较结果为`wanted`时替换，因此相等时保留先出现的元素。
pub(crate) fn select<C>(mut cursor: C, op: &'static str, wanted: Ordering) -> Result<C::Item, SeqErr>
where
    C: Cursor,
    C::Item: Ord,
{
    let mut best = cursor.take().ok_or(SeqErr::EmptySequence { op })?;
    while let Some(item) = cursor.take() {
        if item.cmp(&best) == wanted {
            best = item;
        }
    }
    Ok(best)
}

/// 同[`select`]，但按照键比较；每个元素的键只计算一次。
pub(crate) fn select_by_key<C, K, F>(
    mut cursor: C, op: &'static str, wanted: Ordering, mut key: F,
) -> Result<C::Item, SeqErr>
where
    C: Cursor,
    K: Ord,
    F: FnMut(&C::Item) -> K,
{
    let mut best = cursor.take().ok_or(SeqErr::EmptySequence { op })?;
    let mut best_key = key(&best);
    while let Some(item) = cursor.take() {
        let item_key = key(&item);
        if item_key.cmp(&best_key) == wanted {
            best = item;
            best_key = item_key;
        }
    }
    Ok(best)
}

/// 元素数量。
pub fn len<S: Sequence>(seq: S) -> usize {
    seq.len()
}

/// 最小值，空序列返回[`SeqErr::EmptySequence`]。
pub fn min<S>(seq: S) -> Result<S::Item, SeqErr>
where
    S: Sequence,
    S::Item: Ord,
{
    seq.min()
}

pub fn min_by_key<S, K, F>(seq: S, key: F) -> Result<S::Item, SeqErr>
where
    S: Sequence,
    K: Ord,
    F: FnMut(&S::Item) -> K,
{
    seq.min_by_key(key)
}

/// 最大值，空序列返回[`SeqErr::EmptySequence`]。
pub fn max<S>(seq: S) -> Result<S::Item, SeqErr>
where
    S: Sequence,
    S::Item: Ord,
{
    seq.max()
}

pub fn max_by_key<S, K, F>(seq: S, key: F) -> Result<S::Item, SeqErr>
where
    S: Sequence,
    K: Ord,
    F: FnMut(&S::Item) -> K,
{
    seq.max_by_key(key)
}

/// 升序快照，排序是稳定的。
pub fn sorted<S>(seq: S) -> Vec<S::Item>
where
    S: Sequence,
    S::Item: Ord,
{
    seq.sorted()
}
