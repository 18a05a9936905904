//! 遍历：为副作用对每个元素执行动作。

use crate::sequence::Sequence;
use std::ops::Range as Span;

/// 按顺序对序列的每个元素执行动作，返回序列本身。
pub fn foreach<S, F>(seq: S, action: F) -> S
where
    S: Sequence + Clone,
    F: FnMut(S::Item),
{
    seq.foreach(action)
}

/// 使用自定义步进函数遍历整个切片，见[`foreach_span`]。
pub fn foreach_by<T, F, A>(data: &mut [T], action: F, advance: A) -> &mut [T]
where
    F: FnMut(&mut T),
    A: FnMut(usize) -> usize,
{
    let len = data.len();
    foreach_span(data, 0..len, action, advance);
    data
}

/// 在`span`范围内按位置遍历切片，位置的推进由`advance`决定，适用于不规则步进，例如筛法中标记某个数的所有倍数。
///
/// 这是绕过游标协议的底层接口：
/// - `span`的结束位置被截断到切片长度以内；
/// - `advance`返回的下一个位置被截断到`span`的结束位置，因此永远不会访问逻辑结束之后的元素；
/// - `advance`返回的位置如果没有前进（小于等于当前位置），遍历立即结束。
pub fn foreach_span<T, F, A>(data: &mut [T], span: Span<usize>, mut action: F, mut advance: A)
where
    F: FnMut(&mut T),
    A: FnMut(usize) -> usize,
{
    let end = span.end.min(data.len());
    let mut pos = span.start;
    while pos < end {
        action(&mut data[pos]);
        let next = advance(pos);
        if next <= pos {
            break;
        }
        pos = next.min(end);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::range::range;
    use std::collections::BTreeMap;

    #[test]
    fn test_foreach_visits_in_order() {
        let v = vec![3, 1, 2];
        let mut seen = Vec::new();
        let same = foreach(&v, |x| seen.push(*x));
        assert_eq!(seen, vec![3, 1, 2]);
        assert_eq!(same, &v);
    }

    #[test]
    fn test_foreach_returns_sequence_for_reuse() {
        let mut total = 0;
        let r = range((1i64, 5)).foreach(|x| total += x);
        assert_eq!(total, 10);
        assert_eq!(r.collect::<Vec<_>>(), vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_foreach_builds_histogram() {
        let v = vec![1, 2, 3, 1, 7, 2, 3, 0, 1];
        let mut histogram = BTreeMap::new();
        foreach(&v, |x| *histogram.entry(*x).or_insert(0) += 1);
        assert_eq!(histogram, BTreeMap::from([(0, 1), (1, 3), (2, 2), (3, 2), (7, 1)]));
    }

    #[test]
    fn test_foreach_span_marks_multiples() {
        let mut marks = vec![0; 20];
        foreach_span(&mut marks, 3 * 3..20, |m| *m = 1, |i| i + 3);
        let marked: Vec<usize> = (0..20).filter(|i| marks[*i] == 1).collect();
        assert_eq!(marked, vec![9, 12, 15, 18]);
    }

    #[test]
    fn test_foreach_span_clamps_to_storage() {
        let mut data = vec![0; 5];
        let mut visited = Vec::new();
        foreach_span(
            &mut data,
            1..100,
            |x| *x += 1,
            |i| {
                visited.push(i);
                i + 3
            },
        );
        assert_eq!(data, vec![0, 1, 0, 0, 1]);
        assert_eq!(visited, vec![1, 4]);
    }

    #[test]
    fn test_foreach_span_huge_step_clamped() {
        let mut data = vec![0; 4];
        foreach_span(&mut data, 0..4, |x| *x = 9, |i| i.saturating_add(usize::MAX));
        assert_eq!(data, vec![9, 0, 0, 0]);
    }

    #[test]
    fn test_foreach_span_stops_without_progress() {
        let mut data = vec![0; 4];
        foreach_span(&mut data, 2..4, |x| *x += 1, |i| i);
        assert_eq!(data, vec![0, 0, 1, 0]);
    }

    #[test]
    fn test_foreach_by_whole_slice() {
        let mut data: Vec<i32> = (0..10).collect();
        let data = foreach_by(&mut data, |x| *x = -*x, |i| i * 2 + 1);
        assert_eq!(data, &[0, -1, 2, -3, 4, 5, 6, -7, 8, 9]);
    }

    #[test]
    fn test_foreach_span_empty() {
        let mut data = vec![1, 2, 3];
        foreach_span(&mut data, 2..1, |x| *x = 0, |i| i + 1);
        foreach_span(&mut data, 5..9, |x| *x = 0, |i| i + 1);
        assert_eq!(data, vec![1, 2, 3]);
    }
}
