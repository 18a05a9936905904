use crate::cursor::{Cursor, State};
use crate::sequence::{Sequence, impl_into_iterator};
use std::fmt;

/// 过滤：仅产出满足谓词的上游元素。
#[derive(Clone)]
pub struct Filter<S, P> {
    upstream: S,
    predicate: P,
}

impl<S, P> Filter<S, P> {
    pub(crate) fn new(upstream: S, predicate: P) -> Filter<S, P> {
        Filter { upstream, predicate }
    }
}

impl<S: fmt::Debug, P> fmt::Debug for Filter<S, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Filter").field("upstream", &self.upstream).finish_non_exhaustive()
    }
}

impl<S, P> Sequence for Filter<S, P>
where
    S: Sequence,
    P: FnMut(&S::Item) -> bool,
{
    type Item = S::Item;
    type Cursor = FilterCursor<S::Cursor, P>;

    fn begin(self) -> Self::Cursor {
        FilterCursor::new(self.upstream.begin(), self.predicate)
    }
}

impl_into_iterator!(Filter<S, P>);

/// 过滤游标。
///
/// 活跃时缓存的值总是已经满足谓词：跳过不满足元素的循环在构造时和每次前进后立即执行，而不是在读取时才执行。
pub struct FilterCursor<C: Cursor, P> {
    upstream: C,
    predicate: P,
    state: State<C::Item>,
}

impl<C, P> FilterCursor<C, P>
where
    C: Cursor,
    P: FnMut(&C::Item) -> bool,
{
    fn new(upstream: C, predicate: P) -> FilterCursor<C, P> {
        let mut cursor = FilterCursor { upstream, predicate, state: State::Exhausted };
        cursor.state = cursor.seek();
        cursor
    }

    /// 持续从上游拉取，直到遇到满足谓词的元素或上游耗尽。
    fn seek(&mut self) -> State<C::Item> {
        while let Some(item) = self.upstream.take() {
            if (self.predicate)(&item) {
                return State::Active(item);
            }
        }
        State::Exhausted
    }
}

impl<C, P> Cursor for FilterCursor<C, P>
where
    C: Cursor,
    P: FnMut(&C::Item) -> bool,
{
    type Item = C::Item;

    fn state(&self) -> &State<C::Item> {
        &self.state
    }

    fn take(&mut self) -> Option<C::Item> {
        let item = self.state.take()?;
        self.state = self.seek();
        Some(item)
    }
}

/// 为不提供链式方法的序列过滤。
pub fn filter<S, P>(seq: S, predicate: P) -> Filter<S, P>
where
    S: Sequence,
    P: FnMut(&S::Item) -> bool,
{
    Filter::new(seq, predicate)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::range::range;
    use std::cell::Cell;

    #[test]
    fn test_filter_keeps_order() {
        let v = vec![5, 2, 8, 1, 9, 4];
        let evens: Vec<&i32> = filter(&v, |x| **x % 2 == 0).collect();
        assert_eq!(evens, vec![&2, &8, &4]);
    }

    #[test]
    fn test_filter_chain_on_range() {
        let multiples: Vec<i64> = range(30i64).filter(|x| x % 3 == 0).filter(|x| x % 2 == 0).collect();
        assert_eq!(multiples, vec![0, 6, 12, 18, 24]);
    }

    #[test]
    fn test_filter_never_satisfied() {
        let cursor = range(10i64).filter(|_| false).begin();
        assert!(cursor.is_end());
        assert_eq!(range(10i64).filter(|x| *x > 100).len(), 0);
    }

    #[test]
    fn test_filter_active_value_satisfies_predicate() {
        let mut cursor = range((1i64, 20)).filter(|x| x % 7 == 0).begin();
        assert_eq!(cursor.current(), Some(&7));
        cursor.advance();
        assert_eq!(cursor.current(), Some(&14));
        cursor.advance();
        assert!(cursor.is_end());
        assert_eq!(cursor.state(), &range(1i64).end());
    }

    #[test]
    fn test_filter_count_not_greater_than_upstream() {
        let v = vec![3, 1, 4, 1, 5, 9, 2, 6, 5, 3, 5];
        let kept = filter(&v, |x| **x > 2).len();
        assert!(kept <= v.len());
        assert_eq!(kept, 8);
    }

    #[test]
    fn test_filter_predicate_called_once_per_element() {
        let calls = Cell::new(0);
        let total = range(10i64)
            .filter(|x| {
                calls.set(calls.get() + 1);
                x % 2 == 1
            })
            .len();
        assert_eq!(total, 5);
        assert_eq!(calls.get(), 10);
    }

    #[test]
    fn test_filter_for_loop() {
        let mut seen = Vec::new();
        for x in range((10i64, 0, -1)).filter(|x| x % 4 == 0) {
            seen.push(x);
        }
        assert_eq!(seen, vec![8, 4]);
    }
}
