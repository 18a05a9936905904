use crate::cursor::{Cursor, State};
use crate::sequence::{Sequence, impl_into_iterator};

/// 编号：产出`(序号, 元素)`，序号从0开始，每产出一个元素加1。
///
/// 序号只与本适配器产出的元素有关，与上游是否经过过滤无关。
#[derive(Debug, Clone)]
pub struct Enumerate<S> {
    upstream: S,
}

impl<S> Enumerate<S> {
    pub(crate) fn new(upstream: S) -> Enumerate<S> {
        Enumerate { upstream }
    }
}

impl<S: Sequence> Sequence for Enumerate<S> {
    type Item = (usize, S::Item);
    type Cursor = EnumerateCursor<S::Cursor>;

    fn begin(self) -> Self::Cursor {
        EnumerateCursor::new(self.upstream.begin())
    }

    fn len(self) -> usize {
        self.upstream.len()
    }
}

impl_into_iterator!(Enumerate<S>);

pub struct EnumerateCursor<C: Cursor> {
    upstream: C,
    // 下一个产出元素的序号，耗尽后的取值没有意义
    next_index: usize,
    state: State<(usize, C::Item)>,
}

impl<C: Cursor> EnumerateCursor<C> {
    fn new(upstream: C) -> EnumerateCursor<C> {
        let mut cursor = EnumerateCursor { upstream, next_index: 0, state: State::Exhausted };
        cursor.state = cursor.pull();
        cursor
    }

    fn pull(&mut self) -> State<(usize, C::Item)> {
        match self.upstream.take() {
            Some(item) => {
                let index = self.next_index;
                self.next_index += 1;
                State::Active((index, item))
            }
            None => State::Exhausted,
        }
    }
}

impl<C: Cursor> Cursor for EnumerateCursor<C> {
    type Item = (usize, C::Item);

    fn state(&self) -> &State<Self::Item> {
        &self.state
    }

    fn take(&mut self) -> Option<Self::Item> {
        let item = self.state.take()?;
        self.state = self.pull();
        Some(item)
    }
}

pub fn enumerate<S: Sequence>(seq: S) -> Enumerate<S> {
    Enumerate::new(seq)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::range::range;

    #[test]
    fn test_enumerate_indices() {
        let v = vec!['a', 'b', 'c'];
        let pairs: Vec<(usize, &char)> = enumerate(&v).collect();
        assert_eq!(pairs, vec![(0, &'a'), (1, &'b'), (2, &'c')]);
    }

    #[test]
    fn test_enumerate_after_filter_is_dense() {
        let pairs: Vec<(usize, i64)> = range((10i64, 20)).filter(|x| x % 3 == 0).enumerate().collect();
        assert_eq!(pairs, vec![(0, 12), (1, 15), (2, 18)]);
    }

    #[test]
    fn test_enumerate_then_filter_keeps_source_index() {
        let v = vec![0, 0, 1, 0, 1];
        let zeros: Vec<usize> = enumerate(&v).filter(|(_, x)| **x == 0).transform(|(i, _)| i).collect();
        assert_eq!(zeros, vec![0, 1, 3]);
    }

    #[test]
    fn test_enumerate_cardinality() {
        let r = range((0i64, 100, 9));
        assert_eq!(r.enumerate().len(), r.len());
        let indices: Vec<usize> = r.enumerate().transform(|(i, _)| i).collect();
        assert_eq!(indices, (0..r.len()).collect::<Vec<_>>());
    }

    #[test]
    fn test_enumerate_empty() {
        let cursor = enumerate(range((3i64, 3))).begin();
        assert!(cursor.is_end());
    }
}
