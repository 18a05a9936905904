use crate::cursor::{Cursor, State};
use crate::sequence::{Sequence, impl_into_iterator};
use rustc_hash::FxHashSet;
use std::hash::Hash;

/// 去重：只产出每个值第一次出现的元素。
#[derive(Debug, Clone)]
pub struct Uniq<S> {
    upstream: S,
}

impl<S> Uniq<S> {
    pub(crate) fn new(upstream: S) -> Uniq<S> {
        Uniq { upstream }
    }
}

impl<S> Sequence for Uniq<S>
where
    S: Sequence,
    S::Item: Hash + Eq + Clone,
{
    type Item = S::Item;
    type Cursor = UniqCursor<S::Cursor>;

    fn begin(self) -> Self::Cursor {
        UniqCursor::new(self.upstream.begin())
    }
}

impl_into_iterator!(Uniq<S>);

pub struct UniqCursor<C: Cursor> {
    upstream: C,
    seen: FxHashSet<C::Item>,
    state: State<C::Item>,
}

impl<C> UniqCursor<C>
where
    C: Cursor,
    C::Item: Hash + Eq + Clone,
{
    fn new(upstream: C) -> UniqCursor<C> {
        let mut cursor = UniqCursor { upstream, seen: FxHashSet::default(), state: State::Exhausted };
        cursor.state = cursor.seek();
        cursor
    }

    fn seek(&mut self) -> State<C::Item> {
        while let Some(item) = self.upstream.take() {
            if self.seen.insert(item.clone()) {
                return State::Active(item); // 首次出现
            }
        }
        State::Exhausted
    }
}

impl<C> Cursor for UniqCursor<C>
where
    C: Cursor,
    C::Item: Hash + Eq + Clone,
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

pub fn uniq<S>(seq: S) -> Uniq<S>
where
    S: Sequence,
    S::Item: Hash + Eq + Clone,
{
    Uniq::new(seq)
}
