use crate::cursor::{Cursor, State};
use crate::sequence::{Sequence, impl_into_iterator};
use std::fmt;

/// 映射：对每个上游元素应用映射函数，元素数量与上游一致。
#[derive(Clone)]
pub struct Transform<S, F> {
    upstream: S,
    mapping: F,
}

impl<S, F> Transform<S, F> {
    pub(crate) fn new(upstream: S, mapping: F) -> Transform<S, F> {
        Transform { upstream, mapping }
    }
}

impl<S: fmt::Debug, F> fmt::Debug for Transform<S, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Transform").field("upstream", &self.upstream).finish_non_exhaustive()
    }
}

impl<S, F, R> Sequence for Transform<S, F>
where
    S: Sequence,
    F: FnMut(S::Item) -> R,
{
    type Item = R;
    type Cursor = TransformCursor<S::Cursor, F, R>;

    fn begin(self) -> Self::Cursor {
        TransformCursor::new(self.upstream.begin(), self.mapping)
    }

    /// 元素数量与上游一致，不调用映射函数。
    fn len(self) -> usize {
        self.upstream.len()
    }
}

impl_into_iterator!(Transform<S, F>);

pub struct TransformCursor<C, F, R> {
    upstream: C,
    mapping: F,
    state: State<R>,
}

impl<C, F, R> TransformCursor<C, F, R>
where
    C: Cursor,
    F: FnMut(C::Item) -> R,
{
    fn new(upstream: C, mapping: F) -> TransformCursor<C, F, R> {
        let mut cursor = TransformCursor { upstream, mapping, state: State::Exhausted };
        cursor.state = cursor.pull();
        cursor
    }

    /// 从上游拉取恰好一个元素并映射；上游耗尽时不调用映射函数。
    fn pull(&mut self) -> State<R> {
        match self.upstream.take() {
            Some(item) => State::Active((self.mapping)(item)),
            None => State::Exhausted,
        }
    }
}

impl<C, F, R> Cursor for TransformCursor<C, F, R>
where
    C: Cursor,
    F: FnMut(C::Item) -> R,
{
    type Item = R;

    fn state(&self) -> &State<R> {
        &self.state
    }

    fn take(&mut self) -> Option<R> {
        let item = self.state.take()?;
        self.state = self.pull();
        Some(item)
    }
}

/// 为不提供链式方法的序列映射。
pub fn transform<S, F, R>(seq: S, mapping: F) -> Transform<S, F>
where
    S: Sequence,
    F: FnMut(S::Item) -> R,
{
    Transform::new(seq, mapping)
}
