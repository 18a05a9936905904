//! 数据源：把标准库容器和任意迭代器接入游标协议。

use crate::cursor::{Cursor, State};
use crate::sequence::{Sequence, impl_into_iterator};
use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet, VecDeque};

/// 基于标准库迭代器的游标，预先拉取并缓存当前值。
#[derive(Debug)]
pub struct IterCursor<I: Iterator> {
    iter: I,
    state: State<I::Item>,
}

impl<I: Iterator> IterCursor<I> {
    pub fn new(mut iter: I) -> IterCursor<I> {
        let state = iter.next().into();
        IterCursor { iter, state }
    }
}

impl<I: Iterator> Cursor for IterCursor<I> {
    type Item = I::Item;

    fn state(&self) -> &State<I::Item> {
        &self.state
    }

    fn take(&mut self) -> Option<I::Item> {
        let item = self.state.take()?;
        self.state = self.iter.next().into();
        Some(item)
    }
}

/// 任意可迭代对象形成的序列。
#[derive(Debug, Clone)]
pub struct Source<I> {
    iter: I,
}

impl<I: Iterator> Sequence for Source<I> {
    type Item = I::Item;
    type Cursor = IterCursor<I>;

    fn begin(self) -> Self::Cursor {
        IterCursor::new(self.iter)
    }
}

impl_into_iterator!(Source<I>);

/// 将任意可迭代对象包装为序列。
///
/// 常用容器的引用已经直接实现了[`Sequence`]，此函数用于其他迭代器，例如`seq("a b".split(' '))`。
pub fn seq<I: IntoIterator>(iterable: I) -> Source<I::IntoIter> {
    Source { iter: iterable.into_iter() }
}

/// 为容器的引用实现序列，`$len`为常数时间的大小。
macro_rules! impl_container {
    ($(<$($generic:tt),*> $container:ty => $item:ty, $iter:ty, $len:expr;)*) => {
        $(
            impl<'a, $($generic),*> Sequence for $container {
                type Item = $item;
                type Cursor = IterCursor<$iter>;

                fn begin(self) -> Self::Cursor {
                    IterCursor::new(self.into_iter())
                }

                fn len(self) -> usize {
                    $len(self)
                }
            }
        )*
    };
}

impl_container! {
    <T> &'a [T] => &'a T, std::slice::Iter<'a, T>, <[T]>::len;
    <T> &'a mut [T] => &'a mut T, std::slice::IterMut<'a, T>, <[T]>::len;
    <T> &'a Vec<T> => &'a T, std::slice::Iter<'a, T>, Vec::len;
    <T> &'a mut Vec<T> => &'a mut T, std::slice::IterMut<'a, T>, Vec::len;
    <T> &'a VecDeque<T> => &'a T, std::collections::vec_deque::Iter<'a, T>, VecDeque::len;
    <T> &'a BTreeSet<T> => &'a T, std::collections::btree_set::Iter<'a, T>, BTreeSet::len;
    <K, V> &'a BTreeMap<K, V> => (&'a K, &'a V), std::collections::btree_map::Iter<'a, K, V>, BTreeMap::len;
    <T, S> &'a HashSet<T, S> => &'a T, std::collections::hash_set::Iter<'a, T>, HashSet::len;
    <K, V, S> &'a HashMap<K, V, S> => (&'a K, &'a V), std::collections::hash_map::Iter<'a, K, V>, HashMap::len;
}

impl<'a, T, const N: usize> Sequence for &'a [T; N] {
    type Item = &'a T;
    type Cursor = IterCursor<std::slice::Iter<'a, T>>;

    fn begin(self) -> Self::Cursor {
        IterCursor::new(self.iter())
    }

    fn len(self) -> usize {
        N
    }
}
