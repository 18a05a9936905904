use crate::adapter::{Enumerate, Filter, Transform, Uniq};
use crate::cursor::{Cursor, Iter, State};
use crate::err::SeqErr;
use crate::reduce;
use itertools::Itertools;
use rand::seq::SliceRandom;
use rustc_hash::FxHashMap;
use std::cmp::Ordering;
use std::hash::Hash;

/// 序列：能够产生起始游标与哨兵的类型，也是所有链式操作的统一入口。
///
/// 适配器按值持有上游序列；借用型的数据源（`&[T]`、`&Vec<T>`、`&BTreeMap<K, V>`等）通过生命周期保证上游比适配器活得更久。
/// 序列本身是惰性的，只有归约、遍历或收集时才会从起始游标开始拉取数据，且只遍历一次。
///
/// 同一个序列对象不支持跨线程并发使用，需要由调用者自行同步。
pub trait Sequence: Sized {
    type Item;
    type Cursor: Cursor<Item = Self::Item>;

    /// 起始游标：位于第一个元素上，如果序列为空则立即耗尽。
    fn begin(self) -> Self::Cursor;

    /// 哨兵：总是耗尽。
    fn end(&self) -> State<Self::Item> {
        State::Exhausted
    }

    /// 转为标准库迭代器。
    fn stream(self) -> Iter<Self::Cursor> {
        Iter::new(self.begin())
    }

    /* **************************************** 适配 **************************************** */

    /// 仅保留满足谓词的元素。
    fn filter<P>(self, predicate: P) -> Filter<Self, P>
    where
        P: FnMut(&Self::Item) -> bool,
    {
        Filter::new(self, predicate)
    }

    /// 对每个元素应用映射函数。
    fn transform<F, R>(self, mapping: F) -> Transform<Self, F>
    where
        F: FnMut(Self::Item) -> R,
    {
        Transform::new(self, mapping)
    }

    /// 为每个元素附加从0开始的序号。
    fn enumerate(self) -> Enumerate<Self> {
        Enumerate::new(self)
    }

    /// 去重，只保留每个值第一次出现的元素。
    fn uniq(self) -> Uniq<Self>
    where
        Self::Item: Hash + Eq + Clone,
    {
        Uniq::new(self)
    }

    /* **************************************** 归约 **************************************** */

    /// 元素数量。
    ///
    /// 默认逐个计数；能在常数时间内给出大小的数据源会覆盖此方法。
    fn len(self) -> usize {
        reduce::count(self.begin())
    }

    /// 最小值，多个最小值时返回最先出现的元素。
    fn min(self) -> Result<Self::Item, SeqErr>
    where
        Self::Item: Ord,
    {
        reduce::select(self.begin(), "min", Ordering::Less)
    }

    /// 按照键选择最小值，返回原始元素而不是键。
    fn min_by_key<K, F>(self, key: F) -> Result<Self::Item, SeqErr>
    where
        K: Ord,
        F: FnMut(&Self::Item) -> K,
    {
        reduce::select_by_key(self.begin(), "min", Ordering::Less, key)
    }

    /// 最大值，多个最大值时返回最先出现的元素。
    fn max(self) -> Result<Self::Item, SeqErr>
    where
        Self::Item: Ord,
    {
        reduce::select(self.begin(), "max", Ordering::Greater)
    }

    /// 按照键选择最大值，返回原始元素而不是键。
    fn max_by_key<K, F>(self, key: F) -> Result<Self::Item, SeqErr>
    where
        K: Ord,
        F: FnMut(&Self::Item) -> K,
    {
        reduce::select_by_key(self.begin(), "max", Ordering::Greater, key)
    }

    /// 稳定升序排序后的快照。
    fn sorted(self) -> Vec<Self::Item>
    where
        Self::Item: Ord,
    {
        self.stream().sorted().collect()
    }

    /// 按照键稳定升序排序后的快照。
    fn sorted_by_key<K, F>(self, key: F) -> Vec<Self::Item>
    where
        K: Ord,
        F: FnMut(&Self::Item) -> K,
    {
        self.stream().sorted_by_key(key).collect()
    }

    /// 稳定降序排序后的快照，相等元素保持原有的相对顺序。
    fn sorted_desc(self) -> Vec<Self::Item>
    where
        Self::Item: Ord,
    {
        self.stream().sorted_by(|l, r| r.cmp(l)).collect()
    }

    /// 随机顺序的快照。
    fn shuffled(self) -> Vec<Self::Item> {
        let mut items = self.stream().collect::<Vec<_>>();
        items.shuffle(&mut rand::rng());
        items
    }

    /// 统计每个值出现的次数。
    fn counts(self) -> FxHashMap<Self::Item, usize>
    where
        Self::Item: Hash + Eq,
    {
        let mut counts = FxHashMap::default();
        let mut cursor = self.begin();
        while let Some(item) = cursor.take() {
            *counts.entry(item).or_insert(0) += 1;
        }
        counts
    }

    /// 收集到任意容器。
    fn collect<C>(self) -> C
    where
        C: FromIterator<Self::Item>,
    {
        self.stream().collect()
    }

    /* **************************************** 遍历 **************************************** */

    /// 按顺序对每个元素执行动作，返回序列本身以便继续使用。
    fn foreach<F>(self, mut action: F) -> Self
    where
        Self: Clone,
        F: FnMut(Self::Item),
    {
        let mut cursor = self.clone().begin();
        while let Some(item) = cursor.take() {
            action(item);
        }
        self
    }
}

/// 为序列实现`IntoIterator`，从而支持`for`循环。
macro_rules! impl_into_iterator {
    ($name:ident<$($param:ident),*>) => {
        impl<$($param),*> IntoIterator for $name<$($param),*>
        where
            $name<$($param),*>: $crate::Sequence,
        {
            type Item = <Self as $crate::Sequence>::Item;
            type IntoIter = $crate::Iter<<Self as $crate::Sequence>::Cursor>;

            fn into_iter(self) -> Self::IntoIter {
                $crate::Sequence::stream(self)
            }
        }
    };
}

pub(crate) use impl_into_iterator;
