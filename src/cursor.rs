//! 游标协议：所有序列类型共同遵守的两态（活跃/耗尽）迭代约定。

use std::iter::FusedIterator;
use std::mem;

/// 游标状态。
///
/// 活跃状态总是携带已经物化的当前值，耗尽状态不携带任何值，因此不会从耗尽的游标读到过期的缓存值。
/// 两个耗尽状态总是相等，与它们来自哪个序列、哪个位置无关，这使得各个适配器的“结束”可以统一比较。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum State<T> {
    /// 活跃，携带当前值。
    Active(T),
    /// 耗尽，即哨兵状态。
    Exhausted,
}

impl<T> State<T> {
    pub fn is_active(&self) -> bool {
        matches!(self, State::Active(_))
    }

    pub fn is_exhausted(&self) -> bool {
        matches!(self, State::Exhausted)
    }

    /// 活跃时返回当前值的引用。
    pub fn as_active(&self) -> Option<&T> {
        match self {
            State::Active(value) => Some(value),
            State::Exhausted => None,
        }
    }

    pub fn into_active(self) -> Option<T> {
        match self {
            State::Active(value) => Some(value),
            State::Exhausted => None,
        }
    }

    /// 取出当前值，并将自身置为耗尽。
    pub fn take(&mut self) -> Option<T> {
        mem::replace(self, State::Exhausted).into_active()
    }

    pub fn map<R>(self, f: impl FnOnce(T) -> R) -> State<R> {
        match self {
            State::Active(value) => State::Active(f(value)),
            State::Exhausted => State::Exhausted,
        }
    }
}

impl<T> From<Option<T>> for State<T> {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(value) => State::Active(value),
            None => State::Exhausted,
        }
    }
}

impl<T> From<State<T>> for Option<T> {
    fn from(state: State<T>) -> Self {
        state.into_active()
    }
}

/// 游标：位置、缓存的当前值以及状态。
///
/// 实现者需要保证：
/// - 活跃状态下总是持有有效的当前值；
/// - 进入耗尽状态后不再回到活跃状态，也不再从上游拉取数据。
pub trait Cursor {
    type Item;

    /// 当前状态。
    fn state(&self) -> &State<Self::Item>;

    /// 取出缓存的当前值并前进到下一个元素（或耗尽）。
    ///
    /// 已耗尽时返回`None`且没有任何副作用。所有下游适配器都通过此方法从上游拉取数据。
    fn take(&mut self) -> Option<Self::Item>;

    /// 前进到下一个元素或耗尽，丢弃当前值。
    fn advance(&mut self) {
        self.take();
    }

    /// 当前值，仅在活跃状态下存在。
    fn current(&self) -> Option<&Self::Item> {
        self.state().as_active()
    }

    fn is_end(&self) -> bool {
        self.state().is_exhausted()
    }
}

/// 将任意游标桥接为标准库迭代器，用于`for`循环和`collect`等场景。
#[derive(Debug)]
pub struct Iter<C> {
    cursor: C,
}

impl<C: Cursor> Iter<C> {
    pub fn new(cursor: C) -> Self {
        Iter { cursor }
    }

    /// 拆出内部游标，游标保持在下一个待产出的元素上。
    pub fn into_cursor(self) -> C {
        self.cursor
    }
}

impl<C: Cursor> Iterator for Iter<C> {
    type Item = C::Item;

    fn next(&mut self) -> Option<Self::Item> {
        self.cursor.take()
    }
}

// 耗尽状态不可逆
impl<C: Cursor> FusedIterator for Iter<C> {}

#[cfg(test)]
mod tests {
    use super::*;

    /// 产出`0..limit`的最小游标实现。
    struct Countdown {
        limit: u32,
        state: State<u32>,
        pulls: u32,
    }

    impl Countdown {
        fn new(limit: u32) -> Countdown {
            let state = if limit == 0 { State::Exhausted } else { State::Active(0) };
            Countdown { limit, state, pulls: 0 }
        }
    }

    impl Cursor for Countdown {
        type Item = u32;

        fn state(&self) -> &State<u32> {
            &self.state
        }

        fn take(&mut self) -> Option<u32> {
            let value = self.state.take()?;
            self.pulls += 1;
            if value + 1 < self.limit {
                self.state = State::Active(value + 1);
            }
            Some(value)
        }
    }

    #[test]
    fn test_state_equality() {
        assert_eq!(State::<i32>::Exhausted, State::Exhausted);
        assert_eq!(State::Active(1), State::Active(1));
        assert_ne!(State::Active(1), State::Exhausted);
        assert_ne!(State::Active(1), State::Active(2));
    }

    #[test]
    fn test_state_take() {
        let mut state = State::Active("a");
        assert_eq!(state.take(), Some("a"));
        assert!(state.is_exhausted());
        assert_eq!(state.take(), None);
    }

    #[test]
    fn test_state_option_conversion() {
        assert_eq!(State::from(Some(3)), State::Active(3));
        assert_eq!(State::<i32>::from(None), State::Exhausted);
        assert_eq!(Option::from(State::Active(3)), Some(3));
        assert_eq!(State::Active(2).map(|v| v * 10), State::Active(20));
    }

    #[test]
    fn test_cursor_protocol() {
        let mut cursor = Countdown::new(2);
        assert_eq!(cursor.current(), Some(&0));
        assert!(!cursor.is_end());
        cursor.advance();
        assert_eq!(cursor.current(), Some(&1));
        cursor.advance();
        assert!(cursor.is_end());
        assert_eq!(cursor.state(), &State::Exhausted);
        // 耗尽后不再拉取
        cursor.advance();
        assert_eq!(cursor.pulls, 2);
    }

    #[test]
    fn test_empty_start_is_sentinel() {
        let cursor = Countdown::new(0);
        assert!(cursor.is_end());
        assert_eq!(cursor.current(), None);
    }

    #[test]
    fn test_iter_bridge() {
        let collected: Vec<u32> = Iter::new(Countdown::new(4)).collect();
        assert_eq!(collected, vec![0, 1, 2, 3]);

        let mut iter = Iter::new(Countdown::new(3));
        assert_eq!(iter.next(), Some(0));
        let cursor = iter.into_cursor();
        assert_eq!(cursor.current(), Some(&1));
    }
}
