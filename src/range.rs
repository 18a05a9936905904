//! 整数范围：惰性生成等差数列。

use crate::cursor::{Cursor, State};
use crate::err::SeqErr;
use crate::sequence::{Sequence, impl_into_iterator};
use std::fmt::{Debug, Display};
use std::ops::Add;

/// 可以作为范围元素的整数类型。
pub trait RangeNum: Copy + Ord + Debug + Display + Add<Output = Self> {
    const ZERO: Self;
    const ONE: Self;

    /// 与`other`之差的绝对值，任意两个值之差都能用`u128`表示。
    fn distance(self, other: Self) -> u128;

    /// 向前（`forward`）或向后偏移`delta`，超出类型范围时返回`None`。
    fn checked_offset(self, delta: u128, forward: bool) -> Option<Self>;
}

macro_rules! range_num {
    ($($num:ty),*) => {
        $(
            impl RangeNum for $num {
                const ZERO: Self = 0;
                const ONE: Self = 1;

                fn distance(self, other: Self) -> u128 {
                    <$num>::abs_diff(self, other) as u128
                }

                fn checked_offset(self, delta: u128, forward: bool) -> Option<Self> {
                    let room = if forward { self.distance(<$num>::MAX) } else { self.distance(<$num>::MIN) };
                    if delta > room {
                        None
                    } else if forward {
                        // 结果在类型范围内，截断后的回绕加减与精确结果一致
                        Some(self.wrapping_add(delta as $num))
                    } else {
                        Some(self.wrapping_sub(delta as $num))
                    }
                }
            }
        )*
    };
}

range_num!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

/// 范围参数：`finish`、`(start, finish)`或`(start, finish, step)`，`start`默认为0，`step`默认为1。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RangeArgs<T> {
    pub start: T,
    pub finish: T,
    pub step: T,
}

impl<T: RangeNum> From<T> for RangeArgs<T> {
    fn from(finish: T) -> Self {
        RangeArgs { start: T::ZERO, finish, step: T::ONE }
    }
}

impl<T: RangeNum> From<(T, T)> for RangeArgs<T> {
    fn from((start, finish): (T, T)) -> Self {
        RangeArgs { start, finish, step: T::ONE }
    }
}

impl<T: RangeNum> From<(T, T, T)> for RangeArgs<T> {
    fn from((start, finish, step): (T, T, T)) -> Self {
        RangeArgs { start, finish, step }
    }
}

/// 等差数列`start, start + step, ...`，不包含结束值。
///
/// 结束值在构造时被规整为从`start`按`step`前进恰好能到达的值，元素数量为`ceil((finish - start) / step)`。
/// 距离与步数在`u128`中计算，因此靠近类型边界的范围也能正常构造；
/// 游标按剩余步数终止，规整后的结束值本身不必能用`T`表示。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Range<T> {
    start: T,
    finish: Option<T>,
    step: T,
    steps: u128,
}

impl<T: RangeNum> Range<T> {
    /// 构造范围。
    ///
    /// 步长为0或者结束值无法按步长的方向到达时返回错误。
    pub fn try_new(start: T, finish: T, step: T) -> Result<Range<T>, SeqErr> {
        if step == T::ZERO {
            return Err(SeqErr::ZeroStep);
        }
        let forward = step > T::ZERO;
        if (forward && finish < start) || (!forward && finish > start) {
            return Err(SeqErr::unreachable(start, finish, step));
        }
        let distance = start.distance(finish);
        let stride = step.distance(T::ZERO);
        let steps = distance / stride + u128::from(distance % stride != 0);
        let finish = steps.checked_mul(stride).and_then(|span| start.checked_offset(span, forward));
        Ok(Range { start, finish, step, steps })
    }

    pub fn start(&self) -> T {
        self.start
    }

    /// 规整后的结束值，超出`T`的表示范围时为`None`。
    pub fn finish(&self) -> Option<T> {
        self.finish
    }

    pub fn step(&self) -> T {
        self.step
    }
}

impl<T: RangeNum> TryFrom<RangeArgs<T>> for Range<T> {
    type Error = SeqErr;

    fn try_from(args: RangeArgs<T>) -> Result<Self, Self::Error> {
        Range::try_new(args.start, args.finish, args.step)
    }
}

/// 构造范围：`range(finish)`、`range((start, finish))`或`range((start, finish, step))`。
///
/// # Panics
/// 参数违反约定时立即失败，而不是产生长度错误的范围；需要自行处理错误时使用[`Range::try_new`]。
pub fn range<T: RangeNum>(args: impl Into<RangeArgs<T>>) -> Range<T> {
    match Range::try_from(args.into()) {
        Ok(range) => range,
        Err(err) => panic!("{err}"),
    }
}

impl<T: RangeNum> Sequence for Range<T> {
    type Item = T;
    type Cursor = RangeCursor<T>;

    fn begin(self) -> Self::Cursor {
        match self.steps.checked_sub(1) {
            Some(remaining) => RangeCursor { state: State::Active(self.start), step: self.step, remaining },
            None => RangeCursor { state: State::Exhausted, step: self.step, remaining: 0 },
        }
    }

    /// 元素数量超过`usize::MAX`时饱和。
    fn len(self) -> usize {
        usize::try_from(self.steps).unwrap_or(usize::MAX)
    }
}

impl_into_iterator!(Range<T>);

#[derive(Debug, Clone)]
pub struct RangeCursor<T> {
    state: State<T>,
    step: T,
    // 当前元素之后还剩余的元素数量
    remaining: u128,
}

impl<T: RangeNum> Cursor for RangeCursor<T> {
    type Item = T;

    fn state(&self) -> &State<T> {
        &self.state
    }

    fn take(&mut self) -> Option<T> {
        let current = self.state.take()?;
        if self.remaining > 0 {
            self.remaining -= 1;
            // 下一个值仍是范围内的元素，不会溢出
            self.state = State::Active(current + self.step);
        }
        Some(current)
    }
}
