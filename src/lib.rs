//! 惰性、可组合的序列适配器。
//!
//! 数据源（容器引用、[`range`]、任意迭代器）通过[`Sequence`]接入游标协议，
//! 适配器（[`filter`]、[`transform`]、[`enumerate`]）在拉取时逐个变换元素，
//! 归约（[`len`]、[`min`]、[`max`]、[`sorted`]）和遍历（[`foreach`]）一次性消费整个序列。
//!
//! 此外还提供若干便利操作：[`uniq`]去重，以及[`Sequence`]上的`sorted_by_key`、`sorted_desc`、`shuffled`和`counts`。
//!
//! ```
//! use pyseq::{Sequence, range};
//!
//! let evens: Vec<i64> = range(10i64).filter(|x| x % 2 == 0).transform(|x| x * x).collect();
//! assert_eq!(evens, vec![0, 4, 16, 36, 64]);
//! ```

mod adapter;
mod cursor;
mod err;
mod range;
mod reduce;
mod sequence;
mod source;
mod traverse;

pub use adapter::{
    Enumerate, EnumerateCursor, Filter, FilterCursor, Transform, TransformCursor, Uniq, UniqCursor, enumerate, filter,
    transform, uniq,
};
pub use cursor::{Cursor, Iter, State};
pub use err::SeqErr;
pub use range::{Range, RangeArgs, RangeCursor, RangeNum, range};
pub use reduce::{len, max, max_by_key, min, min_by_key, sorted};
pub use sequence::Sequence;
pub use source::{IterCursor, Source, seq};
pub use traverse::{foreach, foreach_by, foreach_span};
