//! 适配器：包装一个上游序列，在不物化中间集合的前提下变换它产出的元素。

mod enumerate;
mod filter;
mod transform;
mod uniq;

pub use enumerate::{Enumerate, EnumerateCursor, enumerate};
pub use filter::{Filter, FilterCursor, filter};
pub use transform::{Transform, TransformCursor, transform};
pub use uniq::{Uniq, UniqCursor, uniq};
