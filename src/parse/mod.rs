mod args;
mod token;

pub(crate) use args::{parse, parse_configs};
