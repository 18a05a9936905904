use thiserror::Error;

#[derive(Error, Debug, Clone, Eq, PartialEq)]
pub enum SeqErr {
    #[error("[Range] Step must not be zero")]
    ZeroStep,

    #[error("[Range] Finish `{finish}` is not reachable from start `{start}` by step `{step}`")]
    Unreachable { start: String, finish: String, step: String },

    #[error("[Reduce] `{op}` requires a non-empty sequence")]
    EmptySequence { op: &'static str },
}

impl SeqErr {
    pub(crate) fn unreachable(start: impl ToString, finish: impl ToString, step: impl ToString) -> SeqErr {
        SeqErr::Unreachable { start: start.to_string(), finish: finish.to_string(), step: step.to_string() }
    }
}
