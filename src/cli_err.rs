use pyseq::SeqErr;
use std::process::{ExitCode, Termination};
use thiserror::Error;

#[derive(Error, Debug, Eq, PartialEq)]
pub(crate) enum CliErr {
    #[error("[Missing Demo] A demo is required, available demos: {available}")]
    MissingDemo { available: String },

    #[error("[Unknown Demo] Unknown demo `{0}`")]
    UnknownDemo(String),

    #[error("[Arg Parse Err] Unable to parse `{arg_value}` in argument `{arg}` of demo `{demo}`, error: {error}")]
    ArgParseErr { demo: &'static str, arg: &'static str, arg_value: String, error: String },

    #[error("[Missing Arg] Missing argument `{arg}` of demo `{demo}`")]
    MissingArg { demo: &'static str, arg: &'static str },

    #[error("[Missing Arg] At least one value for argument `{arg}` is required for demo `{demo}`")]
    ArgNotEnough { demo: &'static str, arg: &'static str },

    #[error("[Bad Arg] Unknown arguments: {args:?}")]
    UnknownArgs { args: Vec<String> },

    #[error(transparent)]
    Seq(#[from] SeqErr),
}

impl Termination for CliErr {
    fn report(self) -> ExitCode {
        println_err!("{}", self);
        ExitCode::from(self.exit_code())
    }
}

impl CliErr {
    pub(crate) fn termination(self) -> ! {
        let exit_code = self.exit_code();
        self.report();
        std::process::exit(exit_code as i32);
    }

    fn exit_code(&self) -> u8 {
        match self {
            CliErr::MissingDemo { .. } => 1,
            CliErr::UnknownDemo(_) => 2,
            CliErr::ArgParseErr { .. } => 3,
            CliErr::MissingArg { .. } => 4,
            CliErr::ArgNotEnough { .. } => 5,
            CliErr::UnknownArgs { .. } => 6,
            CliErr::Seq(SeqErr::EmptySequence { .. }) => 8,
            CliErr::Seq(_) => 7,
        }
    }
}
