use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum HarnessError {
    #[error("iteration count must be at least 1")]
    ZeroIterations,
    #[error("no benchmarks selected")]
    NoBenchmarks,
    #[error("n = {n} exceeds the configured bound of {max_n}")]
    InputTooLarge { n: i64, max_n: i64 },
    #[error("bound {0} is above 92, the last index whose term fits in an i64")]
    BoundTooLarge(i64),
    #[error("{bench} returned {got} in round {round}, expected {expected}")]
    OutputMismatch {
        bench: String,
        round: usize,
        expected: i64,
        got: i64,
    },
    #[error("malformed benchmark line {line:?}: {reason}")]
    MalformedLine { line: String, reason: String },
}
