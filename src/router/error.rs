/// Failure to read a typed path parameter out of [`Params`](super::Params).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParamError {
    #[error("path parameter {name:?} is not bound")]
    Missing { name: String },

    #[error("path parameter {name:?} = {value:?} is invalid: {reason}")]
    Invalid {
        name: String,
        value: String,
        reason: String,
    },
}
