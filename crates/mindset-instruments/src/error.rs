use thiserror::Error;

#[derive(Debug, Error)]
pub enum InstrumentError {
    #[error("unknown instrument: {0}")]
    UnknownInstrument(String),

    #[error("unknown statement '{statement_id}' for instrument '{instrument_id}'")]
    UnknownStatement {
        instrument_id: String,
        statement_id: String,
    },
}
