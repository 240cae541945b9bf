use thiserror::Error;

#[derive(Error, Debug)]
pub enum AlmagestError {
    #[error("Unknown body name: {0}")]
    UnknownBody(String),

    #[error("Invalid orbital elements: {0}")]
    InvalidOrbitalElements(String),

    #[error("Invalid engine parameter: {0}")]
    InvalidEngineParameter(String),

    #[error("Unable to parse engine configuration: {0}")]
    ConfigParsing(String),
}

impl From<serde_json::Error> for AlmagestError {
    fn from(err: serde_json::Error) -> Self {
        AlmagestError::ConfigParsing(err.to_string())
    }
}

impl PartialEq for AlmagestError {
    fn eq(&self, other: &Self) -> bool {
        use AlmagestError::*;
        match (self, other) {
            (UnknownBody(a), UnknownBody(b)) => a == b,
            (InvalidOrbitalElements(a), InvalidOrbitalElements(b)) => a == b,
            (InvalidEngineParameter(a), InvalidEngineParameter(b)) => a == b,

            // Parser messages carry line/column details: same variant is enough
            (ConfigParsing(_), ConfigParsing(_)) => true,

            _ => false,
        }
    }
}
