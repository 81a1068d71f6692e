use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum DraftError {
    #[error("The {0} field is required")]
    MissingField(&'static str),
}
