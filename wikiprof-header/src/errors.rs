use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("No account under name: `{0}`")]
    AccountNotFoundError(String),
    #[error("Malformed user reference: `{0}`")]
    MalformedReferenceError(String),
    #[error("Refusing to compose a profile for anonymous identity: `{0}`")]
    AnonymousOwnerError(String),
}
