use actix;
use diesel;
use diesel::result::DatabaseErrorKind;

pub type Result<T> = ::std::result::Result<T, Error>;

#[derive(Debug, Fail)]
pub enum Error {
    #[fail(display = "Constraint violation: {}", _0)]
    ConstraintViolation(String),

    #[fail(display = "NotFound")]
    NotFound,

    #[fail(display = "Store unavailable: {}", _0)]
    StoreUnavailable(#[cause] StoreError),
}

#[derive(Debug, Fail)]
pub enum StoreError {
    #[fail(display = "{}", _0)]
    ActorMailbox(#[cause] actix::MailboxError),

    #[fail(display = "{}", _0)]
    Db(#[cause] diesel::result::Error),

    #[fail(display = "{}", _0)]
    Pool(#[cause] diesel::r2d2::PoolError),
}

impl Error {
    pub fn constraint<S: Into<String>>(message: S) -> Self {
        Error::ConstraintViolation(message.into())
    }
}

impl From<actix::MailboxError> for Error {
    fn from(e: actix::MailboxError) -> Self {
        Error::StoreUnavailable(StoreError::ActorMailbox(e))
    }
}

impl From<diesel::r2d2::PoolError> for Error {
    fn from(e: diesel::r2d2::PoolError) -> Self {
        Error::StoreUnavailable(StoreError::Pool(e))
    }
}

impl From<diesel::result::Error> for Error {
    fn from(e: diesel::result::Error) -> Self {
        use diesel::result::Error::{DatabaseError, NotFound};

        match e {
            NotFound => Error::NotFound,
            DatabaseError(DatabaseErrorKind::UniqueViolation, ref info)
            | DatabaseError(DatabaseErrorKind::ForeignKeyViolation, ref info) => {
                Error::ConstraintViolation(info.message().to_owned())
            }
            e => Error::StoreUnavailable(StoreError::Db(e)),
        }
    }
}
