//! Classification of interpreted responses.
//!
//! The outcome is a pure function of the status code and whether the body
//! parsed. Status ranges win over parse state: a 500 with an unparsable body
//! is a server failure, and only a non-error status with an unparsed body is
//! a parse failure.

use derive_more::Display;

use crate::{Error, FailureLogger, InterpretedResponse, Result};

/// Tag of an [`Outcome`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum OutcomeKind {
    /// Parsed response with a non-error status.
    #[display("success")]
    Success,
    /// Status `>= 500`.
    #[display("server failure")]
    ServerFailure,
    /// Status `404`.
    #[display("not found")]
    NotFoundFailure,
    /// Status `401`.
    #[display("authentication failure")]
    AuthenticationFailure,
    /// Any other status `>= 400`.
    #[display("client failure")]
    ClientFailure,
    /// Non-error status but the body did not parse.
    #[display("parse failure")]
    ParseFailure,
}

impl OutcomeKind {
    /// Classify a status code and parse state. First match wins:
    ///
    /// 1. `>= 500` → [`ServerFailure`](Self::ServerFailure)
    /// 2. `404` → [`NotFoundFailure`](Self::NotFoundFailure)
    /// 3. `401` → [`AuthenticationFailure`](Self::AuthenticationFailure)
    /// 4. `>= 400` → [`ClientFailure`](Self::ClientFailure)
    /// 5. not parsed → [`ParseFailure`](Self::ParseFailure)
    /// 6. otherwise [`Success`](Self::Success)
    #[must_use]
    pub const fn of(status_code: u16, parsed: bool) -> Self {
        match status_code {
            500.. => Self::ServerFailure,
            404 => Self::NotFoundFailure,
            401 => Self::AuthenticationFailure,
            400.. => Self::ClientFailure,
            _ if !parsed => Self::ParseFailure,
            _ => Self::Success,
        }
    }

    /// Returns `true` for [`OutcomeKind::Success`].
    #[must_use]
    pub const fn is_success(&self) -> bool {
        matches!(self, Self::Success)
    }
}

/// A classified response.
#[derive(Debug, Clone)]
pub enum Outcome<X> {
    /// See [`OutcomeKind::Success`].
    Success(InterpretedResponse<X>),
    /// See [`OutcomeKind::ServerFailure`].
    ServerFailure(InterpretedResponse<X>),
    /// See [`OutcomeKind::NotFoundFailure`].
    NotFoundFailure(InterpretedResponse<X>),
    /// See [`OutcomeKind::AuthenticationFailure`].
    AuthenticationFailure(InterpretedResponse<X>),
    /// See [`OutcomeKind::ClientFailure`].
    ClientFailure(InterpretedResponse<X>),
    /// See [`OutcomeKind::ParseFailure`].
    ParseFailure(InterpretedResponse<X>),
}

impl<X> Outcome<X> {
    /// The tag of this outcome.
    #[must_use]
    pub const fn kind(&self) -> OutcomeKind {
        match self {
            Self::Success(_) => OutcomeKind::Success,
            Self::ServerFailure(_) => OutcomeKind::ServerFailure,
            Self::NotFoundFailure(_) => OutcomeKind::NotFoundFailure,
            Self::AuthenticationFailure(_) => OutcomeKind::AuthenticationFailure,
            Self::ClientFailure(_) => OutcomeKind::ClientFailure,
            Self::ParseFailure(_) => OutcomeKind::ParseFailure,
        }
    }

    /// The response that produced this outcome.
    #[must_use]
    pub const fn response(&self) -> &InterpretedResponse<X> {
        match self {
            Self::Success(response)
            | Self::ServerFailure(response)
            | Self::NotFoundFailure(response)
            | Self::AuthenticationFailure(response)
            | Self::ClientFailure(response)
            | Self::ParseFailure(response) => response,
        }
    }

    /// Consume into the response that produced this outcome.
    #[must_use]
    pub fn into_response(self) -> InterpretedResponse<X> {
        match self {
            Self::Success(response)
            | Self::ServerFailure(response)
            | Self::NotFoundFailure(response)
            | Self::AuthenticationFailure(response)
            | Self::ClientFailure(response)
            | Self::ParseFailure(response) => response,
        }
    }

    /// Convert into the caller-facing result.
    ///
    /// # Errors
    ///
    /// Returns the [`Error`] variant matching every non-success outcome.
    pub fn into_result(self) -> Result<InterpretedResponse<X>> {
        match self {
            Self::Success(response) => Ok(response),
            Self::ServerFailure(response) => Err(Error::Server(response.into_failure())),
            Self::NotFoundFailure(response) => Err(Error::NotFound(response.into_failure())),
            Self::AuthenticationFailure(response) => {
                Err(Error::Authentication(response.into_failure()))
            }
            Self::ClientFailure(response) => Err(Error::Client(response.into_failure())),
            Self::ParseFailure(response) => Err(Error::Parse(response.into_failure())),
        }
    }
}

/// Classify an interpreted response.
#[must_use]
pub fn classify<X>(response: InterpretedResponse<X>) -> Outcome<X> {
    match OutcomeKind::of(response.status_code(), response.is_parsed()) {
        OutcomeKind::Success => Outcome::Success(response),
        OutcomeKind::ServerFailure => Outcome::ServerFailure(response),
        OutcomeKind::NotFoundFailure => Outcome::NotFoundFailure(response),
        OutcomeKind::AuthenticationFailure => Outcome::AuthenticationFailure(response),
        OutcomeKind::ClientFailure => Outcome::ClientFailure(response),
        OutcomeKind::ParseFailure => Outcome::ParseFailure(response),
    }
}

/// Classify a response and log any failure before returning it.
///
/// # Errors
///
/// Returns the classified failure, after it has been handed to `logger`.
pub fn detect_error<X>(
    response: InterpretedResponse<X>,
    logger: &dyn FailureLogger,
) -> Result<InterpretedResponse<X>> {
    classify(response).into_result().inspect_err(|error| {
        logger.log(error);
    })
}
