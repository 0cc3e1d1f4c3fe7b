//! Fetch lifecycle of a single remote record.
//!
//! [`load`] describes one attempt as a stream: `Pending` first, then exactly
//! one terminal state. A [`Loader`] owns the state a screen renders and
//! tags every stream it starts with a [`Token`]. Only updates carrying the
//! current token are applied, so results arriving after [`Loader::cancel`]
//! or a newer [`Loader::load`] are dropped on the floor.
use crate::core::identifier::{self, Identifier};
use crate::{Error, Pokemon};

use futures_util::stream::{self, Stream, StreamExt};
use std::future;
use std::sync::Arc;
use std::sync::atomic::{self, AtomicU64};

/// Where records come from.
pub trait Source: Clone + Send + Sync + 'static {
    fn fetch(
        &self,
        identifier: &Identifier,
    ) -> impl Future<Output = Result<Pokemon, Error>> + Send;
}

#[derive(Debug, Clone)]
pub enum State {
    Pending,
    Ready(Arc<Pokemon>),
    Failed(Failure),
}

impl State {
    pub fn is_pending(&self) -> bool {
        matches!(self, Self::Pending)
    }

    pub fn is_terminal(&self) -> bool {
        !self.is_pending()
    }

    pub fn pokemon(&self) -> Option<&Arc<Pokemon>> {
        match self {
            Self::Ready(pokemon) => Some(pokemon),
            Self::Pending | Self::Failed(_) => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Failure {
    /// Blank input; nothing was requested.
    EmptyQuery,
    /// Unknown identifier, bad status, transport error or malformed payload.
    NotFound,
}

impl From<identifier::ParseError> for Failure {
    fn from(error: identifier::ParseError) -> Self {
        match error {
            identifier::ParseError::Empty => Self::EmptyQuery,
            identifier::ParseError::Zero => Self::NotFound,
        }
    }
}

pub fn load<S: Source>(source: S, query: &str) -> impl Stream<Item = State> + Send + use<S> {
    let identifier = Identifier::parse(query);

    let outcome = async move {
        let identifier = match identifier {
            Ok(identifier) => identifier,
            Err(error) => {
                log::warn!("Skipping fetch: {error}");

                return State::Failed(Failure::from(error));
            }
        };

        match source.fetch(&identifier).await {
            Ok(pokemon) => State::Ready(Arc::new(pokemon)),
            Err(error) => {
                log::warn!("Pokemon {identifier} is not available: {error}");

                State::Failed(Failure::NotFound)
            }
        }
    };

    stream::once(future::ready(State::Pending)).chain(stream::once(outcome))
}

#[derive(Debug)]
pub struct Loader {
    token: Token,
    state: State,
}

#[derive(Debug, Clone)]
pub struct Update {
    token: Token,
    state: State,
}

impl Update {
    pub fn state(&self) -> &State {
        &self.state
    }
}

impl Loader {
    pub fn new() -> Self {
        Self {
            token: Token::next(),
            state: State::Pending,
        }
    }

    /// Invalidates any load in flight and starts over with `query`.
    pub fn load<S: Source>(
        &mut self,
        source: &S,
        query: &str,
    ) -> impl Stream<Item = Update> + Send + use<S> {
        self.token = Token::next();
        self.state = State::Pending;

        let token = self.token;

        load(source.clone(), query).map(move |state| Update { token, state })
    }

    /// Returns whether the update was applied.
    pub fn apply(&mut self, update: Update) -> bool {
        if update.token != self.token {
            log::debug!("Discarding late update from {:?}", update.token);

            return false;
        }

        if self.state.is_terminal() {
            return false;
        }

        self.state = update.state;

        true
    }

    pub fn cancel(&mut self) {
        self.token = Token::next();
    }

    pub fn state(&self) -> &State {
        &self.state
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token(u64);

impl Token {
    fn next() -> Self {
        static NEXT: AtomicU64 = AtomicU64::new(0);

        Self(NEXT.fetch_add(1, atomic::Ordering::Relaxed))
    }
}
