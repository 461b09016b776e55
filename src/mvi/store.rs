//! Reducer-driven store on top of a [`StateChannel`].

use std::fmt;
use std::marker::PhantomData;

use super::channel::{ChannelError, StateChannel, SubscribeMode};
use super::intent::Intent;
use super::reducer::Reducer;

/// Runs intents through reducer `R` and publishes each resulting state.
///
/// Each dispatch reads the current snapshot, reduces and publishes as one
/// atomic step, so concurrent dispatches are applied one after another.
pub struct Store<R: Reducer> {
    channel: StateChannel<R::State>,
    _reducer: PhantomData<fn() -> R>,
}

impl<R: Reducer> Store<R> {
    pub fn new(mode: SubscribeMode) -> Self {
        Self {
            channel: StateChannel::new(mode),
            _reducer: PhantomData,
        }
    }

    /// Apply `intent` to the current state and publish the result.
    pub fn dispatch(&self, intent: R::Intent) -> Result<R::Outcome, ChannelError> {
        let name = intent.name();
        tracing::debug!(intent = name, "Dispatching intent");
        self.channel
            .update(move |state| R::reduce(state.clone(), intent))
    }

    pub fn channel(&self) -> &StateChannel<R::State> {
        &self.channel
    }
}

impl<R: Reducer> Clone for Store<R> {
    fn clone(&self) -> Self {
        Self {
            channel: self.channel.clone(),
            _reducer: PhantomData,
        }
    }
}

impl<R: Reducer> fmt::Debug for Store<R>
where
    R::State: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Store").field("channel", &self.channel).finish()
    }
}
