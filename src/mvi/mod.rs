//! Model-View-Intent (MVI) architecture primitives.
//!
//! This module provides the base traits and the observable channel used to
//! implement unidirectional data flow between a view and its view-model.
//!
//! # Architecture
//!
//! ```text
//! Intent ──→ Reducer ──→ State ──→ StateChannel ──→ observers (View)
//!    ↑                                                  │
//!    └──────────────────────────────────────────────────┘
//! ```
//!
//! - **State**: Immutable snapshot, replaced wholesale on every change
//! - **Intent**: User actions forwarded by the view
//! - **Reducer**: Pure function that transforms state based on intents
//! - **StateChannel**: Holds the latest snapshot and notifies observers

mod channel;
mod intent;
mod reducer;
mod state;
mod store;

pub use channel::{ChannelError, StateChannel, SubscribeMode, Subscription, SubscriptionId};
pub use intent::Intent;
pub use reducer::Reducer;
pub use state::UiState;
pub use store::Store;
