use serde::{Deserialize, Serialize};

pub mod feed;
pub mod form;
pub mod system;

use feed::FeedMsg;
use form::FormMsg;
use system::SystemMsg;

/// Domain messages representing application intent and business logic
/// These are processed by the update function and represent pure domain events
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Msg {
    // System operations (delegated to SystemState)
    System(SystemMsg),

    // Feed operations (delegated to FeedState)
    Feed(FeedMsg),

    // Form operations (delegated to FormState)
    Form(FormMsg),
}
