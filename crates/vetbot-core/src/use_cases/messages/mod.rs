pub(crate) mod handle_message_event;

pub use handle_message_event::{HandleMessageEventInterface, MessageEvent};

#[cfg(any(test, feature = "testkit"))]
pub use self::handle_message_event::MockHandleMessageEventInterface;
