use futures::channel::mpsc;

///
/// An event raised by a scene element that's waiting to be delivered to a guest
///
/// These are the four values passed to the guest's event export.
///
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub struct ElementEvent {
    pub descriptor:     i32,
    pub element_kind:   i32,
    pub event_kind:     i32,
    pub user_data:      i32,
}

/// Where host event callbacks send the events they receive
pub type ElementEventSender = mpsc::UnboundedSender<ElementEvent>;

/// Where a script reads the events that are waiting for it
pub type ElementEventReceiver = mpsc::UnboundedReceiver<ElementEvent>;

///
/// Creates the queue for the events raised for a single script
///
pub fn element_event_queue() -> (ElementEventSender, ElementEventReceiver) {
    mpsc::unbounded()
}
