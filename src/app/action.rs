/// Side effects the event handler asks the main loop to perform.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Deliver one more frame after the frame interval.
    RequestFrame,
    /// Drop the pending frame, if any.
    CancelFrame,
    Quit,
}
