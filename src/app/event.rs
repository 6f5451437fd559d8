use crossterm::event::Event as CrosstermEvent;

pub type FrameId = u64;

#[derive(Debug)]
pub enum AppEvent {
    /// Terminal input event
    Terminal(CrosstermEvent),

    /// A frame requested from the scheduler is due
    Frame(FrameId),
}
