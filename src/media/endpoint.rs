use crate::player::PlayerId;

/// A single-track playback primitive.
///
/// Every method is a fire-and-forget command. Completion is only observed
/// through [`MediaEvent::Ended`], which the implementation delivers on the
/// channel it was opened with.
pub trait MediaEndpoint {
    /// Replace the current source. The new source starts paused at its beginning.
    fn load(&mut self, source: &str);

    /// Start or resume playback of the loaded source. A source that already
    /// played to its end starts over.
    fn play(&mut self);

    fn pause(&mut self);

    /// Set the output volume. The value is passed through untouched.
    fn set_volume(&mut self, level: f32);

    fn volume(&self) -> f32;

    /// Counter bumped by every `load` and `play`. An `Ended` event carrying an
    /// older value belongs to playback that has since been replaced.
    fn generation(&self) -> u64;
}

/// Notifications emitted by media endpoints.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MediaEvent {
    /// The loaded source of `player` played to its natural end. Not sent on
    /// pause, load or quit. `generation` is the endpoint's generation when
    /// that playback was started.
    Ended { player: PlayerId, generation: u64 },
}
