//! Commands understood by the media thread.

#[derive(Debug)]
pub enum MediaCmd {
    /// Replace the current source; the new sink starts paused.
    Load { source: String, generation: u64 },
    /// Start or resume playback, rebuilding a finished sink from the start.
    Play { generation: u64 },
    Pause,
    SetVolume(f32),
    /// Quit the media thread, optionally fading out over `fade_out_ms` milliseconds.
    Quit { fade_out_ms: u64 },
}
