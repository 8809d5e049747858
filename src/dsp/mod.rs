/// Signal analysis for the audio strategies.
pub mod spectrogram;
