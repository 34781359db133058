//! Signal and phasor construction from literal parameters

pub mod phasor;
pub mod synth;

pub use phasor::Phasor;
pub use synth::{
    complex_tone_sum, piecewise_signal, real_tone_sum, sideband_triplet, time_axis, Segment, Tone,
};
