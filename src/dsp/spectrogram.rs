use rustfft::num_complex::Complex;
use rustfft::FftPlanner;

// ---------------------------------------------------------------------------
// STFT / mel parameters
// ---------------------------------------------------------------------------

pub const N_FFT: usize = 2048;
pub const HOP: usize = 512;
pub const N_MELS: usize = 128;
/// Dynamic range below the loudest cell.
pub const TOP_DB: f32 = 80.0;

// ---------------------------------------------------------------------------
// MelSpectrogram
// ---------------------------------------------------------------------------

/// A mel spectrogram in decibels relative to the loudest cell, so values lie
/// in `[-TOP_DB, 0]`.
#[derive(Debug, Clone)]
pub struct MelSpectrogram {
    /// Row-major `[mel][frame]`.
    pub db: Vec<f32>,
    pub n_mels: usize,
    pub frames: usize,
    /// Seconds advanced per frame.
    pub frame_dt: f32,
    pub sample_rate: u32,
}

impl MelSpectrogram {
    pub fn at(&self, mel: usize, frame: usize) -> f32 {
        self.db[mel * self.frames + frame]
    }

    /// Seconds spanned by the whole spectrogram.
    pub fn duration_secs(&self) -> f64 {
        self.frames as f64 * self.frame_dt as f64
    }
}

// ---------------------------------------------------------------------------
// Computation
// ---------------------------------------------------------------------------

/// Compute a mel spectrogram with the default analysis parameters:
/// Hann-windowed STFT (n_fft 2048, hop 512), 128 HTK mel bands spanning
/// 0 Hz to Nyquist, power mapped to dB with the maximum as reference.
pub fn mel_spectrogram(samples: &[f32], sample_rate: u32) -> MelSpectrogram {
    compute(samples, sample_rate, N_FFT, HOP, N_MELS)
}

fn compute(
    samples: &[f32],
    sample_rate: u32,
    n_fft: usize,
    hop: usize,
    n_mels: usize,
) -> MelSpectrogram {
    let n_bins = n_fft / 2 + 1;
    let frames = if samples.len() >= n_fft {
        1 + (samples.len() - n_fft) / hop
    } else {
        1 // short input is zero-padded to one full window
    };

    let window = hann(n_fft);
    let filterbank = mel_filterbank(n_mels, n_fft, sample_rate);

    let mut planner = FftPlanner::<f32>::new();
    let fft = planner.plan_fft_forward(n_fft);

    let mut buf: Vec<Complex<f32>> = vec![Complex::new(0.0, 0.0); n_fft];
    let mut power = vec![0.0f32; n_bins];
    let mut mel_power = vec![0.0f32; n_mels * frames];

    for frame in 0..frames {
        let start = frame * hop;
        for i in 0..n_fft {
            let s = samples.get(start + i).copied().unwrap_or(0.0);
            buf[i] = Complex::new(s * window[i], 0.0);
        }
        fft.process(&mut buf);

        for (k, p) in power.iter_mut().enumerate() {
            *p = buf[k].norm_sqr();
        }

        for (m, filter) in filterbank.iter().enumerate() {
            let mut acc = 0.0f32;
            for (offset, &w) in filter.weights.iter().enumerate() {
                acc += power[filter.first_bin + offset] * w;
            }
            mel_power[m * frames + frame] = acc;
        }
    }

    // Power → dB relative to the loudest cell, floored at -TOP_DB.
    let amin = 1e-10f32;
    let reference = mel_power.iter().copied().fold(amin, f32::max);
    let db = mel_power
        .iter()
        .map(|&p| (10.0 * (p.max(amin) / reference).log10()).max(-TOP_DB))
        .collect();

    MelSpectrogram {
        db,
        n_mels,
        frames,
        frame_dt: hop as f32 / sample_rate as f32,
        sample_rate,
    }
}

fn hann(n: usize) -> Vec<f32> {
    (0..n)
        .map(|i| 0.5 - 0.5 * (std::f32::consts::TAU * i as f32 / n as f32).cos())
        .collect()
}

// ---------------------------------------------------------------------------
// Mel filterbank (HTK scale, triangular filters)
// ---------------------------------------------------------------------------

pub fn hz_to_mel(hz: f32) -> f32 {
    2595.0 * (1.0 + hz / 700.0).log10()
}

pub fn mel_to_hz(mel: f32) -> f32 {
    700.0 * (10f32.powf(mel / 2595.0) - 1.0)
}

/// Center frequency of mel band `band` for a bank spanning 0 Hz..sr/2.
pub fn band_center_hz(sample_rate: u32, n_mels: usize, band: usize) -> f32 {
    let mel_hi = hz_to_mel(sample_rate as f32 / 2.0);
    mel_to_hz(mel_hi * (band + 1) as f32 / (n_mels + 1) as f32)
}

/// One triangular filter stored sparsely: weights for the contiguous FFT-bin
/// range starting at `first_bin`.
struct MelFilter {
    first_bin: usize,
    weights: Vec<f32>,
}

fn mel_filterbank(n_mels: usize, n_fft: usize, sample_rate: u32) -> Vec<MelFilter> {
    let n_bins = n_fft / 2 + 1;
    let mel_hi = hz_to_mel(sample_rate as f32 / 2.0);

    // n_mels + 2 edge frequencies, evenly spaced on the mel axis.
    let edge_hz: Vec<f32> = (0..n_mels + 2)
        .map(|i| mel_to_hz(mel_hi * i as f32 / (n_mels + 1) as f32))
        .collect();
    let bin_hz = |k: usize| k as f32 * sample_rate as f32 / n_fft as f32;

    (0..n_mels)
        .map(|m| {
            let (lo, mid, hi) = (edge_hz[m], edge_hz[m + 1], edge_hz[m + 2]);
            let mut first_bin = 0;
            let mut weights = Vec::new();
            for k in 0..n_bins {
                let f = bin_hz(k);
                let w = if f <= lo || f >= hi {
                    0.0
                } else if f <= mid {
                    (f - lo) / (mid - lo)
                } else {
                    (hi - f) / (hi - mid)
                };
                if w > 0.0 {
                    if weights.is_empty() {
                        first_bin = k;
                    }
                    weights.push(w);
                } else if !weights.is_empty() {
                    break;
                }
            }
            MelFilter { first_bin, weights }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sine(freq: f32, sample_rate: u32, secs: f32) -> Vec<f32> {
        let n = (sample_rate as f32 * secs) as usize;
        (0..n)
            .map(|i| (std::f32::consts::TAU * freq * i as f32 / sample_rate as f32).sin())
            .collect()
    }

    #[test]
    fn frame_count_matches_hop_formula() {
        let sr = 22_050;
        let spec = mel_spectrogram(&sine(440.0, sr, 1.0), sr);
        let expected = 1 + (22_050 - N_FFT) / HOP;
        assert_eq!(spec.frames, expected);
        assert_eq!(spec.n_mels, N_MELS);
        assert_eq!(spec.db.len(), N_MELS * expected);
    }

    #[test]
    fn short_input_still_yields_one_frame() {
        let spec = mel_spectrogram(&[0.5; 100], 8_000);
        assert_eq!(spec.frames, 1);
    }

    #[test]
    fn db_range_is_bounded() {
        let sr = 22_050;
        let spec = mel_spectrogram(&sine(1_000.0, sr, 0.5), sr);
        let max = spec.db.iter().copied().fold(f32::NEG_INFINITY, f32::max);
        let min = spec.db.iter().copied().fold(f32::INFINITY, f32::min);
        assert!(max.abs() < 1e-3, "reference cell should sit at 0 dB");
        assert!(min >= -TOP_DB - 1e-3);
    }

    #[test]
    fn pure_tone_peaks_in_the_matching_band() {
        let sr = 22_050;
        let tone = 1_000.0;
        let spec = mel_spectrogram(&sine(tone, sr, 0.5), sr);

        // Mean energy per band, loudest band should sit near the tone.
        let mut best = (0usize, f32::NEG_INFINITY);
        for m in 0..spec.n_mels {
            let mean: f32 =
                (0..spec.frames).map(|f| spec.at(m, f)).sum::<f32>() / spec.frames as f32;
            if mean > best.1 {
                best = (m, mean);
            }
        }
        let center = band_center_hz(sr, spec.n_mels, best.0);
        assert!(
            (center - tone).abs() < 150.0,
            "loudest band centered at {center} Hz, expected ~{tone} Hz"
        );
    }

    #[test]
    fn band_centers_increase() {
        let sr = 44_100;
        let centers: Vec<f32> = (0..N_MELS).map(|m| band_center_hz(sr, N_MELS, m)).collect();
        assert!(centers.windows(2).all(|w| w[0] < w[1]));
        assert!(centers[N_MELS - 1] < sr as f32 / 2.0);
    }
}
