use std::fs::File;
use std::path::Path;

use anyhow::{anyhow, bail, Context, Result};
use symphonia::core::audio::SampleBuffer;
use symphonia::core::codecs::{DecoderOptions, CODEC_TYPE_NULL};
use symphonia::core::errors::Error;
use symphonia::core::formats::FormatOptions;
use symphonia::core::io::MediaSourceStream;
use symphonia::core::meta::MetadataOptions;

use super::model::AudioClip;

// ---------------------------------------------------------------------------
// Decoding
// ---------------------------------------------------------------------------

/// Decode an entire audio file (wav, mp3, ...) to mono f32 samples at the
/// source sample rate. Channels are downmixed by arithmetic mean.
pub fn decode(path: &Path) -> Result<AudioClip> {
    let src = File::open(path).with_context(|| format!("opening {}", path.display()))?;
    let mss = MediaSourceStream::new(Box::new(src), Default::default());

    let probed = symphonia::default::get_probe()
        .format(
            &Default::default(),
            mss,
            &FormatOptions::default(),
            &MetadataOptions::default(),
        )
        .context("probing audio container")?;

    let mut format = probed.format;
    let track = format
        .tracks()
        .iter()
        .find(|t| t.codec_params.codec != CODEC_TYPE_NULL)
        .ok_or_else(|| anyhow!("no supported audio track found"))?;

    let mut decoder = symphonia::default::get_codecs()
        .make(&track.codec_params, &DecoderOptions::default())
        .context("creating decoder")?;

    let track_id = track.id;
    let sample_rate = track
        .codec_params
        .sample_rate
        .ok_or_else(|| anyhow!("unknown sample rate"))?;

    let mut samples: Vec<f32> = Vec::new();

    loop {
        let packet = match format.next_packet() {
            Ok(packet) => packet,
            Err(Error::IoError(_)) => break, // EOF
            Err(Error::ResetRequired) => continue,
            Err(err) => return Err(err.into()),
        };

        if packet.track_id() != track_id {
            continue;
        }

        match decoder.decode(&packet) {
            Ok(decoded) => {
                let spec = *decoded.spec();
                let mut buf = SampleBuffer::<f32>::new(decoded.capacity() as u64, spec);
                buf.copy_interleaved_ref(decoded);

                let channels = spec.channels.count().max(1);
                for frame in buf.samples().chunks_exact(channels) {
                    samples.push(frame.iter().sum::<f32>() / channels as f32);
                }
            }
            // A corrupt packet is dropped; decoding continues.
            Err(Error::DecodeError(_)) => (),
            Err(err) => return Err(err.into()),
        }
    }

    if samples.is_empty() {
        bail!("file contained no decodable audio");
    }

    Ok(AudioClip {
        samples,
        sample_rate,
    })
}

// ---------------------------------------------------------------------------
// Waveform envelope
// ---------------------------------------------------------------------------

/// Peak-decimated waveform: per bucket, one `[t, min]` and one `[t, max]`
/// point, so the plotted line brackets the true signal at any zoom level.
pub fn envelope(clip: &AudioClip, max_buckets: usize) -> Vec<[f64; 2]> {
    if clip.samples.is_empty() || max_buckets == 0 {
        return Vec::new();
    }

    let bucket = clip.samples.len().div_ceil(max_buckets);
    let mut out = Vec::with_capacity(2 * max_buckets);

    for (i, chunk) in clip.samples.chunks(bucket).enumerate() {
        let mut lo = f32::INFINITY;
        let mut hi = f32::NEG_INFINITY;
        for &s in chunk {
            lo = lo.min(s);
            hi = hi.max(s);
        }
        let t = (i * bucket) as f64 / clip.sample_rate as f64;
        out.push([t, lo as f64]);
        out.push([t, hi as f64]);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    /// Minimal PCM16 WAV writer for fixtures.
    fn write_wav(path: &Path, channels: u16, sample_rate: u32, samples: &[i16]) {
        let data_len = (samples.len() * 2) as u32;
        let byte_rate = sample_rate * channels as u32 * 2;
        let block_align = channels * 2;

        let mut f = std::fs::File::create(path).unwrap();
        f.write_all(b"RIFF").unwrap();
        f.write_all(&(36 + data_len).to_le_bytes()).unwrap();
        f.write_all(b"WAVE").unwrap();
        f.write_all(b"fmt ").unwrap();
        f.write_all(&16u32.to_le_bytes()).unwrap();
        f.write_all(&1u16.to_le_bytes()).unwrap();
        f.write_all(&channels.to_le_bytes()).unwrap();
        f.write_all(&sample_rate.to_le_bytes()).unwrap();
        f.write_all(&byte_rate.to_le_bytes()).unwrap();
        f.write_all(&block_align.to_le_bytes()).unwrap();
        f.write_all(&16u16.to_le_bytes()).unwrap();
        f.write_all(b"data").unwrap();
        f.write_all(&data_len.to_le_bytes()).unwrap();
        for s in samples {
            f.write_all(&s.to_le_bytes()).unwrap();
        }
    }

    #[test]
    fn decodes_mono_wav() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tone.wav");
        let sample_rate = 8_000u32;
        let samples: Vec<i16> = (0..8_000)
            .map(|i| {
                let t = i as f32 / sample_rate as f32;
                ((t * 440.0 * std::f32::consts::TAU).sin() * 16_000.0) as i16
            })
            .collect();
        write_wav(&path, 1, sample_rate, &samples);

        let clip = decode(&path).unwrap();
        assert_eq!(clip.sample_rate, sample_rate);
        assert_eq!(clip.samples.len(), 8_000);
        assert!(clip.samples.iter().all(|s| s.abs() <= 1.0));
    }

    #[test]
    fn downmixes_stereo_to_channel_mean() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("stereo.wav");
        // L = ~0.4, R = 0.0 → mono mean ~0.2
        let mut samples = Vec::new();
        for _ in 0..512 {
            samples.push(13_107i16); // 0.4 * 32768
            samples.push(0);
        }
        write_wav(&path, 2, 8_000, &samples);

        let clip = decode(&path).unwrap();
        assert_eq!(clip.samples.len(), 512);
        assert!((clip.samples[10] - 0.2).abs() < 0.01);
    }

    #[test]
    fn unreadable_file_is_an_error_not_a_crash() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("noise.wav");
        std::fs::write(&path, b"definitely not audio").unwrap();
        assert!(decode(&path).is_err());
        assert!(decode(Path::new("/nonexistent/clip.mp3")).is_err());
    }

    #[test]
    fn envelope_brackets_the_signal() {
        let clip = AudioClip {
            samples: (0..10_000)
                .map(|i| (i as f32 / 100.0).sin())
                .collect(),
            sample_rate: 1_000,
        };
        let env = envelope(&clip, 256);
        assert!(env.len() <= 2 * 256);

        let true_min = clip.samples.iter().cloned().fold(f32::INFINITY, f32::min) as f64;
        let true_max = clip
            .samples
            .iter()
            .cloned()
            .fold(f32::NEG_INFINITY, f32::max) as f64;
        let env_min = env.iter().map(|p| p[1]).fold(f64::INFINITY, f64::min);
        let env_max = env.iter().map(|p| p[1]).fold(f64::NEG_INFINITY, f64::max);
        assert!((env_min - true_min).abs() < 1e-6);
        assert!((env_max - true_max).abs() < 1e-6);
    }

    #[test]
    fn envelope_of_empty_clip_is_empty() {
        let clip = AudioClip {
            samples: Vec::new(),
            sample_rate: 44_100,
        };
        assert!(envelope(&clip, 128).is_empty());
    }
}
