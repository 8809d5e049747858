use std::io::Write;

use serde::Serialize;

/// Deterministic noise for the demo data: a splitmix64 stream shaped into
/// bell-ish jitter by summing uniforms. Keeps the outputs reproducible
/// without a rand dependency.
struct Noise(u64);

impl Noise {
    fn next_unit(&mut self) -> f64 {
        self.0 = self.0.wrapping_add(0x9E37_79B9_7F4A_7C15);
        let mut z = self.0;
        z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
        z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
        z ^= z >> 31;
        (z >> 11) as f64 / (1u64 << 53) as f64
    }

    /// Bell-shaped jitter in [-spread, spread] (mean of four uniforms,
    /// recentred).
    fn jitter(&mut self, spread: f64) -> f64 {
        let sum: f64 = (0..4).map(|_| self.next_unit()).sum();
        (sum / 2.0 - 1.0) * spread
    }
}

#[derive(Serialize)]
struct PointRecord {
    x: f64,
    y: f64,
}

fn main() {
    let mut noise = Noise(42);

    // ---- Points: a noisy sine arc, matching the loader schema ----
    let points: Vec<PointRecord> = (0..60)
        .map(|i| {
            let x = i as f64 * 0.2;
            PointRecord {
                x,
                y: x.sin() * 3.0 + noise.jitter(0.4),
            }
        })
        .collect();

    let csv_path = "sample_points.csv";
    let mut writer = csv::Writer::from_path(csv_path).expect("Failed to create CSV file");
    writer
        .write_record(["x", "y"])
        .expect("Failed to write CSV header");
    for p in &points {
        writer
            .write_record([p.x.to_string(), p.y.to_string()])
            .expect("Failed to write CSV row");
    }
    writer.flush().expect("Failed to flush CSV");

    let json_path = "sample_points.json";
    let json = serde_json::to_string_pretty(&points).expect("Failed to serialize points");
    std::fs::write(json_path, json).expect("Failed to write JSON file");

    // ---- Audio: 2 s of 440 Hz with a soft upward sweep and a little noise ----
    let sample_rate = 22_050u32;
    let samples: Vec<i16> = (0..2 * sample_rate)
        .map(|i| {
            let t = i as f64 / sample_rate as f64;
            let freq = 440.0 + 220.0 * t;
            let s = (std::f64::consts::TAU * freq * t).sin() * 0.6 + noise.jitter(0.03);
            (s.clamp(-1.0, 1.0) * i16::MAX as f64) as i16
        })
        .collect();

    let wav_path = "sample_tone.wav";
    write_wav(wav_path, sample_rate, &samples).expect("Failed to write WAV file");

    println!(
        "Wrote {} points to {csv_path} / {json_path} and a {:.1} s tone to {wav_path}",
        points.len(),
        samples.len() as f64 / sample_rate as f64,
    );
}

/// PCM16 mono WAV writer.
fn write_wav(path: &str, sample_rate: u32, samples: &[i16]) -> std::io::Result<()> {
    let data_len = (samples.len() * 2) as u32;
    let mut f = std::fs::File::create(path)?;

    f.write_all(b"RIFF")?;
    f.write_all(&(36 + data_len).to_le_bytes())?;
    f.write_all(b"WAVE")?;

    f.write_all(b"fmt ")?;
    f.write_all(&16u32.to_le_bytes())?;
    f.write_all(&1u16.to_le_bytes())?; // PCM
    f.write_all(&1u16.to_le_bytes())?; // mono
    f.write_all(&sample_rate.to_le_bytes())?;
    f.write_all(&(sample_rate * 2).to_le_bytes())?; // byte rate
    f.write_all(&2u16.to_le_bytes())?; // block align
    f.write_all(&16u16.to_le_bytes())?; // bits per sample

    f.write_all(b"data")?;
    f.write_all(&data_len.to_le_bytes())?;
    for s in samples {
        f.write_all(&s.to_le_bytes())?;
    }
    Ok(())
}
