use std::f64::consts::PI;

const SAMPLE_RATE: f64 = 44_100.0;
const N_SAMPLES: usize = 4096;

const THRESHOLD: f64 = 0.5;
const RATIO: f64 = 4.0;
const ATTACK_MS: f64 = 5.0;
const RELEASE_MS: f64 = 50.0;

/// Minimal deterministic PRNG (xoshiro256**)
struct SimpleRng {
    state: [u64; 4],
}

impl SimpleRng {
    fn new(seed: u64) -> Self {
        let mut s = [0u64; 4];
        let mut x = seed;
        for slot in &mut s {
            x = x.wrapping_mul(6364136223846793005).wrapping_add(1);
            *slot = x;
        }
        SimpleRng { state: s }
    }

    fn next_u64(&mut self) -> u64 {
        let result = (self.state[1].wrapping_mul(5))
            .rotate_left(7)
            .wrapping_mul(9);
        let t = self.state[1] << 17;
        self.state[2] ^= self.state[0];
        self.state[3] ^= self.state[1];
        self.state[1] ^= self.state[2];
        self.state[0] ^= self.state[3];
        self.state[2] ^= t;
        self.state[3] = self.state[3].rotate_left(45);
        result
    }

    fn next_f64(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }

    /// Box-Muller transform for normal distribution
    fn gauss(&mut self, mean: f64, std_dev: f64) -> f64 {
        let u1 = self.next_f64().max(1e-15);
        let u2 = self.next_f64();
        let z = (-2.0 * u1.ln()).sqrt() * (2.0 * PI * u2).cos();
        mean + std_dev * z
    }
}

/// One-pole smoothing coefficient for a time constant in milliseconds.
fn smoothing_coeff(time_ms: f64) -> f64 {
    1.0 - (-1.0 / (time_ms * 1e-3 * SAMPLE_RATE)).exp()
}

fn main() {
    let mut rng = SimpleRng::new(42);

    // 440 Hz tone swelling through the threshold and back down, so the gain
    // computer has something to react to.
    let samples: Vec<f64> = (0..N_SAMPLES)
        .map(|i| {
            let t = i as f64 / SAMPLE_RATE;
            let swell = 0.5 - 0.5 * (2.0 * PI * i as f64 / N_SAMPLES as f64).cos();
            let tone = 0.9 * swell * (2.0 * PI * 440.0 * t).sin();
            tone + rng.gauss(0.0, 0.005)
        })
        .collect();

    let attack = smoothing_coeff(ATTACK_MS);
    let release = smoothing_coeff(RELEASE_MS);

    let mut envelope = Vec::with_capacity(N_SAMPLES);
    let mut gain = Vec::with_capacity(N_SAMPLES);
    let mut output = Vec::with_capacity(N_SAMPLES);

    let mut env = 0.0_f64;
    for &x in &samples {
        let level = x.abs();
        let coeff = if level > env { attack } else { release };
        env += coeff * (level - env);
        envelope.push(env);

        let g = if env > THRESHOLD {
            (THRESHOLD + (env - THRESHOLD) / RATIO) / env
        } else {
            1.0
        };
        gain.push(g);
        output.push(x * g);
    }

    let output_path = "debug.csv";
    let mut writer = csv::Writer::from_path(output_path).expect("Failed to create output file");
    writer
        .write_record(["sample", "envelope", "gain", "output"])
        .expect("Failed to write header");
    for i in 0..N_SAMPLES {
        writer
            .write_record([
                format!("{}", samples[i]),
                format!("{}", envelope[i]),
                format!("{}", gain[i]),
                format!("{}", output[i]),
            ])
            .expect("Failed to write row");
    }
    writer.flush().expect("Failed to flush output");

    println!("Wrote {N_SAMPLES} samples to {output_path}");
}
