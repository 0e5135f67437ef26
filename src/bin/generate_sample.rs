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
        let z = (-2.0 * u1.ln()).sqrt() * (2.0 * std::f64::consts::PI * u2).cos();
        mean + std_dev * z
    }

    /// Pick from `(value, weight)` pairs.
    fn weighted<'a>(&mut self, choices: &[(&'a str, f64)]) -> &'a str {
        let total: f64 = choices.iter().map(|(_, w)| w).sum();
        let mut roll = self.next_f64() * total;
        for &(value, weight) in choices {
            if roll < weight {
                return value;
            }
            roll -= weight;
        }
        choices[choices.len() - 1].0
    }
}

/// Training types with typical (minutes, kcal per minute).
const TRAININGS: [(&str, f64, f64); 5] = [
    ("Musculação", 60.0, 6.0),
    ("Cardio", 40.0, 9.5),
    ("Funcional", 45.0, 8.0),
    ("Yoga", 55.0, 3.5),
    ("Spinning", 45.0, 11.0),
];

fn main() {
    let mut args = std::env::args().skip(1);
    let output_path = args
        .next()
        .unwrap_or_else(|| "dados-treino-final.csv".to_string());
    let rows: usize = args
        .next()
        .map(|n| n.parse().expect("ROWS must be a positive integer"))
        .unwrap_or(500);

    let mut rng = SimpleRng::new(42);
    let mut writer = csv::Writer::from_path(&output_path).expect("Failed to create output file");

    writer
        .write_record([
            "genero",
            "periodo_check_in",
            "status_presenca",
            "tipo_inscricao",
            "idade",
            "calorias_queimadas",
            "tempo_treino_minutos",
            "tipo_treino",
        ])
        .expect("Failed to write header");

    for _ in 0..rows {
        let gender = rng.weighted(&[("Masculino", 0.52), ("Feminino", 0.46), ("Outro", 0.02)]);
        let period = rng.weighted(&[("Manhã", 0.35), ("Tarde", 0.25), ("Noite", 0.40)]);
        let subscription = rng.weighted(&[("Mensal", 0.5), ("Trimestral", 0.2), ("Anual", 0.3)]);
        // Annual members skip less often.
        let presence = if subscription == "Anual" { 0.88 } else { 0.75 };
        let status = rng.weighted(&[("Presente", presence), ("Ausente", 1.0 - presence)]);
        let age = rng.gauss(32.0, 9.0).round().clamp(16.0, 70.0) as u32;

        let idx = (rng.next_f64() * TRAININGS.len() as f64) as usize % TRAININGS.len();
        let (training, base_minutes, kcal_per_minute) = TRAININGS[idx];

        let (minutes, calories) = if status == "Presente" {
            let minutes = rng.gauss(base_minutes, 12.0).round().max(10.0);
            let calories = (minutes * rng.gauss(kcal_per_minute, 1.0).max(1.0)).round();
            (minutes, calories)
        } else {
            (0.0, 0.0)
        };

        writer
            .write_record([
                gender.to_string(),
                period.to_string(),
                status.to_string(),
                subscription.to_string(),
                age.to_string(),
                calories.to_string(),
                minutes.to_string(),
                training.to_string(),
            ])
            .expect("Failed to write row");
    }

    writer.flush().expect("Failed to flush output file");

    println!("Wrote {rows} training records to {output_path}");
}
