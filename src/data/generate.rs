// Synthetic value generation for negative-test inputs
//
// Values are timestamp- and RNG-seeded; uniqueness is best effort only.
// Callers must not rely on generated values being stable across runs.

use chrono::Utc;
use rand::Rng;

/// Kind of synthetic value to generate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RandomKind {
    Email,
    Phone,
    Name,
    Company,
    Document,
}

/// Produces a fresh synthetic value of the given kind. No I/O, not seeded.
pub fn random_value(kind: RandomKind) -> String {
    let timestamp = Utc::now().timestamp_millis();
    let mut rng = rand::thread_rng();

    match kind {
        RandomKind::Email => format!("test{timestamp}@example.com"),
        RandomKind::Phone => format!("+57{}", rng.gen_range(1_000_000_000u64..10_000_000_000)),
        RandomKind::Name => format!("User{timestamp}"),
        RandomKind::Company => format!("Company{timestamp}"),
        RandomKind::Document => rng.gen_range(10_000_000u32..100_000_000).to_string(),
    }
}
