use sha2::{Digest, Sha256};

const NUDGE_MODULUS: u64 = 8;

/// Stable 0..=7 nudge derived from SHA-256 of `id ‖ budget ‖ quality`.
///
/// Identical inputs give identical nudges across calls, processes and
/// platforms; nothing here reads a clock or a seeded hasher.
pub fn tie_break_nudge(vehicle_id: &str, budget_range: &str, vehicle_quality: &str) -> u8 {
    let mut hasher = Sha256::new();
    hasher.update(vehicle_id.as_bytes());
    hasher.update(budget_range.as_bytes());
    hasher.update(vehicle_quality.as_bytes());
    let digest = hasher.finalize();

    let mut prefix = [0u8; 8];
    prefix.copy_from_slice(&digest[..8]);
    (u64::from_be_bytes(prefix) % NUDGE_MODULUS) as u8
}
