use hashbrown::HashSet;

use crate::types::{Mhz, SubBand};

/// Third-order products `[2·f1−f2, 2·f2−f1]`.
pub fn calculate_im3(f1: Mhz, f2: Mhz) -> [Mhz; 2] {
    [2.0 * f1 - f2, 2.0 * f2 - f1]
}

/// Fifth-order products `[3·f1−2·f2, 3·f2−2·f1]`.
pub fn calculate_im5(f1: Mhz, f2: Mhz) -> [Mhz; 2] {
    [3.0 * f1 - 2.0 * f2, 3.0 * f2 - 2.0 * f1]
}

/// Rounds to kHz resolution by decimal rounding of the exact binary value.
///
/// Multiplying by 1000 first would round values such as `470.0005` (stored
/// as `470.000499...`) upward.
pub fn round_mhz(value: Mhz) -> Mhz {
    format!("{value:.3}").parse().unwrap_or(value)
}

/// IM3 and IM5 products of every unordered pair, kept inside `band`,
/// rounded to 3 decimals and deduplicated.
///
/// Products are filtered on their unrounded value and returned in first-seen
/// order; callers should treat the result as a set.
pub fn all_im_products(frequencies: &[Mhz], band: &SubBand) -> Vec<Mhz> {
    let mut seen: HashSet<u64> = HashSet::new();
    let mut products = Vec::new();

    for (i, &f1) in frequencies.iter().enumerate() {
        for &f2 in &frequencies[i + 1..] {
            let im3 = calculate_im3(f1, f2);
            let im5 = calculate_im5(f1, f2);
            for product in im3.into_iter().chain(im5) {
                if !band.contains(product) {
                    continue;
                }
                let rounded = round_mhz(product);
                if seen.insert(rounded.to_bits()) {
                    products.push(rounded);
                }
            }
        }
    }

    products
}

/// True iff some product lies strictly closer than `margin` to `freq`.
pub fn has_im_conflict(freq: Mhz, im_products: &[Mhz], margin: Mhz) -> bool {
    im_products.iter().any(|p| (freq - p).abs() < margin)
}
