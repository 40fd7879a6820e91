//! Deterministic analogy selection.

const POOL_LEN: usize = 6;

/// Picks a stable index in `0..len` for a string using a signed 32-bit
/// rolling hash (`h = (h << 5) - h + code_unit`) over the string's UTF-16
/// code units, matching the web client's pick so shared fixtures agree.
///
/// # Panics
///
/// Panics if `len` is zero.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn hash_pick(s: &str, len: usize) -> usize {
    assert!(len > 0, "pool must be non-empty");
    let mut h: i32 = 0;
    for unit in s.encode_utf16() {
        h = h.wrapping_shl(5).wrapping_sub(h).wrapping_add(i32::from(unit));
    }
    // Reduce in i128 so pool sizes beyond i32 cannot truncate the modulus;
    // the result is in 0..len, so the narrowing back to usize is lossless.
    i128::from(h).rem_euclid(len as i128) as usize
}

/// Selects the analogy for a concept from the fixed template pool. The same
/// concept always yields the same analogy; the explanation plays no part.
#[must_use]
pub fn pick_analogy(concept: &str) -> String {
    match hash_pick(concept, POOL_LEN) {
        0 => format!("Think of {concept} like a recipe: each ingredient (input) goes through a specific set of steps, and the dish (output) is only as good as how well you followed them."),
        1 => format!("{concept} is like a vending machine: you put something specific in, a process happens inside that you can describe, and a predictable result comes out."),
        2 => format!("Imagine {concept} as a relay race: each runner (step) only works if the handoff from the previous one was clean."),
        3 => format!("{concept} is like a map legend: once you know what each symbol means, the whole picture makes sense at a glance."),
        4 => format!("Think of {concept} like tuning a guitar string: small, precise adjustments lead to the right result; random turning leads nowhere."),
        _ => format!("{concept} works like a filter: raw input goes in, the process removes what doesn't belong, and what comes out is cleaner and more useful."),
    }
}
