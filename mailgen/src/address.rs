// mailgen/src/address.rs
use rand::Rng;

// Name pools for plausible-looking local parts.
const FIRST_NAMES: &[&str] = &[
    "john", "jane", "mike", "sarah", "alex", "emma", "james", "lisa", "david", "mary", "robert",
    "linda", "michael", "elizabeth", "william", "susan", "joseph", "jessica", "thomas", "karen",
    "chris", "amanda",
];

const LAST_NAMES: &[&str] = &[
    "smith", "johnson", "williams", "brown", "jones", "garcia", "miller", "davis", "wilson",
    "taylor", "moore", "anderson", "thomas", "jackson", "white", "harris", "martin", "lee",
    "walker", "hall", "allen",
];

/// Provider domains addresses are drawn from, `.com` only.
pub const DOMAINS: &[&str] = &[
    "gmail.com",
    "yahoo.com",
    "hotmail.com",
    "outlook.com",
    "aol.com",
    "mail.com",
    "securepass.com",
    "fastmail.com",
    "icloud.com",
    "protonmail.com",
];

/// Generate a random, plausible-looking address of the form
/// `local-part@domain`.
///
/// The local part is one of five name styles (bare first name, dotted,
/// concatenated, underscored, or first name plus a number), optionally
/// suffixed with a registration-style year. Repeated calls may collide;
/// no uniqueness is guaranteed.
pub fn generate_address() -> String {
    generate_address_with_rng(&mut rand::thread_rng())
}

/// Like [`generate_address`], drawing from the supplied random source.
pub fn generate_address_with_rng<R: Rng>(rng: &mut R) -> String {
    let first = FIRST_NAMES[rng.gen_range(0..FIRST_NAMES.len())];
    let last = LAST_NAMES[rng.gen_range(0..LAST_NAMES.len())];

    let mut local = match rng.gen_range(0..5) {
        0 => first.to_string(),
        1 => format!("{}.{}", first, last),
        2 => format!("{}{}", first, last),
        3 => format!("{}_{}", first, last),
        _ => format!("{}{}", first, rng.gen_range(0..1000)),
    };

    // Sometimes a birth or registration year.
    if rng.gen_bool(0.4) {
        let year: u32 = rng.gen_range(1970..2010);
        local.push_str(&year.to_string());
    }

    let domain = DOMAINS[rng.gen_range(0..DOMAINS.len())];
    format!("{}@{}", local, domain)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_address_shape() {
        let mut rng = StdRng::seed_from_u64(10);
        for _ in 0..500 {
            let address = generate_address_with_rng(&mut rng);
            let (local, domain) = address.split_once('@').expect("address has an @");
            assert!(!local.is_empty());
            assert!(local
                .chars()
                .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '.' || c == '_'));
            assert!(DOMAINS.contains(&domain));
            assert!(domain.ends_with(".com"));
        }
    }

    #[test]
    fn test_address_has_single_at() {
        let mut rng = StdRng::seed_from_u64(11);
        for _ in 0..200 {
            let address = generate_address_with_rng(&mut rng);
            assert_eq!(address.matches('@').count(), 1);
        }
    }
}
