use rand::Rng;
use rand::distr::Alphanumeric;

const CONSONANTS: [char; 40] = [
    'b', 'c', 'd', 'f', 'g', 'h', 'j', 'k', 'l', 'm', 'n', 'p', 'q', 'r', 's', 't', 'v', 'w', 'x',
    'z', 'B', 'C', 'D', 'F', 'G', 'H', 'J', 'K', 'L', 'M', 'N', 'P', 'Q', 'R', 'S', 'T', 'V', 'W',
    'X', 'Z',
];

/// Returns every ASCII consonant, lowercase first. `y` is treated as a vowel.
pub const fn consonants() -> &'static [char] {
    &CONSONANTS
}

/// Generates a string of `len` characters drawn uniformly from `[A-Za-z0-9]`.
///
/// # Examples
/// ```
/// # use rand::SeedableRng;
/// # use rand::rngs::StdRng;
/// # use dzlib::text::random_string;
/// let mut rng = StdRng::seed_from_u64(7);
/// let s = random_string(12, &mut rng);
/// assert_eq!(s.len(), 12);
/// assert!(s.chars().all(|c| c.is_ascii_alphanumeric()));
/// ```
pub fn random_string<R: Rng + ?Sized>(len: usize, rng: &mut R) -> String {
    rng.sample_iter(Alphanumeric)
        .take(len)
        .map(char::from)
        .collect()
}

/// Generates a random alphanumeric string using the thread-local generator.
pub fn random_string_default(len: usize) -> String {
    random_string(len, &mut rand::rng())
}
