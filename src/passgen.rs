//  _   _
// | |_(_) ___ _ __ _ __   __ _ ___ ___
// | __| |/ _ \ '__| '_ \ / _` / __/ __|
// | |_| |  __/ |  | |_) | (_| \__ \__ \
//  \__|_|\___|_|  | .__/ \__,_|___/___/
//                 |_|
//
// Version : 0.1.0
// License : MIT
//
// Password generator

use rand::Rng;
use rand::rngs::OsRng;

/// Character banks by tier. Tier 1 is plain letters, tier 2 the common
/// special symbols, tier 3 the ambiguous punctuation people tend to avoid.
pub const CHARACTER_BANK: [&str; 3] = [
    "abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ",
    "!@#$%^&*",
    "~`()<>,.?/:=\";'[]}{\\|_+-",
];

pub const MIN_LENGTH: usize = 6;
pub const MAX_LENGTH: usize = 2048;

/// Tiered random password generator.
///
/// The frequency token selects how far up the tier table each draw may
/// reach: `"2"` allows tiers 1-2, `"3"` allows tiers 1-3, and anything
/// else (including `"1"`) restricts draws to letters. Each draw picks a
/// tier uniformly first and only then a character within it, so tiers are
/// weighted equally per draw rather than per available character.
///
/// The randomness source is a type parameter so tests can pass a seeded
/// generator; regular callers get `OsRng` through [`PasswordGenerator::new`].
///
/// A single instance is meant for one caller at a time. The batch method
/// rebuilds the internal buffer in place, so sharing an instance across
/// threads is not supported.
pub struct PasswordGenerator<R: Rng = OsRng> {
    length: usize,
    frequency: String,
    password: String,
    rng: R,
}

impl PasswordGenerator<OsRng> {
    /// Create a generator backed by the operating system's randomness.
    ///
    /// With `random_length` set, `length` is ignored and a length is drawn
    /// uniformly from `[MIN_LENGTH, MAX_LENGTH]`. Otherwise `length` is
    /// stored as given; a value below `MIN_LENGTH` is only caught by the
    /// build routine, which warns and leaves the password empty.
    pub fn new(random_length: bool, length: usize, frequency: &str) -> Self {
        Self::with_rng(random_length, length, frequency, OsRng)
    }
}

impl Default for PasswordGenerator<OsRng> {
    fn default() -> Self {
        Self::new(false, MIN_LENGTH, "1")
    }
}

impl<R: Rng> PasswordGenerator<R> {
    /// Like [`PasswordGenerator::new`] but with a caller-supplied randomness
    /// source, e.g. a seeded `ChaCha8Rng` for reproducible output.
    pub fn with_rng(random_length: bool, length: usize, frequency: &str, mut rng: R) -> Self {
        let length = if random_length {
            rng.gen_range(MIN_LENGTH..=MAX_LENGTH)
        } else {
            length
        };
        let mut generator = Self {
            length,
            frequency: frequency.to_string(),
            password: String::new(),
            rng,
        };
        generator.add_to_password();
        generator
    }

    fn key_picker(&self) -> usize {
        match self.frequency.as_str() {
            "2" => 2,
            "3" => 3,
            _ => 1,
        }
    }

    /// Append `length` random characters to the password buffer.
    ///
    /// Lengths below the floor produce a warning instead of a password;
    /// construction does not reject them, so the check lives here.
    pub fn add_to_password(&mut self) {
        if self.length < MIN_LENGTH {
            eprintln!(
                "Password length must be between {} and {} characters.",
                MIN_LENGTH, MAX_LENGTH
            );
            return;
        }

        let key_picker = self.key_picker();
        self.password.reserve(self.length);
        for _ in 0..self.length {
            // Tier first, character second. Banks are all ASCII, so byte
            // indexing is fine.
            let bank = CHARACTER_BANK[self.rng.gen_range(0..key_picker)];
            let index = self.rng.gen_range(0..bank.len());
            self.password.push(bank.as_bytes()[index] as char);
        }
    }

    /// Return the generated password.
    pub fn password(&self) -> &str {
        &self.password
    }

    pub fn length(&self) -> usize {
        self.length
    }

    pub fn frequency(&self) -> &str {
        &self.frequency
    }

    /// Return a printable statistics block for the configured generator.
    ///
    /// Reports the requested length and frequency token, not the buffer
    /// contents, so it stays accurate even when the build routine refused
    /// an under-length request.
    pub fn statistics(&self) -> String {
        format!(
            "\n===Statistics===\nPassword length: {} \nPassword frequency: {} \n",
            self.length, self.frequency
        )
    }

    /// Generate `count` independent passwords with the configured length
    /// and frequency, in generation order.
    ///
    /// The buffer is cleared before every build, so no characters carry
    /// over from the constructor or a previous batch, and it is left empty
    /// afterwards.
    pub fn generate_batch(&mut self, count: usize) -> Vec<String> {
        let mut passwords = Vec::with_capacity(count);
        for _ in 0..count {
            self.password.clear();
            self.add_to_password();
            passwords.push(std::mem::take(&mut self.password));
        }
        passwords
    }
}
