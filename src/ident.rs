use rand::Rng;

pub const ACCOUNT_NUMBER_LEN: usize = 20;
pub const CARD_NUMBER_LEN: usize = 16;

/// Source of opaque identifier strings made of decimal digits. Identifiers
/// carry no checksum and are not guaranteed unique; callers that need
/// uniqueness must deduplicate externally.
pub trait IdentifierSource {
    fn digit_string(&mut self, len: usize) -> String;
}

/// Identifiers from the thread-local RNG. Not cryptographically secure.
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomDigits;

impl IdentifierSource for RandomDigits {
    fn digit_string(&mut self, len: usize) -> String {
        let mut rng = rand::thread_rng();
        (0..len)
            .map(|_| {
                let digit: u8 = rng.gen_range(0..10);
                char::from(b'0' + digit)
            })
            .collect()
    }
}

/// Counter-backed source for tests and reproducible runs: yields
/// "0...0", "0...1" and so on, zero-padded to the requested length.
#[derive(Debug, Default)]
pub struct SequentialDigits {
    next: u64,
}

impl IdentifierSource for SequentialDigits {
    fn digit_string(&mut self, len: usize) -> String {
        let n = self.next;
        self.next += 1;
        format!("{:0>width$}", n, width = len)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn random_digits_have_requested_shape() {
        let mut ids = RandomDigits;
        for len in [CARD_NUMBER_LEN, ACCOUNT_NUMBER_LEN] {
            let id = ids.digit_string(len);
            assert_eq!(id.len(), len);
            assert!(id.chars().all(|c| c.is_ascii_digit()));
        }
    }

    #[test]
    fn sequential_digits_count_up() {
        let mut ids = SequentialDigits::default();
        assert_eq!(ids.digit_string(4), "0000");
        assert_eq!(ids.digit_string(4), "0001");
        assert_eq!(ids.digit_string(6), "000002");
    }
}
