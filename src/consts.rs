//! Project-wide constants.

/// Substituted when a payload carries no `"sequence"` key.
/// One of each base, so the fallback result is easy to spot.
pub const DEFAULT_SEQUENCE: &str = "ACGT";

/// The payload key both adapters read the sequence from.
pub const SEQUENCE_KEY: &str = "sequence";

/// Default bind address for the HTTP surface: any interface.
pub const DEFAULT_HOST: &str = "0.0.0.0";

/// Default port for the HTTP surface.
pub const DEFAULT_PORT: u16 = 8080;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_sequence_is_one_of_each_base() {
        assert_eq!(DEFAULT_SEQUENCE.len(), 4);
        for base in ['A', 'C', 'G', 'T'] {
            assert_eq!(DEFAULT_SEQUENCE.matches(base).count(), 1);
        }
    }

    #[test]
    fn default_bind_address_parses() {
        let addr: std::net::SocketAddr = format!("{}:{}", DEFAULT_HOST, DEFAULT_PORT)
            .parse()
            .unwrap();
        assert_eq!(addr.port(), 8080);
    }
}
