/// Source of uniform randomness for sticker draws.
///
/// This is cosmetic gamification RNG, not a fairness-critical gambling
/// primitive: implementations trade cryptographic strength for testability.
/// The port exists so tests can script exact sequences.
pub trait RandomnessPort: Send {
    /// Uniform float in [0, 1).
    fn next_unit(&mut self) -> f64;

    /// Uniform index in [0, len). Returns 0 for an empty range.
    fn pick(&mut self, len: usize) -> usize {
        if len == 0 {
            return 0;
        }
        let index = (self.next_unit() * len as f64) as usize;
        index.min(len - 1)
    }
}
