/// Generate a six-digit, zero-padded reset code.
///
/// The thread-local generator is a CSPRNG; reset codes gate a password
/// change and must not come from a guessable source.
pub fn generate_code() -> String {
    format!("{:06}", rand::random_range(0..1_000_000))
}
