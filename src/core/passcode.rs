/// The entered text, trimmed, must equal the stored passcode exactly.
///
/// Plaintext equality with unlimited retries: the passcode keeps casual
/// visitors out of a group's vote, it is not a credential.
pub fn check_passcode(entered: &str, stored: &str) -> bool {
    entered.trim() == stored
}
