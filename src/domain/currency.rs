/// The only currency a GiroCode can carry.
pub const EUR: &str = "EUR";

/// Extracts the ISO currency code from a display label such as `"EUR - Euro"`.
///
/// Takes the token before the first space and upper-cases it. Returns `None`
/// for blank labels.
pub fn currency_code(label: &str) -> Option<String> {
    let token = label.trim().split(' ').next().unwrap_or_default();
    if token.is_empty() {
        None
    } else {
        Some(token.to_uppercase())
    }
}
