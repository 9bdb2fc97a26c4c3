/// Escape the (X)HTML control characters in `text`. The ampersand goes
/// first so entities produced here are not escaped again.
pub fn html_escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}
