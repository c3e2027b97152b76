/// Format a clickable hyperlink for terminal output.
///
/// Wraps the label in an OSC 8 escape sequence
/// (`OSC 8 ; params ; URI ST label OSC 8 ;; ST`), which terminals with
/// hyperlink support render as clickable text. No capability detection is
/// performed; unsupported terminals print the bare label.
///
/// # Arguments
///
/// * `uri` - The URI to link to.
/// * `label` - The text to display. Falls back to the URI itself.
///
/// # Returns
///
/// The escaped string, ready to print.
///
/// Example:
///
/// ```
/// use camgeom::term::hyperlink;
///
/// let link = hyperlink("https://example.com", Some("click me"));
/// assert!(link.contains("click me"));
/// ```
pub fn hyperlink(uri: &str, label: Option<&str>) -> String {
    let label = label.unwrap_or(uri);
    format!("\x1b]8;;{uri}\x1b\\{label}\x1b]8;;\x1b\\")
}
