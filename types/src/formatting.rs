//! Centralized CSS value formatting.
//!
//! Every inline style value written to the page goes through this module so
//! the app and the tests agree on the exact strings the browser receives.
//! Numbers are printed the way the browser stringifies them: no trailing
//! `.0`, and never a negative zero.

/// Format a number the way a script engine would when interpolating it.
///
/// # Examples
/// ```
/// use folio_types::formatting::format_number;
/// assert_eq!(format_number(20.0), "20");
/// assert_eq!(format_number(12.5), "12.5");
/// assert_eq!(format_number(-0.0), "0");
/// ```
pub fn format_number(n: f64) -> String {
    if n == 0.0 {
        // Covers -0.0 as well
        return "0".to_string();
    }
    format!("{}", n)
}

/// Format a length in pixels.
///
/// # Examples
/// ```
/// use folio_types::formatting::format_px;
/// assert_eq!(format_px(120.0), "120px");
/// assert_eq!(format_px(-7.5), "-7.5px");
/// ```
pub fn format_px(n: f64) -> String {
    format!("{}px", format_number(n))
}

/// Format a vertical translation.
///
/// A zero offset is written unitless, matching the reveal end state.
///
/// # Examples
/// ```
/// use folio_types::formatting::format_translate_y;
/// assert_eq!(format_translate_y(20.0), "translateY(20px)");
/// assert_eq!(format_translate_y(0.0), "translateY(0)");
/// ```
pub fn format_translate_y(px: f64) -> String {
    if px == 0.0 {
        "translateY(0)".to_string()
    } else {
        format!("translateY({})", format_px(px))
    }
}

/// Format an opacity, clamped to `[0, 1]`.
///
/// # Examples
/// ```
/// use folio_types::formatting::format_opacity;
/// assert_eq!(format_opacity(1.0), "1");
/// assert_eq!(format_opacity(0.0), "0");
/// assert_eq!(format_opacity(1.7), "1");
/// ```
pub fn format_opacity(opacity: f64) -> String {
    format_number(opacity.clamp(0.0, 1.0))
}

/// Format a `transition` shorthand applying to all properties.
///
/// # Examples
/// ```
/// use folio_types::formatting::format_transition;
/// assert_eq!(format_transition(0.6, "ease-out"), "all 0.6s ease-out");
/// ```
pub fn format_transition(secs: f64, easing: &str) -> String {
    format!("all {}s {}", format_number(secs), easing)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(0.0), "0");
        assert_eq!(format_number(-0.0), "0");
        assert_eq!(format_number(1.0), "1");
        assert_eq!(format_number(0.95), "0.95");
        assert_eq!(format_number(-42.25), "-42.25");
        assert_eq!(format_number(1500.0), "1500");
    }

    #[test]
    fn test_format_px() {
        assert_eq!(format_px(0.0), "0px");
        assert_eq!(format_px(48.0), "48px");
        assert_eq!(format_px(-24.0), "-24px");
    }

    #[test]
    fn test_format_translate_y() {
        assert_eq!(format_translate_y(20.0), "translateY(20px)");
        assert_eq!(format_translate_y(-0.0), "translateY(0)");
        assert_eq!(format_translate_y(2.5), "translateY(2.5px)");
    }

    #[test]
    fn test_format_opacity_clamps() {
        assert_eq!(format_opacity(-1.0), "0");
        assert_eq!(format_opacity(0.5), "0.5");
        assert_eq!(format_opacity(3.0), "1");
    }

    #[test]
    fn test_format_transition() {
        assert_eq!(format_transition(0.6, "ease-out"), "all 0.6s ease-out");
        assert_eq!(format_transition(1.0, "linear"), "all 1s linear");
    }
}
