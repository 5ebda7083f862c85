//! Diagnostic lines echoing a resolution.

use crate::event::EventKind;
use crate::resolver::Resolution;

/// Build the four diagnostic lines: the event name, then each resolved value.
///
/// Line breaks inside values are escaped so there are always four lines.
pub fn diagnostic_lines(tag: &str, event: &EventKind, resolution: &Resolution) -> Vec<String> {
    vec![
        format!("{tag} event_name={}", escape_line_breaks(event.name())),
        format!(
            "{tag} default_branch={}",
            escape_line_breaks(&resolution.default_branch)
        ),
        format!(
            "{tag} checkout_repository={}",
            escape_line_breaks(&resolution.checkout_repository)
        ),
        format!(
            "{tag} checkout_ref={}",
            escape_line_breaks(&resolution.checkout_ref)
        ),
    ]
}

/// Print the diagnostic lines to stdout.
pub fn print_diagnostics(tag: &str, event: &EventKind, resolution: &Resolution) {
    for line in diagnostic_lines(tag, event, resolution) {
        println!("{line}");
    }
}

fn escape_line_breaks(value: &str) -> String {
    value.replace('\r', "\\r").replace('\n', "\\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_diagnostic_lines() {
        let resolution = Resolution {
            default_branch: "develop".to_string(),
            checkout_repository: "acme/widgets".to_string(),
            checkout_ref: "abc123".to_string(),
        };
        let lines = diagnostic_lines("[resolve-ref]", &EventKind::from_name("push"), &resolution);

        assert_eq!(
            lines,
            vec![
                "[resolve-ref] event_name=push",
                "[resolve-ref] default_branch=develop",
                "[resolve-ref] checkout_repository=acme/widgets",
                "[resolve-ref] checkout_ref=abc123",
            ]
        );
    }

    #[test]
    fn test_diagnostic_lines_with_empty_event() {
        let resolution = Resolution {
            default_branch: "main".to_string(),
            checkout_repository: String::new(),
            checkout_ref: String::new(),
        };
        let lines = diagnostic_lines("#", &EventKind::from_name(""), &resolution);
        assert_eq!(lines[0], "# event_name=");
        assert_eq!(lines[3], "# checkout_ref=");
    }

    #[test]
    fn test_diagnostic_lines_escape_line_breaks() {
        let resolution = Resolution {
            default_branch: "a\nb".to_string(),
            checkout_repository: "acme/\r\nwidgets".to_string(),
            checkout_ref: "abc123".to_string(),
        };
        let lines = diagnostic_lines(
            "[resolve-ref]",
            &EventKind::from_name("push\nextra"),
            &resolution,
        );
        let output = lines.join("\n");

        assert_eq!(output.lines().count(), 4);
        assert_eq!(lines[0], "[resolve-ref] event_name=push\\nextra");
        assert_eq!(lines[1], "[resolve-ref] default_branch=a\\nb");
        assert_eq!(lines[2], "[resolve-ref] checkout_repository=acme/\\r\\nwidgets");
    }
}
