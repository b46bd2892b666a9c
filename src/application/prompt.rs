//! Interactive deletion confirmation.

use std::io::{BufRead, Write};

/// Asks the user to confirm deletion, re-prompting until an answer is
/// recognized. Returns `true` for "y" and `false` for "n"; end of input
/// counts as a decline.
///
/// # Errors
/// Returns error if reading or writing the terminal fails.
pub fn confirm_deletion(
    input: &mut impl BufRead,
    output: &mut impl Write,
) -> std::io::Result<bool> {
    loop {
        write!(
            output,
            "Delete these files? Type \"y\" to delete or \"n\" to abort: "
        )?;
        output.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            return Ok(false);
        }

        match line.trim_end_matches(['\r', '\n']) {
            "y" => return Ok(true),
            "n" => return Ok(false),
            other => writeln!(output, "Unknown answer: \"{other}\".")?,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run_prompt(input: &str) -> (bool, String) {
        let mut reader = input.as_bytes();
        let mut output = Vec::new();
        let confirmed = confirm_deletion(&mut reader, &mut output).unwrap();
        (confirmed, String::from_utf8(output).unwrap())
    }

    #[test]
    fn test_yes_confirms() {
        let (confirmed, _) = run_prompt("y\n");
        assert!(confirmed);
    }

    #[test]
    fn test_no_declines() {
        let (confirmed, _) = run_prompt("n\n");
        assert!(!confirmed);
    }

    #[test]
    fn test_unknown_answer_reprompts() {
        let (confirmed, output) = run_prompt("maybe\nYES\ny\n");
        assert!(confirmed);
        assert!(output.contains("Unknown answer: \"maybe\""));
        assert!(output.contains("Unknown answer: \"YES\""));
        assert_eq!(output.matches("Delete these files?").count(), 3);
    }

    #[test]
    fn test_end_of_input_declines() {
        let (confirmed, _) = run_prompt("");
        assert!(!confirmed);
    }

    #[test]
    fn test_leading_whitespace_is_not_trimmed() {
        let (confirmed, output) = run_prompt(" y\nn\n");
        assert!(!confirmed);
        assert!(output.contains("Unknown answer: \" y\""));
    }
}
