use colored::Colorize;
use std::io::{BufRead, Result, Write};

/// Where questions are asked and answers read. In real life that's the terminal; tests hand in
/// canned input and capture the output.
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn output(&self) -> &W {
        &self.output
    }

    pub fn say(&mut self, message: &str) -> Result<()> {
        writeln!(self.output, "{}", message)
    }

    pub fn warn(&mut self, message: &str) -> Result<()> {
        writeln!(self.output, "{} {}", "WARNING:".yellow().bold(), message)
    }

    pub fn error(&mut self, message: &str) -> Result<()> {
        writeln!(self.output, "{} {}", "ERROR:".red().bold(), message)
    }

    /// Shows the prompt and reads one trimmed line. None means the input has closed.
    pub fn ask(&mut self, prompt: &str) -> Result<Option<String>> {
        write!(self.output, "{} > ", prompt)?;
        self.output.flush()?;

        let mut buffer = String::new();
        if self.input.read_line(&mut buffer)? == 0 {
            return Ok(None);
        }

        Ok(Some(buffer.trim().to_string()))
    }

    /// Anything other than an explicit yes is a no.
    pub fn confirm(&mut self, question: &str) -> Result<bool> {
        writeln!(self.output, "{}", question)?;
        let answer = self.ask("proceed? [y/N]")?;
        Ok(matches!(
            answer.map(|a| a.to_lowercase()).as_deref(),
            Some("y") | Some("yes")
        ))
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use std::io::Cursor;

    fn console(input: &str) -> Console<Cursor<Vec<u8>>, Vec<u8>> {
        Console::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
    }

    #[test]
    fn test_confirm() {
        assert!(console("y\n").confirm("Create backup?").unwrap());
        assert!(console("YES\n").confirm("Create backup?").unwrap());
        assert!(!console("n\n").confirm("Create backup?").unwrap());
        assert!(!console("\n").confirm("Create backup?").unwrap());
        assert!(!console("").confirm("Create backup?").unwrap());
    }

    #[test]
    fn test_ask() {
        let mut c = console("  hello  \n");
        assert_eq!(Some("hello".to_string()), c.ask("say something").unwrap());
        assert_eq!(None, c.ask("say something else").unwrap());
        assert_eq!(
            "say something > say something else > ",
            String::from_utf8_lossy(c.output())
        );
    }

    #[test]
    fn test_warn_and_error() {
        colored::control::set_override(false);
        let mut c = console("");
        c.warn("big directory").unwrap();
        c.error("no backup").unwrap();

        assert_eq!(
            "WARNING: big directory\nERROR: no backup\n",
            String::from_utf8_lossy(c.output())
        );
    }
}
