//! Read-print loop: lexes each input line and prints its tokens.

use std::io::{self, BufRead, Write};

use crate::lexer::Lexer;

pub const PROMPT: &str = ">> ";

const HELP: &str = "\
REPL commands:
  :quit, :q    Exit the REPL
  :help, :h    Show this help message

Any other line is tokenized and its tokens are printed one per line.";

/// Run the loop until `input` is exhausted or the user quits.
pub fn start<R: BufRead, W: Write>(mut input: R, mut output: W) -> io::Result<()> {
    let mut line = String::new();

    loop {
        write!(output, "{}", PROMPT)?;
        output.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            return Ok(());
        }

        match line.trim() {
            ":quit" | ":q" => return Ok(()),
            ":help" | ":h" => {
                writeln!(output, "{}", HELP)?;
                continue;
            }
            _ => {}
        }

        let mut lexer = Lexer::new(&line);
        loop {
            let token = lexer.next_token();
            if token.is_eof() {
                break;
            }
            writeln!(output, "{}", token)?;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn run(input: &str) -> String {
        let mut output = Vec::new();
        start(input.as_bytes(), &mut output).unwrap();
        String::from_utf8(output).unwrap()
    }

    #[test]
    fn test_prints_tokens_per_line() {
        assert_eq!(
            run("x == 1\n"),
            ">> {Type:IDENT Literal:x}\n{Type:== Literal:==}\n{Type:INT Literal:1}\n>> "
        );
    }

    #[test]
    fn test_blank_line_prints_nothing() {
        assert_eq!(run("\n   \n"), ">> >> >> ");
    }

    #[test]
    fn test_quit_stops_reading() {
        assert_eq!(run(":q\nlet\n"), ">> ");
    }

    #[test]
    fn test_help() {
        let output = run(":help\n");
        assert!(output.contains(":quit, :q"));
        assert!(output.ends_with(">> "));
    }
}
