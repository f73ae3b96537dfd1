//! REPL tests: drives the read-print loop through in-memory buffers.

use monkeylang::repl::{self, PROMPT};
use pretty_assertions::assert_eq;

fn run(input: &str) -> String {
    let mut output = Vec::new();
    repl::start(input.as_bytes(), &mut output).expect("in-memory I/O cannot fail");
    String::from_utf8(output).expect("REPL output is UTF-8")
}

#[test]
fn test_each_line_is_tokenized_independently() {
    let output = run("let x = 5;\nx != @\n");
    let expected = [
        PROMPT,
        "{Type:LET Literal:let}\n",
        "{Type:IDENT Literal:x}\n",
        "{Type:= Literal:=}\n",
        "{Type:INT Literal:5}\n",
        "{Type:; Literal:;}\n",
        PROMPT,
        "{Type:IDENT Literal:x}\n",
        "{Type:!= Literal:!=}\n",
        "{Type:ILLEGAL Literal:@}\n",
        PROMPT,
    ]
    .concat();

    assert_eq!(output, expected);
}

#[test]
fn test_eof_is_never_printed() {
    let output = run("fn\n");
    assert!(!output.contains("EOF"));
}

#[test]
fn test_last_line_without_newline() {
    assert_eq!(run("true"), format!("{PROMPT}{{Type:TRUE Literal:true}}\n{PROMPT}"));
}
