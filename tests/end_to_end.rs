// tests/end_to_end.rs

use minilexer::config::{Config, CONFIG_ENV_VAR};
use minilexer::i18n::Locale;
use minilexer::session::Session;
use minilexer::Category;

const SAMPLE: &str = "int valor = 3 ; if ( valor == 5 ) valor = 0 ;";

fn run_session(config: &Config, input: &str) -> (Vec<minilexer::Token>, String) {
    let mut out = Vec::new();
    let tokens = Session::new(config)
        .run(input.as_bytes(), &mut out)
        .expect("session should not fail on in-memory buffers");
    (tokens, String::from_utf8(out).expect("output is UTF-8"))
}

#[test]
fn test_sample_line_in_english() {
    let config = Config {
        locale: Locale::En,
        show_banner: false,
        ..Config::default()
    };
    let (tokens, out) = run_session(&config, &format!("{}\n", SAMPLE));

    assert_eq!(tokens.len(), 15);
    assert_eq!(tokens[3].category(), Category::NumericLiteral);

    let token_lines: Vec<&str> = out.lines().filter(|l| l.starts_with("Token: ")).collect();
    assert_eq!(
        token_lines,
        vec![
            "Token: <KEYWORD, \"int\">",
            "Token: <IDENTIFIER, \"valor\">",
            "Token: <OPERATOR, \"=\">",
            "Token: <NUMERIC LITERAL, \"3\">",
            "Token: <DELIMITER, \";\">",
            "Token: <KEYWORD, \"if\">",
            "Token: <DELIMITER, \"(\">",
            "Token: <IDENTIFIER, \"valor\">",
            "Token: <OPERATOR, \"==\">",
            "Token: <NUMERIC LITERAL, \"5\">",
            "Token: <DELIMITER, \")\">",
            "Token: <IDENTIFIER, \"valor\">",
            "Token: <OPERATOR, \"=\">",
            "Token: <NUMERIC LITERAL, \"0\">",
            "Token: <DELIMITER, \";\">",
        ]
    );
}

#[test]
fn test_blank_input_matches_default_example() {
    let config = Config::default();
    let (fallback, _) = run_session(&config, "\n");
    let (explicit, _) = run_session(&config, &format!("{}\n", SAMPLE));
    assert_eq!(fallback, explicit);
}

#[cfg(unix)]
#[test]
fn test_binary_over_pty() -> Result<(), rexpect::error::Error> {
    let mut command = std::process::Command::new(env!("CARGO_BIN_EXE_minilexer"));
    command.env_remove(CONFIG_ENV_VAR).env("RUST_LOG", "off");

    let mut session = rexpect::session::spawn_command(command, Some(5_000))?;
    session.exp_string("Mini Analizador L")?;
    session.exp_string("> ")?;
    session.send_line("int x = 42 ;")?;
    session.exp_string("--- Resultado del An")?;
    session.exp_string("Token: <PALABRA CLAVE, \"int\">")?;
    session.exp_string("Token: <IDENTIFICADOR, \"x\">")?;
    session.exp_string("Token: <OPERADOR, \"=\">")?;
    session.exp_string("Token: <LITERAL NUMERICO, \"42\">")?;
    session.exp_string("Token: <DELIMITADOR, \";\">")?;
    session.exp_eof()?;
    Ok(())
}

#[cfg(unix)]
#[test]
fn test_binary_blank_input_uses_default() -> Result<(), rexpect::error::Error> {
    let mut command = std::process::Command::new(env!("CARGO_BIN_EXE_minilexer"));
    command.env_remove(CONFIG_ENV_VAR).env("RUST_LOG", "off");

    let mut session = rexpect::session::spawn_command(command, Some(5_000))?;
    session.exp_string("> ")?;
    session.send_line("")?;
    session.exp_string("Usando ejemplo por defecto:")?;
    session.exp_string("Token: <PALABRA CLAVE, \"int\">")?;
    session.exp_string("Token: <LITERAL NUMERICO, \"0\">")?;
    session.exp_string("Token: <DELIMITADOR, \";\">")?;
    session.exp_eof()?;
    Ok(())
}
