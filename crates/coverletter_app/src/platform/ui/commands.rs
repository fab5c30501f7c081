use coverletter_core::{FormField, Msg, UnknownField};

/// One unit of work for the dispatch loop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Msg(Msg),
    Show,
    Help,
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CommandError {
    #[error("unknown command `{0}` (type `help`)")]
    Unknown(String),
    #[error("`{0}` needs a field name")]
    MissingField(&'static str),
    #[error(transparent)]
    Field(#[from] UnknownField),
}

pub const HELP: &str = "\
Commands:
  set <field> <value>   edit a field (use \\n for line breaks)
  clear <field>         empty a field
  generate              request a cover letter
  copy                  copy the letter to the clipboard
  show                  redraw the form
  help                  this text
  quit                  save and exit
Fields: resume_url, job_description_url, job_description_text, word_count";

/// Parses one input line. Blank lines yield `None`.
pub fn parse_command(line: &str) -> Result<Option<Command>, CommandError> {
    let line = line.trim_end_matches(['\r', '\n']);
    let trimmed = line.trim_start();
    if trimmed.trim().is_empty() {
        return Ok(None);
    }

    let (verb, rest) = split_word(trimmed);
    let command = match verb {
        "set" => {
            let (field, value) = split_word(rest);
            if field.is_empty() {
                return Err(CommandError::MissingField("set"));
            }
            edit(field.parse()?, &value.replace("\\n", "\n"))
        }
        "clear" => {
            let (field, _) = split_word(rest);
            if field.is_empty() {
                return Err(CommandError::MissingField("clear"));
            }
            edit(field.parse()?, "")
        }
        "generate" | "g" => Command::Msg(Msg::GenerateClicked),
        "copy" | "c" => Command::Msg(Msg::CopyClicked),
        "show" => Command::Show,
        "help" | "?" => Command::Help,
        "quit" | "exit" | "q" => Command::Quit,
        other => return Err(CommandError::Unknown(other.to_string())),
    };
    Ok(Some(command))
}

fn edit(field: FormField, value: &str) -> Command {
    Command::Msg(Msg::FieldEdited {
        field,
        value: value.to_string(),
    })
}

/// Splits off the first word and drops exactly one separating space, so the
/// remainder keeps the user's own spacing.
fn split_word(input: &str) -> (&str, &str) {
    let input = input.trim_start();
    match input.split_once(' ') {
        Some((word, rest)) => (word, rest),
        None => (input, ""),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn edited(line: &str) -> (FormField, String) {
        match parse_command(line) {
            Ok(Some(Command::Msg(Msg::FieldEdited { field, value }))) => (field, value),
            other => panic!("expected edit for {line:?}, got {other:?}"),
        }
    }

    #[test]
    fn set_keeps_raw_value() {
        assert_eq!(
            edited("set resume_url  https://x/r.txt "),
            (FormField::ResumeUrl, " https://x/r.txt ".to_string())
        );
        assert_eq!(
            edited("set word_count abc"),
            (FormField::WordCount, "abc".to_string())
        );
    }

    #[test]
    fn escaped_newlines_become_line_breaks() {
        assert_eq!(
            edited("set job_description_text Senior Engineer\\nRust, Tokio"),
            (
                FormField::JobDescriptionText,
                "Senior Engineer\nRust, Tokio".to_string()
            )
        );
    }

    #[test]
    fn clear_empties_the_field() {
        assert_eq!(
            edited("clear job_description_url\n"),
            (FormField::JobDescriptionUrl, String::new())
        );
    }

    #[test]
    fn simple_verbs_map_to_commands() {
        assert_eq!(
            parse_command("generate"),
            Ok(Some(Command::Msg(Msg::GenerateClicked)))
        );
        assert_eq!(parse_command("copy"), Ok(Some(Command::Msg(Msg::CopyClicked))));
        assert_eq!(parse_command("  show"), Ok(Some(Command::Show)));
        assert_eq!(parse_command("help"), Ok(Some(Command::Help)));
        assert_eq!(parse_command("quit\r\n"), Ok(Some(Command::Quit)));
        assert_eq!(parse_command("   "), Ok(None));
    }

    #[test]
    fn bad_input_is_reported() {
        assert_eq!(
            parse_command("launch"),
            Err(CommandError::Unknown("launch".to_string()))
        );
        assert_eq!(parse_command("set"), Err(CommandError::MissingField("set")));
        assert_eq!(
            parse_command("set salary 100").unwrap_err().to_string(),
            "unknown form field `salary`"
        );
    }
}
