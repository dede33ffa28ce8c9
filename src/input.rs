//! Shell command parsing
//!
//! Maps one line of user input to a message. Column names containing spaces
//! can be written in double quotes: `sort "Published Year"`.

use std::path::PathBuf;

use crate::messages::Msg;

/// Usage text printed by `help`
pub const HELP: &str = "\
Commands:
  load PATH                 load a CSV file
  generate [ROWS] [SEED]    replace the table with random sample data
  fixture [ROWS]            replace the table with numbered fixture data
  search [TERM]             filter rows (empty clears the search)
  sort COLUMN               sort by column, again to reverse
  next | prev | page N      move between pages
  edit ROW COLUMN VALUE     edit a cell on the current page (ROW is 1-based)
  set ROW COLUMN VALUE      edit a cell by absolute row (1-based)
  reset                     discard all edits
  export [PATH]             write the table as CSV
  show | help | quit";

/// What a line of input asks for
#[derive(Debug, Clone)]
pub enum ShellCommand {
    /// Send a message to the model
    Dispatch(Msg),
    /// Print the current page again
    Show,
    /// Print usage
    Help,
}

type Token<'a> = Option<(&'a str, &'a str)>;

/// Split off the first token, honoring double quotes
fn next_token(input: &str) -> Result<Token<'_>, String> {
    let input = input.trim_start();
    if input.is_empty() {
        return Ok(None);
    }

    if let Some(quoted) = input.strip_prefix('"') {
        let end = quoted.find('"').ok_or("unterminated quote")?;
        return Ok(Some((&quoted[..end], &quoted[end + 1..])));
    }

    Ok(Some(match input.find(char::is_whitespace) {
        Some(end) => (&input[..end], &input[end..]),
        None => (input, ""),
    }))
}

fn parse_number<T: std::str::FromStr>(token: &str, what: &str) -> Result<T, String> {
    token
        .parse()
        .map_err(|_| format!("invalid {}: '{}'", what, token))
}

/// Parse a 1-based row number into a 0-based index
fn parse_row<'a>(token: Token<'a>) -> Result<(usize, &'a str), String> {
    let (token, rest) = token.ok_or("missing row number")?;
    let row: usize = parse_number(token, "row")?;
    if row == 0 {
        return Err("rows are numbered from 1".to_string());
    }
    Ok((row - 1, rest))
}

/// Parse `ROW COLUMN VALUE...` (value may be empty)
fn parse_cell_edit(args: &str) -> Result<(usize, String, String), String> {
    let (row, rest) = parse_row(next_token(args)?)?;
    let (column, rest) = next_token(rest)?.ok_or("missing column name")?;
    let value = rest.strip_prefix(' ').unwrap_or(rest);
    Ok((row, column.to_string(), value.to_string()))
}

/// Parse one line of input.
///
/// Returns `Ok(None)` for blank lines.
pub fn parse_command(line: &str) -> Result<Option<ShellCommand>, String> {
    let line = line.trim_end_matches(['\r', '\n']);
    let Some((verb, args)) = next_token(line)? else {
        return Ok(None);
    };
    let rest = args.trim();

    let msg = match verb.to_lowercase().as_str() {
        "load" | "open" => Msg::LoadFile(PathBuf::from(rest)),
        "generate" => {
            let mut tokens = rest.split_whitespace();
            let rows = tokens
                .next()
                .map(|t| parse_number(t, "row count"))
                .transpose()?;
            let seed = tokens
                .next()
                .map(|t| parse_number(t, "seed"))
                .transpose()?;
            Msg::GenerateSample { rows, seed }
        }
        "fixture" => {
            let rows = next_token(rest)?
                .map(|(t, _)| parse_number(t, "row count"))
                .transpose()?;
            Msg::GenerateFixture { rows }
        }
        "search" | "find" => Msg::SetSearch(rest.to_string()),
        "sort" => {
            let (column, _) = next_token(rest)?.ok_or("missing column name")?;
            Msg::SortBy(column.to_string())
        }
        "next" => Msg::NextPage,
        "prev" => Msg::PrevPage,
        "page" => {
            let (token, _) = next_token(rest)?.ok_or("missing page number")?;
            Msg::GoToPage(parse_number(token, "page")?)
        }
        "edit" => {
            let (display_row, column, value) = parse_cell_edit(args)?;
            Msg::EditCell {
                display_row,
                column,
                value,
            }
        }
        "set" => {
            let (row, column, value) = parse_cell_edit(args)?;
            Msg::EditSourceCell { row, column, value }
        }
        "reset" => Msg::ResetAll,
        "export" | "download" => Msg::Export {
            path: (!rest.is_empty()).then(|| PathBuf::from(rest)),
        },
        "quit" | "exit" => Msg::Quit,
        "show" => return Ok(Some(ShellCommand::Show)),
        "help" | "?" => return Ok(Some(ShellCommand::Help)),
        other => return Err(format!("unknown command '{}' (try 'help')", other)),
    };

    Ok(Some(ShellCommand::Dispatch(msg)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn msg(line: &str) -> Msg {
        match parse_command(line) {
            Ok(Some(ShellCommand::Dispatch(msg))) => msg,
            other => panic!("expected a message for {:?}, got {:?}", line, other),
        }
    }

    #[test]
    fn test_blank_line() {
        assert!(parse_command("   ").unwrap().is_none());
    }

    #[test]
    fn test_search_keeps_spaces() {
        assert!(matches!(msg("search  jane austen "), Msg::SetSearch(t) if t == "jane austen"));
        assert!(matches!(msg("search"), Msg::SetSearch(t) if t.is_empty()));
    }

    #[test]
    fn test_sort_quoted_column() {
        assert!(matches!(msg("sort \"Published Year\""), Msg::SortBy(c) if c == "Published Year"));
        assert!(matches!(msg("SORT Title"), Msg::SortBy(c) if c == "Title"));
    }

    #[test]
    fn test_unterminated_quote_is_reported() {
        let err = parse_command("sort \"Title").unwrap_err();
        assert!(err.contains("unterminated quote"), "{}", err);
        assert!(parse_command("edit 1 \"Title value").is_err());
    }

    #[test]
    fn test_quoted_column_in_edit() {
        assert!(matches!(
            msg("edit 2 \"Published Year\" 1999"),
            Msg::EditCell { display_row: 1, column, value } if column == "Published Year" && value == "1999"
        ));
    }

    #[test]
    fn test_edit_is_one_based() {
        match msg("edit 3 Title The Left Hand of Darkness") {
            Msg::EditCell {
                display_row,
                column,
                value,
            } => {
                assert_eq!(display_row, 2);
                assert_eq!(column, "Title");
                assert_eq!(value, "The Left Hand of Darkness");
            }
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn test_trailing_newline_not_part_of_value() {
        assert!(matches!(msg("edit 1 Title Dune\r\n"), Msg::EditCell { value, .. } if value == "Dune"));
    }

    #[test]
    fn test_edit_empty_value() {
        assert!(matches!(msg("set 1 Title"), Msg::EditSourceCell { row: 0, value, .. } if value.is_empty()));
    }

    #[test]
    fn test_edit_row_zero_is_error() {
        assert!(parse_command("edit 0 Title x").is_err());
        assert!(parse_command("edit x Title y").is_err());
        assert!(parse_command("edit 1").is_err());
    }

    #[test]
    fn test_generate_arguments() {
        assert!(matches!(
            msg("generate"),
            Msg::GenerateSample {
                rows: None,
                seed: None
            }
        ));
        assert!(matches!(
            msg("generate 500 42"),
            Msg::GenerateSample {
                rows: Some(500),
                seed: Some(42)
            }
        ));
        assert!(parse_command("generate many").is_err());
    }

    #[test]
    fn test_export_path() {
        assert!(matches!(msg("export"), Msg::Export { path: None }));
        assert!(matches!(msg("export out.csv"), Msg::Export { path: Some(p) } if p == PathBuf::from("out.csv")));
    }

    #[test]
    fn test_navigation() {
        assert!(matches!(msg("next"), Msg::NextPage));
        assert!(matches!(msg("prev"), Msg::PrevPage));
        assert!(matches!(msg("page 4"), Msg::GoToPage(4)));
    }

    #[test]
    fn test_shell_commands() {
        assert!(matches!(parse_command("show"), Ok(Some(ShellCommand::Show))));
        assert!(matches!(parse_command("help"), Ok(Some(ShellCommand::Help))));
        assert!(parse_command("frobnicate").is_err());
    }
}
