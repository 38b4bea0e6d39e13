use crate::app::AppEvent;
use crate::logic::DismissReason;
use crate::model::{Field, RecordId};

/// One line typed into the terminal driver
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Event(AppEvent),
    List,
    Help,
    Quit,
}

pub const HELP: &str = "\
commands:
  list                     show the (filtered) users
  filter <text>            filter by code, name or description
  add                      open the add dialog
  edit <id>                open the edit dialog for a user
  set <field> <value>      set code, name or description in the dialog
  submit                   save the dialog
  cancel                   close the dialog without saving
  delete <id>              delete a user
  dismiss                  close the notification
  quit";

pub fn parse_command(line: &str) -> Result<Command, String> {
    let line = line.trim();
    let (verb, rest) = match line.split_once(char::is_whitespace) {
        Some((verb, rest)) => (verb, rest.trim_start()),
        None => (line, ""),
    };

    let command = match verb {
        "list" | "" => Command::List,
        "help" => Command::Help,
        "quit" | "exit" => Command::Quit,
        "filter" => Command::Event(AppEvent::SetFilter(rest.to_string())),
        "add" => Command::Event(AppEvent::OpenCreate),
        "edit" => Command::Event(AppEvent::OpenUpdate(parse_id(rest)?)),
        "delete" => Command::Event(AppEvent::Delete(parse_id(rest)?)),
        "submit" => Command::Event(AppEvent::Submit),
        "cancel" => Command::Event(AppEvent::Cancel),
        "dismiss" => Command::Event(AppEvent::DismissNotice(DismissReason::Explicit)),
        "set" => {
            let (field, value) = rest.split_once(' ').unwrap_or((rest, ""));
            let field: Field = field.parse()?;
            Command::Event(AppEvent::EditField(field, value.trim_start().to_string()))
        }
        other => return Err(format!("unknown command '{}', try 'help'", other)),
    };
    Ok(command)
}

fn parse_id(arg: &str) -> Result<RecordId, String> {
    arg.trim()
        .parse::<RecordId>()
        .map_err(|_| format!("expected a numeric user id, got '{}'", arg))
}
