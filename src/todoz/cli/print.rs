use colored::Colorize;
use todoz::api::{CmdMessage, MessageLevel};
use todoz::model::Todo;

const DONE_MARKER: &str = "[x]";
const OPEN_MARKER: &str = "[ ]";

pub(super) fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
            MessageLevel::Error => println!("{}", message.content.red()),
        }
    }
}

pub(super) fn print_todos(todos: &[Todo]) {
    if todos.is_empty() {
        println!("No todos found.");
        return;
    }

    for todo in todos {
        println!("{}", format_todo(todo));
    }
}

fn format_todo(todo: &Todo) -> String {
    let marker = if todo.complete {
        DONE_MARKER.green()
    } else {
        OPEN_MARKER.normal()
    };
    format!("{}. {} {}", todo.id, marker, todo.content)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_open_and_done_todos() {
        colored::control::set_override(false);

        let mut todo = Todo::new(4, "buy milk");
        assert_eq!(format_todo(&todo), "4. [ ] buy milk");

        todo.complete = true;
        assert_eq!(format_todo(&todo), "4. [x] buy milk");
    }
}
