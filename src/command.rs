/// Console commands understood by the terminal host

use crate::types::{Item, ScreenPos};

#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Add(Item),
    Remove(usize),
    Click(usize),
    Drag(usize),
    /// Drop onto a slot, or onto nothing
    Drop(Option<usize>),
    /// Drop at a screen position, resolved by hit-testing
    DropAt(ScreenPos),
    Deselect,
    Show,
    Help,
    Quit,
}

impl Command {
    /// Parse one input line; Err carries a message for the user
    pub fn parse(line: &str) -> Result<Self, String> {
        let parts: Vec<&str> = line.split_whitespace().collect();
        let Some((&head, args)) = parts.split_first() else {
            return Err("empty command".to_string());
        };

        match head.to_lowercase().as_str() {
            "add" => {
                let name = args.first().ok_or("usage: add <name> [image]")?;
                let image = args
                    .get(1)
                    .map(|s| s.to_string())
                    .unwrap_or_else(|| format!("{}.png", name.to_lowercase()));
                Ok(Command::Add(Item::new(*name, image)))
            }
            "remove" | "rm" => Ok(Command::Remove(parse_index(args, "remove")?)),
            "click" | "select" => Ok(Command::Click(parse_index(args, "click")?)),
            "drag" => Ok(Command::Drag(parse_index(args, "drag")?)),
            "drop" => match args.first() {
                None | Some(&"-") => Ok(Command::Drop(None)),
                Some(_) => Ok(Command::Drop(Some(parse_index(args, "drop")?))),
            },
            "dropat" => {
                let coord = |i: usize| -> Result<f32, String> {
                    args.get(i)
                        .and_then(|s| s.parse().ok())
                        .ok_or_else(|| "usage: dropat <x> <y>".to_string())
                };
                Ok(Command::DropAt(ScreenPos::new(coord(0)?, coord(1)?)))
            }
            "deselect" => Ok(Command::Deselect),
            "show" | "ls" => Ok(Command::Show),
            "help" | "?" => Ok(Command::Help),
            "quit" | "exit" => Ok(Command::Quit),
            other => Err(format!("unknown command: {}", other)),
        }
    }
}

fn parse_index(args: &[&str], name: &str) -> Result<usize, String> {
    args.first()
        .and_then(|s| s.parse().ok())
        .ok_or_else(|| format!("usage: {} <slot>", name))
}

pub const HELP: &str = "\
  add <name> [image]  - add an item to the first free slot
  remove <slot>       - clear a slot
  click <slot>        - select a slot
  drag <slot>         - start dragging a slot
  drop <slot>|-       - drop the dragged item onto a slot (or nowhere)
  dropat <x> <y>      - drop at a screen position
  deselect            - clear the selection
  show                - print the panel
  quit                - exit";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_add_with_default_image() {
        assert_eq!(
            Command::parse("add Sword"),
            Ok(Command::Add(Item::new("Sword", "sword.png")))
        );
        assert_eq!(
            Command::parse("ADD Bow icons/bow.png"),
            Ok(Command::Add(Item::new("Bow", "icons/bow.png")))
        );
    }

    #[test]
    fn test_parse_drop_variants() {
        assert_eq!(Command::parse("drop 3"), Ok(Command::Drop(Some(3))));
        assert_eq!(Command::parse("drop -"), Ok(Command::Drop(None)));
        assert_eq!(Command::parse("drop"), Ok(Command::Drop(None)));
        assert_eq!(
            Command::parse("dropat 12.5 40"),
            Ok(Command::DropAt(ScreenPos::new(12.5, 40.0)))
        );
    }

    #[test]
    fn test_parse_errors() {
        assert!(Command::parse("").is_err());
        assert!(Command::parse("click").is_err());
        assert!(Command::parse("remove x").is_err());
        assert!(Command::parse("dropat 1").is_err());
        assert!(Command::parse("fly").is_err());
    }
}
