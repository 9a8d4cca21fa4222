use crate::{
    cli::{
        Command, CommandResult,
        formatting::{format_description, swatch},
        types::CommandMetadata,
    },
    clock::WidgetColor,
};

/// Lists the named colours accepted wherever a colour is set.
pub struct PaletteCommand;

impl Command for PaletteCommand {
    fn execute(&self, _args: &[String]) -> CommandResult {
        let lines: Vec<String> = WidgetColor::ALL
            .iter()
            .map(|color| {
                let rgba = color.rgba();
                format!(
                    "{} {:<8} {}",
                    swatch(rgba),
                    color.name(),
                    format_description(&rgba.to_hex())
                )
            })
            .collect();

        Ok(lines.join("\n"))
    }

    fn metadata(&self) -> CommandMetadata {
        CommandMetadata {
            name: "palette".to_string(),
            description: "List named colours".to_string(),
            category: "config".to_string(),
            args: vec![],
            examples: vec!["standby-clock config palette".to_string()],
        }
    }
}
