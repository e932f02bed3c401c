use crate::domain::models::ToolName;

#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Launch(ToolName),
}
