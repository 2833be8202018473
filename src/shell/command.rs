/// A normalized command-loop input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Add,
    Remove,
    Show,
    Exit,
    Unknown(String),
}

impl Command {
    /// Trims and lower-cases `input` before matching.
    pub fn parse(input: &str) -> Self {
        let normalized = input.trim().to_lowercase();
        match normalized.as_str() {
            "add" => Command::Add,
            "remove" => Command::Remove,
            "show" => Command::Show,
            "exit" => Command::Exit,
            _ => Command::Unknown(normalized),
        }
    }
}
