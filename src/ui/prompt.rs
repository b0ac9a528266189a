use crate::ui::messages::warning;
use std::io::{self, Write};

/// Show `question` as a warning and read a yes/no answer from stdin.
/// Anything other than `y`/`yes` (including a closed stdin) is a no.
pub fn confirm(question: &str) -> bool {
    warning(question);
    print!("Confirm [y/N]: ");
    let _ = io::stdout().flush();

    let mut answer = String::new();
    match io::stdin().read_line(&mut answer) {
        Ok(_) => matches!(answer.trim().to_lowercase().as_str(), "y" | "yes"),
        Err(_) => false,
    }
}
