use std::path::Path;

use colored::Colorize;

pub fn run(deck: &str, output: &Path) -> Result<(), String> {
    let (_, catalog) = super::load(deck)?;

    let written = tarot_prompts::write_prompts(&catalog, output).map_err(|e| e.to_string())?;

    println!(
        "  {} {} prompt files → {}/",
        "Generated".bold(),
        written.len(),
        output.display()
    );
    println!();
    for prompt in &written {
        println!("  {}  ({})", prompt.filename, prompt.card_name);
    }

    Ok(())
}
