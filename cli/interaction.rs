use anyhow::Result;
use console::style;
use dialoguer::Input;
use std::path::Path;

/// Interactive gate in front of any modification. Only the literal token
/// "yes" (case-insensitive) proceeds; everything else aborts the run.
pub fn confirm_processing(root: &Path, file_count: usize, no_confirm: bool) -> Result<bool> {
    if no_confirm {
        return Ok(true);
    }
    if file_count == 0 {
        println!("No files to process.");
        return Ok(false);
    }

    println!(
        "{}",
        style("Files are rewritten in place. Make sure you have a backup or version control.")
            .yellow()
    );

    let prompt = format!(
        "Strip comments from {} files under '{}'? (type 'yes')",
        style(file_count).cyan(),
        root.display()
    );

    let answer: String = Input::new()
        .with_prompt(prompt)
        .allow_empty(true)
        .interact_text()?;
    let confirmed = answer.trim().eq_ignore_ascii_case("yes");

    if !confirmed {
        println!("Aborted by user.");
    }

    Ok(confirmed)
}
