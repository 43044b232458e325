use decomment_core::{
    CliArgs, Command as CoreCommand, FileOutcome, ProcessedFileResult, find_files, process_files,
};
mod interaction;

use anyhow::Result;
use clap::{CommandFactory, Parser};
use console::style;
use std::io;
use std::process::ExitCode;

fn print_completions_cli(shell: clap_complete::Shell) {
    let mut cmd = CliArgs::command();
    let name = cmd.get_name().to_string();
    clap_complete::generate(shell, &mut cmd, name, &mut io::stdout());
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let cli: CliArgs = CliArgs::parse();
    let mut exit_code = ExitCode::SUCCESS;

    if let Some(command_enum_val) = cli.command {
        match command_enum_val {
            CoreCommand::Completion(args) => {
                print_completions_cli(args.shell);
                return Ok(ExitCode::SUCCESS);
            }
        }
    }

    let main_app_args = cli.main_opts;

    let files_to_process = match find_files(&main_app_args) {
        Ok(files) => files,
        Err(e) => {
            eprintln!("{}", style(format!("Error: {}", e)).red());
            return Ok(ExitCode::FAILURE);
        }
    };

    if files_to_process.is_empty() {
        println!(
            "No C/C++ source files found under {}.",
            main_app_args.path.display()
        );
        return Ok(ExitCode::SUCCESS);
    }

    println!("Found {} files:", files_to_process.len());
    for file in files_to_process.iter().take(10) {
        println!("  {}", style(file.display()).dim());
    }
    if files_to_process.len() > 10 {
        println!("  ... and {} more.", files_to_process.len() - 10);
    }

    match interaction::confirm_processing(
        &main_app_args.path,
        files_to_process.len(),
        main_app_args.no_confirm,
    ) {
        Ok(true) => {}
        Ok(false) => return Ok(ExitCode::SUCCESS),
        Err(e) => {
            eprintln!(
                "{}",
                style(format!("Error during confirmation: {}", e)).red()
            );
            return Ok(ExitCode::FAILURE);
        }
    }

    let total = files_to_process.len();
    let processing_results: Vec<ProcessedFileResult> = process_files(files_to_process);

    let mut modified_count = 0;
    let mut failure_count = 0;
    for result in &processing_results {
        match &result.outcome {
            FileOutcome::Modified => {
                modified_count += 1;
                println!(
                    "  {} {}",
                    style("modified ").green(),
                    result.path.display()
                );
            }
            FileOutcome::Unchanged => {
                println!(
                    "  {} {}",
                    style("unchanged").dim(),
                    style(result.path.display()).dim()
                );
            }
            FileOutcome::Failed(reason) => {
                failure_count += 1;
                eprintln!(
                    "  {} {} - {}",
                    style("failed   ").red(),
                    style(result.path.display()).dim(),
                    style(reason).red()
                );
            }
        }
    }

    println!(
        "\nProcessed {} {}, {} modified, {} failed.",
        total,
        if total == 1 { "file" } else { "files" },
        style(modified_count).green(),
        if failure_count > 0 {
            style(failure_count).red()
        } else {
            style(failure_count).dim()
        }
    );
    if failure_count > 0 {
        exit_code = ExitCode::FAILURE;
    }

    Ok(exit_code)
}
