//! Model directory inspection command

use anyhow::Result;
use console::style;
use std::path::Path;

use mindcare::classifier::{check_model_dir, FileStatus};

pub fn run(path: &Path) -> Result<()> {
    println!("🔍 Checking model files in {}\n", path.display());

    let report = check_model_dir(path);
    if !report.exists {
        println!("{} directory not found", style("✗").red());
    }

    for file in &report.files {
        let kind = if file.required { "" } else { " (optional)" };
        println!("📄 {}{}", style(file.name).bold(), style(kind).dim());
        if let Some(size) = file.size {
            println!("   Size: {} bytes", size);
        }
        match &file.status {
            FileStatus::Valid { keys } => {
                println!("   {} Valid JSON with {} keys", style("✓").green(), keys.len())
            }
            FileStatus::Empty => println!("   {} File is empty", style("✗").red()),
            FileStatus::Invalid(message) => {
                println!("   {} Invalid JSON: {}", style("✗").red(), message)
            }
            FileStatus::Missing if file.required => println!("   {} Not found", style("✗").red()),
            FileStatus::Missing => println!("   {} Not found, defaults apply", style("○").dim()),
        }
        println!();
    }

    if report.is_loadable() {
        println!("{}", style("✅ Model directory looks loadable").green());
        Ok(())
    } else {
        anyhow::bail!("model directory {} is not loadable", path.display())
    }
}
