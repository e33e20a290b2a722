//! Local analysis command

use anyhow::{Context, Result};
use console::style;
use std::path::Path;
use std::sync::Arc;

use mindcare::analysis::{AnalysisPipeline, Band};
use mindcare::classifier::load_model_dir;
use mindcare::config::AppConfig;
use mindcare::models::AnalysisResult;

pub fn run(config: &AppConfig, model_path: &Path, texts: &[String], json: bool) -> Result<()> {
    config.scoring.validate().context("Invalid scoring configuration")?;

    let classifier = load_model_dir(model_path)
        .with_context(|| format!("Failed to load model from {}", model_path.display()))?;
    let pipeline = AnalysisPipeline::new(
        Arc::new(classifier),
        config.scoring.sentiment.build(),
        Arc::new(config.scoring.clone()),
    );

    let mut results = Vec::with_capacity(texts.len());
    for text in texts {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            eprintln!("{} skipping empty text", style("!").yellow());
            continue;
        }
        results.push(pipeline.analyze(trimmed)?);
    }

    if json {
        println!("{}", serde_json::to_string_pretty(&results)?);
        return Ok(());
    }

    for (text, result) in texts.iter().filter(|t| !t.trim().is_empty()).zip(&results) {
        print_result(text.trim(), result, config);
    }
    Ok(())
}

fn print_result(text: &str, result: &AnalysisResult, config: &AppConfig) {
    let score = format!("{:.1}/10", result.wellness_score);
    let score = match config.scoring.interpretation.band(result.wellness_score) {
        Band::Positive => style(score).green().bold(),
        Band::Balanced => style(score).cyan().bold(),
        Band::Concern => style(score).yellow().bold(),
        Band::Support => style(score).red().bold(),
    };

    println!("{} {}", style("▶").dim(), style(text).italic());
    println!(
        "   Emotion:   {} ({:.0}%)",
        style(&result.emotion.primary).bold(),
        result.emotion.confidence * 100.0
    );
    println!("   Sentiment: {:+.4}", result.sentiment.compound);
    println!("   Wellness:  {}", score);
    let features = &result.linguistic_features;
    println!(
        "   Features:  {} words, {} negative, {} absolute, {} first-person",
        features.total_words, features.negative_words, features.absolute_words, features.first_person_pronouns
    );
    println!("   {}", result.interpretation);
    println!();
}
