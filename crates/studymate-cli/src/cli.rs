//! Command handlers
//!
//! Each handler reads its input, calls into `studymate_core` with the
//! converted parameters and renders the result. Every fallible step carries
//! context so failures read well on the terminal.

use std::path::Path;

use anyhow::{Context, Result};
use futures::stream;
use jiff::Timestamp;
use log::{debug, info};
use studymate_core::{
    display::{CompletionResult, ProgressReport},
    files::{read_json, write_json},
    models::{ChatMessage, Studyplan, StudyplanDraft, UserStudyplan},
    params::{CompleteTask, EvaluateProgress, ParseResponse},
    parser::ParserObserver,
    progress::{complete_task, evaluate_with, resolve_timezone},
    prompt::to_model_prompt,
    response::{collect_stream, split_into_chunks, ResponseObserver},
};
use tokio::io::AsyncReadExt;

use crate::{
    args::{CompleteArgs, ParseArgs, ProgressArgs, PromptArgs, StartArgs},
    renderer::TerminalRenderer,
};

/// Handler for all commands.
pub struct Cli {
    renderer: TerminalRenderer,
}

impl Cli {
    pub fn new(renderer: TerminalRenderer) -> Self {
        Self { renderer }
    }

    /// Streams a raw model response through the pipeline.
    pub async fn parse(&self, args: ParseArgs) -> Result<()> {
        let params = ParseResponse::from(&args);
        let response = match &args.file {
            Some(path) => tokio::fs::read_to_string(path)
                .await
                .with_context(|| format!("Failed to read response from {}", path.display()))?,
            None => {
                let mut input = String::new();
                tokio::io::stdin()
                    .read_to_string(&mut input)
                    .await
                    .context("Failed to read response from stdin")?;
                input
            }
        };

        let chunks = split_into_chunks(&response, &params).context("Invalid chunk size")?;
        debug!("Streaming {} chunks of {} characters", chunks.len(), params.chunk_size);

        let live = LiveView {
            renderer: (!args.json).then_some(&self.renderer),
            last_lessons_count: None,
        };
        let collector = collect_stream(stream::iter(chunks), live).await;
        let messages = collector
            .into_messages()
            .context("The model response contains an invalid studyplan")?;

        if args.json {
            let json = serde_json::to_string_pretty(&messages)
                .context("Failed to serialize messages")?;
            println!("{json}");
            return Ok(());
        }

        println!();
        for message in &messages {
            if let ChatMessage::Studyplan(plan) = message {
                println!();
                self.renderer.render(&plan.studyplan.to_string())?;
            }
        }
        info!("Collected {} messages", messages.len());
        Ok(())
    }

    /// Shows the progress of a started studyplan.
    pub fn progress(&self, args: ProgressArgs) -> Result<()> {
        let plan = load_started_plan(&args.file)?;
        let json = args.json;
        let params = EvaluateProgress::from(args);

        let progress = evaluate_with(&plan, &params).context("Failed to evaluate progress")?;

        if json {
            let json = serde_json::to_string_pretty(&progress)
                .context("Failed to serialize progress")?;
            println!("{json}");
            return Ok(());
        }

        let tz = resolve_timezone(&params.timezone)?;
        self.renderer.render(&format!("# {}\n\n", plan.name))?;
        self.renderer
            .render(&ProgressReport::new(&progress, &tz).to_string())
    }

    /// Completes a task of the current day and rewrites the plan file.
    pub fn complete(&self, args: CompleteArgs) -> Result<()> {
        let path = args.file.clone();
        let mut plan = load_started_plan(&path)?;
        let mut params = CompleteTask::from(args);

        // Pin the clock so evaluation and completion agree on "today".
        let now = params.now.unwrap_or_else(Timestamp::now);
        params.now = Some(now);

        let progress = evaluate_with(
            &plan,
            &EvaluateProgress {
                timezone: params.timezone.clone(),
                now: Some(now),
            },
        )
        .context("Failed to evaluate progress")?;
        let completed_at = complete_task(&mut plan, &params).context("Failed to complete task")?;

        write_json(&path, &plan)
            .with_context(|| format!("Failed to save studyplan to {}", path.display()))?;

        let goal = plan
            .daily_lessons
            .get(progress.current_day - 1)
            .and_then(|day| day.tasks.get(params.index))
            .map(|task| task.goal.as_str())
            .unwrap_or_default();
        let tz = resolve_timezone(&params.timezone)?;
        let result = CompletionResult::new(progress.current_day, params.index, goal, completed_at, &tz);
        self.renderer.render(&result.to_string())
    }

    /// Prints a started copy of a studyplan as JSON.
    pub fn start(&self, args: StartArgs) -> Result<()> {
        let plan: Studyplan = read_json(&args.file)
            .with_context(|| format!("Failed to load studyplan from {}", args.file.display()))?;
        let started = UserStudyplan::start(args.original_id, &plan);

        let json = serde_json::to_string_pretty(&started).context("Failed to serialize plan")?;
        println!("{json}");
        Ok(())
    }

    /// Prints a studyplan in the model format.
    pub fn prompt(&self, args: PromptArgs) -> Result<()> {
        let plan: Studyplan = read_json(&args.file)
            .with_context(|| format!("Failed to load studyplan from {}", args.file.display()))?;
        println!("{}", to_model_prompt(&plan));
        Ok(())
    }
}

fn load_started_plan(path: &Path) -> Result<UserStudyplan> {
    read_json(path).with_context(|| format!("Failed to load started studyplan from {}", path.display()))
}

/// Live view of a streaming response.
///
/// Echoes markdown as it arrives and prints a line per new lesson. Quiet
/// when `renderer` is `None`.
struct LiveView<'a> {
    renderer: Option<&'a TerminalRenderer>,
    last_lessons_count: Option<usize>,
}

impl ParserObserver for LiveView<'_> {
    fn on_content_update(&mut self, draft: &StudyplanDraft) {
        let Some(renderer) = self.renderer else {
            return;
        };
        if draft.lessons_count == self.last_lessons_count {
            return;
        }
        self.last_lessons_count = draft.lessons_count;
        if let Some(count) = draft.lessons_count {
            let name = draft.name.as_deref().unwrap_or("studyplan");
            // Progress output is best effort.
            let _ = renderer.write_live(&format!("\n[{name}: generating day {count}]"));
        }
    }

    fn on_error(&mut self, message: &str) {
        eprintln!("Warning: {message}");
    }
}

impl ResponseObserver for LiveView<'_> {
    fn on_markdown(&mut self, text: &str) {
        if let Some(renderer) = self.renderer {
            let _ = renderer.write_live(text);
        }
    }
}
