//! Incremental parser for the studyplan payload.
//!
//! The payload is the text the [`crate::demux::TagDemultiplexer`] routes to
//! the studyplan channel. It is a line oriented format:
//!
//! ```text
//! name: Introduction to Basic Physics
//! desc: Explore fundamental concepts of physics.
//! category: Physics
//! daily_lessons:
//! ### 1
//! name: Motion
//! desc: Speed, velocity and acceleration.
//! tasks:
//! - Measure your walking speed
//! - Plot distance over time
//! ### 2
//! ...
//! ```
//!
//! Parsing runs in two phases that are entered in order and never revisited:
//!
//! 1. **Header**: `name`, `desc` and `category` are updated while their line
//!    is still being written, so a UI can fill a card character by character.
//! 2. **Lessons**: entered on the `daily_lessons:` line. Only completed lines
//!    are parsed here.
//!
//! Format problems are anomalies, not errors: they are reported through
//! [`ParserObserver::on_error`], logged, and parsing carries on. Whether the
//! result is usable is decided once, by
//! [`StudyplanStreamParser::get_full_studyplan`].

use log::{debug, warn};

use crate::models::{DailyLesson, LessonDraft, Studyplan, StudyplanDraft};


/// Keys accepted in the header phase.
const HEADER_KEYS: [&str; 3] = ["name", "desc", "category"];

/// Line switching the parser to the lesson phase.
const DAILY_LESSONS_LINE: &str = "daily_lessons:";

/// Receiver of parser progress.
pub trait ParserObserver {
    /// A header field or a progress indicator changed.
    ///
    /// The draft is borrowed from the parser and will keep changing; clone it
    /// to keep a snapshot.
    fn on_content_update(&mut self, _draft: &StudyplanDraft) {}

    /// A format anomaly was detected. Parsing continues.
    fn on_error(&mut self, _message: &str) {}
}

impl ParserObserver for () {}

/// Parsing phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ParsePhase {
    /// Top-level `key: value` lines
    #[default]
    Header,

    /// Lesson headers, lesson fields and tasks
    Lessons,
}

/// Parser for one studyplan payload.
#[derive(Debug, Clone, Default)]
pub struct StudyplanStreamParser {
    draft: StudyplanDraft,
    lessons: Vec<LessonDraft>,
    phase: ParsePhase,
    line_buffer: String,
    /// Set once a shrinking header value was reported for the current line
    shrink_reported: bool,
    anomalies: Vec<String>,
}

impl StudyplanStreamParser {
    /// Creates an empty parser.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current draft of the top-level fields.
    pub fn draft(&self) -> &StudyplanDraft {
        &self.draft
    }

    /// Lessons seen so far, in stream order.
    pub fn lessons(&self) -> &[LessonDraft] {
        &self.lessons
    }

    /// Current parsing phase.
    pub fn phase(&self) -> ParsePhase {
        self.phase
    }

    /// Every anomaly reported so far.
    pub fn anomalies(&self) -> &[String] {
        &self.anomalies
    }

    /// Processes the next chunk of studyplan text.
    pub fn process_new_chunk<O: ParserObserver + ?Sized>(&mut self, chunk: &str, observer: &mut O) {
        for c in chunk.chars() {
            if c == '\n' {
                let line = std::mem::take(&mut self.line_buffer);
                self.shrink_reported = false;
                self.process_full_line(&line, observer);
            } else {
                self.update_line_buffer(c, observer);
            }
        }
    }

    /// Processes a trailing line that was not terminated by a newline.
    pub fn finish<O: ParserObserver + ?Sized>(&mut self, observer: &mut O) {
        if !self.line_buffer.is_empty() {
            let line = std::mem::take(&mut self.line_buffer);
            self.shrink_reported = false;
            self.process_full_line(&line, observer);
        }
    }

    /// Builds the finalized studyplan.
    ///
    /// Returns `None`, after reporting why, if a header field is missing or
    /// any lesson lacks its name, its description or its tasks.
    pub fn get_full_studyplan<O: ParserObserver + ?Sized>(
        &mut self,
        observer: &mut O,
    ) -> Option<Studyplan> {
        let missing = self.draft.missing_header_fields();
        if !missing.is_empty() {
            let message = format!(
                "Studyplan is missing base fields: {}",
                missing.join(", ")
            );
            self.report(observer, message);
            return None;
        }

        let mut daily_lessons = Vec::with_capacity(self.lessons.len());
        for (i, lesson) in self.lessons.iter().enumerate() {
            if !lesson.is_complete() {
                let snapshot = serde_json::to_string(lesson)
                    .unwrap_or_else(|e| format!("<unserializable lesson: {e}>"));
                let message = format!(
                    "Lesson for day {} is missing some information. Current info: {snapshot}",
                    i + 1
                );
                self.report(observer, message);
                return None;
            }
            daily_lessons.push(DailyLesson {
                name: lesson.name.clone().unwrap_or_default(),
                desc: lesson.desc.clone().unwrap_or_default(),
                tasks: lesson.tasks.clone(),
            });
        }

        Some(Studyplan {
            name: self.draft.name.clone().unwrap_or_default(),
            desc: self.draft.desc.clone().unwrap_or_default(),
            category: self.draft.category.clone().unwrap_or_default(),
            daily_lessons,
        })
    }

    /// Called for every character of a line still being written.
    fn update_line_buffer<O: ParserObserver + ?Sized>(&mut self, c: char, observer: &mut O) {
        self.line_buffer.push(c);

        if self.phase == ParsePhase::Lessons {
            return;
        }

        for key in HEADER_KEYS {
            let Some(content) = self
                .line_buffer
                .strip_prefix(key)
                .and_then(|rest| rest.strip_prefix(": "))
            else {
                continue;
            };
            let content = content.to_string();

            // Streamed values only grow, so a shorter value means the key is
            // being written a second time.
            let previous_len = self.header_field(key).as_ref().map_or(0, String::len);
            if previous_len > content.len() && !self.shrink_reported {
                self.shrink_reported = true;
                let message = format!(
                    "New content was shorter than previous content at basic key \"{key}\". \
                     This most likely means the same key was set in multiple lines"
                );
                self.report(observer, message);
            }

            *self.header_field(key) = Some(content);
            observer.on_content_update(&self.draft);
            break;
        }
    }

    /// Called once a line is complete.
    fn process_full_line<O: ParserObserver + ?Sized>(&mut self, raw: &str, observer: &mut O) {
        let line = raw.trim();
        if line.is_empty() {
            return;
        }

        if self.phase == ParsePhase::Header {
            if line == DAILY_LESSONS_LINE {
                let missing = self.draft.missing_header_fields();
                if !missing.is_empty() {
                    let message = format!(
                        "Studyplan wasn't properly initialized, missing: {}",
                        missing.join(", ")
                    );
                    self.report(observer, message);
                }
                debug!("Entering daily lessons phase");
                self.phase = ParsePhase::Lessons;
            }
            return;
        }

        if is_lesson_header(line) {
            // The number in the header is ignored, lessons are counted.
            self.lessons.push(LessonDraft::default());
            self.draft.lessons_count = Some(self.lessons.len());
            observer.on_content_update(&self.draft);
            return;
        }

        if let Some(task) = line.strip_prefix("- ").filter(|t| !t.is_empty()) {
            let task = task.to_string();
            if let Some(lesson) = self.current_lesson(observer, line) {
                lesson.tasks.push(task);
            }
            return;
        }

        if let Some(name) = line.strip_prefix("name: ") {
            let name = name.to_string();
            if let Some(lesson) = self.current_lesson(observer, line) {
                lesson.name = Some(name.clone());
                self.draft.current_lesson = Some(name);
                observer.on_content_update(&self.draft);
            }
            return;
        }

        if let Some(desc) = line.strip_prefix("desc: ") {
            let desc = desc.to_string();
            if let Some(lesson) = self.current_lesson(observer, line) {
                lesson.desc = Some(desc);
            }
        }

        // Anything else (`tasks:`, stray prose) is ignored.
    }

    /// Lesson currently being written, or `None` (reported) before the first
    /// lesson header.
    fn current_lesson<O: ParserObserver + ?Sized>(
        &mut self,
        observer: &mut O,
        line: &str,
    ) -> Option<&mut LessonDraft> {
        if self.lessons.is_empty() {
            let message = format!("Found lesson content before any lesson header: {line}");
            self.report(observer, message);
            return None;
        }
        self.lessons.last_mut()
    }

    fn header_field(&mut self, key: &str) -> &mut Option<String> {
        match key {
            "name" => &mut self.draft.name,
            "desc" => &mut self.draft.desc,
            _ => &mut self.draft.category,
        }
    }

    fn report<O: ParserObserver + ?Sized>(&mut self, observer: &mut O, message: String) {
        warn!("Studyplan format anomaly: {message}");
        observer.on_error(&message);
        self.anomalies.push(message);
    }
}

/// Matches `### <digits>`.
fn is_lesson_header(line: &str) -> bool {
    line.strip_prefix("### ")
        .is_some_and(|n| !n.is_empty() && n.chars().all(|c| c.is_ascii_digit()))
}
