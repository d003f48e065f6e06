//! Schedule preview assembly: description, upcoming occurrences, and an
//! optional rendered message for the confirmation screen.

use chrono::DateTime;
use chrono_tz::Tz;
use painel_engine::clock::Clock;
use painel_engine::recurrence::{ScheduleDescriptor, describe, next_occurrences};
use painel_engine::template::{TemplateContext, render};
use serde::{Deserialize, Serialize};

/// Upper bound on occurrences per preview; the UI shows a short list.
pub const MAX_PREVIEW_COUNT: usize = 60;

fn default_count() -> usize {
    5
}

/// What the caller wants previewed.
#[derive(Debug, Clone, Deserialize)]
pub struct PreviewRequest {
    pub schedule: ScheduleDescriptor,
    #[serde(default = "default_count")]
    pub count: usize,
    #[serde(default)]
    pub template: Option<String>,
    #[serde(default)]
    pub context: TemplateContext,
}

/// Preview payload displayed before a request is confirmed.
#[derive(Debug, Clone, Serialize)]
pub struct SchedulePreview {
    pub description: String,
    pub occurrences: Vec<DateTime<Tz>>,
    /// Rendered message, present when a template was supplied.
    pub message: Option<String>,
}

/// ## Summary
/// Builds a preview for a schedule: its pt-BR description, the next
/// occurrences (capped at [`MAX_PREVIEW_COUNT`]), and the rendered
/// message when a template is supplied.
#[must_use]
pub fn build_preview(request: &PreviewRequest, clock: &impl Clock) -> SchedulePreview {
    let count = request.count.min(MAX_PREVIEW_COUNT);
    SchedulePreview {
        description: describe(Some(&request.schedule)),
        occurrences: next_occurrences(&request.schedule, count, clock),
        message: request
            .template
            .as_deref()
            .map(|template| render(template, &request.context, clock)),
    }
}
