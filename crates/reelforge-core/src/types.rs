//! Record types shared across the ReelForge screens.

use crate::error::CoreError;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Publication status for a video project.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ProjectStatus {
    /// Live on the platform.
    Published,
    /// Render or upload in progress.
    Processing,
    /// Not yet submitted.
    Draft,
    /// Queued for a future publish date.
    Scheduled,
}

impl ProjectStatus {
    /// All statuses in display order, used by the filter selector.
    pub const ALL: [ProjectStatus; 4] = [
        ProjectStatus::Published,
        ProjectStatus::Processing,
        ProjectStatus::Draft,
        ProjectStatus::Scheduled,
    ];

    /// Return the status as a lowercase tag string.
    pub fn as_str(&self) -> &'static str {
        match self {
            ProjectStatus::Published => "published",
            ProjectStatus::Processing => "processing",
            ProjectStatus::Draft => "draft",
            ProjectStatus::Scheduled => "scheduled",
        }
    }

    /// Human-readable label shown in status badges.
    pub fn label(&self) -> &'static str {
        match self {
            ProjectStatus::Published => "Published",
            ProjectStatus::Processing => "Processing",
            ProjectStatus::Draft => "Draft",
            ProjectStatus::Scheduled => "Scheduled",
        }
    }
}

impl fmt::Display for ProjectStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for ProjectStatus {
    type Err = CoreError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.to_lowercase().as_str() {
            "published" => Ok(ProjectStatus::Published),
            "processing" => Ok(ProjectStatus::Processing),
            "draft" => Ok(ProjectStatus::Draft),
            "scheduled" => Ok(ProjectStatus::Scheduled),
            other => Err(CoreError::UnknownStatus(other.to_string())),
        }
    }
}

/// A video automation project.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Project {
    /// Project identifier.
    pub id: u32,
    /// Display name.
    pub name: String,
    /// Product line the videos promote.
    pub product: String,
    /// Publication status.
    pub status: ProjectStatus,
    /// Total views across the project's videos.
    pub views: u64,
    /// Engagement rate in percent.
    pub engagement_pct: f32,
    /// Number of videos in the project.
    pub video_count: u32,
    /// Creation date.
    pub created_at: NaiveDate,
    /// Relative last-updated label ("2 hours ago").
    pub last_updated: String,
}

/// Style category for a content template.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum TemplateCategory {
    /// Controversy-led hooks.
    Controversial,
    /// First-person testimonial style.
    Testimonial,
    /// Curiosity-gap driven.
    Curiosity,
    /// Currently trending formats.
    Trending,
}

impl TemplateCategory {
    /// All categories in display order.
    pub const ALL: [TemplateCategory; 4] = [
        TemplateCategory::Controversial,
        TemplateCategory::Testimonial,
        TemplateCategory::Curiosity,
        TemplateCategory::Trending,
    ];

    /// Return the category as a lowercase tag string.
    pub fn as_str(&self) -> &'static str {
        match self {
            TemplateCategory::Controversial => "controversial",
            TemplateCategory::Testimonial => "testimonial",
            TemplateCategory::Curiosity => "curiosity",
            TemplateCategory::Trending => "trending",
        }
    }

    /// Human-readable label for the category sidebar.
    pub fn label(&self) -> &'static str {
        match self {
            TemplateCategory::Controversial => "Controversial",
            TemplateCategory::Testimonial => "Testimonial",
            TemplateCategory::Curiosity => "Curiosity",
            TemplateCategory::Trending => "Trending Now",
        }
    }
}

impl FromStr for TemplateCategory {
    type Err = CoreError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.to_lowercase().as_str() {
            "controversial" => Ok(TemplateCategory::Controversial),
            "testimonial" => Ok(TemplateCategory::Testimonial),
            "curiosity" => Ok(TemplateCategory::Curiosity),
            "trending" => Ok(TemplateCategory::Trending),
            other => Err(CoreError::UnknownCategory(other.to_string())),
        }
    }
}

/// Average performance stats attached to a template.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TemplatePerformance {
    /// Average views per use.
    pub avg_views: u64,
    /// Average engagement rate in percent.
    pub avg_engagement_pct: f32,
    /// Average conversion rate in percent.
    pub conversion_pct: f32,
}

/// A pre-built content template.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Template {
    /// Template identifier.
    pub id: u32,
    /// Display title.
    pub title: String,
    /// Style category.
    pub category: TemplateCategory,
    /// Short description of when to use it.
    pub description: String,
    /// Example hook line.
    pub hook: String,
    /// Example caption.
    pub caption: String,
    /// Example hashtag set.
    pub hashtags: String,
    /// Average performance across uses.
    pub performance: TemplatePerformance,
    /// Creator rating out of 5.
    pub rating: f32,
    /// Number of creators who used it.
    pub uses: u32,
    /// Whether the template is currently trending.
    pub trending: bool,
}

/// Compact video row shown on the dashboard.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct VideoSummary {
    /// Video identifier.
    pub id: u32,
    /// Product featured in the video.
    pub product: String,
    /// Total views.
    pub views: u64,
    /// Engagement rate in percent.
    pub engagement_pct: f32,
    /// Publication status.
    pub status: ProjectStatus,
}

/// Top-performing video row shown on the analytics screen.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TopVideo {
    /// Video identifier.
    pub id: u32,
    /// Hook line the video opened with.
    pub hook: String,
    /// Product featured in the video.
    pub product: String,
    /// Total views.
    pub views: u64,
    /// Engagement rate in percent.
    pub engagement_pct: f32,
    /// Share count.
    pub shares: u64,
    /// Comment count.
    pub comments: u64,
    /// Revenue attributed, in whole dollars.
    pub revenue: u64,
}

/// One day of aggregate performance numbers.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DailyStat {
    /// Axis label (weekday or date).
    pub label: String,
    /// Views that day.
    pub views: u64,
    /// Engagement events that day.
    pub engagement: u64,
    /// Shares that day.
    pub shares: u64,
    /// Comments that day.
    pub comments: u64,
}

/// Headline metric card shown at the top of a screen.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StatCard {
    /// Metric name.
    pub label: String,
    /// Formatted current value.
    pub value: String,
    /// Formatted change versus the previous period.
    pub change: String,
    /// Whether the metric moved up.
    pub trend_up: bool,
}

/// Share of output attributed to one content type.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TypeShare {
    /// Content type name.
    pub name: String,
    /// Share in percent.
    pub percent: u8,
}

/// Kind of content the generator produces.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ContentKind {
    /// Short text hooks.
    Hooks,
    /// Video captions.
    Captions,
    /// Hashtag sets.
    Hashtags,
}

impl ContentKind {
    /// All kinds in display order.
    pub const ALL: [ContentKind; 3] =
        [ContentKind::Hooks, ContentKind::Captions, ContentKind::Hashtags];

    /// Human-readable label for the kind selector.
    pub fn label(&self) -> &'static str {
        match self {
            ContentKind::Hooks => "Text Hooks",
            ContentKind::Captions => "Captions",
            ContentKind::Hashtags => "Hashtags",
        }
    }

    /// One-line description shown under the label.
    pub fn description(&self) -> &'static str {
        match self {
            ContentKind::Hooks => "Controversial & engaging headlines",
            ContentKind::Captions => "First-person testimonial style",
            ContentKind::Hashtags => "Trending & niche-specific tags",
        }
    }
}

impl FromStr for ContentKind {
    type Err = CoreError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.to_lowercase().as_str() {
            "hooks" => Ok(ContentKind::Hooks),
            "captions" => Ok(ContentKind::Captions),
            "hashtags" => Ok(ContentKind::Hashtags),
            other => Err(CoreError::UnknownContentKind(other.to_string())),
        }
    }
}

/// Tone applied to generated content.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ContentStyle {
    /// Controversy-led.
    Controversial,
    /// First-person testimonial.
    Testimonial,
    /// Curiosity-driven.
    Curiosity,
    /// Casual and friendly.
    Casual,
}

impl ContentStyle {
    /// All styles in display order.
    pub const ALL: [ContentStyle; 4] = [
        ContentStyle::Controversial,
        ContentStyle::Testimonial,
        ContentStyle::Curiosity,
        ContentStyle::Casual,
    ];

    /// Human-readable label for the style selector.
    pub fn label(&self) -> &'static str {
        match self {
            ContentStyle::Controversial => "Controversial",
            ContentStyle::Testimonial => "Testimonial",
            ContentStyle::Curiosity => "Curiosity-driven",
            ContentStyle::Casual => "Casual & Friendly",
        }
    }
}

impl FromStr for ContentStyle {
    type Err = CoreError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.to_lowercase().as_str() {
            "controversial" => Ok(ContentStyle::Controversial),
            "testimonial" => Ok(ContentStyle::Testimonial),
            "curiosity" => Ok(ContentStyle::Curiosity),
            "casual" => Ok(ContentStyle::Casual),
            other => Err(CoreError::UnknownContentStyle(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn status_round_trips_through_tag_string() {
        for status in ProjectStatus::ALL {
            assert_eq!(status.as_str().parse::<ProjectStatus>().unwrap(), status);
        }
    }

    #[test]
    fn status_parse_is_case_insensitive() {
        assert_eq!(
            "Published".parse::<ProjectStatus>().unwrap(),
            ProjectStatus::Published
        );
        assert_eq!(
            "SCHEDULED".parse::<ProjectStatus>().unwrap(),
            ProjectStatus::Scheduled
        );
    }

    #[test]
    fn unknown_status_is_rejected() {
        let err = "archived".parse::<ProjectStatus>().unwrap_err();
        assert_eq!(format!("{err}"), "unknown project status: archived");
    }

    #[test]
    fn category_round_trips_through_tag_string() {
        for category in TemplateCategory::ALL {
            assert_eq!(
                category.as_str().parse::<TemplateCategory>().unwrap(),
                category
            );
        }
    }
}
