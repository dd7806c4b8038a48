//! Content templates swapped into the main feed per tab.

use deal_ui::ButtonMarker;

use crate::model::TabId;

/// Buttons on activity cards and feed placeholders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FeedCta {
    ScheduleCall,
    SendRoi,
    ViewCaseStudy,
    EmailDavid,
    LogixFlow,
    RequestIntro,
    UploadFile,
    AddReminder,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CtaButton {
    pub label: &'static str,
    pub cta: FeedCta,
    pub primary: bool,
}

impl CtaButton {
    /// Marker declaration upgraded into a button widget when the card renders.
    pub fn marker(&self) -> ButtonMarker {
        ButtonMarker {
            variant: Some(if self.primary { "fill" } else { "outline" }.to_string()),
            size: Some("small".to_string()),
            text: self.label.to_string(),
            icon_markup: None,
            class_name: Some("cta-btn".to_string()),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimelineIcon {
    Warning,
    Sparkle,
    Phone,
}

impl TimelineIcon {
    pub fn class(self) -> &'static str {
        match self {
            Self::Warning => "warning",
            Self::Sparkle => "sparkle",
            Self::Phone => "phone",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TagChip {
    pub tone: &'static str,
    pub label: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimelineEntry {
    pub title: &'static str,
    pub icon: TimelineIcon,
    pub assignee: Option<&'static str>,
    pub time_ago: &'static str,
    pub badge: Option<&'static str>,
    pub summary: &'static str,
    pub tags: Vec<TagChip>,
    pub actions: [CtaButton; 2],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Metric {
    pub value: &'static str,
    pub label: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Recommendation {
    pub tone: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub impact: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FeedContent {
    Timeline {
        entries: Vec<TimelineEntry>,
        end_text: &'static str,
    },
    Empty {
        title: &'static str,
        body: &'static str,
        cta: CtaButton,
    },
    Insights {
        headline: &'static str,
        summary: &'static str,
        metrics: Vec<Metric>,
        recommendations: Vec<Recommendation>,
    },
}

const AI_SUMMARY: &str = "AI detected recurring dispatcher overload during peak hours across multiple data sources. Manual route reassignment and lack of alert prioritization identified as key bottlenecks.";

fn cta(label: &'static str, cta: FeedCta, primary: bool) -> CtaButton {
    CtaButton {
        label,
        cta,
        primary,
    }
}

fn tag(tone: &'static str, label: &'static str) -> TagChip {
    TagChip { tone, label }
}

/// Feed template for `tab`. Identical input always yields identical content.
pub fn feed_content(tab: TabId) -> FeedContent {
    match tab {
        TabId::Activity => FeedContent::Timeline {
            entries: vec![
                TimelineEntry {
                    title: "CFO Blocking Q1 Budget",
                    icon: TimelineIcon::Warning,
                    assignee: Some("Sobhan Rabbani"),
                    time_ago: "1 hour ago",
                    badge: Some("Due: Feb 18"),
                    summary: AI_SUMMARY,
                    tags: vec![
                        tag("risk", "Deal at risk"),
                        tag("purple", "Needs ROI proof by Friday"),
                    ],
                    actions: [
                        cta("Schedule Call", FeedCta::ScheduleCall, false),
                        cta("Send ROI", FeedCta::SendRoi, true),
                    ],
                },
                TimelineEntry {
                    title: "Share TechCorp Case Study",
                    icon: TimelineIcon::Sparkle,
                    assignee: None,
                    time_ago: "3 hours ago",
                    badge: Some("89% match"),
                    summary: AI_SUMMARY,
                    tags: vec![tag("black", "AI Recommended"), tag("green", "High Impact")],
                    actions: [
                        cta("View Case Study", FeedCta::ViewCaseStudy, false),
                        cta("Email To David", FeedCta::EmailDavid, true),
                    ],
                },
                TimelineEntry {
                    title: "Competitor Mentioned: LogixFlow",
                    icon: TimelineIcon::Phone,
                    assignee: Some("Sarah Sanders (Ops Dir)"),
                    time_ago: "4 hours ago",
                    badge: None,
                    summary: AI_SUMMARY,
                    tags: vec![tag("red-badge", "2-week setup vs our 8 weeks")],
                    actions: [
                        cta("LogixFlow", FeedCta::LogixFlow, false),
                        cta("Request Intro", FeedCta::RequestIntro, true),
                    ],
                },
            ],
            end_text: "End of activity, Feb 7, 2026",
        },
        TabId::Files => FeedContent::Empty {
            title: "Files",
            body: "All shared files for this deal will appear here.",
            cta: cta("Upload File", FeedCta::UploadFile, true),
        },
        TabId::Reminders => FeedContent::Empty {
            title: "Reminders",
            body: "Set reminders for follow-ups and important dates.",
            cta: cta("Add Reminder", FeedCta::AddReminder, true),
        },
        TabId::AiInsights => FeedContent::Insights {
            headline: "Deal Health Score: 72%",
            summary: "Based on recent activity patterns, this deal has a moderate-to-high probability of closing. Key factors include stakeholder engagement and consistent communication.",
            metrics: vec![
                Metric {
                    value: "8",
                    label: "Touchpoints",
                },
                Metric {
                    value: "3",
                    label: "Stakeholders",
                },
                Metric {
                    value: "12",
                    label: "Days Active",
                },
            ],
            recommendations: vec![
                Recommendation {
                    tone: "success",
                    title: "Send ROI documentation",
                    description: "CFO has requested financial justification",
                    impact: "High Impact",
                },
                Recommendation {
                    tone: "warning",
                    title: "Address competitor concerns",
                    description: "LogixFlow was mentioned in recent call",
                    impact: "Medium Impact",
                },
            ],
        },
    }
}
