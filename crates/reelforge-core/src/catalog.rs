//! Immutable startup catalog backing every screen.
//!
//! Records are defined once when the catalog is built and never mutated;
//! the filter engine only ever borrows them.

use crate::types::{
    ContentKind, DailyStat, Project, ProjectStatus, StatCard, Template, TemplateCategory,
    TemplatePerformance, TopVideo, TypeShare, VideoSummary,
};
use chrono::NaiveDate;
use log::debug;

/// Hook lines the generator draws from.
pub const HOOK_POOL: [&str; 5] = [
    "This product is actually changing lives (and no one talks about it)",
    "POV: You find out this $12 item does what $200 items can't",
    "Why is everyone gate-keeping this product??",
    "This is either genius or completely stupid... you decide",
    "TikTok shop finds that actually work (not sponsored)",
];

/// Caption lines the generator draws from.
pub const CAPTION_POOL: [&str; 5] = [
    "Obsessed with these! Got them last week and literally can't stop using them",
    "Ok but why did no one tell me about these sooner? Game changer fr",
    "These are flying off TikTok shop for a reason... just ordered 3 more",
    "Not me becoming that person who recommends this to everyone",
    "This purchase was so worth it, my friends keep asking where I got it",
];

/// Hashtag sets the generator draws from.
pub const HASHTAG_POOL: [&str; 5] = [
    "#tiktokmademebuyit #musthave #viral #trending #shopnow",
    "#tiktokfinds #amazingproducts #worthit #obsessed #recommend",
    "#gamechanger #lifehack #bestpurchase #trending #fyp",
    "#tiktokviral #shophaul #amazing #cantlivewithout #musttry",
    "#discoverypage #shopfinds #wortheveryppenny #recommend #viral",
];

/// Return the content pool for a generator kind.
pub fn content_pool(kind: ContentKind) -> &'static [&'static str] {
    match kind {
        ContentKind::Hooks => &HOOK_POOL,
        ContentKind::Captions => &CAPTION_POOL,
        ContentKind::Hashtags => &HASHTAG_POOL,
    }
}

/// The full in-memory dataset loaded at startup.
#[derive(Debug, Clone)]
pub struct Catalog {
    /// Video automation projects.
    pub projects: Vec<Project>,
    /// Pre-built content templates.
    pub templates: Vec<Template>,
    /// Recent videos shown on the dashboard.
    pub recent_videos: Vec<VideoSummary>,
    /// Top-performing videos shown on analytics.
    pub top_videos: Vec<TopVideo>,
    /// Last week of dashboard stats, keyed by weekday.
    pub weekly_stats: Vec<DailyStat>,
    /// Last week of analytics stats, keyed by date.
    pub performance_stats: Vec<DailyStat>,
    /// Output share per content type.
    pub type_shares: Vec<TypeShare>,
    /// Headline cards for the dashboard.
    pub dashboard_cards: Vec<StatCard>,
    /// Headline cards for analytics.
    pub analytics_cards: Vec<StatCard>,
}

impl Catalog {
    /// Build the sample catalog.
    pub fn sample() -> Self {
        let catalog = Self {
            projects: sample_projects(),
            templates: sample_templates(),
            recent_videos: sample_recent_videos(),
            top_videos: sample_top_videos(),
            weekly_stats: sample_weekly_stats(),
            performance_stats: sample_performance_stats(),
            type_shares: sample_type_shares(),
            dashboard_cards: sample_dashboard_cards(),
            analytics_cards: sample_analytics_cards(),
        };
        debug!(
            "catalog built (projects={}, templates={})",
            catalog.projects.len(),
            catalog.templates.len()
        );
        catalog
    }
}

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid catalog date")
}

fn sample_projects() -> Vec<Project> {
    vec![
        Project {
            id: 1,
            name: "Summer Collection Launch".to_string(),
            product: "Fashion Items".to_string(),
            status: ProjectStatus::Published,
            views: 45_200,
            engagement_pct: 12.8,
            video_count: 8,
            created_at: date(2024, 1, 15),
            last_updated: "2 hours ago".to_string(),
        },
        Project {
            id: 2,
            name: "Tech Gadgets Promo".to_string(),
            product: "Electronics".to_string(),
            status: ProjectStatus::Processing,
            views: 28_700,
            engagement_pct: 9.4,
            video_count: 12,
            created_at: date(2024, 1, 14),
            last_updated: "5 minutes ago".to_string(),
        },
        Project {
            id: 3,
            name: "Home & Garden Essentials".to_string(),
            product: "Home Decor".to_string(),
            status: ProjectStatus::Draft,
            views: 0,
            engagement_pct: 0.0,
            video_count: 6,
            created_at: date(2024, 1, 13),
            last_updated: "1 day ago".to_string(),
        },
        Project {
            id: 4,
            name: "Beauty Must-Haves".to_string(),
            product: "Cosmetics".to_string(),
            status: ProjectStatus::Scheduled,
            views: 0,
            engagement_pct: 0.0,
            video_count: 15,
            created_at: date(2024, 1, 12),
            last_updated: "3 hours ago".to_string(),
        },
    ]
}

fn sample_templates() -> Vec<Template> {
    vec![
        Template {
            id: 1,
            title: "Controversial Product Reveal".to_string(),
            category: TemplateCategory::Controversial,
            description: "Perfect for products that solve common problems in unexpected ways"
                .to_string(),
            hook: "This $12 item is replacing $200 products (and companies hate it)".to_string(),
            caption: "I was skeptical at first but this literally changed everything for me. \
                      Got mine from TikTok shop and now I understand the hype"
                .to_string(),
            hashtags: "#tiktokmademebuyit #gamechanger #musthave #viral #shopnow".to_string(),
            performance: TemplatePerformance {
                avg_views: 2_300_000,
                avg_engagement_pct: 15.2,
                conversion_pct: 8.9,
            },
            rating: 4.8,
            uses: 1420,
            trending: true,
        },
        Template {
            id: 2,
            title: "First Person Experience".to_string(),
            category: TemplateCategory::Testimonial,
            description: "Authentic testimonial style that builds trust and relatability"
                .to_string(),
            hook: "POV: You find the product everyone's been gatekeeping".to_string(),
            caption: "Okay but why did nobody tell me about this sooner?? Been using it for a \
                      week and I'm obsessed. Friends keep asking where I got it"
                .to_string(),
            hashtags: "#obsessed #hiddengem #worthit #recommend #tiktokviral".to_string(),
            performance: TemplatePerformance {
                avg_views: 1_800_000,
                avg_engagement_pct: 12.7,
                conversion_pct: 11.3,
            },
            rating: 4.9,
            uses: 892,
            trending: false,
        },
        Template {
            id: 3,
            title: "Mystery Hook Builder".to_string(),
            category: TemplateCategory::Curiosity,
            description: "Creates intrigue and drives engagement through curiosity gaps"
                .to_string(),
            hook: "The reason everyone's buying this (and not talking about it)".to_string(),
            caption: "I finally understand why this keeps selling out. Not even sponsored, just \
                      genuinely impressed by how well this works"
                .to_string(),
            hashtags: "#mystery #sellout #impressed #genuine #tiktokmademebuyit".to_string(),
            performance: TemplatePerformance {
                avg_views: 2_100_000,
                avg_engagement_pct: 18.4,
                conversion_pct: 7.2,
            },
            rating: 4.7,
            uses: 756,
            trending: true,
        },
        Template {
            id: 4,
            title: "Problem-Solution Reveal".to_string(),
            category: TemplateCategory::Trending,
            description: "Highlights a common problem and presents your product as the solution"
                .to_string(),
            hook: "This is either genius or completely stupid... you decide".to_string(),
            caption: "Took a chance on this and honestly? Best purchase I've made this year. \
                      The results speak for themselves"
                .to_string(),
            hashtags: "#genius #bestpurchase #results #tookachance #speakforthemselves"
                .to_string(),
            performance: TemplatePerformance {
                avg_views: 1_900_000,
                avg_engagement_pct: 14.8,
                conversion_pct: 9.7,
            },
            rating: 4.6,
            uses: 634,
            trending: true,
        },
    ]
}

fn sample_recent_videos() -> Vec<VideoSummary> {
    vec![
        VideoSummary {
            id: 1,
            product: "Wireless Earbuds".to_string(),
            views: 24_500,
            engagement_pct: 8.9,
            status: ProjectStatus::Published,
        },
        VideoSummary {
            id: 2,
            product: "Smart Watch".to_string(),
            views: 18_200,
            engagement_pct: 12.1,
            status: ProjectStatus::Processing,
        },
        VideoSummary {
            id: 3,
            product: "Phone Case".to_string(),
            views: 32_100,
            engagement_pct: 6.7,
            status: ProjectStatus::Published,
        },
        VideoSummary {
            id: 4,
            product: "LED Strip Lights".to_string(),
            views: 45_800,
            engagement_pct: 15.3,
            status: ProjectStatus::Scheduled,
        },
    ]
}

fn sample_top_videos() -> Vec<TopVideo> {
    vec![
        TopVideo {
            id: 1,
            hook: "This $15 gadget is replacing $200 tools...".to_string(),
            product: "Multi-Tool Kit".to_string(),
            views: 2_400_000,
            engagement_pct: 15.8,
            shares: 12_400,
            comments: 8_900,
            revenue: 3_240,
        },
        TopVideo {
            id: 2,
            hook: "POV: You discover what rich people buy".to_string(),
            product: "Luxury Organizer".to_string(),
            views: 1_800_000,
            engagement_pct: 12.3,
            shares: 9_200,
            comments: 6_700,
            revenue: 2_150,
        },
        TopVideo {
            id: 3,
            hook: "Why is TikTok hiding this from you?".to_string(),
            product: "Smart Home Device".to_string(),
            views: 1_500_000,
            engagement_pct: 18.2,
            shares: 11_800,
            comments: 9_500,
            revenue: 1_890,
        },
    ]
}

fn sample_weekly_stats() -> Vec<DailyStat> {
    let days = [
        ("Mon", 1_200u64, 85u64),
        ("Tue", 1_900, 92),
        ("Wed", 2_800, 78),
        ("Thu", 3_900, 95),
        ("Fri", 4_800, 88),
        ("Sat", 6_200, 96),
        ("Sun", 7_500, 89),
    ];
    days.into_iter()
        .map(|(label, views, engagement)| DailyStat {
            label: label.to_string(),
            views,
            engagement,
            shares: 0,
            comments: 0,
        })
        .collect()
}

fn sample_performance_stats() -> Vec<DailyStat> {
    let days = [
        ("01/15", 12_000u64, 850u64, 120u64, 95u64),
        ("01/16", 18_500, 1_200, 180, 145),
        ("01/17", 25_600, 1_800, 260, 210),
        ("01/18", 32_400, 2_100, 320, 275),
        ("01/19", 28_900, 1_950, 290, 240),
        ("01/20", 41_200, 2_800, 410, 350),
        ("01/21", 38_700, 2_600, 385, 320),
    ];
    days.into_iter()
        .map(|(label, views, engagement, shares, comments)| DailyStat {
            label: label.to_string(),
            views,
            engagement,
            shares,
            comments,
        })
        .collect()
}

fn sample_type_shares() -> Vec<TypeShare> {
    vec![
        TypeShare {
            name: "Controversial Hooks".to_string(),
            percent: 45,
        },
        TypeShare {
            name: "Testimonial Style".to_string(),
            percent: 30,
        },
        TypeShare {
            name: "Curiosity Driven".to_string(),
            percent: 15,
        },
        TypeShare {
            name: "Direct Product".to_string(),
            percent: 10,
        },
    ]
}

fn sample_dashboard_cards() -> Vec<StatCard> {
    vec![
        StatCard {
            label: "Total Views".to_string(),
            value: "284.5K".to_string(),
            change: "+12.5%".to_string(),
            trend_up: true,
        },
        StatCard {
            label: "Engagement Rate".to_string(),
            value: "9.2%".to_string(),
            change: "+2.1%".to_string(),
            trend_up: true,
        },
        StatCard {
            label: "Videos Created".to_string(),
            value: "156".to_string(),
            change: "+8".to_string(),
            trend_up: true,
        },
        StatCard {
            label: "Revenue Generated".to_string(),
            value: "$3,248".to_string(),
            change: "+18.9%".to_string(),
            trend_up: true,
        },
    ]
}

fn sample_analytics_cards() -> Vec<StatCard> {
    vec![
        StatCard {
            label: "Total Views".to_string(),
            value: "2.8M".to_string(),
            change: "+15.2%".to_string(),
            trend_up: true,
        },
        StatCard {
            label: "Avg Engagement".to_string(),
            value: "14.8%".to_string(),
            change: "+2.3%".to_string(),
            trend_up: true,
        },
        StatCard {
            label: "Total Shares".to_string(),
            value: "156K".to_string(),
            change: "-3.1%".to_string(),
            trend_up: false,
        },
        StatCard {
            label: "Revenue Generated".to_string(),
            value: "$24.6K".to_string(),
            change: "+28.4%".to_string(),
            trend_up: true,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter::{Query, filter_records};
    use pretty_assertions::assert_eq;

    #[test]
    fn sample_catalog_has_every_dataset() {
        let catalog = Catalog::sample();
        assert_eq!(catalog.projects.len(), 4);
        assert_eq!(catalog.templates.len(), 4);
        assert_eq!(catalog.recent_videos.len(), 4);
        assert_eq!(catalog.top_videos.len(), 3);
        assert_eq!(catalog.weekly_stats.len(), 7);
        assert_eq!(catalog.performance_stats.len(), 7);
    }

    #[test]
    fn projects_filter_by_status_tag() {
        let catalog = Catalog::sample();
        let drafts = filter_records(&catalog.projects, &Query::tagged("draft"));
        let names: Vec<&str> = drafts.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["Home & Garden Essentials"]);
    }

    #[test]
    fn templates_filter_by_description_text() {
        let catalog = Catalog::sample();
        let hits = filter_records(&catalog.templates, &Query::search("curiosity gaps"));
        let titles: Vec<&str> = hits.iter().map(|t| t.title.as_str()).collect();
        assert_eq!(titles, vec!["Mystery Hook Builder"]);
    }

    #[test]
    fn every_kind_has_a_pool_of_five() {
        for kind in ContentKind::ALL {
            assert_eq!(content_pool(kind).len(), 5);
        }
    }
}
