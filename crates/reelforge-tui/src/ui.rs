//! Rendering routines for the ReelForge TUI.

use crate::app::{App, SettingsSection, Tab};
use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{
    BarChart, Block, BorderType, Borders, Paragraph, Row, Sparkline, Table, Wrap,
};
use reelforge_core::metrics::{format_count, format_percent, format_revenue, week_totals};
use reelforge_core::{ContentKind, ContentStyle, ProjectStatus, StatCard, Template};

// ── Theme colors (dark mode) ──────────────────────────────────────────

const PRIMARY: Color = Color::Rgb(139, 92, 246); // #8B5CF6
const SECONDARY: Color = Color::Rgb(236, 72, 153); // #EC4899
const TEXT: Color = Color::Rgb(238, 238, 238); // #eeeeee
const TEXT_MUTED: Color = Color::Rgb(128, 128, 128); // #808080
const BORDER: Color = Color::Rgb(60, 60, 60); // #3c3c3c
const BORDER_ACTIVE: Color = Color::Rgb(139, 92, 246); // #8B5CF6
const GREEN: Color = Color::Rgb(120, 220, 140);
const RED: Color = Color::Rgb(255, 110, 110);
const YELLOW: Color = Color::Rgb(229, 192, 123);
const BLUE: Color = Color::Rgb(97, 175, 239);

const SIDEBAR_WIDTH: u16 = 20;

const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Draw the entire TUI frame.
pub fn draw(frame: &mut Frame<'_>, app: &mut App) {
    let area = frame.area();

    let root = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),    // body
            Constraint::Length(1), // status bar
        ])
        .split(area);

    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(SIDEBAR_WIDTH), Constraint::Min(0)])
        .split(root[0]);

    draw_sidebar(frame, app, body[0]);
    match app.tab {
        Tab::Dashboard => draw_dashboard(frame, app, body[1]),
        Tab::Projects => draw_projects(frame, app, body[1]),
        Tab::Generator => draw_generator(frame, app, body[1]),
        Tab::Analytics => draw_analytics(frame, app, body[1]),
        Tab::Templates => draw_templates(frame, app, body[1]),
        Tab::Settings => draw_settings(frame, app, body[1]),
    }
    draw_status_bar(frame, app, root[1]);
}

/// Draw the navigation sidebar with one entry per screen.
fn draw_sidebar(frame: &mut Frame<'_>, app: &App, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(BORDER))
        .title(Span::styled(
            " ReelForge ",
            Style::default().fg(PRIMARY).add_modifier(Modifier::BOLD),
        ));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let mut lines: Vec<Line<'_>> = vec![Line::from("")];
    for (index, tab) in Tab::ALL.iter().enumerate() {
        let active = *tab == app.tab;
        let marker = if active { "▌ " } else { "  " };
        let style = if active {
            Style::default().fg(PRIMARY).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(TEXT_MUTED)
        };
        lines.push(Line::from(vec![
            Span::styled(marker, Style::default().fg(PRIMARY)),
            Span::styled(format!("{} {}", index + 1, tab.label()), style),
        ]));
    }
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        format!("  v{VERSION}"),
        Style::default().fg(TEXT_MUTED),
    )));

    frame.render_widget(Paragraph::new(lines), inner);
}

/// Draw the row of headline metric cards across the top of a screen.
fn draw_stat_cards(frame: &mut Frame<'_>, cards: &[StatCard], area: Rect) {
    if cards.is_empty() {
        return;
    }
    let share = 100 / cards.len() as u16;
    let constraints: Vec<Constraint> = cards
        .iter()
        .map(|_| Constraint::Percentage(share))
        .collect();
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(constraints)
        .split(area);

    for (card, col) in cards.iter().zip(cols.iter()) {
        let trend_color = if card.trend_up { GREEN } else { RED };
        let arrow = if card.trend_up { "▲" } else { "▼" };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(BORDER))
            .title(Span::styled(
                format!(" {} ", card.label),
                Style::default().fg(TEXT_MUTED),
            ));
        let inner = block.inner(*col);
        frame.render_widget(block, *col);
        let lines = vec![
            Line::from(Span::styled(
                card.value.clone(),
                Style::default().fg(TEXT).add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                format!("{arrow} {}", card.change),
                Style::default().fg(trend_color),
            )),
        ];
        frame.render_widget(Paragraph::new(lines), inner);
    }
}

/// Style for a status badge.
fn status_style(status: ProjectStatus) -> Style {
    let color = match status {
        ProjectStatus::Published => GREEN,
        ProjectStatus::Processing => YELLOW,
        ProjectStatus::Draft => TEXT_MUTED,
        ProjectStatus::Scheduled => BLUE,
    };
    Style::default().fg(color)
}

/// Draw the dashboard: headline cards, recent videos, and weekly views.
fn draw_dashboard(frame: &mut Frame<'_>, app: &App, area: Rect) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4),  // stat cards
            Constraint::Min(6),     // recent videos
            Constraint::Length(10), // weekly chart
        ])
        .split(area);

    draw_stat_cards(frame, &app.catalog.dashboard_cards, rows[0]);

    let header = Row::new(vec!["Product", "Views", "Engagement", "Status"])
        .style(Style::default().fg(TEXT_MUTED));
    let table_rows: Vec<Row<'_>> = app
        .catalog
        .recent_videos
        .iter()
        .map(|video| {
            Row::new(vec![
                Span::styled(video.product.clone(), Style::default().fg(TEXT)),
                Span::styled(format_count(video.views), Style::default().fg(TEXT)),
                Span::styled(
                    format_percent(video.engagement_pct),
                    Style::default().fg(TEXT),
                ),
                Span::styled(video.status.label(), status_style(video.status)),
            ])
        })
        .collect();
    let table = Table::new(
        table_rows,
        [
            Constraint::Percentage(40),
            Constraint::Percentage(20),
            Constraint::Percentage(20),
            Constraint::Percentage(20),
        ],
    )
    .header(header)
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(BORDER))
            .title(Span::styled(
                " Recent Videos ",
                Style::default().fg(TEXT_MUTED),
            )),
    );
    frame.render_widget(table, rows[1]);

    let data: Vec<(&str, u64)> = app
        .catalog
        .weekly_stats
        .iter()
        .map(|stat| (stat.label.as_str(), stat.views / 1_000))
        .collect();
    let chart = BarChart::default()
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(BORDER))
                .title(Span::styled(
                    " Views This Week (K) ",
                    Style::default().fg(TEXT_MUTED),
                )),
        )
        .data(&data)
        .bar_width(5)
        .bar_gap(2)
        .bar_style(Style::default().fg(PRIMARY))
        .value_style(Style::default().fg(TEXT).bg(PRIMARY));
    frame.render_widget(chart, rows[2]);
}

/// Draw the search box plus filter badge shared by projects and templates.
fn draw_filter_bar(
    frame: &mut Frame<'_>,
    area: Rect,
    search: &str,
    filter_label: &str,
    editing: bool,
) {
    let border_color = if editing { BORDER_ACTIVE } else { BORDER };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(border_color));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let cursor = if editing { "█" } else { "" };
    let search_span = if search.is_empty() && !editing {
        Span::styled("/ to search", Style::default().fg(TEXT_MUTED))
    } else {
        Span::styled(format!("{search}{cursor}"), Style::default().fg(TEXT))
    };
    let line = Line::from(vec![
        Span::styled(" search ", Style::default().fg(TEXT_MUTED)),
        search_span,
        Span::styled("   filter ", Style::default().fg(TEXT_MUTED)),
        Span::styled(
            format!(" {filter_label} "),
            Style::default()
                .fg(Color::Rgb(10, 10, 10))
                .bg(PRIMARY)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled("  f cycles", Style::default().fg(TEXT_MUTED)),
    ]);
    frame.render_widget(Paragraph::new(line), inner);
}

/// Placeholder paragraph shown when a filtered list has no rows.
fn draw_empty_state(frame: &mut Frame<'_>, area: Rect, message: &str) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(BORDER));
    let inner = block.inner(area);
    frame.render_widget(block, area);
    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            format!("  {message}"),
            Style::default().fg(TEXT_MUTED),
        )),
    ];
    frame.render_widget(Paragraph::new(lines), inner);
}

/// Draw the projects screen with its searchable status-filtered table.
fn draw_projects(frame: &mut Frame<'_>, app: &App, area: Rect) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(0)])
        .split(area);

    let filter_label = app
        .project_status
        .map(|status| status.label())
        .unwrap_or("All");
    draw_filter_bar(
        frame,
        rows[0],
        &app.project_search,
        filter_label,
        app.search_editing,
    );

    let projects = app.filtered_projects();
    if projects.is_empty() {
        draw_empty_state(frame, rows[1], "No projects match the current filters");
        return;
    }

    let header = Row::new(vec![
        "Name", "Product", "Status", "Views", "Engagement", "Videos", "Updated",
    ])
    .style(Style::default().fg(TEXT_MUTED));
    let table_rows: Vec<Row<'_>> = projects
        .iter()
        .enumerate()
        .map(|(index, project)| {
            let base = if index == app.selected_project {
                Style::default().fg(TEXT).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(TEXT)
            };
            let row = Row::new(vec![
                Span::styled(project.name.clone(), base),
                Span::styled(project.product.clone(), base.fg(TEXT_MUTED)),
                Span::styled(project.status.label(), status_style(project.status)),
                Span::styled(format_count(project.views), base),
                Span::styled(format_percent(project.engagement_pct), base),
                Span::styled(project.video_count.to_string(), base),
                Span::styled(project.last_updated.clone(), base.fg(TEXT_MUTED)),
            ]);
            if index == app.selected_project {
                row.style(Style::default().bg(Color::Rgb(40, 36, 60)))
            } else {
                row
            }
        })
        .collect();
    let table = Table::new(
        table_rows,
        [
            Constraint::Percentage(26),
            Constraint::Percentage(16),
            Constraint::Percentage(12),
            Constraint::Percentage(10),
            Constraint::Percentage(12),
            Constraint::Percentage(8),
            Constraint::Percentage(16),
        ],
    )
    .header(header)
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(BORDER))
            .title(Span::styled(
                format!(" Projects ({}) ", projects.len()),
                Style::default().fg(TEXT_MUTED),
            )),
    );
    frame.render_widget(table, rows[1]);
}

/// Draw the generator screen: kind/style selectors and the result panel.
fn draw_generator(frame: &mut Frame<'_>, app: &App, area: Rect) {
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
        .split(area);

    let left_rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2 + ContentKind::ALL.len() as u16), // kind selector
            Constraint::Length(3),                                 // style selector
            Constraint::Min(3),                                    // product info
        ])
        .split(cols[0]);

    let kind_block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(BORDER))
        .title(Span::styled(
            " Content Type ",
            Style::default().fg(TEXT_MUTED),
        ));
    let kind_inner = kind_block.inner(left_rows[0]);
    frame.render_widget(kind_block, left_rows[0]);
    let mut kind_lines: Vec<Line<'_>> = Vec::new();
    for (index, kind) in ContentKind::ALL.iter().enumerate() {
        let active = index == app.selected_kind % ContentKind::ALL.len();
        let marker = if active { "▌ " } else { "  " };
        let style = if active {
            Style::default().fg(PRIMARY).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(TEXT)
        };
        kind_lines.push(Line::from(vec![
            Span::styled(marker, Style::default().fg(PRIMARY)),
            Span::styled(kind.label(), style),
            Span::styled(
                format!("  {}", kind.description()),
                Style::default().fg(TEXT_MUTED),
            ),
        ]));
    }
    frame.render_widget(Paragraph::new(kind_lines), kind_inner);

    let style = app.selected_content_style();
    let style_block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(BORDER))
        .title(Span::styled(" Style ", Style::default().fg(TEXT_MUTED)));
    let style_inner = style_block.inner(left_rows[1]);
    frame.render_widget(style_block, left_rows[1]);
    let style_spans: Vec<Span<'_>> = ContentStyle::ALL
        .iter()
        .flat_map(|candidate| {
            let active = *candidate == style;
            let span = if active {
                Span::styled(
                    format!(" {} ", candidate.label()),
                    Style::default()
                        .fg(Color::Rgb(10, 10, 10))
                        .bg(SECONDARY)
                        .add_modifier(Modifier::BOLD),
                )
            } else {
                Span::styled(
                    format!(" {} ", candidate.label()),
                    Style::default().fg(TEXT_MUTED),
                )
            };
            [span, Span::raw(" ")]
        })
        .collect();
    frame.render_widget(Paragraph::new(Line::from(style_spans)), style_inner);

    let info_border = if app.search_editing { BORDER_ACTIVE } else { BORDER };
    let info_block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(info_border))
        .title(Span::styled(
            " Product Info ",
            Style::default().fg(TEXT_MUTED),
        ));
    let info_inner = info_block.inner(left_rows[2]);
    frame.render_widget(info_block, left_rows[2]);
    let info_text = if app.product_info.is_empty() && !app.search_editing {
        Line::from(Span::styled(
            "/ to describe your product",
            Style::default().fg(TEXT_MUTED),
        ))
    } else {
        let cursor = if app.search_editing { "█" } else { "" };
        Line::from(Span::styled(
            format!("{}{cursor}", app.product_info),
            Style::default().fg(TEXT),
        ))
    };
    frame.render_widget(Paragraph::new(info_text).wrap(Wrap { trim: false }), info_inner);

    let result_title = if app.generating {
        format!(" Generating {} ", app.spinner())
    } else {
        " Generated Content ".to_string()
    };
    let result_block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(if app.generating { BORDER_ACTIVE } else { BORDER }))
        .title(Span::styled(result_title, Style::default().fg(TEXT_MUTED)));
    let result_inner = result_block.inner(cols[1]);
    frame.render_widget(result_block, cols[1]);

    let mut result_lines: Vec<Line<'_>> = Vec::new();
    if app.generating {
        result_lines.push(Line::from(""));
        result_lines.push(Line::from(Span::styled(
            format!("  {} working on {}...", app.spinner(), app.selected_content_kind().label()),
            Style::default().fg(SECONDARY),
        )));
    } else if app.generated.is_empty() {
        result_lines.push(Line::from(""));
        result_lines.push(Line::from(Span::styled(
            "  press g to generate content",
            Style::default().fg(TEXT_MUTED),
        )));
    } else {
        for (index, line) in app.generated.iter().enumerate() {
            result_lines.push(Line::from(""));
            result_lines.push(Line::from(vec![
                Span::styled(
                    format!("  {}. ", index + 1),
                    Style::default().fg(PRIMARY).add_modifier(Modifier::BOLD),
                ),
                Span::styled(line.clone(), Style::default().fg(TEXT)),
            ]));
        }
    }
    frame.render_widget(
        Paragraph::new(result_lines).wrap(Wrap { trim: false }),
        result_inner,
    );
}

/// Draw the analytics screen: cards, performance charts, and top videos.
fn draw_analytics(frame: &mut Frame<'_>, app: &App, area: Rect) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4), // stat cards
            Constraint::Length(8), // charts
            Constraint::Min(5),    // top videos
        ])
        .split(area);

    draw_stat_cards(frame, &app.catalog.analytics_cards, rows[0]);

    let charts = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(rows[1]);

    let totals = week_totals(&app.catalog.performance_stats);
    let views: Vec<u64> = app
        .catalog
        .performance_stats
        .iter()
        .map(|stat| stat.views)
        .collect();
    let sparkline = Sparkline::default()
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(BORDER))
                .title(Span::styled(
                    format!(" Views, 7 days (total {}) ", format_count(totals.views)),
                    Style::default().fg(TEXT_MUTED),
                )),
        )
        .data(&views)
        .style(Style::default().fg(PRIMARY));
    frame.render_widget(sparkline, charts[0]);

    let share_block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(BORDER))
        .title(Span::styled(
            " Content Mix ",
            Style::default().fg(TEXT_MUTED),
        ));
    let share_inner = share_block.inner(charts[1]);
    frame.render_widget(share_block, charts[1]);
    let mut share_lines: Vec<Line<'_>> = Vec::new();
    for share in &app.catalog.type_shares {
        let width = share_inner.width.saturating_sub(22).max(10);
        let filled = (u32::from(width) * u32::from(share.percent) / 100) as u16;
        share_lines.push(Line::from(vec![
            Span::styled(format!(" {:<18}", share.name), Style::default().fg(TEXT)),
            Span::styled("█".repeat(filled as usize), Style::default().fg(SECONDARY)),
            Span::styled(
                format!(" {}%", share.percent),
                Style::default().fg(TEXT_MUTED),
            ),
        ]));
    }
    frame.render_widget(Paragraph::new(share_lines), share_inner);

    let header = Row::new(vec![
        "Hook", "Product", "Views", "Engagement", "Shares", "Revenue",
    ])
    .style(Style::default().fg(TEXT_MUTED));
    let table_rows: Vec<Row<'_>> = app
        .catalog
        .top_videos
        .iter()
        .map(|video| {
            Row::new(vec![
                Span::styled(video.hook.clone(), Style::default().fg(TEXT)),
                Span::styled(video.product.clone(), Style::default().fg(TEXT_MUTED)),
                Span::styled(format_count(video.views), Style::default().fg(TEXT)),
                Span::styled(
                    format_percent(video.engagement_pct),
                    Style::default().fg(TEXT),
                ),
                Span::styled(format_count(video.shares), Style::default().fg(TEXT)),
                Span::styled(format_revenue(video.revenue), Style::default().fg(GREEN)),
            ])
        })
        .collect();
    let table = Table::new(
        table_rows,
        [
            Constraint::Percentage(34),
            Constraint::Percentage(16),
            Constraint::Percentage(12),
            Constraint::Percentage(14),
            Constraint::Percentage(10),
            Constraint::Percentage(14),
        ],
    )
    .header(header)
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(BORDER))
            .title(Span::styled(
                " Top Performing Videos ",
                Style::default().fg(TEXT_MUTED),
            )),
    );
    frame.render_widget(table, rows[2]);
}

/// Draw the templates screen: filter bar, list, and detail panel.
fn draw_templates(frame: &mut Frame<'_>, app: &App, area: Rect) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(0)])
        .split(area);

    let filter_label = app
        .template_category
        .map(|category| category.label())
        .unwrap_or("All");
    draw_filter_bar(
        frame,
        rows[0],
        &app.template_search,
        filter_label,
        app.search_editing,
    );

    let templates = app.filtered_templates();
    if templates.is_empty() {
        draw_empty_state(frame, rows[1], "No templates match the current filters");
        return;
    }

    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(45), Constraint::Percentage(55)])
        .split(rows[1]);

    let list_block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(BORDER))
        .title(Span::styled(
            format!(" Templates ({}) ", templates.len()),
            Style::default().fg(TEXT_MUTED),
        ));
    let list_inner = list_block.inner(cols[0]);
    frame.render_widget(list_block, cols[0]);

    let mut list_lines: Vec<Line<'_>> = Vec::new();
    for (index, template) in templates.iter().enumerate() {
        let active = index == app.selected_template;
        let marker = if active { "▌ " } else { "  " };
        let title_style = if active {
            Style::default().fg(PRIMARY).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(TEXT)
        };
        let mut spans = vec![
            Span::styled(marker, Style::default().fg(PRIMARY)),
            Span::styled(template.title.clone(), title_style),
            Span::styled(
                format!("  {}", template.category.label()),
                Style::default().fg(TEXT_MUTED),
            ),
        ];
        if template.trending {
            spans.push(Span::styled("  Trending", Style::default().fg(SECONDARY)));
        }
        list_lines.push(Line::from(spans));
    }
    frame.render_widget(Paragraph::new(list_lines), list_inner);

    if let Some(template) = templates.get(app.selected_template) {
        draw_template_detail(frame, template, cols[1]);
    }
}

/// Draw the detail panel for one template.
fn draw_template_detail(frame: &mut Frame<'_>, template: &Template, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(BORDER))
        .title(Span::styled(
            format!(" {} ", template.title),
            Style::default().fg(PRIMARY).add_modifier(Modifier::BOLD),
        ));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let label = Style::default().fg(TEXT_MUTED);
    let value = Style::default().fg(TEXT);
    let lines = vec![
        Line::from(Span::styled(template.description.clone(), value)),
        Line::from(""),
        Line::from(vec![Span::styled("hook      ", label), Span::styled(template.hook.clone(), value)]),
        Line::from(vec![
            Span::styled("caption   ", label),
            Span::styled(template.caption.clone(), value),
        ]),
        Line::from(vec![
            Span::styled("hashtags  ", label),
            Span::styled(template.hashtags.clone(), Style::default().fg(BLUE)),
        ]),
        Line::from(""),
        Line::from(vec![
            Span::styled("avg views ", label),
            Span::styled(format_count(template.performance.avg_views), value),
            Span::styled("  engagement ", label),
            Span::styled(format_percent(template.performance.avg_engagement_pct), value),
            Span::styled("  conversion ", label),
            Span::styled(format_percent(template.performance.conversion_pct), value),
        ]),
        Line::from(vec![
            Span::styled("rating    ", label),
            Span::styled(format!("{:.1}/5", template.rating), Style::default().fg(YELLOW)),
            Span::styled("  used by ", label),
            Span::styled(format!("{} creators", template.uses), value),
        ]),
    ];
    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), inner);
}

/// Draw the settings screen: section list plus the active section detail.
fn draw_settings(frame: &mut Frame<'_>, app: &App, area: Rect) {
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(24), Constraint::Min(0)])
        .split(area);

    let section_block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(BORDER))
        .title(Span::styled(" Sections ", Style::default().fg(TEXT_MUTED)));
    let section_inner = section_block.inner(cols[0]);
    frame.render_widget(section_block, cols[0]);

    let mut section_lines: Vec<Line<'_>> = Vec::new();
    for (index, section) in SettingsSection::ALL.iter().enumerate() {
        let active = index == app.selected_section % SettingsSection::ALL.len();
        let marker = if active { "▌ " } else { "  " };
        let style = if active {
            Style::default().fg(PRIMARY).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(TEXT_MUTED)
        };
        section_lines.push(Line::from(vec![
            Span::styled(marker, Style::default().fg(PRIMARY)),
            Span::styled(section.label(), style),
        ]));
    }
    frame.render_widget(Paragraph::new(section_lines), section_inner);

    let section = app.settings_section();
    let detail_block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(BORDER))
        .title(Span::styled(
            format!(" {} ", section.label()),
            Style::default().fg(TEXT_MUTED),
        ));
    let detail_inner = detail_block.inner(cols[1]);
    frame.render_widget(detail_block, cols[1]);

    let lines = match section {
        SettingsSection::Profile => profile_lines(app),
        SettingsSection::Notifications => notification_lines(app),
        SettingsSection::Integrations => integration_lines(app),
        SettingsSection::Billing => billing_lines(),
        SettingsSection::Security => security_lines(),
        SettingsSection::Preferences => preference_lines(app),
    };
    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), detail_inner);
}

fn profile_lines(app: &App) -> Vec<Line<'_>> {
    let label = Style::default().fg(TEXT_MUTED);
    let value = Style::default().fg(TEXT);
    let profile = &app.config.profile;
    vec![
        Line::from(vec![Span::styled("name      ", label), Span::styled(&profile.full_name, value)]),
        Line::from(vec![Span::styled("email     ", label), Span::styled(&profile.email, value)]),
        Line::from(vec![
            Span::styled("business  ", label),
            Span::styled(&profile.business_name, value),
        ]),
        Line::from(vec![Span::styled("timezone  ", label), Span::styled(&profile.timezone, value)]),
        Line::from(""),
        Line::from(Span::styled(&profile.bio, Style::default().fg(TEXT_MUTED))),
    ]
}

fn notification_lines(app: &App) -> Vec<Line<'_>> {
    let notifications = &app.config.notifications;
    let rows = [
        ("Email notifications", notifications.email),
        ("Push notifications", notifications.push),
        ("SMS alerts", notifications.sms),
        ("Marketing updates", notifications.marketing),
    ];
    rows.iter()
        .enumerate()
        .map(|(index, (name, enabled))| toggle_line(*name, *enabled, index == app.selected_toggle))
        .collect()
}

fn integration_lines(app: &App) -> Vec<Line<'_>> {
    app.config
        .integrations
        .iter()
        .enumerate()
        .map(|(index, integration)| {
            let active = index == app.selected_toggle;
            let marker = if active { "▌ " } else { "  " };
            let state = if integration.connected {
                Span::styled(" Connected ", Style::default().fg(GREEN))
            } else {
                Span::styled(" Connect ", Style::default().fg(TEXT_MUTED))
            };
            Line::from(vec![
                Span::styled(marker, Style::default().fg(PRIMARY)),
                Span::styled(
                    format!("{:<16}", integration.name),
                    Style::default().fg(TEXT),
                ),
                state,
                Span::styled(
                    format!("  {}", integration.description),
                    Style::default().fg(TEXT_MUTED),
                ),
            ])
        })
        .collect()
}

fn billing_lines() -> Vec<Line<'static>> {
    let label = Style::default().fg(TEXT_MUTED);
    vec![
        Line::from(vec![
            Span::styled("plan      ", label),
            Span::styled(
                " Pro ",
                Style::default()
                    .fg(Color::Rgb(10, 10, 10))
                    .bg(PRIMARY)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled("  $49/month", Style::default().fg(TEXT)),
        ]),
        Line::from(vec![
            Span::styled("renews    ", label),
            Span::styled("on the 1st of each month", Style::default().fg(TEXT)),
        ]),
        Line::from(vec![
            Span::styled("payment   ", label),
            Span::styled("Visa ending in 4242", Style::default().fg(TEXT)),
        ]),
    ]
}

fn security_lines() -> Vec<Line<'static>> {
    let label = Style::default().fg(TEXT_MUTED);
    vec![
        Line::from(vec![
            Span::styled("password  ", label),
            Span::styled("last changed 3 months ago", Style::default().fg(TEXT)),
        ]),
        Line::from(vec![
            Span::styled("2FA       ", label),
            Span::styled("enabled", Style::default().fg(GREEN)),
        ]),
        Line::from(vec![
            Span::styled("sessions  ", label),
            Span::styled("2 active devices", Style::default().fg(TEXT)),
        ]),
    ]
}

fn preference_lines(app: &App) -> Vec<Line<'_>> {
    let label = Style::default().fg(TEXT_MUTED);
    let mut lines = vec![toggle_line(
        "Dark mode",
        app.config.preferences.dark_mode,
        app.selected_toggle == 0,
    )];
    lines.push(Line::from(vec![
        Span::styled("  language  ", label),
        Span::styled(&app.config.preferences.language, Style::default().fg(TEXT)),
    ]));
    lines
}

/// Render one checkbox-style toggle row.
fn toggle_line(name: &str, enabled: bool, selected: bool) -> Line<'_> {
    let marker = if selected { "▌ " } else { "  " };
    let state = if enabled {
        Span::styled("[x] ", Style::default().fg(GREEN))
    } else {
        Span::styled("[ ] ", Style::default().fg(TEXT_MUTED))
    };
    Line::from(vec![
        Span::styled(marker, Style::default().fg(PRIMARY)),
        state,
        Span::styled(name.to_string(), Style::default().fg(TEXT)),
    ])
}

/// Draw the one-line status bar with contextual key hints.
fn draw_status_bar(frame: &mut Frame<'_>, app: &App, area: Rect) {
    let hints = if app.search_editing {
        "enter/esc done editing"
    } else {
        match app.tab {
            Tab::Projects | Tab::Templates => "tab screens  / search  f filter  ↑↓ select  q quit",
            Tab::Generator => "tab screens  ↑↓ type  s style  / info  g generate  q quit",
            Tab::Settings => "tab screens  ←→ section  ↑↓ row  space toggle  q quit",
            _ => "tab screens  1-6 jump  q quit",
        }
    };
    let line = Line::from(vec![
        Span::styled(format!(" {} ", app.status), Style::default().fg(PRIMARY)),
        Span::styled(hints, Style::default().fg(TEXT_MUTED)),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}
