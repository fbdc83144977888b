//! Application state for the ReelForge TUI.

use log::{debug, info};
use reelforge_config::ReelForgeConfig;
use reelforge_core::{
    Catalog, ContentKind, ContentStyle, GeneratorSettings, Project, ProjectStatus, Query,
    TagFilter, Template, TemplateCategory, filter_records,
};
use std::time::Duration;

/// Screens reachable from the sidebar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tab {
    /// Overview with headline cards and recent videos.
    Dashboard,
    /// Video project list with search and status filter.
    Projects,
    /// Simulated content generator.
    Generator,
    /// Performance charts and top videos.
    Analytics,
    /// Template library with search and category filter.
    Templates,
    /// Profile, notification, and integration settings.
    Settings,
}

impl Tab {
    /// All tabs in sidebar order.
    pub const ALL: [Tab; 6] = [
        Tab::Dashboard,
        Tab::Projects,
        Tab::Generator,
        Tab::Analytics,
        Tab::Templates,
        Tab::Settings,
    ];

    /// Sidebar label for the tab.
    pub fn label(&self) -> &'static str {
        match self {
            Tab::Dashboard => "Dashboard",
            Tab::Projects => "Projects",
            Tab::Generator => "Generator",
            Tab::Analytics => "Analytics",
            Tab::Templates => "Templates",
            Tab::Settings => "Settings",
        }
    }
}

/// Settings screen sections.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingsSection {
    /// Account identity and business details.
    Profile,
    /// Email, push, SMS, and marketing toggles.
    Notifications,
    /// Publishing platform connections.
    Integrations,
    /// Plan and payment details.
    Billing,
    /// Password, 2FA, and active sessions.
    Security,
    /// Appearance and language.
    Preferences,
}

impl SettingsSection {
    /// All sections in display order.
    pub const ALL: [SettingsSection; 6] = [
        SettingsSection::Profile,
        SettingsSection::Notifications,
        SettingsSection::Integrations,
        SettingsSection::Billing,
        SettingsSection::Security,
        SettingsSection::Preferences,
    ];

    /// Section label shown in the settings sidebar.
    pub fn label(&self) -> &'static str {
        match self {
            SettingsSection::Profile => "Profile",
            SettingsSection::Notifications => "Notifications",
            SettingsSection::Integrations => "Integrations",
            SettingsSection::Billing => "Billing",
            SettingsSection::Security => "Security",
            SettingsSection::Preferences => "Preferences",
        }
    }
}

/// Top-level application state for the TUI.
pub struct App {
    /// Static record catalog backing every screen.
    pub catalog: Catalog,
    /// Effective configuration.
    pub config: ReelForgeConfig,
    /// Currently visible screen.
    pub tab: Tab,
    /// Whether keystrokes go into the active search box.
    pub search_editing: bool,
    /// Project search text.
    pub project_search: String,
    /// Active project status filter, if narrowed.
    pub project_status: Option<ProjectStatus>,
    /// Selected row on the projects screen.
    pub selected_project: usize,
    /// Template search text.
    pub template_search: String,
    /// Active template category filter, if narrowed.
    pub template_category: Option<TemplateCategory>,
    /// Selected row on the templates screen.
    pub selected_template: usize,
    /// Selected content kind on the generator screen.
    pub selected_kind: usize,
    /// Selected content style on the generator screen.
    pub selected_style: usize,
    /// Product info free text for the generator.
    pub product_info: String,
    /// Whether a generation run is in flight.
    pub generating: bool,
    /// Lines from the last completed generation run.
    pub generated: Vec<String>,
    /// Selected section on the settings screen.
    pub selected_section: usize,
    /// Selected toggle row within the active settings section.
    pub selected_toggle: usize,
    /// Tick counter driving the busy spinner.
    pub tick: u64,
    /// Status line text.
    pub status: String,
}

impl App {
    /// Create the application state from a catalog and effective config.
    pub fn new(catalog: Catalog, config: ReelForgeConfig) -> Self {
        info!(
            "app state created (projects={}, templates={})",
            catalog.projects.len(),
            catalog.templates.len()
        );
        Self {
            catalog,
            config,
            tab: Tab::Dashboard,
            search_editing: false,
            project_search: String::new(),
            project_status: None,
            selected_project: 0,
            template_search: String::new(),
            template_category: None,
            selected_template: 0,
            selected_kind: 0,
            selected_style: 0,
            product_info: String::new(),
            generating: false,
            generated: Vec::new(),
            selected_section: 0,
            selected_toggle: 0,
            tick: 0,
            status: "ready".to_string(),
        }
    }

    /// Switch to the next tab in sidebar order.
    pub fn next_tab(&mut self) {
        let index = Tab::ALL.iter().position(|tab| *tab == self.tab).unwrap_or(0);
        self.set_tab(Tab::ALL[(index + 1) % Tab::ALL.len()]);
    }

    /// Switch to the previous tab in sidebar order.
    pub fn prev_tab(&mut self) {
        let index = Tab::ALL.iter().position(|tab| *tab == self.tab).unwrap_or(0);
        self.set_tab(Tab::ALL[(index + Tab::ALL.len() - 1) % Tab::ALL.len()]);
    }

    /// Switch to a specific tab, leaving search state intact.
    pub fn set_tab(&mut self, tab: Tab) {
        debug!("switching tab (to={})", tab.label());
        self.tab = tab;
        self.search_editing = false;
    }

    /// Effective query for the projects screen.
    pub fn project_query(&self) -> Query {
        Query {
            search: self.project_search.clone(),
            tag: match self.project_status {
                Some(status) => TagFilter::Tag(status.as_str().to_string()),
                None => TagFilter::All,
            },
        }
    }

    /// Effective query for the templates screen.
    pub fn template_query(&self) -> Query {
        Query {
            search: self.template_search.clone(),
            tag: match self.template_category {
                Some(category) => TagFilter::Tag(category.as_str().to_string()),
                None => TagFilter::All,
            },
        }
    }

    /// Projects matching the current search and status filter, in catalog order.
    pub fn filtered_projects(&self) -> Vec<&Project> {
        filter_records(&self.catalog.projects, &self.project_query())
    }

    /// Templates matching the current search and category filter, in catalog order.
    pub fn filtered_templates(&self) -> Vec<&Template> {
        filter_records(&self.catalog.templates, &self.template_query())
    }

    /// Cycle the project status filter: all, then each status in order.
    pub fn cycle_project_status(&mut self) {
        self.project_status = match self.project_status {
            None => Some(ProjectStatus::ALL[0]),
            Some(current) => ProjectStatus::ALL
                .iter()
                .position(|status| *status == current)
                .and_then(|index| ProjectStatus::ALL.get(index + 1))
                .copied(),
        };
        self.selected_project = 0;
        debug!(
            "project status filter cycled (status={:?})",
            self.project_status.map(|status| status.as_str())
        );
    }

    /// Cycle the template category filter: all, then each category in order.
    pub fn cycle_template_category(&mut self) {
        self.template_category = match self.template_category {
            None => Some(TemplateCategory::ALL[0]),
            Some(current) => TemplateCategory::ALL
                .iter()
                .position(|category| *category == current)
                .and_then(|index| TemplateCategory::ALL.get(index + 1))
                .copied(),
        };
        self.selected_template = 0;
        debug!(
            "template category filter cycled (category={:?})",
            self.template_category.map(|category| category.as_str())
        );
    }

    /// Content kind currently selected on the generator screen.
    pub fn selected_content_kind(&self) -> ContentKind {
        ContentKind::ALL[self.selected_kind % ContentKind::ALL.len()]
    }

    /// Content style currently selected on the generator screen.
    pub fn selected_content_style(&self) -> ContentStyle {
        ContentStyle::ALL[self.selected_style % ContentStyle::ALL.len()]
    }

    /// Generator settings derived from the effective config.
    pub fn generator_settings(&self) -> GeneratorSettings {
        GeneratorSettings {
            delay: Duration::from_millis(self.config.generator.delay_ms),
            batch_size: self.config.generator.batch_size,
            seed: self.config.generator.seed,
        }
    }

    /// Active settings section.
    pub fn settings_section(&self) -> SettingsSection {
        SettingsSection::ALL[self.selected_section % SettingsSection::ALL.len()]
    }

    /// Number of toggle rows in the active settings section.
    pub fn toggle_count(&self) -> usize {
        match self.settings_section() {
            SettingsSection::Notifications => 4,
            SettingsSection::Integrations => self.config.integrations.len(),
            SettingsSection::Preferences => 1,
            _ => 0,
        }
    }

    /// Flip the selected toggle in the active settings section.
    pub fn toggle_selected(&mut self) {
        match self.settings_section() {
            SettingsSection::Notifications => {
                let notifications = &mut self.config.notifications;
                match self.selected_toggle {
                    0 => notifications.email = !notifications.email,
                    1 => notifications.push = !notifications.push,
                    2 => notifications.sms = !notifications.sms,
                    _ => notifications.marketing = !notifications.marketing,
                }
                self.push_status("notification preference updated");
            }
            SettingsSection::Integrations => {
                if let Some(integration) = self.config.integrations.get_mut(self.selected_toggle) {
                    integration.connected = !integration.connected;
                    let state = if integration.connected {
                        "connected"
                    } else {
                        "disconnected"
                    };
                    self.status = format!("{} {state}", integration.name);
                }
            }
            SettingsSection::Preferences => {
                self.config.preferences.dark_mode = !self.config.preferences.dark_mode;
                self.push_status("appearance updated");
            }
            _ => {}
        }
    }

    /// Move the selection on the active list screen.
    pub fn move_selection(&mut self, delta: i16) {
        match self.tab {
            Tab::Projects => {
                let len = self.filtered_projects().len();
                self.selected_project = step(self.selected_project, delta, len);
            }
            Tab::Templates => {
                let len = self.filtered_templates().len();
                self.selected_template = step(self.selected_template, delta, len);
            }
            Tab::Generator => {
                self.selected_kind = step(self.selected_kind, delta, ContentKind::ALL.len());
            }
            Tab::Settings => {
                let toggles = self.toggle_count();
                if toggles > 0 {
                    self.selected_toggle = step(self.selected_toggle, delta, toggles);
                }
            }
            _ => {}
        }
    }

    /// Move the settings section selection.
    pub fn move_section(&mut self, delta: i16) {
        self.selected_section = step(self.selected_section, delta, SettingsSection::ALL.len());
        self.selected_toggle = 0;
    }

    /// Record the result of a generation run.
    pub fn finish_generation(&mut self, lines: Vec<String>) {
        info!("generation finished (lines={})", lines.len());
        self.generating = false;
        self.generated = lines;
        self.push_status("content generated");
    }

    /// Mutable search buffer for the active screen, if it has one.
    pub fn active_search_mut(&mut self) -> Option<&mut String> {
        match self.tab {
            Tab::Projects => Some(&mut self.project_search),
            Tab::Templates => Some(&mut self.template_search),
            Tab::Generator => Some(&mut self.product_info),
            _ => None,
        }
    }

    /// Reset the row selection after a search edit changed the result set.
    pub fn clamp_selection(&mut self) {
        match self.tab {
            Tab::Projects => {
                let len = self.filtered_projects().len();
                self.selected_project = self.selected_project.min(len.saturating_sub(1));
            }
            Tab::Templates => {
                let len = self.filtered_templates().len();
                self.selected_template = self.selected_template.min(len.saturating_sub(1));
            }
            _ => {}
        }
    }

    /// Replace the status line text.
    pub fn push_status(&mut self, status: impl Into<String>) {
        self.status = status.into();
    }

    /// Spinner glyph for in-flight generation runs.
    pub fn spinner(&self) -> char {
        const FRAMES: [char; 4] = ['|', '/', '-', '\\'];
        FRAMES[(self.tick % FRAMES.len() as u64) as usize]
    }
}

/// Step an index by delta within a list of the given length, clamped.
fn step(index: usize, delta: i16, len: usize) -> usize {
    if len == 0 {
        return 0;
    }
    if delta < 0 {
        index.saturating_sub((-delta) as usize)
    } else {
        (index + delta as usize).min(len - 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn app() -> App {
        App::new(Catalog::sample(), ReelForgeConfig::default())
    }

    #[test]
    fn tab_cycle_wraps_in_both_directions() {
        let mut app = app();
        app.prev_tab();
        assert_eq!(app.tab, Tab::Settings);
        app.next_tab();
        assert_eq!(app.tab, Tab::Dashboard);
    }

    #[test]
    fn status_filter_cycles_back_to_all() {
        let mut app = app();
        for _ in 0..ProjectStatus::ALL.len() {
            app.cycle_project_status();
        }
        assert_eq!(app.project_status, Some(ProjectStatus::Scheduled));
        app.cycle_project_status();
        assert_eq!(app.project_status, None);
    }

    #[test]
    fn search_narrows_projects_without_reordering() {
        let mut app = app();
        app.project_search = "tech".to_string();
        let filtered = app.filtered_projects();
        assert!(!filtered.is_empty());
        let ids: Vec<u32> = filtered.iter().map(|project| project.id).collect();
        let mut sorted = ids.clone();
        sorted.sort_unstable();
        assert_eq!(ids, sorted);
    }

    #[test]
    fn selection_clamps_when_results_shrink() {
        let mut app = app();
        app.selected_project = 3;
        app.project_search = "tech".to_string();
        app.clamp_selection();
        assert!(app.selected_project < app.filtered_projects().len().max(1));
    }

    #[test]
    fn integration_toggle_flips_connection() {
        let mut app = app();
        app.tab = Tab::Settings;
        app.selected_section = 2;
        app.selected_toggle = 1;
        let before = app.config.integrations[1].connected;
        app.toggle_selected();
        assert_eq!(app.config.integrations[1].connected, !before);
    }

    #[test]
    fn generation_result_clears_busy_flag() {
        let mut app = app();
        app.generating = true;
        app.finish_generation(vec!["a".to_string(), "b".to_string()]);
        assert!(!app.generating);
        assert_eq!(app.generated.len(), 2);
    }
}
