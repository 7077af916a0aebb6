use std::collections::BTreeSet;
use std::time::Duration;

use primer_core::model::NavSection;

/// How long a newly shown pane keeps its `fade-in` class.
pub const FADE_IN_DURATION: Duration = Duration::from_millis(500);

/// Per-pane setup that runs when a section is shown.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Initializer {
    CodeEditor,
    VisualComponents,
    Exercises,
    Reference,
}

impl Initializer {
    #[must_use]
    pub fn for_section(id: &str) -> Option<Self> {
        match id.parse::<NavSection>().ok()? {
            NavSection::Overview => None,
            NavSection::Visual => Some(Self::VisualComponents),
            NavSection::Interactive => Some(Self::CodeEditor),
            NavSection::Exercises => Some(Self::Exercises),
            NavSection::Reference => Some(Self::Reference),
        }
    }
}

/// What a switch asked the panes to do.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SectionSwitch {
    pub initializer: Option<Initializer>,
    /// True the first time this initializer is dispatched.
    pub first_activation: bool,
    /// Token for the fade-in timer started by this switch.
    pub fade_generation: u64,
}

/// Which section is showing, which panes have been set up, and whether the
/// active pane is still fading in.
///
/// Any string is accepted as a target. An unknown id leaves no trigger and
/// no pane active.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SectionController {
    current: String,
    initialized: BTreeSet<Initializer>,
    fade_generation: u64,
    fading: bool,
}

impl Default for SectionController {
    fn default() -> Self {
        Self::new(NavSection::Overview.as_str())
    }
}

impl SectionController {
    /// Start on `initial`, running its initializer like any other switch.
    #[must_use]
    pub fn new(initial: &str) -> Self {
        let mut controller = Self {
            current: String::new(),
            initialized: BTreeSet::new(),
            fade_generation: 0,
            fading: false,
        };
        controller.switch_section(initial);
        controller
    }

    pub fn switch_section(&mut self, target: &str) -> SectionSwitch {
        self.current = target.to_string();

        let initializer = Initializer::for_section(target);
        let first_activation = initializer.is_some_and(|init| self.initialized.insert(init));

        self.fade_generation += 1;
        self.fading = true;

        tracing::debug!(section = target, first_activation, "section switched");
        SectionSwitch {
            initializer,
            first_activation,
            fade_generation: self.fade_generation,
        }
    }

    /// Clear the fade if no newer switch happened since `generation`.
    pub fn end_fade(&mut self, generation: u64) {
        if generation == self.fade_generation {
            self.fading = false;
        }
    }

    #[must_use]
    pub fn current(&self) -> &str {
        &self.current
    }

    #[must_use]
    pub fn fade_generation(&self) -> u64 {
        self.fade_generation
    }

    #[must_use]
    pub fn current_section(&self) -> Option<NavSection> {
        self.current.parse().ok()
    }

    #[must_use]
    pub fn is_trigger_active(&self, id: &str) -> bool {
        self.current == id
    }

    #[must_use]
    pub fn is_pane_active(&self, id: &str) -> bool {
        self.current == id
    }

    #[must_use]
    pub fn is_initialized(&self, initializer: Initializer) -> bool {
        self.initialized.contains(&initializer)
    }

    #[must_use]
    pub fn is_fading(&self, id: &str) -> bool {
        self.fading && self.is_pane_active(id)
    }

    #[must_use]
    pub fn trigger_class(&self, id: &str) -> &'static str {
        if self.is_trigger_active(id) {
            "nav-btn tooltip active"
        } else {
            "nav-btn tooltip"
        }
    }

    #[must_use]
    pub fn pane_class(&self, id: &str) -> &'static str {
        match (self.is_pane_active(id), self.is_fading(id)) {
            (true, true) => "section active fade-in",
            (true, false) => "section active",
            (false, _) => "section",
        }
    }
}

/// Section for a Ctrl/Cmd + digit shortcut. `None` when the chord is not a
/// navigation shortcut.
#[must_use]
pub fn shortcut_target(primary_modifier: bool, key: &str) -> Option<NavSection> {
    if !primary_modifier {
        return None;
    }
    let mut chars = key.chars();
    let digit = chars.next()?;
    if chars.next().is_some() {
        return None;
    }
    NavSection::from_shortcut_digit(digit)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn active_count(controller: &SectionController) -> (usize, usize) {
        let triggers = NavSection::ALL
            .iter()
            .filter(|s| controller.is_trigger_active(s.as_str()))
            .count();
        let panes = NavSection::ALL
            .iter()
            .filter(|s| controller.is_pane_active(s.as_str()))
            .count();
        (triggers, panes)
    }

    #[test]
    fn starts_on_overview_without_initializer() {
        let controller = SectionController::default();
        assert_eq!(controller.current(), "overview");
        assert_eq!(controller.current_section(), Some(NavSection::Overview));
        assert_eq!(active_count(&controller), (1, 1));
        assert!(!controller.is_initialized(Initializer::CodeEditor));
    }

    #[test]
    fn every_section_has_exactly_one_active_trigger_and_pane() {
        let mut controller = SectionController::default();
        for section in NavSection::ALL {
            controller.switch_section(section.as_str());
            assert_eq!(active_count(&controller), (1, 1), "{section}");
            assert!(controller.is_trigger_active(section.as_str()));
            assert!(controller.is_pane_active(section.as_str()));
        }
    }

    #[test]
    fn unknown_section_deactivates_everything() {
        let mut controller = SectionController::default();
        let switch = controller.switch_section("settings");
        assert_eq!(switch.initializer, None);
        assert_eq!(controller.current(), "settings");
        assert_eq!(active_count(&controller), (0, 0));
    }

    #[test]
    fn initializers_report_first_activation_once() {
        let mut controller = SectionController::default();
        let first = controller.switch_section("interactive");
        assert_eq!(first.initializer, Some(Initializer::CodeEditor));
        assert!(first.first_activation);

        controller.switch_section("overview");
        let again = controller.switch_section("interactive");
        assert_eq!(again.initializer, Some(Initializer::CodeEditor));
        assert!(!again.first_activation);
        assert!(controller.is_initialized(Initializer::CodeEditor));
    }

    #[test]
    fn switching_twice_matches_switching_once() {
        let mut once = SectionController::default();
        once.switch_section("exercises");
        let mut twice = SectionController::default();
        twice.switch_section("exercises");
        twice.switch_section("exercises");

        assert_eq!(once.current(), twice.current());
        for section in NavSection::ALL {
            assert_eq!(
                once.is_pane_active(section.as_str()),
                twice.is_pane_active(section.as_str())
            );
        }
        assert!(twice.is_initialized(Initializer::Exercises));
    }

    #[test]
    fn stale_fade_timer_does_not_clear_newer_fade() {
        let mut controller = SectionController::default();
        let older = controller.switch_section("visual").fade_generation;
        let newer = controller.switch_section("reference").fade_generation;

        controller.end_fade(older);
        assert_eq!(controller.pane_class("reference"), "section active fade-in");

        controller.end_fade(newer);
        assert_eq!(controller.pane_class("reference"), "section active");
        assert_eq!(controller.pane_class("visual"), "section");
    }

    #[test]
    fn deep_link_runs_initial_initializer() {
        let controller = SectionController::new("visual");
        assert!(controller.is_initialized(Initializer::VisualComponents));
        assert_eq!(controller.trigger_class("visual"), "nav-btn tooltip active");
        assert_eq!(controller.trigger_class("overview"), "nav-btn tooltip");
    }

    #[test]
    fn shortcuts_need_a_modifier_and_a_mapped_digit() {
        assert_eq!(shortcut_target(true, "1"), Some(NavSection::Overview));
        assert_eq!(shortcut_target(true, "5"), Some(NavSection::Reference));
        assert_eq!(shortcut_target(false, "3"), None);
        assert_eq!(shortcut_target(true, "6"), None);
        assert_eq!(shortcut_target(true, "12"), None);
        assert_eq!(shortcut_target(true, "a"), None);
    }
}
