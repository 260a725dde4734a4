// src/screen.rs

use strum_macros::{Display, EnumIter};

use crate::ai::ChatSession;
use crate::persona::ChatTarget;
use crate::planet::Planet;
use crate::simulation::SimulationData;

/// Tabs of the main menu body.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Display, EnumIter)]
pub enum MenuTab {
    Explore,
    Create,
    Life,
    Luminaries,
    Astronaut,
}

impl MenuTab {
    pub fn next(self) -> Self {
        match self {
            MenuTab::Explore => MenuTab::Create,
            MenuTab::Create => MenuTab::Life,
            MenuTab::Life => MenuTab::Luminaries,
            MenuTab::Luminaries => MenuTab::Astronaut,
            MenuTab::Astronaut => MenuTab::Explore,
        }
    }

    pub fn previous(self) -> Self {
        match self {
            MenuTab::Explore => MenuTab::Astronaut,
            MenuTab::Create => MenuTab::Explore,
            MenuTab::Life => MenuTab::Create,
            MenuTab::Luminaries => MenuTab::Life,
            MenuTab::Astronaut => MenuTab::Luminaries,
        }
    }
}

/// The currently displayed screen. Each variant carries exactly the data its
/// screen needs, so a screen can never be reached with a missing payload.
#[derive(Debug)]
pub enum Screen {
    MainMenu {
        tab: MenuTab,
    },
    Simulation {
        planet: Planet,
        report: SimulationData,
    },
    Chat {
        planet: Planet,
        report: SimulationData,
        target: ChatTarget,
        session: ChatSession,
    },
    ApiKeyInput,
}

impl Screen {
    pub fn main_menu() -> Self {
        Screen::MainMenu {
            tab: MenuTab::Explore,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn tab_cycle_visits_every_tab_and_wraps() {
        let mut tab = MenuTab::Explore;
        let mut seen = Vec::new();
        for _ in 0..MenuTab::iter().count() {
            seen.push(tab);
            tab = tab.next();
        }
        assert_eq!(tab, MenuTab::Explore);
        for expected in MenuTab::iter() {
            assert!(seen.contains(&expected));
        }
    }

    #[test]
    fn previous_is_the_inverse_of_next() {
        for tab in MenuTab::iter() {
            assert_eq!(tab.next().previous(), tab);
        }
    }
}
