// src/app.rs

use std::path::PathBuf;
use std::time::{Duration, Instant};

use copypasta::{ClipboardContext, ClipboardProvider};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{layout::Alignment, text::Line, widgets::ListState};
use tokio::sync::mpsc;
use uuid::Uuid;

use crate::{
    ai::{ChatSession, SimulationAI},
    error::{AIError, AppError},
    imager,
    message::{Message, MessageType},
    persona::{ChatTarget, CityRole, LUMINARIES},
    planet::Planet,
    screen::{MenuTab, Screen},
    settings::Settings,
    simulation::{LifeAnalysisData, SimulationData},
    ui::{chat, input::InputState, planet_form::PlanetForm, spinner::Spinner},
};

/// Work the key handler defers to the async run loop.
pub enum Action {
    Simulate { planet: Planet, briefing: String },
    AnalyzeLife(Planet),
    SendChatMessage(String),
    ValidateApiKey(String),
    GenerateImage { subject: String },
    ShowPlanetImage(Planet),
}

/// Results coming back from spawned gateway tasks.
pub enum AIMessage {
    Simulation {
        planet: Planet,
        outcome: Result<SimulationData, AIError>,
    },
    LifeAnalysis {
        planet: Planet,
        outcome: Result<LifeAnalysisData, AIError>,
    },
    ChatResponse {
        session_id: Uuid,
        outcome: Result<String, AIError>,
    },
    ApiKeyValidation {
        api_key: String,
        valid: bool,
    },
    Image(Result<PathBuf, AppError>),
}

#[derive(Debug, Default, PartialEq, Eq, Clone)]
pub enum InputMode {
    #[default]
    Normal,
    Editing,
}

pub struct App {
    pub should_quit: bool,
    pub screen: Screen,
    pub input_mode: InputMode,

    // --- Global information
    pub settings: Settings,
    pub openai_api_key_valid: bool,
    pub ai_client: Option<SimulationAI>,

    // --- Inputs
    pub chat_input: InputState,
    pub api_key_input: InputState,
    pub planet_form: PlanetForm,
    clipboard: Option<ClipboardContext>,

    // --- Menus
    pub planets: Vec<Planet>,
    pub planet_menu_state: ListState,
    pub luminary_menu_state: ListState,
    pub target_menu_state: ListState,

    // --- Transient UI state
    pub console: Vec<Message>,
    pub life_analysis: Option<(Planet, LifeAnalysisData)>,
    pub spinner: Spinner,
    pub spinner_active: bool,
    last_spinner_update: Instant,

    // --- Chat transcript rendering
    pub chat_scroll: usize,
    pub chat_follow: bool,
    pub total_lines: usize,
    pub visible_lines: usize,
    pub cached_chat_lines: Option<Vec<(Line<'static>, Alignment)>>,
    cached_transcript_len: usize,
    cached_wrap_width: usize,

    action_sender: mpsc::UnboundedSender<Action>,
    ai_sender: mpsc::UnboundedSender<AIMessage>,
}

impl App {
    pub async fn new(
        ai_sender: mpsc::UnboundedSender<AIMessage>,
    ) -> (Self, mpsc::UnboundedReceiver<Action>) {
        let (action_sender, action_receiver) = mpsc::unbounded_channel();

        let settings = Settings::load().unwrap_or_default();

        let openai_api_key_valid = if let Some(ref api_key) = settings.openai_api_key {
            Settings::validate_api_key(api_key).await
        } else {
            false
        };

        let ai_client = settings
            .openai_api_key
            .as_ref()
            .filter(|_| openai_api_key_valid)
            .map(|key| SimulationAI::new(key.clone(), settings.model.clone()));

        let screen = if openai_api_key_valid {
            Screen::main_menu()
        } else {
            Screen::ApiKeyInput
        };

        let mut planet_menu_state = ListState::default();
        planet_menu_state.select(Some(0));
        let mut luminary_menu_state = ListState::default();
        luminary_menu_state.select(Some(0));
        let mut target_menu_state = ListState::default();
        target_menu_state.select(Some(0));

        let app = Self {
            should_quit: false,
            screen,
            input_mode: InputMode::Normal,

            settings,
            openai_api_key_valid,
            ai_client,

            chat_input: InputState::default(),
            api_key_input: InputState::default(),
            planet_form: PlanetForm::default(),
            clipboard: ClipboardContext::new().ok(),

            planets: Planet::catalog(),
            planet_menu_state,
            luminary_menu_state,
            target_menu_state,

            console: Vec::new(),
            life_analysis: None,
            spinner: Spinner::new(),
            spinner_active: false,
            last_spinner_update: Instant::now(),

            chat_scroll: 0,
            chat_follow: true,
            total_lines: 0,
            visible_lines: 0,
            cached_chat_lines: None,
            cached_transcript_len: 0,
            cached_wrap_width: 0,

            action_sender,
            ai_sender,
        };

        (app, action_receiver)
    }

    pub fn add_console_message(&mut self, content: String) {
        log::info!("console: {content}");
        self.console.push(Message::new(content, MessageType::System));
    }

    fn send_action(&self, action: Action) {
        // The receiver lives for the whole run loop; a send can only fail
        // during shutdown, when the action no longer matters.
        let _ = self.action_sender.send(action);
    }

    // region: --- key routing

    pub fn on_key(&mut self, key: KeyEvent) {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return;
        }

        // The life-analysis modal swallows input until dismissed.
        if self.life_analysis.is_some() {
            self.on_life_modal_key(key);
            return;
        }

        match &self.screen {
            Screen::MainMenu { .. } => self.on_main_menu_key(key),
            Screen::Simulation { .. } => self.on_simulation_key(key),
            Screen::Chat { .. } => self.on_chat_key(key),
            Screen::ApiKeyInput => self.on_api_key_input_key(key),
        }
    }

    fn on_life_modal_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc | KeyCode::Enter => self.life_analysis = None,
            KeyCode::Char('i') => {
                if let Some((_, analysis)) = &self.life_analysis {
                    let subject = analysis.life_form_image_prompt.clone();
                    self.send_action(Action::GenerateImage { subject });
                }
            }
            _ => {}
        }
    }

    fn on_main_menu_key(&mut self, key: KeyEvent) {
        let Screen::MainMenu { tab } = &mut self.screen else {
            return;
        };
        let tab = *tab;

        // The creator form owns most keys while it has focus.
        if tab == MenuTab::Create && self.input_mode == InputMode::Editing {
            match key.code {
                KeyCode::Esc => self.input_mode = InputMode::Normal,
                KeyCode::Enter => self.submit_planet_form(),
                KeyCode::Up | KeyCode::BackTab => self.planet_form.focus_previous(),
                KeyCode::Down | KeyCode::Tab => self.planet_form.focus_next(),
                _ => self.planet_form.focused_input().on_key(key),
            }
            return;
        }

        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
            KeyCode::Tab | KeyCode::Right => {
                self.screen = Screen::MainMenu { tab: tab.next() };
            }
            KeyCode::BackTab | KeyCode::Left => {
                self.screen = Screen::MainMenu {
                    tab: tab.previous(),
                };
            }
            KeyCode::Up => self.move_menu_selection(tab, -1),
            KeyCode::Down => self.move_menu_selection(tab, 1),
            KeyCode::Char('e') if tab == MenuTab::Create => {
                self.input_mode = InputMode::Editing;
            }
            KeyCode::Char('i') if matches!(tab, MenuTab::Explore | MenuTab::Life) => {
                if let Some(planet) = self.selected_planet() {
                    self.send_action(Action::ShowPlanetImage(planet));
                }
            }
            KeyCode::Enter => self.activate_menu_item(tab),
            _ => {}
        }
    }

    fn move_menu_selection(&mut self, tab: MenuTab, delta: isize) {
        let (state, len) = match tab {
            MenuTab::Explore | MenuTab::Life => (&mut self.planet_menu_state, self.planets.len()),
            MenuTab::Luminaries => (&mut self.luminary_menu_state, LUMINARIES.len()),
            _ => return,
        };
        if len == 0 {
            return;
        }
        let current = state.selected().unwrap_or(0) as isize;
        let next = (current + delta).rem_euclid(len as isize) as usize;
        state.select(Some(next));
    }

    fn activate_menu_item(&mut self, tab: MenuTab) {
        match tab {
            MenuTab::Explore => {
                if let Some(planet) = self.selected_planet() {
                    let briefing = planet.name.clone();
                    self.send_action(Action::Simulate { planet, briefing });
                }
            }
            MenuTab::Create => self.input_mode = InputMode::Editing,
            MenuTab::Life => {
                if let Some(planet) = self.selected_planet() {
                    self.send_action(Action::AnalyzeLife(planet));
                }
            }
            MenuTab::Luminaries => {
                let selected = self.luminary_menu_state.selected().unwrap_or(0);
                if let Some(luminary) = LUMINARIES.get(selected).copied() {
                    self.start_chat(
                        Planet::history_of_science(),
                        SimulationData::arena_of_knowledge(),
                        ChatTarget::Luminary(luminary),
                    );
                }
            }
            MenuTab::Astronaut => {
                self.start_chat(
                    Planet::deep_space(),
                    SimulationData::deep_space(),
                    ChatTarget::Astronaut,
                );
            }
        }
    }

    fn selected_planet(&self) -> Option<Planet> {
        let selected = self.planet_menu_state.selected().unwrap_or(0);
        self.planets.get(selected).cloned()
    }

    fn submit_planet_form(&mut self) {
        let params = self.planet_form.to_params();
        if params.name.trim().is_empty() {
            self.add_console_message("Give your planet a name first.".to_string());
            return;
        }
        self.input_mode = InputMode::Normal;
        let planet = params.to_planet();
        let briefing = params.briefing();
        self.send_action(Action::Simulate { planet, briefing });
    }

    fn on_simulation_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc => {
                self.screen = Screen::main_menu();
            }
            KeyCode::Up => self.move_target_selection(-1),
            KeyCode::Down => self.move_target_selection(1),
            KeyCode::Char('i') => {
                if let Screen::Simulation { report, .. } = &self.screen {
                    let subject = report.city_image_prompt.clone();
                    self.send_action(Action::GenerateImage { subject });
                }
            }
            KeyCode::Enter => {
                let Screen::Simulation { planet, report } = &self.screen else {
                    return;
                };
                let (planet, report) = (planet.clone(), report.clone());
                let selected = self.target_menu_state.selected().unwrap_or(0);
                let roles: Vec<CityRole> = chat::resident_roles();
                if let Some(role) = roles.get(selected).copied() {
                    self.start_chat(planet, report, ChatTarget::Resident(role));
                }
            }
            _ => {}
        }
    }

    fn move_target_selection(&mut self, delta: isize) {
        let len = chat::resident_roles().len() as isize;
        let current = self.target_menu_state.selected().unwrap_or(0) as isize;
        let next = (current + delta).rem_euclid(len) as usize;
        self.target_menu_state.select(Some(next));
    }

    /// Replaces whatever chat was active with a fresh session. The old
    /// session handle is dropped here; replies tagged with its id are
    /// discarded when they arrive.
    fn start_chat(&mut self, planet: Planet, report: SimulationData, target: ChatTarget) {
        let session = ChatSession::new(&target, &planet.name, &report.city_name);
        log::info!(
            "starting chat with {} (session {})",
            target.display_name(),
            session.id
        );
        self.chat_input = InputState::default();
        self.input_mode = InputMode::Editing;
        self.invalidate_chat_cache();
        self.chat_scroll = 0;
        self.chat_follow = true;
        self.screen = Screen::Chat {
            planet,
            report,
            target,
            session,
        };
    }

    fn on_chat_key(&mut self, key: KeyEvent) {
        match self.input_mode {
            InputMode::Normal => match key.code {
                KeyCode::Char('e') => self.input_mode = InputMode::Editing,
                KeyCode::Esc => self.leave_chat(),
                KeyCode::Up => {
                    self.chat_follow = false;
                    self.chat_scroll = self.chat_scroll.saturating_sub(1);
                }
                KeyCode::Down => {
                    self.chat_scroll = (self.chat_scroll + 1)
                        .min(self.total_lines.saturating_sub(self.visible_lines));
                }
                KeyCode::End => self.chat_follow = true,
                _ => {}
            },
            InputMode::Editing => match key.code {
                KeyCode::Esc => self.input_mode = InputMode::Normal,
                KeyCode::Enter => {
                    let text = self.chat_input.take();
                    if !text.trim().is_empty() {
                        self.send_action(Action::SendChatMessage(text));
                    }
                }
                KeyCode::Char('v') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                    self.paste_into_chat_input();
                }
                _ => self.chat_input.on_key(key),
            },
        }
    }

    fn paste_into_chat_input(&mut self) {
        if let Some(clipboard) = &mut self.clipboard {
            if let Ok(contents) = clipboard.get_contents() {
                self.chat_input.insert_str(&contents);
            }
        }
    }

    fn leave_chat(&mut self) {
        let Screen::Chat {
            planet,
            report,
            target,
            ..
        } = &self.screen
        else {
            return;
        };
        let (planet, report) = (planet.clone(), report.clone());
        let to_simulation = target.returns_to_simulation();
        self.input_mode = InputMode::Normal;
        self.screen = if to_simulation {
            Screen::Simulation { planet, report }
        } else {
            Screen::main_menu()
        };
    }

    fn on_api_key_input_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc => {
                if self.openai_api_key_valid {
                    self.screen = Screen::main_menu();
                } else {
                    self.should_quit = true;
                }
            }
            KeyCode::Enter => {
                let api_key = self.api_key_input.take();
                if api_key.trim().is_empty() {
                    self.add_console_message("Enter an API key first.".to_string());
                } else {
                    self.send_action(Action::ValidateApiKey(api_key));
                }
            }
            KeyCode::Char('v') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                if let Some(clipboard) = &mut self.clipboard {
                    if let Ok(contents) = clipboard.get_contents() {
                        self.api_key_input.insert_str(&contents);
                    }
                }
            }
            _ => self.api_key_input.on_key(key),
        }
    }

    // endregion

    // region: --- async dispatch

    pub async fn handle_action(&mut self, action: Action) {
        match action {
            Action::Simulate { planet, briefing } => self.dispatch_simulation(planet, briefing),
            Action::AnalyzeLife(planet) => self.dispatch_life_analysis(planet),
            Action::SendChatMessage(text) => self.dispatch_chat_message(text),
            Action::ValidateApiKey(api_key) => self.dispatch_api_key_validation(api_key),
            Action::GenerateImage { subject } => self.dispatch_image_generation(subject),
            Action::ShowPlanetImage(planet) => self.dispatch_planet_image(planet),
        }
    }

    fn require_client(&mut self) -> Option<SimulationAI> {
        match &self.ai_client {
            Some(client) => Some(client.clone()),
            None => {
                self.add_console_message(
                    "No valid API key configured. Press Esc and set one first.".to_string(),
                );
                self.screen = Screen::ApiKeyInput;
                None
            }
        }
    }

    fn dispatch_simulation(&mut self, planet: Planet, briefing: String) {
        let Some(client) = self.require_client() else {
            return;
        };
        log::info!("generating settlement for {planet}");
        self.start_spinner();
        let sender = self.ai_sender.clone();
        tokio::spawn(async move {
            let outcome = client.generate_simulation(&briefing).await;
            let _ = sender.send(AIMessage::Simulation { planet, outcome });
        });
    }

    fn dispatch_life_analysis(&mut self, planet: Planet) {
        let Some(client) = self.require_client() else {
            return;
        };
        self.start_spinner();
        let sender = self.ai_sender.clone();
        tokio::spawn(async move {
            let outcome = client.generate_life_analysis(&planet.name).await;
            let _ = sender.send(AIMessage::LifeAnalysis { planet, outcome });
        });
    }

    fn dispatch_chat_message(&mut self, text: String) {
        let Some(client) = self.require_client() else {
            return;
        };
        let Screen::Chat { session, .. } = &mut self.screen else {
            log::warn!("chat message outside a chat screen dropped");
            return;
        };
        session.push_user(text);
        let snapshot = session.clone();
        self.chat_follow = true;
        self.invalidate_chat_cache();
        self.start_spinner();
        let sender = self.ai_sender.clone();
        tokio::spawn(async move {
            let outcome = client.chat_turn(&snapshot).await;
            let _ = sender.send(AIMessage::ChatResponse {
                session_id: snapshot.id,
                outcome,
            });
        });
    }

    fn dispatch_api_key_validation(&mut self, api_key: String) {
        self.start_spinner();
        let sender = self.ai_sender.clone();
        tokio::spawn(async move {
            let valid = Settings::validate_api_key(&api_key).await;
            let _ = sender.send(AIMessage::ApiKeyValidation { api_key, valid });
        });
    }

    fn dispatch_planet_image(&mut self, planet: Planet) {
        if planet.image_url.is_empty() {
            return;
        }
        self.start_spinner();
        let sender = self.ai_sender.clone();
        tokio::spawn(async move {
            let outcome = imager::fetch_and_open_placeholder(&planet.image_url, &planet.name).await;
            let _ = sender.send(AIMessage::Image(outcome));
        });
    }

    fn dispatch_image_generation(&mut self, subject: String) {
        let Some(client) = self.require_client() else {
            return;
        };
        self.start_spinner();
        let sender = self.ai_sender.clone();
        tokio::spawn(async move {
            let outcome = match client.create_image_prompt(&subject).await {
                Ok(prompt) => imager::generate_and_save_image(&prompt).await,
                Err(e) => Err(e.into()),
            };
            let _ = sender.send(AIMessage::Image(outcome));
        });
    }

    // endregion

    // region: --- gateway results

    pub fn handle_ai_message(&mut self, message: AIMessage) {
        self.stop_spinner();
        match message {
            AIMessage::Simulation { planet, outcome } => match outcome {
                Ok(report) => {
                    self.target_menu_state.select(Some(0));
                    self.screen = Screen::Simulation { planet, report };
                }
                Err(e) => {
                    log::error!("simulation generation failed: {e:#}");
                    self.add_console_message(
                        "Planet simulation failed. Please try again.".to_string(),
                    );
                }
            },
            AIMessage::LifeAnalysis { planet, outcome } => match outcome {
                Ok(analysis) => self.life_analysis = Some((planet, analysis)),
                Err(e) => {
                    log::error!("life analysis failed: {e:#}");
                    self.add_console_message("Life analysis failed. Please try again.".to_string());
                }
            },
            AIMessage::ChatResponse {
                session_id,
                outcome,
            } => self.handle_chat_response(session_id, outcome),
            AIMessage::ApiKeyValidation { api_key, valid } => {
                self.handle_api_key_validation(api_key, valid)
            }
            AIMessage::Image(outcome) => match outcome {
                Ok(path) => {
                    self.add_console_message(format!("Image saved to {}", path.display()));
                }
                Err(e) => {
                    log::error!("image generation failed: {e:#}");
                    self.add_console_message(
                        "Image generation failed. Please try again.".to_string(),
                    );
                }
            },
        }
    }

    fn handle_chat_response(&mut self, session_id: Uuid, outcome: Result<String, AIError>) {
        let Screen::Chat { session, .. } = &mut self.screen else {
            log::debug!("chat reply {session_id} arrived after leaving chat, dropped");
            return;
        };
        if session.id != session_id {
            // Reply belongs to a session that was replaced; last writer wins.
            log::debug!("stale chat reply {session_id} dropped");
            return;
        }
        match outcome {
            Ok(reply) => session.push_model(reply),
            Err(e) => {
                log::error!("chat turn failed: {e:#}");
                session.transcript.push(Message::new(
                    "Generation failed. Please try again.".to_string(),
                    MessageType::System,
                ));
            }
        }
        self.chat_follow = true;
        self.invalidate_chat_cache();
    }

    fn handle_api_key_validation(&mut self, api_key: String, valid: bool) {
        self.openai_api_key_valid = valid;
        if valid {
            self.settings.openai_api_key = Some(api_key.clone());
            if let Err(e) = self.settings.save() {
                log::error!("failed to save settings: {e}");
            }
            self.ai_client = Some(SimulationAI::new(api_key, self.settings.model.clone()));
            self.add_console_message("API key validated.".to_string());
            self.screen = Screen::main_menu();
        } else {
            self.add_console_message("Invalid API key.".to_string());
            self.screen = Screen::ApiKeyInput;
        }
    }

    // endregion

    // region: --- spinner and transcript cache

    pub fn start_spinner(&mut self) {
        self.spinner_active = true;
        self.last_spinner_update = Instant::now();
    }

    pub fn stop_spinner(&mut self) {
        self.spinner_active = false;
    }

    pub fn update_spinner(&mut self) {
        if self.spinner_active && self.last_spinner_update.elapsed() >= Duration::from_millis(100) {
            self.spinner.next_frame();
            self.last_spinner_update = Instant::now();
        }
    }

    pub fn invalidate_chat_cache(&mut self) {
        self.cached_chat_lines = None;
        self.cached_transcript_len = 0;
    }

    /// Rebuilds the wrapped, markup-rendered transcript lines if the
    /// transcript or the wrap width changed. Safe to call every frame: the
    /// rendering is a pure function of the transcript text.
    pub fn update_cached_content(&mut self, max_width: usize) {
        let Screen::Chat { session, .. } = &self.screen else {
            return;
        };
        if self.cached_chat_lines.is_some()
            && self.cached_transcript_len == session.transcript.len()
            && self.cached_wrap_width == max_width
        {
            return;
        }
        self.cached_chat_lines = Some(chat::parse_transcript(session, max_width));
        self.cached_transcript_len = session.transcript.len();
        self.cached_wrap_width = max_width;
    }

    pub fn update_scroll(&mut self) {
        if self.chat_follow {
            self.chat_scroll = self.total_lines.saturating_sub(self.visible_lines);
        }
    }

    // endregion
}
