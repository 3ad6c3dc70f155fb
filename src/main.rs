//! Cone Rush entry point
//!
//! Handles platform-specific initialization: on wasm32 this wires the DOM to
//! the sim and drives the one-second countdown; on native it runs a logged
//! headless demo session.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{Element, MouseEvent};

    use cone_rush::consts::VISIBLE_CUSTOMERS;
    use cone_rush::highscores::HighScores;
    use cone_rush::platform::storage::LocalStorage;
    use cone_rush::settings::Settings;
    use cone_rush::sim::{
        self, Assembly, ConeKind, GameState, Order, ScoopFlavor, ServeOutcome, SessionPhase,
    };

    /// Game instance holding all state
    struct Game {
        state: GameState,
        highscores: HighScores,
        settings: Settings,
        /// setInterval handle for the countdown, present only while Active
        timer: Option<i32>,
    }

    impl Game {
        fn new(seed: u64, highscores: HighScores, settings: Settings) -> Self {
            Self {
                state: GameState::new(seed),
                highscores,
                settings,
                timer: None,
            }
        }
    }

    pub fn run() {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("Failed to init logger");

        log::info!("Cone Rush starting...");

        let store = LocalStorage;
        let highscores = HighScores::load(&store);
        let settings = Settings::load(&store);

        let seed = js_sys::Date::now() as u64;
        let game = Rc::new(RefCell::new(Game::new(seed, highscores, settings)));
        log::info!("Session prepared with seed: {}", seed);

        setup_start_button(game.clone());
        setup_counter_buttons(game.clone());
        setup_order_bubbles(game.clone());
        setup_clear_button(game.clone());
        setup_restart_button(game.clone());
        setup_music_toggle(game.clone());

        {
            let g = game.borrow();
            apply_music_setting(&g.settings);
            apply_motion_setting(&g.settings);
            render(&g);
        }

        log::info!("Cone Rush ready!");
    }

    /// Start the 1 Hz countdown. The handle is stored so any path out of
    /// Active can cancel it; a stale handle never survives into a new session.
    fn start_timer(game: Rc<RefCell<Game>>) {
        let window = web_sys::window().expect("no window");
        let closure = Closure::<dyn FnMut()>::new({
            let game = game.clone();
            move || {
                let mut g = game.borrow_mut();
                if sim::tick_second(&mut g.state) {
                    finish_session(&mut g);
                }
                render(&g);
            }
        });
        let handle = window
            .set_interval_with_callback_and_timeout_and_arguments_0(
                closure.as_ref().unchecked_ref(),
                1000,
            )
            .expect("setInterval failed");
        closure.forget();
        game.borrow_mut().timer = Some(handle);
    }

    /// Cancel the countdown if one is running
    fn stop_timer(game: &mut Game) {
        if let Some(handle) = game.timer.take() {
            if let Some(window) = web_sys::window() {
                window.clear_interval_with_handle(handle);
            }
        }
    }

    /// One-shot end-of-session work: cancel the timer, fold the final coin
    /// total into the leaderboard, persist best-effort.
    fn finish_session(game: &mut Game) {
        stop_timer(game);
        if let Some(rank) = game.highscores.record(game.state.coins) {
            log::info!("New high score: {} coins (rank {})", game.state.coins, rank);
        }
        game.highscores.save(&LocalStorage);
    }

    fn setup_start_button(game: Rc<RefCell<Game>>) {
        if let Some(btn) = element("start-btn") {
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
                {
                    let mut g = game.borrow_mut();
                    // Guard the handle too, so a double click can't stack timers
                    if g.state.phase != SessionPhase::NotStarted || g.timer.is_some() {
                        return;
                    }
                    sim::start(&mut g.state);
                }
                start_timer(game.clone());
                render(&game.borrow());
            });
            let _ = btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn setup_counter_buttons(game: Rc<RefCell<Game>>) {
        for (index, cone) in ConeKind::ALL.iter().copied().enumerate() {
            if let Some(btn) = element(&format!("cone-btn-{index}")) {
                let game = game.clone();
                let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
                    let mut g = game.borrow_mut();
                    sim::select_cone(&mut g.state, cone);
                    render(&g);
                });
                let _ =
                    btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
                closure.forget();
            }
        }

        for (index, flavor) in ScoopFlavor::ALL.iter().copied().enumerate() {
            if let Some(btn) = element(&format!("scoop-btn-{index}")) {
                let game = game.clone();
                let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
                    let mut g = game.borrow_mut();
                    sim::add_scoop(&mut g.state, flavor);
                    render(&g);
                });
                let _ =
                    btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
                closure.forget();
            }
        }
    }

    fn setup_order_bubbles(game: Rc<RefCell<Game>>) {
        for index in 0..VISIBLE_CUSTOMERS {
            if let Some(bubble) = element(&format!("order-{index}")) {
                let game = game.clone();
                let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
                    let mut g = game.borrow_mut();
                    match sim::submit_order(&mut g.state, index) {
                        ServeOutcome::Served => {
                            log::info!("Customer served, coins: {}", g.state.coins)
                        }
                        ServeOutcome::Rejected => {
                            log::info!("Wrong order, coins: {}", g.state.coins)
                        }
                        ServeOutcome::Ignored => {}
                    }
                    render(&g);
                });
                let _ = bubble
                    .add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
                closure.forget();
            }
        }
    }

    fn setup_clear_button(game: Rc<RefCell<Game>>) {
        if let Some(btn) = element("clear-btn") {
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
                let mut g = game.borrow_mut();
                sim::clear_assembly(&mut g.state);
                render(&g);
            });
            let _ = btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn setup_restart_button(game: Rc<RefCell<Game>>) {
        if let Some(btn) = element("restart-btn") {
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
                {
                    let mut g = game.borrow_mut();
                    if g.state.phase != SessionPhase::Ended {
                        return;
                    }
                    stop_timer(&mut g);
                    let seed = js_sys::Date::now() as u64;
                    sim::restart(&mut g.state, seed);
                }
                start_timer(game.clone());
                render(&game.borrow());
            });
            let _ = btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn setup_music_toggle(game: Rc<RefCell<Game>>) {
        if let Some(btn) = element("music-btn") {
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
                let mut g = game.borrow_mut();
                g.settings.music_enabled = !g.settings.music_enabled;
                g.settings.save(&LocalStorage);
                apply_music_setting(&g.settings);
            });
            let _ = btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    /// Mute/unmute the background music element and restyle its toggle
    fn apply_music_setting(settings: &Settings) {
        if let Some(el) = element("music") {
            if let Ok(audio) = el.dyn_into::<web_sys::HtmlAudioElement>() {
                audio.set_muted(!settings.music_enabled);
            }
        }
        if let Some(btn) = element("music-btn") {
            let _ = btn.set_attribute(
                "class",
                if settings.music_enabled {
                    "icon"
                } else {
                    "icon off"
                },
            );
        }
    }

    /// Let CSS tone down slide-ins for players who asked for less motion
    fn apply_motion_setting(settings: &Settings) {
        if let Some(el) = element("app-container") {
            let _ = el.set_attribute(
                "class",
                if settings.reduced_motion {
                    "app-container reduced-motion"
                } else {
                    "app-container"
                },
            );
        }
    }

    fn element(id: &str) -> Option<Element> {
        web_sys::window()?.document()?.get_element_by_id(id)
    }

    fn set_text(id: &str, text: &str) {
        if let Some(el) = element(id) {
            el.set_text_content(Some(text));
        }
    }

    fn show_screen(id: &str, visible: bool) {
        if let Some(el) = element(id) {
            let _ = el.set_attribute("class", if visible { "screen" } else { "screen hidden" });
        }
    }

    /// Push the whole game state into the DOM
    fn render(game: &Game) {
        let state = &game.state;

        set_text("coin-counter", &format!("Coins: {}", state.coins));
        set_text("timer", &format!("Time: {}", state.clock));

        // Customers and their order bubbles
        for (index, slot) in state.slots.iter().enumerate() {
            if let Some(el) = element(&format!("order-{index}")) {
                el.set_inner_html(&order_markup(&slot.order));
            }
            if let Some(el) = element(&format!("customer-{index}")) {
                let _ = el.set_attribute("src", &format!("assets/{}", slot.asset()));
                let _ = el.set_attribute("alt", &format!("Customer {}", slot.customer));
            }
        }

        // The player's in-progress build
        if let Some(el) = element("ice-cream") {
            el.set_inner_html(&assembly_markup(&state.assembly));
        }

        // Screen overlays by phase
        show_screen("start-screen", state.phase == SessionPhase::NotStarted);
        show_screen("end-screen", state.phase == SessionPhase::Ended);
        if state.phase == SessionPhase::Ended {
            set_text("final-score", &format!("Your Score: {}", state.coins));
            if let Some(el) = element("high-scores") {
                el.set_inner_html(&highscore_markup(&game.highscores));
            }
        }
    }

    /// Bubble contents: the requested cone with the scoops stacked above it
    fn order_markup(order: &Order) -> String {
        let mut html = format!(
            r#"<img class="cone-order" src="assets/{}" alt="Cone">"#,
            order.cone.asset()
        );
        for (index, scoop) in order.scoops.iter().enumerate() {
            html.push_str(&format!(
                r#"<img class="scoop-order" style="--scoop-index: {index}" src="assets/{}" alt="Scoop {}">"#,
                scoop.asset(),
                index + 1,
            ));
        }
        html
    }

    /// Counter contents: whatever the player has built so far
    fn assembly_markup(assembly: &Assembly) -> String {
        let mut html = String::new();
        if let Some(cone) = assembly.cone {
            html.push_str(&format!(
                r#"<img class="ice-cream-cone" src="assets/{}" alt="Selected Cone">"#,
                cone.asset()
            ));
        }
        for (index, scoop) in assembly.scoops.iter().enumerate() {
            html.push_str(&format!(
                r#"<img class="ice-cream-scoop" style="bottom: {}px" src="assets/{}" alt="Scoop {}">"#,
                210 + index * 50,
                scoop.asset(),
                index + 1,
            ));
        }
        html
    }

    /// Ranked list for the end screen
    fn highscore_markup(highscores: &HighScores) -> String {
        highscores
            .scores()
            .iter()
            .enumerate()
            .map(|(index, score)| {
                format!(
                    r#"<div class="high-score-item">{}. {}</div>"#,
                    index + 1,
                    score
                )
            })
            .collect()
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    wasm_game::run();
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use cone_rush::highscores::HighScores;
    use cone_rush::platform::storage::MemoryStore;
    use cone_rush::sim::{self, GameState, SessionPhase};

    env_logger::init();
    log::info!("Cone Rush (native) starting...");
    log::info!("The playable build targets wasm32 - serve the web version for the real game");

    // Headless demo: serve slot 0 perfectly once a second until the clock
    // runs out, then show the resulting board
    let mut state = GameState::new(42);
    sim::start(&mut state);
    let store = MemoryStore::new();
    let mut highscores = HighScores::load(&store);

    while state.phase == SessionPhase::Active {
        let order = state.slots[0].order.clone();
        sim::select_cone(&mut state, order.cone);
        for scoop in &order.scoops {
            sim::add_scoop(&mut state, *scoop);
        }
        sim::submit_order(&mut state, 0);
        sim::tick_second(&mut state);
    }

    highscores.record(state.coins);
    highscores.save(&store);
    println!(
        "Demo session finished with {} coins (top score: {:?})",
        state.coins,
        highscores.top_score()
    );
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}
