//! Auriga main entry point.
//!
//! A small point-and-click story built with:
//! - **raylib** for windowing, input and drawing
//! - **bevy_ecs** for resources, observers and the frame schedule
//!
//! # Main Loop
//!
//! 1. Parse the command line, load `config.ini` and the story
//! 2. Open the window and create the fixed-resolution render target
//! 3. Insert resources, register observers and flow hooks
//! 4. Enter `Setup` (textures are loaded) which requests `Playing`
//! 5. Each frame: poll input (pointer presses are dispatched to the game),
//!    advance the dialog reveal, render
//!
//! # Running
//!
//! ```sh
//! cargo run --release
//! cargo run -- --dump-story story.json
//! cargo run -- --story story.json
//! ```

// Do not create console on Windows
#![cfg_attr(target_os = "windows", windows_subsystem = "windows")]

use auriga::content::story::{Story, default_story};
use auriga::events::flow::{FlowChangedEvent, observe_flow_change_event};
use auriga::events::pointer::pointer_down_observer;
use auriga::events::switchdebug::switch_debug_observer;
use auriga::events::switchfullscreen::switch_fullscreen_observer;
use auriga::game;
use auriga::resources::flow::{FlowState, FlowStates, NextFlowState};
use auriga::resources::gameconfig::GameConfig;
use auriga::resources::gamestate::GameState;
use auriga::resources::input::InputState;
use auriga::resources::rendertarget::RenderTarget;
use auriga::resources::screensize::ScreenSize;
use auriga::resources::systemsstore::SystemsStore;
use auriga::resources::texturestore::TextureStore;
use auriga::resources::windowsize::WindowSize;
use auriga::resources::worldtime::WorldTime;
use auriga::systems::dialog::dialog_reveal_system;
use auriga::systems::flow::{check_pending_flow, state_is_playing};
use auriga::systems::gameconfig::apply_gameconfig_changes;
use auriga::systems::input::update_input_state;
use auriga::systems::render::render_system;
use bevy_ecs::observer::Observer;
use bevy_ecs::prelude::*;
use clap::Parser;
use std::path::PathBuf;

/// Auriga the astronaut is lost in space.
#[derive(Parser)]
#[command(version, about = "A point-and-click story about an astronaut lost in space.")]
struct Cli {
    /// Configuration file (default: ./config.ini).
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Play a story from a JSON file instead of the built-in one.
    #[arg(long, value_name = "PATH")]
    story: Option<PathBuf>,

    /// Write the built-in story as JSON and exit.
    /// Optionally provide a path (default: stdout).
    #[arg(long, value_name = "PATH")]
    dump_story: Option<Option<PathBuf>>,
}

fn dump_story(path: Option<PathBuf>) -> Result<(), String> {
    let json = default_story().to_json()?;
    match path {
        Some(path) => {
            std::fs::write(&path, json)
                .map_err(|e| format!("Failed to write {}: {}", path.display(), e))?;
            log::info!("Story written to {}", path.display());
        }
        None => println!("{}", json),
    }
    Ok(())
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    // Early-exit: export the built-in story (no window needed)
    if let Some(maybe_path) = cli.dump_story {
        if let Err(e) = dump_story(maybe_path) {
            log::error!("{}", e);
            std::process::exit(1);
        }
        return;
    }

    let mut config = match cli.config {
        Some(path) => GameConfig::with_path(path),
        None => GameConfig::new(),
    };
    if let Err(e) = config.load_from_file() {
        log::warn!("{}; using defaults", e);
    }

    let story = match cli.story {
        Some(path) => match Story::load(&path) {
            Ok(story) => story,
            Err(e) => {
                log::error!("{}", e);
                std::process::exit(1);
            }
        },
        None => default_story(),
    };

    // --------------- Raylib window & render target ---------------
    let (mut rl, thread) = raylib::init()
        .size(config.window_width as i32, config.window_height as i32)
        .resizable()
        .title("Auriga")
        .build();
    rl.set_target_fps(config.target_fps);
    rl.set_exit_key(None);

    let render_target =
        match RenderTarget::new(&mut rl, &thread, config.render_width, config.render_height) {
            Ok(target) => target,
            Err(e) => {
                log::error!("{}", e);
                std::process::exit(1);
            }
        };

    // --------------- ECS world + resources ---------------
    let mut world = World::new();
    world.insert_resource(WorldTime::default());
    world.insert_resource(ScreenSize::new(
        config.render_width as i32,
        config.render_height as i32,
    ));
    world.insert_resource(WindowSize {
        w: rl.get_screen_width(),
        h: rl.get_screen_height(),
    });
    world.insert_resource(config);
    world.insert_resource(InputState::default());
    world.insert_resource(GameState::new(story));
    world.insert_resource(FlowState::new());
    world.insert_resource(NextFlowState::new());
    world.insert_non_send_resource(render_target);
    world.insert_non_send_resource(TextureStore::new());
    world.insert_non_send_resource(rl);
    world.insert_non_send_resource(thread);

    world.spawn(Observer::new(observe_flow_change_event));
    world.spawn(Observer::new(pointer_down_observer));
    world.spawn(Observer::new(switch_debug_observer));
    world.spawn(Observer::new(switch_fullscreen_observer));

    let mut systems_store = SystemsStore::new();
    systems_store.insert("setup", world.register_system(game::setup));
    systems_store.insert("enter_play", world.register_system(game::enter_play));
    world.insert_resource(systems_store);

    world.flush();

    world.resource_mut::<NextFlowState>().set(FlowStates::Setup);
    world.trigger(FlowChangedEvent {});

    let mut update = Schedule::default();
    update.add_systems(update_input_state);
    update.add_systems(check_pending_flow.after(update_input_state));
    update.add_systems(apply_gameconfig_changes.run_if(state_is_playing));
    update.add_systems(
        dialog_reveal_system
            .run_if(state_is_playing)
            .after(update_input_state),
    );
    update.add_systems(
        render_system
            .after(dialog_reveal_system)
            .after(apply_gameconfig_changes),
    );

    update
        .initialize(&mut world)
        .expect("Failed to initialize schedule");

    // --------------- Main loop ---------------
    while !world
        .non_send_resource::<raylib::RaylibHandle>()
        .window_should_close()
    {
        let (dt, w, h) = {
            let rl = world.non_send_resource::<raylib::RaylibHandle>();
            (rl.get_frame_time(), rl.get_screen_width(), rl.get_screen_height())
        };
        world.resource_mut::<WorldTime>().advance(dt);
        {
            let mut window_size = world.resource_mut::<WindowSize>();
            window_size.w = w;
            window_size.h = h;
        }

        update.run(&mut world);

        world.clear_trackers();
    }
    log::info!("Window closed, bye!");
}
