//! Application startup
//!
//! Builds the Bevy `App`: validated CLI arguments, resolved settings and
//! theme, window and logging configuration, and the UI plugin.

use crate::core::cli::CliArgs;
use crate::core::settings::FontpeekSettings;
use crate::core::state::{Browser, OpenFolderEvent, ShowFileEvent};
use crate::ui::theme::CurrentTheme;
use crate::ui::FontpeekUiPlugin;
use anyhow::Result;
use bevy::log::LogPlugin;
use bevy::prelude::*;
use bevy::window::WindowResolution;
use bevy::winit::WinitSettings;

pub fn create_app(cli_args: CliArgs) -> Result<App> {
    cli_args
        .validate()
        .map_err(|message| anyhow::anyhow!(message))?;

    let settings = FontpeekSettings::resolve(&cli_args);
    let theme = CurrentTheme::new(settings.theme);
    let clear_color = theme.background_color();

    let mut app = App::new();
    app.insert_resource(cli_args)
        .insert_resource(settings)
        .insert_resource(theme)
        .insert_resource(ClearColor(clear_color))
        // Event-driven redraws; the app is idle between user actions.
        .insert_resource(WinitSettings::desktop_app())
        .add_plugins(
            DefaultPlugins
                .set(WindowPlugin {
                    primary_window: Some(Window {
                        title: format!("Fontpeek v{}", env!("CARGO_PKG_VERSION")),
                        resolution: WindowResolution::new(860.0, 540.0),
                        ..default()
                    }),
                    ..default()
                })
                .set(configure_logging()),
        )
        .add_plugins(FontpeekUiPlugin)
        .add_systems(Startup, open_startup_path)
        .add_systems(Update, exit_on_esc);

    Ok(app)
}

/// Quiet down the render stack; keep our own logs at info in debug builds.
fn configure_logging() -> LogPlugin {
    if cfg!(debug_assertions) {
        LogPlugin {
            level: bevy::log::Level::INFO,
            filter: "fontpeek=info,bevy_render=warn,bevy_winit=warn,wgpu=warn,winit=warn"
                .to_string(),
            ..default()
        }
    } else {
        LogPlugin {
            level: bevy::log::Level::WARN,
            filter: "wgpu=error,winit=error".to_string(),
            ..default()
        }
    }
}

/// Applies `--open` once the shell is up, going through the same events
/// the buttons use.
fn open_startup_path(
    cli_args: Res<CliArgs>,
    mut browser: ResMut<Browser>,
    mut show_events: EventWriter<ShowFileEvent>,
    mut folder_events: EventWriter<OpenFolderEvent>,
) {
    let Some(path) = &cli_args.open else {
        return;
    };
    if path.is_dir() {
        folder_events.write(OpenFolderEvent { dir: path.clone() });
    } else {
        browser.set_single_file(path);
        show_events.write(ShowFileEvent { path: path.clone() });
    }
}

fn exit_on_esc(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut exit_events: EventWriter<AppExit>,
) {
    if keyboard.just_pressed(KeyCode::Escape) {
        exit_events.write(AppExit::Success);
    }
}
