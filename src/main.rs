// What you SEE:
// • A white canvas under a one-line header.
// • E drops a white egg ("e"), G drops yolks ("gg"), left to right, row by row.
// • R wipes the canvas. D saves it as egg.png. Esc closes the dialog.
// • When nothing fits any more a dialog says so.

mod catalog;
mod config;
mod draw;
mod error;
mod export;
mod hud;
mod input;
mod layout;
mod notice;
mod session;
mod types;

use std::path::Path;

use catalog::SpriteLoader;
use clap::Parser;
use config::Config;
use draw::Drawer;
use error::Error;
use hud::Chrome;
use input::Command;
use log::{debug, info, warn};
use session::Session;

fn main() -> Result<(), Error> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = Config::parse();
    config.validate()?;

    /* --- Sprites load in the background ---
       Visual: the canvas says "loading..." until both are in. */
    let mut loader = SpriteLoader::spawn(config.narrow_source(), config.wide_source(), config.size_divider());

    let mut session = Session::new(config.bounds(), config.layout_rules());
    let chrome = Chrome::new(config.bounds());
    let mut drawer = Drawer::new(hud::TITLE, chrome.width, chrome.height, config.export_enabled())?;
    let mut screen = chrome.frame();
    info!(
        "canvas {}x{}, export {}, reserve for yolks {}",
        config.width,
        config.height,
        if config.export_enabled() { "on" } else { "off" },
        if config.no_reserve { "off" } else { "on" },
    );

    /* ------------------------------ Main loop ------------------------------ */
    while drawer.is_open() {
        // 1) Readiness join: both sprites in -> placements accepted.
        if !session.is_ready() {
            if let Some(catalog) = loader.poll()? {
                let sizes = catalog.sizes();
                info!(
                    "sprites ready: e {}x{}, gg {}x{}",
                    sizes.narrow.width, sizes.narrow.height, sizes.wide.width, sizes.wide.height
                );
                session.attach(catalog);
            }
        }

        // 2) Inputs, one command at a time.
        for command in drawer.commands() {
            handle(&mut session, command, &config.output);
        }

        // 3) Compose and present.
        chrome.compose(&mut screen, &session, drawer.held(), config.export_enabled());
        drawer.present(&screen)?;
    }

    Ok(())
}

fn handle(session: &mut Session, command: Command, output: &Path) {
    match command {
        Command::AddE => {
            let outcome = session.add_e();
            debug!("E -> {outcome:?}, cursor {:?}", session.cursor());
        }
        Command::AddGg => {
            let outcome = session.add_gg();
            debug!("G -> {outcome:?}, cursor {:?}, filled {}", session.cursor(), session.is_filled());
        }
        Command::Reset => {
            session.reset();
            info!("canvas reset");
        }
        Command::Export => match session.export(output) {
            Ok(true) => {}
            Ok(false) => debug!("nothing to export yet"),
            // A failed write should not end the session.
            Err(e) => warn!("{e}"),
        },
        Command::Dismiss => session.dismiss(),
    }
}
