use std::io;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;

use quill::cli::CliArgs;
use quill::commands::Cmd;
use quill::config::EditorConfig;
use quill::input::KeyDecoder;
use quill::keymap::key_to_msg;
use quill::model::AppModel;
use quill::terminal::{window_size, RawModeGuard, TtyInput};
use quill::update::update;
use quill::view;

fn main() -> ExitCode {
    quill::tracing::init();
    let args = CliArgs::parse();
    let config = EditorConfig::load();

    match run(args, config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            // The raw-mode guard has already restored the display by the
            // time the error reaches us
            eprintln!("quill: {err:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: CliArgs, config: EditorConfig) -> Result<()> {
    let mut model = AppModel::new(&config, args.file).context("failed to open file")?;
    model.set_status("HELP: Ctrl-S = save | Ctrl-Q = quit");

    let _raw = RawModeGuard::enable().context("failed to enable raw mode")?;
    let mut tty = TtyInput::stdin();
    let mut decoder = KeyDecoder::new(TtyInput::stdin());
    let mut out = io::stdout();

    // Decode one token, apply it, render one frame. The bounded read inside
    // the decoder is the only suspension point; its timeout drives the
    // periodic redraw that expires the message bar.
    loop {
        let (rows, cols) = window_size(&mut tty).context("failed to query terminal size")?;
        model
            .editor
            .update_layout(rows, cols, model.document.line_count());
        model.editor.scroll(&model.document);
        view::render(&mut out, &model).context("failed to write frame")?;

        let Some(key) = decoder.next_token().context("failed to read input")? else {
            continue;
        };
        let Some(msg) = key_to_msg(model.mode, key) else {
            continue;
        };
        if update(&mut model, msg) == Some(Cmd::Quit) {
            break;
        }
    }
    Ok(())
}
