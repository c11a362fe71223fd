//! Keeping the terminal usable when the process ends abruptly

/// Make the cursor visible again; cliclack hides it while a prompt is active
pub fn restore_cursor() {
    let _ = console::Term::stderr().show_cursor();
}

/// Restore the cursor on panic and exit with 130 on Ctrl+C
///
/// Ctrl+C inside a prompt is read as a key press and surfaces as a cancelled
/// prompt instead; this handler covers the rest of the run.
pub fn install_terminal_guards() {
    let default_panic = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        restore_cursor();
        default_panic(info);
    }));

    ctrlc::set_handler(move || {
        restore_cursor();
        std::process::exit(130);
    })
    .ok();
}
