// src/client/clipboard.rs
use cli_clipboard::{ClipboardContext, ClipboardProvider};

/// Somewhere the copy button can put text.
pub trait Clipboard {
    fn set_text(&mut self, text: &str) -> Result<(), String>;
}

/// The OS clipboard.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClipboard;

impl Clipboard for SystemClipboard {
    fn set_text(&mut self, text: &str) -> Result<(), String> {
        ClipboardContext::new()
            .and_then(|mut ctx| ctx.set_contents(text.to_owned()))
            .map_err(|e| e.to_string())
    }
}
