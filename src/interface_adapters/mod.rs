// Interface adapters: wire protocol, key mapping, and the stdio transport.

pub mod console;
pub mod keymap;
pub mod protocol;
pub mod state;
