/// Session-level UI state that is not part of the map screen.
#[derive(Default)]
pub struct UIState {
    pub log_messages: Vec<String>,
    pub show_about: bool,
    pub show_log: bool,
}

impl UIState {
    const MAX_LOG: usize = 200;

    pub fn add_log(&mut self, msg: String) {
        self.log_messages.push(msg);
        if self.log_messages.len() > Self::MAX_LOG {
            let excess = self.log_messages.len() - Self::MAX_LOG;
            self.log_messages.drain(..excess);
        }
    }
}
