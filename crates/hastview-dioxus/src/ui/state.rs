/// Open/closed flag owned by a single rendered spoiler
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SpoilerState {
    shown: bool,
}

impl SpoilerState {
    pub fn is_shown(self) -> bool {
        self.shown
    }

    pub fn toggle(&mut self) {
        self.shown = !self.shown;
    }

    /// Modifier class on the spoiler container. Stylesheets key icon and
    /// content visibility off this.
    pub fn class(self) -> &'static str {
        if self.shown {
            "spoiler--show"
        } else {
            "spoiler--hide"
        }
    }
}
