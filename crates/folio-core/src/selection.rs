/// The single selected skill and the echo-free handoff to URL sync.
///
/// User actions queue an outgoing change; changes applied from outside
/// (e.g. a query parameter at load) do not, so they never bounce back.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SelectionState {
    selected: Option<String>,
    outgoing: Option<Option<String>>,
}

impl SelectionState {
    pub fn selected(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    pub fn is_selected(&self, id: &str) -> bool {
        self.selected.as_deref() == Some(id)
    }

    pub fn select(&mut self, id: &str) {
        if self.is_selected(id) {
            return;
        }
        self.selected = Some(id.to_string());
        self.outgoing = Some(self.selected.clone());
    }

    pub fn clear(&mut self) {
        if self.selected.take().is_some() {
            self.outgoing = Some(None);
        }
    }

    pub fn apply_external(&mut self, id: Option<&str>) {
        self.selected = id.map(str::to_string);
        self.outgoing = None;
    }

    /// The latest user-driven change since the last call, if any.
    pub fn take_outgoing(&mut self) -> Option<Option<String>> {
        self.outgoing.take()
    }
}
