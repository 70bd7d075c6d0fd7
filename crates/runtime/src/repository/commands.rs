use game_core::{CommandSink, ProductionRequest, UnitAction, UnitTag};

/// [`CommandSink`] that records everything in emission order.
///
/// Used by the replay client and tests in place of a live engine link.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CommandBuffer {
    actions: Vec<(UnitTag, UnitAction)>,
    production: Vec<ProductionRequest>,
}

impl CommandBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn actions(&self) -> &[(UnitTag, UnitAction)] {
        &self.actions
    }

    pub fn production(&self) -> &[ProductionRequest] {
        &self.production
    }

    /// Actions addressed to `tag`, oldest first.
    pub fn actions_for(&self, tag: UnitTag) -> Vec<UnitAction> {
        self.actions
            .iter()
            .filter_map(|(t, action)| (*t == tag).then_some(*action))
            .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.actions.is_empty() && self.production.is_empty()
    }
}

impl CommandSink for CommandBuffer {
    fn submit(&mut self, tag: UnitTag, action: UnitAction) {
        self.actions.push((tag, action));
    }

    fn request_production(&mut self, request: ProductionRequest) {
        self.production.push(request);
    }
}
