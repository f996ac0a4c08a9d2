use folio_ids::SceneID;

/// Scenes that receive a callback on every host frame, in subscription order.
#[derive(Debug, Default)]
pub struct FrameLoop {
    subscribers: Vec<SceneID>,
}

impl FrameLoop {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe(&mut self, scene: SceneID) {
        if !self.subscribers.contains(&scene) {
            self.subscribers.push(scene);
        }
    }

    /// Returns whether `scene` was subscribed.
    pub fn unsubscribe(&mut self, scene: SceneID) -> bool {
        let before = self.subscribers.len();
        self.subscribers.retain(|&s| s != scene);
        self.subscribers.len() != before
    }

    pub fn is_subscribed(&self, scene: SceneID) -> bool {
        self.subscribers.contains(&scene)
    }

    pub fn append_subscribers(&self, out: &mut Vec<SceneID>) {
        out.extend_from_slice(&self.subscribers);
    }

    pub fn len(&self) -> usize {
        self.subscribers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.subscribers.is_empty()
    }
}
