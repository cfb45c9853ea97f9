// Id generation seam for user-created widgets

pub trait IdGenerator: Send + Sync {
    /// Returns an id not handed out before in this session
    fn next_id(&self) -> String;
}
