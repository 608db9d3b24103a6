/// Host channel for advisory messages shown to the user.
pub trait MessageSink: Send + Sync {
    fn show_information(&self, message: &str);
}
