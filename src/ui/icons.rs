pub struct Icons;

impl Icons {
    pub const DATABASE: &str = "🗄️";
    pub const CHECK: &str = "✅";
    pub const CROSS: &str = "❌";
    pub const WARN: &str = "⚠️";
    pub const INFO: &str = "ℹ️";
    pub const KEY: &str = "🔑";
    pub const EMPTY: &str = "∅";
}
